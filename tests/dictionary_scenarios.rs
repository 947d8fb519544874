//
// Copyright 2020 bplist Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

use sfv::{parse_dictionary, to_dictionary_bytes, BareItem};

#[test]
fn test_dictionary_with_decimal_and_token_parameters_round_trips() {
    let input = b"primary=bar;q=1.0, secondary=baz;q=0.5;fallback=last, \
acceptablejurisdictions=(AU;q=1.0 GB;q=0.9 FR);fallback=\"primary\"";
    let dict = parse_dictionary(input).unwrap();

    let keys: Vec<&str> = dict.keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, vec!["primary", "secondary", "acceptablejurisdictions"]);

    let secondary = dict
        .get(&sfv::Key::new("secondary").unwrap())
        .unwrap()
        .as_item()
        .unwrap();
    let param_keys: Vec<&str> = secondary.parameters.keys().map(|k| k.as_str()).collect();
    assert_eq!(param_keys, vec!["q", "fallback"]);
    assert_eq!(
        secondary.parameters.get(&sfv::Key::new("fallback").unwrap()),
        Some(&BareItem::Token(sfv::Token::new("last").unwrap()))
    );

    let bytes = to_dictionary_bytes(&dict).unwrap();
    assert_eq!(bytes, input.to_vec());
}

#[test]
fn test_boolean_shorthand_member_with_parameters() {
    let dict = parse_dictionary(b"a;x=1;y=2").unwrap();
    let entry = dict.get(&sfv::Key::new("a").unwrap()).unwrap().as_item().unwrap();
    assert_eq!(entry.bare_item, BareItem::Boolean(true));
    assert_eq!(entry.parameters.len(), 2);
}

#[test]
fn test_overwritten_key_keeps_first_position_and_latest_value() {
    let dict = parse_dictionary(b"a=1, b=2, a=3").unwrap();
    let keys: Vec<&str> = dict.keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, vec!["a", "b"]);

    let a = dict.get(&sfv::Key::new("a").unwrap()).unwrap().as_item().unwrap();
    assert_eq!(a.bare_item, BareItem::Integer(3));
}

#[test]
fn test_empty_dictionary_round_trips_to_empty_bytes() {
    let dict = parse_dictionary(b"").unwrap();
    assert!(dict.is_empty());
    assert_eq!(to_dictionary_bytes(&dict).unwrap(), Vec::<u8>::new());
}

#[test]
fn test_invalid_key_is_rejected() {
    assert!(parse_dictionary(b"Not-Lowercase=1").is_err());
}
