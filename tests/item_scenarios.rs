//
// Copyright 2020 bplist Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

use sfv::{parse_item, to_item_bytes, BareItem, ByteSequence, DisplayString};

#[test]
fn test_item_with_integer_parameter_round_trips() {
    let input = b"5;bar=baz";
    let item = parse_item(input).unwrap();
    assert_eq!(item.bare_item, BareItem::Integer(5));

    let bytes = to_item_bytes(&item).unwrap();
    assert_eq!(bytes, input);
}

#[test]
fn test_byte_sequence_item_is_never_decoded() {
    let item = parse_item(b":AQIDBA==:").unwrap();
    assert_eq!(
        item.bare_item,
        BareItem::ByteSequence(ByteSequence::new("AQIDBA==").unwrap())
    );

    let bytes = to_item_bytes(&item).unwrap();
    assert_eq!(bytes, b":AQIDBA==:");
}

#[test]
fn test_display_string_round_trips_and_rejects_invalid_utf8() {
    let item = parse_item("%\"f%c3%bc%c3%bc\"".as_bytes()).unwrap();
    assert_eq!(
        item.bare_item,
        BareItem::DisplayString(DisplayString::new("füü"))
    );
    let bytes = to_item_bytes(&item).unwrap();
    assert_eq!(String::from_utf8(bytes).unwrap(), "%\"f%c3%bc%c3%bc\"");

    assert!(parse_item(b"%\"f%c3%28\"").is_err());
}

#[test]
fn test_date_item_round_trips() {
    let item = parse_item(b"@1659578233").unwrap();
    assert_eq!(item.bare_item, BareItem::Date(1_659_578_233));
    assert_eq!(to_item_bytes(&item).unwrap(), b"@1659578233");
}

#[test]
fn test_leading_and_trailing_space_is_tolerated_but_not_interior_garbage() {
    assert_eq!(
        parse_item(b"  5  ").unwrap().bare_item,
        BareItem::Integer(5)
    );
    assert!(parse_item(b"5 6").is_err());
}
