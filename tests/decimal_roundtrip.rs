//
// Copyright 2020 bplist Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

use sfv::{parse_item, to_item_bytes, BareItem, PseudoDecimal};

#[test]
fn test_decimal_with_single_fraction_digit_round_trips() {
    let item = parse_item(b"4.5").unwrap();
    let decimal = item.bare_item.as_decimal().unwrap();
    assert_eq!((decimal.mantissa(), decimal.exponent()), (45, -1));
    assert_eq!(to_item_bytes(&item).unwrap(), b"4.5");
}

#[test]
fn test_decimal_with_three_fraction_digits_round_trips() {
    let item = parse_item(b"987654321.123").unwrap();
    assert_eq!(to_item_bytes(&item).unwrap(), b"987654321.123");
}

#[test]
fn test_decimal_negative_round_trips() {
    let item = parse_item(b"-2.5").unwrap();
    assert_eq!(item.bare_item, BareItem::Decimal(PseudoDecimal::new(-25, -1).unwrap()));
    assert_eq!(to_item_bytes(&item).unwrap(), b"-2.5");
}

#[test]
fn test_decimal_rejects_too_many_fraction_digits() {
    assert!(parse_item(b"1.2345").is_err());
}

#[test]
fn test_decimal_rejects_too_many_integer_digits() {
    assert!(parse_item(b"1234567890123.1").is_err());
}

#[test]
fn test_decimal_requires_digit_after_point() {
    assert!(parse_item(b"1.").is_err());
}

#[test]
fn test_pseudo_decimal_from_f64_rounds_and_canonicalizes() {
    let decimal = PseudoDecimal::from_f64(0.5).unwrap();
    assert_eq!(decimal.canonicalize().to_string(), "0.5");
}
