//
// Copyright 2020 bplist Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

use sfv::{parse_dictionary, parse_item, parse_list, Error};

#[test]
fn test_empty_item_input_is_invalid() {
    assert_eq!(parse_item(b""), Err(Error::InvalidItem));
}

#[test]
fn test_unrecognized_leading_byte_is_invalid_item() {
    assert_eq!(parse_item(b"!token"), Err(Error::InvalidItem));
}

#[test]
fn test_unterminated_string_is_invalid() {
    assert_eq!(parse_item(br#""unterminated"#), Err(Error::InvalidString));
}

#[test]
fn test_string_with_control_byte_is_invalid() {
    assert_eq!(parse_item(b"\"a\tb\""), Err(Error::InvalidString));
}

#[test]
fn test_unterminated_byte_sequence_is_invalid() {
    assert_eq!(parse_item(b":AQIDBA=="), Err(Error::InvalidByteSequence));
}

#[test]
fn test_malformed_boolean_is_invalid() {
    assert_eq!(parse_item(b"?2"), Err(Error::InvalidBoolean));
}

#[test]
fn test_trailing_bytes_after_item_are_invalid() {
    assert_eq!(parse_item(b"5 garbage"), Err(Error::InvalidTrailingBytes));
}

#[test]
fn test_trailing_comma_in_list_is_invalid() {
    assert_eq!(parse_list(b"1, 2,"), Err(Error::InvalidList));
}

#[test]
fn test_empty_member_between_commas_is_invalid() {
    assert_eq!(parse_list(b"1,,42"), Err(Error::InvalidList));
}

#[test]
fn test_trailing_comma_in_dictionary_is_invalid() {
    assert_eq!(parse_dictionary(b"a=1,"), Err(Error::InvalidDictionary));
}

#[test]
fn test_unterminated_inner_list_is_invalid() {
    assert_eq!(parse_list(b"(1 2"), Err(Error::InvalidInnerList));
}

#[test]
fn test_display_string_with_invalid_utf8_escape_is_invalid() {
    assert_eq!(parse_item(b"%\"f%c3%28\""), Err(Error::InvalidDisplayString));
}

#[test]
fn test_out_of_range_decimal_exponent_is_invalid() {
    assert_eq!(parse_item(b"1.2345"), Err(Error::InvalidIntegerOrDecimal));
}
