//
// Copyright 2020 bplist Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

//! Parsers for the eight primitive bare item grammar productions.

use crate::bare_item::{BareItem, ByteSequence, DisplayString, PseudoDecimal, SfString, Token};
use crate::byte::{hex_value, is_base64_char, is_digit, is_token_char, is_token_leading, DQUOTE, MINUS, PERIOD};
use crate::error::{Error, Result};

use super::Cursor;

/// Dispatches on the next byte to parse exactly one bare item.
pub(crate) fn parse_bare_item(cursor: &mut Cursor) -> Result<BareItem> {
    match cursor.peek() {
        Some(b) if b == MINUS || is_digit(b) => parse_integer_or_decimal(cursor),
        Some(DQUOTE) => parse_string(cursor),
        Some(b':') => parse_byte_sequence(cursor),
        Some(b'?') => parse_boolean(cursor),
        Some(b'@') => parse_date(cursor),
        Some(b'%') => parse_display_string(cursor),
        Some(b) if is_token_leading(b) => parse_token(cursor),
        _ => Err(Error::InvalidItem),
    }
}

/// Parses an `sf-integer` or `sf-decimal`, distinguished by whether a `.` is
/// encountered before the digit run ends.
fn parse_integer_or_decimal(cursor: &mut Cursor) -> Result<BareItem> {
    let negative = cursor.peek() == Some(MINUS);
    if negative {
        cursor.bump();
    }

    let int_digits = cursor.advance_while(is_digit);
    if int_digits.is_empty() || int_digits.len() > 15 {
        return Err(Error::InvalidIntegerOrDecimal);
    }

    if cursor.peek() != Some(PERIOD) {
        let magnitude: i64 = parse_digits(int_digits)?;
        let value = if negative { -magnitude } else { magnitude };
        return Ok(BareItem::Integer(value));
    }

    if int_digits.len() > 12 {
        return Err(Error::InvalidIntegerOrDecimal);
    }
    cursor.bump();

    let frac_digits = cursor.advance_while(is_digit);
    if frac_digits.is_empty() || frac_digits.len() > 3 {
        return Err(Error::InvalidIntegerOrDecimal);
    }

    let mantissa_digits: Vec<u8> = int_digits.iter().chain(frac_digits.iter()).copied().collect();
    let magnitude: i64 = parse_digits(&mantissa_digits)?;
    let mantissa = if negative { -magnitude } else { magnitude };
    let exponent = -(frac_digits.len() as i8);
    let decimal = PseudoDecimal::new(mantissa, exponent)?;
    Ok(BareItem::Decimal(decimal))
}

fn parse_digits(digits: &[u8]) -> Result<i64> {
    std::str::from_utf8(digits)
        .ok()
        .and_then(|s| s.parse::<i64>().ok())
        .ok_or(Error::InvalidIntegerOrDecimal)
}

/// Parses an `sf-string`: a quoted, possibly-escaped run of printable ASCII.
fn parse_string(cursor: &mut Cursor) -> Result<BareItem> {
    cursor.bump();

    let mut output = Vec::new();
    loop {
        match cursor.bump() {
            None => return Err(Error::InvalidString),
            Some(DQUOTE) => {
                let s = String::from_utf8(output).map_err(|_| Error::InvalidString)?;
                return Ok(BareItem::String(SfString::new(s)?));
            }
            Some(b'\\') => match cursor.bump() {
                Some(b @ DQUOTE) | Some(b @ b'\\') => output.push(b),
                _ => return Err(Error::InvalidString),
            },
            Some(b) if (0x20..=0x7E).contains(&b) => output.push(b),
            Some(_) => return Err(Error::InvalidString),
        }
    }
}

/// Parses an `sf-binary`: `:` followed by base64-alphabet bytes, then `:`.
fn parse_byte_sequence(cursor: &mut Cursor) -> Result<BareItem> {
    cursor.bump();
    let body = cursor.advance_while(is_base64_char);
    let body = std::str::from_utf8(body).map_err(|_| Error::InvalidByteSequence)?;
    cursor.expect_byte(b':', Error::InvalidByteSequence)?;
    Ok(BareItem::ByteSequence(ByteSequence::new(body)?))
}

/// Parses an `sf-boolean`: `?0` or `?1`.
fn parse_boolean(cursor: &mut Cursor) -> Result<BareItem> {
    cursor.bump();
    match cursor.bump() {
        Some(b'0') => Ok(BareItem::Boolean(false)),
        Some(b'1') => Ok(BareItem::Boolean(true)),
        _ => Err(Error::InvalidBoolean),
    }
}

/// Parses an `sf-token`: a letter or `*` followed by token characters.
fn parse_token(cursor: &mut Cursor) -> Result<BareItem> {
    let mut bytes = Vec::new();
    bytes.push(cursor.bump().ok_or(Error::InvalidItem)?);
    bytes.extend_from_slice(cursor.advance_while(is_token_char));
    let s = String::from_utf8(bytes).map_err(|_| Error::InvalidItem)?;
    Ok(BareItem::Token(Token::new(s)?))
}

/// Parses an `sf-date`: `@` followed by an integer (never a decimal).
fn parse_date(cursor: &mut Cursor) -> Result<BareItem> {
    cursor.bump();

    let negative = cursor.peek() == Some(MINUS);
    if negative {
        cursor.bump();
    }
    let digits = cursor.advance_while(is_digit);
    if digits.is_empty() || digits.len() > 15 || cursor.peek() == Some(PERIOD) {
        return Err(Error::InvalidDate);
    }
    let magnitude: i64 = std::str::from_utf8(digits)
        .ok()
        .and_then(|s| s.parse::<i64>().ok())
        .ok_or(Error::InvalidDate)?;
    Ok(BareItem::Date(if negative { -magnitude } else { magnitude }))
}

/// Parses an `sf-displaystring`: `%"` followed by unescaped printable ASCII
/// and `%xx` hex escapes, terminated by `"`.
fn parse_display_string(cursor: &mut Cursor) -> Result<BareItem> {
    cursor.bump();
    cursor.expect_byte(DQUOTE, Error::InvalidDisplayString)?;

    let mut output = Vec::new();
    loop {
        match cursor.bump() {
            None => return Err(Error::InvalidDisplayString),
            Some(DQUOTE) => {
                let s = String::from_utf8(output).map_err(|_| Error::InvalidDisplayString)?;
                return Ok(BareItem::DisplayString(DisplayString::new(s)));
            }
            Some(b'%') => {
                let hi = cursor.bump().and_then(hex_value).ok_or(Error::InvalidDisplayString)?;
                let lo = cursor.bump().and_then(hex_value).ok_or(Error::InvalidDisplayString)?;
                output.push(hi * 16 + lo);
            }
            Some(b) if b < 0x20 || b >= 0x7F => return Err(Error::InvalidDisplayString),
            Some(b) => output.push(b),
        }
    }
}
