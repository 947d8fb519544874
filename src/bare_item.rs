//
// Copyright 2020 bplist Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

//! # The primitive value kinds of a structured field value.
//!
//! A `BareItem` is one node of the parse tree, stripped of any attached
//! parameters (those live on the enclosing `Item`). Every variant corresponds
//! to exactly one of the eight primitive grammar productions in RFC 9651.

mod byte_sequence;
mod decimal;
mod display_string;
mod string;
mod token;

pub use byte_sequence::ByteSequence;
pub use decimal::PseudoDecimal;
pub use display_string::DisplayString;
pub use string::SfString;
pub use token::{is_valid_token, Token};

use std::fmt;

/// The largest magnitude an `Integer` or a `Decimal`'s mantissa may carry:
/// 15 decimal digits, per the `sf-integer`/`sf-decimal` length limits.
pub const MAX_INTEGER_MAGNITUDE: i64 = 999_999_999_999_999;

/// One primitive value in a structured field value parse tree.
///
/// `Boolean`, `Integer`, and `Date` are stored as plain primitives since
/// their grammar carries no further structure to validate beyond range.
#[derive(Clone, PartialEq, Debug)]
pub enum BareItem {
    /// `?0` or `?1`.
    Boolean(bool),
    /// A signed integer, magnitude at most [`MAX_INTEGER_MAGNITUDE`].
    Integer(i64),
    /// A fixed-point decimal.
    Decimal(PseudoDecimal),
    /// A quoted string of printable ASCII.
    String(SfString),
    /// A restricted ASCII identifier.
    Token(Token),
    /// An undecoded base64 payload.
    ByteSequence(ByteSequence),
    /// Signed seconds since the Unix epoch (RFC 9651 only).
    Date(i64),
    /// A decoded Unicode string (RFC 9651 only).
    DisplayString(DisplayString),
}

impl BareItem {
    /// Returns true if this is the `Boolean` variant holding `true`.
    pub fn is_true(&self) -> bool {
        matches!(self, BareItem::Boolean(true))
    }

    /// Returns the boolean value, if this is a `Boolean`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            BareItem::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer value, if this is an `Integer`.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            BareItem::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the decimal value, if this is a `Decimal`.
    pub fn as_decimal(&self) -> Option<PseudoDecimal> {
        match self {
            BareItem::Decimal(d) => Some(*d),
            _ => None,
        }
    }

    /// Returns the string slice, if this is a `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            BareItem::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns the token slice, if this is a `Token`.
    pub fn as_token(&self) -> Option<&str> {
        match self {
            BareItem::Token(t) => Some(t.as_str()),
            _ => None,
        }
    }

    /// Returns the undecoded base64 slice, if this is a `ByteSequence`.
    pub fn as_byte_sequence(&self) -> Option<&str> {
        match self {
            BareItem::ByteSequence(b) => Some(b.as_str()),
            _ => None,
        }
    }

    /// Returns the date value, if this is a `Date`.
    pub fn as_date(&self) -> Option<i64> {
        match self {
            BareItem::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Returns the display string slice, if this is a `DisplayString`.
    pub fn as_display_string(&self) -> Option<&str> {
        match self {
            BareItem::DisplayString(d) => Some(d.as_str()),
            _ => None,
        }
    }
}

impl From<bool> for BareItem {
    fn from(value: bool) -> Self {
        BareItem::Boolean(value)
    }
}

impl From<i64> for BareItem {
    fn from(value: i64) -> Self {
        BareItem::Integer(value)
    }
}

impl From<PseudoDecimal> for BareItem {
    fn from(value: PseudoDecimal) -> Self {
        BareItem::Decimal(value)
    }
}

impl From<SfString> for BareItem {
    fn from(value: SfString) -> Self {
        BareItem::String(value)
    }
}

impl From<Token> for BareItem {
    fn from(value: Token) -> Self {
        BareItem::Token(value)
    }
}

impl From<ByteSequence> for BareItem {
    fn from(value: ByteSequence) -> Self {
        BareItem::ByteSequence(value)
    }
}

impl From<DisplayString> for BareItem {
    fn from(value: DisplayString) -> Self {
        BareItem::DisplayString(value)
    }
}

impl fmt::Display for BareItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BareItem::Boolean(true) => write!(f, "?1"),
            BareItem::Boolean(false) => write!(f, "?0"),
            BareItem::Integer(n) => write!(f, "{}", n),
            BareItem::Decimal(d) => write!(f, "{}", d),
            BareItem::String(s) => write!(f, "\"{}\"", s),
            BareItem::Token(t) => write!(f, "{}", t),
            BareItem::ByteSequence(b) => write!(f, "{}", b),
            BareItem::Date(d) => write!(f, "@{}", d),
            BareItem::DisplayString(d) => write!(f, "%\"{}\"", d),
        }
    }
}
