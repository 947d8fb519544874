//
// Copyright 2020 bplist Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

use std;
use std::fmt::{self, Display};

pub type Result<T> = std::result::Result<T, Error>;

/// Structured field value parsing and serialization error.
///
/// Every variant is fully determined by which grammar rule failed; none
/// carries a `String` payload, so the type stays `Copy`.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum Error {
    /// Non-whitespace bytes remained after a complete field value.
    InvalidTrailingBytes,
    /// A list violated separator or terminator rules.
    InvalidList,
    /// A dictionary violated separator or terminator rules.
    InvalidDictionary,
    /// An inner list is missing its close `)` or has a non-space separator.
    InvalidInnerList,
    /// The first byte of a bare item does not begin any recognized type.
    InvalidItem,
    /// A dictionary, parameter, or emitted key fails the key grammar.
    InvalidKey,
    /// An integer or decimal violated a length, digit-count, or magnitude rule.
    InvalidIntegerOrDecimal,
    /// A string contained a disallowed byte, a bad escape, or was unterminated.
    InvalidString,
    /// A byte sequence contained a disallowed byte or was unterminated.
    InvalidByteSequence,
    /// A boolean's `?` was not followed by `0` or `1`.
    InvalidBoolean,
    /// A token emission contained characters outside the token grammar.
    InvalidToken,
    /// A date violated a parse or magnitude rule.
    InvalidDate,
    /// A display string's hex escape, byte range, or UTF-8 validation failed,
    /// or it was unterminated.
    InvalidDisplayString,
    /// A binding layer requested a dictionary key that is not present.
    MissingKey,
    /// A binding layer requested a bare item of the wrong kind.
    InvalidTypeForItem,
    /// A binding layer's integer value does not fit the target type.
    IntegerOutOfRange,
    /// A binding layer requested a list index out of range.
    IndexOutOfRange,
}

impl Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidTrailingBytes => formatter.write_str("trailing bytes after field value"),
            Error::InvalidList => formatter.write_str("invalid list"),
            Error::InvalidDictionary => formatter.write_str("invalid dictionary"),
            Error::InvalidInnerList => formatter.write_str("invalid inner list"),
            Error::InvalidItem => formatter.write_str("invalid item"),
            Error::InvalidKey => formatter.write_str("invalid key"),
            Error::InvalidIntegerOrDecimal => formatter.write_str("invalid integer or decimal"),
            Error::InvalidString => formatter.write_str("invalid string"),
            Error::InvalidByteSequence => formatter.write_str("invalid byte sequence"),
            Error::InvalidBoolean => formatter.write_str("invalid boolean"),
            Error::InvalidToken => formatter.write_str("invalid token"),
            Error::InvalidDate => formatter.write_str("invalid date"),
            Error::InvalidDisplayString => formatter.write_str("invalid display string"),
            Error::MissingKey => formatter.write_str("missing key"),
            Error::InvalidTypeForItem => formatter.write_str("invalid type for item"),
            Error::IntegerOutOfRange => formatter.write_str("integer out of range"),
            Error::IndexOutOfRange => formatter.write_str("index out of range"),
        }
    }
}

impl std::error::Error for Error {}
