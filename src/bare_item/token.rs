//
// Copyright 2020 bplist Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

//! A validated `Token` bare item.
//!
//! ```abnf,ignore,no_run
//! sf-token = ( ALPHA / "*" ) *( tchar / ":" / "/" )
//! ```

use std::convert::TryFrom;
use std::fmt;
use std::ops::Deref;

use crate::byte::{is_token_char, is_token_leading};
use crate::error::Error;

/// A restricted ASCII identifier, validated against the `sf-token` grammar at
/// construction time. Dereferences to `&str`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token(String);

impl Token {
    /// Validates `value` against the token grammar and wraps it.
    pub fn new(value: impl Into<String>) -> Result<Self, Error> {
        let value = value.into();
        if is_valid_token(&value) {
            Ok(Token(value))
        } else {
            Err(Error::InvalidToken)
        }
    }

    /// Returns the underlying string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Token`, returning the underlying `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

/// Returns true if `s` satisfies the `sf-token` grammar: a non-empty ASCII
/// string whose first byte is a letter or `*` and whose remaining bytes are
/// each a `tchar`, `:`, or `/`.
pub fn is_valid_token(s: &str) -> bool {
    let bytes = s.as_bytes();
    match bytes.split_first() {
        Some((&leading, rest)) => is_token_leading(leading) && rest.iter().all(|&b| is_token_char(b)),
        None => false,
    }
}

impl Deref for Token {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Token {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Error> {
        Token::new(value)
    }
}

impl TryFrom<String> for Token {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Error> {
        Token::new(value)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_token_accepts_letters_and_punctuation() {
        assert!(is_valid_token("Sec-CH-Example"));
        assert!(is_valid_token("*foo"));
        assert!(is_valid_token("a/b:c"));
    }

    #[test]
    fn test_is_valid_token_rejects_digit_leading() {
        assert!(!is_valid_token("1abc"));
        assert!(!is_valid_token(""));
    }

    #[test]
    fn test_is_valid_token_rejects_disallowed_byte() {
        assert!(!is_valid_token("a b"));
        assert!(!is_valid_token("a,b"));
    }

    #[test]
    fn test_new_rejects_invalid_token() {
        assert!(matches!(Token::new("1abc"), Err(Error::InvalidToken)));
    }

    #[test]
    fn test_deref_and_display() {
        let token = Token::new("foo123").unwrap();
        assert_eq!(&*token, "foo123");
        assert_eq!(token.to_string(), "foo123");
    }
}
