//
// Copyright 2020 bplist Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

//! An undecoded `ByteSequence` bare item.
//!
//! The core never base64-decodes a byte sequence; it stores and re-emits the
//! enclosed ASCII characters verbatim, delegating decoding to a caller-owned
//! base64 codec.
//!
//! ```abnf,ignore,no_run
//! sf-binary = ":" *( base64-char ) ":"
//! ```

use std::fmt;
use std::ops::Deref;

use crate::byte::is_base64_char;
use crate::error::Error;

/// An undecoded base64 ASCII payload, as it appeared between the colons of a
/// `sf-binary`, without the delimiters.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ByteSequence(String);

impl ByteSequence {
    /// Validates that `value` contains only base64 alphabet characters
    /// (`A-Za-z0-9+/=`) and wraps it. An empty string is accepted.
    pub fn new(value: impl Into<String>) -> Result<Self, Error> {
        let value = value.into();
        if value.bytes().all(is_base64_char) {
            Ok(ByteSequence(value))
        } else {
            Err(Error::InvalidByteSequence)
        }
    }

    /// Returns the undecoded base64 characters as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `ByteSequence`, returning the underlying `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for ByteSequence {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ByteSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}:", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_valid_base64_alphabet() {
        assert!(ByteSequence::new("AQIDBA==").is_ok());
    }

    #[test]
    fn test_new_accepts_empty() {
        assert!(ByteSequence::new("").is_ok());
    }

    #[test]
    fn test_new_rejects_disallowed_byte() {
        assert!(matches!(
            ByteSequence::new("not valid!"),
            Err(Error::InvalidByteSequence)
        ));
    }

    #[test]
    fn test_display_adds_delimiters() {
        let bytes = ByteSequence::new("AQIDBA==").unwrap();
        assert_eq!(bytes.to_string(), ":AQIDBA==:");
    }
}
