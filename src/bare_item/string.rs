//
// Copyright 2020 bplist Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

//! The `String` bare item kind: a quoted run of printable ASCII.
//!
//! Not to be confused with [`super::display_string::DisplayString`], which
//! carries arbitrary Unicode. `SfString` is restricted to `%x20-7E` once its
//! backslash escapes are resolved.
//!
//! ```abnf,ignore,no_run
//! sf-string = DQUOTE *chr DQUOTE
//! chr       = unescaped / escaped
//! unescaped = %x20-21 / %x23-5B / %x5D-7E
//! escaped   = "\" ( DQUOTE / "\" )
//! ```

use std::convert::TryFrom;
use std::fmt;
use std::ops::Deref;

use crate::byte::is_string_char;
use crate::error::Error;

/// A decoded `sf-string` value: printable ASCII only, already unescaped.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SfString(String);

impl SfString {
    /// Validates that `value` contains only bytes in `[0x20, 0x7E]` and
    /// wraps it. This is the *decoded* form: callers pass the string with
    /// backslash escapes already resolved, not the wire-encoded form.
    pub fn new(value: impl Into<String>) -> Result<Self, Error> {
        let value = value.into();
        if value.bytes().all(is_string_char) {
            Ok(SfString(value))
        } else {
            Err(Error::InvalidString)
        }
    }

    /// Returns the decoded string as a slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `SfString`, returning the underlying `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for SfString {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for SfString {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Error> {
        SfString::new(value)
    }
}

impl TryFrom<String> for SfString {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Error> {
        SfString::new(value)
    }
}

impl fmt::Display for SfString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_printable_ascii() {
        assert!(SfString::new("hello world").is_ok());
    }

    #[test]
    fn test_new_rejects_control_bytes() {
        assert!(matches!(
            SfString::new("hello\tworld"),
            Err(Error::InvalidString)
        ));
        assert!(matches!(SfString::new("a\nb"), Err(Error::InvalidString)));
    }

    #[test]
    fn test_deref_and_display() {
        let s = SfString::new("quoted content").unwrap();
        assert_eq!(&*s, "quoted content");
        assert_eq!(s.to_string(), "quoted content");
    }
}
