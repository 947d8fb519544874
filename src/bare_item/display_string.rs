//
// Copyright 2020 bplist Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

//! A `DisplayString` bare item (RFC 9651 only).
//!
//! On the wire this is `%"` followed by a run of unescaped printable ASCII
//! bytes and `%xx` hex escapes, terminated by `"`; decoded, it is an
//! arbitrary Unicode string. Since every Rust `String` is already valid
//! UTF-8, constructing a `DisplayString` from one can never fail — the
//! fallibility lives entirely in the parser, which must validate the
//! assembled bytes before handing them to `String::from_utf8`.

use std::fmt;
use std::ops::Deref;

/// A decoded Unicode string carried by a structured field value.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct DisplayString(String);

impl DisplayString {
    /// Wraps an already-decoded Unicode string.
    pub fn new(value: impl Into<String>) -> Self {
        DisplayString(value.into())
    }

    /// Returns the decoded string as a slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `DisplayString`, returning the underlying `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for DisplayString {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl From<String> for DisplayString {
    fn from(value: String) -> Self {
        DisplayString(value)
    }
}

impl From<&str> for DisplayString {
    fn from(value: &str) -> Self {
        DisplayString(value.to_owned())
    }
}

impl fmt::Display for DisplayString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_wraps_unicode_content() {
        let display = DisplayString::new("füü");
        assert_eq!(display.as_str(), "füü");
    }

    #[test]
    fn test_deref_and_display() {
        let display = DisplayString::from("hello");
        assert_eq!(&*display, "hello");
        assert_eq!(display.to_string(), "hello");
    }
}
