//
// Copyright 2020 bplist Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

//! # sfv
//!
//! A parser and serializer for HTTP Structured Field Values, as defined by
//! [RFC 9651](https://www.rfc-editor.org/rfc/rfc9651.html) (and compatible
//! with the earlier draft that lacks `Date` and `Display String`).
//!
//! The crate transforms a byte slice holding one HTTP header field value
//! into a typed parse tree ([`Item`], [`List`], or [`Dictionary`]), and
//! inverts that transformation back into the canonical byte representation.
//! It performs no I/O, does not decode base64 byte sequences, and does not
//! bind the tree to host record types — those are left to callers.
//!
//! ```
//! use sfv::{parse_item, to_item_bytes};
//!
//! let item = parse_item(b"5;bar=baz").unwrap();
//! assert_eq!(item.bare_item.as_integer(), Some(5));
//!
//! let bytes = to_item_bytes(&item).unwrap();
//! assert_eq!(bytes, b"5;bar=baz");
//! ```

mod bare_item;
mod byte;
mod error;
mod item;
mod key;
mod ordered_map;
mod parser;
mod serializer;

pub use bare_item::{is_valid_token, BareItem, ByteSequence, DisplayString, PseudoDecimal, SfString, Token};
pub use error::{Error, Result};
pub use item::{BareInnerList, Dictionary, InnerList, Item, ItemOrInnerList, List, Parameters};
pub use key::{is_valid_key, Key};
pub use ordered_map::OrderedMap;
pub use parser::{parse_dictionary, parse_item, parse_list};
pub use serializer::{to_dictionary_bytes, to_item_bytes, to_list_bytes, Serializer};
