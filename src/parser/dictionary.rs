//
// Copyright 2020 bplist Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

//! Parser for the top-level `Dictionary` field kind.

use crate::bare_item::BareItem;
use crate::byte::COMMA;
use crate::error::{Error, Result};
use crate::item::{Dictionary, Item, ItemOrInnerList};

use super::item::{parse_item_or_inner_list, parse_key, parse_parameters};
use super::Cursor;

/// Parses a comma-separated `Dictionary` of `key[=value]` entries. An input
/// that is empty (after the entry point's leading-space strip) yields an
/// empty dictionary.
pub(crate) fn parse_dictionary(cursor: &mut Cursor) -> Result<Dictionary> {
    let mut dict = Dictionary::new();
    if cursor.is_empty() {
        return Ok(dict);
    }

    loop {
        let key = parse_key(cursor)?;
        let value = if cursor.peek() == Some(b'=') {
            cursor.bump();
            parse_item_or_inner_list(cursor)?
        } else {
            let parameters = parse_parameters(cursor)?;
            ItemOrInnerList::Item(Item::with_parameters(BareItem::Boolean(true), parameters))
        };
        dict.put(key, value);

        cursor.skip_ows();
        if cursor.is_empty() {
            return Ok(dict);
        }
        if cursor.peek() != Some(COMMA) {
            return Err(Error::InvalidDictionary);
        }
        cursor.bump();
        cursor.skip_ows();
        if cursor.is_empty() {
            return Err(Error::InvalidDictionary);
        }
    }
}
