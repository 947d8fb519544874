//
// Copyright 2020 bplist Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

//! Parsers for `Item`, `InnerList`, `ItemOrInnerList`, `Parameters`, and `Key`.

use crate::bare_item::BareItem;
use crate::byte::{is_key_char, is_key_leading, LPAREN, RPAREN, SEMICOLON, SP};
use crate::error::{Error, Result};
use crate::item::{InnerList, Item, ItemOrInnerList, Parameters};
use crate::key::Key;

use super::bare_item::parse_bare_item;
use super::Cursor;

/// Parses a `Key`: a lowercase letter or `*`, followed by key characters.
pub(crate) fn parse_key(cursor: &mut Cursor) -> Result<Key> {
    match cursor.peek() {
        Some(b) if is_key_leading(b) => {
            let mut bytes = vec![cursor.bump().unwrap()];
            bytes.extend_from_slice(cursor.advance_while(is_key_char));
            let s = String::from_utf8(bytes).expect("key bytes are ASCII by construction");
            Key::new(s)
        }
        _ => Err(Error::InvalidKey),
    }
}

/// Parses a `Parameters` run: zero or more `;key[=bare-item]` pairs.
pub(crate) fn parse_parameters(cursor: &mut Cursor) -> Result<Parameters> {
    let mut parameters = Parameters::new();
    while cursor.peek() == Some(SEMICOLON) {
        cursor.bump();
        cursor.skip_sp();
        let key = parse_key(cursor)?;
        let value = if cursor.peek() == Some(b'=') {
            cursor.bump();
            parse_bare_item(cursor)?
        } else {
            BareItem::Boolean(true)
        };
        parameters.put(key, value);
    }
    Ok(parameters)
}

/// Parses a plain `Item`: a bare item followed by its parameters.
pub(crate) fn parse_item(cursor: &mut Cursor) -> Result<Item> {
    let bare_item = parse_bare_item(cursor)?;
    let parameters = parse_parameters(cursor)?;
    Ok(Item::with_parameters(bare_item, parameters))
}

/// Parses a parenthesized `InnerList`.
fn parse_inner_list(cursor: &mut Cursor) -> Result<InnerList> {
    cursor.bump();

    let mut items = Vec::new();
    loop {
        cursor.skip_sp();
        if cursor.peek() == Some(RPAREN) {
            cursor.bump();
            let parameters = parse_parameters(cursor)?;
            return Ok(InnerList::with_parameters(items, parameters));
        }
        items.push(parse_item(cursor)?);
        match cursor.peek() {
            Some(SP) | Some(RPAREN) => {}
            _ => return Err(Error::InvalidInnerList),
        }
    }
}

/// Parses an `ItemOrInnerList`: dispatches to `InnerList` if the next byte is
/// `(`, else to a plain `Item`.
pub(crate) fn parse_item_or_inner_list(cursor: &mut Cursor) -> Result<ItemOrInnerList> {
    if cursor.peek() == Some(LPAREN) {
        Ok(ItemOrInnerList::InnerList(parse_inner_list(cursor)?))
    } else {
        Ok(ItemOrInnerList::Item(parse_item(cursor)?))
    }
}
