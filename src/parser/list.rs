//
// Copyright 2020 bplist Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

//! Parser for the top-level `List` field kind.

use crate::byte::COMMA;
use crate::error::{Error, Result};
use crate::item::List;

use super::item::parse_item_or_inner_list;
use super::Cursor;

/// Parses a comma-separated `List` of `ItemOrInnerList` members. An input
/// that is empty (after the entry point's leading-space strip) yields an
/// empty list.
pub(crate) fn parse_list(cursor: &mut Cursor) -> Result<List> {
    let mut members = Vec::new();
    if cursor.is_empty() {
        return Ok(members);
    }

    loop {
        if cursor.peek() == Some(COMMA) {
            return Err(Error::InvalidList);
        }
        members.push(parse_item_or_inner_list(cursor)?);
        cursor.skip_ows();
        if cursor.is_empty() {
            return Ok(members);
        }
        if cursor.peek() != Some(COMMA) {
            return Err(Error::InvalidList);
        }
        cursor.bump();
        cursor.skip_ows();
        if cursor.is_empty() {
            return Err(Error::InvalidList);
        }
    }
}
