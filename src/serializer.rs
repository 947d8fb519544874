//
// Copyright 2020 bplist Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

//! # The structured field value serializer.
//!
//! Emits the canonical RFC 9651 byte representation of a parse tree. Each
//! `write_*` entry point clears and reuses an internal scratch buffer rather
//! than allocating a fresh one per call.

use crate::bare_item::{is_valid_token, BareItem, PseudoDecimal, MAX_INTEGER_MAGNITUDE};
use crate::error::{Error, Result};
use crate::item::{Dictionary, InnerList, Item, ItemOrInnerList, List, Parameters};
use crate::key::is_valid_key;

/// A reusable serializer holding a scratch output buffer.
///
/// Instances are not `Sync`; drive one serializer per thread, as documented
/// for the parser's `Cursor`.
#[derive(Default)]
pub struct Serializer {
    buf: Vec<u8>,
}

impl Serializer {
    /// Returns a new `Serializer` with an empty scratch buffer.
    pub fn new() -> Self {
        Serializer { buf: Vec::new() }
    }

    /// Serializes `item` to its canonical byte representation.
    pub fn write_item(&mut self, item: &Item) -> Result<&[u8]> {
        self.buf.clear();
        write_item(&mut self.buf, item)?;
        Ok(&self.buf)
    }

    /// Serializes `list` to its canonical byte representation. An empty list
    /// serializes to an empty byte sequence.
    pub fn write_list(&mut self, list: &List) -> Result<&[u8]> {
        self.buf.clear();
        write_list(&mut self.buf, list)?;
        Ok(&self.buf)
    }

    /// Serializes `dict` to its canonical byte representation. An empty
    /// dictionary serializes to an empty byte sequence.
    pub fn write_dictionary(&mut self, dict: &Dictionary) -> Result<&[u8]> {
        self.buf.clear();
        write_dictionary(&mut self.buf, dict)?;
        Ok(&self.buf)
    }
}

/// One-shot equivalent of `Serializer::new().write_item(item)`.
pub fn to_item_bytes(item: &Item) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_item(&mut buf, item)?;
    Ok(buf)
}

/// One-shot equivalent of `Serializer::new().write_list(list)`.
pub fn to_list_bytes(list: &List) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_list(&mut buf, list)?;
    Ok(buf)
}

/// One-shot equivalent of `Serializer::new().write_dictionary(dict)`.
pub fn to_dictionary_bytes(dict: &Dictionary) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_dictionary(&mut buf, dict)?;
    Ok(buf)
}

fn write_list(buf: &mut Vec<u8>, list: &List) -> Result<()> {
    for (index, member) in list.iter().enumerate() {
        if index > 0 {
            buf.extend_from_slice(b", ");
        }
        write_item_or_inner_list(buf, member)?;
    }
    Ok(())
}

fn write_dictionary(buf: &mut Vec<u8>, dict: &Dictionary) -> Result<()> {
    for (index, (key, value)) in dict.iter().enumerate() {
        if index > 0 {
            buf.extend_from_slice(b", ");
        }
        write_key(buf, key.as_str())?;
        match value {
            ItemOrInnerList::Item(item) if item.bare_item.is_true() => {
                write_parameters(buf, &item.parameters)?;
            }
            _ => {
                buf.push(b'=');
                write_item_or_inner_list(buf, value)?;
            }
        }
    }
    Ok(())
}

fn write_item_or_inner_list(buf: &mut Vec<u8>, value: &ItemOrInnerList) -> Result<()> {
    match value {
        ItemOrInnerList::Item(item) => write_item(buf, item),
        ItemOrInnerList::InnerList(inner) => write_inner_list(buf, inner),
    }
}

fn write_inner_list(buf: &mut Vec<u8>, inner: &InnerList) -> Result<()> {
    buf.push(b'(');
    for (index, item) in inner.items.iter().enumerate() {
        if index > 0 {
            buf.push(b' ');
        }
        write_item(buf, item)?;
    }
    buf.push(b')');
    write_parameters(buf, &inner.parameters)
}

fn write_item(buf: &mut Vec<u8>, item: &Item) -> Result<()> {
    write_bare_item(buf, &item.bare_item)?;
    write_parameters(buf, &item.parameters)
}

fn write_parameters(buf: &mut Vec<u8>, parameters: &Parameters) -> Result<()> {
    for (key, value) in parameters {
        buf.push(b';');
        write_key(buf, key.as_str())?;
        if !value.is_true() {
            buf.push(b'=');
            write_bare_item(buf, value)?;
        }
    }
    Ok(())
}

fn write_key(buf: &mut Vec<u8>, key: &str) -> Result<()> {
    if key.is_empty() {
        return Ok(());
    }
    if !is_valid_key(key) {
        return Err(Error::InvalidKey);
    }
    buf.extend_from_slice(key.as_bytes());
    Ok(())
}

fn write_bare_item(buf: &mut Vec<u8>, item: &BareItem) -> Result<()> {
    match item {
        BareItem::Boolean(value) => write_boolean(buf, *value),
        BareItem::Integer(value) => write_integer(buf, *value),
        BareItem::Decimal(value) => write_decimal(buf, *value),
        BareItem::String(value) => write_string(buf, value.as_str()),
        BareItem::Token(value) => write_token(buf, value.as_str()),
        BareItem::ByteSequence(value) => write_byte_sequence(buf, value.as_str()),
        BareItem::Date(value) => write_date(buf, *value),
        BareItem::DisplayString(value) => write_display_string(buf, value.as_str()),
    }
}

fn write_boolean(buf: &mut Vec<u8>, value: bool) -> Result<()> {
    buf.extend_from_slice(if value { b"?1" } else { b"?0" });
    Ok(())
}

fn write_integer(buf: &mut Vec<u8>, value: i64) -> Result<()> {
    if value.unsigned_abs() > MAX_INTEGER_MAGNITUDE as u64 {
        return Err(Error::InvalidIntegerOrDecimal);
    }
    buf.extend_from_slice(value.to_string().as_bytes());
    Ok(())
}

fn write_decimal(buf: &mut Vec<u8>, value: PseudoDecimal) -> Result<()> {
    buf.extend_from_slice(value.canonicalize().to_string().as_bytes());
    Ok(())
}

fn write_string(buf: &mut Vec<u8>, value: &str) -> Result<()> {
    buf.push(b'"');
    for byte in value.bytes() {
        if !(0x20..=0x7E).contains(&byte) {
            return Err(Error::InvalidString);
        }
        if byte == b'"' || byte == b'\\' {
            buf.push(b'\\');
        }
        buf.push(byte);
    }
    buf.push(b'"');
    Ok(())
}

fn write_token(buf: &mut Vec<u8>, value: &str) -> Result<()> {
    if !is_valid_token(value) {
        return Err(Error::InvalidToken);
    }
    buf.extend_from_slice(value.as_bytes());
    Ok(())
}

fn write_byte_sequence(buf: &mut Vec<u8>, value: &str) -> Result<()> {
    buf.push(b':');
    buf.extend_from_slice(value.as_bytes());
    buf.push(b':');
    Ok(())
}

fn write_date(buf: &mut Vec<u8>, value: i64) -> Result<()> {
    if value.unsigned_abs() > MAX_INTEGER_MAGNITUDE as u64 {
        return Err(Error::InvalidDate);
    }
    buf.push(b'@');
    buf.extend_from_slice(value.to_string().as_bytes());
    Ok(())
}

fn write_display_string(buf: &mut Vec<u8>, value: &str) -> Result<()> {
    buf.extend_from_slice(b"%\"");
    for byte in value.bytes() {
        if byte == b'%' || byte == b'"' || byte < 0x20 || byte >= 0x7F {
            buf.push(b'%');
            buf.extend_from_slice(format!("{:02x}", byte).as_bytes());
        } else {
            buf.push(byte);
        }
    }
    buf.push(b'"');
    Ok(())
}
