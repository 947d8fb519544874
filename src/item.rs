//
// Copyright 2020 bplist Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

//! # The structural tree nodes above a `BareItem`.
//!
//! `Item` and `InnerList` attach `Parameters` to a value; `List` and
//! `Dictionary` are the two top-level field kinds built from them.

use crate::bare_item::BareItem;
use crate::key::Key;
use crate::ordered_map::OrderedMap;

/// An ordered mapping from `Key` to bare item, attached to an `Item` or
/// `InnerList`. Parameter values are bare items only; parameters never nest.
pub type Parameters = OrderedMap<Key, BareItem>;

/// A bare item together with its parameters.
#[derive(Clone, PartialEq, Debug)]
pub struct Item {
    pub bare_item: BareItem,
    pub parameters: Parameters,
}

impl Item {
    /// Builds an `Item` with no parameters.
    pub fn new(bare_item: impl Into<BareItem>) -> Self {
        Item {
            bare_item: bare_item.into(),
            parameters: Parameters::new(),
        }
    }

    /// Builds an `Item` from an already-constructed `BareItem` and set of
    /// parameters.
    pub fn with_parameters(bare_item: BareItem, parameters: Parameters) -> Self {
        Item { bare_item, parameters }
    }
}

/// An ordered sequence of `Item`, the contents of an `InnerList` before its
/// own parameters are attached.
pub type BareInnerList = Vec<Item>;

/// A parenthesized sequence of items together with parameters attached to
/// the list itself (as distinct from parameters on its member items).
#[derive(Clone, PartialEq, Debug)]
pub struct InnerList {
    pub items: BareInnerList,
    pub parameters: Parameters,
}

impl InnerList {
    /// Builds an `InnerList` with no parameters of its own.
    pub fn new(items: BareInnerList) -> Self {
        InnerList {
            items,
            parameters: Parameters::new(),
        }
    }

    /// Builds an `InnerList` from items and parameters.
    pub fn with_parameters(items: BareInnerList, parameters: Parameters) -> Self {
        InnerList { items, parameters }
    }
}

/// A member of a `List` or value of a `Dictionary` entry: either a plain
/// `Item` or a parenthesized `InnerList`.
#[derive(Clone, PartialEq, Debug)]
pub enum ItemOrInnerList {
    Item(Item),
    InnerList(InnerList),
}

impl ItemOrInnerList {
    /// Returns a reference to the contained `Item`, if this is the `Item`
    /// variant.
    pub fn as_item(&self) -> Option<&Item> {
        match self {
            ItemOrInnerList::Item(item) => Some(item),
            ItemOrInnerList::InnerList(_) => None,
        }
    }

    /// Returns a reference to the contained `InnerList`, if this is the
    /// `InnerList` variant.
    pub fn as_inner_list(&self) -> Option<&InnerList> {
        match self {
            ItemOrInnerList::Item(_) => None,
            ItemOrInnerList::InnerList(inner) => Some(inner),
        }
    }

    /// Returns the parameters attached to whichever variant this is.
    pub fn parameters(&self) -> &Parameters {
        match self {
            ItemOrInnerList::Item(item) => &item.parameters,
            ItemOrInnerList::InnerList(inner) => &inner.parameters,
        }
    }
}

impl From<Item> for ItemOrInnerList {
    fn from(item: Item) -> Self {
        ItemOrInnerList::Item(item)
    }
}

impl From<InnerList> for ItemOrInnerList {
    fn from(inner: InnerList) -> Self {
        ItemOrInnerList::InnerList(inner)
    }
}

/// A top-level list field: an ordered sequence of `ItemOrInnerList`.
pub type List = Vec<ItemOrInnerList>;

/// A top-level dictionary field: an ordered mapping from `Key` to
/// `ItemOrInnerList`, preserving first-insertion position under overwrite.
pub type Dictionary = OrderedMap<Key, ItemOrInnerList>;
