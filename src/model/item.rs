//! Option items and the raw item list supplied by the host.
//!
//! Items are open-ended JSON objects: the label and identity keys are
//! configurable, so every accessor takes the key it should read and
//! degrades to `None` instead of failing on malformed shapes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;

/// Flag marking a synthetic group header entry.
pub const GROUP_HEADER_KEY: &str = "groupHeader";
/// Flag marking a member of a projected group.
pub const GROUP_ITEM_KEY: &str = "groupItem";
/// Tri-state selectability flag (absent means selectable).
pub const SELECTABLE_KEY: &str = "selectable";
/// Original position of an item converted from a plain string.
pub const INDEX_KEY: &str = "index";

/// One selectable option.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item(Map<String, Value>);

impl Item {
    /// Create an empty item.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Create the canonical `{value, label}` item most tests and hosts use.
    pub fn labeled(value: impl Into<Value>, label: impl Into<String>) -> Self {
        Self::new()
            .with("value", value)
            .with("label", Value::String(label.into()))
    }

    /// Convert a plain string option into `{index, value, label}`.
    pub fn from_text(text: &str, index: usize) -> Self {
        Self::new()
            .with(INDEX_KEY, index)
            .with("value", text)
            .with("label", text)
    }

    /// Builder-style field setter.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Set a field in place.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Raw field lookup.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Whether the field is present at all (even if `null`).
    pub fn has(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Identity value under `item_id`, ignoring explicit `null`.
    pub fn id(&self, item_id: &str) -> Option<&Value> {
        self.get(item_id).filter(|v| !v.is_null())
    }

    /// Display text under `label_key`.
    ///
    /// Strings are borrowed; numbers and booleans render as their JSON text.
    /// Any other shape has no label.
    pub fn label(&self, label_key: &str) -> Option<Cow<'_, str>> {
        match self.get(label_key)? {
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            v @ (Value::Number(_) | Value::Bool(_)) => Some(Cow::Owned(v.to_string())),
            _ => None,
        }
    }

    /// The `selectable` flag when present as a boolean.
    pub fn selectable(&self) -> Option<bool> {
        self.get(SELECTABLE_KEY).and_then(Value::as_bool)
    }

    /// Whether this entry is a synthetic group header.
    pub fn is_group_header(&self) -> bool {
        self.flag(GROUP_HEADER_KEY)
    }

    /// Whether this entry belongs to a projected group.
    pub fn is_group_item(&self) -> bool {
        self.flag(GROUP_ITEM_KEY)
    }

    /// Original position recorded by string conversion, if any.
    pub fn index(&self) -> Option<u64> {
        self.get(INDEX_KEY).and_then(Value::as_u64)
    }

    /// Underlying JSON object.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    fn flag(&self, key: &str) -> bool {
        self.get(key).and_then(Value::as_bool).unwrap_or(false)
    }
}

impl From<Map<String, Value>> for Item {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// An entry of the externally owned item list.
///
/// Hosts may pass plain strings; they are converted to [`Item`]s before any
/// filtering when the whole list is made of strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawItem {
    /// A bare string option.
    Text(String),
    /// A structured option.
    Object(Item),
}

impl RawItem {
    /// The structured item, if this entry is one.
    pub fn as_item(&self) -> Option<&Item> {
        match self {
            RawItem::Object(item) => Some(item),
            RawItem::Text(_) => None,
        }
    }

    /// Whether this entry is a bare string.
    pub fn is_text(&self) -> bool {
        matches!(self, RawItem::Text(_))
    }
}

impl From<Item> for RawItem {
    fn from(item: Item) -> Self {
        RawItem::Object(item)
    }
}

impl From<&str> for RawItem {
    fn from(text: &str) -> Self {
        RawItem::Text(text.to_string())
    }
}

impl From<String> for RawItem {
    fn from(text: String) -> Self {
        RawItem::Text(text)
    }
}

/// Convert a list of plain strings into canonical items, recording order.
pub fn items_from_strings<S: AsRef<str>>(texts: &[S]) -> Vec<Item> {
    texts
        .iter()
        .enumerate()
        .map(|(index, text)| Item::from_text(text.as_ref(), index))
        .collect()
}
