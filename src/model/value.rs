//! Selection value representations.

use super::item::{Item, RawItem};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The canonical selection held by the widget.
///
/// A multi-mode selection that has been emptied stays `Multiple(vec![])`
/// so the just-value projection can still report an empty id list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SelectValue {
    /// No selection.
    #[default]
    Empty,
    /// Single-mode selection.
    Single(Item),
    /// Multi-mode selection, unique by identity.
    Multiple(Vec<Item>),
}

impl SelectValue {
    /// Whether anything is selected.
    pub fn has_value(&self) -> bool {
        match self {
            SelectValue::Empty => false,
            SelectValue::Single(_) => true,
            SelectValue::Multiple(items) => !items.is_empty(),
        }
    }

    /// The single selected item, if in single form.
    pub fn as_single(&self) -> Option<&Item> {
        match self {
            SelectValue::Single(item) => Some(item),
            _ => None,
        }
    }

    /// The selected items as a slice (empty for `Empty`, one for `Single`).
    pub fn items(&self) -> &[Item] {
        match self {
            SelectValue::Empty => &[],
            SelectValue::Single(item) => std::slice::from_ref(item),
            SelectValue::Multiple(items) => items,
        }
    }

    /// Number of selected items.
    pub fn len(&self) -> usize {
        self.items().len()
    }

    /// Whether no items are selected.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The cleared form for the given mode.
    pub fn cleared(multiple: bool) -> Self {
        if multiple {
            SelectValue::Multiple(Vec::new())
        } else {
            SelectValue::Empty
        }
    }
}

/// An externally supplied value before normalization.
///
/// Hosts may hand over ids as strings, full items, or lists mixing both.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ValueInput {
    /// No value.
    #[default]
    None,
    /// An identity or label given as a string.
    Text(String),
    /// A full item.
    Object(Item),
    /// A list of strings and/or items (multi mode).
    List(Vec<RawItem>),
}

impl From<Item> for ValueInput {
    fn from(item: Item) -> Self {
        ValueInput::Object(item)
    }
}

impl From<&str> for ValueInput {
    fn from(text: &str) -> Self {
        ValueInput::Text(text.to_string())
    }
}

impl From<Vec<Item>> for ValueInput {
    fn from(items: Vec<Item>) -> Self {
        ValueInput::List(items.into_iter().map(RawItem::Object).collect())
    }
}

/// Id-only projection of the selection, bound to hidden form fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JustValue {
    /// Nothing selected.
    #[default]
    Empty,
    /// Single identity.
    One(Value),
    /// Identities of a multi selection, in order.
    Many(Vec<Value>),
}

impl JustValue {
    /// Whether the projection carries at least one id.
    pub fn is_present(&self) -> bool {
        match self {
            JustValue::Empty => false,
            JustValue::One(v) => !v.is_null() && v.as_str() != Some(""),
            JustValue::Many(ids) => !ids.is_empty(),
        }
    }

    /// The cleared projection for the given mode.
    pub fn cleared(multiple: bool) -> Self {
        if multiple {
            JustValue::Many(Vec::new())
        } else {
            JustValue::Empty
        }
    }
}
