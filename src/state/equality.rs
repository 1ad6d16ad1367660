//! Item identity and classification helpers.
//!
//! All functions are total: missing fields degrade to "not equal" or
//! "not selectable" instead of failing.

use crate::model::{Item, RawItem};
use serde::Serialize;

/// Identity comparison under `item_id`.
///
/// `false` when either side is absent or lacks an identity.
pub fn items_equal(a: Option<&Item>, b: Option<&Item>, item_id: &str) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => match (a.id(item_id), b.id(item_id)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        },
        _ => false,
    }
}

/// True iff the list is non-empty and every entry is a bare string.
pub fn is_string_list(items: &[RawItem]) -> bool {
    !items.is_empty() && items.iter().all(RawItem::is_text)
}

/// True iff the item exists and is not flagged `selectable: false`.
pub fn is_selectable(item: Option<&Item>) -> bool {
    item.is_some_and(|item| item.selectable() != Some(false))
}

/// Navigation/selection rule: selectable, with group headers requiring an
/// explicit `selectable: true`.
pub fn is_item_selectable(item: Option<&Item>) -> bool {
    match item {
        Some(item) if item.is_group_header() => item.selectable() == Some(true),
        other => is_selectable(other),
    }
}

/// Structural inequality, used to gate notifications.
///
/// Values that fail to serialize compare as changed.
pub fn value_changed<T: Serialize + ?Sized>(a: &T, b: &T) -> bool {
    match (serde_json::to_value(a), serde_json::to_value(b)) {
        (Ok(a), Ok(b)) => a != b,
        _ => true,
    }
}
