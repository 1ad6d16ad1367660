//! Filter engine (pure).
//!
//! Derives the visible list from raw items, filter text, and the current
//! selection. The result is never stored: callers recompute it whenever an
//! input changes, so the same inputs always produce the same list.

use crate::model::{items_from_strings, Item, RawItem, SelectValue};
use crate::state::equality::{is_string_list, items_equal};
use crate::state::group::group_items;
use crate::state::hooks::SelectHooks;

/// Inputs to [`filter_items`].
#[derive(Debug, Clone, Copy)]
pub struct FilterInput<'a> {
    /// Raw items; `None` models an absent list.
    pub items: Option<&'a [RawItem]>,
    /// Whether an async loader owns the item list.
    pub has_loader: bool,
    /// Current filter text.
    pub filter_text: &'a str,
    /// Multi-select mode.
    pub multiple: bool,
    /// Current selection.
    pub value: &'a SelectValue,
    /// Identity key.
    pub item_id: &'a str,
    /// Label key.
    pub label: &'a str,
    /// Hide already-selected items in multi mode.
    pub filter_selected_items: bool,
    /// Group headers are selectable.
    pub group_header_selectable: bool,
}

/// Produce the ordered list of items to display.
pub fn filter_items(input: &FilterInput<'_>, hooks: &SelectHooks) -> Vec<Item> {
    let Some(raw) = input.items else {
        return Vec::new();
    };

    // Loader results are already filtered server-side.
    if input.has_loader {
        return canonical_items(raw);
    }

    let selected: &[Item] = match input.value {
        SelectValue::Multiple(values) if input.multiple && input.filter_selected_items => {
            values.as_slice()
        }
        _ => &[],
    };

    let results: Vec<Item> = canonical_items(raw)
        .into_iter()
        .filter(|item| {
            let label = item.label(input.label);
            (hooks.item_filter)(label.as_deref(), input.filter_text, item)
        })
        .filter(|item| {
            !selected
                .iter()
                .any(|chosen| items_equal(Some(chosen), Some(item), input.item_id))
        })
        .collect();

    if hooks.group_by.is_some() {
        group_items(results, hooks, input.group_header_selectable)
    } else {
        results
    }
}

/// Convert a raw list into items.
///
/// A list made only of strings becomes `{index, value, label}` items. In a
/// mixed list, stray strings are dropped since they have no label to match.
pub fn canonical_items(raw: &[RawItem]) -> Vec<Item> {
    if is_string_list(raw) {
        let texts: Vec<&str> = raw
            .iter()
            .filter_map(|r| match r {
                RawItem::Text(text) => Some(text.as_str()),
                RawItem::Object(_) => None,
            })
            .collect();
        return items_from_strings(&texts);
    }
    raw.iter().filter_map(RawItem::as_item).cloned().collect()
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
