//! Live-region announcement text.
//!
//! Both functions are pure: they read state and return a string for an
//! off-screen live region, recomputed whenever the host re-renders.

use crate::model::{Item, SelectValue};
use crate::state::hooks::SelectHooks;
use crate::state::select::Select;

/// Describe the current selection.
///
/// Empty selections (including an emptied multi value) announce nothing;
/// multi selections join labels with `", "`.
pub fn aria_selection(value: &SelectValue, label: &str, hooks: &SelectHooks) -> String {
    let selected = match value {
        SelectValue::Empty => return String::new(),
        SelectValue::Multiple(items) if items.is_empty() => return String::new(),
        SelectValue::Single(item) => item.label(label).map(|l| l.into_owned()).unwrap_or_default(),
        SelectValue::Multiple(items) => items
            .iter()
            .map(|item| item.label(label).map(|l| l.into_owned()).unwrap_or_default())
            .collect::<Vec<_>>()
            .join(", "),
    };
    (hooks.aria_values)(&selected)
}

/// Describe what the user is looking at.
///
/// Nothing for an empty list; the hovered entry and count when the list is
/// open; otherwise the focused hint. An out-of-range hover counts as no
/// hovered entry.
pub fn aria_context(
    filtered: &[Item],
    hover_item_index: usize,
    list_open: bool,
    label: &str,
    hooks: &SelectHooks,
) -> String {
    if filtered.is_empty() {
        return String::new();
    }
    match filtered.get(hover_item_index) {
        Some(item) if list_open => {
            let hovered = item.label(label).map(|l| l.into_owned()).unwrap_or_default();
            (hooks.aria_list_open)(&hovered, filtered.len())
        }
        _ => (hooks.aria_focused)(),
    }
}

impl Select {
    /// Selection announcement for the current state.
    pub fn aria_selection(&self) -> String {
        aria_selection(&self.state.value, &self.config.label, &self.hooks)
    }

    /// Context announcement for the current state.
    pub fn aria_context(&self) -> String {
        aria_context(
            &self.filtered_items(),
            self.state.hover_item_index,
            self.state.list_open,
            &self.config.label,
            &self.hooks,
        )
    }
}
