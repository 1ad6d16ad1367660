//! Value controller: normalization, projection, selection and clearing.
//!
//! Every transition that changes the selection ends in [`Select::sync_value`],
//! which deduplicates, refreshes the just-value projection, and queues an
//! `Input` notification only when identity changed.

use crate::model::{Item, JustValue, RawItem, SelectEvent, SelectValue, ValueInput};
use crate::state::equality::{items_equal, value_changed};
use crate::state::filter::canonical_items;
use crate::state::select::Select;
use serde_json::Value;

impl Select {
    // ===== Normalization =====

    /// Normalize an externally supplied value.
    ///
    /// Strings are looked up by identity in the raw items, falling back to a
    /// synthetic `{item_id: text, label: text}` item. Multi mode always
    /// yields `Multiple`; single mode keeps the first entry of a list.
    pub fn resolve_initial_value(&self, input: ValueInput) -> SelectValue {
        let resolved: Vec<Item> = match input {
            ValueInput::None => return SelectValue::Empty,
            ValueInput::Text(text) => vec![self.item_for_id(&text)],
            ValueInput::Object(item) => vec![item],
            ValueInput::List(entries) => entries
                .into_iter()
                .map(|entry| match entry {
                    RawItem::Text(text) => self.item_for_id(&text),
                    RawItem::Object(item) => item,
                })
                .collect(),
        };

        if self.config.multiple {
            SelectValue::Multiple(resolved)
        } else {
            resolved
                .into_iter()
                .next()
                .map_or(SelectValue::Empty, SelectValue::Single)
        }
    }

    fn item_for_id(&self, id: &str) -> Item {
        let target = Value::String(id.to_string());
        self.state
            .items
            .as_deref()
            .map(canonical_items)
            .and_then(|items| {
                items
                    .into_iter()
                    .find(|item| item.id(&self.config.item_id) == Some(&target))
            })
            .unwrap_or_else(|| {
                Item::new()
                    .with(self.config.item_id.clone(), id)
                    .with(self.config.label.clone(), id)
            })
    }

    /// Re-resolve the held value against the raw items by identity.
    ///
    /// Entries whose identity vanished keep their last display. Nothing
    /// happens when the items are absent, empty, or contain plain strings,
    /// or when any selected entry lacks an identity.
    pub fn refresh_display_from_items(&mut self) {
        let Some(raw) = self.state.items.as_deref() else {
            return;
        };
        if raw.is_empty() || raw.iter().any(RawItem::is_text) {
            return;
        }
        let item_id = self.config.item_id.as_str();
        if self
            .state
            .value
            .items()
            .iter()
            .any(|selected| selected.id(item_id).is_none())
        {
            return;
        }

        let lookup = |selected: &Item| -> Item {
            raw.iter()
                .filter_map(RawItem::as_item)
                .find(|candidate| items_equal(Some(candidate), Some(selected), item_id))
                .cloned()
                .unwrap_or_else(|| selected.clone())
        };

        let refreshed = match &self.state.value {
            SelectValue::Empty => return,
            SelectValue::Single(item) => SelectValue::Single(lookup(item)),
            SelectValue::Multiple(items) => SelectValue::Multiple(items.iter().map(lookup).collect()),
        };
        self.state.value = refreshed;
    }

    // ===== Projection =====

    /// Compute and store the id-only projection.
    ///
    /// With `use_just_value`, an empty selection is first rehydrated from
    /// the raw items matching the stored ids, unless a clear is in progress.
    pub fn compute_just_value(&mut self) -> JustValue {
        let had_value = self.state.value.has_value();
        let was_clearing = self.state.clear_state;

        if self.config.use_just_value && !had_value && !was_clearing && self.state.just_value.is_present() {
            self.rehydrate_from_just_value();
        }
        self.state.clear_state = false;

        let projected = if self.config.use_just_value && !had_value && !was_clearing {
            self.state.just_value.clone()
        } else {
            let item_id = self.config.item_id.as_str();
            match &self.state.value {
                SelectValue::Multiple(items) => JustValue::Many(
                    items
                        .iter()
                        .map(|item| item.id(item_id).cloned().unwrap_or(Value::Null))
                        .collect(),
                ),
                SelectValue::Single(item) => item
                    .id(item_id)
                    .cloned()
                    .map_or(JustValue::Empty, JustValue::One),
                SelectValue::Empty => JustValue::Empty,
            }
        };

        self.state.just_value = projected.clone();
        projected
    }

    fn rehydrate_from_just_value(&mut self) {
        let items = self
            .state
            .items
            .as_deref()
            .map(canonical_items)
            .unwrap_or_default();
        let item_id = self.config.item_id.as_str();

        let found: Vec<Item> = match &self.state.just_value {
            JustValue::Many(ids) => items
                .into_iter()
                .filter(|item| item.id(item_id).is_some_and(|id| ids.contains(id)))
                .collect(),
            JustValue::One(id) => items
                .into_iter()
                .find(|item| item.id(item_id) == Some(id))
                .into_iter()
                .collect(),
            JustValue::Empty => return,
        };

        self.state.value = if self.config.multiple {
            SelectValue::Multiple(found)
        } else {
            found
                .into_iter()
                .next()
                .map_or(SelectValue::Empty, SelectValue::Single)
        };
        tracing::debug!(len = self.state.value.len(), "Rehydrated value from just-value");
    }

    // ===== Change gating =====

    /// Drop later duplicates from a multi value, keeping first occurrences.
    ///
    /// Returns `true` if anything was removed. Entries without an identity
    /// are never duplicates of each other.
    pub fn reject_duplicates(&mut self) -> bool {
        let SelectValue::Multiple(items) = &mut self.state.value else {
            return false;
        };
        let item_id = self.config.item_id.as_str();
        let before = items.len();

        let mut unique: Vec<Item> = Vec::with_capacity(before);
        for item in items.drain(..) {
            if !unique.iter().any(|kept| items_equal(Some(kept), Some(&item), item_id)) {
                unique.push(item);
            }
        }
        let removed = unique.len() != before;
        *items = unique;

        if removed {
            tracing::debug!(removed = before - items.len(), "Removed duplicate values");
        }
        removed
    }

    /// Queue `Input` when the selection identity changed since the last
    /// dispatch, then remember the current value.
    ///
    /// Multi mode compares structurally; single mode compares identities.
    /// Two empty single values never notify.
    pub fn dispatch_if_changed(&mut self) {
        let changed = if self.config.multiple {
            value_changed(&self.state.value, &self.state.prev_value)
        } else {
            let item_id = self.config.item_id.as_str();
            match (self.state.value.as_single(), self.state.prev_value.as_single()) {
                (None, None) => false,
                (Some(current), Some(previous)) => current.id(item_id) != previous.id(item_id),
                _ => true,
            }
        };

        if changed {
            self.emit(SelectEvent::Input(self.state.value.clone()));
        }
        self.state.prev_value = self.state.value.clone();
    }

    /// Post-mutation bookkeeping shared by every value transition.
    pub(crate) fn sync_value(&mut self) {
        self.reject_duplicates();
        self.compute_just_value();
        self.dispatch_if_changed();
    }

    // ===== Transitions =====

    /// Commit `item` as (part of) the selection.
    ///
    /// Clears the filter text first. A group header is refused unless it is
    /// explicitly selectable.
    pub fn select_item(&mut self, item: Item) {
        self.replace_filter_text(String::new());

        if item.is_group_header() && item.selectable() != Some(true) {
            tracing::debug!("Refused selection of a group header");
            return;
        }

        self.refresh_display_from_items();

        let current = std::mem::take(&mut self.state.value);
        self.state.value = if self.config.multiple {
            let mut items = match current {
                SelectValue::Empty => Vec::new(),
                SelectValue::Single(existing) => vec![existing],
                SelectValue::Multiple(items) => items,
            };
            items.push(item.clone());
            SelectValue::Multiple(items)
        } else {
            SelectValue::Single(item.clone())
        };

        if self.config.close_list_on_change {
            self.close_list();
        }
        self.state.active_value = None;
        self.reject_duplicates();

        tracing::debug!(len = self.state.value.len(), "Item selected");
        self.emit(SelectEvent::Change(self.state.value.clone()));
        self.emit(SelectEvent::Select(item));
        self.sync_value();
    }

    /// Remove the multi entry at `index`.
    ///
    /// Removing the last remaining entry leaves no value at all. Out of
    /// range indices and non-multi values are ignored.
    pub fn clear_item(&mut self, index: usize) {
        let SelectValue::Multiple(items) = &mut self.state.value else {
            return;
        };
        if index >= items.len() {
            return;
        }

        self.state.clear_state = true;
        let removed = items.remove(index);
        if items.is_empty() {
            self.state.value = SelectValue::Empty;
        }

        tracing::debug!(index, "Multi item cleared");
        self.emit(SelectEvent::Clear(SelectValue::Single(removed)));
        self.sync_value();
    }

    /// Remove the whole selection, notifying with what was removed.
    pub fn clear(&mut self) {
        if !self.state.value.has_value() {
            return;
        }
        let removed = std::mem::replace(
            &mut self.state.value,
            SelectValue::cleared(self.config.multiple),
        );
        self.state.clear_state = true;
        self.state.active_value = None;

        tracing::debug!("Selection cleared");
        self.emit(SelectEvent::Clear(removed));
        self.sync_value();
    }

    /// Wrap a scalar value for multi mode.
    pub fn enter_multiple_mode(&mut self) {
        if let SelectValue::Single(item) = std::mem::take(&mut self.state.value) {
            self.state.value = SelectValue::Multiple(vec![item]);
        }
    }

    /// Switch between single and multi mode.
    ///
    /// Leaving multi mode keeps the first selected entry.
    pub fn set_multiple(&mut self, multiple: bool) {
        if self.config.multiple == multiple {
            return;
        }
        self.config.multiple = multiple;

        if multiple {
            self.enter_multiple_mode();
        } else if let SelectValue::Multiple(items) = std::mem::take(&mut self.state.value) {
            self.state.value = items
                .into_iter()
                .next()
                .map_or(SelectValue::Empty, SelectValue::Single);
            self.state.active_value = None;
        }
        self.sync_value();
    }

    /// Programmatic value set. Queues `Input` on identity change but never
    /// `Change`.
    pub fn set_value(&mut self, input: impl Into<ValueInput>) {
        self.state.value = self.resolve_initial_value(input.into());
        self.state.active_value = None;
        self.sync_value();
    }

    /// Replace the raw items.
    ///
    /// The held value is re-resolved for display and the hover moves to the
    /// first selectable entry.
    pub fn set_items(&mut self, items: Option<Vec<RawItem>>) {
        self.state.items = items;
        self.refresh_display_from_items();
        self.sync_value();
        self.reset_hover();
    }
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
