//! Hover navigation over the filtered (possibly grouped) list.

use crate::model::{Item, SelectEvent, SelectValue};
use crate::state::equality::{is_item_selectable, items_equal};
use crate::state::select::Select;

/// Direction of a hover step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Down the list.
    Forward,
    /// Up the list.
    Backward,
}

/// Index of the next selectable entry from `from`, wrapping at both ends.
///
/// Steps in selectable-rank space: a non-selectable starting entry counts
/// as sitting just before the first selectable entry when moving forward,
/// or just after the last when moving backward. Returns 0 when nothing is
/// selectable.
pub fn next_index(list: &[Item], from: usize, direction: Direction) -> usize {
    let selectable: Vec<usize> = list
        .iter()
        .enumerate()
        .filter(|(_, item)| is_item_selectable(Some(item)))
        .map(|(index, _)| index)
        .collect();

    let count = selectable.len();
    if count == 0 {
        return 0;
    }

    let rank = selectable.iter().position(|&index| index == from);
    let next_rank = match (direction, rank) {
        (Direction::Forward, Some(rank)) => (rank + 1) % count,
        (Direction::Forward, None) => 0,
        (Direction::Backward, Some(rank)) => (rank + count - 1) % count,
        (Direction::Backward, None) => count - 1,
    };
    selectable[next_rank]
}

/// First index worth highlighting when no value pins the hover.
///
/// Only grouping can make index 0 unselectable for this purpose; without
/// grouping the answer is always 0.
pub fn first_selectable_index(list: &[Item], grouped: bool) -> usize {
    if !grouped || list.is_empty() || is_item_selectable(list.first()) {
        return 0;
    }
    list.iter()
        .position(|item| is_item_selectable(Some(item)))
        .unwrap_or(0)
}

/// Single-mode highlight predicate.
///
/// `None` in multi mode, where highlighting is per chip via `active_value`.
pub fn is_active(item: &Item, value: &SelectValue, item_id: &str, multiple: bool) -> Option<bool> {
    if multiple {
        return None;
    }
    Some(items_equal(value.as_single(), Some(item), item_id))
}

impl Select {
    /// Set the hover index, notifying the host when it moves.
    pub fn set_hover_index(&mut self, index: usize) {
        if self.state.hover_item_index != index {
            self.state.hover_item_index = index;
            self.emit(SelectEvent::HoverItem(index));
        }
    }

    /// Move the hover one selectable step.
    pub fn move_hover(&mut self, direction: Direction) {
        let list = self.filtered_items();
        let next = next_index(&list, self.state.hover_item_index, direction);
        tracing::trace!(from = self.state.hover_item_index, to = next, ?direction, "Hover step");
        self.set_hover_index(next);
    }

    /// First selectable index of the current filtered list.
    pub fn first_selectable_index(&self) -> usize {
        first_selectable_index(&self.filtered_items(), self.hooks.group_by.is_some())
    }

    /// Highlight the first selectable entry.
    pub fn reset_hover(&mut self) {
        let index = self.first_selectable_index();
        self.set_hover_index(index);
    }

    /// Settle the hover at `start`, skipping forward past a non-selectable
    /// entry when the list is grouped. A missing start means 0.
    pub fn check_hover_selectable(&mut self, start: Option<usize>, ignore_group: bool) {
        let index = start.unwrap_or(0);
        let list = self.filtered_items();
        let grouped = self.hooks.group_by.is_some();

        let settled = match list.get(index) {
            Some(item) if !ignore_group && grouped && !is_item_selectable(Some(item)) => {
                next_index(&list, index, Direction::Forward)
            }
            _ => index,
        };
        self.set_hover_index(settled);
    }

    /// Highlight the current single value in the filtered list.
    ///
    /// No-op in multi mode or without a value. A value absent from the list
    /// lands on the first selectable entry.
    pub fn jump_to_value_index(&mut self) {
        let SelectValue::Single(value) = &self.state.value else {
            return;
        };
        let list = self.filtered_items();
        let found = list
            .iter()
            .position(|item| items_equal(Some(item), Some(value), &self.config.item_id));
        self.check_hover_selectable(found, false);
    }

    /// Whether `item` is the highlighted single value.
    pub fn is_item_active(&self, item: &Item) -> Option<bool> {
        is_active(
            item,
            &self.state.value,
            &self.config.item_id,
            self.config.multiple,
        )
    }
}

#[cfg(test)]
#[path = "hover_tests.rs"]
mod tests;
