//! Keyboard state machine.
//!
//! Every key event is consumed (the host should stop propagating it), but
//! only a focused select reacts. Handlers report whether the host's default
//! action for the key should be suppressed.

use crate::model::{SelectKey, SelectValue};
use crate::state::equality::items_equal;
use crate::state::hover::Direction;
use crate::state::select::Select;

/// Result of feeding one key to the select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyOutcome {
    /// The select reacted to the key.
    pub handled: bool,
    /// The host's default action for the key should be suppressed.
    pub prevent_default: bool,
}

impl KeyOutcome {
    const IGNORED: Self = Self {
        handled: false,
        prevent_default: false,
    };

    fn handled(prevent_default: bool) -> Self {
        Self {
            handled: true,
            prevent_default,
        }
    }
}

impl Select {
    /// Dispatch a key press.
    pub fn handle_key_down(&mut self, key: SelectKey) -> KeyOutcome {
        if !self.state.focused {
            return KeyOutcome::IGNORED;
        }
        tracing::trace!(?key, list_open = self.state.list_open, "Key down");

        match key {
            SelectKey::Escape => {
                self.close_list();
                KeyOutcome::handled(true)
            }
            SelectKey::Enter => {
                self.handle_enter();
                KeyOutcome::handled(true)
            }
            SelectKey::ArrowDown => {
                self.handle_vertical(Direction::Forward);
                KeyOutcome::handled(true)
            }
            SelectKey::ArrowUp => {
                self.handle_vertical(Direction::Backward);
                KeyOutcome::handled(true)
            }
            SelectKey::Tab => KeyOutcome::handled(self.handle_tab()),
            SelectKey::Backspace => {
                self.handle_backspace();
                KeyOutcome::handled(false)
            }
            SelectKey::ArrowLeft => {
                self.handle_arrow_left();
                KeyOutcome::handled(false)
            }
            SelectKey::ArrowRight => {
                self.handle_arrow_right();
                KeyOutcome::handled(false)
            }
        }
    }

    fn handle_enter(&mut self) {
        if !self.state.list_open {
            return;
        }
        let list = self.filtered_items();
        if list.is_empty() {
            return;
        }
        let hovered = list.get(self.state.hover_item_index).cloned();

        if !self.config.multiple
            && items_equal(
                self.state.value.as_single(),
                hovered.as_ref(),
                &self.config.item_id,
            )
        {
            self.close_list();
        } else {
            self.handle_select(hovered);
        }
    }

    fn handle_vertical(&mut self, direction: Direction) {
        if self.state.list_open {
            self.move_hover(direction);
        } else {
            self.open_list();
            self.state.active_value = None;
        }
    }

    /// Returns whether the default tab action should be suppressed.
    fn handle_tab(&mut self) -> bool {
        if !self.state.list_open || !self.state.focused {
            return false;
        }
        let list = self.filtered_items();
        let hovered = list.get(self.state.hover_item_index).cloned();

        if list.is_empty()
            || items_equal(
                self.state.value.as_single(),
                hovered.as_ref(),
                &self.config.item_id,
            )
        {
            self.close_list();
            return false;
        }

        self.handle_select(hovered);
        self.close_list();
        true
    }

    fn handle_backspace(&mut self) {
        if !self.config.multiple || !self.state.filter_text.is_empty() {
            return;
        }
        let len = self.state.value.len();
        if len == 0 {
            return;
        }

        let active = self.state.active_value;
        self.clear_item(active.unwrap_or(len - 1));

        match active {
            None | Some(0) => {}
            Some(active) => {
                self.state.active_value = (len > active).then(|| active - 1);
            }
        }
    }

    fn handle_arrow_left(&mut self) {
        if !self.config.multiple || !self.state.filter_text.is_empty() {
            return;
        }
        let SelectValue::Multiple(items) = &self.state.value else {
            return;
        };
        let len = items.len();
        if len == 0 {
            return;
        }

        match self.state.active_value {
            None => self.state.active_value = Some(len - 1),
            Some(active) if len > active && active != 0 => {
                self.state.active_value = Some(active - 1);
            }
            Some(_) => {}
        }
    }

    fn handle_arrow_right(&mut self) {
        if !self.config.multiple || !self.state.filter_text.is_empty() {
            return;
        }
        let Some(active) = self.state.active_value else {
            return;
        };
        let len = self.state.value.len();
        if len == 0 {
            return;
        }

        if active == len - 1 {
            self.state.active_value = None;
        } else if active < len - 1 {
            self.state.active_value = Some(active + 1);
        }
    }
}

#[cfg(test)]
#[path = "keyboard_tests.rs"]
mod tests;
