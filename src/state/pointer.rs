//! Focus, pointer, and filter-text input.

use crate::model::{Item, SelectEvent};
use crate::state::equality::is_item_selectable;
use crate::state::load_options::LoadTrigger;
use crate::state::select::Select;

impl Select {
    // ===== List visibility =====

    /// Open the list and position the hover.
    ///
    /// A single value pins the hover to its entry; otherwise the first
    /// selectable entry is highlighted. With a loader and no items yet, a
    /// load is queued.
    pub fn open_list(&mut self) {
        self.state.list_open = true;
        if self.loader.is_some() && self.state.items.is_none() && !self.state.loading {
            self.reload_options();
        }
        if !self.config.multiple && self.state.value.has_value() {
            self.jump_to_value_index();
        } else {
            self.reset_hover();
        }
        tracing::trace!("List opened");
    }

    /// Close the list.
    pub fn close_list(&mut self) {
        self.state.list_open = false;
    }

    // ===== Focus =====

    /// The control gained focus.
    pub fn handle_focus(&mut self) {
        if self.config.disabled || self.state.focused {
            return;
        }
        self.state.focused = true;
        self.emit(SelectEvent::Focus);
    }

    /// The control lost focus.
    pub fn handle_blur(&mut self) {
        if !self.state.focused {
            return;
        }
        self.close_list();
        self.state.focused = false;
        self.state.active_value = None;
        if self.config.clear_filter_text_on_blur {
            self.replace_filter_text(String::new());
        }
        self.emit(SelectEvent::Blur);
    }

    /// Click on the control body: focus and toggle the list.
    pub fn handle_container_click(&mut self) {
        if self.config.disabled {
            return;
        }
        self.handle_focus();
        if self.state.list_open {
            self.close_list();
        } else {
            self.open_list();
        }
    }

    // ===== Filter text =====

    /// The user edited the filter text.
    ///
    /// Ignored when not searchable or disabled. Non-empty text opens the
    /// list; the hover returns to the first selectable entry and the new
    /// filtered list is announced.
    pub fn set_filter_text(&mut self, text: impl Into<String>) {
        if !self.config.searchable || self.config.disabled {
            return;
        }
        self.replace_filter_text(text.into());
        if !self.state.filter_text.is_empty() {
            self.state.list_open = true;
        }
        self.reset_hover();
        let filtered = self.filtered_items();
        self.emit(SelectEvent::Filter(filtered));
    }

    /// Replace the filter text, entering the load controller on change when
    /// a loader is configured.
    pub(crate) fn replace_filter_text(&mut self, text: String) {
        if self.state.filter_text == text {
            return;
        }
        self.state.filter_text = text;
        if self.loader.is_some() {
            self.handle_load_options(LoadTrigger::FilterText);
        }
    }

    // ===== Pointer =====

    /// Pointer moved over the entry at `index`.
    pub fn handle_hover(&mut self, index: usize) {
        if self.state.is_scrolling {
            return;
        }
        self.set_hover_index(index);
    }

    /// A list scroll gesture started.
    pub fn handle_list_scroll(&mut self) {
        self.state.is_scrolling = true;
    }

    /// The list scroll gesture ended.
    pub fn handle_list_scroll_end(&mut self) {
        self.state.is_scrolling = false;
    }

    /// Click on the entry at `index` of the filtered list.
    ///
    /// Clicking the current single value only clears the filter and closes
    /// the list.
    pub fn handle_item_click(&mut self, index: usize) {
        let Some(item) = self.filtered_items().into_iter().nth(index) else {
            return;
        };
        if self.is_item_active(&item) == Some(true) {
            self.replace_filter_text(String::new());
            self.close_list();
            return;
        }
        self.handle_select(Some(item));
    }

    /// Select `item` if it may be selected.
    pub fn handle_select(&mut self, item: Option<Item>) {
        match item {
            Some(item) if is_item_selectable(Some(&item)) => self.select_item(item),
            _ => tracing::trace!("Ignored selection of an unselectable entry"),
        }
    }

    /// Clear-all button.
    pub fn handle_clear(&mut self) {
        if !self.config.clearable || self.config.disabled {
            return;
        }
        self.clear();
        self.close_list();
    }
}

#[cfg(test)]
#[path = "pointer_tests.rs"]
mod tests;
