//! Caller-overridable behavior.
//!
//! Everything here is a function the host may swap out: the inclusion
//! predicate, grouping, group ordering, header construction, and the three
//! ARIA formatters. Defaults match the stock widget.

use crate::model::Item;
use std::fmt;
use std::rc::Rc;

/// Inclusion predicate: `(label, filter_text, item) -> keep`.
pub type ItemFilterFn = Rc<dyn Fn(Option<&str>, &str, &Item) -> bool>;
/// Group key extractor; `None` leaves the item ungrouped.
pub type GroupByFn = Rc<dyn Fn(&Item) -> Option<String>>;
/// Reorders (or drops) group keys given in first-seen order.
pub type GroupFilterFn = Rc<dyn Fn(Vec<String>) -> Vec<String>>;
/// Builds a header entry from a group key and its first member.
pub type GroupHeaderFn = Rc<dyn Fn(&str, &Item) -> Item>;
/// Formats the selection announcement.
pub type AriaValuesFn = Rc<dyn Fn(&str) -> String>;
/// Formats the open-list announcement from hovered label and count.
pub type AriaListOpenFn = Rc<dyn Fn(&str, usize) -> String>;
/// Formats the focused-without-list announcement.
pub type AriaFocusedFn = Rc<dyn Fn() -> String>;

/// Overridable behavior bundle.
#[derive(Clone)]
pub struct SelectHooks {
    /// Inclusion predicate applied to every candidate item.
    pub item_filter: ItemFilterFn,
    /// Grouping function; enables group projection when set.
    pub group_by: Option<GroupByFn>,
    /// Group ordering hook.
    pub group_filter: Option<GroupFilterFn>,
    /// Header factory used by group projection.
    pub create_group_header_item: GroupHeaderFn,
    /// Selection announcement formatter.
    pub aria_values: AriaValuesFn,
    /// Open-list announcement formatter.
    pub aria_list_open: AriaListOpenFn,
    /// Focused announcement formatter.
    pub aria_focused: AriaFocusedFn,
}

impl SelectHooks {
    /// Replace the inclusion predicate.
    pub fn item_filter(mut self, f: impl Fn(Option<&str>, &str, &Item) -> bool + 'static) -> Self {
        self.item_filter = Rc::new(f);
        self
    }

    /// Group by an arbitrary function.
    pub fn group_by(mut self, f: impl Fn(&Item) -> Option<String> + 'static) -> Self {
        self.group_by = Some(Rc::new(f));
        self
    }

    /// Group by the string (or scalar) value of a field.
    pub fn group_by_field(self, field: impl Into<String>) -> Self {
        let field = field.into();
        self.group_by(move |item| item.label(&field).map(|s| s.into_owned()))
    }

    /// Reorder group keys.
    pub fn group_filter(mut self, f: impl Fn(Vec<String>) -> Vec<String> + 'static) -> Self {
        self.group_filter = Some(Rc::new(f));
        self
    }

    /// Replace the header factory.
    pub fn create_group_header_item(mut self, f: impl Fn(&str, &Item) -> Item + 'static) -> Self {
        self.create_group_header_item = Rc::new(f);
        self
    }

    /// Replace the selection announcement formatter.
    pub fn aria_values(mut self, f: impl Fn(&str) -> String + 'static) -> Self {
        self.aria_values = Rc::new(f);
        self
    }

    /// Replace the open-list announcement formatter.
    pub fn aria_list_open(mut self, f: impl Fn(&str, usize) -> String + 'static) -> Self {
        self.aria_list_open = Rc::new(f);
        self
    }

    /// Replace the focused announcement formatter.
    pub fn aria_focused(mut self, f: impl Fn() -> String + 'static) -> Self {
        self.aria_focused = Rc::new(f);
        self
    }
}

impl Default for SelectHooks {
    fn default() -> Self {
        Self {
            item_filter: Rc::new(default_item_filter),
            group_by: None,
            group_filter: None,
            create_group_header_item: Rc::new(|key: &str, _: &Item| default_group_header_item(key)),
            aria_values: Rc::new(|values: &str| format!("Option {values}, selected.")),
            aria_list_open: Rc::new(|label: &str, count: usize| {
                format!(
                    "You are currently focused on option {label}. There are {count} results available."
                )
            }),
            aria_focused: Rc::new(|| {
                "Select is focused, type to refine list, press down to open the menu.".to_string()
            }),
        }
    }
}

impl fmt::Debug for SelectHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectHooks")
            .field("group_by", &self.group_by.is_some())
            .field("group_filter", &self.group_filter.is_some())
            .finish_non_exhaustive()
    }
}

/// Case-insensitive substring match on the label. A missing label never
/// matches.
pub fn default_item_filter(label: Option<&str>, filter_text: &str, _item: &Item) -> bool {
    match label {
        Some(label) => label.to_lowercase().contains(&filter_text.to_lowercase()),
        None => false,
    }
}

/// `{value: key, label: key}`.
pub fn default_group_header_item(key: &str) -> Item {
    Item::labeled(key, key)
}
