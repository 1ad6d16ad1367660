//! Outbound notifications produced by the select core.

use super::item::Item;
use super::value::SelectValue;
use std::fmt;

/// Where a surfaced error originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The injected options loader rejected.
    LoadOptions,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::LoadOptions => f.write_str("loadOptions"),
        }
    }
}

/// Error payload handed to the host; never thrown further.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorEvent {
    /// Error origin.
    pub kind: ErrorKind,
    /// Display text of the original error.
    pub details: String,
}

/// A notification queued for the host, in emission order.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectEvent {
    /// The user committed a selection.
    Change(SelectValue),
    /// The selection identity changed (user or programmatic).
    Input(SelectValue),
    /// An item was chosen from the list.
    Select(Item),
    /// An item (or the whole selection) was removed.
    Clear(SelectValue),
    /// A recoverable failure.
    Error(ErrorEvent),
    /// The loader delivered a new item set.
    Loaded(Vec<Item>),
    /// Filter text changed; carries the new filtered list.
    Filter(Vec<Item>),
    /// The pointer hovered a list index.
    HoverItem(usize),
    /// The control gained focus.
    Focus,
    /// The control lost focus.
    Blur,
}

impl SelectEvent {
    /// Short name used in logs and the demo's event line.
    pub fn name(&self) -> &'static str {
        match self {
            SelectEvent::Change(_) => "change",
            SelectEvent::Input(_) => "input",
            SelectEvent::Select(_) => "select",
            SelectEvent::Clear(_) => "clear",
            SelectEvent::Error(_) => "error",
            SelectEvent::Loaded(_) => "loaded",
            SelectEvent::Filter(_) => "filter",
            SelectEvent::HoverItem(_) => "hoveritem",
            SelectEvent::Focus => "focus",
            SelectEvent::Blur => "blur",
        }
    }
}
