//! Domain-level keys the select state machine reacts to, plus the host
//! actions bound next to them.

/// Keys handled by the select, independent of the input backend.
///
/// The mapping from `crossterm::event::KeyEvent` to `SelectKey` is handled
/// by `KeyBindings`. Unmapped keys never reach the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectKey {
    /// Close the list.
    Escape,
    /// Select the hovered item, or close when it is already the value.
    Enter,
    /// Move hover down, or open the list.
    ArrowDown,
    /// Move hover up, or open the list.
    ArrowUp,
    /// Select the hovered item and close the list.
    Tab,
    /// Remove the active (or last) multi value when the filter is empty.
    Backspace,
    /// Move the active multi value left.
    ArrowLeft,
    /// Move the active multi value right.
    ArrowRight,
}

impl SelectKey {
    /// Parse the DOM-style key name (`"ArrowDown"`, `"Enter"`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        let key = match name {
            "Escape" => SelectKey::Escape,
            "Enter" => SelectKey::Enter,
            "ArrowDown" => SelectKey::ArrowDown,
            "ArrowUp" => SelectKey::ArrowUp,
            "Tab" => SelectKey::Tab,
            "Backspace" => SelectKey::Backspace,
            "ArrowLeft" => SelectKey::ArrowLeft,
            "ArrowRight" => SelectKey::ArrowRight,
            _ => return None,
        };
        Some(key)
    }
}

/// Everything a bound key can do in the terminal host.
///
/// Printable characters are not bound: they go to the filter text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Forward to [`crate::state::Select::handle_key_down`].
    Select(SelectKey),
    /// Clear the whole selection (the clear control).
    ClearAll,
    /// Switch between single and multi mode.
    ToggleMultiple,
    /// Toggle the disabled prop.
    ToggleDisabled,
    /// Re-run the loader for the current filter text.
    Reload,
    /// Exit the host.
    Quit,
}

impl From<SelectKey> for KeyAction {
    fn from(key: SelectKey) -> Self {
        KeyAction::Select(key)
    }
}
