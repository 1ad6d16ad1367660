//! Keyboard bindings configuration.

use crate::model::key_action::{KeyAction, SelectKey};
use crossterm::event::KeyEvent;
use std::collections::HashMap;

/// Maps keyboard events to host actions.
///
/// The navigation keys map onto [`SelectKey`]; control chords drive the
/// host-only actions. Anything unbound is treated as filter input by the
/// event loop.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        use crossterm::event::{KeyCode, KeyModifiers};

        let mut bindings = HashMap::new();

        // Select keys
        for (code, key) in [
            (KeyCode::Esc, SelectKey::Escape),
            (KeyCode::Enter, SelectKey::Enter),
            (KeyCode::Down, SelectKey::ArrowDown),
            (KeyCode::Up, SelectKey::ArrowUp),
            (KeyCode::Tab, SelectKey::Tab),
            (KeyCode::Backspace, SelectKey::Backspace),
            (KeyCode::Left, SelectKey::ArrowLeft),
            (KeyCode::Right, SelectKey::ArrowRight),
        ] {
            bindings.insert(KeyEvent::new(code, KeyModifiers::NONE), KeyAction::Select(key));
        }

        // Host controls
        bindings.insert(
            KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL),
            KeyAction::ClearAll,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL),
            KeyAction::ToggleMultiple,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL),
            KeyAction::ToggleDisabled,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL),
            KeyAction::Reload,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            KeyAction::Quit,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
            KeyAction::Quit,
        );

        Self { bindings }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn default_bindings_map_arrows_to_select_keys() {
        let bindings = KeyBindings::default();

        assert_eq!(
            bindings.get(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)),
            Some(KeyAction::Select(SelectKey::ArrowDown))
        );
        assert_eq!(
            bindings.get(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE)),
            Some(KeyAction::Select(SelectKey::ArrowLeft))
        );
    }

    #[test]
    fn default_bindings_map_ctrl_c_to_quit() {
        let bindings = KeyBindings::default();
        let key_event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);

        assert_eq!(
            bindings.get(key_event),
            Some(KeyAction::Quit),
            "Ctrl+C should always quit"
        );
    }

    #[test]
    fn printable_characters_are_unbound() {
        let bindings = KeyBindings::default();
        for c in ['q', 'x', 'j', ' '] {
            assert_eq!(
                bindings.get(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)),
                None,
                "'{c}' must reach the filter text"
            );
        }
    }
}
