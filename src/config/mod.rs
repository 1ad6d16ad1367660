//! Configuration module.

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, ConfigError, ConfigFile,
    ResolvedConfig,
};

use crate::state::debounce::DEFAULT_DEBOUNCE_MS;

/// Plain-data props of a select instance.
///
/// Function-valued props (item filter, grouping, ARIA formatters) live in
/// [`crate::state::SelectHooks`]; this struct holds everything that can come
/// from a configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectConfig {
    /// Field used as item identity.
    pub item_id: String,
    /// Field used as display label.
    pub label: String,
    /// Multi-select mode.
    pub multiple: bool,
    /// Hide already-selected items from the list in multi mode.
    pub filter_selected_items: bool,
    /// Allow group headers to be hovered and selected.
    pub group_header_selectable: bool,
    /// Group by this field when no custom `group_by` hook is supplied.
    pub group_by: Option<String>,
    /// Close the list after a selection.
    pub close_list_on_change: bool,
    /// Allow clearing the whole selection.
    pub clearable: bool,
    /// Accept filter text input.
    pub searchable: bool,
    /// Clear filter text when focus is lost.
    pub clear_filter_text_on_blur: bool,
    /// Debounce window for filter-driven loads, in milliseconds.
    pub debounce_wait_ms: u64,
    /// Ignore all interaction.
    pub disabled: bool,
    /// Rehydrate the selection from the id-only projection.
    pub use_just_value: bool,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            item_id: "value".to_string(),
            label: "label".to_string(),
            multiple: false,
            filter_selected_items: true,
            group_header_selectable: false,
            group_by: None,
            close_list_on_change: true,
            clearable: true,
            searchable: true,
            clear_filter_text_on_blur: true,
            debounce_wait_ms: DEFAULT_DEBOUNCE_MS,
            disabled: false,
            use_just_value: false,
        }
    }
}
