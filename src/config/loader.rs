//! Configuration file loading with precedence handling.

use super::SelectConfig;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "DROPSELECT_CONFIG";

/// Environment variable overriding the debounce window in milliseconds.
pub const DEBOUNCE_ENV_VAR: &str = "DROPSELECT_DEBOUNCE_MS";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/dropselect/config.toml`.
///
/// ```toml
/// item_id = "id"
/// label = "name"
/// multiple = true
/// group_by = "category"
/// debounce_wait_ms = 150
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Identity field of items.
    #[serde(default)]
    pub item_id: Option<String>,

    /// Label field of items.
    #[serde(default)]
    pub label: Option<String>,

    /// Start in multi-select mode.
    #[serde(default)]
    pub multiple: Option<bool>,

    /// Hide selected items from the list in multi mode.
    #[serde(default)]
    pub filter_selected_items: Option<bool>,

    /// Allow selecting group headers.
    #[serde(default)]
    pub group_header_selectable: Option<bool>,

    /// Field to group items by.
    #[serde(default)]
    pub group_by: Option<String>,

    /// Close the list after each selection.
    #[serde(default)]
    pub close_list_on_change: Option<bool>,

    /// Show the clear-all control.
    #[serde(default)]
    pub clearable: Option<bool>,

    /// Accept filter text.
    #[serde(default)]
    pub searchable: Option<bool>,

    /// Clear filter text when focus leaves.
    #[serde(default)]
    pub clear_filter_text_on_blur: Option<bool>,

    /// Debounce window for loader requests, in milliseconds.
    #[serde(default)]
    pub debounce_wait_ms: Option<u64>,

    /// Rehydrate the selection from submitted ids.
    #[serde(default)]
    pub use_just_value: Option<bool>,

    /// Start disabled.
    #[serde(default)]
    pub disabled: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Props for the select instance.
    pub select: SelectConfig,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            select: SelectConfig::default(),
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/dropselect/dropselect.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("dropselect").join("dropselect.log")
    } else {
        PathBuf::from("dropselect.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
/// Returns `Err` if file exists but cannot be read or parsed.
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No config file");
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/dropselect/config.toml` on Unix, appropriate path on
/// other platforms. Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("dropselect").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `DROPSELECT_CONFIG` environment variable
/// 3. Default path `~/.config/dropselect/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `DROPSELECT_DEBOUNCE_MS`: Override the debounce window. Values that do
///   not parse as an integer are ignored with a warning.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var(DEBOUNCE_ENV_VAR) {
        match raw.trim().parse::<u64>() {
            Ok(ms) => config.select.debounce_wait_ms = ms,
            Err(e) => tracing::warn!(value = %raw, error = %e, "Ignoring {DEBOUNCE_ENV_VAR}"),
        }
    }

    config
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };
    let select = defaults.select;

    ResolvedConfig {
        select: SelectConfig {
            item_id: config.item_id.unwrap_or(select.item_id),
            label: config.label.unwrap_or(select.label),
            multiple: config.multiple.unwrap_or(select.multiple),
            filter_selected_items: config
                .filter_selected_items
                .unwrap_or(select.filter_selected_items),
            group_header_selectable: config
                .group_header_selectable
                .unwrap_or(select.group_header_selectable),
            group_by: config.group_by.or(select.group_by),
            close_list_on_change: config
                .close_list_on_change
                .unwrap_or(select.close_list_on_change),
            clearable: config.clearable.unwrap_or(select.clearable),
            searchable: config.searchable.unwrap_or(select.searchable),
            clear_filter_text_on_blur: config
                .clear_filter_text_on_blur
                .unwrap_or(select.clear_filter_text_on_blur),
            debounce_wait_ms: config.debounce_wait_ms.unwrap_or(select.debounce_wait_ms),
            disabled: config.disabled.unwrap_or(select.disabled),
            use_just_value: config.use_just_value.unwrap_or(select.use_just_value),
        },
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
///
/// # Arguments
///
/// * `config` - Base resolved config (already merged with defaults, file, and env vars)
/// * `multiple_override` - `Some(true)` when `--multiple` was passed
/// * `group_by_override` - Field from `--group-by`
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    multiple_override: Option<bool>,
    group_by_override: Option<String>,
) -> ResolvedConfig {
    if let Some(multiple) = multiple_override {
        config.select.multiple = multiple;
    }

    if let Some(field) = group_by_override {
        config.select.group_by = Some(field);
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
