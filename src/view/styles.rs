//! Styling for the select widget.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// `--no-color` wins, then any `NO_COLOR` value; colors are on otherwise.
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

// ===== SelectStyles =====

/// Styles for each part of the rendered select.
///
/// Without colors, emphasis falls back to modifiers only so the hovered row
/// and active chip stay distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectStyles {
    /// Input border when focused.
    pub focused_border: Style,
    /// Input border when blurred or disabled.
    pub idle_border: Style,
    /// A selected value chip.
    pub chip: Style,
    /// The chip under `active_value`.
    pub active_chip: Style,
    /// Placeholder text.
    pub placeholder: Style,
    /// The hovered list row.
    pub hover: Style,
    /// A group header row.
    pub group_header: Style,
    /// A row for the current value.
    pub selected: Style,
    /// Loading and empty-list hints.
    pub hint: Style,
    /// Error notifications.
    pub error: Style,
}

impl SelectStyles {
    /// Build the style set for a color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                focused_border: Style::default().fg(Color::Cyan),
                idle_border: Style::default().fg(Color::DarkGray),
                chip: Style::default().fg(Color::Black).bg(Color::Gray),
                active_chip: Style::default()
                    .fg(Color::White)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
                placeholder: Style::default().fg(Color::DarkGray),
                hover: Style::default().bg(Color::Blue).fg(Color::White),
                group_header: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                selected: Style::default().fg(Color::Green),
                hint: Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
                error: Style::default().fg(Color::Red),
            }
        } else {
            Self {
                focused_border: Style::default().add_modifier(Modifier::BOLD),
                idle_border: Style::default(),
                chip: Style::default(),
                active_chip: Style::default().add_modifier(Modifier::REVERSED),
                placeholder: Style::default(),
                hover: Style::default().add_modifier(Modifier::REVERSED),
                group_header: Style::default().add_modifier(Modifier::BOLD),
                selected: Style::default(),
                hint: Style::default(),
                error: Style::default(),
            }
        }
    }
}

impl Default for SelectStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::default())
    }
}
