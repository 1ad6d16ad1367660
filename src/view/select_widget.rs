//! Rendering of a [`Select`] as a ratatui widget.
//!
//! The widget is a pure function of the select's public state: input line
//! with value chips, the filtered list while open, the live-region line, and
//! the host's recent notifications.

use crate::model::{Item, SelectValue};
use crate::state::Select;
use crate::view::styles::SelectStyles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

/// Rows taken by the bordered input line.
pub const INPUT_HEIGHT: u16 = 3;

/// Text shown when nothing is selected and no filter text is typed.
pub const PLACEHOLDER: &str = "Please select";

/// Shown in an open list with no entries.
pub const NO_OPTIONS: &str = "No options";

/// Shown in an open list while a load is outstanding.
pub const LOADING: &str = "Loading...";

/// Screen regions of the rendered select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectLayout {
    /// Bordered input line.
    pub input: Rect,
    /// Bordered list, present only while the list is open and fits.
    pub list: Option<Rect>,
    /// Live-region announcement line.
    pub aria: Rect,
    /// Recent notifications.
    pub notifications: Rect,
}

/// Split `area` top to bottom: input, list, announcement, notifications.
///
/// The list shrinks first when space runs out; it needs at least one inner
/// row to be shown at all.
pub fn select_layout(
    area: Rect,
    list_open: bool,
    list_len: usize,
    notification_rows: u16,
) -> SelectLayout {
    let input_h = area.height.min(INPUT_HEIGHT);
    let mut remaining = area.height - input_h;
    let aria_h = remaining.min(1);
    remaining -= aria_h;
    let notif_h = remaining.min(notification_rows);
    remaining -= notif_h;

    let list = if list_open && remaining > 2 {
        let rows = u16::try_from(list_len.max(1)).unwrap_or(u16::MAX);
        Some(Rect {
            x: area.x,
            y: area.y + input_h,
            width: area.width,
            height: rows.saturating_add(2).min(remaining),
        })
    } else {
        None
    };
    let list_h = list.map_or(0, |r| r.height);

    let aria = Rect {
        x: area.x,
        y: area.y + input_h + list_h,
        width: area.width,
        height: aria_h,
    };
    let notifications = Rect {
        x: area.x,
        y: aria.y + aria_h,
        width: area.width,
        height: notif_h,
    };

    SelectLayout {
        input: Rect {
            height: input_h,
            ..area
        },
        list,
        aria,
        notifications,
    }
}

/// First visible list row so that `hover` stays in view.
pub fn list_offset(hover: usize, visible_rows: usize) -> usize {
    if visible_rows == 0 {
        return 0;
    }
    (hover + 1).saturating_sub(visible_rows)
}

/// Map a screen cell to a list index, if it lands on a list row.
pub fn list_row_at(list: Rect, hover: usize, column: u16, row: u16) -> Option<usize> {
    let inner = inner_rect(list);
    let inside = column >= inner.x
        && column < inner.x + inner.width
        && row >= inner.y
        && row < inner.y + inner.height;
    if !inside {
        return None;
    }
    let offset = list_offset(hover, usize::from(inner.height));
    Some(offset + usize::from(row - inner.y))
}

fn inner_rect(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// Cut `text` to at most `max` display columns, marking the cut with `…`.
pub fn truncate_to_width(text: &str, max: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        used += w;
        out.push(c);
    }
    if max > 0 {
        out.push('…');
    }
    out
}

/// Widget drawing a select and the host's notifications.
pub struct SelectView<'a> {
    select: &'a Select,
    styles: SelectStyles,
    notifications: &'a [String],
}

impl<'a> SelectView<'a> {
    /// Create a view over `select` with default styles and no notifications.
    pub fn new(select: &'a Select) -> Self {
        Self {
            select,
            styles: SelectStyles::default(),
            notifications: &[],
        }
    }

    /// Use a specific style set.
    pub fn styles(mut self, styles: SelectStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Show these notification lines under the select, newest last.
    pub fn notifications(mut self, notifications: &'a [String]) -> Self {
        self.notifications = notifications;
        self
    }

    fn label_of(&self, item: &Item) -> String {
        item.label(&self.select.config().label)
            .map(|l| l.into_owned())
            .unwrap_or_default()
    }

    fn input_line(&self) -> Line<'static> {
        let select = self.select;
        let mut spans = Vec::new();

        if let SelectValue::Multiple(items) = select.value() {
            for (i, item) in items.iter().enumerate() {
                let style = if select.active_value() == Some(i) {
                    self.styles.active_chip
                } else {
                    self.styles.chip
                };
                spans.push(Span::styled(format!(" {} ", self.label_of(item)), style));
                spans.push(Span::raw(" "));
            }
        }

        let text = select.filter_text();
        if !text.is_empty() {
            spans.push(Span::raw(text.to_string()));
        } else if let Some(item) = select.value().as_single() {
            spans.push(Span::raw(self.label_of(item)));
        } else if !select.value().has_value() {
            spans.push(Span::styled(PLACEHOLDER, self.styles.placeholder));
        }

        if select.is_focused() && !select.config().disabled {
            spans.push(Span::styled(" ", self.styles.hover));
        }
        Line::from(spans)
    }

    fn input_block(&self) -> Block<'static> {
        let select = self.select;
        let config = select.config();

        let title = if config.disabled {
            " Select (disabled) "
        } else if config.multiple {
            " Select (multiple) "
        } else {
            " Select "
        };

        let mut indicators = Vec::new();
        if select.is_loading() {
            indicators.push("…");
        }
        if config.clearable && !config.disabled && select.value().has_value() {
            indicators.push("×");
        }
        indicators.push(if select.is_list_open() { "▴" } else { "▾" });

        let border = if select.is_focused() {
            self.styles.focused_border
        } else {
            self.styles.idle_border
        };

        Block::bordered()
            .border_style(border)
            .title_top(Line::from(title))
            .title_top(Line::from(format!(" {} ", indicators.join(" "))).right_aligned())
    }

    fn list_lines(&self, filtered: &[Item], inner: Rect) -> Vec<Line<'static>> {
        let select = self.select;
        if filtered.is_empty() {
            let hint = if select.is_loading() { LOADING } else { NO_OPTIONS };
            return vec![Line::from(Span::styled(hint, self.styles.hint))];
        }

        let visible = usize::from(inner.height);
        let offset = list_offset(select.hover_item_index(), visible);
        let width = usize::from(inner.width);

        filtered
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(index, item)| {
                let marker = if select.is_item_active(item) == Some(true) {
                    "✓ "
                } else {
                    "  "
                };
                let indent = if item.is_group_item() { "  " } else { "" };
                let label = truncate_to_width(
                    &self.label_of(item),
                    width.saturating_sub(marker.len() + indent.len()),
                );

                let mut style = if item.is_group_header() {
                    self.styles.group_header
                } else if select.is_item_active(item) == Some(true) {
                    self.styles.selected
                } else {
                    Style::default()
                };
                if index == select.hover_item_index() {
                    style = style.patch(self.styles.hover);
                }
                Line::from(Span::styled(format!("{marker}{indent}{label}"), style))
            })
            .collect()
    }

    fn aria_line(&self) -> String {
        let select = self.select;
        if !select.is_focused() {
            return String::new();
        }
        let selection = select.aria_selection();
        let context = select.aria_context();
        format!("{selection} {context}").trim().to_string()
    }
}

impl Widget for SelectView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let filtered = self.select.filtered_items();
        let notification_rows = u16::try_from(self.notifications.len()).unwrap_or(u16::MAX);
        let layout = select_layout(
            area,
            self.select.is_list_open(),
            filtered.len(),
            notification_rows,
        );

        Paragraph::new(self.input_line())
            .block(self.input_block())
            .render(layout.input, buf);

        if let Some(list_area) = layout.list {
            let inner = inner_rect(list_area);
            Paragraph::new(self.list_lines(&filtered, inner))
                .block(Block::bordered().border_style(self.styles.idle_border))
                .render(list_area, buf);
        }

        Paragraph::new(Line::from(Span::styled(self.aria_line(), self.styles.hint)))
            .render(layout.aria, buf);

        let shown = usize::from(layout.notifications.height);
        let start = self.notifications.len().saturating_sub(shown);
        let lines: Vec<Line> = self.notifications[start..]
            .iter()
            .map(|n| {
                let style = if n.starts_with("error") {
                    self.styles.error
                } else {
                    self.styles.hint
                };
                Line::from(Span::styled(n.clone(), style))
            })
            .collect();
        Paragraph::new(lines).render(layout.notifications, buf);
    }
}

#[cfg(test)]
#[path = "select_widget_tests.rs"]
mod tests;
