//! Terminal host for a select (impure shell).
//!
//! Translates crossterm input into select transitions, runs loader futures
//! on a single-threaded pool, and renders [`SelectView`] after every change.

pub mod select_widget;
pub mod styles;

pub use select_widget::{list_row_at, select_layout, SelectLayout, SelectView};
pub use styles::{ColorConfig, SelectStyles};

use crate::config::keybindings::KeyBindings;
use crate::model::{AppError, Item, KeyAction, SelectEvent, SelectKey, SelectValue};
use crate::state::{drive_load, Direction, Select};
use crossterm::{
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use futures::executor::LocalPool;
use futures::task::LocalSpawnExt;
use ratatui::layout::{Position, Rect};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::cell::RefCell;
use std::io::{self, Stdout};
use std::rc::Rc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Longest wait for input when no debounced load is pending.
const IDLE_TICK: Duration = Duration::from_millis(250);

/// Notification lines kept under the select.
const MAX_NOTIFICATIONS: usize = 4;

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    select: Rc<RefCell<Select>>,
    pool: LocalPool,
    key_bindings: KeyBindings,
    styles: SelectStyles,
    notifications: Vec<String>,
    /// Layout of the last frame, for mouse hit testing
    last_layout: Option<SelectLayout>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(select: Select, styles: SelectStyles) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self::with_terminal(terminal, select, KeyBindings::default(), styles))
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits. The poll timeout shrinks to the pending
    /// debounce deadline so delayed loads fire on time.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.select.borrow_mut().handle_focus();
        self.tick();
        self.draw()?;

        loop {
            if event::poll(self.poll_timeout())? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                    }
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    Event::FocusGained => self.select.borrow_mut().handle_focus(),
                    Event::FocusLost => self.select.borrow_mut().handle_blur(),
                    _ => {}
                }
            }

            self.tick();
            self.draw()?;
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    fn with_terminal(
        terminal: Terminal<B>,
        select: Select,
        key_bindings: KeyBindings,
        styles: SelectStyles,
    ) -> Self {
        Self {
            terminal,
            select: Rc::new(RefCell::new(select)),
            pool: LocalPool::new(),
            key_bindings,
            styles,
            notifications: Vec::new(),
            last_layout: None,
        }
    }

    /// Current selection.
    pub fn value(&self) -> SelectValue {
        self.select.borrow().value().clone()
    }

    fn poll_timeout(&self) -> Duration {
        let select = self.select.borrow();
        match select.debouncer().next_deadline() {
            Some(due) => due.saturating_duration_since(select.now()).min(IDLE_TICK),
            None => IDLE_TICK,
        }
    }

    /// Start due loads, let the pool make progress, then collect events.
    fn tick(&mut self) {
        loop {
            let next = self.select.borrow_mut().poll_due_load();
            let Some(request) = next else {
                break;
            };
            debug!(filter_text = %request.filter_text, "Starting load");
            let shared = Rc::clone(&self.select);
            if let Err(e) = self
                .pool
                .spawner()
                .spawn_local(async move { drive_load(&shared, request).await })
            {
                warn!(error = %e, "Could not spawn load");
            }
        }
        self.pool.run_until_stalled();
        self.collect_notifications();
    }

    fn collect_notifications(&mut self) {
        let (events, label) = {
            let mut select = self.select.borrow_mut();
            let label = select.config().label.clone();
            (select.drain_events(), label)
        };
        for event in events {
            debug!(event = event.name(), "Select event");
            if let Some(line) = describe_event(&event, &label) {
                self.notifications.push(line);
            }
        }
        let excess = self.notifications.len().saturating_sub(MAX_NOTIFICATIONS);
        self.notifications.drain(..excess);
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        let action = self.key_bindings.get(key);
        if action == Some(KeyAction::Quit) {
            return true;
        }

        let mut select = self.select.borrow_mut();
        if !select.is_focused() {
            select.handle_focus();
        }

        match action {
            Some(KeyAction::Select(select_key)) => {
                let outcome = select.handle_key_down(select_key);
                if !outcome.prevent_default {
                    apply_default_key_behavior(&mut select, select_key);
                }
            }
            Some(KeyAction::ClearAll) => select.handle_clear(),
            Some(KeyAction::ToggleMultiple) => {
                let multiple = !select.config().multiple;
                select.set_multiple(multiple);
            }
            Some(KeyAction::ToggleDisabled) => {
                let disabled = !select.config().disabled;
                select.set_disabled(disabled);
            }
            Some(KeyAction::Reload) => select.reload_options(),
            Some(KeyAction::Quit) => return true,
            None => {
                let typed = !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
                if let (KeyCode::Char(c), true) = (key.code, typed) {
                    let mut text = select.filter_text().to_string();
                    text.push(c);
                    select.set_filter_text(text);
                }
            }
        }
        false
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let Some(layout) = self.last_layout else {
            return;
        };
        let mut select = self.select.borrow_mut();
        let hover = select.hover_item_index();
        let list_row = layout
            .list
            .and_then(|list| list_row_at(list, hover, mouse.column, mouse.row));

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = list_row {
                    select.handle_item_click(index);
                } else if layout.input.contains(Position::new(mouse.column, mouse.row)) {
                    select.handle_container_click();
                } else {
                    select.handle_blur();
                }
            }
            MouseEventKind::Moved => {
                select.handle_list_scroll_end();
                if let Some(index) = list_row {
                    select.handle_hover(index);
                }
            }
            MouseEventKind::ScrollDown if select.is_list_open() => {
                select.handle_list_scroll();
                select.move_hover(Direction::Forward);
            }
            MouseEventKind::ScrollUp if select.is_list_open() => {
                select.handle_list_scroll();
                select.move_hover(Direction::Backward);
            }
            _ => {}
        }
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let select = self.select.borrow();
        let size = self.terminal.size()?;
        let area = Rect::new(0, 0, size.width.max(1), size.height);
        let notification_rows = u16::try_from(self.notifications.len()).unwrap_or(u16::MAX);

        self.last_layout = Some(select_layout(
            area,
            select.is_list_open(),
            select.filtered_items().len(),
            notification_rows,
        ));

        let view = SelectView::new(&select)
            .styles(self.styles)
            .notifications(&self.notifications);
        self.terminal.draw(|frame| frame.render_widget(view, frame.area()))?;
        Ok(())
    }
}

/// Host-side completion of a key the select did not consume.
fn apply_default_key_behavior(select: &mut Select, key: SelectKey) {
    match key {
        SelectKey::Backspace if !select.filter_text().is_empty() => {
            let mut text = select.filter_text().to_string();
            text.pop();
            select.set_filter_text(text);
        }
        SelectKey::Tab => select.handle_blur(),
        _ => {}
    }
}

fn labels(items: &[Item], label: &str) -> String {
    items
        .iter()
        .map(|item| item.label(label).map(|l| l.into_owned()).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(", ")
}

/// One notification line per event. Hover moves are too chatty to show.
pub fn describe_event(event: &SelectEvent, label: &str) -> Option<String> {
    let line = match event {
        SelectEvent::Change(value) | SelectEvent::Input(value) | SelectEvent::Clear(value) => {
            format!("{}: {}", event.name(), labels(value.items(), label))
        }
        SelectEvent::Select(item) => {
            format!("select: {}", labels(std::slice::from_ref(item), label))
        }
        SelectEvent::Error(error) => format!("error ({}): {}", error.kind, error.details),
        SelectEvent::Loaded(items) => format!("loaded: {} items", items.len()),
        SelectEvent::Filter(items) => format!("filter: {} results", items.len()),
        SelectEvent::Focus | SelectEvent::Blur => event.name().to_string(),
        SelectEvent::HoverItem(_) => return None,
    };
    Some(line)
}

// ===== Test Helpers =====

#[cfg(test)]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing without terminal initialization.
    pub(crate) fn new_for_test(terminal: Terminal<B>, select: Select) -> Self {
        Self::with_terminal(
            terminal,
            select,
            KeyBindings::default(),
            SelectStyles::default(),
        )
    }

    pub(crate) fn select(&self) -> std::cell::Ref<'_, Select> {
        self.select.borrow()
    }

    pub(crate) fn notifications(&self) -> &[String] {
        &self.notifications
    }

    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        let quit = self.handle_key(key);
        self.tick();
        quit
    }

    pub(crate) fn handle_mouse_test(&mut self, mouse: MouseEvent) {
        self.handle_mouse(mouse);
        self.tick();
    }

    pub(crate) fn tick_test(&mut self) {
        self.tick();
    }

    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Options for the terminal host that do not belong to the select itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct CliArgs {
    /// Disable colors (`--no-color`).
    pub no_color: bool,
}

/// Initialize and run the TUI application for `select`.
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// even when the loop fails. Returns the final selection.
///
/// Logging must be initialized by the caller.
pub fn run_with_select(select: Select, args: CliArgs) -> Result<SelectValue, TuiError> {
    let styles = SelectStyles::with_color_config(ColorConfig::from_env_and_args(args.no_color));
    let mut app = TuiApp::new(select, styles)?;

    let result = app.run();

    restore_terminal()?;

    result.map(|()| app.value())
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "tui_app_tests.rs"]
mod tests;
