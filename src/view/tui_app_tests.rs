//! Tests for the terminal host: key routing, mouse hit testing, loads.

use super::*;
use crate::config::SelectConfig;
use crate::model::{ErrorEvent, ErrorKind, LoadError};
use crate::source::{loader_fn, StaticLoader};
use crossterm::event::KeyModifiers;
use futures::FutureExt;
use ratatui::backend::TestBackend;

fn food() -> Vec<Item> {
    vec![
        Item::labeled("chocolate", "Chocolate"),
        Item::labeled("pizza", "Pizza"),
        Item::labeled("cake", "Cake"),
    ]
}

fn app_with(select: Select) -> TuiApp<TestBackend> {
    let terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
    let mut app = TuiApp::new_for_test(terminal, select);
    app.select.borrow_mut().handle_focus();
    app.tick_test();
    app
}

fn app() -> TuiApp<TestBackend> {
    app_with(Select::builder(SelectConfig::default()).items(food()).build())
}

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn type_text(app: &mut TuiApp<TestBackend>, text: &str) {
    for c in text.chars() {
        app.handle_key_test(press(KeyCode::Char(c)));
    }
}

fn screen_text(app: &TuiApp<TestBackend>) -> String {
    let buffer = app.terminal().backend().buffer();
    let area = buffer.area;
    let mut out = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

#[test]
fn tui_error_from_io_error() {
    let io_err = io::Error::other("test error");
    let tui_err: TuiError = io_err.into();
    assert!(matches!(tui_err, TuiError::Io(_)));
}

// ===== Keys =====

#[test]
fn ctrl_c_quits() {
    let mut app = app();
    assert!(app.handle_key_test(ctrl('c')));
}

#[test]
fn typing_q_filters_instead_of_quitting() {
    let mut app = app();
    assert!(!app.handle_key_test(press(KeyCode::Char('q'))));
    assert_eq!(app.select().filter_text(), "q");
}

#[test]
fn typed_characters_build_filter_text() {
    let mut app = app();
    type_text(&mut app, "piz");

    let select = app.select();
    assert_eq!(select.filter_text(), "piz");
    assert!(select.is_list_open());
    assert_eq!(select.filtered_items(), vec![food()[1].clone()]);
}

#[test]
fn backspace_edits_filter_text() {
    let mut app = app();
    type_text(&mut app, "ch");
    app.handle_key_test(press(KeyCode::Backspace));
    assert_eq!(app.select().filter_text(), "c");
}

#[test]
fn arrow_and_enter_select_an_item() {
    let mut app = app();
    app.handle_key_test(press(KeyCode::Down)); // opens
    app.handle_key_test(press(KeyCode::Down)); // hover 1
    app.handle_key_test(press(KeyCode::Enter));

    assert_eq!(app.value(), SelectValue::Single(food()[1].clone()));
    assert!(app.notifications().iter().any(|n| n == "change: Pizza"));
    assert!(app.notifications().iter().any(|n| n == "select: Pizza"));
}

#[test]
fn tab_without_selection_blurs() {
    let mut app = app();
    app.handle_key_test(press(KeyCode::Tab));
    assert!(!app.select().is_focused());

    type_text(&mut app, "c");
    assert!(app.select().is_focused(), "Typing focuses again");
}

#[test]
fn host_chords_toggle_props() {
    let mut app = app();
    app.handle_key_test(ctrl('t'));
    assert!(app.select().config().multiple);

    app.handle_key_test(ctrl('d'));
    assert!(app.select().config().disabled);
    app.handle_key_test(ctrl('d'));
    assert!(!app.select().config().disabled);
}

#[test]
fn ctrl_x_clears_selection() {
    let mut app = app_with(
        Select::builder(SelectConfig::default())
            .items(food())
            .value("cake")
            .build(),
    );
    app.handle_key_test(ctrl('x'));
    assert_eq!(app.value(), SelectValue::Empty);
    assert!(app.notifications().iter().any(|n| n == "clear: Cake"));
}

// ===== Loads =====

#[test]
fn reload_runs_loader_on_the_pool() {
    let mut app = app_with(
        Select::builder(SelectConfig::default())
            .loader(StaticLoader::new(food()))
            .build(),
    );
    app.handle_key_test(ctrl('r'));

    let select = app.select();
    assert!(!select.is_loading());
    assert_eq!(select.filtered_items(), food());
    drop(select);
    assert!(app.notifications().iter().any(|n| n == "loaded: 3 items"));
}

#[test]
fn failing_loader_surfaces_error_line() {
    let loader = loader_fn(|_: &str| {
        async { Err::<crate::source::LoadResponse, _>(LoadError::failed("error 123")) }
            .boxed_local()
    });
    let mut app = app_with(Select::builder(SelectConfig::default()).loader(loader).build());
    app.handle_key_test(ctrl('r'));

    assert!(!app.select().is_loading());
    let expected = describe_event(
        &SelectEvent::Error(ErrorEvent {
            kind: ErrorKind::LoadOptions,
            details: "error 123".to_string(),
        }),
        "label",
    )
    .unwrap();
    assert_eq!(expected, "error (loadOptions): error 123");
    assert!(app.notifications().contains(&expected));
}

#[test]
fn poll_timeout_shrinks_to_debounce_deadline() {
    let mut app = app_with(
        Select::builder(SelectConfig {
            debounce_wait_ms: 40,
            ..SelectConfig::default()
        })
        .loader(StaticLoader::new(food()))
        .build(),
    );
    assert_eq!(app.poll_timeout(), IDLE_TICK);

    type_text(&mut app, "c");
    assert!(app.poll_timeout() <= Duration::from_millis(40));
}

// ===== Mouse =====

#[test]
fn clicking_input_toggles_list_and_row_selects() {
    let mut app = app();
    app.render_test().unwrap();

    app.handle_mouse_test(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 5,
        row: 1,
        modifiers: KeyModifiers::NONE,
    });
    assert!(app.select().is_list_open());
    app.render_test().unwrap();

    // Input rows 0..3, list border at 3, first entry at 4.
    app.handle_mouse_test(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 5,
        row: 6,
        modifiers: KeyModifiers::NONE,
    });
    assert_eq!(app.value(), SelectValue::Single(food()[2].clone()));
}

#[test]
fn mouse_without_a_rendered_frame_is_ignored() {
    let mut app = app();
    app.handle_mouse_test(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 5,
        row: 1,
        modifiers: KeyModifiers::NONE,
    });
    assert!(!app.select().is_list_open());
}

#[test]
fn hover_is_suppressed_while_wheel_scrolling() {
    let mut app = app();
    app.handle_key_test(press(KeyCode::Down));
    app.render_test().unwrap();

    app.handle_mouse_test(MouseEvent {
        kind: MouseEventKind::ScrollDown,
        column: 5,
        row: 4,
        modifiers: KeyModifiers::NONE,
    });
    assert_eq!(app.select().hover_item_index(), 1);
    assert!(app.select().state().is_scrolling);

    app.handle_mouse_test(MouseEvent {
        kind: MouseEventKind::Moved,
        column: 5,
        row: 4,
        modifiers: KeyModifiers::NONE,
    });
    assert_eq!(app.select().hover_item_index(), 0);
}

// ===== Rendering =====

#[test]
fn render_shows_notifications() {
    let mut app = app();
    type_text(&mut app, "pi");
    app.render_test().unwrap();

    let screen = screen_text(&app);
    assert!(screen.contains("Pizza"));
    assert!(screen.contains("filter: 1 results"));
}

#[test]
fn notifications_are_capped() {
    let mut app = app();
    type_text(&mut app, "abcdefgh");
    assert_eq!(app.notifications().len(), MAX_NOTIFICATIONS);
    assert_eq!(app.notifications().last().unwrap(), "filter: 0 results");
}
