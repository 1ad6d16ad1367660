//! End-to-end scenarios against the public `Select` surface.

use dropselect::config::SelectConfig;
use dropselect::model::{ErrorEvent, ErrorKind, Item, LoadError, SelectEvent, SelectKey};
use dropselect::source::{loader_fn, LoadResponse, StaticLoader};
use dropselect::state::{drive_due_loads, is_item_selectable, next_index, Direction, Select};
use futures::executor::block_on;
use futures::FutureExt;
use std::cell::RefCell;

fn food() -> Vec<Item> {
    vec![
        Item::labeled("chocolate", "Chocolate"),
        Item::labeled("pizza", "Pizza"),
        Item::labeled("cake", "Cake"),
    ]
}

fn grouped_food() -> Vec<Item> {
    vec![
        Item::labeled("chocolate", "Chocolate").with("group", "Sweet"),
        Item::labeled("pizza", "Pizza").with("group", "Savory"),
        Item::labeled("cake", "Cake").with("group", "Sweet"),
        Item::labeled("chips", "Chips").with("group", "Savory"),
    ]
}

fn grouped_select() -> Select {
    Select::builder(SelectConfig {
        group_by: Some("group".to_string()),
        ..SelectConfig::default()
    })
    .items(grouped_food())
    .build()
}

fn labels(items: &[Item]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.label("label").unwrap_or_default().into_owned())
        .collect()
}

// ===== Filtering =====

#[test]
fn empty_filter_returns_all_items_in_order() {
    let select = Select::builder(SelectConfig::default())
        .items(food())
        .build();
    assert_eq!(select.filtered_items(), food());
}

#[test]
fn multi_mode_hides_selected_items() {
    let select = Select::builder(SelectConfig {
        multiple: true,
        filter_selected_items: true,
        ..SelectConfig::default()
    })
    .items(food())
    .value(vec![Item::labeled("chocolate", "Chocolate")])
    .build();

    let filtered = select.filtered_items();
    assert_eq!(filtered.len(), 2);
    assert_eq!(labels(&filtered), vec!["Pizza", "Cake"]);
}

// ===== Grouping =====

#[test]
fn grouped_list_interleaves_headers_in_first_seen_order() {
    let filtered = grouped_select().filtered_items();

    assert_eq!(
        labels(&filtered),
        vec!["Sweet", "Chocolate", "Cake", "Savory", "Pizza", "Chips"]
    );
    assert!(filtered[0].is_group_header());
    assert!(filtered[3].is_group_header());
    assert!(!is_item_selectable(Some(&filtered[0])));
    assert!(!is_item_selectable(Some(&filtered[3])));
    assert!(filtered[1].is_group_item());
}

#[test]
fn next_index_from_header_lands_on_selectable_entry() {
    let filtered = grouped_select().filtered_items();

    assert_eq!(next_index(&filtered, 0, Direction::Forward), 1);
    assert_eq!(next_index(&filtered, 3, Direction::Forward), 1);
    assert_eq!(next_index(&filtered, 2, Direction::Forward), 4);
}

#[test]
fn keyboard_never_rests_on_a_header() {
    let mut select = grouped_select();
    select.handle_focus();
    select.open_list();
    assert_eq!(select.hover_item_index(), 1);

    for _ in 0..8 {
        select.handle_key_down(SelectKey::ArrowDown);
        let hovered = select.hovered_item();
        assert!(is_item_selectable(hovered.as_ref()), "{hovered:?}");
    }
}

// ===== Async loading =====

#[test]
fn rejected_load_reports_one_error_and_no_loaded() {
    let loader = loader_fn(|_: &str| {
        async { Err::<LoadResponse, _>(LoadError::failed("error 123")) }.boxed_local()
    });
    let select = RefCell::new(
        Select::builder(SelectConfig::default())
            .loader(loader)
            .build(),
    );

    select.borrow_mut().reload_options();
    assert!(select.borrow().is_loading());
    block_on(drive_due_loads(&select));

    let mut select = select.into_inner();
    let events = select.drain_events();
    let errors: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            SelectEvent::Error(err) => Some(err.clone()),
            _ => None,
        })
        .collect();

    assert_eq!(
        errors,
        vec![ErrorEvent {
            kind: ErrorKind::LoadOptions,
            details: "error 123".to_string(),
        }]
    );
    assert!(!events.iter().any(|e| matches!(e, SelectEvent::Loaded(_))));
    assert!(!select.is_loading());
}

#[test]
fn loader_results_feed_the_list() {
    let select = RefCell::new(
        Select::builder(SelectConfig::default())
            .loader(StaticLoader::new(food()))
            .build(),
    );
    select.borrow_mut().handle_focus();
    select.borrow_mut().open_list();
    block_on(drive_due_loads(&select));

    let select = select.borrow();
    assert_eq!(select.filtered_items(), food());
    assert_eq!(select.hover_item_index(), 0);
}

// ===== Keyboard =====

#[test]
fn backspace_removes_active_chip_and_steps_left() {
    let mut select = Select::builder(SelectConfig {
        multiple: true,
        ..SelectConfig::default()
    })
    .items(food())
    .value(food())
    .build();
    select.handle_focus();
    select.handle_key_down(SelectKey::ArrowLeft);
    select.handle_key_down(SelectKey::ArrowLeft);
    assert_eq!(select.active_value(), Some(1));

    select.handle_key_down(SelectKey::Backspace);

    assert_eq!(labels(select.value().items()), vec!["Chocolate", "Cake"]);
    assert_eq!(select.active_value(), Some(0));
}

#[test]
fn full_pick_flow_emits_in_order() {
    let mut select = Select::builder(SelectConfig::default())
        .items(food())
        .build();

    select.handle_focus();
    select.set_filter_text("piz");
    select.handle_key_down(SelectKey::Enter);

    let names: Vec<_> = select.drain_events().iter().map(SelectEvent::name).collect();
    assert_eq!(names, vec!["focus", "filter", "change", "select", "input"]);
    assert_eq!(select.filter_text(), "");
    assert!(!select.is_list_open());
}
