//! Tests for the select aggregate and its builder.

use super::*;
use crate::model::Item;

fn food() -> Vec<Item> {
    vec![
        Item::labeled("chocolate", "Chocolate").with("group", "Sweet"),
        Item::labeled("pizza", "Pizza").with("group", "Savory"),
        Item::labeled("cake", "Cake").with("group", "Sweet"),
    ]
}

// ===== Builder tests =====

#[test]
fn new_select_is_closed_and_empty() {
    let select = Select::new(SelectConfig::default());

    assert!(!select.is_list_open(), "List should start closed");
    assert!(!select.is_focused(), "Select should start unfocused");
    assert!(!select.is_loading());
    assert_eq!(select.value(), &SelectValue::Empty);
    assert_eq!(select.items(), None);
    assert!(select.filtered_items().is_empty());
    assert_eq!(select.hover_item_index(), 0);
}

#[test]
fn build_resolves_string_value_against_items() {
    let select = Select::builder(SelectConfig::default())
        .items(food())
        .value("cake")
        .build();

    assert_eq!(
        select.value(),
        &SelectValue::Single(food()[2].clone()),
        "String value should resolve to the full item"
    );
    assert_eq!(select.just_value(), &JustValue::One("cake".into()));
}

#[test]
fn build_never_queues_events() {
    let select = Select::builder(SelectConfig::default())
        .items(food())
        .value("pizza")
        .build();
    assert!(select.events().is_empty());
}

#[test]
fn build_applies_group_by_field_from_config() {
    let config = SelectConfig {
        group_by: Some("group".to_string()),
        ..SelectConfig::default()
    };
    let select = Select::builder(config).items(food()).build();

    let list = select.filtered_items();
    assert_eq!(list.len(), 5, "Two headers plus three members");
    assert!(list[0].is_group_header());
    assert_eq!(
        select.hover_item_index(),
        1,
        "Hover should skip the leading header"
    );
}

#[test]
fn explicit_group_by_hook_wins_over_config() {
    let config = SelectConfig {
        group_by: Some("group".to_string()),
        ..SelectConfig::default()
    };
    let hooks = SelectHooks::default().group_by(|_| Some("All".to_string()));
    let select = Select::builder(config).hooks(hooks).items(food()).build();

    let headers = select
        .filtered_items()
        .into_iter()
        .filter(Item::is_group_header)
        .count();
    assert_eq!(headers, 1);
}

#[test]
fn multiple_mode_wraps_scalar_initial_value() {
    let config = SelectConfig {
        multiple: true,
        ..SelectConfig::default()
    };
    let select = Select::builder(config)
        .items(food())
        .value("pizza")
        .build();

    assert_eq!(
        select.value(),
        &SelectValue::Multiple(vec![food()[1].clone()])
    );
    assert_eq!(select.just_value(), &JustValue::Many(vec!["pizza".into()]));
}

#[test]
fn initial_duplicates_are_removed() {
    let config = SelectConfig {
        multiple: true,
        ..SelectConfig::default()
    };
    let select = Select::builder(config)
        .items(food())
        .value(vec![food()[0].clone(), food()[0].clone(), food()[1].clone()])
        .build();
    assert_eq!(select.value().len(), 2);
}

// ===== Accessor tests =====

#[test]
fn hovered_item_is_none_when_out_of_range() {
    let mut select = Select::builder(SelectConfig::default())
        .items(food())
        .build();
    assert_eq!(select.hovered_item(), Some(food()[0].clone()));

    select.state.hover_item_index = 10;
    assert_eq!(select.hovered_item(), None);
}

#[test]
fn drain_events_empties_the_outbox() {
    let mut select = Select::builder(SelectConfig::default())
        .items(food())
        .build();
    select.handle_focus();

    let events = select.drain_events();
    assert_eq!(events, vec![SelectEvent::Focus]);
    assert!(select.drain_events().is_empty());
}

#[test]
fn debug_output_omits_closures() {
    let select = Select::new(SelectConfig::default());
    let debug = format!("{select:?}");
    assert!(debug.contains("Select"));
    assert!(debug.contains("has_loader: false"));
}
