//! Tests for hover navigation.

use super::*;
use crate::config::SelectConfig;

fn flat() -> Vec<Item> {
    vec![
        Item::labeled("a", "A"),
        Item::labeled("b", "B").with("selectable", false),
        Item::labeled("c", "C"),
        Item::labeled("d", "D"),
    ]
}

fn grouped() -> Vec<Item> {
    vec![
        Item::labeled("Sweet", "Sweet")
            .with("groupHeader", true)
            .with("selectable", false),
        Item::labeled("chocolate", "Chocolate").with("groupItem", true),
        Item::labeled("cake", "Cake").with("groupItem", true),
        Item::labeled("Savory", "Savory")
            .with("groupHeader", true)
            .with("selectable", false),
        Item::labeled("pizza", "Pizza").with("groupItem", true),
    ]
}

fn grouped_select() -> Select {
    let config = SelectConfig {
        group_by: Some("group".to_string()),
        ..SelectConfig::default()
    };
    Select::builder(config)
        .items(vec![
            Item::labeled("chocolate", "Chocolate").with("group", "Sweet"),
            Item::labeled("pizza", "Pizza").with("group", "Savory"),
            Item::labeled("cake", "Cake").with("group", "Sweet"),
        ])
        .build()
}

// ===== next_index tests =====

#[test]
fn next_index_skips_unselectable_items() {
    assert_eq!(next_index(&flat(), 0, Direction::Forward), 2);
    assert_eq!(next_index(&flat(), 2, Direction::Backward), 0);
}

#[test]
fn next_index_wraps_in_both_directions() {
    assert_eq!(next_index(&flat(), 3, Direction::Forward), 0);
    assert_eq!(next_index(&flat(), 0, Direction::Backward), 3);
}

#[test]
fn next_index_from_unselectable_lands_on_nearest_in_direction() {
    assert_eq!(
        next_index(&grouped(), 0, Direction::Forward),
        1,
        "From a header moving down should land on its first member"
    );
    assert_eq!(
        next_index(&grouped(), 3, Direction::Backward),
        4,
        "Backward from an unselectable entry starts after the last selectable"
    );
}

#[test]
fn next_index_never_stops_on_header() {
    let list = grouped();
    let mut index = 0;
    for _ in 0..10 {
        index = next_index(&list, index, Direction::Forward);
        assert!(!list[index].is_group_header(), "Landed on header at {index}");
    }
}

#[test]
fn next_index_returns_zero_when_nothing_selectable() {
    let list = vec![Item::labeled("x", "X").with("selectable", false)];
    assert_eq!(next_index(&list, 0, Direction::Forward), 0);
    assert_eq!(next_index(&[], 0, Direction::Backward), 0);
}

#[test]
fn next_index_includes_opted_in_headers() {
    let mut list = grouped();
    list[0] = list[0].clone().with("selectable", true);
    assert_eq!(next_index(&list, 4, Direction::Forward), 0);
}

// ===== first_selectable_index tests =====

#[test]
fn first_selectable_index_is_zero_without_grouping() {
    assert_eq!(first_selectable_index(&grouped(), false), 0);
}

#[test]
fn first_selectable_index_skips_leading_header() {
    assert_eq!(first_selectable_index(&grouped(), true), 1);
    assert_eq!(first_selectable_index(&[], true), 0);
}

// ===== is_active tests =====

#[test]
fn is_active_compares_single_value_identity() {
    let value = SelectValue::Single(Item::labeled("cake", "Cake"));
    assert_eq!(
        is_active(&Item::labeled("cake", "Renamed"), &value, "value", false),
        Some(true)
    );
    assert_eq!(
        is_active(&Item::labeled("pizza", "Pizza"), &value, "value", false),
        Some(false)
    );
}

#[test]
fn is_active_has_no_opinion_in_multiple_mode() {
    let value = SelectValue::Multiple(vec![Item::labeled("cake", "Cake")]);
    assert_eq!(
        is_active(&Item::labeled("cake", "Cake"), &value, "value", true),
        None
    );
}

// ===== Select hover methods =====

#[test]
fn set_hover_index_emits_only_on_change() {
    let mut select = grouped_select();
    select.drain_events();

    select.set_hover_index(1);
    assert!(select.events().is_empty(), "Unchanged index should not notify");

    select.set_hover_index(2);
    assert_eq!(select.drain_events(), vec![SelectEvent::HoverItem(2)]);
}

#[test]
fn move_hover_crosses_group_boundaries() {
    let mut select = grouped_select();
    assert_eq!(select.hover_item_index(), 1);

    select.move_hover(Direction::Forward);
    assert_eq!(select.hover_item_index(), 2);
    select.move_hover(Direction::Forward);
    assert_eq!(select.hover_item_index(), 4, "Should skip the Savory header");
    select.move_hover(Direction::Forward);
    assert_eq!(select.hover_item_index(), 1, "Should wrap past the Sweet header");
}

#[test]
fn check_hover_selectable_advances_past_header() {
    let mut select = grouped_select();
    select.check_hover_selectable(Some(3), false);
    assert_eq!(select.hover_item_index(), 4);
}

#[test]
fn check_hover_selectable_respects_ignore_group() {
    let mut select = grouped_select();
    select.check_hover_selectable(Some(3), true);
    assert_eq!(select.hover_item_index(), 3);
}

#[test]
fn check_hover_selectable_without_start_uses_zero() {
    let mut select = Select::builder(SelectConfig::default())
        .items(flat())
        .build();
    select.set_hover_index(3);
    select.check_hover_selectable(None, false);
    assert_eq!(select.hover_item_index(), 0);
}

#[test]
fn jump_to_value_index_finds_value() {
    let mut select = grouped_select();
    select.set_value("pizza");
    select.jump_to_value_index();
    assert_eq!(select.hover_item_index(), 4);
}

#[test]
fn jump_to_missing_value_lands_on_first_selectable() {
    let mut select = grouped_select();
    select.set_value("sushi");
    select.set_hover_index(4);
    select.jump_to_value_index();
    assert_eq!(select.hover_item_index(), 1);
}

#[test]
fn jump_to_value_index_ignores_multiple_mode() {
    let config = SelectConfig {
        multiple: true,
        ..SelectConfig::default()
    };
    let mut select = Select::builder(config)
        .items(flat())
        .value("d")
        .build();
    select.jump_to_value_index();
    assert_eq!(select.hover_item_index(), 0);
}
