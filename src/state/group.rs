//! Group projection: flat filtered list to headers interleaved with members.

use crate::model::item::{GROUP_HEADER_KEY, GROUP_ITEM_KEY, SELECTABLE_KEY};
use crate::model::Item;
use crate::state::hooks::SelectHooks;
use std::collections::HashMap;

/// Expand `items` into grouped order.
///
/// Groups appear in first-seen order unless the hooks supply a
/// `group_filter`; keys it drops are omitted and keys it invents are
/// ignored. Items whose group key is `None` form an unheaded group that is
/// placed like any other key (under the empty-string key). Members keep
/// their relative order and are tagged `groupItem: true`.
///
/// Returns the input unchanged when no `group_by` hook is set.
pub fn group_items(items: Vec<Item>, hooks: &SelectHooks, header_selectable: bool) -> Vec<Item> {
    let Some(group_by) = hooks.group_by.as_ref() else {
        return items;
    };

    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<Item>> = HashMap::new();

    for item in items {
        let key = group_by(&item);
        let slot = key.clone().unwrap_or_default();

        let members = groups.entry(slot.clone()).or_insert_with(|| {
            order.push(slot.clone());
            let mut members = Vec::new();
            if let Some(key) = key.as_deref().filter(|k| !k.is_empty()) {
                members.push(group_header(key, &item, hooks, header_selectable));
            }
            members
        });

        let grouped = key.as_deref().is_some_and(|k| !k.is_empty());
        let mut member = Item::new().with(GROUP_ITEM_KEY, grouped);
        for (field, value) in item.as_map() {
            member.set(field.clone(), value.clone());
        }
        members.push(member);
    }

    let order = match hooks.group_filter.as_ref() {
        Some(group_filter) => group_filter(order),
        None => order,
    };

    let mut projected = Vec::new();
    for key in order {
        if let Some(members) = groups.remove(&key) {
            projected.extend(members);
        }
    }
    projected
}

fn group_header(key: &str, first: &Item, hooks: &SelectHooks, header_selectable: bool) -> Item {
    let mut header = (hooks.create_group_header_item)(key, first);
    header.set("id", key);
    header.set(GROUP_HEADER_KEY, true);
    header.set(SELECTABLE_KEY, header_selectable);
    header
}
