//! Filter engine benchmarks.
//!
//! The filtered list is recomputed on every render and keystroke, so it has
//! to stay cheap for lists in the tens of thousands.
//!
//! Run with: cargo bench

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dropselect::config::SelectConfig;
use dropselect::model::{Item, RawItem, SelectValue};
use dropselect::state::{filter_items, next_index, Direction, FilterInput, SelectHooks};

const GROUPS: [&str; 8] = [
    "Sweet", "Savory", "Sour", "Bitter", "Umami", "Spicy", "Salty", "Fresh",
];

fn generate_items(count: usize) -> Vec<RawItem> {
    (0..count)
        .map(|i| {
            Item::labeled(format!("item-{i}"), format!("Option {i} {}", GROUPS[i % 8]))
                .with("group", GROUPS[i % 8])
                .into()
        })
        .collect()
}

fn input<'a>(
    items: &'a [RawItem],
    filter_text: &'a str,
    value: &'a SelectValue,
    config: &'a SelectConfig,
) -> FilterInput<'a> {
    FilterInput {
        items: Some(items),
        has_loader: false,
        filter_text,
        multiple: config.multiple,
        value,
        item_id: &config.item_id,
        label: &config.label,
        filter_selected_items: config.filter_selected_items,
        group_header_selectable: config.group_header_selectable,
    }
}

fn bench_flat_filter(c: &mut Criterion) {
    let config = SelectConfig::default();
    let hooks = SelectHooks::default();
    let value = SelectValue::Empty;
    let mut group = c.benchmark_group("filter_flat");

    for size in [1_000, 10_000, 50_000] {
        let items = generate_items(size);
        group.bench_with_input(BenchmarkId::new("substring", size), &items, |b, items| {
            b.iter(|| filter_items(black_box(&input(items, "sour", &value, &config)), &hooks))
        });
    }
    group.finish();
}

fn bench_multi_exclusion(c: &mut Criterion) {
    let config = SelectConfig {
        multiple: true,
        ..SelectConfig::default()
    };
    let hooks = SelectHooks::default();
    let items = generate_items(10_000);
    let selected: Vec<Item> = items
        .iter()
        .step_by(100)
        .filter_map(RawItem::as_item)
        .cloned()
        .collect();
    let value = SelectValue::Multiple(selected);

    c.bench_function("filter_multi_exclude_100_of_10k", |b| {
        b.iter(|| filter_items(black_box(&input(&items, "", &value, &config)), &hooks))
    });
}

fn bench_grouped(c: &mut Criterion) {
    let config = SelectConfig::default();
    let hooks = SelectHooks::default().group_by_field("group");
    let items = generate_items(10_000);
    let value = SelectValue::Empty;

    c.bench_function("filter_grouped_10k", |b| {
        b.iter(|| filter_items(black_box(&input(&items, "", &value, &config)), &hooks))
    });

    let grouped = filter_items(&input(&items, "", &value, &config), &hooks);
    c.bench_function("next_index_grouped_10k", |b| {
        b.iter(|| next_index(black_box(&grouped), black_box(5_000), Direction::Forward))
    });
}

criterion_group!(benches, bench_flat_filter, bench_multi_exclusion, bench_grouped);
criterion_main!(benches);
