use super::*;

use std::collections::HashSet;
use std::time::Duration;

#[test]
fn catalog_lists_all_eight_kinds_once() {
    let catalog = WidgetTemplate::catalog();
    assert_eq!(catalog.len(), 8);

    let kinds: HashSet<_> = catalog.iter().map(|t| t.kind).collect();
    assert_eq!(kinds.len(), 8);

    assert_eq!(catalog[0].kind, GadgetKind::Clock);
    assert_eq!(catalog[7].kind, GadgetKind::Currency);
}

#[test]
fn catalog_sizes_match_original_defaults() {
    assert_eq!(
        WidgetTemplate::for_kind(GadgetKind::Todo).size,
        SizeClass::Large
    );
    assert_eq!(
        WidgetTemplate::for_kind(GadgetKind::SystemMonitor).size,
        SizeClass::Small
    );
    assert_eq!(
        WidgetTemplate::for_kind(GadgetKind::Timer).size,
        SizeClass::Small
    );
    assert_eq!(
        WidgetTemplate::for_kind(GadgetKind::Clock).size,
        SizeClass::Medium
    );
}

#[test]
fn size_class_maps_to_fixed_pixel_footprint() {
    assert_eq!(SizeClass::Small.dimensions().width, 150.0);
    assert_eq!(SizeClass::Medium.dimensions().width, 200.0);
    assert_eq!(SizeClass::Large.dimensions().width, 300.0);
    for size in [SizeClass::Small, SizeClass::Medium, SizeClass::Large] {
        let dims = size.dimensions();
        assert_eq!(dims.width, dims.height);
    }
}

#[test]
fn slugs_round_trip_for_every_kind() {
    for kind in GadgetKind::ALL {
        assert_eq!(GadgetKind::from_slug(kind.slug()).unwrap(), kind);
    }
    assert!(GadgetKind::from_slug("rss_reader").is_err());
}

#[test]
fn refresh_intervals_follow_kind() {
    assert_eq!(
        GadgetKind::Clock.refresh_interval(),
        Some(Duration::from_secs(1))
    );
    assert_eq!(
        GadgetKind::SystemMonitor.refresh_interval(),
        Some(Duration::from_secs(2))
    );
    assert_eq!(GadgetKind::Weather.refresh_interval(), None);
    assert_eq!(GadgetKind::Calendar.refresh_interval(), None);
}

#[test]
fn todo_toggle_flips_only_the_targeted_index() {
    let mut list = TodoList::seeded();
    list.toggle(1);

    assert!(!list.items[0].completed);
    assert!(list.items[1].completed);
    assert!(!list.items[2].completed);

    list.toggle(1);
    assert!(!list.items[1].completed);
}

#[test]
fn todo_toggle_out_of_range_is_a_no_op() {
    let mut list = TodoList::seeded();
    let before = list.clone();
    list.toggle(3);
    list.toggle(usize::MAX);
    assert_eq!(list, before);
}

#[test]
fn todo_add_trims_and_skips_blank_input() {
    let mut list = TodoList::default();
    list.add("  water the plants  ");
    list.add("   ");
    list.add("");

    assert_eq!(list.items.len(), 1);
    assert_eq!(list.items[0].text, "water the plants");
    assert!(!list.items[0].completed);
}

#[test]
fn todo_clear_completed_keeps_open_items_in_order() {
    let mut list = TodoList::seeded();
    list.toggle(0);
    list.toggle(2);
    list.clear_completed();

    assert_eq!(list.items.len(), 1);
    assert_eq!(list.items[0].text, "Prepare meeting materials");
    assert_eq!(list.completed_count(), 0);
}

#[test]
fn todo_remove_out_of_range_is_a_no_op() {
    let mut list = TodoList::seeded();
    list.remove(17);
    assert_eq!(list.items.len(), 3);
    list.remove(0);
    assert_eq!(list.items.len(), 2);
}

#[test]
fn todo_list_serializes_as_text_completed_pairs() {
    let mut list = TodoList::default();
    list.add("ship it");
    list.toggle(0);

    let value = serde_json::to_value(&list).unwrap();
    assert_eq!(value, serde_json::json!({ "todos": [["ship it", true]] }));

    let parsed: TodoList = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, list);
}

#[test]
fn widget_config_tolerates_missing_fields() {
    let config: WidgetConfig = serde_json::from_str("{}").unwrap();
    assert!(config.is_empty());

    let config: WidgetConfig =
        serde_json::from_str(r#"{ "icon": "⏰", "shape": "circle" }"#).unwrap();
    assert_eq!(config.icon.as_deref(), Some("⏰"));
    assert_eq!(config.shape, Some(Shape::Circle));
}
