use super::*;

use shared::{
    domain::{GadgetKind, Shape, TodoList},
    settings::Settings,
    theme::ThemeMode,
};

fn scratch_storage() -> (tempfile::TempDir, Storage) {
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = Storage::open(dir.path().join("data")).expect("storage");
    (dir, storage)
}

#[test]
fn open_creates_nested_data_dirs() {
    let dir = tempfile::tempdir().expect("tempdir");
    let root = dir.path().join("a").join("b");
    let storage = Storage::open(&root).expect("storage");
    assert!(storage.root().is_dir());
}

#[test]
fn settings_round_trip_preserves_keys_and_values() {
    let (_dir, storage) = scratch_storage();
    let settings = Settings {
        theme: ThemeMode::Dark,
        opacity: 65,
        refresh_interval: 7,
        font: Some("PingFang SC".to_string()),
        auto_start: true,
        minimize_to_tray: false,
        show_on_startup: false,
        default_size: shared::domain::SizeClass::Small,
    };

    storage.save_settings(&settings).expect("save");
    assert_eq!(storage.load_settings(), settings);

    // The file is an object carrying exactly the settings keys.
    let raw = std::fs::read_to_string(storage.root().join(SETTINGS_FILE)).expect("read");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("json");
    let keys: Vec<&str> = value.as_object().expect("object").keys().map(|k| k.as_str()).collect();
    assert_eq!(
        keys.len(),
        8,
        "unexpected settings key set: {keys:?}"
    );
    for key in [
        "theme",
        "opacity",
        "refresh_interval",
        "font",
        "auto_start",
        "minimize_to_tray",
        "show_on_startup",
        "default_size",
    ] {
        assert!(keys.contains(&key), "missing key {key}");
    }
}

#[test]
fn saving_twice_is_idempotent() {
    let (_dir, storage) = scratch_storage();
    let settings = storage.load_settings();
    storage.save_settings(&settings).expect("first save");
    let first = std::fs::read_to_string(storage.root().join(SETTINGS_FILE)).expect("read");
    storage.save_settings(&storage.load_settings()).expect("second save");
    let second = std::fs::read_to_string(storage.root().join(SETTINGS_FILE)).expect("read");
    assert_eq!(first, second);
}

#[test]
fn missing_settings_file_yields_defaults() {
    let (_dir, storage) = scratch_storage();
    assert_eq!(storage.load_settings(), Settings::default());
}

#[test]
fn malformed_settings_file_degrades_to_defaults() {
    let (_dir, storage) = scratch_storage();
    std::fs::write(storage.root().join(SETTINGS_FILE), "{not json").expect("write");
    assert_eq!(storage.load_settings(), Settings::default());
}

#[test]
fn out_of_range_values_on_disk_are_clamped_on_load() {
    let (_dir, storage) = scratch_storage();
    std::fs::write(
        storage.root().join(SETTINGS_FILE),
        r#"{ "opacity": 250, "refresh_interval": 0 }"#,
    )
    .expect("write");
    let settings = storage.load_settings();
    assert_eq!(settings.opacity, 100);
    assert_eq!(settings.refresh_interval, 1);
}

#[test]
fn todos_persist_as_text_completed_pairs() {
    let (_dir, storage) = scratch_storage();
    let mut todos = TodoList::seeded();
    todos.toggle(0);
    storage.save_todos(&todos).expect("save");

    let raw = std::fs::read_to_string(storage.root().join(TODOS_FILE)).expect("read");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("json");
    assert_eq!(
        value["todos"][0],
        serde_json::json!(["Finish the project design", true])
    );

    assert_eq!(storage.load_todos(), Some(todos));
}

#[test]
fn missing_todos_file_reports_none() {
    let (_dir, storage) = scratch_storage();
    assert_eq!(storage.load_todos(), None);
}

#[test]
fn note_round_trip() {
    let (_dir, storage) = scratch_storage();
    assert_eq!(storage.load_note(), None);

    storage.save_note("buy milk\nand coffee").expect("save");
    assert_eq!(storage.load_note().as_deref(), Some("buy milk\nand coffee"));

    let raw = std::fs::read_to_string(storage.root().join(NOTES_FILE)).expect("read");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("json");
    assert_eq!(value, serde_json::json!({ "note": "buy milk\nand coffee" }));
}

#[test]
fn widget_configs_round_trip_keyed_by_slug() {
    let (_dir, storage) = scratch_storage();
    assert!(storage.load_widget_configs().is_empty());

    let mut configs = WidgetConfigMap::new();
    configs.insert(
        GadgetKind::Clock.slug().to_string(),
        WidgetConfig {
            icon: Some("⏰".to_string()),
            shape: Some(Shape::Circle),
        },
    );
    storage.save_widget_configs(&configs).expect("save");

    let loaded = storage.load_widget_configs();
    assert_eq!(loaded, configs);
    assert_eq!(
        loaded.get("clock").and_then(|c| c.shape),
        Some(Shape::Circle)
    );
}

#[test]
fn resolve_data_root_honors_the_env_override() {
    let root = resolve_data_root(Some("/tmp/widgets-data".into())).expect("root");
    assert_eq!(root, PathBuf::from("/tmp/widgets-data"));

    // An empty override falls through to the platform directory.
    if let Ok(fallback) = resolve_data_root(Some("".into())) {
        assert!(fallback.ends_with(APP_DIR_NAME));
    }
}
