//! Flat-JSON persistence under the per-user data directory.
//!
//! Four files, all indented UTF-8 JSON: `settings.json`, `todos.json`,
//! `notes.json`, and `widget_configs.json`. Loads are tolerant (a missing or
//! malformed file degrades to defaults with a warning); writes are
//! best-effort and the GUI logs rather than surfaces failures.

use std::{
    collections::BTreeMap,
    ffi::OsString,
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::warn;

use shared::{
    domain::{TodoList, WidgetConfig},
    settings::Settings,
};

pub const SETTINGS_FILE: &str = "settings.json";
pub const TODOS_FILE: &str = "todos.json";
pub const NOTES_FILE: &str = "notes.json";
pub const WIDGET_CONFIGS_FILE: &str = "widget_configs.json";

/// Environment override for the data root, mainly for development and tests.
pub const DATA_DIR_ENV: &str = "DASH_WIDGETS_DATA_DIR";

const APP_DIR_NAME: &str = "dash-widgets";

/// Per-kind appearance overrides, keyed by the gadget kind's slug.
pub type WidgetConfigMap = BTreeMap<String, WidgetConfig>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct NoteFile {
    note: String,
}

#[derive(Debug, Clone)]
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    /// Opens (and creates if needed) the default per-user data directory.
    pub fn open_default() -> Result<Self> {
        let root = resolve_data_root(std::env::var_os(DATA_DIR_ENV))?;
        Self::open(root)
    }

    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)
            .with_context(|| format!("failed to create data dir {}", root.display()))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Loads settings, falling back to defaults for a missing or malformed
    /// file, and clamps numeric fields into range.
    pub fn load_settings(&self) -> Settings {
        self.read_json::<Settings>(SETTINGS_FILE)
            .unwrap_or_default()
            .normalized()
    }

    pub fn save_settings(&self, settings: &Settings) -> Result<()> {
        self.write_json(SETTINGS_FILE, settings)
    }

    /// `None` means no usable file on disk; the caller decides how to seed.
    pub fn load_todos(&self) -> Option<TodoList> {
        self.read_json(TODOS_FILE)
    }

    pub fn save_todos(&self, todos: &TodoList) -> Result<()> {
        self.write_json(TODOS_FILE, todos)
    }

    pub fn load_note(&self) -> Option<String> {
        self.read_json::<NoteFile>(NOTES_FILE).map(|file| file.note)
    }

    pub fn save_note(&self, note: &str) -> Result<()> {
        self.write_json(
            NOTES_FILE,
            &NoteFile {
                note: note.to_string(),
            },
        )
    }

    pub fn load_widget_configs(&self) -> WidgetConfigMap {
        self.read_json(WIDGET_CONFIGS_FILE).unwrap_or_default()
    }

    pub fn save_widget_configs(&self, configs: &WidgetConfigMap) -> Result<()> {
        self.write_json(WIDGET_CONFIGS_FILE, configs)
    }

    fn read_json<T: DeserializeOwned>(&self, file: &str) -> Option<T> {
        let path = self.root.join(file);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return None,
            Err(err) => {
                warn!(file, error = %err, "failed to read data file");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(file, error = %err, "ignoring malformed data file");
                None
            }
        }
    }

    fn write_json<T: Serialize>(&self, file: &str, value: &T) -> Result<()> {
        let path = self.root.join(file);
        let json = serde_json::to_string_pretty(value)
            .with_context(|| format!("failed to serialize {file}"))?;
        fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))
    }
}

/// Resolves the data root: the environment override when set, else the
/// platform's per-user local data directory.
fn resolve_data_root(env_override: Option<OsString>) -> Result<PathBuf> {
    if let Some(dir) = env_override {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let base = dirs::data_local_dir().context("unable to resolve local app data dir")?;
    Ok(base.join(APP_DIR_NAME))
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
