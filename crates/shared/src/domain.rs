use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(GadgetId);

#[derive(Debug, Error)]
#[error("unknown {what}: {value}")]
pub struct ParseSlugError {
    pub what: &'static str,
    pub value: String,
}

/// Every gadget kind the catalog offers. Dispatching on this enum (rather
/// than on display names) makes adding a kind a compile-time-checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GadgetKind {
    Clock,
    Weather,
    Todo,
    Notes,
    SystemMonitor,
    Calendar,
    Timer,
    Currency,
}

impl GadgetKind {
    pub const ALL: [GadgetKind; 8] = [
        GadgetKind::Clock,
        GadgetKind::Weather,
        GadgetKind::Todo,
        GadgetKind::Notes,
        GadgetKind::SystemMonitor,
        GadgetKind::Calendar,
        GadgetKind::Timer,
        GadgetKind::Currency,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            GadgetKind::Clock => "clock",
            GadgetKind::Weather => "weather",
            GadgetKind::Todo => "todo",
            GadgetKind::Notes => "notes",
            GadgetKind::SystemMonitor => "system_monitor",
            GadgetKind::Calendar => "calendar",
            GadgetKind::Timer => "timer",
            GadgetKind::Currency => "currency",
        }
    }

    pub fn from_slug(value: &str) -> Result<Self, ParseSlugError> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.slug() == value)
            .ok_or_else(|| ParseSlugError {
                what: "gadget kind",
                value: value.to_string(),
            })
    }

    /// Redraw interval for kinds that show live data. `None` means the
    /// content is static and only redraws on user interaction.
    pub fn refresh_interval(self) -> Option<Duration> {
        match self {
            GadgetKind::Clock => Some(Duration::from_secs(1)),
            GadgetKind::SystemMonitor => Some(Duration::from_secs(2)),
            GadgetKind::Timer => Some(Duration::from_secs(1)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeClass {
    Small,
    Medium,
    Large,
}

impl SizeClass {
    /// Fixed pixel footprint for each size class.
    pub fn dimensions(self) -> crate::geometry::Size {
        let side = match self {
            SizeClass::Small => 150.0,
            SizeClass::Medium => 200.0,
            SizeClass::Large => 300.0,
        };
        crate::geometry::Size {
            width: side,
            height: side,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SizeClass::Small => "Small",
            SizeClass::Medium => "Medium",
            SizeClass::Large => "Large",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    Rectangle,
    Rounded,
    Circle,
    Capsule,
}

impl Shape {
    pub fn label(self) -> &'static str {
        match self {
            Shape::Rectangle => "Rectangle",
            Shape::Rounded => "Rounded",
            Shape::Circle => "Circle",
            Shape::Capsule => "Capsule",
        }
    }
}

/// Immutable catalog entry a gadget instance is created from.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetTemplate {
    pub kind: GadgetKind,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub size: SizeClass,
    pub shape: Shape,
}

impl WidgetTemplate {
    pub fn for_kind(kind: GadgetKind) -> WidgetTemplate {
        let (name, description, icon, size) = match kind {
            GadgetKind::Clock => ("Clock", "Shows the current time", "🕐", SizeClass::Medium),
            GadgetKind::Weather => ("Weather", "Shows weather conditions", "🌤", SizeClass::Medium),
            GadgetKind::Todo => ("To-Do List", "Manage daily tasks", "📝", SizeClass::Large),
            GadgetKind::Notes => ("Notes", "Jot down quick thoughts", "📌", SizeClass::Medium),
            GadgetKind::SystemMonitor => (
                "System Monitor",
                "Shows CPU and memory usage",
                "📊",
                SizeClass::Small,
            ),
            GadgetKind::Calendar => ("Calendar", "Shows today's date", "📅", SizeClass::Medium),
            GadgetKind::Timer => ("Timer", "Countdown timer", "⏱", SizeClass::Small),
            GadgetKind::Currency => ("Currency", "Exchange rate display", "💱", SizeClass::Medium),
        };
        WidgetTemplate {
            kind,
            name,
            description,
            icon,
            size,
            shape: Shape::Rounded,
        }
    }

    pub fn catalog() -> Vec<WidgetTemplate> {
        GadgetKind::ALL.into_iter().map(Self::for_kind).collect()
    }
}

/// Per-kind appearance overrides persisted in `widget_configs.json`,
/// keyed by the kind's slug. A user selection clones the template with
/// these overrides applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub icon: Option<String>,
    pub shape: Option<Shape>,
}

impl WidgetConfig {
    pub fn is_empty(&self) -> bool {
        self.icon.is_none() && self.shape.is_none()
    }
}

/// One entry in a to-do gadget. Persisted verbatim as a `[text, completed]`
/// pair, which is the on-disk shape `todos.json` has always used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, bool)", into = "(String, bool)")]
pub struct TodoItem {
    pub text: String,
    pub completed: bool,
}

impl From<(String, bool)> for TodoItem {
    fn from((text, completed): (String, bool)) -> Self {
        Self { text, completed }
    }
}

impl From<TodoItem> for (String, bool) {
    fn from(item: TodoItem) -> Self {
        (item.text, item.completed)
    }
}

/// Ordered to-do list; serializes directly as the `todos.json` document
/// (`{"todos": [[text, completed], ...]}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    #[serde(rename = "todos")]
    pub items: Vec<TodoItem>,
}

impl TodoList {
    pub fn seeded() -> Self {
        Self {
            items: [
                "Finish the project design",
                "Prepare meeting materials",
                "Reply to emails",
            ]
            .into_iter()
            .map(|text| TodoItem {
                text: text.to_string(),
                completed: false,
            })
            .collect(),
        }
    }

    pub fn add(&mut self, text: impl Into<String>) {
        let text = text.into();
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            self.items.push(TodoItem {
                text: trimmed.to_string(),
                completed: false,
            });
        }
    }

    /// Flips exactly the targeted index. Out-of-range indices are a no-op.
    pub fn toggle(&mut self, index: usize) {
        if let Some(item) = self.items.get_mut(index) {
            item.completed = !item.completed;
        }
    }

    pub fn remove(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    pub fn clear_completed(&mut self) {
        self.items.retain(|item| !item.completed);
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
