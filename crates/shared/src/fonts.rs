//! Font preference resolution.
//!
//! The resolved family is an explicit value carried by the render context,
//! not a process-wide variable: callers build a [`FontStack`], thread it to
//! wherever text styles are constructed, and re-resolve when the user picks
//! an override in settings.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Preferred families, best first. The bundled font leads; the tail covers
/// the CJK system fonts the original shipped against, ending in a latin
/// fallback.
pub const FONT_PREFERENCES: [&str; 8] = [
    "HarmonyOS Sans SC",
    "HarmonyOS Sans",
    "Microsoft YaHei UI",
    "Microsoft YaHei",
    "SimHei",
    "PingFang SC",
    "STHeiti",
    "Arial",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontStack {
    pub preferences: Vec<String>,
    pub override_family: Option<String>,
}

impl Default for FontStack {
    fn default() -> Self {
        Self {
            preferences: FONT_PREFERENCES.iter().map(|s| s.to_string()).collect(),
            override_family: None,
        }
    }
}

impl FontStack {
    pub fn with_override(override_family: Option<String>) -> Self {
        Self {
            override_family,
            ..Self::default()
        }
    }

    pub fn set_override(&mut self, family: Option<String>) {
        self.override_family = family;
    }

    /// Picks the family to use: the override when it is actually available,
    /// else the first available preference. `None` means the caller should
    /// degrade to the toolkit's default fonts (and log a warning).
    pub fn resolve<'a>(&'a self, available: &BTreeSet<String>) -> Option<&'a str> {
        if let Some(family) = self.override_family.as_deref() {
            if available.contains(family) {
                return Some(family);
            }
        }
        self.preferences
            .iter()
            .map(String::as_str)
            .find(|family| available.contains(*family))
    }
}

#[cfg(test)]
#[path = "tests/fonts_tests.rs"]
mod tests;
