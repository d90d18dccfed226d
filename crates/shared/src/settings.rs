//! The flat settings record persisted as `settings.json`.

use serde::{Deserialize, Serialize};

use crate::domain::SizeClass;
use crate::theme::ThemeMode;

pub const OPACITY_RANGE: std::ops::RangeInclusive<u8> = 50..=100;
pub const REFRESH_INTERVAL_RANGE: std::ops::RangeInclusive<u8> = 1..=10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: ThemeMode,
    /// Gadget window opacity in percent, 50-100.
    pub opacity: u8,
    /// System monitor resample cadence in seconds, 1-10.
    pub refresh_interval: u8,
    /// Optional font family override; `None` means the preference list wins.
    pub font: Option<String>,
    pub auto_start: bool,
    pub minimize_to_tray: bool,
    pub show_on_startup: bool,
    pub default_size: SizeClass,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Light,
            opacity: 90,
            refresh_interval: 2,
            font: None,
            auto_start: false,
            minimize_to_tray: true,
            show_on_startup: true,
            default_size: SizeClass::Medium,
        }
    }
}

impl Settings {
    /// Clamps numeric fields into their valid ranges. Applied after every
    /// load so a hand-edited file cannot push sliders out of bounds.
    pub fn normalized(mut self) -> Self {
        self.opacity = self
            .opacity
            .clamp(*OPACITY_RANGE.start(), *OPACITY_RANGE.end());
        self.refresh_interval = self.refresh_interval.clamp(
            *REFRESH_INTERVAL_RANGE.start(),
            *REFRESH_INTERVAL_RANGE.end(),
        );
        if let Some(font) = &self.font {
            if font.trim().is_empty() {
                self.font = None;
            }
        }
        self
    }

    pub fn refresh_interval_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs(u64::from(self.refresh_interval))
    }

    /// Window fill alpha derived from the opacity percentage.
    pub fn opacity_alpha(&self) -> u8 {
        let percent = f32::from(self.opacity.clamp(*OPACITY_RANGE.start(), *OPACITY_RANGE.end()));
        (percent / 100.0 * 255.0).round() as u8
    }
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
