//! Theme palettes and the light/dark registry.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Named color slots referenced by the control panel and the themed gadget
/// elements. Switching themes swaps the whole palette at once, never
/// individual slots, so a switch can never leave a mix of old and new.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub bg_main: Rgb,
    pub bg_card: Rgb,
    pub bg_nav: Rgb,
    pub bg_hint: Rgb,
    pub bg_input: Rgb,
    pub text_primary: Rgb,
    pub text_secondary: Rgb,
    pub text_hint: Rgb,
    pub border: Rgb,
    pub accent: Rgb,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        bg_main: Rgb::new(0xF5, 0xF5, 0xF7),
        bg_card: Rgb::new(0xFF, 0xFF, 0xFF),
        bg_nav: Rgb::new(0xFF, 0xFF, 0xFF),
        bg_hint: Rgb::new(0xF0, 0xF0, 0xF0),
        bg_input: Rgb::new(0xF8, 0xF9, 0xFA),
        text_primary: Rgb::new(0x33, 0x33, 0x33),
        text_secondary: Rgb::new(0x66, 0x66, 0x66),
        text_hint: Rgb::new(0x99, 0x99, 0x99),
        border: Rgb::new(0xE0, 0xE0, 0xE0),
        accent: Rgb::new(0x00, 0x7A, 0xFF),
    };

    pub const DARK: Palette = Palette {
        bg_main: Rgb::new(0x1C, 0x1C, 0x1E),
        bg_card: Rgb::new(0x2C, 0x2C, 0x2E),
        bg_nav: Rgb::new(0x2C, 0x2C, 0x2E),
        bg_hint: Rgb::new(0x3A, 0x3A, 0x3C),
        bg_input: Rgb::new(0x3A, 0x3A, 0x3C),
        text_primary: Rgb::new(0xFF, 0xFF, 0xFF),
        text_secondary: Rgb::new(0xA1, 0xA1, 0xA6),
        text_hint: Rgb::new(0x8E, 0x8E, 0x93),
        border: Rgb::new(0x38, 0x38, 0x3A),
        accent: Rgb::new(0x0A, 0x84, 0xFF),
    };

    /// All slots in declaration order, for exhaustive checks.
    pub fn slots(&self) -> [(&'static str, Rgb); 10] {
        [
            ("bg_main", self.bg_main),
            ("bg_card", self.bg_card),
            ("bg_nav", self.bg_nav),
            ("bg_hint", self.bg_hint),
            ("bg_input", self.bg_input),
            ("text_primary", self.text_primary),
            ("text_secondary", self.text_secondary),
            ("text_hint", self.text_hint),
            ("border", self.border),
            ("accent", self.accent),
        ]
    }
}

// Status colors shared by the system monitor bars; not palette-dependent.
pub const STATUS_OK: Rgb = Rgb::new(0x34, 0xC7, 0x59);
pub const STATUS_WARN: Rgb = Rgb::new(0xFF, 0x95, 0x00);
pub const STATUS_CRITICAL: Rgb = Rgb::new(0xFF, 0x3B, 0x30);

/// Bar color for a 0-100 usage percentage.
pub fn usage_color(percent: u8) -> Rgb {
    if percent < 50 {
        STATUS_OK
    } else if percent < 80 {
        STATUS_WARN
    } else {
        STATUS_CRITICAL
    }
}

#[derive(Debug, Error)]
#[error("unknown theme mode: {0}")]
pub struct ParseThemeModeError(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    Light,
    Dark,
    System,
}

impl ThemeMode {
    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
            ThemeMode::System => "Follow system",
        }
    }
}

impl std::str::FromStr for ThemeMode {
    type Err = ParseThemeModeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            other => Err(ParseThemeModeError(other.to_string())),
        }
    }
}

/// Holds the selected mode and the palette currently in force.
///
/// `System` resolves against a hint supplied by the caller (the windowing
/// system's reported appearance); an unknown hint falls back to light.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeRegistry {
    mode: ThemeMode,
    active: Palette,
}

impl ThemeRegistry {
    pub fn new(mode: ThemeMode, system_is_dark: Option<bool>) -> Self {
        let mut registry = Self {
            mode,
            active: Palette::LIGHT,
        };
        registry.set_mode(mode, system_is_dark);
        registry
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn active(&self) -> &Palette {
        &self.active
    }

    pub fn is_dark(&self) -> bool {
        self.active == Palette::DARK
    }

    pub fn set_mode(&mut self, mode: ThemeMode, system_is_dark: Option<bool>) {
        self.mode = mode;
        let dark = match mode {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => system_is_dark.unwrap_or(false),
        };
        self.active = if dark { Palette::DARK } else { Palette::LIGHT };
    }

    /// Flips light/dark, leaving `System` for an explicit mode.
    pub fn toggle(&mut self) {
        let next = if self.is_dark() {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        };
        self.set_mode(next, None);
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new(ThemeMode::Light, None)
    }
}

#[cfg(test)]
#[path = "tests/theme_tests.rs"]
mod tests;
