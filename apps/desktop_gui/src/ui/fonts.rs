//! Bundled-font loading and preference resolution against egui's registry.

use std::collections::BTreeSet;

use eframe::egui;
use shared::fonts::FontStack;
use tracing::{debug, warn};

/// Fixed relative path of the bundled font, loaded once at startup.
pub const BUNDLED_FONT_PATH: &str = "assets/fonts/HarmonyOS_Sans_SC_Regular.ttf";
const BUNDLED_FAMILY: &str = "HarmonyOS Sans SC";

/// Result of a font installation pass.
pub struct InstalledFonts {
    /// Family the stack resolved to, `None` when the app degraded to egui's
    /// built-in fonts.
    pub resolved: Option<String>,
    /// Every family registered with egui, for the settings dropdown.
    pub available: Vec<String>,
}

/// Registers the bundled font (when present) and reorders egui's families so
/// the stack's resolved choice renders first. A missing or unreadable font
/// file degrades to the built-in font list with a warning.
pub fn install(ctx: &egui::Context, stack: &FontStack) -> InstalledFonts {
    let mut fonts = egui::FontDefinitions::default();

    match std::fs::read(BUNDLED_FONT_PATH) {
        Ok(bytes) => {
            fonts
                .font_data
                .insert(BUNDLED_FAMILY.to_owned(), std::sync::Arc::new(egui::FontData::from_owned(bytes)));
        }
        Err(err) => {
            warn!(path = BUNDLED_FONT_PATH, error = %err, "bundled font unavailable; using system font list");
        }
    }

    let available: BTreeSet<String> = fonts.font_data.keys().cloned().collect();
    let resolved = stack.resolve(&available).map(str::to_string);

    match &resolved {
        Some(family) => {
            for kind in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
                if let Some(order) = fonts.families.get_mut(&kind) {
                    order.retain(|name| name != family);
                    order.insert(0, family.clone());
                }
            }
            debug!(family = %family, "font family resolved");
        }
        None => {
            warn!("no preferred font family available; falling back to egui defaults");
        }
    }

    let available = available.into_iter().collect();
    ctx.set_fonts(fonts);

    InstalledFonts {
        resolved,
        available,
    }
}
