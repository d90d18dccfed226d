//! Per-kind gadget content renderers.
//!
//! Each module renders one gadget kind into the window's content area. The
//! renderers are pure egui code over the state structs; persistence and
//! window chrome live in `ui::gadget`.

pub mod calendar;
pub mod clock;
pub mod currency;
pub mod monitor;
pub mod notes;
pub mod timer;
pub mod todo;
pub mod weather;

use eframe::egui;
use shared::theme::Palette;

use crate::ui::theme::color32;

/// Sizing and palette context shared by the renderers. Font sizes scale
/// with the window width, so content grows and shrinks with manual resizes
/// the same way the original canvas text did.
pub struct Canvas<'a> {
    pub size: egui::Vec2,
    pub palette: &'a Palette,
    pub icon: &'a str,
}

impl Canvas<'_> {
    /// Font size as a fraction of the window width, floored so text stays
    /// legible at the 100 px minimum window size.
    pub fn font(&self, frac: f32) -> f32 {
        (self.size.x * frac).max(9.0)
    }

    pub fn vspace(&self, frac: f32) -> f32 {
        self.size.y * frac
    }

    pub fn primary(&self) -> egui::Color32 {
        color32(self.palette.text_primary)
    }

    pub fn secondary(&self) -> egui::Color32 {
        color32(self.palette.text_secondary)
    }

    pub fn hint(&self) -> egui::Color32 {
        color32(self.palette.text_hint)
    }

    pub fn accent(&self) -> egui::Color32 {
        color32(self.palette.accent)
    }

    /// Icon + title header with a separator rule, used by the list-style
    /// gadgets.
    pub fn header(&self, ui: &mut egui::Ui, title: &str) {
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(format!("{} {}", self.icon, title))
                    .size(self.font(0.07))
                    .strong()
                    .color(self.primary()),
            );
        });
        ui.add_space(4.0);
        ui.separator();
        ui.add_space(4.0);
    }
}
