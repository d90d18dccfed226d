//! Palette to egui style mapping.

use eframe::egui;
use shared::theme::{Palette, Rgb};

pub fn color32(rgb: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}

pub fn color32_alpha(rgb: Rgb, alpha: u8) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(rgb.r, rgb.g, rgb.b, alpha)
}

/// Builds the full widget style from the active palette.
///
/// Invoked on every palette change; the style is replaced wholesale so no
/// element can keep a color from the previous theme.
pub fn style_for_palette(palette: &Palette, dark: bool) -> egui::Style {
    let mut style = egui::Style::default();
    style.visuals = visuals_for_palette(palette, dark);
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 6.0);
    style
}

fn visuals_for_palette(palette: &Palette, dark: bool) -> egui::Visuals {
    let mut visuals = if dark {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };

    visuals.override_text_color = Some(color32(palette.text_primary));
    visuals.panel_fill = color32(palette.bg_main);
    visuals.window_fill = color32(palette.bg_card);
    visuals.faint_bg_color = color32(palette.bg_hint);
    visuals.extreme_bg_color = color32(palette.bg_input);
    visuals.window_stroke = egui::Stroke::new(1.0, color32(palette.border));
    visuals.hyperlink_color = color32(palette.accent);
    visuals.selection.bg_fill = color32(palette.accent);

    visuals.widgets.noninteractive.bg_fill = color32(palette.bg_card);
    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, color32(palette.border));
    visuals.widgets.inactive.bg_fill = color32(palette.bg_input);
    visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, color32(palette.border));
    visuals.widgets.hovered.bg_fill = color32(palette.accent).gamma_multiply(0.85);
    visuals.widgets.active.bg_fill = color32(palette.accent);

    let radius = egui::Rounding::same(8);
    visuals.widgets.noninteractive.corner_radius = radius;
    visuals.widgets.inactive.corner_radius = radius;
    visuals.widgets.hovered.corner_radius = radius;
    visuals.widgets.active.corner_radius = radius;
    visuals.widgets.open.corner_radius = radius;

    visuals
}
