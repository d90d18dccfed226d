use eframe::egui;

use super::Canvas;

// Static placeholder rates; there is no exchange feed.
const PRIMARY_RATE: &str = "1 USD = 7.24 CNY";
const SECONDARY_RATE: &str = "1 EUR = 7.85 CNY";
const UPDATED: &str = "Updated 5 minutes ago";

pub fn show(ui: &mut egui::Ui, canvas: &Canvas) {
    canvas.header(ui, "Currency");

    ui.vertical_centered(|ui| {
        ui.add_space(canvas.vspace(0.1));
        ui.label(
            egui::RichText::new(PRIMARY_RATE)
                .size(canvas.font(0.08))
                .strong()
                .color(canvas.accent()),
        );
        ui.add_space(canvas.vspace(0.04));
        ui.label(
            egui::RichText::new(SECONDARY_RATE)
                .size(canvas.font(0.05))
                .color(canvas.primary()),
        );
        ui.add_space(canvas.vspace(0.12));
        ui.label(
            egui::RichText::new(UPDATED)
                .size(canvas.font(0.04))
                .color(canvas.hint()),
        );
    });
}
