use eframe::egui;

use super::Canvas;

// Static placeholder conditions; there is no weather feed.
const TEMPERATURE: &str = "25°C";
const CONDITION: &str = "Sunny";
const LOCATION: &str = "📍 Beijing";

const TEMPERATURE_COLOR: egui::Color32 = egui::Color32::from_rgb(0xFF, 0x6B, 0x35);

pub fn show(ui: &mut egui::Ui, canvas: &Canvas) {
    ui.vertical_centered(|ui| {
        ui.add_space(canvas.vspace(0.1));
        ui.label(egui::RichText::new(canvas.icon).size(canvas.font(0.25)));
        ui.add_space(canvas.vspace(0.04));
        ui.label(
            egui::RichText::new(TEMPERATURE)
                .size(canvas.font(0.14))
                .strong()
                .color(TEMPERATURE_COLOR),
        );
        ui.label(
            egui::RichText::new(CONDITION)
                .size(canvas.font(0.06))
                .color(canvas.secondary()),
        );
        ui.add_space(canvas.vspace(0.06));
        ui.label(
            egui::RichText::new(LOCATION)
                .size(canvas.font(0.05))
                .color(canvas.hint()),
        );
    });
}
