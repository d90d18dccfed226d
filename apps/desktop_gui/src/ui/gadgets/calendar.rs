use chrono::{Datelike, Local};
use eframe::egui;

use super::Canvas;

pub fn show(ui: &mut egui::Ui, canvas: &Canvas) {
    let now = Local::now();
    ui.vertical_centered(|ui| {
        ui.add_space(canvas.vspace(0.1));
        ui.label(egui::RichText::new(canvas.icon).size(canvas.font(0.2)));
        ui.add_space(canvas.vspace(0.02));
        ui.label(
            egui::RichText::new(now.day().to_string())
                .size(canvas.font(0.24))
                .strong()
                .color(canvas.primary()),
        );
        ui.add_space(canvas.vspace(0.02));
        ui.label(
            egui::RichText::new(now.format("%B %Y").to_string())
                .size(canvas.font(0.06))
                .color(canvas.secondary()),
        );
    });
}
