use chrono::Local;
use eframe::egui;

use super::Canvas;

pub fn show(ui: &mut egui::Ui, canvas: &Canvas) {
    let now = Local::now();
    ui.vertical_centered(|ui| {
        ui.add_space(canvas.vspace(0.12));
        ui.label(egui::RichText::new(canvas.icon).size(canvas.font(0.2)));
        ui.add_space(canvas.vspace(0.05));
        ui.label(
            egui::RichText::new(now.format("%H:%M:%S").to_string())
                .size(canvas.font(0.12))
                .strong()
                .color(canvas.primary()),
        );
        ui.add_space(canvas.vspace(0.03));
        ui.label(
            egui::RichText::new(now.format("%B %-d, %Y").to_string())
                .size(canvas.font(0.05))
                .color(canvas.secondary()),
        );
    });
}
