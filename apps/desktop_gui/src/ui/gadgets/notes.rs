use eframe::egui;
use storage::Storage;

use super::Canvas;

// Sticky-note colors are deliberately not themed, matching the original.
const NOTE_FILL: egui::Color32 = egui::Color32::from_rgb(0xFF, 0xF9, 0xC4);
const NOTE_TEXT: egui::Color32 = egui::Color32::from_rgb(0x33, 0x33, 0x33);

const DEFAULT_NOTE: &str = "Remember: product review meeting\nat 3 PM today.\n\nMaterials to prepare:\n1. Feature demo\n2. Data report\n3. Issue list";

pub struct NotesState {
    pub draft: String,
    pub dirty: bool,
}

impl NotesState {
    pub fn load(storage: &Storage) -> Self {
        Self {
            draft: storage
                .load_note()
                .unwrap_or_else(|| DEFAULT_NOTE.to_string()),
            dirty: false,
        }
    }
}

/// Renders the editor; returns true when the user asked to save.
pub fn show(ui: &mut egui::Ui, canvas: &Canvas, state: &mut NotesState) -> bool {
    canvas.header(ui, "Notes");

    let editor_height = (canvas.size.y * 0.5).max(40.0);
    let response = egui::Frame::none()
        .fill(NOTE_FILL)
        .rounding(egui::Rounding::same(4))
        .inner_margin(egui::Margin::same(6))
        .show(ui, |ui| {
            ui.add_sized(
                [ui.available_width(), editor_height],
                egui::TextEdit::multiline(&mut state.draft)
                    .frame(false)
                    .text_color(NOTE_TEXT)
                    .font(egui::FontId::proportional(canvas.font(0.045))),
            )
        })
        .inner;
    if response.changed() {
        state.dirty = true;
    }

    ui.add_space(6.0);
    let mut save = false;
    ui.vertical_centered(|ui| {
        if ui.button("💾 Save").clicked() {
            save = true;
        }
        if state.dirty {
            ui.label(
                egui::RichText::new("Unsaved changes")
                    .size(canvas.font(0.035))
                    .color(canvas.hint()),
            );
        }
    });
    save
}
