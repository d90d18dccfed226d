use eframe::egui;
use shared::domain::TodoList;
use storage::Storage;
use tracing::debug;

use super::Canvas;

pub struct TodoState {
    pub list: TodoList,
    pub draft: String,
}

impl TodoState {
    /// Reloads the persisted list, seeding the sample items on first run.
    pub fn load(storage: &Storage) -> Self {
        let list = storage.load_todos().unwrap_or_else(|| {
            debug!("no todos on disk; seeding defaults");
            TodoList::seeded()
        });
        Self {
            list,
            draft: String::new(),
        }
    }
}

/// Renders the list; returns true when the list changed and should be
/// persisted.
pub fn show(ui: &mut egui::Ui, canvas: &Canvas, state: &mut TodoState) -> bool {
    let mut changed = false;

    canvas.header(ui, "To-Do List");

    let item_font = canvas.font(0.04);
    let list_height = (canvas.size.y * 0.55).max(40.0);

    egui::ScrollArea::vertical()
        .max_height(list_height)
        .auto_shrink([false, true])
        .show(ui, |ui| {
            let mut toggle = None;
            for (index, item) in state.list.items.iter().enumerate() {
                let (glyph, color) = if item.completed {
                    ("☑", canvas.hint())
                } else {
                    ("☐", canvas.primary())
                };
                let row = ui.add(
                    egui::Label::new(
                        egui::RichText::new(format!("{glyph} {}", item.text))
                            .size(item_font)
                            .color(color),
                    )
                    .sense(egui::Sense::click()),
                );
                if row.clicked() {
                    toggle = Some(index);
                }
            }
            if let Some(index) = toggle {
                state.list.toggle(index);
                changed = true;
            }
        });

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        let edit = ui.add(
            egui::TextEdit::singleline(&mut state.draft)
                .hint_text("New task…")
                .desired_width(ui.available_width() - 56.0),
        );
        let submitted =
            edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (ui.button("+ Add").clicked() || submitted) && !state.draft.trim().is_empty() {
            state.list.add(state.draft.clone());
            state.draft.clear();
            changed = true;
        }
    });

    changed
}
