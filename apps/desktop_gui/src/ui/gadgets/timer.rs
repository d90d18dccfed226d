use std::time::{Duration, Instant};

use eframe::egui;

use super::Canvas;

const DEFAULT_DURATION: Duration = Duration::from_secs(5 * 60);

pub struct TimerState {
    pub total: Duration,
    pub remaining: Duration,
    pub running: bool,
    last_tick: Option<Instant>,
}

impl TimerState {
    pub fn new() -> Self {
        Self {
            total: DEFAULT_DURATION,
            remaining: DEFAULT_DURATION,
            running: false,
            last_tick: None,
        }
    }

    /// Advances the countdown by the wall-clock time since the last tick.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }
        let now = Instant::now();
        if let Some(last) = self.last_tick {
            self.remaining = self.remaining.saturating_sub(now - last);
        }
        self.last_tick = Some(now);
        if self.remaining.is_zero() {
            self.running = false;
            self.last_tick = None;
        }
    }

    pub fn toggle(&mut self) {
        if self.running {
            self.running = false;
            self.last_tick = None;
        } else {
            if self.remaining.is_zero() {
                self.remaining = self.total;
            }
            self.running = true;
            self.last_tick = Some(Instant::now());
        }
    }

    pub fn reset(&mut self) {
        self.running = false;
        self.remaining = self.total;
        self.last_tick = None;
    }

    pub fn add_minute(&mut self) {
        self.total += Duration::from_secs(60);
        self.remaining += Duration::from_secs(60);
    }

    pub fn display(&self) -> String {
        format_mmss(self.remaining)
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn format_mmss(duration: Duration) -> String {
    let secs = duration.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

pub fn show(ui: &mut egui::Ui, canvas: &Canvas, state: &mut TimerState) {
    ui.vertical_centered(|ui| {
        ui.add_space(canvas.vspace(0.08));
        ui.label(egui::RichText::new(canvas.icon).size(canvas.font(0.15)));
        ui.add_space(canvas.vspace(0.03));
        ui.label(
            egui::RichText::new(state.display())
                .size(canvas.font(0.14))
                .strong()
                .color(canvas.primary()),
        );
        ui.add_space(canvas.vspace(0.05));
        ui.horizontal(|ui| {
            // Center the button row by padding from both sides.
            let total = 3.0 * 30.0 + 2.0 * ui.spacing().item_spacing.x;
            ui.add_space((ui.available_width() - total).max(0.0) / 2.0);

            let glyph = if state.running { "⏸" } else { "▶" };
            if ui
                .add(egui::Button::new(glyph).min_size(egui::vec2(30.0, 30.0)))
                .clicked()
            {
                state.toggle();
            }
            if ui
                .add(egui::Button::new("+1m").min_size(egui::vec2(30.0, 30.0)))
                .clicked()
            {
                state.add_minute();
            }
            if ui
                .add(egui::Button::new("↺").min_size(egui::vec2(30.0, 30.0)))
                .clicked()
            {
                state.reset();
            }
        });
    });
}
