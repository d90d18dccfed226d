use std::time::{Duration, Instant};

use eframe::egui;
use rand::Rng;
use shared::theme::usage_color;

use super::Canvas;
use crate::ui::theme::color32;

/// CPU/memory readings for the system monitor.
///
/// The values are a placeholder random source, not real OS queries; the
/// sampling ranges match what the gadget has always displayed.
pub struct MonitorState {
    pub cpu: u8,
    pub mem: u8,
    sampled_at: Option<Instant>,
}

impl MonitorState {
    pub fn new() -> Self {
        Self {
            cpu: 0,
            mem: 0,
            sampled_at: None,
        }
    }

    /// Resamples when the refresh interval has elapsed (or no sample exists
    /// yet). Returns true when fresh values were drawn.
    pub fn tick(&mut self, interval: Duration) -> bool {
        let due = self
            .sampled_at
            .map_or(true, |at| at.elapsed() >= interval);
        if due {
            let mut rng = rand::thread_rng();
            self.cpu = rng.gen_range(20..=80);
            self.mem = rng.gen_range(30..=70);
            self.sampled_at = Some(Instant::now());
        }
        due
    }

    /// Forces the next tick to resample, used by the context-menu refresh.
    pub fn invalidate(&mut self) {
        self.sampled_at = None;
    }
}

impl Default for MonitorState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn show(ui: &mut egui::Ui, canvas: &Canvas, state: &MonitorState) {
    canvas.header(ui, "System Monitor");

    let label_font = canvas.font(0.04);
    let bar_size = egui::vec2(
        (canvas.size.x * 0.6).max(60.0),
        (canvas.size.y * 0.05).max(6.0),
    );

    for (label, percent) in [("CPU", state.cpu), ("Memory", state.mem)] {
        ui.add_space(canvas.vspace(0.03));
        ui.label(
            egui::RichText::new(format!("{label}: {percent}%"))
                .size(label_font)
                .color(canvas.primary()),
        );
        let (rect, _) = ui.allocate_exact_size(bar_size, egui::Sense::hover());
        let painter = ui.painter();
        painter.rect_filled(rect, 2.0, color32(canvas.palette.bg_hint));
        let mut fill = rect;
        fill.set_width(rect.width() * f32::from(percent) / 100.0);
        painter.rect_filled(fill, 2.0, color32(usage_color(percent)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_always_samples_within_range() {
        let mut state = MonitorState::new();
        assert!(state.tick(Duration::from_secs(2)));
        assert!((20..=80).contains(&state.cpu));
        assert!((30..=70).contains(&state.mem));
    }

    #[test]
    fn tick_is_a_no_op_until_the_interval_elapses() {
        let mut state = MonitorState::new();
        state.tick(Duration::from_secs(60));
        assert!(!state.tick(Duration::from_secs(60)));
    }

    #[test]
    fn invalidate_forces_a_resample() {
        let mut state = MonitorState::new();
        state.tick(Duration::from_secs(60));
        state.invalidate();
        assert!(state.tick(Duration::from_secs(60)));
    }
}
