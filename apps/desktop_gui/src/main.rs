//! DashWidgets: a control panel that manages small always-on-top desktop
//! gadget windows (clock, weather, to-do list, notes, system monitor,
//! calendar, timer, currency).

mod controller;
#[cfg(target_os = "linux")]
mod tray;
mod ui;

use crossbeam_channel::bounded;
use eframe::egui;
use tracing::warn;

use controller::events::TrayCommand;
use ui::ControlPanelApp;

/// Fixed relative path of the bundled application icon.
const ICON_PATH: &str = "assets/icon.png";

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let storage = match storage::Storage::open_default().or_else(|err| {
        warn!(error = %err, "user data dir unavailable; falling back to the temp dir");
        storage::Storage::open(std::env::temp_dir().join("dash-widgets"))
    }) {
        Ok(storage) => storage,
        Err(err) => {
            tracing::error!(error = %err, "no writable data directory; exiting");
            return Ok(());
        }
    };

    let (tray_tx, tray_rx) = bounded::<TrayCommand>(16);

    let mut viewport = egui::ViewportBuilder::default()
        .with_title("DashWidgets Control Panel")
        .with_inner_size([1000.0, 600.0])
        .with_min_inner_size([900.0, 500.0]);
    if let Some(icon) = load_window_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "DashWidgets",
        options,
        Box::new(move |cc| Ok(Box::new(ControlPanelApp::new(cc, storage, tray_tx, tray_rx)))),
    )
}

/// Loads the bundled window icon. A missing or undecodable file degrades to
/// the toolkit's default icon with a warning.
fn load_window_icon() -> Option<egui::IconData> {
    let bytes = match std::fs::read(ICON_PATH) {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!(path = ICON_PATH, error = %err, "window icon unavailable");
            return None;
        }
    };
    match image::load_from_memory(&bytes) {
        Ok(decoded) => {
            let rgba = decoded.into_rgba8();
            let (width, height) = rgba.dimensions();
            Some(egui::IconData {
                rgba: rgba.into_raw(),
                width,
                height,
            })
        }
        Err(err) => {
            warn!(path = ICON_PATH, error = %err, "failed to decode window icon");
            None
        }
    }
}
