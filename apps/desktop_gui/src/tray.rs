//! System tray icon (Linux status-notifier item).
//!
//! The tray service runs its own event loop on a background thread. Menu
//! callbacks send [`TrayCommand`]s over the channel and nudge a repaint
//! through a cloned `egui::Context`; they never touch UI state.

use crossbeam_channel::Sender;
use ksni::menu::StandardItem;
use ksni::{MenuItem, ToolTip, Tray, TrayService};
use tracing::{info, warn};

use crate::controller::events::TrayCommand;

struct PanelTray {
    commands: Sender<TrayCommand>,
    repaint: egui::Context,
}

impl PanelTray {
    fn post(&self, command: TrayCommand) {
        if self.commands.send(command).is_ok() {
            self.repaint.request_repaint();
        }
    }
}

impl Tray for PanelTray {
    fn id(&self) -> String {
        "dash-widgets".into()
    }

    fn title(&self) -> String {
        "DashWidgets".into()
    }

    fn category(&self) -> ksni::Category {
        ksni::Category::ApplicationStatus
    }

    fn status(&self) -> ksni::Status {
        ksni::Status::Active
    }

    fn icon_name(&self) -> String {
        "preferences-desktop".into()
    }

    fn tool_tip(&self) -> ToolTip {
        ToolTip {
            title: "DashWidgets".into(),
            description: "Desktop widgets control panel".into(),
            icon_name: "preferences-desktop".into(),
            icon_pixmap: Vec::new(),
        }
    }

    fn menu(&self) -> Vec<MenuItem<Self>> {
        vec![
            StandardItem {
                label: "Show".into(),
                activate: Box::new(|this: &mut Self| this.post(TrayCommand::ShowPanel)),
                ..Default::default()
            }
            .into(),
            StandardItem {
                label: "Hide".into(),
                activate: Box::new(|this: &mut Self| this.post(TrayCommand::HidePanel)),
                ..Default::default()
            }
            .into(),
            MenuItem::Separator,
            StandardItem {
                label: "Quit".into(),
                activate: Box::new(|this: &mut Self| this.post(TrayCommand::Quit)),
                ..Default::default()
            }
            .into(),
        ]
    }
}

/// Spawns the tray thread. A failed or unavailable status-notifier host is
/// logged and the application simply runs without a tray.
pub fn spawn(commands: Sender<TrayCommand>, repaint: egui::Context) {
    std::thread::Builder::new()
        .name("tray-icon".into())
        .spawn(move || {
            let service = TrayService::new(PanelTray { commands, repaint });
            if let Err(err) = service.run() {
                warn!(error = %err, "tray icon unavailable; continuing without it");
            }
        })
        .map(|_| info!("tray icon thread started"))
        .unwrap_or_else(|err| warn!(error = %err, "failed to spawn tray thread"));
}
