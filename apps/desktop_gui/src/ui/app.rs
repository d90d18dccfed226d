//! Control-panel application shell: navbar, widget library, active list,
//! settings and about windows, and the per-frame gadget viewport pass.

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::{GadgetId, GadgetKind, SizeClass, WidgetTemplate};
use shared::fonts::FontStack;
use shared::settings::Settings;
use shared::theme::{Palette, ThemeMode, ThemeRegistry};
use storage::{Storage, WidgetConfigMap};
use tracing::{debug, info, warn};

use crate::controller::events::TrayCommand;
use crate::ui::fonts;
use crate::ui::gadget::{render_gadget_window, ActiveGadget, GadgetRequest};
use crate::ui::theme::{color32, style_for_palette};

const DANGER_COLOR: egui::Color32 = egui::Color32::from_rgb(0xFF, 0x3B, 0x30);

pub struct ControlPanelApp {
    storage: Storage,
    settings: Settings,
    theme: ThemeRegistry,
    applied_palette: Option<Palette>,

    font_stack: FontStack,
    fonts_installed_for: Option<Option<String>>,
    available_fonts: Vec<String>,

    widget_configs: WidgetConfigMap,
    gadgets: Vec<ActiveGadget>,
    next_gadget_id: i64,

    library_filter: String,
    settings_open: bool,
    about_open: bool,
    confirm_clear_all: bool,
    panel_hidden: bool,
    quit_requested: bool,
    status: String,

    tray_rx: Receiver<TrayCommand>,
}

impl ControlPanelApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        storage: Storage,
        tray_tx: Sender<TrayCommand>,
        tray_rx: Receiver<TrayCommand>,
    ) -> Self {
        let settings = storage.load_settings();
        let widget_configs = storage.load_widget_configs();

        let font_stack = FontStack::with_override(settings.font.clone());
        let installed = fonts::install(&cc.egui_ctx, &font_stack);

        #[cfg(target_os = "linux")]
        crate::tray::spawn(tray_tx, cc.egui_ctx.clone());
        #[cfg(not(target_os = "linux"))]
        drop(tray_tx);

        let mut panel_hidden = false;
        if !settings.show_on_startup && cfg!(target_os = "linux") {
            // Only meaningful with a tray to bring the panel back.
            cc.egui_ctx
                .send_viewport_cmd(egui::ViewportCommand::Visible(false));
            panel_hidden = true;
        }

        info!(data_dir = %storage.root().display(), "control panel ready");

        Self {
            storage,
            theme: ThemeRegistry::new(settings.theme, None),
            applied_palette: None,
            fonts_installed_for: Some(settings.font.clone()),
            available_fonts: installed.available,
            font_stack,
            settings,
            widget_configs,
            gadgets: Vec::new(),
            next_gadget_id: 1,
            library_filter: String::new(),
            settings_open: false,
            about_open: false,
            confirm_clear_all: false,
            panel_hidden,
            quit_requested: false,
            status: "Ready".to_string(),
            tray_rx,
        }
    }

    fn process_tray_commands(&mut self, ctx: &egui::Context) {
        while let Ok(command) = self.tray_rx.try_recv() {
            debug!(?command, "tray command");
            match command {
                TrayCommand::ShowPanel => {
                    if self.panel_hidden {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Visible(true));
                    }
                    self.panel_hidden = false;
                    ctx.send_viewport_cmd(egui::ViewportCommand::Focus);
                }
                TrayCommand::HidePanel => {
                    self.panel_hidden = true;
                    ctx.send_viewport_cmd(egui::ViewportCommand::Visible(false));
                }
                TrayCommand::Quit => {
                    self.quit_requested = true;
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            }
        }
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        let system_dark = ctx
            .input(|i| i.raw.system_theme)
            .map(|theme| theme == egui::Theme::Dark);
        self.theme.set_mode(self.settings.theme, system_dark);

        let palette = *self.theme.active();
        if self.applied_palette != Some(palette) {
            ctx.set_style(style_for_palette(&palette, self.theme.is_dark()));
            self.applied_palette = Some(palette);
            info!(mode = ?self.settings.theme, "theme applied");
        }
    }

    fn apply_fonts_if_needed(&mut self, ctx: &egui::Context) {
        if self.fonts_installed_for.as_ref() == Some(&self.settings.font) {
            return;
        }
        self.font_stack.set_override(self.settings.font.clone());
        let installed = fonts::install(ctx, &self.font_stack);
        self.status = match &installed.resolved {
            Some(family) => format!("Font set to {family}"),
            None => "Preferred font unavailable; using defaults".to_string(),
        };
        self.available_fonts = installed.available;
        self.fonts_installed_for = Some(self.settings.font.clone());
    }

    /// With a tray present, closing the panel minimizes to it instead of
    /// quitting when the user asked for that behavior.
    fn intercept_close(&mut self, ctx: &egui::Context) {
        if !cfg!(target_os = "linux") || self.quit_requested || !self.settings.minimize_to_tray {
            return;
        }
        if ctx.input(|i| i.viewport().close_requested()) {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            self.panel_hidden = true;
            ctx.send_viewport_cmd(egui::ViewportCommand::Visible(false));
            self.status = "Minimized to tray".to_string();
        }
    }

    fn minimize_to_tray(&mut self, ctx: &egui::Context) {
        #[cfg(target_os = "linux")]
        {
            self.panel_hidden = true;
            ctx.send_viewport_cmd(egui::ViewportCommand::Visible(false));
        }
        #[cfg(not(target_os = "linux"))]
        ctx.send_viewport_cmd(egui::ViewportCommand::Minimized(true));
    }

    fn create_gadget(&mut self, kind: GadgetKind) {
        let config = self.widget_configs.get(kind.slug());
        let gadget = ActiveGadget::create(
            GadgetId(self.next_gadget_id),
            kind,
            config,
            self.settings.default_size,
            self.gadgets.len(),
            &self.storage,
        );
        self.next_gadget_id += 1;
        self.status = format!("Added {}", gadget.template.name);
        self.gadgets.push(gadget);
    }

    fn remove_gadget(&mut self, id: GadgetId) {
        if let Some(index) = self.gadgets.iter().position(|g| g.id == id) {
            let gadget = self.gadgets.remove(index);
            self.status = format!("Removed {}", gadget.template.name);
        }
    }

    fn persist_settings(&mut self) {
        self.settings = self.settings.clone().normalized();
        match self.storage.save_settings(&self.settings) {
            Ok(()) => {
                self.status = "Settings saved".to_string();
                info!("settings saved");
            }
            Err(err) => {
                self.status = "Failed to save settings".to_string();
                warn!(error = %err, "failed to save settings");
            }
        }
    }

    fn show_navbar(&mut self, ctx: &egui::Context) {
        let palette = *self.theme.active();
        egui::TopBottomPanel::top("navbar")
            .frame(
                egui::Frame::none()
                    .fill(color32(palette.bg_nav))
                    .inner_margin(egui::Margin::symmetric(16, 10)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("DashWidgets")
                            .size(20.0)
                            .strong()
                            .color(color32(palette.accent)),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("About").clicked() {
                            self.about_open = true;
                        }
                        if ui.button("Settings").clicked() {
                            self.settings_open = true;
                        }
                        if ui.button("Minimize to tray").clicked() {
                            self.minimize_to_tray(ctx);
                        }
                    });
                });
            });
    }

    fn show_status_bar(&mut self, ctx: &egui::Context) {
        let palette = *self.theme.active();
        egui::TopBottomPanel::bottom("status_bar")
            .frame(
                egui::Frame::none()
                    .fill(color32(palette.bg_nav))
                    .inner_margin(egui::Margin::symmetric(16, 4)),
            )
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new(&self.status)
                        .size(11.0)
                        .color(color32(palette.text_secondary)),
                );
            });
    }

    fn show_library_panel(&mut self, ctx: &egui::Context) {
        let palette = *self.theme.active();
        egui::SidePanel::left("widget_library")
            .resizable(false)
            .exact_width(330.0)
            .frame(
                egui::Frame::none()
                    .fill(color32(palette.bg_card))
                    .inner_margin(egui::Margin::same(12)),
            )
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new("🧩 Widget Library")
                        .size(16.0)
                        .strong()
                        .color(color32(palette.text_primary)),
                );
                ui.add_space(8.0);
                ui.add(
                    egui::TextEdit::singleline(&mut self.library_filter)
                        .hint_text("Search widgets…")
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(8.0);

                let filter = self.library_filter.to_lowercase();
                let mut to_create = None;
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        for template in WidgetTemplate::catalog() {
                            let matches = filter.is_empty()
                                || template.name.to_lowercase().contains(&filter)
                                || template.description.to_lowercase().contains(&filter);
                            if !matches {
                                continue;
                            }
                            if library_card(ui, &palette, &template) {
                                to_create = Some(template.kind);
                            }
                            ui.add_space(8.0);
                        }
                    });
                if let Some(kind) = to_create {
                    self.create_gadget(kind);
                }
            });
    }

    fn show_active_panel(&mut self, ctx: &egui::Context) {
        let palette = *self.theme.active();
        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(color32(palette.bg_main))
                    .inner_margin(egui::Margin::same(12)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("🖥 Active Widgets")
                            .size(16.0)
                            .strong()
                            .color(color32(palette.text_primary)),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(format!("{} widgets", self.gadgets.len()))
                                .size(12.0)
                                .color(color32(palette.text_secondary)),
                        );
                    });
                });
                ui.add_space(8.0);

                egui::Frame::none()
                    .fill(color32(palette.bg_hint))
                    .rounding(egui::Rounding::same(10))
                    .inner_margin(egui::Margin::same(10))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(
                                "💡 Tip: add widgets from the library on the left, then drag \
                                 them anywhere on the desktop. Right-click a widget for options.",
                            )
                            .size(11.0)
                            .color(color32(palette.text_secondary)),
                        );
                    });
                ui.add_space(8.0);

                if self.gadgets.is_empty() {
                    ui.vertical_centered(|ui| {
                        ui.add_space(30.0);
                        ui.label(
                            egui::RichText::new("Add widgets from the library on the left")
                                .size(14.0)
                                .color(color32(palette.text_hint)),
                        );
                    });
                    return;
                }

                let mut close = None;
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        for gadget in &mut self.gadgets {
                            egui::Frame::none()
                                .fill(color32(palette.bg_input))
                                .rounding(egui::Rounding::same(8))
                                .inner_margin(egui::Margin::same(8))
                                .show(ui, |ui| {
                                    ui.horizontal(|ui| {
                                        ui.label(egui::RichText::new(&gadget.icon).size(20.0));
                                        ui.label(
                                            egui::RichText::new(gadget.template.name)
                                                .size(13.0)
                                                .color(color32(palette.text_primary)),
                                        );
                                        ui.label(
                                            egui::RichText::new(format!(
                                                "({})",
                                                gadget.size_class.label()
                                            ))
                                            .size(10.0)
                                            .color(color32(palette.text_hint)),
                                        );
                                        ui.with_layout(
                                            egui::Layout::right_to_left(egui::Align::Center),
                                            |ui| {
                                                let close_btn = egui::Button::new(
                                                    egui::RichText::new("✕")
                                                        .size(12.0)
                                                        .color(DANGER_COLOR),
                                                )
                                                .frame(false);
                                                if ui.add(close_btn).clicked() {
                                                    close = Some(gadget.id);
                                                }
                                                let eye = if gadget.visible { "👁" } else { "🙈" };
                                                let eye_btn = egui::Button::new(
                                                    egui::RichText::new(eye).size(12.0),
                                                )
                                                .frame(false);
                                                if ui.add(eye_btn).clicked() {
                                                    gadget.visible = !gadget.visible;
                                                }
                                            },
                                        );
                                    });
                                });
                            ui.add_space(6.0);
                        }
                    });
                if let Some(id) = close {
                    self.remove_gadget(id);
                }
            });
    }

    fn show_settings_window(&mut self, ctx: &egui::Context) {
        if !self.settings_open {
            return;
        }
        let mut open = self.settings_open;
        let mut saved = false;
        egui::Window::new("⚙ Settings")
            .open(&mut open)
            .resizable(false)
            .default_width(380.0)
            .show(ctx, |ui| {
                ui.label(egui::RichText::new("General").strong());
                ui.checkbox(&mut self.settings.auto_start, "Launch at startup");
                ui.checkbox(&mut self.settings.minimize_to_tray, "Minimize to tray on close");
                ui.checkbox(&mut self.settings.show_on_startup, "Show this window at startup");

                ui.separator();
                ui.label(egui::RichText::new("Appearance").strong());
                egui::ComboBox::from_label("Theme")
                    .selected_text(self.settings.theme.label())
                    .show_ui(ui, |ui| {
                        for mode in [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System] {
                            ui.selectable_value(&mut self.settings.theme, mode, mode.label());
                        }
                    });

                let current_font = self
                    .settings
                    .font
                    .clone()
                    .unwrap_or_else(|| "System default".to_string());
                egui::ComboBox::from_label("Font")
                    .selected_text(current_font)
                    .show_ui(ui, |ui| {
                        if ui
                            .selectable_label(self.settings.font.is_none(), "System default")
                            .clicked()
                        {
                            self.settings.font = None;
                        }
                        for family in &self.available_fonts {
                            let selected = self.settings.font.as_deref() == Some(family);
                            if ui.selectable_label(selected, family).clicked() {
                                self.settings.font = Some(family.clone());
                            }
                        }
                    });

                ui.separator();
                ui.label(egui::RichText::new("Widgets").strong());
                ui.add(
                    egui::Slider::new(&mut self.settings.refresh_interval, 1..=10)
                        .text("Refresh interval (s)"),
                );
                ui.add(
                    egui::Slider::new(&mut self.settings.opacity, 50..=100)
                        .text("Widget opacity (%)"),
                );
                egui::ComboBox::from_label("Default widget size")
                    .selected_text(self.settings.default_size.label())
                    .show_ui(ui, |ui| {
                        for size in [SizeClass::Small, SizeClass::Medium, SizeClass::Large] {
                            ui.selectable_value(&mut self.settings.default_size, size, size.label());
                        }
                    });

                ui.separator();
                ui.label(egui::RichText::new("Data").strong());
                let clear_btn = egui::Button::new(
                    egui::RichText::new("Clear all desktop widgets").color(egui::Color32::WHITE),
                )
                .fill(DANGER_COLOR);
                if ui.add(clear_btn).clicked() {
                    self.confirm_clear_all = true;
                }

                ui.separator();
                ui.label(egui::RichText::new("About").strong());
                ui.label(
                    egui::RichText::new(format!("Version {}", env!("CARGO_PKG_VERSION")))
                        .size(12.0),
                );

                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("Save settings").clicked() {
                        saved = true;
                    }
                });
            });
        if saved {
            self.persist_settings();
            open = false;
        }
        self.settings_open = open;
    }

    fn show_about_window(&mut self, ctx: &egui::Context) {
        if !self.about_open {
            return;
        }
        let palette = *self.theme.active();
        let mut open = self.about_open;
        egui::Window::new("About DashWidgets")
            .open(&mut open)
            .resizable(false)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new("📦").size(56.0));
                    ui.label(
                        egui::RichText::new("DashWidgets")
                            .size(24.0)
                            .strong()
                            .color(color32(palette.accent)),
                    );
                    ui.label(
                        egui::RichText::new(format!("Version {}", env!("CARGO_PKG_VERSION")))
                            .size(12.0)
                            .color(color32(palette.text_secondary)),
                    );
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new("A Dashboard-style desktop widgets manager")
                            .size(11.0)
                            .color(color32(palette.text_primary)),
                    );
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new("© 2026 DashWidgets contributors")
                            .size(10.0)
                            .color(color32(palette.text_hint)),
                    );
                });
            });
        self.about_open = open;
    }

    fn show_clear_all_confirm(&mut self, ctx: &egui::Context) {
        if !self.confirm_clear_all {
            return;
        }
        egui::Window::new("Remove all widgets?")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label("Every desktop widget will be closed. Saved notes and to-dos stay on disk.");
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Remove all").clicked() {
                        let removed = self.gadgets.len();
                        self.gadgets.clear();
                        self.confirm_clear_all = false;
                        self.status = format!("Removed {removed} widgets");
                    }
                    if ui.button("Cancel").clicked() {
                        self.confirm_clear_all = false;
                    }
                });
            });
    }

    fn render_gadget_viewports(&mut self, ctx: &egui::Context) {
        let palette = *self.theme.active();
        let settings = self.settings.clone();
        let storage = self.storage.clone();

        let mut requests = Vec::new();
        for gadget in &mut self.gadgets {
            if !gadget.visible {
                continue;
            }
            render_gadget_window(ctx, gadget, &palette, &settings, &storage, &mut requests);
        }

        for request in requests {
            match request {
                GadgetRequest::Close(id) => self.remove_gadget(id),
                GadgetRequest::OpenSettings => {
                    self.settings_open = true;
                    self.panel_hidden = false;
                    ctx.send_viewport_cmd(egui::ViewportCommand::Visible(true));
                    ctx.send_viewport_cmd(egui::ViewportCommand::Focus);
                }
                GadgetRequest::ShapeChanged(kind, shape) => {
                    let entry = self
                        .widget_configs
                        .entry(kind.slug().to_string())
                        .or_default();
                    entry.shape = Some(shape);
                    if let Err(err) = self.storage.save_widget_configs(&self.widget_configs) {
                        warn!(error = %err, "failed to save widget configs");
                    }
                }
            }
        }
    }
}

fn library_card(ui: &mut egui::Ui, palette: &Palette, template: &WidgetTemplate) -> bool {
    let mut add = false;
    egui::Frame::none()
        .fill(color32(palette.bg_input))
        .rounding(egui::Rounding::same(10))
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(template.icon).size(28.0));
                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new(template.name)
                            .size(14.0)
                            .strong()
                            .color(color32(palette.text_primary)),
                    );
                    ui.label(
                        egui::RichText::new(template.description)
                            .size(11.0)
                            .color(color32(palette.text_secondary)),
                    );
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let add_btn = egui::Button::new(
                        egui::RichText::new("+").size(18.0).strong(),
                    )
                    .min_size(egui::vec2(36.0, 36.0));
                    if ui.add(add_btn).clicked() {
                        add = true;
                    }
                });
            });
        });
    add
}

impl eframe::App for ControlPanelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_tray_commands(ctx);
        self.intercept_close(ctx);
        self.apply_theme_if_needed(ctx);
        self.apply_fonts_if_needed(ctx);

        self.show_navbar(ctx);
        self.show_status_bar(ctx);
        self.show_library_panel(ctx);
        self.show_active_panel(ctx);

        self.show_settings_window(ctx);
        self.show_about_window(ctx);
        self.show_clear_all_confirm(ctx);

        self.render_gadget_viewports(ctx);
    }
}
