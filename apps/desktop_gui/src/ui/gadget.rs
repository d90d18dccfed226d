//! One borderless, always-on-top OS window per active gadget.
//!
//! Each gadget renders through an immediate viewport: the background acts as
//! a drag surface driving the shared drag/resize state machine, the right
//! mouse button opens the context menu, and the content renderer for the
//! gadget's kind draws on top.

use eframe::egui;
use shared::domain::{GadgetId, GadgetKind, Shape, SizeClass, WidgetConfig, WidgetTemplate};
use shared::geometry::{self, DragState, Point, Rect, Size};
use shared::settings::Settings;
use shared::theme::Palette;
use storage::Storage;
use tracing::warn;

use crate::ui::gadgets::{
    self, monitor::MonitorState, notes::NotesState, timer::TimerState, todo::TodoState, Canvas,
};
use crate::ui::theme::{color32, color32_alpha};

/// Per-kind mutable content state.
pub enum GadgetContent {
    Clock,
    Weather,
    Todo(TodoState),
    Notes(NotesState),
    Monitor(MonitorState),
    Calendar,
    Timer(TimerState),
    Currency,
}

impl GadgetContent {
    pub fn for_kind(kind: GadgetKind, storage: &Storage) -> Self {
        match kind {
            GadgetKind::Clock => GadgetContent::Clock,
            GadgetKind::Weather => GadgetContent::Weather,
            GadgetKind::Todo => GadgetContent::Todo(TodoState::load(storage)),
            GadgetKind::Notes => GadgetContent::Notes(NotesState::load(storage)),
            GadgetKind::SystemMonitor => GadgetContent::Monitor(MonitorState::new()),
            GadgetKind::Calendar => GadgetContent::Calendar,
            GadgetKind::Timer => GadgetContent::Timer(TimerState::new()),
            GadgetKind::Currency => GadgetContent::Currency,
        }
    }
}

/// Requests a gadget window sends back to the control panel.
pub enum GadgetRequest {
    Close(GadgetId),
    OpenSettings,
    ShapeChanged(GadgetKind, Shape),
}

pub struct ActiveGadget {
    pub id: GadgetId,
    pub template: WidgetTemplate,
    pub icon: String,
    pub shape: Shape,
    pub size_class: SizeClass,
    pub rect: Rect,
    pub drag: DragState,
    pub content: GadgetContent,
    pub visible: bool,
}

impl ActiveGadget {
    pub fn create(
        id: GadgetId,
        kind: GadgetKind,
        config: Option<&WidgetConfig>,
        size_class: SizeClass,
        slot: usize,
        storage: &Storage,
    ) -> Self {
        let template = WidgetTemplate::for_kind(kind);
        let icon = config
            .and_then(|c| c.icon.clone())
            .unwrap_or_else(|| template.icon.to_string());
        let shape = config.and_then(|c| c.shape).unwrap_or(template.shape);
        let rect = initial_rect(size_class.dimensions(), slot);
        Self {
            id,
            template,
            icon,
            shape,
            size_class,
            rect,
            drag: DragState::Idle,
            content: GadgetContent::for_kind(kind, storage),
            visible: true,
        }
    }

    pub fn kind(&self) -> GadgetKind {
        self.template.kind
    }

    pub fn viewport_id(&self) -> egui::ViewportId {
        egui::ViewportId::from_hash_of(("gadget", self.id.0))
    }
}

/// New windows stagger down-right from the classic 100,100 anchor so they do
/// not stack exactly on top of each other.
pub fn initial_rect(size: Size, slot: usize) -> Rect {
    let offset = (slot % 8) as f32 * 32.0;
    Rect::new(100.0 + offset, 100.0 + offset, size.width, size.height)
}

pub fn shape_radius(shape: Shape, size: Size) -> f32 {
    match shape {
        Shape::Rectangle => 0.0,
        Shape::Rounded => 14.0,
        Shape::Circle => size.width.min(size.height) / 2.0,
        Shape::Capsule => size.height / 2.0,
    }
}

fn cursor_for_edge(edge: geometry::ResizeEdge) -> egui::CursorIcon {
    match edge {
        geometry::ResizeEdge::North => egui::CursorIcon::ResizeNorth,
        geometry::ResizeEdge::South => egui::CursorIcon::ResizeSouth,
        geometry::ResizeEdge::East => egui::CursorIcon::ResizeEast,
        geometry::ResizeEdge::West => egui::CursorIcon::ResizeWest,
        geometry::ResizeEdge::NorthEast => egui::CursorIcon::ResizeNorthEast,
        geometry::ResizeEdge::NorthWest => egui::CursorIcon::ResizeNorthWest,
        geometry::ResizeEdge::SouthEast => egui::CursorIcon::ResizeSouthEast,
        geometry::ResizeEdge::SouthWest => egui::CursorIcon::ResizeSouthWest,
    }
}

/// Draws one gadget's viewport for this frame. The viewport builder carries
/// the desired rect; egui applies only what changed since the last frame.
pub fn render_gadget_window(
    ctx: &egui::Context,
    gadget: &mut ActiveGadget,
    palette: &Palette,
    settings: &Settings,
    storage: &Storage,
    requests: &mut Vec<GadgetRequest>,
) {
    let rect = gadget.rect;
    let builder = egui::ViewportBuilder::default()
        .with_title(gadget.template.name)
        .with_decorations(false)
        .with_resizable(false)
        .with_transparent(true)
        .with_window_level(egui::WindowLevel::AlwaysOnTop)
        .with_position(egui::pos2(rect.origin.x, rect.origin.y))
        .with_inner_size(egui::vec2(rect.size.width, rect.size.height));

    ctx.show_viewport_immediate(gadget.viewport_id(), builder, |ctx, _class| {
        if ctx.input(|i| i.viewport().close_requested()) {
            requests.push(GadgetRequest::Close(gadget.id));
            return;
        }

        let radius = shape_radius(gadget.shape, gadget.rect.size);
        let frame = egui::Frame::none()
            .fill(color32_alpha(palette.bg_card, settings.opacity_alpha()))
            .stroke(egui::Stroke::new(1.0, color32(palette.border)))
            .rounding(egui::Rounding::same(radius as u8))
            .inner_margin(egui::Margin::same(10));

        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            let surface = ui.interact(
                ui.max_rect(),
                ui.id().with("surface"),
                egui::Sense::click_and_drag(),
            );

            handle_drag(ctx, gadget, &surface);
            update_cursor(ctx, gadget, &surface);
            context_menu(&surface, gadget, storage, requests);

            let canvas = Canvas {
                size: egui::vec2(gadget.rect.size.width, gadget.rect.size.height),
                palette,
                icon: &gadget.icon,
            };
            match &mut gadget.content {
                GadgetContent::Clock => gadgets::clock::show(ui, &canvas),
                GadgetContent::Weather => gadgets::weather::show(ui, &canvas),
                GadgetContent::Todo(state) => {
                    if gadgets::todo::show(ui, &canvas, state) {
                        if let Err(err) = storage.save_todos(&state.list) {
                            warn!(error = %err, "failed to save todos");
                        }
                    }
                }
                GadgetContent::Notes(state) => {
                    if gadgets::notes::show(ui, &canvas, state) {
                        match storage.save_note(&state.draft) {
                            Ok(()) => state.dirty = false,
                            Err(err) => warn!(error = %err, "failed to save note"),
                        }
                    }
                }
                GadgetContent::Monitor(state) => {
                    state.tick(settings.refresh_interval_duration());
                    gadgets::monitor::show(ui, &canvas, state);
                }
                GadgetContent::Calendar => gadgets::calendar::show(ui, &canvas),
                GadgetContent::Timer(state) => {
                    state.tick();
                    gadgets::timer::show(ui, &canvas, state);
                }
                GadgetContent::Currency => gadgets::currency::show(ui, &canvas),
            }
        });

        schedule_refresh(ctx, gadget, settings);
    });
}

/// Current window rect in screen coordinates, falling back to our own
/// bookkeeping before the OS has reported one.
fn os_window_rect(ctx: &egui::Context, fallback: Rect) -> Rect {
    ctx.input(|i| i.viewport().inner_rect)
        .map(|r| Rect::new(r.min.x, r.min.y, r.width(), r.height()))
        .unwrap_or(fallback)
}

fn handle_drag(ctx: &egui::Context, gadget: &mut ActiveGadget, surface: &egui::Response) {
    let window = os_window_rect(ctx, gadget.rect);

    if surface.drag_started() {
        if let Some(local) = surface.interact_pointer_pos() {
            let press_local = Point::new(local.x, local.y);
            let press_global =
                Point::new(window.origin.x + local.x, window.origin.y + local.y);
            gadget.drag = DragState::press(window, press_local, press_global);
        }
    } else if surface.dragged() {
        if let Some(local) = surface.interact_pointer_pos() {
            let pointer =
                Point::new(window.origin.x + local.x, window.origin.y + local.y);
            if let Some(next) = gadget.drag.dragged_to(pointer) {
                gadget.rect = next;
            }
        }
    } else if surface.drag_stopped() && gadget.drag.release() {
        // Resize finished: content derives its metrics from the live size,
        // so the next pass lays everything out at the new dimensions.
        if let GadgetContent::Monitor(state) = &mut gadget.content {
            state.invalidate();
        }
    }
}

fn update_cursor(ctx: &egui::Context, gadget: &ActiveGadget, surface: &egui::Response) {
    let icon = match gadget.drag {
        DragState::Resizing { edge, .. } => cursor_for_edge(edge),
        DragState::Dragging { .. } => egui::CursorIcon::Grabbing,
        DragState::Idle => {
            let hovered_edge = surface.hover_pos().and_then(|pos| {
                geometry::hit_test(
                    Point::new(pos.x, pos.y),
                    gadget.rect.size,
                    geometry::RESIZE_MARGIN,
                )
            });
            match hovered_edge {
                Some(edge) => cursor_for_edge(edge),
                None if surface.hovered() => egui::CursorIcon::Move,
                None => egui::CursorIcon::Default,
            }
        }
    };
    ctx.output_mut(|o| o.cursor_icon = icon);
}

fn context_menu(
    surface: &egui::Response,
    gadget: &mut ActiveGadget,
    storage: &Storage,
    requests: &mut Vec<GadgetRequest>,
) {
    let monitor = surface
        .ctx
        .input(|i| i.viewport().monitor_size)
        .map(|size| Size::new(size.x, size.y));

    surface.context_menu(|ui| {
        if let GadgetContent::Todo(state) = &mut gadget.content {
            if ui.button("Clear completed").clicked() {
                state.list.clear_completed();
                if let Err(err) = storage.save_todos(&state.list) {
                    warn!(error = %err, "failed to save todos");
                }
                ui.close_menu();
            }
            ui.separator();
        }

        if ui.button("Reset size").clicked() {
            gadget.rect = geometry::reset(gadget.rect, gadget.size_class.dimensions(), monitor);
            ui.close_menu();
        }

        ui.menu_button("Shape", |ui| {
            for shape in [
                Shape::Rectangle,
                Shape::Rounded,
                Shape::Circle,
                Shape::Capsule,
            ] {
                if ui
                    .radio(gadget.shape == shape, shape.label())
                    .clicked()
                {
                    gadget.shape = shape;
                    requests.push(GadgetRequest::ShapeChanged(gadget.kind(), shape));
                    ui.close_menu();
                }
            }
        });

        ui.separator();
        if ui.button("Settings…").clicked() {
            requests.push(GadgetRequest::OpenSettings);
            ui.close_menu();
        }
        if ui.button("Refresh").clicked() {
            if let GadgetContent::Monitor(state) = &mut gadget.content {
                state.invalidate();
            }
            ui.close_menu();
        }
        ui.separator();
        if ui.button("Close").clicked() {
            requests.push(GadgetRequest::Close(gadget.id));
            ui.close_menu();
        }
    });
}

/// Live gadgets reschedule a one-shot repaint after each draw. A window that
/// was closed is never drawn again, which ends the chain on its own.
fn schedule_refresh(ctx: &egui::Context, gadget: &ActiveGadget, settings: &Settings) {
    let interval = match &gadget.content {
        GadgetContent::Clock => GadgetKind::Clock.refresh_interval(),
        GadgetContent::Monitor(_) => Some(settings.refresh_interval_duration()),
        GadgetContent::Timer(state) if state.running => GadgetKind::Timer.refresh_interval(),
        _ => None,
    };
    if let Some(interval) = interval {
        ctx.request_repaint_after(interval);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_rects_stagger_per_slot() {
        let size = Size::new(200.0, 200.0);
        let first = initial_rect(size, 0);
        let second = initial_rect(size, 1);
        assert_eq!(first.origin, Point::new(100.0, 100.0));
        assert_eq!(second.origin, Point::new(132.0, 132.0));
        assert_eq!(first.size, size);

        // The stagger wraps instead of walking off screen.
        assert_eq!(initial_rect(size, 8).origin, first.origin);
    }

    #[test]
    fn shape_radius_follows_the_shape() {
        let size = Size::new(200.0, 120.0);
        assert_eq!(shape_radius(Shape::Rectangle, size), 0.0);
        assert_eq!(shape_radius(Shape::Rounded, size), 14.0);
        assert_eq!(shape_radius(Shape::Circle, size), 60.0);
        assert_eq!(shape_radius(Shape::Capsule, size), 60.0);
    }
}
