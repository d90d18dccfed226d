//! Drag/resize geometry for gadget windows.
//!
//! Pure arithmetic, no toolkit types: the GUI feeds pointer positions in and
//! applies the returned rectangles to the OS window.

use serde::{Deserialize, Serialize};

/// Width of the band along each window edge that triggers a resize instead
/// of a move.
pub const RESIZE_MARGIN: f32 = 8.0;

/// Gadget windows never shrink below this, whatever the drag delta.
pub const MIN_WIDTH: f32 = 100.0;
pub const MIN_HEIGHT: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeEdge {
    pub fn affects_left(self) -> bool {
        matches!(self, Self::West | Self::NorthWest | Self::SouthWest)
    }

    pub fn affects_right(self) -> bool {
        matches!(self, Self::East | Self::NorthEast | Self::SouthEast)
    }

    pub fn affects_top(self) -> bool {
        matches!(self, Self::North | Self::NorthEast | Self::NorthWest)
    }

    pub fn affects_bottom(self) -> bool {
        matches!(self, Self::South | Self::SouthEast | Self::SouthWest)
    }
}

/// Maps a window-local pointer position to the resize edge it falls on, if
/// any. Corners win over plain edges when the pointer is inside both bands.
pub fn hit_test(pos: Point, size: Size, margin: f32) -> Option<ResizeEdge> {
    let near_left = pos.x < margin;
    let near_right = pos.x > size.width - margin;
    let near_top = pos.y < margin;
    let near_bottom = pos.y > size.height - margin;

    match (near_top, near_bottom, near_left, near_right) {
        (true, _, true, _) => Some(ResizeEdge::NorthWest),
        (true, _, _, true) => Some(ResizeEdge::NorthEast),
        (_, true, true, _) => Some(ResizeEdge::SouthWest),
        (_, true, _, true) => Some(ResizeEdge::SouthEast),
        (true, _, _, _) => Some(ResizeEdge::North),
        (_, true, _, _) => Some(ResizeEdge::South),
        (_, _, true, _) => Some(ResizeEdge::West),
        (_, _, _, true) => Some(ResizeEdge::East),
        _ => None,
    }
}

/// Applies a resize delta to the rectangle captured at press time. The far
/// side stays fixed: dragging an east/south edge grows away from the origin,
/// dragging a west/north edge moves the origin so the opposite side holds
/// still. Both axes clamp at the 100x100 minimum.
pub fn resize(start: Rect, edge: ResizeEdge, dx: f32, dy: f32) -> Rect {
    let mut x = start.origin.x;
    let mut y = start.origin.y;
    let mut width = start.size.width;
    let mut height = start.size.height;

    if edge.affects_right() {
        width = (start.size.width + dx).max(MIN_WIDTH);
    }
    if edge.affects_left() {
        width = (start.size.width - dx).max(MIN_WIDTH);
        x = start.origin.x + (start.size.width - width);
    }
    if edge.affects_bottom() {
        height = (start.size.height + dy).max(MIN_HEIGHT);
    }
    if edge.affects_top() {
        height = (start.size.height - dy).max(MIN_HEIGHT);
        y = start.origin.y + (start.size.height - height);
    }

    Rect::new(x, y, width, height)
}

/// Restores the template's default dimensions exactly, keeping the window
/// centered where it was. When the screen size is known, the origin is
/// clamped so the window stays within the last-known bounds.
pub fn reset(current: Rect, default: Size, screen: Option<Size>) -> Rect {
    let mut x = current.origin.x + (current.size.width - default.width) / 2.0;
    let mut y = current.origin.y + (current.size.height - default.height) / 2.0;

    if let Some(screen) = screen {
        x = x.clamp(0.0, (screen.width - default.width).max(0.0));
        y = y.clamp(0.0, (screen.height - default.height).max(0.0));
    }

    Rect {
        origin: Point::new(x, y),
        size: default,
    }
}

/// Interaction state for one gadget window.
///
/// `idle -> dragging` on a press in the content area, `idle -> resizing` on
/// a press inside the margin band, back to `idle` on release.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        press: Point,
        start: Rect,
    },
    Resizing {
        edge: ResizeEdge,
        press: Point,
        start: Rect,
    },
}

impl DragState {
    pub fn is_idle(&self) -> bool {
        matches!(self, DragState::Idle)
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, DragState::Resizing { .. })
    }

    /// Begins an interaction. `local` is the press position relative to the
    /// window, `pointer` the same press in screen coordinates, `window` the
    /// window rect at press time.
    pub fn press(window: Rect, local: Point, pointer: Point) -> DragState {
        match hit_test(local, window.size, RESIZE_MARGIN) {
            Some(edge) => DragState::Resizing {
                edge,
                press: pointer,
                start: window,
            },
            None => DragState::Dragging {
                press: pointer,
                start: window,
            },
        }
    }

    /// The window rect for the current pointer position, or `None` when no
    /// interaction is active. Moves follow the pointer delta 1:1 with no
    /// bounds clamping; resizes go through [`resize`].
    pub fn dragged_to(&self, pointer: Point) -> Option<Rect> {
        match *self {
            DragState::Idle => None,
            DragState::Dragging { press, start } => Some(Rect {
                origin: Point::new(
                    start.origin.x + (pointer.x - press.x),
                    start.origin.y + (pointer.y - press.y),
                ),
                size: start.size,
            }),
            DragState::Resizing { edge, press, start } => {
                Some(resize(start, edge, pointer.x - press.x, pointer.y - press.y))
            }
        }
    }

    /// Ends the interaction. Returns true when a resize just finished, which
    /// is the caller's cue to rebuild content at the new dimensions.
    pub fn release(&mut self) -> bool {
        let was_resizing = self.is_resizing();
        *self = DragState::Idle;
        was_resizing
    }
}

#[cfg(test)]
#[path = "tests/geometry_tests.rs"]
mod tests;
