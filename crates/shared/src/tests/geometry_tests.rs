use super::*;

fn window() -> Rect {
    Rect::new(100.0, 100.0, 200.0, 200.0)
}

#[test]
fn hit_test_detects_plain_edges() {
    let size = Size::new(200.0, 200.0);
    assert_eq!(
        hit_test(Point::new(100.0, 3.0), size, RESIZE_MARGIN),
        Some(ResizeEdge::North)
    );
    assert_eq!(
        hit_test(Point::new(100.0, 197.0), size, RESIZE_MARGIN),
        Some(ResizeEdge::South)
    );
    assert_eq!(
        hit_test(Point::new(197.0, 100.0), size, RESIZE_MARGIN),
        Some(ResizeEdge::East)
    );
    assert_eq!(
        hit_test(Point::new(3.0, 100.0), size, RESIZE_MARGIN),
        Some(ResizeEdge::West)
    );
}

#[test]
fn hit_test_misses_the_content_area() {
    let size = Size::new(200.0, 200.0);
    assert_eq!(hit_test(Point::new(100.0, 100.0), size, RESIZE_MARGIN), None);
    assert_eq!(hit_test(Point::new(9.0, 9.0), size, RESIZE_MARGIN), None);
}

#[test]
fn corners_take_priority_over_edges() {
    let size = Size::new(200.0, 200.0);
    assert_eq!(
        hit_test(Point::new(3.0, 3.0), size, RESIZE_MARGIN),
        Some(ResizeEdge::NorthWest)
    );
    assert_eq!(
        hit_test(Point::new(197.0, 3.0), size, RESIZE_MARGIN),
        Some(ResizeEdge::NorthEast)
    );
    assert_eq!(
        hit_test(Point::new(3.0, 197.0), size, RESIZE_MARGIN),
        Some(ResizeEdge::SouthWest)
    );
    assert_eq!(
        hit_test(Point::new(197.0, 197.0), size, RESIZE_MARGIN),
        Some(ResizeEdge::SouthEast)
    );
}

#[test]
fn resize_east_grows_and_leaves_origin_fixed() {
    let out = resize(window(), ResizeEdge::East, 50.0, 999.0);
    assert_eq!(out, Rect::new(100.0, 100.0, 250.0, 200.0));
}

#[test]
fn resize_west_moves_origin_and_pins_far_side() {
    let out = resize(window(), ResizeEdge::West, -60.0, 0.0);
    // Left edge followed the pointer; the right side stayed at x = 300.
    assert_eq!(out, Rect::new(40.0, 100.0, 260.0, 200.0));
    assert_eq!(out.origin.x + out.size.width, 300.0);
}

#[test]
fn resize_north_moves_origin_and_pins_bottom() {
    let out = resize(window(), ResizeEdge::North, 0.0, -30.0);
    assert_eq!(out, Rect::new(100.0, 70.0, 200.0, 230.0));
    assert_eq!(out.origin.y + out.size.height, 300.0);
}

#[test]
fn resize_corner_adjusts_both_axes() {
    let out = resize(window(), ResizeEdge::SouthEast, 40.0, -20.0);
    assert_eq!(out, Rect::new(100.0, 100.0, 240.0, 180.0));

    let out = resize(window(), ResizeEdge::NorthWest, 25.0, 25.0);
    assert_eq!(out, Rect::new(125.0, 125.0, 175.0, 175.0));
}

#[test]
fn resize_clamps_to_minimum_regardless_of_delta() {
    for (edge, dx, dy) in [
        (ResizeEdge::East, -5000.0, 0.0),
        (ResizeEdge::West, 5000.0, 0.0),
        (ResizeEdge::SouthEast, -5000.0, -5000.0),
        (ResizeEdge::NorthWest, 5000.0, 5000.0),
    ] {
        let out = resize(window(), edge, dx, dy);
        assert!(out.size.width >= MIN_WIDTH, "{edge:?} width {}", out.size.width);
        assert!(
            out.size.height >= MIN_HEIGHT,
            "{edge:?} height {}",
            out.size.height
        );
    }
}

#[test]
fn resize_clamp_keeps_far_side_fixed_on_near_edges() {
    // Shrinking past the minimum from the west: width stops at 100 and the
    // origin stops where the right side still sits at x = 300.
    let out = resize(window(), ResizeEdge::West, 500.0, 0.0);
    assert_eq!(out.size.width, MIN_WIDTH);
    assert_eq!(out.origin.x, 200.0);
    assert_eq!(out.origin.x + out.size.width, 300.0);
}

#[test]
fn resize_zero_delta_returns_start_rect() {
    for edge in [
        ResizeEdge::North,
        ResizeEdge::South,
        ResizeEdge::East,
        ResizeEdge::West,
        ResizeEdge::NorthEast,
        ResizeEdge::NorthWest,
        ResizeEdge::SouthEast,
        ResizeEdge::SouthWest,
    ] {
        assert_eq!(resize(window(), edge, 0.0, 0.0), window());
    }
}

#[test]
fn press_in_content_area_starts_a_drag() {
    let state = DragState::press(window(), Point::new(80.0, 80.0), Point::new(180.0, 180.0));
    assert!(matches!(state, DragState::Dragging { .. }));
}

#[test]
fn press_in_margin_starts_a_resize_with_the_hit_edge() {
    let state = DragState::press(window(), Point::new(197.0, 80.0), Point::new(297.0, 180.0));
    match state {
        DragState::Resizing { edge, .. } => assert_eq!(edge, ResizeEdge::East),
        other => panic!("expected resize, got {other:?}"),
    }
}

#[test]
fn dragging_follows_pointer_delta_one_to_one() {
    let state = DragState::press(window(), Point::new(80.0, 80.0), Point::new(180.0, 180.0));

    let moved = state.dragged_to(Point::new(210.0, 140.0)).unwrap();
    assert_eq!(moved.origin, Point::new(130.0, 60.0));
    assert_eq!(moved.size, window().size);

    // No bounds clamping: a window may be dragged to negative coordinates.
    let moved = state.dragged_to(Point::new(-20.0, -20.0)).unwrap();
    assert_eq!(moved.origin, Point::new(-100.0, -100.0));
}

#[test]
fn idle_state_produces_no_rect() {
    assert_eq!(DragState::Idle.dragged_to(Point::new(5.0, 5.0)), None);
}

#[test]
fn release_reports_whether_a_resize_ended() {
    let mut state = DragState::press(window(), Point::new(3.0, 3.0), Point::new(103.0, 103.0));
    assert!(state.is_resizing());
    assert!(state.release());
    assert!(state.is_idle());

    let mut state = DragState::press(window(), Point::new(80.0, 80.0), Point::new(180.0, 180.0));
    assert!(!state.release());
    assert!(state.is_idle());
}

#[test]
fn reset_restores_default_dimensions_exactly() {
    let stretched = Rect::new(250.0, 250.0, 350.0, 180.0);
    let out = reset(stretched, Size::new(200.0, 200.0), None);
    assert_eq!(out.size, Size::new(200.0, 200.0));
    // Re-centered on the old rect.
    assert_eq!(out.origin, Point::new(325.0, 240.0));
}

#[test]
fn reset_clamps_origin_into_screen_bounds() {
    let off_screen = Rect::new(1900.0, -300.0, 400.0, 120.0);
    let out = reset(
        off_screen,
        Size::new(150.0, 150.0),
        Some(Size::new(1920.0, 1080.0)),
    );
    assert_eq!(out.size, Size::new(150.0, 150.0));
    assert_eq!(out.origin, Point::new(1770.0, 0.0));
}

#[test]
fn reset_after_manual_resize_matches_template_default() {
    // Grow a window via the state machine, then reset: the default footprint
    // comes back exactly.
    let mut state = DragState::press(window(), Point::new(197.0, 197.0), Point::new(297.0, 297.0));
    let grown = state.dragged_to(Point::new(500.0, 420.0)).unwrap();
    state.release();
    assert_ne!(grown.size, window().size);

    let out = reset(grown, window().size, None);
    assert_eq!(out.size, window().size);
}
