//! Integration tests for DockEngine
//!
//! These tests verify full gesture workflows including:
//! - Edge resize with minimum-size clamping and anchor preservation
//! - Move gestures with snap previews and commits
//! - Pre-snap size caching and restoration
//! - Session lifecycle across pointer up/down
//! - Frame coalescing under input bursts

use dockpane::{CursorStyle, DockConfig, DockEngine, Rect, SnapZone, Vec2};

fn create_engine() -> DockEngine {
    let mut engine = DockEngine::new(DockConfig::default());
    engine.init(1000.0, 800.0);
    engine
}

fn drag_frame(engine: &mut DockEngine, x: f32, y: f32) {
    engine.on_pointer_move(Vec2::new(x, y));
    engine.on_frame();
}

// =============================================================================
// Minimum-size invariant
// =============================================================================

#[test]
fn test_minimum_size_holds_across_resize_sequences() {
    let mut engine = create_engine();

    // Grab the bottom-right corner and sweep the pointer all over,
    // including far past the top-left of the panel
    engine.on_pointer_down(Vec2::new(319.0, 219.0));
    let sweep = [
        (500.0, 500.0),
        (25.0, 25.0),
        (0.0, 0.0),
        (-50.0, -50.0),
        (700.0, 10.0),
        (10.0, 700.0),
    ];

    for (x, y) in sweep {
        drag_frame(&mut engine, x, y);
        let bounds = engine.bounds();
        assert!(bounds.width >= 100.0 - 0.001, "width {} below minimum", bounds.width);
        assert!(bounds.height >= 80.0 - 0.001, "height {} below minimum", bounds.height);
    }
}

// =============================================================================
// Anchor invariance
// =============================================================================

#[test]
fn test_left_edge_resize_keeps_right_edge_fixed() {
    let mut engine = DockEngine::new(DockConfig {
        initial_bounds: Rect::new(998.0, 100.0, 120.0, 150.0),
        ..Default::default()
    });
    engine.init(2000.0, 800.0);

    // Press inside the 2px left margin
    engine.on_pointer_down(Vec2::new(999.0, 150.0));

    // Candidates: 999 - (x + 120), accepted while strictly above 100.
    // The anchor is established by the first applied frame.
    drag_frame(&mut engine, 700.0, 150.0);
    let anchor = engine.bounds().right();

    for x in [650.0, 750.0, 600.0] {
        drag_frame(&mut engine, x, 150.0);
        assert!((engine.bounds().x - x).abs() < 0.001);
        assert!((engine.bounds().right() - anchor).abs() < 0.001);
    }
}

#[test]
fn test_top_edge_resize_keeps_bottom_edge_fixed() {
    let mut engine = DockEngine::new(DockConfig {
        initial_bounds: Rect::new(100.0, 798.0, 150.0, 120.0),
        ..Default::default()
    });
    engine.init(2000.0, 1600.0);

    engine.on_pointer_down(Vec2::new(150.0, 799.0));

    // Candidates: 799 - (y + 120), accepted while strictly above 80
    drag_frame(&mut engine, 150.0, 500.0);
    let anchor = engine.bounds().bottom();

    for y in [450.0, 550.0, 400.0] {
        drag_frame(&mut engine, 150.0, y);
        assert!((engine.bounds().y - y).abs() < 0.001);
        assert!((engine.bounds().bottom() - anchor).abs() < 0.001);
    }
}

// =============================================================================
// End-to-end left-edge rejection scenario
// =============================================================================

#[test]
fn test_left_edge_rejection_scenario() {
    // Panel at {20, 20, 300, 200}; pointer-down at local offset (1, 100)
    let mut engine = create_engine();

    let result = engine.on_pointer_down(Vec2::new(21.0, 120.0));
    assert!(result.is_handled());
    let session = engine.session().unwrap();
    assert!(session.is_resizing());
    assert!(session.edges.left);

    // Live pointer at clientX = 250 with press clientX = 21 and press
    // width = 300: candidate = max(21 - (250 + 300), 100) = 100, which
    // is not strictly above the minimum, so neither left nor width
    // changes this frame
    drag_frame(&mut engine, 250.0, 120.0);
    assert!((engine.bounds().x - 20.0).abs() < 0.001);
    assert!((engine.bounds().width - 300.0).abs() < 0.001);
}

// =============================================================================
// Snap precedence
// =============================================================================

#[test]
fn test_snap_precedence_on_release() {
    let cases = [
        ((500.0, 1.0), Some(SnapZone::FullScreen)),
        ((500.0, 5.0), Some(SnapZone::TopHalf)),
        ((3.0, 400.0), Some(SnapZone::LeftHalf)),
        ((3.0, 5.0), Some(SnapZone::TopHalf)),
        ((995.0, 400.0), Some(SnapZone::RightHalf)),
        ((500.0, 795.0), Some(SnapZone::BottomHalf)),
        ((500.0, 400.0), None),
    ];

    for ((x, y), expected) in cases {
        let mut engine = create_engine();
        engine.set_title_hover(true);
        engine.on_pointer_down(Vec2::new(150.0, 100.0));
        drag_frame(&mut engine, x, y);
        engine.on_pointer_up(Vec2::new(x, y));

        assert_eq!(engine.snapped(), expected, "release at ({}, {})", x, y);
        if let Some(zone) = expected {
            let target = zone.target_rect(engine.viewport());
            assert!((engine.bounds().x - target.x).abs() < 0.001);
            assert!((engine.bounds().width - target.width).abs() < 0.001);
            assert!((engine.bounds().height - target.height).abs() < 0.001);
        }
    }
}

// =============================================================================
// Session exclusivity
// =============================================================================

#[test]
fn test_no_residual_session_after_up() {
    let mut engine = create_engine();
    engine.set_title_hover(true);

    engine.on_pointer_down(Vec2::new(150.0, 100.0));
    drag_frame(&mut engine, 400.0, 300.0);
    engine.on_pointer_up(Vec2::new(400.0, 300.0));
    assert!(!engine.is_dragging());

    let settled = engine.bounds();

    // Subsequent moves with no new pointer-down change no geometry
    drag_frame(&mut engine, 600.0, 500.0);
    drag_frame(&mut engine, 50.0, 50.0);
    assert!((engine.bounds().x - settled.x).abs() < 0.001);
    assert!((engine.bounds().y - settled.y).abs() < 0.001);
    assert!((engine.bounds().width - settled.width).abs() < 0.001);
    assert!((engine.bounds().height - settled.height).abs() < 0.001);
}

// =============================================================================
// Snap-then-drag restores pre-snap size
// =============================================================================

#[test]
fn test_snap_then_drag_restores_pre_snap_size() {
    let mut engine = create_engine();
    engine.set_title_hover(true);

    // Snap to the left half
    engine.on_pointer_down(Vec2::new(150.0, 100.0));
    drag_frame(&mut engine, 3.0, 400.0);
    engine.on_pointer_up(Vec2::new(3.0, 400.0));
    assert_eq!(engine.snapped(), Some(SnapZone::LeftHalf));
    assert!((engine.bounds().width - 500.0).abs() < 0.001);

    // Begin a new move gesture; the panel must carry the size captured
    // before the snap commit, not the half-screen size
    engine.on_pointer_down(Vec2::new(250.0, 100.0));
    drag_frame(&mut engine, 500.0, 300.0);

    assert!((engine.bounds().width - 300.0).abs() < 0.001);
    assert!((engine.bounds().height - 200.0).abs() < 0.001);
    // Re-centered horizontally under the pointer
    assert!((engine.bounds().x - (500.0 - 150.0)).abs() < 0.001);

    // Release away from any zone: cache cleared, panel stays floating
    engine.on_pointer_up(Vec2::new(500.0, 300.0));
    assert!(engine.pre_snapped().is_none());
    assert!(engine.snapped().is_none());
    assert!((engine.bounds().width - 300.0).abs() < 0.001);
}

#[test]
fn test_chained_snaps_restore_original_size() {
    let mut engine = create_engine();
    engine.set_title_hover(true);

    // First snap: left half
    engine.on_pointer_down(Vec2::new(150.0, 100.0));
    engine.on_pointer_up(Vec2::new(3.0, 400.0));

    // Second snap straight to the bottom half
    engine.on_pointer_down(Vec2::new(250.0, 100.0));
    engine.on_pointer_up(Vec2::new(500.0, 795.0));
    assert_eq!(engine.snapped(), Some(SnapZone::BottomHalf));

    // The cache still holds the size from before the first snap
    let cached = engine.pre_snapped().unwrap();
    assert!((cached.width - 300.0).abs() < 0.001);
    assert!((cached.height - 200.0).abs() < 0.001);
}

// =============================================================================
// Ghost visibility
// =============================================================================

#[test]
fn test_ghost_visibility_during_move() {
    let mut engine = create_engine();
    engine.set_title_hover(true);
    engine.on_pointer_down(Vec2::new(150.0, 100.0));

    // No zone: ghost opacity 0 at the end of the frame
    engine.on_pointer_move(Vec2::new(500.0, 400.0));
    let update = engine.on_frame().unwrap();
    assert!((update.ghost_opacity).abs() < 0.001);

    // Top-half zone: opacity 0.2 and ghost equals the target rect
    engine.on_pointer_move(Vec2::new(500.0, 5.0));
    let update = engine.on_frame().unwrap();
    assert!((update.ghost_opacity - 0.2).abs() < 0.001);
    assert!((update.ghost.x).abs() < 0.001);
    assert!((update.ghost.y).abs() < 0.001);
    assert!((update.ghost.width - 1000.0).abs() < 0.001);
    assert!((update.ghost.height - 400.0).abs() < 0.001);

    // Release with a zone hides the ghost onto the committed bounds
    let update = engine.on_pointer_up(Vec2::new(500.0, 5.0)).unwrap();
    assert!((update.ghost_opacity).abs() < 0.001);
    assert!((update.ghost.width - update.pane.width).abs() < 0.001);
}

// =============================================================================
// Coalescing and frame discipline
// =============================================================================

#[test]
fn test_input_burst_produces_one_update() {
    let mut engine = create_engine();
    engine.set_title_hover(true);
    engine.on_pointer_down(Vec2::new(150.0, 100.0));

    for i in 0..50 {
        engine.on_pointer_move(Vec2::new(150.0 + i as f32, 100.0 + i as f32));
    }

    // Exactly one update, computed from the 50th sample
    let update = engine.on_frame().unwrap();
    assert!((update.pane.x - (199.0 - 130.0)).abs() < 0.001);
    assert!((update.pane.y - (149.0 - 80.0)).abs() < 0.001);
    assert!(engine.on_frame().is_none());
}

#[test]
fn test_full_workflow_resize_move_snap_toggle() {
    let mut engine = create_engine();

    // Widen from the right edge
    engine.on_pointer_down(Vec2::new(319.0, 120.0));
    drag_frame(&mut engine, 420.0, 120.0);
    engine.on_pointer_up(Vec2::new(420.0, 120.0));
    assert!((engine.bounds().width - 400.0).abs() < 0.001);

    // Move the panel by its title
    engine.set_title_hover(true);
    engine.on_pointer_down(Vec2::new(100.0, 60.0));
    drag_frame(&mut engine, 300.0, 260.0);
    engine.on_pointer_up(Vec2::new(300.0, 260.0));
    engine.set_title_hover(false);
    assert!((engine.bounds().x - 220.0).abs() < 0.001);
    assert!((engine.bounds().y - 220.0).abs() < 0.001);

    // Toggle full-screen, then restore
    engine.toggle_full_screen();
    assert!((engine.bounds().width - 1000.0).abs() < 0.001);

    let update = engine.restore_pre_snapped().unwrap();
    assert!((update.pane.width - 400.0).abs() < 0.001);
    assert!((update.pane.height - 200.0).abs() < 0.001);

    // Idle hover feedback still works afterwards
    let bounds = engine.bounds();
    engine.on_pointer_move(Vec2::new(bounds.x + 1.0, bounds.y + 1.0));
    let update = engine.on_frame().unwrap();
    assert_eq!(update.cursor, CursorStyle::NwseResize);
}
