//! Bounds application: resize, move, snap commits, restore

use crate::math::{Rect, Size};
use crate::snap::SnapZone;
use super::{DockEngine, FrameUpdate};

impl DockEngine {
    /// Apply one frame of resize from the live pointer and the frozen
    /// session edge flags
    ///
    /// Right/bottom edges track the local pointer directly, clamped to
    /// the minimum. Left/top edges are anchor-preserving: the opposite
    /// edge stays fixed while position and size move together, and a
    /// candidate at or below the minimum is rejected outright so the
    /// panel does not jitter at the floor.
    pub(crate) fn apply_resize(&mut self) {
        let session = match self.session {
            Some(s) if s.is_resizing() => s,
            _ => return,
        };

        if session.edges.right {
            self.bounds.width = self.local.x.max(self.config.min_width);
        }
        if session.edges.bottom {
            self.bounds.height = self.local.y.max(self.config.min_height);
        }
        if session.edges.left {
            let candidate = (session.press.x - (self.pointer.x + session.start_size.width))
                .max(self.config.min_width);
            if candidate > self.config.min_width {
                self.bounds.width = candidate;
                self.bounds.x = self.pointer.x;
            }
        }
        if session.edges.top {
            let candidate = (session.press.y - (self.pointer.y + session.start_size.height))
                .max(self.config.min_height);
            if candidate > self.config.min_height {
                self.bounds.height = candidate;
                self.bounds.y = self.pointer.y;
            }
        }

        // Resize has no snap preview
        self.ghost.hide_onto(self.bounds);
        self.needs_relayout = true;
    }

    /// Apply one frame of move, previewing the snap zone under the
    /// pointer
    ///
    /// With a cached pre-snap size the panel re-centers horizontally
    /// under the pointer at that size, so dragging a snapped panel
    /// returns it to its natural floating dimensions without a separate
    /// un-snap gesture.
    pub(crate) fn apply_move(&mut self) {
        let session = match self.session {
            Some(s) if s.is_moving() => s,
            _ => return,
        };

        match SnapZone::resolve(self.pointer, self.viewport, &self.config) {
            Some(zone) => {
                self.ghost
                    .show(zone.target_rect(self.viewport), self.config.ghost_opacity);
                self.needs_relayout = true;
            }
            None => self.ghost.hide_onto(self.bounds),
        }

        if let Some(size) = self.pre_snapped {
            self.bounds = Rect::new(
                self.pointer.x - size.width / 2.0,
                self.pointer.y - session.grab.y.min(size.height),
                size.width,
                size.height,
            );
        } else {
            self.bounds.x = self.pointer.x - session.grab.x;
            self.bounds.y = self.pointer.y - session.grab.y;
        }
    }

    /// Commit a snap zone: cache the pre-snap size if absent, then apply
    /// the zone's target rectangle
    pub(crate) fn commit_snap(&mut self, zone: SnapZone) {
        if self.pre_snapped.is_none() {
            self.pre_snapped = Some(self.bounds.size());
        }
        self.snapped = Some(zone);
        self.bounds = zone.target_rect(self.viewport);
        self.needs_relayout = true;
    }

    /// Commit full-screen geometry immediately, not gated on a gesture
    pub fn toggle_full_screen(&mut self) -> FrameUpdate {
        self.commit_snap(SnapZone::FullScreen);
        self.make_update()
    }

    /// Restore the cached pre-snap size at the panel's current position
    ///
    /// Explicit counterpart to the caching done by snap commits and the
    /// full-screen toggle; its activation point is left to the host.
    /// No-op when nothing is cached.
    pub fn restore_pre_snapped(&mut self) -> Option<FrameUpdate> {
        let size = self.pre_snapped.take()?;
        self.snapped = None;
        self.bounds = Rect::from_origin_size(self.bounds.origin(), size);
        self.needs_relayout = true;
        Some(self.make_update())
    }

    /// Handle a viewport size change
    ///
    /// While snapped, the committed zone's target is re-derived against
    /// the new viewport synchronously, since no drag is active to drive
    /// the frame path. Otherwise the host is asked to re-layout and the
    /// next frame refreshes the hover affordance.
    pub fn viewport_resized(&mut self, width: f32, height: f32) -> Option<FrameUpdate> {
        self.viewport = Size::new(width, height);

        match self.snapped {
            Some(zone) => {
                self.bounds = zone.target_rect(self.viewport);
                self.needs_relayout = true;
                Some(self.make_update())
            }
            None => {
                self.needs_relayout = true;
                self.dirty = true;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DockConfig;
    use crate::math::Vec2;

    fn create_test_engine() -> DockEngine {
        let mut engine = DockEngine::new(DockConfig::default());
        engine.init(1000.0, 800.0);
        engine
    }

    #[test]
    fn test_right_edge_resize_tracks_pointer() {
        let mut engine = create_test_engine();

        // Panel {20, 20, 300, 200}; grab the right edge
        engine.on_pointer_down(Vec2::new(319.0, 120.0));
        engine.on_pointer_move(Vec2::new(420.0, 120.0));
        engine.on_frame();

        assert!((engine.bounds().width - 400.0).abs() < 0.001);
        assert!((engine.bounds().x - 20.0).abs() < 0.001);
    }

    #[test]
    fn test_bottom_edge_resize_clamps_to_minimum() {
        let mut engine = create_test_engine();

        engine.on_pointer_down(Vec2::new(150.0, 219.0));
        engine.on_pointer_move(Vec2::new(150.0, 25.0));
        engine.on_frame();

        assert!((engine.bounds().height - 80.0).abs() < 0.001);
    }

    #[test]
    fn test_corner_resize_applies_both_edges() {
        let mut engine = create_test_engine();

        // Bottom-right corner
        engine.on_pointer_down(Vec2::new(319.0, 219.0));
        engine.on_pointer_move(Vec2::new(440.0, 320.0));
        engine.on_frame();

        assert!((engine.bounds().width - 420.0).abs() < 0.001);
        assert!((engine.bounds().height - 300.0).abs() < 0.001);
    }

    #[test]
    fn test_left_edge_sub_minimum_candidate_rejected() {
        let mut engine = create_test_engine();

        // Press on the left edge at x=21, then drag right; the candidate
        // width bottoms out at the minimum and must not be applied
        engine.on_pointer_down(Vec2::new(21.0, 120.0));
        engine.on_pointer_move(Vec2::new(250.0, 120.0));
        engine.on_frame();

        assert!((engine.bounds().x - 20.0).abs() < 0.001);
        assert!((engine.bounds().width - 300.0).abs() < 0.001);
    }

    #[test]
    fn test_resize_frame_hides_ghost_and_signals_relayout() {
        let mut engine = create_test_engine();

        engine.on_pointer_down(Vec2::new(319.0, 120.0));
        engine.on_pointer_move(Vec2::new(400.0, 120.0));
        let update = engine.on_frame().unwrap();

        assert!(update.needs_relayout);
        assert!((update.ghost_opacity).abs() < 0.001);
        assert!((update.ghost.x - update.pane.x).abs() < 0.001);
        assert!((update.ghost.width - update.pane.width).abs() < 0.001);
    }

    #[test]
    fn test_plain_move_follows_grab_offset() {
        let mut engine = create_test_engine();
        engine.set_title_hover(true);

        // Grab at local (130, 80)
        engine.on_pointer_down(Vec2::new(150.0, 100.0));
        engine.on_pointer_move(Vec2::new(500.0, 400.0));
        engine.on_frame();

        assert!((engine.bounds().x - 370.0).abs() < 0.001);
        assert!((engine.bounds().y - 320.0).abs() < 0.001);
        assert!((engine.bounds().width - 300.0).abs() < 0.001);
    }

    #[test]
    fn test_commit_snap_caches_size_once() {
        let mut engine = create_test_engine();

        engine.commit_snap(SnapZone::LeftHalf);
        let cached = engine.pre_snapped().unwrap();
        assert!((cached.width - 300.0).abs() < 0.001);
        assert!((cached.height - 200.0).abs() < 0.001);

        // A second commit must not overwrite the cache
        engine.commit_snap(SnapZone::RightHalf);
        let cached = engine.pre_snapped().unwrap();
        assert!((cached.width - 300.0).abs() < 0.001);
    }

    #[test]
    fn test_toggle_full_screen_commits_whole_viewport() {
        let mut engine = create_test_engine();

        let update = engine.toggle_full_screen();

        assert_eq!(engine.snapped(), Some(SnapZone::FullScreen));
        assert!((update.pane.x).abs() < 0.001);
        assert!((update.pane.width - 1000.0).abs() < 0.001);
        assert!((update.pane.height - 800.0).abs() < 0.001);
        assert!(update.needs_relayout);
        assert!(engine.pre_snapped().is_some());
    }

    #[test]
    fn test_restore_pre_snapped() {
        let mut engine = create_test_engine();

        engine.toggle_full_screen();
        let update = engine.restore_pre_snapped().unwrap();

        assert!(engine.snapped().is_none());
        assert!(engine.pre_snapped().is_none());
        assert!((update.pane.width - 300.0).abs() < 0.001);
        assert!((update.pane.height - 200.0).abs() < 0.001);
        // Position is kept, only the size is restored
        assert!((update.pane.x).abs() < 0.001);
    }

    #[test]
    fn test_restore_without_cache_is_noop() {
        let mut engine = create_test_engine();
        assert!(engine.restore_pre_snapped().is_none());
    }

    #[test]
    fn test_viewport_resize_reapplies_snap_synchronously() {
        let mut engine = create_test_engine();

        engine.commit_snap(SnapZone::RightHalf);
        let update = engine.viewport_resized(1200.0, 900.0).unwrap();

        assert!((update.pane.x - 600.0).abs() < 0.001);
        assert!((update.pane.width - 600.0).abs() < 0.001);
        assert!((update.pane.height - 900.0).abs() < 0.001);
        assert!(update.needs_relayout);
    }

    #[test]
    fn test_viewport_resize_unsnapped_defers_to_host() {
        let mut engine = create_test_engine();

        assert!(engine.viewport_resized(1200.0, 900.0).is_none());
        assert!(engine.is_dirty());

        // The relayout request rides on the next frame update
        engine.on_pointer_move(Vec2::new(500.0, 400.0));
        let update = engine.on_frame().unwrap();
        assert!(update.needs_relayout);
    }
}
