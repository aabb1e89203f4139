//! Frame dispatch gated by the dirty flag

use serde::Serialize;

use crate::input::CursorStyle;
use crate::math::Rect;
use super::DockEngine;

/// One frame of pending output for the host to apply
///
/// Produced at most once per animation frame regardless of how many
/// input events arrived in between. The host writes the pane and ghost
/// rectangles, the ghost opacity, and the cursor to its surfaces, and
/// performs a content re-layout when `needs_relayout` is set.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct FrameUpdate {
    /// Panel rectangle
    pub pane: Rect,
    /// Ghost overlay rectangle
    pub ghost: Rect,
    /// Ghost overlay opacity
    pub ghost_opacity: f32,
    /// Cursor affordance for the panel surface
    pub cursor: CursorStyle,
    /// One-shot request for the host to re-layout its content area
    pub needs_relayout: bool,
}

impl DockEngine {
    /// Run one frame of pending work
    ///
    /// Returns `None` when nothing is dirty (the cheap no-op case). When
    /// dirty, the flag is cleared first, then the frame dispatches to
    /// the resize, move, or idle-cursor branch. Many move events between
    /// two frames coalesce into a single update computed from the latest
    /// sample.
    pub fn on_frame(&mut self) -> Option<FrameUpdate> {
        if !self.dirty {
            return None;
        }
        self.dirty = false;

        match self.session {
            Some(s) if s.is_resizing() => self.apply_resize(),
            Some(s) if s.is_moving() => self.apply_move(),
            _ => {
                // No gesture: keep hover feedback live
                self.cursor = self.edges.cursor(self.title_hover);
            }
        }

        Some(self.make_update())
    }
}
