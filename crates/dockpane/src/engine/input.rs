//! Pointer and touch event intake
//!
//! Mouse and single-touch streams are normalized into a uniform
//! down/move/up sequence. Handlers only update samples, flags, and the
//! session; visible geometry is deferred to the frame dispatch, except
//! for the snap commit on release which is synchronous.

use crate::input::{DragMode, DragSession, InputResult, PointerSample};
use crate::snap::SnapZone;
use super::{DockEngine, FrameUpdate};

impl DockEngine {
    /// Handle pointer down; classifies and starts a gesture
    ///
    /// Returns `Handled` when a resize or move gesture started, in which
    /// case the host must suppress the event's default action and
    /// propagation. An unclassifiable press is a no-op.
    pub fn on_pointer_down(&mut self, sample: PointerSample) -> InputResult {
        self.recalc(sample);

        let mode = if self.edges.any() {
            DragMode::Resizing
        } else if self.title_hover {
            DragMode::Moving
        } else {
            return InputResult::Unhandled;
        };

        self.session = Some(DragSession {
            mode,
            grab: self.local,
            press: sample,
            start_size: self.bounds.size(),
            edges: self.edges,
        });

        InputResult::Handled
    }

    /// Handle pointer move; records the sample and marks the frame dirty
    ///
    /// The dirty flag is set even with no active gesture so the idle
    /// cursor affordance stays live.
    pub fn on_pointer_move(&mut self, sample: PointerSample) -> InputResult {
        self.recalc(sample);
        self.dirty = true;

        if self.is_dragging() {
            InputResult::Handled
        } else {
            InputResult::Unhandled
        }
    }

    /// Handle pointer up; commits a snap if the release position
    /// resolves to a zone, and destroys the session unconditionally
    ///
    /// Returns an update when the release visibly changed the panel or
    /// ghost (always the case for a move gesture).
    pub fn on_pointer_up(&mut self, sample: PointerSample) -> Option<FrameUpdate> {
        self.recalc(sample);

        let was_moving = self.session.map(|s| s.is_moving()).unwrap_or(false);
        self.session = None;

        if !was_moving {
            return None;
        }

        match SnapZone::resolve(sample, self.viewport, &self.config) {
            Some(zone) => self.commit_snap(zone),
            None => {
                self.pre_snapped = None;
                self.snapped = None;
            }
        }

        self.ghost.hide_onto(self.bounds);
        Some(self.make_update())
    }

    /// Handle touch start with the first touch point
    ///
    /// The host should suppress the event default unconditionally, as a
    /// touch on the panel is never meant to scroll the page.
    pub fn on_touch_start(&mut self, first: PointerSample) -> InputResult {
        self.on_pointer_down(first)
    }

    /// Handle touch move with the first touch point
    pub fn on_touch_move(&mut self, first: PointerSample) -> InputResult {
        self.on_pointer_move(first)
    }

    /// Handle touch end; only the last finger lifting ends the gesture
    ///
    /// `remaining` is the number of touches still active; a touch-end
    /// with remaining touches is ignored.
    pub fn on_touch_end(&mut self, remaining: usize, changed: PointerSample) -> Option<FrameUpdate> {
        if remaining > 0 {
            return None;
        }
        self.on_pointer_up(changed)
    }
}
