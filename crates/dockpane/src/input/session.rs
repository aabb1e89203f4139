//! Drag session state for an active gesture

use crate::math::{Size, Vec2};
use super::EdgeFlags;

/// How an active gesture was classified at pointer-down
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragMode {
    /// Dragging one or more panel edges
    Resizing,
    /// Dragging the panel by its title region
    Moving,
}

/// Snapshot of gesture state captured at pointer-down
///
/// Created exactly at gesture start and destroyed at pointer-up. All
/// fields are frozen for the gesture's lifetime; in particular the edge
/// flags do not change mid-resize.
#[derive(Clone, Copy, Debug)]
pub struct DragSession {
    /// Gesture classification
    pub mode: DragMode,
    /// Panel-local hit point at press time
    pub grab: Vec2,
    /// Absolute pointer coordinates at press time
    pub press: Vec2,
    /// Panel size at press time
    pub start_size: Size,
    /// Edge flags captured at press time
    pub edges: EdgeFlags,
}

impl DragSession {
    /// Check if this is a resize gesture
    #[inline]
    pub fn is_resizing(&self) -> bool {
        self.mode == DragMode::Resizing
    }

    /// Check if this is a move gesture
    #[inline]
    pub fn is_moving(&self) -> bool {
        self.mode == DragMode::Moving
    }
}
