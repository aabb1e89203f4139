//! Panel engine coordinating all components
//!
//! This module is split into focused submodules:
//! - `input`: pointer/touch event intake and gesture classification
//! - `geometry`: resize/move application, snap commits, restore
//! - `frame`: the dirty-flag-gated frame dispatch
//!
//! Event handlers never produce visible geometry; they update the last
//! pointer sample, the derived edge flags, and the dirty flag, then
//! return. Geometry is written by `on_frame` — plus the explicitly
//! synchronous commit paths (snap on release, full-screen toggle,
//! viewport re-apply) which return a [`FrameUpdate`] directly.

mod input;
mod geometry;
mod frame;

pub use frame::FrameUpdate;

use crate::config::DockConfig;
use crate::ghost::GhostPreview;
use crate::input::{CursorStyle, DragSession, EdgeFlags, PointerSample};
use crate::math::{Rect, Size, Vec2};
use crate::snap::SnapZone;

/// Floating-panel engine: edge resize, title-drag move, edge snapping
///
/// Owns the authoritative panel rectangle, the ghost overlay state, the
/// active drag session, and the dirty flag. Exactly one drag session may
/// exist at a time (single-pointer model).
pub struct DockEngine {
    /// Construction-time thresholds
    config: DockConfig,
    /// Authoritative panel rectangle
    bounds: Rect,
    /// Ghost overlay state
    ghost: GhostPreview,
    /// Viewport size in pixels
    viewport: Size,
    /// Last pointer sample in viewport coordinates
    pointer: PointerSample,
    /// Last pointer sample in panel-local coordinates
    local: Vec2,
    /// Edge flags derived from the last sample against live bounds
    edges: EdgeFlags,
    /// Whether the pointer is currently over the title region
    title_hover: bool,
    /// Active drag session, if any
    session: Option<DragSession>,
    /// Panel size cached at the first snap commit, restored on un-snap
    pre_snapped: Option<Size>,
    /// Zone last committed by a release, toggle, or viewport re-apply
    snapped: Option<SnapZone>,
    /// Cursor affordance from the last idle frame
    cursor: CursorStyle,
    /// Set by input events, cleared by `on_frame` before dispatch
    dirty: bool,
    /// One-shot "content needs re-layout" signal, consumed by the next
    /// update handed to the host
    needs_relayout: bool,
}

impl Default for DockEngine {
    fn default() -> Self {
        Self::new(DockConfig::default())
    }
}

impl DockEngine {
    /// Create a new engine with the given configuration
    pub fn new(config: DockConfig) -> Self {
        let bounds = config.initial_bounds;
        Self {
            config,
            bounds,
            ghost: GhostPreview::hidden_at(bounds),
            viewport: Size::new(1920.0, 1080.0),
            pointer: Vec2::ZERO,
            local: Vec2::ZERO,
            edges: EdgeFlags::default(),
            title_hover: false,
            session: None,
            pre_snapped: None,
            snapped: None,
            cursor: CursorStyle::Default,
            dirty: false,
            needs_relayout: false,
        }
    }

    /// Initialize with the viewport size; returns the seed geometry the
    /// host should apply before the first frame
    pub fn init(&mut self, width: f32, height: f32) -> FrameUpdate {
        self.viewport = Size::new(width, height);
        self.needs_relayout = true;
        self.make_update()
    }

    /// Current panel rectangle
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Current ghost overlay state
    #[inline]
    pub fn ghost(&self) -> GhostPreview {
        self.ghost
    }

    /// Current viewport size
    #[inline]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Cursor affordance from the last idle frame
    #[inline]
    pub fn cursor(&self) -> CursorStyle {
        self.cursor
    }

    /// Active drag session, if any
    #[inline]
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Check if a gesture is in progress
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Cached pre-snap panel size, if any
    #[inline]
    pub fn pre_snapped(&self) -> Option<Size> {
        self.pre_snapped
    }

    /// Zone the panel is currently committed to, if any
    #[inline]
    pub fn snapped(&self) -> Option<SnapZone> {
        self.snapped
    }

    /// Check if a frame of work is pending
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Notify the engine whether the pointer is over the title region
    pub fn set_title_hover(&mut self, hover: bool) {
        self.title_hover = hover;
    }

    /// Recompute the local position and edge flags for a sample against
    /// the live bounds
    pub(crate) fn recalc(&mut self, sample: PointerSample) {
        self.pointer = sample;
        self.local = sample - self.bounds.origin();
        self.edges = EdgeFlags::hit_test(self.local, self.bounds.size(), self.config.edge_margin);
    }

    /// Build an update from current state, consuming the relayout signal
    pub(crate) fn make_update(&mut self) -> FrameUpdate {
        FrameUpdate {
            pane: self.bounds,
            ghost: self.ghost.rect,
            ghost_opacity: self.ghost.opacity,
            cursor: self.cursor,
            needs_relayout: std::mem::take(&mut self.needs_relayout),
        }
    }
}
