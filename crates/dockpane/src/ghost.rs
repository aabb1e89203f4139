//! Ghost preview overlay state
//!
//! The ghost is a secondary rectangle showing the pending committed
//! geometry during a move gesture. Hiding collapses it onto the live
//! panel bounds at opacity 0 so a CSS transition animates from the
//! panel's own position instead of popping.

use serde::Serialize;

use crate::math::Rect;

/// Displayed state of the ghost overlay
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct GhostPreview {
    /// Overlay rectangle
    pub rect: Rect,
    /// Overlay opacity (0.0 hidden)
    pub opacity: f32,
}

impl GhostPreview {
    /// Create a hidden ghost collapsed onto the given bounds
    pub fn hidden_at(bounds: Rect) -> Self {
        Self { rect: bounds, opacity: 0.0 }
    }

    /// Show the ghost at a snap target rectangle
    pub fn show(&mut self, target: Rect, opacity: f32) {
        self.rect = target;
        self.opacity = opacity;
    }

    /// Hide the ghost by collapsing it onto the live panel bounds
    pub fn hide_onto(&mut self, bounds: Rect) {
        self.rect = bounds;
        self.opacity = 0.0;
    }

    /// Check if the ghost is currently visible
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }
}
