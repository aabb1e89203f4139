//! Engine configuration

use crate::math::Rect;

/// Construction-time configuration for a [`DockEngine`](crate::DockEngine)
///
/// All thresholds are fixed at construction and never change at runtime.
#[derive(Clone, Copy, Debug)]
pub struct DockConfig {
    /// Minimum panel width in pixels
    pub min_width: f32,
    /// Minimum panel height in pixels
    pub min_height: f32,
    /// Pointer-y threshold for the full-screen snap zone
    pub fullscreen_margin: f32,
    /// Pointer threshold for the half-screen snap zones
    pub snap_margin: f32,
    /// Proximity threshold for edge hit testing
    pub edge_margin: f32,
    /// Panel rectangle at construction
    pub initial_bounds: Rect,
    /// Opacity of the ghost overlay while a snap zone is previewed
    pub ghost_opacity: f32,
}

impl Default for DockConfig {
    fn default() -> Self {
        Self {
            min_width: 100.0,
            min_height: 80.0,
            fullscreen_margin: 2.0,
            snap_margin: 8.0,
            edge_margin: 2.0,
            initial_bounds: Rect::new(20.0, 20.0, 300.0, 200.0),
            ghost_opacity: 0.2,
        }
    }
}
