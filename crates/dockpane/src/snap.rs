//! Snap zone resolution and target geometry

use serde::Serialize;

use crate::config::DockConfig;
use crate::math::{Rect, Size, Vec2};

/// A screen region a move gesture may snap the panel to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SnapZone {
    /// The whole viewport
    FullScreen,
    /// Full width, top half
    TopHalf,
    /// Half width, full height, left aligned
    LeftHalf,
    /// Half width, full height, right aligned
    RightHalf,
    /// Full width, bottom half
    BottomHalf,
}

impl SnapZone {
    /// Resolve the snap zone for a pointer position
    ///
    /// First match wins; the ordering is a deliberate tie-break since
    /// the fullscreen and top thresholds nest, and a corner pointer
    /// must prefer the top/bottom zones over left/right.
    pub fn resolve(pointer: Vec2, viewport: Size, config: &DockConfig) -> Option<SnapZone> {
        if pointer.y < config.fullscreen_margin {
            return Some(SnapZone::FullScreen);
        }
        if pointer.y < config.snap_margin {
            return Some(SnapZone::TopHalf);
        }
        if pointer.x < config.snap_margin {
            return Some(SnapZone::LeftHalf);
        }
        if viewport.width - pointer.x < config.snap_margin {
            return Some(SnapZone::RightHalf);
        }
        if viewport.height - pointer.y < config.snap_margin {
            return Some(SnapZone::BottomHalf);
        }
        None
    }

    /// Target rectangle for this zone at the given viewport size
    pub fn target_rect(&self, viewport: Size) -> Rect {
        let Size { width, height } = viewport;
        match self {
            SnapZone::FullScreen => Rect::new(0.0, 0.0, width, height),
            SnapZone::TopHalf => Rect::new(0.0, 0.0, width, height / 2.0),
            SnapZone::LeftHalf => Rect::new(0.0, 0.0, width / 2.0, height),
            SnapZone::RightHalf => Rect::new(width / 2.0, 0.0, width / 2.0, height),
            SnapZone::BottomHalf => Rect::new(0.0, height / 2.0, width, height / 2.0),
        }
    }
}
