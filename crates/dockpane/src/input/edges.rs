//! Edge hit testing and cursor affordances

use serde::Serialize;

use crate::math::{Size, Vec2};

/// Which panel edges the pointer is within the edge margin of
///
/// Derived from the live panel bounds on every pointer sample; never
/// cached across frames. Corners set two flags at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct EdgeFlags {
    pub top: bool,
    pub left: bool,
    pub right: bool,
    pub bottom: bool,
}

impl EdgeFlags {
    /// Hit test a panel-local pointer position against the panel size
    pub fn hit_test(local: Vec2, size: Size, margin: f32) -> Self {
        Self {
            top: local.y < margin,
            left: local.x < margin,
            right: local.x >= size.width - margin,
            bottom: local.y >= size.height - margin,
        }
    }

    /// Check if any edge is hit
    #[inline]
    pub fn any(&self) -> bool {
        self.top || self.left || self.right || self.bottom
    }

    /// Cursor affordance for these flags when no gesture is active
    ///
    /// `movable` is whether the pointer is currently over the title
    /// region; it only matters when no edge is hit.
    pub fn cursor(&self, movable: bool) -> CursorStyle {
        if (self.right && self.bottom) || (self.left && self.top) {
            CursorStyle::NwseResize
        } else if (self.right && self.top) || (self.bottom && self.left) {
            CursorStyle::NeswResize
        } else if self.right || self.left {
            CursorStyle::EwResize
        } else if self.bottom || self.top {
            CursorStyle::NsResize
        } else if movable {
            CursorStyle::Move
        } else {
            CursorStyle::Default
        }
    }
}

/// Cursor shown over the panel when no gesture is active
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CursorStyle {
    #[default]
    Default,
    Move,
    EwResize,
    NsResize,
    NwseResize,
    NeswResize,
}

impl CursorStyle {
    /// Get the CSS cursor keyword for this style
    pub fn css(&self) -> &'static str {
        match self {
            CursorStyle::Default => "default",
            CursorStyle::Move => "move",
            CursorStyle::EwResize => "ew-resize",
            CursorStyle::NsResize => "ns-resize",
            CursorStyle::NwseResize => "nwse-resize",
            CursorStyle::NeswResize => "nesw-resize",
        }
    }
}
