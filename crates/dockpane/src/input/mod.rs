//! Input handling module
//!
//! Edge hit testing, gesture session state, and input results. The
//! pointer/touch adapter methods live on the engine itself (see
//! `engine::input`); this module holds the pure pieces they share.

mod edges;
mod session;
mod result;

pub use edges::{CursorStyle, EdgeFlags};
pub use session::{DragMode, DragSession};
pub use result::InputResult;

use crate::math::Vec2;

/// Last known pointer position in viewport coordinates
pub type PointerSample = Vec2;
