//! Geometry value types
//!
//! Plain-old-data types shared by the hit tester, snap resolver, and
//! bounds engine. All coordinates are f32 viewport pixels.

mod vec2;
mod size;
mod rect;

pub use vec2::Vec2;
pub use size::Size;
pub use rect::Rect;
