//! Floating-panel drag, resize, and edge-snapping engine
//!
//! A headless geometric state machine for a single floating panel: the
//! pointer resizes the panel from its edges, moves it by its title
//! region, and snaps it to screen edges or full-screen, with a
//! translucent ghost preview of the pending geometry. The engine owns
//! the authoritative panel rectangle and the gesture state; a host
//! (such as the `dockpane-web` browser boundary) feeds it pointer/touch
//! events, drives `on_frame` from its animation loop, and applies the
//! resulting [`FrameUpdate`]s to its surfaces.
//!
//! ## Module Structure
//!
//! - `math` - geometry value types (`Vec2`, `Size`, `Rect`)
//! - `config` - construction-time thresholds
//! - `input` - edge hit testing, drag session, input results
//! - `snap` - snap zone resolution and target geometry
//! - `ghost` - ghost preview overlay state
//! - `engine` - the coordinating state machine and frame dispatch
//!
//! ## Design
//!
//! Input handlers never write visible geometry; they record the latest
//! pointer sample and set a dirty flag. `on_frame` is the sole frame
//! path writer, clearing the flag and producing at most one update per
//! animation frame no matter how many events arrived in between. The
//! exceptions are deliberate and synchronous: the snap commit on
//! release, the full-screen toggle, the explicit pre-snap restore, and
//! the viewport re-apply while snapped.

mod config;
mod engine;
mod ghost;
mod input;
mod snap;

pub mod math;

pub use config::DockConfig;
pub use engine::{DockEngine, FrameUpdate};
pub use ghost::GhostPreview;
pub use input::{CursorStyle, DragMode, DragSession, EdgeFlags, InputResult, PointerSample};
pub use math::{Rect, Size, Vec2};
pub use snap::SnapZone;
