//! Browser boundary for the dockpane engine
//!
//! This crate runs in the browser's main thread and binds a
//! [`dockpane::DockEngine`] to a pair of DOM elements: the panel surface
//! and the ghost preview overlay. It is a pure boundary layer that only:
//!
//! - Registers pointer/touch listeners (element-level for down, document-
//!   level for move/up — the pointer capture contract, scoped to one
//!   controller instance)
//! - Drives the engine's frame dispatch from a requestAnimationFrame loop
//! - Applies [`dockpane::FrameUpdate`]s to element styles
//! - Surfaces the engine's re-layout signal as a JS callback
//!
//! All gesture classification and geometry lives in the engine crate and
//! is tested there on native targets.

mod controller;
mod dom;

pub use controller::DockController;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
