//! Input result type

use serde::Serialize;

/// Result of handling a pointer-down event
///
/// `Handled` means a gesture was started and the host must suppress the
/// originating event's default action and propagation. `Unhandled`
/// leaves default event handling untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputResult {
    /// A gesture was started; suppress the event default
    Handled,
    /// No gesture applies; pass the event through
    Unhandled,
}

impl InputResult {
    /// Check if input was handled
    #[inline]
    pub fn is_handled(&self) -> bool {
        matches!(self, InputResult::Handled)
    }
}
