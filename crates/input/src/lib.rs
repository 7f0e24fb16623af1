//! Pointer input mapped to shared actions.
//!
//! # Invariants
//! - The windowing layer contains no interaction policy; it forwards raw
//!   events here and executes the returned actions.
//! - Look deltas are only produced while pointer-lock is engaged.

pub mod action;
pub mod map;

pub use action::Action;
pub use map::InputMap;

pub fn crate_info() -> &'static str {
    "octaroom-input v0.1.0"
}
