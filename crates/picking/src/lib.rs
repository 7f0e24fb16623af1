//! Picking resolver: converts a 2D screen coordinate into the nearest
//! intersected scene object.
//!
//! # Invariants
//! - Resolution is a pure query: neither the registry nor any object is
//!   mutated here. The caller decides what to do with the result.
//! - Ties on distance keep the first hit in registry iteration order.

pub mod pick;

pub use pick::{PickHit, PickRay, resolve};

pub fn crate_info() -> &'static str {
    "octaroom-picking v0.1.0"
}
