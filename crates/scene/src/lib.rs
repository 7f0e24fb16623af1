//! Scene registry, octagon room construction, selection state, and the spin
//! animation step.
//!
//! # Invariants
//! - The registry is populated once at startup; objects are never added or
//!   destroyed afterwards.
//! - An object's category never changes after creation.
//! - Orientation is mutable only through `SceneRegistry::spin`, which rejects
//!   non-rotatable categories.
//! - At most one object is selected at any time; a non-empty selection always
//!   refers to a Cube.

pub mod animate;
pub mod builder;
pub mod registry;
pub mod selection;

pub use animate::{SPIN_STEP, step};
pub use builder::{SceneConfig, build_scene};
pub use registry::{SceneError, SceneObject, SceneRegistry};
pub use selection::{PickOutcome, Selection};

pub fn crate_info() -> &'static str {
    "octaroom-scene v0.1.0"
}
