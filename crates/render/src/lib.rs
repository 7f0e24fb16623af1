//! Rendering adapter: renderer-agnostic camera and interface.
//!
//! # Invariants
//! - Renderers never mutate the scene; scene truth is registry-owned.
//! - The camera lives here, not in a backend crate, because the picking
//!   resolver reads the same view/projection state the renderer does.

pub mod camera;
pub mod renderer;

pub use camera::FirstPersonCamera;
pub use renderer::{DebugTextRenderer, Renderer};

pub fn crate_info() -> &'static str {
    "octaroom-render v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("render"));
    }
}
