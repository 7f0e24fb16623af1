//! wgpu render backend for the octaroom scene.
//!
//! Draws every box-bounded object (cubes, and walls as thin boxes) from a
//! shared instanced unit-cube mesh, and the floor as an octagonal triangle
//! fan. Camera state comes from `octaroom-render`.
//!
//! # Invariants
//! - The renderer never mutates scene state.
//! - Static geometry (the floor fan) is built once at startup; per-frame work
//!   is limited to instance uploads and draw calls.

mod gpu;
mod shaders;

pub use gpu::WgpuRenderer;
