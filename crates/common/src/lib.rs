//! Shared leaf types for the octaroom scene.
//!
//! # Invariants
//! - Types here have no behavior beyond construction and queries; policy
//!   lives in the scene and picking crates.
//! - `ObjectId` is a stable lookup key, never an aliasing reference.

pub mod types;

pub use types::{Bounds, Category, Color, ObjectId, Transform};
