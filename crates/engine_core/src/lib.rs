//! Core engine types shared by the lander crates.
//!
//! This crate provides the foundational types used across all systems:
//! - Frame timing (the clock source for the simulation)
//! - Transform for placing authored geometry in the world
//! - Renderer-agnostic vertex types produced by the geometry builders

pub mod time;
pub mod transform;
pub mod vertex;

pub use time::*;
pub use transform::*;
pub use vertex::*;

// Re-export commonly used types
pub use glam::{Mat4, Quat, Vec2, Vec3, Vec4};
