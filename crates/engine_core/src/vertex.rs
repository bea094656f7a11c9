//! Renderer-agnostic vertex types.
//!
//! Geometry builders emit these; the renderer uploads them as-is and owns the
//! matching GPU layouts.

use bytemuck::{Pod, Zeroable};

/// Position plus per-vertex color (landing pad, ship).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ColorVertex {
    pub position: [f32; 2],
    pub color: [f32; 3],
}

impl ColorVertex {
    pub const fn new(position: [f32; 2], color: [f32; 3]) -> Self {
        Self { position, color }
    }
}

/// Position only; the terrain is tinted per draw.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct TerrainVertex {
    pub position: [f32; 2],
}

/// One point sprite per star. Brightness drives the color ramp and size the
/// sprite radius in the star shader.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct StarVertex {
    pub position: [f32; 2],
    pub brightness: f32,
    pub size: f32,
}
