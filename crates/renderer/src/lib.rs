//! Rendering system using wgpu for the lander scene.

pub mod camera;
pub mod mesh;
pub mod pipeline;
pub mod renderer;
pub mod vertex;

pub use camera::*;
pub use mesh::*;
pub use pipeline::*;
pub use renderer::*;
pub use vertex::*;
