//! Static, non-indexed GPU meshes.

use wgpu::util::DeviceExt;

use crate::vertex::VertexLayout;

/// A vertex buffer uploaded once and drawn every frame.
pub struct Mesh {
    pub vertex_buffer: wgpu::Buffer,
    pub vertex_count: u32,
}

impl Mesh {
    /// Create a mesh from vertex data.
    pub fn new<V: VertexLayout>(device: &wgpu::Device, label: &str, vertices: &[V]) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        Self {
            vertex_buffer,
            vertex_count: vertices.len() as u32,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }
}

/// The four static layers of the scene.
pub struct SceneMeshes {
    pub stars: Mesh,
    pub terrain: Mesh,
    pub pad: Mesh,
    pub lander: Mesh,
}
