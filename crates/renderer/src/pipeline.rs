//! Render pipeline creation.

use engine_core::{ColorVertex, StarVertex, TerrainVertex};
use wgpu::{BindGroupLayout, Device, RenderPipeline, TextureFormat};

use crate::vertex::VertexLayout;

const COLOR_SHADER: &str = include_str!("shaders/color.wgsl");
const TERRAIN_SHADER: &str = include_str!("shaders/terrain.wgsl");
const STAR_SHADER: &str = include_str!("shaders/stars.wgsl");

/// Per-draw uniform: one `DrawUniform` (group 0, binding 0) for both stages.
pub fn create_draw_bind_group_layout(device: &Device) -> BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("Draw Bind Group Layout"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    })
}

/// Pad and ship.
pub fn create_color_pipeline(
    device: &Device,
    format: TextureFormat,
    layout: &BindGroupLayout,
) -> RenderPipeline {
    build_pipeline(
        device,
        format,
        layout,
        "Color",
        COLOR_SHADER,
        ColorVertex::layout(),
        wgpu::PrimitiveTopology::TriangleList,
    )
}

pub fn create_terrain_pipeline(
    device: &Device,
    format: TextureFormat,
    layout: &BindGroupLayout,
) -> RenderPipeline {
    build_pipeline(
        device,
        format,
        layout,
        "Terrain",
        TERRAIN_SHADER,
        TerrainVertex::layout(),
        wgpu::PrimitiveTopology::TriangleStrip,
    )
}

/// Six vertices per instance, one instance per star.
pub fn create_star_pipeline(
    device: &Device,
    format: TextureFormat,
    layout: &BindGroupLayout,
) -> RenderPipeline {
    build_pipeline(
        device,
        format,
        layout,
        "Stars",
        STAR_SHADER,
        StarVertex::layout(),
        wgpu::PrimitiveTopology::TriangleList,
    )
}

fn build_pipeline(
    device: &Device,
    format: TextureFormat,
    bind_group_layout: &BindGroupLayout,
    name: &str,
    source: &str,
    buffer: wgpu::VertexBufferLayout<'static>,
    topology: wgpu::PrimitiveTopology,
) -> RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(&format!("{name} Shader")),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });

    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some(&format!("{name} Pipeline Layout")),
        bind_group_layouts: &[bind_group_layout],
        push_constant_ranges: &[],
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(&format!("{name} Pipeline")),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[buffer],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            // Authored ship triangles mix windings.
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState {
            count: 1,
            mask: !0,
            alpha_to_coverage_enabled: false,
        },
        multiview: None,
        cache: None,
    })
}
