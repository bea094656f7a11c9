//! Main renderer managing wgpu state and drawing the lander scene.

use crate::{
    mesh::{Mesh, SceneMeshes},
    pipeline::{
        create_color_pipeline, create_draw_bind_group_layout, create_star_pipeline,
        create_terrain_pipeline,
    },
};
use anyhow::Result;
use bytemuck::{Pod, Zeroable};
use engine_core::{ColorVertex, StarVertex, TerrainVertex};
use glam::{Mat4, Vec4};
use std::sync::Arc;
use thiserror::Error;
use wgpu::util::DeviceExt;
use winit::window::Window;

/// Background color behind the starfield.
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.01,
    g: 0.01,
    b: 0.03,
    a: 1.0,
};

/// Vertices emitted per star instance.
const STAR_QUAD_VERTICES: u32 = 6;

#[derive(Debug, Error)]
pub enum RendererError {
    #[error("no suitable GPU adapter found")]
    NoAdapter,
    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),
    #[error("failed to request device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
}

/// Model transform and tint for one layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawParams {
    pub model: Mat4,
    pub tint: Vec4,
}

impl DrawParams {
    /// Identity model, flat tint.
    pub fn tinted(tint: Vec4) -> Self {
        Self {
            model: Mat4::IDENTITY,
            tint,
        }
    }
}

/// Everything the renderer needs for one frame, drawn in field order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameParams {
    pub projection: Mat4,
    pub stars: DrawParams,
    pub terrain: DrawParams,
    pub pad: DrawParams,
    pub lander: DrawParams,
}

/// Draw shader uniform (must match `DrawUniform` in the WGSL sources).
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct DrawUniform {
    pub mvp: [[f32; 4]; 4],
    pub tint: [f32; 4],
    /// xy = surface size in pixels, zw unused.
    pub viewport: [f32; 4],
}

impl DrawUniform {
    pub fn new(projection: Mat4, params: &DrawParams, width: u32, height: u32) -> Self {
        Self {
            mvp: (projection * params.model).to_cols_array_2d(),
            tint: params.tint.to_array(),
            viewport: [width as f32, height as f32, 0.0, 0.0],
        }
    }
}

/// Uniform buffer plus bind group for one layer.
struct DrawSlot {
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl DrawSlot {
    fn new(device: &wgpu::Device, layout: &wgpu::BindGroupLayout, label: &str) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::bytes_of(&DrawUniform::zeroed()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });
        Self { buffer, bind_group }
    }
}

pub struct Renderer {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub size: winit::dpi::PhysicalSize<u32>,
    pub window: Arc<Window>,

    // Pipelines
    color_pipeline: wgpu::RenderPipeline,
    terrain_pipeline: wgpu::RenderPipeline,
    star_pipeline: wgpu::RenderPipeline,

    // One uniform per layer so all four writes land before submit.
    star_slot: DrawSlot,
    terrain_slot: DrawSlot,
    pad_slot: DrawSlot,
    lander_slot: DrawSlot,

    scene: Option<SceneMeshes>,
}

impl Renderer {
    /// Create a new renderer for the given window.
    pub async fn new(window: Arc<Window>, vsync: bool) -> Result<Self, RendererError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(RendererError::NoAdapter)?;

        log::info!("Using GPU: {:?}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Main Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: Default::default(),
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .or_else(|| surface_caps.formats.first().copied())
            .unwrap_or(wgpu::TextureFormat::Bgra8UnormSrgb);

        // With vsync, prefer Mailbox (latest frame at vblank) over Fifo.
        let present_mode = if vsync {
            surface_caps
                .present_modes
                .iter()
                .find(|m| matches!(m, wgpu::PresentMode::Mailbox))
                .copied()
                .unwrap_or(wgpu::PresentMode::AutoVsync)
        } else {
            wgpu::PresentMode::AutoNoVsync
        };
        log::debug!("Surface format {:?}, present mode {:?}", surface_format, present_mode);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let draw_layout = create_draw_bind_group_layout(&device);
        let color_pipeline = create_color_pipeline(&device, surface_format, &draw_layout);
        let terrain_pipeline = create_terrain_pipeline(&device, surface_format, &draw_layout);
        let star_pipeline = create_star_pipeline(&device, surface_format, &draw_layout);

        Ok(Self {
            star_slot: DrawSlot::new(&device, &draw_layout, "Star Uniform"),
            terrain_slot: DrawSlot::new(&device, &draw_layout, "Terrain Uniform"),
            pad_slot: DrawSlot::new(&device, &draw_layout, "Pad Uniform"),
            lander_slot: DrawSlot::new(&device, &draw_layout, "Lander Uniform"),
            surface,
            device,
            queue,
            config,
            size,
            window,
            color_pipeline,
            terrain_pipeline,
            star_pipeline,
            scene: None,
        })
    }

    /// Upload the static scene geometry. Replaces any previous upload.
    pub fn upload_scene(
        &mut self,
        stars: &[StarVertex],
        terrain: &[TerrainVertex],
        pad: &[ColorVertex],
        lander: &[ColorVertex],
    ) {
        self.scene = Some(SceneMeshes {
            stars: Mesh::new(&self.device, "Star Instances", stars),
            terrain: Mesh::new(&self.device, "Terrain Strip", terrain),
            pad: Mesh::new(&self.device, "Landing Pad", pad),
            lander: Mesh::new(&self.device, "Lander", lander),
        });
        log::debug!(
            "Uploaded scene: {} stars, {} terrain, {} pad, {} lander vertices",
            stars.len(),
            terrain.len(),
            pad.len(),
            lander.len()
        );
    }

    /// Handle window resize.
    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Surface aspect ratio (width / height).
    pub fn aspect(&self) -> f32 {
        self.config.width as f32 / self.config.height.max(1) as f32
    }

    /// Get window dimensions.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Draw one frame: stars, terrain, pad, lander. A lost or outdated
    /// surface is reconfigured and the frame skipped.
    pub fn render(&mut self, frame: &FrameParams) -> Result<()> {
        let output = match self.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::debug!("Surface lost or outdated, reconfiguring");
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::warn!("Surface timeout, skipping frame");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let (width, height) = self.dimensions();
        for (slot, params) in [
            (&self.star_slot, &frame.stars),
            (&self.terrain_slot, &frame.terrain),
            (&self.pad_slot, &frame.pad),
            (&self.lander_slot, &frame.lander),
        ] {
            let uniform = DrawUniform::new(frame.projection, params, width, height);
            self.queue
                .write_buffer(&slot.buffer, 0, bytemuck::bytes_of(&uniform));
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if let Some(scene) = &self.scene {
                if !scene.stars.is_empty() {
                    pass.set_pipeline(&self.star_pipeline);
                    pass.set_bind_group(0, &self.star_slot.bind_group, &[]);
                    pass.set_vertex_buffer(0, scene.stars.vertex_buffer.slice(..));
                    pass.draw(0..STAR_QUAD_VERTICES, 0..scene.stars.vertex_count);
                }

                if !scene.terrain.is_empty() {
                    pass.set_pipeline(&self.terrain_pipeline);
                    pass.set_bind_group(0, &self.terrain_slot.bind_group, &[]);
                    pass.set_vertex_buffer(0, scene.terrain.vertex_buffer.slice(..));
                    pass.draw(0..scene.terrain.vertex_count, 0..1);
                }

                pass.set_pipeline(&self.color_pipeline);
                let layers = [
                    (&scene.pad, &self.pad_slot),
                    (&scene.lander, &self.lander_slot),
                ];
                for (mesh, slot) in layers {
                    if mesh.is_empty() {
                        continue;
                    }
                    pass.set_bind_group(0, &slot.bind_group, &[]);
                    pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                    pass.draw(0..mesh.vertex_count, 0..1);
                }
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}
