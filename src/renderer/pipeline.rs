//! wgpu render pipelines and the per-frame draw sequence
//!
//! Two programs: a solid-color one for the paddles and ball, and a text
//! one that samples the digit atlas for the score. Each frame clears,
//! draws the left paddle, right paddle and ball (two draw calls per
//! rectangle, one per triangle), draws the score, and presents.

use std::sync::Arc;

use bytemuck::{Pod, Zeroable};
use winit::window::Window;

use super::glyphs::{self, ATLAS_HEIGHT, ATLAS_WIDTH};
use super::shapes::{self, SCENE_VERTICES, SceneColors};
use super::vertex::{TexVertex, Vertex};
use crate::error::StartupError;
use crate::settings::Settings;
use crate::sim::GameState;

/// Two ten-digit counters, six vertices per digit
const MAX_TEXT_VERTICES: usize = 2 * 10 * 6;

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct TextStyle {
    color: [f32; 4],
}

/// Main render state
pub struct RenderState {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    solid_pipeline: wgpu::RenderPipeline,
    text_pipeline: wgpu::RenderPipeline,
    /// Persistent buffers, rewritten every frame
    scene_buffer: wgpu::Buffer,
    text_buffer: wgpu::Buffer,
    text_bind_group: wgpu::BindGroup,
    /// Viewport size in pixels
    pub size: (u32, u32),
    clear_color: wgpu::Color,
    colors: SceneColors,
    show_score: bool,
}

impl RenderState {
    pub async fn new(window: Arc<Window>, settings: &Settings) -> Result<Self, StartupError> {
        let size = window.inner_size();
        let (width, height) = (size.width.max(1), size.height.max(1));

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });
        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;
        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("pong-device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_defaults()
                    .using_resolution(adapter.limits()),
                memory_hints: Default::default(),
                trace: Default::default(),
                experimental_features: Default::default(),
            })
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);
        log::info!("Using surface format: {:?}", surface_format);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width,
            height,
            present_mode: settings.present_mode(),
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let solid_pipeline = guard_shader("solid", || create_solid_pipeline(&device, config.format))?;

        let text_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("text_bind_group_layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        });

        let text_pipeline = guard_shader("text", || {
            create_text_pipeline(&device, &text_layout, config.format)
        })?;

        let text_bind_group = create_text_bind_group(&device, &queue, &text_layout, settings);

        let scene_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_vertices"),
            size: (std::mem::size_of::<Vertex>() * SCENE_VERTICES) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let text_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("text_vertices"),
            size: (std::mem::size_of::<TexVertex>() * MAX_TEXT_VERTICES) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let [r, g, b, a] = settings.clear_color;

        Ok(Self {
            surface,
            device,
            queue,
            config,
            solid_pipeline,
            text_pipeline,
            scene_buffer,
            text_buffer,
            text_bind_group,
            size: (width, height),
            clear_color: wgpu::Color {
                r: r as f64,
                g: g as f64,
                b: b as f64,
                a: a as f64,
            },
            colors: SceneColors {
                paddle: settings.paddle_color,
                ball: settings.ball_color,
            },
            show_score: settings.show_score,
        })
    }

    pub fn resize(&mut self, new_width: u32, new_height: u32) {
        if new_width > 0 && new_height > 0 {
            self.size = (new_width, new_height);
            self.config.width = new_width;
            self.config.height = new_height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Draw one frame: clear, left paddle, right paddle, ball, score, present
    pub fn render(&mut self, state: &GameState) -> Result<(), wgpu::SurfaceError> {
        let scene = shapes::scene(state, &self.colors);
        self.queue
            .write_buffer(&self.scene_buffer, 0, bytemuck::cast_slice(&scene));

        let text_vertex_count = if self.show_score {
            let mut text = glyphs::score_text(&state.score);
            text.truncate(MAX_TEXT_VERTICES);
            self.queue
                .write_buffer(&self.text_buffer, 0, bytemuck::cast_slice(&text));
            text.len() as u32
        } else {
            0
        };

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("render_encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("render_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            render_pass.set_pipeline(&self.solid_pipeline);
            render_pass.set_vertex_buffer(0, self.scene_buffer.slice(..));
            for first in (0..scene.len() as u32).step_by(3) {
                render_pass.draw(first..first + 3, 0..1);
            }

            if text_vertex_count > 0 {
                render_pass.set_pipeline(&self.text_pipeline);
                render_pass.set_bind_group(0, &self.text_bind_group, &[]);
                render_pass.set_vertex_buffer(0, self.text_buffer.slice(..));
                render_pass.draw(0..text_vertex_count, 0..1);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

/// Run a shader build step, turning a wgpu validation panic into a startup error.
///
/// wgpu's default uncaptured-error handler panics on invalid shaders or
/// pipelines.
fn guard_shader<T>(program: &'static str, build: impl FnOnce() -> T) -> Result<T, StartupError> {
    std::panic::catch_unwind(std::panic::AssertUnwindSafe(build)).map_err(|_| {
        log::error!("Shader program '{}' failed to compile or link", program);
        StartupError::Shader { program }
    })
}

fn create_solid_pipeline(
    device: &wgpu::Device,
    format: wgpu::TextureFormat,
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("solid_shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("solid.wgsl").into()),
    });

    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("solid_pipeline_layout"),
        bind_group_layouts: &[],
        immediate_size: 0,
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("solid_pipeline"),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[Vertex::desc()],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    })
}

fn create_text_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    format: wgpu::TextureFormat,
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("text_shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("text.wgsl").into()),
    });

    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("text_pipeline_layout"),
        bind_group_layouts: &[layout],
        immediate_size: 0,
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("text_pipeline"),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[TexVertex::desc()],
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
            topology: wgpu::PrimitiveTopology::TriangleList,
            ..Default::default()
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    })
}

/// Upload the digit atlas and build the text program's bind group
fn create_text_bind_group(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    layout: &wgpu::BindGroupLayout,
    settings: &Settings,
) -> wgpu::BindGroup {
    use wgpu::util::DeviceExt;

    let atlas_size = wgpu::Extent3d {
        width: ATLAS_WIDTH,
        height: ATLAS_HEIGHT,
        depth_or_array_layers: 1,
    };
    let atlas = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("glyph_atlas"),
        size: atlas_size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::R8Unorm,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &atlas,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        &glyphs::atlas_pixels(),
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(ATLAS_WIDTH),
            rows_per_image: Some(ATLAS_HEIGHT),
        },
        atlas_size,
    );
    let atlas_view = atlas.create_view(&wgpu::TextureViewDescriptor::default());

    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("glyph_sampler"),
        mag_filter: wgpu::FilterMode::Nearest,
        min_filter: wgpu::FilterMode::Nearest,
        ..Default::default()
    });

    let style_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("text_style"),
        contents: bytemuck::bytes_of(&TextStyle {
            color: settings.score_color,
        }),
        usage: wgpu::BufferUsages::UNIFORM,
    });

    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("text_bind_group"),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&atlas_view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(&sampler),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: style_buffer.as_entire_binding(),
            },
        ],
    })
}
