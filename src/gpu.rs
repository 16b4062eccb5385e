//! WebGPU rendering backend using wgpu

use crate::error::RenderError;
use crate::geometry::{Point2D, Rgb};
use crate::render::mesh::{tessellate, ColorVertex, Viewport};
use crate::render::{DrawList, Renderer};
use wasm_bindgen::JsCast;
use wgpu::util::DeviceExt;

const VERTEX_ATTRIBUTES: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

/// Renderer drawing onto an HTML canvas through wgpu.
///
/// Draw calls are staged in a [`DrawList`]; `present()` tessellates them,
/// uploads one vertex buffer and submits a single render pass.
pub struct GpuRenderer {
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    /// Scene coordinate space mapped onto the whole canvas
    viewport: Viewport,
    staged: DrawList,
}

impl GpuRenderer {
    /// Initialize WebGPU (or WebGL2) on the canvas with the given id
    pub async fn from_canvas(canvas_id: &str) -> Result<Self, RenderError> {
        let window = web_sys::window().ok_or_else(|| RenderError::Surface("No window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| RenderError::Surface("No document".into()))?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| RenderError::Surface(format!("Canvas '{}' not found", canvas_id)))?
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .map_err(|_| RenderError::Surface(format!("'{}' is not a canvas", canvas_id)))?;

        let width = canvas.client_width().max(1) as u32;
        let height = canvas.client_height().max(1) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas))
            .map_err(|e| RenderError::Surface(e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| RenderError::Adapter(e.to_string()))?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Main Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_webgl2_defaults(),
                ..Default::default()
            })
            .await
            .map_err(|e| RenderError::Device(e.to_string()))?;

        let surface_caps = surface.get_capabilities(&adapter);
        // Colors are authored as raw 8-bit values; avoid an sRGB re-encode
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| !f.is_srgb())
            .copied()
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or_else(|| RenderError::Surface("Surface reports no formats".into()))?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width,
            height,
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let pipeline = create_pipeline(&device, surface_format);

        log::info!(
            "WebGPU initialized ({}x{}, {:?})",
            width,
            height,
            surface_format
        );

        Ok(Self {
            device,
            queue,
            surface,
            config,
            pipeline,
            viewport: Viewport::new(width, height),
            staged: DrawList::new(),
        })
    }

    /// Reconfigure the surface after the canvas changed size
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Size of the scene in pixels; it is stretched to fill the canvas
    pub fn set_scene_size(&mut self, width: u32, height: u32) {
        self.viewport = Viewport::new(width, height);
    }
}

fn create_pipeline(device: &wgpu::Device, format: wgpu::TextureFormat) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("Flat Shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("shaders/flat.wgsl").into()),
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("Flat Pipeline"),
        layout: None,
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            compilation_options: wgpu::PipelineCompilationOptions::default(),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<ColorVertex>() as wgpu::BufferAddress,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &VERTEX_ATTRIBUTES,
            }],
        },
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            // Fans and quads are emitted with mixed winding
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            compilation_options: wgpu::PipelineCompilationOptions::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        multiview_mask: None,
        cache: None,
    })
}

fn to_wgpu_color(color: Rgb) -> wgpu::Color {
    let [r, g, b, a] = color.to_rgba_f32();
    wgpu::Color {
        r: r as f64,
        g: g as f64,
        b: b as f64,
        a: a as f64,
    }
}

impl Renderer for GpuRenderer {
    fn clear(&mut self, color: Rgb) {
        self.staged.clear(color);
    }

    fn draw_line(&mut self, from: Point2D, to: Point2D, color: Rgb, width: f64) {
        self.staged.draw_line(from, to, color, width);
    }

    fn draw_circle(&mut self, center: Point2D, radius: f64, color: Rgb) {
        self.staged.draw_circle(center, radius, color);
    }

    fn draw_rotated_disc(&mut self, center: Point2D, radius: f64, angle_deg: f64, color: Rgb) {
        self.staged.draw_rotated_disc(center, radius, angle_deg, color);
    }

    fn present(&mut self) -> Result<(), RenderError> {
        let commands = self.staged.take();
        let mesh = tessellate(&commands, &self.viewport);

        let output = match self.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                // Surface lost, reconfigure and skip frame
                log::warn!("Surface lost, skipping frame");
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::warn!("Surface timeout, skipping frame");
                return Ok(());
            }
            Err(e) => return Err(RenderError::Surface(e.to_string())),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let vertex_buffer = (!mesh.vertices.is_empty()).then(|| {
            self.device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("Frame Vertices"),
                    contents: bytemuck::cast_slice(&mesh.vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                })
        });

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let load = match mesh.clear {
                Some(color) => wgpu::LoadOp::Clear(to_wgpu_color(color)),
                None => wgpu::LoadOp::Load,
            };

            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                ..Default::default()
            });

            if let Some(buffer) = &vertex_buffer {
                render_pass.set_pipeline(&self.pipeline);
                render_pass.set_vertex_buffer(0, buffer.slice(..));
                render_pass.draw(0..mesh.vertices.len() as u32, 0..1);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        log::trace!("Presented {} vertices", mesh.vertices.len());
        Ok(())
    }
}
