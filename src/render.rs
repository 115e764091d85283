use blocks_core::{OrbitCamera, Scene, SceneConfig, PLACEHOLDER_BACKGROUND};
use glam::{Mat4, Vec3};
use web_sys as web;

mod background;
mod cubes;
mod helpers;
mod targets;

use background::{create_background_resources, BackgroundResources};
use cubes::{create_cube_resources, CubeInstance, CubeResources};
use targets::DepthTarget;

static COMMON_WGSL: &str = include_str!("../shaders/common.wgsl");
static BLOCKS_WGSL: &str = include_str!("../shaders/blocks.wgsl");
static BACKGROUND_WGSL: &str = include_str!("../shaders/background.wgsl");

fn blocks_source() -> String {
    format!("{COMMON_WGSL}\n{BLOCKS_WGSL}")
}

fn background_source() -> String {
    format!("{COMMON_WGSL}\n{BACKGROUND_WGSL}")
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    inv_view_proj: [[f32; 4]; 4],
    group_rotation: [[f32; 4]; 4],
    eye: [f32; 4],
    light_dir: [f32; 4],
    light_color: [f32; 4],
    base_color: [f32; 4],
    edge_color: [f32; 4],
    material: [f32; 4],
}

impl SceneUniforms {
    fn new(config: &SceneConfig, scene: &Scene) -> Self {
        let lights = &config.lights;
        let material = &config.material;
        // Directional lights shine from their position toward the origin.
        let light_dir = lights.directional_position.normalize_or_zero();
        let [lr, lg, lb] = lights.directional_color;
        let [cr, cg, cb] = material.color;
        let [er, eg, eb] = material.edge_color;
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            inv_view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            group_rotation: Mat4::from_quat(scene.rotation).to_cols_array_2d(),
            eye: [0.0; 4],
            light_dir: [
                light_dir.x,
                light_dir.y,
                light_dir.z,
                lights.directional_intensity,
            ],
            light_color: [lr, lg, lb, lights.ambient_intensity],
            base_color: [cr, cg, cb, material.opacity],
            edge_color: [er, eg, eb, material.cube_edge],
            material: [
                material.roughness,
                material.metalness,
                material.transmission,
                material.clearcoat,
            ],
        }
    }

    fn set_camera(&mut self, view_proj: Mat4, eye: Vec3, time: f32) {
        self.view_proj = view_proj.to_cols_array_2d();
        self.inv_view_proj = view_proj.inverse().to_cols_array_2d();
        self.eye = [eye.x, eye.y, eye.z, time];
    }
}

/// Decoded RGBA8 environment image, rows top to bottom.
pub struct EnvironmentPixels<'a> {
    pub width: u32,
    pub height: u32,
    pub rgba: &'a [u8],
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth: DepthTarget,

    bind_group_layout: wgpu::BindGroupLayout,
    bind_group: wgpu::BindGroup,
    uniform_buffer: wgpu::Buffer,
    sampler: wgpu::Sampler,
    env_texture: wgpu::Texture,
    env_view: wgpu::TextureView,

    background: BackgroundResources,
    cubes: CubeResources,

    uniforms: SceneUniforms,
    width: u32,
    height: u32,
    time_accum: f32,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        config: &SceneConfig,
        scene: &Scene,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &surface_config);
        let depth = DepthTarget::new(&device, width, height);

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        multisampled: false,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("env_sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });
        let (env_texture, env_view) =
            helpers::create_env_texture(&device, &queue, 1, 1, &PLACEHOLDER_BACKGROUND);
        let bind_group =
            make_bind_group(&device, &bind_group_layout, &uniform_buffer, &env_view, &sampler);

        let instances: Vec<CubeInstance> = scene
            .cube_positions()
            .into_iter()
            .map(|p| CubeInstance {
                center_scale: [p.x, p.y, p.z, config.material.cube_edge],
            })
            .collect();
        let background = create_background_resources(&device, &pipeline_layout, format);
        let cubes = create_cube_resources(&device, &pipeline_layout, format, &instances);
        log::info!(
            "[gpu] ready {}x{} format={:?} cubes={}",
            width,
            height,
            format,
            instances.len()
        );

        Ok(Self {
            surface,
            device,
            queue,
            config: surface_config,
            depth,
            bind_group_layout,
            bind_group,
            uniform_buffer,
            sampler,
            env_texture,
            env_view,
            background,
            cubes,
            uniforms: SceneUniforms::new(config, scene),
            width,
            height,
            time_accum: 0.0,
        })
    }

    /// Replace the environment image used for the background and reflections.
    pub fn set_environment(&mut self, image: EnvironmentPixels<'_>) {
        if image.width == 0 || image.height == 0 {
            return;
        }
        let max_dim = self.device.limits().max_texture_dimension_2d;
        if image.width > max_dim || image.height > max_dim {
            log::error!(
                "[gpu] environment {}x{} exceeds texture limit {}",
                image.width,
                image.height,
                max_dim
            );
            return;
        }
        self.env_texture.destroy();
        (self.env_texture, self.env_view) = helpers::create_env_texture(
            &self.device,
            &self.queue,
            image.width,
            image.height,
            image.rgba,
        );
        self.bind_group = make_bind_group(
            &self.device,
            &self.bind_group_layout,
            &self.uniform_buffer,
            &self.env_view,
            &self.sampler,
        );
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.depth.recreate(&self.device, width, height);
        }
    }

    pub fn render(&mut self, dt_sec: f32, camera: &OrbitCamera) -> Result<(), wgpu::SurfaceError> {
        self.time_accum += dt_sec.max(0.0);
        let aspect = self.width as f32 / self.height.max(1) as f32;
        self.uniforms
            .set_camera(camera.view_proj(aspect), camera.eye(), self.time_accum);
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&self.uniforms));

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.bind_group, &[]);
            self.background.draw(&mut rpass);
            self.cubes.draw(&mut rpass);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn make_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    uniform_buffer: &wgpu::Buffer,
    env_view: &wgpu::TextureView,
    sampler: &wgpu::Sampler,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("scene_bg"),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::TextureView(env_view),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    })
}
