//! Rendering for both scenes
//!
//! The journey is drawn as screen-space instanced quads (discs and streak
//! segments) over an opaque near-black clear; the portfolio is a procedural
//! skybox plus orbit lines and billboarded body quads with a depth buffer.

use common::{Camera3D, CameraUniform, GraphicsContext};
use wgpu::util::DeviceExt;

use crate::journey::{DiscKind, JourneyFrame};
use crate::solar_system::SolarSystem;

/// Journey clear color, deep-space `#000011`
const SPACE_CLEAR: wgpu::Color = wgpu::Color {
    r: 0.0,
    g: 0.0,
    b: 0.067,
    a: 1.0,
};

/// Screen-state uniform shared by the 2D pipelines and the skybox
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ScreenUniform {
    pub size: [f32; 2],
    pub shake: [f32; 2],
    pub time: f32,
    pub _pad: [f32; 3],
}

/// Journey disc instance
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpriteInstance {
    pub center: [f32; 2],
    pub radius: f32,
    pub color: [f32; 4],
    pub kind: u32,
}

impl SpriteInstance {
    const ATTRIBS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        2 => Float32x2,
        3 => Float32,
        4 => Float32x4,
        5 => Uint32,
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SpriteInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Star motion-blur segment instance
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct StreakInstance {
    pub seg_start: [f32; 2],
    pub seg_end: [f32; 2],
    pub width: f32,
    pub color: [f32; 4],
}

impl StreakInstance {
    const ATTRIBS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        2 => Float32x2,
        3 => Float32x2,
        4 => Float32,
        5 => Float32x4,
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<StreakInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Billboarded scene body instance (sun, planet, ring or glow shell)
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BodyInstance {
    pub position: [f32; 3],
    pub radius: f32,
    pub color: [f32; 4],
    pub kind: u32,
    /// Ring inner radius fraction, or planet surface seed
    pub inner: f32,
}

impl BodyInstance {
    const ATTRIBS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
        2 => Float32x3,
        3 => Float32,
        4 => Float32x4,
        5 => Uint32,
        6 => Float32,
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<BodyInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBS,
        }
    }
}

const BODY_SUN: u32 = 0;
const BODY_PLANET: u32 = 1;
const BODY_RING: u32 = 2;
const BODY_GLOW: u32 = 3;

/// Quad vertex
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct QuadVertex {
    pub position: [f32; 2],
}

impl QuadVertex {
    const ATTRIBS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Orbit line vertex
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl LineVertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3,
        1 => Float32x4,
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

const QUAD_VERTICES: &[QuadVertex] = &[
    QuadVertex { position: [-1.0, -1.0] },
    QuadVertex { position: [1.0, -1.0] },
    QuadVertex { position: [1.0, 1.0] },
    QuadVertex { position: [-1.0, -1.0] },
    QuadVertex { position: [1.0, 1.0] },
    QuadVertex { position: [-1.0, 1.0] },
];

/// Draw counts for one journey frame
pub struct JourneyDraw {
    pub disc_count: u32,
    pub streak_count: u32,
    pub has_glow: bool,
}

/// Draw counts for one portfolio frame
pub struct SceneDraw {
    pub body_count: u32,
    pub orbit_vertex_count: u32,
}

pub struct Renderer {
    skybox_pipeline: wgpu::RenderPipeline,
    orbit_pipeline: wgpu::RenderPipeline,
    body_pipeline: wgpu::RenderPipeline,
    sprite_pipeline: wgpu::RenderPipeline,
    streak_pipeline: wgpu::RenderPipeline,

    quad_buffer: wgpu::Buffer,
    sprite_buffer: wgpu::Buffer,
    streak_buffer: wgpu::Buffer,
    body_buffer: wgpu::Buffer,
    orbit_buffer: wgpu::Buffer,

    camera_buffer: wgpu::Buffer,
    screen_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,

    depth_texture: wgpu::TextureView,

    max_sprites: usize,
    max_streaks: usize,
    max_bodies: usize,
    max_orbit_vertices: usize,
}

impl Renderer {
    pub fn new(ctx: &GraphicsContext) -> Self {
        let device = &ctx.device;

        let max_sprites = 1056; // 20 clouds + 800 stars + 200 dust + glow
        let max_streaks = 832;
        let max_bodies = 32;
        let max_orbit_vertices = 2048;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Cosmos Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/cosmos.wgsl").into()),
        });

        let camera_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Camera Buffer"),
            size: std::mem::size_of::<CameraUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let screen_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Screen Buffer"),
            size: std::mem::size_of::<ScreenUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Bind Group Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Bind Group"),
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: camera_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: screen_buffer.as_entire_binding(),
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let depth_texture = Self::create_depth_texture(device, ctx.size.width, ctx.size.height);

        let depth_stencil_state = Some(wgpu::DepthStencilState {
            format: wgpu::TextureFormat::Depth32Float,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        });

        let make_pipeline = |label: &str,
                             vs: &str,
                             fs: &str,
                             buffers: &[wgpu::VertexBufferLayout<'static>],
                             topology: wgpu::PrimitiveTopology,
                             depth: bool,
                             blend: Option<wgpu::BlendState>| {
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: vs,
                    buffers,
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: fs,
                    targets: &[Some(wgpu::ColorTargetState {
                        format: ctx.config.format,
                        blend,
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology,
                    ..Default::default()
                },
                depth_stencil: if depth { depth_stencil_state.clone() } else { None },
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
            })
        };

        let skybox_pipeline = make_pipeline(
            "Skybox Pipeline",
            "vs_skybox",
            "fs_skybox",
            &[],
            wgpu::PrimitiveTopology::TriangleList,
            false,
            None,
        );

        let orbit_pipeline = make_pipeline(
            "Orbit Pipeline",
            "vs_orbit",
            "fs_orbit",
            &[LineVertex::layout()],
            wgpu::PrimitiveTopology::LineList,
            true,
            Some(wgpu::BlendState::ALPHA_BLENDING),
        );

        let body_pipeline = make_pipeline(
            "Body Pipeline",
            "vs_body",
            "fs_body",
            &[QuadVertex::layout(), BodyInstance::layout()],
            wgpu::PrimitiveTopology::TriangleList,
            true,
            Some(wgpu::BlendState::ALPHA_BLENDING),
        );

        let sprite_pipeline = make_pipeline(
            "Sprite Pipeline",
            "vs_sprite",
            "fs_sprite",
            &[QuadVertex::layout(), SpriteInstance::layout()],
            wgpu::PrimitiveTopology::TriangleList,
            false,
            Some(wgpu::BlendState::ALPHA_BLENDING),
        );

        let streak_pipeline = make_pipeline(
            "Streak Pipeline",
            "vs_streak",
            "fs_streak",
            &[QuadVertex::layout(), StreakInstance::layout()],
            wgpu::PrimitiveTopology::TriangleList,
            false,
            Some(wgpu::BlendState::ALPHA_BLENDING),
        );

        let quad_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Quad Buffer"),
            contents: bytemuck::cast_slice(QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let sprite_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Sprite Buffer"),
            size: (std::mem::size_of::<SpriteInstance>() * max_sprites) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let streak_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Streak Buffer"),
            size: (std::mem::size_of::<StreakInstance>() * max_streaks) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let body_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Body Buffer"),
            size: (std::mem::size_of::<BodyInstance>() * max_bodies) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let orbit_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Orbit Buffer"),
            size: (std::mem::size_of::<LineVertex>() * max_orbit_vertices) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            skybox_pipeline,
            orbit_pipeline,
            body_pipeline,
            sprite_pipeline,
            streak_pipeline,
            quad_buffer,
            sprite_buffer,
            streak_buffer,
            body_buffer,
            orbit_buffer,
            camera_buffer,
            screen_buffer,
            bind_group,
            depth_texture,
            max_sprites,
            max_streaks,
            max_bodies,
            max_orbit_vertices,
        }
    }

    fn create_depth_texture(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Depth32Float,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&wgpu::TextureViewDescriptor::default())
    }

    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.depth_texture = Self::create_depth_texture(device, width, height);
    }

    /// Upload one journey frame's draw lists
    pub fn update_journey(
        &self,
        queue: &wgpu::Queue,
        width: f32,
        height: f32,
        frame: &JourneyFrame,
    ) -> JourneyDraw {
        let screen = ScreenUniform {
            size: [width, height],
            shake: [frame.shake, frame.shake],
            time: 0.0,
            _pad: [0.0; 3],
        };
        queue.write_buffer(&self.screen_buffer, 0, bytemuck::cast_slice(&[screen]));

        let mut sprites: Vec<SpriteInstance> = frame
            .discs
            .iter()
            .take(self.max_sprites - 1)
            .map(|disc| SpriteInstance {
                center: [disc.center.x, disc.center.y],
                radius: disc.radius,
                color: disc.color,
                kind: match disc.kind {
                    DiscKind::Solid => 0,
                    DiscKind::Soft => 1,
                    DiscKind::ArrivalGlow => 2,
                },
            })
            .collect();

        let disc_count = sprites.len() as u32;
        let has_glow = frame.arrival_glow.is_some();
        if let Some(glow) = frame.arrival_glow {
            sprites.push(SpriteInstance {
                center: [glow.center.x, glow.center.y],
                radius: glow.radius,
                color: glow.color,
                kind: 2,
            });
        }
        queue.write_buffer(&self.sprite_buffer, 0, bytemuck::cast_slice(&sprites));

        let streaks: Vec<StreakInstance> = frame
            .streaks
            .iter()
            .take(self.max_streaks)
            .map(|streak| StreakInstance {
                seg_start: [streak.from.x, streak.from.y],
                seg_end: [streak.to.x, streak.to.y],
                width: streak.width,
                color: streak.color,
            })
            .collect();
        if !streaks.is_empty() {
            queue.write_buffer(&self.streak_buffer, 0, bytemuck::cast_slice(&streaks));
        }

        JourneyDraw {
            disc_count,
            streak_count: streaks.len() as u32,
            has_glow,
        }
    }

    /// Draw one journey frame: clear to deep space, discs, streaks, glow
    pub fn render_journey(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        draw: &JourneyDraw,
    ) {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Journey Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(SPACE_CLEAR),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        pass.set_bind_group(0, &self.bind_group, &[]);
        pass.set_vertex_buffer(0, self.quad_buffer.slice(..));

        if draw.disc_count > 0 {
            pass.set_pipeline(&self.sprite_pipeline);
            pass.set_vertex_buffer(1, self.sprite_buffer.slice(..));
            pass.draw(0..6, 0..draw.disc_count);
        }

        if draw.streak_count > 0 {
            pass.set_pipeline(&self.streak_pipeline);
            pass.set_vertex_buffer(1, self.streak_buffer.slice(..));
            pass.draw(0..6, 0..draw.streak_count);
        }

        // Destination glow over everything else
        if draw.has_glow {
            pass.set_pipeline(&self.sprite_pipeline);
            pass.set_vertex_buffer(1, self.sprite_buffer.slice(..));
            pass.draw(0..6, draw.disc_count..draw.disc_count + 1);
        }
    }

    /// Upload camera, orbits and bodies for the portfolio scene
    pub fn update_scene(
        &self,
        queue: &wgpu::Queue,
        width: f32,
        height: f32,
        camera: &Camera3D,
        scene: &SolarSystem,
    ) -> SceneDraw {
        let camera_uniform = CameraUniform::from_camera_3d(camera);
        queue.write_buffer(&self.camera_buffer, 0, bytemuck::cast_slice(&[camera_uniform]));

        let screen = ScreenUniform {
            size: [width, height],
            shake: [0.0, 0.0],
            time: scene.time,
            _pad: [0.0; 3],
        };
        queue.write_buffer(&self.screen_buffer, 0, bytemuck::cast_slice(&[screen]));

        // Orbit path circles as line-list pairs
        let mut orbit_vertices: Vec<LineVertex> = Vec::new();
        for (index, planet) in scene.planets.iter().enumerate() {
            let path = scene.orbit_path(index, 128);
            let accent = planet.category.accent;
            let color = [accent[0], accent[1], accent[2], 0.12];
            for pair in path.windows(2) {
                orbit_vertices.push(LineVertex {
                    position: pair[0].to_array(),
                    color,
                });
                orbit_vertices.push(LineVertex {
                    position: pair[1].to_array(),
                    color,
                });
            }
        }
        orbit_vertices.truncate(self.max_orbit_vertices);
        if !orbit_vertices.is_empty() {
            queue.write_buffer(&self.orbit_buffer, 0, bytemuck::cast_slice(&orbit_vertices));
        }

        // Sun, planets, rings, then glow shells
        let mut bodies: Vec<BodyInstance> = Vec::new();
        bodies.push(BodyInstance {
            position: [0.0, 0.0, 0.0],
            radius: scene.sun_radius,
            color: [1.0, 0.95, 0.8, 1.0],
            kind: BODY_SUN,
            inner: 0.0,
        });

        for (index, planet) in scene.planets.iter().enumerate() {
            let hovered = scene.hovered == Some(index);
            let position = scene.planet_position(index).to_array();
            let radius = if hovered {
                planet.display_radius * 1.15
            } else {
                planet.display_radius
            };
            let mut color = planet.category.color;
            if hovered {
                for channel in color.iter_mut().take(3) {
                    *channel = (*channel * 1.25).min(1.0);
                }
            }
            bodies.push(BodyInstance {
                position,
                radius,
                color,
                kind: BODY_PLANET,
                inner: planet.material,
            });

            if planet.category.has_rings {
                let outer = planet.display_radius + 4.0;
                let accent = planet.category.accent;
                bodies.push(BodyInstance {
                    position,
                    radius: outer,
                    color: [accent[0], accent[1], accent[2], 0.4],
                    kind: BODY_RING,
                    inner: (planet.display_radius + 1.5) / outer,
                });
            }
        }

        // Two layered glow shells around the sun
        for (radius, color) in [
            (18.0, [0.961, 0.620, 0.043, 0.15]),
            (22.0, [0.984, 0.749, 0.141, 0.08]),
        ] {
            bodies.push(BodyInstance {
                position: [0.0, 0.0, 0.0],
                radius,
                color,
                kind: BODY_GLOW,
                inner: 0.0,
            });
        }

        bodies.truncate(self.max_bodies);
        queue.write_buffer(&self.body_buffer, 0, bytemuck::cast_slice(&bodies));

        SceneDraw {
            body_count: bodies.len() as u32,
            orbit_vertex_count: orbit_vertices.len() as u32,
        }
    }

    /// Draw the portfolio scene: skybox, then orbits and bodies with depth
    pub fn render_portfolio(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        draw: &SceneDraw,
    ) {
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Skybox Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            pass.set_pipeline(&self.skybox_pipeline);
            pass.set_bind_group(0, &self.bind_group, &[]);
            pass.draw(0..3, 0..1);
        }

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            pass.set_bind_group(0, &self.bind_group, &[]);

            if draw.orbit_vertex_count > 0 {
                pass.set_pipeline(&self.orbit_pipeline);
                pass.set_vertex_buffer(0, self.orbit_buffer.slice(..));
                pass.draw(0..draw.orbit_vertex_count, 0..1);
            }

            if draw.body_count > 0 {
                pass.set_pipeline(&self.body_pipeline);
                pass.set_vertex_buffer(0, self.quad_buffer.slice(..));
                pass.set_vertex_buffer(1, self.body_buffer.slice(..));
                pass.draw(0..6, 0..draw.body_count);
            }
        }
    }
}
