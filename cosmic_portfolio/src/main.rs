//! Cosmic Portfolio - an animated portfolio viewer
//!
//! One window, three phases:
//! - Welcome: title card over a starfield, "Begin Journey" button
//! - Journey: a 20-second flight through space, non-interactive
//! - Portfolio: a solar system whose planets are portfolio categories
//!
//! Controls (portfolio phase):
//! - Mouse drag: Orbit camera
//! - Scroll: Zoom
//! - Click a planet: Open its project gallery

mod content;
mod journey;
mod overlay;
mod phase;
mod renderer;
mod solar_system;

use common::{Camera3D, GraphicsContext};
use journey::{JourneyAnimator, JourneyFrame, JourneyStatus};
use overlay::OverlayState;
use phase::{transition, Phase, PhaseEvent};
use renderer::{Renderer, SceneDraw};
use solar_system::{OrbitLayout, SolarSystem};
use std::time::Instant;
use winit::{
    event::{ElementState, Event, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::ControlFlow,
};

/// Cursor travel past which a press-to-release gesture stops being a click
const DRAG_THRESHOLD_PX: f64 = 4.0;

fn exceeds_drag_threshold(press: (f64, f64), current: (f64, f64)) -> bool {
    let dx = current.0 - press.0;
    let dy = current.1 - press.1;
    dx * dx + dy * dy > DRAG_THRESHOLD_PX * DRAG_THRESHOLD_PX
}

struct EguiState {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

struct App {
    ctx: GraphicsContext,
    renderer: Renderer,
    scene: SolarSystem,
    camera: Camera3D,
    phase: Phase,

    /// Alive only while the journey phase runs; dropping it is the teardown
    journey: Option<(JourneyAnimator, Instant)>,
    journey_frame: Option<JourneyFrame>,

    overlay: OverlayState,
    egui: EguiState,

    mouse_pressed: bool,
    dragged: bool,
    press_pos: Option<(f64, f64)>,
    last_mouse_pos: Option<(f64, f64)>,
    cursor: (f64, f64),
}

impl App {
    fn new(ctx: GraphicsContext) -> Self {
        let renderer = Renderer::new(&ctx);
        let scene = SolarSystem::new(content::CATEGORIES, &OrbitLayout::default());

        let mut camera = Camera3D::new(ctx.aspect_ratio()).with_zoom_range(40.0, 300.0);
        camera.distance = 180.0;
        camera.pitch = 0.5;
        camera.update_orbital();

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &ctx.window,
            Some(ctx.window.scale_factor() as f32),
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            &ctx.device,
            ctx.config.format,
            None,
            1,
        );

        Self {
            ctx,
            renderer,
            scene,
            camera,
            phase: Phase::Welcome,
            journey: None,
            journey_frame: None,
            overlay: OverlayState::default(),
            egui: EguiState {
                ctx: egui_ctx,
                state: egui_state,
                renderer: egui_renderer,
            },
            mouse_pressed: false,
            dragged: false,
            press_pos: None,
            last_mouse_pos: None,
            cursor: (0.0, 0.0),
        }
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        self.ctx.resize(new_size);
        self.camera.update_aspect_ratio(self.ctx.aspect_ratio());
        self.renderer
            .resize(&self.ctx.device, new_size.width, new_size.height);
    }

    fn begin_journey(&mut self) {
        self.phase = transition(self.phase, PhaseEvent::BeginJourney);
        // The journey reads the viewport once; it does not track resizes.
        let animator = JourneyAnimator::new(
            self.ctx.size.width as f32,
            self.ctx.size.height as f32,
        );
        self.journey = Some((animator, Instant::now()));
        log::info!("journey started");
    }

    fn update(&mut self, dt: f32) {
        match self.phase {
            Phase::Welcome => {
                // Keeps the skybox twinkling behind the title card
                self.scene.step(dt);
            }
            Phase::Journey => {
                if let Some((animator, started)) = &mut self.journey {
                    let frame = animator.tick(started.elapsed());
                    let complete = frame.status == JourneyStatus::Complete;
                    self.journey_frame = Some(frame);

                    if complete {
                        self.phase = transition(self.phase, PhaseEvent::JourneyComplete);
                        self.journey = None;
                        self.journey_frame = None;
                        log::info!("journey complete, entering portfolio");
                    }
                }
            }
            Phase::Portfolio => {
                self.scene.step(dt);

                if !self.mouse_pressed {
                    let (origin, dir) = self.camera.screen_ray(
                        self.cursor.0 as f32,
                        self.cursor.1 as f32,
                        self.ctx.size.width as f32,
                        self.ctx.size.height as f32,
                    );
                    self.scene.hovered = self.scene.pick(origin, dir);
                }
            }
        }
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        // Build the overlay for the current phase
        let raw_input = self.egui.state.take_egui_input(&self.ctx.window);
        let phase = self.phase;
        let progress = self.journey_frame.as_ref().map_or(0.0, |f| f.progress);
        let overlay = &mut self.overlay;
        let mut begin = false;

        let full_output = self.egui.ctx.run(raw_input, |ctx| match phase {
            Phase::Welcome => begin = overlay::draw_welcome(ctx),
            Phase::Journey => overlay::draw_journey_hud(ctx, progress),
            Phase::Portfolio => overlay::draw_portfolio(ctx, overlay, content::CATEGORIES),
        });

        self.egui
            .state
            .handle_platform_output(&self.ctx.window, full_output.platform_output);
        let tris = self
            .egui
            .ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);
        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui
                .renderer
                .update_texture(&self.ctx.device, &self.ctx.queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.ctx.size.width, self.ctx.size.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        let width = self.ctx.size.width as f32;
        let height = self.ctx.size.height as f32;

        match self.phase {
            Phase::Welcome => {
                // Skybox only behind the title card
                self.renderer
                    .update_scene(&self.ctx.queue, width, height, &self.camera, &self.scene);
                let backdrop = SceneDraw {
                    body_count: 0,
                    orbit_vertex_count: 0,
                };
                self.renderer.render_portfolio(&mut encoder, &view, &backdrop);
            }
            Phase::Journey => {
                if let Some(frame) = &self.journey_frame {
                    let draw =
                        self.renderer
                            .update_journey(&self.ctx.queue, width, height, frame);
                    self.renderer.render_journey(&mut encoder, &view, &draw);
                }
            }
            Phase::Portfolio => {
                let draw = self.renderer.update_scene(
                    &self.ctx.queue,
                    width,
                    height,
                    &self.camera,
                    &self.scene,
                );
                self.renderer.render_portfolio(&mut encoder, &view, &draw);
            }
        }

        self.egui.renderer.update_buffers(
            &self.ctx.device,
            &self.ctx.queue,
            &mut encoder,
            &tris,
            &screen_descriptor,
        );
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Egui Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.egui
                .renderer
                .render(&mut render_pass, &tris, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.egui.renderer.free_texture(id);
        }

        self.ctx.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        if begin {
            self.begin_journey();
        }

        Ok(())
    }

    fn handle_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button != MouseButton::Left || self.phase != Phase::Portfolio {
            return;
        }

        match state {
            ElementState::Pressed => {
                self.mouse_pressed = true;
                self.dragged = false;
                self.press_pos = Some(self.cursor);
            }
            ElementState::Released => {
                self.mouse_pressed = false;
                self.press_pos = None;
                self.last_mouse_pos = None;

                // A release without a drag is a click: try to open a planet
                if !self.dragged && self.overlay.selected.is_none() && !self.overlay.menu_open {
                    let (origin, dir) = self.camera.screen_ray(
                        self.cursor.0 as f32,
                        self.cursor.1 as f32,
                        self.ctx.size.width as f32,
                        self.ctx.size.height as f32,
                    );
                    if let Some(index) = self.scene.pick(origin, dir) {
                        self.overlay.selected = Some(index);
                        log::info!("opened gallery: {}", self.scene.planets[index].category.name);
                    }
                }
            }
        }
    }

    fn handle_mouse_move(&mut self, x: f64, y: f64) {
        self.cursor = (x, y);

        if self.mouse_pressed && self.phase == Phase::Portfolio {
            if let Some(press) = self.press_pos {
                if exceeds_drag_threshold(press, (x, y)) {
                    self.dragged = true;
                }
            }
            if let Some((last_x, last_y)) = self.last_mouse_pos {
                let dx = (x - last_x) as f32 * 0.01;
                let dy = (y - last_y) as f32 * 0.01;
                self.camera.orbit(dx, dy);
            }
            self.last_mouse_pos = Some((x, y));
        }
    }

    fn handle_scroll(&mut self, delta: f32) {
        if self.phase == Phase::Portfolio {
            self.camera.zoom(delta * 8.0);
        }
    }

    fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        self.egui.state.on_window_event(&self.ctx.window, event).consumed
    }
}

fn main() -> anyhow::Result<()> {
    println!("╔═══════════════════════════════════════════════════════════╗");
    println!("║            COSMIC PORTFOLIO - A Journey Through           ║");
    println!("║                  a Universe of Work                       ║");
    println!("╠═══════════════════════════════════════════════════════════╣");
    println!("║ Controls (after the journey):                             ║");
    println!("║   Drag      - Orbit camera                                ║");
    println!("║   Scroll    - Zoom                                        ║");
    println!("║   Click     - Open a planet's project gallery             ║");
    println!("╚═══════════════════════════════════════════════════════════╝");
    println!();

    let (ctx, event_loop) =
        pollster::block_on(GraphicsContext::new("Cosmic Portfolio", 1280, 720))?;

    let mut app = App::new(ctx);
    let mut last_time = Instant::now();

    event_loop.run(move |event, elwt| {
        elwt.set_control_flow(ControlFlow::Poll);

        match event {
            Event::WindowEvent { ref event, .. } => {
                let consumed = app.handle_window_event(event);

                if !consumed {
                    match event {
                        WindowEvent::CloseRequested => elwt.exit(),
                        WindowEvent::Resized(size) => app.resize(*size),
                        WindowEvent::MouseInput { state, button, .. } => {
                            app.handle_mouse_button(*button, *state);
                        }
                        WindowEvent::CursorMoved { position, .. } => {
                            app.handle_mouse_move(position.x, position.y);
                        }
                        WindowEvent::MouseWheel { delta, .. } => {
                            let scroll = match delta {
                                MouseScrollDelta::LineDelta(_, y) => *y,
                                MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 100.0,
                            };
                            app.handle_scroll(scroll);
                        }
                        WindowEvent::RedrawRequested => {
                            let now = Instant::now();
                            let dt = (now - last_time).as_secs_f32().min(0.1);
                            last_time = now;

                            app.update(dt);
                            match app.render() {
                                Ok(_) => {}
                                Err(wgpu::SurfaceError::Lost) => app.resize(app.ctx.size),
                                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                                Err(e) => eprintln!("Render error: {:?}", e),
                            }
                        }
                        _ => {}
                    }
                }
            }
            Event::AboutToWait => {
                app.ctx.window.request_redraw();
            }
            _ => {}
        }
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_jitter_still_counts_as_a_click() {
        let press = (100.0, 100.0);
        assert!(!exceeds_drag_threshold(press, press));
        assert!(!exceeds_drag_threshold(press, (101.0, 100.0)));
        assert!(!exceeds_drag_threshold(press, (102.0, 102.0)));
    }

    #[test]
    fn deliberate_movement_is_a_drag() {
        let press = (100.0, 100.0);
        assert!(exceeds_drag_threshold(press, (105.0, 100.0)));
        assert!(exceeds_drag_threshold(press, (100.0, 94.0)));
        assert!(exceeds_drag_threshold(press, (104.0, 104.0)));
    }
}
