use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use disintegration::camera::OrbitCamera;
use disintegration::cli::Cli;
use disintegration::config::DemoConfig;
use disintegration::core::{Clock, FpsCounter};
use disintegration::frame::FrameIterator;
use disintegration::hud::HudState;
use disintegration::renderer::SceneRenderer;
use disintegration::scene::Scene;
use disintegration::uniforms::FrameUniforms;

const FPS_UPDATE_INTERVAL: f32 = 1.0;

struct App {
    config: DemoConfig,
    scene: Scene,
    window: Option<Arc<Window>>,
    renderer: Option<SceneRenderer>,
    camera: OrbitCamera,
    frames: FrameIterator,
    input_clock: Clock,
    fps: FpsCounter,
    hud: HudState,
    error: Option<anyhow::Error>,
}

impl App {
    fn new(config: DemoConfig, scene: Scene) -> Self {
        let mut hud = HudState::new(scene.effect, scene.triangle_count(), scene.seed);
        hud.time_scale = config.time_scale;
        hud.wireframe = config.wireframe();

        Self {
            camera: OrbitCamera::new(config.camera_distance),
            frames: FrameIterator::new(Clock::new().with_time_scale(config.time_scale)),
            input_clock: Clock::new(),
            fps: FpsCounter::new(FPS_UPDATE_INTERVAL),
            hud,
            config,
            scene,
            window: None,
            renderer: None,
            error: None,
        }
    }

    /// Stop the event loop, `run` reports the error
    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        self.error = Some(error);
        event_loop.exit();
    }

    /// Push HUD edits into the clock and renderer
    fn apply_hud(&mut self) {
        let clock = self.frames.clock_mut();
        clock.set_time_scale(self.hud.time_scale);
        if self.hud.paused != clock.is_paused() {
            clock.toggle_pause();
        }
        if self.hud.take_restart() {
            clock.reset();
            log::info!("Animation restarted");
        }

        if let Some(renderer) = &mut self.renderer {
            if self.hud.wireframe != renderer.wireframe() {
                self.hud.wireframe = renderer.set_wireframe(self.hud.wireframe);
            }
        }
    }

    fn handle_key(&mut self, event: &KeyEvent) {
        if event.state.is_pressed() && !event.repeat {
            match event.physical_key {
                PhysicalKey::Code(KeyCode::Space) => {
                    self.hud.paused = !self.hud.paused;
                    return;
                }
                PhysicalKey::Code(KeyCode::KeyR) => {
                    self.hud.restart_requested = true;
                    return;
                }
                PhysicalKey::Code(KeyCode::KeyW) => {
                    self.hud.wireframe = !self.hud.wireframe;
                    return;
                }
                _ => {}
            }
        }
        self.camera.process_keyboard(event);
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        self.apply_hud();

        let real_delta = self.input_clock.tick();
        if let Some(fps) = self.fps.tick(real_delta) {
            log::debug!("FPS: {:.1}", fps);
        }
        self.camera.update(real_delta);

        let Some(frame) = self.frames.next() else {
            return;
        };
        self.hud.fps = self.fps.fps();
        self.hud.time = frame.time;

        let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) else {
            return;
        };

        let uniforms = FrameUniforms::new(self.camera.view_proj(renderer.aspect()), self.scene.model, frame.time);
        let hud = self.config.show_ui.then_some(&mut self.hud);

        let fatal = match renderer.render(&uniforms, window, hud) {
            Ok(()) => None,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                renderer.reconfigure();
                None
            }
            Err(wgpu::SurfaceError::OutOfMemory) => Some(anyhow::anyhow!("Surface out of memory")),
            Err(wgpu::SurfaceError::Timeout) => {
                log::warn!("Surface timeout, skipping frame");
                None
            }
            Err(e) => {
                log::warn!("Render error: {}", e);
                None
            }
        };

        if let Some(e) = fatal {
            self.fail(event_loop, e);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title(self.config.window.title.clone())
                .with_inner_size(winit::dpi::LogicalSize::new(
                    self.config.window.width,
                    self.config.window.height,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                self.fail(event_loop, anyhow::anyhow!("Failed to create window: {}", e));
                return;
            }
        };

        let renderer = match pollster::block_on(SceneRenderer::new(
            window.clone(),
            &self.scene,
            self.config.wireframe(),
            self.config.clear_color,
        )) {
            Ok(r) => r,
            Err(e) => {
                self.fail(event_loop, e.context("Failed to initialize renderer"));
                return;
            }
        };

        self.hud.wireframe = renderer.wireframe();
        self.hud.wireframe_supported = renderer.supports_wireframe();
        self.window = Some(window);
        self.renderer = Some(renderer);

        // Animation time starts with the first frame on screen
        self.frames.clock_mut().reset();
        self.input_clock.reset();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        // Let egui handle the event first
        if self.config.show_ui {
            if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
                if renderer.handle_event(window, &event) {
                    return;
                }
            }
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => self.handle_key(&event),
            WindowEvent::MouseInput { state, button, .. } => self.camera.process_mouse_button(button, state),
            WindowEvent::CursorMoved { position, .. } => self.camera.process_cursor_moved(position.x, position.y),
            WindowEvent::MouseWheel { delta, .. } => self.camera.process_scroll(&delta),
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = DemoConfig::resolve(&cli)?;
    let scene = Scene::from_config(&config)?;

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config, scene);

    log::info!("Controls: drag/arrows orbit, wheel zoom, Space pause, R restart, W wireframe, Escape quit");
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("disintegration=info,wgpu_core=warn,wgpu_hal=warn"),
    )
    .init();

    if let Err(e) = run() {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}
