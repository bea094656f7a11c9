//! Luna: a small 2D lunar lander.
//!
//! Land gently on the green pad. Touch down slower than 2 m/s and within
//! about 15 degrees of upright, or the attempt ends in a crash.

mod events;

use std::sync::Arc;

use anyhow::Result;
use engine_core::Time;
use game::{GameConfig, Session};
use input::InputState;
use renderer::Renderer;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

/// Seconds between window title refreshes.
const TITLE_REFRESH_SECS: f32 = 0.25;

/// Everything that lives as long as the window.
pub(crate) struct GameState {
    renderer: Renderer,
    session: Session,
    input: InputState,
    time: Time,
    title_timer: f32,
    running: bool,
}

impl GameState {
    async fn new(window: Arc<Window>, config: &GameConfig) -> Result<Self> {
        let mut renderer = Renderer::new(window, config.vsync).await?;
        let session = Session::new(config);

        let geometry = session.geometry();
        renderer.upload_scene(
            &geometry.stars,
            &geometry.terrain,
            &geometry.pad,
            &geometry.lander,
        );
        renderer.window().set_title(&session.telemetry());

        Ok(Self {
            renderer,
            session,
            input: InputState::new(),
            time: Time::new(),
            title_timer: 0.0,
            running: true,
        })
    }

    fn update(&mut self) {
        self.time.update();
        let dt = self.time.delta_seconds();

        let actions = self.input.actions();
        if actions.exit {
            log::info!(
                "Exit requested after {} frames ({:.1} s)",
                self.time.frame_count(),
                self.time.elapsed_seconds()
            );
            self.running = false;
            return;
        }

        self.session.tick(dt, &actions);

        self.title_timer += dt;
        if self.title_timer >= TITLE_REFRESH_SECS {
            self.title_timer = 0.0;
            let title = format!("{} | {:.0} fps", self.session.telemetry(), self.time.fps());
            self.renderer.window().set_title(&title);
        }
    }

    fn render(&mut self) -> Result<()> {
        let frame = self.session.frame(self.renderer.aspect());
        self.renderer.render(&frame)
    }
}

/// Application handler for winit.
struct App {
    config: GameConfig,
    state: Option<GameState>,
}

impl App {
    fn new(config: GameConfig) -> Self {
        Self {
            config,
            state: None,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title("Luna Lander")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window_width,
                self.config.window_height,
            ));

        let window = match event_loop.create_window(window_attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        match pollster::block_on(GameState::new(window.clone(), &self.config)) {
            Ok(s) => {
                self.state = Some(s);
                window.request_redraw();
            }
            Err(e) => {
                log::error!("Failed to initialize renderer: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let Some(state) = &mut self.state {
            if state.handle_window_event(event) || !state.running {
                event_loop.exit();
            }
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("╔════════════════════════════════════════════╗");
    println!("║                 LUNA LANDER                ║");
    println!("╠════════════════════════════════════════════╣");
    println!("║  CONTROLS:                                 ║");
    println!("║    W / Up      - Main engine               ║");
    println!("║    A / Left    - Rotate left               ║");
    println!("║    D / Right   - Rotate right              ║");
    println!("║    R           - Reset lander              ║");
    println!("║    Escape      - Quit                      ║");
    println!("╠════════════════════════════════════════════╣");
    println!("║  Land on the green pad: under 2 m/s and    ║");
    println!("║  within 15 degrees of upright.             ║");
    println!("╚════════════════════════════════════════════╝");

    let config = GameConfig::load();
    log::info!("Starting Luna Lander (seed {})", config.seed);

    let event_loop = EventLoop::new()?;
    // Poll so the simulation advances every frame, not only on input.
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    Ok(())
}
