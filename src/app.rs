//! Native window and frame loop
//!
//! Each iteration: pending window/key events, then one simulation step
//! with the frame's delta time, then one render. Presentation waits on
//! vsync when enabled; there is no fixed timestep.

use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Fullscreen, Window, WindowId};

use crate::consts::*;
use crate::error::StartupError;
use crate::renderer::RenderState;
use crate::settings::Settings;
use crate::sim::{BallOutcome, FrameClock, GameState, InputState, KeyAction, PaddleKey, tick};

/// Map a physical key to the paddle control it drives
pub fn key_binding(code: KeyCode) -> Option<PaddleKey> {
    match code {
        KeyCode::KeyW => Some(PaddleKey::LeftUp),
        KeyCode::KeyS => Some(PaddleKey::LeftDown),
        KeyCode::ArrowUp => Some(PaddleKey::RightUp),
        KeyCode::ArrowDown => Some(PaddleKey::RightDown),
        _ => None,
    }
}

/// Game instance holding all state
pub struct App {
    settings: Settings,
    state: GameState,
    input: InputState,
    start: Instant,
    /// Started once the renderer is ready, right before the first frame
    clock: Option<FrameClock>,
    window: Option<Arc<Window>>,
    render_state: Option<RenderState>,
    error: Option<StartupError>,
}

impl App {
    pub fn new(settings: Settings, seed: u64) -> Self {
        let state = GameState::new(seed, settings.tuning());
        Self {
            settings,
            state,
            input: InputState::default(),
            start: Instant::now(),
            clock: None,
            window: None,
            render_state: None,
            error: None,
        }
    }

    /// Current game state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The startup failure that ended the loop, if any
    pub fn take_error(&mut self) -> Option<StartupError> {
        self.error.take()
    }

    fn now(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), StartupError> {
        let mut attrs = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT));
        if self.settings.fullscreen {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }
        let window = Arc::new(event_loop.create_window(attrs)?);

        let render_state = pollster::block_on(RenderState::new(window.clone(), &self.settings))?;

        self.window = Some(window);
        self.render_state = Some(render_state);
        self.clock = Some(FrameClock::new(self.now()));
        log::info!("Pong running");
        Ok(())
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, code: KeyCode, state: ElementState) {
        if code == KeyCode::Escape && state == ElementState::Pressed {
            log::info!("Escape pressed, exiting");
            event_loop.exit();
            return;
        }

        if let Some(key) = key_binding(code) {
            let action = match state {
                ElementState::Pressed => KeyAction::Press,
                ElementState::Released => KeyAction::Release,
            };
            self.input.apply(key, action);
        }
    }

    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let now = self.now();
        let Some(clock) = self.clock.as_mut() else {
            return;
        };
        let dt = clock.tick(now);

        if let BallOutcome::Scored(side) = tick(&mut self.state, &self.input, dt) {
            log::debug!("Round reset after {:?} point", side);
        }

        let Some(render_state) = self.render_state.as_mut() else {
            return;
        };
        match render_state.render(&self.state) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let (w, h) = render_state.size;
                render_state.resize(w, h);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of GPU memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init(event_loop) {
            log::error!("{}", e);
            self.error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(render_state) = self.render_state.as_mut() {
                    render_state.resize(size.width, size.height);
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        ..
                    },
                ..
            } => self.handle_key(event_loop, code, state),
            WindowEvent::RedrawRequested => self.frame(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Open the window and run until Escape or close
pub fn run(settings: Settings, seed: u64) -> Result<(), StartupError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(settings, seed);
    event_loop.run_app(&mut app)?;

    let score = app.state().score;
    log::info!("Final score: {} - {}", score.left, score.right);

    match app.take_error() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
