//! Duo Pong - two paddles, one ball, drawn as triangles with wgpu
//!
//! Core modules:
//! - `sim`: Simulation (paddles, ball physics, scoring, round reset)
//! - `renderer`: wgpu render pipeline and per-frame draw sequence
//! - `app`: winit window, input mapping and the frame loop
//! - `settings`: Optional JSON settings file
//! - `error`: Fatal startup errors and their exit codes

pub mod app;
pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::StartupError;
pub use settings::Settings;

/// Game configuration constants
///
/// All lengths are in normalized device coordinates.
pub mod consts {
    /// Paddle width as passed to `Rect::new` (stored halved)
    pub const PADDLE_WIDTH: f32 = 0.03;
    pub const PADDLE_HEIGHT: f32 = 0.4;
    /// Paddle travel per second
    pub const PADDLE_SPEED: f32 = 10.0;
    /// Paddle y (bottom edge) when vertically centered
    pub const PADDLE_REST_Y: f32 = -PADDLE_HEIGHT / 2.0;

    /// Ball width and height as passed to `Rect::new`
    pub const BALL_SIZE: f32 = 0.1;
    pub const BALL_SPEED_INITIAL: f32 = 0.5;
    /// Added to the ball speed on every horizontal bounce (no cap)
    pub const BALL_SPEED_INCREASE: f32 = 0.1;

    /// Window defaults
    pub const WINDOW_TITLE: &str = "Pong";
    pub const WINDOW_WIDTH: u32 = 1920;
    pub const WINDOW_HEIGHT: u32 = 1080;
}
