//! Pong simulation
//!
//! All gameplay logic lives here. No rendering or windowing dependencies:
//! the frame loop feeds in delta times and key edges and reads back state.

pub mod clock;
pub mod input;
pub mod paddle;
pub mod rect;
pub mod state;
pub mod tick;

pub use clock::FrameClock;
pub use input::{InputState, KeyAction, PaddleKey};
pub use paddle::move_paddle;
pub use rect::Rect;
pub use state::{Ball, GameState, Score, Side, Tuning, normalize_by_sum};
pub use tick::{BallOutcome, move_ball, tick};
