//! Game state and core simulation types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::rect::Rect;
use crate::consts::*;

/// Sums of the random velocity components closer to zero than this are resampled
pub const NORMALIZE_EPSILON: f32 = 1e-3;

/// Largest magnitude of a single velocity component after a reset
pub const MAX_VEL: f32 = 1.0;

/// Which side of the court
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// The ball: a rectangle plus a direction.
///
/// Speed is not stored here; it is [`GameState::ball_speed`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub rect: Rect,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(x: f32, y: f32, size: f32, vel: Vec2) -> Self {
        Self {
            rect: Rect::new(x, y, size, size),
            vel,
        }
    }
}

/// Points per side. Only ever incremented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Speed constants the simulation reads every tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    /// Paddle travel per second at full input
    pub paddle_speed: f32,
    /// Ball speed after every reset
    pub ball_speed_initial: f32,
    /// Added to the ball speed on every horizontal bounce
    pub ball_speed_increase: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            paddle_speed: PADDLE_SPEED,
            ball_speed_initial: BALL_SPEED_INITIAL,
            ball_speed_increase: BALL_SPEED_INCREASE,
        }
    }
}

/// Everything the simulation loop mutates
#[derive(Debug, Clone)]
pub struct GameState {
    pub left_paddle: Rect,
    pub right_paddle: Rect,
    pub ball: Ball,
    /// Scalar applied to `ball.vel` each tick
    pub ball_speed: f32,
    pub score: Score,
    pub tuning: Tuning,
    rng: Pcg32,
}

impl GameState {
    /// Create a new match and serve the first ball
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let mut state = Self {
            left_paddle: Rect::new(-1.0, PADDLE_REST_Y, PADDLE_WIDTH, PADDLE_HEIGHT),
            right_paddle: Rect::new(
                1.0 - PADDLE_WIDTH,
                PADDLE_REST_Y,
                PADDLE_WIDTH,
                PADDLE_HEIGHT,
            ),
            ball: Ball::new(0.0, 0.0, BALL_SIZE, Vec2::ZERO),
            ball_speed: tuning.ball_speed_initial,
            score: Score::default(),
            tuning,
            rng: Pcg32::seed_from_u64(seed),
        };
        state.reset_round();
        state
    }

    /// Re-center the ball and paddles and serve in a new random direction
    pub fn reset_round(&mut self) {
        self.ball.rect.pos = Vec2::ZERO;
        self.ball.vel = self.random_direction();
        self.ball_speed = self.tuning.ball_speed_initial;
        self.left_paddle.pos.y = PADDLE_REST_Y;
        self.right_paddle.pos.y = PADDLE_REST_Y;
    }

    /// Score a point for `side` and start the next round
    pub fn award_point(&mut self, side: Side) {
        self.score.award(side);
        log::info!(
            "{:?} scores: {} - {}",
            side,
            self.score.left,
            self.score.right
        );
        self.reset_round();
    }

    fn random_direction(&mut self) -> Vec2 {
        loop {
            let candidate = Vec2::new(
                self.rng.random_range(-1.0..=1.0),
                self.rng.random_range(-1.0..=1.0),
            );
            if let Some(dir) = normalize_by_sum(candidate) {
                return dir;
            }
        }
    }
}

/// Divide both components by their sum, then clamp each to `[-MAX_VEL, MAX_VEL]`.
///
/// Returns `None` when the sum is within [`NORMALIZE_EPSILON`] of zero.
/// The result is generally not unit length.
pub fn normalize_by_sum(vel: Vec2) -> Option<Vec2> {
    let total = vel.x + vel.y;
    if total.abs() < NORMALIZE_EPSILON {
        return None;
    }
    Some((vel / total).clamp(Vec2::splat(-MAX_VEL), Vec2::splat(MAX_VEL)))
}
