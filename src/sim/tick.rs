//! Per-frame simulation step
//!
//! Advances the game by a variable delta time: paddles first, then the ball.

use super::input::InputState;
use super::paddle::move_paddle;
use super::state::{GameState, Side};

/// What happened to the ball horizontally during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallOutcome {
    /// No horizontal bounce or score
    Moved,
    /// Reflected off a paddle or the side bound; speed increased
    Bounced,
    /// Crossed a side bound; the round was reset
    Scored(Side),
}

/// Advance the ball one tick: integrate, bounce, score.
pub fn move_ball(state: &mut GameState, dt: f32) -> BallOutcome {
    let speed = state.ball_speed;
    let ball = &mut state.ball;

    ball.rect.pos += ball.vel * speed * dt;

    if ball.rect.pos.y.abs() + ball.rect.height >= 1.0 {
        ball.vel.y = -ball.vel.y;
        log::debug!("Wall bounce at y={:.3}", ball.rect.pos.y);
    }

    let rect = ball.rect;
    let left = &state.left_paddle;
    let right = &state.right_paddle;

    let hit_left = rect.overlaps_vertically(left) && rect.pos.x <= left.right();
    let hit_right = rect.overlaps_vertically(right) && rect.right() >= right.pos.x;
    let bounce_x = rect.pos.x.abs() >= 1.0 || hit_left || hit_right;

    if bounce_x {
        ball.vel.x = -ball.vel.x;
        state.ball_speed += state.tuning.ball_speed_increase;
        log::debug!("Horizontal bounce, ball speed now {:.2}", state.ball_speed);
    }

    let x = state.ball.rect.pos.x;
    if x <= -1.0 {
        state.award_point(Side::Right);
        BallOutcome::Scored(Side::Right)
    } else if x >= 1.0 {
        state.award_point(Side::Left);
        BallOutcome::Scored(Side::Left)
    } else if bounce_x {
        BallOutcome::Bounced
    } else {
        BallOutcome::Moved
    }
}

/// Advance the whole game by `dt` seconds
pub fn tick(state: &mut GameState, input: &InputState, dt: f32) -> BallOutcome {
    let paddle_speed = state.tuning.paddle_speed;
    move_paddle(&mut state.left_paddle, input.left_dir, paddle_speed, dt);
    move_paddle(&mut state.right_paddle, input.right_dir, paddle_speed, dt);
    move_ball(state, dt)
}

#[cfg(test)]
mod tests {
    use glam::Vec2;
    use proptest::prelude::*;

    use super::*;
    use crate::consts::*;
    use crate::sim::state::Tuning;

    fn state_with_ball(pos: Vec2, vel: Vec2, speed: f32) -> GameState {
        let mut state = GameState::new(12345, Tuning::default());
        state.ball.rect.pos = pos;
        state.ball.vel = vel;
        state.ball_speed = speed;
        state
    }

    #[test]
    fn test_linear_integration() {
        let mut state = state_with_ball(Vec2::new(0.1, -0.2), Vec2::new(0.6, 0.8), 0.5);
        let outcome = move_ball(&mut state, 0.1);

        assert_eq!(outcome, BallOutcome::Moved);
        assert!((state.ball.rect.pos.x - 0.13).abs() < 1e-6);
        assert!((state.ball.rect.pos.y - (-0.16)).abs() < 1e-6);
        assert_eq!(state.ball_speed, 0.5);
    }

    #[test]
    fn test_zero_dt_keeps_position() {
        let mut state = state_with_ball(Vec2::new(0.3, 0.4), Vec2::new(1.0, -1.0), 2.0);
        move_ball(&mut state, 0.0);
        assert_eq!(state.ball.rect.pos, Vec2::new(0.3, 0.4));
    }

    #[test]
    fn test_score_left_at_right_bound() {
        // Move the right paddle out of the ball's path
        let mut state = state_with_ball(Vec2::new(0.95, 0.0), Vec2::new(0.2, 0.0), 0.5);
        state.right_paddle.pos.y = 0.5;

        let outcome = move_ball(&mut state, 0.5);

        assert_eq!(outcome, BallOutcome::Scored(Side::Left));
        assert_eq!(state.score.left, 1);
        assert_eq!(state.score.right, 0);
        assert_eq!(state.ball.rect.pos, Vec2::ZERO);
        assert_eq!(state.ball_speed, BALL_SPEED_INITIAL);
        assert_eq!(state.right_paddle.pos.y, PADDLE_REST_Y);
    }

    #[test]
    fn test_score_right_at_left_bound() {
        let mut state = state_with_ball(Vec2::new(-0.9, 0.0), Vec2::new(-1.0, 0.0), 1.0);
        state.left_paddle.pos.y = -0.9;

        let outcome = move_ball(&mut state, 0.2);

        assert_eq!(outcome, BallOutcome::Scored(Side::Right));
        assert_eq!(state.score.right, 1);
        assert_eq!(state.score.left, 0);
        assert_eq!(state.ball.rect.pos, Vec2::ZERO);
    }

    #[test]
    fn test_top_bound_inverts_vertical_velocity() {
        let mut state = state_with_ball(Vec2::new(0.0, 0.91), Vec2::new(0.0, 0.3), 0.5);
        let dt = 0.01;

        move_ball(&mut state, dt);

        assert_eq!(state.ball.vel.y, -0.3);
        // Position integrates before the inversion
        assert!((state.ball.rect.pos.y - (0.91 + 0.3 * 0.5 * dt)).abs() < 1e-6);
    }

    #[test]
    fn test_bottom_bound_inverts_vertical_velocity() {
        // |y| + height = 0.95 + 0.1 >= 1
        let mut state = state_with_ball(Vec2::new(0.0, -0.95), Vec2::new(0.1, -0.4), 0.5);
        move_ball(&mut state, 0.0);
        assert_eq!(state.ball.vel.y, 0.4);
        assert_eq!(state.ball.vel.x, 0.1);
    }

    #[test]
    fn test_left_paddle_bounce() {
        // Left paddle spans y in [-0.2, 0.2], right edge at -0.985; ball ends at x = -0.99
        let mut state = state_with_ball(Vec2::new(-0.97, 0.0), Vec2::new(-0.5, 0.1), 1.0);
        let outcome = move_ball(&mut state, 0.04);

        assert_eq!(outcome, BallOutcome::Bounced);
        assert_eq!(state.ball.vel.x, 0.5);
        assert!((state.ball_speed - (1.0 + BALL_SPEED_INCREASE)).abs() < 1e-6);
    }

    #[test]
    fn test_right_paddle_bounce() {
        // Right paddle starts at x = 0.97; ball right edge = x + 0.05
        let mut state = state_with_ball(Vec2::new(0.91, -0.1), Vec2::new(0.5, 0.0), 1.0);
        let outcome = move_ball(&mut state, 0.04);

        assert_eq!(outcome, BallOutcome::Bounced);
        assert_eq!(state.ball.vel.x, -0.5);
        assert!((state.ball_speed - (1.0 + BALL_SPEED_INCREASE)).abs() < 1e-6);
    }

    #[test]
    fn test_missed_paddle_no_bounce() {
        // Ball passes above the right paddle
        let mut state = state_with_ball(Vec2::new(0.91, 0.5), Vec2::new(0.5, 0.0), 1.0);
        let outcome = move_ball(&mut state, 0.04);

        assert_eq!(outcome, BallOutcome::Moved);
        assert_eq!(state.ball.vel.x, 0.5);
        assert_eq!(state.ball_speed, 1.0);
    }

    #[test]
    fn test_speed_ratchets_every_bounce() {
        let mut state = state_with_ball(Vec2::new(-0.99, 0.0), Vec2::new(-0.5, 0.0), 1.0);
        for n in 1..=3 {
            state.ball.rect.pos = Vec2::new(-0.99, 0.0);
            state.ball.vel.x = -0.5;
            move_ball(&mut state, 0.0);
            let expected = 1.0 + n as f32 * BALL_SPEED_INCREASE;
            assert!((state.ball_speed - expected).abs() < 1e-5);
        }
    }

    #[test]
    fn test_tick_moves_paddles_with_input() {
        let mut state = state_with_ball(Vec2::ZERO, Vec2::ZERO, 0.0);
        let input = InputState {
            left_dir: 1.0,
            right_dir: -1.0,
        };

        tick(&mut state, &input, 0.01);

        assert!((state.left_paddle.pos.y - (PADDLE_REST_Y + PADDLE_SPEED * 0.01)).abs() < 1e-6);
        assert!((state.right_paddle.pos.y - (PADDLE_REST_Y - PADDLE_SPEED * 0.01)).abs() < 1e-6);
    }

    #[test]
    fn test_tick_custom_tuning() {
        let tuning = Tuning {
            paddle_speed: 2.0,
            ball_speed_initial: 0.25,
            ball_speed_increase: 0.5,
        };
        let mut state = GameState::new(3, tuning);
        assert_eq!(state.ball_speed, 0.25);

        let input = InputState {
            left_dir: -1.0,
            right_dir: 0.0,
        };
        tick(&mut state, &input, 0.1);
        assert!((state.left_paddle.pos.y - (PADDLE_REST_Y - 0.2)).abs() < 1e-6);
        assert_eq!(state.right_paddle.pos.y, PADDLE_REST_Y);
    }

    #[test]
    fn test_rally_keeps_ball_in_play() {
        // Both paddles idle and centered, ball served flat: it should
        // bounce between them without anyone scoring.
        let mut state = state_with_ball(Vec2::new(0.0, -0.05), Vec2::new(1.0, 0.0), 0.5);
        let input = InputState::default();
        let mut bounces = 0;
        for _ in 0..2000 {
            match tick(&mut state, &input, 1.0 / 120.0) {
                BallOutcome::Bounced => bounces += 1,
                BallOutcome::Scored(side) => panic!("{side:?} scored during a flat rally"),
                BallOutcome::Moved => {}
            }
        }
        assert!(bounces >= 2);
    }

    proptest! {
        #[test]
        fn prop_linear_integration_law(
            x in -0.5f32..0.5,
            y in -0.5f32..0.5,
            vx in -1.0f32..=1.0,
            vy in -1.0f32..=1.0,
            dt in 0.0f32..0.5,
        ) {
            let mut state = state_with_ball(Vec2::new(x, y), Vec2::new(vx, vy), 0.5);
            let outcome = move_ball(&mut state, dt);

            prop_assert_eq!(outcome, BallOutcome::Moved);
            prop_assert_eq!(state.ball.rect.pos.x, x + vx * 0.5 * dt);
            prop_assert_eq!(state.ball.rect.pos.y, y + vy * 0.5 * dt);
        }

        #[test]
        fn prop_scoring_is_exclusive(
            x in -1.5f32..1.5,
            y in -0.9f32..0.8,
            vx in -1.0f32..=1.0,
            dt in 0.0f32..0.2,
            seed in any::<u64>(),
        ) {
            let mut state = GameState::new(seed, Tuning::default());
            state.ball.rect.pos = Vec2::new(x, y);
            state.ball.vel = Vec2::new(vx, 0.0);

            let before = state.score;
            let outcome = move_ball(&mut state, dt);
            let gained = (state.score.left - before.left) + (state.score.right - before.right);

            match outcome {
                BallOutcome::Scored(side) => {
                    prop_assert_eq!(gained, 1);
                    prop_assert_eq!(state.score.get(side), before.get(side) + 1);
                    prop_assert_eq!(state.ball.rect.pos, Vec2::ZERO);
                    prop_assert_eq!(state.ball_speed, BALL_SPEED_INITIAL);
                }
                _ => prop_assert_eq!(gained, 0),
            }
        }

        #[test]
        fn prop_reset_invariants(seed in any::<u64>(), rounds in 1usize..20) {
            let mut state = GameState::new(seed, Tuning::default());
            for _ in 0..rounds {
                state.ball_speed = 9.0;
                state.left_paddle.pos.y = 0.3;
                state.reset_round();

                prop_assert_eq!(state.ball.rect.pos, Vec2::ZERO);
                prop_assert_eq!(state.ball_speed, BALL_SPEED_INITIAL);
                prop_assert_eq!(state.left_paddle.pos.y, PADDLE_REST_Y);
                prop_assert_eq!(state.right_paddle.pos.y, PADDLE_REST_Y);
                prop_assert!(state.ball.vel.x.abs() <= 1.0);
                prop_assert!(state.ball.vel.y.abs() <= 1.0);
            }
        }
    }
}
