//! Paddle motion

use super::rect::Rect;

/// Move a paddle by `dir * speed * dt` if it is not already past the
/// edge it is heading toward.
///
/// The bound is checked before moving, so a paddle can end up to one
/// frame's displacement beyond +1 / -1.
pub fn move_paddle(paddle: &mut Rect, dir: f32, speed: f32, dt: f32) {
    let can_move = (dir > 0.0 && paddle.top() < 1.0) || (dir < 0.0 && paddle.pos.y > -1.0);
    if can_move {
        paddle.pos.y += dir * speed * dt;
    }
}
