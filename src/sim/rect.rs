//! Axis-aligned rectangle primitive
//!
//! Positions and sizes are in normalized device coordinates ([-1, 1] on
//! both axes), with `pos` at the bottom-left corner.

use glam::Vec2;

/// Number of floats describing one triangle (3 vertices x 3 coordinates)
pub const TRIANGLE_FLOATS: usize = 9;

/// A rectangle that renders as two triangles.
///
/// `width` holds **half** of the width passed to [`Rect::new`]. Collision
/// and vertex generation both read the stored value as-is, so the drawn
/// shape and the collision box always agree. Keep that convention when
/// adding new consumers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            width: (width / 2.0).abs(),
            height: height.abs(),
        }
    }

    /// Top edge (y + height)
    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y + self.height
    }

    /// Right edge (x + stored width)
    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }

    /// True if the vertical extents of the two rectangles overlap (open interval)
    #[inline]
    pub fn overlaps_vertically(&self, other: &Rect) -> bool {
        self.top() > other.pos.y && self.pos.y < other.top()
    }

    /// The two triangles covering this rectangle, z = 0.
    ///
    /// Triangle 1 is bottom-left, bottom-right, top-left; triangle 2 is
    /// bottom-right, top-right, top-left.
    pub fn triangles(&self) -> [[f32; TRIANGLE_FLOATS]; 2] {
        let (x, y) = (self.pos.x, self.pos.y);
        let (r, t) = (self.right(), self.top());
        [
            [x, y, 0.0, r, y, 0.0, x, t, 0.0],
            [r, y, 0.0, r, t, 0.0, x, t, 0.0],
        ]
    }
}
