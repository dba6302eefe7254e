//! Vertex generation for the playfield
//!
//! Draw order is fixed: left paddle, right paddle, ball.

use super::vertex::Vertex;
use crate::sim::{GameState, Rect};

/// Vertices per rectangle (two triangles)
pub const RECT_VERTICES: usize = 6;

/// Vertices for one frame of the playfield
pub const SCENE_VERTICES: usize = 3 * RECT_VERTICES;

/// Colors for the solid-color program
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneColors {
    pub paddle: [f32; 4],
    pub ball: [f32; 4],
}

/// Generate the six vertices of a rectangle
pub fn rect(rect: &Rect, color: [f32; 4]) -> [Vertex; RECT_VERTICES] {
    let [t1, t2] = rect.triangles();
    let mut vertices = [Vertex::new(0.0, 0.0, 0.0, color); RECT_VERTICES];
    for (i, tri) in [t1, t2].iter().enumerate() {
        for (j, corner) in tri.chunks_exact(3).enumerate() {
            vertices[i * 3 + j] = Vertex::new(corner[0], corner[1], corner[2], color);
        }
    }
    vertices
}

/// Generate every playfield vertex in draw order
pub fn scene(state: &GameState, colors: &SceneColors) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(SCENE_VERTICES);
    vertices.extend_from_slice(&rect(&state.left_paddle, colors.paddle));
    vertices.extend_from_slice(&rect(&state.right_paddle, colors.paddle));
    vertices.extend_from_slice(&rect(&state.ball.rect, colors.ball));
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Tuning;

    const WHITE: [f32; 4] = [1.0; 4];
    const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

    #[test]
    fn test_rect_matches_triangles() {
        let r = Rect::new(0.1, 0.2, 0.4, 0.3);
        let vertices = rect(&r, WHITE);
        let [t1, t2] = r.triangles();
        let flat: Vec<f32> = t1.iter().chain(t2.iter()).copied().collect();

        let from_vertices: Vec<f32> = vertices.iter().flat_map(|v| v.position).collect();
        assert_eq!(from_vertices, flat);
        assert!(vertices.iter().all(|v| v.color == WHITE));
    }

    #[test]
    fn test_scene_draw_order() {
        let state = GameState::new(1, Tuning::default());
        let colors = SceneColors {
            paddle: WHITE,
            ball: RED,
        };
        let vertices = scene(&state, &colors);

        assert_eq!(vertices.len(), SCENE_VERTICES);
        assert_eq!(&vertices[0..6], &rect(&state.left_paddle, WHITE));
        assert_eq!(&vertices[6..12], &rect(&state.right_paddle, WHITE));
        assert_eq!(&vertices[12..18], &rect(&state.ball.rect, RED));
    }

    #[test]
    fn test_scene_is_idempotent() {
        let state = GameState::new(8, Tuning::default());
        let colors = SceneColors {
            paddle: WHITE,
            ball: WHITE,
        };
        assert_eq!(scene(&state, &colors), scene(&state, &colors));
    }
}
