//! wgpu rendering module
//!
//! Paddles and ball are drawn as solid-color triangles; the score uses a
//! small texture atlas.

pub mod glyphs;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use shapes::SceneColors;
pub use vertex::{TexVertex, Vertex};
