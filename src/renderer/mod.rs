//! WebGPU rendering module
//!
//! Flat-colored triangles in logical screen space, letterboxed onto the surface.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderError, RenderState, logical_to_ndc};
pub use shapes::scene_vertices;
pub use vertex::Vertex;
