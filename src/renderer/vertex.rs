//! Vertex layout and palette
//!
//! Positions are logical screen pixels; `logical_to_ndc` maps them to clip
//! space before upload.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Linear RGBA
pub type Rgba = [f32; 4];

/// Corner of a flat-coloured triangle
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: Rgba,
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    pub const fn new(x: f32, y: f32, color: Rgba) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn at(pos: Vec2, color: Rgba) -> Self {
        Self::new(pos.x, pos.y, color)
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Brick Break palette
pub mod colors {
    use super::Rgba;

    pub const BACKGROUND: Rgba = [0.04, 0.04, 0.08, 1.0];
    /// Letterbox bars around the logical screen
    pub const LETTERBOX: Rgba = [0.0, 0.0, 0.0, 1.0];
    pub const PADDLE: Rgba = [0.92, 0.92, 0.96, 1.0];
    pub const BALL: Rgba = [1.0, 1.0, 1.0, 1.0];
    /// Dimmed overlay while paused
    pub const PAUSED_TINT: Rgba = [0.0, 0.0, 0.0, 0.5];

    /// Brick colours from the top row down, repeating for taller walls
    pub const BRICK_ROWS: [Rgba; 5] = [
        [0.86, 0.20, 0.20, 1.0],
        [0.93, 0.55, 0.18, 1.0],
        [0.95, 0.85, 0.25, 1.0],
        [0.30, 0.75, 0.35, 1.0],
        [0.25, 0.50, 0.90, 1.0],
    ];

    /// Colour of the brick row `row` (0 = top of the wall)
    pub fn brick(row: u32) -> Rgba {
        BRICK_ROWS[row as usize % BRICK_ROWS.len()]
    }
}
