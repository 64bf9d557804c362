//! Shape generation for 2D primitives
//!
//! Everything on screen is a filled rectangle in logical screen space.

use super::vertex::{Rgba, Vertex, colors};
use crate::consts::{BRICK_HEIGHT, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::{Brick, BrickLayout, GamePhase, GameState, Rect};

/// Vertices per filled rectangle (two triangles)
pub const RECT_VERTICES: usize = 6;

/// Generate vertices for a filled rectangle
pub fn rect(r: &Rect, color: Rgba) -> [Vertex; RECT_VERTICES] {
    let (l, t, rt, b) = (r.left(), r.top(), r.right(), r.bottom());
    [
        Vertex::at(r.pos, color),
        Vertex::new(l, b, color),
        Vertex::new(rt, t, color),
        Vertex::new(rt, t, color),
        Vertex::new(l, b, color),
        Vertex::new(rt, b, color),
    ]
}

/// Wall row a brick sits in, counted from the top of the wall
pub fn brick_row(brick: &Brick, layout: &BrickLayout) -> u32 {
    ((brick.rect.top() / BRICK_HEIGHT) as u32).saturating_sub(layout.top_margin_rows)
}

/// Build the full frame: background, live bricks, paddle, ball
pub fn scene_vertices(state: &GameState) -> Vec<Vertex> {
    let live = state.remaining_bricks();
    let mut vertices = Vec::with_capacity((live + 4) * RECT_VERTICES);
    let screen = Rect::new(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT);

    vertices.extend(rect(&screen, colors::BACKGROUND));
    for brick in state.bricks.iter().filter(|b| b.alive) {
        let color = colors::brick(brick_row(brick, &state.layout));
        vertices.extend(rect(&brick.rect, color));
    }
    vertices.extend(rect(&state.paddle.rect, colors::PADDLE));
    vertices.extend(rect(&state.ball.rect, colors::BALL));

    if state.phase == GamePhase::Paused {
        vertices.extend(rect(&screen, colors::PAUSED_TINT));
    }

    vertices
}
