//! Brick wall layout
//!
//! Bricks tile the screen width row by row, leaving a margin above the wall.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::Brick;
use crate::consts::*;

/// Why a brick layout can't be played
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutError {
    /// The wall has no rows
    NoRows,
    /// The lowest row reaches down into the paddle row
    ReachesPaddle { wall_bottom: f32, paddle_top: f32 },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::NoRows => write!(f, "brick layout needs at least one row"),
            LayoutError::ReachesPaddle {
                wall_bottom,
                paddle_top,
            } => write!(
                f,
                "brick wall reaches y={} but the paddle row starts at y={}",
                wall_bottom, paddle_top
            ),
        }
    }
}

impl std::error::Error for LayoutError {}

/// Shape of the brick wall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrickLayout {
    /// Number of brick rows
    pub rows: u32,
    /// Empty rows (in brick heights) above the wall
    pub top_margin_rows: u32,
}

impl Default for BrickLayout {
    fn default() -> Self {
        Self {
            rows: 5,
            top_margin_rows: 2,
        }
    }
}

impl BrickLayout {
    /// Bricks that fit across the screen
    pub fn columns(&self) -> u32 {
        (SCREEN_WIDTH / BRICK_WIDTH).floor() as u32
    }

    /// Y coordinate of the bottom edge of the lowest row
    pub fn wall_bottom(&self) -> f32 {
        (self.top_margin_rows + self.rows) as f32 * BRICK_HEIGHT
    }

    /// Check the wall is non-empty and stays clear of the paddle row
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.rows == 0 {
            return Err(LayoutError::NoRows);
        }
        let paddle_top = SCREEN_HEIGHT - PADDLE_HEIGHT;
        let wall_bottom = self.wall_bottom();
        if wall_bottom >= paddle_top {
            return Err(LayoutError::ReachesPaddle {
                wall_bottom,
                paddle_top,
            });
        }
        Ok(())
    }
}

/// Lay out the wall row-major; brick ids ascend from 1
pub fn build_bricks(layout: &BrickLayout) -> Vec<Brick> {
    if SCREEN_WIDTH % BRICK_WIDTH != 0.0 {
        log::warn!(
            "bricks will not tile horizontally because the screen width is not divisible by the brick width"
        );
    }

    let columns = layout.columns();
    let mut bricks = Vec::with_capacity((columns * layout.rows) as usize);
    let mut next_id = 1;

    for row in 0..layout.rows {
        let y = (layout.top_margin_rows + row) as f32 * BRICK_HEIGHT;
        for col in 0..columns {
            let x = col as f32 * BRICK_WIDTH;
            bricks.push(Brick {
                id: next_id,
                rect: Rect::new(x, y, BRICK_WIDTH, BRICK_HEIGHT),
                alive: true,
            });
            next_id += 1;
        }
    }

    log::debug!(
        "Built {} bricks ({} rows x {} columns)",
        bricks.len(),
        layout.rows,
        columns
    );
    bricks
}
