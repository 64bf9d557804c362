//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (bricks row-major)
//! - No rendering or platform dependencies

pub mod collision;
pub mod layout;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{ball_brick_hit, ball_paddle_bounce, clamp_paddle, step_axis};
pub use layout::{BrickLayout, LayoutError, build_bricks};
pub use rect::Rect;
pub use state::{Ball, Brick, GameEvent, GamePhase, GameState, Paddle, Wall};
pub use tick::{TickInput, tick};
