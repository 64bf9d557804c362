//! Brick Break - a minimal brick-breaker
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, game state)
//! - `renderer`: WebGPU rendering pipeline
//! - `settings`: Window and board configuration
//! - `headless`: Windowless autopilot run used by the native binary
//! - `input`: Keyboard mapping onto tick input

pub mod headless;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

/// Game configuration constants
///
/// Sizes are derived from the logical screen with integer division so the
/// board tiles the same way at any window scale.
pub mod consts {
    const SCREEN_W: u32 = 320;
    const SCREEN_H: u32 = 240;

    /// Logical screen size (the window is this times `Settings::window_scale`)
    pub const SCREEN_WIDTH: f32 = SCREEN_W as f32;
    pub const SCREEN_HEIGHT: f32 = SCREEN_H as f32;

    /// Fixed simulation rate
    pub const TICK_RATE: f32 = 60.0;
    pub const SIM_DT: f32 = 1.0 / TICK_RATE;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = (SCREEN_W / 15) as f32;
    pub const PADDLE_HEIGHT: f32 = (SCREEN_H / 30) as f32;
    /// Horizontal paddle speed (px/tick)
    pub const PADDLE_SPEED: f32 = (SCREEN_W / 100) as f32;

    /// Ball defaults
    pub const BALL_WIDTH: f32 = (SCREEN_W / 40) as f32;
    pub const BALL_HEIGHT: f32 = (SCREEN_H / 40) as f32;
    /// Per-axis ball speed (px/tick)
    pub const BALL_SPEED: f32 = (SCREEN_W / 150) as f32;

    /// Brick defaults
    pub const BRICK_WIDTH: f32 = (SCREEN_W / 20) as f32;
    pub const BRICK_HEIGHT: f32 = (SCREEN_H / 30) as f32;
}
