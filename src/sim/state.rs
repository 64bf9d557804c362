//! Game state and core simulation types
//!
//! Everything the tick needs lives here; nothing here touches the renderer.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::layout::{BrickLayout, build_bricks};
use super::rect::Rect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Every brick is gone; the ball stops until restart
    Cleared,
}

/// Screen edge hit by the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wall {
    Left,
    Right,
    Top,
    Bottom,
}

/// Something notable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    WallBounce { wall: Wall },
    PaddleHit,
    BrickDestroyed { id: u32 },
    Cleared,
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
}

impl Default for Paddle {
    fn default() -> Self {
        // Start at the bottom left
        Self {
            rect: Rect::new(
                0.0,
                SCREEN_HEIGHT - PADDLE_HEIGHT,
                PADDLE_WIDTH,
                PADDLE_HEIGHT,
            ),
        }
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub rect: Rect,
    /// Velocity in px/tick
    pub vel: Vec2,
}

impl Ball {
    /// Ball at the screen center heading down and to the right
    pub fn serve() -> Self {
        Self {
            rect: Rect::new(
                SCREEN_WIDTH / 2.0,
                SCREEN_HEIGHT / 2.0,
                BALL_WIDTH,
                BALL_HEIGHT,
            ),
            vel: Vec2::new(BALL_SPEED, BALL_SPEED),
        }
    }

    /// Centered serve heading down, horizontal direction from `rng`
    pub fn serve_random(rng: &mut Pcg32) -> Self {
        let mut ball = Self::serve();
        if rng.random_bool(0.5) {
            ball.vel.x = -ball.vel.x;
        }
        ball
    }
}

/// A brick in the wall
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub id: u32,
    pub rect: Rect,
    pub alive: bool,
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Wall shape used for this board and on restart
    pub layout: BrickLayout,
    /// Serve direction drawn from the seed instead of always down-right
    #[serde(default)]
    pub random_serve: bool,
    /// Current phase
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Bricks in row-major order (stable iteration order)
    pub bricks: Vec<Brick>,
    /// Events raised since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh board with the standard down-right serve
    pub fn new(seed: u64, layout: BrickLayout) -> Self {
        Self::with_serve(seed, layout, false)
    }

    /// Create a fresh board, optionally serving in a seeded random direction
    pub fn with_serve(seed: u64, layout: BrickLayout, random_serve: bool) -> Self {
        let bricks = build_bricks(&layout);
        log::info!("New board: seed={}, {} bricks", seed, bricks.len());

        let ball = if random_serve {
            Ball::serve_random(&mut Pcg32::seed_from_u64(seed))
        } else {
            Ball::serve()
        };

        Self {
            seed,
            layout,
            random_serve,
            phase: GamePhase::Playing,
            time_ticks: 0,
            paddle: Paddle::default(),
            ball,
            bricks,
            events: Vec::new(),
        }
    }

    /// Rebuild the board from the stored seed, layout and serve mode
    pub fn reset(&mut self) {
        *self = Self::with_serve(self.seed, self.layout, self.random_serve);
    }

    /// Bricks still standing
    pub fn remaining_bricks(&self) -> usize {
        self.bricks.iter().filter(|b| b.alive).count()
    }

    /// Take the events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
