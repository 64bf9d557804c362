//! Headless autopilot run
//!
//! Drives the simulation without a window, the paddle steered by the
//! autopilot. The native binary uses this in place of a game window.

use crate::consts::SIM_DT;
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

/// What happened during a headless run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Ticks actually simulated
    pub ticks: u64,
    pub wall_bounces: u32,
    pub paddle_hits: u32,
    pub bricks_destroyed: u32,
    pub bricks_remaining: usize,
    pub cleared: bool,
}

/// Run up to `max_ticks` autopilot ticks, stopping early once the board clears
pub fn run_autopilot(state: &mut GameState, max_ticks: u64) -> RunSummary {
    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };
    let mut summary = RunSummary::default();

    for _ in 0..max_ticks {
        tick(state, &input, SIM_DT);
        summary.ticks += 1;

        for event in state.drain_events() {
            match event {
                GameEvent::WallBounce { .. } => summary.wall_bounces += 1,
                GameEvent::PaddleHit => summary.paddle_hits += 1,
                GameEvent::BrickDestroyed { .. } => summary.bricks_destroyed += 1,
                GameEvent::Cleared => summary.cleared = true,
            }
        }

        if state.phase == GamePhase::Cleared {
            break;
        }
    }

    summary.bricks_remaining = state.remaining_bricks();
    log::info!(
        "Autopilot ran {} ticks: {} bricks destroyed, {} remaining, {} paddle hits",
        summary.ticks,
        summary.bricks_destroyed,
        summary.bricks_remaining,
        summary.paddle_hits
    );
    summary
}
