//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use super::collision::{Bounce, ball_brick_hit, ball_paddle_bounce, clamp_paddle, step_axis};
use super::state::{GameEvent, GamePhase, GameState, Wall};
use crate::consts::*;

/// Paddle center within this many px of the ball center counts as lined up
const AUTOPILOT_DEAD_ZONE: f32 = 2.0;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Left arrow held
    pub left: bool,
    /// Right arrow held
    pub right: bool,
    /// Pause toggle
    pub pause: bool,
    /// Rebuild the board
    pub restart: bool,
    /// Autopilot - paddle follows the ball
    pub idle_mode: bool,
}

impl TickInput {
    /// Left/right steering that keeps the paddle under the ball
    pub fn autopilot(state: &GameState) -> Self {
        let paddle_x = state.paddle.rect.center().x;
        let ball_x = state.ball.rect.center().x;
        let delta = ball_x - paddle_x;
        Self {
            left: delta < -AUTOPILOT_DEAD_ZONE,
            right: delta > AUTOPILOT_DEAD_ZONE,
            ..Default::default()
        }
    }
}

/// Advance the game state by one fixed timestep
///
/// Speeds are in px/tick, so movement is scaled by `dt * TICK_RATE`; at
/// `SIM_DT` that factor is exactly 1 and positions stay on whole pixels.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.restart {
        log::info!("Restarting board (seed {})", state.seed);
        state.reset();
        return;
    }

    // Handle pause toggle
    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                log::info!("Paused at tick {}", state.time_ticks);
                return;
            }
            GamePhase::Paused => {
                state.phase = GamePhase::Playing;
                log::info!("Resumed at tick {}", state.time_ticks);
            }
            GamePhase::Cleared => {}
        }
    }

    // Don't tick if paused or cleared
    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;
    let ticks = dt * TICK_RATE;

    let steer = if input.idle_mode {
        TickInput::autopilot(state)
    } else {
        input.clone()
    };
    move_paddle(state, &steer, ticks);
    move_ball(state, ticks);

    if ball_paddle_bounce(&mut state.ball, &state.paddle) {
        log::debug!("Paddle hit at x={}", state.ball.rect.left());
        state.events.push(GameEvent::PaddleHit);
    }

    if let Some(id) = ball_brick_hit(&mut state.ball, &mut state.bricks) {
        log::debug!("Brick {} destroyed", id);
        state.events.push(GameEvent::BrickDestroyed { id });

        if state.remaining_bricks() == 0 {
            log::info!("Board cleared in {} ticks", state.time_ticks);
            state.phase = GamePhase::Cleared;
            state.events.push(GameEvent::Cleared);
        }
    }
}

fn move_paddle(state: &mut GameState, input: &TickInput, ticks: f32) {
    let paddle = &mut state.paddle.rect;
    let step = PADDLE_SPEED * ticks;
    let next_x = match (input.left, input.right) {
        // Both held cancel out
        (true, true) | (false, false) => return,
        (true, false) => paddle.left() - step,
        (false, true) => paddle.left() + step,
    };
    paddle.pos.x = clamp_paddle(next_x, paddle.width());
}

fn move_ball(state: &mut GameState, ticks: f32) {
    let ball = &mut state.ball;

    let (x, vx, bounce_x) = step_axis(
        ball.rect.pos.x,
        ball.vel.x,
        ball.rect.width(),
        SCREEN_WIDTH,
        ticks,
    );
    ball.rect.pos.x = x;
    ball.vel.x = vx;
    if let Some(bounce) = bounce_x {
        let wall = match bounce {
            Bounce::Low => Wall::Left,
            Bounce::High => Wall::Right,
        };
        state.events.push(GameEvent::WallBounce { wall });
    }

    // mirror of x
    let (y, vy, bounce_y) = step_axis(
        ball.rect.pos.y,
        ball.vel.y,
        ball.rect.height(),
        SCREEN_HEIGHT,
        ticks,
    );
    ball.rect.pos.y = y;
    ball.vel.y = vy;
    if let Some(bounce) = bounce_y {
        let wall = match bounce {
            Bounce::Low => Wall::Top,
            Bounce::High => Wall::Bottom,
        };
        state.events.push(GameEvent::WallBounce { wall });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::layout::BrickLayout;
    use crate::sim::rect::Rect;
    use crate::sim::state::Brick;
    use glam::Vec2;

    /// Board with no bricks in the way (an empty wall never counts as cleared)
    fn open_board(seed: u64) -> GameState {
        let mut state = GameState::new(seed, BrickLayout::default());
        state.bricks.clear();
        state.ball.rect.pos = Vec2::new(150.0, 100.0);
        state
    }

    #[test]
    fn test_paddle_moves_and_clamps_left() {
        let mut state = open_board(1);
        state.paddle.rect.pos.x = 4.0;
        let input = TickInput {
            left: true,
            ..Default::default()
        };

        tick(&mut state, &input, SIM_DT);
        assert_eq!(state.paddle.rect.left(), 1.0);

        // Locks to the side of the screen
        tick(&mut state, &input, SIM_DT);
        assert_eq!(state.paddle.rect.left(), 0.0);
    }

    #[test]
    fn test_positions_stay_on_whole_pixels() {
        assert_eq!(SIM_DT * TICK_RATE, 1.0);

        let mut state = open_board(1);
        let input = TickInput {
            right: true,
            ..Default::default()
        };
        for _ in 0..10 {
            tick(&mut state, &input, SIM_DT);
        }
        assert_eq!(state.paddle.rect.left(), 10.0 * PADDLE_SPEED);
        assert_eq!(state.paddle.rect.left(), 30.0);
        assert_eq!(state.ball.rect.pos, Vec2::new(170.0, 120.0));
    }

    #[test]
    fn test_paddle_clamps_right() {
        let mut state = open_board(1);
        let input = TickInput {
            right: true,
            ..Default::default()
        };
        for _ in 0..200 {
            tick(&mut state, &input, SIM_DT);
        }
        assert_eq!(state.paddle.rect.right(), SCREEN_WIDTH);
    }

    #[test]
    fn test_both_keys_cancel() {
        let mut state = open_board(1);
        state.paddle.rect.pos.x = 100.0;
        let input = TickInput {
            left: true,
            right: true,
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);
        assert_eq!(state.paddle.rect.left(), 100.0);
    }

    #[test]
    fn test_ball_bounces_off_right_wall() {
        let mut state = open_board(1);
        state.ball.rect.pos = Vec2::new(SCREEN_WIDTH - BALL_WIDTH - 1.0, 100.0);
        state.ball.vel = Vec2::new(BALL_SPEED, -BALL_SPEED);

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.ball.rect.right(), SCREEN_WIDTH);
        assert_eq!(state.ball.vel.x, -BALL_SPEED);
        assert!(
            state
                .drain_events()
                .contains(&GameEvent::WallBounce { wall: Wall::Right })
        );
    }

    #[test]
    fn test_ball_bounces_off_floor() {
        let mut state = open_board(1);
        // Paddle out of the way
        state.paddle.rect.pos.x = 0.0;
        state.ball.rect.pos = Vec2::new(200.0, SCREEN_HEIGHT - BALL_HEIGHT - 1.0);
        state.ball.vel = Vec2::new(BALL_SPEED, BALL_SPEED);

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.ball.rect.bottom(), SCREEN_HEIGHT);
        assert_eq!(state.ball.vel.y, -BALL_SPEED);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_ball_bounces_off_paddle() {
        let mut state = open_board(1);
        state.paddle.rect.pos.x = 100.0;
        state.ball.rect.pos = Vec2::new(105.0, state.paddle.rect.top() - BALL_HEIGHT - 1.0);
        state.ball.vel = Vec2::new(BALL_SPEED, BALL_SPEED);

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(state.ball.vel.y < 0.0);
        assert_eq!(state.ball.rect.bottom(), state.paddle.rect.top());
        assert!(state.drain_events().contains(&GameEvent::PaddleHit));
    }

    #[test]
    fn test_brick_destroyed_and_board_cleared() {
        let mut state = open_board(1);
        state.bricks = vec![Brick {
            id: 5,
            rect: Rect::new(150.0, 80.0, BRICK_WIDTH, BRICK_HEIGHT),
            alive: true,
        }];
        state.ball.rect.pos = Vec2::new(152.0, 89.0);
        state.ball.vel = Vec2::new(0.0, -BALL_SPEED);

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.remaining_bricks(), 0);
        assert_eq!(state.phase, GamePhase::Cleared);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::BrickDestroyed { id: 5 }, GameEvent::Cleared]
        );

        // Nothing moves once cleared
        let pos = state.ball.rect.pos;
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.ball.rect.pos, pos);
    }

    #[test]
    fn test_pause_toggle() {
        let mut state = open_board(1);
        let pause = TickInput {
            pause: true,
            ..Default::default()
        };

        tick(&mut state, &pause, SIM_DT);
        assert_eq!(state.phase, GamePhase::Paused);

        let pos = state.ball.rect.pos;
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.ball.rect.pos, pos);
        assert_eq!(state.time_ticks, 0);

        tick(&mut state, &pause, SIM_DT);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_restart() {
        let mut state = GameState::new(9, BrickLayout::default());
        for _ in 0..120 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        state.bricks[3].alive = false;

        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        tick(&mut state, &restart, SIM_DT);
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.remaining_bricks(), 100);
        assert_eq!(state.ball.rect.pos, Vec2::new(160.0, 120.0));
    }

    #[test]
    fn test_restart_while_paused() {
        let mut state = GameState::new(9, BrickLayout::default());
        for _ in 0..30 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        state.bricks[0].alive = false;
        let pause = TickInput {
            pause: true,
            ..Default::default()
        };
        tick(&mut state, &pause, SIM_DT);
        assert_eq!(state.phase, GamePhase::Paused);

        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        tick(&mut state, &restart, SIM_DT);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.remaining_bricks(), 100);
        assert_eq!(state.ball.rect.pos, Vec2::new(160.0, 120.0));

        // The rebuilt board runs straight away
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_autopilot_steers_toward_ball() {
        let mut state = open_board(1);
        state.paddle.rect.pos.x = 0.0;
        state.ball.rect.pos.x = 200.0;
        let input = TickInput::autopilot(&state);
        assert!(input.right && !input.left);

        state.paddle.rect.pos.x = 290.0;
        let input = TickInput::autopilot(&state);
        assert!(input.left && !input.right);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = GameState::new(99999, BrickLayout::default());
        let mut state2 = GameState::new(99999, BrickLayout::default());

        let inputs = [
            TickInput {
                right: true,
                ..Default::default()
            },
            TickInput {
                idle_mode: true,
                ..Default::default()
            },
            TickInput {
                left: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for _ in 0..300 {
            for input in &inputs {
                tick(&mut state1, input, SIM_DT);
                tick(&mut state2, input, SIM_DT);
            }
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.ball.rect.pos, state2.ball.rect.pos);
        assert_eq!(state1.remaining_bricks(), state2.remaining_bricks());
        assert_eq!(state1.paddle.rect.pos, state2.paddle.rect.pos);
    }
}
