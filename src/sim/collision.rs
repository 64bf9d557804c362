//! Collision detection and response
//!
//! Everything is an axis-aligned rectangle, so collisions are AABB overlap
//! tests followed by a velocity flip on one axis.

use glam::Vec2;

use super::rect::Rect;
use super::state::{Ball, Brick, Paddle};
use crate::consts::SCREEN_WIDTH;

/// Which side of the screen an axis step bounced off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bounce {
    /// Hit the 0 edge
    Low,
    /// Hit the `limit - size` edge
    High,
}

/// Advance one axis by `ticks` fixed steps and reflect off the screen edges
///
/// `vel` is in px/tick. If the next position falls outside `[0, limit - size]`
/// the entity is snapped to the edge and its velocity on this axis is negated.
pub fn step_axis(
    pos: f32,
    vel: f32,
    size: f32,
    limit: f32,
    ticks: f32,
) -> (f32, f32, Option<Bounce>) {
    let next = pos + vel * ticks;
    let max = limit - size;
    if next < 0.0 {
        (0.0, -vel, Some(Bounce::Low))
    } else if next > max {
        (max, -vel, Some(Bounce::High))
    } else {
        (next, vel, None)
    }
}

/// Lock the paddle to the sides of the screen
#[inline]
pub fn clamp_paddle(x: f32, width: f32) -> f32 {
    x.clamp(0.0, SCREEN_WIDTH - width)
}

/// Bounce the ball off the top of the paddle
///
/// Only a ball moving downward bounces, which keeps it from sticking when it
/// clips the paddle on the way back up.
pub fn ball_paddle_bounce(ball: &mut Ball, paddle: &Paddle) -> bool {
    if ball.vel.y <= 0.0 || !ball.rect.intersects(&paddle.rect) {
        return false;
    }
    ball.rect.pos.y = paddle.rect.top() - ball.rect.height();
    ball.vel.y = -ball.vel.y.abs();
    true
}

/// Destroy the first live brick the ball overlaps and reflect the ball
///
/// The ball reflects along the axis of least penetration and is pushed back
/// out of the brick on that axis. At most one brick breaks per call.
pub fn ball_brick_hit(ball: &mut Ball, bricks: &mut [Brick]) -> Option<u32> {
    let (brick, depth) = bricks
        .iter_mut()
        .filter(|b| b.alive)
        .find_map(|b| ball.rect.overlap(&b.rect).map(|d| (b, d)))?;

    brick.alive = false;
    push_out(&mut ball.rect, &mut ball.vel, &brick.rect, depth);
    Some(brick.id)
}

fn push_out(rect: &mut Rect, vel: &mut Vec2, other: &Rect, depth: Vec2) {
    let center = rect.center();
    let other_center = other.center();

    if depth.x < depth.y {
        let dir = if center.x < other_center.x { -1.0 } else { 1.0 };
        rect.pos.x += dir * depth.x;
        vel.x = dir * vel.x.abs();
    } else {
        let dir = if center.y < other_center.y { -1.0 } else { 1.0 };
        rect.pos.y += dir * depth.y;
        vel.y = dir * vel.y.abs();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn ball_at(x: f32, y: f32, vel: Vec2) -> Ball {
        Ball {
            rect: Rect::new(x, y, BALL_WIDTH, BALL_HEIGHT),
            vel,
        }
    }

    #[test]
    fn test_step_axis_moves_freely() {
        let (pos, vel, bounce) = step_axis(100.0, 2.0, 8.0, 320.0, 1.0);
        assert_eq!(pos, 102.0);
        assert_eq!(vel, 2.0);
        assert!(bounce.is_none());
    }

    #[test]
    fn test_step_axis_scales_by_ticks() {
        let (pos, _, _) = step_axis(100.0, 2.0, 8.0, 320.0, 0.5);
        assert_eq!(pos, 101.0);
    }

    #[test]
    fn test_step_axis_reflects_at_zero() {
        let (pos, vel, bounce) = step_axis(1.0, -2.0, 8.0, 320.0, 1.0);
        assert_eq!(pos, 0.0);
        assert_eq!(vel, 2.0);
        assert_eq!(bounce, Some(Bounce::Low));
    }

    #[test]
    fn test_step_axis_reflects_at_limit() {
        let (pos, vel, bounce) = step_axis(311.0, 2.0, 8.0, 320.0, 1.0);
        assert_eq!(pos, 312.0);
        assert_eq!(vel, -2.0);
        assert_eq!(bounce, Some(Bounce::High));
    }

    #[test]
    fn test_clamp_paddle() {
        assert_eq!(clamp_paddle(-3.0, PADDLE_WIDTH), 0.0);
        assert_eq!(clamp_paddle(50.0, PADDLE_WIDTH), 50.0);
        assert_eq!(clamp_paddle(400.0, PADDLE_WIDTH), SCREEN_WIDTH - PADDLE_WIDTH);
    }

    #[test]
    fn test_paddle_bounce() {
        let paddle = Paddle::default();
        let mut ball = ball_at(5.0, paddle.rect.top() - 3.0, Vec2::new(2.0, 2.0));

        assert!(ball_paddle_bounce(&mut ball, &paddle));
        assert_eq!(ball.rect.bottom(), paddle.rect.top());
        assert_eq!(ball.vel, Vec2::new(2.0, -2.0));
    }

    #[test]
    fn test_paddle_ignores_rising_ball() {
        let paddle = Paddle::default();
        let mut ball = ball_at(5.0, paddle.rect.top() - 3.0, Vec2::new(2.0, -2.0));
        assert!(!ball_paddle_bounce(&mut ball, &paddle));
        assert_eq!(ball.vel.y, -2.0);
    }

    #[test]
    fn test_paddle_miss() {
        let paddle = Paddle::default();
        let mut ball = ball_at(200.0, paddle.rect.top() - 3.0, Vec2::new(2.0, 2.0));
        assert!(!ball_paddle_bounce(&mut ball, &paddle));
    }

    #[test]
    fn test_brick_hit_from_below() {
        let mut bricks = vec![Brick {
            id: 9,
            rect: Rect::new(100.0, 40.0, BRICK_WIDTH, BRICK_HEIGHT),
            alive: true,
        }];
        // Ball clips the underside of the brick while moving up
        let mut ball = ball_at(104.0, 46.0, Vec2::new(2.0, -2.0));

        assert_eq!(ball_brick_hit(&mut ball, &mut bricks), Some(9));
        assert!(!bricks[0].alive);
        assert_eq!(ball.vel, Vec2::new(2.0, 2.0));
        assert_eq!(ball.rect.top(), bricks[0].rect.bottom());
    }

    #[test]
    fn test_brick_hit_from_side() {
        let mut bricks = vec![Brick {
            id: 1,
            rect: Rect::new(100.0, 40.0, BRICK_WIDTH, BRICK_HEIGHT),
            alive: true,
        }];
        // Ball overlaps the left edge by 1px, vertically centered
        let mut ball = ball_at(93.0, 41.0, Vec2::new(2.0, 2.0));

        assert_eq!(ball_brick_hit(&mut ball, &mut bricks), Some(1));
        assert_eq!(ball.vel, Vec2::new(-2.0, 2.0));
        assert_eq!(ball.rect.right(), 100.0);
    }

    #[test]
    fn test_dead_bricks_are_ignored() {
        let mut bricks = vec![
            Brick {
                id: 1,
                rect: Rect::new(100.0, 40.0, BRICK_WIDTH, BRICK_HEIGHT),
                alive: false,
            },
            Brick {
                id: 2,
                rect: Rect::new(116.0, 40.0, BRICK_WIDTH, BRICK_HEIGHT),
                alive: true,
            },
        ];
        // Straddles both bricks
        let mut ball = ball_at(112.0, 46.0, Vec2::new(0.0, -2.0));
        assert_eq!(ball_brick_hit(&mut ball, &mut bricks), Some(2));

        let mut ball = ball_at(102.0, 46.0, Vec2::new(0.0, -2.0));
        assert_eq!(ball_brick_hit(&mut ball, &mut bricks), None);
    }

    #[test]
    fn test_one_brick_per_hit() {
        let mut bricks = vec![
            Brick {
                id: 1,
                rect: Rect::new(100.0, 40.0, BRICK_WIDTH, BRICK_HEIGHT),
                alive: true,
            },
            Brick {
                id: 2,
                rect: Rect::new(116.0, 40.0, BRICK_WIDTH, BRICK_HEIGHT),
                alive: true,
            },
        ];
        let mut ball = ball_at(112.0, 46.0, Vec2::new(0.0, -2.0));
        assert_eq!(ball_brick_hit(&mut ball, &mut bricks), Some(1));
        assert!(bricks[1].alive);
    }
}
