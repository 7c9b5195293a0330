//! Collision resolution for the ball against walls and paddles
//!
//! Checks are pure functions over immutable snapshots: each returns the
//! replacement velocity/position values and `tick` applies them. At most one
//! wall bounce and one paddle bounce can resolve per frame.

use glam::Vec2;

use super::state::{Ball, Paddle, Side};
use crate::consts::FIELD_HEIGHT;

/// Outcome of a paddle contact: replacement velocity plus the snapped
/// horizontal center position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deflection {
    pub vel: Vec2,
    pub x: f32,
}

/// Check the top and bottom field walls.
///
/// Returns the new vertical velocity on contact. Fires only while the ball is
/// moving into the wall, so a ball sitting exactly on the edge flips once and
/// not again on later frames. Position is never clamped; the ball may report
/// past the edge by up to one frame's travel.
pub fn wall_bounce(ball: &Ball) -> Option<f32> {
    let into_top = ball.top() <= 0.0 && ball.vel.y < 0.0;
    let into_bottom = ball.bottom() >= FIELD_HEIGHT && ball.vel.y > 0.0;
    if into_top || into_bottom {
        Some(-ball.vel.y)
    } else {
        None
    }
}

/// Check the ball against one paddle.
///
/// Direction-gated: the left paddle is live only while the ball moves left,
/// the right paddle only while it moves right. A hit needs bounding-box
/// overlap plus the leading edge having reached the paddle's facing edge, so
/// a ball crossing the paddle plane cannot re-trigger.
///
/// On a hit the horizontal sign inverts, the ball is snapped so its leading
/// edge touches the paddle face, and the vertical velocity is set from the
/// contact offset: a center hit leaves the ball nearly flat, an edge hit
/// deflects at up to the paddle's own speed.
pub fn paddle_bounce(ball: &Ball, paddle: &Paddle) -> Option<Deflection> {
    match paddle.side {
        Side::Player if ball.vel.x >= 0.0 => return None,
        Side::Ai if ball.vel.x <= 0.0 => return None,
        _ => {}
    }

    let rect = paddle.rect();
    if !ball.rect().overlaps(&rect) {
        return None;
    }

    let (reached_face, snapped_x) = match paddle.side {
        Side::Player => (ball.left() <= rect.right(), rect.right() + ball.radius),
        Side::Ai => (ball.right() >= rect.left(), rect.left() - ball.radius),
    };
    if !reached_face {
        return None;
    }

    let offset = rect.center().y - ball.pos.y;
    let reduction = (paddle.size.y / 2.0) / paddle.speed;
    Some(Deflection {
        vel: Vec2::new(-ball.vel.x, -(offset / reduction)),
        x: snapped_x,
    })
}
