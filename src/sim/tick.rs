//! Fixed timestep simulation tick
//!
//! One call advances the match by exactly one frame. Velocities are in
//! pixels per frame, so there is no `dt`: the shell owns the 60 Hz pacing.

use super::collision::{paddle_bounce, wall_bounce};
use super::state::{GameEvent, GamePhase, GameState, MoveDir, Side};
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Player paddle movement key held: up
    pub move_up: bool,
    /// Player paddle movement key held: down
    pub move_down: bool,
    /// Restart the match (honored in game over only)
    pub restart: bool,
}

/// Advance the game state by one frame.
///
/// Per-frame pipeline: player movement, AI movement, ball integration,
/// collision resolution, scoring, win check. While the match is over the
/// world is frozen and only the restart command is honored.
pub fn tick(state: &mut GameState, input: &TickInput) {
    match state.phase {
        GamePhase::GameOver => {
            if input.restart {
                state.restart();
            }
            return;
        }
        GamePhase::Playing => {}
    }

    state.time_ticks += 1;

    if input.move_up {
        state.player.shift(MoveDir::Up);
    }
    if input.move_down {
        state.player.shift(MoveDir::Down);
    }

    // The AI reads the ball's position before it moves this frame
    let ball_center_y = state.ball.pos.y;
    state.ai.track(ball_center_y);

    state.ball.integrate();

    // Walls first, then the paddle the ball is heading toward
    if let Some(y_vel) = wall_bounce(&state.ball) {
        state.ball.vel.y = y_vel;
        state.events.push(GameEvent::WallHit);
    }

    let hit = if state.ball.vel.x < 0.0 {
        paddle_bounce(&state.ball, &state.player)
    } else {
        paddle_bounce(&state.ball, &state.ai)
    };
    if let Some(hit) = hit {
        state.ball.vel = hit.vel;
        state.ball.pos.x = hit.x;
        state.events.push(GameEvent::PaddleHit);
    }

    // A ball past either goal line ends the point
    if state.ball.left() < 0.0 {
        state.score_point(Side::Ai);
    } else if state.ball.right() > FIELD_WIDTH {
        state.score_point(Side::Player);
    }

    if state.score.player >= WINNING_SCORE {
        state.phase = GamePhase::GameOver;
        state.winner = Some(Side::Player);
    } else if state.score.ai >= WINNING_SCORE {
        state.phase = GamePhase::GameOver;
        state.winner = Some(Side::Ai);
    }
}
