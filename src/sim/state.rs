//! Game state and core entity types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::rect::Rect;
use crate::consts::*;

/// Which side of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Human paddle, left side
    Player,
    /// Reactive AI paddle, right side
    Ai,
}

impl Side {
    /// Banner text shown when this side wins the match
    pub fn winner_text(self) -> &'static str {
        match self {
            Side::Player => "PLAYER WINS!",
            Side::Ai => "AI WINS!",
        }
    }
}

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Match ended; only restart/quit inputs are honored
    GameOver,
}

/// Events emitted by the simulation for the shell to act on (audio, logging)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball bounced off the top or bottom wall
    WallHit,
    /// Ball bounced off a paddle
    PaddleHit,
    /// A point was awarded to the given side
    Score(Side),
}

/// Vertical movement direction for a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDir {
    Up,
    Down,
}

/// A paddle entity
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    /// Which side this paddle defends (fixes its x position)
    pub side: Side,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical speed in pixels per frame
    pub speed: f32,
}

impl Paddle {
    /// Create a paddle on its side's fixed x, vertically centered
    pub fn new(side: Side, speed: f32) -> Self {
        let x = match side {
            Side::Player => PADDLE_INSET,
            Side::Ai => FIELD_WIDTH - PADDLE_INSET - PADDLE_WIDTH,
        };
        Self {
            side,
            pos: Vec2::new(x, (FIELD_HEIGHT - PADDLE_HEIGHT) / 2.0),
            size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            speed,
        }
    }

    /// Move one speed step up or down, clamped inside the field
    pub fn shift(&mut self, dir: MoveDir) {
        match dir {
            MoveDir::Up => self.pos.y -= self.speed,
            MoveDir::Down => self.pos.y += self.speed,
        }
        self.pos.y = self.pos.y.clamp(0.0, FIELD_HEIGHT - self.size.y);
    }

    /// Reactive tracking policy: step toward the ball's vertical center.
    ///
    /// Takes one full speed step whenever the centers differ, so the paddle
    /// oscillates around a nearby target by up to one step. That wobble is
    /// the intended behavior, not an artifact to smooth out.
    pub fn track(&mut self, ball_center_y: f32) {
        if self.center_y() < ball_center_y {
            self.shift(MoveDir::Down);
        } else if self.center_y() > ball_center_y {
            self.shift(MoveDir::Up);
        }
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Return to the vertical center (match start / restart)
    pub fn recenter(&mut self) {
        self.pos.y = (FIELD_HEIGHT - self.size.y) / 2.0;
    }
}

/// The ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    /// Center position
    pub pos: Vec2,
    /// Velocity in pixels per frame
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// New ball at field center with a randomized opening serve
    pub fn new(rng: &mut Pcg32) -> Self {
        let dir = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        Self {
            pos: Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0),
            vel: Vec2::new(BALL_SPEED * dir, 0.0),
            radius: BALL_RADIUS,
        }
    }

    /// Advance one frame of motion
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }

    /// Recenter and serve the next point.
    ///
    /// The horizontal sign flips relative to the point that just ended, so
    /// the serve heads away from the side that conceded. The horizontal
    /// magnitude is untouched; only the vertical component is redrawn.
    pub fn reset(&mut self, rng: &mut Pcg32) {
        self.pos = Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0);
        self.vel.x = -self.vel.x;
        self.vel.y = rng.random_range(-SERVE_Y_SPREAD..=SERVE_Y_SPREAD);
    }

    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    pub fn rect(&self) -> Rect {
        Rect::from_center(self.pos, Vec2::splat(self.radius * 2.0))
    }
}

/// Points won by each side this match
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u32,
    pub ai: u32,
}

impl Score {
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Ai => self.ai += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Ai => self.ai,
        }
    }
}

/// Complete match state, advanced deterministically by [`tick`](super::tick)
#[derive(Debug, Clone)]
pub struct GameState {
    pub player: Paddle,
    pub ai: Paddle,
    pub ball: Ball,
    pub score: Score,
    pub phase: GamePhase,
    /// Populated on entering GameOver, cleared on restart
    pub winner: Option<Side>,
    /// Simulation frame counter
    pub time_ticks: u64,
    /// Events since the last drain, in emission order
    pub events: Vec<GameEvent>,
    rng: Pcg32,
}

impl GameState {
    /// Create a new match with the given seed
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let ball = Ball::new(&mut rng);
        Self {
            player: Paddle::new(Side::Player, PLAYER_PADDLE_SPEED),
            ai: Paddle::new(Side::Ai, AI_PADDLE_SPEED),
            ball,
            score: Score::default(),
            phase: GamePhase::Playing,
            winner: None,
            time_ticks: 0,
            events: Vec::new(),
            rng,
        }
    }

    /// Begin a fresh match in place (restart from game over)
    pub fn restart(&mut self) {
        self.score = Score::default();
        self.player.recenter();
        self.ai.recenter();
        self.ball.reset(&mut self.rng);
        self.winner = None;
        self.phase = GamePhase::Playing;
    }

    /// Award a point, emit the score event, and serve the next ball
    pub fn score_point(&mut self, side: Side) {
        self.score.award(side);
        self.events.push(GameEvent::Score(side));
        self.ball.reset(&mut self.rng);
    }

    /// Drain accumulated events for the shell to dispatch
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paddle_clamps_to_field() {
        let mut paddle = Paddle::new(Side::Player, PLAYER_PADDLE_SPEED);

        for _ in 0..200 {
            paddle.shift(MoveDir::Up);
        }
        assert_eq!(paddle.pos.y, 0.0);

        for _ in 0..200 {
            paddle.shift(MoveDir::Down);
        }
        assert_eq!(paddle.pos.y, FIELD_HEIGHT - PADDLE_HEIGHT);
    }

    #[test]
    fn test_track_steps_toward_ball() {
        let mut paddle = Paddle::new(Side::Ai, AI_PADDLE_SPEED);
        let start = paddle.center_y();

        paddle.track(start + 100.0);
        assert_eq!(paddle.center_y(), start + AI_PADDLE_SPEED);

        paddle.track(start - 100.0);
        paddle.track(start - 100.0);
        assert_eq!(paddle.center_y(), start - AI_PADDLE_SPEED);
    }

    #[test]
    fn test_track_holds_when_centered() {
        let mut paddle = Paddle::new(Side::Ai, AI_PADDLE_SPEED);
        let center = paddle.center_y();

        paddle.track(center);
        assert_eq!(paddle.center_y(), center);
    }

    #[test]
    fn test_track_never_moves_away() {
        let mut paddle = Paddle::new(Side::Ai, AI_PADDLE_SPEED);
        let target = 250.0;

        for _ in 0..200 {
            let before = (paddle.center_y() - target).abs();
            paddle.track(target);
            let after = (paddle.center_y() - target).abs();
            assert!(after < before || after <= AI_PADDLE_SPEED);
        }
    }

    #[test]
    fn test_opening_serve_is_horizontal() {
        let mut rng = Pcg32::seed_from_u64(7);
        let ball = Ball::new(&mut rng);

        assert_eq!(ball.vel.x.abs(), BALL_SPEED);
        assert_eq!(ball.vel.y, 0.0);
        assert_eq!(ball.pos, Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0));
    }

    #[test]
    fn test_reset_flips_sign_and_keeps_speed() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut ball = Ball::new(&mut rng);
        let before_x = ball.vel.x;

        ball.pos = Vec2::new(100.0, 100.0);
        ball.reset(&mut rng);

        assert_eq!(ball.vel.x, -before_x);
        assert_eq!(ball.vel.x.abs(), BALL_SPEED);
        assert!(ball.vel.y.abs() <= SERVE_Y_SPREAD);
        assert_eq!(ball.pos, Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0));
    }

    #[test]
    fn test_restart_clears_match_state() {
        let mut state = GameState::new(1);
        state.score.player = 4;
        state.score.ai = 5;
        state.phase = GamePhase::GameOver;
        state.winner = Some(Side::Ai);
        state.player.pos.y = 0.0;
        state.ai.pos.y = FIELD_HEIGHT - PADDLE_HEIGHT;

        state.restart();

        assert_eq!(state.score, Score::default());
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.winner, None);
        assert_eq!(state.player.pos.y, (FIELD_HEIGHT - PADDLE_HEIGHT) / 2.0);
        assert_eq!(state.ai.pos.y, (FIELD_HEIGHT - PADDLE_HEIGHT) / 2.0);
        assert_ne!(state.ball.vel.x, 0.0);
    }

    #[test]
    fn test_drain_events_preserves_order() {
        let mut state = GameState::new(1);
        state.events.push(GameEvent::WallHit);
        state.events.push(GameEvent::PaddleHit);
        state.events.push(GameEvent::Score(Side::Player));

        let drained = state.drain_events();
        assert_eq!(
            drained,
            vec![
                GameEvent::WallHit,
                GameEvent::PaddleHit,
                GameEvent::Score(Side::Player)
            ]
        );
        assert!(state.events.is_empty());
    }
}
