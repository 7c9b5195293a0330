//! Duel Pong - a head-to-head paddle game against a reactive AI
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, scoring, game flow)
//! - `renderer`: CPU framebuffer rendering
//! - `audio`: Procedural square-wave sound effects
//! - `settings`: Player preferences

pub mod audio;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
///
/// All speeds are in pixels per simulation frame at the fixed tick rate.
pub mod consts {
    /// Simulation tick rate (frames per second)
    pub const TICK_RATE: u32 = 60;
    /// Wall-clock duration of one simulation frame
    pub const FRAME_DT: f32 = 1.0 / TICK_RATE as f32;
    /// Maximum catch-up steps per redraw to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Field dimensions (logical pixels)
    pub const FIELD_WIDTH: f32 = 960.0;
    pub const FIELD_HEIGHT: f32 = 720.0;

    /// Paddle geometry
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 120.0;
    /// Horizontal inset of each paddle from its field edge
    pub const PADDLE_INSET: f32 = 10.0;

    /// Player paddle speed
    pub const PLAYER_PADDLE_SPEED: f32 = 8.0;
    /// AI paddle speed, kept as its own knob so the sides can differ
    pub const AI_PADDLE_SPEED: f32 = 8.0;

    /// Ball radius
    pub const BALL_RADIUS: f32 = 15.0;
    /// Horizontal ball speed; the magnitude never changes, only the sign
    pub const BALL_SPEED: f32 = 8.0;
    /// Vertical serve velocity is drawn uniformly from
    /// `[-SERVE_Y_SPREAD, SERVE_Y_SPREAD]`. Tuning parameter, a literal value
    /// rather than something derived from tick rate or field size.
    pub const SERVE_Y_SPREAD: f32 = 2.0;

    /// First side to reach this score wins the match
    pub const WINNING_SCORE: u32 = 5;
}
