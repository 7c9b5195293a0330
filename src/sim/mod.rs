//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{Deflection, paddle_bounce, wall_bounce};
pub use rect::Rect;
pub use state::{Ball, GameEvent, GamePhase, GameState, MoveDir, Paddle, Score, Side};
pub use tick::{TickInput, tick};
