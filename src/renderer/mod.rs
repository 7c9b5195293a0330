//! CPU framebuffer rendering
//!
//! Drawing writes RGBA bytes into the logical-resolution frame that the shell
//! presents through its surface. One scene function per game phase.

pub mod shapes;
pub mod text;

pub use shapes::{fill, fill_ellipse, fill_rect};
pub use text::{draw_text, text_height, text_width};

use crate::consts::*;
use crate::sim::{GameState, Side};

/// RGBA color
pub type Color = [u8; 4];

/// The game's palette
pub mod colors {
    use super::Color;

    pub const BLACK: Color = [0, 0, 0, 255];
    pub const WHITE: Color = [255, 255, 255, 255];
    pub const RED: Color = [255, 0, 0, 255];
    pub const BLUE: Color = [0, 0, 255, 255];
    pub const GREEN: Color = [0, 255, 0, 255];
}

// Text sizes as multiples of the 5x7 glyph cell
const SCORE_SCALE: f32 = 7.0;
const TITLE_SCALE: f32 = 11.0;
const BANNER_SCALE: f32 = 7.0;
const PROMPT_SCALE: f32 = 6.0;
const FPS_SCALE: f32 = 2.0;

fn draw_text_centered(frame: &mut [u8], text: &str, center_x: f32, y: f32, scale: f32, color: Color) {
    draw_text(frame, text, center_x - text_width(text, scale) / 2.0, y, scale, color);
}

fn paddle_color(side: Side) -> Color {
    match side {
        Side::Player => colors::BLUE,
        Side::Ai => colors::RED,
    }
}

/// Compose the active-play screen: scores, center line, paddles, ball
pub fn draw_playing(frame: &mut [u8], state: &GameState) {
    fill(frame, colors::BLACK);

    draw_text_centered(
        frame,
        &state.score.player.to_string(),
        FIELD_WIDTH / 4.0,
        20.0,
        SCORE_SCALE,
        colors::WHITE,
    );
    draw_text_centered(
        frame,
        &state.score.ai.to_string(),
        FIELD_WIDTH * 3.0 / 4.0,
        20.0,
        SCORE_SCALE,
        colors::WHITE,
    );

    // Dashed center line
    let dash_height = FIELD_HEIGHT / 20.0;
    let mut y = 10.0;
    while y < FIELD_HEIGHT {
        fill_rect(
            frame,
            FIELD_WIDTH / 2.0 - 5.0,
            y,
            10.0,
            dash_height,
            colors::WHITE,
        );
        y += dash_height * 2.0;
    }

    for paddle in [&state.player, &state.ai] {
        fill_rect(
            frame,
            paddle.pos.x,
            paddle.pos.y,
            paddle.size.x,
            paddle.size.y,
            paddle_color(paddle.side),
        );
    }

    fill_ellipse(
        frame,
        state.ball.pos.x,
        state.ball.pos.y,
        state.ball.radius,
        state.ball.radius,
        colors::WHITE,
    );
}

/// Compose the game-over screen: title, winner banner, restart/quit prompts
pub fn draw_game_over(frame: &mut [u8], state: &GameState) {
    fill(frame, colors::BLACK);

    draw_text_centered(
        frame,
        "GAME OVER",
        FIELD_WIDTH / 2.0,
        FIELD_HEIGHT / 4.0,
        TITLE_SCALE,
        colors::WHITE,
    );

    let banner = state.winner.map_or("", Side::winner_text);
    draw_text_centered(
        frame,
        banner,
        FIELD_WIDTH / 2.0,
        FIELD_HEIGHT / 2.0 - text_height(BANNER_SCALE),
        BANNER_SCALE,
        colors::WHITE,
    );

    draw_text_centered(
        frame,
        "Y = RESTART",
        FIELD_WIDTH / 2.0,
        FIELD_HEIGHT * 0.7,
        PROMPT_SCALE,
        colors::GREEN,
    );
    draw_text_centered(
        frame,
        "N = QUIT",
        FIELD_WIDTH / 2.0,
        FIELD_HEIGHT * 0.8,
        PROMPT_SCALE,
        colors::RED,
    );
}

/// FPS overlay in the top-left corner
pub fn draw_fps(frame: &mut [u8], fps: u32) {
    draw_text(frame, &format!("FPS: {fps}"), 8.0, 8.0, FPS_SCALE, colors::GREEN);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GamePhase, GameState};

    fn blank_frame() -> Vec<u8> {
        vec![0u8; FIELD_WIDTH as usize * FIELD_HEIGHT as usize * 4]
    }

    fn pixel(frame: &[u8], x: usize, y: usize) -> Color {
        let idx = (y * FIELD_WIDTH as usize + x) * 4;
        [frame[idx], frame[idx + 1], frame[idx + 2], frame[idx + 3]]
    }

    #[test]
    fn test_draw_playing_places_entities() {
        let state = GameState::new(1);
        let mut frame = blank_frame();
        draw_playing(&mut frame, &state);

        assert_eq!(
            pixel(&frame, state.ball.pos.x as usize, state.ball.pos.y as usize),
            colors::WHITE
        );
        assert_eq!(
            pixel(
                &frame,
                (state.player.pos.x + 1.0) as usize,
                state.player.center_y() as usize
            ),
            colors::BLUE
        );
        assert_eq!(
            pixel(
                &frame,
                (state.ai.pos.x + 1.0) as usize,
                state.ai.center_y() as usize
            ),
            colors::RED
        );
    }

    #[test]
    fn test_draw_game_over_renders() {
        let mut state = GameState::new(1);
        state.phase = GamePhase::GameOver;
        state.winner = Some(Side::Player);

        let mut frame = blank_frame();
        draw_game_over(&mut frame, &state);

        // The banner row contains some white pixels from the title text.
        let title_y = (FIELD_HEIGHT / 4.0 + text_height(TITLE_SCALE) / 2.0) as usize;
        let any_white = (0..FIELD_WIDTH as usize)
            .any(|x| pixel(&frame, x, title_y) == colors::WHITE);
        assert!(any_white);
    }
}
