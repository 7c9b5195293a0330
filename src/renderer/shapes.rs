//! Filled-primitive rasterization over the RGBA frame
//!
//! All coordinates are in logical field pixels; everything is clipped to the
//! frame, so callers never need to pre-clamp.

use super::Color;
use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};

/// Frame stride in pixels
const FRAME_WIDTH: usize = FIELD_WIDTH as usize;

/// Clear the whole frame to one color
pub fn fill(frame: &mut [u8], color: Color) {
    for pixel in frame.chunks_exact_mut(4) {
        pixel.copy_from_slice(&color);
    }
}

/// Fill an axis-aligned rectangle
pub fn fill_rect(frame: &mut [u8], x: f32, y: f32, width: f32, height: f32, color: Color) {
    let x0 = x.clamp(0.0, FIELD_WIDTH) as usize;
    let y0 = y.clamp(0.0, FIELD_HEIGHT) as usize;
    let x1 = (x + width).clamp(0.0, FIELD_WIDTH) as usize;
    let y1 = (y + height).clamp(0.0, FIELD_HEIGHT) as usize;

    for py in y0..y1 {
        for px in x0..x1 {
            let idx = (py * FRAME_WIDTH + px) * 4;
            frame[idx..idx + 4].copy_from_slice(&color);
        }
    }
}

/// Fill an ellipse centered on (cx, cy) with the given radii
pub fn fill_ellipse(frame: &mut [u8], cx: f32, cy: f32, rx: f32, ry: f32, color: Color) {
    let x0 = (cx - rx).clamp(0.0, FIELD_WIDTH) as usize;
    let y0 = (cy - ry).clamp(0.0, FIELD_HEIGHT) as usize;
    let x1 = (cx + rx).clamp(0.0, FIELD_WIDTH).ceil() as usize;
    let y1 = (cy + ry).clamp(0.0, FIELD_HEIGHT).ceil() as usize;

    for py in y0..y1.min(FIELD_HEIGHT as usize) {
        for px in x0..x1.min(FRAME_WIDTH) {
            // Sample at the pixel center
            let dx = (px as f32 + 0.5 - cx) / rx;
            let dy = (py as f32 + 0.5 - cy) / ry;
            if dx * dx + dy * dy <= 1.0 {
                let idx = (py * FRAME_WIDTH + px) * 4;
                frame[idx..idx + 4].copy_from_slice(&color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Color = [255, 255, 255, 255];

    fn blank_frame() -> Vec<u8> {
        vec![0u8; FIELD_WIDTH as usize * FIELD_HEIGHT as usize * 4]
    }

    fn pixel(frame: &[u8], x: usize, y: usize) -> [u8; 4] {
        let idx = (y * FRAME_WIDTH + x) * 4;
        [frame[idx], frame[idx + 1], frame[idx + 2], frame[idx + 3]]
    }

    #[test]
    fn test_fill_rect_covers_interior() {
        let mut frame = blank_frame();
        fill_rect(&mut frame, 10.0, 10.0, 5.0, 5.0, WHITE);

        assert_eq!(pixel(&frame, 12, 12), WHITE);
        assert_eq!(pixel(&frame, 9, 12), [0, 0, 0, 0]);
        assert_eq!(pixel(&frame, 15, 12), [0, 0, 0, 0]);
    }

    #[test]
    fn test_fill_rect_clips_offscreen() {
        let mut frame = blank_frame();
        fill_rect(&mut frame, -20.0, -20.0, 30.0, 30.0, WHITE);
        fill_rect(&mut frame, FIELD_WIDTH - 5.0, FIELD_HEIGHT - 5.0, 50.0, 50.0, WHITE);
        fill_rect(&mut frame, -100.0, -100.0, 10.0, 10.0, WHITE);

        assert_eq!(pixel(&frame, 0, 0), WHITE);
        assert_eq!(
            pixel(&frame, FIELD_WIDTH as usize - 1, FIELD_HEIGHT as usize - 1),
            WHITE
        );
    }

    #[test]
    fn test_fill_ellipse_hits_center_not_corner() {
        let mut frame = blank_frame();
        fill_ellipse(&mut frame, 100.0, 100.0, 15.0, 15.0, WHITE);

        assert_eq!(pixel(&frame, 100, 100), WHITE);
        // The bounding-box corner lies outside the ellipse.
        assert_eq!(pixel(&frame, 87, 87), [0, 0, 0, 0]);
    }
}
