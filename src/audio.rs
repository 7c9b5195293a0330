//! Procedural square-wave sound effects
//!
//! The three effects are synthesized once at startup and replayed from the
//! cached sample buffers - nothing is regenerated per play.

use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamHandle, Source};

use crate::settings::Settings;

/// Sample rate of the synthesized effects
const SAMPLE_RATE: u32 = 44_100;
/// Peak amplitude of the raw square wave before volume scaling
const BASE_AMPLITUDE: f32 = 0.1;

/// Sound effect identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits a paddle (440 Hz, 50 ms)
    PaddleHit,
    /// Ball hits the top or bottom wall (220 Hz, 50 ms)
    WallHit,
    /// A point is scored (880 Hz, 200 ms)
    Score,
}

/// Audio manager owning the output stream and the pre-built effect buffers
pub struct AudioManager {
    // Keeps the output device alive for the lifetime of the manager
    _stream: Option<OutputStream>,
    handle: Option<OutputStreamHandle>,
    paddle_hit: Vec<f32>,
    wall_hit: Vec<f32>,
    score: Vec<f32>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl AudioManager {
    pub fn new(settings: &Settings) -> Self {
        let (stream, handle) = match OutputStream::try_default() {
            Ok((stream, handle)) => (Some(stream), Some(handle)),
            Err(err) => {
                log::warn!("failed to open audio output, sound disabled: {err}");
                (None, None)
            }
        };
        Self {
            _stream: stream,
            handle,
            paddle_hit: square_wave(440.0, 0.05),
            wall_hit: square_wave(220.0, 0.05),
            score: square_wave(880.0, 0.2),
            master_volume: settings.master_volume,
            sfx_volume: settings.sfx_volume,
            muted: settings.muted,
        }
    }

    /// Mute/unmute all effects
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect, fire-and-forget
    pub fn play(&self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        let Some(handle) = &self.handle else { return };

        let samples = match effect {
            SoundEffect::PaddleHit => &self.paddle_hit,
            SoundEffect::WallHit => &self.wall_hit,
            SoundEffect::Score => &self.score,
        };
        let source = SamplesBuffer::new(1, SAMPLE_RATE, samples.clone()).amplify(vol);
        if let Err(err) = handle.play_raw(source) {
            log::debug!("audio playback failed: {err}");
        }
    }
}

/// Synthesize one square-wave tone into a mono sample buffer
fn square_wave(frequency: f32, duration: f32) -> Vec<f32> {
    let half_period = SAMPLE_RATE as f32 / frequency / 2.0;
    let num_samples = (duration * SAMPLE_RATE as f32) as usize;

    (0..num_samples)
        .map(|i| {
            if (i as f32 / half_period) as u32 % 2 == 0 {
                BASE_AMPLITUDE
            } else {
                -BASE_AMPLITUDE
            }
        })
        .collect()
}
