//! Game settings and preferences
//!
//! Persisted as a JSON file in the working directory. A missing or malformed
//! file falls back to defaults.

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Mute all audio
    pub muted: bool,
    /// Show FPS counter
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            show_fps: false,
        }
    }
}

impl Settings {
    /// Settings file path, relative to the working directory
    const STORAGE_PATH: &'static str = "duel_pong_settings.json";

    /// Load settings, defaulting when the file is absent or unreadable
    pub fn load() -> Self {
        match std::fs::read_to_string(Self::STORAGE_PATH) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", Self::STORAGE_PATH);
                    settings
                }
                Err(err) => {
                    log::warn!("ignoring malformed settings file: {err}");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("using default settings");
                Self::default()
            }
        }
    }

    /// Save settings, logging rather than failing on IO errors
    pub fn save(&self) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = std::fs::write(Self::STORAGE_PATH, json) {
                    log::warn!("failed to save settings: {err}");
                } else {
                    log::info!("settings saved");
                }
            }
            Err(err) => log::warn!("failed to serialize settings: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_audible() {
        let settings = Settings::default();
        assert!(settings.master_volume > 0.0);
        assert!(settings.sfx_volume > 0.0);
        assert!(!settings.muted);
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(serde_json::from_str::<Settings>("{\"master_volume\": \"loud\"}").is_err());
    }
}
