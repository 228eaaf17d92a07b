//! Tunable settings and persistence
//!
//! Settings live in a small JSON file next to the executable. A missing
//! file is normal on first launch; a malformed one is reported and ignored.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::roll::ROTATION_SPEED;
use super::score::ScoreTiming;

/// Runtime-tunable settings for the roller.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollSettings {
    /// Angular advance per frame, in radians. Must be positive.
    #[serde(default = "default_rotation_speed")]
    pub rotation_speed: f32,
    /// When a roll's value is added to the score.
    #[serde(default)]
    pub score_timing: ScoreTiming,
}

fn default_rotation_speed() -> f32 {
    ROTATION_SPEED
}

impl Default for RollSettings {
    fn default() -> Self {
        Self {
            rotation_speed: ROTATION_SPEED,
            score_timing: ScoreTiming::default(),
        }
    }
}

impl RollSettings {
    /// Load settings from `path`, falling back to defaults if the file is
    /// missing or malformed.
    pub fn load_from_file(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => {
                info!("No settings file at {}, using defaults", path.display());
                return Self::default();
            }
        };

        match serde_json::from_str::<RollSettings>(&content) {
            Ok(settings) => settings.sanitized(path),
            Err(e) => {
                warn!("Ignoring malformed settings file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// A zero or negative speed would stall every roll forever, so reject it.
    fn sanitized(mut self, path: &Path) -> Self {
        if !self.rotation_speed.is_finite() || self.rotation_speed <= 0.0 {
            warn!(
                "Settings file {} has non-positive rotation_speed {}, using {}",
                path.display(),
                self.rotation_speed,
                ROTATION_SPEED
            );
            self.rotation_speed = ROTATION_SPEED;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = PathBuf::from("definitely/not/a/real/settings_file.json");
        assert_eq!(RollSettings::load_from_file(&path), RollSettings::default());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings: RollSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, RollSettings::default());

        let settings: RollSettings =
            serde_json::from_str(r#"{"score_timing": "settle"}"#).unwrap();
        assert_eq!(settings.score_timing, ScoreTiming::Settle);
        assert_eq!(settings.rotation_speed, ROTATION_SPEED);
    }

    #[test]
    fn test_settings_round_trip() {
        let settings = RollSettings {
            rotation_speed: 0.02,
            score_timing: ScoreTiming::Settle,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let restored: RollSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, settings);
    }

    #[test]
    fn test_non_positive_speed_is_rejected() {
        let path = PathBuf::from("roll_settings.json");
        let settings = RollSettings {
            rotation_speed: -1.0,
            score_timing: ScoreTiming::Trigger,
        }
        .sanitized(&path);
        assert_eq!(settings.rotation_speed, ROTATION_SPEED);
    }
}
