//! Tracker configuration handed over by the JS host

use serde::{Deserialize, Serialize};

use crate::counter::ExerciseKind;
use crate::error::GymError;

/// Session configuration
///
/// The detection confidences are not used by the counter itself; the host
/// passes them to MediaPipe Pose when it builds the detector.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Exercise preselected in the selector
    pub exercise: ExerciseKind,

    /// Minimum pose detection confidence (0-1)
    pub min_detection_confidence: f32,

    /// Minimum landmark tracking confidence (0-1)
    pub min_tracking_confidence: f32,

    /// Delay between frame requests in the host loop
    pub poll_interval_ms: u32,

    /// Pixel width used to place angle labels
    pub overlay_width: u32,

    /// Pixel height used to place angle labels
    pub overlay_height: u32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            exercise: ExerciseKind::BicepCurl,
            min_detection_confidence: 0.5,
            min_tracking_confidence: 0.5,
            poll_interval_ms: 10,
            overlay_width: 640,
            overlay_height: 480,
        }
    }
}

impl TrackerConfig {
    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, GymError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, GymError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), GymError> {
        for (name, value) in [
            ("min_detection_confidence", self.min_detection_confidence),
            ("min_tracking_confidence", self.min_tracking_confidence),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(GymError::InvalidConfig(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }

        if self.overlay_width == 0 || self.overlay_height == 0 {
            return Err(GymError::InvalidConfig(format!(
                "overlay size must be non-zero, got {}x{}",
                self.overlay_width, self.overlay_height
            )));
        }

        Ok(())
    }
}
