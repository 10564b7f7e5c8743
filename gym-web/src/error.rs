//! Error types for session setup and landmark parsing
//!
//! Frame updates never fail; these only cover input the bridge rejects.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors surfaced to the JS host
#[derive(Debug, Error, PartialEq)]
pub enum GymError {
    /// Exercise name matches no selector option
    #[error("unknown exercise: {0}")]
    UnknownExercise(String),

    /// Landmark array has the wrong number of values
    #[error("invalid landmark data length: {actual} (expected {expected})")]
    LandmarkCount {
        /// Expected number of floats
        expected: usize,
        /// Number of floats received
        actual: usize,
    },

    /// A joint the counter reads has a NaN or infinite coordinate
    #[error("non-finite coordinate for {joint}")]
    NonFiniteCoordinate {
        /// Joint name
        joint: &'static str,
    },

    /// Tracker configuration rejected
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Operation needs a running session
    #[error("no exercise is being tracked")]
    NotTracking,
}

impl GymError {
    /// Creates a landmark count error.
    #[must_use]
    pub const fn landmark_count(expected: usize, actual: usize) -> Self {
        Self::LandmarkCount { expected, actual }
    }
}

impl From<serde_json::Error> for GymError {
    fn from(err: serde_json::Error) -> Self {
        GymError::InvalidConfig(err.to_string())
    }
}

impl From<GymError> for JsValue {
    fn from(err: GymError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
