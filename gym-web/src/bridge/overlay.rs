//! Overlay data for the host renderer
//!
//! Text and anchors only. The host draws them on its own canvas.

use serde::Serialize;

use crate::counter::{AngleReading, RepUpdate};

/// An angle value positioned next to its joint
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AngleLabel {
    pub text: String,
    /// Pixel position in the overlay
    pub x: i32,
    pub y: i32,
}

impl AngleLabel {
    pub fn from_reading(reading: &AngleReading, width: u32, height: u32) -> Self {
        let (x, y) = reading.anchor.to_pixels(width, height);
        Self {
            text: format!("{:.2}", reading.degrees),
            x,
            y,
        }
    }
}

/// Labels for every angle measured this frame
pub fn angle_labels(update: &RepUpdate, width: u32, height: u32) -> Vec<AngleLabel> {
    update
        .angles
        .iter()
        .map(|reading| AngleLabel::from_reading(reading, width, height))
        .collect()
}

/// Status box text: reps, stage and the warning line if any
pub fn hud_text(update: &RepUpdate) -> String {
    let state = &update.state;
    let mut text = format!("REPS: {} | STAGE: {}", state.counter, state.stage.as_str());
    if let Some(warning) = state.warning {
        text.push('\n');
        text.push_str(warning.as_str());
    }
    text
}
