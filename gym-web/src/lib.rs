//! Gym Web - exercise repetition counter
//!
//! MediaPipe Pose runs in JavaScript and hands each frame's landmarks to a
//! [`GymSession`]. Rust turns them into joint angles, tracks the exercise
//! stage and counts repetitions.
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations and re-exports
//! - wasm_bindgen entry points that delegate to submodules

mod bridge;
mod config;
mod counter;
mod error;
mod kinematics;

use serde::Serialize;
use wasm_bindgen::prelude::*;

pub use bridge::{
    angle_labels, decode_landmarks, hud_text, AngleLabel, GymSession, FRAME_LEN, LANDMARK_COUNT,
    LIMB_SKELETON, VALUES_PER_LANDMARK,
};
pub use config::TrackerConfig;
pub use counter::{
    AngleReading, ArmThresholds, ExerciseKind, ExerciseRule, LegThresholds, RepCounter, RepState,
    RepUpdate, RepWarning, Stage,
};
pub use error::GymError;
pub use kinematics::{calculate_angle, Joint, JointFrame, Point2D, JOINT_COUNT};

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
    console_log!("✅ Rep counter loaded ({} exercises)", ExerciseKind::ALL.len());
}

#[derive(Serialize)]
struct ExerciseOption {
    id: &'static str,
    label: &'static str,
}

/// Selector options as JSON: `[{ "id": "bicep_curls", "label": "Bicep Curls" }, ...]`
#[wasm_bindgen]
pub fn exercise_options() -> Result<String, JsValue> {
    let options: Vec<ExerciseOption> = ExerciseKind::ALL
        .iter()
        .map(|kind| ExerciseOption {
            id: kind.id(),
            label: kind.label(),
        })
        .collect();
    Ok(serde_json::to_string(&options).map_err(GymError::from)?)
}

/// Flat (parent, child) landmark index pairs for drawing the limbs
#[wasm_bindgen]
pub fn limb_skeleton() -> Vec<u32> {
    LIMB_SKELETON
        .iter()
        .flat_map(|(a, b)| [a.landmark_index() as u32, b.landmark_index() as u32])
        .collect()
}
