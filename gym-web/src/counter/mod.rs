//! Counter module - per-exercise repetition state machine
//!
//! Re-exports only. All logic in submodules.

mod exercise;
mod rep_counter;
mod rules;
mod state;

pub use exercise::ExerciseKind;
pub use rep_counter::{RepCounter, RepUpdate};
pub use rules::{AngleReading, ArmThresholds, ExerciseRule, LegThresholds};
pub use state::{RepState, RepWarning, Stage};
