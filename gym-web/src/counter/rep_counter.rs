//! Repetition counter - one per tracked session
//!
//! Owns the session's [`RepState`] and the rule of the selected exercise.
//! Frames go in one at a time through [`RepCounter::update`].
//! Rep events are `tracing::debug!`; without a subscriber (the browser
//! build installs none) they are dropped.

use serde::Serialize;
use tracing::debug;

use super::exercise::ExerciseKind;
use super::rules::{AngleReading, ExerciseRule};
use super::state::RepState;
use crate::kinematics::JointFrame;

/// Result of one frame: the state after the frame plus the angles measured
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RepUpdate {
    #[serde(flatten)]
    pub state: RepState,

    /// Empty when no body was detected or the exercise has no rule
    pub angles: Vec<AngleReading>,
}

/// Per-session repetition state machine
#[derive(Clone, Debug)]
pub struct RepCounter {
    rule: ExerciseRule,
    state: RepState,
}

impl RepCounter {
    pub fn new(exercise: ExerciseKind) -> Self {
        Self::with_rule(ExerciseRule::for_exercise(exercise))
    }

    /// Counter with custom thresholds
    pub fn with_rule(rule: ExerciseRule) -> Self {
        debug!(exercise = %rule.exercise(), "rep counter created");
        Self {
            rule,
            state: RepState::new(),
        }
    }

    pub fn exercise(&self) -> ExerciseKind {
        self.rule.exercise()
    }

    pub fn rule(&self) -> &ExerciseRule {
        &self.rule
    }

    pub fn state(&self) -> &RepState {
        &self.state
    }

    /// Feed one frame
    ///
    /// `None` means the oracle detected no body this frame: the state is
    /// returned unchanged.
    pub fn update(&mut self, frame: Option<&JointFrame>) -> RepUpdate {
        let Some(frame) = frame else {
            return RepUpdate {
                state: self.state.clone(),
                angles: Vec::new(),
            };
        };

        let before = self.state.counter;
        let angles = self.rule.apply(&mut self.state, frame);

        if self.state.counter != before {
            debug!(
                exercise = %self.rule.exercise(),
                counter = self.state.counter,
                "repetition counted"
            );
        }

        RepUpdate {
            state: self.state.clone(),
            angles,
        }
    }

    /// Start over: counter 0, no stage, no warning
    pub fn reset(&mut self) {
        debug!(exercise = %self.rule.exercise(), "rep counter reset");
        self.state = RepState::new();
    }
}

impl Default for RepCounter {
    fn default() -> Self {
        Self::new(ExerciseKind::default())
    }
}
