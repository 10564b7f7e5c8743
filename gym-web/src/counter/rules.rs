//! Exercise rules - per-exercise joint selection and stage thresholds
//!
//! One variant per exercise. Each variant carries its own thresholds and
//! decides which joint triples to measure.
//!
//! Per frame the order is fixed: down-entry test, then up-entry test
//! (which counts the rep), then the partial-rep test. The down branch
//! clears the warning; the partial test of the same frame may set it again.

use serde::{Deserialize, Serialize};

use super::exercise::ExerciseKind;
use super::state::{RepState, RepWarning};
use crate::kinematics::{calculate_angle, Joint, JointFrame, Point2D};

/// Shoulder-elbow-wrist of the tracked (left) arm
const LEFT_ARM: (Joint, Joint, Joint) = (Joint::LeftShoulder, Joint::LeftElbow, Joint::LeftWrist);
const LEFT_LEG: (Joint, Joint, Joint) = (Joint::LeftHip, Joint::LeftKnee, Joint::LeftAnkle);
const RIGHT_LEG: (Joint, Joint, Joint) = (Joint::RightHip, Joint::RightKnee, Joint::RightAnkle);

/// Elbow thresholds in degrees (180° = straight arm)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArmThresholds {
    /// Angle above which the arm counts as extended ("down")
    pub extended_above: f32,
    /// Angle below which a rep completes ("up")
    pub flexed_below: f32,
    /// Upper bound (exclusive) of the partial-rep band
    pub partial_below: f32,
    /// Lower bound (inclusive) of the partial-rep band
    pub partial_floor: f32,
}

impl ArmThresholds {
    pub const BICEP_CURL: Self = Self {
        extended_above: 160.0,
        flexed_below: 35.0,
        partial_below: 90.0,
        partial_floor: 35.0,
    };

    /// No floor: any bend under 90° that did not count a rep warns
    pub const PUSHUP: Self = Self {
        extended_above: 160.0,
        flexed_below: 30.0,
        partial_below: 90.0,
        partial_floor: 0.0,
    };

    fn is_partial(&self, angle: f32) -> bool {
        angle >= self.partial_floor && angle < self.partial_below
    }
}

/// Knee thresholds in degrees
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LegThresholds {
    /// Both knees below this: squatted ("down")
    pub bent_below: f32,
    /// Both knees above this: standing ("up")
    pub straight_above: f32,
}

impl LegThresholds {
    pub const SQUAT: Self = Self {
        bent_below: 75.0,
        straight_above: 170.0,
    };

    /// Strictly between the two thresholds
    fn is_partial(&self, angle: f32) -> bool {
        angle > self.bent_below && angle < self.straight_above
    }
}

/// One angle measured this frame, anchored at its vertex joint
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AngleReading {
    pub joint: Joint,
    pub degrees: f32,
    /// Vertex position (normalized), for drawing the value next to the joint
    pub anchor: Point2D,
}

impl AngleReading {
    fn measure(frame: &JointFrame, triple: (Joint, Joint, Joint)) -> Self {
        let (proximal, vertex, distal) = frame.triple(triple);
        Self {
            joint: triple.1,
            degrees: calculate_angle(proximal, vertex, distal),
            anchor: vertex,
        }
    }
}

/// Transition rule for one exercise
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "exercise", rename_all = "snake_case")]
pub enum ExerciseRule {
    BicepCurl(ArmThresholds),
    Pushup(ArmThresholds),
    Squat(LegThresholds),
    /// No rule yet: state never changes, nothing is measured
    OverheadPress,
}

impl ExerciseRule {
    /// Default rule for an exercise
    pub fn for_exercise(kind: ExerciseKind) -> Self {
        match kind {
            ExerciseKind::BicepCurl => ExerciseRule::BicepCurl(ArmThresholds::BICEP_CURL),
            ExerciseKind::Pushup => ExerciseRule::Pushup(ArmThresholds::PUSHUP),
            ExerciseKind::Squat => ExerciseRule::Squat(LegThresholds::SQUAT),
            ExerciseKind::OverheadPress => ExerciseRule::OverheadPress,
        }
    }

    pub fn exercise(&self) -> ExerciseKind {
        match self {
            ExerciseRule::BicepCurl(_) => ExerciseKind::BicepCurl,
            ExerciseRule::Pushup(_) => ExerciseKind::Pushup,
            ExerciseRule::Squat(_) => ExerciseKind::Squat,
            ExerciseRule::OverheadPress => ExerciseKind::OverheadPress,
        }
    }

    /// Measure the frame and advance `state`. Returns the angles measured.
    pub fn apply(&self, state: &mut RepState, frame: &JointFrame) -> Vec<AngleReading> {
        match self {
            ExerciseRule::BicepCurl(thresholds) | ExerciseRule::Pushup(thresholds) => {
                let elbow = AngleReading::measure(frame, LEFT_ARM);
                apply_arm(thresholds, state, elbow.degrees);
                vec![elbow]
            }
            ExerciseRule::Squat(thresholds) => {
                let left = AngleReading::measure(frame, LEFT_LEG);
                let right = AngleReading::measure(frame, RIGHT_LEG);
                apply_legs(thresholds, state, left.degrees, right.degrees);
                vec![left, right]
            }
            ExerciseRule::OverheadPress => Vec::new(),
        }
    }
}

impl Default for ExerciseRule {
    fn default() -> Self {
        Self::for_exercise(ExerciseKind::default())
    }
}

/// Single-angle rule shared by curls and pushups
pub(crate) fn apply_arm(t: &ArmThresholds, state: &mut RepState, angle: f32) {
    if angle > t.extended_above {
        state.enter_down();
    }

    let counted = angle < t.flexed_below && state.try_enter_up();

    if !counted && t.is_partial(angle) {
        state.warn(RepWarning::HalfRep);
    }
}

/// Two-leg rule for squats. Both knees must agree for either stage.
pub(crate) fn apply_legs(t: &LegThresholds, state: &mut RepState, left: f32, right: f32) {
    if left < t.bent_below && right < t.bent_below {
        state.enter_down();
    }

    if left > t.straight_above && right > t.straight_above {
        state.try_enter_up();
    }

    if t.is_partial(left) && t.is_partial(right) {
        state.warn(RepWarning::HalfRep);
    }
}
