//! Exercise selection
//!
//! The exercise is chosen once per session from the selector options.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GymError;

/// Exercise tracked by a session
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
    #[default]
    #[serde(alias = "bicep_curls")]
    BicepCurl,
    #[serde(alias = "pushups")]
    Pushup,
    OverheadPress,
    #[serde(alias = "squats")]
    Squat,
}

impl ExerciseKind {
    /// Selector options, in display order
    pub const ALL: [ExerciseKind; 4] = [
        ExerciseKind::BicepCurl,
        ExerciseKind::Pushup,
        ExerciseKind::OverheadPress,
        ExerciseKind::Squat,
    ];

    pub fn from_index(idx: usize) -> Option<Self> {
        Self::ALL.get(idx).copied()
    }

    /// Human-readable selector label
    pub fn label(&self) -> &'static str {
        match self {
            ExerciseKind::BicepCurl => "Bicep Curls",
            ExerciseKind::Pushup => "Pushups",
            ExerciseKind::OverheadPress => "Overhead Press",
            ExerciseKind::Squat => "Squats",
        }
    }

    /// Stable tracker id
    pub fn id(&self) -> &'static str {
        match self {
            ExerciseKind::BicepCurl => "bicep_curls",
            ExerciseKind::Pushup => "pushups",
            ExerciseKind::OverheadPress => "overhead_press",
            ExerciseKind::Squat => "squats",
        }
    }
}

impl fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExerciseKind {
    type Err = GymError;

    /// Accepts either the selector label or the tracker id
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| {
                kind.label().eq_ignore_ascii_case(wanted) || kind.id().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| GymError::UnknownExercise(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_labels_and_ids() {
        assert_eq!("Bicep Curls".parse::<ExerciseKind>().unwrap(), ExerciseKind::BicepCurl);
        assert_eq!("pushups".parse::<ExerciseKind>().unwrap(), ExerciseKind::Pushup);
        assert_eq!(" Overhead Press ".parse::<ExerciseKind>().unwrap(), ExerciseKind::OverheadPress);
        assert_eq!("SQUATS".parse::<ExerciseKind>().unwrap(), ExerciseKind::Squat);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "deadlift".parse::<ExerciseKind>().unwrap_err();
        assert!(matches!(err, GymError::UnknownExercise(ref s) if s == "deadlift"));
    }

    #[test]
    fn test_from_index() {
        assert_eq!(ExerciseKind::from_index(0), Some(ExerciseKind::BicepCurl));
        assert_eq!(ExerciseKind::from_index(3), Some(ExerciseKind::Squat));
        assert_eq!(ExerciseKind::from_index(4), None);
    }

    #[test]
    fn test_serde_accepts_tracker_ids() {
        let kind: ExerciseKind = serde_json::from_str("\"squats\"").unwrap();
        assert_eq!(kind, ExerciseKind::Squat);
        let kind: ExerciseKind = serde_json::from_str("\"overhead_press\"").unwrap();
        assert_eq!(kind, ExerciseKind::OverheadPress);
        assert_eq!(serde_json::to_string(&ExerciseKind::BicepCurl).unwrap(), "\"bicep_curl\"");
    }
}
