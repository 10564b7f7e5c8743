//! Repetition state - the record carried between frames

use serde::{Deserialize, Serialize};

/// Discrete posture classification
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Only before the first qualifying frame of a session
    #[default]
    None,
    Down,
    Up,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::None => "none",
            Stage::Down => "down",
            Stage::Up => "up",
        }
    }
}

/// Warning surfaced instead of a count
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RepWarning {
    /// Movement stopped between the down and up thresholds
    #[serde(rename = "Half Rep Warning")]
    HalfRep,
}

impl RepWarning {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepWarning::HalfRep => "Half Rep Warning",
        }
    }
}

impl std::fmt::Display for RepWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-session counter state
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepState {
    /// Completed repetitions
    pub counter: u32,

    /// Current posture stage
    pub stage: Stage,

    /// Partial-rep warning, if any
    pub warning: Option<RepWarning>,
}

impl RepState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter the down stage; always clears the warning
    pub(crate) fn enter_down(&mut self) {
        self.stage = Stage::Down;
        self.warning = None;
    }

    /// Enter the up stage if coming from down. Returns true when a rep was counted.
    pub(crate) fn try_enter_up(&mut self) -> bool {
        if self.stage != Stage::Down {
            return false;
        }
        self.stage = Stage::Up;
        self.counter += 1;
        true
    }

    pub(crate) fn warn(&mut self, warning: RepWarning) {
        self.warning = Some(warning);
    }
}
