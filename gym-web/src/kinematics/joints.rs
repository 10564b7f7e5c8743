//! Body joints and per-frame joint snapshots
//!
//! Joint indices follow MediaPipe Pose (33 landmarks). Only the limb
//! joints the counter reads are kept in a [`JointFrame`].

use serde::{Deserialize, Serialize};

/// A 2D point in normalized image coordinates (nominally 0-1)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f32,
    pub y: f32,
}

impl Point2D {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Scale to pixel space (e.g. for label anchors)
    pub fn to_pixels(&self, width: u32, height: u32) -> (i32, i32) {
        (
            (self.x * width as f32) as i32,
            (self.y * height as f32) as i32,
        )
    }
}

impl From<(f32, f32)> for Point2D {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// Number of joints stored per frame
pub const JOINT_COUNT: usize = 12;

/// Limb joints used by the exercise rules
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Joint {
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftWrist,
    RightWrist,
    LeftHip,
    RightHip,
    LeftKnee,
    RightKnee,
    LeftAnkle,
    RightAnkle,
}

impl Joint {
    pub const ALL: [Joint; JOINT_COUNT] = [
        Joint::LeftShoulder,
        Joint::RightShoulder,
        Joint::LeftElbow,
        Joint::RightElbow,
        Joint::LeftWrist,
        Joint::RightWrist,
        Joint::LeftHip,
        Joint::RightHip,
        Joint::LeftKnee,
        Joint::RightKnee,
        Joint::LeftAnkle,
        Joint::RightAnkle,
    ];

    /// Index into the MediaPipe Pose landmark array
    pub const fn landmark_index(self) -> usize {
        match self {
            Joint::LeftShoulder => 11,
            Joint::RightShoulder => 12,
            Joint::LeftElbow => 13,
            Joint::RightElbow => 14,
            Joint::LeftWrist => 15,
            Joint::RightWrist => 16,
            Joint::LeftHip => 23,
            Joint::RightHip => 24,
            Joint::LeftKnee => 25,
            Joint::RightKnee => 26,
            Joint::LeftAnkle => 27,
            Joint::RightAnkle => 28,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Joint::LeftShoulder => "LEFT_SHOULDER",
            Joint::RightShoulder => "RIGHT_SHOULDER",
            Joint::LeftElbow => "LEFT_ELBOW",
            Joint::RightElbow => "RIGHT_ELBOW",
            Joint::LeftWrist => "LEFT_WRIST",
            Joint::RightWrist => "RIGHT_WRIST",
            Joint::LeftHip => "LEFT_HIP",
            Joint::RightHip => "RIGHT_HIP",
            Joint::LeftKnee => "LEFT_KNEE",
            Joint::RightKnee => "RIGHT_KNEE",
            Joint::LeftAnkle => "LEFT_ANKLE",
            Joint::RightAnkle => "RIGHT_ANKLE",
        }
    }

    /// Slot inside a [`JointFrame`]
    const fn slot(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Joint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One frame's worth of joint positions
///
/// Always complete: the oracle supplies every joint or no frame at all.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct JointFrame {
    points: [Point2D; JOINT_COUNT],
}

impl JointFrame {
    /// Build a frame by asking for each joint's position
    pub fn from_fn(mut position: impl FnMut(Joint) -> Point2D) -> Self {
        let mut points = [Point2D::default(); JOINT_COUNT];
        for joint in Joint::ALL {
            points[joint.slot()] = position(joint);
        }
        Self { points }
    }

    pub fn get(&self, joint: Joint) -> Point2D {
        self.points[joint.slot()]
    }

    pub fn set(&mut self, joint: Joint, point: Point2D) {
        self.points[joint.slot()] = point;
    }

    /// Builder-style variant of [`JointFrame::set`]
    pub fn with(mut self, joint: Joint, point: Point2D) -> Self {
        self.set(joint, point);
        self
    }

    /// Positions of a proximal/vertex/distal triple
    pub fn triple(&self, (a, b, c): (Joint, Joint, Joint)) -> (Point2D, Point2D, Point2D) {
        (self.get(a), self.get(b), self.get(c))
    }
}
