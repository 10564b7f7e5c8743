//! Landmark decoding
//!
//! MediaPipe Pose hands JavaScript 33 landmarks per frame. The host passes
//! them on as a flat Float32Array (x, y, z per landmark); this module picks
//! out the limb joints the counter reads.

use crate::error::GymError;
use crate::kinematics::{Joint, JointFrame, Point2D};

// ============================================================================
// LAYOUT (MediaPipe Pose - 33 total)
// ============================================================================

pub const LANDMARK_COUNT: usize = 33;
pub const VALUES_PER_LANDMARK: usize = 3;

/// Flat array length for one frame
pub const FRAME_LEN: usize = LANDMARK_COUNT * VALUES_PER_LANDMARK;

/// Skeleton connections between counted joints (for host-side drawing)
pub const LIMB_SKELETON: [(Joint, Joint); 10] = [
    (Joint::LeftShoulder, Joint::RightShoulder),
    (Joint::LeftShoulder, Joint::LeftElbow),
    (Joint::LeftElbow, Joint::LeftWrist),
    (Joint::RightShoulder, Joint::RightElbow),
    (Joint::RightElbow, Joint::RightWrist),
    (Joint::LeftHip, Joint::RightHip),
    (Joint::LeftHip, Joint::LeftKnee),
    (Joint::LeftKnee, Joint::LeftAnkle),
    (Joint::RightHip, Joint::RightKnee),
    (Joint::RightKnee, Joint::RightAnkle),
];

// ============================================================================
// DECODING
// ============================================================================

/// Decode one frame of landmarks
///
/// An empty slice means no body was detected and yields `Ok(None)`.
/// Wrong lengths and non-finite joint coordinates are rejected so the
/// caller can skip the frame without touching the counter.
pub fn decode_landmarks(data: &[f32]) -> Result<Option<JointFrame>, GymError> {
    if data.is_empty() {
        return Ok(None);
    }

    if data.len() != FRAME_LEN {
        return Err(GymError::landmark_count(FRAME_LEN, data.len()));
    }

    let mut frame = JointFrame::default();
    for joint in Joint::ALL {
        let base = joint.landmark_index() * VALUES_PER_LANDMARK;
        let point = Point2D::new(data[base], data[base + 1]);
        if !point.is_finite() {
            return Err(GymError::NonFiniteCoordinate { joint: joint.name() });
        }
        frame.set(joint, point);
    }

    Ok(Some(frame))
}
