//! Kinematics module - joint geometry for repetition counting
//!
//! Re-exports only. All logic in submodules.

mod angles;
mod joints;

pub use angles::calculate_angle;
pub use joints::{Joint, JointFrame, Point2D, JOINT_COUNT};
