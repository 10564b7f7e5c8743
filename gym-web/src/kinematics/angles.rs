//! Joint angle calculation using polar angle difference
//!
//! Calculates the interior angle at a vertex joint from the directions
//! vertex→proximal and vertex→distal.

use super::joints::Point2D;

/// Calculate the interior angle at `vertex` in degrees
///
/// Difference of the two rays' polar angles:
/// θ = |atan2(distal - vertex) - atan2(proximal - vertex)|
///
/// Returns angle in degrees, always in [0, 180]:
/// - 0° = fully folded (distal lies along the proximal ray)
/// - 180° = fully straight (vertex between the other two)
///
/// Coincident points are not guarded: atan2(0, 0) is 0, so a collapsed
/// ray reads as pointing along +x.
pub fn calculate_angle(proximal: Point2D, vertex: Point2D, distal: Point2D) -> f32 {
    let to_distal = (distal.y - vertex.y).atan2(distal.x - vertex.x);
    let to_proximal = (proximal.y - vertex.y).atan2(proximal.x - vertex.x);

    let angle = (to_distal - to_proximal).to_degrees().abs();

    // Reflect the reflex side back into [0, 180]
    if angle > 180.0 {
        360.0 - angle
    } else {
        angle
    }
}
