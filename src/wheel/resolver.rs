//! Segment resolution
//!
//! Maps a cumulative wheel rotation onto the segment sitting under the
//! fixed pointer at the top of the wheel. The wheel turns clockwise, so the
//! point of the wheel under the pointer is the rotation measured backwards.

use std::num::NonZeroUsize;

use super::segment::{Segment, Segments};

/// Slack for treating a float as lying exactly on a segment boundary.
///
/// `360 / n` is rarely exact, so `k * width / width` can land a hair below `k`.
const BOUNDARY_EPSILON: f64 = 1e-9;

/// Reduce any angle into `[0, 360)` using a true (Euclidean) modulus
pub fn normalize_degrees(degrees: f64) -> f64 {
    let normalized = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Angle in the wheel's own frame that sits under the pointer
pub fn pointer_angle(total_rotation: f64) -> f64 {
    normalize_degrees(360.0 - normalize_degrees(total_rotation))
}

/// Index of the segment drawn at `wheel_angle` in the unrotated wheel frame.
///
/// Boundaries belong to the segment that starts there.
pub fn segment_index_at(wheel_angle: f64, count: NonZeroUsize) -> usize {
    let n = count.get();
    let width = 360.0 / n as f64;
    let slot = normalize_degrees(wheel_angle) / width;

    let nearest = slot.round();
    let slot = if (slot - nearest).abs() < BOUNDARY_EPSILON {
        nearest
    } else {
        slot.floor()
    };

    (slot as usize) % n
}

/// Index of the winning segment after the wheel has turned `total_rotation` degrees.
///
/// # Panics
///
/// Panics if `total_rotation` is NaN or infinite.
pub fn winning_index(total_rotation: f64, count: NonZeroUsize) -> usize {
    assert!(
        total_rotation.is_finite(),
        "wheel rotation must be finite, got {total_rotation}"
    );
    segment_index_at(pointer_angle(total_rotation), count)
}

/// The segment under the pointer after the wheel has turned `total_rotation` degrees
pub fn resolve(total_rotation: f64, segments: &Segments) -> &Segment {
    let index = winning_index(total_rotation, segments.count());
    // winning_index is always below the segment count
    &segments.as_slice()[index]
}
