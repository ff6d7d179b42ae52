use std::f32::consts::{PI, TAU};

/// Signed shortest rotation from `b` to `a`, in radians within `[-π, π]`.
///
/// Inputs are expected within `(-π, π]` (as produced by `atan2`), so one wrap
/// correction is enough.
#[inline]
pub fn angular_difference(a: f32, b: f32) -> f32 {
    let diff = a - b;
    if diff < -PI {
        diff + TAU
    } else if diff > PI {
        diff - TAU
    } else {
        diff
    }
}
