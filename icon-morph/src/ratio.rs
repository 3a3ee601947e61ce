//! Scalar mappings shared by the stroke solvers.

use crate::metrics::{Metrics, StrokeWeight};
use crate::shape::Transition;

/// Stages a sub-animation inside `[lo, hi]`: 0 at or below `lo`, 1 at or
/// above `hi`, linear in between. Requires `lo < hi`.
pub fn remap(ratio: f64, lo: f64, hi: f64) -> f64 {
    debug_assert!(lo < hi, "remap range [{lo}, {hi}] is empty");

    if ratio <= lo {
        0.0
    } else if ratio >= hi {
        1.0
    } else {
        (ratio - lo) / (hi - lo)
    }
}

/// Folds progress `[0, 2]` onto `[0, 1]`: rises to 1 at the midpoint, then
/// falls back, so A->B and B->A trace the same path.
pub fn triangular_ratio(progress: f64) -> f64 {
    if progress <= 1.0 { progress } else { 2.0 - progress }
}

/// `progress <= 1` runs first->second, anything above runs back.
pub fn is_forward(progress: f64) -> bool {
    progress <= 1.0
}

/// How far a line end is pulled in, scaled by stroke weight. Grows from zero
/// for most transitions; shrinks toward zero for the cross-related ones.
pub fn stroke_shortening(
    ratio: f64,
    weight: StrokeWeight,
    transition: Transition,
    metrics: &Metrics,
) -> f64 {
    let full = match weight {
        StrokeWeight::Bold => metrics.u(3.0),
        StrokeWeight::Regular => metrics.u(3.5),
        StrokeWeight::Thin => metrics.u(4.0),
    };

    if transition.shrinks_shortening() {
        full - full * ratio
    } else {
        ratio * full
    }
}

/// Scales an opacity ratio to `0..=255`.
pub(crate) fn alpha(ratio: f64) -> u8 {
    (ratio * 255.0) as u8
}
