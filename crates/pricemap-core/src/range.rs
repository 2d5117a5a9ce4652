//! Pointer-driven price range slider mapping.
//!
//! A slider track spans the dataset's `[min, max]`. Pointer positions map
//! linearly onto it; which bound moves is decided by [`RangeHandle`], and the
//! clamping that keeps `min <= max` lives in [`crate::FilterCriteria`].

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::store::PriceBounds;

/// The two handles of the price range slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeHandle {
    Min,
    Max,
}

/// Position of `pointer_x` along a track starting at `track_left` and
/// `track_width` wide, clamped to `[0, 1]`.
///
/// A zero-width or non-finite track yields `0.0`. Used by interactive
/// front-ends to feed [`crate::FilterCriteria::drag`].
#[must_use]
pub fn pointer_fraction(pointer_x: f64, track_left: f64, track_width: f64) -> f64 {
    if !(track_width.is_finite() && track_width > 0.0) {
        return 0.0;
    }
    let fraction = (pointer_x - track_left) / track_width;
    if fraction.is_nan() {
        return 0.0;
    }
    fraction.clamp(0.0, 1.0)
}

/// Price at `fraction` of the way from `bounds.min` to `bounds.max`,
/// rounded to cents.
#[must_use]
pub fn drag_value(bounds: PriceBounds, fraction: f64) -> Decimal {
    let fraction = if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    };
    let fraction = Decimal::from_f64(fraction).unwrap_or(Decimal::ZERO);
    bounds
        .span()
        .checked_mul(fraction)
        .and_then(|offset| bounds.min.checked_add(offset))
        .map_or(bounds.max, |value| value.round_dp(2))
}
