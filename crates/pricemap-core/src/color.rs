//! Price-to-color mapping for visual price cues.

use std::fmt;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::store::PriceBounds;

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Cheapest end of the scale.
    pub const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
    /// Most expensive end of the scale.
    pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };

    /// `#rrggbb` form, for front-ends that style swatches with CSS.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Linear green-to-red color for `price` within `bounds`.
///
/// Red rises and green falls with `(price - min) / (max - min)`; blue stays 0.
/// Degenerate bounds (`min == max`) produce [`Rgb::GREEN`]. Prices outside
/// the bounds are clamped to the nearest end.
#[must_use]
pub fn color_for_price(price: Decimal, bounds: PriceBounds) -> Rgb {
    color_at(price_percentage(price, bounds))
}

/// Color at `fraction` of the way along the green-to-red scale, clamped to
/// `[0, 1]`.
#[must_use]
pub fn color_at(fraction: f64) -> Rgb {
    Rgb {
        r: channel(fraction),
        g: channel(1.0 - fraction),
        b: 0,
    }
}

/// Relative position of `price` within `bounds`, in `[0, 1]`.
#[must_use]
pub fn price_percentage(price: Decimal, bounds: PriceBounds) -> f64 {
    if bounds.is_degenerate() {
        return 0.0;
    }
    let ratio = (price - bounds.min) / bounds.span();
    ratio.to_f64().unwrap_or(0.0).clamp(0.0, 1.0)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel(fraction: f64) -> u8 {
    (fraction.clamp(0.0, 1.0) * 255.0).round() as u8
}
