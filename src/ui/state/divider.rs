// SPDX-License-Identifier: MPL-2.0
//! Divider position newtype.
//!
//! The divider is expressed as the percentage of the comparison frame width
//! that shows the "before" image. Every way of producing a position goes
//! through [`DividerPosition::new`], so a value outside `[0, 100]` or a NaN
//! can never be observed.

use crate::app::config::{DEFAULT_DIVIDER_PERCENT, MAX_DIVIDER_PERCENT, MIN_DIVIDER_PERCENT};
use std::fmt;

/// Percentage of the frame width revealed as "before", clamped to `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct DividerPosition(f32);

impl DividerPosition {
    /// Left edge: the whole frame shows the "after" image.
    pub const START: Self = Self(MIN_DIVIDER_PERCENT);

    /// Right edge: the whole frame shows the "before" image.
    pub const END: Self = Self(MAX_DIVIDER_PERCENT);

    /// Creates a position from a raw percentage.
    ///
    /// Out-of-range values are clamped; NaN falls back to the even split.
    #[must_use]
    pub fn new(percent: f32) -> Self {
        if percent.is_nan() {
            return Self::default();
        }
        Self(percent.clamp(MIN_DIVIDER_PERCENT, MAX_DIVIDER_PERCENT))
    }

    /// Returns the percentage value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the position as a fraction in `[0, 1]`.
    #[must_use]
    pub fn fraction(self) -> f32 {
        self.0 / MAX_DIVIDER_PERCENT
    }

    /// Returns a new position moved by `delta` percentage points.
    #[must_use]
    pub fn nudged(self, delta: f32) -> Self {
        Self::new(self.0 + delta)
    }
}

impl Default for DividerPosition {
    fn default() -> Self {
        Self(DEFAULT_DIVIDER_PERCENT)
    }
}

impl fmt::Display for DividerPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn default_is_even_split() {
        assert_eq!(DividerPosition::default().value(), 50.0);
    }

    #[test]
    fn new_clamps_out_of_range_values() {
        assert_eq!(DividerPosition::new(-12.0), DividerPosition::START);
        assert_eq!(DividerPosition::new(140.0), DividerPosition::END);
        assert_eq!(DividerPosition::new(f32::INFINITY), DividerPosition::END);
        assert_eq!(DividerPosition::new(f32::NEG_INFINITY), DividerPosition::START);
    }

    #[test]
    fn nan_falls_back_to_default() {
        assert_eq!(DividerPosition::new(f32::NAN), DividerPosition::default());
    }

    #[test]
    fn fraction_maps_percent_to_unit_range() {
        assert_abs_diff_eq!(DividerPosition::new(25.0).fraction(), 0.25);
        assert_abs_diff_eq!(DividerPosition::END.fraction(), 1.0);
    }

    #[test]
    fn nudged_stays_in_range() {
        let pos = DividerPosition::new(98.0);
        assert_eq!(pos.nudged(5.0), DividerPosition::END);
        assert_eq!(DividerPosition::new(1.0).nudged(-10.0), DividerPosition::START);
        assert_abs_diff_eq!(DividerPosition::default().nudged(-1.5).value(), 48.5);
    }

    #[test]
    fn display_rounds_to_whole_percent() {
        assert_eq!(DividerPosition::new(12.4).to_string(), "12");
        assert_eq!(DividerPosition::new(37.6).to_string(), "38");
    }
}
