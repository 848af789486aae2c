// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Divider percentages and frame coordinates are `f32`, so tests compare them
//! with `approx` instead of `assert_eq!` wherever arithmetic is involved.

pub use approx::assert_abs_diff_eq;
