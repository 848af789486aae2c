// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Divider**: Position range and keyboard steps
//! - **Handle**: Divider line and handle sizes
//! - **Input**: Touch slop distance
//! - **Images**: Aspect ratio tolerance between the two images

// ==========================================================================
// Divider Defaults
// ==========================================================================

/// Initial divider position (even split).
pub const DEFAULT_DIVIDER_PERCENT: f32 = 50.0;

/// Left edge of the divider range.
pub const MIN_DIVIDER_PERCENT: f32 = 0.0;

/// Right edge of the divider range.
pub const MAX_DIVIDER_PERCENT: f32 = 100.0;

/// Default keyboard step in percentage points (arrow keys).
pub const DEFAULT_KEYBOARD_STEP_PERCENT: f32 = 1.0;

/// Minimum keyboard step.
pub const MIN_KEYBOARD_STEP_PERCENT: f32 = 0.1;

/// Maximum keyboard step.
pub const MAX_KEYBOARD_STEP_PERCENT: f32 = 25.0;

/// Multiplier applied to the keyboard step while Shift is held.
pub const COARSE_STEP_MULTIPLIER: f32 = 10.0;

// ==========================================================================
// Handle Defaults
// ==========================================================================

/// Default radius of the round drag handle (logical pixels).
pub const DEFAULT_HANDLE_RADIUS: f32 = 18.0;

/// Minimum handle radius.
pub const MIN_HANDLE_RADIUS: f32 = 8.0;

/// Maximum handle radius.
pub const MAX_HANDLE_RADIUS: f32 = 48.0;

/// Default width of the divider line (logical pixels).
pub const DEFAULT_LINE_WIDTH: f32 = 3.0;

/// Minimum divider line width.
pub const MIN_LINE_WIDTH: f32 = 1.0;

/// Maximum divider line width.
pub const MAX_LINE_WIDTH: f32 = 12.0;

// ==========================================================================
// Input Defaults
// ==========================================================================

/// Distance a finger must travel before its gesture is locked to an axis.
pub const TOUCH_SLOP_PX: f32 = 6.0;

// ==========================================================================
// Image Defaults
// ==========================================================================

/// Relative aspect ratio difference tolerated between before and after.
pub const ASPECT_RATIO_TOLERANCE: f32 = 0.01;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Divider validation
    assert!(MIN_DIVIDER_PERCENT < MAX_DIVIDER_PERCENT);
    assert!(DEFAULT_DIVIDER_PERCENT >= MIN_DIVIDER_PERCENT);
    assert!(DEFAULT_DIVIDER_PERCENT <= MAX_DIVIDER_PERCENT);
    assert!(MIN_KEYBOARD_STEP_PERCENT > 0.0);
    assert!(MAX_KEYBOARD_STEP_PERCENT >= MIN_KEYBOARD_STEP_PERCENT);
    assert!(DEFAULT_KEYBOARD_STEP_PERCENT >= MIN_KEYBOARD_STEP_PERCENT);
    assert!(DEFAULT_KEYBOARD_STEP_PERCENT <= MAX_KEYBOARD_STEP_PERCENT);
    assert!(COARSE_STEP_MULTIPLIER >= 1.0);

    // Handle validation
    assert!(MIN_HANDLE_RADIUS > 0.0);
    assert!(DEFAULT_HANDLE_RADIUS >= MIN_HANDLE_RADIUS);
    assert!(DEFAULT_HANDLE_RADIUS <= MAX_HANDLE_RADIUS);
    assert!(MIN_LINE_WIDTH > 0.0);
    assert!(DEFAULT_LINE_WIDTH >= MIN_LINE_WIDTH);
    assert!(DEFAULT_LINE_WIDTH <= MAX_LINE_WIDTH);

    // Input and image validation
    assert!(TOUCH_SLOP_PX > 0.0);
    assert!(ASPECT_RATIO_TOLERANCE > 0.0);
};
