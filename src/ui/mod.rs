// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following the Elm-style
//! "state down, messages up" pattern.
//!
//! - [`comparison`] - Before/after slider component and its canvas
//! - [`state`] - Plain state types (divider position, drag session, touch)
//! - [`styles`] - Centralized button styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod comparison;
pub mod design_tokens;
pub mod state;
pub mod styles;
pub mod theming;
