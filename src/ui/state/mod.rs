// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Plain state types used by the comparison component, kept free of any
//! rendering so they can be tested without a window.

pub mod divider;
pub mod drag;
pub mod geometry;
pub mod touch;

// Re-export commonly used types for convenience
pub use divider::DividerPosition;
pub use drag::DragSession;
pub use geometry::FrameGeometry;
pub use touch::TouchTracker;
