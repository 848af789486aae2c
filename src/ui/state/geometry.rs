// SPDX-License-Identifier: MPL-2.0
//! Frame geometry for the comparison slider.
//!
//! The slider never caches layout. Both the drawing code and the event
//! handling derive the frame from the bounds they are handed for the current
//! frame or event, so a resize or reflow is picked up by the next event.

use super::divider::DividerPosition;
use iced::{Rectangle, Size};

/// Fits a content of `content` size inside `bounds`, preserving its aspect
/// ratio and centering it (the `ContentFit::Contain` rule).
///
/// Returns `bounds` unchanged when either size is degenerate, so an image
/// whose dimensions are unknown simply fills the available space.
#[must_use]
pub fn fit_contain(bounds: Rectangle, content: Size) -> Rectangle {
    if content.width <= 0.0 || content.height <= 0.0 || bounds.width <= 0.0 || bounds.height <= 0.0
    {
        return bounds;
    }

    let content_aspect = content.width / content.height;
    let bounds_aspect = bounds.width / bounds.height;

    if content_aspect > bounds_aspect {
        // Wider than the bounds: fit to width
        let height = bounds.width / content_aspect;
        Rectangle {
            x: bounds.x,
            y: bounds.y + (bounds.height - height) / 2.0,
            width: bounds.width,
            height,
        }
    } else {
        // Taller than the bounds: fit to height
        let width = bounds.height * content_aspect;
        Rectangle {
            x: bounds.x + (bounds.width - width) / 2.0,
            y: bounds.y,
            width,
            height: bounds.height,
        }
    }
}

/// Horizontal extent of the comparison frame, in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameGeometry {
    pub left: f32,
    pub width: f32,
}

impl FrameGeometry {
    #[must_use]
    pub fn new(left: f32, width: f32) -> Self {
        Self { left, width }
    }

    /// Whether the frame has been laid out with a usable width.
    #[must_use]
    pub fn is_measured(&self) -> bool {
        self.left.is_finite() && self.width.is_finite() && self.width > 0.0
    }

    /// Maps a horizontal window coordinate to a divider position.
    ///
    /// Returns `None` for an unmeasured frame; callers keep the current
    /// position in that case.
    #[must_use]
    pub fn position_at(&self, x: f32) -> Option<DividerPosition> {
        if !self.is_measured() || !x.is_finite() {
            return None;
        }
        let raw = (x - self.left) / self.width * 100.0;
        Some(DividerPosition::new(raw))
    }

    /// Window x coordinate of the divider for `position`.
    #[must_use]
    pub fn x_of(&self, position: DividerPosition) -> f32 {
        self.left + self.width * position.fraction()
    }
}

impl From<Rectangle> for FrameGeometry {
    fn from(rect: Rectangle) -> Self {
        Self::new(rect.x, rect.width)
    }
}
