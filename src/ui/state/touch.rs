// SPDX-License-Identifier: MPL-2.0
//! Touch gesture intent tracking.
//!
//! A finger that lands on the comparison frame can either be sliding the
//! divider or scrolling past the widget. The tracker records where each
//! finger went down and locks the gesture to an axis once it has travelled
//! past a small slop distance. Only horizontal gestures drive the divider.

use crate::app::config::TOUCH_SLOP_PX;
use iced::Point;
use std::collections::HashMap;

/// Axis a touch gesture has been locked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy)]
struct Gesture {
    origin: Point,
    axis: Option<Axis>,
}

/// Per-finger gesture state, keyed by the platform finger id.
#[derive(Debug, Default)]
pub struct TouchTracker {
    gestures: HashMap<u64, Gesture>,
}

impl TouchTracker {
    /// Records a finger landing on the frame.
    pub fn begin(&mut self, finger: u64, origin: Point) {
        self.gestures.insert(
            finger,
            Gesture {
                origin,
                axis: None,
            },
        );
    }

    /// Classifies a finger move.
    ///
    /// Returns `None` for fingers that did not land on the frame and for
    /// gestures still inside the slop distance.
    pub fn classify(&mut self, finger: u64, position: Point) -> Option<Axis> {
        let gesture = self.gestures.get_mut(&finger)?;

        if let Some(axis) = gesture.axis {
            return Some(axis);
        }

        let dx = (position.x - gesture.origin.x).abs();
        let dy = (position.y - gesture.origin.y).abs();
        if dx.max(dy) < TOUCH_SLOP_PX {
            return None;
        }

        let axis = if dx >= dy {
            Axis::Horizontal
        } else {
            Axis::Vertical
        };
        gesture.axis = Some(axis);
        Some(axis)
    }

    /// Forgets a finger once it is lifted or lost.
    pub fn end(&mut self, finger: u64) {
        self.gestures.remove(&finger);
    }

    #[must_use]
    pub fn is_tracking(&self, finger: u64) -> bool {
        self.gestures.contains_key(&finger)
    }
}
