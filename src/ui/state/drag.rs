// SPDX-License-Identifier: MPL-2.0
//! Drag session state
//!
//! Tracks whether the pointer currently owns the comparison divider.

/// Pointer drag session of the comparison divider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragSession {
    /// No pointer button is held on the slider.
    #[default]
    Idle,
    /// The pointer was pressed on the slider and has not been released yet.
    Dragging,
}

impl DragSession {
    /// Starts a drag session. Returns `true` if the session was idle.
    pub fn start(&mut self) -> bool {
        let was_idle = *self == DragSession::Idle;
        *self = DragSession::Dragging;
        was_idle
    }

    /// Ends the drag session. Returns `true` if a drag was in progress.
    pub fn stop(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        *self = DragSession::Idle;
        was_dragging
    }

    #[must_use]
    pub fn is_dragging(self) -> bool {
        self == DragSession::Dragging
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_session_is_idle() {
        assert!(!DragSession::default().is_dragging());
    }

    #[test]
    fn start_then_stop_round_trips() {
        let mut session = DragSession::default();
        assert!(session.start());
        assert!(session.is_dragging());
        assert!(session.stop());
        assert_eq!(session, DragSession::Idle);
    }

    #[test]
    fn repeated_transitions_report_no_change() {
        let mut session = DragSession::default();
        assert!(!session.stop());
        session.start();
        assert!(!session.start());
    }
}
