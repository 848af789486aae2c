// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Pointer and touch input is handled by the slider canvas itself. Only
//! window-level concerns are routed here: dropped files, and divider keys
//! while a comparison is on screen.

use super::Message;
use crate::ui::comparison::KeyCommand;
use iced::{event, keyboard, window, Event, Subscription};

/// Creates the event subscription for the current state.
///
/// Keyboard routing is only active while comparing, so the listener goes
/// away together with the comparison.
pub fn create_event_subscription(comparing: bool) -> Subscription<Message> {
    let files = event::listen_with(route_file_drop);

    if comparing {
        Subscription::batch([files, event::listen_with(route_divider_keys)])
    } else {
        files
    }
}

fn route_file_drop(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        _ => None,
    }
}

fn route_divider_keys(
    event: Event,
    status: event::Status,
    _window: window::Id,
) -> Option<Message> {
    // Keys already consumed by a focused widget are not ours
    if status == event::Status::Captured {
        return None;
    }

    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            KeyCommand::from_key(&key, modifiers).map(Message::Key)
        }
        _ => None,
    }
}
