// SPDX-License-Identifier: MPL-2.0
//! Before/after comparison component.
//!
//! Owns the image pair, the divider position and the pointer drag session.
//! All input arrives as [`Message`]s produced by the slider canvas (pointer
//! and touch) or by the application (keyboard, toolbar). The component is
//! created when both images are available and dropped when the comparison
//! is closed, which also drops any drag session in progress.

mod slider;

pub use slider::{ComparisonSlider, SliderStyle};

use crate::app::config::{SliderSettings, COARSE_STEP_MULTIPLIER};
use crate::i18n::fluent::I18n;
use crate::media::{aspect_ratios_match, LoadedImage};
use crate::ui::state::{DividerPosition, DragSession, FrameGeometry};
use crate::ui::theming::ColorScheme;
use iced::keyboard::{self, key::Named, Key};
use iced::widget::Canvas;
use iced::{Element, Length};

/// Which image of the pair an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Before,
    After,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Primary button pressed on the frame.
    PointerPressed,
    /// Cursor moved anywhere in the window.
    PointerMoved { x: f32, frame: FrameGeometry },
    /// Primary button released anywhere in the window.
    PointerReleased,
    /// Horizontal touch gesture on the frame.
    TouchMoved { x: f32, frame: FrameGeometry },
    /// Relative move in percentage points.
    Nudge(f32),
    /// Absolute move.
    JumpTo(DividerPosition),
    /// Back to the even split.
    Reset,
}

/// Outcome of [`State::update`], reported to the application.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    None,
    DragStarted,
    DragEnded,
    PositionChanged(DividerPosition),
}

/// Keyboard commands understood by the divider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    StepLeft { coarse: bool },
    StepRight { coarse: bool },
    Start,
    End,
}

impl KeyCommand {
    /// Maps a key press to a divider command.
    #[must_use]
    pub fn from_key(key: &Key, modifiers: keyboard::Modifiers) -> Option<Self> {
        let coarse = modifiers.shift();
        match key {
            Key::Named(Named::ArrowLeft) => Some(KeyCommand::StepLeft { coarse }),
            Key::Named(Named::ArrowRight) => Some(KeyCommand::StepRight { coarse }),
            Key::Named(Named::Home) => Some(KeyCommand::Start),
            Key::Named(Named::End) => Some(KeyCommand::End),
            _ => None,
        }
    }

    /// Converts the command to a component message using `step` percentage
    /// points per arrow press.
    #[must_use]
    pub fn into_message(self, step: f32) -> Message {
        let scaled = |coarse: bool| {
            if coarse {
                step * COARSE_STEP_MULTIPLIER
            } else {
                step
            }
        };
        match self {
            KeyCommand::StepLeft { coarse } => Message::Nudge(-scaled(coarse)),
            KeyCommand::StepRight { coarse } => Message::Nudge(scaled(coarse)),
            KeyCommand::Start => Message::JumpTo(DividerPosition::START),
            KeyCommand::End => Message::JumpTo(DividerPosition::END),
        }
    }
}

/// Environment needed to render the comparison.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    pub settings: SliderSettings,
    pub colors: &'a ColorScheme,
}

#[derive(Debug, Clone)]
pub struct State {
    before: LoadedImage,
    after: LoadedImage,
    position: DividerPosition,
    drag: DragSession,
}

impl State {
    #[must_use]
    pub fn new(before: LoadedImage, after: LoadedImage) -> Self {
        if !aspect_ratios_match(&before.data, &after.data) {
            tracing::warn!(
                before = %before.path.display(),
                after = %after.path.display(),
                "before and after images have different aspect ratios"
            );
        }
        Self {
            before,
            after,
            position: DividerPosition::default(),
            drag: DragSession::default(),
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::PointerPressed => {
                if self.drag.start() {
                    Event::DragStarted
                } else {
                    Event::None
                }
            }
            Message::PointerReleased => {
                if self.drag.stop() {
                    Event::DragEnded
                } else {
                    Event::None
                }
            }
            Message::PointerMoved { x, frame } => {
                if !self.drag.is_dragging() {
                    return Event::None;
                }
                self.move_to(frame.position_at(x))
            }
            Message::TouchMoved { x, frame } => self.move_to(frame.position_at(x)),
            Message::Nudge(delta) => self.move_to(Some(self.position.nudged(delta))),
            Message::JumpTo(position) => self.move_to(Some(position)),
            Message::Reset => self.move_to(Some(DividerPosition::default())),
        }
    }

    fn move_to(&mut self, target: Option<DividerPosition>) -> Event {
        match target {
            Some(position) if position != self.position => {
                self.position = position;
                Event::PositionChanged(position)
            }
            _ => Event::None,
        }
    }

    #[must_use]
    pub fn position(&self) -> DividerPosition {
        self.position
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    #[must_use]
    pub fn image(&self, side: Side) -> &LoadedImage {
        match side {
            Side::Before => &self.before,
            Side::After => &self.after,
        }
    }

    /// Replaces one image of the pair, keeping the divider where it is.
    pub fn replace(&mut self, side: Side, image: LoadedImage) {
        match side {
            Side::Before => self.before = image,
            Side::After => self.after = image,
        }
    }

    /// Exchanges the before and after images, keeping the divider position.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.before, &mut self.after);
    }

    #[must_use]
    pub fn aspect_ratios_match(&self) -> bool {
        aspect_ratios_match(&self.before.data, &self.after.data)
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        let slider = ComparisonSlider {
            before: self.before.data.handle.clone(),
            after: self.after.data.handle.clone(),
            frame_size: self.before.data.size(),
            position: self.position,
            dragging: self.drag.is_dragging(),
            style: SliderStyle::new(env.settings, env.colors),
            before_label: env.i18n.tr("label-before"),
            after_label: env.i18n.tr("label-after"),
        };

        Canvas::new(slider)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
