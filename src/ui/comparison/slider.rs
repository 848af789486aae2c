// SPDX-License-Identifier: MPL-2.0
//! Canvas program drawing the stacked image pair and the divider handle.
//!
//! The canvas sees every window event while it is mounted, so pointer moves
//! and releases outside the frame still reach the active drag session.

use super::Message;
use crate::app::config::SliderSettings;
use crate::ui::design_tokens::{border, spacing, typography};
use crate::ui::state::touch::Axis;
use crate::ui::state::{geometry, DividerPosition, FrameGeometry, TouchTracker};
use crate::ui::theming::ColorScheme;
use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke, Text};
use iced::widget::{image, Action};
use iced::{mouse, touch, Color, Event, Point, Rectangle, Renderer, Size, Theme};

/// Average glyph advance relative to the font size, used to size label pills.
const GLYPH_WIDTH_RATIO: f32 = 0.6;

/// Resolved drawing parameters for the slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderStyle {
    pub handle_radius: f32,
    pub line_width: f32,
    pub show_labels: bool,
    pub divider: Color,
    pub handle_border: Color,
    pub label_background: Color,
    pub label_text: Color,
}

impl SliderStyle {
    #[must_use]
    pub fn new(settings: SliderSettings, colors: &ColorScheme) -> Self {
        Self {
            handle_radius: settings.handle_radius,
            line_width: settings.line_width,
            show_labels: settings.show_labels,
            divider: colors.divider,
            handle_border: colors.handle_border,
            label_background: colors.label_background,
            label_text: colors.label_text,
        }
    }
}

/// Canvas program for the before/after slider.
pub struct ComparisonSlider {
    pub before: image::Handle,
    pub after: image::Handle,
    /// Natural size of the frame content, used for contain fitting.
    pub frame_size: Size,
    pub position: DividerPosition,
    pub dragging: bool,
    pub style: SliderStyle,
    pub before_label: String,
    pub after_label: String,
}

/// A message to publish and whether the event should be captured.
#[derive(Debug, Clone, PartialEq)]
struct Input {
    message: Message,
    capture: bool,
}

impl Input {
    fn captured(message: Message) -> Self {
        Self {
            message,
            capture: true,
        }
    }

    fn passthrough(message: Message) -> Self {
        Self {
            message,
            capture: false,
        }
    }
}

impl ComparisonSlider {
    fn frame_rect(&self, bounds: Rectangle) -> Rectangle {
        geometry::fit_contain(bounds, self.frame_size)
    }

    /// Area that starts a drag: the frame plus the handle overhanging its
    /// left and right edges.
    fn grab_rect(&self, area: Rectangle) -> Rectangle {
        let radius = self.style.handle_radius;
        Rectangle {
            x: area.x - radius,
            width: area.width + radius * 2.0,
            ..area
        }
    }

    /// Turns a window event into a component message.
    ///
    /// `bounds` and event positions are both in window coordinates.
    fn translate(
        &self,
        tracker: &mut TouchTracker,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Input> {
        let area = self.frame_rect(bounds);

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                cursor.position_over(self.grab_rect(area))?;
                Some(Input::captured(Message::PointerPressed))
            }
            Event::Mouse(mouse::Event::CursorMoved { position }) if self.dragging => {
                Some(Input::captured(Message::PointerMoved {
                    x: position.x,
                    frame: FrameGeometry::from(area),
                }))
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) if self.dragging => {
                Some(Input::passthrough(Message::PointerReleased))
            }
            Event::Touch(touch::Event::FingerPressed { id, position }) => {
                if area.contains(*position) {
                    tracker.begin(id.0, *position);
                }
                None
            }
            Event::Touch(touch::Event::FingerMoved { id, position }) => {
                match tracker.classify(id.0, *position)? {
                    Axis::Horizontal => Some(Input::captured(Message::TouchMoved {
                        x: position.x,
                        frame: FrameGeometry::from(area),
                    })),
                    // Vertical gestures belong to whatever scrolls the page
                    Axis::Vertical => None,
                }
            }
            Event::Touch(
                touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. },
            ) => {
                tracker.end(id.0);
                None
            }
            _ => None,
        }
    }

    fn draw_divider(&self, frame: &mut Frame, area: Rectangle, x: f32) {
        let style = &self.style;

        let line = Path::line(
            Point::new(x, area.y),
            Point::new(x, area.y + area.height),
        );
        frame.stroke(
            &line,
            Stroke::default()
                .with_width(style.line_width)
                .with_color(style.divider),
        );

        let center = Point::new(x, area.center_y());
        let radius = style.handle_radius;
        let handle = Path::circle(center, radius);
        frame.fill(&handle, style.divider);
        frame.stroke(
            &handle,
            Stroke::default()
                .with_width(border::WIDTH_MD)
                .with_color(style.handle_border),
        );

        // Two chevrons pointing away from the line
        let arrow = radius * 0.35;
        let gap = radius * 0.2;
        let chevrons = Path::new(|builder| {
            builder.move_to(Point::new(center.x - gap, center.y - arrow));
            builder.line_to(Point::new(center.x - gap - arrow, center.y));
            builder.line_to(Point::new(center.x - gap, center.y + arrow));
            builder.close();

            builder.move_to(Point::new(center.x + gap, center.y - arrow));
            builder.line_to(Point::new(center.x + gap + arrow, center.y));
            builder.line_to(Point::new(center.x + gap, center.y + arrow));
            builder.close();
        });
        frame.fill(&chevrons, style.handle_border);
    }

    fn draw_labels(&self, frame: &mut Frame, area: Rectangle) {
        let before = label_size(&self.before_label);
        let after = label_size(&self.after_label);

        // Labels would overlap on a very narrow frame
        if before.width + after.width + spacing::XS * 3.0 > area.width
            || before.height + spacing::XS * 2.0 > area.height
        {
            return;
        }

        let top = area.y + spacing::XS;
        self.draw_label(
            frame,
            &self.before_label,
            Point::new(area.x + spacing::XS, top),
            before,
        );
        self.draw_label(
            frame,
            &self.after_label,
            Point::new(area.x + area.width - spacing::XS - after.width, top),
            after,
        );
    }

    fn draw_label(&self, frame: &mut Frame, content: &str, origin: Point, size: Size) {
        frame.fill_rectangle(origin, size, self.style.label_background);
        frame.fill_text(Text {
            content: content.to_string(),
            position: Point::new(origin.x + spacing::XS, origin.y + spacing::XXS),
            color: self.style.label_text,
            size: typography::CAPTION.into(),
            ..Text::default()
        });
    }
}

/// Estimated size of a label pill, including padding.
fn label_size(content: &str) -> Size {
    let glyphs = content.chars().count() as f32;
    Size::new(
        glyphs * typography::CAPTION * GLYPH_WIDTH_RATIO + spacing::XS * 2.0,
        typography::CAPTION + spacing::XXS * 2.0,
    )
}

impl canvas::Program<Message> for ComparisonSlider {
    type State = TouchTracker;

    fn update(
        &self,
        tracker: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        let input = self.translate(tracker, event, bounds, cursor)?;
        let action = Action::publish(input.message);
        Some(if input.capture {
            action.and_capture()
        } else {
            action
        })
    }

    fn draw(
        &self,
        _tracker: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let area = self.frame_rect(Rectangle::with_size(bounds.size()));

        frame.draw_image(area, canvas::Image::new(self.after.clone()));

        let revealed = area.width * self.position.fraction();
        if revealed > 0.0 {
            let clip = Rectangle {
                width: revealed,
                ..area
            };
            let before = self.before.clone();
            // Clipped frames draw relative to the clip origin
            frame.with_clip(clip, |clipped| {
                clipped.draw_image(
                    Rectangle::with_size(area.size()),
                    canvas::Image::new(before),
                );
            });
        }

        if self.style.show_labels {
            self.draw_labels(&mut frame, area);
        }
        self.draw_divider(&mut frame, area, area.x + revealed);

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _tracker: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.dragging {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(self.grab_rect(self.frame_rect(bounds))) {
            mouse::Interaction::ResizingHorizontally
        } else {
            mouse::Interaction::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;
    use crate::test_utils::assert_abs_diff_eq;

    fn slider(dragging: bool) -> ComparisonSlider {
        let pixels = vec![0; 4 * 2 * 4];
        let handle = image::Handle::from_rgba(4, 2, pixels);
        ComparisonSlider {
            before: handle.clone(),
            after: handle,
            frame_size: Size::new(4.0, 2.0),
            position: DividerPosition::default(),
            dragging,
            style: SliderStyle::new(
                Config::default().slider.resolve(),
                &ColorScheme::dark(),
            ),
            before_label: "Before".into(),
            after_label: "After".into(),
        }
    }

    // 400x200 frame that exactly fills the canvas at (100, 50)
    fn bounds() -> Rectangle {
        Rectangle::new(Point::new(100.0, 50.0), Size::new(400.0, 200.0))
    }

    fn at(x: f32, y: f32) -> mouse::Cursor {
        mouse::Cursor::Available(Point::new(x, y))
    }

    fn finger(id: u64) -> touch::Finger {
        touch::Finger(id)
    }

    #[test]
    fn press_over_frame_starts_session_and_captures() {
        let input = slider(false).translate(
            &mut TouchTracker::default(),
            &Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)),
            bounds(),
            at(300.0, 150.0),
        );
        assert_eq!(input, Some(Input::captured(Message::PointerPressed)));
    }

    #[test]
    fn press_on_handle_overhang_starts_session() {
        // Handle centered on the left edge reaches past the frame
        let input = slider(false).translate(
            &mut TouchTracker::default(),
            &Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)),
            bounds(),
            at(95.0, 150.0),
        );
        assert_eq!(input, Some(Input::captured(Message::PointerPressed)));
    }

    #[test]
    fn press_outside_frame_is_ignored() {
        let input = slider(false).translate(
            &mut TouchTracker::default(),
            &Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)),
            bounds(),
            at(20.0, 20.0),
        );
        assert_eq!(input, None);
    }

    #[test]
    fn moves_are_forwarded_only_while_dragging() {
        let event = Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(200.0, 400.0),
        });

        let idle = slider(false).translate(
            &mut TouchTracker::default(),
            &event,
            bounds(),
            at(200.0, 400.0),
        );
        assert_eq!(idle, None);

        let dragging = slider(true)
            .translate(
                &mut TouchTracker::default(),
                &event,
                bounds(),
                at(200.0, 400.0),
            )
            .expect("move while dragging");
        match dragging.message {
            Message::PointerMoved { x, frame } => {
                assert_abs_diff_eq!(x, 200.0);
                assert_abs_diff_eq!(frame.position_at(x).expect("measured").value(), 25.0);
            }
            other => panic!("unexpected message {other:?}"),
        }
    }

    #[test]
    fn release_anywhere_ends_drag() {
        let input = slider(true).translate(
            &mut TouchTracker::default(),
            &Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)),
            bounds(),
            mouse::Cursor::Unavailable,
        );
        assert_eq!(input, Some(Input::passthrough(Message::PointerReleased)));
    }

    #[test]
    fn horizontal_touch_moves_divider() {
        let slider = slider(false);
        let mut tracker = TouchTracker::default();
        let cursor = mouse::Cursor::Unavailable;

        slider.translate(
            &mut tracker,
            &Event::Touch(touch::Event::FingerPressed {
                id: finger(1),
                position: Point::new(300.0, 150.0),
            }),
            bounds(),
            cursor,
        );
        let input = slider
            .translate(
                &mut tracker,
                &Event::Touch(touch::Event::FingerMoved {
                    id: finger(1),
                    position: Point::new(400.0, 152.0),
                }),
                bounds(),
                cursor,
            )
            .expect("horizontal swipe");

        assert!(input.capture);
        assert!(matches!(input.message, Message::TouchMoved { x, .. } if x == 400.0));
    }

    #[test]
    fn vertical_touch_is_left_alone() {
        let slider = slider(false);
        let mut tracker = TouchTracker::default();
        let cursor = mouse::Cursor::Unavailable;

        slider.translate(
            &mut tracker,
            &Event::Touch(touch::Event::FingerPressed {
                id: finger(2),
                position: Point::new(300.0, 100.0),
            }),
            bounds(),
            cursor,
        );
        let input = slider.translate(
            &mut tracker,
            &Event::Touch(touch::Event::FingerMoved {
                id: finger(2),
                position: Point::new(302.0, 180.0),
            }),
            bounds(),
            cursor,
        );
        assert_eq!(input, None);
    }

    #[test]
    fn lifted_finger_stops_tracking() {
        let slider = slider(false);
        let mut tracker = TouchTracker::default();
        let cursor = mouse::Cursor::Unavailable;

        slider.translate(
            &mut tracker,
            &Event::Touch(touch::Event::FingerPressed {
                id: finger(3),
                position: Point::new(300.0, 150.0),
            }),
            bounds(),
            cursor,
        );
        slider.translate(
            &mut tracker,
            &Event::Touch(touch::Event::FingerLifted {
                id: finger(3),
                position: Point::new(300.0, 150.0),
            }),
            bounds(),
            cursor,
        );
        assert!(!tracker.is_tracking(3));
    }

    #[test]
    fn label_size_grows_with_text() {
        assert!(label_size("Après").width > label_size("A").width);
        assert_abs_diff_eq!(
            label_size("").height,
            typography::CAPTION + spacing::XXS * 2.0
        );
    }
}
