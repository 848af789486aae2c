// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius,
};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

fn border(color: Color) -> Border {
    Border {
        color,
        width: 1.0,
        radius: radius::SM.into(),
    }
}

/// Primary call to action, used by the empty state.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, border_color) = match status {
        button::Status::Hovered => (palette::PRIMARY_400, palette::PRIMARY_500),
        button::Status::Disabled => (palette::GRAY_400, palette::GRAY_400),
        button::Status::Active | button::Status::Pressed => {
            (palette::PRIMARY_500, palette::PRIMARY_600)
        }
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: border(border_color),
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Secondary toolbar button that adapts to light and dark themes.
pub fn toolbar(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    let (background, text_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_700, WHITE)
    };

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: border(palette::GRAY_400),
            shadow: Shadow::default(),
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(if is_light {
                palette::GRAY_200
            } else {
                Color::from_rgb(0.35, 0.35, 0.35)
            })),
            text_color,
            border: border(palette::PRIMARY_500),
            shadow: Shadow::default(),
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(background)),
            text_color: palette::GRAY_400,
            border: border(palette::GRAY_400),
            shadow: Shadow::default(),
            snap: true,
        },
    }
}
