// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The window is a toolbar above either the comparison slider or the empty
//! state, with an optional status line at the bottom.

use super::{Message, Slots, Status};
use crate::app::config::SliderSettings;
use crate::i18n::fluent::I18n;
use crate::media::LoadedImage;
use crate::ui::comparison::{self, Side};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{alignment, Color, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub comparison: Option<&'a comparison::State>,
    pub staged: &'a Slots<Option<LoadedImage>>,
    pub loading: &'a Slots<Option<u64>>,
    pub theme_mode: ThemeMode,
    pub colors: &'a ColorScheme,
    pub slider: SliderSettings,
    pub status: Option<&'a Status>,
}

/// Renders the toolbar, the current screen and the status line.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let body: Element<'_, Message> = match ctx.comparison {
        Some(state) => state
            .view(comparison::ViewEnv {
                i18n: ctx.i18n,
                settings: ctx.slider,
                colors: ctx.colors,
            })
            .map(Message::Comparison),
        None => view_empty(&ctx),
    };

    let mut column = Column::new()
        .push(view_toolbar(&ctx))
        .push(
            Container::new(body)
                .width(Length::Fill)
                .height(Length::Fill),
        );

    if let Some(status) = ctx.status {
        column = column.push(view_status(status, ctx.colors));
    }

    Container::new(column.width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn toolbar_button<'a>(label: String, message: Option<Message>) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::toolbar)
        .on_press_maybe(message)
        .into()
}

fn view_toolbar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let comparing = ctx.comparison.is_some();
    let when_comparing = |message: Message| comparing.then_some(message);

    let mode = i18n.tr(ctx.theme_mode.i18n_key());
    let theme_label = i18n.tr_with_args("toolbar-theme", &[("mode", mode.as_str())]);

    let mut row = Row::new()
        .spacing(spacing::XS)
        .padding(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(toolbar_button(
            i18n.tr("toolbar-open-before"),
            Some(Message::OpenDialog(Side::Before)),
        ))
        .push(toolbar_button(
            i18n.tr("toolbar-open-after"),
            Some(Message::OpenDialog(Side::After)),
        ))
        .push(toolbar_button(
            i18n.tr("toolbar-swap"),
            Some(Message::Swap),
        ))
        .push(toolbar_button(
            i18n.tr("toolbar-reset"),
            when_comparing(Message::ResetDivider),
        ))
        .push(toolbar_button(
            i18n.tr("toolbar-close"),
            when_comparing(Message::Close),
        ))
        .push(toolbar_button(theme_label, Some(Message::CycleTheme)))
        .push(Space::new().width(Length::Fill));

    if let Some(state) = ctx.comparison {
        let percent = state.position().to_string();
        row = row.push(
            Text::new(i18n.tr_with_args("divider-readout", &[("percent", percent.as_str())]))
                .size(typography::BODY)
                .color(ctx.colors.text_secondary),
        );
    }

    row.into()
}

fn slot_line<'a>(
    i18n: &I18n,
    side: Side,
    image: Option<&LoadedImage>,
    loading: bool,
    colors: &ColorScheme,
) -> Element<'a, Message> {
    let key = match side {
        Side::Before => "slot-before",
        Side::After => "slot-after",
    };
    let name = if loading {
        i18n.tr("slot-loading")
    } else {
        match image {
            Some(image) => image.display_name(),
            None => i18n.tr("slot-missing"),
        }
    };

    Text::new(i18n.tr_with_args(key, &[("name", name.as_str())]))
        .size(typography::BODY)
        .color(colors.text_secondary)
        .into()
}

/// Empty state shown until both images are loaded.
fn view_empty<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let title = Text::new(i18n.tr("empty-title"))
        .size(typography::TITLE_MD)
        .color(palette::GRAY_400);

    let slots = Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .push(slot_line(
            i18n,
            Side::Before,
            ctx.staged.before.as_ref(),
            ctx.loading.before.is_some(),
            ctx.colors,
        ))
        .push(slot_line(
            i18n,
            Side::After,
            ctx.staged.after.as_ref(),
            ctx.loading.after.is_some(),
            ctx.colors,
        ));

    let buttons = Row::new()
        .spacing(spacing::SM)
        .push(
            button(Text::new(i18n.tr("toolbar-open-before")))
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::primary)
                .on_press(Message::OpenDialog(Side::Before)),
        )
        .push(
            button(Text::new(i18n.tr("toolbar-open-after")))
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::primary)
                .on_press(Message::OpenDialog(Side::After)),
        );

    let drop_hint = Text::new(i18n.tr("empty-hint"))
        .size(typography::CAPTION)
        .color(Color {
            a: 0.5,
            ..palette::GRAY_400
        });

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(slots)
        .push(buttons)
        .push(drop_hint);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn view_status<'a>(status: &'a Status, colors: &ColorScheme) -> Element<'a, Message> {
    let (text, color) = match status {
        Status::Warning(text) => (text, colors.warning),
        Status::Error(text) => (text, colors.error),
    };

    Container::new(Text::new(text.as_str()).size(typography::BODY).color(color))
        .padding([spacing::XXS, spacing::SM])
        .width(Length::Fill)
        .into()
}
