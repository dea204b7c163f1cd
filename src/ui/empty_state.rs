// SPDX-License-Identifier: MPL-2.0
//! Empty state view displayed when no page is loaded.
//!
//! Offers a button to pick a page through the system dialog and reminds that
//! files can be dropped on the window. While a page is loading, or after a
//! load failed, the matching notice replaces the subtitle.

use super::Message;
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Text};
use iced::{alignment, Color, Element, Length};

/// What the empty state should tell the user besides the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice<'a> {
    None,
    Loading,
    LoadFailed(&'a str),
}

pub fn view<'a>(i18n: &I18n, notice: Notice<'a>) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("empty-state-title"))
        .size(typography::TITLE_LG)
        .color(palette::GRAY_400);

    let subtitle = match notice {
        Notice::None => Text::new(i18n.tr("empty-state-subtitle")).color(palette::GRAY_400),
        Notice::Loading => Text::new(i18n.tr("page-loading")).color(palette::GRAY_400),
        Notice::LoadFailed(error) => {
            Text::new(i18n.tr_with_args("page-load-error", &[("error", error)]))
                .color(palette::ERROR_500)
        }
    }
    .size(typography::BODY);

    let mut open_button = button(Text::new(i18n.tr("empty-state-button")))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary);
    if notice != Notice::Loading {
        open_button = open_button.on_press(Message::OpenPageRequested);
    }

    let drop_hint = Text::new(i18n.tr("empty-state-drop-hint"))
        .size(typography::CAPTION)
        .color(Color {
            a: 0.5,
            ..palette::GRAY_400
        });

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(subtitle)
        .push(open_button)
        .push(drop_hint);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
