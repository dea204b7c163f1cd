// SPDX-License-Identifier: MPL-2.0
//! Dismissible notices stacked in the bottom-right corner.

use super::Message;
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Renders `notices`, newest last. Returns nothing when there are none.
pub fn view_overlay<'a>(notices: &'a [String], i18n: &I18n) -> Option<Element<'a, Message>> {
    if notices.is_empty() {
        return None;
    }

    let dismiss_label = i18n.tr("notification-dismiss");
    let toasts = notices.iter().enumerate().map(|(index, notice)| -> Element<'a, Message> {
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(Text::new(notice.as_str()).size(typography::BODY))
                    .width(Length::Fill),
            )
            .push(
                button(Text::new(dismiss_label.clone()).size(typography::CAPTION))
                    .padding(spacing::XXS)
                    .on_press(Message::DismissNotice(index)),
            );

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(styles::container::toast)
            .into()
    });

    let column = Column::with_children(toasts)
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Right);

    Some(
        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into(),
    )
}
