// SPDX-License-Identifier: MPL-2.0
//! The loaded page: a header, one panel per gallery and, on top, the
//! lightbox of whichever gallery is open.

use super::{Message, ViewContext};
use crate::gallery::GalleryPage;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::widgets::scroll_lockable;
use crate::ui::{gallery_grid, lightbox, styles};
use iced::widget::{button, Column, Container, Row, Scrollable, Space, Stack, Text};
use iced::{alignment, Element, Length};

pub fn view<'a>(ctx: &ViewContext<'a>, page: &'a GalleryPage) -> Element<'a, Message> {
    let document = page.document();
    let base_dir = document.base_dir();

    let title = document
        .title()
        .unwrap_or_else(|| ctx.i18n.tr("window-title"));

    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(title).size(typography::TITLE_LG))
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(ctx.i18n.tr("page-reload")))
                .padding([spacing::XS, spacing::MD])
                .on_press(Message::ReloadRequested),
        )
        .push(
            button(Text::new(ctx.i18n.tr("empty-state-button")))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary)
                .on_press(Message::OpenPageRequested),
        );

    let mut body = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .width(Length::Fill)
        .push(header);

    if page.galleries().is_empty() {
        body = body.push(
            Text::new(ctx.i18n.tr("page-no-galleries"))
                .size(typography::BODY)
                .color(palette::GRAY_400),
        );
    }

    for (index, controller) in page.galleries().iter().enumerate() {
        body = body.push(gallery_grid::view(ctx, index, controller, base_dir));
    }

    let scrollable = Scrollable::new(body)
        .width(Length::Fill)
        .height(Length::Fill);
    let locked = !document.is_scrollable();
    let base = Container::new(scroll_lockable(scrollable, locked))
        .width(Length::Fill)
        .height(Length::Fill);

    let overlay = page.active_gallery().and_then(|index| {
        page.gallery(index)
            .and_then(|controller| lightbox::view(ctx, index, controller, base_dir))
    });

    // The stack stays even when closed so the page keeps its widget state.
    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base);
    if let Some(overlay) = overlay {
        layers = layers.push(overlay);
    }
    layers.into()
}
