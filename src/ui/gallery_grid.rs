// SPDX-License-Identifier: MPL-2.0
//! Thumbnail grid of one gallery.

use super::{Message, ViewContext};
use crate::gallery::{GalleryController, GalleryEvent, GalleryItem, Location};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, image, Column, Container, Row, Text};
use iced::{alignment, ContentFit, Element, Length};
use std::path::Path;

pub fn view<'a>(
    ctx: &ViewContext<'a>,
    gallery: usize,
    controller: &'a GalleryController,
    base_dir: Option<&Path>,
) -> Element<'a, Message> {
    let number = (gallery + 1).to_string();
    let heading = Text::new(
        ctx.i18n
            .tr_with_args("gallery-heading", &[("number", number.as_str())]),
    )
    .size(typography::TITLE_MD);

    let mut content = Column::new().spacing(spacing::MD).push(heading);

    if controller.is_empty() {
        content = content.push(
            Text::new(ctx.i18n.tr("gallery-empty"))
                .size(typography::BODY)
                .color(palette::GRAY_400),
        );
    } else {
        let columns = ctx.display.columns();
        let mut grid = Column::new().spacing(spacing::SM);
        for (row_index, chunk) in controller.items().chunks(columns).enumerate() {
            let mut row = Row::new().spacing(spacing::SM);
            for (offset, item) in chunk.iter().enumerate() {
                let index = row_index * columns + offset;
                row = row.push(thumbnail(ctx, gallery, index, item, base_dir));
            }
            grid = grid.push(row);
        }
        content = content.push(grid);
    }

    if !controller.skipped().is_empty() {
        let count = controller.skipped().len().to_string();
        content = content.push(
            Text::new(
                ctx.i18n
                    .tr_with_args("gallery-skipped-items", &[("count", count.as_str())]),
            )
            .size(typography::CAPTION)
            .color(palette::WARNING_500),
        );
    }

    Container::new(content)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}

fn thumbnail<'a>(
    ctx: &ViewContext<'a>,
    gallery: usize,
    index: usize,
    item: &'a GalleryItem,
    base_dir: Option<&Path>,
) -> Element<'a, Message> {
    let size = ctx.display.thumbnail_size();

    let picture: Element<'a, Message> = match item.image.resolve(base_dir) {
        Location::Local(path) => image(image::Handle::from_path(path))
            .width(size)
            .height(size)
            .content_fit(ContentFit::Cover)
            .into(),
        location => placeholder(alt_text(ctx, item, &location), size),
    };

    let mut tile = Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .push(picture);

    if ctx.display.show_captions() {
        if let Some(caption) = item.caption.as_ref().filter(|caption| !caption.is_empty()) {
            tile = tile.push(
                Text::new(caption.text.as_str())
                    .size(typography::CAPTION)
                    .width(size),
            );
        }
    }

    let tile = button(tile)
        .padding(spacing::XXS)
        .style(styles::button::thumbnail);

    // Items only become clickable once their controller has claimed them.
    if item.interactive {
        tile.on_press(Message::Gallery {
            gallery,
            event: GalleryEvent::ItemClicked(index),
        })
        .into()
    } else {
        tile.into()
    }
}

/// Text shown in place of an image that cannot be displayed.
pub(crate) fn alt_text(ctx: &ViewContext<'_>, item: &GalleryItem, location: &Location) -> String {
    let alt = if item.image.alt.trim().is_empty() {
        ctx.i18n.tr("image-no-alt")
    } else {
        item.image.alt.clone()
    };

    match location {
        Location::Remote(_) => ctx
            .i18n
            .tr_with_args("image-remote", &[("alt", alt.as_str())]),
        Location::Local(_) | Location::Missing => alt,
    }
}

fn placeholder<'a>(label: String, size: f32) -> Element<'a, Message> {
    Container::new(
        Text::new(label)
            .size(typography::CAPTION)
            .align_x(alignment::Horizontal::Center),
    )
    .width(size)
    .height(size)
    .padding(spacing::XS)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .into()
}
