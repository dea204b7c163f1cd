// SPDX-License-Identifier: MPL-2.0
//! Full-window lightbox of the active gallery.
//!
//! Layers, bottom to top: the dimmed backdrop, the image and caption box, the
//! position counter with the close button, then the previous and next zones.
//! A press on the backdrop reaches only the bottom layer. Presses on the
//! content box are captured by its own mouse area, so they never close the
//! lightbox.

use super::{Message, ViewContext};
use crate::gallery::{ClickTarget, Control, GalleryController, GalleryEvent, Location, Visibility};
use crate::ui::design_tokens::{opacity, radius, sizing, spacing, typography};
use crate::ui::gallery_grid;
use crate::ui::styles;
use iced::mouse;
use iced::widget::{
    button, image, mouse_area, tooltip, Column, Container, Row, Space, Stack, Text,
};
use iced::{
    alignment::{Horizontal, Vertical},
    ContentFit, Element, Length,
};
use std::path::Path;

/// Renders the lightbox of `controller`, or nothing when it is closed.
pub fn view<'a>(
    ctx: &ViewContext<'a>,
    gallery: usize,
    controller: &'a GalleryController,
    base_dir: Option<&Path>,
) -> Option<Element<'a, Message>> {
    let overlay = controller.overlay();
    if !overlay.is_active() {
        return None;
    }

    let on = |event: GalleryEvent| Message::Gallery { gallery, event };
    let labels = ctx.i18n.control_labels();

    let backdrop = mouse_area(
        Container::new(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::backdrop(ctx.colors.overlay_background)),
    )
    .on_press(on(GalleryEvent::OverlayClicked(ClickTarget::Root)));

    let picture: Element<'a, Message> = match overlay.image().resolve(base_dir) {
        Location::Local(path) => image(image::Handle::from_path(path))
            .content_fit(ContentFit::Contain)
            .into(),
        location => {
            let label = controller
                .current_item()
                .map(|item| gallery_grid::alt_text(ctx, item, &location))
                .unwrap_or_default();
            Text::new(label)
                .size(typography::TITLE_MD)
                .color(ctx.colors.overlay_text)
                .into()
        }
    };

    let mut content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(picture);

    let caption = overlay.caption();
    if !caption.is_empty() {
        content = content.push(
            Container::new(Text::new(caption.text.as_str()).size(typography::BODY))
                .max_width(sizing::LIGHTBOX_CAPTION_WIDTH)
                .padding(spacing::SM)
                .style(styles::overlay::caption),
        );
    }

    let content = mouse_area(content)
        .interaction(mouse::Interaction::Idle)
        .on_press(on(GalleryEvent::OverlayClicked(ClickTarget::Content)));

    let centered = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(sizing::LIGHTBOX_BUTTON + spacing::XL)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    let current = (controller.current_index() + 1).to_string();
    let total = controller.len().to_string();
    let position = Container::new(
        Text::new(ctx.i18n.tr_with_args(
            "lightbox-position",
            &[("current", current.as_str()), ("total", total.as_str())],
        ))
        .size(typography::CAPTION),
    )
    .padding([spacing::XXS, spacing::SM])
    .style(styles::overlay::indicator(radius::FULL));

    let top_bar = Row::new()
        .padding(spacing::MD)
        .align_y(Vertical::Center)
        .push(position)
        .push(Space::new().width(Length::Fill))
        .push(control_button(
            ctx,
            "✕",
            labels.close,
            on(GalleryEvent::ControlClicked(Control::Close)),
        ));

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(backdrop)
        .push(centered)
        .push(Container::new(top_bar).width(Length::Fill));

    if overlay.visibility(Control::Prev) == Visibility::Visible {
        let prev = control_button(
            ctx,
            "◀",
            labels.prev,
            on(GalleryEvent::ControlClicked(Control::Prev)),
        );
        layers = layers.push(side_zone(prev, Horizontal::Left));
    }

    if overlay.visibility(Control::Next) == Visibility::Visible {
        let next = control_button(
            ctx,
            "▶",
            labels.next,
            on(GalleryEvent::ControlClicked(Control::Next)),
        );
        layers = layers.push(side_zone(next, Horizontal::Right));
    }

    Some(layers.into())
}

fn control_button<'a>(
    ctx: &ViewContext<'a>,
    glyph: &'static str,
    label: String,
    message: Message,
) -> Element<'a, Message> {
    let control = button(
        Text::new(glyph)
            .size(typography::LIGHTBOX_GLYPH)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(sizing::LIGHTBOX_BUTTON)
    .height(sizing::LIGHTBOX_BUTTON)
    .style(styles::button::overlay(
        ctx.colors.overlay_text,
        opacity::OVERLAY_SUBTLE,
        opacity::OVERLAY_MEDIUM,
    ))
    .on_press(message);

    let label = Container::new(Text::new(label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::overlay::indicator(radius::SM));

    tooltip(control, label, tooltip::Position::Bottom)
        .gap(spacing::XXS)
        .into()
}

/// Full-height strip at one side of the window holding a navigation button.
/// Only the button itself is interactive.
fn side_zone<'a>(control: Element<'a, Message>, side: Horizontal) -> Element<'a, Message> {
    Container::new(
        Container::new(control)
            .height(Length::Fill)
            .padding(spacing::MD)
            .align_y(Vertical::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(side)
    .into()
}
