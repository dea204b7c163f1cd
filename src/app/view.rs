// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Picks the empty state or the loaded page and floats the notices above it.

use super::{Message, PageState};
use crate::config::DisplayConfig;
use crate::i18n::I18n;
use crate::ui::empty_state::{self, Notice};
use crate::ui::theming::ThemeMode;
use crate::ui::{self, page, toast};
use iced::widget::{Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub display: &'a DisplayConfig,
    pub theme_mode: ThemeMode,
    pub page: &'a PageState,
    pub notices: &'a [String],
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let ui_ctx = ui::ViewContext {
        i18n: ctx.i18n,
        display: ctx.display,
        colors: ctx.theme_mode.colors(),
    };

    let current_view: Element<'_, ui::Message> = match ctx.page {
        PageState::Empty => empty_state::view(ctx.i18n, Notice::None),
        PageState::Loading { .. } => empty_state::view(ctx.i18n, Notice::Loading),
        PageState::Failed { error, .. } => {
            empty_state::view(ctx.i18n, Notice::LoadFailed(error.as_str()))
        }
        PageState::Loaded { page, .. } => page::view(&ui_ctx, page),
    };

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        );
    if let Some(toasts) = toast::view_overlay(ctx.notices, ctx.i18n) {
        layers = layers.push(toasts);
    }

    Element::from(layers).map(Message::Ui)
}
