// SPDX-License-Identifier: MPL-2.0
//! User interface of the gallery viewer.
//!
//! Views follow the Elm-style "state down, messages up" pattern: they borrow
//! the page and emit [`Message`]s, the application feeds those back into the
//! gallery controllers.
//!
//! - [`page`] - The loaded page with one panel per gallery
//! - [`gallery_grid`] - Thumbnail grid of a single gallery
//! - [`lightbox`] - Full-window overlay of the active gallery
//! - [`empty_state`] - Shown before any page is loaded
//! - [`toast`] - Dismissible notices in the window corner
//! - [`widgets`] - Custom Iced widgets (scroll lock wrapper)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod empty_state;
pub mod gallery_grid;
pub mod lightbox;
pub mod page;
pub mod styles;
pub mod theming;
pub mod toast;
pub mod widgets;

use crate::config::DisplayConfig;
use crate::gallery::GalleryEvent;
use crate::i18n::I18n;
use theming::ColorScheme;

/// Messages emitted by the views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Input for the gallery at this index on the page.
    Gallery { gallery: usize, event: GalleryEvent },
    OpenPageRequested,
    ReloadRequested,
    /// Close the notice at this position.
    DismissNotice(usize),
}

/// Everything a view needs besides the page itself.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub display: &'a DisplayConfig,
    pub colors: ColorScheme,
}
