// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` turns image galleries marked up in HTML pages into an
//! interactive lightbox viewer built with the Iced GUI framework.
//!
//! A page is parsed into a [`document::Document`]. Every element carrying the
//! gallery container class gets its own [`gallery::GalleryController`], which
//! owns a lightbox overlay and walks the gallery's items with wrap-around
//! navigation. Opening a lightbox locks page scrolling until it is closed.

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.1.0")]

pub mod app;
pub mod config;
pub mod document;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod ui;
