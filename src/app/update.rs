// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Handlers borrow the pieces of [`App`](super::App) they need through an
//! [`UpdateContext`] and return the follow-up task, if any.

use super::{Message, PageState};
use crate::document::{markup, Document, Element};
use crate::error::Result;
use crate::gallery::{GalleryEvent, GalleryPage, Key, Markers};
use crate::i18n::I18n;
use crate::ui;
use iced::Task;
use std::path::{Path, PathBuf};

/// File extensions accepted as pages.
pub const PAGE_EXTENSIONS: &[&str] = &["html", "htm", "xhtml"];

pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub markers: &'a Markers,
    pub page: &'a mut PageState,
    pub notices: &'a mut Vec<String>,
}

pub fn handle_ui_message(ctx: &mut UpdateContext<'_>, message: ui::Message) -> Task<Message> {
    match message {
        ui::Message::Gallery { gallery, event } => {
            handle_gallery_event(ctx, gallery, event);
            Task::none()
        }
        ui::Message::OpenPageRequested => {
            handle_open_page_dialog(ctx.page.path().and_then(Path::parent).map(Path::to_path_buf))
        }
        ui::Message::DismissNotice(index) => {
            if index < ctx.notices.len() {
                ctx.notices.remove(index);
            }
            Task::none()
        }
        ui::Message::ReloadRequested => match ctx.page.path() {
            Some(path) => {
                let path = path.to_path_buf();
                load_page(ctx, path)
            }
            None => Task::none(),
        },
    }
}

/// Routes a pointer event to one gallery. A click on an item that does not
/// exist is reported to the user.
pub fn handle_gallery_event(ctx: &mut UpdateContext<'_>, gallery: usize, event: GalleryEvent) {
    let PageState::Loaded { page, .. } = ctx.page else {
        return;
    };

    if let Err(err) = page.try_dispatch(gallery, event) {
        tracing::warn!(%err, gallery, "gallery rejected event");
        let args = err.i18n_args();
        let args_refs: Vec<(&str, &str)> = args.iter().map(|(k, v)| (*k, v.as_str())).collect();
        ctx.notices
            .push(ctx.i18n.tr_with_args(err.i18n_key(), &args_refs));
    }
}

/// Delivers a page-wide key press to every gallery.
pub fn handle_key(ctx: &mut UpdateContext<'_>, key: Key) {
    if key == Key::Other {
        return;
    }
    if let PageState::Loaded { page, .. } = ctx.page {
        page.broadcast_key(key);
    }
}

/// Starts loading `path` in the background.
pub fn load_page(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    tracing::info!(path = %path.display(), "loading page");
    *ctx.page = PageState::Loading { path: path.clone() };

    Task::perform(
        async move {
            let result = read_page(&path).await;
            (path, result)
        },
        |(path, result)| Message::PageLoaded { path, result },
    )
}

/// Reads and parses a page file.
pub async fn read_page(path: &Path) -> Result<Element> {
    let source = tokio::fs::read_to_string(path).await?;
    markup::parse(&source)
}

/// Builds the document and its galleries once the markup is available.
pub fn handle_page_loaded(
    ctx: &mut UpdateContext<'_>,
    path: PathBuf,
    result: Result<Element>,
) -> Task<Message> {
    // A newer load may have started meanwhile.
    if ctx.page.path() != Some(path.as_path()) {
        tracing::debug!(path = %path.display(), "dropping stale page load");
        return Task::none();
    }

    match result {
        Ok(root) => {
            let base_dir = path.parent().map(Path::to_path_buf);
            let document = Document::new(root, base_dir);
            let page = GalleryPage::init(document, ctx.markers);
            *ctx.page = PageState::Loaded { path, page };
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "failed to load page");
            *ctx.page = PageState::Failed {
                path,
                error: err.to_string(),
            };
        }
    }
    Task::none()
}

/// Opens the system dialog to pick a page.
pub fn handle_open_page_dialog(start_dir: Option<PathBuf>) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new().add_filter("HTML", PAGE_EXTENSIONS);

            if let Some(dir) = start_dir {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.pick_file().await.map(|h| h.path().to_path_buf())
        },
        Message::OpenPageDialogResult,
    )
}

pub fn handle_open_page_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        // User cancelled the dialog
        return Task::none();
    };
    load_page(ctx, path)
}

/// Loads a page dropped on the window. Other files are refused.
pub fn handle_file_dropped(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    if is_page_file(&path) {
        return load_page(ctx, path);
    }

    tracing::warn!(path = %path.display(), "dropped file is not a page");
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    ctx.notices.push(
        ctx.i18n
            .tr_with_args("page-unsupported-file", &[("name", name.as_str())]),
    );
    Task::none()
}

pub fn is_page_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            PAGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}
