// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::document::Element;
use crate::error::Error;
use crate::gallery::Key;
use crate::ui;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Forwarded from the views.
    Ui(ui::Message),
    /// A page-wide key press that no widget captured.
    KeyPressed(Key),
    /// A page finished loading in the background.
    ///
    /// Only the parsed markup crosses the task boundary. The document and
    /// its galleries are built on the UI thread.
    PageLoaded {
        path: PathBuf,
        result: Result<Element, Error>,
    },
    /// Result from the open page dialog.
    OpenPageDialogResult(Option<PathBuf>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional page to load on startup.
    pub file_path: Option<String>,
}
