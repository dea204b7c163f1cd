// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page and its galleries.
//!
//! The `App` struct wires together localization, settings and the loaded
//! page, and translates messages into side effects like page loading or the
//! open dialog. Gallery behavior itself lives in [`crate::gallery`].

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::gallery::{GalleryPage, Markers};
use crate::i18n::I18n;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::{Path, PathBuf};

/// What the window currently shows.
#[derive(Debug, Default)]
pub enum PageState {
    #[default]
    Empty,
    Loading {
        path: PathBuf,
    },
    Failed {
        path: PathBuf,
        error: String,
    },
    Loaded {
        path: PathBuf,
        page: GalleryPage,
    },
}

impl PageState {
    /// File behind the current state, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            PageState::Empty => None,
            PageState::Loading { path }
            | PageState::Failed { path, .. }
            | PageState::Loaded { path, .. } => Some(path),
        }
    }

    pub fn page(&self) -> Option<&GalleryPage> {
        match self {
            PageState::Loaded { page, .. } => Some(page),
            _ => None,
        }
    }
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    markers: Markers,
    theme_mode: ThemeMode,
    page: PageState,
    /// Localized notices waiting to be dismissed, oldest first.
    notices: Vec<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("page", &self.page.path())
            .field("notices", &self.notices.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 768;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 360;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot function; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings and optionally kicks off loading the page passed on
    /// the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        Self::with_config(flags, config, config_warning)
    }

    fn with_config(
        flags: Flags,
        config: Config,
        config_warning: Option<String>,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), &config);
        let markers = config.markup.markers();

        let mut app = App {
            theme_mode: config.general.theme_mode,
            markers,
            config,
            page: PageState::Empty,
            notices: Vec::new(),
            i18n,
        };

        if let Some(key) = config_warning {
            let notice = app.i18n.tr(&key);
            app.notices.push(notice);
        }

        let task = match flags.file_path {
            Some(path) => update::load_page(&mut app.update_context(), PathBuf::from(path)),
            None => Task::none(),
        };

        (app, task)
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &self.i18n,
            markers: &self.markers,
            page: &mut self.page,
            notices: &mut self.notices,
        }
    }

    fn title(&self) -> String {
        let page_title = self
            .page
            .page()
            .and_then(|page| page.document().title())
            .or_else(|| {
                self.page
                    .path()
                    .and_then(Path::file_name)
                    .map(|name| name.to_string_lossy().into_owned())
            });

        match page_title {
            Some(title) => self
                .i18n
                .tr_with_args("window-title-page", &[("title", title.as_str())]),
            None => self.i18n.tr("window-title"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();
        match message {
            Message::Ui(message) => update::handle_ui_message(&mut ctx, message),
            Message::KeyPressed(key) => {
                update::handle_key(&mut ctx, key);
                Task::none()
            }
            Message::PageLoaded { path, result } => {
                update::handle_page_loaded(&mut ctx, path, result)
            }
            Message::OpenPageDialogResult(path) => {
                update::handle_open_page_dialog_result(&mut ctx, path)
            }
            Message::FileDropped(path) => update::handle_file_dropped(&mut ctx, path),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            display: &self.config.display,
            theme_mode: self.theme_mode,
            page: &self.page,
            notices: &self.notices,
        })
    }
}
