// SPDX-License-Identifier: MPL-2.0
//! Application root state and startup wiring.
//!
//! [`run`] builds the one [`LocalizationService`] of the process and hands the
//! same `Arc` to every consumer: the iced `App`, the preference saver and the
//! locale logger. Nothing looks the service up through a global.

pub mod message;
pub mod paths;
pub mod persistence;
pub mod strings;
pub mod view;
pub mod window;

pub use message::{Flags, Message};

use crate::application::port::{LocaleObserver, StringTableLoader};
use crate::config;
use crate::error::Result;
use crate::i18n::{LocalizationError, LocalizationService};
use crate::infrastructure::{FluentLoader, RequireKeys};
use iced::{Element, Task};
use std::fmt;
use std::path::PathBuf;
use std::sync::{Arc, Weak};

/// Root Iced application state.
pub struct App {
    localization: Arc<LocalizationService>,
    /// Observer this window registered; removed again on drop.
    saver: Arc<dyn LocaleObserver>,
    /// Set after a failed switch until the user dismisses it.
    notice_visible: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", &self.localization.current_locale())
            .field("notice_visible", &self.notice_visible)
            .finish()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
///
/// # Errors
///
/// Fails when the locale list or initial translations cannot be loaded, when
/// no display is available, or when the GUI backend cannot start.
pub fn run(flags: Flags) -> Result<()> {
    let config_dir = flags.config_dir.clone().map(PathBuf::from);
    let (config, warning) = config::load_with_override(config_dir.clone());
    if let Some(warning) = warning {
        tracing::warn!("{warning}");
    }

    let localization = Arc::new(build_localization(&flags, &config)?);
    tracing::info!(
        locale = %localization.current_locale(),
        supported = localization.supported().len(),
        "localization ready"
    );
    localization.subscribe(locale_logger(&localization));

    let frame = window::create(
        localization.get(strings::TITLE)?,
        config.window.size(),
    )?;
    tracing::info!(title = frame.title(), size = ?frame.size(), "opening window");

    // iced 0.14 requires a `Fn` boot closure; each call shares the same service.
    let boot = move || App::new(Arc::clone(&localization), config_dir.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(frame.into_settings())
        .run()?;
    Ok(())
}

/// Builds the localization service from CLI flags and config.
///
/// # Errors
///
/// Returns a [`LocalizationError`] when the configured locale list is invalid
/// or the initial locale's translations fail to load.
pub fn build_localization(
    flags: &Flags,
    config: &config::Config,
) -> std::result::Result<LocalizationService, LocalizationError> {
    let supported = config.supported_locales()?;
    let preferred = config::preferred_language(flags.lang.as_deref(), config, &supported);
    let loader = match &flags.i18n_dir {
        Some(dir) => FluentLoader::from_dir(dir),
        None => FluentLoader::embedded(),
    };
    LocalizationService::new(supported, preferred.as_deref(), required_strings(loader))
}

/// Wraps `loader` so every table must define the shell's keys.
pub fn required_strings<L: StringTableLoader>(loader: L) -> RequireKeys<L> {
    RequireKeys::new(loader, strings::REQUIRED_KEYS)
}

/// Observer logging each committed locale switch.
fn locale_logger(localization: &Arc<LocalizationService>) -> Arc<dyn LocaleObserver> {
    let localization: Weak<LocalizationService> = Arc::downgrade(localization);
    Arc::new(move || {
        if let Some(localization) = localization.upgrade() {
            tracing::info!(locale = %localization.current_locale(), "locale changed");
        }
    })
}

impl App {
    /// Creates the window state and subscribes the language saver.
    pub fn new(
        localization: Arc<LocalizationService>,
        config_dir: Option<PathBuf>,
    ) -> (Self, Task<Message>) {
        let saver = persistence::language_saver(&localization, config_dir);
        localization.subscribe(Arc::clone(&saver));

        let app = Self {
            localization,
            saver,
            notice_visible: false,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        view::label(&self.localization, strings::TITLE)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ToggleLanguage => match self.localization.toggle_locale() {
                Ok(()) => self.notice_visible = false,
                Err(error) => {
                    tracing::error!(%error, "language switch failed");
                    self.notice_visible = true;
                }
            },
            Message::DismissNotice => self.notice_visible = false,
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            localization: &self.localization,
            notice_visible: self.notice_visible,
        })
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.localization.unsubscribe(&self.saver);
    }
}
