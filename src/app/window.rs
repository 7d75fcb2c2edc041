// SPDX-License-Identifier: MPL-2.0
//! Top-level window factory.
//!
//! [`create`] turns a title into the settings of the shell's main window. It
//! refuses to do so when the environment has no display server, so a
//! headless run fails with [`Error::NoDisplay`] instead of a backend panic.

use crate::config::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::error::{Error, Result};
use iced::window;
use std::fmt;

/// Environment variables that point at a usable display on Linux and BSDs.
pub const DISPLAY_ENV_VARS: [&str; 2] = ["WAYLAND_DISPLAY", "DISPLAY"];

/// A window ready to be opened by the iced runtime.
///
/// `title` is the title at creation time. Once the window is open, iced reads
/// the live title from `App::title`, which follows locale switches.
pub struct Frame {
    title: String,
    settings: window::Settings,
}

impl Frame {
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn size(&self) -> iced::Size {
        self.settings.size
    }

    #[must_use]
    pub fn into_settings(self) -> window::Settings {
        self.settings
    }
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frame")
            .field("title", &self.title)
            .field("size", &self.settings.size)
            .finish()
    }
}

/// Creates the main window description.
///
/// # Errors
///
/// Returns [`Error::NoDisplay`] when no display server is reachable.
pub fn create(title: impl Into<String>, (width, height): (u32, u32)) -> Result<Frame> {
    if !display_available() {
        return Err(Error::NoDisplay);
    }

    let settings = window::Settings {
        size: iced::Size::new(width as f32, height as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    };

    Ok(Frame {
        title: title.into(),
        settings,
    })
}

/// Whether a display server is reachable from this process.
#[cfg(all(unix, not(target_os = "macos")))]
#[must_use]
pub fn display_available() -> bool {
    DISPLAY_ENV_VARS
        .iter()
        .any(|var| std::env::var_os(var).is_some_and(|value| !value.is_empty()))
}

/// Whether a display server is reachable from this process.
///
/// Windows and macOS always provide a desktop session to GUI processes.
#[cfg(not(all(unix, not(target_os = "macos"))))]
#[must_use]
pub fn display_available() -> bool {
    true
}

#[cfg(all(test, unix, not(target_os = "macos")))]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to prevent parallel tests from interfering with each other's env vars
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    struct SavedEnv(Vec<(&'static str, Option<std::ffi::OsString>)>);

    impl SavedEnv {
        fn capture() -> Self {
            Self(
                DISPLAY_ENV_VARS
                    .iter()
                    .map(|var| (*var, std::env::var_os(var)))
                    .collect(),
            )
        }
    }

    impl Drop for SavedEnv {
        fn drop(&mut self) {
            for (var, value) in &self.0 {
                match value {
                    Some(value) => std::env::set_var(var, value),
                    None => std::env::remove_var(var),
                }
            }
        }
    }

    #[test]
    fn create_fails_without_display() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let _saved = SavedEnv::capture();
        for var in DISPLAY_ENV_VARS {
            std::env::remove_var(var);
        }

        let result = create("LangSwitch", (480, 320));
        assert!(matches!(result, Err(Error::NoDisplay)));
    }

    #[test]
    fn empty_display_variable_does_not_count() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let _saved = SavedEnv::capture();
        std::env::remove_var("WAYLAND_DISPLAY");
        std::env::set_var("DISPLAY", "");

        assert!(!display_available());
    }

    #[test]
    fn create_builds_window_with_title_and_size() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let _saved = SavedEnv::capture();
        std::env::set_var("DISPLAY", ":0");

        let frame = create("LangSwitch", (640, 400)).expect("display is set");
        assert_eq!(frame.title(), "LangSwitch");
        assert_eq!(frame.size(), iced::Size::new(640.0, 400.0));
    }
}
