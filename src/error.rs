// SPDX-License-Identifier: MPL-2.0
use crate::i18n::LocalizationError;
use thiserror::Error;

/// Errors raised while bootstrapping and running the shell.
#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Localization Error: {0}")]
    Localization(#[from] LocalizationError),

    /// No display server is reachable, so no window can be created.
    #[error("Display Error: no display available (neither WAYLAND_DISPLAY nor DISPLAY is set)")]
    NoDisplay,

    #[error("GUI Error: {0}")]
    Gui(String),

    #[error("CLI Error: {0}")]
    Cli(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<pico_args::Error> for Error {
    fn from(err: pico_args::Error) -> Self {
        Error::Cli(err.to_string())
    }
}

impl From<iced::Error> for Error {
    fn from(err: iced::Error) -> Self {
        Error::Gui(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
