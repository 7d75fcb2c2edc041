// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module holds the [`LocalizationService`]: the supported locales, the
//! active locale with its string table, and the observers notified when the
//! locale changes. Where the strings come from is decided by a
//! [`StringTableLoader`](crate::application::port::StringTableLoader).
//!
//! # Features
//!
//! - Initial locale from an optional preference, first supported locale otherwise
//! - Cyclic locale toggle and direct locale selection
//! - Strict lookups: a missing key is an error, never a placeholder
//! - Change notifications to identity-keyed observers

mod observers;
mod service;

pub use service::LocalizationService;

use crate::application::port::ResourceError;
use crate::domain::locale::LocaleError;
use thiserror::Error;

/// Errors surfaced by the localization service.
///
/// The service reports these to its caller and never logs or retries them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocalizationError {
    /// The string table for `locale` could not be loaded.
    #[error("failed to load strings for locale '{locale}': {source}")]
    ResourceLoad {
        locale: String,
        #[source]
        source: ResourceError,
    },

    /// The active table has no entry for `key`.
    #[error("no localized string for key '{key}' in locale '{locale}'")]
    MissingKey { key: String, locale: String },

    /// The requested locale is not part of the supported list.
    #[error("locale '{0}' is not supported")]
    UnsupportedLocale(String),

    /// The supported locale list itself is invalid.
    #[error(transparent)]
    Locale(#[from] LocaleError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn resource_load_keeps_source() {
        let err = LocalizationError::ResourceLoad {
            locale: "de".into(),
            source: ResourceError::NotFound,
        };
        assert_eq!(
            err.to_string(),
            "failed to load strings for locale 'de': resource not found"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn missing_key_names_key_and_locale() {
        let err = LocalizationError::MissingKey {
            key: "title".into(),
            locale: "fr".into(),
        };
        assert!(err.to_string().contains("'title'"));
        assert!(err.to_string().contains("'fr'"));
    }

    #[test]
    fn locale_errors_convert() {
        let err: LocalizationError = LocaleError::Empty.into();
        assert_eq!(err.to_string(), "supported locale list is empty");
    }
}
