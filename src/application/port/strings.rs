// SPDX-License-Identifier: MPL-2.0
//! String table port definition.
//!
//! This module defines the [`StringTableLoader`] trait that turns a locale into
//! a [`StringTable`]. Infrastructure adapters decide where the text lives
//! (embedded Fluent files, a directory on disk, an in-memory map).

use crate::domain::locale::LocaleId;
use std::collections::HashMap;
use thiserror::Error;

// =============================================================================
// ResourceError
// =============================================================================

/// Errors that can occur while loading a string table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceError {
    /// No resource exists for the requested locale.
    #[error("resource not found")]
    NotFound,

    /// The resource exists but could not be parsed or resolved.
    #[error("malformed resource: {0}")]
    Malformed(String),

    /// The resource could not be read (I/O error).
    #[error("I/O error: {0}")]
    Io(String),

    /// The table lacks keys every locale is required to define.
    #[error("missing required keys: {}", .0.join(", "))]
    MissingKeys(Vec<String>),
}

// =============================================================================
// StringTable
// =============================================================================

/// Key to localized text mapping for a single locale.
///
/// Tables are built once by a loader and never mutated afterwards; the service
/// swaps whole tables when the locale changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringTable {
    entries: HashMap<String, String>,
}

impl StringTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an entry.
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for StringTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, text)| (key.into(), text.into()))
                .collect(),
        }
    }
}

// =============================================================================
// StringTableLoader Trait
// =============================================================================

/// Port for loading the strings of one locale.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; the localization service is shared
/// across threads and calls the loader on every locale switch.
///
/// # Example
///
/// ```ignore
/// use langswitch::application::port::StringTableLoader;
/// use langswitch::domain::LocaleId;
///
/// fn greeting(loader: &impl StringTableLoader) -> Option<String> {
///     let table = loader.load(&LocaleId::parse("de").ok()?).ok()?;
///     table.get("greeting").map(str::to_owned)
/// }
/// ```
pub trait StringTableLoader: Send + Sync {
    /// Loads the full string table for `locale`.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] if the resource is missing, unreadable or
    /// malformed. Implementations never return a partial table.
    fn load(&self, locale: &LocaleId) -> Result<StringTable, ResourceError>;
}

impl<L: StringTableLoader + ?Sized> StringTableLoader for Box<L> {
    fn load(&self, locale: &LocaleId) -> Result<StringTable, ResourceError> {
        (**self).load(locale)
    }
}

impl<L: StringTableLoader + ?Sized> StringTableLoader for std::sync::Arc<L> {
    fn load(&self, locale: &LocaleId) -> Result<StringTable, ResourceError> {
        (**self).load(locale)
    }
}
