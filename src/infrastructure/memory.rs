// SPDX-License-Identifier: MPL-2.0
//! In-memory string table loader.
//!
//! Serves tables from a map. Tests and benchmarks use it in place of Fluent
//! files; it can also be told to fail for a locale to exercise error paths.

use crate::application::port::{ResourceError, StringTable, StringTableLoader};
use crate::domain::locale::LocaleId;
use std::collections::HashMap;

#[derive(Debug, Clone)]
enum Entry {
    Table(StringTable),
    Failure(ResourceError),
}

/// Loader backed by tables held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    entries: HashMap<String, Entry>,
}

impl MemoryLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a table for `tag` built from key/text pairs.
    #[must_use]
    pub fn with_table<I, K, V>(mut self, tag: &str, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.insert(tag, pairs.into_iter().collect());
        self
    }

    /// Makes every load of `tag` fail with `error`.
    #[must_use]
    pub fn with_failure(mut self, tag: &str, error: ResourceError) -> Self {
        self.entries.insert(canonical(tag), Entry::Failure(error));
        self
    }

    pub fn insert(&mut self, tag: &str, table: StringTable) {
        self.entries.insert(canonical(tag), Entry::Table(table));
    }
}

impl StringTableLoader for MemoryLoader {
    fn load(&self, locale: &LocaleId) -> Result<StringTable, ResourceError> {
        match self.entries.get(&locale.to_string()) {
            Some(Entry::Table(table)) => Ok(table.clone()),
            Some(Entry::Failure(error)) => Err(error.clone()),
            None => Err(ResourceError::NotFound),
        }
    }
}

/// Canonical tag so `EN` and `en` address the same table.
fn canonical(tag: &str) -> String {
    LocaleId::parse(tag).map_or_else(|_| tag.to_string(), |locale| locale.to_string())
}
