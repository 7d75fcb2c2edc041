// SPDX-License-Identifier: MPL-2.0
//! Baseline key enforcement.
//!
//! [`RequireKeys`] wraps another loader and rejects any table that lacks one
//! of the baseline keys, so a lookup of a baseline key can never fail once a
//! table is active.

use crate::application::port::{ResourceError, StringTable, StringTableLoader};
use crate::domain::locale::LocaleId;

/// Loader decorator that checks every table against a baseline key set.
#[derive(Debug, Clone)]
pub struct RequireKeys<L> {
    inner: L,
    keys: Vec<String>,
}

impl<L> RequireKeys<L> {
    pub fn new<I, K>(inner: L, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self {
            inner,
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }
}

impl<L: StringTableLoader> StringTableLoader for RequireKeys<L> {
    fn load(&self, locale: &LocaleId) -> Result<StringTable, ResourceError> {
        let table = self.inner.load(locale)?;
        let missing: Vec<String> = self
            .keys
            .iter()
            .filter(|key| !table.contains_key(key))
            .cloned()
            .collect();
        if missing.is_empty() {
            Ok(table)
        } else {
            Err(ResourceError::MissingKeys(missing))
        }
    }
}
