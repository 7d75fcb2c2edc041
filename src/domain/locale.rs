// SPDX-License-Identifier: MPL-2.0
//! Locale value objects.
//!
//! [`LocaleId`] wraps a parsed BCP-47 language tag and [`SupportedLocales`]
//! holds the ordered set of locales the application ships. The list order is
//! the order in which the locale toggle cycles.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use unic_langid::LanguageIdentifier;

// =============================================================================
// LocaleError
// =============================================================================

/// Errors raised while building locale values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    /// The tag could not be parsed as a language identifier.
    #[error("invalid locale identifier '{0}'")]
    Invalid(String),

    /// A supported locale list must contain at least one entry.
    #[error("supported locale list is empty")]
    Empty,

    /// The same locale appears more than once in a supported list.
    #[error("locale '{0}' is listed more than once")]
    Duplicate(String),
}

// =============================================================================
// LocaleId
// =============================================================================

/// A language tag such as `en`, `de` or `pt-BR`.
///
/// Equality is exact match on the canonical form of the tag, so `en` and
/// `en-US` are different locales.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocaleId(LanguageIdentifier);

impl LocaleId {
    /// Parses a language tag.
    pub fn parse(tag: &str) -> Result<Self, LocaleError> {
        tag.trim()
            .parse::<LanguageIdentifier>()
            .map(Self)
            .map_err(|_| LocaleError::Invalid(tag.to_string()))
    }

    /// Returns the language subtag (`pt` for `pt-BR`).
    #[must_use]
    pub fn language(&self) -> &str {
        self.0.language.as_str()
    }

    /// Returns a locale made of the language subtag only.
    #[must_use]
    pub fn language_only(&self) -> Self {
        Self(LanguageIdentifier::from_parts(
            self.0.language,
            None,
            None,
            &[],
        ))
    }

    /// Borrows the underlying language identifier.
    #[must_use]
    pub fn as_langid(&self) -> &LanguageIdentifier {
        &self.0
    }
}

impl FromStr for LocaleId {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for LocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// SupportedLocales
// =============================================================================

/// Ordered, non-empty, duplicate-free list of locales.
///
/// Fixed at construction; there is no way to add or remove entries later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportedLocales(Vec<LocaleId>);

impl SupportedLocales {
    /// Builds the list, rejecting empty input and duplicates.
    pub fn new(locales: Vec<LocaleId>) -> Result<Self, LocaleError> {
        if locales.is_empty() {
            return Err(LocaleError::Empty);
        }
        for (index, locale) in locales.iter().enumerate() {
            if locales[..index].contains(locale) {
                return Err(LocaleError::Duplicate(locale.to_string()));
            }
        }
        Ok(Self(locales))
    }

    /// Parses every tag and builds the list.
    pub fn parse<I, S>(tags: I) -> Result<Self, LocaleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let locales = tags
            .into_iter()
            .map(|tag| LocaleId::parse(tag.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(locales)
    }

    /// The first entry, used whenever no preference matches.
    #[must_use]
    pub fn first(&self) -> &LocaleId {
        // Non-empty by construction.
        &self.0[0]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn contains(&self, locale: &LocaleId) -> bool {
        self.0.contains(locale)
    }

    #[must_use]
    pub fn position(&self, locale: &LocaleId) -> Option<usize> {
        self.0.iter().position(|candidate| candidate == locale)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LocaleId> {
        self.0.iter()
    }

    /// Picks the initial locale for an optional preference string.
    ///
    /// An absent, unparsable or unsupported preference falls back to the
    /// first entry.
    #[must_use]
    pub fn resolve(&self, preferred: Option<&str>) -> &LocaleId {
        preferred
            .and_then(|tag| LocaleId::parse(tag).ok())
            .and_then(|locale| self.position(&locale))
            .map_or_else(|| self.first(), |index| &self.0[index])
    }

    /// Returns the entry after `current`, wrapping from last to first.
    ///
    /// A locale that is not in the list is treated as positioned before the
    /// first entry, so its successor is the first entry.
    #[must_use]
    pub fn successor(&self, current: &LocaleId) -> &LocaleId {
        let next = self
            .position(current)
            .map_or(0, |index| (index + 1) % self.0.len());
        &self.0[next]
    }
}

impl<'a> IntoIterator for &'a SupportedLocales {
    type Item = &'a LocaleId;
    type IntoIter = std::slice::Iter<'a, LocaleId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
