// SPDX-License-Identifier: MPL-2.0
//! The localization service.
//!
//! [`LocalizationService`] owns the supported locale list, the active locale
//! with its string table, and the observers to notify when the locale changes.
//! It is created once at startup and shared through an `Arc`.
//!
//! # Invariants
//!
//! 1. The active locale is always an entry of the supported list.
//! 2. Locale and table are swapped together: readers see either the fully-old
//!    or the fully-new binding.
//! 3. A switch commits only after its table loaded; a failed load leaves the
//!    previous binding active and notifies nobody.
//! 4. Observers run after the commit, outside every internal lock.

use super::observers::ObserverRegistry;
use super::LocalizationError;
use crate::application::port::{LocaleObserver, StringTable, StringTableLoader};
use crate::domain::locale::{LocaleId, SupportedLocales};
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;

/// Locale plus the table loaded for it.
#[derive(Debug)]
struct ActiveLocale {
    locale: LocaleId,
    table: Arc<StringTable>,
}

/// Holds the active locale and resolves localized strings.
///
/// # Example
///
/// ```
/// use langswitch::domain::SupportedLocales;
/// use langswitch::i18n::LocalizationService;
/// use langswitch::infrastructure::MemoryLoader;
///
/// let loader = MemoryLoader::new()
///     .with_table("en", [("title", "Hello")])
///     .with_table("de", [("title", "Hallo")]);
/// let supported = SupportedLocales::parse(["en", "de"]).unwrap();
///
/// let service = LocalizationService::new(supported, None, loader).unwrap();
/// assert_eq!(service.get("title").unwrap(), "Hello");
///
/// service.toggle_locale().unwrap();
/// assert_eq!(service.language(), "de");
/// assert_eq!(service.get("title").unwrap(), "Hallo");
/// ```
pub struct LocalizationService {
    supported: SupportedLocales,
    loader: Box<dyn StringTableLoader>,
    active: RwLock<Arc<ActiveLocale>>,
    /// Serializes locale switches so each one commits a distinct successor.
    switching: Mutex<()>,
    observers: ObserverRegistry,
}

impl LocalizationService {
    /// Creates the service and loads the initial string table.
    ///
    /// The initial locale is the supported entry matching `preferred`, or the
    /// first supported entry when the preference is absent or unknown.
    /// Construction is not a change event and notifies nobody.
    ///
    /// # Errors
    ///
    /// Returns [`LocalizationError::ResourceLoad`] when the table for the
    /// initial locale cannot be loaded.
    pub fn new(
        supported: SupportedLocales,
        preferred: Option<&str>,
        loader: impl StringTableLoader + 'static,
    ) -> Result<Self, LocalizationError> {
        let loader: Box<dyn StringTableLoader> = Box::new(loader);
        let locale = supported.resolve(preferred).clone();
        let table = load_table(&*loader, &locale)?;

        Ok(Self {
            supported,
            loader,
            active: RwLock::new(Arc::new(ActiveLocale { locale, table })),
            switching: Mutex::new(()),
            observers: ObserverRegistry::default(),
        })
    }

    /// Advances to the next supported locale, wrapping after the last one.
    ///
    /// # Errors
    ///
    /// Returns [`LocalizationError::ResourceLoad`] when the next locale's
    /// table cannot be loaded; the current locale stays active.
    pub fn toggle_locale(&self) -> Result<(), LocalizationError> {
        let guard = self.switching.lock();
        let next = self.supported.successor(&self.current_locale()).clone();
        self.commit(next)?;
        drop(guard);

        self.observers.notify_all();
        Ok(())
    }

    /// Switches to a specific supported locale.
    ///
    /// Selecting the locale that is already active does nothing and notifies
    /// nobody.
    ///
    /// # Errors
    ///
    /// Returns [`LocalizationError::UnsupportedLocale`] for a locale outside
    /// the supported list and [`LocalizationError::ResourceLoad`] when its
    /// table cannot be loaded. The current locale stays active in both cases.
    pub fn set_locale(&self, locale: &LocaleId) -> Result<(), LocalizationError> {
        if !self.supported.contains(locale) {
            return Err(LocalizationError::UnsupportedLocale(locale.to_string()));
        }

        let guard = self.switching.lock();
        if self.current_locale() == *locale {
            return Ok(());
        }
        self.commit(locale.clone())?;
        drop(guard);

        self.observers.notify_all();
        Ok(())
    }

    /// Returns the text bound to `key` in the active table.
    ///
    /// # Errors
    ///
    /// Returns [`LocalizationError::MissingKey`] when the active table has no
    /// entry for `key`. The key itself is never returned as a stand-in.
    pub fn get(&self, key: &str) -> Result<String, LocalizationError> {
        let active = self.snapshot();
        active
            .table
            .get(key)
            .map(str::to_owned)
            .ok_or_else(|| LocalizationError::MissingKey {
                key: key.to_string(),
                locale: active.locale.to_string(),
            })
    }

    /// Returns the active table, for reading several keys consistently.
    #[must_use]
    pub fn strings(&self) -> Arc<StringTable> {
        Arc::clone(&self.snapshot().table)
    }

    /// Language subtag of the active locale (`de` for `de-CH`).
    #[must_use]
    pub fn language(&self) -> String {
        self.snapshot().locale.language().to_string()
    }

    #[must_use]
    pub fn current_locale(&self) -> LocaleId {
        self.snapshot().locale.clone()
    }

    #[must_use]
    pub fn supported(&self) -> &SupportedLocales {
        &self.supported
    }

    /// Registers an observer. Returns `false` if it was already registered.
    pub fn subscribe(&self, observer: Arc<dyn LocaleObserver>) -> bool {
        self.observers.insert(observer)
    }

    /// Deregisters an observer. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, observer: &Arc<dyn LocaleObserver>) -> bool {
        self.observers.remove(observer)
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn snapshot(&self) -> Arc<ActiveLocale> {
        Arc::clone(&*self.active.read())
    }

    /// Loads `locale` and swaps it in. Callers hold `switching`.
    fn commit(&self, locale: LocaleId) -> Result<(), LocalizationError> {
        let table = load_table(&*self.loader, &locale)?;
        tracing::debug!(locale = %locale, entries = table.len(), "locale switched");
        *self.active.write() = Arc::new(ActiveLocale { locale, table });
        Ok(())
    }
}

fn load_table(
    loader: &dyn StringTableLoader,
    locale: &LocaleId,
) -> Result<Arc<StringTable>, LocalizationError> {
    loader
        .load(locale)
        .map(Arc::new)
        .map_err(|source| LocalizationError::ResourceLoad {
            locale: locale.to_string(),
            source,
        })
}

impl std::fmt::Debug for LocalizationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalizationService")
            .field("supported", &self.supported)
            .field("current", &self.snapshot().locale)
            .field("observers", &self.observers)
            .finish_non_exhaustive()
    }
}
