// SPDX-License-Identifier: MPL-2.0
//! Language preference persistence.
//!
//! The shell remembers the last selected locale so the next start opens in
//! the same language. Persisting is driven by a locale observer, so it runs
//! synchronously inside every committed switch, including those triggered from
//! the iced update loop. A settings file that does not parse is left untouched.

use crate::application::port::LocaleObserver;
use crate::config;
use crate::domain::LocaleId;
use crate::error::{Error, Result};
use crate::i18n::LocalizationService;
use std::path::PathBuf;
use std::sync::{Arc, Weak};

/// Writes `locale` as the preferred language, keeping every other setting.
///
/// # Errors
///
/// Returns [`Error::Config`] without writing anything when the existing
/// settings file cannot be read, and any I/O error from the save itself.
pub fn persist_language(locale: &LocaleId, config_dir: Option<PathBuf>) -> Result<()> {
    let (mut cfg, warning) = config::load_with_override(config_dir.clone());
    if let Some(warning) = warning {
        return Err(Error::Config(warning));
    }
    cfg.general.language = Some(locale.to_string());
    config::save_with_override(&cfg, config_dir)
}

/// Observer that saves the active locale after every change.
///
/// Holds only a weak reference so subscribing it does not keep the service
/// alive through its own observer list.
pub fn language_saver(
    service: &Arc<LocalizationService>,
    config_dir: Option<PathBuf>,
) -> Arc<dyn LocaleObserver> {
    let service: Weak<LocalizationService> = Arc::downgrade(service);
    Arc::new(move || {
        let Some(service) = service.upgrade() else {
            return;
        };
        let locale = service.current_locale();
        if let Err(error) = persist_language(&locale, config_dir.clone()) {
            tracing::warn!(%locale, %error, "failed to save language preference");
        }
    })
}
