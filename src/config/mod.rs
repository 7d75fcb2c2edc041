// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Preferred language and the locales cycled by the toggle
//! - `[window]` - Initial window size
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass a directory to `load_with_override()` (the `--config-dir` flag)
//! 3. Set `LANGSWITCH_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use langswitch::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load_with_override(None);
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save_with_override(&config, None).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::locale::{LocaleError, LocaleId, SupportedLocales};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language tag (e.g., "en", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Locales cycled by the language toggle, in order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locales: Option<Vec<String>>,
}

/// Window settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowConfig {
    #[serde(default = "default_window_width", skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    #[serde(default = "default_window_height", skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
        }
    }
}

impl WindowConfig {
    /// Window size clamped to the minimum supported size.
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        (
            self.width
                .unwrap_or(DEFAULT_WINDOW_WIDTH)
                .max(MIN_WINDOW_WIDTH),
            self.height
                .unwrap_or(DEFAULT_WINDOW_HEIGHT)
                .max(MIN_WINDOW_HEIGHT),
        )
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Window settings.
    #[serde(default)]
    pub window: WindowConfig,
}

impl Config {
    /// The locales to cycle through: the configured list or the shipped defaults.
    pub fn supported_locales(&self) -> std::result::Result<SupportedLocales, LocaleError> {
        match &self.general.locales {
            Some(tags) => SupportedLocales::parse(tags),
            None => SupportedLocales::parse(DEFAULT_LOCALES),
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_window_width() -> Option<u32> {
    Some(DEFAULT_WINDOW_WIDTH)
}

fn default_window_height() -> Option<u32> {
    Some(DEFAULT_WINDOW_HEIGHT)
}

// =============================================================================
// Language Preference
// =============================================================================

/// Picks the startup language preference.
///
/// Sources are tried in order: CLI flag, config file, operating system locale.
/// The first source naming a supported locale wins. The OS locale also
/// matches on its language subtag alone, so `de-AT` selects a shipped `de`.
/// Returns `None` when nothing matches; the localization service then starts
/// on the first supported locale.
#[must_use]
pub fn preferred_language(
    cli_lang: Option<&str>,
    config: &Config,
    supported: &SupportedLocales,
) -> Option<String> {
    let system = sys_locale::get_locale();
    pick_preference(
        [cli_lang, config.general.language.as_deref()],
        system.as_deref(),
        supported,
    )
}

fn pick_preference<'a>(
    explicit: impl IntoIterator<Item = Option<&'a str>>,
    system: Option<&str>,
    supported: &SupportedLocales,
) -> Option<String> {
    let explicit_match = explicit
        .into_iter()
        .flatten()
        .filter_map(|tag| LocaleId::parse(tag).ok())
        .find(|locale| supported.contains(locale));
    if let Some(locale) = explicit_match {
        return Some(locale.to_string());
    }

    let system = LocaleId::parse(system?).ok()?;
    [system.clone(), system.language_only()]
        .into_iter()
        .find(|locale| supported.contains(locale))
        .map(|locale| locale.to_string())
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from a custom directory, or the default one.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("ignoring {}: {err}", path.display())),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to a custom directory, or the default one.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn supported() -> SupportedLocales {
        SupportedLocales::parse(["en", "de", "fr"]).unwrap()
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                locales: Some(vec!["fr".to_string(), "en".to_string()]),
            },
            window: WindowConfig {
                width: Some(640),
                height: Some(400),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_warns_and_defaults_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[general\n").unwrap();

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_missing_file_is_silent_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: Config = toml::from_str("[general]\nlanguage = \"de\"\n").unwrap();
        assert_eq!(config.general.language.as_deref(), Some("de"));
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn supported_locales_default_to_shipped_list() {
        let supported = Config::default().supported_locales().unwrap();
        let tags: Vec<String> = supported.iter().map(ToString::to_string).collect();
        assert_eq!(tags, DEFAULT_LOCALES);
    }

    #[test]
    fn supported_locales_reject_duplicates() {
        let mut config = Config::default();
        config.general.locales = Some(vec!["en".into(), "en".into()]);
        assert_eq!(
            config.supported_locales(),
            Err(LocaleError::Duplicate("en".into()))
        );
    }

    #[test]
    fn window_size_is_clamped() {
        let window = WindowConfig {
            width: Some(10),
            height: None,
        };
        assert_eq!(window.size(), (MIN_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT));
    }

    #[test]
    fn cli_preference_wins_over_config() {
        let picked = pick_preference([Some("fr"), Some("de")], Some("en-US"), &supported());
        assert_eq!(picked.as_deref(), Some("fr"));
    }

    #[test]
    fn unsupported_cli_preference_falls_through_to_config() {
        let picked = pick_preference([Some("ja"), Some("de")], None, &supported());
        assert_eq!(picked.as_deref(), Some("de"));
    }

    #[test]
    fn system_locale_matches_on_language() {
        let picked = pick_preference([None, None], Some("de-AT"), &supported());
        assert_eq!(picked.as_deref(), Some("de"));
    }

    #[test]
    fn nothing_matching_yields_none() {
        let picked = pick_preference([None, Some("xx-invalid-!")], Some("ja-JP"), &supported());
        assert_eq!(picked, None);
    }
}
