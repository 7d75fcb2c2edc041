// SPDX-License-Identifier: MPL-2.0
//! Message keys the shell reads from the localization service.
//!
//! Every shipped locale must define all of [`REQUIRED_KEYS`]; the loader used
//! at startup rejects a translation that lacks one.

pub const TITLE: &str = "title";
pub const GREETING: &str = "greeting";
pub const LANGUAGE_LABEL: &str = "language-label";
pub const LANGUAGE_NAME: &str = "language-name";
pub const TOGGLE_LANGUAGE: &str = "toggle-language";
pub const SWITCH_FAILED: &str = "switch-failed";

pub const REQUIRED_KEYS: [&str; 6] = [
    TITLE,
    GREETING,
    LANGUAGE_LABEL,
    LANGUAGE_NAME,
    TOGGLE_LANGUAGE,
    SWITCH_FAILED,
];
