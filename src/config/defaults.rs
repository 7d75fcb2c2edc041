// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Locales**: Shipped locales and their cycling order
//! - **Window**: Initial and minimum window size

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Locales cycled by the language toggle when the config lists none.
///
/// Each entry needs a matching `assets/i18n/<tag>.ftl` file.
pub const DEFAULT_LOCALES: &[&str] = &["en", "de", "fr"];

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default window width in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: u32 = 480;

/// Default window height in logical pixels.
pub const DEFAULT_WINDOW_HEIGHT: u32 = 320;

/// Minimum window width.
pub const MIN_WINDOW_WIDTH: u32 = 320;

/// Minimum window height.
pub const MIN_WINDOW_HEIGHT: u32 = 200;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(!DEFAULT_LOCALES.is_empty());

    assert!(MIN_WINDOW_WIDTH > 0);
    assert!(MIN_WINDOW_HEIGHT > 0);
    assert!(DEFAULT_WINDOW_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(DEFAULT_WINDOW_HEIGHT >= MIN_WINDOW_HEIGHT);
};
