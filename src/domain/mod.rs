// SPDX-License-Identifier: MPL-2.0
//! Domain layer - locale value objects and their rules.
//!
//! Apart from `std`, the domain only depends on `unic-langid` for tag parsing
//! and `thiserror` for its error type. It knows nothing about the GUI or about
//! where translations come from.
//!
//! # Modules
//!
//! - [`locale`]: [`LocaleId`](locale::LocaleId) and
//!   [`SupportedLocales`](locale::SupportedLocales)

pub mod locale;

pub use locale::{LocaleError, LocaleId, SupportedLocales};
