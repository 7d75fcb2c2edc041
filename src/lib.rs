// SPDX-License-Identifier: MPL-2.0
//! `langswitch` is a small desktop shell built with the Iced GUI framework.
//!
//! Its core is the [`LocalizationService`](i18n::LocalizationService): it
//! holds the supported locales, tracks the active one, resolves localized
//! strings from Fluent translations and notifies subscribers whenever the
//! locale changes.

#![doc(html_root_url = "https://docs.rs/langswitch/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod logging;
