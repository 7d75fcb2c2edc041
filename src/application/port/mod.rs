// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters and UI
//! components implement. These traits use only domain types, ensuring the
//! localization service stays independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`strings`]: Loading a locale's string table
//! - [`observer`]: Receiving locale change notifications
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no Fluent types)
//! - Traits are `Send + Sync` so the service can be shared across threads
//! - Methods return `Result` with port-level error types
//!
//! # Example
//!
//! ```ignore
//! use langswitch::application::port::{StringTable, StringTableLoader, ResourceError};
//! use langswitch::domain::LocaleId;
//!
//! struct Fixed;
//!
//! impl StringTableLoader for Fixed {
//!     fn load(&self, _locale: &LocaleId) -> Result<StringTable, ResourceError> {
//!         Ok([("title", "Hello")].into_iter().collect())
//!     }
//! }
//! ```

pub mod observer;
pub mod strings;

// Re-export main types for convenience
pub use observer::LocaleObserver;
pub use strings::{ResourceError, StringTable, StringTableLoader};
