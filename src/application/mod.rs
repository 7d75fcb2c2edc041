// SPDX-License-Identifier: MPL-2.0
//! Application layer - ports between the localization core and the outside.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer (the iced shell) subscribes through application ports
//!
//! # Example
//!
//! ```ignore
//! use langswitch::application::port::LocaleObserver;
//!
//! // Any closure can observe locale changes
//! let observer: std::sync::Arc<dyn LocaleObserver> =
//!     std::sync::Arc::new(|| tracing::info!("locale changed"));
//! ```

pub mod port;
