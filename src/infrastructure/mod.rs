// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the
//! [`StringTableLoader`] port defined in `application::port`.
//!
//! # Available Adapters
//!
//! - [`fluent`]: Fluent `.ftl` files, embedded or from a directory
//! - [`memory`]: Tables held in memory (tests, benchmarks)
//! - [`required`]: Decorator enforcing a baseline key set
//!
//! [`StringTableLoader`]: crate::application::port::StringTableLoader

pub mod fluent;
pub mod memory;
pub mod required;

// Re-export main types for convenience
pub use fluent::FluentLoader;
pub use memory::MemoryLoader;
pub use required::RequireKeys;
