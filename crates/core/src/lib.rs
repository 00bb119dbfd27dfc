//! ioshop core - shared types library.
//!
//! This crate provides common types used across all ioshop components:
//! - `storefront` - Checkout, contact and account pages
//! - `cli` - Command-line tools for session table migrations
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails and address types

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
