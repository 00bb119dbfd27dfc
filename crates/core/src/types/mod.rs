//! Core types for ioshop.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod address;
pub mod email;
pub mod id;
pub mod price;

pub use address::{AddressType, ParseAddressTypeError, UnknownAddressType};
pub use email::{Email, EmailError};
pub use id::*;
pub use price::{CurrencyCode, Price};
