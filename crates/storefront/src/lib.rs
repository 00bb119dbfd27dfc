//! ioshop storefront library.
//!
//! Checkout admission, the contact page, storefront links and customer
//! account management over host-provided contracts. The binary in
//! `main.rs` wires this library into an axum server; tests drive the same
//! router in process.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod contracts;
pub mod db;
pub mod error;
pub mod filters;
pub mod host;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
