//! Black-box HTTP tests for the ioshop storefront.
//!
//! # Running Tests
//!
//! ```bash
//! # Create the session table and start the storefront
//! cargo run -p ioshop-cli -- migrate sessions
//! cargo run -p ioshop-storefront
//!
//! # Run the ignored tests against it
//! cargo test -p ioshop-integration-tests -- --ignored
//! ```
//!
//! `STOREFRONT_BASE_URL` points the tests at another server.

use reqwest::{Client, redirect};

/// Base URL of the storefront under test.
#[must_use]
pub fn storefront_base_url() -> String {
    std::env::var("STOREFRONT_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Client that keeps cookies and does not follow redirects.
///
/// # Panics
///
/// Panics if the HTTP client cannot be built.
#[must_use]
#[allow(clippy::expect_used)]
pub fn client() -> Client {
    Client::builder()
        .cookie_store(true)
        .redirect(redirect::Policy::none())
        .build()
        .expect("Failed to create HTTP client")
}
