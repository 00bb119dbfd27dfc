//! HTTP middleware and extractors for the storefront.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layer (capture errors)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID (add unique ID to each request)
//! 4. Session layer (tower-sessions, `PostgreSQL` store in production)
//!
//! # Extractors
//!
//! - [`SessionContracts`] - session-bound host contracts for one request
//! - [`RequireContact`] / [`OptionalContact`] - logged-in contact ID
//! - [`Locale`] - active shop language
//! - [`ShopBuilder`] - whether the shop builder composes the page

pub mod auth;
pub mod host;
pub mod locale;
pub mod request_id;
pub mod session;

pub use auth::{OptionalContact, RequireContact};
pub use host::SessionContracts;
pub use locale::{Locale, SHOP_BUILDER_HEADER, ShopBuilder};
pub use request_id::request_id_middleware;
pub use session::create_session_layer;
