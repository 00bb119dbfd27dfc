//! Development host.
//!
//! In-process implementations of the [`crate::contracts`] traits so the
//! storefront can run and be tested without the commerce platform:
//!
//! - [`MemoryHost`] - contacts, addresses, orders, items and categories in memory
//! - [`session`] - basket, session values and identity on top of `tower-sessions`
//! - [`CatalogUrlBuilder`] - slug-based item and variation URLs
//! - [`Catalog`] - JSON seed data for items and categories
//!
//! None of this is a persistence layer: data lives as long as the process.

pub mod catalog;
pub mod memory;
pub mod password;
pub mod session;
pub mod url_builder;

pub use catalog::{Catalog, CatalogError, CatalogItem};
pub use memory::MemoryHost;
pub use session::{SessionAuthenticator, SessionBasket, SessionStorage, SessionUser};
pub use url_builder::CatalogUrlBuilder;
