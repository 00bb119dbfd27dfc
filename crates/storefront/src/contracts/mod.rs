//! Host contracts.
//!
//! Every piece of business data the storefront touches is owned by the host
//! platform and reached through one of these traits. Handlers and services
//! receive them by reference and never construct implementations
//! themselves; the development host in [`crate::host`] provides one set of
//! implementations, a production deployment provides another.
//!
//! Errors from a contract are [`HostError`] and propagate unchanged to the
//! HTTP layer.

mod address;
mod basket;
mod category;
mod contact;
mod error;
mod item;
mod order;
mod session;
mod url_builder;

pub use address::ContactAddressRepository;
pub use basket::BasketItemRepository;
pub use category::CategoryRepository;
pub use contact::ContactRepository;
pub use error::{HostError, HostResult};
pub use item::ItemRepository;
pub use order::OrderRepository;
pub use session::{Authenticator, SessionStorageRepository, UserSession};
pub use url_builder::UrlBuilderRepository;
