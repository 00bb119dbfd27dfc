//! Domain models for the storefront.
//!
//! These are thin value objects exchanged with the host contracts in
//! [`crate::contracts`]. The host owns the records; the storefront only
//! references them by id or carries them between contracts and templates.

pub mod address;
pub mod basket;
pub mod category;
pub mod contact;
pub mod item;
pub mod order;
pub mod session;
pub mod url;

pub use address::{Address, AddressData};
pub use basket::BasketItem;
pub use category::{Category, CategoryKind};
pub use contact::{Contact, ContactData, ContactUpdate};
pub use item::{ItemData, ItemRef, Variation, VariationDocument, VariationRef};
pub use order::{Order, PaginatedResult};
pub use session::keys as session_keys;
pub use url::ShopUrl;
