//! Business logic services for the storefront.
//!
//! # Services
//!
//! - `checkout` - Checkout admission guard
//! - `customer` - Request-scoped customer/address/order orchestration
//! - `url_filter` - Item and variation links for templates

pub mod checkout;
pub mod customer;
pub mod url_filter;

pub use checkout::{CheckoutDecision, CheckoutGuard, CheckoutRequest};
pub use customer::{CustomerContracts, CustomerService};
pub use url_filter::UrlFilter;
