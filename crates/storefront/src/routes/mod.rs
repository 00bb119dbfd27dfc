//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//!
//! # Checkout
//! GET  /checkout               - Checkout (admission guard) or 308 to linked category
//! POST /checkout/guest         - Start a guest checkout
//!
//! # Pages
//! GET  /contact                - Contact page or 308 to linked category
//! GET  /c/{*path}              - Category page (checkout, contact or content)
//!
//! # Basket (HTMX fragments)
//! POST /basket/items           - Add a variation
//! GET  /basket/count           - Basket count badge
//!
//! # Auth
//! GET  /login                  - Login page (?backlink=)
//! POST /login                  - Login action
//! POST /logout                 - Logout action
//! GET  /register               - Register page
//! POST /register               - Register action
//!
//! # Account (requires login)
//! GET  /account                         - Account overview
//! POST /account                         - Update name
//! GET  /account/orders                  - Order history (?page=&items=)
//! GET  /account/addresses               - Address list (?type=)
//! POST /account/addresses               - Create address (mirrored)
//! GET  /account/addresses/{id}/edit     - Edit form (?type=)
//! POST /account/addresses/{id}          - Update address
//! POST /account/addresses/{id}/delete   - Delete address
//! ```

pub mod account;
pub mod auth;
pub mod basket;
pub mod category;
pub mod checkout;
pub mod contact;
pub mod forms;
pub mod home;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the checkout routes router.
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(checkout::show))
        .route("/guest", post(checkout::guest))
}

/// Create the basket routes router.
pub fn basket_routes() -> Router<AppState> {
    Router::new()
        .route("/items", post(basket::add))
        .route("/count", get(basket::count))
}

/// Create the account routes router.
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(account::index).post(account::update_profile))
        .route("/orders", get(account::orders))
        .route(
            "/addresses",
            get(account::addresses).post(account::create_address),
        )
        .route("/addresses/{id}", post(account::update_address))
        .route("/addresses/{id}/edit", get(account::edit_address))
        .route("/addresses/{id}/delete", post(account::delete_address))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .nest("/checkout", checkout_routes())
        .route("/contact", get(contact::show))
        .route("/c/{*path}", get(category::show))
        .nest("/basket", basket_routes())
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/register", get(auth::register_page).post(auth::register))
        .nest("/account", account_routes())
}
