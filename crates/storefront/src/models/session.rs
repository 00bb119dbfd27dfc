//! Session-related types.

/// Session keys used by the storefront and the session-backed contracts.
pub mod keys {
    /// Key for the logged-in contact's ID.
    pub const CONTACT_ID: &str = "contact_id";

    /// Key for the email a guest entered to check out without an account.
    pub const GUEST_EMAIL: &str = "guest_email";

    /// Key for the visitor's basket items.
    pub const BASKET_ITEMS: &str = "basket_items";
}
