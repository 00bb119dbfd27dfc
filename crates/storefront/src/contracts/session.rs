use async_trait::async_trait;
use secrecy::SecretString;

use ioshop_core::{ContactId, Email};

use super::HostResult;

/// Key-value store scoped to the visitor session.
///
/// The guest-checkout marker lives under
/// [`session_keys::GUEST_EMAIL`](crate::models::session_keys::GUEST_EMAIL).
#[async_trait]
pub trait SessionStorageRepository: Send + Sync {
    /// Read a string value.
    async fn get_session_value(&self, key: &str) -> HostResult<Option<String>>;

    /// Store a string value.
    async fn set_session_value(&self, key: &str, value: &str) -> HostResult<()>;
}

/// Identity of the visitor session.
#[async_trait]
pub trait UserSession: Send + Sync {
    /// ID of the logged-in contact, or [`ContactId::NONE`].
    async fn current_contact_id(&self) -> HostResult<ContactId>;
}

/// Logs contacts into and out of the visitor session.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Log in by email and password; returns the contact's ID.
    async fn login(&self, email: &Email, password: &SecretString) -> HostResult<ContactId>;

    /// Log in a known contact, checking the plaintext password.
    async fn login_with_contact_id(
        &self,
        contact_id: ContactId,
        password: &SecretString,
    ) -> HostResult<()>;

    /// Drop the session identity.
    async fn logout(&self) -> HostResult<()>;
}
