use async_trait::async_trait;
use secrecy::SecretString;

use ioshop_core::{ContactId, Email};

use super::HostResult;
use crate::models::{Contact, ContactData, ContactUpdate};

/// Contact (customer account) records.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Create a contact. Fails with `Conflict` if the email is taken.
    async fn create_contact(&self, data: &ContactData) -> HostResult<Contact>;

    /// Look up a contact by ID.
    async fn find_contact_by_id(&self, contact_id: ContactId) -> HostResult<Option<Contact>>;

    /// Look up a contact by login email.
    async fn find_contact_by_email(&self, email: &Email) -> HostResult<Option<Contact>>;

    /// Apply `update` to the contact and return the result.
    async fn update_contact(
        &self,
        update: &ContactUpdate,
        contact_id: ContactId,
    ) -> HostResult<Contact>;

    /// Whether `password` matches the contact's stored password.
    async fn verify_password(
        &self,
        contact_id: ContactId,
        password: &SecretString,
    ) -> HostResult<bool>;
}
