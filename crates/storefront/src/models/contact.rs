//! Contact (customer account) types.

use chrono::{DateTime, Utc};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use ioshop_core::{ContactId, Email};

/// A customer account as returned by the contact contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    /// Host contact ID.
    pub id: ContactId,
    /// Login email.
    pub email: Email,
    /// First name.
    pub first_name: Option<String>,
    /// Last name.
    pub last_name: Option<String>,
    /// When the contact was created.
    pub created_at: DateTime<Utc>,
}

impl Contact {
    /// Display name, falling back to the email address.
    #[must_use]
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(name), None) | (None, Some(name)) => name.clone(),
            (None, None) => self.email.to_string(),
        }
    }
}

/// Data for creating a contact.
///
/// The plaintext password is used both to create the account and to log the
/// new contact in right after registration.
#[derive(Debug, Clone)]
pub struct ContactData {
    pub email: Email,
    pub password: SecretString,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Changes applied to an existing contact.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}
