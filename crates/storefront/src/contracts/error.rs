//! Host contract error type.

use thiserror::Error;

/// Errors reported by host contracts.
#[derive(Debug, Error)]
pub enum HostError {
    /// The requested record does not exist (or belongs to another contact).
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    /// The submitted data was rejected by the host.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The record clashes with an existing one.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Login data did not match a contact.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Reading or writing the visitor session failed.
    #[error("session error: {0}")]
    Session(String),

    /// The host could not serve the request.
    #[error("host unavailable: {0}")]
    Unavailable(String),
}

impl From<tower_sessions::session::Error> for HostError {
    fn from(err: tower_sessions::session::Error) -> Self {
        Self::Session(err.to_string())
    }
}

/// Result alias for contract calls.
pub type HostResult<T> = Result<T, HostError>;
