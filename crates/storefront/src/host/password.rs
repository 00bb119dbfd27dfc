//! Password hashing for development-host contacts.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use secrecy::{ExposeSecret, SecretString};

use crate::contracts::HostError;

/// Minimum password length.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Reject passwords the host would not accept.
///
/// # Errors
///
/// Returns `HostError::Validation` if the password is too short.
pub fn validate_password(password: &SecretString) -> Result<(), HostError> {
    if password.expose_secret().chars().count() < MIN_PASSWORD_LENGTH {
        return Err(HostError::Validation(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Hash a password using Argon2id.
///
/// # Errors
///
/// Returns `HostError::Unavailable` if hashing fails.
pub fn hash_password(password: &SecretString) -> Result<String, HostError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.expose_secret().as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| HostError::Unavailable(format!("password hashing failed: {e}")))
}

/// Check a password against a stored hash.
#[must_use]
pub fn verify_password(password: &SecretString, hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.expose_secret().as_bytes(), &parsed_hash)
        .is_ok()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let password = SecretString::from("correct horse battery");
        let hash = hash_password(&password).unwrap();

        assert!(verify_password(&password, &hash));
        assert!(!verify_password(&SecretString::from("wrong password"), &hash));
    }

    #[test]
    fn test_verify_rejects_garbage_hash() {
        assert!(!verify_password(&SecretString::from("whatever1"), "not-a-hash"));
    }

    #[test]
    fn test_validate_password_length() {
        assert!(validate_password(&SecretString::from("short")).is_err());
        assert!(validate_password(&SecretString::from("long enough")).is_ok());
    }
}
