//! Contact authentication extractors.
//!
//! The logged-in contact is read through the [`UserSession`] contract; a
//! contact ID `<= 0` means nobody is logged in.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use ioshop_core::ContactId;

use crate::contracts::UserSession;
use crate::host::SessionUser;

/// Build the login URL that returns to `backlink` afterwards.
#[must_use]
pub fn login_url(backlink: &str) -> String {
    format!("/login?backlink={}", urlencoding::encode(backlink))
}

/// Whether a backlink may be followed after login.
///
/// Only same-site relative paths qualify; `//host` and absolute URLs do not.
#[must_use]
pub fn is_safe_backlink(backlink: &str) -> bool {
    backlink.starts_with('/') && !backlink.starts_with("//") && !backlink.contains('\\')
}

/// Extractor that requires a logged-in contact.
///
/// Anonymous visitors are redirected to the login page with the current
/// URL as backlink.
///
/// ```rust,ignore
/// async fn account(RequireContact(contact_id): RequireContact) -> String {
///     format!("Contact {contact_id}")
/// }
/// ```
pub struct RequireContact(pub ContactId);

/// Rejection for [`RequireContact`].
pub enum AuthRejection {
    /// Nobody is logged in.
    RedirectToLogin(String),
    /// The session could not be read.
    SessionUnavailable,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin(backlink) => Redirect::to(&login_url(&backlink)).into_response(),
            Self::SessionUnavailable => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}

async fn current_contact_id(parts: &Parts) -> Option<ContactId> {
    let session = parts.extensions.get::<Session>()?.clone();
    match SessionUser::new(session).current_contact_id().await {
        Ok(contact_id) => Some(contact_id),
        Err(err) => {
            tracing::warn!(error = %err, "Failed to read contact from session");
            None
        }
    }
}

impl<S> FromRequestParts<S> for RequireContact
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let contact_id = current_contact_id(parts)
            .await
            .ok_or(AuthRejection::SessionUnavailable)?;

        if !contact_id.is_authenticated() {
            let backlink = parts
                .uri
                .path_and_query()
                .map_or_else(|| parts.uri.path().to_string(), ToString::to_string);
            return Err(AuthRejection::RedirectToLogin(backlink));
        }

        Ok(Self(contact_id))
    }
}

/// Extractor that optionally gets the logged-in contact.
///
/// Unlike [`RequireContact`], this never rejects the request.
pub struct OptionalContact(pub Option<ContactId>);

impl<S> FromRequestParts<S> for OptionalContact
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let contact_id = current_contact_id(parts)
            .await
            .filter(|id| id.is_authenticated());
        Ok(Self(contact_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_url_encodes_backlink() {
        assert_eq!(
            login_url("/checkout?step=2"),
            "/login?backlink=%2Fcheckout%3Fstep%3D2"
        );
    }

    #[test]
    fn test_safe_backlinks() {
        assert!(is_safe_backlink("/checkout"));
        assert!(is_safe_backlink("/account/orders?page=2"));
        assert!(!is_safe_backlink("//evil.test/checkout"));
        assert!(!is_safe_backlink("https://evil.test"));
        assert!(!is_safe_backlink("/\\evil.test"));
        assert!(!is_safe_backlink(""));
    }
}
