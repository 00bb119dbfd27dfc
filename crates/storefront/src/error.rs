//! Unified error handling with Sentry integration.
//!
//! Route handlers return `Result<T, AppError>`. Host contract failures convert
//! via `From<HostError>`; server-side failures are captured to Sentry before
//! the response is built.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::contracts::HostError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// A host contract call failed.
    #[error("Host error: {0}")]
    Host(#[from] HostError),

    /// Session store operation failed.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Whether this error is a server fault worth reporting.
    const fn is_server_error(&self) -> bool {
        match self {
            Self::Host(err) => matches!(err, HostError::Session(_) | HostError::Unavailable(_)),
            Self::Session(_) | Self::Internal(_) => true,
            Self::NotFound(_) | Self::BadRequest(_) => false,
        }
    }

    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Host(err) => match err {
                HostError::NotFound { .. } => StatusCode::NOT_FOUND,
                HostError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
                HostError::Conflict(_) => StatusCode::CONFLICT,
                HostError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                HostError::Session(_) | HostError::Unavailable(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            Self::Session(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = self.status();

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Host(HostError::NotFound { entity, .. }) => format!("{entity} not found"),
            Self::Host(HostError::Validation(msg) | HostError::Conflict(msg)) => msg.clone(),
            Self::Host(HostError::InvalidCredentials) => "Invalid credentials".to_string(),
            _ if status.is_server_error() => "Internal server error".to_string(),
            _ => self.to_string(),
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Set the Sentry user context from a contact id.
///
/// Call this after a successful login to associate errors with the customer.
pub fn set_sentry_user(contact_id: &impl ToString, email: Option<&str>) {
    sentry::configure_scope(|scope| {
        scope.set_user(Some(sentry::User {
            id: Some(contact_id.to_string()),
            email: email.map(String::from),
            ..Default::default()
        }));
    });
}

/// Clear the Sentry user context.
pub fn clear_sentry_user() {
    sentry::configure_scope(|scope| {
        scope.set_user(None);
    });
}

/// Add a breadcrumb for customer actions.
///
/// ```rust,ignore
/// add_breadcrumb("checkout", "Redirected to login", Some(&[("backlink", "/checkout")]));
/// ```
pub fn add_breadcrumb(category: &str, message: &str, data: Option<&[(&str, &str)]>) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    if let Some(pairs) = data {
        for (key, value) in pairs {
            breadcrumb.data.insert(
                (*key).to_string(),
                serde_json::Value::String((*value).to_string()),
            );
        }
    }

    sentry::add_breadcrumb(breadcrumb);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("category shop/checkout".to_string());
        assert_eq!(err.to_string(), "Not found: category shop/checkout");

        let err = AppError::Host(HostError::InvalidCredentials);
        assert_eq!(err.to_string(), "Host error: invalid credentials");
    }

    #[test]
    fn test_host_error_status_codes() {
        assert_eq!(
            get_status(HostError::NotFound { entity: "address", id: 4 }.into()),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(HostError::Validation("town is required".to_string()).into()),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            get_status(HostError::Conflict("email taken".to_string()).into()),
            StatusCode::CONFLICT
        );
        assert_eq!(
            get_status(HostError::InvalidCredentials.into()),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            get_status(HostError::Unavailable("down".to_string()).into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            get_status(AppError::NotFound("test".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::BadRequest("test".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Internal("test".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
