//! Authentication route handlers.
//!
//! Login, logout and registration against the host's contact and
//! authentication contracts. Failures redirect back to the form with an
//! `error` code that the page turns into a message.

use std::collections::HashMap;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use secrecy::SecretString;
use serde::Deserialize;

use ioshop_core::Email;

use crate::contracts::{Authenticator, HostError};
use crate::error::{Result, clear_sentry_user, set_sentry_user};
use crate::filters;
use crate::host::password::MIN_PASSWORD_LENGTH;
use crate::middleware::SessionContracts;
use crate::middleware::auth::is_safe_backlink;
use crate::models::{AddressData, ContactData};
use crate::routes::forms::{non_blank, prefixed_address};
use crate::state::AppState;

/// Where a login without (usable) backlink ends up.
const DEFAULT_LOGIN_TARGET: &str = "/account";

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub backlink: Option<String>,
}

/// Registration form data.
///
/// Optional billing and delivery addresses arrive as `billing_*` and
/// `delivery_*` fields.
#[derive(Deserialize)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(flatten)]
    pub address_fields: HashMap<String, String>,
}

// =============================================================================
// Query Types
// =============================================================================

/// Query parameters of the login and register pages.
#[derive(Debug, Deserialize)]
pub struct AuthQuery {
    pub error: Option<String>,
    pub backlink: Option<String>,
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub error: Option<&'static str>,
    pub backlink: String,
}

/// Register page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/register.html")]
pub struct RegisterTemplate {
    pub error: Option<&'static str>,
}

/// Message shown for an error code.
fn error_message(code: &str) -> &'static str {
    match code {
        "credentials" => "Invalid email or password.",
        "email" => "Please enter a valid email address.",
        "password_mismatch" => "Passwords do not match.",
        "password_too_short" => "Password must be at least 8 characters.",
        "email_taken" => "An account with this email already exists.",
        "address" => "Please complete the address fields.",
        _ => "Something went wrong. Please try again.",
    }
}

/// Login target for a submitted backlink.
fn login_target(backlink: Option<&str>) -> &str {
    backlink
        .filter(|link| is_safe_backlink(link))
        .unwrap_or(DEFAULT_LOGIN_TARGET)
}

fn login_error_redirect(code: &str, backlink: Option<&str>) -> Redirect {
    let url = match backlink.filter(|link| is_safe_backlink(link)) {
        Some(link) => format!(
            "/login?error={code}&backlink={}",
            urlencoding::encode(link)
        ),
        None => format!("/login?error={code}"),
    };
    Redirect::to(&url)
}

// =============================================================================
// Login Routes
// =============================================================================

/// Display the login page.
///
/// GET /login
pub async fn login_page(Query(query): Query<AuthQuery>) -> impl IntoResponse {
    LoginTemplate {
        error: query.error.as_deref().map(error_message),
        backlink: query
            .backlink
            .filter(|link| is_safe_backlink(link))
            .unwrap_or_default(),
    }
}

/// Handle login form submission.
///
/// POST /login
pub async fn login(contracts: SessionContracts, Form(form): Form<LoginForm>) -> Result<Response> {
    let backlink = non_blank(form.backlink.as_deref());

    let Ok(email) = Email::parse(&form.email) else {
        return Ok(login_error_redirect("email", backlink.as_deref()).into_response());
    };
    let password = SecretString::from(form.password);

    match contracts.auth.login(&email, &password).await {
        Ok(contact_id) => {
            set_sentry_user(&contact_id, Some(email.as_str()));
            Ok(Redirect::to(login_target(backlink.as_deref())).into_response())
        }
        Err(HostError::InvalidCredentials) => {
            tracing::warn!("Login failed: invalid credentials");
            Ok(login_error_redirect("credentials", backlink.as_deref()).into_response())
        }
        Err(err) => Err(err.into()),
    }
}

/// Log the contact out.
///
/// POST /logout
pub async fn logout(contracts: SessionContracts) -> Result<Redirect> {
    contracts.auth.logout().await?;
    clear_sentry_user();
    Ok(Redirect::to("/"))
}

// =============================================================================
// Registration Routes
// =============================================================================

/// Display the registration page.
///
/// GET /register
pub async fn register_page(Query(query): Query<AuthQuery>) -> impl IntoResponse {
    RegisterTemplate {
        error: query.error.as_deref().map(error_message),
    }
}

/// Handle registration form submission.
///
/// POST /register
///
/// Registers the contact, logs it in and stores the optional addresses.
pub async fn register(
    State(state): State<AppState>,
    contracts: SessionContracts,
    Form(form): Form<RegisterForm>,
) -> Result<Response> {
    if form.password != form.password_confirm {
        return Ok(Redirect::to("/register?error=password_mismatch").into_response());
    }
    if form.password.chars().count() < MIN_PASSWORD_LENGTH {
        return Ok(Redirect::to("/register?error=password_too_short").into_response());
    }
    let Ok(email) = Email::parse(&form.email) else {
        return Ok(Redirect::to("/register?error=email").into_response());
    };

    let contact_data = ContactData {
        email,
        password: SecretString::from(form.password),
        first_name: non_blank(form.first_name.as_deref()),
        last_name: non_blank(form.last_name.as_deref()),
    };
    let billing = prefixed_address(&form.address_fields, "billing");
    let delivery = prefixed_address(&form.address_fields, "delivery");
    if let Some(field) = [&billing, &delivery]
        .into_iter()
        .flatten()
        .find_map(AddressData::missing_field)
    {
        tracing::warn!(field, "Registration rejected: incomplete address");
        return Ok(Redirect::to("/register?error=address").into_response());
    }

    let customer = contracts.customer(state.host());
    match customer
        .register_customer(&contact_data, billing.as_ref(), delivery.as_ref())
        .await
    {
        Ok(contact) => {
            set_sentry_user(&contact.id, Some(contact.email.as_str()));
            Ok(Redirect::to(DEFAULT_LOGIN_TARGET).into_response())
        }
        Err(HostError::Conflict(_)) => {
            Ok(Redirect::to("/register?error=email_taken").into_response())
        }
        Err(HostError::Validation(msg)) => {
            tracing::warn!(reason = %msg, "Registration rejected");
            Ok(Redirect::to("/register?error=address").into_response())
        }
        Err(err) => Err(err.into()),
    }
}
