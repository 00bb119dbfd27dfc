//! Contact page route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde_json::{Map, Value};

use crate::filters;
use crate::models::Category;
use crate::state::AppState;

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub category: Option<Category>,
    /// Data object handed to the contact form; always empty.
    pub object: Map<String, Value>,
}

impl ContactTemplate {
    /// Contact page, optionally served as a category page.
    #[must_use]
    pub fn new(category: Option<Category>) -> Self {
        Self {
            category,
            object: Map::new(),
        }
    }
}

/// Show the contact page, or redirect to the linked category.
///
/// GET /contact
pub async fn show(State(state): State<AppState>) -> Response {
    if let Some(path) = &state.config().shop.contact_category {
        return Redirect::permanent(&format!("/c/{path}")).into_response();
    }

    ContactTemplate::new(None).into_response()
}
