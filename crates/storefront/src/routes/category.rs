//! Category route handlers.
//!
//! `GET /c/{path}` serves a category page. Categories linked to the
//! checkout or contact route render those pages with the category as
//! context.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{OriginalUri, Path, State},
    response::{IntoResponse, Response},
};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::{Locale, SessionContracts, ShopBuilder};
use crate::models::{Category, CategoryKind};
use crate::routes::checkout::{self, CheckoutContext};
use crate::routes::contact::ContactTemplate;
use crate::state::AppState;

/// Content category page template.
#[derive(Template, WebTemplate)]
#[template(path = "category.html")]
pub struct CategoryTemplate {
    pub category: Category,
}

/// Look up a category by path.
///
/// # Errors
///
/// Returns `AppError::NotFound` for unknown paths and propagates host
/// contract errors.
pub async fn find(state: &AppState, path: &str) -> Result<Category> {
    state
        .host()
        .categories
        .find_by_path(path)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("category {path}")))
}

/// Render a contact or content category.
#[must_use]
pub fn render_page(category: Category) -> Response {
    match category.kind {
        CategoryKind::Contact => ContactTemplate::new(Some(category)).into_response(),
        CategoryKind::Checkout | CategoryKind::Content => {
            CategoryTemplate { category }.into_response()
        }
    }
}

/// Show a category page.
///
/// GET /c/{path}
#[instrument(skip(state, contracts, locale, uri))]
pub async fn show(
    State(state): State<AppState>,
    contracts: SessionContracts,
    locale: Locale,
    ShopBuilder(shop_builder): ShopBuilder,
    OriginalUri(uri): OriginalUri,
    Path(path): Path<String>,
) -> Result<Response> {
    let category = find(&state, &path).await?;

    if category.kind != CategoryKind::Checkout {
        return Ok(render_page(category));
    }

    let current_url = uri
        .path_and_query()
        .map_or_else(|| uri.path().to_string(), ToString::to_string);

    checkout::render(
        &CheckoutContext {
            state: &state,
            contracts: &contracts,
            locale: &locale,
            shop_builder,
            current_url: &current_url,
        },
        Some(category),
    )
    .await
}
