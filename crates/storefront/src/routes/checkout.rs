//! Checkout route handlers.
//!
//! `GET /checkout` runs the admission guard and either renders the checkout
//! or redirects. When the shop links checkout to a category, the route
//! permanently redirects to that category and the category route renders
//! the checkout instead.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{OriginalUri, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use ioshop_core::Email;

use crate::contracts::{BasketItemRepository, SessionStorageRepository, UserSession};
use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::middleware::auth::login_url;
use crate::middleware::{Locale, SessionContracts, ShopBuilder};
use crate::models::{BasketItem, Category, CategoryKind, session_keys};
use crate::routes::category;
use crate::services::{CheckoutDecision, CheckoutGuard, CheckoutRequest, UrlFilter};
use crate::state::AppState;

/// Basket line display data for templates.
#[derive(Clone)]
pub struct BasketLineView {
    pub name: String,
    pub url: String,
    pub quantity: u32,
}

/// Checkout page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout.html")]
pub struct CheckoutTemplate {
    pub category: Option<Category>,
    pub lines: Vec<BasketLineView>,
    pub guest_email: Option<String>,
    pub logged_in: bool,
}

/// Guest checkout form data.
#[derive(Debug, Deserialize)]
pub struct GuestForm {
    pub email: String,
}

/// Everything a checkout render needs from the request.
pub struct CheckoutContext<'a> {
    pub state: &'a AppState,
    pub contracts: &'a SessionContracts,
    pub locale: &'a Locale,
    pub shop_builder: bool,
    pub current_url: &'a str,
}

/// Show the checkout, or redirect to the linked category.
///
/// GET /checkout
#[instrument(skip_all, fields(uri = %uri))]
pub async fn show(
    State(state): State<AppState>,
    contracts: SessionContracts,
    locale: Locale,
    ShopBuilder(shop_builder): ShopBuilder,
    OriginalUri(uri): OriginalUri,
) -> Result<Response> {
    if let Some(path) = &state.config().shop.checkout_category {
        return Ok(Redirect::permanent(&format!("/c/{path}")).into_response());
    }

    let current_url = uri
        .path_and_query()
        .map_or_else(|| uri.path().to_string(), ToString::to_string);

    render(
        &CheckoutContext {
            state: &state,
            contracts: &contracts,
            locale: &locale,
            shop_builder,
            current_url: &current_url,
        },
        None,
    )
    .await
}

/// Run the admission guard and act on its decision.
///
/// In the shop builder without a category the synthetic checkout category
/// is looked up and rendered in place of the bare checkout.
///
/// # Errors
///
/// Propagates host contract errors. A missing synthetic category is
/// `AppError::NotFound`.
pub async fn render(ctx: &CheckoutContext<'_>, category: Option<Category>) -> Result<Response> {
    let guest_email = ctx
        .contracts
        .storage
        .get_session_value(session_keys::GUEST_EMAIL)
        .await?;
    let contact_id = ctx.contracts.user.current_contact_id().await?;
    let basket = ctx.contracts.basket.all().await?;

    let mut category = category;
    loop {
        let decision = CheckoutGuard::decide(&CheckoutRequest {
            guest_email: guest_email.as_deref(),
            authenticated: contact_id.is_authenticated(),
            basket_item_count: basket.len(),
            shop_builder: ctx.shop_builder,
            has_category: category.is_some(),
            current_url: ctx.current_url,
        });

        return match decision {
            CheckoutDecision::Render => {
                let lines = basket_lines(ctx, &basket).await?;
                Ok(CheckoutTemplate {
                    category,
                    lines,
                    guest_email: guest_email.filter(|email| !email.is_empty()),
                    logged_in: contact_id.is_authenticated(),
                }
                .into_response())
            }
            CheckoutDecision::ShowCategory(path) => {
                let found = category::find(ctx.state, path).await?;
                if found.kind == CategoryKind::Checkout {
                    category = Some(found);
                    continue;
                }
                Ok(category::render_page(found))
            }
            CheckoutDecision::RedirectToLogin { backlink } => {
                add_breadcrumb(
                    "checkout",
                    "Redirected to login",
                    Some(&[("backlink", backlink.as_str())]),
                );
                Ok(Redirect::to(&login_url(&backlink)).into_response())
            }
            CheckoutDecision::RedirectHome => {
                add_breadcrumb("checkout", "Redirected home with empty basket", None);
                Ok(Redirect::to("/").into_response())
            }
        };
    }
}

async fn basket_lines(
    ctx: &CheckoutContext<'_>,
    basket: &[BasketItem],
) -> Result<Vec<BasketLineView>> {
    let host = ctx.state.host();
    let filter = UrlFilter::new(
        host.url_builder.as_ref(),
        host.items.as_ref(),
        &ctx.locale.lang,
        &ctx.locale.default_lang,
    );

    let mut lines = Vec::with_capacity(basket.len());
    for item in basket {
        let variation = host.items.variation(item.variation_id).await?;
        let (name, url) = variation.map_or_else(
            || (format!("Variation {}", item.variation_id), String::new()),
            |variation| {
                let url = variation
                    .first_document()
                    .map(|data| filter.build_item_url(data, true))
                    .unwrap_or_default();
                (variation.name, url)
            },
        );
        lines.push(BasketLineView {
            name,
            url,
            quantity: item.quantity,
        });
    }
    Ok(lines)
}

/// Start a guest checkout.
///
/// POST /checkout/guest
///
/// Stores the guest email in the session so the checkout admits the visitor
/// without an account.
#[instrument(skip_all)]
pub async fn guest(contracts: SessionContracts, Form(form): Form<GuestForm>) -> Result<Redirect> {
    let email = Email::parse(&form.email)
        .map_err(|_| AppError::BadRequest("Please enter a valid email address.".to_string()))?;

    contracts
        .storage
        .set_session_value(session_keys::GUEST_EMAIL, email.as_str())
        .await?;

    tracing::info!("Guest checkout started");
    Ok(Redirect::to("/checkout"))
}
