//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

use crate::contracts::BasketItemRepository;
use crate::error::Result;
use crate::filters;
use crate::middleware::{OptionalContact, SessionContracts};

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub logged_in: bool,
    pub basket_lines: usize,
}

/// Display the home page.
///
/// GET /
pub async fn home(
    OptionalContact(contact_id): OptionalContact,
    contracts: SessionContracts,
) -> Result<impl IntoResponse> {
    Ok(HomeTemplate {
        logged_in: contact_id.is_some(),
        basket_lines: contracts.basket.all().await?.len(),
    })
}
