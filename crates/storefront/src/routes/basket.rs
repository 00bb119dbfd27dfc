//! Basket route handlers.
//!
//! Basket storage belongs to the host; these handlers only feed it so the
//! checkout can be reached. Responses are HTMX fragments.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    response::{AppendHeaders, IntoResponse},
};
use serde::Deserialize;
use tracing::instrument;

use ioshop_core::VariationId;

use crate::contracts::BasketItemRepository;
use crate::error::Result;
use crate::middleware::SessionContracts;
use crate::models::BasketItem;

/// Add-to-basket form data.
#[derive(Debug, Deserialize)]
pub struct AddToBasketForm {
    pub variation_id: i32,
    pub quantity: Option<u32>,
}

/// Basket count badge fragment.
#[derive(Template, WebTemplate)]
#[template(path = "partials/basket_count.html")]
pub struct BasketCountTemplate {
    pub count: u32,
}

fn total_quantity(items: &[BasketItem]) -> u32 {
    items
        .iter()
        .fold(0, |total, item| total.saturating_add(item.quantity))
}

/// Add a variation to the basket.
///
/// POST /basket/items
#[instrument(skip(contracts))]
pub async fn add(
    contracts: SessionContracts,
    Form(form): Form<AddToBasketForm>,
) -> Result<impl IntoResponse> {
    let variation_id = VariationId::new(form.variation_id);
    contracts
        .basket
        .add(variation_id, form.quantity.unwrap_or(1))
        .await?;

    let count = total_quantity(&contracts.basket.all().await?);
    tracing::debug!(variation_id = %variation_id, count, "Added to basket");

    Ok((
        AppendHeaders([("HX-Trigger", "basket-updated")]),
        BasketCountTemplate { count },
    ))
}

/// Basket count badge.
///
/// GET /basket/count
pub async fn count(contracts: SessionContracts) -> Result<impl IntoResponse> {
    let count = total_quantity(&contracts.basket.all().await?);
    Ok(BasketCountTemplate { count })
}

#[cfg(test)]
mod tests {
    use ioshop_core::BasketItemId;

    use super::*;

    #[test]
    fn test_total_quantity_sums_lines() {
        let items = [
            BasketItem {
                id: BasketItemId::new(1),
                variation_id: VariationId::new(40),
                quantity: 2,
            },
            BasketItem {
                id: BasketItemId::new(2),
                variation_id: VariationId::new(41),
                quantity: 3,
            },
        ];
        assert_eq!(total_quantity(&items), 5);
        assert_eq!(total_quantity(&[]), 0);
    }
}
