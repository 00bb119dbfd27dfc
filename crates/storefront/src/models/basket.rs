//! Basket line items.

use serde::{Deserialize, Serialize};

use ioshop_core::{BasketItemId, VariationId};

/// A line item in the visitor's basket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasketItem {
    pub id: BasketItemId,
    pub variation_id: VariationId,
    pub quantity: u32,
}
