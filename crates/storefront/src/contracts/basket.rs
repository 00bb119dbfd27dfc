use async_trait::async_trait;

use ioshop_core::VariationId;

use super::HostResult;
use crate::models::BasketItem;

/// Basket of the current visitor session.
#[async_trait]
pub trait BasketItemRepository: Send + Sync {
    /// All items in the basket.
    async fn all(&self) -> HostResult<Vec<BasketItem>>;

    /// Add a variation to the basket, merging with an existing line.
    async fn add(&self, variation_id: VariationId, quantity: u32) -> HostResult<BasketItem>;
}
