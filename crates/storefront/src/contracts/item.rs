use async_trait::async_trait;

use ioshop_core::VariationId;

use super::HostResult;
use crate::models::Variation;

/// Item catalog lookups.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Fetch a variation with its search documents.
    async fn variation(&self, variation_id: VariationId) -> HostResult<Option<Variation>>;
}
