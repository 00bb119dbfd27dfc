use async_trait::async_trait;

use ioshop_core::ContactId;

use super::HostResult;
use crate::models::{Order, PaginatedResult};

/// Order history.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// One page of the contact's orders, newest first. `page` is 1-based.
    async fn orders_for_contact(
        &self,
        contact_id: ContactId,
        page: u32,
        items_per_page: u32,
    ) -> HostResult<PaginatedResult<Order>>;

    /// The contact's most recent order.
    async fn latest_order_for_contact(&self, contact_id: ContactId) -> HostResult<Option<Order>>;
}
