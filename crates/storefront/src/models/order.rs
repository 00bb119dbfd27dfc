//! Order history types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ioshop_core::{ContactId, OrderId, Price};

/// An order placed by a contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub contact_id: ContactId,
    pub created_at: DateTime<Utc>,
    pub total: Price,
    pub status: String,
}

/// One page of a paginated listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatedResult<T> {
    /// 1-based page number.
    pub page: u32,
    pub items_per_page: u32,
    pub total_count: u64,
    pub entries: Vec<T>,
}

impl<T> PaginatedResult<T> {
    /// Whether no page follows this one.
    #[must_use]
    pub fn is_last_page(&self) -> bool {
        u64::from(self.page) * u64::from(self.items_per_page) >= self.total_count
    }

    /// Number of pages (at least one).
    #[must_use]
    pub fn last_page(&self) -> u64 {
        if self.items_per_page == 0 {
            return 1;
        }
        self.total_count
            .div_ceil(u64::from(self.items_per_page))
            .max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(page: u32, items_per_page: u32, total_count: u64) -> PaginatedResult<()> {
        PaginatedResult {
            page,
            items_per_page,
            total_count,
            entries: Vec::new(),
        }
    }

    #[test]
    fn test_last_page_detection() {
        assert!(!page(1, 10, 25).is_last_page());
        assert!(page(3, 10, 25).is_last_page());
        assert!(page(1, 10, 0).is_last_page());
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page(1, 10, 25).last_page(), 3);
        assert_eq!(page(1, 10, 0).last_page(), 1);
        assert_eq!(page(1, 0, 5).last_page(), 1);
    }
}
