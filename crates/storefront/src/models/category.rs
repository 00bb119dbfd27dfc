//! Storefront categories.

use serde::{Deserialize, Serialize};

use ioshop_core::CategoryId;

/// What a category page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    /// Hosts the checkout page.
    Checkout,
    /// Hosts the contact page.
    Contact,
    /// Plain content page.
    #[default]
    Content,
}

/// A category as returned by the category contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// URL path below `/c/`, without leading slash.
    pub path: String,
    #[serde(default)]
    pub kind: CategoryKind,
}

impl Category {
    /// Relative URL of the category page.
    #[must_use]
    pub fn url(&self) -> String {
        format!("/c/{}", self.path.trim_matches('/'))
    }
}
