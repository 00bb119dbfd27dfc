//! JSON seed data for the development host.
//!
//! ```json
//! {
//!   "items": [
//!     { "id": 12, "name": "Linen Shirt", "slug": "linen-shirt", "variations": [40, 41] }
//!   ],
//!   "categories": [
//!     { "id": 3, "name": "Checkout", "path": "checkout", "kind": "checkout" }
//!   ],
//!   "orders": [
//!     {
//!       "id": 1001, "contact_id": 1, "created_at": "2026-01-05T10:00:00Z",
//!       "total": { "amount": "49.90", "currency_code": "EUR" }, "status": "paid"
//!     }
//!   ]
//! }
//! ```
//!
//! Orders are placed outside the storefront. Seeded orders belong to the
//! contact that gets the matching ID, which is assigned in registration
//! order starting at 1.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use ioshop_core::{ItemId, VariationId};

use crate::models::{Category, ItemData, Order, Variation, VariationDocument};

/// Errors loading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// An item with its variations.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogItem {
    pub id: ItemId,
    pub name: String,
    /// URL slug; items without one get id-only URLs.
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub variations: Vec<VariationId>,
}

impl CatalogItem {
    /// Variation records with one search document each.
    #[must_use]
    pub fn to_variations(&self) -> Vec<Variation> {
        self.variations
            .iter()
            .map(|&variation_id| Variation {
                id: variation_id,
                name: self.name.clone(),
                documents: vec![VariationDocument {
                    data: ItemData::new(Some(self.id.as_i32()), Some(variation_id.as_i32())),
                }],
            })
            .collect()
    }
}

/// Items, categories and order history known to the development host.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub items: Vec<CatalogItem>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl Catalog {
    /// Parse a catalog from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Json` if the text is not a valid catalog.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a catalog file.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
