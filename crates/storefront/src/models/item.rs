//! Item and variation references.
//!
//! The shape mirrors the item search documents the host returns:
//! `{ "item": { "id": .. }, "variation": { "id": .. } }`, with either id
//! possibly missing.

use serde::{Deserialize, Serialize};

use ioshop_core::VariationId;

/// Reference to an item inside an item document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRef {
    #[serde(default)]
    pub id: Option<i32>,
}

/// Reference to a variation inside an item document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariationRef {
    #[serde(default)]
    pub id: Option<i32>,
}

/// Item/variation pair used to build storefront links.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemData {
    #[serde(default)]
    pub item: ItemRef,
    #[serde(default)]
    pub variation: VariationRef,
}

impl ItemData {
    /// Build item data from raw ids.
    #[must_use]
    pub const fn new(item_id: Option<i32>, variation_id: Option<i32>) -> Self {
        Self {
            item: ItemRef { id: item_id },
            variation: VariationRef { id: variation_id },
        }
    }
}

/// One search document of a variation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariationDocument {
    pub data: ItemData,
}

/// A variation as returned by the item contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variation {
    pub id: VariationId,
    /// Display name of the item.
    pub name: String,
    #[serde(default)]
    pub documents: Vec<VariationDocument>,
}

impl Variation {
    /// Data of the first document, if any.
    #[must_use]
    pub fn first_document(&self) -> Option<&ItemData> {
        self.documents.first().map(|doc| &doc.data)
    }
}
