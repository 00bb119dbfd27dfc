use ioshop_core::{ItemId, VariationId};

use crate::models::ShopUrl;

/// Builds storefront URLs for items and variations.
///
/// URL building needs no I/O, so this contract is synchronous and can be
/// called while assembling template data.
pub trait UrlBuilderRepository: Send + Sync {
    /// URL of the item page.
    fn build_item_url(&self, item_id: ItemId, lang: &str) -> ShopUrl;

    /// URL of a variation page, without its suffix.
    fn build_variation_url(&self, item_id: ItemId, variation_id: VariationId, lang: &str)
    -> ShopUrl;

    /// Suffix identifying the item (and optionally the variation) in the URL.
    fn suffix(&self, item_id: ItemId, variation_id: VariationId, with_variation_id: bool)
    -> String;
}
