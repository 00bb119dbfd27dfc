//! Storefront links for items and variations.

use ioshop_core::{ItemId, VariationId};

use crate::contracts::{HostResult, ItemRepository, UrlBuilderRepository};
use crate::models::ItemData;

/// Builds relative item and variation links for templates.
///
/// Links carry a language segment only when the active language differs
/// from the shop's default language.
pub struct UrlFilter<'a> {
    url_builder: &'a dyn UrlBuilderRepository,
    items: &'a dyn ItemRepository,
    lang: &'a str,
    default_lang: &'a str,
}

impl<'a> UrlFilter<'a> {
    /// Create a filter for the active language.
    #[must_use]
    pub const fn new(
        url_builder: &'a dyn UrlBuilderRepository,
        items: &'a dyn ItemRepository,
        lang: &'a str,
        default_lang: &'a str,
    ) -> Self {
        Self {
            url_builder,
            items,
            lang,
            default_lang,
        }
    }

    fn include_language(&self) -> bool {
        self.lang != self.default_lang
    }

    /// Link to an item, or to one of its variations.
    ///
    /// Returns an empty string when the item ID is missing or not positive.
    /// A missing or non-positive variation ID links to the item page.
    #[must_use]
    pub fn build_item_url(&self, item_data: &ItemData, with_variation_id: bool) -> String {
        let item_id = match item_data.item.id {
            Some(id) if id > 0 => ItemId::new(id),
            _ => return String::new(),
        };

        match item_data.variation.id {
            Some(id) if id > 0 => {
                let variation_id = VariationId::new(id);
                let suffix = self
                    .url_builder
                    .suffix(item_id, variation_id, with_variation_id);

                self.url_builder
                    .build_variation_url(item_id, variation_id, self.lang)
                    .append(&suffix)
                    .to_relative_url(self.include_language())
            }
            _ => self
                .url_builder
                .build_item_url(item_id, self.lang)
                .to_relative_url(self.include_language()),
        }
    }

    /// Link to a variation looked up by ID.
    ///
    /// Uses the variation's first search document. Unknown variations and
    /// variations without documents yield an empty string.
    ///
    /// # Errors
    ///
    /// Propagates errors from the item contract.
    #[deprecated(note = "build links from item data with `build_item_url`")]
    pub async fn build_variation_url(&self, variation_id: VariationId) -> HostResult<String> {
        let variation = self.items.variation(variation_id).await?;

        Ok(variation
            .as_ref()
            .and_then(|variation| variation.first_document())
            .map(|data| self.build_item_url(data, true))
            .unwrap_or_default())
    }
}
