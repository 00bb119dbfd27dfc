//! Slug-based URL builder.

use std::collections::HashMap;

use ioshop_core::{ItemId, VariationId};

use super::catalog::Catalog;
use crate::contracts::UrlBuilderRepository;
use crate::models::ShopUrl;

/// Builds item URLs from catalog slugs.
///
/// - item: `/{slug}/a-{item_id}`
/// - variation: `/{slug}` plus suffix `_{item_id}_{variation_id}`
///   (or `_{item_id}` when the variation ID is left out)
///
/// Items without a slug drop the slug segment.
#[derive(Debug, Clone, Default)]
pub struct CatalogUrlBuilder {
    slugs: HashMap<ItemId, String>,
}

impl CatalogUrlBuilder {
    /// Create a builder that knows the catalog's item slugs.
    #[must_use]
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let slugs = catalog
            .items
            .iter()
            .filter_map(|item| {
                item.slug
                    .as_deref()
                    .map(|slug| slug.trim_matches('/'))
                    .filter(|slug| !slug.is_empty())
                    .map(|slug| (item.id, slug.to_string()))
            })
            .collect();

        Self { slugs }
    }

    fn slug_path(&self, item_id: ItemId) -> String {
        self.slugs
            .get(&item_id)
            .map_or_else(String::new, |slug| format!("/{slug}"))
    }
}

impl UrlBuilderRepository for CatalogUrlBuilder {
    fn build_item_url(&self, item_id: ItemId, lang: &str) -> ShopUrl {
        ShopUrl::new(format!("{}/a-{item_id}", self.slug_path(item_id)), lang)
    }

    fn build_variation_url(
        &self,
        item_id: ItemId,
        _variation_id: VariationId,
        lang: &str,
    ) -> ShopUrl {
        ShopUrl::new(self.slug_path(item_id), lang)
    }

    fn suffix(
        &self,
        item_id: ItemId,
        variation_id: VariationId,
        with_variation_id: bool,
    ) -> String {
        if with_variation_id {
            format!("_{item_id}_{variation_id}")
        } else {
            format!("_{item_id}")
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn builder() -> CatalogUrlBuilder {
        let catalog = Catalog::from_json(
            r#"{ "items": [
                { "id": 12, "name": "Linen Shirt", "slug": "linen-shirt", "variations": [40] },
                { "id": 13, "name": "Mystery Box" }
            ] }"#,
        )
        .unwrap();
        CatalogUrlBuilder::from_catalog(&catalog)
    }

    #[test]
    fn test_item_url() {
        let url = builder().build_item_url(ItemId::new(12), "en");
        assert_eq!(url.to_relative_url(false), "/linen-shirt/a-12");
    }

    #[test]
    fn test_item_url_without_slug() {
        let url = builder().build_item_url(ItemId::new(13), "en");
        assert_eq!(url.to_relative_url(false), "/a-13");
    }

    #[test]
    fn test_variation_url_with_suffix() {
        let builder = builder();
        let suffix = builder.suffix(ItemId::new(12), VariationId::new(40), true);
        let url = builder
            .build_variation_url(ItemId::new(12), VariationId::new(40), "de")
            .append(&suffix);
        assert_eq!(url.to_relative_url(true), "/de/linen-shirt_12_40");
    }

    #[test]
    fn test_suffix_without_variation_id() {
        assert_eq!(
            builder().suffix(ItemId::new(12), VariationId::new(40), false),
            "_12"
        );
    }
}
