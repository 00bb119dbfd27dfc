//! Catalog commands.

use std::path::Path;

use ioshop_storefront::host::{Catalog, CatalogError};

/// Parse a catalog file and log a summary.
///
/// # Errors
///
/// Returns `CatalogError` if the file cannot be read or parsed.
pub fn check(path: &Path) -> Result<(), CatalogError> {
    let catalog = Catalog::load(path)?;

    let variations: usize = catalog.items.iter().map(|item| item.variations.len()).sum();
    let without_slug = catalog
        .items
        .iter()
        .filter(|item| item.slug.is_none())
        .count();

    tracing::info!(
        items = catalog.items.len(),
        variations,
        categories = catalog.categories.len(),
        orders = catalog.orders.len(),
        "Catalog is valid"
    );
    if without_slug > 0 {
        tracing::warn!(count = without_slug, "Items without slug get id-only URLs");
    }
    Ok(())
}
