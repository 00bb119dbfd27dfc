//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::StorefrontConfig;
use crate::contracts::{
    CategoryRepository, ContactAddressRepository, ContactRepository, ItemRepository,
    OrderRepository, UrlBuilderRepository,
};
use crate::host::{Catalog, CatalogUrlBuilder, MemoryHost};

/// Process-wide host contracts.
///
/// Session-bound contracts (basket, session values, identity) are built per
/// request by [`crate::middleware::SessionContracts`].
#[derive(Clone)]
pub struct HostServices {
    pub contacts: Arc<dyn ContactRepository>,
    pub addresses: Arc<dyn ContactAddressRepository>,
    pub orders: Arc<dyn OrderRepository>,
    pub items: Arc<dyn ItemRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub url_builder: Arc<dyn UrlBuilderRepository>,
}

impl HostServices {
    /// Development host seeded from a catalog.
    #[must_use]
    pub fn development(catalog: &Catalog) -> Self {
        let host = Arc::new(MemoryHost::with_catalog(catalog));

        Self {
            contacts: host.clone(),
            addresses: host.clone(),
            orders: host.clone(),
            items: host.clone(),
            categories: host,
            url_builder: Arc::new(CatalogUrlBuilder::from_catalog(catalog)),
        }
    }
}

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    pool: PgPool,
    host: HostServices,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: StorefrontConfig, pool: PgPool, host: HostServices) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, pool, host }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get the host contracts.
    #[must_use]
    pub fn host(&self) -> &HostServices {
        &self.inner.host
    }
}
