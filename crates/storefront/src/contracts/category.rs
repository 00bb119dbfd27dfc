use async_trait::async_trait;

use super::HostResult;
use crate::models::Category;

/// Category tree lookups.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Find the category served at `path` (without leading slash).
    async fn find_by_path(&self, path: &str) -> HostResult<Option<Category>>;
}
