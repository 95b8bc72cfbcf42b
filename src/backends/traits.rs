use async_trait::async_trait;

use super::errors::CatalogError;
use crate::models::{CategoryKey, CategoryPage, CategoryResultSet};

/// Source of category pages. Pure request/response: implementations keep no
/// view state and are never written to by the pages that read them.
#[async_trait]
pub trait CatalogClient: Send + Sync + std::fmt::Debug {
    async fn fetch_category(&self, key: &CategoryKey) -> Result<CategoryPage, CatalogError>;

    /// Fetch and wrap the page as a labelled result set.
    async fn fetch_result_set(&self, key: CategoryKey) -> Result<CategoryResultSet, CatalogError> {
        let page = self.fetch_category(&key).await?;
        Ok(CategoryResultSet::from_page(key, page))
    }
}
