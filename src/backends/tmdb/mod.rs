mod api;
mod retry;
mod types;


pub use api::TmdbApi;
pub use retry::RetryPolicy;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::backends::{CatalogClient, CatalogError};
use crate::config::Config;
use crate::models::{CategoryKey, CategoryPage};
use crate::services::{CacheKey, QueryCache};

/// TMDB catalog client with its own query cache.
#[derive(Debug)]
pub struct TmdbBackend {
    api: TmdbApi,
    cache: QueryCache,
}

impl TmdbBackend {
    pub fn new(api: TmdbApi, cache: QueryCache) -> Self {
        Self { api, cache }
    }

    pub fn from_config(config: &Config) -> Result<Self, CatalogError> {
        if config.catalog.api_key.is_empty() {
            warn!("No catalog API key configured; requests will be rejected");
        }
        let api = TmdbApi::new(&config.catalog, &config.network)?;
        let cache = QueryCache::new(config.network.cache_size, config.network.cache_ttl());
        info!(
            "TMDB client ready ({}, cache {} pages)",
            config.catalog.api_base_url, config.network.cache_size
        );
        Ok(Self::new(api, cache))
    }

    #[cfg(test)]
    pub(crate) fn cache(&self) -> &QueryCache {
        &self.cache
    }
}

#[async_trait]
impl CatalogClient for TmdbBackend {
    async fn fetch_category(&self, key: &CategoryKey) -> Result<CategoryPage, CatalogError> {
        let cache_key = CacheKey::from(key);
        if let Some(page) = self.cache.get(&cache_key).await {
            return Ok(page);
        }

        let page = self.api.fetch_page(key).await?;
        self.cache.insert(cache_key, page.clone()).await;
        Ok(page)
    }
}
