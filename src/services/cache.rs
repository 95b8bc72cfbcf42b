use lru::LruCache;
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::debug;

use super::cache_keys::CacheKey;
use crate::models::CategoryPage;

#[derive(Debug, Clone)]
struct CachedPage {
    page: CategoryPage,
    fetched_at: Instant,
}

/// In-memory page cache owned by one catalog client.
///
/// Entries expire after `ttl`; the least recently used entry is evicted once
/// `capacity` is reached. Nothing outlives the owning client.
#[derive(Debug)]
pub struct QueryCache {
    entries: RwLock<LruCache<CacheKey, CachedPage>>,
    ttl: Duration,
}

impl QueryCache {
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: RwLock::new(LruCache::new(capacity)),
            ttl,
        }
    }

    pub async fn get(&self, key: &CacheKey) -> Option<CategoryPage> {
        // LruCache::get updates recency, so even reads take the write lock
        let mut entries = self.entries.write().await;
        let expired = match entries.get(key) {
            Some(cached) if cached.fetched_at.elapsed() < self.ttl => {
                debug!("Cache hit for {}", key);
                return Some(cached.page.clone());
            }
            Some(_) => true,
            None => false,
        };
        if expired {
            debug!("Cache entry for {} expired", key);
            entries.pop(key);
        }
        None
    }

    pub async fn insert(&self, key: CacheKey, page: CategoryPage) {
        let mut entries = self.entries.write().await;
        debug!("Caching {}", key);
        entries.put(
            key,
            CachedPage {
                page,
                fetched_at: Instant::now(),
            },
        );
    }

    #[cfg(test)]
    pub(crate) async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}
