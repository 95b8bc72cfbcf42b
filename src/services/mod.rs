pub mod cache;
pub mod cache_keys;

pub use cache::QueryCache;
pub use cache_keys::CacheKey;
