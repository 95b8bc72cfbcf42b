use std::fmt;

use crate::models::{Category, CategoryKey, MediaKind};

/// Typed key of the query cache.
///
/// Search keywords are trimmed and lowercased: the catalog matches them
/// case-insensitively, so `Batman` and `batman ` share one entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    Category(Category),
    Search { kind: MediaKind, keyword: String },
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheKey::Category(category) => {
                write!(f, "{}:{}", category.kind().api_segment(), category.slug())
            }
            CacheKey::Search { kind, keyword } => {
                write!(f, "search:{}:{}", kind.api_segment(), keyword)
            }
        }
    }
}

impl From<&CategoryKey> for CacheKey {
    fn from(key: &CategoryKey) -> Self {
        match key {
            CategoryKey::Browse(category) => CacheKey::Category(*category),
            CategoryKey::Search { kind, keyword } => CacheKey::Search {
                kind: *kind,
                keyword: keyword.trim().to_lowercase(),
            },
        }
    }
}
