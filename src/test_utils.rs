#![cfg(test)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::backends::{CatalogClient, CatalogError};
use crate::models::{Category, CategoryKey, CategoryPage, Item, ItemId, MediaKind};

/// Item with a backdrop, so it is displayable.
pub fn item(id: u64, name: &str) -> Item {
    Item {
        id: ItemId::new(id),
        backdrop_path: Some(format!("/backdrop-{id}.jpg")),
        poster_path: Some(format!("/poster-{id}.jpg")),
        overview: format!("Overview of {name}"),
        display_name: name.to_string(),
        release_date: None,
    }
}

pub fn item_without_backdrop(id: u64, name: &str) -> Item {
    Item {
        backdrop_path: None,
        ..item(id, name)
    }
}

pub fn items(ids: impl IntoIterator<Item = u64>) -> Vec<Item> {
    ids.into_iter()
        .map(|id| item(id, &format!("Item {id}")))
        .collect()
}

pub fn page_of(results: Vec<Item>) -> CategoryPage {
    CategoryPage {
        page: 1,
        total_pages: 1,
        total_results: results.len() as u32,
        results,
    }
}

/// In-memory catalog. Keys without a canned response return an empty page.
#[derive(Debug, Default)]
pub struct FakeCatalog {
    responses: HashMap<CategoryKey, Result<CategoryPage, CatalogError>>,
    requests: AtomicUsize,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: Category, results: Vec<Item>) -> Self {
        self.responses
            .insert(category.into(), Ok(page_of(results)));
        self
    }

    pub fn with_search(mut self, kind: MediaKind, keyword: &str, results: Vec<Item>) -> Self {
        self.responses
            .insert(CategoryKey::search(kind, keyword), Ok(page_of(results)));
        self
    }

    pub fn with_failure(mut self, key: CategoryKey, error: CatalogError) -> Self {
        self.responses.insert(key, Err(error));
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogClient for FakeCatalog {
    async fn fetch_category(&self, key: &CategoryKey) -> Result<CategoryPage, CatalogError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        self.responses
            .get(key)
            .cloned()
            .unwrap_or_else(|| Ok(CategoryPage::default()))
    }
}
