//! Movie and TV landing pages.

use std::sync::Arc;
use tracing::{debug, info, warn};

use super::carousel::CarouselView;
use super::location::{Location, derive_selection};
use super::overlay::{OverlayController, OverlayMatch};
use super::page::{LoadState, Row};
use super::pagination::Direction;
use crate::backends::CatalogClient;
use crate::models::{Category, CategoryKey, CategoryResultSet, Item, MediaKind};

/// Load state of every category of one media kind, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseResults {
    pub kind: MediaKind,
    pub categories: Vec<(Category, LoadState<CategoryResultSet>)>,
}

impl BrowseResults {
    /// Every category requested, none settled yet.
    pub fn pending(kind: MediaKind) -> Self {
        Self {
            kind,
            categories: kind
                .categories()
                .iter()
                .map(|category| (*category, LoadState::Loading))
                .collect(),
        }
    }

    pub fn get(&self, category: Category) -> Option<&LoadState<CategoryResultSet>> {
        self.categories
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, state)| state)
    }

    pub fn loaded(&self, category: Category) -> Option<&CategoryResultSet> {
        self.get(category).and_then(LoadState::loaded)
    }

    /// True while any category is still in flight.
    pub fn is_loading(&self) -> bool {
        self.categories.iter().any(|(_, state)| state.is_loading())
    }

    pub fn set(&mut self, category: Category, state: LoadState<CategoryResultSet>) {
        if let Some(slot) = self.categories.iter_mut().find(|(c, _)| *c == category) {
            slot.1 = state;
        }
    }
}

/// Fetches the categories of a landing page.
#[derive(Debug, Clone)]
pub struct BrowseLoader {
    client: Arc<dyn CatalogClient>,
}

impl BrowseLoader {
    pub fn new(client: Arc<dyn CatalogClient>) -> Self {
        Self { client }
    }

    /// Fetches all categories of `kind` concurrently. A failed category is
    /// recorded as such and does not affect its siblings.
    pub async fn load(&self, kind: MediaKind) -> BrowseResults {
        info!("Loading {} categories", kind);
        let fetches = kind.categories().iter().map(|category| {
            let client = self.client.clone();
            let category = *category;
            async move {
                let result = client.fetch_result_set(category.into()).await;
                match &result {
                    Ok(set) => debug!("{}: {} items", category.label(), set.items.len()),
                    Err(err) => warn!("Failed to load {}: {}", category.label(), err),
                }
                (category, LoadState::from_result(result))
            }
        });

        BrowseResults {
            kind,
            categories: futures::future::join_all(fetches).await,
        }
    }
}

/// A landing page: hero banner, one carousel per category, and the overlay
/// for whatever the location selects.
#[derive(Debug, Clone)]
pub struct BrowsePage {
    location: Location,
    results: BrowseResults,
    loaded: Vec<CategoryResultSet>,
    carousels: Vec<CarouselView>,
}

impl BrowsePage {
    pub fn new(location: Location, results: BrowseResults, page_size: usize) -> Self {
        let loaded: Vec<CategoryResultSet> = results
            .categories
            .iter()
            .filter_map(|(_, state)| state.loaded().cloned())
            .collect();

        let now_playing = results.loaded(Category::NowPlaying).map(|set| set.ids());
        let carousels = loaded
            .iter()
            .map(|set| match (&set.key, &now_playing) {
                (CategoryKey::Browse(Category::Upcoming), Some(ids)) => {
                    CarouselView::new(&set.excluding(ids), page_size)
                }
                _ => CarouselView::new(set, page_size),
            })
            .collect();

        Self {
            location,
            results,
            loaded,
            carousels,
        }
    }

    pub fn kind(&self) -> MediaKind {
        self.results.kind
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn results(&self) -> &BrowseResults {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.results.is_loading()
    }

    /// First Popular item with a backdrop. `None` until Popular loads.
    pub fn banner(&self) -> Option<&Item> {
        self.loaded
            .iter()
            .find(|set| matches!(set.key, CategoryKey::Browse(c) if c.is_popular()))
            .and_then(|set| set.items.iter().find(|item| item.is_displayable()))
    }

    /// One row per category in declaration order.
    pub fn rows(&self) -> Vec<Row<'_>> {
        self.results
            .categories
            .iter()
            .map(|(category, state)| {
                let carousel = state.loaded().and_then(|_| {
                    self.carousels
                        .iter()
                        .find(|c| *c.key() == CategoryKey::Browse(*category))
                });
                match carousel {
                    Some(carousel) => Row::Carousel(carousel),
                    None => Row::Placeholder(category.label().to_string()),
                }
            })
            .collect()
    }

    pub fn carousels(&self) -> &[CarouselView] {
        &self.carousels
    }

    pub fn carousels_mut(&mut self) -> &mut [CarouselView] {
        &mut self.carousels
    }

    /// Slides every carousel `times` pages, completing each transition.
    pub fn advance_all(&mut self, direction: Direction, times: usize) {
        for carousel in &mut self.carousels {
            for _ in 0..times {
                carousel.navigate(direction);
                carousel.transition_complete();
            }
        }
    }

    pub fn overlay(&self) -> Option<OverlayMatch<'_>> {
        OverlayController::resolve_selection(&derive_selection(&self.location), &self.loaded)
    }
}
