//! Keyword search over movies and shows.

use std::sync::Arc;
use tracing::{debug, info, warn};

use super::carousel::CarouselView;
use super::location::{Location, Page, derive_selection};
use super::overlay::{OverlayController, OverlayMatch};
use super::page::{LoadState, Row};
use crate::backends::{CatalogClient, CatalogError};
use crate::models::{CategoryKey, CategoryResultSet, MediaKind};

/// Per-kind search results as fetched. Carousels drop imageless items;
/// the overlay still resolves against everything the catalog returned.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchResults {
    pub keyword: Option<String>,
    pub movies: LoadState<CategoryResultSet>,
    pub shows: LoadState<CategoryResultSet>,
}

impl SearchResults {
    /// Nothing requested.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Both fetches issued for `keyword`, neither settled.
    pub fn pending(keyword: &str) -> Self {
        Self {
            keyword: Some(keyword.to_string()),
            movies: LoadState::Loading,
            shows: LoadState::Loading,
        }
    }

    pub fn slot(&self, kind: MediaKind) -> &LoadState<CategoryResultSet> {
        match kind {
            MediaKind::Movie => &self.movies,
            MediaKind::Show => &self.shows,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.movies.is_loading() || self.shows.is_loading()
    }

    /// Loaded, and nothing in it can be drawn.
    pub fn loaded_without_results(&self, kind: MediaKind) -> bool {
        self.slot(kind)
            .loaded()
            .is_some_and(|set| set.displayable_count() == 0)
    }

    /// Displayable items of `kind`; 0 until that search loads.
    pub fn filtered_count(&self, kind: MediaKind) -> usize {
        self.slot(kind)
            .loaded()
            .map_or(0, CategoryResultSet::displayable_count)
    }
}

fn normalize_keyword(keyword: Option<&str>) -> Option<&str> {
    keyword.map(str::trim).filter(|k| !k.is_empty())
}

/// Runs the movie and show searches for a keyword side by side.
#[derive(Debug, Clone)]
pub struct SearchAggregator {
    client: Arc<dyn CatalogClient>,
}

impl SearchAggregator {
    pub fn new(client: Arc<dyn CatalogClient>) -> Self {
        Self { client }
    }

    /// Results as they stand right after the fetches are issued.
    pub fn begin(keyword: Option<&str>) -> SearchResults {
        match normalize_keyword(keyword) {
            Some(keyword) => SearchResults::pending(keyword),
            None => SearchResults::idle(),
        }
    }

    /// Searches both kinds. An empty or blank keyword issues no request.
    /// Each kind settles on its own; one failing leaves the other intact.
    pub async fn run(&self, keyword: Option<&str>) -> SearchResults {
        let Some(keyword) = normalize_keyword(keyword) else {
            debug!("No search keyword, skipping fetches");
            return SearchResults::idle();
        };

        info!("Searching for \"{}\"", keyword);
        let (movies, shows) = futures::join!(
            self.search_kind(MediaKind::Movie, keyword),
            self.search_kind(MediaKind::Show, keyword),
        );

        let results = SearchResults {
            keyword: Some(keyword.to_string()),
            movies: LoadState::from_result(movies),
            shows: LoadState::from_result(shows),
        };
        info!(
            "\"{}\": {} movies, {} shows",
            keyword,
            results.filtered_count(MediaKind::Movie),
            results.filtered_count(MediaKind::Show)
        );
        results
    }

    async fn search_kind(
        &self,
        kind: MediaKind,
        keyword: &str,
    ) -> Result<CategoryResultSet, CatalogError> {
        let key = CategoryKey::search(kind, keyword);
        match self.client.fetch_result_set(key).await {
            Ok(set) => {
                debug!(
                    "{} search: {} of {} results displayable",
                    kind,
                    set.displayable_count(),
                    set.items.len()
                );
                Ok(set)
            }
            Err(err) => {
                warn!("{} search for \"{}\" failed: {}", kind, keyword, err);
                Err(err)
            }
        }
    }
}

/// What the search page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// No keyword: neither a loader nor a no-results message.
    Idle,
    Loading,
    /// Both kinds loaded and nothing displayable in either.
    NoResults,
    Results,
}

/// The search page: one carousel per kind that has something to show.
#[derive(Debug, Clone)]
pub struct SearchPage {
    location: Location,
    results: SearchResults,
    loaded: Vec<CategoryResultSet>,
    carousels: Vec<CarouselView>,
}

impl SearchPage {
    pub fn new(location: Location, results: SearchResults, page_size: usize) -> Self {
        let loaded: Vec<CategoryResultSet> = [MediaKind::Movie, MediaKind::Show]
            .into_iter()
            .filter_map(|kind| results.slot(kind).loaded().cloned())
            .collect();
        let carousels = loaded
            .iter()
            .filter(|set| set.displayable_count() > 0)
            .map(|set| CarouselView::new(set, page_size))
            .collect();

        Self {
            location,
            results,
            loaded,
            carousels,
        }
    }

    pub fn keyword_of(location: &Location) -> Option<String> {
        match location.page() {
            Page::Search { keyword } => keyword,
            _ => None,
        }
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn keyword(&self) -> Option<&str> {
        self.results.keyword.as_deref()
    }

    pub fn results(&self) -> &SearchResults {
        &self.results
    }

    pub fn status(&self) -> SearchStatus {
        if self.results.keyword.is_none() {
            SearchStatus::Idle
        } else if self.results.is_loading() {
            SearchStatus::Loading
        } else if self.results.loaded_without_results(MediaKind::Movie)
            && self.results.loaded_without_results(MediaKind::Show)
        {
            SearchStatus::NoResults
        } else {
            SearchStatus::Results
        }
    }

    /// Carousels and placeholders for failed kinds, movies first.
    pub fn rows(&self) -> Vec<Row<'_>> {
        if self.status() != SearchStatus::Results {
            return Vec::new();
        }
        let keyword = self.keyword().unwrap_or_default();
        [MediaKind::Movie, MediaKind::Show]
            .into_iter()
            .filter_map(|kind| match self.results.slot(kind) {
                LoadState::Loaded(_) => self
                    .carousels
                    .iter()
                    .find(|c| c.kind() == kind)
                    .map(Row::Carousel),
                LoadState::Failed(_) => Some(Row::Placeholder(
                    CategoryKey::search(kind, keyword).label(),
                )),
                LoadState::Idle | LoadState::Loading => None,
            })
            .collect()
    }

    pub fn carousels(&self) -> &[CarouselView] {
        &self.carousels
    }

    pub fn carousels_mut(&mut self) -> &mut [CarouselView] {
        &mut self.carousels
    }

    pub fn overlay(&self) -> Option<OverlayMatch<'_>> {
        OverlayController::resolve_selection(&derive_selection(&self.location), &self.loaded)
    }
}
