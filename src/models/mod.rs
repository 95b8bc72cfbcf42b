mod identifiers;

pub use identifiers::ItemId;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// The two kinds of media the catalog serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Show,
}

impl MediaKind {
    /// Path segment used by the catalog API (`movie/popular`, `search/tv`).
    pub fn api_segment(self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Show => "tv",
        }
    }

    /// Path segment of the detail route (`/movies/{id}`, `/tv/{id}`).
    pub fn route_segment(self) -> &'static str {
        match self {
            MediaKind::Movie => "movies",
            MediaKind::Show => "tv",
        }
    }

    /// Query parameter carrying a selection on the search page.
    pub fn query_param(self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Show => "tv",
        }
    }

    /// Route of the landing page for this kind.
    pub fn landing_route(self) -> &'static str {
        match self {
            MediaKind::Movie => "/",
            MediaKind::Show => "/tv",
        }
    }

    pub fn plural_label(self) -> &'static str {
        match self {
            MediaKind::Movie => "Movies",
            MediaKind::Show => "TV Shows",
        }
    }

    /// Browse categories in declaration order. Overlay lookups honour this
    /// order when an id appears in more than one category.
    pub fn categories(self) -> &'static [Category] {
        match self {
            MediaKind::Movie => &MOVIE_CATEGORIES,
            MediaKind::Show => &SHOW_CATEGORIES,
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.api_segment())
    }
}

pub const MOVIE_CATEGORIES: [Category; 4] = [
    Category::NowPlaying,
    Category::PopularMovies,
    Category::TopRatedMovies,
    Category::Upcoming,
];

pub const SHOW_CATEGORIES: [Category; 4] = [
    Category::AiringToday,
    Category::OnTheAir,
    Category::PopularShows,
    Category::TopRatedShows,
];

/// Curated catalog lists shown on the landing pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    NowPlaying,
    PopularMovies,
    TopRatedMovies,
    Upcoming,
    AiringToday,
    OnTheAir,
    PopularShows,
    TopRatedShows,
}

impl Category {
    pub fn kind(self) -> MediaKind {
        match self {
            Category::NowPlaying
            | Category::PopularMovies
            | Category::TopRatedMovies
            | Category::Upcoming => MediaKind::Movie,
            Category::AiringToday
            | Category::OnTheAir
            | Category::PopularShows
            | Category::TopRatedShows => MediaKind::Show,
        }
    }

    /// Endpoint name below the media kind segment.
    pub fn slug(self) -> &'static str {
        match self {
            Category::NowPlaying => "now_playing",
            Category::PopularMovies | Category::PopularShows => "popular",
            Category::TopRatedMovies | Category::TopRatedShows => "top_rated",
            Category::Upcoming => "upcoming",
            Category::AiringToday => "airing_today",
            Category::OnTheAir => "on_the_air",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::NowPlaying => "Now Playing",
            Category::PopularMovies => "Popular Movies",
            Category::TopRatedMovies => "Top Rated Movies",
            Category::Upcoming => "Upcoming Movies",
            Category::AiringToday => "Airing Today",
            Category::OnTheAir => "On The Air",
            Category::PopularShows => "Popular",
            Category::TopRatedShows => "Top Rated",
        }
    }

    pub fn is_popular(self) -> bool {
        matches!(self, Category::PopularMovies | Category::PopularShows)
    }
}

/// Identifies one fetchable result set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CategoryKey {
    Browse(Category),
    Search { kind: MediaKind, keyword: String },
}

impl CategoryKey {
    pub fn search(kind: MediaKind, keyword: impl Into<String>) -> Self {
        CategoryKey::Search {
            kind,
            keyword: keyword.into(),
        }
    }

    pub fn kind(&self) -> MediaKind {
        match self {
            CategoryKey::Browse(category) => category.kind(),
            CategoryKey::Search { kind, .. } => *kind,
        }
    }

    /// Human-readable carousel title.
    pub fn label(&self) -> String {
        match self {
            CategoryKey::Browse(category) => category.label().to_string(),
            CategoryKey::Search { kind, keyword } => {
                format!("{} matching \"{}\"", kind.plural_label(), keyword)
            }
        }
    }
}

impl From<Category> for CategoryKey {
    fn from(category: Category) -> Self {
        CategoryKey::Browse(category)
    }
}

/// A movie or show as listed by the catalog. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub backdrop_path: Option<String>,
    pub poster_path: Option<String>,
    pub overview: String,
    /// Movie title or show name.
    pub display_name: String,
    pub release_date: Option<NaiveDate>,
}

impl Item {
    /// Cards and the overlay are drawn from the backdrop, so items without
    /// one are never shown.
    pub fn is_displayable(&self) -> bool {
        self.backdrop_path
            .as_deref()
            .is_some_and(|path| !path.is_empty())
    }
}

/// One page of results as returned by a catalog client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryPage {
    pub page: u32,
    pub results: Vec<Item>,
    pub total_pages: u32,
    pub total_results: u32,
}

/// A fetched category. Replaced wholesale on refetch, never edited in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryResultSet {
    pub key: CategoryKey,
    pub label: String,
    pub items: Vec<Item>,
    pub page: u32,
    pub total_pages: u32,
    pub total_results: u32,
}

impl CategoryResultSet {
    pub fn from_page(key: CategoryKey, page: CategoryPage) -> Self {
        let label = key.label();
        Self {
            key,
            label,
            items: page.results,
            page: page.page,
            total_pages: page.total_pages,
            total_results: page.total_results,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn kind(&self) -> MediaKind {
        self.key.kind()
    }

    pub fn find(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.find(id).is_some()
    }

    pub fn ids(&self) -> HashSet<ItemId> {
        self.items.iter().map(|item| item.id).collect()
    }

    /// Items that can be drawn, in catalog order.
    pub fn displayable_items(&self) -> Vec<Item> {
        self.items
            .iter()
            .filter(|item| item.is_displayable())
            .cloned()
            .collect()
    }

    pub fn displayable_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_displayable()).count()
    }

    /// A new set without the given ids. The original set is left untouched.
    pub fn excluding(&self, ids: &HashSet<ItemId>) -> Self {
        Self {
            key: self.key.clone(),
            label: self.label.clone(),
            items: self
                .items
                .iter()
                .filter(|item| !ids.contains(&item.id))
                .cloned()
                .collect(),
            page: self.page,
            total_pages: self.total_pages,
            total_results: self.total_results,
        }
    }
}
