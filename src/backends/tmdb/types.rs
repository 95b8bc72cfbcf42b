use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::{CategoryPage, Item, ItemId};

/// Paged list response shared by the list and search endpoints. Extra
/// fields such as the `dates` window of `now_playing` are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbPagedResponse {
    pub page: u32,
    #[serde(default)]
    pub results: Vec<TmdbItem>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

/// A movie (`title`, `release_date`) or a show (`name`, `first_air_date`).
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbItem {
    pub id: u64,
    pub backdrop_path: Option<String>,
    pub poster_path: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    pub title: Option<String>,
    pub name: Option<String>,
    pub release_date: Option<String>,
    pub first_air_date: Option<String>,
}

/// Error body, e.g. `{"status_code": 7, "status_message": "Invalid API key"}`.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbStatusBody {
    pub status_code: Option<i32>,
    pub status_message: String,
}

impl TmdbStatusBody {
    pub fn describe(self) -> String {
        match self.status_code {
            Some(code) => format!("{} (TMDB code {})", self.status_message, code),
            None => self.status_message,
        }
    }
}

fn parse_date(raw: Option<&str>) -> Option<NaiveDate> {
    raw.filter(|s| !s.is_empty())
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
}

impl From<TmdbItem> for Item {
    fn from(raw: TmdbItem) -> Self {
        let release_date = parse_date(raw.release_date.as_deref())
            .or_else(|| parse_date(raw.first_air_date.as_deref()));
        Item {
            id: ItemId::new(raw.id),
            backdrop_path: raw.backdrop_path,
            poster_path: raw.poster_path,
            overview: raw.overview.unwrap_or_default(),
            display_name: raw.title.or(raw.name).unwrap_or_default(),
            release_date,
        }
    }
}

impl From<TmdbPagedResponse> for CategoryPage {
    fn from(response: TmdbPagedResponse) -> Self {
        CategoryPage {
            page: response.page,
            results: response.results.into_iter().map(Item::from).collect(),
            total_pages: response.total_pages,
            total_results: response.total_results,
        }
    }
}
