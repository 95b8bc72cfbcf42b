//! Route and query state, and the selection derived from it.
//!
//! A selected item lives only in the location: `/movies/{id}` and
//! `/tv/{id}` on the landing pages, `?movie={id}` / `?tv={id}` on the search
//! page. Nothing here caches the derived selection.

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use std::fmt;
use url::Url;

use crate::models::{ItemId, MediaKind};
use crate::utils::AppError;

const KEYWORD_PARAM: &str = "keyword";
const SEARCH_PATH: &str = "/search";

/// Page a location maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Browse(MediaKind),
    Search { keyword: Option<String> },
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    path: String,
    query: Vec<(String, String)>,
}

impl Location {
    /// Parses `/tv/1399`, `search?keyword=batman&movie=268` and the like.
    pub fn parse(input: &str) -> Result<Self, AppError> {
        let base = Url::parse("http://localhost/")
            .map_err(|e| AppError::InvalidLocation(e.to_string()))?;
        let url = base
            .join(input.trim())
            .map_err(|e| AppError::InvalidLocation(format!("{}: {}", input, e)))?;

        let path = match url.path().trim_end_matches('/') {
            "" => "/".to_string(),
            trimmed => trimmed.to_string(),
        };
        let query = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        Ok(Self { path, query })
    }

    pub fn landing(kind: MediaKind) -> Self {
        Self {
            path: kind.landing_route().to_string(),
            query: Vec::new(),
        }
    }

    pub fn search(keyword: &str) -> Self {
        Self {
            path: SEARCH_PATH.to_string(),
            query: vec![(KEYWORD_PARAM.to_string(), keyword.to_string())],
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn segments(&self) -> Vec<&str> {
        self.path.split('/').filter(|s| !s.is_empty()).collect()
    }

    pub fn page(&self) -> Page {
        match self.segments().as_slice() {
            [] | ["movies"] | ["movies", _] => Page::Browse(MediaKind::Movie),
            ["tv"] | ["tv", _] => Page::Browse(MediaKind::Show),
            ["search"] => Page::Search {
                keyword: self.query_value(KEYWORD_PARAM).map(str::to_string),
            },
            _ => Page::Unknown,
        }
    }

    fn with_query(mut self, name: &str, value: String) -> Self {
        self.query.retain(|(k, _)| k != name);
        self.query.push((name.to_string(), value));
        self
    }

    fn without_query(mut self, name: &str) -> Self {
        self.query.retain(|(k, _)| k != name);
        self
    }

    fn route_selection(&self) -> Option<Selection> {
        match self.segments().as_slice() {
            [segment, id] => {
                let kind = [MediaKind::Movie, MediaKind::Show]
                    .into_iter()
                    .find(|k| k.route_segment() == *segment)?;
                Some(Selection {
                    kind,
                    id: id.parse().ok()?,
                })
            }
            _ => None,
        }
    }

    fn query_selection(&self) -> Option<Selection> {
        [MediaKind::Movie, MediaKind::Show]
            .into_iter()
            .find_map(|kind| {
                let id = self.query_value(kind.query_param())?.parse().ok()?;
                Some(Selection { kind, id })
            })
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        for (i, (k, v)) in self.query.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(
                f,
                "{}{}={}",
                sep,
                utf8_percent_encode(k, NON_ALPHANUMERIC),
                utf8_percent_encode(v, NON_ALPHANUMERIC)
            )?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub kind: MediaKind,
    pub id: ItemId,
}

/// Selection derived from a location. Recompute it whenever the location
/// changes instead of storing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    pub selection: Option<Selection>,
}

impl SelectionState {
    pub fn selected_id(&self) -> Option<ItemId> {
        self.selection.map(|s| s.id)
    }

    pub fn selected_kind(&self) -> Option<MediaKind> {
        self.selection.map(|s| s.kind)
    }

    pub fn is_open(&self) -> bool {
        self.selection.is_some()
    }
}

/// The route segment wins over a query parameter, and `movie` over `tv`.
/// Ids that are not numbers select nothing.
pub fn derive_selection(location: &Location) -> SelectionState {
    SelectionState {
        selection: location
            .route_selection()
            .or_else(|| location.query_selection()),
    }
}

/// Location that opens the overlay for `id` from `location`.
///
/// The search page keeps its keyword and carries the selection as a query
/// parameter; setting one kind clears the other. Every other page switches
/// to the detail route.
pub fn open_location(location: &Location, kind: MediaKind, id: ItemId) -> Location {
    match location.page() {
        Page::Search { .. } => {
            let other = match kind {
                MediaKind::Movie => MediaKind::Show,
                MediaKind::Show => MediaKind::Movie,
            };
            location
                .clone()
                .without_query(other.query_param())
                .with_query(kind.query_param(), id.to_string())
        }
        _ => Location {
            path: format!("/{}/{}", kind.route_segment(), id),
            query: Vec::new(),
        },
    }
}

/// Location with the overlay closed.
pub fn close_location(location: &Location) -> Location {
    if let Some(selection) = location.route_selection() {
        return Location::landing(selection.kind);
    }
    location
        .clone()
        .without_query(MediaKind::Movie.query_param())
        .without_query(MediaKind::Show.query_param())
}
