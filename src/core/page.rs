use super::carousel::CarouselView;
use crate::backends::CatalogError;

/// Completion flag of one independent fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    /// Not requested (e.g. no search keyword yet).
    Idle,
    Loading,
    Loaded(T),
    Failed(CatalogError),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Idle
    }
}

impl<T> LoadState<T> {
    pub fn from_result(result: Result<T, CatalogError>) -> Self {
        match result {
            Ok(value) => LoadState::Loaded(value),
            Err(err) => LoadState::Failed(err),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// Loaded or failed.
    pub fn is_settled(&self) -> bool {
        matches!(self, LoadState::Loaded(_) | LoadState::Failed(_))
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&CatalogError> {
        match self {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// One row of a page, in declaration order.
#[derive(Debug)]
pub enum Row<'a> {
    Carousel(&'a CarouselView),
    /// Category still loading, or failed: both show as "Loading...".
    Placeholder(String),
}
