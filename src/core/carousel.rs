use tracing::debug;

use super::location::{Location, open_location};
use super::overlay::VisualKey;
use super::pagination::{Direction, PaginationController, PaginationState};
use crate::models::{CategoryKey, CategoryResultSet, Item, ItemId, MediaKind};

/// A card in the visible row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselCard<'a> {
    pub item: &'a Item,
    pub visual_key: VisualKey,
}

/// One titled row of cards over a category.
///
/// Owns its pagination exclusively; only displayable items reach the
/// controller, so page math never counts an imageless item.
#[derive(Debug, Clone)]
pub struct CarouselView {
    key: CategoryKey,
    title: String,
    pagination: PaginationController,
}

impl CarouselView {
    pub fn new(result_set: &CategoryResultSet, page_size: usize) -> Self {
        Self {
            key: result_set.key.clone(),
            title: result_set.label.clone(),
            pagination: PaginationController::new(result_set.displayable_items(), page_size),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn key(&self) -> &CategoryKey {
        &self.key
    }

    pub fn kind(&self) -> MediaKind {
        self.key.kind()
    }

    /// Displayable items across all pages.
    pub fn item_count(&self) -> usize {
        self.pagination.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pagination.is_empty()
    }

    pub fn state(&self) -> PaginationState {
        self.pagination.state()
    }

    /// Changes whenever the row slides; key the row widget on it.
    pub fn render_key(&self) -> u64 {
        self.pagination.state().transition_token
    }

    /// 1-based current page and page count.
    pub fn page_indicator(&self) -> (usize, usize) {
        (
            self.pagination.state().offset + 1,
            self.pagination.page_count().max(1),
        )
    }

    pub fn is_transitioning(&self) -> bool {
        self.pagination.state().transition_in_flight
    }

    pub fn cards(&self) -> Vec<CarouselCard<'_>> {
        self.pagination
            .current_window()
            .iter()
            .map(|item| CarouselCard {
                item,
                visual_key: VisualKey::new(&self.title, item.id),
            })
            .collect()
    }

    pub fn navigate(&mut self, direction: Direction) -> PaginationState {
        let state = self.pagination.advance(direction);
        debug!(
            "{}: page {} (token {})",
            self.title,
            state.offset + 1,
            state.transition_token
        );
        state
    }

    pub fn transition_complete(&mut self) -> bool {
        self.pagination.complete_transition()
    }

    /// Replaces the underlying result set (refetch or new keyword) and
    /// rewinds to the first page.
    pub fn replace_source(&mut self, result_set: &CategoryResultSet) {
        self.key = result_set.key.clone();
        self.title = result_set.label.clone();
        self.pagination
            .on_source_changed(result_set.displayable_items());
    }

    /// Location that opens the overlay for a clicked card. `None` when the
    /// id is not on the visible page.
    pub fn select(&self, location: &Location, id: ItemId) -> Option<Location> {
        self.pagination
            .current_window()
            .iter()
            .any(|item| item.id == id)
            .then(|| open_location(location, self.kind(), id))
    }
}
