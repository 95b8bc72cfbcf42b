//! Paged window over one carousel's item list.
//!
//! The controller accepts one `advance` at a time: a second call that
//! arrives before the rendering layer reports the transition complete is
//! dropped, not queued.

use tracing::debug;

use crate::constants::DEFAULT_PAGE_SIZE;
use crate::models::Item;

/// Navigation direction of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Backward,
    Forward,
}

/// Snapshot of a controller, cheap to copy into the render layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaginationState {
    pub offset: usize,
    pub transition_in_flight: bool,
    /// Bumped by every accepted `advance`; doubles as the row's render key.
    pub transition_token: u64,
    /// Direction of the last accepted `advance`, `None` before the first.
    pub direction: Option<Direction>,
}

#[derive(Debug, Clone)]
pub struct PaginationController {
    items: Vec<Item>,
    page_size: usize,
    state: PaginationState,
}

impl PaginationController {
    /// `items` must already be filtered to what the carousel may show.
    pub fn new(items: Vec<Item>, page_size: usize) -> Self {
        Self {
            items,
            page_size: page_size.max(1),
            state: PaginationState::default(),
        }
    }

    pub fn with_default_page_size(items: Vec<Item>) -> Self {
        Self::new(items, DEFAULT_PAGE_SIZE)
    }

    pub fn state(&self) -> PaginationState {
        self.state
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct offsets; a partial trailing page counts.
    pub fn page_count(&self) -> usize {
        self.items.len().div_ceil(self.page_size)
    }

    /// `ceil(n / page_size) - 1`, or 0 for an empty list.
    pub fn max_offset(&self) -> usize {
        self.page_count().saturating_sub(1)
    }

    /// Moves one page in `direction`, wrapping at both ends.
    ///
    /// Returns the state unchanged when a transition is in flight or there
    /// is nothing to page through.
    pub fn advance(&mut self, direction: Direction) -> PaginationState {
        if self.state.transition_in_flight {
            debug!("advance({:?}) dropped: transition in flight", direction);
            return self.state;
        }
        if self.items.is_empty() {
            debug!("advance({:?}) ignored: no items", direction);
            return self.state;
        }

        let max_offset = self.max_offset();
        let offset = match direction {
            Direction::Forward if self.state.offset >= max_offset => 0,
            Direction::Forward => self.state.offset + 1,
            Direction::Backward if self.state.offset == 0 => max_offset,
            Direction::Backward => self.state.offset - 1,
        };

        self.state = PaginationState {
            offset,
            transition_in_flight: true,
            transition_token: self.state.transition_token + 1,
            direction: Some(direction),
        };
        self.state
    }

    /// Transition-complete signal from the rendering layer. Only the first
    /// signal after an `advance` has an effect; returns whether it did.
    pub fn complete_transition(&mut self) -> bool {
        let was_in_flight = self.state.transition_in_flight;
        self.state.transition_in_flight = false;
        was_in_flight
    }

    /// Items at the current offset, at most `page_size` of them.
    pub fn current_window(&self) -> &[Item] {
        let start = (self.state.offset * self.page_size).min(self.items.len());
        let end = (start + self.page_size).min(self.items.len());
        &self.items[start..end]
    }

    /// Swaps in a new list (new result set or filter) and rewinds to the
    /// first page. The transition token keeps counting.
    pub fn on_source_changed(&mut self, items: Vec<Item>) {
        self.items = items;
        self.state.offset = 0;
        self.state.transition_in_flight = false;
    }
}
