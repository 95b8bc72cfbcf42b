pub mod browse;
pub mod carousel;
pub mod location;
pub mod overlay;
pub mod page;
pub mod pagination;
pub mod search;

pub use browse::{BrowseLoader, BrowsePage, BrowseResults};
pub use carousel::{CarouselCard, CarouselView};
pub use location::{Location, Page, Selection, SelectionState, derive_selection};
pub use overlay::{OverlayController, OverlayMatch, VisualKey};
pub use page::{LoadState, Row};
pub use pagination::{Direction, PaginationController, PaginationState};
pub use search::{SearchAggregator, SearchPage, SearchResults, SearchStatus};
