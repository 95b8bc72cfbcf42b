//! Detail overlay lookup.
//!
//! The overlay has no state of its own: it is open exactly when the
//! selection derived from the location resolves against the loaded
//! categories.

use std::fmt;

use super::location::{Location, SelectionState, close_location};
use crate::models::{CategoryResultSet, Item, ItemId};

/// Identity shared by a carousel card and the overlay that grows out of it.
///
/// The label is part of the key because one id can sit in several
/// carousels on the same page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VisualKey(String);

impl VisualKey {
    pub fn new(category_label: &str, id: ItemId) -> Self {
        Self(format!("{}-{}", category_label, id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VisualKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A resolved selection: the item and the category it was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayMatch<'a> {
    pub item: &'a Item,
    pub category: &'a CategoryResultSet,
}

impl<'a> OverlayMatch<'a> {
    pub fn category_label(&self) -> &'a str {
        &self.category.label
    }

    pub fn visual_key(&self) -> VisualKey {
        VisualKey::new(&self.category.label, self.item.id)
    }
}

pub struct OverlayController;

impl OverlayController {
    /// First category, in the given order, that lists `selected_id`.
    ///
    /// `None` means no overlay is rendered.
    pub fn resolve(
        selected_id: ItemId,
        categories: &[CategoryResultSet],
    ) -> Option<OverlayMatch<'_>> {
        categories.iter().find_map(|category| {
            category
                .find(selected_id)
                .map(|item| OverlayMatch { item, category })
        })
    }

    /// Resolves a derived selection, only against categories of the
    /// selected media kind.
    pub fn resolve_selection<'a>(
        selection: &SelectionState,
        categories: &'a [CategoryResultSet],
    ) -> Option<OverlayMatch<'a>> {
        let selection = selection.selection?;
        categories
            .iter()
            .filter(|category| category.kind() == selection.kind)
            .find_map(|category| {
                category
                    .find(selection.id)
                    .map(|item| OverlayMatch { item, category })
            })
    }

    /// Location to navigate to when the overlay is dismissed.
    pub fn close(location: &Location) -> Location {
        close_location(location)
    }
}
