//! Search/filter/page selections of the animal list.

use serde::{Deserialize, Serialize};

use super::filter::{AnimalFilters, SexFilter, TypeFilter};
use super::pages::clamp_page;

/// What the user has currently chosen in the list controls.
///
/// Invariant: any change of search term or filters puts the list back on
/// page 1. Re-applying an identical value is not a change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListState {
    search: String,
    filters: AnimalFilters,
    page: usize,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            search: String::new(),
            filters: AnimalFilters::default(),
            page: 1,
        }
    }
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn filters(&self) -> &AnimalFilters {
        &self.filters
    }

    /// Requested page (1-based). Clamped again when the page is rendered.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Set the search term. Returns whether it changed.
    pub fn set_search(&mut self, term: impl Into<String>) -> bool {
        let term = term.into();
        if term == self.search {
            return false;
        }
        self.search = term;
        self.page = 1;
        true
    }

    /// Replace both filters. Returns whether anything changed.
    pub fn set_filters(&mut self, filters: AnimalFilters) -> bool {
        if filters == self.filters {
            return false;
        }
        self.filters = filters;
        self.page = 1;
        true
    }

    pub fn set_type_filter(&mut self, kind: TypeFilter) -> bool {
        self.set_filters(AnimalFilters { kind, ..self.filters })
    }

    pub fn set_sex_filter(&mut self, sex: SexFilter) -> bool {
        self.set_filters(AnimalFilters { sex, ..self.filters })
    }

    /// Move to a page, clamped against the current number of pages.
    pub fn set_page(&mut self, page: usize, total_pages: usize) {
        self.page = clamp_page(page, total_pages);
    }

    /// A new snapshot arrived (fetch or local patch): back to page 1.
    pub fn snapshot_replaced(&mut self) {
        self.page = 1;
    }

    /// Clear search and filters, as the refresh button does.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
