//! An animal snapshot together with the list selections applied to it.

use tracing::debug;

use crate::config::DashboardConfig;
use crate::models::AnimalRecord;

use super::filter::{filter_animals, search_animals, AnimalFilters};
use super::pages::{paginate_filtered, total_pages, AnimalPage};
use super::state::ListState;

/// The animal list screen's data: the current snapshot plus [`ListState`].
///
/// Records are never edited in place; every patch installs a new snapshot.
#[derive(Debug, Clone, Default)]
pub struct AnimalBrowser {
    animals: Vec<AnimalRecord>,
    state: ListState,
    page_size: usize,
}

impl AnimalBrowser {
    pub fn new(page_size: usize) -> Self {
        Self {
            animals: Vec::new(),
            state: ListState::new(),
            page_size: page_size.max(1),
        }
    }

    pub fn with_config(config: &DashboardConfig) -> Self {
        Self::new(config.page_size)
    }

    pub fn animals(&self) -> &[AnimalRecord] {
        &self.animals
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn find(&self, id: &str) -> Option<&AnimalRecord> {
        self.animals.iter().find(|a| a.id == id)
    }

    /// Install a freshly fetched snapshot.
    pub fn replace_snapshot(&mut self, animals: Vec<AnimalRecord>) {
        debug!(count = animals.len(), "animal snapshot replaced");
        self.animals = animals;
        self.state.snapshot_replaced();
    }

    /// Patch the snapshot after an update went through the API.
    /// Returns whether a record with that id was present.
    pub fn apply_update(&mut self, updated: AnimalRecord) -> bool {
        let mut found = false;
        let animals: Vec<AnimalRecord> = self
            .animals
            .iter()
            .map(|a| {
                if a.id == updated.id {
                    found = true;
                    updated.clone()
                } else {
                    a.clone()
                }
            })
            .collect();
        if found {
            self.replace_snapshot(animals);
        }
        found
    }

    /// Patch the snapshot after a delete went through the API.
    pub fn apply_removal(&mut self, id: &str) -> bool {
        let before = self.animals.len();
        let animals: Vec<AnimalRecord> =
            self.animals.iter().filter(|a| a.id != id).cloned().collect();
        let removed = animals.len() != before;
        if removed {
            self.replace_snapshot(animals);
        }
        removed
    }

    pub fn set_search(&mut self, term: impl Into<String>) -> bool {
        self.state.set_search(term)
    }

    pub fn set_filters(&mut self, filters: AnimalFilters) -> bool {
        self.state.set_filters(filters)
    }

    /// Move to a page, clamped against the filtered result.
    pub fn go_to_page(&mut self, page: usize) {
        let count = self.filtered().len();
        self.state.set_page(page, total_pages(count, self.page_size));
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Records matching the current search and filters.
    pub fn filtered(&self) -> Vec<&AnimalRecord> {
        filter_animals(&self.animals, self.state.search(), self.state.filters())
    }

    /// The page the list should show right now.
    pub fn current_page(&self) -> AnimalPage<'_> {
        paginate_filtered(self.filtered(), self.state.page(), self.page_size)
    }

    /// Search-only lookup over the same snapshot (health screen).
    pub fn search(&self, term: &str) -> Vec<&AnimalRecord> {
        search_animals(&self.animals, term)
    }
}
