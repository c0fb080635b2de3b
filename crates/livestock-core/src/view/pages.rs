//! Page slicing.

use crate::models::AnimalRecord;

use super::filter::{filter_animals, AnimalFilters};

/// One rendered page of the animal list.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimalPage<'a> {
    /// Records on this page, in snapshot order
    pub items: Vec<&'a AnimalRecord>,
    /// Effective 1-based page number after clamping
    pub page: usize,
    /// `ceil(total_count / page_size)`, zero for an empty result
    pub total_pages: usize,
    /// Number of records matching the search and filters
    pub total_count: usize,
    pub page_size: usize,
}

impl AnimalPage<'_> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether the result spans more than one page and needs pager controls.
    pub fn needs_pager(&self) -> bool {
        self.total_count > self.page_size
    }
}

/// Number of pages for `count` records.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1))
}

/// Clamp a requested page into `[1, max(total_pages, 1)]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Filter the snapshot and cut out the requested page.
///
/// `page_size` of zero is treated as one.
pub fn paginate<'a>(
    all: &'a [AnimalRecord],
    search: &str,
    filters: &AnimalFilters,
    page: usize,
    page_size: usize,
) -> AnimalPage<'a> {
    paginate_filtered(filter_animals(all, search, filters), page, page_size)
}

/// Cut a page out of an already filtered list.
pub fn paginate_filtered(
    filtered: Vec<&AnimalRecord>,
    page: usize,
    page_size: usize,
) -> AnimalPage<'_> {
    let page_size = page_size.max(1);
    let total_count = filtered.len();
    let total_pages = total_pages(total_count, page_size);
    let page = clamp_page(page, total_pages);

    let items = filtered
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .collect();

    AnimalPage {
        items,
        page,
        total_pages,
        total_count,
        page_size,
    }
}
