//! Query pipeline - filter, sort and paginate the catalog.
//!
//! Everything here is a pure function of the bag list and a `QueryState`. The
//! stages always run in the same order: text filter, color filter, price filter,
//! stable sort, then page slicing. No input combination is an error; degenerate
//! inputs (inverted price range, out-of-range page) produce well-defined,
//! possibly empty, results.

use crate::{
    core::query::{QueryState, SortMode},
    entities::BagModel,
};
use std::ops::Range;

/// Number of bags shown per page. Not user-configurable.
pub const PAGE_SIZE: usize = 24;

/// One rendered page of results plus the paging metadata needed to display it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPage<'a> {
    /// Bags on the effective page, in display order
    pub items: Vec<&'a BagModel>,
    /// Number of bags that survived filtering
    pub total_results: usize,
    /// Number of pages, never less than 1
    pub total_pages: usize,
    /// The page actually shown after clamping the requested page
    pub effective_page: usize,
}

/// Paging arithmetic for a result set of a given size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    /// Number of results being paged
    pub total_results: usize,
    /// `max(1, ceil(total_results / PAGE_SIZE))`
    pub total_pages: usize,
    /// Requested page clamped into `[1, total_pages]`
    pub effective_page: usize,
    /// Index range of the effective page within the full result list
    pub range: Range<usize>,
}

/// Computes the page window for `total_results` results when `requested_page`
/// is stored in the query state.
#[must_use]
pub fn page_window(total_results: usize, requested_page: usize) -> PageWindow {
    let total_pages = total_results.div_ceil(PAGE_SIZE).max(1);
    let effective_page = requested_page.clamp(1, total_pages);
    let start = (effective_page - 1) * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(total_results);
    PageWindow {
        total_results,
        total_pages,
        effective_page,
        range: start.min(end)..end,
    }
}

/// Whether a bag's name or description contains `needle`.
///
/// `needle` must already be trimmed and lowercased; an empty needle matches
/// everything. The color field is never consulted directly.
#[must_use]
pub fn matches_text(bag: &BagModel, needle: &str) -> bool {
    needle.is_empty()
        || bag.name.to_lowercase().contains(needle)
        || bag.description.to_lowercase().contains(needle)
}

/// Filters and sorts the catalog, returning indices into `bags` in display order.
///
/// The sort is stable, so bags that compare equal keep their catalog order and
/// re-running the same query always yields the same sequence.
#[must_use]
pub fn select(bags: &[BagModel], query: &QueryState) -> Vec<usize> {
    let needle = query.search_text.trim().to_lowercase();

    let mut selected: Vec<usize> = bags
        .iter()
        .enumerate()
        .filter(|(_, bag)| matches_text(bag, &needle))
        .filter(|(_, bag)| {
            query.selected_colors.is_empty() || query.selected_colors.contains(&bag.color)
        })
        .filter(|(_, bag)| query.price_range.contains(bag.price))
        .map(|(index, _)| index)
        .collect();

    match query.sort_mode {
        SortMode::Newest => {
            selected.sort_by(|&a, &b| bags[b].created_at.cmp(&bags[a].created_at));
        }
        SortMode::PriceAscending => selected.sort_by_key(|&i| bags[i].price),
        SortMode::PriceDescending => {
            selected.sort_by(|&a, &b| bags[b].price.cmp(&bags[a].price));
        }
    }

    selected
}

/// Slices an already selected index list down to the requested page.
#[must_use]
pub fn paginate<'a>(
    bags: &'a [BagModel],
    selected: &[usize],
    requested_page: usize,
) -> QueryPage<'a> {
    let window = page_window(selected.len(), requested_page);
    let items = selected[window.range.clone()]
        .iter()
        .filter_map(|&i| bags.get(i))
        .collect();

    QueryPage {
        items,
        total_results: window.total_results,
        total_pages: window.total_pages,
        effective_page: window.effective_page,
    }
}

/// Runs the full pipeline: filter, sort, then paginate.
#[must_use]
pub fn run<'a>(bags: &'a [BagModel], query: &QueryState) -> QueryPage<'a> {
    let selected = select(bags, query);
    paginate(bags, &selected, query.current_page)
}
