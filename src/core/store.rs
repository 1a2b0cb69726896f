//! Catalog store - owns the session's bags and query state.
//!
//! The bag list is fixed for the lifetime of the store. Query state only changes
//! through the mutators below (or equivalently through [`CatalogStore::dispatch`]),
//! which also apply the "back to page 1" rule: every filter change resets the
//! page, a sort change does not.
//!
//! The filtered and sorted selection is cached against the non-paging part of
//! the query, so paging through results never re-runs the filters.

use crate::{
    core::{
        pipeline::{self, QueryPage},
        query::{
            DEFAULT_MAX_PRICE, DEFAULT_MIN_PRICE, PriceBound, PriceRange, QueryState,
            SelectionKey, SortMode, parse_price_input,
        },
    },
    entities::{BagModel, Color},
    errors::{Error, Result},
};
use tracing::{debug, trace, warn};

/// State transitions the presentation layer can request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the search text and go back to page 1
    SetSearchText(String),
    /// Add or remove a color from the filter and go back to page 1
    ToggleColor(Color),
    /// Replace one price bound and go back to page 1
    SetPriceBound(PriceBound, i64),
    /// Change the ordering; the page stays put
    SetSortMode(SortMode),
    /// Restore every filter, the sort and the page to their defaults
    ResetFilters,
    /// Store a page number as given; clamping happens on read
    SetPage(usize),
    /// Advance one page, stopping at the last page
    NextPage,
    /// Go back one page, stopping at page 1
    PrevPage,
    /// Open the detail view for a bag id, or close it with `None`
    SelectRecord(Option<u32>),
    /// Close the detail view and go back to page 1
    ClearSelection,
}

/// Session-scoped catalog: the immutable bag list plus the mutable query state.
#[derive(Debug)]
pub struct CatalogStore {
    bags: Vec<BagModel>,
    query: QueryState,
    selected: Option<usize>,
    selection_key: SelectionKey,
    selection: Vec<usize>,
}

impl CatalogStore {
    /// Creates a store over `bags` with the default query state.
    #[must_use]
    pub fn new(bags: Vec<BagModel>) -> Self {
        let query = QueryState::default();
        let selection = pipeline::select(&bags, &query);
        debug!(
            "Catalog store created with {} bags, {} matching defaults",
            bags.len(),
            selection.len()
        );
        Self {
            selection_key: query.selection_key(),
            bags,
            query,
            selected: None,
            selection,
        }
    }

    /// All bags in catalog order.
    #[must_use]
    pub fn bags(&self) -> &[BagModel] {
        &self.bags
    }

    /// Current query state.
    #[must_use]
    pub const fn query(&self) -> &QueryState {
        &self.query
    }

    /// The bag open in the detail view, if any.
    #[must_use]
    pub fn selected_bag(&self) -> Option<&BagModel> {
        self.selected.and_then(|i| self.bags.get(i))
    }

    /// Runs the paging stage over the cached selection and returns the page to show.
    #[must_use]
    pub fn current_page(&self) -> QueryPage<'_> {
        pipeline::paginate(&self.bags, &self.selection, self.query.current_page)
    }

    /// Applies a command.
    ///
    /// # Errors
    /// Only `SelectRecord` with an id that is not in the catalog fails, with
    /// `Error::RecordNotFound`; the selection is left unchanged in that case.
    pub fn dispatch(&mut self, command: Command) -> Result<()> {
        trace!("Dispatching {:?}", command);
        match command {
            Command::SetSearchText(text) => self.set_search_text(text),
            Command::ToggleColor(color) => self.toggle_color(color),
            Command::SetPriceBound(which, value) => self.set_price_bound(which, value),
            Command::SetSortMode(mode) => self.set_sort_mode(mode),
            Command::ResetFilters => self.reset_filters(),
            Command::SetPage(page) => self.set_page(page),
            Command::NextPage => self.next_page(),
            Command::PrevPage => self.prev_page(),
            Command::SelectRecord(Some(id)) => return self.select_record(id).map(|_| ()),
            Command::SelectRecord(None) => self.close_record(),
            Command::ClearSelection => self.clear_selection(),
        }
        Ok(())
    }

    /// Sets the search text and resets to page 1. Any string is accepted.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.query.search_text = text.into();
        self.query.current_page = 1;
        debug!("Search text set to {:?}", self.query.search_text);
        self.refresh_selection();
    }

    /// Adds `color` to the filter if absent, removes it if present, and resets to page 1.
    pub fn toggle_color(&mut self, color: Color) {
        if !self.query.selected_colors.remove(&color) {
            self.query.selected_colors.insert(color);
        }
        self.query.current_page = 1;
        debug!(
            "Color filter toggled for {}, now {:?}",
            color, self.query.selected_colors
        );
        self.refresh_selection();
    }

    /// Replaces one price bound and resets to page 1.
    ///
    /// No clamping or ordering check is done; an inverted range simply matches nothing.
    pub fn set_price_bound(&mut self, which: PriceBound, value: i64) {
        self.query.price_range = self.query.price_range.with_bound(which, value);
        self.query.current_page = 1;
        debug!("Price range set to {:?}", self.query.price_range);
        self.refresh_selection();
    }

    /// Parses user-entered text into a price bound.
    ///
    /// Text that is not a number leaves the whole state untouched and returns
    /// `false`; otherwise behaves like [`Self::set_price_bound`] and returns `true`.
    pub fn set_price_bound_text(&mut self, which: PriceBound, text: &str) -> bool {
        parse_price_input(text).map_or_else(
            || {
                warn!("Ignoring unparseable {:?} price input {:?}", which, text);
                false
            },
            |value| {
                self.set_price_bound(which, value);
                true
            },
        )
    }

    /// Changes the ordering without touching the page.
    pub fn set_sort_mode(&mut self, mode: SortMode) {
        self.query.sort_mode = mode;
        debug!("Sort mode set to {:?}", mode);
        self.refresh_selection();
    }

    /// Restores search, colors, price range, sort and page to their defaults.
    /// The detail-view selection is not affected.
    pub fn reset_filters(&mut self) {
        self.query.search_text.clear();
        self.query.selected_colors.clear();
        self.query.price_range = PriceRange {
            min: DEFAULT_MIN_PRICE,
            max: DEFAULT_MAX_PRICE,
        };
        self.query.sort_mode = SortMode::Newest;
        self.query.current_page = 1;
        debug!("Filters reset");
        self.refresh_selection();
    }

    /// Stores `page` as given; the pipeline clamps it when reading.
    pub fn set_page(&mut self, page: usize) {
        self.query.current_page = page;
        debug!("Page set to {}", page);
    }

    /// Moves to the following page, never past the last one.
    pub fn next_page(&mut self) {
        let total_pages = self.current_page().total_pages;
        self.query.current_page = self.query.current_page.saturating_add(1).min(total_pages);
        debug!("Next page -> {}", self.query.current_page);
    }

    /// Moves to the previous page, never before page 1.
    pub fn prev_page(&mut self) {
        self.query.current_page = self.query.current_page.saturating_sub(1).max(1);
        debug!("Previous page -> {}", self.query.current_page);
    }

    /// Opens the detail view for bag `id`.
    ///
    /// # Errors
    /// Returns `Error::RecordNotFound` if no bag has that id.
    pub fn select_record(&mut self, id: u32) -> Result<&BagModel> {
        let index = self
            .bags
            .iter()
            .position(|b| b.id == id)
            .ok_or(Error::RecordNotFound { id })?;
        self.selected = Some(index);
        debug!("Selected bag #{}", id);
        Ok(&self.bags[index])
    }

    /// Closes the detail view.
    pub fn close_record(&mut self) {
        self.selected = None;
        debug!("Detail view closed");
    }

    /// Closes the detail view and returns to page 1, leaving filters alone.
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.query.current_page = 1;
        debug!("Selection cleared");
    }

    fn refresh_selection(&mut self) {
        let key = self.query.selection_key();
        if key == self.selection_key {
            trace!("Selection cache still valid");
            return;
        }
        self.selection = pipeline::select(&self.bags, &self.query);
        self.selection_key = key;
        trace!("Selection recomputed: {} matches", self.selection.len());
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    fn store_with(count: u32) -> CatalogStore {
        CatalogStore::new(create_test_catalog(count))
    }

    /// The cached page must always equal a from-scratch pipeline run.
    fn assert_cache_consistent(store: &CatalogStore) {
        let fresh = pipeline::run(store.bags(), store.query());
        assert_eq!(store.current_page(), fresh);
    }

    #[test]
    fn test_filter_mutators_reset_page() {
        let mut store = store_with(100);

        store.set_page(3);
        store.set_search_text("bag");
        assert_eq!(store.query().current_page, 1);

        store.set_page(3);
        store.toggle_color(Color::Black);
        assert_eq!(store.query().current_page, 1);

        store.set_page(3);
        store.set_price_bound(PriceBound::Max, 500);
        assert_eq!(store.query().current_page, 1);

        store.set_page(3);
        store.reset_filters();
        assert_eq!(store.query().current_page, 1);
        assert_cache_consistent(&store);
    }

    #[test]
    fn test_sort_change_keeps_page() {
        let mut store = store_with(100);
        store.set_page(3);
        store.set_sort_mode(SortMode::PriceDescending);
        assert_eq!(store.query().current_page, 3);
        assert_eq!(store.current_page().effective_page, 3);
        assert_cache_consistent(&store);
    }

    #[test]
    fn test_toggle_color_twice_restores_all() {
        let mut store = CatalogStore::new(vec![
            create_custom_bag(1, Color::Gold, 100),
            create_custom_bag(2, Color::Red, 100),
        ]);
        store.toggle_color(Color::Gold);
        assert_eq!(store.current_page().total_results, 1);
        assert!(store.query().selected_colors.contains(&Color::Gold));

        store.toggle_color(Color::Gold);
        assert!(store.query().selected_colors.is_empty());
        assert_eq!(store.current_page().total_results, 2);
        assert_cache_consistent(&store);
    }

    #[test]
    fn test_reset_filters_round_trip() {
        let mut store = store_with(10);
        store.set_search_text("gold");
        store.toggle_color(Color::Gold);
        store.set_price_bound(PriceBound::Min, 500);
        store.set_price_bound(PriceBound::Max, 100);
        store.set_sort_mode(SortMode::PriceAscending);
        store.set_page(4);
        store.select_record(3).unwrap();

        store.reset_filters();

        assert_eq!(store.query(), &QueryState::default());
        assert_eq!(store.selected_bag().map(|b| b.id), Some(3));
        assert_eq!(store.current_page().total_results, 10);
    }

    #[test]
    fn test_set_price_bound_allows_inverted_and_negative() {
        let mut store = store_with(10);
        store.set_price_bound(PriceBound::Min, 500);
        store.set_price_bound(PriceBound::Max, 100);
        assert_eq!(store.query().price_range, PriceRange { min: 500, max: 100 });
        assert_eq!(store.current_page().total_results, 0);
        assert_eq!(store.current_page().total_pages, 1);

        store.set_price_bound(PriceBound::Min, -50);
        assert_eq!(store.query().price_range, PriceRange { min: -50, max: 100 });
        assert_eq!(store.current_page().total_results, 10);
    }

    #[test]
    fn test_unparseable_price_text_is_ignored() {
        let mut store = store_with(10);
        store.set_page(2);

        assert!(!store.set_price_bound_text(PriceBound::Min, "cheap"));
        assert_eq!(store.query().price_range, PriceRange::default());
        assert_eq!(store.query().current_page, 2);

        assert!(store.set_price_bound_text(PriceBound::Min, "75.5"));
        assert_eq!(store.query().price_range.min, 75);
        assert_eq!(store.query().current_page, 1);
    }

    #[test]
    fn test_set_page_stores_raw_value() {
        let mut store = store_with(30);
        store.set_page(99);
        assert_eq!(store.query().current_page, 99);
        let page = store.current_page();
        assert_eq!(page.effective_page, 2);
        assert_eq!(page.items.len(), 6);
    }

    #[test]
    fn test_next_and_prev_page_stay_in_bounds() {
        let mut store = store_with(50);
        store.prev_page();
        assert_eq!(store.query().current_page, 1);

        store.next_page();
        store.next_page();
        store.next_page();
        assert_eq!(store.query().current_page, 3);

        store.prev_page();
        assert_eq!(store.query().current_page, 2);

        store.set_page(99);
        store.prev_page();
        assert_eq!(store.query().current_page, 98);
        store.next_page();
        assert_eq!(store.query().current_page, 3);
    }

    #[test]
    fn test_select_and_clear() {
        let mut store = store_with(30);
        assert!(store.selected_bag().is_none());

        let bag = store.select_record(7).unwrap();
        assert_eq!(bag.id, 7);

        let err = store.select_record(999).unwrap_err();
        assert!(matches!(err, Error::RecordNotFound { id: 999 }));
        assert_eq!(store.selected_bag().map(|b| b.id), Some(7));

        store.set_page(2);
        store.clear_selection();
        assert!(store.selected_bag().is_none());
        assert_eq!(store.query().current_page, 1);
    }

    #[test]
    fn test_dispatch_matches_direct_calls() {
        let mut store = store_with(40);
        store
            .dispatch(Command::SetSearchText("evening".to_string()))
            .unwrap();
        store.dispatch(Command::ToggleColor(Color::Black)).unwrap();
        store
            .dispatch(Command::SetPriceBound(PriceBound::Max, 300))
            .unwrap();
        store
            .dispatch(Command::SetSortMode(SortMode::PriceAscending))
            .unwrap();
        store.dispatch(Command::SetPage(2)).unwrap();
        store.dispatch(Command::SelectRecord(Some(5))).unwrap();

        let page = store.current_page();
        assert_eq!(page.total_results, 40);
        assert_eq!(page.effective_page, 2);
        assert_eq!(ids(&page.items), (25..=40).collect::<Vec<_>>());
        assert_eq!(store.selected_bag().map(|b| b.id), Some(5));

        assert!(store.dispatch(Command::SelectRecord(Some(41))).is_err());
        store.dispatch(Command::SelectRecord(None)).unwrap();
        assert!(store.selected_bag().is_none());

        store.dispatch(Command::ResetFilters).unwrap();
        assert_eq!(store.query(), &QueryState::default());
        assert_cache_consistent(&store);
    }
}
