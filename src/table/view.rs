//! View Composition
//!
//! Wires the filter, sort and pagination layers into a single "visible
//! rows" value. View state (search text, sort key and direction, current
//! page and page size) lives in an explicit, serializable struct passed
//! through the pure [`compose`] pipeline; [`TableView`] wraps both with
//! interaction handlers, a recompute cache, and the loading placeholder
//! behavior.

use serde::{Deserialize, Serialize};

use crate::table::paginate::{clamp_page, page_count, page_slice};
use crate::table::sort::{sort_rows, SortDirection};
use crate::table::{filter, TableRow};

/// Serializable view state driving the pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    /// Free-text search query; empty means no filtering
    pub search: String,
    /// Field name to order by
    pub sort_key: String,
    pub direction: SortDirection,
    /// 1-indexed current page
    pub page: usize,
    pub page_size: usize,
}

impl ViewState {
    /// Fresh state: no search, ascending on `sort_key`, first page.
    pub fn new(sort_key: impl Into<String>, page_size: usize) -> Self {
        Self {
            search: String::new(),
            sort_key: sort_key.into(),
            direction: SortDirection::Ascending,
            page: 1,
            page_size: std::cmp::max(1, page_size),
        }
    }

    /// Replace the search query. A changed query returns to page 1 so the
    /// user is never stranded past the end of a shrunken filtered set.
    pub fn set_search(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text != self.search {
            self.search = text;
            self.page = 1;
        }
    }

    /// Select a sort key. Re-selecting the active key flips the direction;
    /// a new key resets to ascending.
    pub fn set_sort(&mut self, key: impl Into<String>) {
        let key = key.into();
        if key == self.sort_key {
            self.direction = self.direction.flip();
        } else {
            self.sort_key = key;
            self.direction = SortDirection::Ascending;
        }
    }

    /// Jump to a page (1-indexed; 0 clamps to 1).
    pub fn set_page(&mut self, page: usize) {
        self.page = std::cmp::max(1, page);
    }

    /// Change the page size. Resets to page 1 so the current page can never
    /// reference rows that no longer exist at the new size.
    pub fn set_page_size(&mut self, page_size: usize) {
        let page_size = std::cmp::max(1, page_size);
        if page_size != self.page_size {
            self.page_size = page_size;
            self.page = 1;
        }
    }
}

/// One computed slice of the table: what the rendering layer consumes
#[derive(Debug, Clone, PartialEq)]
pub struct TableSlice<R> {
    /// The search-filtered, sorted, paginated rows
    pub rows: Vec<R>,
    /// Size of the filtered set before pagination
    pub total_filtered: usize,
    /// Displayed page indicator, clamped to `page_count`
    pub page: usize,
    pub page_count: usize,
}

impl<R> TableSlice<R> {
    /// Empty slice (empty-state render: one page, no rows)
    pub fn empty() -> Self {
        Self {
            rows: Vec::new(),
            total_filtered: 0,
            page: 1,
            page_count: 1,
        }
    }
}

/// Run the full pipeline for one state over one collection.
///
/// Deterministic: same records and state always yield the same slice.
/// An empty search skips the filter pass entirely, so the full collection
/// is what flows to the sorter.
pub fn compose<R: TableRow>(records: &[R], state: &ViewState) -> TableSlice<R> {
    let filtered = filter::search(records, &state.search);
    let total_filtered = filtered.len();

    let sorted = sort_rows(filtered, &state.sort_key, state.direction);

    let count = page_count(total_filtered, state.page_size);
    let rows = page_slice(&sorted, state.page, state.page_size);

    TableSlice {
        rows,
        total_filtered,
        page: clamp_page(state.page, total_filtered, state.page_size),
        page_count: count,
    }
}

/// Stateful table component: records + view state + cached slice.
///
/// The cached slice is recomputed only when a dependency (records, search,
/// sort, page, page size) actually changed; unrelated calls reuse it. The
/// recompute counter exists so tests can assert exactly that.
#[derive(Debug)]
pub struct TableView<R> {
    records: Vec<R>,
    state: ViewState,
    loading: bool,
    cache: Option<TableSlice<R>>,
    recomputes: u64,
}

impl<R: TableRow> TableView<R> {
    /// New view in the loading state with no records yet.
    pub fn new(page_size: usize) -> Self {
        Self {
            records: Vec::new(),
            state: ViewState::new(R::default_sort_key(), page_size),
            loading: true,
            cache: None,
            recomputes: 0,
        }
    }

    /// Replace the resident collection wholesale (a fetch completed).
    pub fn load(&mut self, records: Vec<R>) {
        self.records = records;
        self.loading = false;
        self.cache = None;
    }

    /// The collection fetch failed terminally: leave the loading state and
    /// render the empty state. Not retried automatically.
    pub fn load_failed(&mut self) {
        self.records = Vec::new();
        self.loading = false;
        self.cache = None;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// While loading, the renderer shows this many placeholder rows instead
    /// of `visible_rows`; zero once loaded.
    pub fn placeholder_rows(&self) -> usize {
        if self.loading {
            self.state.page_size
        } else {
            0
        }
    }

    /// Current view state (for serialization or inspection).
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// How many times the pipeline has actually run.
    pub fn recompute_count(&self) -> u64 {
        self.recomputes
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.mutate(|s| s.set_search(text));
    }

    pub fn set_sort(&mut self, key: impl Into<String>) {
        self.mutate(|s| s.set_sort(key));
    }

    pub fn set_page(&mut self, page: usize) {
        self.mutate(|s| s.set_page(page));
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.mutate(|s| s.set_page_size(page_size));
    }

    /// The current visible slice, recomputing only if a dependency changed.
    ///
    /// While loading this is the empty slice; consult
    /// [`TableView::placeholder_rows`] for the skeleton row count.
    pub fn visible(&mut self) -> &TableSlice<R> {
        if self.loading {
            // Suppress computation entirely until the load settles
            return self.cache.get_or_insert_with(TableSlice::empty);
        }

        if self.cache.is_none() {
            self.cache = Some(compose(&self.records, &self.state));
            self.recomputes += 1;
        }

        self.cache.as_ref().expect("cache populated above")
    }

    /// Apply a state mutation, invalidating the cache only on real change.
    fn mutate(&mut self, f: impl FnOnce(&mut ViewState)) {
        let before = self.state.clone();
        f(&mut self.state);
        if self.state != before {
            self.cache = None;
        }
    }
}
