/// Engine state and the interaction layer.
///
/// All user-facing table interactions are modelled as `Action` values
/// applied to a single `TableState` through a reducer-style transition
/// function, instead of scattered independent setters. Every transition
/// leaves the state internally consistent: changing the filter or page
/// size resets the page index, and the page index is clamped against the
/// derived page count on every recomputation.

use crate::error::GridError;
use crate::value::MatchOp;
use std::collections::HashSet;

/// Sort order specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Ascending order (smallest first)
    Ascending,
    /// Descending order (largest first)
    Descending,
}

/// The single active sort key: a column id and an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    /// Column id to sort by
    pub column: String,
    /// Sort order (ascending or descending)
    pub order: SortOrder,
}

impl SortKey {
    /// Create a new sort key with ascending order
    pub fn ascending(column: impl Into<String>) -> Self {
        SortKey {
            column: column.into(),
            order: SortOrder::Ascending,
        }
    }

    /// Create a new sort key with descending order
    pub fn descending(column: impl Into<String>) -> Self {
        SortKey {
            column: column.into(),
            order: SortOrder::Descending,
        }
    }
}

/// One active filter: a needle and how it is matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub value: String,
    pub op: MatchOp,
}

impl Filter {
    /// Exact-match filter, the common case.
    pub fn equals(value: impl Into<String>) -> Self {
        Filter {
            value: value.into(),
            op: MatchOp::Eq,
        }
    }

    /// Substring filter.
    pub fn contains(value: impl Into<String>) -> Self {
        Filter {
            value: value.into(),
            op: MatchOp::Contains,
        }
    }
}

/// Active filters, at most one per column id.
///
/// Setting a value for a column replaces any previous value; setting
/// `None` removes the entry. Iteration order is insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
    entries: Vec<(String, Filter)>,
}

impl FilterSet {
    pub fn new() -> Self {
        FilterSet::default()
    }

    /// Replace or clear the filter for one column.
    pub fn set(&mut self, column: impl Into<String>, filter: Option<Filter>) {
        let column = column.into();
        self.entries.retain(|(c, _)| *c != column);
        if let Some(filter) = filter {
            self.entries.push((column, filter));
        }
    }

    pub fn get(&self, column: &str) -> Option<&Filter> {
        self.entries
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, f)| f)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Filter)> {
        self.entries.iter().map(|(c, f)| (c.as_str(), f))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Default page-size allow-list.
pub const DEFAULT_PAGE_SIZES: &[usize] = &[10, 25, 50, 100];

/// Pagination state: a zero-based page index and a page size drawn from
/// a configured allow-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    page_index: usize,
    page_size: usize,
    allowed_sizes: Vec<usize>,
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZES[0],
            allowed_sizes: DEFAULT_PAGE_SIZES.to_vec(),
        }
    }
}

impl Pagination {
    pub fn new() -> Self {
        Pagination::default()
    }

    /// Create pagination state with a custom allow-list. The first entry
    /// becomes the initial page size.
    pub fn with_sizes(sizes: &[usize]) -> Result<Self, GridError> {
        if sizes.is_empty() || sizes.contains(&0) {
            return Err(GridError::configuration(
                "page size allow-list must be non-empty and positive",
            ));
        }
        Ok(Pagination {
            page_index: 0,
            page_size: sizes[0],
            allowed_sizes: sizes.to_vec(),
        })
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn allowed_sizes(&self) -> &[usize] {
        &self.allowed_sizes
    }

    /// Change the page size. Sizes outside the allow-list are a
    /// configuration error. Resets the page index to 0.
    pub fn set_size(&mut self, size: usize) -> Result<(), GridError> {
        if !self.allowed_sizes.contains(&size) {
            return Err(GridError::configuration(format!(
                "page size {} not in allowed set {:?}",
                size, self.allowed_sizes
            )));
        }
        self.page_size = size;
        self.page_index = 0;
        Ok(())
    }

    pub fn set_index(&mut self, index: usize) {
        self.page_index = index;
    }

    pub fn reset_index(&mut self) {
        self.page_index = 0;
    }

    /// Clamp the page index into `[0, page_count - 1]`.
    pub fn clamp(&mut self, page_count: usize) {
        let last = page_count.max(1) - 1;
        if self.page_index > last {
            self.page_index = last;
        }
    }
}

/// Selected row keys.
///
/// Keys are parent-row indices into the grid's current input row set.
/// The grid prunes keys that fall out of the filtered set, so selection
/// never refers to rows the user cannot see under the active filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    keys: HashSet<usize>,
}

impl Selection {
    pub fn new() -> Self {
        Selection::default()
    }

    pub fn toggle(&mut self, key: usize) {
        if !self.keys.remove(&key) {
            self.keys.insert(key);
        }
    }

    pub fn insert(&mut self, key: usize) {
        self.keys.insert(key);
    }

    pub fn remove(&mut self, key: usize) {
        self.keys.remove(&key);
    }

    pub fn contains(&self, key: usize) -> bool {
        self.keys.contains(&key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Keep only keys for which the predicate holds.
    pub fn retain<F: FnMut(usize) -> bool>(&mut self, mut keep: F) {
        self.keys.retain(|k| keep(*k));
    }

    /// Selected keys in ascending order.
    pub fn keys(&self) -> Vec<usize> {
        let mut keys: Vec<usize> = self.keys.iter().copied().collect();
        keys.sort_unstable();
        keys
    }
}

/// The complete engine state driving derived output.
#[derive(Debug, Clone, Default)]
pub struct TableState {
    pub sort: Option<SortKey>,
    pub filters: FilterSet,
    pub pagination: Pagination,
    pub selection: Selection,
}

impl TableState {
    pub fn new() -> Self {
        TableState::default()
    }

    /// State with a custom page-size allow-list.
    pub fn with_page_sizes(sizes: &[usize]) -> Result<Self, GridError> {
        Ok(TableState {
            pagination: Pagination::with_sizes(sizes)?,
            ..TableState::default()
        })
    }
}

/// A user-facing state transition.
///
/// Selection actions operating on the visible page (`ToggleAllOnPage`)
/// are resolved by the grid facade, which knows the current snapshot;
/// everything else is handled directly by [`TableState::apply`].
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Cycle the named column through unsorted -> ascending ->
    /// descending -> unsorted.
    ToggleSort(String),
    /// Set an explicit sort key.
    SetSort(String, SortOrder),
    /// Remove the active sort key.
    ClearSort,
    /// Replace or clear one column's filter. Resets the page index.
    SetFilter(String, Option<Filter>),
    /// Change the page size (validated against the allow-list). Resets
    /// the page index.
    SetPageSize(usize),
    /// Request a page. Clamped against the page count at recomputation.
    SetPageIndex(usize),
    /// Toggle selection of one row key.
    ToggleRow(usize),
    /// Select every row on the visible page, or deselect them all if
    /// they are already selected.
    ToggleAllOnPage,
    /// Drop the entire selection.
    ClearSelection,
}

impl TableState {
    /// Apply one action to this state.
    ///
    /// `ToggleAllOnPage` cannot be resolved here (it needs the visible
    /// page) and is rejected as a configuration error when dispatched
    /// without a grid; use [`crate::DataGrid::dispatch`] instead.
    pub fn apply(&mut self, action: Action) -> Result<(), GridError> {
        match action {
            Action::ToggleSort(column) => {
                self.sort = match self.sort.take() {
                    None => Some(SortKey::ascending(column)),
                    Some(key) if key.column != column => Some(SortKey::ascending(column)),
                    Some(key) if key.order == SortOrder::Ascending => {
                        Some(SortKey::descending(column))
                    }
                    Some(_) => None,
                };
            }
            Action::SetSort(column, order) => {
                self.sort = Some(SortKey { column, order });
            }
            Action::ClearSort => {
                self.sort = None;
            }
            Action::SetFilter(column, filter) => {
                self.filters.set(column, filter);
                self.pagination.reset_index();
            }
            Action::SetPageSize(size) => {
                self.pagination.set_size(size)?;
            }
            Action::SetPageIndex(index) => {
                self.pagination.set_index(index);
            }
            Action::ToggleRow(key) => {
                self.selection.toggle(key);
            }
            Action::ToggleAllOnPage => {
                return Err(GridError::configuration(
                    "ToggleAllOnPage requires a grid snapshot; dispatch it through DataGrid",
                ));
            }
            Action::ClearSelection => {
                self.selection.clear();
            }
        }
        Ok(())
    }
}

/// Paging-control display policy: which page numbers and jump controls
/// a paginator should render. Pages are 1-based here because that is
/// what paging UIs display.
///
/// This is a display policy, not a correctness invariant; the engine
/// only requires that `SetPageIndex` is eventually called with a valid
/// index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    /// Show a "jump back 5 pages" control.
    pub jump_back: bool,
    /// Gap between page 2 and the lowest shown page.
    pub leading_ellipsis: bool,
    /// The page numbers to render, 1-based.
    pub pages: Vec<usize>,
    /// Gap between the highest shown page and the second-to-last page.
    pub trailing_ellipsis: bool,
    /// Show a "jump forward 5 pages" control.
    pub jump_forward: bool,
}

impl PageWindow {
    /// Compute the window for a 1-based current page out of `total`
    /// pages. `total` is treated as at least 1.
    pub fn compute(current: usize, total: usize) -> Self {
        let total = total.max(1);
        let current = current.clamp(1, total);
        let pages: Vec<usize> = (current..=total.min(current + 2)).collect();

        PageWindow {
            jump_back: current > 5,
            leading_ellipsis: pages.first().copied().unwrap_or(1) > 2,
            trailing_ellipsis: pages.last().copied().unwrap_or(total) + 1 < total,
            jump_forward: current + 5 <= total,
            pages,
        }
    }
}
