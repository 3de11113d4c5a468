/// The table engine: deterministic derivation of the visible row window.
///
/// Given caller-supplied rows, a column model and the engine state, the
/// engine computes the filtered index set, a stably sorted order, and a
/// clamped page slice. The derivation is a pure function recomputed on
/// every relevant state change; there is no incremental maintenance and
/// no side effect, so two invocations with equal inputs always produce
/// identical output.
///
/// `DataGrid` is the stateful facade over the pure computation: it owns
/// the rows, the column set, the state and a cached snapshot, applies
/// interaction-layer actions, and re-establishes the invariants (page
/// clamp, selection pruning) after each transition.
///
/// # Examples
///
/// ```
/// use gridstate::{Action, CellValue, ColumnDef, ColumnSet, DataGrid};
///
/// struct User {
///     name: &'static str,
///     age: i32,
/// }
///
/// let columns = ColumnSet::new(vec![
///     ColumnDef::new("name", |u: &User| CellValue::from(u.name)),
///     ColumnDef::new("age", |u: &User| CellValue::Int32(u.age)),
/// ])
/// .unwrap();
///
/// let rows = vec![
///     User { name: "Bob", age: 42 },
///     User { name: "Alice", age: 30 },
/// ];
///
/// let mut grid = DataGrid::new(rows, columns);
/// grid.dispatch(Action::ToggleSort("name".into())).unwrap();
///
/// let visible: Vec<&User> = grid.visible_rows();
/// assert_eq!(visible[0].name, "Alice");
/// ```

use crate::column::{ColumnDef, ColumnSet};
use crate::error::GridError;
use crate::state::{Action, Filter, PageWindow, SortOrder, TableState};
use log::warn;

/// Derived output of one engine computation.
///
/// Row references are parent indices into the input row slice, in the
/// same spirit as a view's `view_to_parent` mapping: the snapshot never
/// owns row data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    /// Indices passing the active filters, in display order.
    filtered: Vec<usize>,
    /// The slice of `filtered` visible on the effective page.
    page_rows: Vec<usize>,
    /// Effective (clamped) page index.
    page_index: usize,
    /// Total page count, at least 1.
    page_count: usize,
}

impl Snapshot {
    /// Indices of all rows passing the filters, in display order.
    pub fn filtered(&self) -> &[usize] {
        &self.filtered
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Indices of the rows on the effective page.
    pub fn page_rows(&self) -> &[usize] {
        &self.page_rows
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Resolve the page indices against a row slice.
    pub fn resolve<'a, T>(&self, rows: &'a [T]) -> Vec<&'a T> {
        self.page_rows.iter().map(|&i| &rows[i]).collect()
    }
}

/// Compute the derived row window for `(rows, columns, state)`.
///
/// Filtering: a row passes iff every active filter entry matches its
/// column's accessor output under the entry's match mode; entries naming
/// unknown or non-filterable columns are skipped with a warning.
///
/// Sorting: a sort key naming a sortable column orders the filtered
/// indices stably by the column's cell values; descending reverses the
/// comparison while ties keep their original relative order. A key
/// naming an unknown or non-sortable column falls back to unsorted.
///
/// Pagination: the page index is clamped into `[0, page_count - 1]`
/// before slicing, so a filter change can never leave the window past
/// the last page.
pub fn compute<T>(rows: &[T], columns: &ColumnSet<T>, state: &TableState) -> Snapshot {
    let mut active: Vec<(&ColumnDef<T>, &Filter)> = Vec::new();
    for (column_id, filter) in state.filters.iter() {
        match columns.by_id(column_id) {
            Some(c) if c.is_filterable() => active.push((c, filter)),
            Some(_) | None => {
                warn!("filter on unknown or non-filterable column '{}'", column_id);
            }
        }
    }

    let mut filtered: Vec<usize> = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        if active
            .iter()
            .all(|(column, filter)| filter.op.matches(&column.value(row), &filter.value))
        {
            filtered.push(index);
        }
    }

    if let Some(key) = &state.sort {
        match columns.by_id(&key.column) {
            Some(column) if column.is_sortable() => {
                let values: Vec<_> = filtered.iter().map(|&i| column.value(&rows[i])).collect();
                let mut order: Vec<usize> = (0..filtered.len()).collect();
                order.sort_by(|&a, &b| {
                    let cmp = values[a].compare(&values[b]);
                    match key.order {
                        SortOrder::Ascending => cmp,
                        SortOrder::Descending => cmp.reverse(),
                    }
                });
                filtered = order.into_iter().map(|i| filtered[i]).collect();
            }
            Some(_) | None => {
                // Fallback to unsorted rather than failing the render
                warn!("sort key on unknown or non-sortable column '{}'", key.column);
            }
        }
    }

    let page_size = state.pagination.page_size();
    let page_count = (filtered.len().div_ceil(page_size)).max(1);
    let page_index = state.pagination.page_index().min(page_count - 1);

    let start = page_index * page_size;
    let end = (start + page_size).min(filtered.len());
    let page_rows = if start < filtered.len() {
        filtered[start..end].to_vec()
    } else {
        Vec::new()
    };

    Snapshot {
        filtered,
        page_rows,
        page_index,
        page_count,
    }
}

/// Stateful grid facade owning rows, columns, state and the cached
/// snapshot.
pub struct DataGrid<T> {
    rows: Vec<T>,
    columns: ColumnSet<T>,
    state: TableState,
    snapshot: Snapshot,
}

impl<T> DataGrid<T> {
    /// Create a grid over an in-memory row set with default state.
    pub fn new(rows: Vec<T>, columns: ColumnSet<T>) -> Self {
        Self::with_state(rows, columns, TableState::new())
    }

    /// Create a grid with explicit initial state (custom page sizes,
    /// a pre-set sort, and so on).
    pub fn with_state(rows: Vec<T>, columns: ColumnSet<T>, state: TableState) -> Self {
        let mut grid = DataGrid {
            rows,
            columns,
            state,
            snapshot: Snapshot::default(),
        };
        grid.recompute();
        grid
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn columns(&self) -> &ColumnSet<T> {
        &self.columns
    }

    pub fn state(&self) -> &TableState {
        &self.state
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// The rows on the current page, in display order.
    pub fn visible_rows(&self) -> Vec<&T> {
        self.snapshot.resolve(&self.rows)
    }

    /// The materialized selected rows, in row order. This is the input
    /// to the bulk action dispatcher.
    pub fn selected_rows(&self) -> Vec<&T> {
        self.state
            .selection
            .keys()
            .into_iter()
            .map(|k| &self.rows[k])
            .collect()
    }

    /// Paging-control window for the current snapshot (1-based pages).
    pub fn page_window(&self) -> PageWindow {
        PageWindow::compute(self.snapshot.page_index + 1, self.snapshot.page_count)
    }

    /// Apply one interaction-layer action and recompute the snapshot.
    ///
    /// `ToggleAllOnPage` is resolved here against the current page: if
    /// any visible row is unselected, all visible rows become selected,
    /// otherwise all of them are deselected.
    pub fn dispatch(&mut self, action: Action) -> Result<(), GridError> {
        match action {
            Action::ToggleAllOnPage => {
                let page = self.snapshot.page_rows().to_vec();
                let all_selected = !page.is_empty()
                    && page.iter().all(|k| self.state.selection.contains(*k));
                for key in page {
                    if all_selected {
                        self.state.selection.remove(key);
                    } else {
                        self.state.selection.insert(key);
                    }
                }
            }
            other => self.state.apply(other)?,
        }
        self.recompute();
        Ok(())
    }

    /// Replace the input row set (the search adapter's entry point) and
    /// recompute. Selection is cleared: keys refer to the old rows.
    pub fn set_rows(&mut self, rows: Vec<T>) {
        self.rows = rows;
        self.state.selection.clear();
        self.state.pagination.reset_index();
        self.recompute();
    }

    /// Recompute the snapshot and re-establish state invariants: the
    /// stored page index is clamped to the derived page count, and
    /// selected keys falling outside the filtered set are pruned.
    fn recompute(&mut self) {
        self.snapshot = compute(&self.rows, &self.columns, &self.state);
        self.state.pagination.clamp(self.snapshot.page_count);

        let filtered = &self.snapshot.filtered;
        self.state.selection.retain(|k| filtered.contains(&k));
    }
}
