/// Column model for the grid engine.
///
/// A `ColumnDef` declares how one field of an opaque row type is read,
/// labelled, sorted and filtered. The accessor is resolved once at
/// definition time; the engine never inspects rows any other way.
///
/// Two column ids are special: `"select"` (row-selection checkboxes)
/// always renders first, and `"actions"` (per-row action buttons) always
/// renders last, regardless of declaration order.
///
/// # Examples
///
/// ```
/// use gridstate::{CellValue, ColumnDef, ColumnSet};
///
/// struct User {
///     id: i32,
///     name: String,
/// }
///
/// let columns = ColumnSet::new(vec![
///     ColumnDef::new("id", |u: &User| CellValue::Int32(u.id)),
///     ColumnDef::new("name", |u: &User| CellValue::from(u.name.as_str()))
///         .with_header("Full name"),
/// ])
/// .unwrap();
///
/// assert_eq!(columns.len(), 2);
/// assert_eq!(columns.by_id("name").unwrap().header_label(), "Full name");
/// ```

use crate::error::GridError;
use crate::value::CellValue;
use std::fmt::Debug;

/// Column id reserved for the row-selection checkbox column.
pub const SELECT_COLUMN: &str = "select";

/// Column id reserved for the per-row actions column.
pub const ACTIONS_COLUMN: &str = "actions";

/// Declarative description of one column over rows of type `T`.
pub struct ColumnDef<T> {
    id: String,
    header: Option<String>,
    accessor: Box<dyn Fn(&T) -> CellValue>,
    sortable: bool,
    filterable: bool,
}

impl<T> ColumnDef<T> {
    /// Create a column with the given id and accessor.
    ///
    /// Columns are sortable and filterable by default; use the builder
    /// methods to opt out.
    pub fn new<F>(id: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&T) -> CellValue + 'static,
    {
        ColumnDef {
            id: id.into(),
            header: None,
            accessor: Box::new(accessor),
            sortable: true,
            filterable: true,
        }
    }

    /// Create a display-only column (not sortable, not filterable).
    ///
    /// Used for the `"select"` and `"actions"` columns, whose accessors
    /// carry no row data.
    pub fn display_only(id: impl Into<String>) -> Self {
        ColumnDef {
            id: id.into(),
            header: None,
            accessor: Box::new(|_| CellValue::Null),
            sortable: false,
            filterable: false,
        }
    }

    /// Set the human-readable header label.
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Set whether this column participates in sorting.
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Set whether this column participates in filtering.
    pub fn filterable(mut self, filterable: bool) -> Self {
        self.filterable = filterable;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Header label, falling back to the column id when no header string
    /// was set.
    pub fn header_label(&self) -> &str {
        self.header.as_deref().unwrap_or(&self.id)
    }

    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    pub fn is_filterable(&self) -> bool {
        self.filterable
    }

    /// Read this column's value out of a row.
    #[inline]
    pub fn value(&self, row: &T) -> CellValue {
        (self.accessor)(row)
    }
}

impl<T> Debug for ColumnDef<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ColumnDef {{ id: '{}', header: {:?}, sortable: {}, filterable: {} }}",
            self.id, self.header, self.sortable, self.filterable
        )
    }
}

/// Validated, render-ordered collection of column definitions.
///
/// Construction fails fast on duplicate ids. The pin reordering (select
/// first, actions last, everything else in declared order) happens once
/// here, not on every recomputation.
pub struct ColumnSet<T> {
    columns: Vec<ColumnDef<T>>,
}

impl<T> ColumnSet<T> {
    pub fn new(columns: Vec<ColumnDef<T>>) -> Result<Self, GridError> {
        for (i, col) in columns.iter().enumerate() {
            if columns[..i].iter().any(|c| c.id == col.id) {
                return Err(GridError::configuration(format!(
                    "duplicate column id '{}'",
                    col.id
                )));
            }
        }

        let mut select = Vec::new();
        let mut middle = Vec::new();
        let mut actions = Vec::new();
        for col in columns {
            match col.id() {
                SELECT_COLUMN => select.push(col),
                ACTIONS_COLUMN => actions.push(col),
                _ => middle.push(col),
            }
        }
        select.extend(middle);
        select.extend(actions);

        Ok(ColumnSet { columns: select })
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColumnDef<T>> {
        self.columns.iter()
    }

    /// Columns carrying row data, i.e. everything except the pinned
    /// `"select"` and `"actions"` columns. Bulk actions serialize these.
    pub fn data_columns(&self) -> impl Iterator<Item = &ColumnDef<T>> {
        self.columns
            .iter()
            .filter(|c| c.id() != SELECT_COLUMN && c.id() != ACTIONS_COLUMN)
    }

    pub fn by_id(&self, id: &str) -> Option<&ColumnDef<T>> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// Render-order ids, mostly useful for assertions and debugging.
    pub fn ids(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.id()).collect()
    }
}

impl<T> Debug for ColumnSet<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ColumnSet {{ ids: {:?} }}", self.ids())
    }
}
