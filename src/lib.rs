/// GridState - Headless Data Table Engine
///
/// A headless data table engine for admin-style interfaces: callers own
/// rendering entirely, the crate owns column modelling, deterministic
/// derivation of the visible row window (filter, sort, paginate),
/// reducer-style interaction state, row selection, bulk actions over the
/// selected subset, and a query-parameter-backed search adapter.

pub mod actions;
pub mod column;
pub mod engine;
pub mod error;
pub mod search;
pub mod state;
pub mod value;

pub use actions::{export, export_csv, print, print_document, share, share_payload, Host, Outcome, EXPORT_FILENAME};
pub use column::{ColumnDef, ColumnSet, ACTIONS_COLUMN, SELECT_COLUMN};
pub use engine::{compute, DataGrid, Snapshot};
pub use error::GridError;
pub use search::{
    build_query, Applied, Begin, MemoryQueryStore, ParamNames, QueryStore, SearchAdapter,
    SearchBackend, SearchDescriptor, SearchPhase, SearchQuery, SearchTicket, TimeRange, ValueMatch,
};
pub use state::{
    Action, Filter, FilterSet, PageWindow, Pagination, Selection, SortKey, SortOrder, TableState,
    DEFAULT_PAGE_SIZES,
};
pub use value::{CellValue, MatchOp};

#[cfg(test)]
mod integration_tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[derive(Debug, Clone)]
    struct Order {
        id: i32,
        customer: String,
        total: f64,
        placed_at: chrono::DateTime<Utc>,
    }

    fn orders() -> Vec<Order> {
        let customers = ["Alice", "Bob", "Carol"];
        (0..30)
            .map(|i| Order {
                id: i + 1,
                customer: customers[i as usize % 3].to_string(),
                total: 10.0 * (i + 1) as f64,
                placed_at: Utc.with_ymd_and_hms(2024, 1 + (i as u32 % 12), 1, 0, 0, 0).unwrap(),
            })
            .collect()
    }

    fn order_columns() -> ColumnSet<Order> {
        ColumnSet::new(vec![
            ColumnDef::display_only(SELECT_COLUMN),
            ColumnDef::new("id", |o: &Order| CellValue::Int32(o.id)).with_header("Order #"),
            ColumnDef::new("customer", |o: &Order| CellValue::from(o.customer.as_str())),
            ColumnDef::new("total", |o: &Order| CellValue::Float64(o.total)),
            ColumnDef::new("placed_at", |o: &Order| CellValue::DateTime(o.placed_at)),
            ColumnDef::display_only(ACTIONS_COLUMN),
        ])
        .unwrap()
    }

    #[test]
    fn test_complete_workflow() {
        let mut grid = DataGrid::new(orders(), order_columns());

        // Pinned columns render select-first, actions-last
        assert_eq!(
            grid.columns().ids(),
            vec!["select", "id", "customer", "total", "placed_at", "actions"]
        );

        // Filter to one customer, sort by total descending
        grid.dispatch(Action::SetFilter(
            "customer".into(),
            Some(Filter::equals("Alice")),
        ))
        .unwrap();
        grid.dispatch(Action::SetSort("total".into(), SortOrder::Descending))
            .unwrap();

        assert_eq!(grid.snapshot().filtered_len(), 10);
        let first = grid.visible_rows()[0].clone();
        assert_eq!(first.total, 280.0); // highest Alice total

        // Select everything visible and export
        grid.dispatch(Action::ToggleAllOnPage).unwrap();
        let selected = grid.selected_rows();
        assert_eq!(selected.len(), 10);

        let csv = export_csv(&selected, grid.columns());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "\"Order #\",\"customer\",\"total\",\"placed_at\"");
        for line in &lines[1..] {
            assert!(line.contains("\"Alice\""));
        }

        // Search replaces the grid's input rows
        let mut adapter = SearchAdapter::new(MemoryQueryStore::new());
        let ticket = match adapter.begin_search(SearchDescriptor::new(
            "customer",
            "Bob",
            MatchOp::Eq,
        )) {
            Begin::Pending { ticket, .. } => ticket,
            Begin::Cleared => panic!("expected pending search"),
        };
        let result: Vec<Order> = orders()
            .into_iter()
            .filter(|o| o.customer == "Bob")
            .collect();
        match adapter.apply_result(ticket, Ok(result)).unwrap() {
            Applied::Rows(rows) => grid.set_rows(rows),
            other => panic!("unexpected outcome: {:?}", other),
        }

        assert!(adapter.is_search_active());
        // Old filter still applies to the new rows: no Alice among Bobs
        assert_eq!(grid.snapshot().filtered_len(), 0);
        grid.dispatch(Action::SetFilter("customer".into(), None)).unwrap();
        assert_eq!(grid.snapshot().filtered_len(), 10);

        // Clearing the search empties the query store again
        adapter.clear();
        assert!(!adapter.is_search_active());
        assert!(adapter.store().is_empty());
    }

    #[test]
    fn test_pagination_workflow() {
        let mut grid = DataGrid::new(orders(), order_columns());
        assert_eq!(grid.snapshot().page_count(), 3);

        grid.dispatch(Action::SetPageIndex(2)).unwrap();
        assert_eq!(grid.visible_rows().len(), 10);

        // Requesting past the end clamps to the last page
        grid.dispatch(Action::SetPageIndex(99)).unwrap();
        assert_eq!(grid.snapshot().page_index(), 2);

        grid.dispatch(Action::SetPageSize(25)).unwrap();
        assert_eq!(grid.snapshot().page_index(), 0);
        assert_eq!(grid.snapshot().page_count(), 2);

        let window = grid.page_window();
        assert_eq!(window.pages, vec![1, 2]);
        assert!(!window.jump_back);
        assert!(!window.jump_forward);
    }
}
