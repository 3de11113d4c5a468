/// Search Adapter Example
///
/// This example demonstrates:
/// - Mirroring a search descriptor into a query store
/// - Driving an async search backend through the adapter
/// - Replacing the grid's input rows with the search result

use async_trait::async_trait;
use gridstate::{
    Applied, CellValue, ColumnDef, ColumnSet, DataGrid, GridError, MatchOp, MemoryQueryStore,
    SearchAdapter, SearchBackend, SearchDescriptor, SearchQuery, TimeRange,
};

#[derive(Debug, Clone)]
struct Customer {
    name: String,
    email: String,
}

/// Stand-in for the remote API: filters a fixed dataset server-side.
struct DirectoryBackend {
    dataset: Vec<Customer>,
}

#[async_trait]
impl SearchBackend<Customer> for DirectoryBackend {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Customer>, GridError> {
        let matched = match &query.value_match {
            Some(vm) => self
                .dataset
                .iter()
                .filter(|c| match vm.column.as_str() {
                    "email" => vm.operator.matches(&CellValue::from(c.email.as_str()), &vm.value),
                    _ => vm.operator.matches(&CellValue::from(c.name.as_str()), &vm.value),
                })
                .cloned()
                .collect(),
            None => self.dataset.clone(),
        };
        Ok(matched)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();

    println!("=== GridState Search Example ===\n");

    let dataset = vec![
        Customer { name: "Alice".into(), email: "alice@example.com".into() },
        Customer { name: "Bob".into(), email: "bob@x.com".into() },
        Customer { name: "Carol".into(), email: "carol@x.com".into() },
    ];

    let columns = ColumnSet::new(vec![
        ColumnDef::new("name", |c: &Customer| CellValue::from(c.name.as_str())),
        ColumnDef::new("email", |c: &Customer| CellValue::from(c.email.as_str())),
    ])
    .unwrap();
    let mut grid = DataGrid::new(dataset.clone(), columns);
    println!("1. Grid starts with {} rows", grid.rows().len());

    let mut adapter = SearchAdapter::new(MemoryQueryStore::new());
    let backend = DirectoryBackend { dataset };

    // 2. Search for x.com addresses within the last month
    let descriptor = SearchDescriptor::new("email", "x.com", MatchOp::Contains)
        .with_time_range(TimeRange::OneMonth);
    match adapter.run(descriptor, &backend).await.unwrap() {
        Applied::Rows(rows) => grid.set_rows(rows),
        other => println!("   unexpected outcome: {:?}", other),
    }
    println!(
        "2. Search applied, URL query: {}",
        adapter.store().to_query_string()
    );
    for customer in grid.visible_rows() {
        println!("   {} <{}>", customer.name, customer.email);
    }

    // 3. Clear the search
    adapter.clear();
    println!(
        "\n3. Cleared. active={}, params left={}",
        adapter.is_search_active(),
        adapter.store().len()
    );
}
