/// Basic Grid Example
///
/// This example demonstrates:
/// - Declaring a column model over a plain row type
/// - Filtering, sorting and paging through actions
/// - Selecting rows and exporting them as CSV

use gridstate::{
    export_csv, Action, CellValue, ColumnDef, ColumnSet, DataGrid, Filter, ACTIONS_COLUMN,
    SELECT_COLUMN,
};

struct Booking {
    id: i32,
    customer: &'static str,
    service: &'static str,
    price: f64,
}

fn main() {
    env_logger::init();

    println!("=== GridState Basic Grid Example ===\n");

    // 1. Declare the column model
    println!("1. Declaring columns...");
    let columns = ColumnSet::new(vec![
        ColumnDef::display_only(SELECT_COLUMN),
        ColumnDef::new("id", |b: &Booking| CellValue::Int32(b.id)).with_header("Booking #"),
        ColumnDef::new("customer", |b: &Booking| CellValue::from(b.customer)),
        ColumnDef::new("service", |b: &Booking| CellValue::from(b.service)),
        ColumnDef::new("price", |b: &Booking| CellValue::Float64(b.price)),
        ColumnDef::display_only(ACTIONS_COLUMN),
    ])
    .unwrap();
    println!("   Render order: {:?}\n", columns.ids());

    // 2. Build the grid over an in-memory row set
    let services = ["haircut", "manicure", "massage"];
    let customers = ["Alice", "Bob", "Carol", "Dave"];
    let rows: Vec<Booking> = (0..40)
        .map(|i| Booking {
            id: i + 1,
            customer: customers[i as usize % 4],
            service: services[i as usize % 3],
            price: 15.0 + (i % 7) as f64 * 5.0,
        })
        .collect();
    let mut grid = DataGrid::new(rows, columns);
    println!(
        "2. Grid created: {} rows, {} pages\n",
        grid.rows().len(),
        grid.snapshot().page_count()
    );

    // 3. Filter and sort
    println!("3. Filtering to massages, sorting by price descending...");
    grid.dispatch(Action::SetFilter(
        "service".into(),
        Some(Filter::equals("massage")),
    ))
    .unwrap();
    grid.dispatch(Action::ToggleSort("price".into())).unwrap();
    grid.dispatch(Action::ToggleSort("price".into())).unwrap(); // second toggle: descending

    for booking in grid.visible_rows() {
        println!(
            "   #{:<3} {:<6} {:<10} {:>6.2}",
            booking.id, booking.customer, booking.service, booking.price
        );
    }
    println!();

    // 4. Select the visible page and export it
    println!("4. Selecting the page and exporting...");
    grid.dispatch(Action::ToggleAllOnPage).unwrap();
    let selected = grid.selected_rows();
    let csv = export_csv(&selected, grid.columns());
    println!("{}", csv);
}
