use std::sync::{Arc, Mutex};

use trellis::widgets::table::{CheckState, Column, SelectionModel, Table};

#[derive(Debug, Clone, PartialEq)]
struct User {
    id: u32,
    name: &'static str,
}

fn users() -> Vec<User> {
    vec![
        User { id: 1, name: "Carol" },
        User { id: 2, name: "Alice" },
        User { id: 3, name: "Bob" },
    ]
}

fn columns() -> Vec<Column<User>> {
    vec![
        Column::new("id", "ID", |u: &User| u.id).sortable(),
        Column::new("name", "Name", |u: &User| u.name).sortable(),
    ]
}

/// A selectable table that records every notification.
fn recording_table() -> (Table<User>, Arc<Mutex<Vec<Vec<u32>>>>) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    let table = Table::with_rows(columns(), users())
        .unwrap()
        .selectable()
        .on_selection_change(move |rows: &[User]| {
            sink.lock().unwrap().push(rows.iter().map(|u| u.id).collect());
        });
    (table, calls)
}

#[test]
fn test_toggle_row_notifies_in_position_order() {
    let (table, calls) = recording_table();

    assert!(table.toggle_row(2, true));
    assert!(table.toggle_row(0, true));

    assert_eq!(table.selected_positions(), vec![0, 2]);
    assert_eq!(*calls.lock().unwrap(), vec![vec![3], vec![1, 3]]);
}

#[test]
fn test_uncheck_removes_row() {
    let (table, calls) = recording_table();
    table.toggle_row(1, true);
    table.toggle_row(1, false);

    assert!(table.selected_positions().is_empty());
    assert_eq!(calls.lock().unwrap().last(), Some(&vec![]));
}

#[test]
fn test_summary_flags() {
    let (table, _) = recording_table();
    assert!(!table.all_selected());
    assert!(!table.partially_selected());
    assert_eq!(table.header_check_state(), CheckState::Unchecked);

    table.toggle_row(0, true);
    assert!(!table.all_selected());
    assert!(table.partially_selected());
    assert_eq!(table.header_check_state(), CheckState::Indeterminate);

    table.toggle_row(1, true);
    table.toggle_row(2, true);
    assert!(table.all_selected());
    assert!(!table.partially_selected());
    assert_eq!(table.header_check_state(), CheckState::Checked);

    let summary = table.selection_summary();
    assert_eq!(summary.selected, 3);
    assert_eq!(summary.total, 3);
}

#[test]
fn test_empty_table_is_never_all_selected() {
    let table = Table::new(columns()).unwrap().selectable();
    assert!(table.toggle_all(true));
    assert!(!table.all_selected());
    assert!(!table.partially_selected());
}

#[test]
fn test_select_all_then_none_round_trip() {
    let (table, calls) = recording_table();

    assert!(table.toggle_all(true));
    assert!(table.all_selected());
    assert!(table.toggle_all(false));
    assert!(table.selected_positions().is_empty());

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], vec![1, 2, 3]);
    assert!(calls[1].is_empty());
}

#[test]
fn test_out_of_range_position_is_ignored() {
    let (table, calls) = recording_table();

    assert!(!table.toggle_row(3, true));
    assert!(!table.toggle_row(99, true));

    assert!(table.selected_positions().is_empty());
    assert!(calls.lock().unwrap().is_empty());
}

#[test]
fn test_not_selectable_ignores_toggles() {
    let calls = Arc::new(Mutex::new(0));
    let sink = Arc::clone(&calls);
    let table = Table::with_rows(columns(), users())
        .unwrap()
        .on_selection_change(move |_: &[User]| *sink.lock().unwrap() += 1);

    assert!(!table.toggle_row(0, true));
    assert!(!table.toggle_all(true));
    assert!(table.selected_positions().is_empty());
    assert_eq!(*calls.lock().unwrap(), 0);
}

#[test]
fn test_disabling_selection_clears_it() {
    let (table, _) = recording_table();
    table.toggle_all(true);
    table.set_selectable(false);
    table.set_selectable(true);
    assert!(table.selected_positions().is_empty());
}

#[test]
fn test_positional_selection_is_not_remapped_on_sort() {
    let (table, _) = recording_table();
    assert_eq!(table.selection_model(), SelectionModel::Positional);

    // Position 0 is Carol in the original order.
    table.toggle_row(0, true);
    assert_eq!(table.selected_rows()[0].name, "Carol");

    // After sorting by name, position 0 holds Alice.
    table.request_sort("name");
    assert_eq!(table.selected_positions(), vec![0]);
    assert_eq!(table.selected_rows()[0].name, "Alice");
}

#[test]
fn test_keyed_selection_follows_rows_across_sort() {
    let table = Table::with_rows(columns(), users())
        .unwrap()
        .selectable()
        .with_row_key(|u: &User| u.id.to_string());
    assert_eq!(table.selection_model(), SelectionModel::ByKey);

    table.toggle_row(0, true);
    table.request_sort("name");

    // Carol moved to the last position and stays selected.
    assert_eq!(table.selected_positions(), vec![2]);
    assert_eq!(table.selected_rows()[0].name, "Carol");
}

#[test]
fn test_set_rows_clears_positional_selection() {
    let (table, calls) = recording_table();
    table.toggle_row(0, true);
    let before = calls.lock().unwrap().len();

    table.set_rows(users());
    assert!(table.selected_positions().is_empty());
    assert_eq!(calls.lock().unwrap().len(), before);
}

#[test]
fn test_set_rows_keeps_surviving_keys() {
    let table = Table::with_rows(columns(), users())
        .unwrap()
        .selectable()
        .with_row_key(|u: &User| u.id.to_string());
    table.toggle_all(true);

    table.set_rows(vec![
        User { id: 3, name: "Bob" },
        User { id: 4, name: "Dave" },
    ]);
    let ids: Vec<_> = table.selected_rows().iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![3]);
    assert!(table.partially_selected());
}

#[test]
fn test_observer_can_read_table() {
    let seen = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&seen);
    let table = Table::with_rows(columns(), users()).unwrap().selectable();
    let handle = table.clone();
    table.set_on_selection_change(move |_: &[User]| {
        *sink.lock().unwrap() = Some(handle.selection_summary().selected);
    });

    table.toggle_row(1, true);
    assert_eq!(*seen.lock().unwrap(), Some(1));
}

#[test]
fn test_rows_sharing_a_key_are_selected_together() {
    let table = Table::with_rows(
        columns(),
        vec![User { id: 1, name: "Bob" }, User { id: 1, name: "Amy" }, User { id: 2, name: "Cy" }],
    )
    .unwrap()
    .selectable()
    .with_row_key(|u: &User| u.id.to_string());

    table.toggle_row(0, true);
    assert_eq!(table.selected_positions(), vec![0, 1]);
    assert!(table.partially_selected());
}
