//! Table widget - a data table with tri-state sorting and row selection.
//!
//! The Table widget provides:
//! - Column descriptors that read rows through value accessors
//! - A tri-state sort cycle per column (ascending, descending, unsorted)
//! - A stable, memoized displayed order derived from the sort state
//! - Row selection over the displayed sequence, with all/partial flags
//! - An explicit loading / empty / populated display decision
//!
//! # Selection across re-sorts
//!
//! By default selection is positional: it stores display positions, and a
//! re-sort does not remap them, so the checked positions may then hold
//! different rows. Call [`Table::with_row_key`] to select by row identity
//! instead.
//!
//! # Example
//!
//! ```
//! use trellis::widgets::table::{Column, Table, TableEvent};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Product {
//!     name: &'static str,
//!     price: f64,
//! }
//!
//! let table = Table::with_rows(
//!     vec![
//!         Column::new("name", "Product Name", |p: &Product| p.name).sortable(),
//!         Column::new("price", "Price ($)", |p: &Product| p.price).sortable(),
//!     ],
//!     vec![
//!         Product { name: "Wireless Headphones", price: 99.99 },
//!         Product { name: "Coffee Mug", price: 15.99 },
//!     ],
//! )
//! .unwrap()
//! .selectable();
//!
//! table.handle_event(&TableEvent::HeaderClick("price".into()));
//! table.handle_event(&TableEvent::RowCheck { position: 0, checked: true });
//! assert_eq!(table.selected_rows()[0].name, "Coffee Mug");
//! ```

mod column;
mod events;
mod mode;
mod render;
mod selection;
mod sort;
mod state;
mod value;

pub use column::{Accessor, Column};
pub use events::TableEvent;
pub use mode::DisplayMode;
pub use render::{HeaderCell, HeaderRow, RowView, SortIndicator, TableView, default_cell};
pub use selection::{CheckState, SelectionModel, SelectionSummary};
pub use sort::{SortDirection, SortState, compare_cells, compute_ordering, next_sort_state};
pub use state::{RowKey, SelectionObserver, Table, TableId};
pub use value::CellValue;
