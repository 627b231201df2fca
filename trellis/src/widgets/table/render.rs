//! View model construction for the Table widget.

use crate::config::TableConfig;

use super::column::Column;
use super::mode::DisplayMode;
use super::selection::CheckState;
use super::sort::{SortDirection, SortState};
use super::state::{Table, TableInner};

/// Sort indicator shown in a header cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    /// Column is not sortable; no indicator.
    None,
    /// Sortable but not the active column (both chevrons, dimmed).
    Idle,
    Ascending,
    Descending,
}

impl SortIndicator {
    fn for_column<T>(column: &Column<T>, sort: &SortState) -> Self {
        if !column.sortable {
            return SortIndicator::None;
        }
        match sort.direction_of(&column.key) {
            SortDirection::None => SortIndicator::Idle,
            SortDirection::Ascending => SortIndicator::Ascending,
            SortDirection::Descending => SortIndicator::Descending,
        }
    }
}

/// One header cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub key: String,
    pub title: String,
    /// Header clicks trigger sorting.
    pub sortable: bool,
    pub indicator: SortIndicator,
}

/// The header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderRow {
    /// Select-all checkbox, present only on selectable tables.
    pub select: Option<CheckState>,
    pub cells: Vec<HeaderCell>,
}

/// One rendered data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    /// Position in the displayed sequence.
    pub position: usize,
    /// Row checkbox, present only on selectable tables.
    pub selected: Option<bool>,
    /// Cell text, one per column.
    pub cells: Vec<String>,
}

/// What the presentation layer should draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableView {
    Loading {
        message: String,
    },
    Empty {
        title: String,
        description: String,
    },
    Populated {
        header: HeaderRow,
        rows: Vec<RowView>,
    },
}

impl TableView {
    /// The display mode this view was built for.
    pub fn mode(&self) -> DisplayMode {
        match self {
            TableView::Loading { .. } => DisplayMode::Loading,
            TableView::Empty { .. } => DisplayMode::Empty,
            TableView::Populated { .. } => DisplayMode::Populated,
        }
    }

    /// Data rows, empty unless populated.
    pub fn rows(&self) -> &[RowView] {
        match self {
            TableView::Populated { rows, .. } => rows,
            _ => &[],
        }
    }

    /// Header row, if populated.
    pub fn header(&self) -> Option<&HeaderRow> {
        match self {
            TableView::Populated { header, .. } => Some(header),
            _ => None,
        }
    }

    fn empty(config: &TableConfig) -> Self {
        TableView::Empty {
            title: config.empty_title.clone(),
            description: config.empty_description.clone(),
        }
    }
}

/// Default cell renderer: the display form of the cell value, with absent
/// values shown as an empty string.
pub fn default_cell<T>(row: &T, column: &Column<T>) -> String {
    column.value(row).to_string()
}

impl<T: Clone> Table<T> {
    /// Build the view model with the default cell renderer.
    pub fn render(&self) -> TableView {
        self.render_with(default_cell)
    }

    /// Build the view model with a custom cell renderer.
    ///
    /// The displayed rows are copied out and the lock is released before
    /// the renderer runs, so it may call back into the table.
    pub fn render_with<F>(&self, cell: F) -> TableView
    where
        F: Fn(&T, &Column<T>) -> String,
    {
        let snapshot = match self.inner.read() {
            Ok(guard) => Snapshot::take(&guard),
            Err(_) => return TableView::empty(&TableConfig::default()),
        };
        snapshot.into_view(cell)
    }
}

/// Everything a view needs, copied out from under the lock.
enum Snapshot<T> {
    Ready(TableView),
    Populated {
        header: HeaderRow,
        columns: Vec<Column<T>>,
        /// Displayed rows with their checkbox state.
        rows: Vec<(T, Option<bool>)>,
    },
}

impl<T: Clone> Snapshot<T> {
    fn take(inner: &TableInner<T>) -> Self {
        match inner.display_mode() {
            DisplayMode::Loading => Snapshot::Ready(TableView::Loading {
                message: inner.config.loading_message.clone(),
            }),
            DisplayMode::Empty => Snapshot::Ready(TableView::empty(&inner.config)),
            DisplayMode::Populated => {
                let selectable = inner.config.selectable;
                let header = HeaderRow {
                    select: selectable.then(|| inner.summary().check_state()),
                    cells: inner
                        .columns
                        .iter()
                        .map(|col| HeaderCell {
                            key: col.key.clone(),
                            title: col.title.clone(),
                            sortable: col.sortable,
                            indicator: SortIndicator::for_column(col, &inner.sort),
                        })
                        .collect(),
                };
                let rows = inner
                    .displayed_iter()
                    .enumerate()
                    .map(|(position, row)| {
                        (row.clone(), selectable.then(|| inner.is_selected(position)))
                    })
                    .collect();
                Snapshot::Populated {
                    header,
                    columns: inner.columns.clone(),
                    rows,
                }
            }
        }
    }

    fn into_view<F>(self, cell: F) -> TableView
    where
        F: Fn(&T, &Column<T>) -> String,
    {
        match self {
            Snapshot::Ready(view) => view,
            Snapshot::Populated {
                header,
                columns,
                rows,
            } => TableView::Populated {
                header,
                rows: rows
                    .iter()
                    .enumerate()
                    .map(|(position, (row, selected))| RowView {
                        position,
                        selected: *selected,
                        cells: columns.iter().map(|col| cell(row, col)).collect(),
                    })
                    .collect(),
            },
        }
    }
}
