//! Table widget state.

use std::collections::HashSet;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use log::{debug, trace};

use crate::config::TableConfig;
use crate::error::TableError;

use super::column::{Column, check_columns, find_column};
use super::mode::DisplayMode;
use super::selection::{CheckState, Selection, SelectionModel, SelectionSummary};
use super::sort::{SortState, compute_ordering, next_sort_state};

/// Unique identifier for a Table widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableId(usize);

impl TableId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__table_{}", self.0)
    }
}

/// Receives the selected rows after every selection mutation.
pub type SelectionObserver<T> = Arc<dyn Fn(&[T]) + Send + Sync>;

/// Extracts a stable identity from a row, for keyed selection.
pub type RowKey<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// Internal state for the Table widget.
pub(super) struct TableInner<T> {
    /// Column definitions.
    pub columns: Vec<Column<T>>,
    /// The rows in their original order.
    pub rows: Vec<T>,
    pub config: TableConfig,
    pub sort: SortState,
    /// Displayed order: `order[position]` is an index into `rows`.
    /// Recomputed when rows, columns or sort change; reused otherwise.
    pub order: Vec<usize>,
    /// Row keys in displayed order. Empty unless a row key is set.
    pub displayed_keys: Vec<String>,
    pub selection: Selection,
    pub row_key: Option<RowKey<T>>,
    pub on_selection_change: Option<SelectionObserver<T>>,
}

impl<T> TableInner<T> {
    fn new(columns: Vec<Column<T>>, rows: Vec<T>) -> Self {
        let mut inner = Self {
            columns,
            rows,
            config: TableConfig::default(),
            sort: SortState::unsorted(),
            order: Vec::new(),
            displayed_keys: Vec::new(),
            selection: Selection::new(SelectionModel::Positional),
            row_key: None,
            on_selection_change: None,
        };
        inner.refresh_order();
        inner
    }

    fn refresh_order(&mut self) {
        self.order = compute_ordering(&self.rows, &self.columns, &self.sort);
        self.refresh_keys();
    }

    fn refresh_keys(&mut self) {
        let Some(key) = &self.row_key else {
            self.displayed_keys.clear();
            return;
        };
        self.displayed_keys = self
            .order
            .iter()
            .filter_map(|&index| self.rows.get(index))
            .map(|row| key(row))
            .collect();

        let mut seen = HashSet::with_capacity(self.displayed_keys.len());
        if let Some(key) = self.displayed_keys.iter().find(|key| !seen.insert(key.as_str())) {
            debug!("duplicate row key '{}': rows sharing a key are selected together", key);
        }
    }

    pub fn displayed_len(&self) -> usize {
        self.order.len()
    }

    pub fn displayed(&self, position: usize) -> Option<&T> {
        self.order
            .get(position)
            .and_then(|&index| self.rows.get(index))
    }

    pub fn displayed_iter(&self) -> impl Iterator<Item = &T> {
        self.order.iter().filter_map(|&index| self.rows.get(index))
    }

    pub fn selected_positions(&self) -> Vec<usize> {
        self.selection
            .positions(self.displayed_len(), &self.displayed_keys)
    }

    pub fn is_selected(&self, position: usize) -> bool {
        position < self.displayed_len() && self.selection.contains(position, &self.displayed_keys)
    }

    pub fn summary(&self) -> SelectionSummary {
        SelectionSummary {
            selected: self.selected_positions().len(),
            total: self.displayed_len(),
        }
    }

    pub fn display_mode(&self) -> DisplayMode {
        DisplayMode::decide(self.config.loading, self.rows.len())
    }
}

impl<T: Clone> TableInner<T> {
    fn selected_rows(&self) -> Vec<T> {
        self.selected_positions()
            .into_iter()
            .filter_map(|position| self.displayed(position).cloned())
            .collect()
    }

    /// Observer and payload to deliver once the lock is released.
    fn notification(&self) -> Option<(SelectionObserver<T>, Vec<T>)> {
        self.on_selection_change
            .clone()
            .map(|observer| (observer, self.selected_rows()))
    }
}

fn notify<T>(notification: Option<(SelectionObserver<T>, Vec<T>)>) {
    if let Some((observer, rows)) = notification {
        observer(rows.as_slice());
    }
}

/// A data table with tri-state column sorting and row selection.
///
/// `Table<T>` manages:
/// - Column descriptors with value accessors
/// - The rows, and the displayed order derived from the sort state
/// - Row selection over the displayed sequence, with summary flags
/// - The loading / empty / populated display decision
///
/// The handle is cheap to clone; clones share state. Observers run after
/// the internal lock is released, so they may call back into the table.
///
/// # Example
///
/// ```
/// use trellis::widgets::table::{Column, SortDirection, Table};
///
/// #[derive(Clone)]
/// struct User {
///     id: u32,
///     name: &'static str,
/// }
///
/// let table = Table::with_rows(
///     vec![
///         Column::new("id", "ID", |u: &User| u.id),
///         Column::new("name", "Name", |u: &User| u.name).sortable(),
///     ],
///     vec![User { id: 1, name: "Bob" }, User { id: 2, name: "Amy" }],
/// )
/// .unwrap();
///
/// table.request_sort("name");
/// assert_eq!(table.sort_state().direction(), SortDirection::Ascending);
/// let names: Vec<_> = table.displayed_rows().iter().map(|u| u.name).collect();
/// assert_eq!(names, ["Amy", "Bob"]);
/// ```
pub struct Table<T> {
    /// Unique identifier.
    id: TableId,
    /// Internal state.
    pub(super) inner: Arc<RwLock<TableInner<T>>>,
    /// Dirty flag for re-render.
    pub(super) dirty: Arc<AtomicBool>,
}

impl<T: Clone> Table<T> {
    /// Create an empty table with column definitions.
    pub fn new(columns: Vec<Column<T>>) -> Result<Self, TableError> {
        Self::with_rows(columns, Vec::new())
    }

    /// Create a table with initial rows.
    ///
    /// Fails if `columns` is empty or two columns share a key.
    pub fn with_rows(columns: Vec<Column<T>>, rows: Vec<T>) -> Result<Self, TableError> {
        check_columns(&columns)?;
        Ok(Self {
            id: TableId::new(),
            inner: Arc::new(RwLock::new(TableInner::new(columns, rows))),
            dirty: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Apply a configuration.
    pub fn with_config(self, config: TableConfig) -> Self {
        self.set_config(config);
        self
    }

    /// Enable row selection.
    pub fn selectable(self) -> Self {
        self.set_selectable(true);
        self
    }

    /// Track selection by row identity instead of display position.
    ///
    /// The key must be unique per row. Rows that share a key share one
    /// selection entry, so checking one checks all of them. Switching
    /// models clears the current selection.
    pub fn with_row_key<F>(self, key: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        if let Ok(mut guard) = self.inner.write() {
            guard.row_key = Some(Arc::new(key));
            guard.selection = Selection::new(SelectionModel::ByKey);
            guard.refresh_keys();
            self.dirty.store(true, Ordering::SeqCst);
        }
        self
    }

    /// Register the selection-change observer.
    pub fn on_selection_change<F>(self, observer: F) -> Self
    where
        F: Fn(&[T]) + Send + Sync + 'static,
    {
        self.set_on_selection_change(observer);
        self
    }

    /// Get the unique ID.
    pub fn id(&self) -> TableId {
        self.id
    }

    /// Get the ID as a string.
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Configuration
    // -------------------------------------------------------------------------

    /// Get the current configuration.
    pub fn config(&self) -> TableConfig {
        self.inner
            .read()
            .map(|g| g.config.clone())
            .unwrap_or_default()
    }

    /// Replace the configuration.
    pub fn set_config(&self, config: TableConfig) {
        if let Ok(mut guard) = self.inner.write() {
            if !config.selectable {
                guard.selection.clear();
            }
            guard.config = config;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Check if the loading flag is set.
    pub fn is_loading(&self) -> bool {
        self.inner.read().map(|g| g.config.loading).unwrap_or(false)
    }

    /// Set the loading flag.
    pub fn set_loading(&self, loading: bool) {
        if let Ok(mut guard) = self.inner.write()
            && guard.config.loading != loading
        {
            guard.config.loading = loading;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Check if row selection is enabled.
    pub fn is_selectable(&self) -> bool {
        self.inner
            .read()
            .map(|g| g.config.selectable)
            .unwrap_or(false)
    }

    /// Enable or disable row selection. Disabling clears the selection.
    pub fn set_selectable(&self, selectable: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.config.selectable = selectable;
            if !selectable {
                guard.selection.clear();
            }
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Get the selection model.
    pub fn selection_model(&self) -> SelectionModel {
        self.inner
            .read()
            .map(|g| g.selection.model())
            .unwrap_or_default()
    }

    /// Replace the selection-change observer.
    pub fn set_on_selection_change<F>(&self, observer: F)
    where
        F: Fn(&[T]) + Send + Sync + 'static,
    {
        if let Ok(mut guard) = self.inner.write() {
            guard.on_selection_change = Some(Arc::new(observer));
        }
    }

    /// Remove the selection-change observer.
    pub fn clear_on_selection_change(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.on_selection_change = None;
        }
    }

    // -------------------------------------------------------------------------
    // Columns
    // -------------------------------------------------------------------------

    /// Get the column definitions.
    pub fn columns(&self) -> Vec<Column<T>> {
        self.inner
            .read()
            .map(|g| g.columns.clone())
            .unwrap_or_default()
    }

    /// Get a column by key.
    pub fn column(&self, key: &str) -> Option<Column<T>> {
        self.inner
            .read()
            .ok()
            .and_then(|g| find_column(&g.columns, key).cloned())
    }

    /// Replace the column definitions.
    ///
    /// If the active sort column is gone or no longer sortable, the sort is
    /// reset.
    pub fn set_columns(&self, columns: Vec<Column<T>>) -> Result<(), TableError> {
        check_columns(&columns)?;
        if let Ok(mut guard) = self.inner.write() {
            let sort_survives = guard
                .sort
                .column()
                .is_none_or(|key| find_column(&columns, key).is_some_and(|c| c.sortable));
            if !sort_survives {
                debug!("{}: active sort column removed, resetting sort", self.id);
                guard.sort = SortState::unsorted();
            }
            guard.columns = columns;
            guard.refresh_order();
            self.dirty.store(true, Ordering::SeqCst);
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Rows
    // -------------------------------------------------------------------------

    /// Get the number of rows.
    pub fn len(&self) -> usize {
        self.inner.read().map(|g| g.rows.len()).unwrap_or(0)
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get all rows in their original order.
    pub fn rows(&self) -> Vec<T> {
        self.inner
            .read()
            .map(|g| g.rows.clone())
            .unwrap_or_default()
    }

    /// Replace all rows.
    ///
    /// The sort state is kept and re-applied. Positional selection is
    /// cleared; keyed selection keeps the keys that are still present.
    /// No selection notification is sent.
    pub fn set_rows(&self, rows: Vec<T>) {
        if let Ok(mut guard) = self.inner.write() {
            debug!("{}: replacing rows ({} -> {})", self.id, guard.rows.len(), rows.len());
            guard.rows = rows;
            guard.refresh_order();
            let inner = &mut *guard;
            inner.selection.rows_replaced(&inner.displayed_keys);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Get the rows in displayed (sorted) order.
    pub fn displayed_rows(&self) -> Vec<T> {
        self.inner
            .read()
            .map(|g| g.displayed_iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Get the row shown at a display position.
    pub fn displayed_row(&self, position: usize) -> Option<T> {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.displayed(position).cloned())
    }

    /// Get the displayed order as indices into [`rows`](Self::rows).
    pub fn ordering(&self) -> Vec<usize> {
        self.inner
            .read()
            .map(|g| g.order.clone())
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Get the current sort state.
    pub fn sort_state(&self) -> SortState {
        self.inner
            .read()
            .map(|g| g.sort.clone())
            .unwrap_or_default()
    }

    /// Advance the sort cycle for a column.
    ///
    /// On the active column: ascending, then descending, then unsorted.
    /// On any other sortable column: ascending on that column.
    /// Returns the new state, or `None` if the key is unknown or the
    /// column is not sortable (the state is left unchanged).
    ///
    /// Selection is not remapped in the positional model.
    pub fn request_sort(&self, key: &str) -> Option<SortState> {
        let Ok(mut guard) = self.inner.write() else {
            return None;
        };
        let Some(next) = next_sort_state(&guard.sort, &guard.columns, key) else {
            debug!("{}: ignoring sort request for column '{}'", self.id, key);
            return None;
        };
        debug!(
            "{}: sort {:?}/{:?} -> {:?}/{:?}",
            self.id,
            guard.sort.column(),
            guard.sort.direction(),
            next.column(),
            next.direction()
        );
        guard.sort = next.clone();
        guard.refresh_order();
        self.dirty.store(true, Ordering::SeqCst);
        Some(next)
    }

    /// Clear the sort state, restoring the original row order.
    pub fn clear_sort(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.sort.is_sorted()
        {
            guard.sort = SortState::unsorted();
            guard.refresh_order();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Check or uncheck the row at a display position.
    ///
    /// Notifies the observer with the selected rows, in ascending position
    /// order. Returns `false` (and does nothing) if the table is not
    /// selectable or the position is out of range.
    pub fn toggle_row(&self, position: usize, checked: bool) -> bool {
        let notification = {
            let Ok(mut guard) = self.inner.write() else {
                return false;
            };
            if !guard.config.selectable {
                trace!("{}: not selectable, ignoring row toggle", self.id);
                return false;
            }
            if position >= guard.displayed_len() {
                debug!(
                    "{}: ignoring toggle of position {} ({} rows)",
                    self.id,
                    position,
                    guard.displayed_len()
                );
                return false;
            }
            let inner = &mut *guard;
            inner
                .selection
                .set(position, checked, &inner.displayed_keys);
            trace!("{}: row {} checked={}", self.id, position, checked);
            self.dirty.store(true, Ordering::SeqCst);
            guard.notification()
        };
        notify(notification);
        true
    }

    /// Check every displayed row, or clear the selection.
    ///
    /// Notifies the observer with the full displayed sequence or an empty
    /// one. Returns `false` if the table is not selectable.
    pub fn toggle_all(&self, checked: bool) -> bool {
        let notification = {
            let Ok(mut guard) = self.inner.write() else {
                return false;
            };
            if !guard.config.selectable {
                trace!("{}: not selectable, ignoring toggle all", self.id);
                return false;
            }
            if checked {
                let len = guard.displayed_len();
                let inner = &mut *guard;
                inner.selection.select_all(len, &inner.displayed_keys);
            } else {
                guard.selection.clear();
            }
            trace!("{}: all rows checked={}", self.id, checked);
            self.dirty.store(true, Ordering::SeqCst);
            guard.notification()
        };
        notify(notification);
        true
    }

    /// Get the selected display positions, ascending.
    pub fn selected_positions(&self) -> Vec<usize> {
        self.inner
            .read()
            .map(|g| g.selected_positions())
            .unwrap_or_default()
    }

    /// Get the selected rows, in ascending position order.
    pub fn selected_rows(&self) -> Vec<T> {
        self.inner
            .read()
            .map(|g| g.selected_rows())
            .unwrap_or_default()
    }

    /// Check if the row at a display position is selected.
    pub fn is_selected(&self, position: usize) -> bool {
        self.inner
            .read()
            .map(|g| g.is_selected(position))
            .unwrap_or(false)
    }

    /// Get the selection counts.
    pub fn selection_summary(&self) -> SelectionSummary {
        self.inner
            .read()
            .map(|g| g.summary())
            .unwrap_or_default()
    }

    /// Every displayed row is selected, and there is at least one.
    pub fn all_selected(&self) -> bool {
        self.selection_summary().all_selected()
    }

    /// Some but not all displayed rows are selected.
    pub fn partially_selected(&self) -> bool {
        self.selection_summary().partially_selected()
    }

    /// The select-all header checkbox value.
    pub fn header_check_state(&self) -> CheckState {
        self.selection_summary().check_state()
    }

    // -------------------------------------------------------------------------
    // Display mode
    // -------------------------------------------------------------------------

    /// Decide how the table renders right now.
    pub fn display_mode(&self) -> DisplayMode {
        self.inner
            .read()
            .map(|g| g.display_mode())
            .unwrap_or(DisplayMode::Empty)
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the table has changed.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl<T> Clone for Table<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl<T> fmt::Debug for Table<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Table");
        s.field("id", &self.id);
        if let Ok(guard) = self.inner.read() {
            s.field("columns", &guard.columns)
                .field("rows", &guard.rows.len())
                .field("sort", &guard.sort)
                .field("config", &guard.config);
        }
        s.finish_non_exhaustive()
    }
}
