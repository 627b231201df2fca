//! Column descriptors.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::error::TableError;

use super::value::CellValue;

/// Extracts the raw cell value of a column from a row.
pub type Accessor<T> = Arc<dyn Fn(&T) -> CellValue + Send + Sync>;

/// Column configuration.
///
/// A column only sees a row through its accessor. The table never inspects
/// the row type beyond what accessors return.
///
/// # Examples
///
/// ```
/// use trellis::widgets::table::Column;
///
/// struct User {
///     id: u32,
///     name: String,
///     nickname: Option<String>,
/// }
///
/// let columns = vec![
///     Column::new("id", "ID", |u: &User| u.id).sortable(),
///     Column::new("name", "Name", |u: &User| u.name.clone()).sortable(),
///     Column::new("nickname", "Nickname", |u: &User| u.nickname.clone()),
/// ];
/// assert!(columns[0].sortable);
/// assert!(!columns[2].sortable);
/// ```
pub struct Column<T> {
    /// Unique key identifying this column within one table.
    pub key: String,
    /// Header text.
    pub title: String,
    /// Whether header interaction sorts by this column.
    pub sortable: bool,
    accessor: Accessor<T>,
}

impl<T> Column<T> {
    /// Create a new, non-sortable column.
    pub fn new<F, V>(key: impl Into<String>, title: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&T) -> V + Send + Sync + 'static,
        V: Into<CellValue>,
    {
        Self {
            key: key.into(),
            title: title.into(),
            sortable: false,
            accessor: Arc::new(move |row: &T| accessor(row).into()),
        }
    }

    /// Make the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Set whether the column is sortable.
    pub fn with_sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Extract this column's value from a row.
    pub fn value(&self, row: &T) -> CellValue {
        (self.accessor)(row)
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            title: self.title.clone(),
            sortable: self.sortable,
            accessor: Arc::clone(&self.accessor),
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("sortable", &self.sortable)
            .finish_non_exhaustive()
    }
}

/// Find a column by key.
pub(crate) fn find_column<'a, T>(columns: &'a [Column<T>], key: &str) -> Option<&'a Column<T>> {
    columns.iter().find(|col| col.key == key)
}

/// Check that a column set is non-empty and its keys are unique.
pub(crate) fn check_columns<T>(columns: &[Column<T>]) -> Result<(), TableError> {
    if columns.is_empty() {
        return Err(TableError::NoColumns);
    }
    let mut seen = HashSet::with_capacity(columns.len());
    for col in columns {
        if !seen.insert(col.key.as_str()) {
            return Err(TableError::DuplicateColumnKey(col.key.clone()));
        }
    }
    Ok(())
}
