//! Error types.
//!
//! Only construction and configuration can fail. Interactive operations
//! (sorting, selection, input edits) never return errors; they report
//! whether they applied through `EventResult` or a `bool`.

use thiserror::Error;

/// Error returned when a table is built from an invalid column set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// The column set was empty.
    #[error("a table needs at least one column")]
    NoColumns,
    /// Two columns share the same key.
    #[error("duplicate column key: {0}")]
    DuplicateColumnKey(String),
}

/// Error returned when a widget configuration cannot be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
