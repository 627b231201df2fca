//! Sort engine: the tri-state sort cycle and the derived row ordering.

use std::cmp::Ordering;

use super::column::{Column, find_column};
use super::value::CellValue;

/// Sort direction of the active column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// No sorting; rows keep their original order.
    #[default]
    None,
    /// Ascending order (A-Z, 0-9).
    Ascending,
    /// Descending order (Z-A, 9-0).
    Descending,
}

impl SortDirection {
    /// Next direction in the cycle `None -> Ascending -> Descending -> None`.
    pub fn next(self) -> Self {
        match self {
            SortDirection::None => SortDirection::Ascending,
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::None,
        }
    }

    /// Returns `true` for `Ascending` and `Descending`.
    pub fn is_active(self) -> bool {
        self != SortDirection::None
    }
}

/// Which column is sorted, and in which direction.
///
/// The active column is set iff the direction is not `None`. The fields are
/// private so the pair can only change through the sort cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortState {
    column: Option<String>,
    direction: SortDirection,
}

impl SortState {
    /// The unsorted state.
    pub fn unsorted() -> Self {
        Self::default()
    }

    /// Key of the active column, if any.
    pub fn column(&self) -> Option<&str> {
        self.column.as_deref()
    }

    /// Current direction.
    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Returns `true` if a column is active.
    pub fn is_sorted(&self) -> bool {
        self.column.is_some()
    }

    /// Direction for a given column (`None` unless it is the active one).
    pub fn direction_of(&self, key: &str) -> SortDirection {
        match self.column.as_deref() {
            Some(active) if active == key => self.direction,
            _ => SortDirection::None,
        }
    }

    /// Advance the cycle for `key`.
    ///
    /// On the active column the direction moves one step and the column is
    /// released on reaching `None`. Any other column becomes active,
    /// ascending, replacing the previous one.
    fn advance(&self, key: &str) -> Self {
        if self.column.as_deref() == Some(key) {
            match self.direction.next() {
                SortDirection::None => Self::unsorted(),
                direction => Self {
                    column: Some(key.to_string()),
                    direction,
                },
            }
        } else {
            Self {
                column: Some(key.to_string()),
                direction: SortDirection::Ascending,
            }
        }
    }
}

/// Compute the sort state after a header interaction on `key`.
///
/// Returns `None` when the key is unknown or the column is not sortable;
/// in that case the state must stay unchanged.
pub fn next_sort_state<T>(
    state: &SortState,
    columns: &[Column<T>],
    key: &str,
) -> Option<SortState> {
    let column = find_column(columns, key)?;
    if !column.sortable {
        return None;
    }
    Some(state.advance(key))
}

/// Compare two cell values for the given direction.
///
/// Absent values sort last in both directions. Present values use their
/// natural order, and `Descending` is the exact inverse of `Ascending`.
pub fn compare_cells(a: &CellValue, b: &CellValue, direction: SortDirection) -> Ordering {
    match (a.is_absent(), b.is_absent()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let ordering = a.natural_cmp(b);
            if direction == SortDirection::Descending {
                ordering.reverse()
            } else {
                ordering
            }
        }
    }
}

/// Derive the displayed order of `rows` for a sort state.
///
/// Returns a permutation of row indices: `order[position]` is the index in
/// `rows` of the row displayed at `position`. With no active sort (or an
/// active column missing from `columns`) this is the identity. The sort is
/// stable, so rows with equal values keep their original relative order in
/// both directions.
pub fn compute_ordering<T>(rows: &[T], columns: &[Column<T>], sort: &SortState) -> Vec<usize> {
    let identity = || (0..rows.len()).collect::<Vec<_>>();

    if !sort.direction.is_active() {
        return identity();
    }
    let Some(column) = sort.column().and_then(|key| find_column(columns, key)) else {
        return identity();
    };

    let mut keyed: Vec<(usize, CellValue)> = rows
        .iter()
        .enumerate()
        .map(|(index, row)| (index, column.value(row)))
        .collect();
    keyed.sort_by(|a, b| compare_cells(&a.1, &b.1, sort.direction));
    keyed.into_iter().map(|(index, _)| index).collect()
}
