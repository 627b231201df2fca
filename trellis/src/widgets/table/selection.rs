//! Selection tracker for the displayed row sequence.

use std::collections::{BTreeSet, HashSet};

/// How selection membership is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionModel {
    /// Selection stores display positions. Re-sorting keeps the positions,
    /// so the checked rows can change identity.
    #[default]
    Positional,
    /// Selection stores row keys. Re-sorting keeps the same logical rows
    /// checked. Requires a row-key accessor on the table.
    ByKey,
}

/// Tri-state checkbox value for the select-all header cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Unchecked,
    Checked,
    Indeterminate,
}

/// Counts from which the selection flags are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionSummary {
    /// Number of selected rows in the displayed sequence.
    pub selected: usize,
    /// Length of the displayed sequence.
    pub total: usize,
}

impl SelectionSummary {
    /// Every displayed row is selected, and there is at least one.
    pub fn all_selected(&self) -> bool {
        self.total > 0 && self.selected == self.total
    }

    /// Some but not all displayed rows are selected.
    pub fn partially_selected(&self) -> bool {
        self.selected > 0 && self.selected < self.total
    }

    /// The header checkbox value.
    pub fn check_state(&self) -> CheckState {
        if self.all_selected() {
            CheckState::Checked
        } else if self.partially_selected() {
            CheckState::Indeterminate
        } else {
            CheckState::Unchecked
        }
    }
}

/// Selection membership.
///
/// Keyed operations take `keys`, the row keys in displayed order. In the
/// positional model `keys` is unused and may be empty.
#[derive(Debug, Clone)]
pub(crate) enum Selection {
    Positional(BTreeSet<usize>),
    Keyed(HashSet<String>),
}

impl Selection {
    pub fn new(model: SelectionModel) -> Self {
        match model {
            SelectionModel::Positional => Selection::Positional(BTreeSet::new()),
            SelectionModel::ByKey => Selection::Keyed(HashSet::new()),
        }
    }

    pub fn model(&self) -> SelectionModel {
        match self {
            Selection::Positional(_) => SelectionModel::Positional,
            Selection::Keyed(_) => SelectionModel::ByKey,
        }
    }

    /// Set membership of the row at `position`.
    /// Returns true if the set changed.
    pub fn set(&mut self, position: usize, checked: bool, keys: &[String]) -> bool {
        match self {
            Selection::Positional(positions) => {
                if checked {
                    positions.insert(position)
                } else {
                    positions.remove(&position)
                }
            }
            Selection::Keyed(selected) => {
                let Some(key) = keys.get(position) else {
                    return false;
                };
                if checked {
                    selected.insert(key.clone())
                } else {
                    selected.remove(key)
                }
            }
        }
    }

    /// Select every displayed row.
    pub fn select_all(&mut self, len: usize, keys: &[String]) {
        match self {
            Selection::Positional(positions) => {
                *positions = (0..len).collect();
            }
            Selection::Keyed(selected) => {
                *selected = keys.iter().cloned().collect();
            }
        }
    }

    pub fn clear(&mut self) {
        match self {
            Selection::Positional(positions) => positions.clear(),
            Selection::Keyed(selected) => selected.clear(),
        }
    }

    /// Called after the rows were replaced. Positions no longer refer to
    /// anything meaningful and are dropped; keys survive if their row does.
    pub fn rows_replaced(&mut self, keys: &[String]) {
        match self {
            Selection::Positional(positions) => positions.clear(),
            Selection::Keyed(selected) => {
                let present: HashSet<&str> = keys.iter().map(String::as_str).collect();
                selected.retain(|key| present.contains(key.as_str()));
            }
        }
    }

    /// Selected positions within a displayed sequence of `len` rows, in
    /// ascending order.
    pub fn positions(&self, len: usize, keys: &[String]) -> Vec<usize> {
        match self {
            Selection::Positional(positions) => {
                positions.range(..len).copied().collect()
            }
            Selection::Keyed(selected) => keys
                .iter()
                .take(len)
                .enumerate()
                .filter(|(_, key)| selected.contains(*key))
                .map(|(position, _)| position)
                .collect(),
        }
    }

    pub fn contains(&self, position: usize, keys: &[String]) -> bool {
        match self {
            Selection::Positional(positions) => positions.contains(&position),
            Selection::Keyed(selected) => keys
                .get(position)
                .is_some_and(|key| selected.contains(key)),
        }
    }
}
