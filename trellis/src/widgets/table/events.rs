//! Event handling for the Table widget.

use log::debug;

use crate::widgets::events::EventResult;

use super::state::Table;

/// A user interaction with a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    /// A header cell was clicked.
    HeaderClick(String),
    /// A row checkbox changed.
    RowCheck { position: usize, checked: bool },
    /// The select-all checkbox changed.
    AllCheck(bool),
}

impl<T: Clone> Table<T> {
    /// Dispatch an interaction to the matching operation.
    pub fn handle_event(&self, event: &TableEvent) -> EventResult {
        match event {
            TableEvent::HeaderClick(key) => self.on_header_click(key),
            TableEvent::RowCheck { position, checked } => self.on_row_check(*position, *checked),
            TableEvent::AllCheck(checked) => self.on_all_check(*checked),
        }
    }

    /// Handle header click for sorting.
    ///
    /// Clicks on unknown or non-sortable columns are ignored.
    pub fn on_header_click(&self, key: &str) -> EventResult {
        EventResult::from_applied(self.request_sort(key).is_some())
    }

    /// Handle a row checkbox change.
    pub fn on_row_check(&self, position: usize, checked: bool) -> EventResult {
        EventResult::from_applied(self.toggle_row(position, checked))
    }

    /// Handle a select-all checkbox change.
    pub fn on_all_check(&self, checked: bool) -> EventResult {
        let result = EventResult::from_applied(self.toggle_all(checked));
        if !result.is_handled() {
            debug!("{}: select-all ignored", self.id());
        }
        result
    }
}
