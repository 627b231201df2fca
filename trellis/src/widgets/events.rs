//! Shared event result type.

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored; the widget state did not change.
    Ignored,
    /// Event was consumed and applied.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }

    pub(crate) fn from_applied(applied: bool) -> Self {
        if applied {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }
}
