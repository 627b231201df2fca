//! Display mode decision.

/// The three mutually exclusive ways a table renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// A progress indicator; no header, no body.
    Loading,
    /// An empty-state message; no header.
    Empty,
    /// Header row plus one row per displayed element.
    Populated,
}

impl DisplayMode {
    /// Pick the display mode. Loading wins over empty.
    pub fn decide(loading: bool, row_count: usize) -> Self {
        if loading {
            DisplayMode::Loading
        } else if row_count == 0 {
            DisplayMode::Empty
        } else {
            DisplayMode::Populated
        }
    }
}
