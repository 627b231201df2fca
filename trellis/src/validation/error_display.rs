/// Where a widget shows its validation error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorDisplay {
    /// Show the error message below the widget (default).
    #[default]
    Below,
    /// Show the error message inline, next to the widget.
    Inline,
    /// Don't display the message; the widget only shows error styling.
    None,
}
