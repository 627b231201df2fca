//! Validatable trait for widgets that display validation errors.

use super::ErrorDisplay;

/// A widget whose value can be validated and which can display an error.
pub trait Validatable: Send + Sync {
    /// The value type rules are checked against.
    type Value;

    /// Extract the current value for validation.
    fn validation_value(&self) -> Self::Value;

    /// Show a validation error on this widget.
    fn set_error(&self, msg: String);

    /// Clear the validation error.
    fn clear_error(&self);

    /// Check if the widget shows a validation error.
    fn has_error(&self) -> bool;

    /// Get the current validation error message (if any).
    fn error(&self) -> Option<String>;

    /// Get the widget ID, for focusing the first invalid field.
    fn widget_id(&self) -> String;

    /// Get the error display mode.
    fn error_display(&self) -> ErrorDisplay;
}
