//! Event handling for the InputField widget.

use crate::widgets::events::EventResult;

use super::state::InputField;

/// A user interaction with an input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The text changed.
    Changed(String),
    /// The clear button was clicked.
    ClearClicked,
    /// The password visibility button was clicked.
    VisibilityClicked,
}

impl InputField {
    /// Dispatch an interaction. Disabled fields ignore everything.
    pub fn handle_event(&self, event: &InputEvent) -> EventResult {
        if self.is_disabled() {
            return EventResult::Ignored;
        }
        match event {
            InputEvent::Changed(value) => {
                self.set_value(value.as_str());
                EventResult::Consumed
            }
            InputEvent::ClearClicked => EventResult::from_applied(self.clear()),
            InputEvent::VisibilityClicked => {
                EventResult::from_applied(self.toggle_password_visibility())
            }
        }
    }
}
