//! Input widget - a labelled text field.
//!
//! The field carries its value along with label, placeholder, helper text
//! and validation error. Two optional trailing buttons are derived from
//! state: a clear button while the field has a value, and a reveal/conceal
//! toggle on password fields. The footer shows the error message while the
//! field is invalid, and the helper text otherwise.

mod events;
mod render;
mod state;
mod variant;

pub use events::InputEvent;
pub use render::{Affordance, InputView};
pub use state::{ChangeObserver, Footer, InputField, InputId, Tone};
pub use variant::{InputKind, InputSize, InputVariant};
