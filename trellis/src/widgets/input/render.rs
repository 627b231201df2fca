//! View model construction for the InputField widget.

use crate::validation::ErrorDisplay;

use super::state::{Footer, InputField, InputInner, Tone};
use super::variant::{InputKind, InputSize, InputVariant};

/// A button at the trailing edge of the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affordance {
    /// Empties the field.
    Clear { disabled: bool },
    /// Shows a hidden password.
    Reveal { disabled: bool },
    /// Hides a revealed password.
    Conceal { disabled: bool },
}

impl Affordance {
    pub fn is_disabled(self) -> bool {
        match self {
            Affordance::Clear { disabled }
            | Affordance::Reveal { disabled }
            | Affordance::Conceal { disabled } => disabled,
        }
    }
}

/// What the presentation layer should draw for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputView {
    pub label: Option<String>,
    pub label_tone: Tone,
    pub value: String,
    pub placeholder: Option<String>,
    /// Effective kind, `Text` while a password is revealed.
    pub kind: InputKind,
    pub variant: InputVariant,
    pub size: InputSize,
    pub tone: Tone,
    pub disabled: bool,
    /// Trailing buttons, clear first.
    pub trailing: Vec<Affordance>,
    pub footer: Footer,
    pub error_display: ErrorDisplay,
}

impl InputField {
    /// Build the view model.
    pub fn render(&self) -> InputView {
        match self.inner.read() {
            Ok(guard) => build_view(&guard),
            Err(_) => build_view(&InputInner::default()),
        }
    }
}

fn build_view(inner: &InputInner) -> InputView {
    let disabled = inner.disabled;

    let mut trailing = Vec::new();
    if inner.shows_clear_button() {
        trailing.push(Affordance::Clear { disabled });
    }
    if inner.shows_visibility_toggle() {
        trailing.push(if inner.password_visible {
            Affordance::Conceal { disabled }
        } else {
            Affordance::Reveal { disabled }
        });
    }

    let footer = match inner.footer() {
        // Styling only; the message is not drawn.
        Footer::Error(_) if inner.error_display == ErrorDisplay::None => inner
            .helper_text
            .clone()
            .map_or(Footer::None, Footer::Helper),
        footer => footer,
    };

    InputView {
        label: inner.label.clone(),
        label_tone: if inner.invalid { Tone::Invalid } else { Tone::Normal },
        value: inner.value.clone(),
        placeholder: inner.placeholder.clone(),
        kind: inner.effective_kind(),
        variant: inner.variant,
        size: inner.size,
        tone: inner.tone(),
        disabled,
        trailing,
        footer,
        error_display: inner.error_display,
    }
}
