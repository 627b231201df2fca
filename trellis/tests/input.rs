use std::sync::{Arc, Mutex};

use trellis::config::InputConfig;
use trellis::validation::{ErrorDisplay, Validatable};
use trellis::widgets::EventResult;
use trellis::widgets::input::{
    Affordance, Footer, InputEvent, InputField, InputKind, InputSize, InputVariant, Tone,
};

fn recording(field: InputField) -> (InputField, Arc<Mutex<Vec<String>>>) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    let field = field.on_change(move |value: &str| sink.lock().unwrap().push(value.to_string()));
    (field, calls)
}

// -----------------------------------------------------------------------------
// Footer and tone
// -----------------------------------------------------------------------------

#[test]
fn test_footer_shows_error_when_invalid() {
    let field = InputField::from_config(InputConfig::default().helper_text("We'll never share it"));
    field.set_error_message(Some("Please enter a valid email".into()));
    field.set_invalid(true);
    assert_eq!(field.footer(), Footer::Error("Please enter a valid email".into()));
}

#[test]
fn test_footer_falls_back_to_helper_text() {
    let field = InputField::from_config(InputConfig::default().helper_text("Optional"));
    assert_eq!(field.footer(), Footer::Helper("Optional".into()));

    // A message without the invalid flag is not shown.
    field.set_error_message(Some("Too short".into()));
    assert_eq!(field.footer(), Footer::Helper("Optional".into()));
}

#[test]
fn test_footer_none_without_text() {
    let field = InputField::new();
    field.set_invalid(true);
    assert_eq!(field.footer(), Footer::None);
}

#[test]
fn test_tone_invalid_wins_over_disabled() {
    let field = InputField::from_config(InputConfig::default().disabled());
    assert_eq!(field.tone(), Tone::Disabled);
    field.set_invalid(true);
    assert_eq!(field.tone(), Tone::Invalid);
    field.set_invalid(false);
    field.set_disabled(false);
    assert_eq!(field.tone(), Tone::Normal);
}

// -----------------------------------------------------------------------------
// Clear affordance
// -----------------------------------------------------------------------------

#[test]
fn test_clear_button_needs_value() {
    let field = InputField::from_config(InputConfig::default().clearable());
    assert!(!field.shows_clear_button());
    assert!(!field.has_trailing_affordance());

    field.set_value("hello");
    assert!(field.shows_clear_button());
    assert!(field.has_trailing_affordance());
}

#[test]
fn test_clear_notifies_with_empty_string() {
    let (field, calls) = recording(InputField::from_config(InputConfig::default().clearable()));
    field.set_value("hello");

    assert!(field.clear());
    assert_eq!(field.value(), "");
    assert_eq!(*calls.lock().unwrap(), ["hello", ""]);
    assert!(!field.shows_clear_button());
}

#[test]
fn test_clear_ignored_without_button() {
    let (field, calls) = recording(InputField::with_value("keep"));
    assert!(!field.clear());
    assert_eq!(field.value(), "keep");
    assert!(calls.lock().unwrap().is_empty());
}

// -----------------------------------------------------------------------------
// Password visibility
// -----------------------------------------------------------------------------

#[test]
fn test_password_reveal_toggles_effective_kind() {
    let field = InputField::from_config(InputConfig::default().kind(InputKind::Password));
    assert!(field.shows_visibility_toggle());
    assert!(field.has_trailing_affordance());
    assert_eq!(field.effective_kind(), InputKind::Password);

    assert!(field.toggle_password_visibility());
    assert_eq!(field.effective_kind(), InputKind::Text);
    assert_eq!(field.kind(), InputKind::Password);

    assert!(field.toggle_password_visibility());
    assert_eq!(field.effective_kind(), InputKind::Password);
}

#[test]
fn test_visibility_toggle_only_for_passwords() {
    let field = InputField::from_config(InputConfig::default().kind(InputKind::Email));
    assert!(!field.shows_visibility_toggle());
    assert!(!field.toggle_password_visibility());
    assert_eq!(field.effective_kind(), InputKind::Email);
}

#[test]
fn test_leaving_password_kind_hides_value() {
    let field = InputField::from_config(InputConfig::default().kind(InputKind::Password));
    field.toggle_password_visibility();
    field.set_kind(InputKind::Text);
    field.set_kind(InputKind::Password);
    assert!(!field.is_password_visible());
}

// -----------------------------------------------------------------------------
// Disabled fields
// -----------------------------------------------------------------------------

#[test]
fn test_disabled_field_ignores_events() {
    let (field, calls) = recording(InputField::from_config(
        InputConfig::default()
            .kind(InputKind::Password)
            .clearable()
            .disabled(),
    ));
    field.set_value("secret");
    calls.lock().unwrap().clear();

    assert_eq!(field.handle_event(&InputEvent::Changed("x".into())), EventResult::Ignored);
    assert_eq!(field.handle_event(&InputEvent::ClearClicked), EventResult::Ignored);
    assert_eq!(field.handle_event(&InputEvent::VisibilityClicked), EventResult::Ignored);

    assert_eq!(field.value(), "secret");
    assert!(!field.is_password_visible());
    assert!(calls.lock().unwrap().is_empty());
}

#[test]
fn test_events_on_enabled_field() {
    let (field, calls) = recording(InputField::from_config(
        InputConfig::default().kind(InputKind::Password).clearable(),
    ));

    assert!(field.handle_event(&InputEvent::Changed("hunter2".into())).is_handled());
    assert!(field.handle_event(&InputEvent::VisibilityClicked).is_handled());
    assert!(field.is_password_visible());
    assert!(field.handle_event(&InputEvent::ClearClicked).is_handled());
    assert!(!field.handle_event(&InputEvent::ClearClicked).is_handled());

    assert_eq!(*calls.lock().unwrap(), ["hunter2", ""]);
}

// -----------------------------------------------------------------------------
// Rendering
// -----------------------------------------------------------------------------

#[test]
fn test_render_view() {
    let field = InputField::from_config(
        InputConfig::default()
            .label("Password")
            .placeholder("Enter password")
            .kind(InputKind::Password)
            .variant(InputVariant::Filled)
            .size(InputSize::Lg)
            .clearable(),
    );
    field.set_value("abc");

    let view = field.render();
    assert_eq!(view.label.as_deref(), Some("Password"));
    assert_eq!(view.placeholder.as_deref(), Some("Enter password"));
    assert_eq!(view.value, "abc");
    assert_eq!(view.kind, InputKind::Password);
    assert_eq!(view.variant, InputVariant::Filled);
    assert_eq!(view.size, InputSize::Lg);
    assert_eq!(
        view.trailing,
        [
            Affordance::Clear { disabled: false },
            Affordance::Reveal { disabled: false },
        ]
    );

    field.toggle_password_visibility();
    let view = field.render();
    assert_eq!(view.kind, InputKind::Text);
    assert_eq!(view.trailing[1], Affordance::Conceal { disabled: false });
}

#[test]
fn test_render_disabled_affordances() {
    let field = InputField::from_config(
        InputConfig::default().kind(InputKind::Password).disabled(),
    );
    let view = field.render();
    assert!(view.disabled);
    assert_eq!(view.tone, Tone::Disabled);
    assert_eq!(view.trailing.len(), 1);
    assert!(view.trailing[0].is_disabled());
}

#[test]
fn test_render_invalid_label_tone() {
    let field = InputField::from_config(InputConfig::default().label("Email"));
    field.set_error("Required".into());
    let view = field.render();
    assert_eq!(view.label_tone, Tone::Invalid);
    assert_eq!(view.tone, Tone::Invalid);
    assert_eq!(view.footer, Footer::Error("Required".into()));
}

#[test]
fn test_render_hidden_error_keeps_helper() {
    let field = InputField::from_config(InputConfig::default().helper_text("Your login"))
        .with_error_display(ErrorDisplay::None);
    field.set_error("Required".into());

    let view = field.render();
    assert_eq!(view.tone, Tone::Invalid);
    assert_eq!(view.footer, Footer::Helper("Your login".into()));
    // The field itself still reports the error.
    assert_eq!(field.footer(), Footer::Error("Required".into()));
}

// -----------------------------------------------------------------------------
// Validation state
// -----------------------------------------------------------------------------

#[test]
fn test_set_error_marks_invalid() {
    let field = InputField::new();
    field.set_error("Too short".into());
    assert!(field.is_invalid());
    assert!(field.has_error());
    assert_eq!(field.error().as_deref(), Some("Too short"));

    field.clear_error();
    assert!(!field.is_invalid());
    assert_eq!(field.error_message(), None);
}

#[test]
fn test_editing_clears_error() {
    let field = InputField::new();
    field.set_error("Required".into());
    field.set_value("a");
    assert!(!field.has_error());
    assert_eq!(field.footer(), Footer::None);
}

#[test]
fn test_clones_share_state() {
    let field = InputField::new();
    let other = field.clone();
    other.set_value("shared");
    assert_eq!(field.value(), "shared");
    assert_eq!(field.widget_id(), other.widget_id());
    assert!(field.is_dirty());
}
