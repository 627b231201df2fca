use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use log::{debug, trace};

use crate::config::InputConfig;
use crate::validation::{ErrorDisplay, Validatable};

use super::variant::{InputKind, InputSize, InputVariant};

/// Unique identifier for an InputField widget instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputId(usize);

impl InputId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for InputId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__input_{}", self.0)
    }
}

/// Callback invoked with the new value after every change.
pub type ChangeObserver = Arc<dyn Fn(&str) + Send + Sync>;

/// What the field shows under the box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Footer {
    None,
    Helper(String),
    Error(String),
}

/// Color tone for the field border and label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Normal,
    Invalid,
    Disabled,
}

#[derive(Default)]
pub(super) struct InputInner {
    pub value: String,
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub helper_text: Option<String>,
    pub error_message: Option<String>,
    pub invalid: bool,
    pub disabled: bool,
    pub variant: InputVariant,
    pub size: InputSize,
    pub kind: InputKind,
    pub show_clear_button: bool,
    /// Password fields only: the value is shown in clear text.
    pub password_visible: bool,
    pub error_display: ErrorDisplay,
    pub on_change: Option<ChangeObserver>,
}

impl InputInner {
    fn from_config(config: InputConfig) -> Self {
        Self {
            label: config.label,
            placeholder: config.placeholder,
            helper_text: config.helper_text,
            disabled: config.disabled,
            variant: config.variant,
            size: config.size,
            kind: config.kind,
            show_clear_button: config.show_clear_button,
            ..Self::default()
        }
    }

    pub fn effective_kind(&self) -> InputKind {
        if self.kind.is_password() && self.password_visible {
            InputKind::Text
        } else {
            self.kind
        }
    }

    pub fn shows_clear_button(&self) -> bool {
        self.show_clear_button && !self.value.is_empty()
    }

    pub fn shows_visibility_toggle(&self) -> bool {
        self.kind.is_password()
    }

    pub fn footer(&self) -> Footer {
        match (&self.error_message, &self.helper_text) {
            (Some(message), _) if self.invalid => Footer::Error(message.clone()),
            (_, Some(text)) => Footer::Helper(text.clone()),
            _ => Footer::None,
        }
    }

    pub fn tone(&self) -> Tone {
        if self.invalid {
            Tone::Invalid
        } else if self.disabled {
            Tone::Disabled
        } else {
            Tone::Normal
        }
    }

    /// Store a new value and return the observer to notify, if any.
    fn replace_value(&mut self, value: String) -> Option<ChangeObserver> {
        self.value = value;
        // Editing clears a validation error.
        self.invalid = false;
        self.error_message = None;
        self.on_change.clone()
    }
}

/// A labelled text field with clear and password-reveal affordances.
///
/// `InputField` is a cheap handle over shared state, so clones observe and
/// mutate the same field. Change observers are called after the internal
/// lock is released.
///
/// # Example
///
/// ```
/// use trellis::config::InputConfig;
/// use trellis::widgets::input::{Footer, InputField, InputKind};
///
/// let password = InputField::from_config(
///     InputConfig::default()
///         .label("Password")
///         .kind(InputKind::Password)
///         .helper_text("At least 8 characters"),
/// );
///
/// assert_eq!(password.effective_kind(), InputKind::Password);
/// password.toggle_password_visibility();
/// assert_eq!(password.effective_kind(), InputKind::Text);
/// assert_eq!(password.footer(), Footer::Helper("At least 8 characters".into()));
/// ```
pub struct InputField {
    /// Unique identifier for this input instance
    id: InputId,
    pub(super) inner: Arc<RwLock<InputInner>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
}

impl InputField {
    /// Create an empty text field.
    pub fn new() -> Self {
        Self::from_inner(InputInner::default())
    }

    /// Create a text field with an initial value.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self::from_inner(InputInner {
            value: value.into(),
            ..InputInner::default()
        })
    }

    /// Create a field from a configuration.
    pub fn from_config(config: InputConfig) -> Self {
        Self::from_inner(InputInner::from_config(config))
    }

    fn from_inner(inner: InputInner) -> Self {
        Self {
            id: InputId::new(),
            inner: Arc::new(RwLock::new(inner)),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Register the change observer.
    pub fn on_change<F>(self, observer: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        if let Ok(mut guard) = self.inner.write() {
            guard.on_change = Some(Arc::new(observer));
        }
        self
    }

    /// Set the error display mode.
    pub fn with_error_display(self, display: ErrorDisplay) -> Self {
        self.set_error_display(display);
        self
    }

    /// Get the unique ID for this input
    pub fn id(&self) -> InputId {
        self.id
    }

    /// Get the ID as a string (for node binding)
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Value
    // -------------------------------------------------------------------------

    /// Get the current value
    pub fn value(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.value.clone())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.value.is_empty())
            .unwrap_or(true)
    }

    /// Set the value and notify the change observer.
    ///
    /// Clears any validation error.
    pub fn set_value(&self, value: impl Into<String>) {
        let value = value.into();
        let observer = match self.inner.write() {
            Ok(mut guard) => {
                let observer = guard.replace_value(value.clone());
                self.dirty.store(true, Ordering::SeqCst);
                observer
            }
            Err(_) => return,
        };
        trace!("{}: value changed", self.id);
        if let Some(observer) = observer {
            observer(&value);
        }
    }

    /// Clear the value through the clear affordance.
    ///
    /// Applies only while the clear button is visible and the field is
    /// enabled. The observer is notified with `""`. Returns whether the
    /// value was cleared.
    pub fn clear(&self) -> bool {
        let observer = match self.inner.write() {
            Ok(mut guard) if guard.shows_clear_button() && !guard.disabled => {
                let observer = guard.replace_value(String::new());
                self.dirty.store(true, Ordering::SeqCst);
                observer
            }
            _ => {
                debug!("{}: clear ignored", self.id);
                return false;
            }
        };
        if let Some(observer) = observer {
            observer("");
        }
        true
    }

    // -------------------------------------------------------------------------
    // Password visibility
    // -------------------------------------------------------------------------

    /// Flip password visibility. Only applies to enabled password fields.
    pub fn toggle_password_visibility(&self) -> bool {
        if let Ok(mut guard) = self.inner.write()
            && guard.kind.is_password()
            && !guard.disabled
        {
            guard.password_visible = !guard.password_visible;
            self.dirty.store(true, Ordering::SeqCst);
            return true;
        }
        false
    }

    pub fn is_password_visible(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.password_visible)
            .unwrap_or(false)
    }

    /// The kind presented to the user: `Text` while a password is revealed.
    pub fn effective_kind(&self) -> InputKind {
        self.inner
            .read()
            .map(|guard| guard.effective_kind())
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Derived presentation
    // -------------------------------------------------------------------------

    /// The clear button is enabled by config and the field has a value.
    pub fn shows_clear_button(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.shows_clear_button())
            .unwrap_or(false)
    }

    pub fn shows_visibility_toggle(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.shows_visibility_toggle())
            .unwrap_or(false)
    }

    /// Any button is drawn at the trailing edge.
    pub fn has_trailing_affordance(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.shows_clear_button() || guard.shows_visibility_toggle())
            .unwrap_or(false)
    }

    /// The error message while invalid, else the helper text.
    pub fn footer(&self) -> Footer {
        self.inner
            .read()
            .map(|guard| guard.footer())
            .unwrap_or(Footer::None)
    }

    pub fn tone(&self) -> Tone {
        self.inner
            .read()
            .map(|guard| guard.tone())
            .unwrap_or(Tone::Normal)
    }

    // -------------------------------------------------------------------------
    // Properties
    // -------------------------------------------------------------------------

    pub fn label(&self) -> Option<String> {
        self.inner.read().ok().and_then(|guard| guard.label.clone())
    }

    pub fn set_label(&self, label: Option<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.label = label;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    pub fn placeholder(&self) -> Option<String> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.placeholder.clone())
    }

    pub fn set_placeholder(&self, placeholder: Option<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.placeholder = placeholder;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    pub fn helper_text(&self) -> Option<String> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.helper_text.clone())
    }

    pub fn set_helper_text(&self, text: Option<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.helper_text = text;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// The stored error message. Shown only while the field is invalid.
    pub fn error_message(&self) -> Option<String> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.error_message.clone())
    }

    pub fn set_error_message(&self, message: Option<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.error_message = message;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    pub fn is_invalid(&self) -> bool {
        self.inner.read().map(|guard| guard.invalid).unwrap_or(false)
    }

    pub fn set_invalid(&self, invalid: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.invalid = invalid;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.inner.read().map(|guard| guard.disabled).unwrap_or(false)
    }

    pub fn set_disabled(&self, disabled: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.disabled = disabled;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    pub fn variant(&self) -> InputVariant {
        self.inner
            .read()
            .map(|guard| guard.variant)
            .unwrap_or_default()
    }

    pub fn set_variant(&self, variant: InputVariant) {
        if let Ok(mut guard) = self.inner.write() {
            guard.variant = variant;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    pub fn size(&self) -> InputSize {
        self.inner.read().map(|guard| guard.size).unwrap_or_default()
    }

    pub fn set_size(&self, size: InputSize) {
        if let Ok(mut guard) = self.inner.write() {
            guard.size = size;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// The declared kind.
    pub fn kind(&self) -> InputKind {
        self.inner.read().map(|guard| guard.kind).unwrap_or_default()
    }

    /// Change the declared kind. Leaving `Password` hides the value again.
    pub fn set_kind(&self, kind: InputKind) {
        if let Ok(mut guard) = self.inner.write() {
            guard.kind = kind;
            if !kind.is_password() {
                guard.password_visible = false;
            }
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    pub fn set_show_clear_button(&self, show: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.show_clear_button = show;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Set the error display mode.
    pub fn set_error_display(&self, display: ErrorDisplay) {
        if let Ok(mut guard) = self.inner.write() {
            guard.error_display = display;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Check if the field changed since the last render
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Clone for InputField {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl Default for InputField {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InputField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputField")
            .field("id", &self.id)
            .field("value", &self.value())
            .field("kind", &self.kind())
            .field("invalid", &self.is_invalid())
            .finish()
    }
}

// =============================================================================
// Validatable
// =============================================================================

impl Validatable for InputField {
    type Value = String;

    fn validation_value(&self) -> Self::Value {
        self.value()
    }

    fn set_error(&self, msg: String) {
        if let Ok(mut guard) = self.inner.write() {
            guard.invalid = true;
            guard.error_message = Some(msg);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    fn clear_error(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.invalid = false;
            guard.error_message = None;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    fn has_error(&self) -> bool {
        self.is_invalid()
    }

    fn error(&self) -> Option<String> {
        self.inner
            .read()
            .ok()
            .filter(|guard| guard.invalid)
            .and_then(|guard| guard.error_message.clone())
    }

    fn widget_id(&self) -> String {
        self.id_string()
    }

    fn error_display(&self) -> ErrorDisplay {
        self.inner
            .read()
            .map(|guard| guard.error_display)
            .unwrap_or_default()
    }
}
