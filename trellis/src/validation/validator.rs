//! Fluent validator builder.

use std::future::Future;
use std::pin::Pin;

use log::debug;
use regex::Regex;

use super::result::{FieldError, ValidationResult};
use super::validatable::Validatable;

/// Boxed future used by async rules.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

type SyncRule<V> = Box<dyn Fn(&V) -> Result<(), String> + Send + Sync>;
type AsyncRule<V> = Box<dyn Fn(V) -> BoxFuture<'static, Result<(), String>> + Send + Sync>;

// =============================================================================
// Field checks
// =============================================================================

/// A field with its rules, erased over the widget type.
trait FieldCheck: Send + Sync {
    fn name(&self) -> &str;
    fn widget_id(&self) -> String;

    /// Message of the first failing sync rule.
    fn check(&self) -> Option<String>;

    /// Message of the first failing rule, sync rules first.
    fn check_async(&self) -> BoxFuture<'_, Option<String>>;

    /// Set or clear the error on the widget.
    fn report(&self, error: Option<&str>);
}

struct FieldRules<W: Validatable> {
    name: String,
    widget: W,
    sync_rules: Vec<SyncRule<W::Value>>,
    async_rules: Vec<AsyncRule<W::Value>>,
}

impl<W> FieldCheck for FieldRules<W>
where
    W: Validatable + 'static,
    W::Value: Clone + Send + Sync + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn widget_id(&self) -> String {
        self.widget.widget_id()
    }

    fn check(&self) -> Option<String> {
        let value = self.widget.validation_value();
        self.sync_rules.iter().find_map(|rule| rule(&value).err())
    }

    fn check_async(&self) -> BoxFuture<'_, Option<String>> {
        Box::pin(async move {
            if let Some(message) = self.check() {
                return Some(message);
            }
            let value = self.widget.validation_value();
            for rule in &self.async_rules {
                if let Err(message) = rule(value.clone()).await {
                    return Some(message);
                }
            }
            None
        })
    }

    fn report(&self, error: Option<&str>) {
        match error {
            Some(message) => self.widget.set_error(message.to_string()),
            None => self.widget.clear_error(),
        }
    }
}

fn record(field: &dyn FieldCheck, outcome: Option<String>, errors: &mut Vec<FieldError>) {
    field.report(outcome.as_deref());
    if let Some(message) = outcome {
        debug!("validation failed for {}: {}", field.name(), message);
        errors.push(FieldError {
            field_name: field.name().to_string(),
            widget_id: field.widget_id(),
            message,
        });
    }
}

// =============================================================================
// Validator
// =============================================================================

/// Validates a set of form fields.
///
/// Each field reports the message of its first failing rule. Running a
/// validation sets the error on every failing widget and clears it on every
/// passing one.
#[derive(Default)]
pub struct Validator {
    fields: Vec<Box<dyn FieldCheck>>,
}

impl Validator {
    /// Create an empty validator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start declaring rules for a field.
    pub fn field<W>(self, widget: &W, name: impl Into<String>) -> FieldBuilder<W>
    where
        W: Validatable + Clone + 'static,
        W::Value: Clone + Send + Sync + 'static,
    {
        FieldBuilder {
            validator: self,
            rules: FieldRules {
                name: name.into(),
                widget: widget.clone(),
                sync_rules: Vec::new(),
                async_rules: Vec::new(),
            },
        }
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Run the synchronous rules. Async rules are skipped.
    pub fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();
        for field in &self.fields {
            record(&**field, field.check(), &mut errors);
        }
        ValidationResult::from_errors(errors)
    }

    /// Run all rules, sync then async, field by field.
    pub async fn validate_async(&self) -> ValidationResult {
        let mut errors = Vec::new();
        for field in &self.fields {
            let outcome = field.check_async().await;
            record(&**field, outcome, &mut errors);
        }
        ValidationResult::from_errors(errors)
    }
}

// =============================================================================
// FieldBuilder
// =============================================================================

/// Adds rules to a single field.
pub struct FieldBuilder<W: Validatable> {
    validator: Validator,
    rules: FieldRules<W>,
}

impl<W> FieldBuilder<W>
where
    W: Validatable + Clone + 'static,
    W::Value: Clone + Send + Sync + 'static,
{
    /// Add a custom synchronous rule.
    pub fn rule<F>(mut self, check: F) -> Self
    where
        F: Fn(&W::Value) -> Result<(), String> + Send + Sync + 'static,
    {
        self.rules.sync_rules.push(Box::new(check));
        self
    }

    /// Add a custom async rule. Only [`Validator::validate_async`] runs it.
    pub fn rule_async<F, Fut>(mut self, check: F) -> Self
    where
        F: Fn(W::Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), String>> + Send + 'static,
    {
        self.rules
            .async_rules
            .push(Box::new(move |value| Box::pin(check(value))));
        self
    }

    /// Finish this field and start the next one.
    pub fn field<W2>(self, widget: &W2, name: impl Into<String>) -> FieldBuilder<W2>
    where
        W2: Validatable + Clone + 'static,
        W2::Value: Clone + Send + Sync + 'static,
    {
        self.finish().field(widget, name)
    }

    /// Finish this field and return the validator.
    pub fn finish(self) -> Validator {
        let mut validator = self.validator;
        validator.fields.push(Box::new(self.rules));
        validator
    }

    /// Finish this field and run the synchronous rules.
    pub fn validate(self) -> ValidationResult {
        self.finish().validate()
    }

    /// Finish this field and run all rules.
    pub async fn validate_async(self) -> ValidationResult {
        self.finish().validate_async().await
    }
}

// -----------------------------------------------------------------------------
// Built-in rules for text fields
// -----------------------------------------------------------------------------

fn check(passed: bool, message: &str) -> Result<(), String> {
    if passed {
        Ok(())
    } else {
        Err(message.to_string())
    }
}

impl<W> FieldBuilder<W>
where
    W: Validatable<Value = String> + Clone + 'static,
{
    /// Value must not be empty or whitespace.
    pub fn required(self, message: impl Into<String>) -> Self {
        let message = message.into();
        self.rule(move |v| check(!v.trim().is_empty(), &message))
    }

    /// Value must have at least `min` characters.
    pub fn min_length(self, min: usize, message: impl Into<String>) -> Self {
        let message = message.into();
        self.rule(move |v| check(v.chars().count() >= min, &message))
    }

    /// Value must have at most `max` characters.
    pub fn max_length(self, max: usize, message: impl Into<String>) -> Self {
        let message = message.into();
        self.rule(move |v| check(v.chars().count() <= max, &message))
    }

    /// Value must match the pattern.
    pub fn pattern(self, pattern: Regex, message: impl Into<String>) -> Self {
        let message = message.into();
        self.rule(move |v| check(pattern.is_match(v), &message))
    }

    /// Value must be a valid email address. Empty values pass; pair with
    /// [`required`](Self::required) to reject them.
    pub fn email(self, message: impl Into<String>) -> Self {
        let message = message.into();
        self.rule(move |v| check(v.is_empty() || email_address::EmailAddress::is_valid(v), &message))
    }

    /// Value must parse as a number. Empty values pass.
    pub fn numeric(self, message: impl Into<String>) -> Self {
        let message = message.into();
        self.rule(move |v| check(v.is_empty() || v.trim().parse::<f64>().is_ok(), &message))
    }

    /// Value must equal `expected`.
    pub fn equals(self, expected: impl Into<String>, message: impl Into<String>) -> Self {
        let expected = expected.into();
        let message = message.into();
        self.rule(move |v| check(*v == expected, &message))
    }

    /// Value must contain `needle`.
    pub fn contains(self, needle: impl Into<String>, message: impl Into<String>) -> Self {
        let needle = needle.into();
        let message = message.into();
        self.rule(move |v| check(v.contains(needle.as_str()), &message))
    }
}
