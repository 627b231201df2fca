use regex::Regex;

use trellis::config::InputConfig;
use trellis::validation::{Validatable, ValidationResult, Validator};
use trellis::widgets::input::{Footer, InputField};

#[test]
fn test_valid_form() {
    let name = InputField::with_value("Alice");
    let email = InputField::with_value("alice@example.com");

    let result = Validator::new()
        .field(&name, "name")
        .required("Name is required")
        .field(&email, "email")
        .required("Email is required")
        .email("Please enter a valid email")
        .validate();

    assert!(result.is_valid());
    assert_eq!(result, ValidationResult::Valid);
    assert!(result.errors().is_empty());
}

#[test]
fn test_first_failing_rule_wins() {
    let name = InputField::with_value("  ");

    let result = Validator::new()
        .field(&name, "name")
        .required("Name is required")
        .min_length(5, "Too short")
        .validate();

    let error = result.first_error().unwrap();
    assert_eq!(error.field_name, "name");
    assert_eq!(error.message, "Name is required");
    assert_eq!(error.widget_id, name.id_string());
    assert_eq!(error.to_string(), "name: Name is required");
}

#[test]
fn test_errors_are_set_on_widgets() {
    let email = InputField::from_config(InputConfig::default().helper_text("Work address"));
    email.set_value("nope");

    let result = Validator::new()
        .field(&email, "email")
        .email("Please enter a valid email")
        .validate();

    assert!(result.is_invalid());
    assert!(email.is_invalid());
    assert_eq!(email.footer(), Footer::Error("Please enter a valid email".into()));

    email.set_value("me@example.com");
    assert_eq!(email.footer(), Footer::Helper("Work address".into()));
}

#[test]
fn test_passing_fields_are_cleared() {
    let name = InputField::with_value("Alice");
    name.set_error("stale".into());

    let result = Validator::new()
        .field(&name, "name")
        .required("Name is required")
        .validate();

    assert!(result.is_valid());
    assert!(!name.has_error());
}

#[test]
fn test_length_rules_count_characters() {
    let field = InputField::with_value("héllo");

    let result = Validator::new()
        .field(&field, "word")
        .min_length(5, "min")
        .max_length(5, "max")
        .validate();
    assert!(result.is_valid());

    field.set_value("héllo!");
    let result = Validator::new()
        .field(&field, "word")
        .max_length(5, "max")
        .validate();
    assert_eq!(result.first_error().map(|e| e.message.as_str()), Some("max"));
}

#[test]
fn test_pattern_numeric_equals_contains() {
    let code = InputField::with_value("AB-12");
    let amount = InputField::with_value("12.5x");
    let confirm = InputField::with_value("secret");
    let url = InputField::with_value("example.com");

    let result = Validator::new()
        .field(&code, "code")
        .pattern(Regex::new(r"^[A-Z]{2}-\d{2}$").unwrap(), "Bad code")
        .field(&amount, "amount")
        .numeric("Must be a number")
        .field(&confirm, "confirm")
        .equals("secret", "Passwords do not match")
        .field(&url, "url")
        .contains("://", "Missing scheme")
        .validate();

    let failed: Vec<_> = result.errors().iter().map(|e| e.field_name.as_str()).collect();
    assert_eq!(failed, ["amount", "url"]);
    assert_eq!(result.error_for("amount").unwrap().message, "Must be a number");
    assert!(result.error_for("code").is_none());
    assert_eq!(result.first_invalid_widget(), Some(amount.id_string().as_str()));
}

#[test]
fn test_empty_values_pass_format_rules() {
    let email = InputField::new();
    let amount = InputField::new();

    let result = Validator::new()
        .field(&email, "email")
        .email("bad email")
        .field(&amount, "amount")
        .numeric("bad number")
        .validate();
    assert!(result.is_valid());
}

#[test]
fn test_custom_rule() {
    let field = InputField::with_value("admin");

    let result = Validator::new()
        .field(&field, "username")
        .rule(|v| {
            if v == "admin" {
                Err("Username is reserved".to_string())
            } else {
                Ok(())
            }
        })
        .validate();

    assert_eq!(field.error().as_deref(), Some("Username is reserved"));
    assert!(result.is_invalid());
}

#[test]
fn test_validator_can_be_reused() {
    let field = InputField::new();
    let validator = Validator::new()
        .field(&field, "name")
        .required("Name is required")
        .finish();
    assert_eq!(validator.len(), 1);

    assert!(validator.validate().is_invalid());
    field.set_value("Bob");
    assert!(validator.validate().is_valid());
}

#[test]
fn test_sync_validate_skips_async_rules() {
    let field = InputField::with_value("taken");
    let result = Validator::new()
        .field(&field, "username")
        .rule_async(|_| async { Err("Username is taken".to_string()) })
        .validate();
    assert!(result.is_valid());
}

#[tokio::test]
async fn test_async_rules() {
    let field = InputField::with_value("taken");

    let result = Validator::new()
        .field(&field, "username")
        .required("Username is required")
        .rule_async(|value: String| async move {
            if value == "taken" {
                Err("Username is taken".to_string())
            } else {
                Ok(())
            }
        })
        .validate_async()
        .await;

    assert!(result.is_invalid());
    assert_eq!(field.error().as_deref(), Some("Username is taken"));
}

#[tokio::test]
async fn test_async_rules_run_after_sync_rules() {
    let field = InputField::new();

    let result = Validator::new()
        .field(&field, "username")
        .required("Username is required")
        .rule_async(|_| async { Err("never reached".to_string()) })
        .validate_async()
        .await;

    assert_eq!(result.first_error().unwrap().message, "Username is required");
}
