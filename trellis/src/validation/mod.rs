//! Form validation.
//!
//! A fluent API for validating widgets with synchronous and asynchronous
//! rules. Failing fields get their error set on the widget; passing fields
//! get it cleared.
//!
//! # Example
//!
//! ```
//! use trellis::validation::{Validatable, Validator};
//! use trellis::widgets::input::InputField;
//!
//! let username = InputField::new();
//! let email = InputField::with_value("not-an-email");
//!
//! let result = Validator::new()
//!     .field(&username, "username")
//!     .required("Username is required")
//!     .min_length(3, "Username must be at least 3 characters")
//!     .field(&email, "email")
//!     .email("Please enter a valid email")
//!     .validate();
//!
//! assert!(result.is_invalid());
//! assert_eq!(result.errors().len(), 2);
//! assert!(username.is_invalid());
//! assert_eq!(email.error().as_deref(), Some("Please enter a valid email"));
//! ```

mod error_display;
mod result;
mod validatable;
mod validator;

pub use error_display::ErrorDisplay;
pub use result::{FieldError, ValidationResult};
pub use validatable::Validatable;
pub use validator::{BoxFuture, FieldBuilder, Validator};
