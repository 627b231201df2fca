//! Widget configuration types.
//!
//! Configs are plain builder structs with sensible defaults. Both can also be
//! deserialized, so a host can keep widget declarations in a JSON file:
//!
//! ```
//! use trellis::config::TableConfig;
//!
//! let config = TableConfig::from_json(r#"{ "selectable": true }"#).unwrap();
//! assert!(config.selectable);
//! assert!(!config.loading);
//! assert_eq!(config.empty_title, "No data available");
//! ```

use serde::Deserialize;

use crate::error::ConfigError;
use crate::widgets::input::{InputKind, InputSize, InputVariant};

const DEFAULT_LOADING_MESSAGE: &str = "Loading...";
const DEFAULT_EMPTY_TITLE: &str = "No data available";
const DEFAULT_EMPTY_DESCRIPTION: &str = "There are no records to display.";

/// Per-table configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Show the loading state instead of the rows.
    pub loading: bool,

    /// Enable the selection column and selection tracking.
    /// When false, selection operations are ignored.
    pub selectable: bool,

    /// Text shown next to the progress indicator.
    pub loading_message: String,

    /// Heading of the empty state.
    pub empty_title: String,

    /// Body text of the empty state.
    pub empty_description: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            loading: false,
            selectable: false,
            loading_message: DEFAULT_LOADING_MESSAGE.to_string(),
            empty_title: DEFAULT_EMPTY_TITLE.to_string(),
            empty_description: DEFAULT_EMPTY_DESCRIPTION.to_string(),
        }
    }
}

impl TableConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the loading flag.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Enable row selection.
    pub fn selectable(mut self) -> Self {
        self.selectable = true;
        self
    }

    /// Set the loading message.
    pub fn loading_message(mut self, message: impl Into<String>) -> Self {
        self.loading_message = message.into();
        self
    }

    /// Set the empty state text.
    pub fn empty_message(
        mut self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.empty_title = title.into();
        self.empty_description = description.into();
        self
    }
}

/// Per-input configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub helper_text: Option<String>,
    pub variant: InputVariant,
    pub size: InputSize,
    pub kind: InputKind,
    /// Show the clear button while the field has a value.
    pub show_clear_button: bool,
    pub disabled: bool,
}

impl InputConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the placeholder.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set the helper text.
    pub fn helper_text(mut self, text: impl Into<String>) -> Self {
        self.helper_text = Some(text.into());
        self
    }

    /// Set the visual variant.
    pub fn variant(mut self, variant: InputVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the size.
    pub fn size(mut self, size: InputSize) -> Self {
        self.size = size;
        self
    }

    /// Set the input kind.
    pub fn kind(mut self, kind: InputKind) -> Self {
        self.kind = kind;
        self
    }

    /// Show the clear button.
    pub fn clearable(mut self) -> Self {
        self.show_clear_button = true;
        self
    }

    /// Disable the field.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}
