pub mod config;
pub mod error;
pub mod validation;
pub mod widgets;

pub use error::{ConfigError, TableError};

pub mod prelude {
    pub use crate::config::{InputConfig, TableConfig};
    pub use crate::error::{ConfigError, TableError};
    pub use crate::validation::{
        ErrorDisplay, FieldError, Validatable, ValidationResult, Validator,
    };
    pub use crate::widgets::EventResult;
    pub use crate::widgets::input::{
        Affordance, Footer, InputEvent, InputField, InputKind, InputSize, InputVariant,
        InputView, Tone,
    };
    pub use crate::widgets::table::{
        CellValue, CheckState, Column, DisplayMode, HeaderCell, HeaderRow, RowView,
        SelectionModel, SelectionSummary, SortDirection, SortIndicator, SortState, Table,
        TableEvent, TableId, TableView,
    };
}
