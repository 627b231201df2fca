//! Built-in widgets.
//!
//! Each widget is a cheaply clonable handle around shared state. The
//! presentation layer feeds user interactions in through `handle_event`
//! and reads back a view model through `render`, so the widgets never
//! depend on a particular drawing backend.

pub mod events;
pub mod input;
pub mod table;

pub use events::EventResult;
