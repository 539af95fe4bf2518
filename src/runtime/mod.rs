//! Runtime - executes commands and drives the reducer
//!
//! - `widget` - the [`EditorWidget`] host API, render workers and event pump

mod widget;

pub use widget::EditorWidget;
