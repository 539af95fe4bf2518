//! Text editing helpers for the plain-text surface.
//!
//! The surface itself belongs to the host; this module only computes what
//! a keystroke should turn `(text, caret)` into.
//!
//! # Example
//!
//! ```
//! use codeblock::editable::{transform, IndentDirection};
//!
//! let edit = transform("fn main() {\n}", 12, IndentDirection::Forward);
//! assert_eq!(edit.new_text, "fn main() {\n  }");
//! assert_eq!(edit.new_caret, 14);
//! ```

mod indent;

pub use indent::{line_start, transform, CaretEdit, IndentDirection, INDENT_UNIT};
