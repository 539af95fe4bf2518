//! codeblock - editable code block with a synchronized highlight overlay
//!
//! The user types into a plain editable surface; a syntax-highlighted
//! rendering of the same text is kept in sync underneath, and the block's
//! chrome follows the active theme's colors. The crate follows the Elm
//! Architecture:
//!
//! - [`model`] - the state triple, surface mirror and render versioning
//! - [`messages`] / [`commands`] - inputs to and effects of [`update::update`]
//! - [`highlight`] - the engine boundary, hooks and the renderer
//! - [`overlay`] - painting render outcomes through [`overlay::Paint`]
//! - [`runtime`] - [`EditorWidget`], which runs renders on worker threads
//!
//! [`syntax`] and [`theme`] provide a built-in tree-sitter engine; [`view`]
//! is a headless element tree that serializes to HTML.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod error;
pub mod highlight;
pub mod input;
pub mod messages;
pub mod model;
pub mod overlay;
pub mod runtime;
pub mod syntax;
pub mod theme;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::WidgetConfig;
pub use error::RenderError;
pub use highlight::{HighlightEngine, HighlightRenderer, RenderRequest, RenderResult};
pub use input::{Key, KeyOutcome, KeyPress, Modifiers};
pub use messages::Msg;
pub use model::{BlockData, CodeBlockState, SavedData, WidgetModel};
pub use overlay::{ChromeTarget, OverlaySync, Paint};
pub use runtime::EditorWidget;
pub use syntax::TreeSitterEngine;
pub use theme::Theme;
