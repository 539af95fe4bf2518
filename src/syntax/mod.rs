//! Built-in syntax highlighting
//!
//! A tree-sitter implementation of [`HighlightEngine`](crate::highlight::HighlightEngine).
//! Hosts with their own highlighter can ignore this module entirely.
//!
//! ## Pipeline
//!
//! ```text
//! highlight(code, options)
//!   → LanguageId::from_id / theme lookup   (unknown → Unsupported*)
//!   → hooks.preprocess(code)
//!   → GrammarSet::get → extract_captures   (per-byte capture map)
//!   → Theme::style_for(capture name)       (longest dotted prefix)
//!   → <pre class="shiki {theme}"><code><span class="line">…
//!   → hooks.root(&mut pre)
//! ```

mod engine;
mod languages;
mod parser;

pub use engine::TreeSitterEngine;
pub use languages::LanguageId;
pub use parser::{extract_captures, CompiledLanguage, GrammarSet};
