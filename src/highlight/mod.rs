//! Highlight rendering boundary
//!
//! The core never tokenizes code itself. It hands a [`RenderRequest`] to a
//! [`HighlightRenderer`], which calls an external [`HighlightEngine`] with two
//! hooks and returns markup plus the style of the engine's root container.
//!
//! ## Flow
//!
//! ```text
//! RenderRequest → HighlightRenderer::render
//!              → engine.highlight(code, {language, theme, hooks})
//!                  hooks.preprocess(code)   (append "\n")
//!                  hooks.root(&mut pre)     (tag class, read style)
//!              → RenderResult { markup, style_string }
//! ```

mod catalog;
mod markup;

pub use catalog::{Catalog, CatalogEntry, StaticCatalog};
pub use markup::{escape_html, Element};

use std::sync::Arc;

use crate::error::Result;
use crate::model::CodeBlockState;

/// Immutable snapshot of the state, tagged with the version it was issued at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    pub code: String,
    pub language: String,
    pub theme: String,
    pub version: u64,
}

impl RenderRequest {
    pub fn snapshot(state: &CodeBlockState, version: u64) -> Self {
        Self {
            code: state.code().to_string(),
            language: state.language().to_string(),
            theme: state.theme().to_string(),
            version,
        }
    }
}

/// Highlighted markup and the inline style of its root container
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderResult {
    pub markup: String,
    /// Background/foreground declarations to mirror onto the chrome
    pub style_string: String,
}

/// Callbacks an engine must run while highlighting
pub trait HighlightHooks: Send + Sync {
    /// Runs on the source before tokenization
    fn preprocess(&self, code: &str) -> String;

    /// Runs on the root container node; returns its inline style
    fn root(&self, node: &mut Element) -> String;
}

/// Options for one `highlight` call
pub struct HighlightOptions<'a> {
    pub language: &'a str,
    pub theme: &'a str,
    pub hooks: &'a dyn HighlightHooks,
}

/// Output of an engine: markup plus whatever the root hook returned
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlighted {
    pub markup: String,
    pub root_style: String,
}

/// External highlighting capability
///
/// Implementations must call `hooks.preprocess` on the code before
/// tokenizing and `hooks.root` on the root container before serializing it.
pub trait HighlightEngine: Send + Sync {
    fn highlight(&self, code: &str, options: &HighlightOptions<'_>) -> Result<Highlighted>;
}

/// Hooks that make engine output compose with the editable surface
#[derive(Debug, Clone)]
pub struct OverlayHooks {
    overlay_class: String,
}

impl OverlayHooks {
    pub fn new(overlay_class: &str) -> Self {
        Self {
            overlay_class: overlay_class.to_string(),
        }
    }
}

impl HighlightHooks for OverlayHooks {
    /// The surface shows a trailing empty line that the engine would
    /// otherwise drop, so one line break is always appended.
    fn preprocess(&self, code: &str) -> String {
        let mut out = String::with_capacity(code.len() + 1);
        out.push_str(code);
        out.push('\n');
        out
    }

    fn root(&self, node: &mut Element) -> String {
        node.add_class(&self.overlay_class);
        node.style.clone()
    }
}

/// Turns render requests into render results through an engine
#[derive(Clone)]
pub struct HighlightRenderer {
    engine: Arc<dyn HighlightEngine>,
    hooks: OverlayHooks,
}

impl HighlightRenderer {
    pub fn new(engine: Arc<dyn HighlightEngine>, overlay_class: &str) -> Self {
        Self {
            engine,
            hooks: OverlayHooks::new(overlay_class),
        }
    }

    /// Render one request; engine errors are returned, never swallowed
    pub fn render(&self, request: &RenderRequest) -> Result<RenderResult> {
        tracing::debug!(
            version = request.version,
            language = %request.language,
            theme = %request.theme,
            "rendering {} chars",
            request.code.len()
        );

        let options = HighlightOptions {
            language: &request.language,
            theme: &request.theme,
            hooks: &self.hooks,
        };
        let highlighted = self.engine.highlight(&request.code, &options)?;

        Ok(RenderResult {
            markup: highlighted.markup,
            style_string: highlighted.root_style,
        })
    }
}

impl std::fmt::Debug for HighlightRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HighlightRenderer")
            .field("hooks", &self.hooks)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;
    use std::sync::Mutex;

    /// Wraps preprocessed code in a themed <pre>, recording what it saw
    #[derive(Default)]
    struct EchoEngine {
        seen: Mutex<Vec<String>>,
    }

    impl HighlightEngine for EchoEngine {
        fn highlight(&self, code: &str, options: &HighlightOptions<'_>) -> Result<Highlighted> {
            if options.language == "klingon" {
                return Err(RenderError::UnsupportedLanguage("klingon".to_string()));
            }
            let code = options.hooks.preprocess(code);
            self.seen.lock().unwrap().push(code.clone());
            let mut pre = Element::new("pre");
            pre.style = format!("background-color:{};color:#fff", options.theme);
            pre.inner_html = escape_html(&code);
            let root_style = options.hooks.root(&mut pre);
            Ok(Highlighted {
                markup: pre.to_html(),
                root_style,
            })
        }
    }

    fn request(code: &str, language: &str) -> RenderRequest {
        RenderRequest {
            code: code.to_string(),
            language: language.to_string(),
            theme: "#111".to_string(),
            version: 1,
        }
    }

    #[test]
    fn test_preprocess_appends_exactly_one_newline() {
        let hooks = OverlayHooks::new("overlay");
        assert_eq!(hooks.preprocess("a"), "a\n");
        assert_eq!(hooks.preprocess("a\n"), "a\n\n");
        assert_eq!(hooks.preprocess(""), "\n");
    }

    #[test]
    fn test_render_tags_root_and_returns_style() {
        let engine = Arc::new(EchoEngine::default());
        let renderer = HighlightRenderer::new(engine.clone(), "overlay");
        let result = renderer.render(&request("x < y", "javascript")).unwrap();

        assert_eq!(result.style_string, "background-color:#111;color:#fff");
        assert!(result.markup.starts_with(r#"<pre class="overlay""#));
        assert!(result.markup.contains("x &lt; y\n"));
        assert_eq!(engine.seen.lock().unwrap().as_slice(), ["x < y\n"]);
    }

    #[test]
    fn test_render_propagates_engine_error() {
        let renderer = HighlightRenderer::new(Arc::new(EchoEngine::default()), "overlay");
        let err = renderer.render(&request("", "klingon")).unwrap_err();
        assert_eq!(err, RenderError::UnsupportedLanguage("klingon".to_string()));
    }
}
