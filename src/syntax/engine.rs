//! Built-in highlighting engine
//!
//! Implements [`HighlightEngine`] on top of tree-sitter grammars and YAML
//! themes, producing markup shaped like shiki's:
//!
//! ```text
//! <pre class="shiki vitesse-dark" style="background-color:…;color:…" tabindex="0"><code>
//! <span class="line"><span style="color:…">const</span>…</span>
//! …</code></pre>
//! ```

use std::collections::HashMap;
use std::fmt::Write;
use std::sync::{Arc, Mutex};

use super::languages::LanguageId;
use super::parser::{extract_captures, GrammarSet};
use crate::error::{RenderError, Result};
use crate::highlight::{
    escape_html, Catalog, CatalogEntry, Element, HighlightEngine, HighlightOptions, Highlighted,
};
use crate::theme::{self, Theme};

/// Tree-sitter backed engine with a theme cache
pub struct TreeSitterEngine {
    grammars: GrammarSet,
    themes: Mutex<HashMap<String, Arc<Theme>>>,
    /// Look in the user themes directory before the built-ins
    user_themes: bool,
}

impl TreeSitterEngine {
    /// Engine that also loads user themes from the config directory
    pub fn new() -> Self {
        Self {
            grammars: GrammarSet::new(),
            themes: Mutex::new(HashMap::new()),
            user_themes: true,
        }
    }

    /// Engine restricted to built-in (and explicitly registered) themes
    pub fn builtin_only() -> Self {
        Self {
            user_themes: false,
            ..Self::new()
        }
    }

    /// Register a theme under `id`, shadowing any other source
    pub fn register_theme(&self, id: &str, theme: Theme) {
        if let Ok(mut themes) = self.themes.lock() {
            themes.insert(id.to_string(), Arc::new(theme));
        }
    }

    fn resolve_theme(&self, id: &str) -> Result<Arc<Theme>> {
        let mut themes = self
            .themes
            .lock()
            .map_err(|_| RenderError::RenderFailure("theme cache poisoned".to_string()))?;

        if let Some(theme) = themes.get(id) {
            return Ok(Arc::clone(theme));
        }

        let loaded = theme::load_theme(id, self.user_themes)
            .map_err(RenderError::RenderFailure)?
            .ok_or_else(|| RenderError::UnsupportedTheme(id.to_string()))?;

        let loaded = Arc::new(loaded);
        themes.insert(id.to_string(), Arc::clone(&loaded));
        Ok(loaded)
    }

    /// Render `code` as `<span class="line">` rows inside `<code>`
    fn render_lines(&self, lang: LanguageId, code: &str, theme: &Theme) -> Result<String> {
        let compiled = self.grammars.get(lang).map_err(RenderError::RenderFailure)?;

        // Capture index → inline style, resolved once per call
        let styles: Vec<Option<String>> = compiled
            .as_ref()
            .map(|c| {
                c.query
                    .capture_names()
                    .iter()
                    .map(|name| theme.style_for(name).map(|s| s.to_css()))
                    .collect()
            })
            .unwrap_or_default();

        let painted: Vec<Option<&str>> = match &compiled {
            Some(compiled) => extract_captures(compiled, code)
                .map_err(RenderError::RenderFailure)?
                .into_iter()
                .map(|capture| capture.and_then(|c| styles[c as usize].as_deref()))
                .collect(),
            None => vec![None; code.len()],
        };

        let default_style = format!("color:{}", theme.foreground.to_css());
        let mut out = String::with_capacity(code.len() * 4);
        out.push_str("<code>");

        let mut line_start = 0;
        for (idx, line) in code.split('\n').enumerate() {
            if idx > 0 {
                out.push('\n');
            }
            out.push_str("<span class=\"line\">");
            write_runs(&mut out, line, &painted[line_start..line_start + line.len()], &default_style);
            out.push_str("</span>");
            line_start += line.len() + 1;
        }

        out.push_str("</code>");
        Ok(out)
    }
}

/// Write one line as styled spans, merging bytes that share a style
fn write_runs(out: &mut String, line: &str, styles: &[Option<&str>], default_style: &str) {
    let mut run_start = 0;
    while run_start < line.len() {
        let style = styles[run_start];
        let mut run_end = run_start + 1;
        while run_end < line.len() && styles[run_end] == style {
            run_end += 1;
        }
        // Style changes only happen on node boundaries, which are char
        // boundaries; this guards against grammars that disagree
        while !line.is_char_boundary(run_end) {
            run_end += 1;
        }
        let _ = write!(
            out,
            "<span style=\"{}\">{}</span>",
            style.unwrap_or(default_style),
            escape_html(&line[run_start..run_end])
        );
        run_start = run_end;
    }
}

impl Default for TreeSitterEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl HighlightEngine for TreeSitterEngine {
    fn highlight(&self, code: &str, options: &HighlightOptions<'_>) -> Result<Highlighted> {
        let lang = LanguageId::from_id(options.language)
            .ok_or_else(|| RenderError::UnsupportedLanguage(options.language.to_string()))?;
        let theme = self.resolve_theme(options.theme)?;

        let source = options.hooks.preprocess(code);
        let inner = self.render_lines(lang, &source, &theme)?;

        let mut pre = Element::new("pre");
        pre.add_class("shiki");
        pre.add_class(options.theme);
        pre.style = theme.root_style();
        pre.set_attr("tabindex", "0");
        pre.inner_html = inner;

        let root_style = options.hooks.root(&mut pre);

        Ok(Highlighted {
            markup: pre.to_html(),
            root_style,
        })
    }
}

impl Catalog for TreeSitterEngine {
    fn languages(&self) -> Vec<CatalogEntry> {
        LanguageId::ALL
            .iter()
            .map(|lang| CatalogEntry::new(lang.id(), lang.display_name()))
            .collect()
    }

    fn themes(&self) -> Vec<CatalogEntry> {
        let mut entries: Vec<CatalogEntry> = theme::list_available_themes(self.user_themes)
            .into_iter()
            .map(|info| CatalogEntry::new(&info.id, &info.name))
            .collect();

        if let Ok(registered) = self.themes.lock() {
            for (id, theme) in registered.iter() {
                if !entries.iter().any(|e| &e.id == id) {
                    entries.push(CatalogEntry::new(id, &theme.name));
                }
            }
        }
        entries
    }
}
