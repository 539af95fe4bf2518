//! Tree-sitter grammars, queries and capture extraction
//!
//! Queries are compiled lazily, once per language, and shared across
//! threads. Parsers are not `Sync`, so each parse gets its own.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use streaming_iterator::StreamingIterator;
use tree_sitter::{Language, Parser, Query, QueryCursor};

use super::languages::LanguageId;

/// A highlighted byte range, tagged with a query capture index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CaptureSpan {
    start_byte: usize,
    end_byte: usize,
    capture: u32,
}

/// Grammar and highlight query source for a language
fn grammar(lang: LanguageId) -> Option<(Language, String)> {
    let (language, query): (Language, String) = match lang {
        LanguageId::JavaScript => (
            tree_sitter_javascript::LANGUAGE.into(),
            tree_sitter_javascript::HIGHLIGHT_QUERY.to_string(),
        ),
        // The TypeScript queries only cover TS-specific syntax and extend
        // the JavaScript ones
        LanguageId::TypeScript => (
            tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            format!(
                "{}\n{}",
                tree_sitter_javascript::HIGHLIGHT_QUERY,
                tree_sitter_typescript::HIGHLIGHTS_QUERY
            ),
        ),
        LanguageId::Tsx => (
            tree_sitter_typescript::LANGUAGE_TSX.into(),
            format!(
                "{}\n{}",
                tree_sitter_javascript::HIGHLIGHT_QUERY,
                tree_sitter_typescript::HIGHLIGHTS_QUERY
            ),
        ),
        LanguageId::Html => (
            tree_sitter_html::LANGUAGE.into(),
            tree_sitter_html::HIGHLIGHTS_QUERY.to_string(),
        ),
        LanguageId::Css => (
            tree_sitter_css::LANGUAGE.into(),
            tree_sitter_css::HIGHLIGHTS_QUERY.to_string(),
        ),
        LanguageId::Json => (
            tree_sitter_json::LANGUAGE.into(),
            tree_sitter_json::HIGHLIGHTS_QUERY.to_string(),
        ),
        LanguageId::Rust => (
            tree_sitter_rust::LANGUAGE.into(),
            tree_sitter_rust::HIGHLIGHTS_QUERY.to_string(),
        ),
        LanguageId::C => (
            tree_sitter_c::LANGUAGE.into(),
            tree_sitter_c::HIGHLIGHT_QUERY.to_string(),
        ),
        // Same story as TypeScript: C++ queries build on the C ones
        LanguageId::Cpp => (
            tree_sitter_cpp::LANGUAGE.into(),
            format!(
                "{}\n{}",
                tree_sitter_c::HIGHLIGHT_QUERY,
                tree_sitter_cpp::HIGHLIGHT_QUERY
            ),
        ),
        LanguageId::Go => (
            tree_sitter_go::LANGUAGE.into(),
            tree_sitter_go::HIGHLIGHTS_QUERY.to_string(),
        ),
        LanguageId::Python => (
            tree_sitter_python::LANGUAGE.into(),
            tree_sitter_python::HIGHLIGHTS_QUERY.to_string(),
        ),
        LanguageId::Java => (
            tree_sitter_java::LANGUAGE.into(),
            tree_sitter_java::HIGHLIGHTS_QUERY.to_string(),
        ),
        LanguageId::Php => (
            tree_sitter_php::LANGUAGE_PHP.into(),
            tree_sitter_php::HIGHLIGHTS_QUERY.to_string(),
        ),
        LanguageId::Toml => (
            tree_sitter_toml_ng::LANGUAGE.into(),
            tree_sitter_toml_ng::HIGHLIGHTS_QUERY.to_string(),
        ),
        LanguageId::Bash => (
            tree_sitter_bash::LANGUAGE.into(),
            tree_sitter_bash::HIGHLIGHT_QUERY.to_string(),
        ),
        LanguageId::PlainText => return None,
    };
    Some((language, query))
}

/// Compiled grammar plus highlight query
pub struct CompiledLanguage {
    pub language: Language,
    pub query: Query,
}

/// Thread-safe cache of compiled languages
#[derive(Default)]
pub struct GrammarSet {
    compiled: Mutex<HashMap<LanguageId, Arc<CompiledLanguage>>>,
}

impl GrammarSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiled grammar for `lang`; `Ok(None)` for plain text
    pub fn get(&self, lang: LanguageId) -> Result<Option<Arc<CompiledLanguage>>, String> {
        let mut compiled = self
            .compiled
            .lock()
            .map_err(|_| "grammar cache poisoned".to_string())?;

        if let Some(existing) = compiled.get(&lang) {
            return Ok(Some(Arc::clone(existing)));
        }

        let Some((language, source)) = grammar(lang) else {
            return Ok(None);
        };

        let query = Query::new(&language, &source)
            .map_err(|e| format!("Failed to compile query for {:?}: {:?}", lang, e))?;
        tracing::debug!(
            "Compiled {:?} highlight query ({} captures)",
            lang,
            query.capture_names().len()
        );

        let entry = Arc::new(CompiledLanguage { language, query });
        compiled.insert(lang, Arc::clone(&entry));
        Ok(Some(entry))
    }
}

/// Parse `source` and collect non-overlapping capture spans in order
///
/// Nested captures override their enclosing capture; when several patterns
/// capture the exact same node, the first one wins.
pub fn extract_captures(
    compiled: &CompiledLanguage,
    source: &str,
) -> Result<Vec<Option<u32>>, String> {
    let mut parser = Parser::new();
    parser
        .set_language(&compiled.language)
        .map_err(|e| format!("Failed to set language: {}", e))?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| "Parser returned no tree".to_string())?;

    let mut spans = Vec::new();
    let mut cursor = QueryCursor::new();
    let mut captures = cursor.captures(&compiled.query, tree.root_node(), source.as_bytes());
    while let Some((query_match, capture_idx)) = captures.next() {
        let capture = &query_match.captures[*capture_idx];
        let node = capture.node;
        if node.start_byte() < node.end_byte() {
            spans.push((
                CaptureSpan {
                    start_byte: node.start_byte(),
                    end_byte: node.end_byte(),
                    capture: capture.index,
                },
                query_match.pattern_index,
            ));
        }
    }

    // Outer ranges first so nested ranges paint over them
    spans.sort_by(|(a, pa), (b, pb)| {
        a.start_byte
            .cmp(&b.start_byte)
            .then(b.end_byte.cmp(&a.end_byte))
            .then(pa.cmp(pb))
    });

    let mut painted: Vec<Option<u32>> = vec![None; source.len()];
    let mut last_range = None;
    for (span, _) in spans {
        let range = (span.start_byte, span.end_byte);
        if last_range == Some(range) {
            continue;
        }
        last_range = Some(range);
        let end = span.end_byte.min(painted.len());
        for slot in &mut painted[span.start_byte.min(end)..end] {
            *slot = Some(span.capture);
        }
    }

    Ok(painted)
}
