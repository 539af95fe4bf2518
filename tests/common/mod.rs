//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::sync::{Arc, Condvar, Mutex};
use std::time::{Duration, Instant};

use codeblock::error::Result;
use codeblock::highlight::{
    escape_html, CatalogEntry, Element, HighlightEngine, HighlightOptions, Highlighted,
    StaticCatalog,
};
use codeblock::{EditorWidget, RenderError, SavedData, WidgetConfig};

pub const TIMEOUT: Duration = Duration::from_secs(5);

/// A latch that blocks render workers until opened
#[derive(Default)]
pub struct Gate {
    open: Mutex<bool>,
    cv: Condvar,
}

impl Gate {
    pub fn open(&self) {
        *self.open.lock().unwrap() = true;
        self.cv.notify_all();
    }

    fn wait(&self) {
        let mut open = self.open.lock().unwrap();
        while !*open {
            open = self.cv.wait(open).unwrap();
        }
    }
}

/// Engine with scripted behavior
///
/// - code starting with `slow` blocks until the gate opens
/// - language `cobol` fails with `UnsupportedLanguage`
/// - language `crash` panics inside the engine
/// - the root style is `background-color:{theme};color:#fff`
/// - markup is `<pre class=…>{escaped preprocessed code}</pre>`
#[derive(Default)]
pub struct ScriptedEngine {
    pub gate: Arc<Gate>,
    /// Preprocessed code of every call, in call order
    pub calls: Mutex<Vec<String>>,
}

impl ScriptedEngine {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl HighlightEngine for ScriptedEngine {
    fn highlight(&self, code: &str, options: &HighlightOptions<'_>) -> Result<Highlighted> {
        let source = options.hooks.preprocess(code);
        self.calls.lock().unwrap().push(source.clone());

        if options.language == "cobol" {
            return Err(RenderError::UnsupportedLanguage("cobol".to_string()));
        }
        if options.language == "crash" {
            panic!("grammar blew up on {:?}", code);
        }
        if code.starts_with("slow") {
            self.gate.wait();
        }

        let mut pre = Element::new("pre");
        pre.add_class("scripted");
        pre.style = format!("background-color:{};color:#fff", options.theme);
        pre.inner_html = escape_html(&source);
        let root_style = options.hooks.root(&mut pre);
        Ok(Highlighted {
            markup: pre.to_html(),
            root_style,
        })
    }
}

pub fn catalog() -> StaticCatalog {
    StaticCatalog {
        languages: vec![
            CatalogEntry::new("javascript", "JavaScript"),
            CatalogEntry::new("python", "Python"),
            CatalogEntry::new("rust", "Rust"),
        ],
        themes: vec![
            CatalogEntry::new("vitesse-dark", "Vitesse Dark"),
            CatalogEntry::new("nord", "Nord"),
        ],
    }
}

/// Widget over a scripted engine with the default config
pub fn widget(engine: &Arc<ScriptedEngine>, saved: Option<SavedData>) -> EditorWidget {
    widget_with(engine, saved, false)
}

pub fn widget_with(
    engine: &Arc<ScriptedEngine>,
    saved: Option<SavedData>,
    read_only: bool,
) -> EditorWidget {
    let engine: Arc<dyn HighlightEngine> = engine.clone();
    EditorWidget::new(
        saved,
        WidgetConfig::default(),
        read_only,
        engine,
        &catalog(),
    )
}

pub fn saved(code: &str, lang: &str, theme: &str) -> SavedData {
    SavedData {
        code: Some(code.to_string()),
        lang: Some(lang.to_string()),
        theme: Some(theme.to_string()),
    }
}

/// Pump completions until `done` holds or the timeout passes
pub fn pump_until(widget: &mut EditorWidget, done: impl Fn(&EditorWidget) -> bool) -> bool {
    let deadline = Instant::now() + TIMEOUT;
    while Instant::now() < deadline {
        widget.pump();
        if done(widget) {
            return true;
        }
        std::thread::sleep(Duration::from_millis(2));
    }
    false
}
