//! Headless block view
//!
//! Builds the element tree a code block displays:
//!
//! ```text
//! div.codeblock                     (wrapper, themed)
//! ├── textarea.codeblock-input      (editable surface)
//! ├── div.codeblock-highlight       (overlay host, engine markup)
//! └── div.codeblock-controls
//!     ├── select.codeblock-language (themed)
//!     └── select.codeblock-theme    (themed)
//! ```
//!
//! `BlockView` is the default [`Paint`] target; hosts with a real DOM can
//! implement [`Paint`] themselves and ignore this module.

mod node;

pub use node::{NodeContent, ViewNode};

use crate::highlight::{Catalog, CatalogEntry};
use crate::model::WidgetModel;
use crate::overlay::{fallback_markup, ChromeTarget, Paint};

pub const WRAPPER_CLASS: &str = "codeblock";
pub const SURFACE_CLASS: &str = "codeblock-input";
pub const OVERLAY_HOST_CLASS: &str = "codeblock-highlight";
pub const CONTROLS_CLASS: &str = "codeblock-controls";
pub const LANGUAGE_SELECT_CLASS: &str = "codeblock-language";
pub const THEME_SELECT_CLASS: &str = "codeblock-theme";

// Child positions inside the wrapper / controls row
const SURFACE: usize = 0;
const OVERLAY: usize = 1;
const CONTROLS: usize = 2;
const LANGUAGE: usize = 0;
const THEME: usize = 1;

/// The view tree of one block, plus the surface caret
#[derive(Debug, Clone)]
pub struct BlockView {
    root: ViewNode,
    caret: usize,
}

impl BlockView {
    pub fn build(model: &WidgetModel, catalog: &dyn Catalog) -> Self {
        let read_only = model.read_only;

        let surface = ViewNode::new("textarea")
            .class(SURFACE_CLASS)
            .attr("placeholder", &model.config.placeholder)
            .attr("spellcheck", "false")
            .flag("readonly", read_only)
            .text(&model.surface.text);

        let overlay = ViewNode::new("div")
            .class(OVERLAY_HOST_CLASS)
            .attr("aria-hidden", "true")
            .markup(&fallback_markup(model.state.code(), &model.config.overlay_class));

        let controls = ViewNode::new("div")
            .class(CONTROLS_CLASS)
            .child(select(
                LANGUAGE_SELECT_CLASS,
                catalog.languages(),
                model.state.language(),
                read_only,
            ))
            .child(select(
                THEME_SELECT_CLASS,
                catalog.themes(),
                model.state.theme(),
                read_only,
            ));

        let root = ViewNode::new("div")
            .class(WRAPPER_CLASS)
            .child(surface)
            .child(overlay)
            .child(controls);

        Self {
            root,
            caret: model.surface.caret,
        }
    }

    pub fn root(&self) -> &ViewNode {
        &self.root
    }

    pub fn surface(&self) -> &ViewNode {
        &self.root.children()[SURFACE]
    }

    /// Current text of the editable surface
    pub fn surface_text(&self) -> &str {
        match &self.surface().content {
            NodeContent::Text(text) => text,
            _ => "",
        }
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn overlay(&self) -> &ViewNode {
        &self.root.children()[OVERLAY]
    }

    /// Markup currently painted into the overlay
    pub fn overlay_markup(&self) -> &str {
        match &self.overlay().content {
            NodeContent::Markup(markup) => markup,
            _ => "",
        }
    }

    pub fn chrome(&self, target: ChromeTarget) -> &ViewNode {
        match target {
            ChromeTarget::Wrapper => &self.root,
            ChromeTarget::LanguageSelect => &self.root.children()[CONTROLS].children()[LANGUAGE],
            ChromeTarget::ThemeSelect => &self.root.children()[CONTROLS].children()[THEME],
        }
    }

    fn chrome_mut(&mut self, target: ChromeTarget) -> &mut ViewNode {
        match target {
            ChromeTarget::Wrapper => &mut self.root,
            ChromeTarget::LanguageSelect => {
                &mut self.root.children_mut()[CONTROLS].children_mut()[LANGUAGE]
            }
            ChromeTarget::ThemeSelect => {
                &mut self.root.children_mut()[CONTROLS].children_mut()[THEME]
            }
        }
    }

    /// Id of the selected option of a selector, if any
    pub fn selected(&self, target: ChromeTarget) -> Option<&str> {
        self.chrome(target)
            .children()
            .iter()
            .find(|opt| opt.get_attr("selected").is_some())
            .and_then(|opt| opt.get_attr("value"))
    }

    /// Mark `id` as the selected option, adding it if the catalog lacks it
    pub fn select_option(&mut self, target: ChromeTarget, id: &str) {
        if target == ChromeTarget::Wrapper {
            return;
        }
        let select = self.chrome_mut(target);
        let known = select
            .children()
            .iter()
            .any(|opt| opt.get_attr("value") == Some(id));
        if !known {
            *select = std::mem::replace(select, ViewNode::new("select")).child(option(id, id, false));
        }
        for opt in select.children_mut() {
            if opt.get_attr("value") == Some(id) {
                opt.set_attr("selected", "");
            } else {
                opt.remove_attr("selected");
            }
        }
    }

    pub fn to_html(&self) -> String {
        self.root.to_html()
    }
}

impl Paint for BlockView {
    fn set_overlay_markup(&mut self, markup: &str) {
        self.root.children_mut()[OVERLAY].content = NodeContent::Markup(markup.to_string());
    }

    fn set_chrome_style(&mut self, target: ChromeTarget, style: &str) {
        self.chrome_mut(target).style = style.to_string();
    }

    fn set_surface_text(&mut self, text: &str, caret: Option<usize>) {
        self.root.children_mut()[SURFACE].content = NodeContent::Text(text.to_string());
        self.caret = caret.unwrap_or_else(|| text.chars().count());
    }
}

fn option(id: &str, label: &str, selected: bool) -> ViewNode {
    ViewNode::new("option")
        .attr("value", id)
        .flag("selected", selected)
        .text(label)
}

fn select(class: &str, entries: Vec<CatalogEntry>, current: &str, disabled: bool) -> ViewNode {
    let mut node = ViewNode::new("select").class(class).flag("disabled", disabled);
    if !entries.iter().any(|e| e.id == current) {
        // Saved data may name something the catalog does not list
        node = node.child(option(current, current, true));
    }
    for entry in entries {
        let selected = entry.id == current;
        node = node.child(option(&entry.id, &entry.display_name, selected));
    }
    node
}
