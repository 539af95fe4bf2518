//! Virtual view nodes
//!
//! A tiny element tree that serializes to HTML. Text content is escaped;
//! markup content is trusted and written verbatim.

use std::fmt::Write;

use crate::highlight::escape_html;

/// Contents of a node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeContent {
    Children(Vec<ViewNode>),
    /// Escaped on output
    Text(String),
    /// Pre-serialized HTML
    Markup(String),
}

/// One element of the view tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewNode {
    pub tag: &'static str,
    pub classes: Vec<String>,
    pub style: String,
    pub attrs: Vec<(String, String)>,
    pub content: NodeContent,
}

impl ViewNode {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            style: String::new(),
            attrs: Vec::new(),
            content: NodeContent::Children(Vec::new()),
        }
    }

    pub fn class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Boolean attribute, only present when `on`
    pub fn flag(mut self, name: &str, on: bool) -> Self {
        if on {
            self.set_attr(name, "");
        }
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.content = NodeContent::Text(text.to_string());
        self
    }

    pub fn markup(mut self, markup: &str) -> Self {
        self.content = NodeContent::Markup(markup.to_string());
        self
    }

    pub fn child(mut self, child: ViewNode) -> Self {
        match &mut self.content {
            NodeContent::Children(children) => children.push(child),
            content => *content = NodeContent::Children(vec![child]),
        }
        self
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        match self.attrs.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.attrs.push((name.to_string(), value.to_string())),
        }
    }

    pub fn remove_attr(&mut self, name: &str) {
        self.attrs.retain(|(n, _)| n != name);
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn children(&self) -> &[ViewNode] {
        match &self.content {
            NodeContent::Children(children) => children,
            _ => &[],
        }
    }

    pub fn children_mut(&mut self) -> &mut [ViewNode] {
        match &mut self.content {
            NodeContent::Children(children) => children,
            _ => &mut [],
        }
    }

    /// Depth-first search for the first node carrying `class`
    pub fn find_by_class(&self, class: &str) -> Option<&ViewNode> {
        if self.has_class(class) {
            return Some(self);
        }
        self.children().iter().find_map(|c| c.find_by_class(class))
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag);
        if !self.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape_html(&self.classes.join(" ")));
        }
        if !self.style.is_empty() {
            let _ = write!(out, " style=\"{}\"", escape_html(&self.style));
        }
        for (name, value) in &self.attrs {
            if value.is_empty() {
                let _ = write!(out, " {}", name);
            } else {
                let _ = write!(out, " {}=\"{}\"", name, escape_html(value));
            }
        }
        out.push('>');
        match &self.content {
            NodeContent::Children(children) => {
                for child in children {
                    child.write_html(out);
                }
            }
            NodeContent::Text(text) => out.push_str(&escape_html(text)),
            NodeContent::Markup(markup) => out.push_str(markup),
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_html() {
        let node = ViewNode::new("div")
            .class("a")
            .child(ViewNode::new("textarea").flag("readonly", true).text("x<y"))
            .child(ViewNode::new("div").markup("<b>hi</b>"));
        assert_eq!(
            node.to_html(),
            r#"<div class="a"><textarea readonly>x&lt;y</textarea><div><b>hi</b></div></div>"#
        );
    }

    #[test]
    fn test_find_by_class() {
        let node = ViewNode::new("div").child(ViewNode::new("span").class("target"));
        assert_eq!(node.find_by_class("target").map(|n| n.tag), Some("span"));
        assert!(node.find_by_class("missing").is_none());
    }
}
