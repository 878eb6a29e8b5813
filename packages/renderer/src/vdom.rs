use crate::html::{escape_attr, escape_html, is_self_closing, text_of_markup};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Virtual DOM node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VNode {
    /// HTML element
    Element {
        tag: String,
        attributes: BTreeMap<String, String>,
        styles: BTreeMap<String, String>,
        children: Vec<VNode>,
    },

    /// Text node, escaped on output
    Text { content: String },

    /// Pre-formatted markup emitted as is (rich-text props)
    Raw { html: String },

    /// Comment node
    Comment { content: String },
}

impl VNode {
    pub fn element(tag: impl Into<String>) -> Self {
        VNode::Element {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            styles: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        VNode::Text {
            content: content.into(),
        }
    }

    pub fn raw(html: impl Into<String>) -> Self {
        VNode::Raw { html: html.into() }
    }

    pub fn comment(content: impl Into<String>) -> Self {
        VNode::Comment {
            content: content.into(),
        }
    }

    /// Shorthand for an element holding a single text node
    pub fn text_element(tag: impl Into<String>, content: impl Into<String>) -> Self {
        VNode::element(tag).with_child(VNode::text(content))
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Element {
            ref mut attributes, ..
        } = self
        {
            attributes.insert(key.into(), value.into());
        }
        self
    }

    /// Append to the `class` attribute
    pub fn with_class(mut self, class: impl AsRef<str>) -> Self {
        if let VNode::Element {
            ref mut attributes, ..
        } = self
        {
            let class = class.as_ref();
            attributes
                .entry("class".to_string())
                .and_modify(|existing| {
                    existing.push(' ');
                    existing.push_str(class);
                })
                .or_insert_with(|| class.to_string());
        }
        self
    }

    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Element { ref mut styles, .. } = self {
            styles.insert(key.into(), value.into());
        }
        self
    }

    pub fn with_child(mut self, child: VNode) -> Self {
        if let VNode::Element {
            ref mut children, ..
        } = self
        {
            children.push(child);
        }
        self
    }

    pub fn with_children(mut self, new_children: impl IntoIterator<Item = VNode>) -> Self {
        if let VNode::Element {
            ref mut children, ..
        } = self
        {
            children.extend(new_children);
        }
        self
    }

    /// Add `child` only when present
    pub fn with_optional_child(self, child: Option<VNode>) -> Self {
        match child {
            Some(child) => self.with_child(child),
            None => self,
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            VNode::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        match self {
            VNode::Element { attributes, .. } => attributes.get(key).map(String::as_str),
            _ => None,
        }
    }

    pub fn style(&self, key: &str) -> Option<&str> {
        match self {
            VNode::Element { styles, .. } => styles.get(key).map(String::as_str),
            _ => None,
        }
    }

    pub fn children(&self) -> &[VNode] {
        match self {
            VNode::Element { children, .. } => children,
            _ => &[],
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .map_or(false, |classes| classes.split_whitespace().any(|c| c == class))
    }

    /// Depth-first search for the first element carrying `class`
    pub fn find_by_class(&self, class: &str) -> Option<&VNode> {
        if self.has_class(class) {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find_by_class(class))
    }

    /// All elements carrying `class`, in document order
    pub fn find_all_by_class<'a>(&'a self, class: &str) -> Vec<&'a VNode> {
        let mut found = Vec::new();
        self.collect_by_class(class, &mut found);
        found
    }

    fn collect_by_class<'a>(&'a self, class: &str, found: &mut Vec<&'a VNode>) {
        if self.has_class(class) {
            found.push(self);
        }
        for child in self.children() {
            child.collect_by_class(class, found);
        }
    }

    /// Serialize to HTML markup
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            VNode::Element {
                tag,
                attributes,
                styles,
                children,
            } => {
                out.push('<');
                out.push_str(tag);

                for (name, value) in attributes {
                    out.push(' ');
                    out.push_str(name);
                    if !value.is_empty() {
                        out.push_str("=\"");
                        out.push_str(&escape_attr(value));
                        out.push('"');
                    }
                }

                if !styles.is_empty() {
                    out.push_str(" style=\"");
                    out.push_str(&escape_attr(&inline_style(styles)));
                    out.push('"');
                }

                if children.is_empty() && is_self_closing(tag) {
                    out.push_str(" />");
                    return;
                }

                out.push('>');
                for child in children {
                    child.write_html(out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
            VNode::Text { content } => out.push_str(&escape_html(content)),
            VNode::Raw { html } => out.push_str(html),
            VNode::Comment { content } => {
                out.push_str("<!-- ");
                out.push_str(&content.replace("--", "- -"));
                out.push_str(" -->");
            }
        }
    }

    /// Visible text with whitespace collapsed; markup in raw nodes is stripped
    pub fn text_content(&self) -> String {
        let mut segments = Vec::new();
        self.collect_text(&mut segments);
        segments
            .iter()
            .flat_map(|s| s.split_whitespace())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn collect_text(&self, segments: &mut Vec<String>) {
        match self {
            VNode::Element { children, .. } => {
                for child in children {
                    child.collect_text(segments);
                }
            }
            VNode::Text { content } => segments.push(content.clone()),
            VNode::Raw { html } => segments.push(text_of_markup(html)),
            VNode::Comment { .. } => {}
        }
    }
}

/// `key: value; ` pairs in key order
pub fn inline_style(styles: &BTreeMap<String, String>) -> String {
    styles
        .iter()
        .map(|(key, value)| format!("{}: {};", key, value))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_html_escapes_text_but_not_raw() {
        let node = VNode::element("div")
            .with_class("prose")
            .with_child(VNode::text("a < b & \"c\""))
            .with_child(VNode::raw("<p>kept</p>"));

        assert_eq!(
            node.to_html(),
            "<div class=\"prose\">a &lt; b &amp; &quot;c&quot;<p>kept</p></div>"
        );
    }

    #[test]
    fn test_void_elements_self_close() {
        let img = VNode::element("img")
            .with_attr("src", "a.png")
            .with_attr("alt", "");
        assert_eq!(img.to_html(), "<img alt src=\"a.png\" />");
    }

    #[test]
    fn test_styles_render_in_key_order() {
        let node = VNode::element("section")
            .with_style("padding", "60px 20px")
            .with_style("background-color", "#fff");
        assert_eq!(
            node.to_html(),
            "<section style=\"background-color: #fff; padding: 60px 20px;\"></section>"
        );
    }

    #[test]
    fn test_with_class_appends() {
        let node = VNode::element("div").with_class("a").with_class("b");
        assert_eq!(node.attr("class"), Some("a b"));
        assert!(node.has_class("b"));
        assert!(!node.has_class("c"));
    }

    #[test]
    fn test_text_content_collapses_whitespace() {
        let node = VNode::element("div")
            .with_child(VNode::text_element("h1", "  Hello\n world "))
            .with_child(VNode::comment("ignored"))
            .with_child(VNode::raw("<h2>About</h2><p>Us &amp; you</p>"));

        assert_eq!(node.text_content(), "Hello world About Us & you");
    }

    #[test]
    fn test_find_by_class() {
        let node = VNode::element("div").with_child(
            VNode::element("ul").with_children(vec![
                VNode::element("li").with_class("item"),
                VNode::element("li").with_class("item"),
            ]),
        );

        assert_eq!(node.find_all_by_class("item").len(), 2);
        assert_eq!(node.find_by_class("item").and_then(VNode::tag), Some("li"));
        assert!(node.find_by_class("missing").is_none());
    }
}
