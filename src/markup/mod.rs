//! Rendered markup and the static swatch pass
//!
//! A minimal element tree standing in for a rendered document fragment, and
//! [`annotate_inline_code`], which appends a swatch marker to every inline
//! `code` element whose text is a color literal.

use crate::color;
use crate::constants::markup::{
    ARIA_LABEL_PREFIX, CODE_TAG, PRE_TAG, SWATCH_CLASS, SWATCH_TAG,
};
use std::fmt::Write;

/// Child of an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An element with ordered attributes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Element {
            tag: tag.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    #[must_use]
    pub fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set or replace an attribute, keeping its original position
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value,
            None => self.attributes.push((name.to_string(), value)),
        }
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr("class").unwrap_or("").split_whitespace()
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if self.has_class(class) {
            return;
        }
        let joined = match self.attr("class") {
            Some(existing) if !existing.trim().is_empty() => format!("{} {}", existing, class),
            _ => class.to_string(),
        };
        self.set_attr("class", joined);
    }

    pub fn append_child(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    /// Direct element children
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// First descendant carrying `class`, depth first
    #[must_use]
    pub fn query_selector_class(&self, class: &str) -> Option<&Element> {
        self.child_elements().find_map(|e| {
            if e.has_class(class) {
                Some(e)
            } else {
                e.query_selector_class(class)
            }
        })
    }

    /// Concatenated text of all descendants
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(t) => out.push_str(t),
                Node::Element(e) => e.collect_text(out),
            }
        }
    }

    /// Serialize as HTML
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag);
        for (name, value) in &self.attributes {
            let _ = write!(out, " {}=\"{}\"", name, escape(value, true));
        }
        out.push('>');
        for child in &self.children {
            match child {
                Node::Text(t) => out.push_str(&escape(t, false)),
                Node::Element(e) => e.write_html(out),
            }
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

fn escape(text: &str, in_attr: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attr => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Marker element carrying the swatch color
#[must_use]
pub fn swatch_marker(color: &color::CanonicalColor) -> Element {
    Element::new(SWATCH_TAG)
        .with_class(SWATCH_CLASS)
        .with_attr("style", format!("background-color: {};", color))
        .with_attr("aria-label", format!("{} {}", ARIA_LABEL_PREFIX, color))
}

/// Append a swatch marker to every inline `code` element under `root`
/// whose trimmed text is a color literal.
///
/// `code` inside `pre` is block code and is left alone. Elements that
/// already hold a marker are skipped, so running the pass twice is a no-op.
pub fn annotate_inline_code(root: &mut Element) {
    let inside_pre = root.tag.eq_ignore_ascii_case(PRE_TAG);
    let added = annotate_children(root, inside_pre);
    if added > 0 {
        log::debug!("appended {} inline color swatches", added);
    }
}

fn annotate_children(parent: &mut Element, inside_pre: bool) -> usize {
    let mut added = 0;
    for child in parent.children.iter_mut() {
        let Node::Element(el) = child else {
            continue;
        };
        if el.tag.eq_ignore_ascii_case(CODE_TAG) && !inside_pre && annotate_code(el) {
            added += 1;
        }
        let nested_pre = inside_pre || el.tag.eq_ignore_ascii_case(PRE_TAG);
        added += annotate_children(el, nested_pre);
    }
    added
}

fn annotate_code(code: &mut Element) -> bool {
    if code.query_selector_class(SWATCH_CLASS).is_some() {
        return false;
    }

    let text = code.text_content();
    let Some(color) = color::normalize(text.trim()) else {
        return false;
    };

    code.append_child(swatch_marker(&color));
    true
}
