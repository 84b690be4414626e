//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate. The cleaner mostly works on
//! `NodeRef`s because it needs text and comment nodes, which `Selection`
//! skips.

pub use dom_query::{Document, NodeId, NodeRef, Selection};

pub use tendril::StrTendril;

use crate::patterns::WHITESPACE;
use crate::tags;

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Tag/Node Information ===

/// Get tag name (lowercase) of an element node.
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.node_name().map(|t| t.to_ascii_lowercase())
}

/// Check if a node is an element with the given tag name.
#[must_use]
pub fn has_tag(node: &NodeRef, tag: &str) -> bool {
    tag_name(node).is_some_and(|t| t == tag)
}

// === Attribute Operations ===

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(node: &NodeRef, name: &str) -> Option<String> {
    Selection::from(*node).attr(name).map(|s| s.to_string())
}

/// Remove an attribute
#[inline]
pub fn remove_attribute(node: &NodeRef, name: &str) {
    Selection::from(*node).remove_attr(name);
}

/// Get all attributes as key-value pairs, in document order.
#[must_use]
pub fn get_all_attributes(node: &NodeRef) -> Vec<(String, String)> {
    node.attrs()
        .iter()
        .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
        .collect()
}

/// Check if the element carries any preserved attribute.
#[must_use]
pub fn has_preserved_attributes(node: &NodeRef) -> bool {
    node.attrs()
        .iter()
        .any(|attr| tags::is_preserved_attribute(&attr.name.local))
}

// === Tree Navigation ===

/// Direct element children.
#[must_use]
pub fn element_children<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    node.children().into_iter().filter(NodeRef::is_element).collect()
}

/// Tag name of the parent element, if any.
#[must_use]
pub fn parent_tag(node: &NodeRef) -> Option<String> {
    node.parent().as_ref().and_then(tag_name)
}

/// Next element sibling, looking only across whitespace text and comments.
///
/// Returns `None` when non-whitespace text separates the two elements.
#[must_use]
pub fn adjacent_element_sibling<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    let mut sibling = node.next_sibling();
    while let Some(s) = sibling {
        if s.is_element() {
            return Some(s);
        }
        if s.is_text() && !s.text().trim().is_empty() {
            return None;
        }
        sibling = s.next_sibling();
    }
    None
}

/// Check that a node is still reachable from the document root.
#[must_use]
pub fn is_attached(node: &NodeRef, root: NodeId) -> bool {
    let mut current = *node;
    loop {
        if current.id == root {
            return true;
        }
        match current.parent() {
            Some(p) => current = p,
            None => return false,
        }
    }
}

/// Check whether any ancestor (excluding the node) has one of the tags.
#[must_use]
pub fn has_ancestor_tag(node: &NodeRef, tags: &[&str]) -> bool {
    let mut current = node.parent();
    while let Some(p) = current {
        if tag_name(&p).is_some_and(|t| tags.contains(&t.as_str())) {
            return true;
        }
        current = p.parent();
    }
    false
}

// === Text Content ===

/// All text of node and descendants.
#[inline]
#[must_use]
pub fn text_content(node: &NodeRef) -> StrTendril {
    node.text()
}

/// Text held by the node's own text children, descendants excluded.
/// Separate text nodes (split by `<br>` or child elements) are joined with a
/// space.
#[must_use]
pub fn direct_text(node: &NodeRef) -> String {
    node.children()
        .iter()
        .filter(|c| c.is_text())
        .map(|c| c.text().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// All text of node and descendants, with every `<br>` read as a space.
#[must_use]
pub fn text_with_breaks(node: &NodeRef) -> String {
    let mut out = String::new();
    for d in node.descendants() {
        if d.is_text() {
            out.push_str(&d.text());
        } else if has_tag(&d, "br") {
            out.push(' ');
        }
    }
    out
}

/// Length in chars of the trimmed text.
#[inline]
#[must_use]
pub fn trimmed_len(text: &str) -> usize {
    text.trim().chars().count()
}

/// Collapse whitespace runs to single spaces and trim.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

// === Tree Manipulation ===

/// Detach a node (element, text or comment) from its parent.
#[inline]
pub fn remove_node(node: &NodeRef) {
    node.remove_from_parent();
}

/// Replace `old` with `new`, moving `new` out of its current position.
#[inline]
pub fn replace_node(old: &NodeRef, new: &NodeRef) {
    Selection::from(*old).replace_with_selection(&Selection::from(*new));
}

// === Serialization Helpers ===

/// Escape text for use as element content.
#[must_use]
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape text for use inside a double-quoted attribute value.
#[must_use]
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
    out
}

/// Decode the basic named entities and `&#39;`. Titles pulled out of raw
/// markup go through this before being escaped again on output.
#[must_use]
pub fn unescape_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", "\u{a0}")
        .replace("&amp;", "&")
}

/// Opening tag carrying only preserved attributes.
#[must_use]
pub fn open_tag_with_preserved(tag: &str, node: &NodeRef) -> String {
    let mut out = format!("<{tag}");
    for (key, value) in get_all_attributes(node) {
        if tags::is_preserved_attribute(&key) {
            out.push_str(&format!(" {}=\"{}\"", key.to_ascii_lowercase(), escape_attr(&value)));
        }
    }
    out.push('>');
    out
}
