//! Per-kind element handlers.
//!
//! Every handler marks what it consumes in the walker's processed set and
//! returns whether the walk should continue into the node's children.

use dom_query::NodeRef;

use super::filter::is_ui_text;
use super::inline::{image_html, inline_children, list_html, mixed_content};
use super::pipeline::{WalkMode, Walker};
use super::split::chunk_paragraphs;
use crate::dom::{self, escape_text};
use crate::tags::ElementKind;

/// Walk control returned by a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Visit the children next.
    Descend,
    /// Children are consumed or irrelevant.
    Skip,
}

const HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Whether any descendant is an image, heading, list, paragraph or div.
#[must_use]
pub fn has_structural_descendant(node: &NodeRef) -> bool {
    node.descendants().iter().any(|d| {
        dom::tag_name(d).is_some_and(|t| ElementKind::from_tag(&t).is_structural())
    })
}

/// Long enough and not interface chrome.
fn qualifies(text: &str, min_len: usize) -> bool {
    dom::trimmed_len(text) > min_len && !is_ui_text(text)
}

/// Emit a text block. Without a region, oversized text is split into
/// sentence-packed paragraphs.
fn emit_text_block(w: &mut Walker<'_>, text: &str) {
    if w.mode == WalkMode::Fallback && text.chars().count() > w.opts.paragraph_chunk_len {
        for chunk in chunk_paragraphs(text, w.opts.paragraph_chunk_len) {
            w.emit(format!("<p>{}</p>", escape_text(&chunk)));
        }
    } else {
        w.emit(format!("<div>{}</div>", escape_text(text)));
    }
}

pub fn handle_image(w: &mut Walker<'_>, node: &NodeRef<'_>) -> Flow {
    w.processed.mark(node);
    if let Some(img) = image_html(node) {
        w.emit(img);
    }
    Flow::Skip
}

pub fn handle_heading(w: &mut Walker<'_>, node: &NodeRef<'_>) -> Flow {
    w.processed.mark_subtree(node);
    let text = dom::normalize_whitespace(&dom::text_content(node));
    if dom::trimmed_len(&text) <= w.opts.min_heading_len {
        return Flow::Skip;
    }
    let Some(tag) = dom::tag_name(node) else {
        return Flow::Skip;
    };
    let inner = inline_children(node);
    let inner = inner.trim();
    let inner = if inner.is_empty() {
        escape_text(&text)
    } else {
        inner.to_string()
    };
    w.emit(format!("<{tag}>{inner}</{tag}>"));
    Flow::Skip
}

pub fn handle_list(w: &mut Walker<'_>, node: &NodeRef<'_>) -> Flow {
    w.processed.mark_subtree(node);
    if let Some(list) = list_html(node) {
        w.emit(list);
    }
    Flow::Skip
}

/// `li` outside any list, kept as a one-item list.
pub fn handle_list_item(w: &mut Walker<'_>, node: &NodeRef<'_>) -> Flow {
    w.processed.mark_subtree(node);
    let content = mixed_content(node);
    if !content.trim().is_empty() {
        w.emit(format!("<ul><li>{content}</li></ul>"));
    }
    Flow::Skip
}

pub fn handle_paragraph(w: &mut Walker<'_>, node: &NodeRef<'_>) -> Flow {
    w.processed.mark_subtree(node);
    let inner = inline_children(node);
    let inner = inner.trim();
    let has_text = dom::trimmed_len(&dom::text_content(node)) > 0;
    if has_text || inner.contains("<img") {
        w.emit(format!("<p>{inner}</p>"));
    }
    Flow::Skip
}

pub fn handle_strong(w: &mut Walker<'_>, node: &NodeRef<'_>) -> Flow {
    w.processed.mark_subtree(node);
    if dom::has_ancestor_tag(node, &["p"]) {
        return Flow::Skip;
    }
    let inner = inline_children(node);
    let inner = inner.trim();
    if dom::trimmed_len(&dom::text_content(node)) > 0 {
        w.emit(format!("<strong>{inner}</strong>"));
    }
    Flow::Skip
}

/// Free-standing span holding a sentence of its own.
pub fn handle_span(w: &mut Walker<'_>, node: &NodeRef<'_>) -> Flow {
    if dom::has_ancestor_tag(node, &["p", "li"]) || dom::has_ancestor_tag(node, &HEADING_TAGS) {
        return Flow::Skip;
    }
    if has_structural_descendant(node) {
        return Flow::Descend;
    }
    let text = dom::normalize_whitespace(&dom::text_with_breaks(node));
    if qualifies(&text, w.opts.min_block_text_len) {
        w.processed.mark_subtree(node);
        w.emit(format!("<div>{}</div>", escape_text(&text)));
        return Flow::Skip;
    }
    Flow::Descend
}

/// Divs either carry text themselves (leaf divs, merged pairwise with an
/// adjacent leaf div) or are containers whose own text is kept before
/// descending.
pub fn handle_div(w: &mut Walker<'_>, node: &NodeRef<'_>) -> Flow {
    if !has_structural_descendant(node) {
        w.processed.mark_subtree(node);
        let text = dom::normalize_whitespace(&dom::text_with_breaks(node));
        if qualifies(&text, w.opts.min_div_text_len) {
            let merged = match merge_partner(w, node) {
                Some(next_text) => format!("{text} {next_text}"),
                None => text,
            };
            emit_text_block(w, &merged);
        }
        return Flow::Skip;
    }

    w.processed.mark(node);
    let direct = dom::normalize_whitespace(&dom::direct_text(node));
    if qualifies(&direct, w.opts.min_block_text_len) {
        emit_text_block(w, &direct);
    }
    Flow::Descend
}

/// Text of the next sibling if it is an unprocessed leaf div that
/// qualifies on its own. The sibling is consumed. The walk root never merges
/// with what lies outside it.
fn merge_partner(w: &mut Walker<'_>, node: &NodeRef<'_>) -> Option<String> {
    if w.root == Some(node.id) {
        return None;
    }
    let next = dom::adjacent_element_sibling(node)?;
    if !dom::has_tag(&next, "div") || w.processed.contains(&next) || has_structural_descendant(&next)
    {
        return None;
    }
    let text = dom::normalize_whitespace(&dom::text_with_breaks(&next));
    if !qualifies(&text, w.opts.min_div_text_len) {
        return None;
    }
    w.processed.mark_subtree(&next);
    Some(text)
}

/// Section, article, blockquote and the rest: own text kept, then descend.
pub fn handle_other(w: &mut Walker<'_>, node: &NodeRef<'_>) -> Flow {
    w.processed.mark(node);
    let direct = dom::normalize_whitespace(&dom::direct_text(node));
    if qualifies(&direct, w.opts.min_block_text_len) {
        emit_text_block(w, &direct);
    }
    Flow::Descend
}
