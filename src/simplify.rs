//! Structural simplification for the tree path.
//!
//! Each rule runs to a fixed point: a pass works on a snapshot of the nodes
//! taken at its start, and the loop ends after the first pass that changes
//! nothing. Every change removes a node, so the loops terminate.

use log::debug;

use crate::dom::{self, Document, NodeRef};
use crate::tags::{self, WHITESPACE_SENSITIVE_TAGS};

/// Divs whose trimmed text is longer than this are never unwrapped.
const SIGNIFICANT_TEXT_LEN: usize = 10;

/// Counts of what simplification changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimplifyReport {
    pub unwrapped_divs: usize,
    pub removed_elements: usize,
    pub whitespace_nodes: usize,
    pub passes: usize,
}

/// Run all simplification rules.
pub fn simplify(doc: &Document) -> SimplifyReport {
    let mut report = SimplifyReport::default();
    report.whitespace_nodes = remove_whitespace_text(doc);

    let (unwrapped, removed_divs, div_passes) = unwrap_divs(doc);
    let (removed_empty, empty_passes) = remove_empty_elements(doc);

    report.unwrapped_divs = unwrapped;
    report.removed_elements = removed_divs + removed_empty;
    report.passes = div_passes + empty_passes;
    debug!("structure simplified: {report:?}");
    report
}

/// Collapse single-child wrapper divs and drop empty divs.
///
/// Returns `(unwrapped, removed, passes)`.
pub fn unwrap_divs(doc: &Document) -> (usize, usize, usize) {
    let root = doc.root().id;
    let (mut unwrapped, mut removed, mut passes) = (0, 0, 0);

    loop {
        passes += 1;
        let mut changed = false;
        let snapshot: Vec<NodeRef> = doc.select("div").nodes().to_vec();

        for div in &snapshot {
            if !dom::is_attached(div, root) {
                continue;
            }
            let children = dom::element_children(div);
            let preserved = dom::has_preserved_attributes(div);
            let text = dom::text_content(div);

            if children.len() == 1 && !preserved && dom::trimmed_len(&text) <= SIGNIFICANT_TEXT_LEN {
                let child = children[0];
                let bare_div_child = dom::has_tag(&child, "div") && !dom::has_preserved_attributes(&child);
                if !bare_div_child {
                    dom::replace_node(div, &child);
                    unwrapped += 1;
                    changed = true;
                }
            } else if children.is_empty() && !preserved && text.trim().is_empty() {
                dom::remove_node(div);
                removed += 1;
                changed = true;
            }
        }

        if !changed {
            return (unwrapped, removed, passes);
        }
    }
}

/// Remove elements with no text, no element children and no preserved
/// attributes, except the always-kept tags. Removal cascades upwards.
///
/// Returns `(removed, passes)`.
pub fn remove_empty_elements(doc: &Document) -> (usize, usize) {
    let root = doc.root().id;
    let (mut removed, mut passes) = (0, 0);

    loop {
        passes += 1;
        let mut changed = false;
        let snapshot: Vec<NodeRef> = doc.select("*").nodes().to_vec();

        for node in snapshot.iter().rev() {
            if !dom::is_attached(node, root) || !should_remove_element(node) {
                continue;
            }
            dom::remove_node(node);
            removed += 1;
            changed = true;
        }

        if !changed {
            return (removed, passes);
        }
    }
}

/// Whether an element is empty noise.
#[must_use]
pub fn should_remove_element(node: &NodeRef) -> bool {
    let Some(tag) = dom::tag_name(node) else {
        return false;
    };
    if tags::is_always_kept(&tag) {
        return false;
    }
    dom::text_content(node).trim().is_empty()
        && dom::element_children(node).is_empty()
        && !dom::has_preserved_attributes(node)
}

/// Remove whitespace-only text nodes outside `pre`, `code` and `textarea`.
pub fn remove_whitespace_text(doc: &Document) -> usize {
    let blank: Vec<NodeRef> = doc
        .root()
        .descendants()
        .into_iter()
        .filter(|n| n.is_text() && n.text().trim().is_empty())
        .filter(|n| {
            !dom::parent_tag(n).is_some_and(|t| WHITESPACE_SENSITIVE_TAGS.contains(&t.as_str()))
        })
        .collect();
    for node in &blank {
        dom::remove_node(node);
    }
    blank.len()
}
