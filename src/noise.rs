//! Noise stripping for the tree path.
//!
//! Removes styling, scripts, page chrome, platform widgets, comments and
//! noisy attributes. Every operation is idempotent. Class and id based
//! detection must run before [`strip_attributes`], which deletes both.

use std::collections::HashSet;

use log::debug;

use crate::dom::{self, Document, NodeId, NodeRef};
use crate::patterns::NOISE_CLASS_TOKEN;
use crate::tags::{self, NON_CONTENT_TAGS, NOISE_TAGS};

/// Counts of what one noise pass removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoiseReport {
    pub styles_and_scripts: usize,
    pub platform_elements: usize,
    pub non_content_elements: usize,
    pub meta_elements: usize,
    pub comments: usize,
    pub attributes: usize,
}

/// Run every noise operation in a safe order.
///
/// Elements that contain one of the `protected` nodes are never removed for
/// their class or id. Chrome tags are removed regardless.
pub fn strip_noise(doc: &Document, protected: &[NodeId]) -> NoiseReport {
    let report = NoiseReport {
        styles_and_scripts: remove_styles_and_scripts(doc),
        platform_elements: remove_platform_elements(doc),
        non_content_elements: remove_non_content_areas(doc, protected),
        meta_elements: clean_meta_tags(doc),
        comments: remove_comments(doc),
        attributes: strip_attributes(doc),
    };
    debug!("noise stripped: {report:?}");
    report
}

/// Remove `style`, `script` and stylesheet `link` elements.
pub fn remove_styles_and_scripts(doc: &Document) -> usize {
    let mut removed = 0;
    for node in doc.select("*").nodes() {
        let Some(tag) = dom::tag_name(node) else {
            continue;
        };
        let is_stylesheet = tag == "link"
            && dom::get_attribute(node, "rel")
                .is_some_and(|rel| rel.to_ascii_lowercase().contains("stylesheet"));
        if NOISE_TAGS.contains(&tag.as_str()) || is_stylesheet {
            dom::remove_node(node);
            removed += 1;
        }
    }
    removed
}

/// Remove platform-specific custom elements such as `mpvoice`.
pub fn remove_platform_elements(doc: &Document) -> usize {
    let mut removed = 0;
    for node in doc.select("*").nodes() {
        if dom::tag_name(node).is_some_and(|t| tags::is_platform_tag(&t)) {
            dom::remove_node(node);
            removed += 1;
        }
    }
    removed
}

/// Remove `nav`/`header`/`footer`/`aside` and elements whose class tokens
/// or id look like navigation, sidebars, menus or ads.
pub fn remove_non_content_areas(doc: &Document, protected: &[NodeId]) -> usize {
    let shielded = shielded_nodes(doc, protected);
    let root = doc.root().id;
    let mut removed = 0;

    for node in doc.select("*").nodes() {
        let Some(tag) = dom::tag_name(node) else {
            continue;
        };
        if matches!(tag.as_str(), "html" | "head" | "body") || !dom::is_attached(node, root) {
            continue;
        }
        let chrome = NON_CONTENT_TAGS.contains(&tag.as_str());
        if chrome || (!shielded.contains(&node.id) && has_noise_class(node)) {
            dom::remove_node(node);
            removed += 1;
        }
    }
    removed
}

/// Protected nodes and all their ancestors. Nodes inside page chrome are
/// not protected.
fn shielded_nodes(doc: &Document, protected: &[NodeId]) -> HashSet<NodeId> {
    let mut shielded = HashSet::new();
    let all: Vec<NodeRef> = doc.select("*").nodes().to_vec();
    let in_chrome = |n: &NodeRef| {
        dom::tag_name(n).is_some_and(|t| NON_CONTENT_TAGS.contains(&t.as_str()))
            || dom::has_ancestor_tag(n, &NON_CONTENT_TAGS)
    };
    for node in all
        .iter()
        .filter(|n| protected.contains(&n.id) && !in_chrome(*n))
    {
        let mut current = Some(*node);
        while let Some(n) = current {
            if !shielded.insert(n.id) {
                break;
            }
            current = n.parent();
        }
    }
    shielded
}

fn has_noise_class(node: &NodeRef) -> bool {
    let class_hit = dom::get_attribute(node, "class")
        .is_some_and(|c| c.split_whitespace().any(|t| NOISE_CLASS_TOKEN.is_match(t)));
    let id_hit = dom::get_attribute(node, "id").is_some_and(|id| NOISE_CLASS_TOKEN.is_match(id.trim()));
    class_hit || id_hit
}

/// Remove `meta` elements that declare nothing useful for the output.
///
/// Kept: `charset`, `http-equiv=Content-Type`, `name=viewport`,
/// `name=description`.
pub fn clean_meta_tags(doc: &Document) -> usize {
    let mut removed = 0;
    for node in doc.select("meta").nodes() {
        let has_charset = dom::get_attribute(node, "charset").is_some();
        let content_type = dom::get_attribute(node, "http-equiv")
            .is_some_and(|v| v.eq_ignore_ascii_case("content-type"));
        let useful_name = dom::get_attribute(node, "name").is_some_and(|v| {
            v.eq_ignore_ascii_case("viewport") || v.eq_ignore_ascii_case("description")
        });
        if !(has_charset || content_type || useful_name) {
            dom::remove_node(node);
            removed += 1;
        }
    }
    removed
}

/// Remove every comment node.
pub fn remove_comments(doc: &Document) -> usize {
    let comments: Vec<NodeRef> = doc
        .root()
        .descendants()
        .into_iter()
        .filter(NodeRef::is_comment)
        .collect();
    for node in &comments {
        dom::remove_node(node);
    }
    comments.len()
}

/// Strip style, class, id, event handler, `data-*`, `aria-*`, `role` and
/// `tabindex` attributes. `data-src` and `data-alt` pass through.
pub fn strip_attributes(doc: &Document) -> usize {
    let mut removed = 0;
    for node in doc.select("*").nodes() {
        for (name, _) in dom::get_all_attributes(node) {
            if tags::is_removed_attribute(&name) {
                dom::remove_attribute(node, &name);
                removed += 1;
            }
        }
    }
    removed
}
