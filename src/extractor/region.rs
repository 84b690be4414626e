//! Primary content region location.
//!
//! Candidates are gathered while ids and classes still exist, i.e. before
//! noise stripping removes them. Node ids stay valid across the in-place
//! cleaning, so the candidates are judged afterwards on the cleaned text.

use dom_query::{Document, NodeId, NodeRef};

use crate::dom;
use crate::options::Options;

/// Region selectors in priority order.
pub static REGION_SELECTORS: [&str; 6] = [
    "#js_content",
    ".rich_media_content",
    r#"[id*="content"]"#,
    r#"[class*="content"]"#,
    "article",
    "main",
];

/// Collect candidate nodes in priority order, without duplicates.
#[must_use]
pub fn collect_candidates(doc: &Document) -> Vec<NodeId> {
    let mut candidates: Vec<NodeId> = Vec::new();
    for selector in REGION_SELECTORS {
        for node in doc.select(selector).nodes() {
            if !candidates.contains(&node.id) {
                candidates.push(node.id);
            }
        }
    }
    candidates
}

/// First candidate still in the tree whose trimmed text is long enough.
#[must_use]
pub fn locate_region<'a>(
    doc: &'a Document,
    candidates: &[NodeId],
    opts: &Options,
) -> Option<NodeRef<'a>> {
    let root = doc.root().id;
    candidates
        .iter()
        .filter_map(|id| doc.tree.get(id))
        .filter(|node| node.is_element() && dom::is_attached(node, root))
        .find(|node| dom::trimmed_len(&dom::text_content(node)) > opts.min_region_text_len)
}
