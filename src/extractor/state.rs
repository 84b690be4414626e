//! Processed-node tracking for one extraction pass.
//!
//! A node is marked once it has been emitted, or swallowed by an ancestor's
//! reconstruction, so it is never emitted twice. Marks are never removed.

use std::collections::HashSet;

use dom_query::{NodeId, NodeRef};

/// Set of node ids already handled in the current pass.
#[derive(Debug, Default)]
pub struct ProcessedSet {
    nodes: HashSet<NodeId>,
}

impl ProcessedSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a single node.
    pub fn mark(&mut self, node: &NodeRef) {
        self.nodes.insert(node.id);
    }

    /// Mark a node together with all of its descendants.
    pub fn mark_subtree(&mut self, node: &NodeRef) {
        self.nodes.insert(node.id);
        self.nodes.extend(node.descendants().iter().map(|d| d.id));
    }

    /// Check if a node has been handled.
    #[must_use]
    pub fn contains(&self, node: &NodeRef) -> bool {
        self.nodes.contains(&node.id)
    }

    /// Number of marked nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether nothing has been marked yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom_query::Document;

    #[test]
    fn test_mark_single_node() {
        let doc = Document::from("<p>test <b>bold</b></p>");
        let p = doc.select("p").nodes()[0];
        let b = doc.select("b").nodes()[0];

        let mut processed = ProcessedSet::new();
        assert!(processed.is_empty());
        processed.mark(&p);
        assert!(processed.contains(&p));
        assert!(!processed.contains(&b));
    }

    #[test]
    fn test_mark_subtree_covers_descendants() {
        let doc = Document::from("<h2>Title <span>with <b>nested</b></span></h2>");
        let h2 = doc.select("h2").nodes()[0];
        let b = doc.select("b").nodes()[0];

        let mut processed = ProcessedSet::new();
        processed.mark_subtree(&h2);
        assert!(processed.contains(&b));
        // h2, "Title ", span, "with ", b, "nested"
        assert_eq!(processed.len(), 6);
    }

    #[test]
    fn test_marks_are_monotonic() {
        let doc = Document::from("<div>x</div>");
        let div = doc.select("div").nodes()[0];

        let mut processed = ProcessedSet::new();
        processed.mark(&div);
        processed.mark_subtree(&div);
        processed.mark(&div);
        assert!(processed.contains(&div));
        assert_eq!(processed.len(), 2);
    }
}
