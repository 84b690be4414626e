//! Main extraction walk.
//!
//! Pre-order traversal of the content root with an explicit stack, so deeply
//! nested WeChat section soup cannot overflow the call stack. Each element is
//! dispatched on its `ElementKind` to a handler that either emits markup and
//! stops, or lets the walk descend into its children.

use dom_query::{Document, NodeId, NodeRef};
use log::debug;

use super::handlers::{self, Flow};
use super::region;
use super::state::ProcessedSet;
use crate::dom;
use crate::options::Options;
use crate::tags::ElementKind;

/// Where the walk is rooted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkMode {
    /// Inside a located content region.
    Region,
    /// Whole body, no region found. Long div text is split into paragraphs.
    Fallback,
}

/// Handler signature for one element kind.
pub type Handler = fn(&mut Walker<'_>, &NodeRef<'_>) -> Flow;

/// Walk state shared by all handlers.
pub struct Walker<'o> {
    pub(super) opts: &'o Options,
    pub(super) mode: WalkMode,
    pub(super) processed: ProcessedSet,
    pub(super) root: Option<NodeId>,
    out: Vec<String>,
}

impl<'o> Walker<'o> {
    #[must_use]
    pub fn new(opts: &'o Options, mode: WalkMode) -> Self {
        Self {
            opts,
            mode,
            processed: ProcessedSet::new(),
            root: None,
            out: Vec::new(),
        }
    }

    /// Append one block of output markup.
    pub fn emit(&mut self, html: String) {
        self.out.push(html);
    }

    /// Number of blocks emitted so far.
    #[must_use]
    pub fn emitted(&self) -> usize {
        self.out.len()
    }

    /// Visit every element once, in document order. A region root is handled
    /// itself; in fallback mode the walk starts at the root's children.
    pub fn walk(&mut self, root: &NodeRef) {
        let mut stack: Vec<NodeRef> = match self.mode {
            WalkMode::Region => {
                self.root = Some(root.id);
                vec![*root]
            }
            WalkMode::Fallback => dom::element_children(root).into_iter().rev().collect(),
        };
        while let Some(node) = stack.pop() {
            if self.processed.contains(&node) {
                continue;
            }
            let Some(tag) = dom::tag_name(&node) else {
                continue;
            };
            let handler = handler_for(ElementKind::from_tag(&tag));
            if handler(self, &node) == Flow::Descend {
                stack.extend(dom::element_children(&node).into_iter().rev());
            }
        }
    }

    /// Concatenated output fragment.
    #[must_use]
    pub fn finish(self) -> String {
        self.out.concat()
    }
}

/// Dispatch table.
#[must_use]
pub fn handler_for(kind: ElementKind) -> Handler {
    match kind {
        ElementKind::Image => handlers::handle_image,
        ElementKind::Heading(_) => handlers::handle_heading,
        ElementKind::List => handlers::handle_list,
        ElementKind::ListItem => handlers::handle_list_item,
        ElementKind::Paragraph => handlers::handle_paragraph,
        ElementKind::Strong => handlers::handle_strong,
        ElementKind::Span => handlers::handle_span,
        ElementKind::Div => handlers::handle_div,
        ElementKind::Other => handlers::handle_other,
    }
}

/// Result of one extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Reconstructed body fragment. Empty when nothing qualified.
    pub fragment: String,
    /// Whether a content region was found.
    pub used_region: bool,
    /// Number of emitted blocks.
    pub blocks: usize,
}

/// Extract the article body from a cleaned document.
///
/// `candidates` are the region candidates collected before cleaning.
#[must_use]
pub fn extract_content(doc: &Document, candidates: &[NodeId], opts: &Options) -> Extraction {
    let (root, mode) = match region::locate_region(doc, candidates, opts) {
        Some(found) => (found, WalkMode::Region),
        None => match doc.select("body").nodes().first() {
            Some(body) => (*body, WalkMode::Fallback),
            None => {
                return Extraction {
                    fragment: String::new(),
                    used_region: false,
                    blocks: 0,
                };
            }
        },
    };
    debug!("extracting in {mode:?} mode");

    let mut walker = Walker::new(opts, mode);
    walker.walk(&root);
    let blocks = walker.emitted();
    Extraction {
        fragment: walker.finish(),
        used_region: mode == WalkMode::Region,
        blocks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(html: &str) -> Extraction {
        let doc = Document::from(html);
        let candidates = region::collect_candidates(&doc);
        extract_content(&doc, &candidates, &Options::default())
    }

    #[test]
    fn fallback_walk_emits_in_document_order() {
        let out = run(
            r#"<body><div><h1>Title Text Here</h1><p>Some <strong>important</strong> text content that is long enough.</p><img src="http://x/1.jpg"></div></body>"#,
        );
        assert!(!out.used_region);
        assert_eq!(
            out.fragment,
            r#"<h1>Title Text Here</h1><p>Some <strong>important</strong> text content that is long enough.</p><img src="http://x/1.jpg" alt="">"#
        );
        assert_eq!(out.blocks, 3);
    }

    #[test]
    fn region_limits_the_walk() {
        let body = "区域内的正文段落。".repeat(15);
        let html = format!(
            r#"<body><p>outside paragraph text</p><div id="js_content"><p>{body}</p></div></body>"#
        );
        let out = run(&html);
        assert!(out.used_region);
        assert_eq!(out.fragment, format!("<p>{body}</p>"));
    }

    #[test]
    fn region_root_text_is_kept() {
        let first = "公众号正文直接写在内容区域里，没有任何段落标签包裹。".repeat(3);
        let second = "换行之后的第二段文字同样直接属于内容区域本身。".repeat(2);
        let html = format!(
            r#"<body><div id="js_content">{first}<br>{second}<br><img src="a.jpg"></div></body>"#
        );
        let out = run(&html);
        assert!(out.used_region);
        assert_eq!(
            out.fragment,
            format!(r#"<div>{first} {second}</div><img src="a.jpg" alt="">"#)
        );
    }

    #[test]
    fn text_only_region_root_is_emitted() {
        let text = "只有文字的内容区域也必须被完整保留下来。".repeat(8);
        let html = format!(r#"<body><div class="rich_media_content">{text}</div><div>区域外面的其它文字</div></body>"#);
        let out = run(&html);
        assert!(out.used_region);
        assert_eq!(out.fragment, format!("<div>{text}</div>"));
    }

    #[test]
    fn nested_paragraph_is_not_emitted_twice() {
        let out = run("<body><p>outer text <span><b>inner bold</b></span></p></body>");
        assert_eq!(out.fragment.matches("inner bold").count(), 1);
    }

    #[test]
    fn deep_nesting_does_not_overflow() {
        let depth = 2_000;
        let html = format!(
            "<body>{}<p>deep paragraph text</p>{}</body>",
            "<section>".repeat(depth),
            "</section>".repeat(depth)
        );
        let out = run(&html);
        assert!(out.fragment.contains("deep paragraph text"));
    }

    #[test]
    fn missing_body_gives_empty_extraction() {
        let doc = Document::from("");
        doc.select("body").remove();
        let out = extract_content(&doc, &[], &Options::default());
        assert!(out.fragment.is_empty());
        assert_eq!(out.blocks, 0);
    }
}
