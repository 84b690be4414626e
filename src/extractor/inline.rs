//! Inline content re-serialization.
//!
//! Rebuilds the inside of paragraphs, headings and list items as markup,
//! keeping only inline formatting and images, with preserved attributes only.

use dom_query::NodeRef;

use crate::dom::{self, escape_attr, escape_text};
use crate::patterns::{SVG_DATA_URI, WHITESPACE};
use crate::tags::INLINE_TAG_SET;

/// `<img src alt>` for an image node, or `None` when it has no usable
/// source.
///
/// `src` wins over `data-src`, except when `src` is an inline SVG
/// placeholder and `data-src` holds the real image (lazy loading).
#[must_use]
pub fn image_html(node: &NodeRef) -> Option<String> {
    let src = non_empty_attr(node, "src");
    let data_src = non_empty_attr(node, "data-src");
    let resolved = match (src, data_src) {
        (Some(s), Some(d)) if SVG_DATA_URI.is_match(&s) => d,
        (Some(s), _) => s,
        (None, Some(d)) => d,
        (None, None) => return None,
    };
    if SVG_DATA_URI.is_match(&resolved) {
        return None;
    }

    let alt = dom::get_attribute(node, "alt")
        .or_else(|| dom::get_attribute(node, "data-alt"))
        .unwrap_or_default();
    Some(format!(
        r#"<img src="{}" alt="{}">"#,
        escape_attr(&resolved),
        escape_attr(alt.trim())
    ))
}

fn non_empty_attr(node: &NodeRef, name: &str) -> Option<String> {
    dom::get_attribute(node, name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Inner markup of a paragraph-like node.
///
/// Text is escaped with whitespace collapsed, `strong/b/em/i/u/span/a` are
/// copied with their structure, images are inlined, and any other element
/// is flattened into its content.
#[must_use]
pub fn inline_children(node: &NodeRef) -> String {
    let mut out = String::new();
    for child in node.children() {
        if child.is_text() {
            out.push_str(&escape_text(&WHITESPACE.replace_all(&child.text(), " ")));
            continue;
        }
        let Some(tag) = dom::tag_name(&child) else {
            continue;
        };
        match tag.as_str() {
            "img" => {
                if let Some(img) = image_html(&child) {
                    out.push_str(&img);
                }
            }
            "br" => out.push_str("<br>"),
            t if INLINE_TAG_SET.contains(t) => {
                let inner = inline_children(&child);
                if inner.trim().is_empty() {
                    out.push_str(&inner);
                } else {
                    out.push_str(&dom::open_tag_with_preserved(t, &child));
                    out.push_str(&inner);
                    out.push_str(&format!("</{t}>"));
                }
            }
            _ => out.push_str(&inline_children(&child)),
        }
    }
    out
}

/// Mixed text/span/image content of a list item.
///
/// Bare text is wrapped in `<span>` when its parent is a `p` or `li`, and in
/// `<div>` otherwise. Nested lists are kept.
#[must_use]
pub fn mixed_content(node: &NodeRef) -> String {
    let wrapper = if dom::tag_name(node).is_some_and(|t| t == "p" || t == "li") {
        "span"
    } else {
        "div"
    };

    let mut out = String::new();
    for child in node.children() {
        if child.is_text() {
            let text = dom::normalize_whitespace(&child.text());
            if !text.is_empty() {
                out.push_str(&format!("<{wrapper}>{}</{wrapper}>", escape_text(&text)));
            }
            continue;
        }
        let Some(tag) = dom::tag_name(&child) else {
            continue;
        };
        match tag.as_str() {
            "img" => {
                if let Some(img) = image_html(&child) {
                    out.push_str(&img);
                }
            }
            "ul" | "ol" => {
                if let Some(list) = list_html(&child) {
                    out.push_str(&list);
                }
            }
            "span" | "strong" | "b" => {
                let inner = inline_children(&child);
                let inner = inner.trim();
                if !inner.is_empty() {
                    let out_tag = if tag == "span" { "span" } else { "strong" };
                    out.push_str(&format!("<{out_tag}>{inner}</{out_tag}>"));
                }
            }
            "br" => {}
            _ => out.push_str(&mixed_content(&child)),
        }
    }
    out
}

/// A whole `ul`/`ol` rebuilt from its items, or `None` if every item is
/// empty.
#[must_use]
pub fn list_html(node: &NodeRef) -> Option<String> {
    let tag = dom::tag_name(node)?;
    let items: String = dom::element_children(node)
        .iter()
        .map(mixed_content)
        .filter(|content| !content.trim().is_empty())
        .map(|content| format!("<li>{content}</li>"))
        .collect();
    if items.is_empty() {
        None
    } else {
        Some(format!("<{tag}>{items}</{tag}>"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom_query::Document;

    fn first<'a>(doc: &'a Document, selector: &str) -> NodeRef<'a> {
        doc.select(selector).nodes()[0]
    }

    #[test]
    fn image_prefers_src() {
        let doc = Document::from(r#"<img src="a.jpg" data-src="b.jpg" alt="x">"#);
        assert_eq!(
            image_html(&first(&doc, "img")),
            Some(r#"<img src="a.jpg" alt="x">"#.to_string())
        );
    }

    #[test]
    fn image_falls_back_to_data_src() {
        let doc = Document::from(r#"<img data-src="b.jpg" data-alt="caption">"#);
        assert_eq!(
            image_html(&first(&doc, "img")),
            Some(r#"<img src="b.jpg" alt="caption">"#.to_string())
        );
    }

    #[test]
    fn svg_placeholder_defers_to_data_src() {
        let doc = Document::from(
            r#"<img src="data:image/svg+xml,%3Csvg%3E" data-src="https://x/real.jpg">"#,
        );
        assert_eq!(
            image_html(&first(&doc, "img")),
            Some(r#"<img src="https://x/real.jpg" alt="">"#.to_string())
        );
    }

    #[test]
    fn svg_only_image_is_skipped() {
        let doc = Document::from(r#"<img src="data:image/svg+xml,%3Csvg%3E">"#);
        assert!(image_html(&first(&doc, "img")).is_none());
        let doc = Document::from("<img>");
        assert!(image_html(&first(&doc, "img")).is_none());
    }

    #[test]
    fn inline_children_keep_formatting() {
        let doc = Document::from(
            r#"<p>Some <strong style="c">important</strong> and <a href="/x" class="l">linked</a><font>flat</font></p>"#,
        );
        assert_eq!(
            inline_children(&first(&doc, "p")),
            r#"Some <strong>important</strong> and <a href="/x">linked</a>flat"#
        );
    }

    #[test]
    fn inline_children_drop_empty_spans() {
        let doc = Document::from("<p>a<span></span>b</p>");
        assert_eq!(inline_children(&first(&doc, "p")), "ab");
    }

    #[test]
    fn mixed_content_wraps_text_by_parent() {
        let doc = Document::from("<ul><li>item <b>bold</b><section>deep text</section></li></ul>");
        assert_eq!(
            mixed_content(&first(&doc, "li")),
            "<span>item</span><strong>bold</strong><div>deep text</div>"
        );
    }

    #[test]
    fn list_html_skips_empty_items_and_nests() {
        let doc = Document::from("<ol><li>one</li><li> </li><li>two<ul><li>inner</li></ul></li></ol>");
        assert_eq!(
            list_html(&first(&doc, "ol")),
            Some(
                "<ol><li><span>one</span></li><li><span>two</span><ul><li><span>inner</span></li></ul></li></ol>"
                    .to_string()
            )
        );
    }

    #[test]
    fn empty_list_gives_none() {
        let doc = Document::from("<ul><li></li></ul>");
        assert!(list_html(&first(&doc, "ul")).is_none());
    }
}
