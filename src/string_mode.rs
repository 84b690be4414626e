//! Regex cleaning pipeline.
//!
//! Used when no tree is available or the tree path failed. Works on raw text
//! only, so it cannot reconstruct structure; it removes noise and rewraps
//! the body.

use log::debug;
use regex::Captures;

use crate::acquire::SyntheticDocument;
use crate::dom;
use crate::options::Options;
use crate::patterns::{
    BETWEEN_TAGS, BODY_ELEMENT, CLASS_ATTR, DATA_ATTR, DOCTYPE, EVENT_ATTR, HEAD_ELEMENT,
    HTML_TAG, ID_ATTR, SCRIPT_BLOCK, STYLESHEET_LINK, STYLE_ATTR, STYLE_BLOCK, TITLE_ELEMENT,
    WHITESPACE,
};
use crate::serialize;
use crate::tags::PASSTHROUGH_DATA_ATTRIBUTES;

/// `id` values that survive string-mode cleaning.
pub static KEPT_IDS: [&str; 3] = ["js_content", "js_author", "js_name"];

/// Clean `html` with regex substitutions and wrap it in the canonical
/// document.
#[must_use]
pub fn clean_string(html: &str, opts: &Options) -> String {
    let processed = strip_noise(html);
    let title = extract_title(&processed).unwrap_or_else(|| opts.default_title.clone());
    let body = extract_body(&processed);
    debug!(
        "string mode: {} bytes in, {} bytes of body",
        html.len(),
        body.len()
    );
    serialize::assemble(&body, Some(&title))
}

/// Clean a synthetic document from its head and body slices. Without a body
/// slice the raw text is cleaned as a whole.
#[must_use]
pub fn clean_synthetic(doc: &SyntheticDocument, opts: &Options) -> String {
    if doc.body().trim().is_empty() {
        return clean_string(doc.raw(), opts);
    }
    let title = extract_title(doc.head())
        .or_else(|| extract_title(doc.raw()))
        .unwrap_or_else(|| opts.default_title.clone());
    let body = strip_noise(doc.body()).trim().to_string();
    debug!(
        "string mode: {} bytes in, {} bytes of body",
        doc.raw().len(),
        body.len()
    );
    serialize::assemble(&body, Some(&title))
}

/// Steps 1 to 7: noise removal and whitespace collapsing.
#[must_use]
pub fn strip_noise(html: &str) -> String {
    let out = STYLE_BLOCK.replace_all(html, "");
    let out = SCRIPT_BLOCK.replace_all(&out, "");
    let out = STYLESHEET_LINK.replace_all(&out, "");
    let out = STYLE_ATTR.replace_all(&out, "");
    let out = CLASS_ATTR.replace_all(&out, "");
    let out = ID_ATTR.replace_all(&out, |caps: &Captures| {
        let value = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
        if KEPT_IDS.contains(&value) {
            caps[0].to_string()
        } else {
            String::new()
        }
    });
    let out = EVENT_ATTR.replace_all(&out, "");
    let out = DATA_ATTR.replace_all(&out, |caps: &Captures| {
        let name = format!("data-{}", caps[1].to_ascii_lowercase());
        if PASSTHROUGH_DATA_ATTRIBUTES.contains(&name.as_str()) {
            caps[0].to_string()
        } else {
            String::new()
        }
    });
    let out = WHITESPACE.replace_all(&out, " ");
    BETWEEN_TAGS.replace_all(&out, "><").into_owned()
}

/// Trimmed text of the first `<title>`, if non-empty.
#[must_use]
pub fn extract_title(html: &str) -> Option<String> {
    TITLE_ELEMENT
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| dom::unescape_entities(&dom::normalize_whitespace(m.as_str())))
        .filter(|t| !t.is_empty())
}

/// Inner markup of the first `<body>`, or the whole text minus document
/// scaffolding when there is no body.
#[must_use]
pub fn extract_body(html: &str) -> String {
    if let Some(inner) = BODY_ELEMENT.captures(html).and_then(|c| c.get(1)) {
        return inner.as_str().trim().to_string();
    }
    let out = DOCTYPE.replace_all(html, "");
    let out = HEAD_ELEMENT.replace_all(&out, "");
    HTML_TAG.replace_all(&out, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_style_and_script_blocks() {
        let out = strip_noise(
            "<style>.a{color:red}</style><p>x</p><SCRIPT type=\"t\">\nalert(1)\n</SCRIPT>",
        );
        assert_eq!(out, "<p>x</p>");
    }

    #[test]
    fn stylesheet_links_removed_other_links_kept() {
        let out = strip_noise(
            r#"<link rel="stylesheet" href="a.css"><link rel="icon" href="i.png">"#,
        );
        assert_eq!(out, r#"<link rel="icon" href="i.png">"#);
    }

    #[test]
    fn attribute_filters() {
        let out = strip_noise(
            r#"<div id="js_content" class="c" style="x"><p id="p1" onclick="f()" data-track="1" data-src="a.jpg">t</p></div>"#,
        );
        assert_eq!(out, r#"<div id="js_content"><p data-src="a.jpg">t</p></div>"#);
    }

    #[test]
    fn whitespace_collapsed_between_tags() {
        assert_eq!(strip_noise("<p>a   b</p>\n\n  <p>c</p>"), "<p>a b</p><p>c</p>");
    }

    #[test]
    fn title_defaults_when_missing() {
        let out = clean_string("<body><p>text</p></body>", &Options::default());
        assert!(out.contains("<title>清理后的文档</title>"));
        assert!(out.contains("<body><p>text</p></body>"));
    }

    #[test]
    fn title_entities_are_not_double_escaped() {
        let out = clean_string("<title>A &amp; B</title><body>x</body>", &Options::default());
        assert!(out.contains("<title>A &amp; B</title>"));
    }

    #[test]
    fn synthetic_document_uses_its_slices() {
        let doc = SyntheticDocument::new(
            "<html><head><title> 周末\n 笔记 </title><script>x()</script></head><body class=\"b\">\n <p style=\"c\">正文</p>\n</body></html>",
        );
        let out = clean_synthetic(&doc, &Options::default());
        assert_eq!(
            out,
            "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>周末 笔记</title></head><body><p>正文</p></body></html>"
        );
    }

    #[test]
    fn synthetic_document_without_body_is_cleaned_whole() {
        let doc = SyntheticDocument::new("<title>t</title><h1>Heading</h1>");
        let out = clean_synthetic(&doc, &Options::default());
        assert!(out.contains("<head><meta charset=\"utf-8\"><title>t</title></head>"));
        assert!(out.contains("<h1>Heading</h1></body></html>"));
    }

    #[test]
    fn body_falls_back_to_stripped_document() {
        assert_eq!(
            extract_body("<!DOCTYPE html><html><head><title>t</title></head><p>x</p></html>"),
            "<p>x</p>"
        );
    }

    #[test]
    fn output_is_canonical_document() {
        let out = clean_string(
            "<html><head><title>标题</title><style>p{}</style></head><body><p style=\"c\">正文</p></body></html>",
            &Options::default(),
        );
        assert_eq!(
            out,
            "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>标题</title></head><body><p>正文</p></body></html>"
        );
    }
}
