//! Output document rendering.
//!
//! Strategies are tried in order: html5ever serialization of a parsed shell,
//! then plain string assembly, then a fixed placeholder. Each strategy
//! returns `Result`; the chain itself cannot fail.

use std::panic::{self, AssertUnwindSafe};

use log::{debug, warn};

use crate::dom::{self, Document};
use crate::error::{Error, Result};
use crate::options::Options;

/// Title of the placeholder document.
pub const PLACEHOLDER_TITLE: &str = "清理失败";

/// Body of the placeholder document.
pub const PLACEHOLDER_BODY: &str = "<p>文档清理失败，未能生成输出。</p>";

/// Whitespace-collapsed text of the document's `<title>`, if non-empty.
#[must_use]
pub fn document_title(doc: &Document) -> Option<String> {
    let title = doc.select("title").first();
    if title.is_empty() {
        return None;
    }
    let text = dom::normalize_whitespace(&title.text());
    (!text.is_empty()).then_some(text)
}

/// Render the output document around `body_html`.
#[must_use]
pub fn serialize(body_html: &str, title: Option<&str>, opts: &Options) -> String {
    let native = if opts.native_serializer {
        serialize_native(body_html, title)
    } else {
        Err(Error::Serialization("native serializer disabled".to_string()))
    };

    native
        .or_else(|err| {
            debug!("falling back to manual assembly: {err}");
            serialize_manual(body_html, title)
        })
        .unwrap_or_else(|err| {
            warn!("using placeholder document: {err}");
            placeholder()
        })
}

/// Parse a minimal shell, set the body and serialize with html5ever.
pub fn serialize_native(body_html: &str, title: Option<&str>) -> Result<String> {
    let shell = assemble("", title);
    let html = panic::catch_unwind(AssertUnwindSafe(|| {
        let doc = dom::parse(&shell);
        doc.select("body").set_html(body_html);
        doc.html().to_string()
    }))
    .map_err(|_| Error::Serialization("html5ever serializer panicked".to_string()))?;

    if !html.contains("<body") {
        return Err(Error::Serialization("serialized document has no body".to_string()));
    }
    if !html.contains("charset") {
        return Err(Error::Serialization(
            "serialized document has no charset".to_string(),
        ));
    }
    Ok(html)
}

/// Plain string assembly. Refuses fragments that carry their own document
/// structure.
pub fn serialize_manual(body_html: &str, title: Option<&str>) -> Result<String> {
    let lower = body_html.to_ascii_lowercase();
    if lower.contains("<body") || lower.contains("</html") {
        return Err(Error::Serialization(
            "fragment contains document structure".to_string(),
        ));
    }
    Ok(assemble(body_html, title))
}

/// The canonical document layout. `title` is escaped here.
#[must_use]
pub fn assemble(body_html: &str, title: Option<&str>) -> String {
    let title = title
        .map(|t| format!("<title>{}</title>", dom::escape_text(t)))
        .unwrap_or_default();
    format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\">{title}</head><body>{body_html}</body></html>"
    )
}

/// The last-resort document.
#[must_use]
pub fn placeholder() -> String {
    assemble(PLACEHOLDER_BODY, Some(PLACEHOLDER_TITLE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_output_has_charset_title_and_body() {
        let html = serialize("<p>正文</p>", Some("标题 & 副标题"), &Options::default());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<meta charset="utf-8">"#));
        assert!(html.contains("<title>标题 &amp; 副标题</title>"));
        assert!(html.contains("<body><p>正文</p></body>"));
    }

    #[test]
    fn native_drops_nested_body_tags() {
        let html = serialize_native("<body><p>x</p></body>", None).unwrap();
        assert_eq!(html.matches("<body").count(), 1);
        assert!(html.contains("<p>x</p>"));
    }

    #[test]
    fn manual_assembly_when_native_disabled() {
        let opts = Options {
            native_serializer: false,
            ..Options::default()
        };
        assert_eq!(
            serialize("<p>a</p>", None, &opts),
            "<!DOCTYPE html><html><head><meta charset=\"utf-8\"></head><body><p>a</p></body></html>"
        );
    }

    #[test]
    fn placeholder_is_last_resort() {
        let opts = Options {
            native_serializer: false,
            ..Options::default()
        };
        let html = serialize("<BODY>nested</BODY>", None, &opts);
        assert_eq!(html, placeholder());
        assert!(html.contains(PLACEHOLDER_TITLE));
    }

    #[test]
    fn title_is_collapsed() {
        let doc = dom::parse("<title>  A \n title </title><p>x</p>");
        assert_eq!(document_title(&doc), Some("A title".to_string()));
        let doc = dom::parse("<title>   </title>");
        assert_eq!(document_title(&doc), None);
        let doc = dom::parse("<p>x</p>");
        assert_eq!(document_title(&doc), None);
    }
}
