//! Title and file-name suggestion for cleaned documents.

use std::path::Path;

use crate::dom;
use crate::patterns::{ANY_TAG, FILENAME_ILLEGAL, HTML_EXTENSION, TITLE_ELEMENT, WHITESPACE};

/// Suggested titles are cut to this many chars.
pub const MAX_TITLE_CHARS: usize = 20;

/// Title used when neither the document nor its file name gives one.
pub const FALLBACK_TITLE: &str = "untitled";

/// Suffix of cleaned copies.
pub const CLEANED_SUFFIX: &str = "_clean.html";

/// Make `raw` usable as a file name stem: no markup, no characters that
/// file systems reject, single spaces, at most [`MAX_TITLE_CHARS`] chars.
#[must_use]
pub fn sanitize_title(raw: &str) -> String {
    let text = ANY_TAG.replace_all(raw, "");
    let text = dom::unescape_entities(&text);
    let text = FILENAME_ILLEGAL.replace_all(&text, "");
    let text = WHITESPACE.replace_all(&text, " ");
    let truncated: String = text.trim().chars().take(MAX_TITLE_CHARS).collect();
    truncated.trim_end().to_string()
}

/// Title for a cleaned document.
///
/// Taken from the document's `<title>`, then from `original_name` without
/// its directory and `.htm(l)` extension, then [`FALLBACK_TITLE`].
#[must_use]
pub fn suggested_title(html: &str, original_name: &str) -> String {
    let from_title = TITLE_ELEMENT
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| sanitize_title(m.as_str()))
        .filter(|t| !t.is_empty());
    if let Some(title) = from_title {
        return title;
    }

    let file_name = Path::new(original_name)
        .file_name()
        .map_or_else(|| original_name.to_string(), |n| n.to_string_lossy().into_owned());
    let stem = sanitize_title(&HTML_EXTENSION.replace(&file_name, ""));
    if stem.is_empty() {
        FALLBACK_TITLE.to_string()
    } else {
        stem
    }
}

/// `<title>_clean.html`
#[must_use]
pub fn cleaned_file_name(title: &str) -> String {
    format!("{title}{CLEANED_SUFFIX}")
}

/// `<title>_clean.html`, or `<title>_<n>_clean.html` with the smallest
/// `n >= 2` for which `taken` is false.
#[must_use]
pub fn unique_file_name(title: &str, taken: impl Fn(&str) -> bool) -> String {
    let name = cleaned_file_name(title);
    if !taken(&name) {
        return name;
    }
    (2..)
        .map(|n| cleaned_file_name(&format!("{title}_{n}")))
        .find(|candidate| !taken(candidate))
        .unwrap_or(name)
}
