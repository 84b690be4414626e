//! Compiled regex patterns used across the cleaner.
//!
//! All patterns are compiled once at first use via `LazyLock`. Tag patterns
//! use `(?:\s[^>]*)?` after the tag name so that `<head` does not also match
//! `<header>`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// String-mode Noise Patterns
// =============================================================================

/// `<style>...</style>` blocks, non-greedy across lines.
pub static STYLE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<style(?:\s[^>]*)?>.*?</style\s*>").expect("STYLE_BLOCK regex")
});

/// `<script>...</script>` blocks, non-greedy across lines.
pub static SCRIPT_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script(?:\s[^>]*)?>.*?</script\s*>").expect("SCRIPT_BLOCK regex")
});

/// `<link ... rel="stylesheet" ...>` tags.
pub static STYLESHEET_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<link\s[^>]*rel\s*=\s*["']?stylesheet["']?[^>]*>"#)
        .expect("STYLESHEET_LINK regex")
});

/// Inline `style=` attributes.
pub static STYLE_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\s+style\s*=\s*(?:"[^"]*"|'[^']*')"#).expect("STYLE_ATTR regex")
});

/// `class=` attributes.
pub static CLASS_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\s+class\s*=\s*(?:"[^"]*"|'[^']*')"#).expect("CLASS_ATTR regex")
});

/// `id=` attributes; the value is captured in group 1 or 2.
pub static ID_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\s+id\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("ID_ATTR regex")
});

/// `on*=` event handler attributes.
pub static EVENT_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\s+on[a-z]+\s*=\s*(?:"[^"]*"|'[^']*')"#).expect("EVENT_ATTR regex")
});

/// `data-*=` attributes; the suffix after `data-` is captured in group 1.
pub static DATA_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\s+data-([a-z0-9_.:-]+)\s*=\s*(?:"[^"]*"|'[^']*')"#)
        .expect("DATA_ATTR regex")
});

// =============================================================================
// Document Structure Patterns
// =============================================================================

/// First `<title>` element; text captured in group 1.
pub static TITLE_ELEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<title(?:\s[^>]*)?>(.*?)</title\s*>").expect("TITLE_ELEMENT regex")
});

/// First `<head>` element; inner markup captured in group 1.
pub static HEAD_ELEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<head(?:\s[^>]*)?>(.*?)</head\s*>").expect("HEAD_ELEMENT regex")
});

/// First `<body>` element; inner markup captured in group 1.
pub static BODY_ELEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<body(?:\s[^>]*)?>(.*?)</body\s*>").expect("BODY_ELEMENT regex")
});

/// `<!DOCTYPE ...>` declarations.
pub static DOCTYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<!doctype[^>]*>").expect("DOCTYPE regex"));

/// Opening and closing `html` tags.
pub static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</?html(?:\s[^>]*)?>").expect("HTML_TAG regex"));

/// Any markup tag.
pub static ANY_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("ANY_TAG regex"));

// =============================================================================
// Text Patterns
// =============================================================================

/// Runs of whitespace.
pub static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE regex"));

/// Whitespace between two tags.
pub static BETWEEN_TAGS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">\s+<").expect("BETWEEN_TAGS regex"));

/// Characters that are not allowed in file names.
pub static FILENAME_ILLEGAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[<>:"/\\|?*]"#).expect("FILENAME_ILLEGAL regex"));

/// `.htm` / `.html` file extension.
pub static HTML_EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.html?$").expect("HTML_EXTENSION regex"));

// =============================================================================
// Tree-path Patterns
// =============================================================================

/// A single class token or id naming navigation, sidebars, menus or ads.
///
/// Matches the whole token or a `-`/`_` separated part of it, so `main-nav`
/// and `top_banner` match while `canvas` and `read` do not.
pub static NOISE_CLASS_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:^|[-_])(?:nav|navbar|navigation|sidebar|menu|ads?|advert|advertisement|banner)(?:[-_]|$)",
    )
    .expect("NOISE_CLASS_TOKEN regex")
});

/// Charset from `<meta charset=..>` or an `http-equiv` content type.
pub static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]*?charset\s*=\s*["']?\s*([A-Za-z0-9_:.\-]+)"#)
        .expect("META_CHARSET regex")
});

/// Inline SVG image sources.
pub static SVG_DATA_URI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)data:image/svg\+xml").expect("SVG_DATA_URI regex")
});
