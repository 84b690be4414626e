//! Tag and attribute catalogs.
//!
//! Static configuration shared by the noise stripper, the simplifier and the
//! extractor. Arrays are kept for iteration, `HashSet`s for lookup.

use std::collections::HashSet;
use std::sync::LazyLock;

// === Attribute Classification ===

/// Attributes that make an element worth keeping even when it is empty.
pub static PRESERVED_ATTRIBUTES: [&str; 9] = [
    "href", "src", "alt", "title", "target", "charset", "content", "name", "http-equiv",
];

/// `PRESERVED_ATTRIBUTES` as a `HashSet`
pub static PRESERVED_ATTRIBUTE_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| PRESERVED_ATTRIBUTES.into_iter().collect());

/// Attributes removed by exact name.
pub static REMOVED_ATTRIBUTES: [&str; 5] = ["style", "class", "id", "role", "tabindex"];

/// Attribute name prefixes that are removed.
pub static REMOVED_ATTRIBUTE_PREFIXES: [&str; 3] = ["on", "data-", "aria-"];

/// Prefixed attributes that pass through unchanged.
pub static PASSTHROUGH_DATA_ATTRIBUTES: [&str; 2] = ["data-src", "data-alt"];

/// Tags never dropped for being empty.
pub static ALWAYS_KEPT_TAGS: [&str; 8] = ["html", "head", "body", "title", "meta", "img", "br", "hr"];

/// `ALWAYS_KEPT_TAGS` as a `HashSet`
pub static ALWAYS_KEPT_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ALWAYS_KEPT_TAGS.into_iter().collect());

// === Noise Tags ===

/// Elements removed together with their content.
pub static NOISE_TAGS: [&str; 2] = ["style", "script"];

/// Page chrome removed together with its content.
pub static NON_CONTENT_TAGS: [&str; 4] = ["nav", "header", "footer", "aside"];

/// Custom tags emitted by article platforms (WeChat public accounts).
pub static PLATFORM_TAGS: [&str; 8] = [
    "mpvoice",
    "mpcps",
    "mpprofile",
    "mp-common-profile",
    "mp-miniprogram",
    "mpvideosnap",
    "qqmusic",
    "mp-style-type",
];

/// `PLATFORM_TAGS` as a `HashSet`
pub static PLATFORM_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| PLATFORM_TAGS.into_iter().collect());

/// Parents whose whitespace-only text is significant.
pub static WHITESPACE_SENSITIVE_TAGS: [&str; 3] = ["pre", "code", "textarea"];

/// Inline tags copied verbatim into reconstructed paragraphs.
pub static INLINE_TAGS: [&str; 8] = ["strong", "b", "em", "i", "u", "span", "a", "br"];

/// `INLINE_TAGS` as a `HashSet`
pub static INLINE_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| INLINE_TAGS.into_iter().collect());

// === Helper Functions ===

/// Check if an attribute name keeps an element alive.
#[inline]
#[must_use]
pub fn is_preserved_attribute(name: &str) -> bool {
    PRESERVED_ATTRIBUTE_SET.contains(name.to_ascii_lowercase().as_str())
}

/// Check if an attribute should be stripped from the tree.
#[must_use]
pub fn is_removed_attribute(name: &str) -> bool {
    let name = name.to_ascii_lowercase();
    if PASSTHROUGH_DATA_ATTRIBUTES.contains(&name.as_str()) {
        return false;
    }
    REMOVED_ATTRIBUTES.contains(&name.as_str())
        || REMOVED_ATTRIBUTE_PREFIXES.iter().any(|p| name.starts_with(p))
}

/// Check if a tag survives emptiness pruning.
#[inline]
#[must_use]
pub fn is_always_kept(tag: &str) -> bool {
    ALWAYS_KEPT_TAG_SET.contains(tag)
}

/// Check if a tag is a platform-specific custom tag.
#[inline]
#[must_use]
pub fn is_platform_tag(tag: &str) -> bool {
    PLATFORM_TAG_SET.contains(tag)
}

// === Element Kinds ===

/// Closed classification of elements driving extractor dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Image,
    Heading(u8),
    List,
    ListItem,
    Paragraph,
    Strong,
    Span,
    Div,
    Other,
}

impl ElementKind {
    /// Classify a lowercase tag name.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "img" => Self::Image,
            "h1" => Self::Heading(1),
            "h2" => Self::Heading(2),
            "h3" => Self::Heading(3),
            "h4" => Self::Heading(4),
            "h5" => Self::Heading(5),
            "h6" => Self::Heading(6),
            "ul" | "ol" => Self::List,
            "li" => Self::ListItem,
            "p" => Self::Paragraph,
            "strong" | "b" => Self::Strong,
            "span" => Self::Span,
            "div" => Self::Div,
            _ => Self::Other,
        }
    }

    /// Kinds that carry block structure of their own.
    #[must_use]
    pub fn is_structural(self) -> bool {
        matches!(
            self,
            Self::Image | Self::Heading(_) | Self::List | Self::Paragraph | Self::Div
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_classification() {
        assert!(is_removed_attribute("style"));
        assert!(is_removed_attribute("CLASS"));
        assert!(is_removed_attribute("onclick"));
        assert!(is_removed_attribute("data-track"));
        assert!(is_removed_attribute("aria-label"));
        assert!(is_removed_attribute("tabindex"));
        assert!(!is_removed_attribute("data-src"));
        assert!(!is_removed_attribute("data-alt"));
        assert!(!is_removed_attribute("href"));
        assert!(is_preserved_attribute("src"));
        assert!(is_preserved_attribute("HTTP-EQUIV"));
        assert!(!is_preserved_attribute("data-src"));
    }

    #[test]
    fn element_kind_dispatch() {
        assert_eq!(ElementKind::from_tag("h3"), ElementKind::Heading(3));
        assert_eq!(ElementKind::from_tag("ol"), ElementKind::List);
        assert_eq!(ElementKind::from_tag("b"), ElementKind::Strong);
        assert_eq!(ElementKind::from_tag("section"), ElementKind::Other);
        assert!(ElementKind::Paragraph.is_structural());
        assert!(!ElementKind::Span.is_structural());
    }

    #[test]
    fn kept_and_platform_tags() {
        assert!(is_always_kept("img"));
        assert!(!is_always_kept("div"));
        assert!(is_platform_tag("mpvoice"));
        assert!(!is_platform_tag("section"));
    }
}
