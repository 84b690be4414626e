//! Configuration options for cleaning.
//!
//! The `Options` struct holds the thresholds used by the extractor and the
//! switches that select between the tree path and the string-mode pipeline.

/// Default `<title>` used when a document has none.
pub const DEFAULT_TITLE: &str = "清理后的文档";

/// Configuration options for cleaning.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use wx_html_cleaner::Options;
///
/// // Force the regex pipeline
/// let options = Options {
///     tree_parsing: false,
///     ..Options::default()
/// };
/// assert!(!options.tree_parsing);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Parse the input into a DOM tree.
    ///
    /// When false, every document goes through the string-mode pipeline.
    ///
    /// Default: `true`
    pub tree_parsing: bool,

    /// Serialize output through the html5ever serializer.
    ///
    /// When false, the serializer chain starts at manual string assembly.
    ///
    /// Default: `true`
    pub native_serializer: bool,

    /// Inputs longer than this (in bytes) skip tree parsing.
    ///
    /// Default: `20_000_000`
    pub max_tree_input_len: usize,

    /// Minimum trimmed text length (chars) for a content region candidate.
    ///
    /// Default: `100`
    pub min_region_text_len: usize,

    /// Headings must have more than this many chars of trimmed text.
    ///
    /// Default: `5`
    pub min_heading_len: usize,

    /// Stray spans and a div's own text must be longer than this.
    ///
    /// Default: `10`
    pub min_block_text_len: usize,

    /// A text-only div must be longer than this to be kept.
    ///
    /// Default: `5`
    pub min_div_text_len: usize,

    /// Target size (chars) of pseudo-paragraphs in fallback extraction.
    ///
    /// Default: `200`
    pub paragraph_chunk_len: usize,

    /// Title used by the string pipeline when the input has none.
    ///
    /// Default: `"清理后的文档"`
    pub default_title: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            tree_parsing: true,
            native_serializer: true,
            max_tree_input_len: 20_000_000,
            min_region_text_len: 100,
            min_heading_len: 5,
            min_block_text_len: 10,
            min_div_text_len: 5,
            paragraph_chunk_len: 200,
            default_title: DEFAULT_TITLE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_thresholds() {
        let opts = Options::default();
        assert!(opts.tree_parsing);
        assert!(opts.native_serializer);
        assert_eq!(opts.min_region_text_len, 100);
        assert_eq!(opts.min_heading_len, 5);
        assert_eq!(opts.min_block_text_len, 10);
        assert_eq!(opts.paragraph_chunk_len, 200);
        assert_eq!(opts.default_title, DEFAULT_TITLE);
    }

    #[test]
    fn struct_update_keeps_other_defaults() {
        let opts = Options {
            paragraph_chunk_len: 80,
            ..Options::default()
        };
        assert_eq!(opts.paragraph_chunk_len, 80);
        assert_eq!(opts.min_region_text_len, 100);
    }
}
