//! # wx-html-cleaner
//!
//! Article cleaner for saved web pages, tuned for WeChat public-account
//! exports.
//!
//! Saved article pages carry inline styles, tracking attributes, navigation
//! chrome and platform widgets around a small amount of prose. This crate
//! keeps the prose: headings, paragraphs, images, lists and emphasis, and
//! renders them as a minimal UTF-8 HTML document.
//!
//! ## Quick Start
//!
//! ```rust
//! use wx_html_cleaner::clean;
//!
//! let html = r#"<html><head><title>My Article</title><style>p{color:red}</style></head>
//! <body><nav>Home | About</nav><p style="margin:0">Main content here.</p></body></html>"#;
//!
//! let cleaned = clean(html);
//! assert!(cleaned.contains("<p>Main content here.</p>"));
//! assert!(!cleaned.contains("<style"));
//! assert!(!cleaned.contains("Home | About"));
//! ```
//!
//! ## Pipeline
//!
//! - **Acquisition**: html5ever parse, or a string-only document
//! - **Noise stripping**: styles, scripts, chrome, comments, noisy attributes
//! - **Simplification**: wrapper divs, empty elements, blank text
//! - **Extraction**: content region location and body reconstruction
//! - **Serialization**: native, manual, then placeholder output
//!
//! When the tree path is unavailable or fails, a regex pipeline cleans the
//! raw text instead. [`clean`] never fails: as a last resort it returns the
//! input unchanged.

mod clean;
mod error;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Tag and attribute catalogs, element kinds.
pub mod tags;

/// Document acquisition (tree or synthetic).
pub mod acquire;

/// Noise removal on the parsed tree.
pub mod noise;

/// Structural simplification to a fixed point.
pub mod simplify;

/// Content region location and body reconstruction.
pub mod extractor;

/// Output document rendering.
pub mod serialize;

/// Regex cleaning pipeline.
pub mod string_mode;

/// Title and file-name suggestion.
pub mod naming;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use clean::clean_tree;
pub use error::{Error, Result};
pub use options::{Options, DEFAULT_TITLE};
pub use result::{CleanedDocument, CleaningResult};

/// Cleans an HTML document using default options.
///
/// Never panics and never fails; when every strategy fails the input is
/// returned unchanged.
///
/// # Example
///
/// ```rust
/// use wx_html_cleaner::clean;
///
/// let out = clean("<body><script>track()</script><h2>Section heading</h2></body>");
/// assert!(out.contains("<h2>Section heading</h2>"));
/// assert!(!out.contains("track()"));
/// ```
#[must_use]
pub fn clean(html: &str) -> String {
    clean_with_options(html, &Options::default())
}

/// Cleans an HTML document with custom options.
///
/// # Example
///
/// ```rust
/// use wx_html_cleaner::{clean_with_options, Options};
///
/// let options = Options {
///     tree_parsing: false,
///     ..Options::default()
/// };
/// let out = clean_with_options("<body><p class=\"x\">text</p></body>", &options);
/// assert!(out.contains("<title>清理后的文档</title>"));
/// assert!(out.contains("<p>text</p>"));
/// ```
#[must_use]
pub fn clean_with_options(html: &str, options: &Options) -> String {
    clean::clean_document(html, options)
}

/// Cleans HTML bytes, detecting the character encoding first.
///
/// The encoding comes from a byte order mark or a `<meta>` charset
/// declaration, defaulting to UTF-8. Invalid sequences become U+FFFD.
///
/// # Example
///
/// ```rust
/// use wx_html_cleaner::clean_bytes;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><p>Caf\xE9 au lait</p></body></html>";
/// assert!(clean_bytes(html).contains("Café au lait"));
/// ```
#[must_use]
pub fn clean_bytes(html: &[u8]) -> String {
    clean_bytes_with_options(html, &Options::default())
}

/// Cleans HTML bytes with custom options.
#[must_use]
pub fn clean_bytes_with_options(html: &[u8], options: &Options) -> String {
    let html = encoding::decode_html(html);
    clean_with_options(&html, options)
}

/// Cleans a named document and suggests a title and file name for it.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] for empty or whitespace-only input and
/// [`Error::EmptyOutput`] if cleaning produced nothing.
///
/// # Example
///
/// ```rust
/// use wx_html_cleaner::clean_named;
///
/// let doc = clean_named("<title>周末 读书</title><p>正文</p>", "saved.html")?;
/// assert_eq!(doc.title, "周末 读书");
/// assert_eq!(doc.file_name, "周末 读书_clean.html");
/// # Ok::<(), wx_html_cleaner::Error>(())
/// ```
pub fn clean_named(html: &str, original_name: &str) -> Result<CleanedDocument> {
    clean_named_with_options(html, original_name, &Options::default())
}

/// Cleans a named document with custom options.
///
/// # Errors
///
/// See [`clean_named`].
pub fn clean_named_with_options(
    html: &str,
    original_name: &str,
    options: &Options,
) -> Result<CleanedDocument> {
    clean::clean_named_document(html, original_name, options)
}
