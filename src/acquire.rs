//! Document acquisition.
//!
//! Turns raw HTML text into a parsed tree, or into a synthetic document that
//! only exposes head/body text slices when tree parsing is unavailable.

use std::panic::{self, AssertUnwindSafe};

use log::{debug, warn};

use crate::dom::{self, Document};
use crate::error::{Error, Result};
use crate::options::Options;
use crate::patterns::{BODY_ELEMENT, HEAD_ELEMENT};

/// String-only stand-in for a parsed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticDocument {
    raw: String,
    head: String,
    body: String,
}

impl SyntheticDocument {
    /// Slice `<head>` and `<body>` out of raw markup. Missing parts are empty.
    #[must_use]
    pub fn new(html: &str) -> Self {
        let slice = |re: &regex::Regex| {
            re.captures(html)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str().to_string())
                .unwrap_or_default()
        };
        Self {
            head: slice(&*HEAD_ELEMENT),
            body: slice(&*BODY_ELEMENT),
            raw: html.to_string(),
        }
    }

    /// The complete input text.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Inner markup of the first `<head>`.
    #[must_use]
    pub fn head(&self) -> &str {
        &self.head
    }

    /// Inner markup of the first `<body>`.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Outcome of acquisition.
pub enum Acquired {
    /// A real DOM tree.
    Tree(Document),
    /// Only string-level processing is possible.
    Synthetic(SyntheticDocument),
}

impl Acquired {
    /// Whether a real tree was produced.
    #[must_use]
    pub fn is_real_tree(&self) -> bool {
        matches!(self, Self::Tree(_))
    }
}

/// Acquire a document handle. Never fails: the synthetic document is the
/// last resort.
#[must_use]
pub fn acquire(html: &str, opts: &Options) -> Acquired {
    match parse_tree(html, opts) {
        Ok(doc) => Acquired::Tree(doc),
        Err(err) => {
            debug!("using synthetic document: {err}");
            Acquired::Synthetic(SyntheticDocument::new(html))
        }
    }
}

/// Parse with html5ever, refusing disabled, oversized or panicking parses.
pub fn parse_tree(html: &str, opts: &Options) -> Result<Document> {
    if !opts.tree_parsing {
        return Err(Error::Acquisition("tree parsing disabled".to_string()));
    }
    if html.len() > opts.max_tree_input_len {
        return Err(Error::Acquisition(format!(
            "input of {} bytes exceeds tree limit of {}",
            html.len(),
            opts.max_tree_input_len
        )));
    }

    let doc = panic::catch_unwind(AssertUnwindSafe(|| dom::parse(html))).map_err(|_| {
        warn!("HTML parser panicked");
        Error::Acquisition("parser panicked".to_string())
    })?;

    if doc.select("body").is_empty() {
        return Err(Error::Acquisition("parsed tree has no body".to_string()));
    }
    Ok(doc)
}
