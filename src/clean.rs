//! Cleaning pipeline orchestration.
//!
//! Tree path: acquisition, noise stripping, simplification, extraction and
//! serialization. Any failure or panic on the way falls back to the regex
//! pipeline on the original input, and a panic there returns the input as is.

use std::panic::{self, AssertUnwindSafe};

use log::{debug, info, warn};

use crate::acquire::{acquire, Acquired};
use crate::dom::Document;
use crate::error::{Error, Result};
use crate::extractor;
use crate::naming;
use crate::noise;
use crate::options::Options;
use crate::result::CleanedDocument;
use crate::serialize;
use crate::simplify;
use crate::string_mode;

/// Clean `html`. Never fails and never panics.
pub(crate) fn clean_document(html: &str, opts: &Options) -> String {
    match panic::catch_unwind(AssertUnwindSafe(|| clean_inner(html, opts))) {
        Ok(out) => out,
        Err(_) => {
            warn!("cleaning panicked, returning input unchanged");
            html.to_string()
        }
    }
}

fn clean_inner(html: &str, opts: &Options) -> String {
    match acquire(html, opts) {
        Acquired::Tree(doc) => clean_tree(&doc, opts).unwrap_or_else(|err| {
            warn!("{err}; falling back to string mode");
            string_mode::clean_string(html, opts)
        }),
        Acquired::Synthetic(synthetic) => string_mode::clean_synthetic(&synthetic, opts),
    }
}

/// Run the tree stages on a parsed document. The document is modified in
/// place.
pub fn clean_tree(doc: &Document, opts: &Options) -> Result<String> {
    let title = serialize::document_title(doc);
    let body = panic::catch_unwind(AssertUnwindSafe(|| extract_body(doc, opts)))
        .map_err(|_| Error::Transform("tree path panicked".to_string()))??;
    Ok(serialize::serialize(&body, title.as_deref(), opts))
}

fn extract_body(doc: &Document, opts: &Options) -> Result<String> {
    let candidates = extractor::collect_candidates(doc);
    noise::strip_noise(doc, &candidates);
    simplify::simplify(doc);

    let extraction = extractor::extract_content(doc, &candidates, opts);
    debug!(
        "extracted {} blocks (region: {})",
        extraction.blocks, extraction.used_region
    );
    if !extraction.fragment.is_empty() {
        return Ok(extraction.fragment);
    }

    let body = doc.select("body");
    if body.is_empty() {
        return Err(Error::Transform("cleaned tree has no body".to_string()));
    }
    debug!("extractor emitted nothing, keeping cleaned body");
    Ok(body.inner_html().to_string())
}

/// Clean a named document for storage.
pub(crate) fn clean_named_document(
    html: &str,
    original_name: &str,
    opts: &Options,
) -> Result<CleanedDocument> {
    if html.trim().is_empty() {
        return Err(Error::EmptyInput);
    }
    let cleaned = clean_document(html, opts);
    if cleaned.trim().is_empty() {
        return Err(Error::EmptyOutput);
    }
    let title = naming::suggested_title(html, original_name);
    let file_name = naming::cleaned_file_name(&title);
    info!(
        "cleaned {original_name}: {} -> {} bytes",
        html.len(),
        cleaned.len()
    );
    Ok(CleanedDocument {
        html: cleaned,
        title,
        file_name,
    })
}
