//! Error types for wx-html-cleaner.
//!
//! Most of these never reach callers of [`crate::clean`]: each stage recovers
//! locally and only logs. They surface through [`crate::clean_named`] and the
//! stage-level functions.

/// Error type for cleaning operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The tree parser was unavailable or failed on this input.
    #[error("document acquisition failed: {0}")]
    Acquisition(String),

    /// A tree-path transformation step failed.
    #[error("tree transformation failed: {0}")]
    Transform(String),

    /// A serialization strategy could not produce a usable document.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The input document was empty or whitespace only.
    #[error("HTML input is empty")]
    EmptyInput,

    /// Cleaning produced no output.
    #[error("cleaned output is empty")]
    EmptyOutput,
}

/// Result type alias for cleaning operations.
pub type Result<T> = std::result::Result<T, Error>;
