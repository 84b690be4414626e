//! Result types for cleaning output.

use serde::{Deserialize, Serialize};

/// A cleaned document, ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedDocument {
    /// The complete output document.
    pub html: String,

    /// Title suggested for the document, safe for use in file names.
    pub title: String,

    /// File name for the cleaned copy, `<title>_clean.html`.
    pub file_name: String,
}

/// Per-document outcome reported by the harness.
///
/// Serialized as one JSON object per processed document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningResult {
    /// Whether a cleaned copy was produced.
    pub success: bool,

    /// Name of the input document.
    pub original_name: String,

    /// Name of the cleaned copy, on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleaned_name: Option<String>,

    /// Failure description, on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CleaningResult {
    #[must_use]
    pub fn succeeded(original_name: impl Into<String>, cleaned_name: impl Into<String>) -> Self {
        Self {
            success: true,
            original_name: original_name.into(),
            cleaned_name: Some(cleaned_name.into()),
            error: None,
        }
    }

    #[must_use]
    pub fn failed(original_name: impl Into<String>, error: impl ToString) -> Self {
        Self {
            success: false,
            original_name: original_name.into(),
            cleaned_name: None,
            error: Some(error.to_string()),
        }
    }
}
