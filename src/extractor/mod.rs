//! Article body extraction.
//!
//! Rebuilds a minimal body fragment from the cleaned tree.
//!
//! # Module Structure
//!
//! - `region`: content region candidates and selection
//! - `state`: processed-node tracking
//! - `filter`: UI/navigation text detection
//! - `split`: sentence splitting for long fallback text
//! - `inline`: inline, list and image re-serialization
//! - `handlers`: per-kind element handlers
//! - `pipeline`: the walk and its entry point
//!
//! # Usage
//!
//! ```rust
//! use wx_html_cleaner::dom;
//! use wx_html_cleaner::extractor::{collect_candidates, extract_content};
//! use wx_html_cleaner::Options;
//!
//! let doc = dom::parse("<body><div><p>Paragraph text here.</p></div></body>");
//! let candidates = collect_candidates(&doc);
//! let extraction = extract_content(&doc, &candidates, &Options::default());
//! assert_eq!(extraction.fragment, "<p>Paragraph text here.</p>");
//! ```

pub mod filter;
pub mod handlers;
pub mod inline;
pub mod pipeline;
pub mod region;
pub mod split;
pub mod state;

pub use filter::is_ui_text;
pub use handlers::Flow;
pub use pipeline::{extract_content, Extraction, WalkMode, Walker};
pub use region::{collect_candidates, locate_region};
pub use state::ProcessedSet;
