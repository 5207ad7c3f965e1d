// Ingest: decoding uploaded documents and preparing display-only text features.
// Nothing here feeds the scorer; profile extraction reads the raw text directly.

pub mod document;
pub mod keywords;
pub mod normalize;

pub use document::{decode_document, DocumentError};
pub use keywords::{extract_keywords, DEFAULT_TOP_K};
pub use normalize::clean_text;
