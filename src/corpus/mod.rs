//! Corpus module.
//!
//! A corpus is an ordered collection of documents, each an ordered list of
//! raw text lines. Loaders turn plain-text files or JSON Lines files into
//! documents.

#[allow(clippy::module_inception)]
pub mod corpus;
pub mod document;
pub mod gutenberg;
pub mod loader;

// Re-export commonly used types
pub use corpus::Corpus;
pub use document::Document;
pub use loader::{CorpusLoader, JsonlCorpusLoader, TextCorpusLoader};
