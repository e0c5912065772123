//! Corpus loaders for creating documents from files.
//!
//! This module provides a [`CorpusLoader`] trait and implementations that
//! read plain-text files and JSON Lines files into [`Document`]s.

use std::path::Path;

use crate::corpus::document::Document;
use crate::error::Result;

pub mod jsonl;
pub mod text;

pub use jsonl::JsonlCorpusLoader;
pub use text::TextCorpusLoader;

/// A trait for loading documents from a path.
///
/// # Example
///
/// ```no_run
/// use tidyword::corpus::{CorpusLoader, JsonlCorpusLoader, TextCorpusLoader};
///
/// // One document per .txt file in a directory
/// let books = TextCorpusLoader::new().load("books/").unwrap();
///
/// // One record per line: {"document_id": "emma", "text": "CHAPTER I"}
/// let records = JsonlCorpusLoader::new().load("austen.jsonl").unwrap();
/// ```
pub trait CorpusLoader {
    /// Load all documents found at `path`, in a deterministic order.
    fn load<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Document>>;
}
