//! Line annotation: line numbers and chapter tracking.
//!
//! The annotator walks a document's lines in order, numbering them from 1
//! and keeping a running chapter counter that starts at 0. A line matching
//! the chapter-heading pattern bumps the counter before it is emitted, so
//! the heading belongs to the chapter it introduces.
//!
//! # Examples
//!
//! ```
//! use tidyword::analysis::annotator::LineAnnotator;
//! use tidyword::corpus::Document;
//!
//! let doc = Document::new(
//!     "sample",
//!     vec!["Preface", "CHAPTER I", "Hello world", "Chapter 2", "More text"],
//! );
//! let lines = LineAnnotator::new().annotate(&doc);
//!
//! let chapters: Vec<_> = lines.iter().map(|l| l.chapter_number).collect();
//! assert_eq!(chapters, vec![0, 1, 1, 2, 2]);
//! ```

use std::sync::{Arc, LazyLock};

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::corpus::{Corpus, Document};
use crate::error::{Result, TidyError};

/// Default chapter heading pattern: "chapter", whitespace, then a digit or
/// roman numeral. Matched case-insensitively.
pub const DEFAULT_CHAPTER_PATTERN: &str = r"^chapter\s+[\divxlc]";

static DEFAULT_CHAPTER_REGEX: LazyLock<Arc<Regex>> = LazyLock::new(|| {
    Arc::new(
        build_pattern(DEFAULT_CHAPTER_PATTERN).expect("Default chapter pattern should be valid"),
    )
});

fn build_pattern(pattern: &str) -> std::result::Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}

/// A document line with its position and chapter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedLine {
    pub document_id: String,
    /// 1-based, contiguous within the document
    pub line_number: usize,
    /// Non-decreasing within the document
    pub chapter_number: usize,
    pub text: String,
}

/// Assigns line numbers and chapter numbers to document lines.
#[derive(Clone, Debug)]
pub struct LineAnnotator {
    pattern: Arc<Regex>,
}

impl Default for LineAnnotator {
    fn default() -> Self {
        Self::new()
    }
}

impl LineAnnotator {
    /// Create an annotator using [`DEFAULT_CHAPTER_PATTERN`].
    pub fn new() -> Self {
        LineAnnotator {
            pattern: Arc::clone(&DEFAULT_CHAPTER_REGEX),
        }
    }

    /// Create an annotator with a custom heading pattern.
    ///
    /// The pattern is always matched case-insensitively.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = build_pattern(pattern).map_err(|e| {
            TidyError::malformed(format!("invalid chapter pattern '{pattern}': {e}"))
        })?;

        Ok(LineAnnotator {
            pattern: Arc::new(regex),
        })
    }

    /// Get the heading pattern.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Check whether a line is a chapter heading.
    pub fn is_heading(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// Annotate every line of one document.
    ///
    /// An empty document yields an empty vector.
    pub fn annotate(&self, document: &Document) -> Vec<AnnotatedLine> {
        let mut chapter = 0;
        document
            .lines()
            .iter()
            .enumerate()
            .map(|(idx, text)| {
                if self.is_heading(text) {
                    chapter += 1;
                }
                AnnotatedLine {
                    document_id: document.document_id().to_string(),
                    line_number: idx + 1,
                    chapter_number: chapter,
                    text: text.clone(),
                }
            })
            .collect()
    }

    /// Annotate every document of a corpus, preserving corpus order.
    ///
    /// Each document gets its own counters.
    pub fn annotate_corpus(&self, corpus: &Corpus) -> Vec<AnnotatedLine> {
        corpus
            .documents()
            .iter()
            .flat_map(|doc| self.annotate(doc))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_numbers_contiguous() {
        let doc = Document::new("d", vec!["a", "", "b", "c"]);
        let lines = LineAnnotator::new().annotate(&doc);

        assert_eq!(lines.len(), doc.len());
        let numbers: Vec<_> = lines.iter().map(|l| l.line_number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
        assert!(lines.iter().all(|l| l.chapter_number == 0));
    }

    #[test]
    fn test_heading_detection() {
        let annotator = LineAnnotator::new();
        assert!(annotator.is_heading("CHAPTER I"));
        assert!(annotator.is_heading("Chapter 12"));
        assert!(annotator.is_heading("chapter xiv."));
        assert!(!annotator.is_heading("Chapters of life"));
        assert!(!annotator.is_heading("In this chapter 3 things happen"));
        assert!(!annotator.is_heading("CHAPTER"));
    }

    #[test]
    fn test_counters_reset_per_document() {
        let corpus = Corpus::from_documents(vec![
            Document::new("a", vec!["CHAPTER 1", "x"]),
            Document::new("b", vec!["y", "CHAPTER 1"]),
        ])
        .unwrap();

        let lines = LineAnnotator::new().annotate_corpus(&corpus);
        let keys: Vec<_> = lines
            .iter()
            .map(|l| (l.document_id.as_str(), l.line_number, l.chapter_number))
            .collect();
        assert_eq!(
            keys,
            vec![("a", 1, 1), ("a", 2, 1), ("b", 1, 0), ("b", 2, 1)]
        );
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::new("empty", Vec::<String>::new());
        assert!(LineAnnotator::new().annotate(&doc).is_empty());
    }

    #[test]
    fn test_custom_pattern() {
        let annotator = LineAnnotator::with_pattern(r"^book\s+\d").unwrap();
        let doc = Document::new("d", vec!["BOOK 1", "text", "Book 2"]);
        let chapters: Vec<_> = annotator
            .annotate(&doc)
            .iter()
            .map(|l| l.chapter_number)
            .collect();
        assert_eq!(chapters, vec![1, 1, 2]);
    }

    #[test]
    fn test_invalid_pattern() {
        let err = LineAnnotator::with_pattern("(unclosed").unwrap_err();
        assert!(err.is_malformed_configuration());
    }
}
