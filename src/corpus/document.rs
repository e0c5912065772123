//! Document structure.

use serde::{Deserialize, Serialize};

/// A single document: an identifier and its raw lines in original order.
///
/// # Examples
///
/// ```
/// use tidyword::corpus::Document;
///
/// let doc = Document::from_text("emma", "EMMA\n\nCHAPTER I\nEmma Woodhouse");
/// assert_eq!(doc.document_id(), "emma");
/// assert_eq!(doc.len(), 4);
/// assert_eq!(doc.lines()[2], "CHAPTER I");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    document_id: String,
    lines: Vec<String>,
}

impl Document {
    /// Create a document from an id and its lines.
    pub fn new<S, I, L>(document_id: S, lines: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Document {
            document_id: document_id.into(),
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a document by splitting a text blob on line breaks.
    ///
    /// Both `\n` and `\r\n` terminate a line.
    pub fn from_text<S: Into<String>>(document_id: S, text: &str) -> Self {
        Self::new(document_id, text.lines())
    }

    /// The document identifier.
    pub fn document_id(&self) -> &str {
        &self.document_id
    }

    /// The raw lines of the document.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of raw lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the document has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Consume the document, returning a copy with the given lines kept.
    pub(crate) fn with_lines(self, lines: Vec<String>) -> Self {
        Document {
            document_id: self.document_id,
            lines,
        }
    }
}
