//! Ordered document collection.

use ahash::AHashSet;

use crate::corpus::document::Document;
use crate::error::{Result, TidyError};

/// An ordered collection of documents with unique identifiers.
///
/// Document order is preserved through annotation and tokenization.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: Vec<Document>,
    ids: AHashSet<String>,
}

impl Corpus {
    /// Create an empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a corpus from documents, rejecting duplicate ids.
    pub fn from_documents<I>(documents: I) -> Result<Self>
    where
        I: IntoIterator<Item = Document>,
    {
        let mut corpus = Self::new();
        for document in documents {
            corpus.add(document)?;
        }
        Ok(corpus)
    }

    /// Append a document.
    pub fn add(&mut self, document: Document) -> Result<()> {
        if !self.ids.insert(document.document_id().to_string()) {
            return Err(TidyError::malformed(format!(
                "duplicate document id '{}'",
                document.document_id()
            )));
        }
        self.documents.push(document);
        Ok(())
    }

    /// Append all documents from another source.
    pub fn extend<I>(&mut self, documents: I) -> Result<()>
    where
        I: IntoIterator<Item = Document>,
    {
        for document in documents {
            self.add(document)?;
        }
        Ok(())
    }

    /// Documents in load order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Look up a document by id.
    pub fn get(&self, document_id: &str) -> Option<&Document> {
        self.documents
            .iter()
            .find(|doc| doc.document_id() == document_id)
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check if the corpus holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Total number of raw lines across all documents.
    pub fn total_lines(&self) -> usize {
        self.documents.iter().map(Document::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corpus_preserves_order() {
        let corpus = Corpus::from_documents(vec![
            Document::new("b", vec!["one"]),
            Document::new("a", vec!["two", "three"]),
        ])
        .unwrap();

        let ids: Vec<_> = corpus.documents().iter().map(|d| d.document_id()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(corpus.total_lines(), 3);
        assert_eq!(corpus.get("a").unwrap().len(), 2);
        assert!(corpus.get("c").is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Corpus::from_documents(vec![
            Document::new("emma", vec!["x"]),
            Document::new("emma", vec!["y"]),
        ]);
        assert!(result.unwrap_err().is_malformed_configuration());
    }
}
