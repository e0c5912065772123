//! JSONL corpus loader.
//!
//! Each line in the file is a JSON object holding a document id and a chunk
//! of text. Records sharing an id are appended to the same document in file
//! order, so a file with one record per book line loads as one document per
//! book:
//! ```jsonl
//! {"document_id": "emma", "text": "EMMA"}
//! {"document_id": "emma", "text": "CHAPTER I"}
//! {"document_id": "persuasion", "text": "Sir Walter Elliot"}
//! ```
//! Text containing line breaks contributes several lines.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::AHashMap;
use serde_json::Value;

use crate::corpus::document::Document;
use crate::corpus::gutenberg::strip_boilerplate;
use crate::corpus::loader::CorpusLoader;
use crate::error::{Result, TidyError};

/// A corpus loader for JSONL format.
#[derive(Debug, Clone)]
pub struct JsonlCorpusLoader {
    /// Name of the field holding the document id.
    id_field: String,
    /// Name of the field holding the text.
    text_field: String,
    /// Whether to strip Project Gutenberg boilerplate per document.
    strip_gutenberg: bool,
}

impl Default for JsonlCorpusLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonlCorpusLoader {
    /// Create a loader reading `document_id` and `text` fields.
    pub fn new() -> Self {
        JsonlCorpusLoader {
            id_field: "document_id".to_string(),
            text_field: "text".to_string(),
            strip_gutenberg: false,
        }
    }

    /// Set the field names used for the document id and the text.
    pub fn with_fields<I: Into<String>, T: Into<String>>(
        mut self,
        id_field: I,
        text_field: T,
    ) -> Self {
        self.id_field = id_field.into();
        self.text_field = text_field.into();
        self
    }

    /// Set whether to strip Project Gutenberg boilerplate.
    pub fn with_gutenberg_strip(mut self, strip: bool) -> Self {
        self.strip_gutenberg = strip;
        self
    }

    /// Parse a single JSON line into an (id, text) pair.
    fn parse_json_line(
        &self,
        path: &Path,
        line: &str,
        line_num: usize,
    ) -> Result<(String, String)> {
        let value: Value = serde_json::from_str(line).map_err(|e| {
            TidyError::other(format!(
                "{} line {line_num}: invalid JSON record: {e}",
                path.display()
            ))
        })?;

        let id = match value.get(&self.id_field) {
            Some(Value::String(s)) => s.clone(),
            // Numeric ids, e.g. Gutenberg book numbers
            Some(Value::Number(n)) => n.to_string(),
            _ => {
                return Err(TidyError::other(format!(
                    "{} line {line_num}: missing string field '{}'",
                    path.display(),
                    self.id_field
                )));
            }
        };

        let text = match value.get(&self.text_field) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => {
                return Err(TidyError::other(format!(
                    "{} line {line_num}: field '{}' is not a string: {other}",
                    path.display(),
                    self.text_field
                )));
            }
        };

        Ok((id, text))
    }
}

impl CorpusLoader for JsonlCorpusLoader {
    fn load<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Document>> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| TidyError::io_at(path, e))?;
        let reader = BufReader::new(file);

        let mut order: Vec<String> = Vec::new();
        let mut lines_by_id: AHashMap<String, Vec<String>> = AHashMap::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| TidyError::io_at(path, e))?;
            if line.trim().is_empty() {
                continue;
            }

            let (id, text) = self.parse_json_line(path, &line, idx + 1)?;
            let lines = lines_by_id.entry(id.clone()).or_insert_with(|| {
                order.push(id);
                Vec::new()
            });

            // An empty text is still a (blank) line of the document
            if text.is_empty() {
                lines.push(String::new());
            } else {
                lines.extend(text.lines().map(str::to_string));
            }
        }

        let documents = order
            .into_iter()
            .map(|id| {
                let lines = lines_by_id.remove(&id).unwrap_or_default();
                let lines = if self.strip_gutenberg {
                    strip_boilerplate(lines)
                } else {
                    lines
                };
                Document::new(id, lines)
            })
            .collect();

        Ok(documents)
    }
}
