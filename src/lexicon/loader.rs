//! CSV/TSV lexicon loader.
//!
//! The first row is the header. A `word` column is always required.
//! Labeled lexicons (binary, categorical) need a `sentiment` column and
//! numeric ones a `value` or `score` column:
//! ```csv
//! word,sentiment
//! abandon,fear
//! abandon,negative
//! ```
//! ```csv
//! word,value
//! abandon,-2
//! ```
//! Files ending in `.tsv` are read tab-separated unless a delimiter is set.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use log::info;

use crate::error::{Result, TidyError};
use crate::lexicon::lexicon::{Lexicon, LexiconKind, SentimentEntry};

const WORD_COLUMNS: &[&str] = &["word", "term"];
const LABEL_COLUMNS: &[&str] = &["sentiment", "label"];
const SCORE_COLUMNS: &[&str] = &["value", "score"];

/// A loader for sentiment lexicon tables.
#[derive(Debug, Clone)]
pub struct LexiconLoader {
    kind: LexiconKind,
    /// Explicit delimiter; inferred from the file extension when unset.
    delimiter: Option<u8>,
}

impl LexiconLoader {
    /// Create a loader for lexicons of the given shape.
    pub fn new(kind: LexiconKind) -> Self {
        LexiconLoader {
            kind,
            delimiter: None,
        }
    }

    /// Set a custom single-byte delimiter, e.g. `b';'`.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    fn delimiter_for(&self, path: &Path) -> u8 {
        self.delimiter.unwrap_or_else(|| {
            let is_tsv = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("tsv"));
            if is_tsv { b'\t' } else { b',' }
        })
    }

    /// Load the lexicon at `path` under the given name.
    ///
    /// # Errors
    ///
    /// Any failure (missing file, missing column, bad score) is reported as
    /// [`TidyError::MissingReferenceData`].
    pub fn load<S: Into<String>, P: AsRef<Path>>(&self, name: S, path: P) -> Result<Lexicon> {
        let name = name.into();
        let path = path.as_ref();
        let resource = format!("lexicon '{name}' ({})", path.display());
        let fail = |reason: String| TidyError::missing_reference(resource.clone(), reason);

        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter_for(path))
            .trim(Trim::All)
            .from_path(path)
            .map_err(|e| fail(e.to_string()))?;

        let headers = reader.headers().map_err(|e| fail(e.to_string()))?.clone();
        let word_col = find_column(&headers, WORD_COLUMNS)
            .ok_or_else(|| fail("missing 'word' column".to_string()))?;
        let label_col = find_column(&headers, LABEL_COLUMNS);
        let score_col = find_column(&headers, SCORE_COLUMNS);

        match self.kind {
            LexiconKind::Binary | LexiconKind::Categorical if label_col.is_none() => {
                let message = format!("{} lexicon needs a 'sentiment' column", self.kind);
                return Err(fail(message));
            }
            LexiconKind::Numeric if score_col.is_none() => {
                return Err(fail("numeric lexicon needs a 'value' column".to_string()));
            }
            _ => {}
        }

        let mut lexicon = Lexicon::new(name.as_str(), self.kind);
        for (idx, record) in reader.records().enumerate() {
            let record = record.map_err(|e| fail(e.to_string()))?;
            // Header is row 1
            let row = idx + 2;

            let word = record.get(word_col).unwrap_or_default();
            if word.is_empty() {
                continue;
            }

            let score = match score_col.and_then(|col| record.get(col)) {
                Some(raw) if !raw.is_empty() => Some(
                    raw.parse::<f64>()
                        .map_err(|e| fail(format!("row {row}: bad score '{raw}': {e}")))?,
                ),
                _ => None,
            };

            let entry = match (self.kind, label_col.and_then(|col| record.get(col))) {
                (LexiconKind::Numeric, label) => {
                    let score = score.ok_or_else(|| fail(format!("row {row}: missing score")))?;
                    match label {
                        Some(label) if !label.is_empty() => {
                            SentimentEntry::labeled(word, label).with_score(score)
                        }
                        _ => SentimentEntry::scored(word, score),
                    }
                }
                (_, Some(label)) if !label.is_empty() => {
                    let entry = SentimentEntry::labeled(word, label);
                    match score {
                        Some(score) => entry.with_score(score),
                        None => entry,
                    }
                }
                _ => return Err(fail(format!("row {row}: missing sentiment label"))),
            };
            lexicon.insert(entry);
        }

        info!(
            "Loaded {} lexicon '{}': {} words, {} entries",
            lexicon.kind(),
            lexicon.name(),
            lexicon.len(),
            lexicon.entry_count()
        );
        Ok(lexicon)
    }
}

fn find_column(headers: &StringRecord, candidates: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|h| candidates.iter().any(|c| h.eq_ignore_ascii_case(c)))
}
