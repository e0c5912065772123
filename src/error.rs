//! Error types for tidyword.
//!
//! All fallible operations return [`Result`], whose error type is
//! [`TidyError`]. Not every odd input is an error: an empty document
//! produces an empty token sequence, and a token missing from a lexicon is
//! dropped by the inner join.
//!
//! # Examples
//!
//! ```
//! use tidyword::error::{Result, TidyError};
//!
//! fn check_top_n(top_n: usize) -> Result<()> {
//!     if top_n == 0 {
//!         return Err(TidyError::malformed("top_n must be at least 1"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_top_n(0).is_err());
//! ```

use std::io;
use std::path::Path;

use thiserror::Error;

/// The main error type for tidyword operations.
#[derive(Error, Debug)]
pub enum TidyError {
    /// I/O errors (reading corpora, writing reports)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A stop-word list or sentiment lexicon could not be loaded.
    #[error("Missing reference data '{resource}': {reason}")]
    MissingReferenceData { resource: String, reason: String },

    /// An invalid option was supplied before processing started.
    #[error("Malformed configuration: {0}")]
    MalformedConfiguration(String),

    /// A pipeline stage failed.
    #[error("Stage '{stage}' failed{}: {source}", document_suffix(.document_id))]
    Stage {
        stage: &'static str,
        document_id: Option<String>,
        source: Box<TidyError>,
    },

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

fn document_suffix(document_id: &Option<String>) -> String {
    match document_id {
        Some(id) => format!(" for document '{id}'"),
        None => String::new(),
    }
}

/// Result type alias for operations that may fail with TidyError.
pub type Result<T> = std::result::Result<T, TidyError>;

impl TidyError {
    /// Create a new missing reference data error.
    pub fn missing_reference<R: Into<String>, S: Into<String>>(resource: R, reason: S) -> Self {
        TidyError::MissingReferenceData {
            resource: resource.into(),
            reason: reason.into(),
        }
    }

    /// Create a new malformed configuration error.
    pub fn malformed<S: Into<String>>(msg: S) -> Self {
        TidyError::MalformedConfiguration(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        TidyError::Other(msg.into())
    }

    /// Create an I/O error that names the file it happened on.
    pub fn io_at<P: AsRef<Path>>(path: P, source: io::Error) -> Self {
        let message = format!("{}: {source}", path.as_ref().display());
        TidyError::Io(io::Error::new(source.kind(), message))
    }

    /// Wrap this error with the name of the pipeline stage that produced it.
    pub fn in_stage(self, stage: &'static str, document_id: Option<&str>) -> Self {
        TidyError::Stage {
            stage,
            document_id: document_id.map(str::to_string),
            source: Box::new(self),
        }
    }

    /// Whether this error (or the error it wraps) is a configuration error.
    pub fn is_malformed_configuration(&self) -> bool {
        match self {
            TidyError::MalformedConfiguration(_) => true,
            TidyError::Stage { source, .. } => source.is_malformed_configuration(),
            _ => false,
        }
    }

    /// Whether this error (or the error it wraps) is missing reference data.
    pub fn is_missing_reference_data(&self) -> bool {
        match self {
            TidyError::MissingReferenceData { .. } => true,
            TidyError::Stage { source, .. } => source.is_missing_reference_data(),
            _ => false,
        }
    }
}
