//! # tidyword
//!
//! Tidy text mining for Rust: one token per record, counted and joined with
//! plain data structures.
//!
//! ## Features
//!
//! - Corpus loading from text files, directories and JSON Lines
//! - Line and chapter annotation
//! - Unicode word and word n-gram tokenization
//! - Stop-word removal
//! - Frequency counts by word, word and sentiment, or word and document
//! - Sentiment lexicon joins (binary, categorical and numeric lexicons)
//! - tf-idf and sentiment trajectories
//! - Table, bar chart and word cloud reporting
//!
//! ## Example
//!
//! ```
//! use tidyword::config::{PipelineConfig, StopWordConfig};
//! use tidyword::corpus::{Corpus, Document};
//! use tidyword::lexicon::{Lexicon, LexiconKind, LexiconRegistry, SentimentEntry};
//! use tidyword::pipeline::Pipeline;
//!
//! let corpus = Corpus::from_documents(vec![Document::from_text(
//!     "letters",
//!     "I love the sea\nand love the rain",
//! )])
//! .unwrap();
//!
//! let mut registry = LexiconRegistry::new();
//! registry.register(Lexicon::from_entries(
//!     "bing",
//!     LexiconKind::Binary,
//!     vec![SentimentEntry::labeled("love", "positive")],
//! ));
//!
//! let config = PipelineConfig::default()
//!     .with_stop_words(StopWordConfig::none())
//!     .with_lexicon("bing");
//! let output = Pipeline::new(config, &registry).unwrap().run(&corpus).unwrap();
//!
//! assert_eq!(output.records[0].word, "love");
//! assert_eq!(output.records[0].count, 2);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod frequency;
pub mod join;
pub mod lexicon;
pub mod pipeline;
pub mod report;
pub mod tfidf;
pub mod trajectory;

pub mod prelude {
    pub use crate::analysis::{AnnotatedLine, LineAnnotator, Token};
    pub use crate::config::PipelineConfig;
    pub use crate::corpus::{Corpus, Document};
    pub use crate::error::{Result, TidyError};
    pub use crate::frequency::{FrequencyAggregator, FrequencyRecord, GroupBy};
    pub use crate::lexicon::{Lexicon, LexiconRegistry, SentimentEntry};
    pub use crate::pipeline::Pipeline;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
