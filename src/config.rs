//! Pipeline configuration.
//!
//! Every option of a pipeline run lives in [`PipelineConfig`], which can be
//! built in code or loaded from a JSON file. Missing fields take their
//! defaults, so `{}` is a valid configuration file.
//!
//! ```json
//! {
//!   "chapter_pattern": "^chapter\\s+[\\divxlc]",
//!   "tokenizer": { "type": "ngram", "min_n": 2, "max_n": 2 },
//!   "stop_words": { "builtin": true, "words": ["miss"] },
//!   "aggregation": { "group_by": "word_sentiment", "min_count": 2, "top_n": 10 },
//!   "lexicon": "bing"
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::annotator::{DEFAULT_CHAPTER_PATTERN, LineAnnotator};
use crate::analysis::token_filter::StopWordSet;
use crate::analysis::tokenizer::{NgramTokenizer, Tokenizer, UnicodeWordTokenizer};
use crate::error::{Result, TidyError};
use crate::frequency::{AggregationConfig, GroupBy};
use crate::report::RenderConfig;
use crate::trajectory::{DEFAULT_BLOCK_SIZE, SentimentTrajectory};

/// Which tokenizer splits lines into tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TokenizerConfig {
    /// Single Unicode words.
    #[default]
    Word,
    /// Word n-grams, `min_n..=max_n` words each.
    Ngram { min_n: usize, max_n: usize },
}

impl TokenizerConfig {
    /// Build the configured tokenizer.
    pub fn build(&self) -> Result<Box<dyn Tokenizer>> {
        let tokenizer: Box<dyn Tokenizer> = match *self {
            TokenizerConfig::Word => Box::new(UnicodeWordTokenizer::new()),
            TokenizerConfig::Ngram { min_n, max_n } => {
                Box::new(NgramTokenizer::new(min_n, max_n)?)
            }
        };
        Ok(tokenizer)
    }
}

/// Where stop words come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StopWordConfig {
    /// Include the built-in English list.
    pub builtin: bool,

    /// Extra newline-separated stop-word files.
    pub files: Vec<PathBuf>,

    /// Extra words.
    pub words: Vec<String>,
}

impl Default for StopWordConfig {
    fn default() -> Self {
        Self {
            builtin: true,
            files: Vec::new(),
            words: Vec::new(),
        }
    }
}

impl StopWordConfig {
    /// Disable stop-word removal entirely.
    pub fn none() -> Self {
        Self {
            builtin: false,
            ..Default::default()
        }
    }

    /// Build the combined stop-word set, reading every file.
    pub fn build(&self) -> Result<StopWordSet> {
        let mut set = if self.builtin {
            StopWordSet::english()
        } else {
            StopWordSet::new()
        };
        for path in &self.files {
            set.merge(StopWordSet::from_file(path)?);
        }
        set.add_words(&self.words);
        Ok(set)
    }
}

/// Configuration for a whole pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Chapter heading regex, matched case-insensitively.
    pub chapter_pattern: String,

    /// Tokenizer selection.
    pub tokenizer: TokenizerConfig,

    /// Stop-word sources.
    pub stop_words: StopWordConfig,

    /// Frequency aggregation options.
    pub aggregation: AggregationConfig,

    /// Name of the lexicon to join against, if any.
    pub lexicon: Option<String>,

    /// Lines per block for sentiment trajectories.
    pub trajectory_block_size: usize,

    /// Chart rendering options.
    pub render: RenderConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            chapter_pattern: DEFAULT_CHAPTER_PATTERN.to_string(),
            tokenizer: TokenizerConfig::default(),
            stop_words: StopWordConfig::default(),
            aggregation: AggregationConfig::default(),
            lexicon: None,
            trajectory_block_size: DEFAULT_BLOCK_SIZE,
            render: RenderConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config: PipelineConfig = serde_json::from_str(&content).map_err(|e| {
            TidyError::malformed(format!("invalid configuration {}: {e}", path.display()))
        })?;
        debug!("Loaded pipeline configuration from {}", path.display());
        Ok(config)
    }

    /// Set the lexicon name.
    pub fn with_lexicon<S: Into<String>>(mut self, name: S) -> Self {
        self.lexicon = Some(name.into());
        self
    }

    /// Set the aggregation options.
    pub fn with_aggregation(mut self, aggregation: AggregationConfig) -> Self {
        self.aggregation = aggregation;
        self
    }

    /// Set the stop-word sources.
    pub fn with_stop_words(mut self, stop_words: StopWordConfig) -> Self {
        self.stop_words = stop_words;
        self
    }

    /// Set the tokenizer.
    pub fn with_tokenizer(mut self, tokenizer: TokenizerConfig) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Check every option that can be checked without touching the
    /// filesystem.
    ///
    /// # Errors
    ///
    /// Returns [`TidyError::MalformedConfiguration`] for an invalid chapter
    /// pattern, n-gram range, threshold, block size or render option, or
    /// when grouping by sentiment without a lexicon.
    pub fn validate(&self) -> Result<()> {
        LineAnnotator::with_pattern(&self.chapter_pattern)?;
        self.tokenizer.build()?;
        self.aggregation.validate()?;
        SentimentTrajectory::new(self.trajectory_block_size)?;
        self.render.validate()?;

        if self.aggregation.group_by == GroupBy::WordSentiment && self.lexicon.is_none() {
            return Err(TidyError::malformed(
                "group_by word_sentiment requires a lexicon",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = PipelineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.trajectory_block_size, 80);
        assert!(config.stop_words.builtin);
    }

    #[test]
    fn test_invalid_options() {
        let bad_pattern = PipelineConfig {
            chapter_pattern: "(unclosed".to_string(),
            ..Default::default()
        };
        let err = bad_pattern.validate().unwrap_err();
        assert!(err.is_malformed_configuration());

        let bad_ngram = PipelineConfig::default()
            .with_tokenizer(TokenizerConfig::Ngram { min_n: 3, max_n: 2 });
        assert!(bad_ngram.validate().is_err());

        let no_lexicon = PipelineConfig::default().with_aggregation(AggregationConfig {
            group_by: GroupBy::WordSentiment,
            ..Default::default()
        });
        let err = no_lexicon.validate().unwrap_err();
        assert!(err.is_malformed_configuration());
        assert!(no_lexicon.with_lexicon("bing").validate().is_ok());

        let zero_block = PipelineConfig {
            trajectory_block_size: 0,
            ..Default::default()
        };
        assert!(zero_block.validate().is_err());
    }

    #[test]
    fn test_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{
                "tokenizer": {"type": "ngram", "min_n": 2, "max_n": 2},
                "stop_words": {"builtin": false, "words": ["miss"]},
                "aggregation": {"group_by": "word_document", "min_count": 2},
                "lexicon": "bing"
            }"#,
        )
        .unwrap();

        let config = PipelineConfig::from_file(&path).unwrap();
        let bigrams = TokenizerConfig::Ngram { min_n: 2, max_n: 2 };
        assert_eq!(config.tokenizer, bigrams);
        assert!(!config.stop_words.builtin);
        assert_eq!(config.aggregation.group_by, GroupBy::WordDocument);
        assert_eq!(config.aggregation.min_count, 2);
        assert_eq!(config.aggregation.top_n, None);
        assert_eq!(config.lexicon.as_deref(), Some("bing"));
        assert_eq!(config.chapter_pattern, DEFAULT_CHAPTER_PATTERN);
    }

    #[test]
    fn test_from_file_rejects_unknown_group() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"aggregation": {"group_by": "chapter"}}"#).unwrap();

        let err = PipelineConfig::from_file(&path).unwrap_err();
        assert!(err.is_malformed_configuration());
    }

    #[test]
    fn test_stop_word_sources() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("extra.txt");
        fs::write(&path, "lady\n").unwrap();

        let config = StopWordConfig {
            builtin: false,
            files: vec![path],
            words: vec!["Sir".to_string()],
        };
        let set = config.build().unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("sir"));
        assert!(!set.contains("the"));

        let missing = StopWordConfig {
            files: vec![dir.path().join("missing.txt")],
            ..StopWordConfig::none()
        };
        assert!(missing.build().unwrap_err().is_missing_reference_data());
    }
}
