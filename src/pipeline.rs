//! End-to-end pipeline: annotate, tokenize, filter, join and count.
//!
//! A [`Pipeline`] is built once from a [`PipelineConfig`] and a
//! [`LexiconRegistry`]. All configuration is checked and all reference data
//! (stop-word files, the lexicon) is resolved in [`Pipeline::new`], so a
//! run never fails half-way because of a bad option. Errors are tagged with
//! the stage that raised them.
//!
//! # Examples
//!
//! ```
//! use tidyword::config::{PipelineConfig, StopWordConfig};
//! use tidyword::corpus::{Corpus, Document};
//! use tidyword::lexicon::LexiconRegistry;
//! use tidyword::pipeline::Pipeline;
//!
//! let corpus = Corpus::from_documents(vec![Document::new(
//!     "d",
//!     vec!["the fox", "the dog and the fox", "fox"],
//! )])
//! .unwrap();
//!
//! let config = PipelineConfig::default().with_stop_words(StopWordConfig::none());
//! let pipeline = Pipeline::new(config, &LexiconRegistry::new()).unwrap();
//! let output = pipeline.run(&corpus).unwrap();
//!
//! assert_eq!(output.records[0].word, "fox");
//! assert_eq!(output.records[0].count, 3);
//! ```

use log::{debug, info};

use crate::analysis::annotator::{AnnotatedLine, LineAnnotator};
use crate::analysis::token::Token;
use crate::analysis::token_filter::{Filter, StopFilter};
use crate::analysis::tokenizer::Tokenizer;
use crate::config::PipelineConfig;
use crate::corpus::Corpus;
use crate::error::{Result, TidyError};
use crate::frequency::{FrequencyAggregator, FrequencyRecord};
use crate::join::{LexiconJoiner, SentimentMatch};
use crate::lexicon::LexiconRegistry;
use crate::tfidf::{self, TfIdfRecord};
use crate::trajectory::{SentimentTrajectory, TrajectoryPoint};

/// Results of a pipeline run.
#[derive(Clone, Debug, PartialEq)]
pub struct PipelineOutput {
    /// Tokens after stop-word removal, in corpus order.
    pub tokens: Vec<Token>,

    /// Lexicon matches, when a lexicon is configured.
    pub matches: Option<Vec<SentimentMatch>>,

    /// Aggregated counts, sorted.
    pub records: Vec<FrequencyRecord>,
}

/// A configured text-mining pipeline.
pub struct Pipeline {
    config: PipelineConfig,
    annotator: LineAnnotator,
    tokenizer: Box<dyn Tokenizer>,
    stop_filter: StopFilter,
    joiner: Option<LexiconJoiner>,
    aggregator: FrequencyAggregator,
    trajectory: SentimentTrajectory,
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("config", &self.config)
            .field("tokenizer", &self.tokenizer.name())
            .finish()
    }
}

impl Pipeline {
    /// Validate the configuration and resolve all reference data.
    ///
    /// # Errors
    ///
    /// [`TidyError::MalformedConfiguration`] for invalid options and
    /// [`TidyError::MissingReferenceData`] for unreadable stop-word files or
    /// an unregistered lexicon, each wrapped in [`TidyError::Stage`].
    pub fn new(config: PipelineConfig, registry: &LexiconRegistry) -> Result<Self> {
        config.validate().map_err(|e| e.in_stage("configure", None))?;

        let annotator = LineAnnotator::with_pattern(&config.chapter_pattern)
            .map_err(|e| e.in_stage("annotate", None))?;
        let tokenizer = config
            .tokenizer
            .build()
            .map_err(|e| e.in_stage("tokenize", None))?;
        let stop_words = config
            .stop_words
            .build()
            .map_err(|e| e.in_stage("stop_words", None))?;
        let joiner = match &config.lexicon {
            Some(name) => Some(LexiconJoiner::new(
                registry.get(name).map_err(|e| e.in_stage("join", None))?,
            )),
            None => None,
        };
        let aggregator = FrequencyAggregator::new(config.aggregation.clone())
            .map_err(|e| e.in_stage("aggregate", None))?;
        let trajectory = SentimentTrajectory::new(config.trajectory_block_size)
            .map_err(|e| e.in_stage("trajectory", None))?;

        debug!(
            "Pipeline ready: tokenizer={}, {} stop words, lexicon={:?}",
            tokenizer.name(),
            stop_words.len(),
            config.lexicon
        );

        Ok(Pipeline {
            annotator,
            tokenizer,
            stop_filter: StopFilter::new(stop_words),
            joiner,
            aggregator,
            trajectory,
            config,
        })
    }

    /// Get the configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Get the line annotator.
    pub fn annotator(&self) -> &LineAnnotator {
        &self.annotator
    }

    /// Annotate every line of the corpus.
    pub fn annotate(&self, corpus: &Corpus) -> Vec<AnnotatedLine> {
        self.annotator.annotate_corpus(corpus)
    }

    /// Tokenize the corpus and remove stop words.
    pub fn tokens(&self, corpus: &Corpus) -> Vec<Token> {
        let mut tokens = Vec::new();
        for document in corpus.documents() {
            let before = tokens.len();
            for line in self.annotator.annotate(document) {
                let stream = self.stop_filter.filter(self.tokenizer.tokenize(&line));
                tokens.extend(stream);
            }
            debug!(
                "Document '{}': {} lines, {} tokens kept",
                document.document_id(),
                document.len(),
                tokens.len() - before
            );
        }
        tokens
    }

    /// Join tokens against the configured lexicon.
    ///
    /// # Errors
    ///
    /// Returns [`TidyError::MalformedConfiguration`] if no lexicon is
    /// configured.
    pub fn matches(&self, tokens: &[Token]) -> Result<Vec<SentimentMatch>> {
        let joiner = self.joiner.as_ref().ok_or_else(|| {
            TidyError::malformed("no lexicon configured").in_stage("join", None)
        })?;
        Ok(joiner.join(tokens))
    }

    /// Run the pipeline: tokens, lexicon matches (if configured) and counts.
    ///
    /// With a lexicon, only matched tokens are counted.
    pub fn run(&self, corpus: &Corpus) -> Result<PipelineOutput> {
        let tokens = self.tokens(corpus);

        let (matches, records) = match &self.joiner {
            Some(joiner) => {
                let matches = joiner.join(&tokens);
                let records = self.aggregator.count_matches(&matches);
                (Some(matches), records)
            }
            None => {
                let records = self
                    .aggregator
                    .count_tokens(&tokens)
                    .map_err(|e| e.in_stage("aggregate", None))?;
                (None, records)
            }
        };

        info!(
            "Processed {} documents: {} tokens, {} matches, {} records",
            corpus.len(),
            tokens.len(),
            matches.as_ref().map_or(0, Vec::len),
            records.len()
        );

        Ok(PipelineOutput {
            tokens,
            matches,
            records,
        })
    }

    /// tf-idf over the filtered tokens of the corpus.
    pub fn tf_idf(&self, corpus: &Corpus) -> Vec<TfIdfRecord> {
        tfidf::compute(&self.tokens(corpus))
    }

    /// Per-block sentiment through each document.
    ///
    /// # Errors
    ///
    /// Returns [`TidyError::MalformedConfiguration`] if no lexicon is
    /// configured.
    pub fn trajectory(&self, corpus: &Corpus) -> Result<Vec<TrajectoryPoint>> {
        let matches = self.matches(&self.tokens(corpus))?;
        Ok(self.trajectory.compute(&matches))
    }
}
