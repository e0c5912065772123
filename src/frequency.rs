//! Word frequency aggregation.
//!
//! The aggregator counts tokens (or sentiment matches) per grouping key and
//! returns [`FrequencyRecord`]s sorted by count, descending. Ties are broken
//! lexicographically by word, then sentiment label, then document id, so
//! the output order is fully deterministic.
//!
//! # Examples
//!
//! ```
//! use tidyword::analysis::token::Token;
//! use tidyword::frequency::{AggregationConfig, FrequencyAggregator};
//!
//! let tokens: Vec<_> = ["the", "fox", "the", "dog", "fox", "fox"]
//!     .iter()
//!     .map(|w| Token::new("d", 1, 0, *w))
//!     .collect();
//!
//! let aggregator = FrequencyAggregator::new(AggregationConfig::default()).unwrap();
//! let records = aggregator.count_tokens(&tokens).unwrap();
//!
//! let counts: Vec<_> = records.iter().map(|r| (r.word.as_str(), r.count)).collect();
//! assert_eq!(counts, vec![("fox", 3), ("the", 2), ("dog", 1)]);
//! ```

use std::cmp::Ordering;

use ahash::AHashMap;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::error::{Result, TidyError};
use crate::join::SentimentMatch;

/// Grouping key for frequency counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupBy {
    /// Count per word
    #[default]
    Word,
    /// Count per (word, sentiment label); needs sentiment matches
    WordSentiment,
    /// Count per (word, document)
    WordDocument,
}

/// Configuration for frequency aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationConfig {
    /// Grouping key.
    pub group_by: GroupBy,

    /// Records with a lower count are dropped. Must be at least 1.
    pub min_count: u64,

    /// Maximum number of records returned. None returns every record.
    pub top_n: Option<usize>,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            group_by: GroupBy::Word,
            min_count: 1,
            top_n: None,
        }
    }
}

impl AggregationConfig {
    /// Check the configuration before any counting starts.
    pub fn validate(&self) -> Result<()> {
        if self.min_count == 0 {
            return Err(TidyError::malformed("min_count must be at least 1"));
        }
        if self.top_n == Some(0) {
            return Err(TidyError::malformed("top_n must be at least 1"));
        }
        Ok(())
    }
}

/// One aggregated row: a grouping key and its count.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrequencyRecord {
    pub word: String,
    pub sentiment: Option<String>,
    pub document_id: Option<String>,
    pub count: u64,
}

impl FrequencyRecord {
    /// Create a word-only record.
    pub fn new<S: Into<String>>(word: S, count: u64) -> Self {
        FrequencyRecord {
            word: word.into(),
            sentiment: None,
            document_id: None,
            count,
        }
    }

    /// Set the sentiment label.
    pub fn with_sentiment<S: Into<String>>(mut self, sentiment: S) -> Self {
        self.sentiment = Some(sentiment.into());
        self
    }

    /// Set the document id.
    pub fn with_document<S: Into<String>>(mut self, document_id: S) -> Self {
        self.document_id = Some(document_id.into());
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct GroupKey {
    word: String,
    sentiment: Option<String>,
    document_id: Option<String>,
}

/// Counts tokens per grouping key.
#[derive(Clone, Debug)]
pub struct FrequencyAggregator {
    config: AggregationConfig,
}

impl FrequencyAggregator {
    /// Create an aggregator, validating the configuration.
    pub fn new(config: AggregationConfig) -> Result<Self> {
        config.validate()?;
        Ok(FrequencyAggregator { config })
    }

    /// Get the configuration.
    pub fn config(&self) -> &AggregationConfig {
        &self.config
    }

    /// Count plain tokens.
    ///
    /// # Errors
    ///
    /// Grouping by sentiment needs labeled input; use
    /// [`count_matches`](Self::count_matches) instead.
    pub fn count_tokens(&self, tokens: &[Token]) -> Result<Vec<FrequencyRecord>> {
        let with_document = match self.config.group_by {
            GroupBy::Word => false,
            GroupBy::WordDocument => true,
            GroupBy::WordSentiment => {
                return Err(TidyError::malformed(
                    "grouping by sentiment needs lexicon-joined tokens",
                ));
            }
        };

        let keys = tokens.iter().map(|token| GroupKey {
            word: token.word.clone(),
            sentiment: None,
            document_id: with_document.then(|| token.document_id.clone()),
        });
        Ok(self.finish(keys))
    }

    /// Count lexicon-joined tokens under any grouping.
    pub fn count_matches(&self, matches: &[SentimentMatch]) -> Vec<FrequencyRecord> {
        let by_sentiment = self.config.group_by == GroupBy::WordSentiment;
        let by_document = self.config.group_by == GroupBy::WordDocument;
        let keys = matches.iter().map(|m| GroupKey {
            word: m.token.word.clone(),
            sentiment: by_sentiment.then(|| m.entry.label.clone()),
            document_id: by_document.then(|| m.token.document_id.clone()),
        });
        self.finish(keys)
    }

    fn finish<I: Iterator<Item = GroupKey>>(&self, keys: I) -> Vec<FrequencyRecord> {
        let mut counts: AHashMap<GroupKey, u64> = AHashMap::new();
        for key in keys {
            *counts.entry(key).or_insert(0) += 1;
        }
        let groups = counts.len();

        let mut records: Vec<FrequencyRecord> = counts
            .into_iter()
            .filter(|(_, count)| *count >= self.config.min_count)
            .map(|(key, count)| FrequencyRecord {
                word: key.word,
                sentiment: key.sentiment,
                document_id: key.document_id,
                count,
            })
            .collect();

        records.sort_by(compare_records);
        if let Some(top_n) = self.config.top_n {
            records.truncate(top_n);
        }

        debug!(
            "Aggregated {} groups into {} records (min_count={}, top_n={:?})",
            groups,
            records.len(),
            self.config.min_count,
            self.config.top_n
        );
        records
    }
}

/// Count descending, then word, sentiment and document ascending.
fn compare_records(a: &FrequencyRecord, b: &FrequencyRecord) -> Ordering {
    b.count
        .cmp(&a.count)
        .then_with(|| a.word.cmp(&b.word))
        .then_with(|| a.sentiment.cmp(&b.sentiment))
        .then_with(|| a.document_id.cmp(&b.document_id))
}

/// Sum of all counts.
pub fn total_count(records: &[FrequencyRecord]) -> u64 {
    records.iter().map(|r| r.count).sum()
}

/// Re-expand records into one word per counted occurrence.
///
/// Expanding then re-aggregating (with no threshold) gives back the same
/// counts, and the expanded length equals [`total_count`].
pub fn expand(records: &[FrequencyRecord]) -> Vec<String> {
    records
        .iter()
        .flat_map(|r| std::iter::repeat_n(r.word.clone(), r.count as usize))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::SentimentEntry;

    fn tokens(doc: &str, words: &[&str]) -> Vec<Token> {
        words.iter().map(|w| Token::new(doc, 1, 0, *w)).collect()
    }

    fn aggregator(group_by: GroupBy, min_count: u64, top_n: Option<usize>) -> FrequencyAggregator {
        FrequencyAggregator::new(AggregationConfig {
            group_by,
            min_count,
            top_n,
        })
        .unwrap()
    }

    #[test]
    fn test_min_count() {
        let records = aggregator(GroupBy::Word, 2, None)
            .count_tokens(&tokens("d", &["the", "fox", "the", "dog", "fox", "fox"]))
            .unwrap();
        assert_eq!(
            records,
            vec![
                FrequencyRecord::new("fox", 3),
                FrequencyRecord::new("the", 2),
            ]
        );
    }

    #[test]
    fn test_ties_broken_lexicographically() {
        let records = aggregator(GroupBy::Word, 1, None)
            .count_tokens(&tokens("d", &["pear", "apple", "fig", "apple", "pear"]))
            .unwrap();
        let words: Vec<_> = records.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, vec!["apple", "pear", "fig"]);
    }

    #[test]
    fn test_top_n() {
        let records = aggregator(GroupBy::Word, 1, Some(1))
            .count_tokens(&tokens("d", &["b", "a", "a"]))
            .unwrap();
        assert_eq!(records, vec![FrequencyRecord::new("a", 2)]);
    }

    #[test]
    fn test_group_by_document() {
        let mut input = tokens("emma", &["miss", "miss"]);
        input.extend(tokens("persuasion", &["miss", "anne"]));

        let records = aggregator(GroupBy::WordDocument, 1, None)
            .count_tokens(&input)
            .unwrap();
        assert_eq!(
            records,
            vec![
                FrequencyRecord::new("miss", 2).with_document("emma"),
                FrequencyRecord::new("anne", 1).with_document("persuasion"),
                FrequencyRecord::new("miss", 1).with_document("persuasion"),
            ]
        );
    }

    #[test]
    fn test_group_by_sentiment() {
        let pairs = [
            ("love", "positive"),
            ("love", "positive"),
            ("miss", "negative"),
        ];
        let matches: Vec<SentimentMatch> = pairs
            .iter()
            .map(|(w, l)| SentimentMatch {
                token: Token::new("d", 1, 0, *w),
                entry: SentimentEntry::labeled(*w, *l),
            })
            .collect();

        let records = aggregator(GroupBy::WordSentiment, 1, None).count_matches(&matches);
        assert_eq!(
            records,
            vec![
                FrequencyRecord::new("love", 2).with_sentiment("positive"),
                FrequencyRecord::new("miss", 1).with_sentiment("negative"),
            ]
        );
    }

    #[test]
    fn test_sentiment_grouping_rejects_plain_tokens() {
        let err = aggregator(GroupBy::WordSentiment, 1, None)
            .count_tokens(&tokens("d", &["a"]))
            .unwrap_err();
        assert!(err.is_malformed_configuration());
    }

    #[test]
    fn test_invalid_config() {
        let zero_min = AggregationConfig {
            min_count: 0,
            ..Default::default()
        };
        assert!(FrequencyAggregator::new(zero_min).is_err());

        let zero_top = AggregationConfig {
            top_n: Some(0),
            ..Default::default()
        };
        assert!(FrequencyAggregator::new(zero_top).is_err());
    }

    #[test]
    fn test_expand_preserves_total() {
        let input = tokens("d", &["the", "fox", "the", "dog", "fox", "fox"]);
        let agg = aggregator(GroupBy::Word, 1, None);
        let records = agg.count_tokens(&input).unwrap();

        let expanded = expand(&records);
        assert_eq!(expanded.len() as u64, total_count(&records));
        assert_eq!(expanded.len(), input.len());

        let words: Vec<&str> = expanded.iter().map(String::as_str).collect();
        let again = agg.count_tokens(&tokens("d", &words)).unwrap();
        assert_eq!(again, records);
    }

    #[test]
    fn test_empty_input() {
        let records = aggregator(GroupBy::Word, 1, None)
            .count_tokens(&[])
            .unwrap();
        assert!(records.is_empty());
    }
}
