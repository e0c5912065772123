//! Sentiment trajectories through documents.
//!
//! Lexicon matches are bucketed into fixed-size blocks of lines per
//! document (`index = (line_number - 1) / block_size`), and each block gets
//! its positive and negative counts, their difference, and the sum of any
//! numeric scores. Plotting `net` against `index` shows how sentiment moves
//! through a narrative.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TidyError};
use crate::join::SentimentMatch;
use crate::lexicon::lexicon::{NEGATIVE, POSITIVE};

/// Default number of lines per block.
pub const DEFAULT_BLOCK_SIZE: usize = 80;

/// Sentiment totals for one block of one document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub document_id: String,
    pub index: usize,
    pub positive: u64,
    pub negative: u64,
    pub net: i64,
    pub score_sum: f64,
}

/// Computes per-block sentiment for each document.
#[derive(Clone, Debug)]
pub struct SentimentTrajectory {
    block_size: usize,
}

impl Default for SentimentTrajectory {
    fn default() -> Self {
        SentimentTrajectory {
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }
}

impl SentimentTrajectory {
    /// Create a trajectory with the given block size in lines.
    pub fn new(block_size: usize) -> Result<Self> {
        if block_size == 0 {
            return Err(TidyError::malformed("block size must be at least 1"));
        }
        Ok(SentimentTrajectory { block_size })
    }

    /// Get the block size.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Bucket matches into blocks.
    ///
    /// Points are ordered by the first appearance of their document in
    /// `matches`, then by block index. Blocks without any match are absent.
    /// Labels are compared case-insensitively; labels other than positive
    /// and negative only contribute their score.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidyword::analysis::token::Token;
    /// use tidyword::join::SentimentMatch;
    /// use tidyword::lexicon::SentimentEntry;
    /// use tidyword::trajectory::SentimentTrajectory;
    ///
    /// let matches = vec![
    ///     SentimentMatch {
    ///         token: Token::new("emma", 3, 1, "happy"),
    ///         entry: SentimentEntry::labeled("happy", "positive"),
    ///     },
    ///     SentimentMatch {
    ///         token: Token::new("emma", 12, 1, "sad"),
    ///         entry: SentimentEntry::labeled("sad", "negative"),
    ///     },
    /// ];
    ///
    /// let points = SentimentTrajectory::new(10).unwrap().compute(&matches);
    /// assert_eq!(points.len(), 2);
    /// assert_eq!((points[0].index, points[0].net), (0, 1));
    /// assert_eq!((points[1].index, points[1].net), (1, -1));
    /// ```
    pub fn compute(&self, matches: &[SentimentMatch]) -> Vec<TrajectoryPoint> {
        let mut doc_order: AHashMap<&str, usize> = AHashMap::new();
        let mut blocks: AHashMap<(&str, usize), TrajectoryPoint> = AHashMap::new();

        for m in matches {
            let document_id = m.token.document_id.as_str();
            let next = doc_order.len();
            doc_order.entry(document_id).or_insert(next);

            let index = m.token.line_number.saturating_sub(1) / self.block_size;
            let point = blocks
                .entry((document_id, index))
                .or_insert_with(|| TrajectoryPoint {
                    document_id: document_id.to_string(),
                    index,
                    positive: 0,
                    negative: 0,
                    net: 0,
                    score_sum: 0.0,
                });

            if m.entry.label.eq_ignore_ascii_case(POSITIVE) {
                point.positive += 1;
                point.net += 1;
            } else if m.entry.label.eq_ignore_ascii_case(NEGATIVE) {
                point.negative += 1;
                point.net -= 1;
            }
            if let Some(score) = m.entry.score {
                point.score_sum += score;
            }
        }

        let mut points: Vec<TrajectoryPoint> = blocks.into_values().collect();
        points.sort_by_key(|p| (doc_order[p.document_id.as_str()], p.index));
        points
    }
}
