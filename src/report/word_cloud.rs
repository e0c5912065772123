//! Word-cloud input for external layout engines.
//!
//! Layout is left to the renderer; this reporter decides which words go in,
//! how heavy each one is, and what color it gets. Without sentiment labels,
//! colors step through the palette by frequency rank. With labels, each
//! label gets one palette color (a comparison cloud).

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::frequency::FrequencyRecord;
use crate::report::{RenderConfig, Reporter, sentiment_labels};

/// One word of a cloud.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WordCloudItem {
    pub word: String,
    pub count: u64,
    /// count / highest count, in (0, 1]
    pub weight: f64,
    pub color: String,
    pub sentiment: Option<String>,
}

/// Emits the cloud as a JSON array of [`WordCloudItem`]s.
#[derive(Clone, Debug)]
pub struct WordCloudReporter {
    config: RenderConfig,
}

impl WordCloudReporter {
    /// Create a word cloud reporter, validating the configuration.
    pub fn new(config: RenderConfig) -> Result<Self> {
        config.validate()?;
        Ok(WordCloudReporter { config })
    }

    /// Build the cloud items for the first `max_items` records.
    pub fn items(&self, records: &[FrequencyRecord]) -> Vec<WordCloudItem> {
        let records = &records[..records.len().min(self.config.max_items)];
        let max = records.iter().map(|r| r.count).max().unwrap_or(0).max(1) as f64;
        let labels = sentiment_labels(records);
        let palette = &self.config.palette;

        records
            .iter()
            .enumerate()
            .map(|(rank, record)| {
                let color_idx = match record.sentiment.as_deref() {
                    Some(label) => labels.iter().position(|l| *l == label).unwrap_or(0),
                    None => rank * palette.len() / records.len(),
                };
                WordCloudItem {
                    word: record.word.clone(),
                    count: record.count,
                    weight: record.count as f64 / max,
                    color: palette[color_idx % palette.len()].clone(),
                    sentiment: record.sentiment.clone(),
                }
            })
            .collect()
    }
}

impl Reporter for WordCloudReporter {
    fn render(&self, records: &[FrequencyRecord], out: &mut dyn Write) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, &self.items(records))?;
        writeln!(out)?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "word_cloud"
    }
}
