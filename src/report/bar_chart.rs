//! Horizontal text bar charts.
//!
//! ```text
//! miss       ████████████████████████████████████████ 1855
//! time       ███████████████ 1337
//! ```
//!
//! When records carry sentiment labels, each label gets its own panel
//! (labels in first-seen order), each capped at `max_items` bars.

use std::io::Write;

use crate::error::Result;
use crate::frequency::FrequencyRecord;
use crate::report::{RenderConfig, Reporter, sentiment_labels};

const BAR: char = '█';
const DEFAULT_WIDTH: usize = 40;

/// Renders records as a bar chart.
#[derive(Clone, Debug)]
pub struct BarChartReporter {
    config: RenderConfig,
    width: usize,
}

impl BarChartReporter {
    /// Create a bar chart reporter, validating the configuration.
    pub fn new(config: RenderConfig) -> Result<Self> {
        config.validate()?;
        Ok(BarChartReporter {
            config,
            width: DEFAULT_WIDTH,
        })
    }

    /// Set the width of the longest bar, in characters (at least 1).
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(1);
        self
    }

    fn label(record: &FrequencyRecord) -> String {
        match &record.document_id {
            Some(doc) => format!("{} ({doc})", record.word),
            None => record.word.clone(),
        }
    }

    fn render_panel(&self, records: &[&FrequencyRecord], out: &mut dyn Write) -> Result<()> {
        let records = &records[..records.len().min(self.config.max_items)];
        let max = records.iter().map(|r| r.count).max().unwrap_or(0).max(1);
        let labels: Vec<String> = records.iter().map(|r| Self::label(r)).collect();
        let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

        for (record, label) in records.iter().zip(&labels) {
            // Every non-empty record gets at least one block
            let len = ((record.count as f64 / max as f64) * self.width as f64).round() as usize;
            let bar: String = std::iter::repeat_n(BAR, len.max(1)).collect();
            writeln!(out, "{label:<label_width$} {bar} {}", record.count)?;
        }
        Ok(())
    }
}

impl Reporter for BarChartReporter {
    fn render(&self, records: &[FrequencyRecord], out: &mut dyn Write) -> Result<()> {
        let labels = sentiment_labels(records);
        if labels.is_empty() {
            let all: Vec<&FrequencyRecord> = records.iter().collect();
            return self.render_panel(&all, out);
        }

        for (idx, label) in labels.iter().enumerate() {
            if idx > 0 {
                writeln!(out)?;
            }
            writeln!(out, "[{label}]")?;
            let panel: Vec<&FrequencyRecord> = records
                .iter()
                .filter(|r| r.sentiment.as_deref() == Some(*label))
                .collect();
            self.render_panel(&panel, out)?;
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "bar_chart"
    }
}
