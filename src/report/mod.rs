//! Reporting of aggregated counts.
//!
//! A [`Reporter`] is the terminal stage of the pipeline: it receives a
//! finite, already-sorted list of [`FrequencyRecord`]s and writes them to a
//! sink. Three reporters exist:
//!
//! - [`TableReporter`]: plain table, JSON or CSV
//! - [`BarChartReporter`]: horizontal text bar chart, one panel per sentiment
//! - [`WordCloudReporter`]: weighted, colored word list for an external
//!   word-cloud layout engine

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TidyError};
use crate::frequency::FrequencyRecord;

pub mod bar_chart;
pub mod table;
pub mod word_cloud;

pub use bar_chart::BarChartReporter;
pub use table::{TableFormat, TableReporter, write_rows};
pub use word_cloud::{WordCloudItem, WordCloudReporter};

/// Trait for sinks that render aggregated records.
pub trait Reporter {
    /// Render the records to `out`.
    fn render(&self, records: &[FrequencyRecord], out: &mut dyn Write) -> Result<()>;

    /// Get the name of this reporter.
    fn name(&self) -> &'static str;
}

/// Which reporter to use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Table,
    Bar,
    Cloud,
}

/// Rendering options shared by the chart reporters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Colors, in order of use.
    pub palette: Vec<String>,

    /// Maximum number of items drawn (per panel for bar charts).
    pub max_items: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            // ColorBrewer "Dark2"
            palette: vec![
                "#1b9e77".to_string(),
                "#d95f02".to_string(),
                "#7570b3".to_string(),
                "#e7298a".to_string(),
                "#66a61e".to_string(),
                "#e6ab02".to_string(),
            ],
            max_items: 100,
        }
    }
}

impl RenderConfig {
    /// Check the configuration before rendering.
    pub fn validate(&self) -> Result<()> {
        if self.palette.is_empty() {
            return Err(TidyError::malformed(
                "palette must contain at least one color",
            ));
        }
        if self.max_items == 0 {
            return Err(TidyError::malformed("max_items must be at least 1"));
        }
        Ok(())
    }
}

/// Build the reporter for a chart kind.
pub fn reporter_for(
    kind: ChartKind,
    format: TableFormat,
    config: RenderConfig,
) -> Result<Box<dyn Reporter>> {
    let reporter: Box<dyn Reporter> = match kind {
        ChartKind::Table => Box::new(TableReporter::new(format)),
        ChartKind::Bar => Box::new(BarChartReporter::new(config)?),
        ChartKind::Cloud => Box::new(WordCloudReporter::new(config)?),
    };
    Ok(reporter)
}

/// Distinct sentiment labels in first-seen order.
pub(crate) fn sentiment_labels(records: &[FrequencyRecord]) -> Vec<&str> {
    let mut labels: Vec<&str> = Vec::new();
    for label in records.iter().filter_map(|r| r.sentiment.as_deref()) {
        if !labels.contains(&label) {
            labels.push(label);
        }
    }
    labels
}
