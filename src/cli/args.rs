//! Command line argument parsing for the tidyword CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::frequency::GroupBy;
use crate::lexicon::LexiconKind;
use crate::report::{ChartKind, TableFormat};

/// tidyword - tidy text mining from the command line
#[derive(Parser, Debug, Clone)]
#[command(name = "tidyword")]
#[command(about = "Tidy text mining: word counts, sentiment and tf-idf over text corpora")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TidywordArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TidywordArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n + 1,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Count word frequencies
    Count(CountArgs),

    /// Count sentiment-bearing words using a lexicon
    Sentiment(SentimentArgs),

    /// Net sentiment per block of lines through each document
    Trajectory(TrajectoryArgs),

    /// Words characteristic of each document (tf-idf)
    #[command(name = "tf-idf")]
    TfIdf(TfIdfArgs),

    /// Show line and chapter numbers
    Annotate(AnnotateArgs),
}

/// Where the corpus comes from and how lines are annotated.
#[derive(Args, Debug, Clone)]
pub struct CorpusArgs {
    /// Text files, directories of text files, or JSONL files
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    /// Read inputs as JSON Lines ({"document_id": .., "text": ..})
    #[arg(long)]
    pub jsonl: bool,

    /// Strip Project Gutenberg headers and footers
    #[arg(long)]
    pub strip_gutenberg: bool,

    /// Chapter heading regex (case-insensitive)
    #[arg(long, value_name = "REGEX")]
    pub chapter_pattern: Option<String>,

    /// Pipeline configuration file (JSON); flags override its values
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,
}

/// Stop-word options.
#[derive(Args, Debug, Clone, Default)]
pub struct StopWordArgs {
    /// Keep stop words (disable the built-in list)
    #[arg(long)]
    pub keep_stop_words: bool,

    /// Extra stop-word file (one word per line); may be repeated
    #[arg(long = "stop-words", value_name = "FILE")]
    pub stop_word_files: Vec<PathBuf>,

    /// Extra stop words (comma-separated)
    #[arg(long = "stop-word", value_name = "WORD", value_delimiter = ',')]
    pub extra_stop_words: Vec<String>,
}

/// Lexicon options.
#[derive(Args, Debug, Clone)]
pub struct LexiconArgs {
    /// Lexicon file (CSV or TSV with word, sentiment and/or value columns)
    #[arg(short, long, value_name = "FILE")]
    pub lexicon: PathBuf,

    /// Lexicon kind
    #[arg(long, default_value = "binary")]
    pub lexicon_kind: LexiconKindArg,

    /// Lexicon name (defaults to the file stem)
    #[arg(long)]
    pub lexicon_name: Option<String>,
}

impl LexiconArgs {
    /// The name the lexicon is registered under.
    pub fn name(&self) -> String {
        self.lexicon_name.clone().unwrap_or_else(|| {
            self.lexicon
                .file_stem()
                .map(|stem| stem.to_string_lossy().to_string())
                .unwrap_or_else(|| "lexicon".to_string())
        })
    }
}

/// Aggregation options.
#[derive(Args, Debug, Clone, Default)]
pub struct AggregationArgs {
    /// Drop words counted fewer times than this
    #[arg(long)]
    pub min_count: Option<u64>,

    /// Keep only the N most frequent entries
    #[arg(short = 'n', long)]
    pub top_n: Option<usize>,
}

/// Rendering options.
#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Chart kind
    #[arg(long, default_value = "table")]
    pub chart: ChartArg,

    /// Colors for charts (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub palette: Vec<String>,

    /// Maximum number of items drawn in charts
    #[arg(long)]
    pub max_items: Option<usize>,
}

/// Arguments for counting words
#[derive(Parser, Debug, Clone)]
pub struct CountArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    #[command(flatten)]
    pub stop_words: StopWordArgs,

    #[command(flatten)]
    pub aggregation: AggregationArgs,

    #[command(flatten)]
    pub render: RenderArgs,

    /// Count per document instead of across the corpus
    #[arg(long)]
    pub by_document: bool,

    /// Count word n-grams of this size instead of single words
    #[arg(long, value_name = "N")]
    pub ngram: Option<usize>,
}

/// Arguments for sentiment counts
#[derive(Parser, Debug, Clone)]
pub struct SentimentArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    #[command(flatten)]
    pub stop_words: StopWordArgs,

    #[command(flatten)]
    pub lexicon: LexiconArgs,

    #[command(flatten)]
    pub aggregation: AggregationArgs,

    #[command(flatten)]
    pub render: RenderArgs,

    /// Grouping key
    #[arg(short, long, default_value = "word-sentiment")]
    pub group_by: GroupByArg,
}

/// Arguments for sentiment trajectories
#[derive(Parser, Debug, Clone)]
pub struct TrajectoryArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    #[command(flatten)]
    pub stop_words: StopWordArgs,

    #[command(flatten)]
    pub lexicon: LexiconArgs,

    /// Lines per block
    #[arg(short, long)]
    pub block_size: Option<usize>,
}

/// Arguments for tf-idf
#[derive(Parser, Debug, Clone)]
pub struct TfIdfArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    #[command(flatten)]
    pub stop_words: StopWordArgs,

    /// Keep only the N highest-scoring entries
    #[arg(short = 'n', long)]
    pub top_n: Option<usize>,
}

/// Arguments for line annotation
#[derive(Parser, Debug, Clone)]
pub struct AnnotateArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Only show chapter heading lines
    #[arg(long)]
    pub headings_only: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
    /// CSV output
    Csv,
}

impl From<OutputFormat> for TableFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Human => TableFormat::Human,
            OutputFormat::Json => TableFormat::Json,
            OutputFormat::Csv => TableFormat::Csv,
        }
    }
}

/// Chart kinds available in CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartArg {
    /// Sorted table
    Table,
    /// Horizontal bar chart
    Bar,
    /// Word cloud input (JSON)
    Cloud,
}

impl From<ChartArg> for ChartKind {
    fn from(chart: ChartArg) -> Self {
        match chart {
            ChartArg::Table => ChartKind::Table,
            ChartArg::Bar => ChartKind::Bar,
            ChartArg::Cloud => ChartKind::Cloud,
        }
    }
}

/// Grouping keys available in CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupByArg {
    /// Per word
    Word,
    /// Per word and sentiment label
    WordSentiment,
    /// Per word and document
    WordDocument,
}

impl From<GroupByArg> for GroupBy {
    fn from(group_by: GroupByArg) -> Self {
        match group_by {
            GroupByArg::Word => GroupBy::Word,
            GroupByArg::WordSentiment => GroupBy::WordSentiment,
            GroupByArg::WordDocument => GroupBy::WordDocument,
        }
    }
}

/// Lexicon kinds available in CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LexiconKindArg {
    /// positive / negative labels
    Binary,
    /// Arbitrary labels, a word may carry several
    Categorical,
    /// Numeric scores
    Numeric,
}

impl From<LexiconKindArg> for LexiconKind {
    fn from(kind: LexiconKindArg) -> Self {
        match kind {
            LexiconKindArg::Binary => LexiconKind::Binary,
            LexiconKindArg::Categorical => LexiconKind::Categorical,
            LexiconKindArg::Numeric => LexiconKind::Numeric,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_count_command() {
        let args = TidywordArgs::try_parse_from([
            "tidyword",
            "count",
            "austen/",
            "--stop-word",
            "miss,sir",
            "--min-count",
            "3",
            "-n",
            "20",
            "--chart",
            "bar",
        ])
        .unwrap();

        if let Command::Count(count_args) = args.command {
            assert_eq!(count_args.corpus.paths, vec![PathBuf::from("austen/")]);
            assert_eq!(count_args.stop_words.extra_stop_words, vec!["miss", "sir"]);
            assert_eq!(count_args.aggregation.min_count, Some(3));
            assert_eq!(count_args.aggregation.top_n, Some(20));
            assert_eq!(count_args.render.chart, ChartArg::Bar);
            assert!(!count_args.by_document);
        } else {
            panic!("Expected Count command");
        }
    }

    #[test]
    fn test_sentiment_command() {
        let args = TidywordArgs::try_parse_from([
            "tidyword",
            "-f",
            "json",
            "sentiment",
            "emma.txt",
            "--lexicon",
            "lexicons/nrc.csv",
            "--lexicon-kind",
            "categorical",
        ])
        .unwrap();

        assert_eq!(args.output_format, OutputFormat::Json);
        if let Command::Sentiment(sentiment_args) = args.command {
            assert_eq!(sentiment_args.lexicon.name(), "nrc");
            assert_eq!(
                sentiment_args.lexicon.lexicon_kind,
                LexiconKindArg::Categorical
            );
            assert_eq!(sentiment_args.group_by, GroupByArg::WordSentiment);
        } else {
            panic!("Expected Sentiment command");
        }
    }

    #[test]
    fn test_tf_idf_command_name() {
        let args = TidywordArgs::try_parse_from(["tidyword", "tf-idf", "a.txt", "b.txt"]).unwrap();
        assert!(matches!(args.command, Command::TfIdf(_)));
    }

    #[test]
    fn test_paths_required() {
        assert!(TidywordArgs::try_parse_from(["tidyword", "count"]).is_err());
    }

    #[test]
    fn test_verbosity() {
        let quiet = TidywordArgs::try_parse_from(["tidyword", "-q", "annotate", "a.txt"]).unwrap();
        assert_eq!(quiet.verbosity(), 0);

        let normal = TidywordArgs::try_parse_from(["tidyword", "annotate", "a.txt"]).unwrap();
        assert_eq!(normal.verbosity(), 1);

        let debug = TidywordArgs::try_parse_from(["tidyword", "annotate", "a.txt", "-vv"]).unwrap();
        assert_eq!(debug.verbosity(), 3);
    }
}
