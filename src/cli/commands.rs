//! Command implementations for the tidyword CLI.

use std::io::{self, Write};

use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::{PipelineConfig, TokenizerConfig};
use crate::corpus::{Corpus, CorpusLoader, JsonlCorpusLoader, TextCorpusLoader};
use crate::error::{Result, TidyError};
use crate::frequency::GroupBy;
use crate::lexicon::LexiconRegistry;
use crate::pipeline::Pipeline;

/// Execute a CLI command, writing results to standard output.
pub fn execute_command(args: TidywordArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute_command_to(&args, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Execute a CLI command, writing results to `out`.
pub fn execute_command_to(args: &TidywordArgs, out: &mut dyn Write) -> Result<()> {
    match &args.command {
        Command::Count(count_args) => count(count_args, args, out),
        Command::Sentiment(sentiment_args) => sentiment(sentiment_args, args, out),
        Command::Trajectory(trajectory_args) => trajectory(trajectory_args, args, out),
        Command::TfIdf(tf_idf_args) => tf_idf(tf_idf_args, args, out),
        Command::Annotate(annotate_args) => annotate(annotate_args, args, out),
    }
}

/// Count word frequencies.
fn count(args: &CountArgs, cli_args: &TidywordArgs, out: &mut dyn Write) -> Result<()> {
    let corpus = load_corpus(&args.corpus)?;

    let mut config = base_config(&args.corpus)?;
    apply_stop_words(&mut config, &args.stop_words);
    apply_aggregation(&mut config, &args.aggregation);
    apply_render(&mut config, &args.render);
    config.lexicon = None;
    config.aggregation.group_by = if args.by_document {
        GroupBy::WordDocument
    } else {
        GroupBy::Word
    };
    if let Some(n) = args.ngram {
        config.tokenizer = TokenizerConfig::Ngram { min_n: n, max_n: n };
    }

    let pipeline = Pipeline::new(config, &LexiconRegistry::new())?;
    let output = pipeline.run(&corpus)?;

    output_records(
        &format!("Word counts over {} documents", corpus.len()),
        &output.records,
        &args.render,
        &pipeline.config().render,
        cli_args,
        out,
    )
}

/// Count sentiment-bearing words.
fn sentiment(args: &SentimentArgs, cli_args: &TidywordArgs, out: &mut dyn Write) -> Result<()> {
    let corpus = load_corpus(&args.corpus)?;
    let registry = load_lexicon(&args.lexicon)?;

    let mut config = base_config(&args.corpus)?;
    apply_stop_words(&mut config, &args.stop_words);
    apply_aggregation(&mut config, &args.aggregation);
    apply_render(&mut config, &args.render);
    config.lexicon = Some(args.lexicon.name());
    config.aggregation.group_by = args.group_by.into();

    let pipeline = Pipeline::new(config, &registry)?;
    let output = pipeline.run(&corpus)?;

    output_records(
        &format!(
            "Sentiment counts over {} documents using lexicon '{}'",
            corpus.len(),
            args.lexicon.name()
        ),
        &output.records,
        &args.render,
        &pipeline.config().render,
        cli_args,
        out,
    )
}

/// Net sentiment per block of lines.
fn trajectory(args: &TrajectoryArgs, cli_args: &TidywordArgs, out: &mut dyn Write) -> Result<()> {
    let corpus = load_corpus(&args.corpus)?;
    let registry = load_lexicon(&args.lexicon)?;

    let mut config = base_config(&args.corpus)?;
    apply_stop_words(&mut config, &args.stop_words);
    config.lexicon = Some(args.lexicon.name());
    if let Some(block_size) = args.block_size {
        config.trajectory_block_size = block_size;
    }

    let pipeline = Pipeline::new(config, &registry)?;
    let points = pipeline.trajectory(&corpus)?;

    output_rows(
        &format!(
            "Sentiment per {} lines",
            pipeline.config().trajectory_block_size
        ),
        &points,
        cli_args,
        out,
    )
}

/// tf-idf per document.
fn tf_idf(args: &TfIdfArgs, cli_args: &TidywordArgs, out: &mut dyn Write) -> Result<()> {
    if args.top_n == Some(0) {
        return Err(TidyError::malformed("top_n must be at least 1"));
    }
    let corpus = load_corpus(&args.corpus)?;

    let mut config = base_config(&args.corpus)?;
    apply_stop_words(&mut config, &args.stop_words);
    config.lexicon = None;
    config.aggregation.group_by = GroupBy::WordDocument;

    let pipeline = Pipeline::new(config, &LexiconRegistry::new())?;
    let mut records = pipeline.tf_idf(&corpus);
    if let Some(top_n) = args.top_n {
        records.truncate(top_n);
    }

    output_rows(
        &format!("tf-idf over {} documents", corpus.len()),
        &records,
        cli_args,
        out,
    )
}

/// Show annotated lines.
fn annotate(args: &AnnotateArgs, cli_args: &TidywordArgs, out: &mut dyn Write) -> Result<()> {
    let corpus = load_corpus(&args.corpus)?;

    let mut config = base_config(&args.corpus)?;
    config.lexicon = None;
    config.aggregation.group_by = GroupBy::Word;

    let pipeline = Pipeline::new(config, &LexiconRegistry::new())?;
    let mut lines = pipeline.annotate(&corpus);
    if args.headings_only {
        lines.retain(|line| pipeline.annotator().is_heading(&line.text));
    }

    output_rows(
        &format!(
            "{} lines in {} documents",
            corpus.total_lines(),
            corpus.len()
        ),
        &lines,
        cli_args,
        out,
    )
}

/// Load every input path into one corpus.
fn load_corpus(args: &CorpusArgs) -> Result<Corpus> {
    let mut corpus = Corpus::new();
    for path in &args.paths {
        let loaded = if args.jsonl {
            JsonlCorpusLoader::new()
                .with_gutenberg_strip(args.strip_gutenberg)
                .load(path)
        } else {
            TextCorpusLoader::new()
                .with_gutenberg_strip(args.strip_gutenberg)
                .load(path)
        };
        let documents = loaded.map_err(|e| e.in_stage("load", None))?;
        corpus
            .extend(documents)
            .map_err(|e| e.in_stage("load", None))?;
    }

    info!(
        "Loaded {} documents ({} lines)",
        corpus.len(),
        corpus.total_lines()
    );
    Ok(corpus)
}

/// Load the lexicon named on the command line into a fresh registry.
fn load_lexicon(args: &LexiconArgs) -> Result<LexiconRegistry> {
    let mut registry = LexiconRegistry::new();
    registry
        .load(args.name(), &args.lexicon, args.lexicon_kind.into())
        .map_err(|e| e.in_stage("join", None))?;
    Ok(registry)
}

/// Configuration file (or defaults) with the corpus flags applied.
fn base_config(args: &CorpusArgs) -> Result<PipelineConfig> {
    let mut config = match &args.config {
        Some(path) => PipelineConfig::from_file(path)?,
        None => PipelineConfig::default(),
    };
    if let Some(pattern) = &args.chapter_pattern {
        config.chapter_pattern = pattern.clone();
    }
    Ok(config)
}

fn apply_stop_words(config: &mut PipelineConfig, args: &StopWordArgs) {
    if args.keep_stop_words {
        config.stop_words.builtin = false;
    }
    config
        .stop_words
        .files
        .extend(args.stop_word_files.iter().cloned());
    config
        .stop_words
        .words
        .extend(args.extra_stop_words.iter().cloned());
}

fn apply_aggregation(config: &mut PipelineConfig, args: &AggregationArgs) {
    if let Some(min_count) = args.min_count {
        config.aggregation.min_count = min_count;
    }
    if let Some(top_n) = args.top_n {
        config.aggregation.top_n = Some(top_n);
    }
}

fn apply_render(config: &mut PipelineConfig, args: &RenderArgs) {
    if !args.palette.is_empty() {
        config.render.palette = args.palette.clone();
    }
    if let Some(max_items) = args.max_items {
        config.render.max_items = max_items;
    }
}
