//! Criterion benchmarks for tidyword.
//!
//! Covers the per-token stages of the pipeline:
//! - Tokenization (single words and bigrams)
//! - Stop-word filtering
//! - Frequency aggregation and lexicon joins
//! - A full pipeline run

use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use tidyword::analysis::annotator::LineAnnotator;
use tidyword::analysis::token::Token;
use tidyword::analysis::token_filter::StopFilter;
use tidyword::analysis::tokenizer::{NgramTokenizer, Tokenizer, UnicodeWordTokenizer};
use tidyword::config::PipelineConfig;
use tidyword::corpus::{Corpus, Document};
use tidyword::frequency::{AggregationConfig, FrequencyAggregator, GroupBy};
use tidyword::join::LexiconJoiner;
use tidyword::lexicon::{Lexicon, LexiconKind, LexiconRegistry, SentimentEntry};
use tidyword::pipeline::Pipeline;

const WORDS: &[&str] = &[
    "the", "miss", "of", "emma", "and", "happy", "to", "poor", "she", "love", "was", "dear",
    "a", "good", "in", "hope", "her", "sorry", "it", "well", "not", "pleasure", "be", "doubt",
];

/// Generate test documents for benchmarking.
fn generate_documents(count: usize, lines: usize) -> Vec<Document> {
    (0..count)
        .map(|i| {
            let text: Vec<String> = (0..lines)
                .map(|j| {
                    if j % 40 == 0 {
                        return format!("CHAPTER {}", j / 40 + 1);
                    }
                    let len = 6 + (i + j) % 8;
                    (0..len)
                        .map(|k| WORDS[(i * 7 + j * 13 + k * 5) % WORDS.len()])
                        .collect::<Vec<_>>()
                        .join(" ")
                })
                .collect();
            Document::new(format!("doc{i}"), text)
        })
        .collect()
}

fn sentiment_lexicon() -> Lexicon {
    Lexicon::from_entries(
        "bing",
        LexiconKind::Binary,
        vec![
            SentimentEntry::labeled("happy", "positive"),
            SentimentEntry::labeled("love", "positive"),
            SentimentEntry::labeled("good", "positive"),
            SentimentEntry::labeled("pleasure", "positive"),
            SentimentEntry::labeled("poor", "negative"),
            SentimentEntry::labeled("sorry", "negative"),
            SentimentEntry::labeled("doubt", "negative"),
            SentimentEntry::labeled("miss", "negative"),
        ],
    )
}

fn all_tokens(documents: &[Document]) -> Vec<Token> {
    let annotator = LineAnnotator::new();
    let tokenizer = UnicodeWordTokenizer::new();
    documents
        .iter()
        .flat_map(|doc| annotator.annotate(doc))
        .flat_map(|line| tokenizer.tokenize(&line).collect::<Vec<_>>())
        .collect()
}

/// Benchmark tokenization.
fn bench_tokenization(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenization");

    let documents = generate_documents(10, 400);
    let lines: Vec<_> = documents
        .iter()
        .flat_map(|doc| LineAnnotator::new().annotate(doc))
        .collect();
    let words = UnicodeWordTokenizer::new();
    let bigrams = NgramTokenizer::bigram();

    group.throughput(Throughput::Elements(lines.len() as u64));
    group.bench_function("unicode_words", |b| {
        b.iter(|| {
            let count: usize = lines
                .iter()
                .map(|line| words.tokenize(black_box(line)).count())
                .sum();
            black_box(count)
        })
    });

    group.bench_function("bigrams", |b| {
        b.iter(|| {
            let count: usize = lines
                .iter()
                .map(|line| bigrams.tokenize(black_box(line)).count())
                .sum();
            black_box(count)
        })
    });

    group.finish();
}

/// Benchmark the per-token stages.
fn bench_token_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("token_stages");

    let tokens = all_tokens(&generate_documents(10, 400));
    let stop_filter = StopFilter::english();
    let joiner = LexiconJoiner::new(Arc::new(sentiment_lexicon()));
    let by_word = FrequencyAggregator::new(AggregationConfig::default()).unwrap();
    let by_sentiment = FrequencyAggregator::new(AggregationConfig {
        group_by: GroupBy::WordSentiment,
        ..Default::default()
    })
    .unwrap();

    group.throughput(Throughput::Elements(tokens.len() as u64));
    group.bench_function("stop_filter", |b| {
        b.iter(|| black_box(stop_filter.filter_tokens(black_box(&tokens))))
    });

    group.bench_function("count_words", |b| {
        b.iter(|| black_box(by_word.count_tokens(black_box(&tokens)).unwrap()))
    });

    group.bench_function("join_and_count", |b| {
        b.iter(|| {
            let matches = joiner.join(black_box(&tokens));
            black_box(by_sentiment.count_matches(&matches))
        })
    });

    group.finish();
}

/// Benchmark a full pipeline run.
fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    group.sample_size(20);

    let corpus = Corpus::from_documents(generate_documents(20, 400)).unwrap();
    let mut registry = LexiconRegistry::new();
    registry.register(sentiment_lexicon());

    let config = PipelineConfig::default()
        .with_lexicon("bing")
        .with_aggregation(AggregationConfig {
            group_by: GroupBy::WordSentiment,
            top_n: Some(10),
            ..Default::default()
        });
    let pipeline = Pipeline::new(config, &registry).unwrap();

    group.throughput(Throughput::Elements(corpus.total_lines() as u64));
    group.bench_function("sentiment_counts", |b| {
        b.iter(|| black_box(pipeline.run(black_box(&corpus)).unwrap()))
    });

    group.bench_function("tf_idf", |b| {
        b.iter(|| black_box(pipeline.tf_idf(black_box(&corpus))))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_tokenization,
    bench_token_stages,
    bench_pipeline
);
criterion_main!(benches);
