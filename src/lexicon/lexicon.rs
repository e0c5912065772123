//! Lexicon structure and entries.

use std::fmt;

use ahash::AHashMap;
use log::debug;
use serde::{Deserialize, Serialize};

/// Label given to numeric entries with a score above zero.
pub const POSITIVE: &str = "positive";
/// Label given to numeric entries with a score below zero.
pub const NEGATIVE: &str = "negative";
/// Label given to numeric entries with a zero score.
pub const NEUTRAL: &str = "neutral";

/// The shape of a lexicon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LexiconKind {
    /// One positive/negative label per word
    Binary,
    /// Several category labels per word
    Categorical,
    /// Signed polarity score per word
    Numeric,
}

impl fmt::Display for LexiconKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LexiconKind::Binary => "binary",
            LexiconKind::Categorical => "categorical",
            LexiconKind::Numeric => "numeric",
        };
        write!(f, "{name}")
    }
}

/// One (word, label, score) row of a lexicon.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SentimentEntry {
    pub word: String,
    pub label: String,
    pub score: Option<f64>,
}

impl SentimentEntry {
    /// Create a labeled entry without a score.
    pub fn labeled<W: Into<String>, L: Into<String>>(word: W, label: L) -> Self {
        SentimentEntry {
            word: word.into(),
            label: label.into(),
            score: None,
        }
    }

    /// Create a scored entry, labeled by the sign of its score.
    pub fn scored<W: Into<String>>(word: W, score: f64) -> Self {
        let label = if score > 0.0 {
            POSITIVE
        } else if score < 0.0 {
            NEGATIVE
        } else {
            NEUTRAL
        };
        SentimentEntry {
            word: word.into(),
            label: label.to_string(),
            score: Some(score),
        }
    }

    /// Attach a score to this entry.
    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }
}

/// A read-only mapping from word to sentiment entries.
///
/// # Examples
///
/// ```
/// use tidyword::lexicon::{Lexicon, LexiconKind, SentimentEntry};
///
/// let nrc = Lexicon::from_entries(
///     "nrc",
///     LexiconKind::Categorical,
///     vec![
///         SentimentEntry::labeled("abandon", "fear"),
///         SentimentEntry::labeled("abandon", "sadness"),
///         SentimentEntry::labeled("joy", "joy"),
///     ],
/// );
///
/// assert_eq!(nrc.lookup("abandon").len(), 2);
/// assert!(nrc.lookup("castle").is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct Lexicon {
    name: String,
    kind: LexiconKind,
    entries: AHashMap<String, Vec<SentimentEntry>>,
    entry_count: usize,
}

impl Lexicon {
    /// Create an empty lexicon.
    pub fn new<S: Into<String>>(name: S, kind: LexiconKind) -> Self {
        Lexicon {
            name: name.into(),
            kind,
            entries: AHashMap::new(),
            entry_count: 0,
        }
    }

    /// Create a lexicon from entries.
    pub fn from_entries<S, I>(name: S, kind: LexiconKind, entries: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = SentimentEntry>,
    {
        let mut lexicon = Self::new(name, kind);
        for entry in entries {
            lexicon.insert(entry);
        }
        lexicon
    }

    /// Add an entry. Words are lowercased.
    ///
    /// The first entry for a (word, label) pair wins: a later one with the
    /// same pair is dropped even if its score differs. Returns whether the
    /// entry was added.
    pub fn insert(&mut self, mut entry: SentimentEntry) -> bool {
        entry.word = entry.word.trim().to_lowercase();
        let slot = self.entries.entry(entry.word.clone()).or_default();
        if let Some(existing) = slot.iter().find(|e| e.label == entry.label) {
            debug!(
                "Lexicon '{}': dropping duplicate entry {}/{} (score {:?}, keeping {:?})",
                self.name,
                entry.word,
                entry.label,
                entry.score,
                existing.score
            );
            return false;
        }
        slot.push(entry);
        self.entry_count += 1;
        true
    }

    /// All entries for a word, in insertion order. Empty if the word is absent.
    pub fn lookup(&self, word: &str) -> &[SentimentEntry] {
        self.entries.get(word).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Check if the lexicon has any entry for a word.
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// The lexicon name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The lexicon shape.
    pub fn kind(&self) -> LexiconKind {
        self.kind
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Total number of entries (a word with two labels counts twice).
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    /// Check if the lexicon has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct labels, sorted.
    pub fn labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = self
            .entries
            .values()
            .flatten()
            .map(|e| e.label.clone())
            .collect();
        labels.sort();
        labels.dedup();
        labels
    }
}
