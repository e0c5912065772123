//! Stop filter implementation.
//!
//! This module provides a filter that removes common words (stop words) that
//! carry little information for frequency and sentiment analysis. Removing
//! them is an anti-join of the token stream against a [`StopWordSet`].
//!
//! # Examples
//!
//! ```
//! use tidyword::analysis::token::Token;
//! use tidyword::analysis::token_filter::stop::{StopFilter, StopWordSet};
//!
//! let filter = StopFilter::new(StopWordSet::from_words(vec!["the", "and"]));
//! let tokens = vec![
//!     Token::new("d", 1, 0, "the"),
//!     Token::new("d", 1, 0, "quick"),
//!     Token::new("d", 1, 0, "fox"),
//! ];
//!
//! let result = filter.filter_tokens(&tokens);
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].word, "quick");
//! ```

use std::fs;
use std::path::Path;
use std::sync::Arc;

use ahash::AHashSet;
use log::debug;
use stop_words::{LANGUAGE, get};

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::{Result, TidyError};

/// A case-normalized set of stop words.
///
/// Words are lowercased on insertion, so membership tests against
/// lowercase tokens are exact.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StopWordSet {
    words: AHashSet<String>,
}

impl StopWordSet {
    /// Create an empty set (filters nothing).
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in English stop-word list.
    pub fn english() -> Self {
        Self::from_words(get(LANGUAGE::English).iter().map(|s| s.to_string()))
    }

    /// Create a set from a list of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        StopWordSet { words }
    }

    /// Load a newline-separated stop-word file.
    ///
    /// Blank lines and lines starting with `#` are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`TidyError::MissingReferenceData`] if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            TidyError::missing_reference(format!("stop words {}", path.display()), e.to_string())
        })?;

        let set = Self::from_words(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.starts_with('#')),
        );
        debug!("Loaded {} stop words from {}", set.len(), path.display());
        Ok(set)
    }

    /// Add every word of another set to this one.
    pub fn merge(&mut self, other: StopWordSet) {
        self.words.extend(other.words);
    }

    /// Add individual words.
    pub fn add_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.merge(Self::from_words(words));
    }

    /// Check if a word is a stop word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// A filter that removes stop words from the token stream.
///
/// Word n-gram tokens (space-joined words) are removed when any of their
/// words is a stop word. For single words this is plain set membership.
///
/// The filter is pure: the same token sequence and set always give the same
/// output, and filtering twice changes nothing the second time.
#[derive(Clone, Debug)]
pub struct StopFilter {
    stop_words: Arc<StopWordSet>,
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::english()
    }
}

impl StopFilter {
    /// Create a stop filter over the given set.
    pub fn new(stop_words: StopWordSet) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
        }
    }

    /// Create a stop filter with the built-in English list.
    pub fn english() -> Self {
        Self::new(StopWordSet::english())
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the stop-word set.
    pub fn stop_words(&self) -> &StopWordSet {
        &self.stop_words
    }

    /// Return the tokens whose word is not a stop word, in input order.
    pub fn filter_tokens(&self, tokens: &[Token]) -> Vec<Token> {
        tokens
            .iter()
            .filter(|token| self.keeps(token))
            .cloned()
            .collect()
    }

    fn keeps(&self, token: &Token) -> bool {
        let words = &self.stop_words;
        !(words.contains(&token.word) || token.word.split(' ').any(|part| words.contains(part)))
    }
}

impl Filter for StopFilter {
    fn filter<'a>(&'a self, tokens: TokenStream<'a>) -> TokenStream<'a> {
        Box::new(tokens.filter(move |token| self.keeps(token)))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
