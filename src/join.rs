//! Lexicon joins.
//!
//! [`LexiconJoiner`] performs an inner join of a token sequence against a
//! [`Lexicon`]: tokens without a lexicon entry are dropped, and a token whose
//! word has several entries yields one match per entry.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use tidyword::analysis::token::Token;
//! use tidyword::join::LexiconJoiner;
//! use tidyword::lexicon::{Lexicon, LexiconKind, SentimentEntry};
//!
//! let bing = Lexicon::from_entries(
//!     "bing",
//!     LexiconKind::Binary,
//!     vec![SentimentEntry::labeled("love", "positive")],
//! );
//! let tokens = vec![
//!     Token::new("d", 1, 0, "love"),
//!     Token::new("d", 1, 0, "and"),
//!     Token::new("d", 2, 0, "love"),
//! ];
//!
//! let matches = LexiconJoiner::new(Arc::new(bing)).join(&tokens);
//! assert_eq!(matches.len(), 2);
//! assert!(matches.iter().all(|m| m.entry.label == "positive"));
//! ```

use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::lexicon::{Lexicon, SentimentEntry};

/// A token paired with one matching lexicon entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SentimentMatch {
    pub token: Token,
    pub entry: SentimentEntry,
}

impl SentimentMatch {
    /// The matched word.
    pub fn word(&self) -> &str {
        &self.token.word
    }

    /// The sentiment label of the matched entry.
    pub fn label(&self) -> &str {
        &self.entry.label
    }
}

/// Inner-joins tokens against a lexicon.
#[derive(Clone, Debug)]
pub struct LexiconJoiner {
    lexicon: Arc<Lexicon>,
}

impl LexiconJoiner {
    /// Create a joiner over a lexicon.
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        LexiconJoiner { lexicon }
    }

    /// Get the lexicon.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Join tokens against the lexicon.
    ///
    /// Output follows token order, and for each token the lexicon's entry
    /// order. Neither input is modified.
    pub fn join(&self, tokens: &[Token]) -> Vec<SentimentMatch> {
        let matches: Vec<SentimentMatch> = tokens
            .iter()
            .flat_map(|token| {
                self.lexicon
                    .lookup(&token.word)
                    .iter()
                    .map(move |entry| SentimentMatch {
                        token: token.clone(),
                        entry: entry.clone(),
                    })
            })
            .collect();

        debug!(
            "Joined {} tokens against lexicon '{}': {} matches",
            tokens.len(),
            self.lexicon.name(),
            matches.len()
        );
        matches
    }

    /// Tokens with no entry in the lexicon (anti-join), in input order.
    pub fn unmatched(&self, tokens: &[Token]) -> Vec<Token> {
        tokens
            .iter()
            .filter(|token| !self.lexicon.contains(&token.word))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::LexiconKind;

    fn nrc() -> Arc<Lexicon> {
        Arc::new(Lexicon::from_entries(
            "nrc",
            LexiconKind::Categorical,
            vec![
                SentimentEntry::labeled("abandon", "fear"),
                SentimentEntry::labeled("abandon", "sadness"),
                SentimentEntry::labeled("happy", "joy"),
            ],
        ))
    }

    #[test]
    fn test_fan_out() {
        let tokens = vec![
            Token::new("d", 1, 0, "abandon"),
            Token::new("d", 1, 0, "ship"),
            Token::new("d", 2, 1, "happy"),
        ];

        let matches = LexiconJoiner::new(nrc()).join(&tokens);
        let pairs: Vec<_> = matches.iter().map(|m| (m.word(), m.label())).collect();
        assert_eq!(
            pairs,
            vec![
                ("abandon", "fear"),
                ("abandon", "sadness"),
                ("happy", "joy"),
            ]
        );
        assert_eq!(matches[2].token.chapter_number, 1);
    }

    #[test]
    fn test_unmatched_is_anti_join() {
        let tokens = vec![
            Token::new("d", 1, 0, "abandon"),
            Token::new("d", 1, 0, "ship"),
        ];
        let unmatched = LexiconJoiner::new(nrc()).unmatched(&tokens);
        assert_eq!(unmatched, vec![Token::new("d", 1, 0, "ship")]);
    }

    #[test]
    fn test_no_tokens() {
        assert!(LexiconJoiner::new(nrc()).join(&[]).is_empty());
    }
}
