//! Unicode word tokenizer implementation.
//!
//! This module provides a tokenizer that splits text using Unicode word boundary
//! rules (UAX #29). Letters and digits are grouped into words, punctuation and
//! whitespace segments are dropped, and every word is lowercased.
//!
//! # Examples
//!
//! ```
//! use tidyword::analysis::annotator::AnnotatedLine;
//! use tidyword::analysis::tokenizer::Tokenizer;
//! use tidyword::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
//!
//! let line = AnnotatedLine {
//!     document_id: "emma".to_string(),
//!     line_number: 1,
//!     chapter_number: 0,
//!     text: "Emma Woodhouse, handsome, clever, and rich".to_string(),
//! };
//! let words: Vec<_> = UnicodeWordTokenizer::new()
//!     .tokenize(&line)
//!     .map(|t| t.word)
//!     .collect();
//!
//! assert_eq!(words, vec!["emma", "woodhouse", "handsome", "clever", "and", "rich"]);
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::annotator::AnnotatedLine;
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;

/// A tokenizer that splits text on Unicode word boundaries.
///
/// Contractions and possessives stay whole ("don't", "emma's"), since UAX #29
/// does not break on an apostrophe between letters.
#[derive(Clone, Debug, Default)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    /// Create a new Unicode word tokenizer.
    pub fn new() -> Self {
        UnicodeWordTokenizer
    }

    /// Split raw text into normalized words.
    ///
    /// Segments without any alphanumeric character are dropped, as are words
    /// that end up empty after lowercasing.
    pub fn words(text: &str) -> Vec<String> {
        Self::iter_words(text).collect()
    }

    /// Lazy version of [`words`](Self::words).
    pub fn iter_words(text: &str) -> impl Iterator<Item = String> + '_ {
        text.split_word_bounds()
            .filter(|segment| segment.chars().any(|c| c.is_alphanumeric()))
            .map(|segment| segment.to_lowercase())
            .filter(|word| !word.is_empty())
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize<'a>(&self, line: &'a AnnotatedLine) -> TokenStream<'a> {
        Box::new(Self::iter_words(&line.text).map(move |word| {
            Token::new(
                line.document_id.as_str(),
                line.line_number,
                line.chapter_number,
                word,
            )
        }))
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(text: &str) -> AnnotatedLine {
        AnnotatedLine {
            document_id: "doc".to_string(),
            line_number: 7,
            chapter_number: 2,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_unicode_word_tokenizer() {
        let tokens: Vec<Token> = UnicodeWordTokenizer::new()
            .tokenize(&line("Hello, WORLD! Café 1811"))
            .collect();

        let words: Vec<_> = tokens.iter().map(|t| t.word.as_str()).collect();
        assert_eq!(words, vec!["hello", "world", "café", "1811"]);
        for token in &tokens {
            assert_eq!((token.line_number, token.chapter_number), (7, 2));
            assert_eq!(token.document_id, "doc");
        }
    }

    #[test]
    fn test_contractions_kept_whole() {
        assert_eq!(
            UnicodeWordTokenizer::words("I don't know Emma's mind."),
            vec!["i", "don't", "know", "emma's", "mind"]
        );
    }

    #[test]
    fn test_deterministic() {
        let tokenizer = UnicodeWordTokenizer::new();
        let input = line("It is a truth universally acknowledged...");
        let first: Vec<Token> = tokenizer.tokenize(&input).collect();
        let second: Vec<Token> = tokenizer.tokenize(&input).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_decimal_numbers_kept_whole() {
        assert_eq!(
            UnicodeWordTokenizer::words("pi is 3.14, roughly"),
            vec!["pi", "is", "3.14", "roughly"]
        );
    }

    #[test]
    fn test_punctuation_only_line() {
        let line = line("-- ... !");
        assert_eq!(UnicodeWordTokenizer::new().tokenize(&line).count(), 0);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(UnicodeWordTokenizer::new().name(), "unicode_word");
    }
}
