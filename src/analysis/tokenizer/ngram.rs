//! Word n-gram tokenizer implementation.

use std::rc::Rc;

use crate::analysis::annotator::AnnotatedLine;
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
use crate::error::{Result, TidyError};

/// A tokenizer that emits runs of consecutive words, joined by a space.
///
/// Words are found with [`UnicodeWordTokenizer`], so n-grams are lowercase
/// and punctuation-free. N-grams never span two lines; a line with fewer
/// words than `min_n` yields nothing.
///
/// # Examples
///
/// ```
/// use tidyword::analysis::annotator::AnnotatedLine;
/// use tidyword::analysis::tokenizer::ngram::NgramTokenizer;
/// use tidyword::analysis::tokenizer::Tokenizer;
///
/// let line = AnnotatedLine {
///     document_id: "d".to_string(),
///     line_number: 1,
///     chapter_number: 0,
///     text: "Not very happy".to_string(),
/// };
///
/// // Bigrams
/// let tokens: Vec<_> = NgramTokenizer::bigram().tokenize(&line).map(|t| t.word).collect();
/// assert_eq!(tokens, vec!["not very", "very happy"]);
///
/// // Unigrams and bigrams
/// let tokens: Vec<_> = NgramTokenizer::new(1, 2).unwrap()
///     .tokenize(&line)
///     .map(|t| t.word)
///     .collect();
/// assert_eq!(tokens, vec!["not", "not very", "very", "very happy", "happy"]);
/// ```
#[derive(Clone, Debug)]
pub struct NgramTokenizer {
    /// Minimum n-gram size in words
    min_n: usize,
    /// Maximum n-gram size in words
    max_n: usize,
}

impl NgramTokenizer {
    /// Create a new word n-gram tokenizer.
    ///
    /// # Errors
    ///
    /// Returns a malformed configuration error if `min_n` is 0 or `max_n` is
    /// less than `min_n`.
    pub fn new(min_n: usize, max_n: usize) -> Result<Self> {
        if min_n == 0 {
            return Err(TidyError::malformed("n-gram size must be at least 1"));
        }
        if max_n < min_n {
            return Err(TidyError::malformed(format!(
                "max n-gram size ({max_n}) must be >= min n-gram size ({min_n})"
            )));
        }
        Ok(Self { min_n, max_n })
    }

    /// Create a bigram tokenizer (n=2).
    pub fn bigram() -> Self {
        Self { min_n: 2, max_n: 2 }
    }

    /// Create a trigram tokenizer (n=3).
    pub fn trigram() -> Self {
        Self { min_n: 3, max_n: 3 }
    }

    /// Get the minimum n-gram size.
    pub fn min_n(&self) -> usize {
        self.min_n
    }

    /// Get the maximum n-gram size.
    pub fn max_n(&self) -> usize {
        self.max_n
    }
}

impl Tokenizer for NgramTokenizer {
    fn tokenize<'a>(&self, line: &'a AnnotatedLine) -> TokenStream<'a> {
        // The windows need the whole line's words; n-grams are built lazily
        let words: Rc<[String]> = UnicodeWordTokenizer::words(&line.text).into();
        let (min_n, max_n) = (self.min_n, self.max_n);

        let grams = (0..words.len()).flat_map(move |start| {
            let words = Rc::clone(&words);
            (min_n..=max_n).map_while(move |n| words.get(start..start + n).map(|w| w.join(" ")))
        });

        Box::new(grams.map(move |gram| {
            Token::new(
                line.document_id.as_str(),
                line.line_number,
                line.chapter_number,
                gram,
            )
        }))
    }

    fn name(&self) -> &'static str {
        "ngram"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(text: &str) -> AnnotatedLine {
        AnnotatedLine {
            document_id: "d".to_string(),
            line_number: 4,
            chapter_number: 1,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_trigrams() {
        let words: Vec<_> = NgramTokenizer::trigram()
            .tokenize(&line("It is a truth universally"))
            .map(|t| t.word)
            .collect();
        assert_eq!(words, vec!["it is a", "is a truth", "a truth universally"]);
    }

    #[test]
    fn test_short_line_yields_nothing() {
        let line = line("too short");
        assert_eq!(NgramTokenizer::trigram().tokenize(&line).count(), 0);
    }

    #[test]
    fn test_mixed_sizes_in_order() {
        let tokenizer = NgramTokenizer::new(1, 3).unwrap();
        let line = line("a b c");
        let mut stream = tokenizer.tokenize(&line);

        // Consumed one at a time
        assert_eq!(stream.next().map(|t| t.word), Some("a".to_string()));
        let rest: Vec<_> = stream.map(|t| t.word).collect();
        assert_eq!(rest, vec!["a b", "a b c", "b", "b c", "c"]);
    }

    #[test]
    fn test_invalid_sizes() {
        let err = NgramTokenizer::new(0, 2).unwrap_err();
        assert!(err.is_malformed_configuration());
        let err = NgramTokenizer::new(3, 2).unwrap_err();
        assert!(err.is_malformed_configuration());
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(NgramTokenizer::bigram().name(), "ngram");
    }
}
