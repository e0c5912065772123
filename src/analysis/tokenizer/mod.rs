//! Tokenizer implementations for text analysis.

use crate::analysis::annotator::AnnotatedLine;
use crate::analysis::token::TokenStream;

/// Trait for tokenizers that convert annotated lines into tokens.
///
/// Tokenization is a pure function of the line: calling `tokenize` twice on
/// the same line yields the same sequence.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given line into a stream of tokens.
    ///
    /// Every token carries the line's document id, line number and chapter.
    /// The stream is lazy and may borrow the line.
    fn tokenize<'a>(&self, line: &'a AnnotatedLine) -> TokenStream<'a>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual tokenizer modules
pub mod ngram;
pub mod unicode_word;

// Re-export all tokenizers for convenient access
pub use ngram::NgramTokenizer;
pub use unicode_word::UnicodeWordTokenizer;
