//! Token types for tidy text analysis.
//!
//! A [`Token`] is one word observation in tidy format: the word itself plus
//! every grouping key (document, line, chapter) as an explicit field.
//!
//! # Examples
//!
//! ```
//! use tidyword::analysis::token::Token;
//!
//! let token = Token::new("emma", 12, 1, "handsome");
//! assert_eq!(token.document_id, "emma");
//! assert_eq!(token.line_number, 12);
//! assert_eq!(token.chapter_number, 1);
//! assert_eq!(token.word, "handsome");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single word of a document line, in tidy format.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// The document this word came from
    pub document_id: String,

    /// 1-based line number within the document
    pub line_number: usize,

    /// Chapter counter value of the line (0 before the first heading)
    pub chapter_number: usize,

    /// The normalized (lowercase) word
    pub word: String,
}

impl Token {
    /// Create a new token.
    pub fn new<D: Into<String>, W: Into<String>>(
        document_id: D,
        line_number: usize,
        chapter_number: usize,
        word: W,
    ) -> Self {
        Token {
            document_id: document_id.into(),
            line_number,
            chapter_number,
            word: word.into(),
        }
    }

    /// Clone this token with updated word.
    pub fn with_word<S: Into<String>>(&self, word: S) -> Self {
        let mut token = self.clone();
        token.word = word.into();
        token
    }

    /// Get the length of the word in bytes.
    pub fn len(&self) -> usize {
        self.word.len()
    }

    /// Check if the word is empty.
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)
    }
}

/// A lazy sequence of tokens, possibly borrowing the line it came from.
pub type TokenStream<'a> = Box<dyn Iterator<Item = Token> + 'a>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream<'static>;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream<'static> {
        Box::new(self.into_iter())
    }
}
