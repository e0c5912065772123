//! Sentiment lexicons.
//!
//! A lexicon maps words to zero or more [`SentimentEntry`]s. Lexicons come in
//! three shapes, tagged by [`LexiconKind`]:
//!
//! - `Binary`: one positive/negative label per word
//! - `Categorical`: any number of category labels per word (emotions)
//! - `Numeric`: a signed polarity score per word
//!
//! All shapes answer the same [`Lexicon::lookup`] query, so joins do not
//! care which shape they are given. Lexicon contents are external data and
//! are loaded from CSV/TSV files with [`LexiconLoader`].

#[allow(clippy::module_inception)]
pub mod lexicon;
pub mod loader;
pub mod registry;

// Re-export commonly used types
pub use lexicon::{Lexicon, LexiconKind, SentimentEntry};
pub use loader::LexiconLoader;
pub use registry::LexiconRegistry;
