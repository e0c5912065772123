//! Text analysis module for tidyword.
//!
//! This module turns raw document lines into tidy tokens: the line
//! annotator numbers lines and tracks chapters, tokenizers split each line
//! into lowercase words, and token filters drop stop words.

pub mod annotator;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use annotator::*;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
