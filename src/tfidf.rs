//! Term frequency-inverse document frequency.
//!
//! For each (document, word) pair:
//!
//! ```text
//! tf     = count / total words in the document
//! idf    = ln(documents / documents containing the word)
//! tf_idf = tf * idf
//! ```
//!
//! Only documents that contribute at least one token are counted, so a word
//! used by every such document has an idf (and tf-idf) of zero.

use std::cmp::Ordering;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;

/// tf-idf statistics for one word in one document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TfIdfRecord {
    pub document_id: String,
    pub word: String,
    pub count: u64,
    pub tf: f64,
    pub idf: f64,
    pub tf_idf: f64,
}

/// Compute tf-idf for every (document, word) pair in `tokens`.
///
/// Records are sorted by tf-idf descending, then document id and word.
///
/// # Examples
///
/// ```
/// use tidyword::analysis::token::Token;
/// use tidyword::tfidf::compute;
///
/// let tokens = vec![
///     Token::new("emma", 1, 0, "emma"),
///     Token::new("emma", 1, 0, "miss"),
///     Token::new("persuasion", 1, 0, "anne"),
///     Token::new("persuasion", 1, 0, "miss"),
/// ];
///
/// let records = compute(&tokens);
/// let miss = records.iter().find(|r| r.word == "miss").unwrap();
/// assert_eq!(miss.idf, 0.0);
/// // "emma" and "anne" tie; document id breaks the tie
/// assert_eq!(records[0].word, "emma");
/// ```
pub fn compute(tokens: &[Token]) -> Vec<TfIdfRecord> {
    let mut counts: AHashMap<(&str, &str), u64> = AHashMap::new();
    let mut doc_totals: AHashMap<&str, u64> = AHashMap::new();
    for token in tokens {
        *counts
            .entry((token.document_id.as_str(), token.word.as_str()))
            .or_insert(0) += 1;
        *doc_totals.entry(token.document_id.as_str()).or_insert(0) += 1;
    }

    let mut doc_freq: AHashMap<&str, u64> = AHashMap::new();
    for (_, word) in counts.keys() {
        *doc_freq.entry(*word).or_insert(0) += 1;
    }

    let n_documents = doc_totals.len() as f64;
    let mut records: Vec<TfIdfRecord> = counts
        .iter()
        .map(|(&(document_id, word), &count)| {
            let tf = count as f64 / doc_totals[document_id] as f64;
            let idf = (n_documents / doc_freq[word] as f64).ln();
            TfIdfRecord {
                document_id: document_id.to_string(),
                word: word.to_string(),
                count,
                tf,
                idf,
                tf_idf: tf * idf,
            }
        })
        .collect();

    records.sort_by(|a, b| {
        b.tf_idf
            .partial_cmp(&a.tf_idf)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.document_id.cmp(&b.document_id))
            .then_with(|| a.word.cmp(&b.word))
    });
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(doc: &str, words: &[&str]) -> Vec<Token> {
        words.iter().map(|w| Token::new(doc, 1, 0, *w)).collect()
    }

    #[test]
    fn test_tf_idf_values() {
        let mut input = tokens("a", &["x", "x", "y", "z"]);
        input.extend(tokens("b", &["y"]));

        let records = compute(&input);
        let find = |doc: &str, word: &str| {
            records
                .iter()
                .find(|r| r.document_id == doc && r.word == word)
                .unwrap()
                .clone()
        };

        let x = find("a", "x");
        assert_eq!(x.count, 2);
        assert!((x.tf - 0.5).abs() < 1e-12);
        assert!((x.idf - 2f64.ln()).abs() < 1e-12);
        assert!((x.tf_idf - 0.5 * 2f64.ln()).abs() < 1e-12);

        let y = find("b", "y");
        assert_eq!(y.tf, 1.0);
        assert_eq!(y.idf, 0.0);
        assert_eq!(y.tf_idf, 0.0);

        assert_eq!(records[0].word, "x");
        assert_eq!(records.len(), 4);
    }

    #[test]
    fn test_single_document_all_zero() {
        let records = compute(&tokens("a", &["x", "y"]));
        assert!(records.iter().all(|r| r.tf_idf == 0.0));
    }

    #[test]
    fn test_empty() {
        assert!(compute(&[]).is_empty());
    }
}
