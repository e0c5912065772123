//! Named lexicon registry.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use crate::error::{Result, TidyError};
use crate::lexicon::lexicon::{Lexicon, LexiconKind};
use crate::lexicon::loader::LexiconLoader;

/// Lexicons selectable by name ("bing", "afinn", "nrc", ...).
#[derive(Clone, Debug, Default)]
pub struct LexiconRegistry {
    lexicons: BTreeMap<String, Arc<Lexicon>>,
}

impl LexiconRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a lexicon under its own name, replacing any previous one.
    pub fn register(&mut self, lexicon: Lexicon) -> Arc<Lexicon> {
        let lexicon = Arc::new(lexicon);
        self.lexicons
            .insert(lexicon.name().to_string(), Arc::clone(&lexicon));
        lexicon
    }

    /// Load a lexicon file and register it.
    pub fn load<S: Into<String>, P: AsRef<Path>>(
        &mut self,
        name: S,
        path: P,
        kind: LexiconKind,
    ) -> Result<Arc<Lexicon>> {
        let lexicon = LexiconLoader::new(kind).load(name, path)?;
        Ok(self.register(lexicon))
    }

    /// Get a lexicon by name.
    ///
    /// # Errors
    ///
    /// Returns [`TidyError::MissingReferenceData`] if no lexicon has that name.
    pub fn get(&self, name: &str) -> Result<Arc<Lexicon>> {
        self.lexicons.get(name).cloned().ok_or_else(|| {
            TidyError::missing_reference(
                format!("lexicon '{name}'"),
                format!("not registered (available: {})", self.names().join(", ")),
            )
        })
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.lexicons.keys().map(String::as_str).collect()
    }

    /// Number of registered lexicons.
    pub fn len(&self) -> usize {
        self.lexicons.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.lexicons.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::lexicon::SentimentEntry;

    #[test]
    fn test_register_and_get() {
        let mut registry = LexiconRegistry::new();
        registry.register(Lexicon::from_entries(
            "bing",
            LexiconKind::Binary,
            vec![SentimentEntry::labeled("love", "positive")],
        ));
        registry.register(Lexicon::new("afinn", LexiconKind::Numeric));

        assert_eq!(registry.names(), vec!["afinn", "bing"]);
        assert_eq!(registry.get("bing").unwrap().len(), 1);
    }

    #[test]
    fn test_unknown_name() {
        let registry = LexiconRegistry::new();
        let err = registry.get("nrc").unwrap_err();
        assert!(err.is_missing_reference_data());
    }
}
