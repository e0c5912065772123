//! Plain-text corpus loader.
//!
//! Each file becomes one document whose id is the file stem:
//! `books/emma.txt` loads as document `emma`. A directory loads every file
//! with the configured extension, sorted by file name.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::corpus::document::Document;
use crate::corpus::gutenberg::strip_boilerplate;
use crate::corpus::loader::CorpusLoader;
use crate::error::{Result, TidyError};

/// A corpus loader for plain-text files.
#[derive(Debug, Clone)]
pub struct TextCorpusLoader {
    /// File extension to pick up when loading a directory (without the dot).
    extension: String,
    /// Whether to strip Project Gutenberg headers and footers.
    strip_gutenberg: bool,
}

impl Default for TextCorpusLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl TextCorpusLoader {
    /// Create a loader for `.txt` files.
    pub fn new() -> Self {
        TextCorpusLoader {
            extension: "txt".to_string(),
            strip_gutenberg: false,
        }
    }

    /// Set the file extension used when loading a directory.
    pub fn with_extension<S: Into<String>>(mut self, extension: S) -> Self {
        self.extension = extension.into().trim_start_matches('.').to_string();
        self
    }

    /// Set whether to strip Project Gutenberg boilerplate.
    pub fn with_gutenberg_strip(mut self, strip: bool) -> Self {
        self.strip_gutenberg = strip;
        self
    }

    fn load_file(&self, path: &Path) -> Result<Document> {
        let document_id = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or_else(|| {
                TidyError::other(format!("cannot derive document id from {}", path.display()))
            })?;

        let text = fs::read_to_string(path).map_err(|e| TidyError::io_at(path, e))?;
        let document = Document::from_text(document_id, &text);
        debug!(
            "Loaded document '{}' ({} lines) from {}",
            document.document_id(),
            document.len(),
            path.display()
        );

        if self.strip_gutenberg {
            let lines = strip_boilerplate(document.lines().to_vec());
            Ok(document.with_lines(lines))
        } else {
            Ok(document)
        }
    }

    fn directory_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(dir).map_err(|e| TidyError::io_at(dir, e))? {
            let path = entry.map_err(|e| TidyError::io_at(dir, e))?.path();
            let matches = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(&self.extension));
            if path.is_file() && matches {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}

impl CorpusLoader for TextCorpusLoader {
    fn load<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Document>> {
        let path = path.as_ref();
        if path.is_dir() {
            self.directory_files(path)?
                .iter()
                .map(|file| self.load_file(file))
                .collect()
        } else {
            Ok(vec![self.load_file(path)?])
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_load_directory_sorted() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("persuasion.txt"), "Sir Walter\nElliot").unwrap();
        fs::write(dir.path().join("emma.txt"), "Emma Woodhouse").unwrap();
        fs::write(dir.path().join("notes.md"), "ignored").unwrap();

        let documents = TextCorpusLoader::new().load(dir.path()).unwrap();
        let ids: Vec<_> = documents.iter().map(|d| d.document_id()).collect();

        assert_eq!(ids, vec!["emma", "persuasion"]);
        assert_eq!(documents[1].lines(), &["Sir Walter", "Elliot"]);
    }

    #[test]
    fn test_load_single_file_with_gutenberg_strip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("emma.txt");
        fs::write(
            &path,
            "Header\n*** START OF THE PROJECT GUTENBERG EBOOK ***\nCHAPTER I\n*** END OF THE PROJECT GUTENBERG EBOOK ***\nFooter",
        )
        .unwrap();

        let documents = TextCorpusLoader::new()
            .with_gutenberg_strip(true)
            .load(&path)
            .unwrap();

        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].lines(), &["CHAPTER I"]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let result = TextCorpusLoader::new().load(dir.path().join("missing.txt"));
        match result {
            Err(TidyError::Io(e)) => {
                assert_eq!(e.kind(), std::io::ErrorKind::NotFound);
                assert!(e.to_string().contains("missing.txt"));
            }
            other => panic!("Expected IO error, got {other:?}"),
        }
    }
}
