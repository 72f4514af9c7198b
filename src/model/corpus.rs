//! Corpus types.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::search::SearchOutcome;

/// A document supplied to a search call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusEntry {
    /// Identifier, unique within its corpus
    pub id: usize,

    /// Display name used in hits and in the report
    pub name: String,

    /// Raw PDF bytes
    pub bytes: Vec<u8>,
}

impl CorpusEntry {
    /// Create a new corpus entry.
    pub fn new(id: usize, name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            id,
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Size of the byte source.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the byte source is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// An ordered set of documents. Search results follow this order.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    entries: Vec<CorpusEntry>,
}

impl Corpus {
    /// Create an empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every file into a corpus, in the given order.
    ///
    /// Entries are named after the file name. Only the read happens here;
    /// parsing is deferred to the search so an unreadable PDF is handled by
    /// the search's failure policy.
    pub fn from_paths<I, P>(paths: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut corpus = Self::new();
        for path in paths {
            let path = path.as_ref();
            let bytes = fs::read(path)?;
            corpus.push(Self::entry_name(path), bytes);
        }
        Ok(corpus)
    }

    /// Append a document and return its id.
    pub fn push(&mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> usize {
        let id = self.entries.len();
        self.entries.push(CorpusEntry::new(id, name, bytes));
        id
    }

    /// Append the report of a search as a new document.
    ///
    /// Returns the new id, or `None` when the search produced no report.
    pub fn add_report(&mut self, name: impl Into<String>, outcome: &SearchOutcome) -> Option<usize> {
        let bytes = outcome.report.as_ref()?;
        Some(self.push(name, bytes.clone()))
    }

    /// Entries in input order.
    pub fn entries(&self) -> &[CorpusEntry] {
        &self.entries
    }

    /// Look up an entry by id.
    pub fn get(&self, id: usize) -> Option<&CorpusEntry> {
        self.entries.get(id)
    }

    /// Entry name for a file: its file name, or the whole path without one.
    pub(crate) fn entry_name(path: &Path) -> String {
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string())
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the corpus has no documents.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl AsRef<[CorpusEntry]> for Corpus {
    fn as_ref(&self) -> &[CorpusEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_sequential_ids() {
        let mut corpus = Corpus::new();
        assert!(corpus.is_empty());

        assert_eq!(corpus.push("a.pdf", b"%PDF-1.4".to_vec()), 0);
        assert_eq!(corpus.push("b.pdf", Vec::new()), 1);

        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.get(1).unwrap().name, "b.pdf");
        assert!(corpus.get(1).unwrap().is_empty());
        assert_eq!(corpus.entries()[0].len(), 8);
    }

    #[test]
    fn test_from_paths_keeps_order_and_names() {
        let dir = tempfile::tempdir().unwrap();
        let second = dir.path().join("second.pdf");
        let first = dir.path().join("first.pdf");
        fs::write(&second, b"two").unwrap();
        fs::write(&first, b"one").unwrap();

        let corpus = Corpus::from_paths([&second, &first]).unwrap();
        let names: Vec<_> = corpus.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["second.pdf", "first.pdf"]);
        assert_eq!(corpus.entries()[1].bytes, b"one");
    }

    #[test]
    fn test_add_report() {
        let mut corpus = Corpus::new();
        corpus.push("a.pdf", b"%PDF-1.4".to_vec());

        let empty = SearchOutcome::default();
        assert_eq!(corpus.add_report("none.pdf", &empty), None);
        assert_eq!(corpus.len(), 1);

        let outcome = SearchOutcome {
            report: Some(b"%PDF-1.7 report".to_vec()),
            ..Default::default()
        };
        assert_eq!(corpus.add_report("report.pdf", &outcome), Some(1));
        assert_eq!(corpus.get(1).unwrap().bytes, b"%PDF-1.7 report");
    }

    #[test]
    fn test_from_paths_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Corpus::from_paths([dir.path().join("missing.pdf")]);
        assert!(result.is_err());
    }
}
