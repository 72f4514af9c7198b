//! Page and paragraph records produced by extraction.

use serde::{Deserialize, Serialize};

/// Text fragments of one page, in content-stream order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageText {
    /// Page number (1-indexed)
    pub number: u32,

    /// Decoded text fragments, one per text-show operation
    pub fragments: Vec<String>,
}

impl PageText {
    /// Create a new page record.
    pub fn new(number: u32, fragments: Vec<String>) -> Self {
        Self { number, fragments }
    }

    /// Page text with fragments joined by single spaces.
    pub fn joined(&self) -> String {
        self.fragments.join(" ")
    }

    /// Check if the page produced no fragments.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

/// A paragraph of a corpus document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Name of the owning document
    pub document_name: String,

    /// 1-based index, monotonic across all pages of the document
    pub index: u32,

    /// Paragraph text
    pub text: String,
}

impl Paragraph {
    /// Create a new paragraph.
    pub fn new(document_name: impl Into<String>, index: u32, text: impl Into<String>) -> Self {
        Self {
            document_name: document_name.into(),
            index,
            text: text.into(),
        }
    }

    /// Check if the paragraph has no visible text.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// All paragraphs of one document, keyed by its position in the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedDocument {
    /// Position of the document in the search input
    pub position: usize,

    /// Document name
    pub name: String,

    /// Number of pages read
    pub page_count: u32,

    /// Paragraphs in ascending index order
    pub paragraphs: Vec<Paragraph>,
}

impl ExtractedDocument {
    /// Look up a paragraph by its 1-based index.
    pub fn paragraph(&self, index: u32) -> Option<&Paragraph> {
        if index == 0 {
            return None;
        }
        self.paragraphs.get((index - 1) as usize)
    }

    /// Number of paragraphs.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_text_joined() {
        let page = PageText::new(1, vec!["The cat".into(), "sat.".into()]);
        assert_eq!(page.joined(), "The cat sat.");
        assert!(PageText::new(2, Vec::new()).is_empty());
    }

    #[test]
    fn test_paragraph_lookup_is_one_based() {
        let doc = ExtractedDocument {
            position: 0,
            name: "a.pdf".into(),
            page_count: 1,
            paragraphs: vec![Paragraph::new("a.pdf", 1, "one"), Paragraph::new("a.pdf", 2, " ")],
        };

        assert!(doc.paragraph(0).is_none());
        assert_eq!(doc.paragraph(1).unwrap().text, "one");
        assert!(doc.paragraph(2).unwrap().is_blank());
        assert!(doc.paragraph(3).is_none());
        assert_eq!(doc.paragraph_count(), 2);
    }
}
