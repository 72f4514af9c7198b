//! Search hit records.

use serde::{Deserialize, Serialize};

use super::Paragraph;

/// A paragraph that contains the searched term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Name of the document the paragraph came from
    pub document_name: String,

    /// 1-based paragraph index within that document
    pub paragraph_index: u32,

    /// Full paragraph text
    pub paragraph_text: String,
}

impl SearchHit {
    /// Create a hit for a matching paragraph.
    pub fn from_paragraph(paragraph: &Paragraph) -> Self {
        Self {
            document_name: paragraph.document_name.clone(),
            paragraph_index: paragraph.index,
            paragraph_text: paragraph.text.clone(),
        }
    }

    /// The report line for this hit.
    ///
    /// The printed paragraph number is `paragraph_index + 1`.
    pub fn report_line(&self) -> String {
        format!(
            "Document {}: \"{}\" (Paragraph {})",
            self.document_name,
            self.paragraph_text,
            self.paragraph_index + 1
        )
    }
}
