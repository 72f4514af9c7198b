//! Paragraph segmentation.
//!
//! Each page's fragments are joined with single spaces and the page string is
//! split on a period followed by two spaces. Every segment is a paragraph,
//! including empty ones, and the index counter runs across the whole
//! document without resetting at page boundaries.

use crate::error::Result;
use crate::model::{ExtractedDocument, PageText, Paragraph};
use crate::parser::{ParseOptions, PdfParser};

/// Literal paragraph delimiter.
pub const PARAGRAPH_DELIMITER: &str = ".  ";

/// Segment pages into paragraphs with document-wide 1-based indices.
pub fn segment_pages(document_name: &str, pages: &[PageText]) -> Vec<Paragraph> {
    let mut paragraphs = Vec::new();
    let mut index = 1u32;

    for page in pages {
        let page_text = page.joined();
        for segment in page_text.split(PARAGRAPH_DELIMITER) {
            paragraphs.push(Paragraph::new(document_name, index, segment));
            index += 1;
        }
    }

    paragraphs
}

/// Parse a PDF byte source and extract its paragraphs.
///
/// `position` is the document's place in the search input and becomes the
/// key of the returned record.
pub fn extract_document(
    position: usize,
    name: &str,
    data: &[u8],
    options: &ParseOptions,
) -> Result<ExtractedDocument> {
    let parser = PdfParser::from_bytes_with_options(data, options.clone())?;
    let pages = parser.pages()?;
    let paragraphs = segment_pages(name, &pages);

    log::debug!(
        "Extracted {} paragraphs from {} pages of '{}'",
        paragraphs.len(),
        pages.len(),
        name
    );

    Ok(ExtractedDocument {
        position,
        name: name.to_string(),
        page_count: pages.len() as u32,
        paragraphs,
    })
}
