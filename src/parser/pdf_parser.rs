//! PDF document parser using lopdf.

use std::path::Path;

use crate::error::{Error, Result};
use crate::model::PageText;

use super::backend::{LopdfBackend, PageId, PdfBackend};
use super::fragments::collect_fragments;
use super::info::DocumentInfo;
use super::options::{ErrorMode, ParseOptions};

/// PDF document parser.
///
/// Exposes the page count and the ordered text fragments of each page.
pub struct PdfParser {
    backend: LopdfBackend,
    options: ParseOptions,
}

impl PdfParser {
    /// Open a PDF file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a PDF file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_bytes_with_options(&data, options)
    }

    /// Parse a PDF from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Parse a PDF from bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        let backend = LopdfBackend::load_bytes(data)?;
        if backend.is_encrypted() {
            log::debug!("Document is encrypted; text may not decode");
        }
        Ok(Self { backend, options })
    }

    /// Get the number of pages.
    pub fn page_count(&self) -> u32 {
        self.backend.pages().len() as u32
    }

    /// Read the text fragments of one page (1-indexed).
    pub fn page(&self, number: u32) -> Result<PageText> {
        let pages = self.backend.pages();
        let page_id = pages
            .get(&number)
            .ok_or(Error::PageOutOfRange(number, pages.len() as u32))?;
        self.read_page(number, *page_id)
    }

    /// Read every page in ascending order.
    ///
    /// In lenient mode a page whose content cannot be decoded contributes an
    /// empty fragment list instead of failing the document.
    pub fn pages(&self) -> Result<Vec<PageText>> {
        let pages = self.backend.pages();
        let mut result = Vec::with_capacity(pages.len());

        for (&number, &page_id) in &pages {
            match self.read_page(number, page_id) {
                Ok(page) => result.push(page),
                Err(e) if self.options.error_mode == ErrorMode::Lenient => {
                    log::warn!("Failed to extract text from page {}: {}", number, e);
                    result.push(PageText::new(number, Vec::new()));
                }
                Err(e) => return Err(e),
            }
        }

        Ok(result)
    }

    fn read_page(&self, number: u32, page_id: PageId) -> Result<PageText> {
        let ops = self.backend.page_operations(page_id)?;
        let decoder = self.backend.text_decoder(page_id);
        let fragments = collect_fragments(&ops, decoder.as_ref());
        log::debug!("Page {}: {} text fragments", number, fragments.len());
        Ok(PageText::new(number, fragments))
    }

    /// Document information (version, page count, info dictionary).
    pub fn info(&self) -> DocumentInfo {
        DocumentInfo::read(
            self.backend.raw_doc(),
            self.backend.version().to_string(),
            self.page_count(),
        )
    }

    /// Check if the document is encrypted.
    pub fn is_encrypted(&self) -> bool {
        self.backend.is_encrypted()
    }

    /// Get PDF version from the file header.
    pub fn version(&self) -> String {
        self.backend.version().to_string()
    }
}
