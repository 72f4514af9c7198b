//! # pdfsift
//!
//! Search a corpus of PDF documents for a term and synthesize a PDF report
//! of every matching paragraph.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdfsift::{search, Corpus};
//!
//! fn main() -> pdfsift::Result<()> {
//!     let corpus = Corpus::from_paths(["minutes.pdf", "notes.pdf"])?;
//!     let outcome = search(corpus.entries(), "budget")?;
//!
//!     for hit in &outcome.hits {
//!         println!("{}", hit.report_line());
//!     }
//!     if let Some(report) = &outcome.report {
//!         std::fs::write("report.pdf", report)?;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! - **Parse**: page text fragments via lopdf
//! - **Extract**: paragraphs split on a period followed by two spaces
//! - **Match**: exact, case-sensitive substring containment
//! - **Layout**: word-wrapped, paginated lines in a standard font
//! - **Synthesize**: a new PDF with one drawn line per placement
//!
//! Documents are searched in parallel with Rayon; results always follow
//! input order.

pub mod detect;
pub mod error;
pub mod extract;
pub mod layout;
pub mod matcher;
pub mod model;
pub mod parser;
pub mod render;
pub mod search;

pub use detect::{is_pdf_bytes, sniff_version, PdfVersion};
pub use error::{Error, Result};
pub use layout::{LayoutOptions, StandardFont};
pub use model::{Corpus, CorpusEntry, Paragraph, Report, SearchHit};
pub use parser::{DocumentInfo, ErrorMode, ParseOptions, PdfParser};
pub use render::{JsonFormat, PdfWriter, ReportWriter};
pub use search::{
    search, search_with_options, DocumentFailure, FailurePolicy, SearchOptions, SearchOutcome,
};

#[cfg(feature = "async")]
pub use search::search_files as search_files_async;

use std::path::Path;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Read files into a corpus and search them.
///
/// # Example
///
/// ```no_run
/// use pdfsift::{search_files, SearchOptions};
///
/// let outcome = search_files(&["a.pdf", "b.pdf"], "cat", &SearchOptions::new().strict())?;
/// println!("{} hits", outcome.hit_count());
/// # Ok::<(), pdfsift::Error>(())
/// ```
pub fn search_files<P: AsRef<Path>>(
    paths: &[P],
    term: &str,
    options: &SearchOptions,
) -> Result<SearchOutcome> {
    let corpus = Corpus::from_paths(paths)?;
    search_with_options(corpus.entries(), term, options)
}

/// Extract the paragraphs of a PDF.
///
/// # Example
///
/// ```no_run
/// use pdfsift::extract_paragraphs;
///
/// let data = std::fs::read("notes.pdf").unwrap();
/// for paragraph in extract_paragraphs("notes.pdf", &data).unwrap() {
///     println!("{}: {}", paragraph.index, paragraph.text);
/// }
/// ```
pub fn extract_paragraphs(name: &str, data: &[u8]) -> Result<Vec<Paragraph>> {
    extract_paragraphs_with_options(name, data, &ParseOptions::default())
}

/// Extract the paragraphs of a PDF with custom options.
pub fn extract_paragraphs_with_options(
    name: &str,
    data: &[u8],
    options: &ParseOptions,
) -> Result<Vec<Paragraph>> {
    let document = extract::extract_document(0, name, data, options)?;
    Ok(document.paragraphs)
}

/// Read the document information of a PDF.
pub fn document_info(data: &[u8]) -> Result<DocumentInfo> {
    Ok(PdfParser::from_bytes(data)?.info())
}
