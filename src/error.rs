//! Error types for pdfsift library.

use std::io;
use thiserror::Error;

/// Result type alias for pdfsift operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while searching a corpus and synthesizing a report.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The byte source is not recognized as PDF.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// The PDF version is not supported.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// Error parsing PDF structure.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// The PDF document is encrypted and cannot be read.
    #[error("Document is encrypted")]
    Encrypted,

    /// The PDF structure is corrupted or malformed.
    #[error("Corrupted PDF structure: {0}")]
    Corrupted(String),

    /// Page number is out of range.
    #[error("Page {0} is out of range (document has {1} pages)")]
    PageOutOfRange(u32, u32),

    /// Error extracting text content.
    #[error("Text extraction error: {0}")]
    TextExtract(String),

    /// A placed line broke a layout invariant. Always an internal defect.
    #[error("Layout invariant violated: {0}")]
    LayoutViolation(String),

    /// The report could not be serialized.
    #[error("Report writer error: {0}")]
    Writer(String),

    /// Hits or a report could not be rendered to a text format.
    #[error("Render error: {0}")]
    Render(String),

    /// A background search task ended without reporting a result.
    #[error("Search task failed: {0}")]
    Task(String),

    /// Rejected configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A single corpus document failed and the search was aborted.
    #[error("Document '{name}' failed: {source}")]
    Document {
        /// Name of the failing document
        name: String,
        /// Underlying failure
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Whether this error means a byte source could not be parsed.
    ///
    /// I/O errors count, since reading the byte source is part of opening it.
    pub fn is_parse_error(&self) -> bool {
        match self {
            Error::Io(_)
            | Error::UnknownFormat
            | Error::UnsupportedVersion(_)
            | Error::PdfParse(_)
            | Error::Encrypted
            | Error::Corrupted(_)
            | Error::PageOutOfRange(..)
            | Error::TextExtract(_) => true,
            Error::Document { source, .. } => source.is_parse_error(),
            _ => false,
        }
    }

    /// Wrap a per-document failure with the document name.
    pub fn in_document(self, name: impl Into<String>) -> Self {
        Error::Document {
            name: name.into(),
            source: Box::new(self),
        }
    }
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::PdfParse(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Encrypted;
        assert_eq!(err.to_string(), "Document is encrypted");

        let err = Error::PageOutOfRange(10, 5);
        assert_eq!(
            err.to_string(),
            "Page 10 is out of range (document has 5 pages)"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_parse_error_classification() {
        assert!(Error::UnknownFormat.is_parse_error());
        assert!(Error::PdfParse("bad xref".into()).is_parse_error());
        assert!(!Error::Writer("disk full".into()).is_parse_error());
        assert!(!Error::LayoutViolation("overflow".into()).is_parse_error());
    }

    #[test]
    fn test_in_document_wraps_source() {
        let err = Error::UnknownFormat.in_document("broken.pdf");
        assert_eq!(
            err.to_string(),
            "Document 'broken.pdf' failed: Unknown file format: not a valid PDF"
        );
        assert!(err.is_parse_error());
    }
}
