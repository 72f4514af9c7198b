//! PDF header sniffing.
//!
//! Corpus entries arrive as opaque byte sources. Checking the `%PDF-x.y`
//! header first lets an HTML error page or a truncated download fail fast
//! with a precise error instead of a deep lopdf parse failure.

use crate::error::{Error, Result};

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";

/// Version read from a PDF header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PdfVersion {
    /// Major version digit
    pub major: u8,
    /// Minor version digit
    pub minor: u8,
}

impl std::fmt::Display for PdfVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Read the PDF version from the start of a byte source.
///
/// # Returns
/// * `Ok(PdfVersion)` if the data starts with a `%PDF-d.d` header
/// * `Err(Error::UnknownFormat)` if the magic bytes are missing
/// * `Err(Error::UnsupportedVersion)` if the version is not `1.x` or `2.0`
pub fn sniff_version(data: &[u8]) -> Result<PdfVersion> {
    let rest = data.strip_prefix(PDF_MAGIC).ok_or(Error::UnknownFormat)?;
    let [major, b'.', minor, ..] = rest else {
        return Err(Error::UnknownFormat);
    };

    if !major.is_ascii_digit() || !minor.is_ascii_digit() {
        return Err(Error::UnknownFormat);
    }

    let version = PdfVersion {
        major: major - b'0',
        minor: minor - b'0',
    };

    match version.major {
        1 => Ok(version),
        2 if version.minor == 0 => Ok(version),
        _ => Err(Error::UnsupportedVersion(version.to_string())),
    }
}

/// Check if bytes start with a readable PDF header.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    sniff_version(data).is_ok()
}
