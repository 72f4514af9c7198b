//! Document information dictionary.

use chrono::{DateTime, NaiveDate, Utc};
use lopdf::{Dictionary, Document as LopdfDocument, Object};
use serde::{Deserialize, Serialize};

use super::backend::decode_text_simple;

/// Descriptive information about a corpus document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentInfo {
    /// PDF version from the file header (e.g., "1.7")
    pub pdf_version: String,

    /// Total number of pages
    pub page_count: u32,

    /// Whether the document is encrypted
    pub encrypted: bool,

    /// Document title
    pub title: Option<String>,

    /// Document author
    pub author: Option<String>,

    /// Document subject
    pub subject: Option<String>,

    /// Creator application
    pub creator: Option<String>,

    /// PDF producer
    pub producer: Option<String>,

    /// Creation date
    pub created: Option<DateTime<Utc>>,
}

impl DocumentInfo {
    /// Read the trailer's `/Info` dictionary, if any.
    pub(crate) fn read(doc: &LopdfDocument, pdf_version: String, page_count: u32) -> Self {
        let mut info = Self {
            pdf_version,
            page_count,
            encrypted: doc.is_encrypted(),
            ..Default::default()
        };

        let dict = doc
            .trailer
            .get(b"Info")
            .ok()
            .and_then(|obj| match obj {
                Object::Reference(id) => doc.get_dictionary(*id).ok(),
                Object::Dictionary(d) => Some(d),
                _ => None,
            });

        if let Some(dict) = dict {
            info.title = string_entry(dict, b"Title");
            info.author = string_entry(dict, b"Author");
            info.subject = string_entry(dict, b"Subject");
            info.creator = string_entry(dict, b"Creator");
            info.producer = string_entry(dict, b"Producer");
            info.created = string_entry(dict, b"CreationDate").and_then(|d| parse_pdf_date(&d));
        }

        info
    }
}

fn string_entry(dict: &Dictionary, key: &[u8]) -> Option<String> {
    match dict.get(key).ok()? {
        Object::String(bytes, _) => Some(decode_text_simple(bytes)),
        Object::Name(bytes) => String::from_utf8(bytes.clone()).ok(),
        _ => None,
    }
}

/// Parse a PDF date string (D:YYYYMMDDHHmmSSOHH'mm').
///
/// The timezone suffix is ignored.
pub(crate) fn parse_pdf_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.strip_prefix("D:").unwrap_or(s);

    let field = |range: std::ops::Range<usize>, default: u32| -> Option<u32> {
        match s.get(range) {
            Some(digits) if digits.chars().all(|c| c.is_ascii_digit()) => digits.parse().ok(),
            Some(_) => None,
            None => Some(default),
        }
    };

    let year: i32 = s.get(0..4)?.parse().ok()?;
    let month = field(4..6, 1)?;
    let day = field(6..8, 1)?;
    let hour = field(8..10, 0)?;
    let minute = field(10..12, 0)?;
    let second = field(12..14, 0)?;

    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .map(|dt| DateTime::from_naive_utc_and_offset(dt, Utc))
}
