//! PDF report synthesis using lopdf.
//!
//! The writer only draws what the layout engine placed; it never breaks lines
//! or opens pages on its own.

use chrono::NaiveDateTime;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document as LopdfDocument, Object, ObjectId, Stream, StringFormat};

use crate::error::{Error, Result};
use crate::model::{Report, ReportPage};

/// Resource name of the report font on every page.
const FONT_RESOURCE: &str = "F1";

/// Serializes a laid-out report into document bytes.
pub trait ReportWriter {
    /// Produce the bytes of a complete document.
    fn write(&self, report: &Report) -> Result<Vec<u8>>;
}

/// Writes reports as PDF documents.
#[derive(Debug, Clone)]
pub struct PdfWriter {
    producer: String,
    compress: bool,
}

impl PdfWriter {
    /// Create a writer with default settings (compressed streams).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `/Producer` entry.
    pub fn with_producer(mut self, producer: impl Into<String>) -> Self {
        self.producer = producer.into();
        self
    }

    /// Enable or disable stream compression.
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    fn page_object(
        &self,
        doc: &mut LopdfDocument,
        page: &ReportPage,
        report: &Report,
        pages_id: ObjectId,
        resources_id: ObjectId,
    ) -> Result<ObjectId> {
        let content = Content {
            operations: page_operations(page, report),
        };
        let encoded = content
            .encode()
            .map_err(|e| Error::Writer(format!("page {}: {}", page.number, e)))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));

        Ok(doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                Object::Real(report.page_width),
                Object::Real(report.page_height),
            ],
        }))
    }
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self {
            producer: format!("pdfsift {}", crate::VERSION),
            compress: true,
        }
    }
}

impl ReportWriter for PdfWriter {
    fn write(&self, report: &Report) -> Result<Vec<u8>> {
        if report.pages.is_empty() {
            return Err(Error::Writer("report has no pages".to_string()));
        }

        let mut doc = LopdfDocument::with_version("1.7");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => report.font.base_font(),
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                FONT_RESOURCE => font_id,
            },
        });

        let mut kids = Vec::with_capacity(report.pages.len());
        for page in &report.pages {
            let page_id = self.page_object(&mut doc, page, report, pages_id, resources_id)?;
            kids.push(Object::Reference(page_id));
        }

        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => report.pages.len() as i64,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        let info_id = doc.add_object(dictionary! {
            "Title" => text_string(&report.metadata.title()),
            "Producer" => text_string(&self.producer),
            "CreationDate" => Object::string_literal(format_pdf_date(&report.metadata.generated)),
        });
        doc.trailer.set("Root", catalog_id);
        doc.trailer.set("Info", info_id);

        if self.compress {
            doc.compress();
        }

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)
            .map_err(|e| Error::Writer(e.to_string()))?;

        log::debug!(
            "Wrote report: {} pages, {} bytes",
            report.pages.len(),
            bytes.len()
        );
        Ok(bytes)
    }
}

fn page_operations(page: &ReportPage, report: &Report) -> Vec<Operation> {
    let mut ops = Vec::with_capacity(page.lines.len() * 5 + 1);
    ops.push(Operation::new("rg", vec![0.into(), 0.into(), 0.into()]));

    for line in &page.lines {
        ops.push(Operation::new("BT", vec![]));
        ops.push(Operation::new(
            "Tf",
            vec![FONT_RESOURCE.into(), Object::Real(line.font_size)],
        ));
        ops.push(Operation::new(
            "Td",
            vec![Object::Real(line.x), Object::Real(line.y)],
        ));
        ops.push(Operation::new(
            "Tj",
            vec![Object::String(
                report.font.encode(&line.text),
                StringFormat::Literal,
            )],
        ));
        ops.push(Operation::new("ET", vec![]));
    }

    ops
}

/// Encode a document-info text string.
///
/// ASCII is written as-is; anything else as UTF-16BE with a byte order mark.
fn text_string(text: &str) -> Object {
    if text.is_ascii() {
        return Object::string_literal(text);
    }

    let mut bytes = vec![0xFE, 0xFF];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    Object::String(bytes, StringFormat::Hexadecimal)
}

/// Format a timestamp as a PDF date (`D:YYYYMMDDHHmmSS`).
pub fn format_pdf_date(date: &NaiveDateTime) -> String {
    date.format("D:%Y%m%d%H%M%S").to_string()
}
