//! PDF backend abstraction layer.
//!
//! Provides a trait-based interface for the few PDF operations text
//! extraction needs, isolating the concrete PDF library (lopdf) from the
//! fragment walker.

use std::collections::BTreeMap;

use lopdf::{Document as LopdfDocument, Object, Stream};

use crate::detect::{sniff_version, PdfVersion};
use crate::error::{Error, Result};

/// Page identifier: (object number, generation number).
pub type PageId = (u32, u16);

/// Decodes a text-show operand given the active font resource name.
pub type TextDecodeFn<'a> = Box<dyn Fn(&[u8], &[u8]) -> String + 'a>;

/// A value from a PDF content stream operand.
#[derive(Debug, Clone, PartialEq)]
pub enum PdfValue {
    Integer(i64),
    Real(f32),
    Name(Vec<u8>),
    Str(Vec<u8>),
    Array(Vec<PdfValue>),
    Other,
}

impl PdfValue {
    /// Numeric value, if this is a number.
    pub fn as_number(&self) -> Option<f32> {
        match self {
            PdfValue::Integer(i) => Some(*i as f32),
            PdfValue::Real(r) => Some(*r),
            _ => None,
        }
    }
}

/// A single operation from a PDF content stream.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentOp {
    pub operator: String,
    pub operands: Vec<PdfValue>,
}

impl ContentOp {
    /// Create an operation.
    pub fn new(operator: impl Into<String>, operands: Vec<PdfValue>) -> Self {
        Self {
            operator: operator.into(),
            operands,
        }
    }
}

/// Abstract interface for PDF document access.
pub trait PdfBackend {
    /// Return all pages as (page_number → PageId).
    fn pages(&self) -> BTreeMap<u32, PageId>;

    /// Decode the page's content stream into operations.
    fn page_operations(&self, page: PageId) -> Result<Vec<ContentOp>>;

    /// Build a decoder for text-show operands on the given page.
    ///
    /// Font encodings are resolved once per page. Unknown fonts fall back to
    /// [`decode_text_simple`].
    fn text_decoder(&self, page: PageId) -> TextDecodeFn<'_>;
}

/// Simple text decoding fallback when no encoding is available.
pub fn decode_text_simple(bytes: &[u8]) -> String {
    // UTF-16BE with BOM
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let utf16: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|c| u16::from_be_bytes([c[0], c[1]]))
            .collect();
        return String::from_utf16_lossy(&utf16);
    }

    if let Ok(s) = std::str::from_utf8(bytes) {
        return s.to_string();
    }

    // Latin-1
    bytes.iter().map(|&b| b as char).collect()
}

// ---------------------------------------------------------------------------
// LopdfBackend: implementation backed by lopdf
// ---------------------------------------------------------------------------

/// Concrete [`PdfBackend`] backed by `lopdf::Document`.
pub struct LopdfBackend {
    doc: LopdfDocument,
    version: PdfVersion,
}

impl LopdfBackend {
    /// Load from an in-memory byte slice.
    ///
    /// The header is checked before lopdf sees the data.
    pub fn load_bytes(data: &[u8]) -> Result<Self> {
        let version = sniff_version(data)?;
        let doc = LopdfDocument::load_mem(data)?;
        Ok(Self { doc, version })
    }

    /// Direct access to the underlying `lopdf::Document`.
    pub fn raw_doc(&self) -> &LopdfDocument {
        &self.doc
    }

    /// Check if the document is encrypted.
    pub fn is_encrypted(&self) -> bool {
        self.doc.is_encrypted()
    }

    /// Version from the file header.
    pub fn version(&self) -> PdfVersion {
        self.version
    }

    fn page_content(&self, page_id: PageId) -> Result<Vec<u8>> {
        let page_dict = self.doc.get_dictionary(page_id)?;

        let contents = match page_dict.get(b"Contents") {
            Ok(contents) => contents,
            // A page without content streams is blank, not broken.
            Err(_) => return Ok(Vec::new()),
        };

        match contents {
            Object::Reference(r) => match self.doc.get_object(*r)? {
                Object::Stream(s) => stream_content(s),
                Object::Array(arr) => self.concat_streams(arr),
                _ => Err(Error::Corrupted(format!(
                    "page {:?} has a non-stream /Contents",
                    page_id
                ))),
            },
            Object::Array(arr) => self.concat_streams(arr),
            _ => Err(Error::Corrupted(format!(
                "page {:?} has an invalid /Contents entry",
                page_id
            ))),
        }
    }

    fn concat_streams(&self, parts: &[Object]) -> Result<Vec<u8>> {
        let mut content = Vec::new();
        for obj in parts {
            let Object::Reference(r) = obj else {
                continue;
            };
            if let Ok(Object::Stream(s)) = self.doc.get_object(*r) {
                content.extend_from_slice(&stream_content(s)?);
                content.push(b' ');
            }
        }
        Ok(content)
    }
}

impl PdfBackend for LopdfBackend {
    fn pages(&self) -> BTreeMap<u32, PageId> {
        self.doc.get_pages()
    }

    fn page_operations(&self, page: PageId) -> Result<Vec<ContentOp>> {
        let data = self.page_content(page)?;
        let content = lopdf::content::Content::decode(&data)
            .map_err(|e| Error::TextExtract(format!("content stream of {:?}: {}", page, e)))?;

        Ok(content
            .operations
            .into_iter()
            .map(|op| ContentOp {
                operator: op.operator,
                operands: op.operands.iter().map(convert_object).collect(),
            })
            .collect())
    }

    fn text_decoder(&self, page: PageId) -> TextDecodeFn<'_> {
        let fonts = self.doc.get_page_fonts(page).unwrap_or_else(|e| {
            log::debug!("No font resources for page {:?}: {}", page, e);
            BTreeMap::new()
        });

        let encodings: BTreeMap<Vec<u8>, _> = fonts
            .into_iter()
            .filter_map(|(name, dict)| match dict.get_font_encoding(&self.doc) {
                Ok(encoding) => Some((name, encoding)),
                Err(e) => {
                    log::debug!(
                        "Font {} has no usable encoding: {}",
                        String::from_utf8_lossy(&name),
                        e
                    );
                    None
                }
            })
            .collect();

        Box::new(move |font_name: &[u8], bytes: &[u8]| {
            encodings
                .get(font_name)
                .and_then(|encoding| LopdfDocument::decode_text(encoding, bytes).ok())
                .unwrap_or_else(|| decode_text_simple(bytes))
        })
    }
}

/// Decoded bytes of a content stream.
///
/// Raw bytes are used only when the stream declares no `/Filter`; a filtered
/// stream that fails to decode is a `TextExtract` error.
fn stream_content(stream: &Stream) -> Result<Vec<u8>> {
    if stream.dict.get(b"Filter").is_err() {
        return Ok(stream.content.clone());
    }
    stream
        .decompressed_content()
        .map_err(|e| Error::TextExtract(format!("cannot decode content stream: {}", e)))
}

/// Convert a `lopdf::Object` to [`PdfValue`].
fn convert_object(obj: &Object) -> PdfValue {
    match obj {
        Object::Integer(i) => PdfValue::Integer(*i),
        Object::Real(r) => PdfValue::Real(*r),
        Object::Name(n) => PdfValue::Name(n.clone()),
        Object::String(b, _) => PdfValue::Str(b.clone()),
        Object::Array(arr) => PdfValue::Array(arr.iter().map(convert_object).collect()),
        _ => PdfValue::Other,
    }
}
