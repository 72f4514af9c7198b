//! PDF fixtures for integration tests.

#![allow(dead_code)]

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream, StringFormat};

/// Build a PDF with one `Tj` per fragment on each page, drawn in
/// WinAnsi-encoded Helvetica. Fragments must be ASCII.
pub fn pdf_with_pages(pages: &[&[&str]]) -> Vec<u8> {
    let mut builder = Builder::new();
    let font_id = builder.doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = builder.doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    for fragments in pages {
        let strings = fragments
            .iter()
            .map(|f| Object::string_literal(*f))
            .collect();
        builder.page(strings, Some(resources_id));
    }
    builder.finish()
}

/// Build a one-page PDF of a single paragraph.
pub fn pdf_with_text(text: &str) -> Vec<u8> {
    pdf_with_pages(&[&[text]])
}

/// Build a three-page PDF whose middle page has a `/Contents` entry that is
/// not a content stream. The outer pages draw `first` and `last`.
pub fn pdf_with_broken_page(first: &str, last: &str) -> Vec<u8> {
    let mut builder = Builder::new();
    builder.page(vec![Object::string_literal(first)], None);
    builder.push_page(Object::Integer(42), None);
    builder.page(vec![Object::string_literal(last)], None);
    builder.finish()
}

/// Build a one-page PDF whose single string is UTF-16BE with a byte order
/// mark. The page declares no fonts, so the string is decoded as-is.
pub fn pdf_with_utf16_text(text: &str) -> Vec<u8> {
    let mut bytes = vec![0xFE, 0xFF];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }

    let mut builder = Builder::new();
    builder.page(vec![Object::String(bytes, StringFormat::Hexadecimal)], None);
    builder.finish()
}

struct Builder {
    doc: Document,
    pages_id: ObjectId,
    kids: Vec<Object>,
}

impl Builder {
    fn new() -> Self {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        Self {
            doc,
            pages_id,
            kids: Vec::new(),
        }
    }

    fn page(&mut self, strings: Vec<Object>, resources: Option<ObjectId>) {
        let mut operations = vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 12.into()]),
            Operation::new("Td", vec![72.into(), 720.into()]),
        ];
        for string in strings {
            operations.push(Operation::new("Tj", vec![string]));
        }
        operations.push(Operation::new("ET", vec![]));

        let content = Content { operations }.encode().unwrap();
        let content_id = self.doc.add_object(Stream::new(dictionary! {}, content));
        self.push_page(content_id.into(), resources);
    }

    fn push_page(&mut self, contents: Object, resources: Option<ObjectId>) {
        let mut page = dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "Contents" => contents,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        };
        if let Some(resources_id) = resources {
            page.set("Resources", resources_id);
        }
        let page_id = self.doc.add_object(page);
        self.kids.push(page_id.into());
    }

    fn finish(mut self) -> Vec<u8> {
        let count = self.kids.len() as i64;
        self.doc.objects.insert(
            self.pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => self.kids,
                "Count" => count,
            }),
        );
        let catalog_id = self.doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        self.doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        self.doc.save_to(&mut bytes).unwrap();
        bytes
    }
}
