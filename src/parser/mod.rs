//! PDF parsing module.

mod backend;
mod fragments;
mod info;
mod options;
mod pdf_parser;

pub use backend::{decode_text_simple, ContentOp, LopdfBackend, PageId, PdfBackend, PdfValue, TextDecodeFn};
pub use fragments::collect_fragments;
pub use info::DocumentInfo;
pub use options::{ErrorMode, ParseOptions};
pub use pdf_parser::PdfParser;
