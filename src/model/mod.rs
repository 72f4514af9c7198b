//! Model types shared by the search pipeline.
//!
//! Everything here is an immutable record. Paragraphs and hits are keyed by
//! the document's position in the corpus and then by paragraph index, so the
//! pipeline never needs shared mutable ownership.

mod corpus;
mod hit;
mod paragraph;
mod report;

pub use corpus::{Corpus, CorpusEntry};
pub use hit::SearchHit;
pub use paragraph::{ExtractedDocument, PageText, Paragraph};
pub use report::{LayoutLine, Report, ReportMetadata, ReportPage};
