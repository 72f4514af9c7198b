//! Report synthesis and result rendering.

mod json;
mod pdf;
mod text;

pub use json::{hits_to_json, outcome_to_json, JsonFormat};
pub use pdf::{format_pdf_date, PdfWriter, ReportWriter};
pub use text::hits_to_text;
