//! Plain text rendering of search results.

use crate::layout::report_lines;
use crate::model::{ReportMetadata, SearchHit};

/// Render the report's logical lines, unwrapped and unsanitized.
pub fn hits_to_text(metadata: &ReportMetadata, hits: &[SearchHit]) -> String {
    report_lines(metadata, hits).join("\n")
}
