//! Report layout.
//!
//! Turns the ordered hit list into word-wrapped, paginated line placements.
//! Layout is a single-threaded pass; nothing here is shared across threads.

mod engine;
mod metrics;
mod options;
mod sanitize;

pub use engine::{CursorState, LayoutEngine};
pub use metrics::{FontMetrics, StandardFont};
pub use options::LayoutOptions;
pub use sanitize::{sanitize, unrepresentable_count};

use crate::error::Result;
use crate::model::{Report, ReportMetadata, SearchHit};

/// Logical report lines: the header followed by one line per hit.
pub fn report_lines(metadata: &ReportMetadata, hits: &[SearchHit]) -> Vec<String> {
    let mut lines = Vec::with_capacity(hits.len() + 3);
    lines.push(format!("Date: {}", metadata.generated.format("%Y-%m-%d")));
    lines.push(format!("Searched Term: \"{}\"", metadata.term));
    lines.push("Search Results:".to_string());
    lines.extend(hits.iter().map(SearchHit::report_line));
    lines
}

/// Lay out a report for the given hits.
pub fn layout_report(
    metadata: ReportMetadata,
    hits: &[SearchHit],
    options: &LayoutOptions,
) -> Result<Report> {
    let font = options.font;
    let mut engine = LayoutEngine::new(&font, options.clone())?;

    for line in report_lines(&metadata, hits) {
        engine.place(&line)?;
    }

    let pages = engine.finish();
    log::debug!(
        "Laid out {} hits on {} report pages",
        hits.len(),
        pages.len()
    );

    Ok(Report {
        metadata,
        font,
        page_width: options.page_width,
        page_height: options.page_height,
        pages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn metadata(term: &str) -> ReportMetadata {
        let generated = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(14, 5, 0)
            .unwrap();
        ReportMetadata::new(term, generated)
    }

    fn hit(name: &str, index: u32, text: &str) -> SearchHit {
        SearchHit {
            document_name: name.into(),
            paragraph_index: index,
            paragraph_text: text.into(),
        }
    }

    #[test]
    fn test_report_lines() {
        let lines = report_lines(&metadata("cat"), &[hit("A", 1, "The cat sat")]);
        assert_eq!(
            lines,
            vec![
                "Date: 2024-03-09",
                "Searched Term: \"cat\"",
                "Search Results:",
                "Document A: \"The cat sat\" (Paragraph 2)",
            ]
        );
    }

    #[test]
    fn test_layout_report_first_page() {
        let report = layout_report(
            metadata("cat"),
            &[hit("A", 1, "The cat sat")],
            &LayoutOptions::default(),
        )
        .unwrap();

        assert_eq!(report.page_count(), 1);
        assert_eq!(report.font, StandardFont::Helvetica);
        let ys: Vec<f32> = report.lines().map(|l| l.y).collect();
        // each logical line takes one line plus one spacing step (2 * 18pt)
        assert_eq!(ys, vec![672.0, 636.0, 600.0, 564.0]);
        assert!(report.lines().all(|l| l.x == 50.0));
    }

    #[test]
    fn test_layout_report_sanitizes_term_and_text() {
        let report = layout_report(
            metadata("caf\u{00E9}\u{2615}"),
            &[hit("A", 4, "caf\u{00E9}\u{2615} time")],
            &LayoutOptions::default(),
        )
        .unwrap();

        let text = report.plain_text();
        assert!(text.contains("Searched Term: \"caf\u{00E9}\""));
        assert!(text.contains("\"caf\u{00E9} time\" (Paragraph 5)"));
        assert!(!text.contains('\u{2615}'));
        // metadata keeps the verbatim term
        assert_eq!(report.metadata.term, "caf\u{00E9}\u{2615}");
    }

    #[test]
    fn test_many_hits_paginate() {
        let hits: Vec<SearchHit> = (1..=60).map(|i| hit("A", i, "cat")).collect();
        let report = layout_report(metadata("cat"), &hits, &LayoutOptions::default()).unwrap();

        // 63 logical lines at two steps each; a page fits 18 of them
        assert_eq!(report.page_count(), 4);
        assert_eq!(report.lines().count(), 63);
        for page in &report.pages[1..] {
            assert_eq!(page.lines[0].y, 672.0);
        }
    }
}
