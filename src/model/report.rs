//! Report types produced by the layout engine.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::layout::StandardFont;

/// A line of text placed on a report page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutLine {
    /// Sanitized text to draw
    pub text: String,

    /// X position of the baseline start, in points
    pub x: f32,

    /// Y position of the baseline, in points from the page bottom
    pub y: f32,

    /// Font size in points
    pub font_size: f32,
}

impl LayoutLine {
    /// Create a new placed line.
    pub fn new(text: impl Into<String>, x: f32, y: f32, font_size: f32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size,
        }
    }
}

/// One page of a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportPage {
    /// Page number (1-indexed)
    pub number: u32,

    /// Lines in drawing order
    pub lines: Vec<LayoutLine>,
}

impl ReportPage {
    /// Create an empty page.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            lines: Vec::new(),
        }
    }

    /// Check if nothing was drawn on the page.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Information recorded alongside the report pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// The searched term, verbatim
    pub term: String,

    /// Local wall-clock time of generation; the header prints its date
    pub generated: NaiveDateTime,
}

impl ReportMetadata {
    /// Create metadata for a search.
    pub fn new(term: impl Into<String>, generated: NaiveDateTime) -> Self {
        Self {
            term: term.into(),
            generated,
        }
    }

    /// Report title written to the document info.
    pub fn title(&self) -> String {
        format!("Search Results: {}", self.term)
    }
}

/// A laid-out report, ready for synthesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Report metadata
    pub metadata: ReportMetadata,

    /// Font every line was measured with
    pub font: StandardFont,

    /// Page width in points
    pub page_width: f32,

    /// Page height in points
    pub page_height: f32,

    /// Pages in order
    pub pages: Vec<ReportPage>,
}

impl Report {
    /// Number of pages.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// All placed lines across pages, in drawing order.
    pub fn lines(&self) -> impl Iterator<Item = &LayoutLine> {
        self.pages.iter().flat_map(|page| page.lines.iter())
    }

    /// Drawn text, one placed line per output line.
    pub fn plain_text(&self) -> String {
        self.lines()
            .map(|line| line.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
