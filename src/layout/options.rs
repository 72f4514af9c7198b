//! Report layout options.

use crate::error::{Error, Result};

use super::metrics::StandardFont;

/// Page geometry and typography for report layout.
///
/// The content box is `page_width - 2 * margin` wide and
/// `page_height - top_inset` tall. Lines start at `x = margin` and the first
/// baseline of every page sits at `content_height - margin`.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOptions {
    /// Page width in points
    pub page_width: f32,

    /// Page height in points
    pub page_height: f32,

    /// Left/right margin and bottom limit of the cursor, in points
    pub margin: f32,

    /// Space above the content box, in points
    pub top_inset: f32,

    /// Font size in points
    pub font_size: f32,

    /// Line height as a multiple of the font size
    pub line_height_factor: f32,

    /// Font used for measurement and drawing
    pub font: StandardFont,
}

impl LayoutOptions {
    /// Create new layout options with defaults (US Letter, Helvetica 12pt).
    pub fn new() -> Self {
        Self::default()
    }

    /// US Letter (8.5 x 11 inches).
    pub fn letter() -> Self {
        Self::default()
    }

    /// A4 (210 x 297 mm).
    pub fn a4() -> Self {
        Self::default().with_page_size(595.0, 842.0)
    }

    /// Set the page size.
    pub fn with_page_size(mut self, width: f32, height: f32) -> Self {
        self.page_width = width;
        self.page_height = height;
        self
    }

    /// Set the margin.
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    /// Set the space above the content box.
    pub fn with_top_inset(mut self, inset: f32) -> Self {
        self.top_inset = inset;
        self
    }

    /// Set the font size.
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Set the line height factor.
    pub fn with_line_height_factor(mut self, factor: f32) -> Self {
        self.line_height_factor = factor;
        self
    }

    /// Set the font.
    pub fn with_font(mut self, font: StandardFont) -> Self {
        self.font = font;
        self
    }

    /// Width available to a line (W).
    pub fn content_width(&self) -> f32 {
        self.page_width - 2.0 * self.margin
    }

    /// Height of the content box (H).
    pub fn content_height(&self) -> f32 {
        self.page_height - self.top_inset
    }

    /// Vertical advance per line (L).
    pub fn line_height(&self) -> f32 {
        self.font_size * self.line_height_factor
    }

    /// Cursor position of the first line on a fresh page (H - M).
    pub fn top_cursor(&self) -> f32 {
        self.content_height() - self.margin
    }

    /// Check that a fresh page can hold at least one line.
    pub fn validate(&self) -> Result<()> {
        let finite = [
            self.page_width,
            self.page_height,
            self.margin,
            self.top_inset,
            self.font_size,
            self.line_height_factor,
        ]
        .iter()
        .all(|v| v.is_finite());

        if !finite {
            return Err(Error::InvalidConfig("layout values must be finite".into()));
        }
        if self.font_size <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "font size must be positive, got {}",
                self.font_size
            )));
        }
        if self.line_height_factor <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "line height factor must be positive, got {}",
                self.line_height_factor
            )));
        }
        if self.margin < 0.0 || self.top_inset < 0.0 {
            return Err(Error::InvalidConfig("margins must not be negative".into()));
        }
        if self.content_width() <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "margin {} leaves no content width on a {}pt page",
                self.margin, self.page_width
            )));
        }
        if self.top_cursor() < self.margin {
            return Err(Error::InvalidConfig(format!(
                "content height {} is too small for margin {}",
                self.content_height(),
                self.margin
            )));
        }
        Ok(())
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            page_width: 612.0,
            page_height: 792.0,
            margin: 50.0,
            top_inset: 70.0,
            font_size: 12.0,
            line_height_factor: 1.5,
            font: StandardFont::Helvetica,
        }
    }
}
