//! Standard-14 font metrics.
//!
//! Widths are in thousandths of the font size, taken from the Adobe core font
//! metrics for the WinAnsi code points the report writer can encode: printable
//! ASCII (U+0020..=U+007E) and the Latin-1 supplement (U+00A0..=U+00FF).
//! For those code points the WinAnsi byte equals the Unicode scalar value.

use serde::{Deserialize, Serialize};

/// Width measurement and character coverage of a font.
pub trait FontMetrics {
    /// Width of `text` at `size` points. Unrepresentable characters measure zero.
    fn width_of_text(&self, text: &str, size: f32) -> f32;

    /// Whether the font can encode and draw `c`.
    fn is_representable(&self, c: char) -> bool;
}

/// Standard Type1 fonts available to the report writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StandardFont {
    /// Proportional sans-serif
    #[default]
    Helvetica,
    /// Fixed pitch, 600 units per glyph
    Courier,
}

impl StandardFont {
    /// PostScript name written as `/BaseFont`.
    pub fn base_font(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::Courier => "Courier",
        }
    }

    /// Glyph advance of `c` in thousandths, if representable.
    pub fn char_width(&self, c: char) -> Option<u16> {
        let code = c as u32;
        let index = match code {
            0x20..=0x7E => (code - 0x20) as usize,
            0xA0..=0xFF => ASCII_GLYPHS + (code - 0xA0) as usize,
            _ => return None,
        };

        Some(match self {
            StandardFont::Helvetica => HELVETICA_WIDTHS[index],
            StandardFont::Courier => COURIER_WIDTH,
        })
    }

    /// Encode text as WinAnsi bytes, skipping unrepresentable characters.
    pub fn encode(&self, text: &str) -> Vec<u8> {
        text.chars()
            .filter(|&c| self.is_representable(c))
            .map(|c| c as u32 as u8)
            .collect()
    }
}

impl FontMetrics for StandardFont {
    fn width_of_text(&self, text: &str, size: f32) -> f32 {
        let units: u32 = text
            .chars()
            .filter_map(|c| self.char_width(c))
            .map(u32::from)
            .sum();
        units as f32 * size / 1000.0
    }

    fn is_representable(&self, c: char) -> bool {
        self.char_width(c).is_some()
    }
}

impl std::fmt::Display for StandardFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.base_font())
    }
}

impl std::str::FromStr for StandardFont {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "helvetica" => Ok(StandardFont::Helvetica),
            "courier" => Ok(StandardFont::Courier),
            other => Err(format!("unknown font '{}'", other)),
        }
    }
}

const ASCII_GLYPHS: usize = 0x7F - 0x20;

const COURIER_WIDTH: u16 = 600;

#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 191] = [
    // 0x20 - 0x2F
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0x30 - 0x3F
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    // 0x40 - 0x4F
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    // 0x50 - 0x5F
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    // 0x60 - 0x6F
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    // 0x70 - 0x7E
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
    // 0xA0 - 0xAF
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    // 0xB0 - 0xBF
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    // 0xC0 - 0xCF
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    // 0xD0 - 0xDF
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    // 0xE0 - 0xEF
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278,
    // 0xF0 - 0xFF
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500,
];
