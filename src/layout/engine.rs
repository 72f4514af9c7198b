//! Word-wrap and pagination.
//!
//! The engine makes a single sequential pass over logical lines. Its only
//! state is the page list and a vertical cursor, modelled as a two-state
//! machine: while `PlacingLine` the cursor is at or above the bottom margin;
//! once a decrement drops it below, the engine is `PageFull` and the next
//! flush opens a new page before drawing.

use std::borrow::Cow;

use crate::error::{Error, Result};
use crate::model::{LayoutLine, ReportPage};

use super::metrics::FontMetrics;
use super::options::LayoutOptions;
use super::sanitize::{sanitize, unrepresentable_count};

/// Cursor state of the layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    /// The cursor has room for another line on the current page
    PlacingLine,
    /// The cursor fell below the margin; the next line needs a new page
    PageFull,
}

/// Sequential line placer.
pub struct LayoutEngine<'m, M: FontMetrics + ?Sized> {
    metrics: &'m M,
    options: LayoutOptions,
    pages: Vec<ReportPage>,
    cursor: f32,
    state: CursorState,
}

impl<'m, M: FontMetrics + ?Sized> LayoutEngine<'m, M> {
    /// Create an engine positioned at the top of a first, empty page.
    pub fn new(metrics: &'m M, options: LayoutOptions) -> Result<Self> {
        options.validate()?;
        let cursor = options.top_cursor();
        Ok(Self {
            metrics,
            options,
            pages: vec![ReportPage::new(1)],
            cursor,
            state: CursorState::PlacingLine,
        })
    }

    /// Current vertical cursor.
    pub fn cursor(&self) -> f32 {
        self.cursor
    }

    /// Current cursor state.
    pub fn state(&self) -> CursorState {
        self.state
    }

    /// Pages allocated so far.
    pub fn pages(&self) -> &[ReportPage] {
        &self.pages
    }

    /// Place one logical line, wrapping it across as many lines as needed.
    ///
    /// Words are whitespace-separated and joined by one space. Each word is
    /// sanitized after tokenizing, and a word left empty is dropped. A word
    /// wider than the content width is placed alone and never split. After
    /// the last wrapped line one extra line height is skipped as entry
    /// spacing.
    pub fn place(&mut self, logical_line: &str) -> Result<()> {
        let max_width = self.options.content_width();

        let mut candidate = String::new();
        let mut words = 0usize;
        let mut stripped = 0usize;

        for raw in logical_line.split_whitespace() {
            let word = sanitize(raw, self.metrics);
            if let Cow::Owned(_) = word {
                stripped += unrepresentable_count(raw, self.metrics);
            }
            let word: &str = &word;
            if word.is_empty() {
                continue;
            }

            if words == 0 {
                candidate.push_str(word);
                words = 1;
                continue;
            }

            let trial_len = candidate.len();
            candidate.push(' ');
            candidate.push_str(word);

            if self.measure(&candidate) > max_width {
                candidate.truncate(trial_len);
                self.flush(&candidate, words)?;
                candidate.clear();
                candidate.push_str(word);
                words = 1;
            } else {
                words += 1;
            }
        }

        if words > 0 {
            self.flush(&candidate, words)?;
        }
        if stripped > 0 {
            log::debug!(
                "Stripped {} unrepresentable characters from report line",
                stripped
            );
        }

        self.advance();
        Ok(())
    }

    /// Finish the pass and return the pages.
    pub fn finish(self) -> Vec<ReportPage> {
        self.pages
    }

    fn measure(&self, text: &str) -> f32 {
        self.metrics.width_of_text(text, self.options.font_size)
    }

    fn flush(&mut self, line: &str, words: usize) -> Result<()> {
        if self.state == CursorState::PageFull {
            self.start_page();
        }

        self.check_placement(line, words)?;

        let placed = LayoutLine::new(line, self.options.margin, self.cursor, self.options.font_size);
        match self.pages.last_mut() {
            Some(page) => page.lines.push(placed),
            None => {
                return Err(Error::LayoutViolation(
                    "no page allocated for line".to_string(),
                ))
            }
        }

        self.advance();
        Ok(())
    }

    fn advance(&mut self) {
        self.cursor -= self.options.line_height();
        if self.cursor < self.options.margin {
            self.state = CursorState::PageFull;
        }
    }

    fn start_page(&mut self) {
        let number = self.pages.len() as u32 + 1;
        self.pages.push(ReportPage::new(number));
        self.cursor = self.options.top_cursor();
        self.state = CursorState::PlacingLine;
        log::debug!("Layout: started report page {}", number);
    }

    fn check_placement(&self, line: &str, words: usize) -> Result<()> {
        if self.cursor < self.options.margin {
            return Err(Error::LayoutViolation(format!(
                "line drawn at y={} below margin {}",
                self.cursor, self.options.margin
            )));
        }

        let width = self.measure(line);
        if words > 1 && width > self.options.content_width() {
            return Err(Error::LayoutViolation(format!(
                "line width {} exceeds content width {}",
                width,
                self.options.content_width()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::StandardFont;

    /// Every representable character is 10 units wide at size 10.
    struct Fixed;

    impl FontMetrics for Fixed {
        fn width_of_text(&self, text: &str, size: f32) -> f32 {
            text.chars().filter(|c| self.is_representable(*c)).count() as f32 * size
        }

        fn is_representable(&self, c: char) -> bool {
            c.is_ascii() && !c.is_ascii_control()
        }
    }

    /// 100pt wide content box, 10pt lines, 5 lines per page.
    fn small_page() -> LayoutOptions {
        LayoutOptions::new()
            .with_page_size(120.0, 80.0)
            .with_margin(10.0)
            .with_top_inset(10.0)
            .with_font_size(10.0)
            .with_line_height_factor(1.0)
    }

    fn texts(pages: &[ReportPage]) -> Vec<Vec<String>> {
        pages
            .iter()
            .map(|p| p.lines.iter().map(|l| l.text.clone()).collect())
            .collect()
    }

    #[test]
    fn test_wraps_at_first_overflowing_word() {
        let mut engine = LayoutEngine::new(&Fixed, small_page()).unwrap();
        // "aaaa bbbb" is 9 chars = 90pt; adding " cc" makes 120pt > 100pt.
        engine.place("aaaa bbbb cc dd").unwrap();

        let pages = engine.finish();
        assert_eq!(texts(&pages), vec![vec!["aaaa bbbb", "cc dd"]]);
    }

    #[test]
    fn test_exact_fit_is_not_wrapped() {
        let mut engine = LayoutEngine::new(&Fixed, small_page()).unwrap();
        // 10 chars = exactly 100pt.
        engine.place("aaaa bbbbb").unwrap();
        assert_eq!(texts(engine.pages()), vec![vec!["aaaa bbbbb"]]);
    }

    #[test]
    fn test_oversized_word_placed_alone() {
        let mut engine = LayoutEngine::new(&Fixed, small_page()).unwrap();
        engine.place("a bbbbbbbbbbbbbbb c").unwrap();

        assert_eq!(
            texts(engine.pages()),
            vec![vec!["a", "bbbbbbbbbbbbbbb", "c"]]
        );
    }

    #[test]
    fn test_cursor_positions_and_entry_spacing() {
        let mut engine = LayoutEngine::new(&Fixed, small_page()).unwrap();
        assert_eq!(engine.cursor(), 60.0);

        engine.place("one").unwrap();
        // one line plus one spacing step
        assert_eq!(engine.cursor(), 40.0);

        engine.place("two").unwrap();
        let lines = &engine.pages()[0].lines;
        assert_eq!(lines[0].y, 60.0);
        assert_eq!(lines[1].y, 40.0);
        assert_eq!(lines[1].x, 10.0);
        assert_eq!(lines[1].font_size, 10.0);
        assert_eq!(engine.cursor(), 20.0);
    }

    #[test]
    fn test_new_page_when_cursor_below_margin() {
        let mut engine = LayoutEngine::new(&Fixed, small_page()).unwrap();
        engine.place("one").unwrap(); // y=60, cursor -> 40
        engine.place("two").unwrap(); // y=40, cursor -> 20
        engine.place("three").unwrap(); // y=20, cursor -> 0
        assert_eq!(engine.state(), CursorState::PageFull);
        assert_eq!(engine.pages().len(), 1);

        engine.place("four").unwrap();
        let pages = engine.finish();

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1].number, 2);
        assert_eq!(pages[1].lines[0].text, "four");
        assert_eq!(pages[1].lines[0].y, 60.0);
        assert!(pages.iter().flat_map(|p| &p.lines).all(|l| l.y >= 10.0));
    }

    #[test]
    fn test_cursor_at_margin_still_draws() {
        let options = small_page().with_top_inset(0.0);
        // top cursor = 80 - 10 = 70; lines at 70, 50, 30, 10
        let mut engine = LayoutEngine::new(&Fixed, options).unwrap();
        engine.place("a").unwrap();
        engine.place("b").unwrap();
        engine.place("c").unwrap();
        engine.place("d").unwrap();

        let pages = engine.finish();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].lines[3].y, 10.0);
    }

    #[test]
    fn test_wrapped_entry_breaks_across_pages() {
        let mut engine = LayoutEngine::new(&Fixed, small_page()).unwrap();
        engine.place("one").unwrap();
        engine.place("two").unwrap();
        // cursor at 20: x at y=20, y at y=10, z goes to page 2
        engine.place("xxxxxxxx yyyyyyyy zzzzzzzz").unwrap();

        let pages = engine.finish();
        assert_eq!(
            texts(&pages),
            vec![
                vec!["one", "two", "xxxxxxxx", "yyyyyyyy"],
                vec!["zzzzzzzz"]
            ]
        );
        assert_eq!(pages[1].lines[0].y, 60.0);
    }

    #[test]
    fn test_blank_line_only_consumes_spacing() {
        let mut engine = LayoutEngine::new(&Fixed, small_page()).unwrap();
        engine.place("   ").unwrap();
        assert!(engine.pages()[0].is_empty());
        assert_eq!(engine.cursor(), 50.0);
    }

    #[test]
    fn test_sanitizes_before_measuring() {
        let mut engine = LayoutEngine::new(&Fixed, small_page()).unwrap();
        // The snowmen would push the line past 100pt if they were measured.
        engine.place("aaaa\u{2603}\u{2603}\u{2603} bbbbb").unwrap();
        assert_eq!(texts(engine.pages()), vec![vec!["aaaa bbbbb"]]);
    }

    #[test]
    fn test_control_whitespace_separates_words() {
        let font = StandardFont::Helvetica;
        let mut engine = LayoutEngine::new(&font, LayoutOptions::default()).unwrap();
        engine.place("alpha\tbeta\ngamma\r\ndelta").unwrap();
        assert_eq!(texts(engine.pages()), vec![vec!["alpha beta gamma delta"]]);

        // "alpha beta" fills the 100pt line exactly.
        let mut engine = LayoutEngine::new(&Fixed, small_page()).unwrap();
        engine.place("alpha\tbeta\ngamma").unwrap();
        assert_eq!(texts(engine.pages()), vec![vec!["alpha beta", "gamma"]]);
    }

    #[test]
    fn test_word_emptied_by_sanitizing_is_dropped() {
        let mut engine = LayoutEngine::new(&Fixed, small_page()).unwrap();
        engine.place("a \u{2603}\u{2603} b").unwrap();
        assert_eq!(texts(engine.pages()), vec![vec!["a b"]]);

        engine.place("\u{2603}").unwrap();
        assert_eq!(engine.pages()[0].lines.len(), 1);
    }

    #[test]
    fn test_no_line_exceeds_width_with_helvetica() {
        let options = LayoutOptions::default();
        let font = StandardFont::Helvetica;
        let mut engine = LayoutEngine::new(&font, options.clone()).unwrap();

        let entry = "Document report.pdf: \"".to_string()
            + &"lorem ipsum dolor sit amet consectetur ".repeat(40)
            + "\" (Paragraph 8)";
        for _ in 0..10 {
            engine.place(&entry).unwrap();
        }

        let pages = engine.finish();
        assert!(pages.len() > 1);
        for line in pages.iter().flat_map(|p| &p.lines) {
            assert!(font.width_of_text(&line.text, 12.0) <= options.content_width());
            assert!(line.y >= options.margin);
            assert!(line.y <= options.top_cursor());
        }
    }

    #[test]
    fn test_invalid_options_rejected() {
        let result = LayoutEngine::new(&Fixed, small_page().with_font_size(0.0));
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }
}
