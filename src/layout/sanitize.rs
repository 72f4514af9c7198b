//! Lossy text sanitization.
//!
//! Characters the report font cannot encode are removed, never replaced, so
//! measurement and drawing only ever see representable text.

use std::borrow::Cow;

use super::metrics::FontMetrics;

/// Strip every character `font` cannot represent.
///
/// Returns the input unchanged (borrowed) when nothing needs removing.
pub fn sanitize<'a, M: FontMetrics + ?Sized>(text: &'a str, font: &M) -> Cow<'a, str> {
    if text.chars().all(|c| font.is_representable(c)) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.chars().filter(|&c| font.is_representable(c)).collect())
    }
}

/// Count the characters [`sanitize`] would remove.
pub fn unrepresentable_count<M: FontMetrics + ?Sized>(text: &str, font: &M) -> usize {
    text.chars().filter(|&c| !font.is_representable(c)).count()
}
