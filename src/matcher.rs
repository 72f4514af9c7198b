//! Search matching.
//!
//! Matching is exact, case-sensitive substring containment of the
//! unmodified query. There is no scoring, stemming or deduplication.

use crate::model::{Paragraph, SearchHit};

/// Return a hit for every paragraph containing `term`, in paragraph order.
///
/// An empty term is contained in every paragraph.
pub fn find_hits(paragraphs: &[Paragraph], term: &str) -> Vec<SearchHit> {
    paragraphs
        .iter()
        .filter(|paragraph| paragraph.text.contains(term))
        .map(SearchHit::from_paragraph)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paragraphs() -> Vec<Paragraph> {
        vec![
            Paragraph::new("A", 1, "The cat sat"),
            Paragraph::new("A", 2, "It was happy."),
            Paragraph::new("A", 3, "Cats and a cat"),
            Paragraph::new("A", 4, "concatenate"),
        ]
    }

    #[test]
    fn test_substring_match_in_order() {
        let hits = find_hits(&paragraphs(), "cat");
        let indices: Vec<u32> = hits.iter().map(|h| h.paragraph_index).collect();
        assert_eq!(indices, vec![1, 3, 4]);
        assert_eq!(hits[0].paragraph_text, "The cat sat");
        assert_eq!(hits[0].document_name, "A");
    }

    #[test]
    fn test_case_sensitive() {
        let hits = find_hits(&paragraphs(), "Cat");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].paragraph_index, 3);
    }

    #[test]
    fn test_query_not_trimmed() {
        assert!(find_hits(&paragraphs(), " cat ").len() == 1);
        assert!(find_hits(&paragraphs(), "cat  ").is_empty());
    }

    #[test]
    fn test_no_match() {
        assert!(find_hits(&paragraphs(), "zzz").is_empty());
    }

    #[test]
    fn test_empty_term_matches_everything() {
        assert_eq!(find_hits(&paragraphs(), "").len(), 4);
    }
}
