//! JSON rendering of search results.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::SearchHit;
use crate::search::SearchOutcome;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

#[derive(Serialize)]
struct OutcomeView<'a> {
    term: &'a str,
    hits: &'a [SearchHit],
    failures: Vec<FailureView<'a>>,
    report_bytes: Option<usize>,
}

#[derive(Serialize)]
struct FailureView<'a> {
    position: usize,
    name: &'a str,
    error: String,
}

fn serialize<T: Serialize + ?Sized>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

/// Convert a hit list to a JSON array.
pub fn hits_to_json(hits: &[SearchHit], format: JsonFormat) -> Result<String> {
    serialize(hits, format)
}

/// Convert a search outcome to JSON.
///
/// The report itself is not embedded; only its size is recorded.
pub fn outcome_to_json(term: &str, outcome: &SearchOutcome, format: JsonFormat) -> Result<String> {
    let view = OutcomeView {
        term,
        hits: &outcome.hits,
        failures: outcome
            .failures
            .iter()
            .map(|f| FailureView {
                position: f.position,
                name: &f.name,
                error: f.error.to_string(),
            })
            .collect(),
        report_bytes: outcome.report.as_ref().map(Vec::len),
    };
    serialize(&view, format)
}
