//! Search orchestration.
//!
//! Every corpus entry goes through parse, segmentation and matching on its
//! own. Branches run on the rayon pool and report `(position, result)` over a
//! channel; the join drops each result into the slot of its input position,
//! so hit order never depends on which document finished first. Layout and
//! synthesis then run once, sequentially, over the flattened hits.

use chrono::{Local, NaiveDateTime};

use crate::error::{Error, Result};
use crate::extract::extract_document;
use crate::layout::{layout_report, LayoutOptions};
use crate::matcher::find_hits;
use crate::model::{CorpusEntry, ReportMetadata, SearchHit};
use crate::parser::ParseOptions;
use crate::render::{PdfWriter, ReportWriter};

/// What to do when a corpus document cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Log the failure, record it in the outcome and keep searching
    #[default]
    Skip,
    /// Fail the whole search with the first failure in input order
    Abort,
}

/// Options for a search call.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Parsing options applied to every document
    pub parse: ParseOptions,

    /// Report page geometry and typography
    pub layout: LayoutOptions,

    /// Per-document failure handling
    pub failure_policy: FailurePolicy,

    /// Search documents one after another instead of on the thread pool
    pub sequential: bool,

    /// Fixed report timestamp; the current local time when unset
    pub generated: Option<NaiveDateTime>,
}

impl SearchOptions {
    /// Create new search options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the parse options.
    pub fn with_parse_options(mut self, parse: ParseOptions) -> Self {
        self.parse = parse;
        self
    }

    /// Set the layout options.
    pub fn with_layout(mut self, layout: LayoutOptions) -> Self {
        self.layout = layout;
        self
    }

    /// Set the failure policy.
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Abort on the first document that fails to parse.
    pub fn strict(self) -> Self {
        self.with_failure_policy(FailurePolicy::Abort)
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.sequential = true;
        self
    }

    /// Fix the report timestamp.
    pub fn with_generated(mut self, generated: NaiveDateTime) -> Self {
        self.generated = Some(generated);
        self
    }
}

/// A corpus document that was skipped.
#[derive(Debug)]
pub struct DocumentFailure {
    /// Position of the document in the search input
    pub position: usize,

    /// Document name
    pub name: String,

    /// Why it failed
    pub error: Error,
}

/// Result of a search call.
#[derive(Debug, Default)]
pub struct SearchOutcome {
    /// Report bytes; `None` when nothing matched
    pub report: Option<Vec<u8>>,

    /// Hits in input-document order, then paragraph order
    pub hits: Vec<SearchHit>,

    /// Documents skipped under [`FailurePolicy::Skip`], in input order
    pub failures: Vec<DocumentFailure>,
}

impl SearchOutcome {
    /// Check if a report was produced.
    pub fn has_report(&self) -> bool {
        self.report.is_some()
    }

    /// Number of hits.
    pub fn hit_count(&self) -> usize {
        self.hits.len()
    }
}

/// Search a corpus with default options.
pub fn search(corpus: &[CorpusEntry], term: &str) -> Result<SearchOutcome> {
    search_with_options(corpus, term, &SearchOptions::default())
}

/// Search a corpus.
pub fn search_with_options(
    corpus: &[CorpusEntry],
    term: &str,
    options: &SearchOptions,
) -> Result<SearchOutcome> {
    search_with_writer(corpus, term, options, &PdfWriter::new())
}

/// Search a corpus and synthesize the report with a custom writer.
pub fn search_with_writer<W: ReportWriter + ?Sized>(
    corpus: &[CorpusEntry],
    term: &str,
    options: &SearchOptions,
    writer: &W,
) -> Result<SearchOutcome> {
    options.layout.validate()?;

    let results = fan_out(corpus, term, options);

    let mut hits = Vec::new();
    let mut failures = Vec::new();
    for ((position, entry), result) in corpus.iter().enumerate().zip(results) {
        match result {
            Ok(document_hits) => hits.extend(document_hits),
            Err(e) => match options.failure_policy {
                FailurePolicy::Abort => return Err(e.in_document(&entry.name)),
                FailurePolicy::Skip => {
                    log::warn!("Skipping document '{}': {}", entry.name, e);
                    failures.push(DocumentFailure {
                        position,
                        name: entry.name.clone(),
                        error: e,
                    });
                }
            },
        }
    }

    log::info!(
        "Searched {} documents for {:?}: {} hits, {} skipped",
        corpus.len(),
        term,
        hits.len(),
        failures.len()
    );

    if hits.is_empty() {
        return Ok(SearchOutcome {
            report: None,
            hits,
            failures,
        });
    }

    let generated = options
        .generated
        .unwrap_or_else(|| Local::now().naive_local());
    let report = layout_report(ReportMetadata::new(term, generated), &hits, &options.layout)?;
    let bytes = writer.write(&report)?;

    Ok(SearchOutcome {
        report: Some(bytes),
        hits,
        failures,
    })
}

/// Parse, segment and match a single corpus entry.
pub fn search_document(
    entry: &CorpusEntry,
    term: &str,
    options: &ParseOptions,
) -> Result<Vec<SearchHit>> {
    let document = extract_document(entry.id, &entry.name, &entry.bytes, options)?;
    let hits = find_hits(&document.paragraphs, term);
    log::debug!(
        "'{}': {} of {} paragraphs matched",
        entry.name,
        hits.len(),
        document.paragraph_count()
    );
    Ok(hits)
}

/// Run one branch per entry and return the results in input order.
fn fan_out(
    corpus: &[CorpusEntry],
    term: &str,
    options: &SearchOptions,
) -> Vec<Result<Vec<SearchHit>>> {
    if options.sequential || corpus.len() < 2 {
        return corpus
            .iter()
            .map(|entry| search_document(entry, term, &options.parse))
            .collect();
    }

    let (tx, rx) = crossbeam_channel::bounded(corpus.len());

    rayon::scope(|scope| {
        for (position, entry) in corpus.iter().enumerate() {
            let tx = tx.clone();
            let parse = &options.parse;
            scope.spawn(move |_| {
                let result = search_document(entry, term, parse);
                // The receiver outlives the scope.
                let _ = tx.send((position, result));
            });
        }
    });
    drop(tx);

    join_in_order(corpus.len(), rx)
}

/// Drop each `(position, result)` into the slot of its position.
///
/// Arrival order is irrelevant. A position that never reports becomes a
/// `Task` error.
fn join_in_order<T>(
    len: usize,
    results: impl IntoIterator<Item = (usize, Result<T>)>,
) -> Vec<Result<T>> {
    let mut slots: Vec<Option<Result<T>>> = std::iter::repeat_with(|| None).take(len).collect();

    for (position, result) in results {
        match slots.get_mut(position) {
            Some(slot) => *slot = Some(result),
            None => log::warn!("Dropping result for unknown position {}", position),
        }
    }

    slots
        .into_iter()
        .enumerate()
        .map(|(position, slot)| {
            slot.unwrap_or_else(|| {
                Err(Error::Task(format!(
                    "no result for document at position {}",
                    position
                )))
            })
        })
        .collect()
}

/// Read files concurrently and search them.
///
/// Files are read with `tokio::fs`; each read is tagged with its position
/// so the corpus keeps the input order. The search itself runs on the
/// blocking pool. A file that cannot be read fails the call.
#[cfg(feature = "async")]
pub async fn search_files<P>(paths: &[P], term: &str, options: SearchOptions) -> Result<SearchOutcome>
where
    P: AsRef<std::path::Path>,
{
    use crate::model::Corpus;

    let mut reads = tokio::task::JoinSet::new();
    for (position, path) in paths.iter().enumerate() {
        let path = path.as_ref().to_path_buf();
        reads.spawn(async move {
            let bytes = tokio::fs::read(&path).await;
            (position, path, bytes)
        });
    }

    let mut slots = vec![None; paths.len()];
    while let Some(joined) = reads.join_next().await {
        let (position, path, bytes) = joined.map_err(|e| Error::Task(e.to_string()))?;
        slots[position] = Some((Corpus::entry_name(&path), bytes?));
    }

    let mut corpus = Corpus::new();
    for (position, slot) in slots.into_iter().enumerate() {
        let (name, bytes) =
            slot.ok_or_else(|| Error::Task(format!("no read for file at position {}", position)))?;
        corpus.push(name, bytes);
    }

    let term = term.to_string();
    tokio::task::spawn_blocking(move || search_with_options(corpus.entries(), &term, &options))
        .await
        .map_err(|e| Error::Task(e.to_string()))?
}
