//! Tests for the async file search.

#![cfg(feature = "async")]

mod common;

use pdfsift::{search_files_async, Error, SearchOptions};

use common::pdf_with_text;

#[tokio::test]
async fn test_search_files_keeps_path_order() {
    let dir = tempfile::tempdir().unwrap();
    let mut paths = Vec::new();
    for (name, text) in [
        ("zeta.pdf", "A cat on the mat"),
        ("alpha.pdf", "Nothing here.  Another cat"),
        ("mid.pdf", "cat first.  cat second"),
    ] {
        let path = dir.path().join(name);
        std::fs::write(&path, pdf_with_text(text)).unwrap();
        paths.push(path);
    }

    let outcome = search_files_async(&paths, "cat", SearchOptions::new())
        .await
        .unwrap();

    let found: Vec<(&str, u32)> = outcome
        .hits
        .iter()
        .map(|h| (h.document_name.as_str(), h.paragraph_index))
        .collect();
    assert_eq!(
        found,
        vec![("zeta.pdf", 1), ("alpha.pdf", 2), ("mid.pdf", 1), ("mid.pdf", 2)]
    );
    assert!(outcome.report.is_some());
}

#[tokio::test]
async fn test_search_files_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let paths = [dir.path().join("missing.pdf")];

    let result = search_files_async(&paths, "cat", SearchOptions::new()).await;
    assert!(matches!(result, Err(Error::Io(_))));
}
