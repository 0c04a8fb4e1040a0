//! Tests for list CLI command

use crate::common::DocsCorpus;
use docshelf::cli::commands::list::{execute, ListArgs};
use docshelf::cli::OutputFormat;

/// Test listing a seeded corpus in human format
#[tokio::test]
async fn test_list_human() {
    let corpus = DocsCorpus::with_files(&[
        ("api/auth.md", "# Auth"),
        ("guides/install.md", "# Install"),
    ]);
    let services = corpus.services();

    let args = ListArgs { category: None };

    let result = execute(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "List should succeed: {:?}", result.err());
}

/// Test listing in JSON format
#[tokio::test]
async fn test_list_json() {
    let corpus = DocsCorpus::with_files(&[("api/auth.md", "# Auth")]);
    let services = corpus.services();

    let args = ListArgs { category: None };

    let result = execute(args, &services, OutputFormat::Json).await;
    assert!(result.is_ok(), "JSON list should succeed: {:?}", result.err());
}

/// Test listing with a category filter
#[tokio::test]
async fn test_list_category_filter() {
    let corpus = DocsCorpus::with_files(&[
        ("api/auth.md", "# Auth"),
        ("guides/install.md", "# Install"),
    ]);
    let services = corpus.services();

    let args = ListArgs {
        category: Some("api".to_string()),
    };

    let result = execute(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Filtered list should succeed");
}

/// Test listing an empty corpus
#[tokio::test]
async fn test_list_empty_corpus() {
    let corpus = DocsCorpus::empty();
    let services = corpus.services();

    let args = ListArgs { category: None };

    let result = execute(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Empty list should succeed");
}

/// Test listing picks up files created after services were built
#[tokio::test]
async fn test_list_sees_new_files() {
    let corpus = DocsCorpus::empty();
    let services = corpus.services();
    services.catalog.refresh().unwrap();

    corpus.write("api/auth.md", "# Auth");

    let args = ListArgs { category: None };
    let result = execute(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "List should rescan and succeed");
    assert_eq!(services.catalog.snapshot().len(), 1);
}

/// Test listing a deleted corpus root
#[tokio::test]
async fn test_list_missing_root_fails() {
    let corpus = DocsCorpus::empty();
    let services = corpus.services();
    corpus.remove_root();

    let args = ListArgs { category: None };

    let result = execute(args, &services, OutputFormat::Human).await;
    assert!(result.is_err(), "List on missing root should fail");

    let err_msg = result.unwrap_err().to_string();
    assert!(
        err_msg.contains("unavailable"),
        "Error should mention unavailability: {}",
        err_msg
    );
}
