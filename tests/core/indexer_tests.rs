// Integration tests for markdown discovery

use crate::common::DocsCorpus;
use docshelf::core::indexer::scan;
use docshelf::core::types::GENERAL_CATEGORY;

#[test]
fn test_scan_finds_nested_markdown() {
    let corpus = DocsCorpus::with_files(&[
        ("README.md", "# Top"),
        ("api/auth.md", "# Auth"),
        ("guides/advanced/setup.md", "# Setup"),
    ]);

    let docs = scan(corpus.path()).expect("Scan failed");

    assert_eq!(docs.len(), 3);
    let paths: Vec<&str> = docs.iter().map(|d| d.relative_path.as_str()).collect();
    assert!(paths.contains(&"README.md"));
    assert!(paths.contains(&"api/auth.md"));
    assert!(paths.contains(&"guides/advanced/setup.md"));
}

#[test]
fn test_category_is_immediate_parent_directory() {
    let corpus = DocsCorpus::with_files(&[("guides/advanced/setup.md", "# Setup")]);

    let docs = scan(corpus.path()).expect("Scan failed");

    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].category, "advanced");
    assert_eq!(docs[0].name, "setup");
}

#[test]
fn test_root_level_files_use_general_category() {
    let corpus = DocsCorpus::with_files(&[("README.md", "# Top")]);

    let docs = scan(corpus.path()).expect("Scan failed");

    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].category, GENERAL_CATEGORY);
    assert_eq!(docs[0].name, "README");
    assert_eq!(docs[0].relative_path, "README.md");
}

#[test]
fn test_non_markdown_files_ignored() {
    let corpus = DocsCorpus::with_files(&[
        ("api/auth.md", "# Auth"),
        ("api/schema.json", "{}"),
        ("notes.txt", "plain text"),
        ("script.sh", "#!/bin/sh"),
    ]);

    let docs = scan(corpus.path()).expect("Scan failed");

    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].relative_path, "api/auth.md");
}

#[test]
fn test_scan_order_is_category_then_name() {
    let corpus = DocsCorpus::with_files(&[
        ("guides/install.md", "# Install"),
        ("api/users.md", "# Users"),
        ("api/auth.md", "# Auth"),
        ("README.md", "# Top"),
    ]);

    let docs = scan(corpus.path()).expect("Scan failed");

    let keys: Vec<String> = docs
        .iter()
        .map(|d| format!("{}/{}", d.category, d.name))
        .collect();
    assert_eq!(
        keys,
        vec!["api/auth", "api/users", "general/README", "guides/install"]
    );
}

#[test]
fn test_empty_directory_yields_empty_catalog() {
    let corpus = DocsCorpus::empty();

    let docs = scan(corpus.path()).expect("Scan failed");

    assert!(docs.is_empty());
}

#[test]
fn test_missing_directory_is_unavailable() {
    let corpus = DocsCorpus::empty();
    corpus.remove_root();

    let err = scan(corpus.path()).unwrap_err();

    assert!(err.is_unavailable(), "Expected CorpusUnavailable: {err}");
}

#[test]
fn test_file_as_root_is_unavailable() {
    let corpus = DocsCorpus::empty();
    corpus.remove_root();
    std::fs::write(corpus.path(), "not a directory").unwrap();

    let err = scan(corpus.path()).unwrap_err();

    assert!(err.is_unavailable(), "Expected CorpusUnavailable: {err}");
}

#[test]
fn test_names_with_dots_and_spaces() {
    let corpus = DocsCorpus::with_files(&[
        ("api/v1.2 reference.md", "# Ref"),
        ("api/release notes.md", "# Notes"),
    ]);

    let docs = scan(corpus.path()).expect("Scan failed");

    let names: Vec<&str> = docs.iter().map(|d| d.name.as_str()).collect();
    assert!(names.contains(&"v1.2 reference"));
    assert!(names.contains(&"release notes"));
}
