//! Integration tests for the public loader API.
//!
//! These tests exercise `yamldump_config` the way the binary does: a loader
//! rooted at a directory, run against an in-memory sink.

use serde_yaml::Value;
use std::fs;
use tempfile::TempDir;
use yamldump_config::constants::DEFAULT_DOCUMENT_NAME;
use yamldump_config::{DocumentLoader, LoadError, ParseError, render};

fn run_in(dir: &TempDir) -> (Result<Value, LoadError>, String) {
    let mut out = Vec::new();
    let result = DocumentLoader::new(dir.path()).run(&mut out);
    (result, String::from_utf8(out).unwrap())
}

/// A flat mapping prints as one line with every key and value present.
#[test]
fn test_flat_mapping_output_contains_all_entries() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(DEFAULT_DOCUMENT_NAME), "count: 3\nname: \"test\"\n").unwrap();

    let (result, output) = run_in(&dir);
    result.expect("document should load");

    assert_eq!(output.lines().count(), 1);
    assert!(output.ends_with('\n'));
    assert!(output.contains("\"name\": \"test\""));
    assert!(output.contains("\"count\": 3"));
}

/// Output of a run is itself a document that decodes to the same value.
#[test]
fn test_output_line_decodes_to_loaded_value() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(DEFAULT_DOCUMENT_NAME),
        "service:\n  name: api\n  replicas: 2\n  ports:\n    - 8080\n    - 8443\n  labels: {tier: backend, canary: false}\n",
    )
    .unwrap();

    let (result, output) = run_in(&dir);
    let value = result.unwrap();

    let reparsed: Value = serde_yaml::from_str(output.trim_end()).unwrap();
    assert_eq!(reparsed, value);
}

#[test]
fn test_missing_document_leaves_output_empty() {
    let dir = TempDir::new().unwrap();

    let (result, output) = run_in(&dir);

    assert!(matches!(result, Err(LoadError::Read { .. })));
    assert!(output.is_empty());
}

#[test]
fn test_multiple_documents_are_a_parse_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(DEFAULT_DOCUMENT_NAME), "a: 1\n---\nb: 2\n").unwrap();

    let (result, output) = run_in(&dir);

    assert!(matches!(
        result,
        Err(LoadError::Parse {
            source: ParseError::MultipleDocuments { count: 2 },
            ..
        })
    ));
    assert!(output.is_empty());
}

#[test]
fn test_custom_file_name() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("fixture.yaml"), "- a\n- b\n").unwrap();

    let loader = DocumentLoader::new(dir.path()).with_file_name("fixture.yaml");
    let value = loader.load().unwrap();

    assert_eq!(render(&value), "[\"a\", \"b\"]");
}

#[test]
fn test_from_program_dir_points_next_to_test_binary() {
    let loader = DocumentLoader::from_program_dir().unwrap();
    let exe = std::env::current_exe().unwrap();

    assert_eq!(Some(loader.base_dir()), exe.parent());
    assert_eq!(loader.file_name(), DEFAULT_DOCUMENT_NAME);
}
