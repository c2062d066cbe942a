//! Tests for the document loader.
//!
//! Responsibilities:
//! - Test loading and running against fixture directories.
//! - Test YAML stream decoding rules.
//!
//! Invariants:
//! - Every test writes its fixtures into its own `tempfile` directory.


use std::path::Path;

/// Writes `contents` as the default document inside `dir`.
pub fn write_document(dir: &Path, contents: &str) {
    std::fs::write(dir.join(crate::constants::DEFAULT_DOCUMENT_NAME), contents).unwrap();
}
