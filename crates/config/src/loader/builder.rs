//! Document loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `DocumentLoader` rooted at an explicit base directory.
//! - Read and parse the document, and write its rendering to a caller-supplied sink.
//!
//! Does NOT handle:
//! - Stream decoding rules (delegated to document.rs).
//! - Executable location lookup (delegated to location.rs).
//!
//! Invariants / Assumptions:
//! - The file handle is owned by `read_document` and closed before parsing starts.
//! - Nothing is written to the sink unless the document parsed successfully.

use serde_yaml::Value;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::{Path, PathBuf};

use super::document::parse_document;
use super::error::LoadError;
use super::location::program_dir;
use crate::constants::DEFAULT_DOCUMENT_NAME;
use crate::render::Rendered;

/// Loads the YAML document that lives in a base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentLoader {
    base_dir: PathBuf,
    file_name: String,
}

impl DocumentLoader {
    /// Create a loader for `test.yaml` in `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            file_name: DEFAULT_DOCUMENT_NAME.to_string(),
        }
    }

    /// Create a loader rooted at the directory of the running executable.
    pub fn from_program_dir() -> Result<Self, LoadError> {
        Ok(Self::new(program_dir()?))
    }

    /// Override the document file name.
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Full path of the document this loader reads.
    pub fn document_path(&self) -> PathBuf {
        self.base_dir.join(&self.file_name)
    }

    /// Read and parse the document.
    ///
    /// # Errors
    /// Returns `LoadError::Read` if the file cannot be opened or read, and
    /// `LoadError::Parse` if its contents are not a single YAML document.
    pub fn load(&self) -> Result<Value, LoadError> {
        let path = self.document_path();
        tracing::debug!(path = %path.display(), "Loading document");

        let bytes = read_document(&path)?;
        parse_document(&bytes).map_err(|source| LoadError::Parse { path, source })
    }

    /// Load the document and write its single-line rendering to `out`.
    ///
    /// Returns the parsed value so callers can inspect what was printed.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<Value, LoadError> {
        let value = self.load()?;

        writeln!(out, "{}", Rendered(&value)).map_err(|source| LoadError::Write { source })?;
        out.flush().map_err(|source| LoadError::Write { source })?;

        Ok(value)
    }
}

fn read_document(path: &Path) -> Result<Vec<u8>, LoadError> {
    let read_error = |source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = BufReader::new(File::open(path).map_err(read_error)?);
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(read_error)?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Read document");
    Ok(bytes)
}
