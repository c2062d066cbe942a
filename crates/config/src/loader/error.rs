//! Error types for document loading.
//!
//! Responsibilities:
//! - Define error variants for every way a load can fail.
//! - Keep the underlying I/O or YAML error reachable through `source()`.
//!
//! Invariants:
//! - Variants that concern the document carry its path.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors produced while turning document bytes into a value.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("invalid YAML")]
    Syntax(#[from] serde_yaml::Error),

    /// The stream holds more than one `---` separated document.
    #[error("expected a single document but found {count}")]
    MultipleDocuments { count: usize },
}

/// Errors that can occur while loading and printing a document.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Unable to determine program directory: {0}")]
    ProgramDirUnavailable(String),

    #[error("Failed to read document at {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse document at {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("Failed to write rendered document")]
    Write {
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    /// Path of the document the error concerns, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            LoadError::Read { path, .. } | LoadError::Parse { path, .. } => Some(path.as_path()),
            LoadError::ProgramDirUnavailable(_) | LoadError::Write { .. } => None,
        }
    }
}
