//! Shared test utilities for yamldump integration tests.
//!
//! Responsibilities:
//! - Stage a copy of the built binary in a temp directory so each test owns
//!   the directory the binary reads its document from.
//! - Provide a hermetic command factory for the staged binary.
//!
//! Invariants / Assumptions:
//! - Tests that stage binaries are marked `#[serial]`; writing an executable
//!   while another test forks can fail with ETXTBSY.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A copy of `yamldump` living alone in a temp directory.
pub struct StagedBinary {
    dir: TempDir,
    exe: PathBuf,
}

impl StagedBinary {
    /// Stage the binary without a document next to it.
    pub fn new() -> Self {
        let built = Path::new(env!("CARGO_BIN_EXE_yamldump"));
        let dir = TempDir::new().unwrap();
        let exe = dir.path().join(built.file_name().unwrap());
        fs::copy(built, &exe).unwrap();

        Self { dir, exe }
    }

    /// Stage the binary with `contents` written to `test.yaml` beside it.
    pub fn with_document(contents: &str) -> Self {
        let staged = Self::new();
        staged.write_document(contents);
        staged
    }

    pub fn write_document(&self, contents: &str) {
        fs::write(self.document_path(), contents).unwrap();
    }

    pub fn document_path(&self) -> PathBuf {
        self.dir.path().join("test.yaml")
    }

    /// Returns a command for the staged binary.
    ///
    /// `RUST_LOG` is cleared so host settings cannot add log lines to stderr.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::new(&self.exe);
        cmd.env_remove("RUST_LOG");
        cmd
    }
}
