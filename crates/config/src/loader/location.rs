//! Program directory resolution.
//!
//! Responsibilities:
//! - Determine the directory that holds the running executable.
//!
//! Does NOT handle:
//! - Symlink resolution. The directory is taken from the path the OS reports.

use std::path::{Path, PathBuf};

use super::error::LoadError;

/// Returns the directory containing the running executable.
pub fn program_dir() -> Result<PathBuf, LoadError> {
    let exe = std::env::current_exe()
        .map_err(|e| LoadError::ProgramDirUnavailable(e.to_string()))?;

    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        LoadError::ProgramDirUnavailable(format!("{} has no parent directory", exe.display()))
    })
}
