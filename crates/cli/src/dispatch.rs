//! Command dispatch logic.
//!
//! Responsibilities:
//! - Build the document loader for the running executable.
//! - Run it against the provided output sink.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Exit code selection (see `main()` and `error` module).

use anyhow::Result;
use std::io::Write;
use yamldump_config::DocumentLoader;

use crate::args::Cli;

/// Load the program-adjacent document and print it to `out`.
pub(crate) fn run_command<W: Write>(_cli: Cli, out: &mut W) -> Result<()> {
    let loader = DocumentLoader::from_program_dir()?;
    run_loader(&loader, out)
}

fn run_loader<W: Write>(loader: &DocumentLoader, out: &mut W) -> Result<()> {
    tracing::debug!(path = %loader.document_path().display(), "Resolved document path");
    loader.run(out)?;
    Ok(())
}
