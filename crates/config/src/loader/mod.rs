//! Document loader for the program-adjacent YAML file.
//!
//! Responsibilities:
//! - Resolve the document path from an explicit base directory.
//! - Read the document through a scoped file handle and parse it as YAML.
//! - Write the single-line rendering of the parsed value to an output sink.
//!
//! Does NOT handle:
//! - Rendering rules (see `render.rs`).
//! - Exit codes or diagnostics (see `crates/cli`).
//!
//! Invariants / Assumptions:
//! - The document is only ever opened for reading.
//! - Every failure is returned as a `LoadError`; nothing is printed here.

mod builder;
mod document;
mod error;
mod location;

pub use builder::DocumentLoader;
pub use document::parse_document;
pub use error::{LoadError, ParseError};
pub use location::program_dir;

#[cfg(test)]
mod tests;
