//! Document loading for yamldump.
//!
//! This crate resolves, reads, and parses the YAML document that sits next to
//! the running program, and renders the parsed value as a single line.

pub mod constants;
mod loader;
pub mod render;

pub use loader::{DocumentLoader, LoadError, ParseError, parse_document, program_dir};
pub use render::{Rendered, render};
