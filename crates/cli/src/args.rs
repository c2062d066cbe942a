//! CLI argument definitions and parsing.
//!
//! The program takes no arguments. Parsing still runs so that `--help` and
//! `--version` work and stray arguments are rejected with a usage error.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "yamldump")]
#[command(
    about = "Print the test.yaml document stored next to this executable",
    long_about = None
)]
#[command(version)]
pub struct Cli {}
