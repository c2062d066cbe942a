//! yamldump - print the YAML document that sits next to the executable.
//!
//! Responsibilities:
//! - Install stderr logging.
//! - Resolve the program directory and run the document loader against stdout.
//! - Convert a failed load into a diagnostic on stderr and a non-zero exit.
//!
//! Does NOT handle:
//! - Reading, parsing, or rendering the document (see `crates/config`).
//!
//! Invariants:
//! - Stdout carries exactly one line on success and nothing on failure.
//! - Logs go to stderr only.

mod args;
mod dispatch;
mod error;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let stdout = std::io::stdout();
    let exit_code = match run_command(cli, &mut stdout.lock()) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::GeneralError
        }
    };

    std::process::exit(exit_code.as_i32());
}
