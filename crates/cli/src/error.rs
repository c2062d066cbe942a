//! CLI exit codes.
//!
//! Invariants:
//! - Every load failure maps to the same non-zero code; callers distinguish
//!   failures by the diagnostic on stderr, not by the code.
//! - Usage errors exit with clap's own code (2) before any of this runs.

/// Exit codes for yamldump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - the document was printed.
    Success = 0,

    /// General error - the document could not be read, parsed, or printed.
    GeneralError = 1,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}
