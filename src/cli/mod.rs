//! CLI support for aqlir
//!
//! The binary is a thin wrapper over these functions so they can be reused
//! by tooling that embeds the parser.

mod check;

pub use check::{CheckOptions, CheckResult, execute_check};

use std::io;
use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Parse error: {0}")]
    Parse(#[from] crate::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("No query provided. Pass it as an argument or pipe it to stdin.")]
    NoInput,
}
