//! CLI support for relexpr
//!
//! Provides programmatic access to the relexpr CLI commands so they can be
//! embedded in other tools.

mod check;
mod docs;
mod navigate;

pub use check::{CheckOptions, CheckResult, execute_check};
pub use docs::syntax_reference;
pub use navigate::{ContainsOptions, RelationOptions, execute_contains, execute_relation};

use std::io;
use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    /// Expression did not parse
    #[error("Parse error: {0}")]
    Parse(#[from] crate::ParseError),

    /// JSON rendering failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No expression provided
    #[error("No expression provided. Pass one as an argument or pipe it to stdin.")]
    NoInput,
}
