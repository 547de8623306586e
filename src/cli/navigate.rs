//! Walk into and compare relation expressions

use super::{CliError, check::render};
use crate::parse;
use tracing::info;

/// Options for the relation command
#[derive(Debug, Clone, Default)]
pub struct RelationOptions {
    /// Expression to walk
    pub expression: String,
    /// Relation names to descend through, outermost first
    pub path: Vec<String>,
    /// Print JSON instead of the canonical expression
    pub json: bool,
    /// Pretty-print JSON output
    pub pretty: bool,
}

/// Options for the contains command
#[derive(Debug, Clone, Default)]
pub struct ContainsOptions {
    /// Expression that should contain `other`
    pub expression: String,
    /// Candidate sub-expression
    pub other: String,
}

/// Descend through `path`.
///
/// Returns `Ok(None)` as soon as one relation along the path is not present.
pub fn execute_relation(options: &RelationOptions) -> Result<Option<String>, CliError> {
    let mut current = parse(&options.expression)?;

    for name in &options.path {
        match current.relation(name) {
            Some(next) => current = next,
            None => {
                info!(relation = %name, "relation not present");
                return Ok(None);
            }
        }
    }

    render(&current, options.json, options.pretty).map(Some)
}

/// Whether `other` is a sub-expression of `expression`
pub fn execute_contains(options: &ContainsOptions) -> Result<bool, CliError> {
    let expr = parse(&options.expression)?;
    Ok(expr.is_sub_expression_str(&options.other)?)
}
