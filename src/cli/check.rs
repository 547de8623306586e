//! Validate a relation expression and print it back

use super::CliError;
use crate::{RelationExpression, output, parse};

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The relation expression to validate
    pub expression: Option<String>,
    /// Print the parsed tree as JSON instead of the canonical expression
    pub json: bool,
    /// Pretty-print JSON output
    pub pretty: bool,
}

/// Result of a check operation
#[derive(Debug)]
pub enum CheckResult {
    /// Expression is valid and fetches no relations
    Empty,
    /// Expression is valid; holds the rendered output
    Valid(String),
}

/// Parse the expression and render it in the requested format
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let source = options.expression.as_deref().ok_or(CliError::NoInput)?;
    let expr = parse(source.trim_end_matches(['\r', '\n']))?;

    if expr.is_empty() && !options.json {
        return Ok(CheckResult::Empty);
    }

    Ok(CheckResult::Valid(render(&expr, options.json, options.pretty)?))
}

pub(crate) fn render(
    expr: &RelationExpression,
    json: bool,
    pretty: bool,
) -> Result<String, CliError> {
    if !json {
        return Ok(expr.to_string());
    }
    if pretty {
        Ok(output::to_json_pretty(expr)?)
    } else {
        Ok(output::to_json_string(expr))
    }
}
