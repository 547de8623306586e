use crate::{
    ast::{Node, Token},
    expression::RelationExpression,
    lexer::Lexer,
};
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// What made an expression invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// A relation name between separators was empty (`a..b`, `a.[b,]`)
    EmptyRelationName,
    /// `[` and `]` do not balance out
    UnbalancedBrackets,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::EmptyRelationName => write!(f, "empty relation name"),
            Violation::UnbalancedBrackets => write!(f, "unbalanced brackets"),
        }
    }
}

/// Errors that can occur while parsing a relation expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input is not a valid relation expression.
    ///
    /// `expression` is always the complete input, even when the problem was
    /// found inside a nested array entry.
    #[error("invalid relation expression: {expression}")]
    InvalidExpression {
        expression: String,
        violation: Violation,
    },
}

impl ParseError {
    pub fn expression(&self) -> &str {
        match self {
            ParseError::InvalidExpression { expression, .. } => expression,
        }
    }

    pub fn violation(&self) -> Violation {
        match self {
            ParseError::InvalidExpression { violation, .. } => *violation,
        }
    }
}

/// Recursive descent parser over the dot/bracket syntax.
pub struct Parser<'a> {
    source: &'a str,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Self {
        Parser { source }
    }

    /// Parse the whole source.
    ///
    /// The empty string is the empty expression, not an error.
    pub fn parse(&self) -> Result<RelationExpression, ParseError> {
        if self.source.is_empty() {
            return Ok(RelationExpression::empty());
        }

        match parse_chain(self.source) {
            Ok(nodes) => Ok(RelationExpression::new(nodes)),
            Err(violation) => {
                debug!(expression = self.source, %violation, "rejected relation expression");
                Err(ParseError::InvalidExpression {
                    expression: self.source.to_string(),
                    violation,
                })
            }
        }
    }
}

/// Parse a relation expression.
///
/// Recursion depth follows bracket nesting and is not limited.
pub fn parse(source: &str) -> Result<RelationExpression, ParseError> {
    Parser::new(source).parse()
}

/// Parse an optional relation expression; a missing one is the empty expression.
pub fn parse_opt(source: Option<&str>) -> Result<RelationExpression, ParseError> {
    match source {
        Some(source) => parse(source),
        None => Ok(RelationExpression::empty()),
    }
}

/// Parse a dotted chain into a fresh forest.
fn parse_chain(source: &str) -> Result<Vec<Node>, Violation> {
    let tokens = Lexer::chain(source).tokenize()?;
    let mut roots = Vec::new();
    attach(&tokens, &mut roots)?;
    Ok(roots)
}

/// Attach `tokens` below the node list `nodes`.
///
/// A plain token becomes a new node and the rest of the chain goes into its
/// children. An array token adds every entry to `nodes` and leaves the
/// attachment point where it was, so the rest of the chain lands next to the
/// entries.
fn attach(tokens: &[Token], nodes: &mut Vec<Node>) -> Result<(), Violation> {
    let Some((token, rest)) = tokens.split_first() else {
        return Ok(());
    };

    match token {
        Token::Plain(name) => {
            if name.is_empty() {
                return Err(Violation::EmptyRelationName);
            }
            let mut node = Node::new(name.as_str());
            attach(rest, &mut node.children)?;
            nodes.push(node);
            Ok(())
        }
        Token::Array(entries) => {
            for entry in Lexer::list(entries).segments()? {
                nodes.extend(parse_chain(&entry)?);
            }
            attach(rest, nodes)
        }
    }
}
