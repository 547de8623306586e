//! Parsed relation expressions and the queries callers run against them.
//!
//! A [`RelationExpression`] is an ordered forest of [`Node`]s. Query builders
//! walk it one level at a time with [`RelationExpression::relation`], and
//! compare two expressions with [`RelationExpression::is_sub_expression`].
//!
//! ```
//! use relexpr::parse;
//!
//! let expr = parse("children.[movies.actors, pets]").unwrap();
//! let children = expr.relation("children").unwrap();
//!
//! assert_eq!(children.relation_names(), vec!["movies", "pets"]);
//! assert!(expr.is_sub_expression_str("children.movies").unwrap());
//! ```

use crate::ast::{ALL_RECURSIVE, Node};
use crate::parser::{self, ParseError};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// A parsed relation expression, or a sub-view of one derived by
/// [`relation`](RelationExpression::relation).
///
/// Expressions are immutable. Derived expressions own a copy of the subtree
/// they describe.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RelationExpression {
    nodes: Vec<Node>,
}

impl RelationExpression {
    pub fn new(nodes: Vec<Node>) -> Self {
        RelationExpression { nodes }
    }

    /// The expression that fetches no relations.
    pub fn empty() -> Self {
        RelationExpression::default()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// First root node called `name`.
    pub fn node(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.name == name)
    }

    /// Names of the root nodes, in source order.
    pub fn relation_names(&self) -> Vec<&str> {
        self.nodes.iter().map(|node| node.name.as_str()).collect()
    }

    /// True when the expression is exactly the `*` wildcard.
    pub fn is_all_recursive(&self) -> bool {
        matches!(self.nodes.as_slice(), [only] if only.name == ALL_RECURSIVE)
    }

    /// True when the first root called `relation_name` has `^` as its only child.
    ///
    /// The `*` wildcard is not considered here; see
    /// [`is_all_recursive`](RelationExpression::is_all_recursive).
    pub fn is_recursive(&self, relation_name: &str) -> bool {
        self.node(relation_name).is_some_and(Node::is_recursive)
    }

    /// Descend one level into `relation_name`.
    ///
    /// Returns `None` when the relation is not part of this expression, and an
    /// empty expression when it is present but fetches nothing below it.
    ///
    /// - The `*` wildcard returns itself for any name.
    /// - A recursive relation (`name.^`) returns an expression holding that same
    ///   node, so the recursion is still visible one level down.
    pub fn relation(&self, relation_name: &str) -> Option<RelationExpression> {
        if self.is_all_recursive() {
            return Some(self.clone());
        }

        let node = self.node(relation_name)?;
        trace!(relation = relation_name, recursive = node.is_recursive(), "descend");

        if node.is_recursive() {
            Some(RelationExpression::new(vec![node.clone()]))
        } else {
            Some(RelationExpression::new(node.children.clone()))
        }
    }

    /// True when every root-to-leaf path of `other` also exists in `self`.
    ///
    /// Only the `*` wildcard contains the `*` wildcard. As soon as one root
    /// relation is recursive in `other` and recursive (or wildcarded) in
    /// `self`, the whole comparison is true without looking at the remaining
    /// roots of `other`. Callers rely on that shortcut.
    pub fn is_sub_expression(&self, other: &RelationExpression) -> bool {
        if other.is_all_recursive() {
            return self.is_all_recursive();
        }

        for node in &other.nodes {
            let name = node.name.as_str();

            if other.is_recursive(name) && (self.is_all_recursive() || self.is_recursive(name)) {
                trace!(relation = name, "recursive relation matched");
                return true;
            }

            let (Some(theirs), Some(ours)) = (other.relation(name), self.relation(name)) else {
                trace!(relation = name, "relation missing");
                return false;
            };

            if !ours.is_sub_expression(&theirs) {
                return false;
            }
        }

        true
    }

    /// [`is_sub_expression`](RelationExpression::is_sub_expression) for an
    /// unparsed expression.
    pub fn is_sub_expression_str(&self, other: &str) -> Result<bool, ParseError> {
        let other = parser::parse(other)?;
        Ok(self.is_sub_expression(&other))
    }
}

impl From<Vec<Node>> for RelationExpression {
    fn from(nodes: Vec<Node>) -> Self {
        RelationExpression::new(nodes)
    }
}

impl FromStr for RelationExpression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse(s)
    }
}

impl TryFrom<&str> for RelationExpression {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parser::parse(value)
    }
}

/// Renders the canonical form.
///
/// The rendering parses back to an equal expression as long as no name
/// contains `,` `.` `[` or `]`. Such names cannot be written in a bracketed
/// list, so `a.[d, e].b, c` (whose last child is named `b, c`) renders as
/// `a.[d, e, b, c]`.
impl fmt::Display for RelationExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_forest(f, &self.nodes)
    }
}

fn write_forest(f: &mut fmt::Formatter<'_>, nodes: &[Node]) -> fmt::Result {
    match nodes {
        [] => Ok(()),
        [only] => write_node(f, only),
        _ => {
            write!(f, "[")?;
            for (i, node) in nodes.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write_node(f, node)?;
            }
            write!(f, "]")
        }
    }
}

fn write_node(f: &mut fmt::Formatter<'_>, node: &Node) -> fmt::Result {
    write!(f, "{}", node.name)?;
    if !node.is_leaf() {
        write!(f, ".")?;
        write_forest(f, &node.children)?;
    }
    Ok(())
}
