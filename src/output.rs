//! JSON output for relation expressions.
//!
//! The forest is rendered as an array of node objects, each with a `name` and
//! an ordered `children` array:
//!
//! ```
//! use relexpr::parse;
//! use relexpr::output::to_json_string;
//!
//! let expr = parse("a.b").unwrap();
//! assert_eq!(
//!     to_json_string(&expr),
//!     r#"[{"children":[{"children":[],"name":"b"}],"name":"a"}]"#
//! );
//! ```

use crate::ast::Node;
use crate::expression::RelationExpression;
use serde_json::{Map, Value};

/// Convert an expression to a `serde_json::Value`.
pub fn to_json(expr: &RelationExpression) -> Value {
    forest_to_json(expr.nodes())
}

/// Compact JSON text.
pub fn to_json_string(expr: &RelationExpression) -> String {
    to_json(expr).to_string()
}

/// Pretty-printed JSON text.
pub fn to_json_pretty(expr: &RelationExpression) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&to_json(expr))
}

/// Read an expression back from the JSON produced by [`to_json`].
///
/// Returns `None` when the value does not have that shape or a name is empty.
pub fn from_json(value: &Value) -> Option<RelationExpression> {
    forest_from_json(value).map(RelationExpression::new)
}

fn forest_to_json(nodes: &[Node]) -> Value {
    Value::Array(nodes.iter().map(node_to_json).collect())
}

fn node_to_json(node: &Node) -> Value {
    let mut object = Map::new();
    object.insert("name".to_string(), Value::String(node.name.clone()));
    object.insert("children".to_string(), forest_to_json(&node.children));
    Value::Object(object)
}

fn forest_from_json(value: &Value) -> Option<Vec<Node>> {
    value.as_array()?.iter().map(node_from_json).collect()
}

fn node_from_json(value: &Value) -> Option<Node> {
    let object = value.as_object()?;
    let name = object.get("name")?.as_str().filter(|name| !name.is_empty())?;
    let children = match object.get("children") {
        Some(children) => forest_from_json(children)?,
        None => Vec::new(),
    };
    Some(Node::with_children(name, children))
}
