/// Root name that stands for every relation, recursively.
pub const ALL_RECURSIVE: &str = "*";

/// Child name that makes the enclosing relation recurse into itself.
pub const RECURSION_MARKER: &str = "^";

/// A single named step in a relation tree.
///
/// Children keep the order in which they appear in the source text. Nodes are
/// never mutated after the parser builds them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Node {
    /// Relation name, or one of the reserved names `*` and `^`
    pub name: String,

    /// Relations fetched through this one (empty for a leaf)
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Node {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(name: impl Into<String>, children: Vec<Node>) -> Self {
        Node {
            name: name.into(),
            children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// True when the only child is the recursion marker `^`.
    pub fn is_recursive(&self) -> bool {
        matches!(self.children.as_slice(), [only] if only.name == RECURSION_MARKER)
    }
}
