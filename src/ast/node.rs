use std::fmt::Display;
use std::mem;

use crate::errors::errors::{Error, ErrorKind};
use crate::lexer::scanner::is_valid_identifier;

pub type Integer = i64;

/// The tagged variants a syntax tree node can take.
///
/// `VariableDeclarationInitialized`, `BinaryOperator` and `UnaryOperator`
/// are reserved extension points: representable in every tree, not yet
/// emitted by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    None,
    Integer(Integer),
    Symbol(String),
    VariableDeclaration,
    VariableDeclarationInitialized,
    Program,
    BinaryOperator,
    UnaryOperator,
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeKind::None => write!(f, "NONE"),
            NodeKind::Integer(value) => write!(f, "INT:{}", value),
            NodeKind::Symbol(text) => write!(f, "SYM:{}", text),
            NodeKind::VariableDeclaration => write!(f, "VARIABLE DECLARATION"),
            NodeKind::VariableDeclarationInitialized => {
                write!(f, "VARIABLE DECLARATION INITIALIZED")
            }
            NodeKind::Program => write!(f, "PROGRAM"),
            NodeKind::BinaryOperator => write!(f, "BINARY OPERATOR"),
            NodeKind::UnaryOperator => write!(f, "UNARY OPERATOR"),
        }
    }
}

/// One syntax tree node in a first-child/next-sibling encoding.
///
/// `children` owns the first child and `next_child` owns the following
/// sibling. A `Symbol` node's identifier string is never empty, contains
/// no delimiter character, and is owned by that node alone.
#[derive(Debug, Clone)]
pub struct Node {
    pub kind: NodeKind,
    pub children: Option<Box<Node>>,
    pub next_child: Option<Box<Node>>,
}

impl Node {
    fn leaf(kind: NodeKind) -> Self {
        Node {
            kind,
            children: None,
            next_child: None,
        }
    }

    pub fn none() -> Self {
        Node::leaf(NodeKind::None)
    }

    pub fn integer(value: Integer) -> Self {
        Node::leaf(NodeKind::Integer(value))
    }

    /// Builds a `Symbol` node, copying `text` out of the source buffer.
    ///
    /// Rejects text containing a delimiter (or empty text) with a
    /// `Todo`-kind error carrying the offending lexeme. The scanner never
    /// hands the parser such a lexeme for multi-character tokens, but
    /// one-character delimiter tokens do reach this check.
    pub fn symbol(text: &str) -> Result<Self, Error> {
        if !is_valid_identifier(text) {
            return Err(Error::with_message(
                ErrorKind::Todo,
                format!("Invalid identifier: {}", text),
            ));
        }
        Ok(Node::leaf(NodeKind::Symbol(text.to_owned())))
    }

    pub fn variable_declaration() -> Self {
        Node::leaf(NodeKind::VariableDeclaration)
    }

    pub fn program() -> Self {
        Node::leaf(NodeKind::Program)
    }

    pub fn is_none(&self) -> bool {
        matches!(self.kind, NodeKind::None)
    }

    /// Appends `child` at the end of this node's sibling chain, keeping
    /// children in the order they were added.
    pub fn add_child(&mut self, child: Node) {
        let mut slot = &mut self.children;
        while let Some(node) = slot {
            slot = &mut node.next_child;
        }
        *slot = Some(Box::new(child));
    }

    /// Iterates this node's children in order, following the sibling
    /// chain.
    pub fn iter_children(&self) -> Children<'_> {
        Children {
            next: self.children.as_deref(),
        }
    }
}

pub struct Children<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Children<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<&'a Node> {
        let node = self.next?;
        self.next = node.next_child.as_deref();
        Some(node)
    }
}

/// Compares two optionally-absent nodes.
///
/// Both absent is equal; one absent is not. Differing kinds are never
/// equal. `None` equals `None`, integers compare by value, and any other
/// pair of matching kinds is treated as equal unconditionally; symbol
/// identity is not compared by string content at this layer.
pub fn node_cmp(a: Option<&Node>, b: Option<&Node>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => match (&a.kind, &b.kind) {
            (NodeKind::None, NodeKind::None) => true,
            (NodeKind::Integer(x), NodeKind::Integer(y)) => x == y,
            (x, y) => mem::discriminant(x) == mem::discriminant(y),
        },
        _ => false,
    }
}

/// Indented dump of the tree, one node per line, children indented by
/// four spaces below their parent.
impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt_indented(self, f, 0)
    }
}

fn fmt_indented(
    node: &Node,
    f: &mut std::fmt::Formatter<'_>,
    indent: usize,
) -> std::fmt::Result {
    writeln!(f, "{:indent$}{}", "", node.kind, indent = indent)?;
    for child in node.iter_children() {
        fmt_indented(child, f, indent + 4)?;
    }
    Ok(())
}

/// Post-order release of the owned tree. Iterative so that long sibling
/// chains cannot overflow the stack; each node (and each `Symbol`
/// string) is freed exactly once.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        if let Some(child) = self.children.take() {
            pending.push(child);
        }
        if let Some(sibling) = self.next_child.take() {
            pending.push(sibling);
        }
        while let Some(mut node) = pending.pop() {
            if let Some(child) = node.children.take() {
                pending.push(child);
            }
            if let Some(sibling) = node.next_child.take() {
                pending.push(sibling);
            }
        }
    }
}
