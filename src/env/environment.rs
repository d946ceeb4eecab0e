use crate::ast::node::{node_cmp, Node};

/// One identifier-to-value association in a frame.
#[derive(Debug, Clone)]
pub struct Binding {
    pub id: Node,
    pub value: Node,
}

/// One lexical scope: a chain of bindings plus an optional parent frame.
///
/// The parent is borrowed, never owned; whoever builds the scope chain
/// keeps the outer frames alive.
#[derive(Debug, Default)]
pub struct Environment<'p> {
    bindings: Vec<Binding>,
    parent: Option<&'p Environment<'p>>,
}

impl<'p> Environment<'p> {
    pub fn new() -> Self {
        Environment {
            bindings: Vec::new(),
            parent: None,
        }
    }

    pub fn with_parent(parent: &'p Environment<'p>) -> Self {
        Environment {
            bindings: Vec::new(),
            parent: Some(parent),
        }
    }

    /// Declares `id` in this frame. Bindings for the same identifier may
    /// coexist; the newest one shadows the rest.
    pub fn bind(&mut self, id: Node, value: Node) {
        self.bindings.push(Binding { id, value });
    }

    /// Finds the most recently added binding whose identifier matches
    /// `id` under `node_cmp`, continuing into parent frames on a miss.
    ///
    /// Returns the stored identifier node: lookups at this stage only
    /// confirm declared-ness, value retrieval is future work. An
    /// exhausted chain yields a `None`-kind node.
    pub fn lookup(&self, id: &Node) -> Node {
        for binding in self.bindings.iter().rev() {
            if node_cmp(Some(&binding.id), Some(id)) {
                return binding.id.clone();
            }
        }
        match self.parent {
            Some(parent) => parent.lookup(id),
            None => Node::none(),
        }
    }
}
