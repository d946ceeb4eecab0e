//! The syntax tree data model.
//!
//! Nodes are tagged variants linked in a first-child/next-sibling
//! encoding, so any node can carry an arbitrary, order-preserving number
//! of children without a resizable collection. Trees are acyclic by
//! construction: every node is owned by exactly one parent (or the
//! top-level caller) and released exactly once.

pub mod node;
