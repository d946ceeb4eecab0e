//! Unit tests for the environment.
//!
//! Covers binding, shadowing order, the not-found sentinel, and lookup
//! through parent frames.

use super::environment::Environment;
use crate::ast::node::{Node, NodeKind};

#[test]
fn test_bind_then_lookup_confirms_declaredness() {
    let mut frame = Environment::new();
    frame.bind(Node::symbol("x").unwrap(), Node::none());

    let found = frame.lookup(&Node::symbol("x").unwrap());
    assert_eq!(found.kind, NodeKind::Symbol(String::from("x")));
}

#[test]
fn test_lookup_miss_yields_none_kind_node() {
    let frame = Environment::new();

    let found = frame.lookup(&Node::symbol("missing").unwrap());
    assert!(found.is_none());
}

#[test]
fn test_lookup_finds_most_recent_binding_first() {
    // Symbols compare by kind only, so the identifier that comes back
    // tells us which binding the walk reached first.
    let mut frame = Environment::new();
    frame.bind(Node::symbol("first").unwrap(), Node::none());
    frame.bind(Node::symbol("second").unwrap(), Node::none());

    let found = frame.lookup(&Node::symbol("first").unwrap());
    assert_eq!(found.kind, NodeKind::Symbol(String::from("second")));
}

#[test]
fn test_lookup_integer_ids_by_value() {
    let mut frame = Environment::new();
    frame.bind(Node::integer(1), Node::none());
    frame.bind(Node::integer(2), Node::none());

    let found = frame.lookup(&Node::integer(1));
    assert_eq!(found.kind, NodeKind::Integer(1));

    let found = frame.lookup(&Node::integer(3));
    assert!(found.is_none());
}

#[test]
fn test_lookup_continues_into_parent_frame() {
    let mut outer = Environment::new();
    outer.bind(Node::integer(10), Node::none());

    let inner = Environment::with_parent(&outer);
    let found = inner.lookup(&Node::integer(10));
    assert_eq!(found.kind, NodeKind::Integer(10));
}

#[test]
fn test_inner_frame_shadows_parent() {
    let mut outer = Environment::new();
    outer.bind(Node::symbol("outer").unwrap(), Node::none());

    let mut inner = Environment::with_parent(&outer);
    inner.bind(Node::symbol("inner").unwrap(), Node::none());

    let found = inner.lookup(&Node::symbol("outer").unwrap());
    assert_eq!(found.kind, NodeKind::Symbol(String::from("inner")));
}
