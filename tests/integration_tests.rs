//! Integration tests for the front end.
//!
//! These drive the public API the way the CLI does: a complete source
//! buffer goes in, a `Program` tree or a structured error comes out.

use letc::ast::node::{Node, NodeKind};
use letc::errors::errors::ErrorKind;
use letc::parser::parser::{parse, Parser};

#[test]
fn test_parse_multi_line_source() {
    let source = "let answer : integer\nanswer\n42\n";
    let program = parse(source).unwrap();

    let children: Vec<&Node> = program.iter_children().collect();
    assert_eq!(children.len(), 3);

    assert_eq!(children[0].kind, NodeKind::VariableDeclaration);
    let identifier = children[0].iter_children().next().unwrap();
    assert_eq!(identifier.kind, NodeKind::Symbol(String::from("answer")));

    assert_eq!(children[1].kind, NodeKind::Symbol(String::from("answer")));
    assert_eq!(children[2].kind, NodeKind::Integer(42));
}

#[test]
fn test_parse_declarations_accumulate_in_environment() {
    let source = "let a : integer\nlet b : integer";
    let mut parser = Parser::new(source);
    parser.parse_program().unwrap();

    let found = parser.environment().lookup(&Node::integer(5));
    assert!(found.is_none());
    let found = parser.environment().lookup(&Node::symbol("a").unwrap());
    assert!(matches!(found.kind, NodeKind::Symbol(_)));
}

#[test]
fn test_tree_dump_matches_source_order() {
    let program = parse("let x : integer 7").unwrap();

    assert_eq!(
        program.to_string(),
        "PROGRAM\n    VARIABLE DECLARATION\n        SYM:x\n    INT:7\n"
    );
}

#[test]
fn test_syntax_error_carries_diagnostic_message() {
    let err = parse("let x , integer").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Syntax);
    assert_eq!(
        err.message(),
        Some("expected `:` in declaration of `x`, found `,`")
    );
    assert_eq!(
        err.to_string(),
        "Invalid syntax: expected `:` in declaration of `x`, found `,`"
    );
}

#[test]
fn test_crlf_source_parses_like_spaces() {
    let program = parse("let x\r\n: integer").unwrap();

    let first = program.iter_children().next().unwrap();
    assert_eq!(first.kind, NodeKind::VariableDeclaration);
}
