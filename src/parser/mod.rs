//! Recursive-descent parser for the front end.
//!
//! The parser drives the scanner token by token and recognizes three
//! forms: integer literals, `let <identifier> : integer` declarations,
//! and bare symbol references. Each recognized form becomes a syntax
//! tree node; top-level forms are collected in order under a `Program`
//! node. The first error aborts the parse; there is no
//! resynchronization or multiple-error reporting.

pub mod parser;
