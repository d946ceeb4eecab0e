//! Lexical analysis for the front end.
//!
//! The scanner pulls one token at a time out of the caller's source
//! buffer. Tokens are unclassified spans: the parser decides what each
//! lexeme means. Whitespace separates tokens; characters in the
//! delimiter set terminate a lexeme and also stand as one-character
//! tokens of their own.

pub mod scanner;
pub mod tokens;
