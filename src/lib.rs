#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorKind};

pub mod ast;
pub mod env;
pub mod errors;
pub mod lexer;
pub mod parser;

extern crate regex;

/// Byte offsets over the source buffer. A token spans `[beginning, end)`;
/// `beginning == end` is the empty span that marks end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub beginning: usize,
    pub end: usize,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end - self.beginning
    }

    pub fn is_empty(&self) -> bool {
        self.beginning == self.end
    }
}

/// Prints an error to stdout with its fixed label and, when present, the
/// diagnostic elaboration on a second line:
///
/// ```text
/// ERROR: Invalid syntax
///      : expected `:` in declaration of `x`, found `integer`
/// ```
///
/// A `None`-kind error prints nothing at all.
pub fn print_error(error: &Error) {
    if error.kind() == ErrorKind::None {
        return;
    }
    println!("ERROR: {}", error.kind());
    if let Some(message) = error.message() {
        println!("     : {}", message);
    }
}
