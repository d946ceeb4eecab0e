use std::fmt::Display;

use crate::Span;

/// A delimited span of source text, not yet classified.
///
/// A token never owns text; it borrows the caller's buffer and is
/// recreated on every scan step. The empty token (`beginning == end`)
/// marks end of input.
#[derive(Debug, Clone, Copy)]
pub struct Token<'src> {
    source: &'src str,
    pub span: Span,
}

impl<'src> Token<'src> {
    pub fn new(source: &'src str, span: Span) -> Self {
        Token { source, span }
    }

    /// The text content spanned by this token.
    pub fn lexeme(&self) -> &'src str {
        &self.source[self.span.beginning..self.span.end]
    }

    pub fn len(&self) -> usize {
        self.span.len()
    }

    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }
}

/// Byte-for-byte comparison of the lexeme against a literal.
impl PartialEq<&str> for Token<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.lexeme().as_bytes() == other.as_bytes()
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lexeme())
    }
}
