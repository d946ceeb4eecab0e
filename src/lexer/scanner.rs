use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorKind},
    Span,
};

use super::tokens::Token;

/// Characters that always terminate a lexeme. Each one is also a
/// significant one-character token in its own right.
pub const DELIMITERS: &str = " \r\n,():+";

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"^[ \r\n]+").unwrap();
    static ref LEXEME: Regex = Regex::new(r"^[^ \r\n,():+]+").unwrap();
    static ref IDENTIFIER: Regex = Regex::new(r"^[^ \r\n,():+]+$").unwrap();
}

/// Scans the next token starting at `offset` into `source`.
///
/// Skips the maximal run of whitespace, then spans the maximal run of
/// non-delimiter characters. When scanning resumes directly on a
/// delimiter, that single character becomes the token; delimiters are
/// never silently skipped. At end of input the returned token is empty,
/// which is a success, not an error.
///
/// The source is never mutated and nothing is allocated; the token is a
/// pair of offsets into the caller's buffer.
pub fn scan<'src>(source: &'src str, offset: usize) -> Result<Token<'src>, Error> {
    if offset > source.len() || !source.is_char_boundary(offset) {
        return Err(Error::with_message(
            ErrorKind::Arguments,
            "scan offset does not lie inside the source buffer",
        ));
    }

    let beginning = match WHITESPACE.find(&source[offset..]) {
        Some(run) => offset + run.end(),
        None => offset,
    };

    let end = match LEXEME.find(&source[beginning..]) {
        Some(run) => beginning + run.end(),
        // Scanning resumed on a delimiter; it stands as its own token.
        None if beginning < source.len() => beginning + 1,
        None => beginning,
    };

    Ok(Token::new(source, Span { beginning, end }))
}

/// True iff `text` is non-empty and contains no delimiter character.
pub fn is_valid_identifier(text: &str) -> bool {
    IDENTIFIER.is_match(text)
}
