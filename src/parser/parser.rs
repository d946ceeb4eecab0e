use crate::{
    ast::node::Node,
    env::environment::Environment,
    errors::errors::{Error, ErrorKind},
    lexer::{
        scanner::{is_valid_identifier, scan},
        tokens::Token,
    },
};

/// The parser state: the source buffer, the offset where scanning
/// resumes, and the active binding frame that declarations are recorded
/// in.
pub struct Parser<'src> {
    source: &'src str,
    pos: usize,
    env: Environment<'static>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        Parser {
            source,
            pos: 0,
            env: Environment::new(),
        }
    }

    /// The offset the parser has consumed the source up to.
    pub fn consumed(&self) -> usize {
        self.pos
    }

    /// The binding frame holding the declarations recognized so far.
    pub fn environment(&self) -> &Environment<'static> {
        &self.env
    }

    fn next_token(&mut self) -> Result<Token<'src>, Error> {
        let token = scan(self.source, self.pos)?;
        self.pos = token.span.end;
        Ok(token)
    }

    /// Recognizes the next top-level form, or `None` at end of input.
    pub fn parse_expression(&mut self) -> Result<Option<Node>, Error> {
        let token = self.next_token()?;
        if token.is_empty() {
            return Ok(None);
        }
        if let Some(integer) = parse_integer(&token) {
            return Ok(Some(integer));
        }
        if token == "let" {
            return self.parse_declaration().map(Some);
        }
        Ok(Some(Node::symbol(token.lexeme())?))
    }

    /// Parses the remainder of `let <identifier> : integer` after the
    /// `let` keyword has been consumed, recording the new binding in the
    /// active frame.
    fn parse_declaration(&mut self) -> Result<Node, Error> {
        let id = self.next_token()?;
        if id.is_empty() || !is_valid_identifier(id.lexeme()) {
            return Err(Error::with_message(
                ErrorKind::Syntax,
                format!("expected identifier after `let`, found `{}`", id.lexeme()),
            ));
        }
        let id_node = Node::symbol(id.lexeme())?;

        let colon = self.next_token()?;
        if colon != ":" {
            return Err(Error::with_message(
                ErrorKind::Syntax,
                format!(
                    "expected `:` in declaration of `{}`, found `{}`",
                    id.lexeme(),
                    colon.lexeme()
                ),
            ));
        }

        let type_name = self.next_token()?;
        if type_name != "integer" {
            return Err(Error::with_message(
                ErrorKind::Syntax,
                format!(
                    "expected `integer` in declaration of `{}`, found `{}`",
                    id.lexeme(),
                    type_name.lexeme()
                ),
            ));
        }

        self.env.bind(id_node.clone(), Node::none());

        let mut declaration = Node::variable_declaration();
        declaration.add_child(id_node);
        Ok(declaration)
    }

    /// Parses every remaining top-level form, collecting the results as
    /// ordered children of a `Program` node.
    pub fn parse_program(&mut self) -> Result<Node, Error> {
        let mut program = Node::program();
        while let Some(node) = self.parse_expression()? {
            program.add_child(node);
        }
        Ok(program)
    }
}

/// The numeric rule: the lexeme `"0"` is the integer zero; any other
/// lexeme must parse in full as a base-10 signed 64-bit integer with a
/// nonzero result. Leading zeros are valid decimal digits (`"007"` is 7),
/// but a multi-character lexeme whose value is zero (`"00"`) is rejected
/// as ambiguous with a failed parse and falls through to the symbol
/// rule.
fn parse_integer(token: &Token) -> Option<Node> {
    let lexeme = token.lexeme();
    if lexeme == "0" {
        return Some(Node::integer(0));
    }
    match lexeme.parse::<i64>() {
        Ok(0) | Err(_) => None,
        Ok(value) => Some(Node::integer(value)),
    }
}

/// Parses a complete source buffer into a `Program` tree.
///
/// This is the front end's entry point: the returned root owns every
/// node built during the parse. On failure the partially built tree is
/// discarded and the first error is returned.
pub fn parse(source: &str) -> Result<Node, Error> {
    let mut parser = Parser::new(source);
    parser.parse_program()
}
