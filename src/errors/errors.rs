use std::fmt::Display;

use thiserror::Error as ThisError;

/// The error taxonomy of the front end.
///
/// `Type` and `Generic` are reserved for the semantic layer and never
/// produced here. Each kind displays as its fixed human-readable label;
/// `None` and `Generic` display as nothing.
#[derive(ThisError, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("")]
    None,
    #[error("Invalid arguments")]
    Arguments,
    #[error("Mismatched types")]
    Type,
    #[error("")]
    Generic,
    #[error("Invalid syntax")]
    Syntax,
    #[error("TODO (not implemented)")]
    Todo,
}

/// An error kind paired with an optional diagnostic elaboration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Error {
            kind,
            message: None,
        }
    }

    pub fn with_message(kind: ErrorKind, message: impl Into<String>) -> Self {
        Error {
            kind,
            message: Some(message.into()),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.kind == ErrorKind::None {
            return Ok(());
        }
        write!(f, "{}", self.kind)?;
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}
