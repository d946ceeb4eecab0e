//! Unit tests for error values and their fixed display labels.

use super::errors::{Error, ErrorKind};

#[test]
fn test_kind_labels_are_fixed() {
    assert_eq!(ErrorKind::Arguments.to_string(), "Invalid arguments");
    assert_eq!(ErrorKind::Type.to_string(), "Mismatched types");
    assert_eq!(ErrorKind::Syntax.to_string(), "Invalid syntax");
    assert_eq!(ErrorKind::Todo.to_string(), "TODO (not implemented)");
    assert_eq!(ErrorKind::Generic.to_string(), "");
    assert_eq!(ErrorKind::None.to_string(), "");
}

#[test]
fn test_error_without_message() {
    let error = Error::new(ErrorKind::Syntax);

    assert_eq!(error.kind(), ErrorKind::Syntax);
    assert_eq!(error.message(), None);
    assert_eq!(error.to_string(), "Invalid syntax");
}

#[test]
fn test_error_with_message_elaboration() {
    let error = Error::with_message(ErrorKind::Todo, "Invalid identifier: (");

    assert_eq!(error.kind(), ErrorKind::Todo);
    assert_eq!(error.message(), Some("Invalid identifier: ("));
    assert_eq!(
        error.to_string(),
        "TODO (not implemented): Invalid identifier: ("
    );
}

#[test]
fn test_none_kind_displays_nothing() {
    let error = Error::with_message(ErrorKind::None, "should not appear");

    assert_eq!(error.to_string(), "");
}
