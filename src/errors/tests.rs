//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(10, Rc::new("test.lj".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.lj".to_string()));
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "identifier".to_string(),
        },
        pos.clone(),
    );

    assert_eq!(error.get_position(), &pos);
    assert_eq!(error.to_string(), "unexpected token: \"identifier\" at test.lj:42");
}

#[test]
fn test_detached_error_has_null_position() {
    let error = Error::detached(ErrorImpl::MissingConstruct { construct: 3 });

    assert_eq!(error.get_position(), &Position::null());
    assert_eq!(error.get_error_name(), "MissingConstruct");
    assert_eq!(error.kind(), &ErrorImpl::MissingConstruct { construct: 3 });
}

#[test]
fn test_type_errors() {
    let unknown = Error::detached(ErrorImpl::UnknownType {
        type_: "float".to_string(),
    });
    let unsupported = Error::detached(ErrorImpl::UnsupportedCollection {
        collection: "map".to_string(),
    });

    assert_eq!(unknown.get_error_name(), "UnknownType");
    assert_eq!(unsupported.get_error_name(), "UnsupportedCollection");
    assert_eq!(
        unsupported.get_tip().to_string(),
        "Collection type `map` is not supported yet"
    );
}

#[test]
fn test_variable_already_declared_error() {
    let error = Error::detached(ErrorImpl::VariableAlreadyDeclared {
        variable: "x".to_string(),
    });

    assert_eq!(error.get_error_name(), "VariableAlreadyDeclared");
    assert_eq!(
        error.get_tip().to_string(),
        "Variable `x` already declared"
    );
}

#[test]
fn test_unexpected_construct_tip() {
    let error = Error::detached(ErrorImpl::UnexpectedConstruct {
        expected: "block".to_string(),
        found: "literal".to_string(),
    });

    match error.get_tip() {
        ErrorTip::Suggestion(suggestion) => assert_eq!(suggestion, "Expected block, found literal"),
        ErrorTip::None => panic!("expected a suggestion"),
    }
}

#[test]
fn test_unresolved_types_message() {
    let error = Error::detached(ErrorImpl::UnresolvedTypes { count: 2 });

    assert_eq!(error.get_error_name(), "UnresolvedTypes");
    assert_eq!(
        error.kind().to_string(),
        "2 expression(s) left with unknown type"
    );
}

#[test]
fn test_error_tip_display() {
    assert_eq!(ErrorTip::None.to_string(), "");
    assert_eq!(
        ErrorTip::Suggestion("add a semicolon".to_string()).to_string(),
        "add a semicolon"
    );
}
