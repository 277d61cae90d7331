use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    /// Creates an error that has no meaningful source position,
    /// e.g. one raised while wiring already-built nodes together.
    pub fn detached(error_impl: ErrorImpl) -> Self {
        Error::new(error_impl, Position::null())
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnknownType { .. } => "UnknownType",
            ErrorImpl::UnsupportedCollection { .. } => "UnsupportedCollection",
            ErrorImpl::MissingConstruct { .. } => "MissingConstruct",
            ErrorImpl::UnexpectedConstruct { .. } => "UnexpectedConstruct",
            ErrorImpl::UnbalancedBlock { .. } => "UnbalancedBlock",
            ErrorImpl::IncompleteProgram => "IncompleteProgram",
            ErrorImpl::VariableAlreadyDeclared { .. } => "VariableAlreadyDeclared",
            ErrorImpl::ScopeUnavailable => "ScopeUnavailable",
            ErrorImpl::UnresolvedTypes { .. } => "UnresolvedTypes",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::UnknownType { type_ } => {
                ErrorTip::Suggestion(format!("Unknown type `{}` found", type_))
            }
            ErrorImpl::UnsupportedCollection { collection } => ErrorTip::Suggestion(format!(
                "Collection type `{}` is not supported yet",
                collection
            )),
            ErrorImpl::MissingConstruct { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedConstruct { expected, found } => ErrorTip::Suggestion(format!(
                "Expected {}, found {}",
                expected, found
            )),
            ErrorImpl::UnbalancedBlock { .. } => ErrorTip::None,
            ErrorImpl::IncompleteProgram => ErrorTip::None,
            ErrorImpl::VariableAlreadyDeclared { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` already declared", variable))
            }
            ErrorImpl::ScopeUnavailable => ErrorTip::None,
            ErrorImpl::UnresolvedTypes { count } => ErrorTip::Suggestion(format!(
                "{} expression(s) have no inferable type",
                count
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.internal_error, self.position)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message:?}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("unknown type {type_} found")]
    UnknownType { type_: String },
    #[error("collection type {collection} is not supported")]
    UnsupportedCollection { collection: String },
    #[error("construct #{construct} has not been built")]
    MissingConstruct { construct: usize },
    #[error("expected {expected}, found {found}")]
    UnexpectedConstruct { expected: String, found: String },
    #[error("block #{construct} closed out of order")]
    UnbalancedBlock { construct: usize },
    #[error("event stream ended without a program")]
    IncompleteProgram,
    #[error("variable {variable:?} already declared")]
    VariableAlreadyDeclared { variable: String },
    #[error("scope is unavailable")]
    ScopeUnavailable,
    #[error("{count} expression(s) left with unknown type")]
    UnresolvedTypes { count: usize },
}
