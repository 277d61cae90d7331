#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

use tracing::debug;

use crate::{
    ast::ast::Program,
    builder::tree_builder::build_tree,
    config::FrontendConfig,
    errors::errors::{Error, ErrorImpl},
    lexer::lexer::tokenize,
    parser::parser::parse,
    type_checker::{
        assign_types::{assign_types, unresolved_expressions},
        symbols::declare_symbols,
    },
};

pub mod ast;
pub mod builder;
pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod scope;
pub mod type_checker;
pub mod types;

extern crate regex;

#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.1, self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Runs the whole front-end over `source`: tokenize, parse into the
/// bottom-up event stream, build the tree, populate the scopes and
/// assign expression types.
///
/// Expressions that stay `Unknown` are left in the tree for later stages,
/// unless `config.require_fully_typed` is set.
pub fn analyze(source: String, config: &FrontendConfig) -> Result<Program, Error> {
    let tokens = tokenize(source, config.file_name.clone())?;
    let (_, events) = parse(tokens, Rc::new(config.display_name()));
    let events = events?;
    debug!(events = events.len(), "parsed source");

    let mut program = build_tree(events)?;
    declare_symbols(&mut program)?;
    assign_types(&mut program);

    if config.require_fully_typed {
        let count = unresolved_expressions(&program).len();
        if count > 0 {
            return Err(Error::detached(ErrorImpl::UnresolvedTypes { count }));
        }
    }

    Ok(program)
}
