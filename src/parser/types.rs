//! Type annotation parsing.
//!
//! Annotations are either a primitive name (`int`, `bool`, `str`) or a
//! collection name applied to one element type (`list<int>`, `set<str>`).
//! `map<..>` is recognised but rejected as not yet supported.

use std::collections::HashMap;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    types::types::{CollectionKind, CollectionType, DataType},
};

use super::parser::Parser;

pub type TypeNUDHandler = fn(&mut Parser) -> Result<DataType, Error>;

pub type TypeNUDLookup = HashMap<TokenKind, TypeNUDHandler>;

pub fn create_token_type_lookups(parser: &mut Parser) {
    parser.type_nud(TokenKind::Identifier, parse_named_type);
}

pub fn parse_named_type(parser: &mut Parser) -> Result<DataType, Error> {
    let token = parser.expect(TokenKind::Identifier)?;

    if let Some(primitive) = DataType::from_name(&token.value) {
        return Ok(primitive);
    }

    let kind = match CollectionKind::from_name(&token.value) {
        Some(kind) => kind,
        None => {
            return Err(Error::new(
                ErrorImpl::UnknownType {
                    type_: token.value.clone(),
                },
                token.span.start.clone(),
            ))
        }
    };

    parser.expect(TokenKind::Less)?;
    let element = parse_type(parser)?;
    parser.expect(TokenKind::Greater)?;

    match CollectionType::of(kind, element) {
        Some(collection) => Ok(DataType::Collection(collection)),
        None => Err(Error::new(
            ErrorImpl::UnsupportedCollection {
                collection: token.value.clone(),
            },
            token.span.start.clone(),
        )),
    }
}

pub fn parse_type(parser: &mut Parser) -> Result<DataType, Error> {
    let token_kind = parser.current_token_kind();
    match parser.get_type_nud_lookup().get(&token_kind).copied() {
        Some(handler) => handler(parser),
        None => Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: parser.current_token().value.clone(),
            },
            parser.get_position(),
        )),
    }
}
