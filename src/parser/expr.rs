use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{
    events::{ConstructId, EventKind},
    lookups::BindingPower,
    parser::Parser,
};

/// Parses a complete expression and wraps it in an `Expr` event.
pub fn parse_full_expr(parser: &mut Parser) -> Result<ConstructId, Error> {
    let inner = parse_expr(parser, BindingPower::Default)?;
    Ok(parser.emit(EventKind::Expr { inner }))
}

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<ConstructId, Error> {
    parser.nested(|parser| {
        // First parse NUD
        let token_kind = parser.current_token_kind();
        let nud = match parser.get_nud_lookup().get(&token_kind).copied() {
            Some(nud) => nud,
            None => {
                return Err(Error::new(
                    ErrorImpl::UnexpectedToken {
                        token: parser.current_token().value.clone(),
                    },
                    parser.get_position(),
                ))
            }
        };

        let mut left = nud(parser)?;

        // While the next operator binds tighter than the caller, keep extending lhs
        loop {
            let token_kind = parser.current_token_kind();
            let next_bp = parser
                .get_bp_lookup()
                .get(&token_kind)
                .copied()
                .unwrap_or(BindingPower::Default);
            if next_bp <= bp {
                break;
            }

            let led = match parser.get_led_lookup().get(&token_kind).copied() {
                Some(led) => led,
                None => {
                    return Err(Error::new(
                        ErrorImpl::UnexpectedToken {
                            token: parser.current_token().value.clone(),
                        },
                        parser.get_position(),
                    ))
                }
            };

            left = led(parser, left, next_bp)?;
        }

        Ok(left)
    })
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<ConstructId, Error> {
    match parser.current_token_kind() {
        TokenKind::Number | TokenKind::String | TokenKind::Bool => {
            let token = parser.advance().clone();
            Ok(parser.emit(EventKind::Literal { token }))
        }
        TokenKind::Identifier => {
            let name = parser.advance().clone();
            if parser.current_token_kind() == TokenKind::OpenParen {
                parse_call(parser, name)
            } else {
                Ok(parser.emit(EventKind::Variable { name }))
            }
        }
        _ => Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: parser.current_token().value.clone(),
            },
            parser.get_position(),
        )),
    }
}

/// Parses the argument list of a call whose name has already been consumed.
pub fn parse_call(parser: &mut Parser, name: Token) -> Result<ConstructId, Error> {
    parser.expect(TokenKind::OpenParen)?;

    let mut arguments = vec![];
    while parser.current_token_kind() != TokenKind::CloseParen {
        arguments.push(parse_full_expr(parser)?);

        if parser.current_token_kind() != TokenKind::CloseParen {
            let error = parser.unexpected("expected `,` between call arguments");
            parser.expect_error(TokenKind::Comma, Some(error))?;
            if parser.current_token_kind() == TokenKind::CloseParen {
                return Err(parser.unexpected("expected argument after `,`"));
            }
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    Ok(parser.emit(EventKind::FunctionCall { name, arguments }))
}

pub fn parse_binary_expr(
    parser: &mut Parser,
    left: ConstructId,
    bp: BindingPower,
) -> Result<ConstructId, Error> {
    let operator = parser.advance().clone();
    let right = parse_expr(parser, bp)?;

    Ok(parser.emit(EventKind::Binary {
        operator,
        left,
        right,
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<ConstructId, Error> {
    let operator = parser.advance().clone();
    let operand = parse_expr(parser, BindingPower::Unary)?;

    Ok(parser.emit(EventKind::Unary { operator, operand }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<ConstructId, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}
