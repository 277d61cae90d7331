use crate::{errors::errors::Error, lexer::tokens::TokenKind};

use super::{
    events::{ConstructId, EventKind},
    expr::{parse_call, parse_full_expr},
    parser::Parser,
    types::parse_type,
};

pub fn parse_stmt(parser: &mut Parser) -> Result<ConstructId, Error> {
    let handler = match parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied()
    {
        Some(handler) => handler,
        None if parser.current_token_kind() == TokenKind::Def => {
            return Err(parser.unexpected("functions can only be declared at the top level"))
        }
        None => return Err(parser.unexpected("expected a statement")),
    };

    parser.nested(handler)
}

pub fn parse_block(parser: &mut Parser) -> Result<ConstructId, Error> {
    parser.nested(|parser| {
        parser.expect(TokenKind::OpenCurly)?;

        let id = parser.advance_id();
        parser.emit_with(id, EventKind::EnterBlock);

        while parser.current_token_kind() != TokenKind::CloseCurly {
            if !parser.has_tokens() {
                return Err(parser.unexpected("expected `}` to close the block"));
            }
            parse_stmt(parser)?;
        }

        parser.expect(TokenKind::CloseCurly)?;
        parser.emit_with(id, EventKind::ExitBlock);

        Ok(id)
    })
}

pub fn parse_function_decl(parser: &mut Parser) -> Result<ConstructId, Error> {
    parser.nested(|parser| {
        parser.expect(TokenKind::Def)?;

        let error = parser.unexpected("expected function name");
        let name = parser.expect_error(TokenKind::Identifier, Some(error))?;

        parser.expect(TokenKind::OpenParen)?;

        let mut parameters = Vec::new();
        while parser.current_token_kind() != TokenKind::CloseParen {
            let error = parser.unexpected("expected parameter name");
            let parameter = parser.expect_error(TokenKind::Identifier, Some(error))?;

            let annotation = if parser.current_token_kind() == TokenKind::Colon {
                parser.advance();
                Some(parse_type(parser)?)
            } else {
                None
            };
            parameters.push((parameter, annotation));

            if parser.current_token_kind() != TokenKind::CloseParen {
                parser.expect(TokenKind::Comma)?;
                if parser.current_token_kind() == TokenKind::CloseParen {
                    return Err(parser.unexpected("expected parameter after `,`"));
                }
            }
        }

        parser.expect(TokenKind::CloseParen)?;

        let return_type = if parser.current_token_kind() == TokenKind::Arrow {
            parser.advance();
            Some(parse_type(parser)?)
        } else {
            None
        };

        let body = parse_block(parser)?;

        Ok(parser.emit(EventKind::Function {
            name,
            parameters,
            return_type,
            body,
        }))
    })
}

pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<ConstructId, Error> {
    let name = parser.expect(TokenKind::Identifier)?;
    let variable = parser.emit(EventKind::Variable { name });

    let error = parser.unexpected("expected `=` in assignment");
    parser.expect_error(TokenKind::Assignment, Some(error))?;

    let value = parse_full_expr(parser)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(parser.emit(EventKind::Assignment { variable, value }))
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<ConstructId, Error> {
    parser.expect(TokenKind::If)?;
    parser.expect(TokenKind::OpenParen)?;
    let condition = parse_full_expr(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    let mut blocks = vec![parse_block(parser)?];
    if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        blocks.push(parse_block(parser)?);
    }

    Ok(parser.emit(EventKind::Conditional { condition, blocks }))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<ConstructId, Error> {
    parser.expect(TokenKind::While)?;
    parser.expect(TokenKind::OpenParen)?;
    let guard = parse_full_expr(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    let body = parse_block(parser)?;

    Ok(parser.emit(EventKind::While { guard, body }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<ConstructId, Error> {
    parser.expect(TokenKind::Return)?;

    if parser.current_token_kind() == TokenKind::Semicolon {
        return Err(parser.unexpected("expected a value to return"));
    }

    let value = parse_full_expr(parser)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(parser.emit(EventKind::Return { value }))
}

pub fn parse_break_stmt(parser: &mut Parser) -> Result<ConstructId, Error> {
    parser.expect(TokenKind::Break)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(parser.emit(EventKind::Break))
}

pub fn parse_continue_stmt(parser: &mut Parser) -> Result<ConstructId, Error> {
    parser.expect(TokenKind::Continue)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(parser.emit(EventKind::Continue))
}

/// `test f(args) == expected;`
pub fn parse_test_stmt(parser: &mut Parser) -> Result<ConstructId, Error> {
    parser.expect(TokenKind::Test)?;

    let error = parser.unexpected("expected a function call after `test`");
    let name = parser.expect_error(TokenKind::Identifier, Some(error))?;
    if parser.current_token_kind() != TokenKind::OpenParen {
        return Err(parser.unexpected("expected a function call after `test`"));
    }
    let inner = parse_call(parser, name)?;
    let call = parser.emit(EventKind::Expr { inner });

    let error = parser.unexpected("expected `==` after the tested call");
    parser.expect_error(TokenKind::Equals, Some(error))?;

    let expected = parse_full_expr(parser)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(parser.emit(EventKind::Test { call, expected }))
}
