//! Parser state and entry point.
//!
//! The parser walks the token stream with a Pratt parser for expressions
//! and one handler per statement keyword. Instead of returning a tree it
//! records a [`ParseEvent`] every time a construct is completed, which
//! yields the bottom-up stream the tree builder consumes.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence
//! - Type annotation handlers

use std::{collections::HashMap, rc::Rc};

use tracing::trace;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span,
};

use super::{
    events::{ConstructId, EventKind, ParseEvent},
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::{parse_function_decl, parse_stmt},
    types::{create_token_type_lookups, TypeNUDHandler, TypeNUDLookup},
};

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The list of tokens to parse, always terminated by `EOF`
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    stmt_lookup: StmtLookup,
    nud_lookup: NUDLookup,
    led_lookup: LEDLookup,
    binding_power_lookup: BPLookup,
    type_nud_lookup: TypeNUDLookup,
    /// Counter for generating construct ids
    current_id: ConstructId,
    /// Nesting level of the construct being parsed
    depth: usize,
    /// Completed constructs, in completion order
    events: Vec<ParseEvent>,
}

impl Parser {
    pub fn new(mut tokens: Vec<Token>, file: Rc<String>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let end = tokens
                .last()
                .map(|token| token.span.end.clone())
                .unwrap_or_else(|| Position(0, Rc::clone(&file)));
            tokens.push(Token {
                kind: TokenKind::EOF,
                value: String::from("EOF"),
                span: Span {
                    start: end.clone(),
                    end,
                },
            });
        }

        Parser {
            tokens,
            pos: 0,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            type_nud_lookup: HashMap::new(),
            current_id: 0,
            depth: 0,
            events: vec![],
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the previous token.
    /// The cursor never moves past the trailing `EOF`.
    pub fn advance(&mut self) -> &Token {
        let current = self.pos;
        if current + 1 < self.tokens.len() {
            self.pos += 1;
        }
        &self.tokens[current]
    }

    /// Expects a token of the specified kind, with optional custom error.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        let token = self.current_token();
        if token.kind != expected_kind {
            match error {
                Some(error) => Err(error),
                None => Err(Error::new(
                    ErrorImpl::UnexpectedToken {
                        token: token.value.clone(),
                    },
                    token.span.start.clone(),
                )),
            }
        } else {
            Ok(self.advance().clone())
        }
    }

    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Builds an `UnexpectedTokenDetailed` error for the current token.
    pub fn unexpected(&self, message: &str) -> Error {
        let token = self.current_token();
        Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: token.value.clone(),
                message: message.to_string(),
            },
            token.span.start.clone(),
        )
    }

    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    pub fn get_type_nud_lookup(&self) -> &TypeNUDLookup {
        &self.type_nud_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    pub fn type_nud(&mut self, kind: TokenKind, nud_fn: TypeNUDHandler) {
        self.type_nud_lookup.insert(kind, nud_fn);
    }

    /// Advances the internal ID counter and returns the previous value.
    pub fn advance_id(&mut self) -> ConstructId {
        let id = self.current_id;
        self.current_id += 1;
        id
    }

    /// Records a completed construct under a fresh id.
    pub fn emit(&mut self, kind: EventKind) -> ConstructId {
        let id = self.advance_id();
        self.emit_with(id, kind);
        id
    }

    /// Records an event under an id allocated earlier. Blocks use this so
    /// that `EnterBlock` and `ExitBlock` share one id.
    pub fn emit_with(&mut self, id: ConstructId, kind: EventKind) {
        trace!(id, depth = self.depth, event = kind.name(), "construct completed");
        self.events.push(ParseEvent {
            id,
            depth: self.depth,
            kind,
        });
    }

    /// Runs `f` one nesting level deeper.
    pub fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Parser) -> Result<T, Error>,
    ) -> Result<T, Error> {
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Events recorded so far. After a failed parse this is the prefix of
    /// the stream that completed before the error.
    pub fn events(&self) -> &[ParseEvent] {
        &self.events
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }
}

/// Parses a stream of tokens into the bottom-up event stream.
///
/// Top-level functions and statements are parsed in textual order and the
/// stream always ends with the `Program` event.
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> (Parser, Result<Vec<ParseEvent>, Error>) {
    let mut parser = Parser::new(tokens, file);
    create_token_lookups(&mut parser);
    create_token_type_lookups(&mut parser);

    let mut statements = vec![];
    let mut functions = vec![];

    while parser.has_tokens() {
        let construct = if parser.current_token_kind() == TokenKind::Def {
            parse_function_decl(&mut parser).map(|id| functions.push(id))
        } else {
            parse_stmt(&mut parser).map(|id| statements.push(id))
        };

        if let Err(error) = construct {
            return (parser, Err(error));
        }
    }

    parser.emit(EventKind::Program {
        statements,
        functions,
    });

    let events = parser.events.clone();
    (parser, Ok(events))
}
