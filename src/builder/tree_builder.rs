use std::collections::HashMap;

use tracing::{debug, trace};

use crate::{
    ast::{
        ast::{Block, Function, Parameter, Program},
        expressions::{BinaryOp, Expression, ExpressionKind, LiteralValue, UnaryOp},
        statements::{Assignment, Conditional, Return, Statement, StatementKind, Test, WhileLoop},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    parser::events::{ConstructId, EventKind, ParseEvent},
};

/// A node that has been built but not yet claimed by its parent.
#[derive(Debug)]
enum BuiltNode {
    Function(Function),
    Block(Block),
    Statement(Statement),
    Expression(Expression),
}

impl BuiltNode {
    fn name(&self) -> &'static str {
        match self {
            BuiltNode::Function(_) => "function",
            BuiltNode::Block(_) => "block",
            BuiltNode::Statement(statement) => statement.name(),
            BuiltNode::Expression(expression) => expression.name(),
        }
    }
}

/// Assembles the AST from a bottom-up event stream.
///
/// Built nodes wait in `nodes` until the parent event claims them by id.
/// Statements completed while a block is open go straight into the
/// innermost open block instead, which keeps them in textual order.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    nodes: HashMap<ConstructId, BuiltNode>,
    blocks: Vec<(ConstructId, Block)>,
    program: Option<Program>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        TreeBuilder::default()
    }

    pub fn handle(&mut self, event: ParseEvent) -> Result<(), Error> {
        trace!(id = event.id, depth = event.depth, event = event.kind.name(), "building");

        let ParseEvent { id, depth, kind } = event;
        match kind {
            EventKind::EnterBlock => {
                self.blocks.push((id, Block::new(depth)));
            }
            EventKind::ExitBlock => match self.blocks.pop() {
                Some((open, block)) if open == id => {
                    self.nodes.insert(id, BuiltNode::Block(block));
                }
                _ => return Err(Error::detached(ErrorImpl::UnbalancedBlock { construct: id })),
            },
            EventKind::Program {
                statements,
                functions,
            } => {
                let mut program = Program::new(depth);
                for statement in statements {
                    program.statements.push(self.take_statement(statement)?);
                }
                for function in functions {
                    program.functions.push(self.take_function(function)?);
                }
                self.program = Some(program);
            }
            EventKind::Function {
                name,
                parameters,
                return_type,
                body,
            } => {
                let body = self.take_block(body)?;
                let mut function = Function::new(&name.value, body, depth);
                function.parameters = parameters
                    .into_iter()
                    .map(|(parameter, annotation)| {
                        Parameter::new(&parameter.value, annotation.unwrap_or_default())
                    })
                    .collect();
                function.return_type = return_type.unwrap_or_default();

                self.nodes.insert(id, BuiltNode::Function(function));
            }
            EventKind::Assignment { variable, value } => {
                let variable = self.take_expression(variable)?;
                if !matches!(variable.kind, ExpressionKind::Variable(_)) {
                    return Err(unexpected("variable", variable.name()));
                }
                let value = self.take_expression(value)?;

                self.add_statement(
                    id,
                    Statement::new(
                        StatementKind::Assignment(Assignment { variable, value }),
                        depth,
                    ),
                );
            }
            EventKind::Conditional { condition, blocks } => {
                let condition = self.take_expression(condition)?;
                let mut blocks = blocks.into_iter();

                let then_block = match blocks.next() {
                    Some(block) => self.take_block(block)?,
                    None => return Err(unexpected("block", "nothing")),
                };
                let else_block = match blocks.next() {
                    Some(block) => Some(self.take_block(block)?),
                    None => None,
                };
                if blocks.next().is_some() {
                    return Err(unexpected("at most two blocks", "more"));
                }

                self.add_statement(
                    id,
                    Statement::new(
                        StatementKind::Conditional(Conditional {
                            condition,
                            then_block,
                            else_block,
                        }),
                        depth,
                    ),
                );
            }
            EventKind::While { guard, body } => {
                let guard = self.take_expression(guard)?;
                let body = self.take_block(body)?;

                self.add_statement(
                    id,
                    Statement::new(StatementKind::WhileLoop(WhileLoop { guard, body }), depth),
                );
            }
            EventKind::Return { value } => {
                let value = self.take_expression(value)?;
                self.add_statement(
                    id,
                    Statement::new(StatementKind::Return(Return { value }), depth),
                );
            }
            EventKind::Break => {
                self.add_statement(id, Statement::new(StatementKind::Break, depth));
            }
            EventKind::Continue => {
                self.add_statement(id, Statement::new(StatementKind::Continue, depth));
            }
            EventKind::Test { call, expected } => {
                let call = self.take_expression(call)?;
                if !matches!(call.kind, ExpressionKind::FunctionCall(_)) {
                    return Err(unexpected("function call", call.name()));
                }
                let expected = self.take_expression(expected)?;

                self.add_statement(
                    id,
                    Statement::new(StatementKind::Test(Test { call, expected }), depth),
                );
            }
            EventKind::Expr { inner } => {
                let mut expression = self.take_expression(inner)?;
                expression.depth = depth;
                self.nodes.insert(id, BuiltNode::Expression(expression));
            }
            EventKind::Binary {
                operator,
                left,
                right,
            } => {
                let left = self.take_expression(left)?;
                let right = self.take_expression(right)?;
                let operator = BinaryOp::from_symbol(&operator.value);

                self.insert_expression(id, Expression::binary(operator, left, right, depth));
            }
            EventKind::Unary { operator, operand } => {
                let operand = self.take_expression(operand)?;
                let operator = UnaryOp::from_symbol(&operator.value);

                self.insert_expression(id, Expression::unary(operator, operand, depth));
            }
            EventKind::FunctionCall { name, arguments } => {
                let arguments = arguments
                    .into_iter()
                    .map(|argument| self.take_expression(argument))
                    .collect::<Result<Vec<_>, _>>()?;

                self.insert_expression(id, Expression::call(&name.value, arguments, depth));
            }
            EventKind::Variable { name } => {
                self.insert_expression(id, Expression::variable(&name.value, depth));
            }
            EventKind::Literal { token } => {
                let value = build_literal(&token)?;
                self.insert_expression(id, Expression::literal(value, depth));
            }
        }

        Ok(())
    }

    /// Returns the finished program once the stream is exhausted.
    pub fn finish(mut self) -> Result<Program, Error> {
        if let Some((open, _)) = self.blocks.first() {
            return Err(Error::detached(ErrorImpl::UnbalancedBlock { construct: *open }));
        }

        let program = self
            .program
            .take()
            .ok_or_else(|| Error::detached(ErrorImpl::IncompleteProgram))?;

        if !self.nodes.is_empty() {
            debug!(unclaimed = self.nodes.len(), "constructs left without a parent");
        }
        debug!(
            statements = program.statements.len(),
            functions = program.functions.len(),
            "tree built"
        );

        Ok(program)
    }

    fn add_statement(&mut self, id: ConstructId, statement: Statement) {
        match self.blocks.last_mut() {
            Some((_, block)) => block.statements.push(statement),
            None => {
                self.nodes.insert(id, BuiltNode::Statement(statement));
            }
        }
    }

    fn insert_expression(&mut self, id: ConstructId, expression: Expression) {
        self.nodes.insert(id, BuiltNode::Expression(expression));
    }

    fn take(&mut self, id: ConstructId) -> Result<BuiltNode, Error> {
        self.nodes
            .remove(&id)
            .ok_or_else(|| Error::detached(ErrorImpl::MissingConstruct { construct: id }))
    }

    fn take_expression(&mut self, id: ConstructId) -> Result<Expression, Error> {
        match self.take(id)? {
            BuiltNode::Expression(expression) => Ok(expression),
            other => Err(unexpected("expression", other.name())),
        }
    }

    fn take_statement(&mut self, id: ConstructId) -> Result<Statement, Error> {
        match self.take(id)? {
            BuiltNode::Statement(statement) => Ok(statement),
            other => Err(unexpected("statement", other.name())),
        }
    }

    fn take_block(&mut self, id: ConstructId) -> Result<Block, Error> {
        match self.take(id)? {
            BuiltNode::Block(block) => Ok(block),
            other => Err(unexpected("block", other.name())),
        }
    }

    fn take_function(&mut self, id: ConstructId) -> Result<Function, Error> {
        match self.take(id)? {
            BuiltNode::Function(function) => Ok(function),
            other => Err(unexpected("function", other.name())),
        }
    }
}

fn unexpected(expected: &str, found: &str) -> Error {
    Error::detached(ErrorImpl::UnexpectedConstruct {
        expected: expected.to_string(),
        found: found.to_string(),
    })
}

/// Boolean, decimal and string tokens are the only literal forms the
/// grammar produces. Anything else is a broken parser.
fn build_literal(token: &Token) -> Result<LiteralValue, Error> {
    match token.kind {
        TokenKind::Bool => Ok(LiteralValue::Bool(token.value.eq_ignore_ascii_case("true"))),
        TokenKind::Number => token.value.parse::<i64>().map(LiteralValue::Int).map_err(|_| {
            Error::new(
                ErrorImpl::NumberParseError {
                    token: token.value.clone(),
                },
                token.span.start.clone(),
            )
        }),
        _ => {
            assert!(
                token.kind == TokenKind::String,
                "literal built from a {} token",
                token.kind
            );
            Ok(LiteralValue::Str(token.value.clone()))
        }
    }
}

/// Runs every event through a fresh [`TreeBuilder`].
pub fn build_tree(events: Vec<ParseEvent>) -> Result<Program, Error> {
    let mut builder = TreeBuilder::new();
    for event in events {
        builder.handle(event)?;
    }
    builder.finish()
}
