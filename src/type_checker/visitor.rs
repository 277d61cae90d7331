//! Mutable depth-first traversal shared by the semantic passes.
//!
//! Implementors override the hooks they care about and call the matching
//! `walk_*` function to keep descending. The walk functions push the scope
//! of every program, function and block for the duration of its children.

use crate::{
    ast::{
        ast::{Block, Function, Program},
        expressions::{Expression, ExpressionKind},
        statements::{Statement, StatementKind},
    },
    scope::scope::Scope,
};

use super::context::{ActiveScope, TypeContext};

pub trait Visitor: Sized {
    fn context(&mut self) -> &mut TypeContext;

    fn visit_program(&mut self, program: &mut Program) {
        walk_program(self, program)
    }

    fn visit_function(&mut self, function: &mut Function) {
        walk_function(self, function)
    }

    /// Called with the function's scope active, before its body.
    fn visit_parameters(&mut self, _function: &mut Function) {}

    fn visit_block(&mut self, block: &mut Block) {
        walk_block(self, block)
    }

    fn visit_statement(&mut self, statement: &mut Statement) {
        walk_statement(self, statement)
    }

    fn visit_expression(&mut self, expression: &mut Expression) {
        walk_expression(self, expression)
    }
}

/// Runs `f` with `scope` active and pops it afterwards.
fn scoped<V: Visitor>(visitor: &mut V, scope: &Scope, f: impl FnOnce(&mut V)) {
    visitor.context().enter(scope);
    let mut active = ActiveScope::new(visitor, |visitor: &mut V| visitor.context().leave());
    f(&mut active);
}

/// Top-level statements first, then function bodies.
pub fn walk_program<V: Visitor>(visitor: &mut V, program: &mut Program) {
    let scope = program.scope.clone();
    scoped(visitor, &scope, |visitor| {
        for statement in program.statements.iter_mut() {
            visitor.visit_statement(statement);
        }
        for function in program.functions.iter_mut() {
            visitor.visit_function(function);
        }
    });
}

pub fn walk_function<V: Visitor>(visitor: &mut V, function: &mut Function) {
    let scope = function.scope.clone();
    scoped(visitor, &scope, |visitor| {
        visitor.visit_parameters(function);
        visitor.visit_block(&mut function.body);
    });
}

pub fn walk_block<V: Visitor>(visitor: &mut V, block: &mut Block) {
    let scope = block.scope.clone();
    scoped(visitor, &scope, |visitor| {
        for statement in block.statements.iter_mut() {
            visitor.visit_statement(statement);
        }
    });
}

pub fn walk_statement<V: Visitor>(visitor: &mut V, statement: &mut Statement) {
    match &mut statement.kind {
        StatementKind::Assignment(assignment) => {
            visitor.visit_expression(&mut assignment.value);
            visitor.visit_expression(&mut assignment.variable);
        }
        StatementKind::Conditional(conditional) => {
            visitor.visit_expression(&mut conditional.condition);
            visitor.visit_block(&mut conditional.then_block);
            if let Some(else_block) = conditional.else_block.as_mut() {
                visitor.visit_block(else_block);
            }
        }
        StatementKind::WhileLoop(while_loop) => {
            visitor.visit_expression(&mut while_loop.guard);
            visitor.visit_block(&mut while_loop.body);
        }
        StatementKind::Return(ret) => visitor.visit_expression(&mut ret.value),
        StatementKind::Test(test) => {
            visitor.visit_expression(&mut test.call);
            visitor.visit_expression(&mut test.expected);
        }
        StatementKind::Break | StatementKind::Continue => {}
    }
}

pub fn walk_expression<V: Visitor>(visitor: &mut V, expression: &mut Expression) {
    match &mut expression.kind {
        ExpressionKind::Binary(binary) => {
            visitor.visit_expression(&mut binary.left);
            visitor.visit_expression(&mut binary.right);
        }
        ExpressionKind::Unary(unary) => visitor.visit_expression(&mut unary.operand),
        ExpressionKind::FunctionCall(call) => {
            for argument in call.arguments.iter_mut() {
                visitor.visit_expression(argument);
            }
        }
        ExpressionKind::Variable(_) | ExpressionKind::Literal(_) => {}
    }
}
