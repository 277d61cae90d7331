use tracing::debug;

use crate::ast::{
    ast::{Block, Program},
    expressions::{Expression, ExpressionKind},
    statements::{Statement, StatementKind},
};

use super::{
    context::TypeContext,
    visitor::{walk_expression, Visitor},
};

/// Annotates every expression with its inferred type, children first.
pub struct AssignTypes {
    context: TypeContext,
}

impl AssignTypes {
    pub fn new(context: TypeContext) -> Self {
        AssignTypes { context }
    }
}

impl Visitor for AssignTypes {
    fn context(&mut self) -> &mut TypeContext {
        &mut self.context
    }

    fn visit_expression(&mut self, expression: &mut Expression) {
        walk_expression(self, expression);
        expression.data_type = self.context.resolve(expression);
    }
}

/// Runs the type assignment pass. Expressions that cannot be typed are
/// left `Unknown`.
pub fn assign_types(program: &mut Program) {
    let mut pass = AssignTypes::new(TypeContext::for_program(program));
    pass.visit_program(program);

    debug!(
        unresolved = unresolved_expressions(program).len(),
        "types assigned"
    );
}

/// Every expression in `program` whose type is still `Unknown`.
pub fn unresolved_expressions(program: &Program) -> Vec<&Expression> {
    let mut unresolved = vec![];

    for statement in &program.statements {
        collect_statement(statement, &mut unresolved);
    }
    for function in &program.functions {
        collect_block(&function.body, &mut unresolved);
    }

    unresolved
}

fn collect_block<'a>(block: &'a Block, unresolved: &mut Vec<&'a Expression>) {
    for statement in &block.statements {
        collect_statement(statement, unresolved);
    }
}

fn collect_statement<'a>(statement: &'a Statement, unresolved: &mut Vec<&'a Expression>) {
    match &statement.kind {
        StatementKind::Assignment(assignment) => {
            collect_expression(&assignment.variable, unresolved);
            collect_expression(&assignment.value, unresolved);
        }
        StatementKind::Conditional(conditional) => {
            collect_expression(&conditional.condition, unresolved);
            collect_block(&conditional.then_block, unresolved);
            if let Some(else_block) = &conditional.else_block {
                collect_block(else_block, unresolved);
            }
        }
        StatementKind::WhileLoop(while_loop) => {
            collect_expression(&while_loop.guard, unresolved);
            collect_block(&while_loop.body, unresolved);
        }
        StatementKind::Return(ret) => collect_expression(&ret.value, unresolved),
        StatementKind::Test(test) => {
            collect_expression(&test.call, unresolved);
            collect_expression(&test.expected, unresolved);
        }
        StatementKind::Break | StatementKind::Continue => {}
    }
}

fn collect_expression<'a>(expression: &'a Expression, unresolved: &mut Vec<&'a Expression>) {
    if !expression.data_type.is_known() {
        unresolved.push(expression);
    }

    match &expression.kind {
        ExpressionKind::Binary(binary) => {
            collect_expression(&binary.left, unresolved);
            collect_expression(&binary.right, unresolved);
        }
        ExpressionKind::Unary(unary) => collect_expression(&unary.operand, unresolved),
        ExpressionKind::FunctionCall(call) => {
            for argument in &call.arguments {
                collect_expression(argument, unresolved);
            }
        }
        ExpressionKind::Variable(_) | ExpressionKind::Literal(_) => {}
    }
}
