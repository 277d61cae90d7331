use super::{
    ast::Block,
    expressions::{Expression, ExpressionKind},
};

#[derive(Debug, Clone)]
pub struct Statement {
    pub kind: StatementKind,
    pub depth: usize,
}

impl Statement {
    pub fn new(kind: StatementKind, depth: usize) -> Self {
        Statement { kind, depth }
    }

    pub fn name(&self) -> &'static str {
        match self.kind {
            StatementKind::Assignment(_) => "assignment",
            StatementKind::Conditional(_) => "conditional",
            StatementKind::WhileLoop(_) => "while loop",
            StatementKind::Return(_) => "return",
            StatementKind::Break => "break",
            StatementKind::Continue => "continue",
            StatementKind::Test(_) => "test",
        }
    }
}

#[derive(Debug, Clone)]
pub enum StatementKind {
    Assignment(Assignment),
    Conditional(Conditional),
    WhileLoop(WhileLoop),
    Return(Return),
    Break,
    Continue,
    Test(Test),
}

/// `variable = value;` where `variable` is always a variable expression.
#[derive(Debug, Clone)]
pub struct Assignment {
    pub variable: Expression,
    pub value: Expression,
}

impl Assignment {
    pub fn variable_name(&self) -> Option<&str> {
        match &self.variable.kind {
            ExpressionKind::Variable(variable) => Some(&variable.name),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Conditional {
    pub condition: Expression,
    pub then_block: Block,
    pub else_block: Option<Block>,
}

#[derive(Debug, Clone)]
pub struct WhileLoop {
    pub guard: Expression,
    pub body: Block,
}

#[derive(Debug, Clone)]
pub struct Return {
    pub value: Expression,
}

/// Inline expectation: `call` should evaluate to `expected`.
#[derive(Debug, Clone)]
pub struct Test {
    pub call: Expression,
    pub expected: Expression,
}
