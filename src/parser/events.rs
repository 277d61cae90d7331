use crate::{lexer::tokens::Token, types::types::DataType};

/// Identity of a completed construct. Parents refer to their children by id.
pub type ConstructId = usize;

/// One "construct completed" notification. The parser emits these strictly
/// bottom-up: children before parents, siblings left to right.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseEvent {
    pub id: ConstructId,
    pub depth: usize,
    pub kind: EventKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    /// A block was opened. Its statements follow, then the matching
    /// `ExitBlock` carrying the same id.
    EnterBlock,
    ExitBlock,

    Program {
        statements: Vec<ConstructId>,
        functions: Vec<ConstructId>,
    },
    Function {
        name: Token,
        parameters: Vec<(Token, Option<DataType>)>,
        return_type: Option<DataType>,
        body: ConstructId,
    },

    Assignment {
        variable: ConstructId,
        value: ConstructId,
    },
    Conditional {
        condition: ConstructId,
        blocks: Vec<ConstructId>,
    },
    While {
        guard: ConstructId,
        body: ConstructId,
    },
    Return {
        value: ConstructId,
    },
    Break,
    Continue,
    Test {
        call: ConstructId,
        expected: ConstructId,
    },

    /// Wraps every full expression.
    Expr {
        inner: ConstructId,
    },
    Binary {
        operator: Token,
        left: ConstructId,
        right: ConstructId,
    },
    Unary {
        operator: Token,
        operand: ConstructId,
    },
    FunctionCall {
        name: Token,
        arguments: Vec<ConstructId>,
    },
    Variable {
        name: Token,
    },
    Literal {
        token: Token,
    },
}

impl EventKind {
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::EnterBlock => "enter block",
            EventKind::ExitBlock => "exit block",
            EventKind::Program { .. } => "program",
            EventKind::Function { .. } => "function",
            EventKind::Assignment { .. } => "assignment",
            EventKind::Conditional { .. } => "conditional",
            EventKind::While { .. } => "while loop",
            EventKind::Return { .. } => "return",
            EventKind::Break => "break",
            EventKind::Continue => "continue",
            EventKind::Test { .. } => "test",
            EventKind::Expr { .. } => "expression",
            EventKind::Binary { .. } => "binary expression",
            EventKind::Unary { .. } => "unary expression",
            EventKind::FunctionCall { .. } => "function call",
            EventKind::Variable { .. } => "variable",
            EventKind::Literal { .. } => "literal",
        }
    }
}
