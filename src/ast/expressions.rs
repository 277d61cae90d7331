use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::types::types::DataType;

lazy_static! {
    pub static ref BINARY_OP_LOOKUP: HashMap<&'static str, BinaryOp> = {
        let mut map = HashMap::new();
        map.insert("+", BinaryOp::Add);
        map.insert("-", BinaryOp::Sub);
        map.insert("*", BinaryOp::Mul);
        map.insert("/", BinaryOp::Div);
        map.insert(">", BinaryOp::Gt);
        map.insert(">=", BinaryOp::Ge);
        map.insert("<", BinaryOp::Lt);
        map.insert("<=", BinaryOp::Le);
        map.insert("==", BinaryOp::Eq);
        map.insert("!=", BinaryOp::Ne);
        map.insert("||", BinaryOp::Or);
        map.insert("&&", BinaryOp::And);
        map
    };
    pub static ref UNARY_OP_LOOKUP: HashMap<&'static str, UnaryOp> = {
        let mut map = HashMap::new();
        map.insert("!", UnaryOp::Not);
        map.insert("-", UnaryOp::Neg);
        map
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Gt,
    Ge,
    Lt,
    Le,
    Eq,
    Ne,
    Or,
    And,
    /// Operator text the front-end does not know. Left for a later
    /// validation stage to report.
    Invalid,
}

impl BinaryOp {
    pub fn from_symbol(symbol: &str) -> BinaryOp {
        BINARY_OP_LOOKUP
            .get(symbol)
            .copied()
            .unwrap_or(BinaryOp::Invalid)
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Gt => ">",
            BinaryOp::Ge => ">=",
            BinaryOp::Lt => "<",
            BinaryOp::Le => "<=",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::Or => "||",
            BinaryOp::And => "&&",
            BinaryOp::Invalid => "<invalid>",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Not,
    Neg,
    Invalid,
}

impl UnaryOp {
    pub fn from_symbol(symbol: &str) -> UnaryOp {
        UNARY_OP_LOOKUP
            .get(symbol)
            .copied()
            .unwrap_or(UnaryOp::Invalid)
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            UnaryOp::Not => "!",
            UnaryOp::Neg => "-",
            UnaryOp::Invalid => "<invalid>",
        }
    }
}

/// An expression node. `data_type` starts out `Unknown` for everything
/// except literals and is filled in by the type assignment pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub kind: ExpressionKind,
    pub data_type: DataType,
    pub depth: usize,
}

impl Expression {
    pub fn new(kind: ExpressionKind, depth: usize) -> Self {
        let data_type = match &kind {
            ExpressionKind::Literal(literal) => literal.data_type(),
            _ => DataType::Unknown,
        };

        Expression {
            kind,
            data_type,
            depth,
        }
    }

    pub fn binary(operator: BinaryOp, left: Expression, right: Expression, depth: usize) -> Self {
        Expression::new(
            ExpressionKind::Binary(BinaryExpr {
                operator,
                left: Box::new(left),
                right: Box::new(right),
            }),
            depth,
        )
    }

    pub fn unary(operator: UnaryOp, operand: Expression, depth: usize) -> Self {
        Expression::new(
            ExpressionKind::Unary(UnaryExpr {
                operator,
                operand: Box::new(operand),
            }),
            depth,
        )
    }

    pub fn literal(value: LiteralValue, depth: usize) -> Self {
        Expression::new(ExpressionKind::Literal(value), depth)
    }

    pub fn variable(name: &str, depth: usize) -> Self {
        Expression::new(
            ExpressionKind::Variable(Variable {
                name: name.to_string(),
            }),
            depth,
        )
    }

    pub fn call(name: &str, arguments: Vec<Expression>, depth: usize) -> Self {
        Expression::new(
            ExpressionKind::FunctionCall(FunctionCall {
                name: name.to_string(),
                arguments,
            }),
            depth,
        )
    }

    pub fn name(&self) -> &'static str {
        match self.kind {
            ExpressionKind::Binary(_) => "binary expression",
            ExpressionKind::Unary(_) => "unary expression",
            ExpressionKind::Literal(_) => "literal",
            ExpressionKind::Variable(_) => "variable",
            ExpressionKind::FunctionCall(_) => "function call",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExpressionKind {
    Binary(BinaryExpr),
    Unary(UnaryExpr),
    Literal(LiteralValue),
    Variable(Variable),
    FunctionCall(FunctionCall),
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub operator: BinaryOp,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub operator: UnaryOp,
    pub operand: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl LiteralValue {
    pub fn data_type(&self) -> DataType {
        match self {
            LiteralValue::Bool(_) => DataType::Bool,
            LiteralValue::Int(_) => DataType::Int,
            LiteralValue::Str(_) => DataType::Str,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub name: String,
    pub arguments: Vec<Expression>,
}
