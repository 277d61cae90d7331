use crate::types::types::DataType;

use super::{
    expressions::{BinaryOp, Expression, LiteralValue, UnaryOp},
    statements::Assignment,
};

#[test]
fn test_binary_op_from_symbol() {
    let cases = [
        ("+", BinaryOp::Add),
        ("-", BinaryOp::Sub),
        ("*", BinaryOp::Mul),
        ("/", BinaryOp::Div),
        (">", BinaryOp::Gt),
        (">=", BinaryOp::Ge),
        ("<", BinaryOp::Lt),
        ("<=", BinaryOp::Le),
        ("==", BinaryOp::Eq),
        ("!=", BinaryOp::Ne),
        ("||", BinaryOp::Or),
        ("&&", BinaryOp::And),
    ];

    for (symbol, op) in cases {
        assert_eq!(BinaryOp::from_symbol(symbol), op);
        assert_eq!(op.symbol(), symbol);
    }
}

#[test]
fn test_unknown_operators_map_to_invalid() {
    assert_eq!(BinaryOp::from_symbol("%"), BinaryOp::Invalid);
    assert_eq!(BinaryOp::from_symbol("**"), BinaryOp::Invalid);
    assert_eq!(UnaryOp::from_symbol("~"), UnaryOp::Invalid);
}

#[test]
fn test_unary_op_from_symbol() {
    assert_eq!(UnaryOp::from_symbol("!"), UnaryOp::Not);
    assert_eq!(UnaryOp::from_symbol("-"), UnaryOp::Neg);
}

#[test]
fn test_literal_expressions_are_typed_on_construction() {
    assert_eq!(
        Expression::literal(LiteralValue::Bool(true), 0).data_type,
        DataType::Bool
    );
    assert_eq!(
        Expression::literal(LiteralValue::Int(7), 0).data_type,
        DataType::Int
    );
    assert_eq!(
        Expression::literal(LiteralValue::Str("hi".to_string()), 0).data_type,
        DataType::Str
    );
}

#[test]
fn test_other_expressions_start_unknown() {
    assert_eq!(Expression::variable("x", 0).data_type, DataType::Unknown);
    assert_eq!(Expression::call("f", vec![], 0).data_type, DataType::Unknown);
    assert_eq!(
        Expression::unary(UnaryOp::Not, Expression::variable("x", 1), 0).data_type,
        DataType::Unknown
    );
}

#[test]
fn test_assignment_variable_name() {
    let assignment = Assignment {
        variable: Expression::variable("total", 2),
        value: Expression::literal(LiteralValue::Int(0), 2),
    };
    assert_eq!(assignment.variable_name(), Some("total"));

    let not_a_variable = Assignment {
        variable: Expression::call("f", vec![], 2),
        value: Expression::literal(LiteralValue::Int(0), 2),
    };
    assert_eq!(not_a_variable.variable_name(), None);
}
