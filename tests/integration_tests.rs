//! Integration tests for the whole front-end.
//!
//! These tests run source text through `analyze` (tokenize, parse, build,
//! declare symbols, assign types) and inspect the typed tree.

use pretty_assertions::assert_eq;
use typefront::{
    analyze,
    ast::{
        ast::Program,
        expressions::{Expression, ExpressionKind},
        statements::StatementKind,
    },
    config::FrontendConfig,
    errors::errors::ErrorImpl,
    types::types::{CollectionType, DataType},
};

fn run(source: &str) -> Program {
    analyze(source.to_string(), &FrontendConfig::named("test.lj")).unwrap()
}

fn value_types(statements: &[typefront::ast::statements::Statement]) -> Vec<DataType> {
    statements
        .iter()
        .filter_map(|statement| match &statement.kind {
            StatementKind::Assignment(assignment) => Some(assignment.value.data_type.clone()),
            StatementKind::Return(ret) => Some(ret.value.data_type.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn test_analyze_simple_program() {
    let program = run("a = 1; b = a + 2; c = \"hi\"; d = !true;");

    assert_eq!(
        value_types(&program.statements),
        vec![DataType::Int, DataType::Int, DataType::Str, DataType::Bool]
    );
}

#[test]
fn test_analyze_functions_and_calls() {
    let source = r#"
        total = sum(xs);
        def sum(values: list<int>) -> int {
            acc = 0;
            while (acc < 10) {
                acc = acc + 1;
            }
            return acc;
        }
        def wrap(v: int) -> set<int> {
            return v;
        }
        test sum(xs) == 10;
    "#;
    let program = run(source);

    assert_eq!(value_types(&program.statements), vec![DataType::Int]);

    let sum = program.function("sum").unwrap();
    assert_eq!(
        sum.parameters[0].data_type,
        DataType::Collection(CollectionType::List(Box::new(DataType::Int)))
    );
    assert_eq!(value_types(&sum.body.statements), vec![DataType::Int, DataType::Int]);

    let wrap = program.function("wrap").unwrap();
    assert_eq!(
        wrap.return_type,
        DataType::Collection(CollectionType::Set(Box::new(DataType::Int)))
    );

    match &program.statements[1].kind {
        StatementKind::Test(test) => {
            assert_eq!(test.call.data_type, DataType::Int);
            assert_eq!(test.expected.data_type, DataType::Int);
        }
        other => panic!("expected a test, found {:?}", other),
    }
}

#[test]
fn test_statement_order_is_preserved() {
    let program = run("a = 1; if (a) { b = 2; } c = 3;");

    let names: Vec<&str> = program.statements.iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["assignment", "conditional", "assignment"]);
}

#[test]
fn test_binary_type_follows_left_operand() {
    let program = run("s = \"x\"; mixed = 1 + s; flipped = s + 1;");

    assert_eq!(
        value_types(&program.statements),
        vec![DataType::Str, DataType::Int, DataType::Str]
    );
}

#[test]
fn test_unresolved_types_are_left_for_later_stages() {
    let program = run("x = missing; y = nowhere();");

    assert_eq!(
        value_types(&program.statements),
        vec![DataType::Unknown, DataType::Unknown]
    );
}

#[test]
fn test_strict_mode_rejects_unknown_types() {
    let config = FrontendConfig::named("test.lj").strict();
    let err = analyze("x = missing;".to_string(), &config).unwrap_err();

    assert_eq!(err.kind(), &ErrorImpl::UnresolvedTypes { count: 2 });
}

#[test]
fn test_strict_mode_accepts_fully_typed_program() {
    let config = FrontendConfig::default().strict();
    let program = analyze("def f() -> int { return 1; } x = f();".to_string(), &config).unwrap();

    assert_eq!(value_types(&program.statements), vec![DataType::Int]);
}

#[test]
fn test_lexer_errors_carry_file_name() {
    let err = analyze("x = 1 $ 2;".to_string(), &FrontendConfig::named("bad.lj")).unwrap_err();

    assert_eq!(err.get_error_name(), "UnrecognisedToken");
    assert_eq!(err.get_position().to_string(), "bad.lj:6");
}

#[test]
fn test_default_file_name_is_shell() {
    let err = analyze("x = ;".to_string(), &FrontendConfig::default()).unwrap_err();

    assert_eq!(err.get_position().1.as_str(), "shell");
}

#[test]
fn test_parser_errors_surface() {
    let err = analyze(
        "def f(m: map<int>) { return m; }".to_string(),
        &FrontendConfig::default(),
    )
    .unwrap_err();

    assert_eq!(
        err.kind(),
        &ErrorImpl::UnsupportedCollection {
            collection: "map".to_string()
        }
    );
}

#[test]
fn test_symbol_errors_surface() {
    let err = analyze(
        "def f(a, a) { return a; }".to_string(),
        &FrontendConfig::default(),
    )
    .unwrap_err();

    assert_eq!(err.get_error_name(), "VariableAlreadyDeclared");
}

#[test]
fn test_invalid_operator_is_a_value() {
    let program = run("r = 7 % 2;");

    match &program.statements[0].kind {
        StatementKind::Assignment(assignment) => match &assignment.value {
            Expression {
                kind: ExpressionKind::Binary(binary),
                data_type,
                ..
            } => {
                assert_eq!(binary.operator.symbol(), "<invalid>");
                assert_eq!(data_type, &DataType::Int);
            }
            other => panic!("expected a binary expression, found {:?}", other),
        },
        other => panic!("expected an assignment, found {:?}", other),
    }
}
