use crate::{errors::errors::ErrorImpl, types::types::DataType};

use super::scope::{Scope, Symbol, SymbolTable};

#[test]
fn test_declare_and_lookup() {
    let mut table = SymbolTable::new();
    table.declare("x", DataType::Int).unwrap();

    assert_eq!(table.lookup("x"), Some(&Symbol::new("x", DataType::Int)));
    assert_eq!(table.lookup("y"), None);
}

#[test]
fn test_declare_twice_fails() {
    let mut table = SymbolTable::new();
    table.declare("x", DataType::Int).unwrap();

    let error = table.declare("x", DataType::Str).unwrap_err();
    assert_eq!(error.get_error_name(), "VariableAlreadyDeclared");
    assert_eq!(table.lookup("x").unwrap().data_type, DataType::Int);
}

#[test]
fn test_set_type() {
    let mut table = SymbolTable::new();
    table.declare("x", DataType::Unknown).unwrap();

    assert!(table.set_type("x", DataType::Bool));
    assert!(!table.set_type("y", DataType::Bool));
    assert_eq!(table.lookup("x").unwrap().data_type, DataType::Bool);
}

#[test]
fn test_scope_handles_share_table() {
    let scope = Scope::new();
    let alias = scope.clone();

    alias.declare("count", DataType::Int).unwrap();

    assert!(scope.same_as(&alias));
    assert!(!scope.same_as(&Scope::new()));
    assert_eq!(
        scope.lookup("count").unwrap(),
        Some(Symbol::new("count", DataType::Int))
    );
}

#[test]
fn test_poisoned_scope_reports_unavailable() {
    let scope = Scope::new();
    scope.poison();

    let error = scope.lookup("x").unwrap_err();
    assert_eq!(error.kind(), &ErrorImpl::ScopeUnavailable);
}
