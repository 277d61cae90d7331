use crate::{scope::scope::Scope, types::types::DataType};

use super::statements::Statement;

/// Root of the tree: top-level statements and function declarations.
#[derive(Debug, Clone)]
pub struct Program {
    pub statements: Vec<Statement>,
    pub functions: Vec<Function>,
    pub depth: usize,
    pub scope: Scope,
}

impl Program {
    pub fn new(depth: usize) -> Self {
        Program {
            statements: vec![],
            functions: vec![],
            depth,
            scope: Scope::new(),
        }
    }

    pub fn function(&self, name: &str) -> Option<&Function> {
        self.functions.iter().find(|function| function.name == name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub data_type: DataType,
}

impl Parameter {
    pub fn new(name: &str, data_type: DataType) -> Self {
        Parameter {
            name: name.to_string(),
            data_type,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Function {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub return_type: DataType,
    pub body: Block,
    pub depth: usize,
    pub scope: Scope,
}

impl Function {
    pub fn new(name: &str, body: Block, depth: usize) -> Self {
        Function {
            name: name.to_string(),
            parameters: vec![],
            return_type: DataType::Unknown,
            body,
            depth,
            scope: Scope::new(),
        }
    }
}

/// Ordered statement list with its own scope. Blocks nest through
/// conditionals and loops.
#[derive(Debug, Clone)]
pub struct Block {
    pub statements: Vec<Statement>,
    pub depth: usize,
    pub scope: Scope,
}

impl Block {
    pub fn new(depth: usize) -> Self {
        Block {
            statements: vec![],
            depth,
            scope: Scope::new(),
        }
    }
}
