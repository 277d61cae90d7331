use std::{
    collections::HashMap,
    ops::{Deref, DerefMut},
};

use tracing::{debug, trace};

use crate::{
    ast::{
        ast::Program,
        expressions::{Expression, ExpressionKind},
    },
    errors::errors::Error,
    scope::scope::{Scope, Symbol},
    types::types::DataType,
};

/// What a call site needs to know about a declared function.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionSignature {
    pub name: String,
    pub parameters: Vec<DataType>,
    pub return_type: DataType,
}

/// State of one traversal: the function table and the active scope stack.
///
/// Built per pass and dropped with it. Scopes are pushed and popped only in
/// pairs, through [`TypeContext::with_scope`] or the visitor walk functions.
#[derive(Debug, Default)]
pub struct TypeContext {
    functions: HashMap<String, FunctionSignature>,
    scopes: Vec<Scope>,
}

impl TypeContext {
    pub fn new(functions: HashMap<String, FunctionSignature>) -> Self {
        TypeContext {
            functions,
            scopes: vec![],
        }
    }

    /// Collects every function of `program` up front, so calls resolve
    /// regardless of declaration order. A repeated name replaces the
    /// earlier declaration.
    pub fn for_program(program: &Program) -> Self {
        let mut functions = HashMap::new();

        for function in &program.functions {
            let signature = FunctionSignature {
                name: function.name.clone(),
                parameters: function
                    .parameters
                    .iter()
                    .map(|parameter| parameter.data_type.clone())
                    .collect(),
                return_type: function.return_type.clone(),
            };

            if functions.insert(function.name.clone(), signature).is_some() {
                debug!(function = %function.name, "function declared twice, keeping the last one");
            }
        }

        TypeContext::new(functions)
    }

    pub fn function(&self, name: &str) -> Option<&FunctionSignature> {
        self.functions.get(name)
    }

    /// Runs `f` with `scope` pushed as the innermost scope.
    pub fn with_scope<T>(&mut self, scope: &Scope, f: impl FnOnce(&mut TypeContext) -> T) -> T {
        self.enter(scope);
        let mut active = ActiveScope::new(self, TypeContext::leave);
        f(&mut active)
    }

    pub(super) fn enter(&mut self, scope: &Scope) {
        self.scopes.push(scope.clone());
        trace!(depth = self.scopes.len(), "entered scope");
    }

    pub(super) fn leave(&mut self) {
        self.scopes.pop();
        trace!(depth = self.scopes.len(), "left scope");
    }

    /// Number of active scopes.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    pub fn innermost_scope(&self) -> Option<&Scope> {
        self.scopes.last()
    }

    /// Type of `expression` as far as it can be inferred right now.
    ///
    /// A known type is returned as is. Otherwise binary expressions take
    /// their left operand's type, unary expressions their operand's, calls
    /// the callee's return type and variables the nearest known binding.
    /// Anything unresolvable is `Unknown`.
    pub fn resolve(&self, expression: &Expression) -> DataType {
        if expression.data_type.is_known() {
            return expression.data_type.clone();
        }

        match &expression.kind {
            // Operand agreement is checked by a later stage.
            ExpressionKind::Binary(binary) => self.resolve(&binary.left),
            ExpressionKind::Unary(unary) => self.resolve(&unary.operand),
            ExpressionKind::FunctionCall(call) => match self.functions.get(&call.name) {
                Some(signature) => signature.return_type.clone(),
                None => {
                    debug!(function = %call.name, "call to undeclared function");
                    DataType::Unknown
                }
            },
            ExpressionKind::Variable(variable) => self.lookup_variable(&variable.name),
            ExpressionKind::Literal(literal) => literal.data_type(),
        }
    }

    /// Searches the active scopes innermost first for a binding of `name`
    /// with a known type. Never fails: a broken scope ends the search.
    pub fn lookup_variable(&self, name: &str) -> DataType {
        for scope in self.scopes.iter().rev() {
            match scope.lookup(name) {
                Ok(Some(symbol)) if symbol.data_type.is_known() => return symbol.data_type,
                Ok(_) => continue,
                Err(error) => {
                    debug!(variable = name, %error, "scope lookup failed");
                    return DataType::Unknown;
                }
            }
        }

        debug!(variable = name, "no known type in any active scope");
        DataType::Unknown
    }

    /// Innermost active scope that binds `name`, whatever its type.
    pub fn find_declaration(&self, name: &str) -> Result<Option<(Scope, Symbol)>, Error> {
        for scope in self.scopes.iter().rev() {
            if let Some(symbol) = scope.lookup(name)? {
                return Ok(Some((scope.clone(), symbol)));
            }
        }

        Ok(None)
    }
}

/// Borrow of whatever owns a [`TypeContext`] while a scope it entered is
/// active. Dropping it leaves the scope, also when unwinding.
pub(super) struct ActiveScope<'a, T> {
    owner: &'a mut T,
    leave: fn(&mut T),
}

impl<'a, T> ActiveScope<'a, T> {
    pub(super) fn new(owner: &'a mut T, leave: fn(&mut T)) -> Self {
        ActiveScope { owner, leave }
    }
}

impl<T> Deref for ActiveScope<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &*self.owner
    }
}

impl<T> DerefMut for ActiveScope<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut *self.owner
    }
}

impl<T> Drop for ActiveScope<'_, T> {
    fn drop(&mut self) {
        (self.leave)(&mut *self.owner);
    }
}
