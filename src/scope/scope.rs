use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
};

use tracing::trace;

use crate::{
    errors::errors::{Error, ErrorImpl},
    types::types::DataType,
};

/// A named entity (variable or parameter) and its data type.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub name: String,
    pub data_type: DataType,
}

impl Symbol {
    pub fn new(name: &str, data_type: DataType) -> Self {
        Symbol {
            name: name.to_string(),
            data_type,
        }
    }
}

/// Name to symbol bindings of one lexical scope.
#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: HashMap<String, Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            symbols: HashMap::new(),
        }
    }

    pub fn declare(&mut self, name: &str, data_type: DataType) -> Result<(), Error> {
        if self.symbols.contains_key(name) {
            Err(Error::detached(ErrorImpl::VariableAlreadyDeclared {
                variable: name.to_string(),
            }))
        } else {
            self.symbols
                .insert(name.to_string(), Symbol::new(name, data_type));
            Ok(())
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    /// Replaces the type of an already declared symbol.
    /// Returns `false` when no symbol of that name exists.
    pub fn set_type(&mut self, name: &str, data_type: DataType) -> bool {
        match self.symbols.get_mut(name) {
            Some(symbol) => {
                symbol.data_type = data_type;
                true
            }
            None => false,
        }
    }
}

/// Shared handle to a [`SymbolTable`], attached to every program, function
/// and block node.
///
/// Cloning the handle shares the table, so scopes can be filled in after
/// the tree is built and read back by later passes.
#[derive(Debug, Clone, Default)]
pub struct Scope(Arc<Mutex<SymbolTable>>);

impl Scope {
    pub fn new() -> Self {
        Scope(Arc::new(Mutex::new(SymbolTable::new())))
    }

    fn table(&self) -> Result<MutexGuard<'_, SymbolTable>, Error> {
        self.0
            .lock()
            .map_err(|_| Error::detached(ErrorImpl::ScopeUnavailable))
    }

    /// Finds a symbol by name in this scope only.
    pub fn lookup(&self, name: &str) -> Result<Option<Symbol>, Error> {
        Ok(self.table()?.lookup(name).cloned())
    }

    pub fn declare(&self, name: &str, data_type: DataType) -> Result<(), Error> {
        trace!(name, %data_type, "declaring symbol");
        self.table()?.declare(name, data_type)
    }

    pub fn set_type(&self, name: &str, data_type: DataType) -> Result<bool, Error> {
        Ok(self.table()?.set_type(name, data_type))
    }

    /// `true` when both handles point at the same table.
    pub fn same_as(&self, other: &Scope) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Poisons the underlying lock so every later access fails.
    #[cfg(test)]
    pub(crate) fn poison(&self) {
        let handle = self.clone();
        let _ = std::thread::spawn(move || {
            let _guard = handle.0.lock();
            std::panic::panic_any("poisoning scope");
        })
        .join();
    }
}
