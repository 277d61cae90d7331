//! Symbol tables and the scope handles attached to AST nodes.
//!
//! The front-end only needs name lookup from a scope. Filling scopes in
//! belongs to the declaration pass in `type_checker::symbols`.

pub mod scope;

#[cfg(test)]
mod tests;
