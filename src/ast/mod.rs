/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Program, function and block nodes (the scope-bearing nodes)
/// - expressions: Expression nodes and operator enumerations
/// - statements: Statement nodes
pub mod ast;
pub mod expressions;
pub mod statements;

#[cfg(test)]
mod tests;
