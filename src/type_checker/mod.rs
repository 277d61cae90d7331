//! Semantic passes over the built tree.
//!
//! - `context`: the per-traversal function table and active scope stack,
//!   and expression type resolution on top of them
//! - `visitor`: the shared depth-first walk that pushes and pops scopes
//! - `symbols`: populates the scopes from parameters and assignments
//! - `assign_types`: annotates every expression with its inferred type
//!
//! Type assignment never fails. Whatever cannot be inferred stays
//! `Unknown` for later stages to report.

pub mod assign_types;
pub mod context;
pub mod symbols;
pub mod visitor;
