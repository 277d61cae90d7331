//! Tree builder.
//!
//! Turns the parser's bottom-up event stream into a [`Program`](crate::ast::ast::Program).
//! A stack of open blocks decides where each finished statement belongs, and
//! an id-indexed map holds finished children until their parent event claims them.

pub mod tree_builder;
