//! Parser module producing the construct-completion event stream.
//!
//! This module contains the parser that transforms a stream of tokens into
//! a bottom-up sequence of [`events::ParseEvent`]s. It uses a Pratt parser
//! for expressions with operator precedence and handles:
//!
//! - Top-level function declarations
//! - Statements (assignment, conditionals, loops, return, break, continue, test)
//! - Expressions (binary and prefix operators, calls, literals, variables)
//! - Type annotations on parameters and return types
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.

pub mod events;
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;
