//! Type model for the front-end.
//!
//! This module defines the data types that the type assignment pass
//! attaches to expressions and symbols:
//!
//! - Primitive types (booleans, integers, strings)
//! - The `Unknown` marker for types not resolved yet
//! - Generic collection types (lists, sets and the reserved map family)
//!
//! Collection types carry one element type and can be reproduced with the
//! same family through `clone_same_kind`.

pub mod types;

#[cfg(test)]
mod tests;
