//! Expression and constraint trees.
//!
//! Trees are strict: every node owns its children, and inserting a declared
//! symbol into an expression always clones the leaf, so the same variable can
//! appear in many trees without sharing.

pub mod constraint;
pub mod expression;

pub use constraint::{Constraint, ConstraintKind};
pub use expression::Expression;
