//! The atomic function library.
//!
//! Atoms extend the composition algebra with named functions that declare
//! their own curvature, sign, and per-argument monotonicity. The set of atoms
//! is closed: [`AtomKind`] enumerates every function the analyzer knows, and
//! [`apply`] turns a call on checked arguments into an expression node.

pub mod apply;
pub mod kind;

pub use apply::{apply, AtomArg};
pub use kind::AtomKind;
