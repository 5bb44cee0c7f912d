//! # dcparse
//!
//! A static analyzer for Disciplined Convex Programming (DCP).
//!
//! dcparse reads optimization expressions and constraints one statement at a
//! time, builds the expression tree, and labels every node with its curvature
//! and sign. Nodes that break the composition rule keep a diagnostic attached
//! instead of aborting, so a whole statement can be inspected even when parts
//! of it are non-DCP.
//!
//! ## Quick Start
//!
//! ```ignore
//! use dcparse::prelude::*;
//!
//! let mut parser = Parser::new();
//! parser.parse("variable x y")?;
//! parser.parse("parameter positive a")?;
//!
//! if let Some(statement) = parser.parse("square(x) + a <= log(y)")? {
//!     println!("{} is DCP: {}", statement.name(), statement.is_dcp());
//! }
//! ```
//!
//! ## DCP Rules
//!
//! dcparse applies the standard composition rule:
//!
//! - **Affine** expressions stay affine under `+`, `-`, and scaling
//! - **Convex** atoms accept convex arguments only where they are increasing
//!   (and concave arguments only where decreasing)
//! - **Multiplication and division** require a constant operand
//! - **`==`** needs affine sides; **`<=`** convex vs. concave; **`>=`** the
//!   reverse
//!
//! Scalings by constants of unknown sign, and compositions that no rule
//! covers, produce nodes labeled non-convex with a violation explaining why.
//!
//! ## Architecture
//!
//! - **Attribute lattices** (`dcp`): curvature, sign, and monotonicity with
//!   their arithmetic
//! - **Expression trees** (`expr`): immutable nodes carrying name, attributes,
//!   and violations
//! - **Atom library** (`atoms`): the closed set of recognized functions and
//!   the composition engine
//! - **Statement parser** (`parser`): declarations, expressions, and
//!   constraints over a symbol table
//! - **Wire form** (`json`): JSON encoding of analyzed statements

pub mod atoms;
pub mod dcp;
pub mod diagnostics;
pub mod error;
pub mod expr;
pub mod json;
pub mod parser;

/// Prelude module for convenient imports.
///
/// ```ignore
/// use dcparse::prelude::*;
/// ```
pub mod prelude {
    // Expression types
    pub use crate::expr::{Constraint, ConstraintKind, Expression};

    // Atoms
    pub use crate::atoms::{apply, AtomArg, AtomKind};

    // Attributes
    pub use crate::dcp::{Curvature, Monotonicity, Sign};

    // Diagnostics
    pub use crate::diagnostics::Violation;

    // Parser
    pub use crate::parser::{Parser, Statement};

    // Errors
    pub use crate::error::{DcpError, Result};
}

// Re-export main types at crate root
pub use error::{DcpError, Result};
pub use expr::{Constraint, ConstraintKind, Expression};
pub use parser::{Parser, Statement};
