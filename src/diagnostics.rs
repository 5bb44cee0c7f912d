//! DCP rule violations.
//!
//! Violations are data, not errors: a tree that breaks the discipline is
//! still built, with the offending node carrying one [`Violation`] per broken
//! rule. Rendering goes through a fixed token table shared with the wire
//! form.

use std::fmt;

use crate::dcp::{Curvature, Monotonicity, Sign};

/// Banner prefixed to every rendered violation.
pub const VIOLATION_BANNER: &str = "Disciplined convex programming violation:\n";

/// A single DCP rule violation attached to an expression or constraint node.
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    /// An atom argument whose composition contribution is non-convex.
    Composition {
        func_curvature: Curvature,
        monotonicity: Monotonicity,
        arg_curvature: Curvature,
        arg_sign: Sign,
        /// Position of the offending argument in the call.
        index: usize,
    },
    /// An arithmetic operation whose result is non-convex.
    Operation {
        op: &'static str,
        lhs: String,
        rhs: String,
    },
    /// A constraint relating incompatible curvatures.
    Constraint {
        symbol: &'static str,
        lhs_curvature: Curvature,
        rhs_curvature: Curvature,
    },
}

impl Violation {
    /// Build an operation violation, describing each side by its curvature
    /// token. Sign only matters in one case: a constant of unknown sign that
    /// multiplies, or divides, a convex or concave expression gets a
    /// "with unknown sign" suffix.
    pub fn operation(
        op: &'static str,
        lhs: (Curvature, Sign),
        rhs: (Curvature, Sign),
    ) -> Violation {
        let mut lh_str = lhs.0.name().to_string();
        let mut rh_str = rhs.0.name().to_string();
        if op == "*" {
            if unknown_constant_scaling(lhs, rhs.0) {
                lh_str.push_str(" with unknown sign");
            } else if unknown_constant_scaling(rhs, lhs.0) {
                rh_str.push_str(" with unknown sign");
            }
        } else if op == "/" && unknown_constant_scaling(rhs, lhs.0) {
            rh_str.push_str(" with unknown sign");
        }
        Violation::Operation {
            op,
            lhs: lh_str,
            rhs: rh_str,
        }
    }

    /// Argument index, for violations tied to an argument position.
    pub fn index(&self) -> Option<usize> {
        match self {
            Violation::Composition { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// The message without the banner.
    pub fn message(&self) -> String {
        match self {
            Violation::Composition {
                func_curvature,
                monotonicity,
                arg_curvature,
                ..
            } => format!(
                "Illegal composition: {} {} with {} argument",
                func_curvature.name(),
                monotonicity.name(),
                arg_curvature.name()
            ),
            Violation::Operation { op, lhs, rhs } => {
                format!("Illegal operation: {} {} {}", lhs, op, rhs)
            }
            Violation::Constraint {
                symbol,
                lhs_curvature,
                rhs_curvature,
            } => format!(
                "Illegal constraint: {} {} {}",
                lhs_curvature.name(),
                symbol,
                rhs_curvature.name()
            ),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", VIOLATION_BANNER, self.message())
    }
}

/// A constant of unknown sign scaling a convex or concave expression.
fn unknown_constant_scaling(constant: (Curvature, Sign), other: Curvature) -> bool {
    constant.0 == Curvature::Constant
        && constant.1 == Sign::Unknown
        && matches!(other, Curvature::Convex | Curvature::Concave)
}
