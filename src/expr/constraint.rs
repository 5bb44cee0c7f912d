//! Constraints relating two expressions.

use std::fmt;

use crate::diagnostics::Violation;
use crate::expr::Expression;

/// The relation of a constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    Eq,
    Leq,
    Geq,
}

impl ConstraintKind {
    /// The relation symbol as written in the surface syntax.
    pub fn symbol(self) -> &'static str {
        match self {
            ConstraintKind::Eq => "==",
            ConstraintKind::Leq => "<=",
            ConstraintKind::Geq => ">=",
        }
    }

    /// Short class token used in the wire form.
    pub fn class_name(self) -> &'static str {
        match self {
            ConstraintKind::Eq => "eq",
            ConstraintKind::Leq => "leq",
            ConstraintKind::Geq => "geq",
        }
    }

    /// Inverse of [`ConstraintKind::symbol`].
    pub fn from_symbol(symbol: &str) -> Option<ConstraintKind> {
        match symbol {
            "==" => Some(ConstraintKind::Eq),
            "<=" => Some(ConstraintKind::Leq),
            ">=" => Some(ConstraintKind::Geq),
            _ => None,
        }
    }
}

/// A constraint between two expressions. Curvature compatibility is checked
/// once at construction; a violating constraint is still built, carrying the
/// diagnostic.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    kind: ConstraintKind,
    lhs: Expression,
    rhs: Expression,
    errors: Vec<Violation>,
}

impl Constraint {
    pub fn new(kind: ConstraintKind, lhs: Expression, rhs: Expression) -> Constraint {
        let valid = match kind {
            ConstraintKind::Eq => lhs.curvature().is_affine() && rhs.curvature().is_affine(),
            ConstraintKind::Leq => lhs.curvature().is_convex() && rhs.curvature().is_concave(),
            ConstraintKind::Geq => lhs.curvature().is_concave() && rhs.curvature().is_convex(),
        };
        let errors = if valid {
            Vec::new()
        } else {
            vec![Violation::Constraint {
                symbol: kind.symbol(),
                lhs_curvature: lhs.curvature(),
                rhs_curvature: rhs.curvature(),
            }]
        };
        Constraint {
            kind,
            lhs,
            rhs,
            errors,
        }
    }

    pub fn kind(&self) -> ConstraintKind {
        self.kind
    }

    pub fn lhs(&self) -> &Expression {
        &self.lhs
    }

    pub fn rhs(&self) -> &Expression {
        &self.rhs
    }

    /// The relation symbol; this is the constraint's short name.
    pub fn short_name(&self) -> &'static str {
        self.kind.symbol()
    }

    /// Full textual rendering, "lhs symbol rhs".
    pub fn name(&self) -> String {
        format!("{} {} {}", self.lhs.name(), self.kind.symbol(), self.rhs.name())
    }

    pub fn errors(&self) -> &[Violation] {
        &self.errors
    }

    /// Whether the constraint and both sides satisfy the discipline.
    pub fn is_dcp(&self) -> bool {
        self.errors.is_empty() && self.lhs.is_dcp() && self.rhs.is_dcp()
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.lhs.name(), self.kind.symbol(), self.rhs.name())
    }
}
