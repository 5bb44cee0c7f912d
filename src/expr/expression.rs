//! The expression node and its attribute-propagating operators.
//!
//! An `Expression` records curvature, sign, display text, and the component
//! expressions used to build it, so the parse tree can be reconstructed from
//! the root. `priority` is the order-of-operations priority of the binary
//! operation that created the node (if any); it is what decides where
//! parentheses get imputed when a node is embedded in a larger one.

use std::fmt;
use std::ops;

use crate::dcp::{Curvature, Monotonicity, Sign};
use crate::diagnostics::Violation;
use crate::error::Result;
use crate::expr::constraint::{Constraint, ConstraintKind};

const ADD_PRIORITY: u8 = 1;
const MUL_PRIORITY: u8 = 2;

/// A convex optimization expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    curvature: Curvature,
    sign: Sign,
    name: String,
    /// The name without the subexpressions, i.e. "x + y" has short name "+".
    short_name: String,
    /// Priority of the operator that formed this node; `None` for leaves,
    /// atom applications, negations, and parenthesized groups.
    priority: Option<u8>,
    children: Vec<Expression>,
    errors: Vec<Violation>,
    /// Per-argument monotonicity, present only on atom applications.
    monotonicity: Option<Vec<Monotonicity>>,
}

impl Expression {
    /// A childless expression with explicitly given attributes.
    pub fn new(curvature: Curvature, sign: Sign, name: impl Into<String>) -> Expression {
        Expression::leaf(curvature, sign, name.into())
    }

    /// A declared optimization variable (affine).
    pub fn variable(name: impl Into<String>, sign: Sign) -> Expression {
        let name = name.into();
        Expression::leaf(Curvature::Affine, sign, name)
    }

    /// A declared problem parameter (constant).
    pub fn parameter(name: impl Into<String>, sign: Sign) -> Expression {
        let name = name.into();
        Expression::leaf(Curvature::Constant, sign, name)
    }

    /// A numeric constant, displayed with the default formatting.
    pub fn constant(value: f64) -> Expression {
        Expression::constant_named(value, format_value(value))
    }

    /// A numeric constant that keeps the exact source text it was written
    /// with (e.g. "1.50" or "-2").
    pub fn constant_named(value: f64, text: impl Into<String>) -> Expression {
        let sign = if value > 0.0 {
            Sign::Positive
        } else if value == 0.0 {
            Sign::Zero
        } else {
            Sign::Negative
        };
        Expression::leaf(Curvature::Constant, sign, text.into())
    }

    fn leaf(curvature: Curvature, sign: Sign, name: String) -> Expression {
        Expression {
            curvature,
            sign,
            short_name: name.clone(),
            name,
            priority: None,
            children: Vec::new(),
            errors: Vec::new(),
            monotonicity: None,
        }
    }

    /// Node assembled by an atom application.
    pub(crate) fn atom_application(
        curvature: Curvature,
        sign: Sign,
        name: String,
        short_name: String,
        children: Vec<Expression>,
        errors: Vec<Violation>,
        monotonicity: Vec<Monotonicity>,
    ) -> Expression {
        Expression {
            curvature,
            sign,
            name,
            short_name,
            priority: None,
            children,
            errors,
            monotonicity: Some(monotonicity),
        }
    }

    /// Node rebuilt from the wire form. Diagnostics are not reattached.
    pub(crate) fn from_wire(
        curvature: Curvature,
        sign: Sign,
        name: String,
        short_name: String,
        children: Vec<Expression>,
        monotonicity: Option<Vec<Monotonicity>>,
    ) -> Expression {
        Expression {
            curvature,
            sign,
            name,
            short_name,
            priority: None,
            children,
            errors: Vec::new(),
            monotonicity,
        }
    }

    pub fn curvature(&self) -> Curvature {
        self.curvature
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Full textual rendering of the expression.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    pub fn children(&self) -> &[Expression] {
        &self.children
    }

    /// DCP violations introduced by forming this node (not its children).
    pub fn errors(&self) -> &[Violation] {
        &self.errors
    }

    pub fn monotonicity(&self) -> Option<&[Monotonicity]> {
        self.monotonicity.as_deref()
    }

    /// Whether this node and all descendants satisfy the discipline.
    pub fn is_dcp(&self) -> bool {
        self.errors.is_empty() && self.children.iter().all(Expression::is_dcp)
    }

    /// Wrap the display text in parentheses. The node becomes atomic for
    /// parenthesization purposes, so later operators never wrap it again.
    pub fn add_parens(&mut self) {
        self.name = format!("({})", self.name);
        self.priority = None;
    }

    fn wrapped_left(mut self, op_priority: u8) -> Expression {
        if self.priority.is_some_and(|p| p < op_priority) {
            self.add_parens();
        }
        self
    }

    fn wrapped_right(mut self, op_priority: u8) -> Expression {
        if self.priority.is_some_and(|p| p <= op_priority) {
            self.add_parens();
        }
        self
    }

    fn binary(
        op: &'static str,
        priority: u8,
        curvature: Curvature,
        sign: Sign,
        lhs: Expression,
        rhs: Expression,
    ) -> Expression {
        Expression {
            curvature,
            sign,
            name: format!("{} {} {}", lhs.name, op, rhs.name),
            short_name: op.to_string(),
            priority: Some(priority),
            children: vec![lhs, rhs],
            errors: Vec::new(),
            monotonicity: None,
        }
    }

    /// Push an operation violation if the operation came out non-convex.
    fn record_operation_error(&mut self, op: &'static str) {
        if self.curvature == Curvature::Nonconvex {
            let lhs = &self.children[0];
            let rhs = &self.children[1];
            self.errors.push(Violation::operation(
                op,
                (lhs.curvature, lhs.sign),
                (rhs.curvature, rhs.sign),
            ));
        }
    }

    /// Adjust curvature for the sign of constant subexpressions. Used for
    /// multiplication and division, e.g. negative constant * convex is
    /// concave.
    fn scale_by_constant_signs(&mut self) {
        for child in &self.children {
            if child.curvature == Curvature::Constant {
                self.curvature = self.curvature.sign_mult(child.sign);
            }
        }
    }

    pub fn add(self, other: Expression) -> Expression {
        let lhs = self.wrapped_left(ADD_PRIORITY);
        let rhs = other.wrapped_right(ADD_PRIORITY);
        let curvature = lhs.curvature.add(rhs.curvature);
        let sign = lhs.sign.add(rhs.sign);
        let mut exp = Expression::binary("+", ADD_PRIORITY, curvature, sign, lhs, rhs);
        exp.record_operation_error("+");
        exp
    }

    pub fn sub(self, other: Expression) -> Expression {
        let lhs = self.wrapped_left(ADD_PRIORITY);
        let rhs = other.wrapped_right(ADD_PRIORITY);
        let curvature = lhs.curvature.sub(rhs.curvature);
        let sign = lhs.sign.sub(rhs.sign);
        let mut exp = Expression::binary("-", ADD_PRIORITY, curvature, sign, lhs, rhs);
        exp.record_operation_error("-");
        exp
    }

    pub fn mul(self, other: Expression) -> Expression {
        let lhs = self.wrapped_left(MUL_PRIORITY);
        let rhs = other.wrapped_right(MUL_PRIORITY);
        let curvature = lhs.curvature.mul(rhs.curvature);
        let sign = lhs.sign.mul(rhs.sign);
        let mut exp = Expression::binary("*", MUL_PRIORITY, curvature, sign, lhs, rhs);
        exp.scale_by_constant_signs();
        exp.record_operation_error("*");
        exp
    }

    /// Division fails outright when the divisor's sign is ZERO.
    pub fn div(self, other: Expression) -> Result<Expression> {
        let lhs = self.wrapped_left(MUL_PRIORITY);
        let rhs = other.wrapped_right(MUL_PRIORITY);
        let curvature = lhs.curvature.div(rhs.curvature);
        let sign = lhs.sign.div(rhs.sign)?;
        let mut exp = Expression::binary("/", MUL_PRIORITY, curvature, sign, lhs, rhs);
        exp.scale_by_constant_signs();
        exp.record_operation_error("/");
        Ok(exp)
    }

    pub fn neg(self) -> Expression {
        let mut operand = self;
        if operand.priority.is_some() {
            operand.add_parens();
        }
        Expression {
            curvature: operand.curvature.neg(),
            sign: operand.sign.neg(),
            name: format!("-{}", operand.name),
            short_name: "-".to_string(),
            priority: None,
            children: vec![operand],
            errors: Vec::new(),
            monotonicity: None,
        }
    }

    /// Equality constraint `self == other`.
    pub fn eq(self, other: Expression) -> Constraint {
        Constraint::new(ConstraintKind::Eq, self, other)
    }

    /// Inequality constraint `self <= other`.
    pub fn leq(self, other: Expression) -> Constraint {
        Constraint::new(ConstraintKind::Leq, self, other)
    }

    /// Inequality constraint `self >= other`.
    pub fn geq(self, other: Expression) -> Constraint {
        Constraint::new(ConstraintKind::Geq, self, other)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl ops::Add for Expression {
    type Output = Expression;
    fn add(self, other: Expression) -> Expression {
        Expression::add(self, other)
    }
}

impl ops::Sub for Expression {
    type Output = Expression;
    fn sub(self, other: Expression) -> Expression {
        Expression::sub(self, other)
    }
}

impl ops::Mul for Expression {
    type Output = Expression;
    fn mul(self, other: Expression) -> Expression {
        Expression::mul(self, other)
    }
}

impl ops::Neg for Expression {
    type Output = Expression;
    fn neg(self) -> Expression {
        Expression::neg(self)
    }
}

/// Render a numeric literal: integral values print without a decimal point.
pub(crate) fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
