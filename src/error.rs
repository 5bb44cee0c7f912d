//! Error types for dcparse.
//!
//! These are the hard construction faults: they abort building the current
//! statement and propagate to the caller. DCP rule violations are not errors
//! in this sense; they are [`crate::diagnostics::Violation`] values attached
//! to the node that was still successfully built.

use thiserror::Error;

/// Error type for dcparse operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DcpError {
    /// Declaration used a sign token outside positive/negative/zero/unknown.
    #[error("No such sign {0} exists.")]
    UnknownSign(String),

    /// Division by an expression with sign ZERO.
    #[error("Divide by zero error.")]
    DivideByZero,

    /// Atom called with an empty argument list.
    #[error("No arguments given to {0}.")]
    NoArguments(String),

    /// Atom called with the wrong number of arguments.
    #[error("{atom} requires exactly {expected} arguments.")]
    WrongArity { atom: &'static str, expected: usize },

    /// Internal consistency check on the composition engine.
    #[error("The number of args must be non-zero and equal to the number of monotonicities.")]
    MonotonicityMismatch,

    /// Argument sign is provably negative or zero where positivity is required.
    #[error("{0} only accepts positive arguments.")]
    RequiresPositive(&'static str),

    /// Argument sign is provably negative where nonnegativity is required.
    #[error("{0} does not accept negative arguments.")]
    RejectsNegative(&'static str),

    /// kl_div zero-consistency check.
    #[error("kl_div(x,y) requires that x == 0 if and only if y == 0.")]
    KlDivZeroMismatch,

    /// quad_over_lin needs a numerator and a divisor.
    #[error("quad_over_lin called with too few arguments.")]
    QuadOverLinArity,

    /// quad_over_lin divisor sign is not provably positive.
    #[error("quad_over_lin only accepts positive divisor arguments.")]
    QuadOverLinDivisor,

    /// Invalid norm exponent (must be a number >= 1 or Inf).
    #[error("Invalid p-norm, p = {0}")]
    InvalidNormP(String),

    /// Invalid Huber-family threshold (must be a number > 0).
    #[error("Invalid M for {atom} function, M = {given}")]
    InvalidHuberM { atom: &'static str, given: String },

    /// pow_p exponent is not numeric.
    #[error("Invalid p for pow_p(x,p), p = {0}.")]
    InvalidPowP(String),

    /// pow_abs/pow_pos exponent below 1.
    #[error("Must have p >= 1 for {atom}(x,p), but have p = {given}.")]
    PowExponentTooSmall { atom: &'static str, given: String },

    /// norm_largest/sum_largest/sum_smallest count is not numeric.
    #[error("Invalid value for k in {0}(*vector,k).")]
    InvalidK(&'static str),

    /// Argument that no rule of the atom can accept (e.g. `Inf` outside norm).
    #[error("Invalid argument {given} for {atom}.")]
    InvalidArgument { atom: &'static str, given: String },

    /// Declared name collides with a reserved atom name.
    #[error("The name {0} is reserved for an atomic function.")]
    ReservedName(String),

    /// Expression references a name that was never declared.
    #[error("Unknown identifier {0}.")]
    UnknownIdentifier(String),

    /// Call to a function that is not in the atom registry.
    #[error("Unknown function {0}.")]
    UnknownFunction(String),

    /// Lexer met a character outside the surface syntax.
    #[error("Unexpected character '{0}' in expression.")]
    UnexpectedChar(char),

    /// Parser met a token it cannot use at this position.
    #[error("Unexpected token '{0}' in expression.")]
    UnexpectedToken(String),

    /// Statement ended in the middle of an expression.
    #[error("Unexpected end of expression.")]
    UnexpectedEnd,

    /// Relational operators are nonassociative; `a <= b <= c` is rejected.
    #[error("Chained constraints are not supported.")]
    ChainedConstraint,

    /// Wire-form document that cannot be decoded into a statement.
    #[error("Malformed statement JSON: {0}.")]
    MalformedJson(String),
}

/// Result type for dcparse operations.
pub type Result<T> = std::result::Result<T, DcpError>;
