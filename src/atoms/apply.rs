//! Atom application: argument checking, domain checks, and composition.
//!
//! A call site hands over the raw argument list, which may mix expressions
//! with numeric parameters (a norm's `p`, a huber threshold `M`, a `k` count).
//! Parameters are consumed here and validated; only expression arguments
//! become children of the resulting node. The rendered call text keeps every
//! argument, parameters included, exactly as written.

use crate::atoms::AtomKind;
use crate::dcp::{Curvature, Monotonicity, Sign};
use crate::diagnostics::Violation;
use crate::error::{DcpError, Result};
use crate::expr::Expression;

/// One argument at an atom call site.
#[derive(Debug, Clone)]
pub enum AtomArg {
    Expr(Expression),
    /// A numeric literal, kept with its source text.
    Number { value: f64, text: String },
    /// The `Inf` keyword; only valid as a norm exponent.
    Inf,
}

impl AtomArg {
    /// Source text of the argument, used to render the call.
    pub fn text(&self) -> &str {
        match self {
            AtomArg::Expr(e) => e.name(),
            AtomArg::Number { text, .. } => text,
            AtomArg::Inf => "Inf",
        }
    }

    pub fn number(value: f64, text: impl Into<String>) -> AtomArg {
        AtomArg::Number {
            value,
            text: text.into(),
        }
    }
}

/// Apply an atomic function to its arguments, producing an expression node.
///
/// `called_name` is the name written at the call site (it may be an alias of
/// the canonical atom name); the rendered text and the node's short name use
/// it verbatim. Domain faults are hard errors; composition failures come back
/// as diagnostics on the node.
pub fn apply(kind: AtomKind, called_name: &str, mut args: Vec<AtomArg>) -> Result<Expression> {
    if args.is_empty() {
        return Err(DcpError::NoArguments(called_name.to_string()));
    }
    let name = call_text(called_name, &args);
    let atom = kind.name();

    match kind {
        // Convex, positive, monotonicity following the argument's sign.
        AtomKind::Square | AtomKind::SquareAbs | AtomKind::Abs => {
            let exprs = to_exprs(atom, args)?;
            check_arity(atom, &exprs, 1)?;
            let monos = sign_monotonicities(&exprs);
            build(called_name, name, Sign::Positive, Curvature::Convex, monos, false, exprs)
        }
        AtomKind::SumSquare | AtomKind::SumSquareAbs => {
            let exprs = to_exprs(atom, args)?;
            let monos = sign_monotonicities(&exprs);
            build(called_name, name, Sign::Positive, Curvature::Convex, monos, false, exprs)
        }

        // The clamp family: identically zero over nonpositive arguments, so
        // such an argument contributes constant curvature and zero sign.
        AtomKind::SquarePos | AtomKind::Pos => {
            let exprs = to_exprs(atom, args)?;
            check_arity(atom, &exprs, 1)?;
            let sign = clamped_sign(&exprs);
            let monos = vec![Monotonicity::Increasing; exprs.len()];
            build(called_name, name, sign, Curvature::Convex, monos, true, exprs)
        }
        AtomKind::SumSquarePos => {
            let exprs = to_exprs(atom, args)?;
            let sign = clamped_sign(&exprs);
            let monos = vec![Monotonicity::Increasing; exprs.len()];
            build(called_name, name, sign, Curvature::Convex, monos, true, exprs)
        }
        AtomKind::HuberPos => {
            pop_m(&mut args, atom)?;
            let exprs = to_exprs(atom, args)?;
            check_arity(atom, &exprs, 1)?;
            let sign = clamped_sign(&exprs);
            let monos = vec![Monotonicity::Increasing; exprs.len()];
            build(called_name, name, sign, Curvature::Convex, monos, true, exprs)
        }
        AtomKind::PowPos => {
            pop_exponent(&mut args, atom)?;
            let exprs = to_exprs(atom, args)?;
            check_arity(atom, &exprs, 1)?;
            let sign = clamped_sign(&exprs);
            let monos = vec![Monotonicity::Increasing; exprs.len()];
            build(called_name, name, sign, Curvature::Convex, monos, true, exprs)
        }

        // Huber losses with an optional threshold parameter.
        AtomKind::Huber | AtomKind::Berhu => {
            pop_m(&mut args, atom)?;
            let exprs = to_exprs(atom, args)?;
            check_arity(atom, &exprs, 1)?;
            let monos = sign_monotonicities(&exprs);
            build(called_name, name, Sign::Positive, Curvature::Convex, monos, false, exprs)
        }
        AtomKind::HuberCirc => {
            pop_m(&mut args, atom)?;
            let exprs = to_exprs(atom, args)?;
            let monos = sign_monotonicities(&exprs);
            build(called_name, name, Sign::Positive, Curvature::Convex, monos, false, exprs)
        }

        AtomKind::Norm => {
            pop_norm_p(&mut args)?;
            let exprs = to_exprs(atom, args)?;
            let monos = sign_monotonicities(&exprs);
            build(called_name, name, Sign::Positive, Curvature::Convex, monos, false, exprs)
        }
        AtomKind::NormLargest => {
            pop_k(&mut args, atom)?;
            let exprs = to_exprs(atom, args)?;
            let monos = sign_monotonicities(&exprs);
            build(called_name, name, Sign::Positive, Curvature::Convex, monos, false, exprs)
        }
        AtomKind::SumLargest => {
            pop_k(&mut args, atom)?;
            let exprs = to_exprs(atom, args)?;
            let monos = vec![Monotonicity::Increasing; exprs.len()];
            build(called_name, name, Sign::Unknown, Curvature::Convex, monos, false, exprs)
        }
        AtomKind::SumSmallest => {
            pop_k(&mut args, atom)?;
            let exprs = to_exprs(atom, args)?;
            let monos = vec![Monotonicity::Decreasing; exprs.len()];
            build(called_name, name, Sign::Unknown, Curvature::Concave, monos, false, exprs)
        }

        AtomKind::LogSumExp => {
            let exprs = to_exprs(atom, args)?;
            let monos = vec![Monotonicity::Increasing; exprs.len()];
            build(called_name, name, Sign::Unknown, Curvature::Convex, monos, false, exprs)
        }
        AtomKind::Exp => {
            let exprs = to_exprs(atom, args)?;
            check_arity(atom, &exprs, 1)?;
            let monos = vec![Monotonicity::Increasing; exprs.len()];
            build(called_name, name, Sign::Positive, Curvature::Convex, monos, false, exprs)
        }
        AtomKind::Max => {
            let exprs = to_exprs(atom, args)?;
            let sign = exprs.iter().fold(Sign::Negative, |acc, e| acc.max(e.sign()));
            let monos = vec![Monotonicity::Increasing; exprs.len()];
            build(called_name, name, sign, Curvature::Convex, monos, false, exprs)
        }
        AtomKind::Min => {
            let exprs = to_exprs(atom, args)?;
            let sign = exprs.iter().fold(Sign::Positive, |acc, e| acc.min(e.sign()));
            let monos = vec![Monotonicity::Increasing; exprs.len()];
            build(called_name, name, sign, Curvature::Concave, monos, false, exprs)
        }
        AtomKind::Sum => {
            let exprs = to_exprs(atom, args)?;
            let sign = exprs.iter().fold(Sign::Zero, |acc, e| acc.add(e.sign()));
            let monos = vec![Monotonicity::Increasing; exprs.len()];
            build(called_name, name, sign, Curvature::Affine, monos, false, exprs)
        }
        AtomKind::GeoMean => {
            let exprs = to_exprs(atom, args)?;
            if exprs.iter().any(|e| e.sign() == Sign::Negative) {
                return Err(DcpError::RejectsNegative(atom));
            }
            let monos = vec![Monotonicity::Increasing; exprs.len()];
            build(called_name, name, Sign::Positive, Curvature::Concave, monos, false, exprs)
        }
        AtomKind::Sqrt => {
            let exprs = to_exprs(atom, args)?;
            check_arity(atom, &exprs, 1)?;
            if exprs[0].sign() == Sign::Negative {
                return Err(DcpError::RejectsNegative(atom));
            }
            let monos = vec![Monotonicity::Increasing; exprs.len()];
            build(called_name, name, Sign::Positive, Curvature::Concave, monos, false, exprs)
        }
        AtomKind::Log => {
            let exprs = to_exprs(atom, args)?;
            check_arity(atom, &exprs, 1)?;
            if matches!(exprs[0].sign(), Sign::Negative | Sign::Zero) {
                return Err(DcpError::RequiresPositive(atom));
            }
            let monos = vec![Monotonicity::Increasing; exprs.len()];
            build(called_name, name, Sign::Unknown, Curvature::Concave, monos, false, exprs)
        }
        AtomKind::LogNormcdf => {
            let exprs = to_exprs(atom, args)?;
            check_arity(atom, &exprs, 1)?;
            let monos = vec![Monotonicity::Increasing; exprs.len()];
            build(called_name, name, Sign::Unknown, Curvature::Concave, monos, false, exprs)
        }
        AtomKind::InvPos => {
            let exprs = to_exprs(atom, args)?;
            check_arity(atom, &exprs, 1)?;
            if matches!(exprs[0].sign(), Sign::Negative | Sign::Zero) {
                return Err(DcpError::RequiresPositive(atom));
            }
            let monos = vec![Monotonicity::Decreasing; exprs.len()];
            build(called_name, name, Sign::Positive, Curvature::Convex, monos, false, exprs)
        }
        AtomKind::Entr => {
            let exprs = to_exprs(atom, args)?;
            check_arity(atom, &exprs, 1)?;
            let monos = vec![Monotonicity::Nonmonotonic; exprs.len()];
            build(called_name, name, Sign::Unknown, Curvature::Concave, monos, false, exprs)
        }
        AtomKind::KlDiv => {
            let exprs = to_exprs(atom, args)?;
            check_arity(atom, &exprs, 2)?;
            if exprs.iter().any(|e| e.sign() == Sign::Negative) {
                return Err(DcpError::RejectsNegative(atom));
            }
            if (exprs[0].sign() == Sign::Zero) != (exprs[1].sign() == Sign::Zero) {
                return Err(DcpError::KlDivZeroMismatch);
            }
            let monos = vec![Monotonicity::Nonmonotonic; exprs.len()];
            build(called_name, name, Sign::Unknown, Curvature::Convex, monos, false, exprs)
        }
        AtomKind::RelEntr => {
            let exprs = to_exprs(atom, args)?;
            check_arity(atom, &exprs, 2)?;
            let monos = vec![Monotonicity::Nonmonotonic; exprs.len()];
            build(called_name, name, Sign::Unknown, Curvature::Convex, monos, false, exprs)
        }

        AtomKind::PowP => {
            let p = pop_p(&mut args, atom)?;
            let exprs = to_exprs(atom, args)?;
            check_arity(atom, &exprs, 1)?;
            let arg_sign = exprs[0].sign();
            let (sign, curvature, mono) = if p <= 0.0 {
                (Sign::Positive, Curvature::Convex, Monotonicity::Decreasing)
            } else if p <= 1.0 {
                (arg_sign, Curvature::Concave, Monotonicity::Increasing)
            } else {
                (Sign::Positive, Curvature::Convex, sign_monotonicity(arg_sign))
            };
            build(called_name, name, sign, curvature, vec![mono], false, exprs)
        }
        AtomKind::PowAbs => {
            pop_exponent(&mut args, atom)?;
            let exprs = to_exprs(atom, args)?;
            check_arity(atom, &exprs, 1)?;
            let monos = sign_monotonicities(&exprs);
            build(called_name, name, Sign::Positive, Curvature::Convex, monos, false, exprs)
        }

        AtomKind::QuadOverLin => {
            let exprs = to_exprs(atom, args)?;
            if exprs.len() < 2 {
                return Err(DcpError::QuadOverLinArity);
            }
            let divisor_sign = exprs[exprs.len() - 1].sign();
            if matches!(divisor_sign, Sign::Negative | Sign::Zero) {
                return Err(DcpError::QuadOverLinDivisor);
            }
            let mut monos = sign_monotonicities(&exprs[..exprs.len() - 1]);
            monos.push(Monotonicity::Decreasing);
            build(called_name, name, Sign::Positive, Curvature::Convex, monos, false, exprs)
        }
    }
}

/// Rendered call text, all arguments included.
fn call_text(called_name: &str, args: &[AtomArg]) -> String {
    let mut name = String::from(called_name);
    name.push('(');
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            name.push_str(", ");
        }
        name.push_str(arg.text());
    }
    name.push(')');
    name
}

/// Compose the function with its arguments and assemble the node.
///
/// Each argument's contribution is the composition rule applied to the
/// function's signed curvature; with `clamp`, an argument of nonpositive sign
/// contributes constant curvature instead (the function is identically zero
/// there). A non-convex contribution records an indexed violation.
fn build(
    called_name: &str,
    name: String,
    sign: Sign,
    signed_curvature: Curvature,
    monos: Vec<Monotonicity>,
    clamp: bool,
    exprs: Vec<Expression>,
) -> Result<Expression> {
    if exprs.is_empty() || exprs.len() != monos.len() {
        return Err(DcpError::MonotonicityMismatch);
    }
    let mut curvature = Curvature::Constant;
    let mut errors = Vec::new();
    for (i, (arg, mono)) in exprs.iter().zip(&monos).enumerate() {
        let contribution = if clamp && arg.sign() <= Sign::Zero {
            Curvature::Constant
        } else {
            mono.compose(signed_curvature, arg.curvature())
        };
        if contribution == Curvature::Nonconvex {
            errors.push(Violation::Composition {
                func_curvature: signed_curvature,
                monotonicity: *mono,
                arg_curvature: arg.curvature(),
                arg_sign: arg.sign(),
                index: i,
            });
        }
        curvature = curvature.add(contribution);
    }
    Ok(Expression::atom_application(
        curvature,
        sign,
        name,
        called_name.to_string(),
        exprs,
        errors,
        monos,
    ))
}

/// Increasing over positive or zero arguments, decreasing over negative ones,
/// nonmonotonic when the sign is unknown.
fn sign_monotonicity(sign: Sign) -> Monotonicity {
    match sign {
        Sign::Positive | Sign::Zero => Monotonicity::Increasing,
        Sign::Negative => Monotonicity::Decreasing,
        Sign::Unknown => Monotonicity::Nonmonotonic,
    }
}

fn sign_monotonicities(exprs: &[Expression]) -> Vec<Monotonicity> {
    exprs
        .iter()
        .map(|e| sign_monotonicity(e.sign()))
        .collect()
}

/// Sign of a clamp-family atom: zero over each nonpositive argument,
/// positive otherwise, folded with sign addition.
fn clamped_sign(exprs: &[Expression]) -> Sign {
    exprs.iter().fold(Sign::Zero, |acc, e| {
        let term = if e.sign() <= Sign::Zero {
            Sign::Zero
        } else {
            Sign::Positive
        };
        acc.add(term)
    })
}

/// Convert the remaining arguments to expressions. Numeric literals become
/// constants; `Inf` is never a valid expression argument.
fn to_exprs(atom: &'static str, args: Vec<AtomArg>) -> Result<Vec<Expression>> {
    args.into_iter()
        .map(|arg| match arg {
            AtomArg::Expr(e) => Ok(e),
            AtomArg::Number { value, text } => Ok(Expression::constant_named(value, text)),
            AtomArg::Inf => Err(DcpError::InvalidArgument {
                atom,
                given: "Inf".to_string(),
            }),
        })
        .collect()
}

fn check_arity(atom: &'static str, exprs: &[Expression], expected: usize) -> Result<()> {
    if exprs.len() == expected {
        Ok(())
    } else {
        Err(DcpError::WrongArity { atom, expected })
    }
}

/// Optional trailing huber threshold, defaulting to 1; must be positive.
fn pop_m(args: &mut Vec<AtomArg>, atom: &'static str) -> Result<()> {
    match args.last() {
        Some(AtomArg::Number { value, text }) => {
            if *value > 0.0 {
                args.pop();
                Ok(())
            } else {
                Err(DcpError::InvalidHuberM {
                    atom,
                    given: text.clone(),
                })
            }
        }
        Some(AtomArg::Inf) => Err(DcpError::InvalidHuberM {
            atom,
            given: "Inf".to_string(),
        }),
        _ => Ok(()),
    }
}

/// Optional trailing norm exponent, defaulting to 2; must be >= 1 or Inf.
fn pop_norm_p(args: &mut Vec<AtomArg>) -> Result<()> {
    match args.last() {
        Some(AtomArg::Number { value, text }) => {
            if *value >= 1.0 {
                args.pop();
                Ok(())
            } else {
                Err(DcpError::InvalidNormP(text.clone()))
            }
        }
        Some(AtomArg::Inf) => {
            args.pop();
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Required trailing count for the largest/smallest family.
fn pop_k(args: &mut Vec<AtomArg>, atom: &'static str) -> Result<()> {
    match args.pop() {
        Some(AtomArg::Number { .. }) => Ok(()),
        _ => Err(DcpError::InvalidK(atom)),
    }
}

/// Required trailing exponent for pow_p; any number is accepted.
fn pop_p(args: &mut Vec<AtomArg>, atom: &'static str) -> Result<f64> {
    match args.pop() {
        Some(AtomArg::Number { value, .. }) => Ok(value),
        Some(other) => Err(DcpError::InvalidPowP(other.text().to_string())),
        None => Err(DcpError::NoArguments(atom.to_string())),
    }
}

/// Required trailing exponent for pow_abs/pow_pos; must be >= 1.
fn pop_exponent(args: &mut Vec<AtomArg>, atom: &'static str) -> Result<()> {
    match args.pop() {
        Some(AtomArg::Number { value, text }) => {
            if value >= 1.0 {
                Ok(())
            } else {
                Err(DcpError::PowExponentTooSmall { atom, given: text })
            }
        }
        Some(other) => Err(DcpError::PowExponentTooSmall {
            atom,
            given: other.text().to_string(),
        }),
        None => Err(DcpError::NoArguments(atom.to_string())),
    }
}
