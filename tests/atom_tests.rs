//! Integration tests for the atom library.

use pretty_assertions::assert_eq;

use dcparse::atoms::{apply, AtomArg, AtomKind};
use dcparse::dcp::{Curvature, Sign};
use dcparse::error::DcpError;
use dcparse::expr::Expression;

fn const_exp() -> AtomArg {
    AtomArg::Expr(Expression::new(Curvature::Constant, Sign::Unknown, "const_exp"))
}

fn aff_exp() -> AtomArg {
    AtomArg::Expr(Expression::new(Curvature::Affine, Sign::Unknown, "aff_exp"))
}

fn cvx_exp() -> AtomArg {
    AtomArg::Expr(Expression::new(Curvature::Convex, Sign::Unknown, "convex_exp"))
}

fn conc_exp() -> AtomArg {
    AtomArg::Expr(Expression::new(Curvature::Concave, Sign::Unknown, "conc_exp"))
}

fn noncvx_exp() -> AtomArg {
    AtomArg::Expr(Expression::new(Curvature::Nonconvex, Sign::Unknown, "noncvx_exp"))
}

fn cvx_pos() -> AtomArg {
    AtomArg::Expr(Expression::new(Curvature::Convex, Sign::Positive, "cvx_pos"))
}

fn cvx_neg() -> AtomArg {
    AtomArg::Expr(Expression::new(Curvature::Convex, Sign::Negative, "cvx_neg"))
}

fn conc_pos() -> AtomArg {
    AtomArg::Expr(Expression::new(Curvature::Concave, Sign::Positive, "conc_pos"))
}

fn conc_neg() -> AtomArg {
    AtomArg::Expr(Expression::new(Curvature::Concave, Sign::Negative, "conc_neg"))
}

fn constant(value: f64) -> AtomArg {
    AtomArg::Expr(Expression::constant(value))
}

fn variable(name: &str) -> AtomArg {
    AtomArg::Expr(Expression::variable(name, Sign::Unknown))
}

fn number(value: f64, text: &str) -> AtomArg {
    AtomArg::number(value, text)
}

/// Curvature of an atom applied to the given arguments.
fn curvature_of(kind: AtomKind, args: Vec<AtomArg>) -> Curvature {
    apply(kind, kind.name(), args).unwrap().curvature()
}

/// Sign of an atom applied to the given arguments.
fn sign_of(kind: AtomKind, args: Vec<AtomArg>) -> Sign {
    apply(kind, kind.name(), args).unwrap().sign()
}

/// The error message from an application expected to fail.
fn fault_of(kind: AtomKind, args: Vec<AtomArg>) -> String {
    apply(kind, kind.name(), args).unwrap_err().to_string()
}

#[test]
fn test_square() {
    use AtomKind::Square;
    assert_eq!(curvature_of(Square, vec![cvx_exp()]), Curvature::Nonconvex);
    assert_eq!(curvature_of(Square, vec![conc_neg()]), Curvature::Convex);
    assert_eq!(curvature_of(Square, vec![cvx_pos()]), Curvature::Convex);
    assert_eq!(sign_of(Square, vec![cvx_neg()]), Sign::Positive);
}

#[test]
fn test_log_sum_exp() {
    use AtomKind::LogSumExp;
    assert_eq!(
        curvature_of(LogSumExp, vec![cvx_exp(), cvx_exp()]),
        Curvature::Convex
    );
    assert_eq!(
        curvature_of(LogSumExp, vec![cvx_exp(), aff_exp()]),
        Curvature::Convex
    );
    assert_eq!(
        curvature_of(LogSumExp, vec![conc_exp(), cvx_exp()]),
        Curvature::Nonconvex
    );
    assert_eq!(
        fault_of(LogSumExp, vec![]),
        "No arguments given to log_sum_exp."
    );
}

#[test]
fn test_max() {
    use AtomKind::Max;
    assert_eq!(sign_of(Max, vec![cvx_pos(), cvx_neg()]), Sign::Positive);
    assert_eq!(
        curvature_of(Max, vec![cvx_pos(), cvx_neg()]),
        Curvature::Convex
    );
    assert_eq!(sign_of(Max, vec![constant(0.0), cvx_neg()]), Sign::Zero);
    assert_eq!(curvature_of(Max, vec![conc_exp()]), Curvature::Nonconvex);
    assert_eq!(
        sign_of(Max, vec![variable("a"), constant(2.0)]),
        Sign::Positive
    );
}

#[test]
fn test_min() {
    use AtomKind::Min;
    assert_eq!(sign_of(Min, vec![conc_pos(), conc_neg()]), Sign::Negative);
    assert_eq!(
        curvature_of(Min, vec![conc_pos(), conc_neg()]),
        Curvature::Concave
    );
    assert_eq!(sign_of(Min, vec![constant(0.0), conc_pos()]), Sign::Zero);
    assert_eq!(curvature_of(Min, vec![cvx_exp()]), Curvature::Nonconvex);
    assert_eq!(
        sign_of(Min, vec![variable("a"), constant(-2.0)]),
        Sign::Negative
    );
}

#[test]
fn test_sum() {
    use AtomKind::Sum;
    assert_eq!(
        sign_of(Sum, vec![constant(2.0), constant(0.0)]),
        Sign::Positive
    );
    assert_eq!(
        curvature_of(Sum, vec![cvx_exp(), cvx_exp(), aff_exp()]),
        Curvature::Convex
    );
    assert_eq!(
        curvature_of(Sum, vec![conc_exp(), cvx_exp(), aff_exp()]),
        Curvature::Nonconvex
    );
    assert_eq!(
        curvature_of(Sum, vec![constant(2.0), constant(0.0), aff_exp()]),
        Curvature::Affine
    );
}

#[test]
fn test_log() {
    use AtomKind::Log;
    assert_eq!(curvature_of(Log, vec![conc_exp()]), Curvature::Concave);
    assert_eq!(curvature_of(Log, vec![cvx_exp()]), Curvature::Nonconvex);
    assert_eq!(
        fault_of(Log, vec![constant(-2.0)]),
        "log only accepts positive arguments."
    );
}

#[test]
fn test_geo_mean() {
    use AtomKind::GeoMean;
    assert_eq!(
        curvature_of(GeoMean, vec![conc_exp(), aff_exp(), constant(2.0)]),
        Curvature::Concave
    );
    assert_eq!(
        sign_of(GeoMean, vec![conc_exp(), aff_exp(), constant(2.0)]),
        Sign::Positive
    );
    assert_eq!(
        curvature_of(GeoMean, vec![conc_exp(), aff_exp(), cvx_exp()]),
        Curvature::Nonconvex
    );
    assert_eq!(
        fault_of(GeoMean, vec![constant(-2.0)]),
        "geo_mean does not accept negative arguments."
    );
}

#[test]
fn test_sqrt() {
    use AtomKind::Sqrt;
    assert_eq!(curvature_of(Sqrt, vec![conc_exp()]), Curvature::Concave);
    assert_eq!(sign_of(Sqrt, vec![aff_exp()]), Sign::Positive);
    assert_eq!(curvature_of(Sqrt, vec![cvx_exp()]), Curvature::Nonconvex);
    assert!(apply(Sqrt, "sqrt", vec![constant(-2.0)]).is_err());
}

#[test]
fn test_log_normcdf() {
    use AtomKind::LogNormcdf;
    assert_eq!(
        curvature_of(LogNormcdf, vec![conc_exp()]),
        Curvature::Concave
    );
    assert_eq!(
        curvature_of(LogNormcdf, vec![cvx_exp()]),
        Curvature::Nonconvex
    );
    assert_eq!(sign_of(LogNormcdf, vec![cvx_exp()]), Sign::Unknown);
}

#[test]
fn test_exp() {
    use AtomKind::Exp;
    assert_eq!(curvature_of(Exp, vec![cvx_exp()]), Curvature::Convex);
    assert_eq!(curvature_of(Exp, vec![conc_exp()]), Curvature::Nonconvex);
    assert_eq!(sign_of(Exp, vec![cvx_exp()]), Sign::Positive);
}

#[test]
fn test_norm() {
    use AtomKind::Norm;
    assert_eq!(
        curvature_of(
            Norm,
            vec![cvx_pos(), aff_exp(), const_exp(), number(1341.143, "1341.143")]
        ),
        Curvature::Convex
    );
    assert_eq!(
        sign_of(Norm, vec![cvx_pos(), aff_exp(), const_exp(), number(2.0, "2")]),
        Sign::Positive
    );
    assert_eq!(
        curvature_of(Norm, vec![conc_neg(), AtomArg::Inf]),
        Curvature::Convex
    );
    assert_eq!(
        curvature_of(Norm, vec![cvx_neg(), AtomArg::Inf]),
        Curvature::Nonconvex
    );
    assert_eq!(
        fault_of(Norm, vec![constant(-2.0), number(0.0, "0")]),
        "Invalid p-norm, p = 0"
    );
}

#[test]
fn test_abs() {
    use AtomKind::Abs;
    assert_eq!(curvature_of(Abs, vec![aff_exp()]), Curvature::Convex);
    assert_eq!(curvature_of(Abs, vec![conc_neg()]), Curvature::Convex);
    assert_eq!(curvature_of(Abs, vec![cvx_neg()]), Curvature::Nonconvex);
    assert_eq!(sign_of(Abs, vec![noncvx_exp()]), Sign::Positive);
}

#[test]
fn test_entr() {
    use AtomKind::Entr;
    assert_eq!(curvature_of(Entr, vec![aff_exp()]), Curvature::Concave);
    assert_eq!(curvature_of(Entr, vec![conc_exp()]), Curvature::Nonconvex);
    assert_eq!(sign_of(Entr, vec![cvx_exp()]), Sign::Unknown);
}

#[test]
fn test_huber() {
    use AtomKind::Huber;
    assert_eq!(curvature_of(Huber, vec![aff_exp()]), Curvature::Convex);
    assert_eq!(
        curvature_of(Huber, vec![conc_neg(), number(3.0, "3")]),
        Curvature::Convex
    );
    assert_eq!(
        curvature_of(Huber, vec![cvx_neg(), number(2.0, "2")]),
        Curvature::Nonconvex
    );
    assert_eq!(sign_of(Huber, vec![noncvx_exp()]), Sign::Positive);
    assert_eq!(
        fault_of(Huber, vec![constant(-2.0), number(0.0, "0")]),
        "Invalid M for huber function, M = 0"
    );
}

#[test]
fn test_berhu() {
    use AtomKind::Berhu;
    assert_eq!(curvature_of(Berhu, vec![aff_exp()]), Curvature::Convex);
    assert_eq!(
        curvature_of(Berhu, vec![conc_neg(), number(3.0, "3")]),
        Curvature::Convex
    );
    assert_eq!(
        curvature_of(Berhu, vec![cvx_neg(), number(2.0, "2")]),
        Curvature::Nonconvex
    );
    assert_eq!(sign_of(Berhu, vec![noncvx_exp()]), Sign::Positive);
    assert_eq!(
        fault_of(Berhu, vec![constant(-2.0), number(0.0, "0")]),
        "Invalid M for berhu function, M = 0"
    );
}

#[test]
fn test_huber_pos() {
    use AtomKind::HuberPos;
    assert_eq!(curvature_of(HuberPos, vec![aff_exp()]), Curvature::Convex);
    assert_eq!(
        curvature_of(HuberPos, vec![conc_neg(), number(3.0, "3")]),
        Curvature::Constant
    );
    assert_eq!(
        curvature_of(HuberPos, vec![cvx_exp(), number(2.0, "2")]),
        Curvature::Convex
    );
    assert_eq!(sign_of(HuberPos, vec![noncvx_exp()]), Sign::Positive);
    assert_eq!(
        fault_of(HuberPos, vec![constant(-2.0), number(0.0, "0")]),
        "Invalid M for huber_pos function, M = 0"
    );
}

#[test]
fn test_huber_circ() {
    use AtomKind::HuberCirc;
    assert_eq!(
        curvature_of(HuberCirc, vec![aff_exp(), conc_neg()]),
        Curvature::Convex
    );
    assert_eq!(
        curvature_of(HuberCirc, vec![conc_neg(), cvx_neg(), number(3.0, "3")]),
        Curvature::Nonconvex
    );
    assert_eq!(
        curvature_of(HuberCirc, vec![aff_exp(), cvx_pos(), number(2.0, "2")]),
        Curvature::Convex
    );
    assert_eq!(sign_of(HuberCirc, vec![noncvx_exp()]), Sign::Positive);
    assert_eq!(
        fault_of(HuberCirc, vec![constant(-2.0), number(0.0, "0")]),
        "Invalid M for huber_circ function, M = 0"
    );
}

#[test]
fn test_inv_pos() {
    use AtomKind::InvPos;
    assert_eq!(curvature_of(InvPos, vec![cvx_exp()]), Curvature::Nonconvex);
    assert_eq!(curvature_of(InvPos, vec![conc_exp()]), Curvature::Convex);
    assert_eq!(
        fault_of(InvPos, vec![constant(-2.0)]),
        "inv_pos only accepts positive arguments."
    );
}

#[test]
fn test_kl_div() {
    use AtomKind::KlDiv;
    assert_eq!(
        curvature_of(KlDiv, vec![aff_exp(), aff_exp()]),
        Curvature::Convex
    );
    assert_eq!(
        curvature_of(KlDiv, vec![conc_exp(), const_exp()]),
        Curvature::Nonconvex
    );
    assert_eq!(sign_of(KlDiv, vec![cvx_exp(), noncvx_exp()]), Sign::Unknown);
    assert_eq!(
        fault_of(KlDiv, vec![constant(-2.0), constant(-1.0)]),
        "kl_div does not accept negative arguments."
    );
    assert_eq!(
        fault_of(KlDiv, vec![constant(0.0), constant(1.0)]),
        "kl_div(x,y) requires that x == 0 if and only if y == 0."
    );
}

#[test]
fn test_norm_largest() {
    use AtomKind::NormLargest;
    assert_eq!(
        curvature_of(
            NormLargest,
            vec![cvx_pos(), aff_exp(), conc_neg(), number(2.0, "2")]
        ),
        Curvature::Convex
    );
    assert_eq!(
        sign_of(
            NormLargest,
            vec![cvx_pos(), aff_exp(), const_exp(), number(2.0, "2")]
        ),
        Sign::Positive
    );
    assert_eq!(
        curvature_of(NormLargest, vec![conc_pos(), number(1.0, "1")]),
        Curvature::Nonconvex
    );
    assert_eq!(
        fault_of(NormLargest, vec![constant(-2.0), aff_exp()]),
        "Invalid value for k in norm_largest(*vector,k)."
    );
}

#[test]
fn test_pos() {
    use AtomKind::Pos;
    assert_eq!(curvature_of(Pos, vec![conc_exp()]), Curvature::Nonconvex);
    assert_eq!(curvature_of(Pos, vec![conc_neg()]), Curvature::Constant);
    assert_eq!(curvature_of(Pos, vec![cvx_exp()]), Curvature::Convex);
    assert_eq!(sign_of(Pos, vec![cvx_pos()]), Sign::Positive);
    assert_eq!(sign_of(Pos, vec![conc_neg()]), Sign::Zero);
}

#[test]
fn test_pow_p() {
    use AtomKind::PowP;
    assert_eq!(
        curvature_of(PowP, vec![cvx_pos(), number(-1.0, "-1")]),
        Curvature::Nonconvex
    );
    assert_eq!(
        curvature_of(PowP, vec![conc_neg(), number(-1.0, "-1")]),
        Curvature::Convex
    );
    assert_eq!(
        sign_of(PowP, vec![cvx_pos(), number(-1.0, "-1")]),
        Sign::Positive
    );

    assert_eq!(
        curvature_of(PowP, vec![cvx_pos(), number(0.5, "0.5")]),
        Curvature::Nonconvex
    );
    assert_eq!(
        sign_of(PowP, vec![cvx_pos(), number(0.5, "0.5")]),
        Sign::Positive
    );
    assert_eq!(
        sign_of(PowP, vec![noncvx_exp(), number(0.5, "0.5")]),
        Sign::Unknown
    );
    assert_eq!(
        curvature_of(PowP, vec![conc_neg(), number(0.5, "0.5")]),
        Curvature::Concave
    );
    assert_eq!(
        sign_of(PowP, vec![conc_neg(), number(0.5, "0.5")]),
        Sign::Negative
    );

    assert_eq!(
        curvature_of(PowP, vec![cvx_pos(), number(2.0, "2")]),
        Curvature::Convex
    );
    assert_eq!(
        curvature_of(PowP, vec![conc_neg(), number(2.0, "2")]),
        Curvature::Convex
    );
    assert_eq!(
        curvature_of(PowP, vec![cvx_neg(), number(2.0, "2")]),
        Curvature::Nonconvex
    );
    assert_eq!(
        curvature_of(PowP, vec![conc_pos(), number(2.0, "2")]),
        Curvature::Nonconvex
    );
    assert_eq!(
        sign_of(PowP, vec![noncvx_exp(), number(2.0, "2")]),
        Sign::Positive
    );

    assert_eq!(
        fault_of(PowP, vec![constant(-2.0), aff_exp()]),
        "Invalid p for pow_p(x,p), p = aff_exp."
    );
}

#[test]
fn test_pow_abs() {
    use AtomKind::PowAbs;
    assert_eq!(
        curvature_of(PowAbs, vec![cvx_pos(), number(2.0, "2")]),
        Curvature::Convex
    );
    assert_eq!(
        curvature_of(PowAbs, vec![conc_neg(), number(2.0, "2")]),
        Curvature::Convex
    );
    assert_eq!(
        curvature_of(PowAbs, vec![cvx_neg(), number(2.0, "2")]),
        Curvature::Nonconvex
    );
    assert_eq!(
        curvature_of(PowAbs, vec![conc_pos(), number(2.0, "2")]),
        Curvature::Nonconvex
    );
    assert_eq!(
        sign_of(PowAbs, vec![noncvx_exp(), number(2.0, "2")]),
        Sign::Positive
    );
    assert_eq!(
        fault_of(PowAbs, vec![constant(-2.0), number(0.0, "0")]),
        "Must have p >= 1 for pow_abs(x,p), but have p = 0."
    );
}

#[test]
fn test_pow_pos() {
    use AtomKind::PowPos;
    assert_eq!(
        curvature_of(PowPos, vec![cvx_pos(), number(2.0, "2")]),
        Curvature::Convex
    );
    assert_eq!(
        curvature_of(PowPos, vec![conc_neg(), number(2.0, "2")]),
        Curvature::Constant
    );
    assert_eq!(
        curvature_of(PowPos, vec![conc_pos(), number(2.0, "2")]),
        Curvature::Nonconvex
    );
    assert_eq!(
        sign_of(PowPos, vec![noncvx_exp(), number(2.0, "2")]),
        Sign::Positive
    );
    assert_eq!(
        fault_of(PowPos, vec![constant(-2.0), number(0.0, "0")]),
        "Must have p >= 1 for pow_pos(x,p), but have p = 0."
    );
}

#[test]
fn test_square_abs() {
    use AtomKind::SquareAbs;
    assert_eq!(curvature_of(SquareAbs, vec![cvx_pos()]), Curvature::Convex);
    assert_eq!(curvature_of(SquareAbs, vec![conc_neg()]), Curvature::Convex);
    assert_eq!(
        curvature_of(SquareAbs, vec![conc_pos()]),
        Curvature::Nonconvex
    );
    assert_eq!(sign_of(SquareAbs, vec![noncvx_exp()]), Sign::Positive);
}

#[test]
fn test_square_pos() {
    use AtomKind::SquarePos;
    assert_eq!(curvature_of(SquarePos, vec![cvx_exp()]), Curvature::Convex);
    assert_eq!(curvature_of(SquarePos, vec![conc_neg()]), Curvature::Constant);
    assert_eq!(
        curvature_of(SquarePos, vec![conc_pos()]),
        Curvature::Nonconvex
    );
    assert_eq!(sign_of(SquarePos, vec![noncvx_exp()]), Sign::Positive);
}

#[test]
fn test_rel_entr() {
    use AtomKind::RelEntr;
    assert_eq!(
        curvature_of(RelEntr, vec![aff_exp(), const_exp()]),
        Curvature::Convex
    );
    assert_eq!(
        curvature_of(RelEntr, vec![conc_exp(), aff_exp()]),
        Curvature::Nonconvex
    );
    assert_eq!(
        sign_of(RelEntr, vec![cvx_exp(), noncvx_exp()]),
        Sign::Unknown
    );
}

#[test]
fn test_quad_over_lin() {
    use AtomKind::QuadOverLin;
    assert_eq!(
        curvature_of(QuadOverLin, vec![cvx_pos(), conc_exp()]),
        Curvature::Convex
    );
    assert_eq!(
        curvature_of(
            QuadOverLin,
            vec![cvx_pos(), aff_exp(), conc_neg(), conc_exp()]
        ),
        Curvature::Convex
    );
    assert_eq!(
        curvature_of(QuadOverLin, vec![conc_neg(), cvx_exp()]),
        Curvature::Nonconvex
    );
    assert_eq!(
        curvature_of(QuadOverLin, vec![cvx_exp(), cvx_pos(), conc_exp()]),
        Curvature::Nonconvex
    );
    assert_eq!(
        curvature_of(QuadOverLin, vec![noncvx_exp(), cvx_pos(), conc_exp()]),
        Curvature::Nonconvex
    );
    assert_eq!(
        sign_of(QuadOverLin, vec![noncvx_exp(), cvx_pos(), conc_exp()]),
        Sign::Positive
    );
    assert_eq!(
        fault_of(QuadOverLin, vec![cvx_pos()]),
        "quad_over_lin called with too few arguments."
    );
    assert_eq!(
        fault_of(QuadOverLin, vec![cvx_pos(), cvx_neg()]),
        "quad_over_lin only accepts positive divisor arguments."
    );
}

#[test]
fn test_sum_square() {
    use AtomKind::SumSquare;
    assert_eq!(
        curvature_of(SumSquare, vec![cvx_pos(), aff_exp(), conc_neg()]),
        Curvature::Convex
    );
    assert_eq!(
        curvature_of(SumSquare, vec![cvx_neg(), aff_exp(), conc_neg()]),
        Curvature::Nonconvex
    );
    assert_eq!(
        curvature_of(SumSquare, vec![conc_neg(), cvx_exp()]),
        Curvature::Nonconvex
    );
    assert_eq!(
        curvature_of(SumSquare, vec![cvx_neg(), conc_neg()]),
        Curvature::Nonconvex
    );
    assert_eq!(
        curvature_of(SumSquare, vec![noncvx_exp(), cvx_pos()]),
        Curvature::Nonconvex
    );
    assert_eq!(
        sign_of(SumSquare, vec![noncvx_exp(), cvx_pos()]),
        Sign::Positive
    );
}

#[test]
fn test_sum_square_abs() {
    use AtomKind::SumSquareAbs;
    assert_eq!(
        curvature_of(SumSquareAbs, vec![cvx_pos(), aff_exp(), conc_neg()]),
        Curvature::Convex
    );
    assert_eq!(
        curvature_of(SumSquareAbs, vec![cvx_neg(), aff_exp(), conc_neg()]),
        Curvature::Nonconvex
    );
    assert_eq!(
        curvature_of(SumSquareAbs, vec![conc_neg(), cvx_neg()]),
        Curvature::Nonconvex
    );
    assert_eq!(
        curvature_of(SumSquareAbs, vec![noncvx_exp(), cvx_pos()]),
        Curvature::Nonconvex
    );
    assert_eq!(
        sign_of(SumSquareAbs, vec![noncvx_exp(), cvx_pos()]),
        Sign::Positive
    );
}

#[test]
fn test_sum_square_pos() {
    use AtomKind::SumSquarePos;
    assert_eq!(
        curvature_of(SumSquarePos, vec![cvx_pos(), aff_exp(), conc_neg()]),
        Curvature::Convex
    );
    assert_eq!(
        curvature_of(SumSquarePos, vec![cvx_neg(), aff_exp(), conc_neg()]),
        Curvature::Convex
    );
    assert_eq!(
        curvature_of(SumSquarePos, vec![conc_neg(), cvx_neg()]),
        Curvature::Constant
    );
    assert_eq!(sign_of(SumSquarePos, vec![conc_neg(), cvx_neg()]), Sign::Zero);
    assert_eq!(
        curvature_of(SumSquarePos, vec![noncvx_exp(), cvx_pos()]),
        Curvature::Nonconvex
    );
    assert_eq!(
        sign_of(SumSquarePos, vec![noncvx_exp(), cvx_pos()]),
        Sign::Positive
    );
}

#[test]
fn test_sum_largest() {
    use AtomKind::SumLargest;
    assert_eq!(
        curvature_of(SumLargest, vec![cvx_pos(), aff_exp(), number(2.0, "2")]),
        Curvature::Convex
    );
    assert_eq!(
        sign_of(SumLargest, vec![cvx_pos(), aff_exp(), number(2.0, "2")]),
        Sign::Unknown
    );
    assert_eq!(
        curvature_of(SumLargest, vec![conc_exp(), number(1.0, "1")]),
        Curvature::Nonconvex
    );
    assert_eq!(
        fault_of(SumLargest, vec![cvx_pos(), aff_exp()]),
        "Invalid value for k in sum_largest(*vector,k)."
    );
}

#[test]
fn test_sum_smallest() {
    use AtomKind::SumSmallest;
    assert_eq!(
        curvature_of(SumSmallest, vec![cvx_exp(), aff_exp(), number(2.0, "2")]),
        Curvature::Concave
    );
    assert_eq!(
        sign_of(SumSmallest, vec![cvx_exp(), aff_exp(), number(2.0, "2")]),
        Sign::Unknown
    );
    assert_eq!(
        curvature_of(SumSmallest, vec![conc_exp(), number(1.0, "1")]),
        Curvature::Nonconvex
    );
    assert_eq!(
        curvature_of(
            SumSmallest,
            vec![cvx_exp(), noncvx_exp(), number(1.0, "1")]
        ),
        Curvature::Nonconvex
    );
    assert_eq!(
        fault_of(SumSmallest, vec![cvx_pos(), aff_exp()]),
        "Invalid value for k in sum_smallest(*vector,k)."
    );
}

#[test]
fn test_call_rendering() {
    let node = apply(
        AtomKind::Norm,
        "norm",
        vec![variable("x"), variable("y"), number(2.0, "2")],
    )
    .unwrap();
    assert_eq!(node.name(), "norm(x, y, 2)");
    assert_eq!(node.short_name(), "norm");
    // The exponent is consumed; only vector arguments become children.
    assert_eq!(node.children().len(), 2);
}

#[test]
fn test_invalid_argument_errors() {
    assert!(matches!(
        apply(AtomKind::Square, "square", vec![variable("x"), AtomArg::Inf]),
        Err(DcpError::WrongArity { .. }) | Err(DcpError::InvalidArgument { .. })
    ));
    assert_eq!(
        apply(AtomKind::Square, "square", vec![]).unwrap_err(),
        DcpError::NoArguments("square".to_string())
    );
}
