//! Monotonicity values and the DCP composition rule.

use crate::dcp::Curvature;

/// Monotonicity of a function in one argument position.
///
/// "Increasing" and "decreasing" mean non-decreasing and non-increasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Monotonicity {
    Increasing,
    Decreasing,
    Nonmonotonic,
}

impl Monotonicity {
    /// The DCP composition rule: curvature contributed by one argument of a
    /// function application.
    ///
    /// A constant argument contributes nothing; an affine argument passes the
    /// function's own curvature through; otherwise the argument's curvature
    /// must line up with the function's monotonicity in that position, and a
    /// nonmonotonic position accepts nothing but affine.
    pub fn compose(self, func: Curvature, arg: Curvature) -> Curvature {
        if arg == Curvature::Constant {
            Curvature::Constant
        } else if arg == Curvature::Affine {
            func
        } else {
            match self {
                Monotonicity::Increasing => func.add(arg),
                Monotonicity::Decreasing => func.sub(arg),
                Monotonicity::Nonmonotonic => Curvature::Nonconvex,
            }
        }
    }

    /// Human-readable token used by diagnostics and the wire form.
    pub fn name(self) -> &'static str {
        match self {
            Monotonicity::Increasing => "non-decreasing",
            Monotonicity::Decreasing => "non-increasing",
            Monotonicity::Nonmonotonic => "non-monotonic",
        }
    }

    /// Inverse of [`Monotonicity::name`], for wire-form decoding.
    pub fn from_name(name: &str) -> Option<Monotonicity> {
        match name {
            "non-decreasing" => Some(Monotonicity::Increasing),
            "non-increasing" => Some(Monotonicity::Decreasing),
            "non-monotonic" => Some(Monotonicity::Nonmonotonic),
            _ => None,
        }
    }
}
