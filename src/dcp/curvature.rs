//! Curvature classification for DCP analysis.
//!
//! Curvature is the central lattice of the discipline. The 3-bit encoding
//! makes addition a bitwise OR: CONSTANT is the identity, AFFINE absorbs into
//! any nonconstant value, and CONVEX joined with CONCAVE is NONCONVEX.

use crate::dcp::Sign;

/// Curvature of an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Curvature {
    Constant,
    Affine,
    Convex,
    Concave,
    Nonconvex,
}

impl Curvature {
    /// 3-bit encoding used by [`Curvature::add`].
    fn bits(self) -> u8 {
        match self {
            Curvature::Constant => 0,
            Curvature::Affine => 1,
            Curvature::Convex => 3,
            Curvature::Concave => 5,
            Curvature::Nonconvex => 7,
        }
    }

    fn from_bits(bits: u8) -> Curvature {
        match bits {
            0 => Curvature::Constant,
            1 => Curvature::Affine,
            3 => Curvature::Convex,
            5 => Curvature::Concave,
            _ => Curvature::Nonconvex,
        }
    }

    /// Curvature of a sum (lattice join).
    pub fn add(self, other: Curvature) -> Curvature {
        Curvature::from_bits(self.bits() | other.bits())
    }

    /// Curvature of a difference: `a - b = a + (-b)`.
    pub fn sub(self, other: Curvature) -> Curvature {
        self.add(other.neg())
    }

    /// Curvature of a negation.
    pub fn neg(self) -> Curvature {
        self.sign_mult(Sign::Negative)
    }

    /// Effect on curvature of scaling by a constant with the given sign,
    /// e.g. negative constant * convex == concave.
    pub fn sign_mult(self, sign: Sign) -> Curvature {
        match sign {
            Sign::Positive => self,
            Sign::Zero => Curvature::Constant,
            Sign::Negative => match self {
                Curvature::Convex => Curvature::Concave,
                Curvature::Concave => Curvature::Convex,
                other => other,
            },
            Sign::Unknown => match self {
                Curvature::Convex | Curvature::Concave => Curvature::Nonconvex,
                other => other,
            },
        }
    }

    /// Curvature of a product. DCP only accepts products where one side is
    /// constant; everything else is nonconvex.
    pub fn mul(self, other: Curvature) -> Curvature {
        if self == Curvature::Constant || other == Curvature::Constant {
            self.add(other)
        } else {
            Curvature::Nonconvex
        }
    }

    /// Curvature of a quotient. Only division by a constant is accepted.
    pub fn div(self, other: Curvature) -> Curvature {
        if other == Curvature::Constant {
            self.add(other)
        } else {
            Curvature::Nonconvex
        }
    }

    /// Join over a sequence of curvatures, starting from CONSTANT.
    pub fn sum<I: IntoIterator<Item = Curvature>>(curvatures: I) -> Curvature {
        curvatures
            .into_iter()
            .fold(Curvature::Constant, Curvature::add)
    }

    /// Affine, counting constant expressions as affine.
    pub fn is_affine(self) -> bool {
        matches!(self, Curvature::Constant | Curvature::Affine)
    }

    /// Convex, counting affine and constant expressions as convex.
    pub fn is_convex(self) -> bool {
        self.is_affine() || self == Curvature::Convex
    }

    /// Concave, counting affine and constant expressions as concave.
    pub fn is_concave(self) -> bool {
        self.is_affine() || self == Curvature::Concave
    }

    /// Human-readable token used by diagnostics and the wire form.
    pub fn name(self) -> &'static str {
        match self {
            Curvature::Constant => "constant",
            Curvature::Affine => "affine",
            Curvature::Convex => "convex",
            Curvature::Concave => "concave",
            Curvature::Nonconvex => "non-convex",
        }
    }

    /// Inverse of [`Curvature::name`], for wire-form decoding.
    pub fn from_name(name: &str) -> Option<Curvature> {
        match name {
            "constant" => Some(Curvature::Constant),
            "affine" => Some(Curvature::Affine),
            "convex" => Some(Curvature::Convex),
            "concave" => Some(Curvature::Concave),
            "non-convex" => Some(Curvature::Nonconvex),
            _ => None,
        }
    }
}
