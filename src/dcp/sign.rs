//! Sign tracking for DCP analysis.
//!
//! Signs form a small lattice closed under the arithmetic operators. Addition
//! is bitwise OR over a 2-bit encoding, which makes it commutative and
//! idempotent with ZERO as the identity and any positive/negative mix going
//! to UNKNOWN.

use crate::error::{DcpError, Result};

/// Sign of an expression.
///
/// The variant order is significant: it is the total order used by min/max
/// style sign inference (`NEGATIVE < ZERO < UNKNOWN < POSITIVE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    /// Expression is always < 0.
    Negative,
    /// Expression is always == 0.
    Zero,
    /// Sign is unknown.
    Unknown,
    /// Expression is always > 0.
    Positive,
}

impl Sign {
    /// 2-bit encoding used by [`Sign::add`].
    fn bits(self) -> u8 {
        match self {
            Sign::Zero => 0,
            Sign::Positive => 1,
            Sign::Negative => 2,
            Sign::Unknown => 3,
        }
    }

    fn from_bits(bits: u8) -> Sign {
        match bits {
            0 => Sign::Zero,
            1 => Sign::Positive,
            2 => Sign::Negative,
            _ => Sign::Unknown,
        }
    }

    /// Sign of a sum.
    pub fn add(self, other: Sign) -> Sign {
        Sign::from_bits(self.bits() | other.bits())
    }

    /// Sign of a difference: `a - b = a + (-b)`.
    pub fn sub(self, other: Sign) -> Sign {
        self.add(other.neg())
    }

    /// Sign of a product.
    pub fn mul(self, other: Sign) -> Sign {
        if self == Sign::Zero || other == Sign::Zero {
            Sign::Zero
        } else if self == Sign::Unknown || other == Sign::Unknown {
            Sign::Unknown
        } else if self != other {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }

    /// Sign of a quotient. Fails when the divisor sign is ZERO.
    pub fn div(self, other: Sign) -> Result<Sign> {
        if other == Sign::Zero {
            Err(DcpError::DivideByZero)
        } else {
            Ok(self.mul(other))
        }
    }

    /// Sign of a negation.
    pub fn neg(self) -> Sign {
        self.mul(Sign::Negative)
    }

    /// Parse a declaration sign token (case-insensitive).
    pub fn parse(token: &str) -> Option<Sign> {
        match token.to_ascii_lowercase().as_str() {
            "positive" => Some(Sign::Positive),
            "negative" => Some(Sign::Negative),
            "zero" => Some(Sign::Zero),
            "unknown" => Some(Sign::Unknown),
            _ => None,
        }
    }

    /// Check whether a token is a valid declaration sign.
    pub fn is_sign(token: &str) -> bool {
        Sign::parse(token).is_some()
    }

    /// Human-readable token used by diagnostics and the wire form.
    pub fn name(self) -> &'static str {
        match self {
            Sign::Positive => "positive",
            Sign::Negative => "negative",
            Sign::Zero => "zero",
            Sign::Unknown => "unknown sign",
        }
    }

    /// Inverse of [`Sign::name`], for wire-form decoding.
    pub fn from_name(name: &str) -> Option<Sign> {
        match name {
            "positive" => Some(Sign::Positive),
            "negative" => Some(Sign::Negative),
            "zero" => Some(Sign::Zero),
            "unknown sign" => Some(Sign::Unknown),
            _ => None,
        }
    }
}
