//! DCP attribute lattices.
//!
//! Sign, curvature and monotonicity are the three value types that flow
//! through expression construction. All three are small `Copy` enums with
//! pure combinators; the composition rule tying them together lives in
//! [`monotonicity`].

pub mod curvature;
pub mod monotonicity;
pub mod sign;

pub use curvature::Curvature;
pub use monotonicity::Monotonicity;
pub use sign::Sign;
