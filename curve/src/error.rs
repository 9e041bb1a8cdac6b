//! Errors raised when untrusted integers or points enter the curve crate.

use thiserror::Error;

/// Validation failures for field elements and curve points.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CurveError {
    /// The coordinates do not satisfy the curve equation of `group`.
    #[error("point is not on the {group} curve")]
    NotOnCurve { group: &'static str },
    /// A G2 point is on the twist but outside the order-r subgroup.
    #[error("G2 point is not in the prime-order subgroup")]
    NotInSubgroup,
    /// An integer is not smaller than the modulus of `field`.
    #[error("integer is not a canonical {field} element")]
    NonCanonical { field: &'static str },
    #[error("malformed integer encoding: {0}")]
    InvalidEncoding(&'static str),
}
