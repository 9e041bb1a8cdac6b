//! Error types for BLS key handling, hashing and signing.
//!
//! A signature that simply fails the pairing check is not an error:
//! verification reports it as `Ok(false)`.

use curve::CurveError;
use thiserror::Error;

/// Errors that can occur while creating keys, hashing, signing or verifying.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BlsError {
    /// A point supplied to or produced by the scheme is not a valid group element.
    #[error("curve membership check failed: {0}")]
    CurveMembership(CurveError),
    /// A scalar is zero or not smaller than the group order.
    #[error("scalar is outside [1, r - 1]")]
    ScalarOutOfRange,
    /// Try-and-increment did not find a curve point within the attempt bound.
    #[error("hash-to-curve found no point after {attempts} attempts")]
    HashToCurveExhausted { attempts: u32 },
    /// The G1 and G2 halves of a public key have different discrete logs.
    #[error("public key halves do not match")]
    MismatchedPublicKey,
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}

impl From<CurveError> for BlsError {
    fn from(err: CurveError) -> Self {
        match err {
            CurveError::NonCanonical { .. } => BlsError::ScalarOutOfRange,
            other => BlsError::CurveMembership(other),
        }
    }
}
