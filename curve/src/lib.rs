//! BN254 (alt_bn128) arithmetic for pairing-based signatures.
//!
//! The crate provides the base and scalar prime fields in Montgomery form,
//! the Fp2 / Fp6 / Fp12 extension tower, the groups G1 (over Fp) and G2
//! (over Fp2, on the sextic twist) in affine coordinates, and the optimal
//! ate pairing into Gt. Curve constants and generators match EIP-196/197.
//!
//! Arithmetic is variable time.

mod basefield;
mod error;
mod fp12;
mod fp2;
mod fp6;
mod g1;
mod g2;
mod group;
mod montgomery;
mod pairing;
mod random;
mod scalarfield;

pub use basefield::BaseField;
pub use error::CurveError;
pub use fp12::Fp12;
pub use fp2::Fp2;
pub use fp6::Fp6;
pub use g1::G1Affine;
pub use g2::G2Affine;
pub use group::{Group, ScalarBits};
pub use pairing::{pairing, Gt};
pub use random::RandomField;
pub use scalarfield::ScalarField;
