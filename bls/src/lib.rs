//! BLS signatures over BN254 with an EVM-compatible hash-to-curve.
//!
//! This library implements a pairing-based signature scheme using:
//! - The BN254 (alt_bn128) curves from the `curve` crate, signatures in G1
//!   and public keys in G2
//! - Keccak-256 try-and-increment to map messages onto G1, matching the
//!   mapping used by on-chain verifiers built on the `ecPairing` precompile
//!
//! # Overview
//!
//! A secret key is a scalar `sk` in `[1, r - 1]`. The public key is the pair
//! `(sk * G1, sk * G2)`. A signature on `msg` is `sk * H(msg)`, and it
//! verifies when `e(G2, sig) == e(sk * G2, H(msg))`.
//!
//! # Example
//!
//! ```
//! use bls::{Keypair, SchemeConfig};
//!
//! let mut rng = rand::rng();
//! let config = SchemeConfig::default();
//! let keypair = Keypair::generate(&mut rng).expect("key generation failed");
//!
//! let signature = keypair.sign(&config, b"test message").expect("signing failed");
//! let is_valid = keypair
//!     .public
//!     .verify(&config, b"test message", &signature)
//!     .expect("verification failed");
//! assert!(is_valid);
//! ```
//!
//! # Security Considerations
//!
//! - Generate keys from a cryptographically secure random number generator
//! - [`HashToCurve::ScalarMultiply`] is insecure and only kept for compatibility
//! - Signer and verifier must use the same [`SchemeConfig`]
//! - Arithmetic is not constant time

mod config;
mod constants;
mod errors;
mod hash_to_curve;
mod keys;
mod signatures;

#[cfg(test)]
mod tests;

pub use config::SchemeConfig;
pub use constants::{DEFAULT_MAX_ATTEMPTS, DIGEST_SIZE, SK_SIZE};
pub use errors::BlsError;
pub use hash_to_curve::{HashToCurve, message_digest};
pub use keys::{Keypair, PublicKey, SecretKey};
pub use signatures::{Signature, verify};
