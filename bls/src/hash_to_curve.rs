//! Deterministic maps from message bytes to G1.
//!
//! [`HashToCurve::TryAndIncrement`] reproduces the mapping used by on-chain
//! BN254 verifiers: the Keccak-256 digest is reduced mod p and taken as a
//! candidate x coordinate, which is incremented until `x^3 + 3` is a square.
//! The y coordinate is always `(x^3 + 3)^((p + 1) / 4)`, never its negation,
//! so an independent implementation lands on the same point.

use curve::{BaseField, G1Affine, ScalarField};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use sha3::{Digest, Keccak256};
use tracing::{trace, warn};

use crate::constants::{DEFAULT_MAX_ATTEMPTS, DIGEST_SIZE};
use crate::errors::BlsError;

/// Strategy used to map a message to a G1 point.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HashToCurve {
    /// `SHA-256(msg) mod r` times the G1 generator.
    ///
    /// Insecure: the discrete log of every hashed point is public, so
    /// signatures can be forged. Only kept for compatibility.
    ScalarMultiply,
    /// Keccak-256 try-and-increment, bounded by `max_attempts` candidates.
    TryAndIncrement { max_attempts: u32 },
}

impl Default for HashToCurve {
    fn default() -> Self {
        HashToCurve::TryAndIncrement {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl HashToCurve {
    /// Maps `msg` to a validated G1 point.
    pub fn hash(&self, msg: &[u8]) -> Result<G1Affine, BlsError> {
        let point = match *self {
            HashToCurve::ScalarMultiply => scalar_multiply(msg),
            HashToCurve::TryAndIncrement { max_attempts } => {
                try_and_increment(msg, max_attempts)?
            }
        };
        point.validate()?;
        Ok(point)
    }
}

/// Keccak-256 digest of `msg`, the seed of the try-and-increment search.
pub fn message_digest(msg: &[u8]) -> [u8; DIGEST_SIZE] {
    Keccak256::digest(msg).into()
}

fn scalar_multiply(msg: &[u8]) -> G1Affine {
    warn!("hashing with the scalar-multiply strategy; hashed points have known discrete logs");
    let digest: [u8; DIGEST_SIZE] = Sha256::digest(msg).into();
    G1Affine::generator() * ScalarField::from_be_bytes_reduced(&digest)
}

fn try_and_increment(msg: &[u8], max_attempts: u32) -> Result<G1Affine, BlsError> {
    let mut x = BaseField::from_be_bytes_reduced(&message_digest(msg));

    for attempt in 1..=max_attempts {
        let beta = x.square() * x + G1Affine::B;
        if let Some(y) = beta.sqrt() {
            trace!(attempt, "found curve point");
            return Ok(G1Affine::new(x, y));
        }
        trace!(attempt, "x^3 + 3 is not a square, incrementing x");
        x += BaseField::ONE;
    }

    Err(BlsError::HashToCurveExhausted {
        attempts: max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn try_and_increment_with(max_attempts: u32) -> HashToCurve {
        HashToCurve::TryAndIncrement { max_attempts }
    }

    #[test]
    fn test_keccak_digest() {
        assert_eq!(
            hex::encode(message_digest(b"")),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
        assert_eq!(
            hex::encode(message_digest(b"test message")),
            "ea83cdcdd06bf61e414054115a551e23133711d0507dcbc07a4bab7dc4581935"
        );
    }

    #[test]
    fn test_try_and_increment_known_point() {
        let expected = G1Affine::from_decimal(
            "18521112453352730579645358173921106118252889045846003563531873900220182176793",
            "12220611982697050695278792018747974293998452760543899595396661668417277566823",
        )
        .expect("valid point");
        let h = HashToCurve::default().hash(b"test message").expect("hash");
        assert_eq!(h, expected);
    }

    #[test]
    fn test_increment_is_applied() {
        // "message 7" needs four candidates.
        let expected = G1Affine::from_decimal(
            "18709383186334913036363359273539036593477626007624957688002580665741390065668",
            "942577728672513616141233937943690723018041368039483438031378527563333531389",
        )
        .expect("valid point");
        assert_eq!(try_and_increment_with(4).hash(b"message 7"), Ok(expected));
        assert_eq!(
            try_and_increment_with(3).hash(b"message 7"),
            Err(BlsError::HashToCurveExhausted { attempts: 3 })
        );
    }

    #[test]
    fn test_zero_attempts_exhausts_immediately() {
        assert_eq!(
            try_and_increment_with(0).hash(b"anything"),
            Err(BlsError::HashToCurveExhausted { attempts: 0 })
        );
    }

    #[test]
    fn test_scalar_multiply_known_point() {
        let expected = G1Affine::from_decimal(
            "21865530482018474585755963423619168960499467353431037262233960899024234433967",
            "3539728706297954110075110532628922806564389507325174160259578565351636992365",
        )
        .expect("valid point");
        assert_eq!(HashToCurve::ScalarMultiply.hash(b"test message"), Ok(expected));
    }

    #[test]
    fn test_strategies_disagree() {
        let a = HashToCurve::ScalarMultiply.hash(b"test message").expect("hash");
        let b = HashToCurve::default().hash(b"test message").expect("hash");
        assert_ne!(a, b);
    }
}
