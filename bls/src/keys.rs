//! Secret and public keys for the BLS scheme.

use core::fmt::{self, Debug, Display, Formatter};

use curve::{G1Affine, G2Affine, ScalarField, pairing};
use rand::{CryptoRng, Rng};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::config::SchemeConfig;
use crate::constants::SK_SIZE;
use crate::errors::BlsError;
use crate::signatures::{self, Signature};

/// A secret signing key, a scalar in `[1, r - 1]`.
///
/// The scalar is wiped from memory when the key is dropped, and `Debug`
/// never prints it.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    scalar: ScalarField,
}

/// The public half of a key pair: `(sk * G1, sk * G2)`.
///
/// Only `g2` takes part in verification. `g1` is carried for verifiers that
/// check the key on the G1 side; [`PublicKey::validate`] rejects keys whose
/// halves do not share one discrete log.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKey {
    pub g1: G1Affine,
    pub g2: G2Affine,
}

/// A secret key together with its public key.
#[derive(Clone, Debug)]
pub struct Keypair {
    pub secret: SecretKey,
    pub public: PublicKey,
}

impl SecretKey {
    /// Samples a key uniformly from `[1, r - 1]`.
    pub fn random<R: Rng + CryptoRng + ?Sized>(rng: &mut R) -> Self {
        Self {
            scalar: ScalarField::random_nonzero(rng),
        }
    }

    /// Wraps an existing scalar. Zero is rejected.
    pub fn from_scalar(scalar: ScalarField) -> Result<Self, BlsError> {
        if scalar.is_zero() {
            return Err(BlsError::ScalarOutOfRange);
        }
        Ok(Self { scalar })
    }

    /// Parses a 32-byte big-endian integer in `[1, r - 1]`.
    pub fn from_be_bytes(bytes: &[u8; SK_SIZE]) -> Result<Self, BlsError> {
        Self::from_scalar(ScalarField::from_be_bytes(bytes)?)
    }

    pub fn to_be_bytes(&self) -> [u8; SK_SIZE] {
        self.scalar.to_be_bytes()
    }

    /// Derives `(sk * G1, sk * G2)`.
    pub fn public_key(&self) -> PublicKey {
        PublicKey {
            g1: G1Affine::generator() * self.scalar,
            g2: G2Affine::generator() * self.scalar,
        }
    }

    /// Signs `msg`: `sk * H(msg)` with the configured hash-to-curve strategy.
    #[instrument(level = "debug", skip_all, fields(msg_len = msg.len()))]
    pub fn sign(&self, config: &SchemeConfig, msg: &[u8]) -> Result<Signature, BlsError> {
        config.validate()?;

        let h = config.hash_to_curve.hash(msg)?;
        let sig = Signature(h * self.scalar);
        sig.validate()?;

        debug!("message signed");
        Ok(sig)
    }
}

impl Debug for SecretKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(<redacted>)")
    }
}

impl PublicKey {
    /// Verifies `sig` on `msg` with the G2 half of this key.
    pub fn verify(
        &self,
        config: &SchemeConfig,
        msg: &[u8],
        sig: &Signature,
    ) -> Result<bool, BlsError> {
        signatures::verify(config, &self.g2, msg, sig)
    }

    /// Membership checks for both halves, then a pairing check that they
    /// share one secret. Use on keys received from outside.
    pub fn validate(&self) -> Result<(), BlsError> {
        self.g1.validate()?;
        self.g2.validate()?;
        if !self.has_matching_components() {
            return Err(BlsError::MismatchedPublicKey);
        }
        Ok(())
    }

    /// `e(G2, pk1) == e(pk2, G1)`.
    pub fn has_matching_components(&self) -> bool {
        pairing(&G2Affine::generator(), &self.g1) == pairing(&self.g2, &G1Affine::generator())
    }
}

impl Display for PublicKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "pk1: {}, pk2: {}", self.g1, self.g2)
    }
}

impl From<&SecretKey> for PublicKey {
    fn from(sk: &SecretKey) -> Self {
        sk.public_key()
    }
}

impl Keypair {
    /// Generates a fresh key pair and checks both public components.
    #[instrument(level = "debug", skip_all)]
    pub fn generate<R: Rng + CryptoRng + ?Sized>(rng: &mut R) -> Result<Self, BlsError> {
        Self::from_secret(SecretKey::random(rng))
    }

    pub fn from_secret(secret: SecretKey) -> Result<Self, BlsError> {
        let public = secret.public_key();
        public.validate()?;
        debug!("key pair derived");
        Ok(Self { secret, public })
    }

    pub fn sign(&self, config: &SchemeConfig, msg: &[u8]) -> Result<Signature, BlsError> {
        self.secret.sign(config, msg)
    }

    pub fn verify(
        &self,
        config: &SchemeConfig,
        msg: &[u8],
        sig: &Signature,
    ) -> Result<bool, BlsError> {
        self.public.verify(config, msg, sig)
    }
}
