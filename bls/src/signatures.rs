//! Signatures and the pairing check that verifies them.

use core::fmt::{self, Display, Formatter};

use curve::{G1Affine, G2Affine, pairing};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::config::SchemeConfig;
use crate::errors::BlsError;

/// A BLS signature `sk * H(msg)`, a single G1 point.
///
/// Deserialized signatures are untrusted; [`verify`] checks membership
/// before using them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature(pub G1Affine);

impl Signature {
    pub fn point(&self) -> &G1Affine {
        &self.0
    }

    pub fn validate(&self) -> Result<(), BlsError> {
        self.0.validate()?;
        Ok(())
    }
}

impl From<G1Affine> for Signature {
    fn from(point: G1Affine) -> Self {
        Signature(point)
    }
}

impl Display for Signature {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// Verifies `sig` on `msg` against the G2 half of a public key.
///
/// Checks `e(G2, sig) == e(pk2, H(msg))`. Malformed inputs are errors; a
/// well-formed signature that does not match is `Ok(false)`. The identity
/// is never accepted as a key or a signature.
#[instrument(level = "debug", skip_all, fields(msg_len = msg.len()))]
pub fn verify(
    config: &SchemeConfig,
    pk2: &G2Affine,
    msg: &[u8],
    sig: &Signature,
) -> Result<bool, BlsError> {
    config.validate()?;
    pk2.validate()?;
    sig.validate()?;

    if pk2.is_infinity() || sig.0.is_infinity() {
        debug!("identity public key or signature");
        return Ok(false);
    }

    let h = config.hash_to_curve.hash(msg)?;
    let lhs = pairing(&G2Affine::generator(), &sig.0);
    let rhs = pairing(pk2, &h);

    let valid = lhs == rhs;
    debug!(valid, "pairing check");
    Ok(valid)
}
