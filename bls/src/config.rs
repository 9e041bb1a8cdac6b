//! Scheme configuration passed explicitly into signing and verification.

use serde::{Deserialize, Serialize};

use crate::errors::BlsError;
use crate::hash_to_curve::HashToCurve;

/// Parameters shared by signer and verifier. Both sides must agree on them.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeConfig {
    pub hash_to_curve: HashToCurve,
}

impl SchemeConfig {
    pub fn new(hash_to_curve: HashToCurve) -> Self {
        Self { hash_to_curve }
    }

    pub fn validate(&self) -> Result<(), BlsError> {
        match self.hash_to_curve {
            HashToCurve::TryAndIncrement { max_attempts: 0 } => {
                Err(BlsError::InvalidConfig("max_attempts must be positive"))
            }
            _ => Ok(()),
        }
    }
}
