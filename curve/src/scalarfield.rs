//! Scalar field of the curve. r = 0x30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001
//!
//! This implementation uses Montgomery form for efficient modular arithmetic.
//! The field element is represented as [u64; 4] in little-endian order.

use core::fmt::{self, Debug, Display, Formatter};
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use num_bigint::BigUint;
use rand::distr::{Distribution, StandardUniform};
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::Zeroize;

use crate::error::CurveError;
use crate::group::ScalarBits;
use crate::montgomery::{
    add_mod, is_canonical, limbs_from_be_bytes, limbs_to_be_bytes, montgomery_mul, neg_mod,
    sub_mod,
};

/// Scalar field element for the curve
/// Represented in Montgomery form with [u64; 4]; serialized as canonical
/// big-endian bytes
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct ScalarField {
    /// Montgomery form: value * R mod r, where R = 2^256
    limbs: [u64; 4],
}

// Group order: r = 21888242871839275222246405745257275088548364400416034343698204186575808495617
const MODULUS: [u64; 4] = [
    0x43e1f593f0000001,
    0x2833e84879b97091,
    0xb85045b68181585d,
    0x30644e72e131a029,
];

/// Canonical limbs of r, for subgroup checks.
pub(crate) const ORDER_LIMBS: [u64; 4] = MODULUS;

// R = 2^256 mod r (Montgomery parameter)
const R: [u64; 4] = [
    0xac96341c4ffffffb,
    0x36fc76959f60cd29,
    0x666ea36f7879462e,
    0x0e0a77c19a07df2f,
];

// R^2 = 2^512 mod r (for Montgomery conversion)
const R2: [u64; 4] = [
    0x1bb8e645ae216da7,
    0x53fe3ab1e35c59e3,
    0x8c49833d53bb8085,
    0x0216d0b17f4e44a5,
];

// -r^{-1} mod 2^64 (Montgomery parameter mu)
const MU: u64 = 0xc2e1f593efffffff;

// r - 2
const R_MINUS_2: [u64; 4] = [
    0x43e1f593efffffff,
    0x2833e84879b97091,
    0xb85045b68181585d,
    0x30644e72e131a029,
];

impl ScalarField {
    /// Zero element (in Montgomery form)
    pub const ZERO: Self = ScalarField {
        limbs: [0, 0, 0, 0],
    };

    /// One element (in Montgomery form: R mod r)
    pub const ONE: Self = ScalarField { limbs: R };

    /// Create a new scalar field element from a u64 value
    #[inline]
    pub fn from_canonical_u64(val: u64) -> Self {
        // Convert to Montgomery form: val * R^2 * R^{-1} = val * R
        ScalarField {
            limbs: montgomery_mul([val, 0, 0, 0], R2, MODULUS, MU),
        }
    }

    /// Convert from Montgomery form to canonical form
    #[inline]
    pub fn to_canonical_u64_vec(&self) -> [u64; 4] {
        montgomery_mul(self.limbs, [1, 0, 0, 0], MODULUS, MU)
    }

    /// Converts canonical little-endian limbs, rejecting values `>= r`.
    pub fn from_canonical_limbs(limbs: [u64; 4]) -> Option<Self> {
        if !is_canonical(limbs, MODULUS) {
            return None;
        }
        Some(ScalarField {
            limbs: montgomery_mul(limbs, R2, MODULUS, MU),
        })
    }

    /// Reduces a 32-byte big-endian integer (e.g. a hash digest) mod r.
    pub fn from_be_bytes_reduced(bytes: &[u8; 32]) -> Self {
        ScalarField {
            limbs: montgomery_mul(limbs_from_be_bytes(bytes), R2, MODULUS, MU),
        }
    }

    /// Parses a 32-byte big-endian integer that must already be below r.
    pub fn from_be_bytes(bytes: &[u8; 32]) -> Result<Self, CurveError> {
        Self::from_canonical_limbs(limbs_from_be_bytes(bytes))
            .ok_or(CurveError::NonCanonical { field: "scalar" })
    }

    pub fn to_be_bytes(&self) -> [u8; 32] {
        limbs_to_be_bytes(self.to_canonical_u64_vec())
    }

    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.to_be_bytes())
    }

    /// Converts an arbitrary integer, rejecting values `>= r`.
    pub fn try_from_biguint(value: &BigUint) -> Result<Self, CurveError> {
        let digits = value.to_u64_digits();
        if digits.len() > 4 {
            return Err(CurveError::NonCanonical { field: "scalar" });
        }
        let mut limbs = [0u64; 4];
        limbs[..digits.len()].copy_from_slice(&digits);
        Self::from_canonical_limbs(limbs).ok_or(CurveError::NonCanonical { field: "scalar" })
    }

    /// Converts an arbitrary integer by reducing it into `[0, r)`.
    pub fn from_biguint_reduced(value: &BigUint) -> Self {
        let reduced = value % modulus_biguint();
        let digits = reduced.to_u64_digits();
        let mut limbs = [0u64; 4];
        limbs[..digits.len()].copy_from_slice(&digits);
        ScalarField {
            limbs: montgomery_mul(limbs, R2, MODULUS, MU),
        }
    }

    /// The group order r.
    pub fn order() -> BigUint {
        modulus_biguint()
    }

    /// Samples a uniform scalar in `[1, r - 1]`.
    pub fn random_nonzero<R: Rng + ?Sized>(rng: &mut R) -> Self {
        loop {
            let candidate: ScalarField = StandardUniform.sample(rng);
            if !candidate.is_zero() {
                return candidate;
            }
        }
    }
}

fn modulus_biguint() -> BigUint {
    let mut bytes = Vec::with_capacity(32);
    for &limb in &MODULUS {
        bytes.extend_from_slice(&limb.to_le_bytes());
    }
    BigUint::from_bytes_le(&bytes)
}

impl ScalarBits for ScalarField {
    #[inline]
    fn to_u64_limbs(&self) -> [u64; 4] {
        self.to_canonical_u64_vec()
    }
}

impl Serialize for ScalarField {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_be_bytes().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ScalarField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bytes = <[u8; 32]>::deserialize(deserializer)?;
        ScalarField::from_be_bytes(&bytes).map_err(serde::de::Error::custom)
    }
}

impl Distribution<ScalarField> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ScalarField {
        loop {
            let mut bytes: [u8; 32] = rng.random();
            // r < 2^254: keep 254 bits and reject the rest
            bytes[31] &= 0x3f;

            let mut limbs = [0u64; 4];
            for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks_exact(8)) {
                let mut word = [0u8; 8];
                word.copy_from_slice(chunk);
                *limb = u64::from_le_bytes(word);
            }

            if let Some(scalar) = ScalarField::from_canonical_limbs(limbs) {
                return scalar;
            }
        }
    }
}

impl Zeroize for ScalarField {
    fn zeroize(&mut self) {
        self.limbs.zeroize();
    }
}

// Arithmetic operations
impl Add for ScalarField {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        ScalarField {
            limbs: add_mod(self.limbs, rhs.limbs, MODULUS),
        }
    }
}

impl AddAssign for ScalarField {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for ScalarField {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        ScalarField {
            limbs: sub_mod(self.limbs, rhs.limbs, MODULUS),
        }
    }
}

impl SubAssign for ScalarField {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for ScalarField {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        ScalarField {
            limbs: neg_mod(self.limbs, MODULUS),
        }
    }
}

impl Mul for ScalarField {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        ScalarField {
            limbs: montgomery_mul(self.limbs, rhs.limbs, MODULUS, MU),
        }
    }
}

impl MulAssign for ScalarField {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

// Display and Debug
impl Display for ScalarField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_biguint())
    }
}

impl Debug for ScalarField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ScalarField({})", self)
    }
}

// Inverse using Fermat's little theorem: a^{-1} = a^{r-2}
impl ScalarField {
    /// Compute multiplicative inverse using binary exponentiation
    pub fn inverse(&self) -> Self {
        self.pow_vartime(R_MINUS_2)
    }

    /// Variable-time exponentiation
    fn pow_vartime(&self, exp: [u64; 4]) -> Self {
        if self.is_zero() {
            return Self::ZERO;
        }

        let mut result = Self::ONE;
        let mut base = *self;

        // Process bits from least significant to most significant
        for &limb in exp.iter() {
            let mut remaining = limb;
            for _ in 0..64 {
                if remaining & 1 == 1 {
                    result = result * base;
                }
                base = base * base;
                remaining >>= 1;
            }
        }

        result
    }

    /// Check if this field element is zero
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs == [0, 0, 0, 0]
    }
}
