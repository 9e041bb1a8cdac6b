//! Base field of BN254. p = 0x30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47
//!
//! Montgomery form over `[u64; 4]` limbs, little-endian.

use core::fmt::{self, Debug, Display, Formatter};
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};
use num_bigint::BigUint;
use rand::distr::{Distribution, StandardUniform};
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CurveError;
use crate::montgomery::{
    add_mod, is_canonical, limbs_from_be_bytes, limbs_to_be_bytes, montgomery_mul, neg_mod,
    sub_mod,
};

/// Element of GF(p), stored as `value * 2^256 mod p`.
///
/// Serializes as 32 canonical big-endian bytes; decoding rejects values `>= p`.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct BaseField {
    limbs: [u64; 4],
}

// Field modulus: p = 21888242871839275222246405745257275088696311157297823662689037894645226208583
const MODULUS: [u64; 4] = [
    0x3c208c16d87cfd47,
    0x97816a916871ca8d,
    0xb85045b68181585d,
    0x30644e72e131a029,
];

// Square roots below are a single exponentiation only because p = 3 mod 4.
const _: () = assert!(MODULUS[0] & 3 == 3, "base field modulus must be 3 mod 4");

// R = 2^256 mod p
const R: [u64; 4] = [
    0xd35d438dc58f0d9d,
    0x0a78eb28f5c70b3d,
    0x666ea36f7879462c,
    0x0e0a77c19a07df2f,
];

// R^2 = 2^512 mod p
const R2: [u64; 4] = [
    0xf32cfc5b538afa89,
    0xb5e71911d44501fb,
    0x47ab1eff0a417ff6,
    0x06d89f71cab8351f,
];

// -p^{-1} mod 2^64
const MU: u64 = 0x87d20782e4866389;

// p - 2, the Fermat inversion exponent
const P_MINUS_2: [u64; 4] = [
    0x3c208c16d87cfd45,
    0x97816a916871ca8d,
    0xb85045b68181585d,
    0x30644e72e131a029,
];

// (p + 1) / 4
const SQRT_EXPONENT: [u64; 4] = [
    0x4f082305b61f3f52,
    0x65e05aa45a1c72a3,
    0x6e14116da0605617,
    0x0c19139cb84c680a,
];

impl BaseField {
    pub const ZERO: Self = BaseField {
        limbs: [0, 0, 0, 0],
    };

    /// One element (in Montgomery form: R mod p)
    pub const ONE: Self = BaseField { limbs: R };

    /// Wraps limbs that are already in Montgomery form.
    #[inline]
    pub(crate) const fn from_montgomery(limbs: [u64; 4]) -> Self {
        BaseField { limbs }
    }

    #[inline]
    pub fn from_canonical_u64(val: u64) -> Self {
        BaseField {
            limbs: montgomery_mul([val, 0, 0, 0], R2, MODULUS, MU),
        }
    }

    /// Converts canonical little-endian limbs, rejecting values `>= p`.
    pub fn from_canonical_limbs(limbs: [u64; 4]) -> Option<Self> {
        if !is_canonical(limbs, MODULUS) {
            return None;
        }
        Some(BaseField {
            limbs: montgomery_mul(limbs, R2, MODULUS, MU),
        })
    }

    /// Interprets 32 big-endian bytes as an integer and reduces it mod p.
    pub fn from_be_bytes_reduced(bytes: &[u8; 32]) -> Self {
        BaseField {
            limbs: montgomery_mul(limbs_from_be_bytes(bytes), R2, MODULUS, MU),
        }
    }

    /// Canonical little-endian limbs of this element.
    #[inline]
    pub fn to_canonical_limbs(&self) -> [u64; 4] {
        montgomery_mul(self.limbs, [1, 0, 0, 0], MODULUS, MU)
    }

    /// Parses a 32-byte big-endian integer that must already be below p.
    pub fn from_be_bytes(bytes: &[u8; 32]) -> Result<Self, CurveError> {
        Self::from_canonical_limbs(limbs_from_be_bytes(bytes))
            .ok_or(CurveError::NonCanonical { field: "base" })
    }

    pub fn to_be_bytes(&self) -> [u8; 32] {
        limbs_to_be_bytes(self.to_canonical_limbs())
    }

    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.to_be_bytes())
    }

    /// The field modulus p.
    pub fn modulus() -> BigUint {
        BigUint::from_bytes_be(&limbs_to_be_bytes(MODULUS))
    }

    pub fn from_biguint(value: &BigUint) -> Result<Self, CurveError> {
        let digits = value.to_u64_digits();
        if digits.len() > 4 {
            return Err(CurveError::NonCanonical { field: "base" });
        }
        let mut limbs = [0u64; 4];
        limbs[..digits.len()].copy_from_slice(&digits);
        Self::from_canonical_limbs(limbs).ok_or(CurveError::NonCanonical { field: "base" })
    }

    /// Parses a decimal integer in `[0, p)`.
    pub fn from_decimal_str(s: &str) -> Result<Self, CurveError> {
        let value = BigUint::parse_bytes(s.trim().as_bytes(), 10)
            .ok_or(CurveError::InvalidEncoding("expected a decimal integer"))?;
        Self::from_biguint(&value)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs == [0, 0, 0, 0]
    }

    #[inline]
    pub fn double(&self) -> Self {
        *self + *self
    }

    #[inline]
    pub fn square(&self) -> Self {
        *self * *self
    }

    /// Multiplicative inverse by Fermat's little theorem. Zero maps to zero.
    pub fn inverse(&self) -> Self {
        self.pow_vartime(P_MINUS_2)
    }

    /// Variable-time exponentiation by a little-endian limb exponent.
    pub fn pow_vartime(&self, exp: [u64; 4]) -> Self {
        if self.is_zero() {
            return Self::ZERO;
        }

        let mut result = Self::ONE;
        let mut base = *self;

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

    /// Square root candidate `self^((p+1)/4)`, kept only if it squares back.
    ///
    /// The root is the exponentiation result itself, never its negation.
    pub fn sqrt(&self) -> Option<Self> {
        let candidate = self.pow_vartime(SQRT_EXPONENT);
        if candidate.square() == *self {
            Some(candidate)
        } else {
            None
        }
    }
}

impl Add for BaseField {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        BaseField {
            limbs: add_mod(self.limbs, rhs.limbs, MODULUS),
        }
    }
}

impl AddAssign for BaseField {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for BaseField {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        BaseField {
            limbs: sub_mod(self.limbs, rhs.limbs, MODULUS),
        }
    }
}

impl SubAssign for BaseField {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for BaseField {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        BaseField {
            limbs: neg_mod(self.limbs, MODULUS),
        }
    }
}

impl Mul for BaseField {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        BaseField {
            limbs: montgomery_mul(self.limbs, rhs.limbs, MODULUS, MU),
        }
    }
}

impl MulAssign for BaseField {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl Div for BaseField {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        self * rhs.inverse()
    }
}

impl Display for BaseField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_biguint())
    }
}

impl Debug for BaseField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "BaseField({})", self)
    }
}

impl Serialize for BaseField {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_be_bytes().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BaseField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bytes = <[u8; 32]>::deserialize(deserializer)?;
        BaseField::from_be_bytes(&bytes).map_err(serde::de::Error::custom)
    }
}

impl Distribution<BaseField> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> BaseField {
        loop {
            let mut bytes: [u8; 32] = rng.random();
            bytes[31] &= 0x3f;

            let mut limbs = [0u64; 4];
            for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks_exact(8)) {
                let mut word = [0u8; 8];
                word.copy_from_slice(chunk);
                *limb = u64::from_le_bytes(word);
            }

            if let Some(element) = BaseField::from_canonical_limbs(limbs) {
                return element;
            }
        }
    }
}
