use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::error::CurveError;

pub trait ScalarBits {
    fn to_u64_limbs(&self) -> [u64; 4];
}

/// Operations shared by the two BN254 groups.
pub trait Group:
    Sized
    + Copy
    + Add<Output = Self>
    + AddAssign
    + Sub<Output = Self>
    + SubAssign
    + Neg<Output = Self>
{
    type Scalar: ScalarBits;

    fn identity() -> Self;
    fn is_identity(&self) -> bool;
    fn generator() -> Self;
    fn double(&self) -> Self;
    fn negate(&self) -> Self;
    fn is_on_curve(&self) -> bool;

    /// Full membership check for points coming from outside the crate.
    fn validate(&self) -> Result<(), CurveError>;

    /// Double-and-add over the bits of a reduced scalar, least significant first.
    #[inline]
    fn scalar_mul(&self, scalar: &Self::Scalar) -> Self {
        let scalar_limbs = scalar.to_u64_limbs();
        let mut result = Self::identity();
        let mut temp = *self;

        for &limb in scalar_limbs.iter() {
            let mut bits = limb;
            for _ in 0..64 {
                if bits & 1 == 1 {
                    result = result + temp;
                }
                temp = temp.double();
                bits >>= 1;
            }
        }

        result
    }

    /// Multiplication by an unreduced little-endian integer, used for cofactor
    /// and subgroup checks where the multiplier is `r` itself.
    fn mul_limbs(&self, limbs: &[u64]) -> Self {
        let mut result = Self::identity();
        let mut temp = *self;

        for &limb in limbs {
            let mut bits = limb;
            for _ in 0..64 {
                if bits & 1 == 1 {
                    result = result + temp;
                }
                temp = temp.double();
                bits >>= 1;
            }
        }

        result
    }

    fn mul_u64(&self, n: u64) -> Self {
        if n == 0 {
            return Self::identity();
        }
        if n == 1 {
            return *self;
        }

        let mut result = Self::identity();
        let mut temp = *self;
        let mut bits = n;

        while bits > 0 {
            if bits & 1 == 1 {
                result = result + temp;
            }
            temp = temp.double();
            bits >>= 1;
        }

        result
    }
}
