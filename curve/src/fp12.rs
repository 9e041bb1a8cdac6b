//! Quadratic extension Fp12 = Fp6[w] / (w^2 - v), home of the pairing target group.

use core::ops::{Add, Mul, MulAssign, Neg, Sub};

use crate::basefield::BaseField;
use crate::fp2::Fp2;
use crate::fp6::Fp6;

/// xi^((p - 1) / 6), Montgomery form.
const FROBENIUS_COEFF_W: Fp2 = Fp2::new(
    BaseField::from_montgomery([
        0xaf9ba69633144907,
        0xca6b1d7387afb78a,
        0x11bded5ef08a2087,
        0x02f34d751a1f3a7c,
    ]),
    BaseField::from_montgomery([
        0xa222ae234c492d72,
        0xd00f02a4565de15b,
        0xdc2ff3a253dfc926,
        0x10a75716b3899551,
    ]),
);

/// Element `c0 + c1 * w`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Fp12 {
    pub c0: Fp6,
    pub c1: Fp6,
}

impl Fp12 {
    pub const ONE: Self = Fp12 {
        c0: Fp6::ONE,
        c1: Fp6::ZERO,
    };

    #[inline]
    pub const fn new(c0: Fp6, c1: Fp6) -> Self {
        Fp12 { c0, c1 }
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        *self == Self::ONE
    }

    #[inline]
    pub fn square(&self) -> Self {
        *self * *self
    }

    /// Conjugation over Fp6, equal to the p^6-power Frobenius.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Fp12 {
            c0: self.c0,
            c1: -self.c1,
        }
    }

    pub fn inverse(&self) -> Self {
        let t = (self.c0.square() - self.c1.square().mul_by_nonresidue()).inverse();
        Fp12 {
            c0: self.c0 * t,
            c1: -(self.c1 * t),
        }
    }

    /// p-power Frobenius.
    pub fn frobenius_map(&self) -> Self {
        Fp12 {
            c0: self.c0.frobenius_map(),
            c1: self.c1.frobenius_map().scale(FROBENIUS_COEFF_W),
        }
    }

    /// Variable-time exponentiation by a little-endian limb exponent of any length.
    pub fn pow_vartime(&self, exp: &[u64]) -> Self {
        let mut result = Self::ONE;

        for &limb in exp.iter().rev() {
            for i in (0..64).rev() {
                result = result.square();
                if (limb >> i) & 1 == 1 {
                    result *= *self;
                }
            }
        }

        result
    }
}

impl Add for Fp12 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Fp12 {
            c0: self.c0 + rhs.c0,
            c1: self.c1 + rhs.c1,
        }
    }
}

impl Sub for Fp12 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Fp12 {
            c0: self.c0 - rhs.c0,
            c1: self.c1 - rhs.c1,
        }
    }
}

impl Neg for Fp12 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Fp12 {
            c0: -self.c0,
            c1: -self.c1,
        }
    }
}

impl Mul for Fp12 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let t0 = self.c0 * rhs.c0;
        let t1 = self.c1 * rhs.c1;

        Fp12 {
            c0: t0 + t1.mul_by_nonresidue(),
            c1: (self.c0 + self.c1) * (rhs.c0 + rhs.c1) - t0 - t1,
        }
    }
}

impl MulAssign for Fp12 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}
