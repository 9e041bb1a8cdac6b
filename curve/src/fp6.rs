//! Cubic extension Fp6 = Fp2[v] / (v^3 - xi), with xi = 9 + u.

use core::ops::{Add, Mul, Neg, Sub};

use crate::basefield::BaseField;
use crate::fp2::Fp2;

/// xi^((p - 1) / 3), Montgomery form.
pub(crate) const FROBENIUS_COEFF_C1: Fp2 = Fp2::new(
    BaseField::from_montgomery([
        0xb5773b104563ab30,
        0x347f91c8a9aa6454,
        0x7a007127242e0991,
        0x1956bcd8118214ec,
    ]),
    BaseField::from_montgomery([
        0x6e849f1ea0aa4757,
        0xaa1c7b6d89f89141,
        0xb6e713cdfae0ca3a,
        0x26694fbb4e82ebc3,
    ]),
);

/// xi^(2(p - 1) / 3), Montgomery form.
const FROBENIUS_COEFF_C2: Fp2 = Fp2::new(
    BaseField::from_montgomery([
        0x7361d77f843abe92,
        0xa5bb2bd3273411fb,
        0x9c941f314b3e2399,
        0x15df9cddbb9fd3ec,
    ]),
    BaseField::from_montgomery([
        0x5dddfd154bd8c949,
        0x62cb29a5a4445b60,
        0x37bc870a0c7dd2b9,
        0x24830a9d3171f0fd,
    ]),
);

/// Element `c0 + c1 * v + c2 * v^2`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Fp6 {
    pub c0: Fp2,
    pub c1: Fp2,
    pub c2: Fp2,
}

impl Fp6 {
    pub const ZERO: Self = Fp6 {
        c0: Fp2::ZERO,
        c1: Fp2::ZERO,
        c2: Fp2::ZERO,
    };

    pub const ONE: Self = Fp6 {
        c0: Fp2::ONE,
        c1: Fp2::ZERO,
        c2: Fp2::ZERO,
    };

    #[inline]
    pub const fn new(c0: Fp2, c1: Fp2, c2: Fp2) -> Self {
        Fp6 { c0, c1, c2 }
    }

    pub fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero() && self.c2.is_zero()
    }

    #[inline]
    pub fn square(&self) -> Self {
        *self * *self
    }

    /// Multiplication by `v`, the non-residue that defines Fp12 over Fp6.
    #[inline]
    pub fn mul_by_nonresidue(&self) -> Self {
        Fp6 {
            c0: self.c2.mul_by_nonresidue(),
            c1: self.c0,
            c2: self.c1,
        }
    }

    pub fn frobenius_map(&self) -> Self {
        Fp6 {
            c0: self.c0.frobenius_map(),
            c1: self.c1.frobenius_map() * FROBENIUS_COEFF_C1,
            c2: self.c2.frobenius_map() * FROBENIUS_COEFF_C2,
        }
    }

    /// Multiplies every coefficient by an Fp2 constant.
    #[inline]
    pub fn scale(&self, k: Fp2) -> Self {
        Fp6 {
            c0: self.c0 * k,
            c1: self.c1 * k,
            c2: self.c2 * k,
        }
    }

    pub fn inverse(&self) -> Self {
        let a = self.c0.square() - (self.c1 * self.c2).mul_by_nonresidue();
        let b = self.c2.square().mul_by_nonresidue() - self.c0 * self.c1;
        let c = self.c1.square() - self.c0 * self.c2;

        let norm = self.c0 * a + (self.c2 * b + self.c1 * c).mul_by_nonresidue();
        let norm_inv = norm.inverse();

        Fp6 {
            c0: a * norm_inv,
            c1: b * norm_inv,
            c2: c * norm_inv,
        }
    }
}

impl Add for Fp6 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Fp6 {
            c0: self.c0 + rhs.c0,
            c1: self.c1 + rhs.c1,
            c2: self.c2 + rhs.c2,
        }
    }
}

impl Sub for Fp6 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Fp6 {
            c0: self.c0 - rhs.c0,
            c1: self.c1 - rhs.c1,
            c2: self.c2 - rhs.c2,
        }
    }
}

impl Neg for Fp6 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Fp6 {
            c0: -self.c0,
            c1: -self.c1,
            c2: -self.c2,
        }
    }
}

impl Mul for Fp6 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let t0 = self.c0 * rhs.c0;
        let t1 = self.c1 * rhs.c1;
        let t2 = self.c2 * rhs.c2;

        let c0 = ((self.c1 + self.c2) * (rhs.c1 + rhs.c2) - t1 - t2).mul_by_nonresidue() + t0;
        let c1 = (self.c0 + self.c1) * (rhs.c0 + rhs.c1) - t0 - t1 + t2.mul_by_nonresidue();
        let c2 = (self.c0 + self.c2) * (rhs.c0 + rhs.c2) - t0 - t2 + t1;

        Fp6 { c0, c1, c2 }
    }
}
