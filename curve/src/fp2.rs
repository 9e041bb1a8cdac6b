//! Quadratic extension Fp2 = Fp[u] / (u^2 + 1), the coordinate field of G2.

use core::fmt::{self, Display, Formatter};
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};

use crate::basefield::BaseField;

/// Element `c0 + c1 * u` with `u^2 = -1`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Fp2 {
    pub c0: BaseField,
    pub c1: BaseField,
}

impl Fp2 {
    pub const ZERO: Self = Fp2 {
        c0: BaseField::ZERO,
        c1: BaseField::ZERO,
    };

    pub const ONE: Self = Fp2 {
        c0: BaseField::ONE,
        c1: BaseField::ZERO,
    };

    #[inline]
    pub const fn new(c0: BaseField, c1: BaseField) -> Self {
        Fp2 { c0, c1 }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero()
    }

    #[inline]
    pub fn double(&self) -> Self {
        *self + *self
    }

    pub fn square(&self) -> Self {
        // (a + bu)^2 = (a + b)(a - b) + 2ab u
        let ab = self.c0 * self.c1;
        Fp2 {
            c0: (self.c0 + self.c1) * (self.c0 - self.c1),
            c1: ab.double(),
        }
    }

    /// Conjugation, which is also the p-power Frobenius on Fp2.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Fp2 {
            c0: self.c0,
            c1: -self.c1,
        }
    }

    #[inline]
    pub fn frobenius_map(&self) -> Self {
        self.conjugate()
    }

    /// Inverse through the norm `c0^2 + c1^2`. Zero maps to zero.
    pub fn inverse(&self) -> Self {
        let norm_inv = (self.c0.square() + self.c1.square()).inverse();
        Fp2 {
            c0: self.c0 * norm_inv,
            c1: -(self.c1 * norm_inv),
        }
    }

    #[inline]
    pub fn mul_by_base(&self, k: BaseField) -> Self {
        Fp2 {
            c0: self.c0 * k,
            c1: self.c1 * k,
        }
    }

    /// Multiplication by the sextic non-residue `xi = 9 + u`.
    pub fn mul_by_nonresidue(&self) -> Self {
        let nine_c0 = self.c0.double().double().double() + self.c0;
        let nine_c1 = self.c1.double().double().double() + self.c1;
        Fp2 {
            c0: nine_c0 - self.c1,
            c1: self.c0 + nine_c1,
        }
    }
}

impl Add for Fp2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Fp2 {
            c0: self.c0 + rhs.c0,
            c1: self.c1 + rhs.c1,
        }
    }
}

impl AddAssign for Fp2 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Fp2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Fp2 {
            c0: self.c0 - rhs.c0,
            c1: self.c1 - rhs.c1,
        }
    }
}

impl SubAssign for Fp2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Fp2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Fp2 {
            c0: -self.c0,
            c1: -self.c1,
        }
    }
}

impl Mul for Fp2 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        // (a + bu)(c + du) = (ac - bd) + (ad + bc)u
        Fp2 {
            c0: self.c0 * rhs.c0 - self.c1 * rhs.c1,
            c1: self.c0 * rhs.c1 + self.c1 * rhs.c0,
        }
    }
}

impl MulAssign for Fp2 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl Div for Fp2 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        self * rhs.inverse()
    }
}

impl Display for Fp2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.c0, self.c1)
    }
}
