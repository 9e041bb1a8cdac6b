// E'(GF(p^2)) : y^2 = x^3 + 3 / (9 + u)   (D-type sextic twist of E)
// Generator: the EIP-197 G2 point
// Subgroup order r is shared with G1; the twist has a large cofactor, so
// membership checks also test r * Q == O.

use core::fmt::{self, Display, Formatter};
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};

use crate::basefield::BaseField;
use crate::error::CurveError;
use crate::fp2::Fp2;
use crate::fp6::FROBENIUS_COEFF_C1;
use crate::scalarfield::ORDER_LIMBS;
use crate::{Group, ScalarField};

/// xi^((p - 1) / 2), Montgomery form. Scales y under the twisted Frobenius.
const PSI_COEFF_Y: Fp2 = Fp2::new(
    BaseField::from_montgomery([
        0xe4bbdd0c2936b629,
        0xbb30f162e133bacb,
        0x31a9d1b6f9645366,
        0x253570bea500f8dd,
    ]),
    BaseField::from_montgomery([
        0xa1d77ce45ffe77c7,
        0x07affd117826d1db,
        0x6d16bd27bb7edc6b,
        0x2c87200285defecc,
    ]),
);

/// Affine point on the twisted curve over Fp2.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "UncheckedG2Affine")]
pub struct G2Affine {
    pub x: Fp2,
    pub y: Fp2,
    pub is_infinity: bool,
}

impl G2Affine {
    /// b2 = 3 / (9 + u), Montgomery form.
    pub const B: Fp2 = Fp2::new(
        BaseField::from_montgomery([
            0x3bf938e377b802a8,
            0x020b1b273633535d,
            0x26b7edf049755260,
            0x2514c6324384a86d,
        ]),
        BaseField::from_montgomery([
            0x38e7ecccd1dcff67,
            0x65f0b37d93ce0d3e,
            0xd749d0dd22ac00aa,
            0x0141b9ce4a688d4d,
        ]),
    );

    pub const INFINITY: Self = G2Affine {
        x: Fp2::ZERO,
        y: Fp2::ZERO,
        is_infinity: true,
    };

    /// Create a new affine point. No membership check is performed.
    pub fn new(x: Fp2, y: Fp2) -> Self {
        G2Affine {
            x,
            y,
            is_infinity: false,
        }
    }

    /// Builds a point from decimal coefficients `[c0, c1]` of each coordinate
    /// and runs the full membership check.
    pub fn from_decimal(x: [&str; 2], y: [&str; 2]) -> Result<Self, CurveError> {
        let x = Fp2::new(
            BaseField::from_decimal_str(x[0])?,
            BaseField::from_decimal_str(x[1])?,
        );
        let y = Fp2::new(
            BaseField::from_decimal_str(y[0])?,
            BaseField::from_decimal_str(y[1])?,
        );
        let point = G2Affine::new(x, y);
        point.validate()?;
        Ok(point)
    }

    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.is_infinity
    }

    /// Check if a point is on the twist: y^2 = x^3 + b2.
    pub fn is_on_curve(&self) -> bool {
        if self.is_infinity {
            return true;
        }

        self.y.square() == self.x.square() * self.x + Self::B
    }

    /// r * Q == O.
    pub fn is_torsion_free(&self) -> bool {
        self.mul_limbs(&ORDER_LIMBS).is_infinity()
    }

    pub fn validate(&self) -> Result<(), CurveError> {
        if !self.is_on_curve() {
            return Err(CurveError::NotOnCurve { group: "G2" });
        }
        if !self.is_torsion_free() {
            return Err(CurveError::NotInSubgroup);
        }
        Ok(())
    }

    pub fn generator() -> Self {
        G2Affine::new(
            Fp2::new(
                BaseField::from_montgomery([
                    0x8e83b5d102bc2026,
                    0xdceb1935497b0172,
                    0xfbb8264797811adf,
                    0x19573841af96503b,
                ]),
                BaseField::from_montgomery([
                    0xafb4737da84c6140,
                    0x6043dd5a5802d8c4,
                    0x09e950fc52a02f86,
                    0x14fef0833aea7b6b,
                ]),
            ),
            Fp2::new(
                BaseField::from_montgomery([
                    0x619dfa9d886be9f6,
                    0xfe7fd297f59e9b78,
                    0xff9e1a62231b7dfe,
                    0x28fd7eebae9e4206,
                ]),
                BaseField::from_montgomery([
                    0x64095b56c71856ee,
                    0xdc57f922327d3cbb,
                    0x55f935be33351076,
                    0x0da4a0e693fd6482,
                ]),
            ),
        )
    }

    pub fn double(&self) -> Self {
        if self.is_infinity || self.y.is_zero() {
            return Self::INFINITY;
        }

        // λ = 3x^2 / (2y)
        let x2 = self.x.square();
        let lambda = (x2 + x2 + x2) / self.y.double();

        let x_r = lambda.square() - self.x.double();
        let y_r = lambda * (self.x - x_r) - self.y;

        G2Affine::new(x_r, y_r)
    }

    pub fn negate(&self) -> Self {
        if self.is_infinity {
            return *self;
        }
        G2Affine::new(self.x, -self.y)
    }

    /// Untwist-Frobenius-twist endomorphism. Acts as multiplication by p on G2.
    pub fn frobenius(&self) -> Self {
        if self.is_infinity {
            return *self;
        }
        G2Affine::new(
            self.x.frobenius_map() * FROBENIUS_COEFF_C1,
            self.y.frobenius_map() * PSI_COEFF_Y,
        )
    }
}

impl Group for G2Affine {
    type Scalar = ScalarField;

    #[inline]
    fn identity() -> Self {
        Self::INFINITY
    }

    #[inline]
    fn is_identity(&self) -> bool {
        self.is_infinity
    }

    #[inline]
    fn generator() -> Self {
        G2Affine::generator()
    }

    #[inline]
    fn double(&self) -> Self {
        Self::double(self)
    }

    #[inline]
    fn negate(&self) -> Self {
        Self::negate(self)
    }

    #[inline]
    fn is_on_curve(&self) -> bool {
        Self::is_on_curve(self)
    }

    #[inline]
    fn validate(&self) -> Result<(), CurveError> {
        Self::validate(self)
    }
}

impl Add for G2Affine {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        if self.is_infinity {
            return other;
        }
        if other.is_infinity {
            return self;
        }

        if self.x == other.x {
            if self.y == other.y {
                return self.double();
            } else {
                return Self::INFINITY;
            }
        }

        let lambda = (other.y - self.y) / (other.x - self.x);
        let x_r = lambda.square() - self.x - other.x;
        let y_r = lambda * (self.x - x_r) - self.y;

        G2Affine::new(x_r, y_r)
    }
}

impl AddAssign for G2Affine {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl Sub for G2Affine {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + other.negate()
    }
}

impl SubAssign for G2Affine {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for G2Affine {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

impl Mul<ScalarField> for G2Affine {
    type Output = Self;

    fn mul(self, scalar: ScalarField) -> Self {
        <Self as Group>::scalar_mul(&self, &scalar)
    }
}

impl Mul<&ScalarField> for G2Affine {
    type Output = Self;

    fn mul(self, scalar: &ScalarField) -> Self {
        <Self as Group>::scalar_mul(&self, scalar)
    }
}

impl Mul<G2Affine> for ScalarField {
    type Output = G2Affine;

    fn mul(self, point: G2Affine) -> G2Affine {
        <G2Affine as Group>::scalar_mul(&point, &self)
    }
}

/// Wire form of [`G2Affine`] before the infinity flag is checked against the
/// coordinates.
#[derive(Deserialize)]
struct UncheckedG2Affine {
    x: Fp2,
    y: Fp2,
    is_infinity: bool,
}

impl TryFrom<UncheckedG2Affine> for G2Affine {
    type Error = CurveError;

    fn try_from(unchecked: UncheckedG2Affine) -> Result<Self, Self::Error> {
        if unchecked.is_infinity && !(unchecked.x.is_zero() && unchecked.y.is_zero()) {
            return Err(CurveError::InvalidEncoding("infinity with coordinates"));
        }
        Ok(G2Affine {
            x: unchecked.x,
            y: unchecked.y,
            is_infinity: unchecked.is_infinity,
        })
    }
}

impl Display for G2Affine {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_infinity {
            write!(f, "infinity")
        } else {
            write!(f, "({}, {})", self.x, self.y)
        }
    }
}
