// E(GF(p)) : y^2 = x^3 + 3
// E generator point: (1 : 2 : 1)
// Curve prime order r: 21888242871839275222246405745257275088548364400416034343698204186575808495617
// Curve cofactor: 1

use core::fmt::{self, Display, Formatter};
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};

use crate::basefield::BaseField;
use crate::error::CurveError;
use crate::{Group, ScalarField};

/// Affine point on the base-field curve.
/// Represents a point in affine coordinates (x, y) or the point at infinity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "UncheckedG1Affine")]
pub struct G1Affine {
    pub x: BaseField,
    pub y: BaseField,
    /// Whether this point is the point at infinity (identity element)
    pub is_infinity: bool,
}

impl G1Affine {
    /// The 'b' coefficient: 3 (Montgomery form).
    pub const B: BaseField = BaseField::from_montgomery([
        0x7a17caa950ad28d7,
        0x1f6ac17ae15521b9,
        0x334bea4e696bd284,
        0x2a1f6744ce179d8e,
    ]);

    /// The point at infinity (identity element)
    pub const INFINITY: Self = G1Affine {
        x: BaseField::ZERO,
        y: BaseField::ZERO,
        is_infinity: true,
    };

    /// Create a new affine point. No membership check is performed.
    pub fn new(x: BaseField, y: BaseField) -> Self {
        G1Affine {
            x,
            y,
            is_infinity: false,
        }
    }

    /// Builds a point from decimal coordinates and checks it is on the curve.
    pub fn from_decimal(x: &str, y: &str) -> Result<Self, CurveError> {
        let point = G1Affine::new(BaseField::from_decimal_str(x)?, BaseField::from_decimal_str(y)?);
        point.validate()?;
        Ok(point)
    }

    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.is_infinity
    }

    /// Check if a point is on the curve: y^2 = x^3 + 3.
    pub fn is_on_curve(&self) -> bool {
        if self.is_infinity {
            return true;
        }

        let y2 = self.y.square();
        let x3 = self.x.square() * self.x;

        y2 == x3 + Self::B
    }

    /// Cofactor 1, so curve membership is group membership.
    pub fn validate(&self) -> Result<(), CurveError> {
        if self.is_on_curve() {
            Ok(())
        } else {
            Err(CurveError::NotOnCurve { group: "G1" })
        }
    }

    pub fn generator() -> Self {
        G1Affine::new(
            BaseField::ONE,
            BaseField::from_montgomery([
                0xa6ba871b8b1e1b3a,
                0x14f1d651eb8e167b,
                0xccdd46def0f28c58,
                0x1c14ef83340fbe5e,
            ]),
        )
    }

    /// Point doubling: 2*P.
    pub fn double(&self) -> Self {
        if self.is_infinity {
            return *self;
        }

        if self.y.is_zero() {
            return Self::INFINITY;
        }

        // λ = 3x^2 / (2y)
        let x2 = self.x.square();
        let numerator = x2 + x2 + x2;
        let lambda = numerator / self.y.double();

        // x_r = λ^2 - 2x
        let x_r = lambda.square() - self.x.double();

        // y_r = λ(x - x_r) - y
        let y_r = lambda * (self.x - x_r) - self.y;

        G1Affine::new(x_r, y_r)
    }

    pub fn negate(&self) -> Self {
        if self.is_infinity {
            return *self;
        }
        G1Affine::new(self.x, -self.y)
    }
}

impl Group for G1Affine {
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
        G1Affine::generator()
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

impl Add for G1Affine {
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
                // P + (-P)
                return Self::INFINITY;
            }
        }

        // λ = (y2 - y1) / (x2 - x1)
        let lambda = (other.y - self.y) / (other.x - self.x);

        // x_r = λ^2 - x1 - x2
        let x_r = lambda.square() - self.x - other.x;

        // y_r = λ(x1 - x_r) - y1
        let y_r = lambda * (self.x - x_r) - self.y;

        G1Affine::new(x_r, y_r)
    }
}

impl AddAssign for G1Affine {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl Sub for G1Affine {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + other.negate()
    }
}

impl SubAssign for G1Affine {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for G1Affine {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

impl Mul<ScalarField> for G1Affine {
    type Output = Self;

    fn mul(self, scalar: ScalarField) -> Self {
        <Self as Group>::scalar_mul(&self, &scalar)
    }
}

impl Mul<&ScalarField> for G1Affine {
    type Output = Self;

    fn mul(self, scalar: &ScalarField) -> Self {
        <Self as Group>::scalar_mul(&self, scalar)
    }
}

impl Mul<G1Affine> for ScalarField {
    type Output = G1Affine;

    fn mul(self, point: G1Affine) -> G1Affine {
        <G1Affine as Group>::scalar_mul(&point, &self)
    }
}

/// Wire form of [`G1Affine`] before the infinity flag is checked against the
/// coordinates.
#[derive(Deserialize)]
struct UncheckedG1Affine {
    x: BaseField,
    y: BaseField,
    is_infinity: bool,
}

impl TryFrom<UncheckedG1Affine> for G1Affine {
    type Error = CurveError;

    fn try_from(unchecked: UncheckedG1Affine) -> Result<Self, Self::Error> {
        if unchecked.is_infinity && !(unchecked.x.is_zero() && unchecked.y.is_zero()) {
            return Err(CurveError::InvalidEncoding("infinity with coordinates"));
        }
        Ok(G1Affine {
            x: unchecked.x,
            y: unchecked.y,
            is_infinity: unchecked.is_infinity,
        })
    }
}

impl Display for G1Affine {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_infinity {
            write!(f, "infinity")
        } else {
            write!(f, "({}, {})", self.x, self.y)
        }
    }
}
