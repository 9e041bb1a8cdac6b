//! Optimal ate pairing `e: G2 x G1 -> Gt` on BN254.
//!
//! Miller loop over `6u + 2` with affine line functions, followed by the
//! final exponentiation `(p^12 - 1) / r`, split into the easy part
//! `(p^6 - 1)(p^2 + 1)` and the hard part `(p^4 - p^2 + 1) / r`.

use core::ops::{Mul, MulAssign};

use crate::basefield::BaseField;
use crate::fp12::Fp12;
use crate::fp2::Fp2;
use crate::fp6::Fp6;
use crate::g1::G1Affine;
use crate::g2::G2Affine;
use crate::scalarfield::ScalarField;
use crate::ScalarBits;

/// 6u + 2 for the BN parameter u = 4965661367192848881. 65 bits.
const ATE_LOOP_COUNT: u128 = 0x19d797039be763ba8;

/// (p^4 - p^2 + 1) / r, little-endian limbs.
const HARD_EXPONENT: [u64; 12] = [
    0xe81bb482ccdf42b1,
    0x5abf5cc4f49c36d4,
    0xf1154e7e1da014fd,
    0xdcc7b44c87cdbacf,
    0xaaa441e3954bcf8a,
    0x6b887d56d5095f23,
    0x79581e16f3fd90c6,
    0x3b1b1355d189227d,
    0x4e529a5861876f6b,
    0x6c0eb522d5b12278,
    0x331ec15183177faf,
    0x01baaa710b0759ad,
];

/// Element of the order-r subgroup of Fp12*, written multiplicatively.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Gt(Fp12);

impl Gt {
    pub fn identity() -> Self {
        Gt(Fp12::ONE)
    }

    pub fn is_identity(&self) -> bool {
        self.0.is_one()
    }

    pub fn pow(&self, exp: &ScalarField) -> Self {
        Gt(self.0.pow_vartime(&exp.to_u64_limbs()))
    }

    pub fn inverse(&self) -> Self {
        // Unitary after the easy part: the inverse is the conjugate.
        Gt(self.0.conjugate())
    }

    pub fn as_fp12(&self) -> &Fp12 {
        &self.0
    }
}

impl Mul for Gt {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Gt(self.0 * rhs.0)
    }
}

impl MulAssign for Gt {
    fn mul_assign(&mut self, rhs: Self) {
        self.0 *= rhs.0;
    }
}

/// Computes `e(q, p)`. Either input at infinity gives the identity.
///
/// Inputs are assumed to be validated group elements.
pub fn pairing(q: &G2Affine, p: &G1Affine) -> Gt {
    final_exponentiation(miller_loop(q, p))
}

/// Tangent or chord through `t` (and `q`), evaluated at `p`, together with
/// the next Miller point.
///
/// The line `y - yT = λ(x - xT)` on the twist untwists to the sparse element
/// `yP + (λ xT - yT) v w - λ xP w`.
fn line_step(t: &G2Affine, q: &G2Affine, p: &G1Affine, lambda: Fp2) -> (Fp12, G2Affine) {
    let x3 = lambda.square() - t.x - q.x;
    let y3 = lambda * (t.x - x3) - t.y;

    let line = Fp12::new(
        Fp6::new(Fp2::new(p.y, BaseField::ZERO), Fp2::ZERO, Fp2::ZERO),
        Fp6::new(-lambda.mul_by_base(p.x), lambda * t.x - t.y, Fp2::ZERO),
    );

    (line, G2Affine::new(x3, y3))
}

fn doubling_step(t: &G2Affine, p: &G1Affine) -> (Fp12, G2Affine) {
    let x2 = t.x.square();
    let lambda = (x2 + x2 + x2) / t.y.double();
    line_step(t, t, p, lambda)
}

fn addition_step(t: &G2Affine, q: &G2Affine, p: &G1Affine) -> (Fp12, G2Affine) {
    let lambda = (q.y - t.y) / (q.x - t.x);
    line_step(t, q, p, lambda)
}

fn miller_loop(q: &G2Affine, p: &G1Affine) -> Fp12 {
    if q.is_infinity() || p.is_infinity() {
        return Fp12::ONE;
    }

    let mut f = Fp12::ONE;
    let mut t = *q;

    let top_bit = 127 - ATE_LOOP_COUNT.leading_zeros();
    for i in (0..top_bit).rev() {
        let (line, next) = doubling_step(&t, p);
        f = f.square() * line;
        t = next;

        if (ATE_LOOP_COUNT >> i) & 1 == 1 {
            let (line, next) = addition_step(&t, q, p);
            f *= line;
            t = next;
        }
    }

    let q1 = q.frobenius();
    let q2 = -q1.frobenius();

    let (line, next) = addition_step(&t, &q1, p);
    f *= line;
    t = next;

    let (line, _) = addition_step(&t, &q2, p);
    f *= line;

    f
}

fn final_exponentiation(f: Fp12) -> Gt {
    // f^(p^6 - 1)
    let f1 = f.conjugate() * f.inverse();
    // f1^(p^2 + 1)
    let f2 = f1.frobenius_map().frobenius_map() * f1;
    Gt(f2.pow_vartime(&HARD_EXPONENT))
}
