use rand::distr::{Distribution, StandardUniform};
use rand::Rng;

use crate::{BaseField, Fp2, ScalarField};

/// Uniform sampling for the prime fields and Fp2.
pub trait RandomField: Sized {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

impl RandomField for BaseField {
    #[inline]
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        StandardUniform.sample(rng)
    }
}

impl RandomField for ScalarField {
    #[inline]
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        StandardUniform.sample(rng)
    }
}

impl RandomField for Fp2 {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Fp2::new(BaseField::random(rng), BaseField::random(rng))
    }
}
