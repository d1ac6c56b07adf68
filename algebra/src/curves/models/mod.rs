use crate::fields::{Field, PrimeField};

pub mod short_weierstrass_affine;
pub use self::short_weierstrass_affine::*;

pub mod bn;

pub trait ModelParameters: 'static + Send + Sync {
    type BaseField: Field;
    type ScalarField: PrimeField;
}

/// Parameters of a curve y^2 = x^3 + a x + b in short Weierstrass form.
pub trait SWModelParameters: ModelParameters {
    const COEFF_A: Self::BaseField;
    const COEFF_B: Self::BaseField;
    const COFACTOR: &'static [u64];
    const AFFINE_GENERATOR_COEFFS: (Self::BaseField, Self::BaseField);

    #[inline(always)]
    fn mul_by_a(elem: &Self::BaseField) -> Self::BaseField {
        Self::COEFF_A * elem
    }
}
