//! The sm2p256v1 curve of GB/T 32918: y^2 = x^3 - 3x + b over a 256-bit
//! prime field, cofactor 1.

use crate::{
    biginteger::BigInteger256 as BigInteger,
    curves::models::{short_weierstrass_affine::GroupAffine, ModelParameters, SWModelParameters},
    field_new,
    fields::sm2::{Fq, Fr},
};

#[cfg(test)]
mod tests;

pub type Affine = GroupAffine<Sm2P256V1Parameters>;

pub struct Sm2P256V1Parameters;

impl ModelParameters for Sm2P256V1Parameters {
    type BaseField = Fq;
    type ScalarField = Fr;
}

impl SWModelParameters for Sm2P256V1Parameters {
    /// COEFF_A = p - 3
    const COEFF_A: Fq = field_new!(Fq, BigInteger([
        0xfffffffffffffffc,
        0xfffffffc00000003,
        0xffffffffffffffff,
        0xfffffffbffffffff,
    ]));

    /// COEFF_B = 0x28E9FA9E9D9F5E344D5A9E4BCF6509A7F39789F515AB8F92DDBCBD414D940E93
    const COEFF_B: Fq = field_new!(Fq, BigInteger([
        0x90d230632bc0dd42,
        0x71cf379ae9b537ab,
        0x527981505ea51c3c,
        0x240fe188ba20e2c8,
    ]));

    const COFACTOR: &'static [u64] = &[1];

    /// G = (0x32C4AE2C...334C74C7, 0xBC3736A2...2139F0A0)
    const AFFINE_GENERATOR_COEFFS: (Fq, Fq) = (
        field_new!(Fq, BigInteger([
            0x61328990f418029e,
            0x3e7981eddca6c050,
            0xd6a1ed99ac24c3c3,
            0x91167a5ee1c13b05,
        ])),
        field_new!(Fq, BigInteger([
            0xc1354e593c2d0ddd,
            0xc1f5e5788d3295fa,
            0x8d4cfb066e2a48f8,
            0x63cd65d481d735bd,
        ])),
    );
}
