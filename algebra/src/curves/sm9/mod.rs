//! The SM9 Barreto-Naehrig curve of GM/T 0044, t = 0x600000000058F98A:
//! E: y^2 = x^3 + 5 over Fq, with G2 on the sextic twist over Fq2 and the
//! R-ate pairing into Fq12.

use crate::{
    biginteger::BigInteger256 as BigInteger,
    curves::{
        models::bn::{Bn, BnParameters, G1Affine as BnG1Affine, G2Affine as BnG2Affine},
        PairingCurve, PairingEngine,
    },
    field_new,
    fields::sm9::{fq12::Fq12Parameters, fq2::Fq2Parameters, fq4::Fq4Parameters, Fq, Fq12, Fq2},
};

pub mod g1;
pub mod g2;

#[cfg(test)]
mod tests;

use self::{g1::Sm9G1Parameters, g2::Sm9G2Parameters};

pub struct Sm9Parameters;

impl BnParameters for Sm9Parameters {
    /// 6t + 2 = 0x2400000000215D93E
    const ATE_LOOP_COUNT: &'static [u64] = &[0x400000000215d93e, 0x2];

    /// t = 0x600000000058F98A
    const T: &'static [u64] = &[0x600000000058f98a];

    /// 1/(-2) mod q
    const TWIST_PHI_FACTOR: Fq = field_new!(Fq, BigInteger([
        0xe56f9b27e351457d,
        0x21f2934b1a7aeedb,
        0xd603ab4ff58ec745,
        0x3640000002a3a6f1,
    ]));

    const TWIST_FROBENIUS_COEFF_X_1: Fq2 = field_new!(
        Fq2,
        field_new!(Fq, BigInteger([
            0x646a4b5a4e6783b9,
            0xd5e4017f8d980f9d,
            0x8d8bf6fd0cdfe790,
            0x2d4ac18b775a8f7b,
        ])),
        field_new!(Fq, BigInteger([
            0x0,
            0x0,
            0x0,
            0x0,
        ])),
    );

    const TWIST_FROBENIUS_COEFF_Y_1: Fq2 = field_new!(
        Fq2,
        field_new!(Fq, BigInteger([
            0xabbaac18a46a2054,
            0x46ee57561222c759,
            0x1dae609fa0e23561,
            0x1df7113dae0adc3c,
        ])),
        field_new!(Fq, BigInteger([
            0x0,
            0x0,
            0x0,
            0x0,
        ])),
    );

    const TWIST_FROBENIUS_COEFF_X_2: Fq2 = field_new!(
        Fq2,
        field_new!(Fq, BigInteger([
            0x2f4981aa150a0eb3,
            0x19c92815c28ded55,
            0x39934d9cf7fd761b,
            0x99cac18b7ca1dd5f,
        ])),
        field_new!(Fq, BigInteger([
            0x0,
            0x0,
            0x0,
            0x0,
        ])),
    );

    const TWIST_FROBENIUS_COEFF_Y_2: Fq2 = field_new!(
        Fq2,
        field_new!(Fq, BigInteger([
            0xcadf364fc6a28afa,
            0x43e5269634f5ddb7,
            0xac07569feb1d8e8a,
            0x6c80000005474de3,
        ])),
        field_new!(Fq, BigInteger([
            0x0,
            0x0,
            0x0,
            0x0,
        ])),
    );

    type Fp = Fq;
    type Fp2Params = Fq2Parameters;
    type Fp4Params = Fq4Parameters;
    type Fp12Params = Fq12Parameters;
    type G1Parameters = Sm9G1Parameters;
    type G2Parameters = Sm9G2Parameters;
}

pub type Sm9 = Bn<Sm9Parameters>;

pub type G1Affine = BnG1Affine<Sm9Parameters>;
pub type G2Affine = BnG2Affine<Sm9Parameters>;

impl PairingCurve for G1Affine {
    type Engine = Sm9;
    type PairWith = G2Affine;
    type PairingResult = Fq12;

    fn pairing_with(&self, other: &Self::PairWith) -> Self::PairingResult {
        Sm9::pairing(*self, *other)
    }
}

impl PairingCurve for G2Affine {
    type Engine = Sm9;
    type PairWith = G1Affine;
    type PairingResult = Fq12;

    fn pairing_with(&self, other: &Self::PairWith) -> Self::PairingResult {
        Sm9::pairing(*other, *self)
    }
}
