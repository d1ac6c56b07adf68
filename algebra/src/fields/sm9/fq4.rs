//! Fq4 = Fq2[v]/(v^2 - u), the middle layer of the SM9 tower.

use crate::{
    biginteger::BigInteger256 as BigInteger,
    field_new,
    fields::{fp4::{Fp4, Fp4Parameters}, sm9::{fq::Fq, fq2::{Fq2, Fq2Parameters}}},
};

pub type Fq4 = Fp4<Fq4Parameters>;

pub struct Fq4Parameters;

impl Fp4Parameters for Fq4Parameters {
    type Fp2Params = Fq2Parameters;

    /// v^(q^i - 1) for i = 0..4
    const FROBENIUS_COEFF_FP4_C1: [Fq2; 4] = [
        field_new!(
            Fq2,
            field_new!(Fq, BigInteger([
                0x1a9064d81caeba83,
                0xde0d6cb4e5851124,
                0x29fc54b00a7138ba,
                0x49bffffffd5c590e,
            ])),
            field_new!(Fq, BigInteger([
                0x0,
                0x0,
                0x0,
                0x0,
            ])),
        ),
        field_new!(
            Fq2,
            field_new!(Fq, BigInteger([
                0x39b4ef0f3ee72529,
                0xdb043bf508582782,
                0xb8554ab054ac91e3,
                0x9848eec25498cab5,
            ])),
            field_new!(Fq, BigInteger([
                0x0,
                0x0,
                0x0,
                0x0,
            ])),
        ),
        field_new!(
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
        ),
        field_new!(
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
        ),
    ];
}
