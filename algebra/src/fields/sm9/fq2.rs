//! Fq2 = Fq[u]/(u^2 + 2), the twist field of the SM9 curve.

use crate::{
    biginteger::BigInteger256 as BigInteger,
    field_new,
    fields::{fp2::{Fp2, Fp2Parameters}, sm9::fq::Fq},
};

pub type Fq2 = Fp2<Fq2Parameters>;

pub struct Fq2Parameters;

impl Fp2Parameters for Fq2Parameters {
    type Fp = Fq;

    /// NONRESIDUE = -2
    const NONRESIDUE: Fq = field_new!(Fq, BigInteger([
        0xb04ed177a9f3d077,
        0x65d7b9e14f70cc93,
        0x820b01efe0ac55cf,
        0x22c0000007eaf4d5,
    ]));

    /// u^(q^i - 1) for i = 0, 1
    const FROBENIUS_COEFF_FP2_C1: [Fq; 2] = [
        field_new!(Fq, BigInteger([
            0x1a9064d81caeba83,
            0xde0d6cb4e5851124,
            0x29fc54b00a7138ba,
            0x49bffffffd5c590e,
        ])),
        field_new!(Fq, BigInteger([
            0xcadf364fc6a28afa,
            0x43e5269634f5ddb7,
            0xac07569feb1d8e8a,
            0x6c80000005474de3,
        ])),
    ];
}
