//! Fq12 = Fq4[w]/(w^3 - v), the embedding field of the SM9 pairing.

use crate::{
    biginteger::BigInteger256 as BigInteger,
    field_new,
    fields::{
        fp12_3over4::{Fp12, Fp12Parameters},
        sm9::{fq::Fq, fq2::Fq2, fq4::{Fq4, Fq4Parameters}},
    },
};

pub type Fq12 = Fp12<Fq12Parameters>;

pub struct Fq12Parameters;

impl Fp12Parameters for Fq12Parameters {
    type Fp4Params = Fq4Parameters;

    /// w^(q^i - 1) for i = 0..12
    const FROBENIUS_COEFF_FP12_C1: [Fq4; 12] = [
        field_new!(
            Fq4,
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
                    0x0,
                    0x0,
                    0x0,
                    0x0,
                ])),
                field_new!(Fq, BigInteger([
                    0x0,
                    0x0,
                    0x0,
                    0x0,
                ])),
            ),
        ),
        field_new!(
            Fq4,
            field_new!(
                Fq2,
                field_new!(Fq, BigInteger([
                    0x1a98dfbd4575299f,
                    0x9ec8547b245c54fd,
                    0xf51f5eac13df846c,
                    0x9ef74015d5a16393,
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
                    0x0,
                    0x0,
                    0x0,
                    0x0,
                ])),
                field_new!(Fq, BigInteger([
                    0x0,
                    0x0,
                    0x0,
                    0x0,
                ])),
            ),
        ),
        field_new!(
            Fq4,
            field_new!(
                Fq2,
                field_new!(Fq, BigInteger([
                    0xb626197dce4736ca,
                    0x8296b3557ed0186,
                    0x9c705db2fd91512a,
                    0x1c753e748601c992,
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
                    0x0,
                    0x0,
                    0x0,
                    0x0,
                ])),
                field_new!(Fq, BigInteger([
                    0x0,
                    0x0,
                    0x0,
                    0x0,
                ])),
            ),
        ),
        field_new!(
            Fq4,
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
                    0x0,
                    0x0,
                    0x0,
                    0x0,
                ])),
                field_new!(Fq, BigInteger([
                    0x0,
                    0x0,
                    0x0,
                    0x0,
                ])),
            ),
        ),
        field_new!(
            Fq4,
            field_new!(
                Fq2,
                field_new!(Fq, BigInteger([
                    0x81054fcd94e9c1c4,
                    0x4c0e91cb8ce2df3e,
                    0x4877b452e8aedfb4,
                    0x88f53e748b491776,
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
                    0x0,
                    0x0,
                    0x0,
                    0x0,
                ])),
                field_new!(Fq, BigInteger([
                    0x0,
                    0x0,
                    0x0,
                    0x0,
                ])),
            ),
        ),
        field_new!(
            Fq4,
            field_new!(
                Fq2,
                field_new!(Fq, BigInteger([
                    0x48baa79dcc34107,
                    0x5e2e7ac4fe76c161,
                    0x99399754365bd4bc,
                    0xaf91aeac819b0e13,
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
                    0x0,
                    0x0,
                    0x0,
                    0x0,
                ])),
                field_new!(Fq, BigInteger([
                    0x0,
                    0x0,
                    0x0,
                    0x0,
                ])),
            ),
        ),
        field_new!(
            Fq4,
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
                    0x0,
                    0x0,
                    0x0,
                    0x0,
                ])),
                field_new!(Fq, BigInteger([
                    0x0,
                    0x0,
                    0x0,
                    0x0,
                ])),
            ),
        ),
        field_new!(
            Fq4,
            field_new!(
                Fq2,
                field_new!(Fq, BigInteger([
                    0xcad6bb6a9ddc1bde,
                    0x832a3ecff61e99de,
                    0xe0e44ca3e1af42d8,
                    0x1748bfea2d02435d,
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
                    0x0,
                    0x0,
                    0x0,
                    0x0,
                ])),
                field_new!(Fq, BigInteger([
                    0x0,
                    0x0,
                    0x0,
                    0x0,
                ])),
            ),
        ),
        field_new!(
            Fq4,
            field_new!(
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
            ),
            field_new!(
                Fq2,
                field_new!(Fq, BigInteger([
                    0x0,
                    0x0,
                    0x0,
                    0x0,
                ])),
                field_new!(Fq, BigInteger([
                    0x0,
                    0x0,
                    0x0,
                    0x0,
                ])),
            ),
        ),
        field_new!(
            Fq4,
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
            field_new!(
                Fq2,
                field_new!(Fq, BigInteger([
                    0x0,
                    0x0,
                    0x0,
                    0x0,
                ])),
                field_new!(Fq, BigInteger([
                    0x0,
                    0x0,
                    0x0,
                    0x0,
                ])),
            ),
        ),
        field_new!(
            Fq4,
            field_new!(
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
            ),
            field_new!(
                Fq2,
                field_new!(Fq, BigInteger([
                    0x0,
                    0x0,
                    0x0,
                    0x0,
                ])),
                field_new!(Fq, BigInteger([
                    0x0,
                    0x0,
                    0x0,
                    0x0,
                ])),
            ),
        ),
        field_new!(
            Fq4,
            field_new!(
                Fq2,
                field_new!(Fq, BigInteger([
                    0xe0e3f0ae068e0476,
                    0xc3c418861c042d7a,
                    0x3cca13fbbf32f288,
                    0x6ae5153810898de,
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
                    0x0,
                    0x0,
                    0x0,
                    0x0,
                ])),
                field_new!(Fq, BigInteger([
                    0x0,
                    0x0,
                    0x0,
                    0x0,
                ])),
            ),
        ),
    ];

    /// w^(2(q^i - 1)) for i = 0..12
    const FROBENIUS_COEFF_FP12_C2: [Fq4; 12] = [
        field_new!(
            Fq4,
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
                    0x0,
                    0x0,
                    0x0,
                    0x0,
                ])),
                field_new!(Fq, BigInteger([
                    0x0,
                    0x0,
                    0x0,
                    0x0,
                ])),
            ),
        ),
        field_new!(
            Fq4,
            field_new!(
                Fq2,
                field_new!(Fq, BigInteger([
                    0xb626197dce4736ca,
                    0x8296b3557ed0186,
                    0x9c705db2fd91512a,
                    0x1c753e748601c992,
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
                    0x0,
                    0x0,
                    0x0,
                    0x0,
                ])),
                field_new!(Fq, BigInteger([
                    0x0,
                    0x0,
                    0x0,
                    0x0,
                ])),
            ),
        ),
        field_new!(
            Fq4,
            field_new!(
                Fq2,
                field_new!(Fq, BigInteger([
                    0x81054fcd94e9c1c4,
                    0x4c0e91cb8ce2df3e,
                    0x4877b452e8aedfb4,
                    0x88f53e748b491776,
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
                    0x0,
                    0x0,
                    0x0,
                    0x0,
                ])),
                field_new!(Fq, BigInteger([
                    0x0,
                    0x0,
                    0x0,
                    0x0,
                ])),
            ),
        ),
        field_new!(
            Fq4,
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
                    0x0,
                    0x0,
                    0x0,
                    0x0,
                ])),
                field_new!(Fq, BigInteger([
                    0x0,
                    0x0,
                    0x0,
                    0x0,
                ])),
            ),
        ),
        field_new!(
            Fq4,
            field_new!(
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
            ),
            field_new!(
                Fq2,
                field_new!(Fq, BigInteger([
                    0x0,
                    0x0,
                    0x0,
                    0x0,
                ])),
                field_new!(Fq, BigInteger([
                    0x0,
                    0x0,
                    0x0,
                    0x0,
                ])),
            ),
        ),
        field_new!(
            Fq4,
            field_new!(
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
            ),
            field_new!(
                Fq2,
                field_new!(Fq, BigInteger([
                    0x0,
                    0x0,
                    0x0,
                    0x0,
                ])),
                field_new!(Fq, BigInteger([
                    0x0,
                    0x0,
                    0x0,
                    0x0,
                ])),
            ),
        ),
        field_new!(
            Fq4,
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
                    0x0,
                    0x0,
                    0x0,
                    0x0,
                ])),
                field_new!(Fq, BigInteger([
                    0x0,
                    0x0,
                    0x0,
                    0x0,
                ])),
            ),
        ),
        field_new!(
            Fq4,
            field_new!(
                Fq2,
                field_new!(Fq, BigInteger([
                    0xb626197dce4736ca,
                    0x8296b3557ed0186,
                    0x9c705db2fd91512a,
                    0x1c753e748601c992,
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
                    0x0,
                    0x0,
                    0x0,
                    0x0,
                ])),
                field_new!(Fq, BigInteger([
                    0x0,
                    0x0,
                    0x0,
                    0x0,
                ])),
            ),
        ),
        field_new!(
            Fq4,
            field_new!(
                Fq2,
                field_new!(Fq, BigInteger([
                    0x81054fcd94e9c1c4,
                    0x4c0e91cb8ce2df3e,
                    0x4877b452e8aedfb4,
                    0x88f53e748b491776,
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
                    0x0,
                    0x0,
                    0x0,
                    0x0,
                ])),
                field_new!(Fq, BigInteger([
                    0x0,
                    0x0,
                    0x0,
                    0x0,
                ])),
            ),
        ),
        field_new!(
            Fq4,
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
                    0x0,
                    0x0,
                    0x0,
                    0x0,
                ])),
                field_new!(Fq, BigInteger([
                    0x0,
                    0x0,
                    0x0,
                    0x0,
                ])),
            ),
        ),
        field_new!(
            Fq4,
            field_new!(
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
            ),
            field_new!(
                Fq2,
                field_new!(Fq, BigInteger([
                    0x0,
                    0x0,
                    0x0,
                    0x0,
                ])),
                field_new!(Fq, BigInteger([
                    0x0,
                    0x0,
                    0x0,
                    0x0,
                ])),
            ),
        ),
        field_new!(
            Fq4,
            field_new!(
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
            ),
            field_new!(
                Fq2,
                field_new!(Fq, BigInteger([
                    0x0,
                    0x0,
                    0x0,
                    0x0,
                ])),
                field_new!(Fq, BigInteger([
                    0x0,
                    0x0,
                    0x0,
                    0x0,
                ])),
            ),
        ),
    ];
}
