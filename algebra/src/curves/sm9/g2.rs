use crate::{
    biginteger::BigInteger256 as BigInteger,
    curves::models::{ModelParameters, SWModelParameters},
    field_new,
    fields::{sm9::{Fq, Fq2, Fr}, Field},
};

pub struct Sm9G2Parameters;

impl ModelParameters for Sm9G2Parameters {
    type BaseField = Fq2;
    type ScalarField = Fr;
}

/// The sextic twist E': y^2 = x^3 + b * u hosting G2.
impl SWModelParameters for Sm9G2Parameters {
    /// COEFF_A = 0
    const COEFF_A: Fq2 = field_new!(
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
    );

    /// COEFF_B = 5 * u
    const COEFF_B: Fq2 = field_new!(
        Fq2,
        field_new!(Fq, BigInteger([
            0x0,
            0x0,
            0x0,
            0x0,
        ])),
        field_new!(Fq, BigInteger([
            0xb9f2c1e8c8c71995,
            0x125df8f246a377fc,
            0x25e650d049188d1c,
            0x43fffffed866f63,
        ])),
    );

    const COFACTOR: &'static [u64] = &[1];

    /// G2, coordinates in the (c0, c1) order of the Fq2 model
    const AFFINE_GENERATOR_COEFFS: (Fq2, Fq2) = (
        field_new!(
            Fq2,
            field_new!(Fq, BigInteger([
                0x260226a68ce2da8f,
                0x7ee5645edbf6c06b,
                0xf8f57c82b1495444,
                0x61fcf018bc47c4d1,
            ])),
            field_new!(Fq, BigInteger([
                0xdb6db4822750a8a6,
                0x84c6135a5121f134,
                0x1874032f88791d41,
                0x905112f2b85f3a37,
            ])),
        ),
        field_new!(
            Fq2,
            field_new!(Fq, BigInteger([
                0xc03f138f9171c24a,
                0x92fbab45a15a3ca7,
                0x2445561e2ff77cdb,
                0x108495e0c0f62ece,
            ])),
            field_new!(Fq, BigInteger([
                0xf7b82dac4c89bfbb,
                0x3706f3f6a49dc12f,
                0x1e29de93d3eef769,
                0x81e448c3c76a5d53,
            ])),
        ),
    );

    /// a = 0: the term drops out of the group law.
    #[inline(always)]
    fn mul_by_a(_: &Fq2) -> Fq2 {
        Fq2::new(Fq::zero(), Fq::zero())
    }
}
