use crate::{
    biginteger::BigInteger256 as BigInteger,
    curves::models::{ModelParameters, SWModelParameters},
    field_new,
    fields::{sm9::{Fq, Fr}, Field},
};

pub struct Sm9G1Parameters;

impl ModelParameters for Sm9G1Parameters {
    type BaseField = Fq;
    type ScalarField = Fr;
}

impl SWModelParameters for Sm9G1Parameters {
    /// COEFF_A = 0
    const COEFF_A: Fq = field_new!(Fq, BigInteger([
        0x0,
        0x0,
        0x0,
        0x0,
    ]));

    /// COEFF_B = 5
    const COEFF_B: Fq = field_new!(Fq, BigInteger([
        0xb9f2c1e8c8c71995,
        0x125df8f246a377fc,
        0x25e650d049188d1c,
        0x43fffffed866f63,
    ]));

    const COFACTOR: &'static [u64] = &[1];

    /// G1 = (0x93DE051D...7C66DDDD, 0x21FE8DDA...0A3EA616)
    const AFFINE_GENERATOR_COEFFS: (Fq, Fq) = (
        field_new!(Fq, BigInteger([
            0x22e935e29860501b,
            0xa946fd5e0073282c,
            0xefd0cec817a649be,
            0x5129787c869140b5,
        ])),
        field_new!(Fq, BigInteger([
            0xee779649eb87f7c7,
            0x15563cbdec30a576,
            0x326353912824efbf,
            0x7215717763c39828,
        ])),
    );

    /// a = 0: the term drops out of the group law.
    #[inline(always)]
    fn mul_by_a(_: &Fq) -> Fq {
        Fq::zero()
    }
}
