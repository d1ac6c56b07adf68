//! The sm2p256v1 base field.

use crate::{
    biginteger::BigInteger256 as BigInteger,
    fields::{Fp256, Fp256Parameters, FpParameters},
};

pub type Fq = Fp256<FqParameters>;

pub struct FqParameters;

impl Fp256Parameters for FqParameters {}
impl FpParameters for FqParameters {
    type BigInt = BigInteger;

    /// MODULUS = 0xfffffffeffffffffffffffffffffffffffffffff00000000ffffffffffffffff
    const MODULUS: BigInteger = BigInteger([
            0xffffffffffffffff,
            0xffffffff00000000,
            0xffffffffffffffff,
            0xfffffffeffffffff,
        ]);

    const MODULUS_BITS: u32 = 256;

    const REPR_SHAVE_BITS: u32 = 0;

    /// R = 2^256 mod MODULUS
    const R: BigInteger = BigInteger([
            0x1,
            0xffffffff,
            0x0,
            0x100000000,
        ]);

    /// R^2 mod MODULUS
    const R2: BigInteger = BigInteger([
            0x200000003,
            0x2ffffffff,
            0x100000001,
            0x400000002,
        ]);

    /// -MODULUS^(-1) mod 2^64
    const INV: u64 = 0x1;

    const MODULUS_MINUS_ONE_DIV_TWO: BigInteger = BigInteger([
            0x7fffffffffffffff,
            0xffffffff80000000,
            0xffffffffffffffff,
            0x7fffffff7fffffff,
        ]);
}
