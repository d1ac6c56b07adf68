//! The SM9 BN base field, q = 36t^4 + 36t^3 + 24t^2 + 6t + 1.

use crate::{
    biginteger::BigInteger256 as BigInteger,
    fields::{Fp256, Fp256Parameters, FpParameters},
};

pub type Fq = Fp256<FqParameters>;

pub struct FqParameters;

impl Fp256Parameters for FqParameters {}
impl FpParameters for FqParameters {
    type BigInt = BigInteger;

    /// MODULUS = 0xb640000002a3a6f1d603ab4ff58ec74521f2934b1a7aeedbe56f9b27e351457d
    const MODULUS: BigInteger = BigInteger([
            0xe56f9b27e351457d,
            0x21f2934b1a7aeedb,
            0xd603ab4ff58ec745,
            0xb640000002a3a6f1,
        ]);

    const MODULUS_BITS: u32 = 256;

    const REPR_SHAVE_BITS: u32 = 0;

    /// R = 2^256 mod MODULUS
    const R: BigInteger = BigInteger([
            0x1a9064d81caeba83,
            0xde0d6cb4e5851124,
            0x29fc54b00a7138ba,
            0x49bffffffd5c590e,
        ]);

    /// R^2 mod MODULUS
    const R2: BigInteger = BigInteger([
            0x27dea312b417e2d2,
            0x88f8105fae1a5d3f,
            0xe479b522d6706e7b,
            0x2ea795a656f62fbd,
        ]);

    /// -MODULUS^(-1) mod 2^64
    const INV: u64 = 0x892bc42c2f2ee42b;

    const MODULUS_MINUS_ONE_DIV_TWO: BigInteger = BigInteger([
            0xf2b7cd93f1a8a2be,
            0x90f949a58d3d776d,
            0xeb01d5a7fac763a2,
            0x5b2000000151d378,
        ]);
}
