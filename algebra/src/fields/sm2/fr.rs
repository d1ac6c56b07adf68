//! The sm2p256v1 scalar field (the order of the base point).

use crate::{
    biginteger::BigInteger256 as BigInteger,
    fields::{Fp256, Fp256Parameters, FpParameters},
};

pub type Fr = Fp256<FrParameters>;

pub struct FrParameters;

impl Fp256Parameters for FrParameters {}
impl FpParameters for FrParameters {
    type BigInt = BigInteger;

    /// MODULUS = 0xfffffffeffffffffffffffffffffffff7203df6b21c6052b53bbf40939d54123
    const MODULUS: BigInteger = BigInteger([
            0x53bbf40939d54123,
            0x7203df6b21c6052b,
            0xffffffffffffffff,
            0xfffffffeffffffff,
        ]);

    const MODULUS_BITS: u32 = 256;

    const REPR_SHAVE_BITS: u32 = 0;

    /// R = 2^256 mod MODULUS
    const R: BigInteger = BigInteger([
            0xac440bf6c62abedd,
            0x8dfc2094de39fad4,
            0x0,
            0x100000000,
        ]);

    /// R^2 mod MODULUS
    const R2: BigInteger = BigInteger([
            0x901192af7c114f20,
            0x3464504ade6fa2fa,
            0x620fc84c3affe0d4,
            0x1eb5e412a22b3d3b,
        ]);

    /// -MODULUS^(-1) mod 2^64
    const INV: u64 = 0x327f9e8872350975;

    const MODULUS_MINUS_ONE_DIV_TWO: BigInteger = BigInteger([
            0xa9ddfa049ceaa091,
            0xb901efb590e30295,
            0xffffffffffffffff,
            0x7fffffff7fffffff,
        ]);
}
