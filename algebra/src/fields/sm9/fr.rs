//! The SM9 group order, n = 36t^4 + 36t^3 + 18t^2 + 6t + 1.

use crate::{
    biginteger::BigInteger256 as BigInteger,
    fields::{Fp256, Fp256Parameters, FpParameters},
};

pub type Fr = Fp256<FrParameters>;

pub struct FrParameters;

impl Fp256Parameters for FrParameters {}
impl FpParameters for FrParameters {
    type BigInt = BigInteger;

    /// MODULUS = 0xb640000002a3a6f1d603ab4ff58ec74449f2934b18ea8beee56ee19cd69ecf25
    const MODULUS: BigInteger = BigInteger([
            0xe56ee19cd69ecf25,
            0x49f2934b18ea8bee,
            0xd603ab4ff58ec744,
            0xb640000002a3a6f1,
        ]);

    const MODULUS_BITS: u32 = 256;

    const REPR_SHAVE_BITS: u32 = 0;

    /// R = 2^256 mod MODULUS
    const R: BigInteger = BigInteger([
            0x1a911e63296130db,
            0xb60d6cb4e7157411,
            0x29fc54b00a7138bb,
            0x49bffffffd5c590e,
        ]);

    /// R^2 mod MODULUS
    const R2: BigInteger = BigInteger([
            0x7598cd79cd750c35,
            0xe4a08110bb6daeab,
            0xbfee4bae7d78a1f9,
            0x8894f5d163695d0e,
        ]);

    /// -MODULUS^(-1) mod 2^64
    const INV: u64 = 0x1d02662351974b53;

    const MODULUS_MINUS_ONE_DIV_TWO: BigInteger = BigInteger([
            0x72b770ce6b4f6792,
            0x24f949a58c7545f7,
            0xeb01d5a7fac763a2,
            0x5b2000000151d378,
        ]);
}
