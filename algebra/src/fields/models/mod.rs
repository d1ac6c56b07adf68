//! Montgomery arithmetic for 256-bit moduli and the models of the extension
//! tower used by the GM/T curves:
//!
//! - `Fp256` for the base and scalar fields,
//! - `Fp2` with u^2 = -2,
//! - `Fp4` as a quadratic extension of `Fp2` with v^2 = u,
//! - `Fp12` as a cubic extension of `Fp4` with w^3 = v.

pub mod fp_256;
pub use self::fp_256::*;

pub mod fp2;
pub use self::fp2::*;

pub mod fp4;
pub use self::fp4::*;

pub mod fp12_3over4;
pub use self::fp12_3over4::*;
