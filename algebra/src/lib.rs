//! Number-theoretic core of the GM/T algorithm suite.
//!
//! The crate is organized leaves first:
//!
//! - fixed-width big integers and their carry arithmetic,
//! - Montgomery prime fields and the towered extensions
//!   Fp -> Fp2 -> Fp4 -> Fp12 (u^2 = -2, v^2 = u, w^3 = v),
//! - affine short-Weierstrass curves over any of those fields, together with
//!   the GM/T point-compression codec,
//! - the R-ate pairing on the SM9 Barreto-Naehrig curve.
//!
//! Concrete instantiations live in `fields::{sm2, sm9}` and
//! `curves::{sm2p256v1, sm9}`.

pub mod biginteger;
pub use self::biginteger::*;

pub mod bytes;
pub use self::bytes::*;

pub mod error;
pub use self::error::Error;

#[macro_use]
pub mod fields;
pub use self::fields::*;

pub mod curves;
pub use self::curves::*;

pub mod rand;
pub use self::rand::UniformRand;
