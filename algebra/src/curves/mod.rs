//! Elliptic-curve models and their GM/T instantiations.

use crate::{
    bytes::{FromBytes, ToBytes},
    fields::{Field, PrimeField},
    rand::UniformRand,
};
use serde::{Deserialize, Serialize};
use std::{
    fmt::{Debug, Display},
    hash::Hash,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};

pub mod models;
pub use self::models::*;

pub mod sm2p256v1;
pub mod sm9;

/// Point-compression mode of the GM/T wire format.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PcMode {
    /// 0x04 prefix, x || y.
    Raw,
    /// 0x02 / 0x03 prefix by the parity of y, x only.
    Compressed,
    /// 0x06 / 0x07 prefix by the parity of y, x || y.
    Mixed,
}

/// Affine points of a curve in short Weierstrass form.
pub trait AffineCurve:
    'static
    + Copy
    + Clone
    + Debug
    + Display
    + Default
    + Send
    + Sync
    + Eq
    + Hash
    + ToBytes
    + FromBytes
    + UniformRand
    + Neg<Output = Self>
    + Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + AddAssign<Self>
    + SubAssign<Self>
    + for<'a> Add<&'a Self, Output = Self>
    + for<'a> Sub<&'a Self, Output = Self>
    + for<'a> AddAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
{
    type ScalarField: PrimeField;
    type BaseField: Field;

    /// The point at infinity, the group identity.
    fn zero() -> Self;

    fn is_zero(&self) -> bool;

    fn prime_subgroup_generator() -> Self;

    /// Whether the coordinates satisfy the curve equation. The point at
    /// infinity is valid by convention.
    fn is_on_curve(&self) -> bool;

    /// Double-and-add scalar multiplication, most significant bit first.
    fn mul<S: AsRef<[u64]>>(&self, scalar: S) -> Self;

    fn mul_by_cofactor(&self) -> Self;
}

/// A bilinear pairing e: G1 x G2 -> GT.
pub trait PairingEngine: Sized + 'static {
    /// The scalar field of the r-order subgroups.
    type Fr: PrimeField;
    type G1Affine: AffineCurve<ScalarField = Self::Fr, BaseField = Self::Fq>;
    type G2Affine: AffineCurve<ScalarField = Self::Fr, BaseField = Self::Fqe>;
    /// The base field.
    type Fq: PrimeField;
    /// The twist field.
    type Fqe: Field;
    /// The embedding field, target of the pairing.
    type Fqk: Field;

    fn miller_loop(p: &Self::G1Affine, q: &Self::G2Affine) -> Self::Fqk;

    /// `None` only for a vanishing Miller value, which valid inputs never
    /// produce.
    fn final_exponentiation(f: &Self::Fqk) -> Option<Self::Fqk>;

    fn pairing(p: Self::G1Affine, q: Self::G2Affine) -> Self::Fqk {
        Self::final_exponentiation(&Self::miller_loop(&p, &q)).unwrap()
    }
}

/// Curves that participate in a pairing.
pub trait PairingCurve: AffineCurve {
    type Engine: PairingEngine;
    type PairWith: AffineCurve;
    type PairingResult: Field;

    fn pairing_with(&self, other: &Self::PairWith) -> Self::PairingResult;
}
