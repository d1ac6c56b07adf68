//! Field traits and the extension-tower models.

use crate::{
    biginteger::BigInteger,
    bytes::{FromBytes, ToBytes},
    rand::UniformRand,
};
use std::{
    fmt::{Debug, Display},
    hash::Hash,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

#[macro_use]
pub mod macros;

pub mod models;
pub use self::models::*;

pub mod sm2;
pub mod sm9;

#[cfg(test)]
mod tests;

/// The interface for a generic field.
pub trait Field:
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
    + Sized
    + Neg<Output = Self>
    + Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Mul<Self, Output = Self>
    + Div<Self, Output = Self>
    + AddAssign<Self>
    + SubAssign<Self>
    + MulAssign<Self>
    + DivAssign<Self>
    + for<'a> Add<&'a Self, Output = Self>
    + for<'a> Sub<&'a Self, Output = Self>
    + for<'a> Mul<&'a Self, Output = Self>
    + for<'a> Div<&'a Self, Output = Self>
    + for<'a> AddAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
    + for<'a> MulAssign<&'a Self>
    + for<'a> DivAssign<&'a Self>
{
    /// The additive identity.
    fn zero() -> Self;

    fn is_zero(&self) -> bool;

    /// The multiplicative identity.
    fn one() -> Self;

    fn is_one(&self) -> bool;

    /// Least significant bit of the canonical representative of the
    /// constant-term coefficient. Point compression canonicalizes on it.
    fn parity(&self) -> bool;

    fn double(&self) -> Self;

    fn double_in_place(&mut self) -> &mut Self;

    fn square(&self) -> Self;

    fn square_in_place(&mut self) -> &mut Self;

    /// The multiplicative inverse, if the element is non-zero.
    fn inverse(&self) -> Option<Self>;

    fn inverse_in_place(&mut self) -> Option<&mut Self>;

    /// The p^power-th power Frobenius automorphism, applied through the
    /// precomputed coefficient tables of the tower.
    fn frobenius_map(&mut self, power: usize);

    /// Exponentiation by squaring, most significant bit first.
    fn pow<S: AsRef<[u64]>>(&self, exp: S) -> Self {
        let mut res = Self::one();
        for i in BitIterator::new(exp) {
            res.square_in_place();
            if i {
                res *= self;
            }
        }
        res
    }
}

/// The outcome of the Euler criterion.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum LegendreSymbol {
    Zero,
    QuadraticResidue,
    QuadraticNonResidue,
}

impl LegendreSymbol {
    pub fn is_zero(&self) -> bool {
        *self == LegendreSymbol::Zero
    }

    pub fn is_qnr(&self) -> bool {
        *self == LegendreSymbol::QuadraticNonResidue
    }

    pub fn is_qr(&self) -> bool {
        *self == LegendreSymbol::QuadraticResidue
    }
}

/// A field admitting an effective square-root computation.
pub trait SquareRootField: Field {
    fn legendre(&self) -> LegendreSymbol;

    /// A square root of the element, if one exists.
    fn sqrt(&self) -> Option<Self>;

    fn sqrt_in_place(&mut self) -> Option<&mut Self>;
}

/// Parameters of a prime field of four 64-bit limbs.
pub trait FpParameters: 'static + Send + Sync + Sized {
    type BigInt: BigInteger;

    /// The modulus p.
    const MODULUS: Self::BigInt;

    const MODULUS_BITS: u32;

    /// Unused most-significant bits of a limb representation.
    const REPR_SHAVE_BITS: u32;

    /// Montgomery constant R = 2^256 mod p.
    const R: Self::BigInt;

    /// R^2 mod p.
    const R2: Self::BigInt;

    /// -p^(-1) mod 2^64.
    const INV: u64;

    /// (p - 1) / 2.
    const MODULUS_MINUS_ONE_DIV_TWO: Self::BigInt;
}

/// The interface for a prime field element.
pub trait PrimeField: SquareRootField + From<u64> {
    type Params: FpParameters<BigInt = Self::BigInt>;
    type BigInt: BigInteger;

    /// Construct from a canonical big-integer representative; `None` if the
    /// value is not below the modulus.
    fn from_repr(repr: Self::BigInt) -> Option<Self>;

    /// The canonical big-integer representative in [0, p).
    fn into_repr(&self) -> Self::BigInt;

    /// Interpret a big-endian byte string of any length as an integer and
    /// reduce it modulo p.
    fn from_be_bytes_mod_order(bytes: &[u8]) -> Self;

    /// Serialized width of one element, in bytes.
    fn size_in_bytes() -> usize {
        (Self::Params::MODULUS_BITS as usize + 7) / 8
    }
}

/// Iterates the bits of a limb sequence, most significant first, including
/// leading zeros.
#[derive(Debug)]
pub struct BitIterator<E> {
    t: E,
    n: usize,
}

impl<E: AsRef<[u64]>> BitIterator<E> {
    pub fn new(t: E) -> Self {
        let n = t.as_ref().len() * 64;
        BitIterator { t, n }
    }
}

impl<E: AsRef<[u64]>> Iterator for BitIterator<E> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.n == 0 {
            None
        } else {
            self.n -= 1;
            let part = self.n / 64;
            let bit = self.n - (64 * part);
            Some(self.t.as_ref()[part] & (1 << bit) > 0)
        }
    }
}
