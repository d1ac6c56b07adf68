use crate::{
    bytes::{FromBytes, ToBytes},
    fields::{Field, LegendreSymbol, PrimeField, SquareRootField},
    rand::UniformRand,
};
use derivative::Derivative;
use rand::Rng;
use std::{
    fmt,
    io::{Read, Result as IoResult, Write},
    ops::{AddAssign, MulAssign, Neg, SubAssign},
};

/// Parameters of a quadratic extension Fp[u]/(u^2 - alpha).
///
/// The GM/T tower fixes alpha = -2; changing it invalidates every Frobenius
/// table further up the tower.
pub trait Fp2Parameters: 'static + Send + Sync {
    type Fp: PrimeField;

    /// alpha, a quadratic non-residue of Fp.
    const NONRESIDUE: Self::Fp;

    /// u^(p^i - 1) for i = 0, 1.
    const FROBENIUS_COEFF_FP2_C1: [Self::Fp; 2];

    #[inline(always)]
    fn mul_fp_by_nonresidue(fe: &Self::Fp) -> Self::Fp {
        Self::NONRESIDUE * fe
    }
}

/// An element c0 + c1 * u of the quadratic extension.
#[derive(Derivative)]
#[derivative(
    Default(bound = ""),
    Hash(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    Debug(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = "")
)]
pub struct Fp2<P: Fp2Parameters> {
    pub c0: P::Fp,
    pub c1: P::Fp,
}

impl<P: Fp2Parameters> Fp2<P> {
    pub const fn const_new(c0: P::Fp, c1: P::Fp) -> Self {
        Fp2 { c0, c1 }
    }

    pub fn new(c0: P::Fp, c1: P::Fp) -> Self {
        Fp2 { c0, c1 }
    }

    /// The norm map N(c0 + c1 u) = c0^2 - alpha * c1^2 into Fp.
    pub fn norm(&self) -> P::Fp {
        self.c0.square() - P::mul_fp_by_nonresidue(&self.c1.square())
    }

    /// Componentwise multiplication by a base-field scalar.
    pub fn mul_by_fp(&mut self, fe: &P::Fp) {
        self.c0 *= fe;
        self.c1 *= fe;
    }
}

impl<P: Fp2Parameters> Field for Fp2<P> {
    #[inline]
    fn zero() -> Self {
        Fp2::new(P::Fp::zero(), P::Fp::zero())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero()
    }

    #[inline]
    fn one() -> Self {
        Fp2::new(P::Fp::one(), P::Fp::zero())
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.c0.is_one() && self.c1.is_zero()
    }

    #[inline]
    fn parity(&self) -> bool {
        self.c0.parity()
    }

    #[inline]
    fn double(&self) -> Self {
        let mut tmp = *self;
        tmp.double_in_place();
        tmp
    }

    #[inline]
    fn double_in_place(&mut self) -> &mut Self {
        self.c0.double_in_place();
        self.c1.double_in_place();
        self
    }

    #[inline]
    fn square(&self) -> Self {
        let mut tmp = *self;
        tmp.square_in_place();
        tmp
    }

    #[inline]
    fn square_in_place(&mut self) -> &mut Self {
        let tmp = *self;
        self.mul_assign(&tmp);
        self
    }

    fn inverse(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }
        // (c0 - c1 u) / (c0^2 - alpha c1^2)
        self.norm().inverse().map(|norm_inv| {
            Fp2::new(self.c0 * norm_inv, -(self.c1 * norm_inv))
        })
    }

    fn inverse_in_place(&mut self) -> Option<&mut Self> {
        if let Some(inv) = self.inverse() {
            *self = inv;
            Some(self)
        } else {
            None
        }
    }

    fn frobenius_map(&mut self, power: usize) {
        self.c1 *= &P::FROBENIUS_COEFF_FP2_C1[power % 2];
    }
}

impl<P: Fp2Parameters> SquareRootField for Fp2<P> {
    fn legendre(&self) -> LegendreSymbol {
        // x is a square in Fp2 iff its norm is a square in Fp
        self.norm().legendre()
    }

    /// Norm-based square root: split off the Fp root of the norm, then halve.
    fn sqrt(&self) -> Option<Self> {
        if self.is_zero() {
            return Some(*self);
        }
        if self.c1.is_zero() {
            // sqrt(c0) stays rational, or c0/alpha is a square times u^2
            if let Some(r) = self.c0.sqrt() {
                return Some(Fp2::new(r, P::Fp::zero()));
            }
            let shifted = self.c0 * P::NONRESIDUE.inverse().unwrap();
            return shifted.sqrt().map(|r| Fp2::new(P::Fp::zero(), r));
        }
        let alpha = self.norm().sqrt()?;
        let two_inv = P::Fp::from(2).inverse().unwrap();
        let mut delta = (self.c0 + alpha) * two_inv;
        if delta.is_zero() || delta.legendre().is_qnr() {
            delta = (self.c0 - alpha) * two_inv;
        }
        let c0 = delta.sqrt()?;
        let c1 = self.c1 * c0.double().inverse()?;
        let candidate = Fp2::new(c0, c1);
        if candidate.square() == *self {
            Some(candidate)
        } else {
            None
        }
    }

    fn sqrt_in_place(&mut self) -> Option<&mut Self> {
        (*self).sqrt().map(|sqrt| {
            *self = sqrt;
            self
        })
    }
}

impl<P: Fp2Parameters> fmt::Display for Fp2<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fp2({} + {} * u)", self.c0, self.c1)
    }
}

impl<P: Fp2Parameters> Neg for Fp2<P> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Fp2::new(-self.c0, -self.c1)
    }
}

impl<'a, P: Fp2Parameters> AddAssign<&'a Self> for Fp2<P> {
    #[inline]
    fn add_assign(&mut self, other: &Self) {
        self.c0 += &other.c0;
        self.c1 += &other.c1;
    }
}

impl<'a, P: Fp2Parameters> SubAssign<&'a Self> for Fp2<P> {
    #[inline]
    fn sub_assign(&mut self, other: &Self) {
        self.c0 -= &other.c0;
        self.c1 -= &other.c1;
    }
}

impl<'a, P: Fp2Parameters> MulAssign<&'a Self> for Fp2<P> {
    /// Karatsuba: three base-field multiplications.
    #[inline]
    fn mul_assign(&mut self, other: &Self) {
        let v0 = self.c0 * &other.c0;
        let v1 = self.c1 * &other.c1;
        let c1 = (self.c0 + self.c1) * (other.c0 + other.c1) - v0 - v1;
        self.c0 = v0 + P::mul_fp_by_nonresidue(&v1);
        self.c1 = c1;
    }
}

impl_field_ops!(Fp2, Fp2Parameters);

impl<P: Fp2Parameters> ToBytes for Fp2<P> {
    /// Wire order: highest component first.
    #[inline]
    fn write<W: Write>(&self, mut writer: W) -> IoResult<()> {
        self.c1.write(&mut writer)?;
        self.c0.write(&mut writer)
    }
}

impl<P: Fp2Parameters> FromBytes for Fp2<P> {
    #[inline]
    fn read<R: Read>(mut reader: R) -> IoResult<Self> {
        let c1 = P::Fp::read(&mut reader)?;
        let c0 = P::Fp::read(&mut reader)?;
        Ok(Fp2::new(c0, c1))
    }
}

impl<P: Fp2Parameters> UniformRand for Fp2<P> {
    #[inline]
    fn rand<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Fp2::new(P::Fp::rand(rng), P::Fp::rand(rng))
    }
}
