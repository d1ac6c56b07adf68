use crate::{
    bytes::{FromBytes, ToBytes},
    fields::{Field, Fp2, Fp2Parameters},
    rand::UniformRand,
};
use derivative::Derivative;
use rand::Rng;
use std::{
    fmt,
    io::{Read, Result as IoResult, Write},
    ops::{AddAssign, MulAssign, Neg, SubAssign},
};

/// Parameters of the quadratic extension Fp2[v]/(v^2 - u).
pub trait Fp4Parameters: 'static + Send + Sync {
    type Fp2Params: Fp2Parameters;

    /// v^(p^i - 1) for i = 0..4, elements of Fp2.
    const FROBENIUS_COEFF_FP4_C1: [Fp2<Self::Fp2Params>; 4];

    /// Multiplication of an Fp2 element by the non-residue v^2 = u.
    #[inline(always)]
    fn mul_fp2_by_nonresidue(fe: &Fp2<Self::Fp2Params>) -> Fp2<Self::Fp2Params> {
        // (a + b u) * u = alpha b + a u
        Fp2::new(
            <Self::Fp2Params as Fp2Parameters>::mul_fp_by_nonresidue(&fe.c1),
            fe.c0,
        )
    }
}

/// An element c0 + c1 * v of the quartic extension.
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
pub struct Fp4<P: Fp4Parameters> {
    pub c0: Fp2<P::Fp2Params>,
    pub c1: Fp2<P::Fp2Params>,
}

impl<P: Fp4Parameters> Fp4<P> {
    pub const fn const_new(c0: Fp2<P::Fp2Params>, c1: Fp2<P::Fp2Params>) -> Self {
        Fp4 { c0, c1 }
    }

    pub fn new(c0: Fp2<P::Fp2Params>, c1: Fp2<P::Fp2Params>) -> Self {
        Fp4 { c0, c1 }
    }
}

impl<P: Fp4Parameters> Field for Fp4<P> {
    #[inline]
    fn zero() -> Self {
        Fp4::new(Fp2::zero(), Fp2::zero())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero()
    }

    #[inline]
    fn one() -> Self {
        Fp4::new(Fp2::one(), Fp2::zero())
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
        // (c0 - c1 v) / (c0^2 - u c1^2)
        let denom = self.c0.square() - P::mul_fp2_by_nonresidue(&self.c1.square());
        denom
            .inverse()
            .map(|d| Fp4::new(self.c0 * d, -(self.c1 * d)))
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
        self.c0.frobenius_map(power);
        self.c1.frobenius_map(power);
        self.c1 *= &P::FROBENIUS_COEFF_FP4_C1[power % 4];
    }
}

impl<P: Fp4Parameters> fmt::Display for Fp4<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fp4({} + {} * v)", self.c0, self.c1)
    }
}

impl<P: Fp4Parameters> Neg for Fp4<P> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Fp4::new(-self.c0, -self.c1)
    }
}

impl<'a, P: Fp4Parameters> AddAssign<&'a Self> for Fp4<P> {
    #[inline]
    fn add_assign(&mut self, other: &Self) {
        self.c0 += &other.c0;
        self.c1 += &other.c1;
    }
}

impl<'a, P: Fp4Parameters> SubAssign<&'a Self> for Fp4<P> {
    #[inline]
    fn sub_assign(&mut self, other: &Self) {
        self.c0 -= &other.c0;
        self.c1 -= &other.c1;
    }
}

impl<'a, P: Fp4Parameters> MulAssign<&'a Self> for Fp4<P> {
    /// Karatsuba over Fp2.
    #[inline]
    fn mul_assign(&mut self, other: &Self) {
        let v0 = self.c0 * &other.c0;
        let v1 = self.c1 * &other.c1;
        let c1 = (self.c0 + self.c1) * (other.c0 + other.c1) - v0 - v1;
        self.c0 = v0 + P::mul_fp2_by_nonresidue(&v1);
        self.c1 = c1;
    }
}

impl_field_ops!(Fp4, Fp4Parameters);

impl<P: Fp4Parameters> ToBytes for Fp4<P> {
    /// Wire order: highest component first.
    #[inline]
    fn write<W: Write>(&self, mut writer: W) -> IoResult<()> {
        self.c1.write(&mut writer)?;
        self.c0.write(&mut writer)
    }
}

impl<P: Fp4Parameters> FromBytes for Fp4<P> {
    #[inline]
    fn read<R: Read>(mut reader: R) -> IoResult<Self> {
        let c1 = Fp2::read(&mut reader)?;
        let c0 = Fp2::read(&mut reader)?;
        Ok(Fp4::new(c0, c1))
    }
}

impl<P: Fp4Parameters> UniformRand for Fp4<P> {
    #[inline]
    fn rand<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Fp4::new(Fp2::rand(rng), Fp2::rand(rng))
    }
}
