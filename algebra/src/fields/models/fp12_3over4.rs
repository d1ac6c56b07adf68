use crate::{
    bytes::{FromBytes, ToBytes},
    fields::{Field, Fp4, Fp4Parameters},
    rand::UniformRand,
};
use derivative::Derivative;
use rand::Rng;
use std::{
    fmt,
    io::{Read, Result as IoResult, Write},
    ops::{AddAssign, MulAssign, Neg, SubAssign},
};

/// Parameters of the cubic extension Fp4[w]/(w^3 - v), the embedding field of
/// the SM9 pairing.
pub trait Fp12Parameters: 'static + Send + Sync {
    type Fp4Params: Fp4Parameters;

    /// w^(p^i - 1) for i = 0..12, elements of Fp4.
    const FROBENIUS_COEFF_FP12_C1: [Fp4<Self::Fp4Params>; 12];

    /// w^(2(p^i - 1)) for i = 0..12.
    const FROBENIUS_COEFF_FP12_C2: [Fp4<Self::Fp4Params>; 12];

    /// Multiplication of an Fp4 element by the non-residue w^3 = v.
    #[inline(always)]
    fn mul_fp4_by_nonresidue(fe: &Fp4<Self::Fp4Params>) -> Fp4<Self::Fp4Params> {
        // (a + b v) * v = u b + a v
        Fp4::new(
            <Self::Fp4Params as Fp4Parameters>::mul_fp2_by_nonresidue(&fe.c1),
            fe.c0,
        )
    }
}

/// An element c0 + c1 * w + c2 * w^2 of the embedding field.
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
pub struct Fp12<P: Fp12Parameters> {
    pub c0: Fp4<P::Fp4Params>,
    pub c1: Fp4<P::Fp4Params>,
    pub c2: Fp4<P::Fp4Params>,
}

impl<P: Fp12Parameters> Fp12<P> {
    pub const fn const_new(
        c0: Fp4<P::Fp4Params>,
        c1: Fp4<P::Fp4Params>,
        c2: Fp4<P::Fp4Params>,
    ) -> Self {
        Fp12 { c0, c1, c2 }
    }

    pub fn new(c0: Fp4<P::Fp4Params>, c1: Fp4<P::Fp4Params>, c2: Fp4<P::Fp4Params>) -> Self {
        Fp12 { c0, c1, c2 }
    }
}

impl<P: Fp12Parameters> Field for Fp12<P> {
    #[inline]
    fn zero() -> Self {
        Fp12::new(Fp4::zero(), Fp4::zero(), Fp4::zero())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero() && self.c2.is_zero()
    }

    #[inline]
    fn one() -> Self {
        Fp12::new(Fp4::one(), Fp4::zero(), Fp4::zero())
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.c0.is_one() && self.c1.is_zero() && self.c2.is_zero()
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
        self.c2.double_in_place();
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

    /// Inverse by the adjugate of the cubic extension.
    fn inverse(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }
        let t0 = self.c0.square() - P::mul_fp4_by_nonresidue(&(self.c1 * self.c2));
        let t1 = P::mul_fp4_by_nonresidue(&self.c2.square()) - self.c0 * self.c1;
        let t2 = self.c1.square() - self.c0 * self.c2;
        let det = self.c0 * t0
            + P::mul_fp4_by_nonresidue(&(self.c2 * t1 + self.c1 * t2));
        det.inverse()
            .map(|d| Fp12::new(t0 * d, t1 * d, t2 * d))
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
        self.c2.frobenius_map(power);
        self.c1 *= &P::FROBENIUS_COEFF_FP12_C1[power % 12];
        self.c2 *= &P::FROBENIUS_COEFF_FP12_C2[power % 12];
    }
}

impl<P: Fp12Parameters> fmt::Display for Fp12<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fp12({} + {} * w + {} * w^2)", self.c0, self.c1, self.c2)
    }
}

impl<P: Fp12Parameters> Neg for Fp12<P> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Fp12::new(-self.c0, -self.c1, -self.c2)
    }
}

impl<'a, P: Fp12Parameters> AddAssign<&'a Self> for Fp12<P> {
    #[inline]
    fn add_assign(&mut self, other: &Self) {
        self.c0 += &other.c0;
        self.c1 += &other.c1;
        self.c2 += &other.c2;
    }
}

impl<'a, P: Fp12Parameters> SubAssign<&'a Self> for Fp12<P> {
    #[inline]
    fn sub_assign(&mut self, other: &Self) {
        self.c0 -= &other.c0;
        self.c1 -= &other.c1;
        self.c2 -= &other.c2;
    }
}

impl<'a, P: Fp12Parameters> MulAssign<&'a Self> for Fp12<P> {
    /// Toom-style cubic multiplication: six Fp4 products.
    #[inline]
    fn mul_assign(&mut self, other: &Self) {
        let v0 = self.c0 * &other.c0;
        let v1 = self.c1 * &other.c1;
        let v2 = self.c2 * &other.c2;

        let c0 = v0
            + P::mul_fp4_by_nonresidue(
                &((self.c1 + self.c2) * (other.c1 + other.c2) - v1 - v2),
            );
        let c1 = (self.c0 + self.c1) * (other.c0 + other.c1) - v0 - v1
            + P::mul_fp4_by_nonresidue(&v2);
        let c2 = (self.c0 + self.c2) * (other.c0 + other.c2) - v0 - v2 + v1;

        self.c0 = c0;
        self.c1 = c1;
        self.c2 = c2;
    }
}

impl_field_ops!(Fp12, Fp12Parameters);

impl<P: Fp12Parameters> ToBytes for Fp12<P> {
    /// Wire order: highest component first.
    #[inline]
    fn write<W: Write>(&self, mut writer: W) -> IoResult<()> {
        self.c2.write(&mut writer)?;
        self.c1.write(&mut writer)?;
        self.c0.write(&mut writer)
    }
}

impl<P: Fp12Parameters> FromBytes for Fp12<P> {
    #[inline]
    fn read<R: Read>(mut reader: R) -> IoResult<Self> {
        let c2 = Fp4::read(&mut reader)?;
        let c1 = Fp4::read(&mut reader)?;
        let c0 = Fp4::read(&mut reader)?;
        Ok(Fp12::new(c0, c1, c2))
    }
}

impl<P: Fp12Parameters> UniformRand for Fp12<P> {
    #[inline]
    fn rand<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Fp12::new(Fp4::rand(rng), Fp4::rand(rng), Fp4::rand(rng))
    }
}
