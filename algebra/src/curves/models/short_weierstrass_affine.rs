use crate::{
    bytes::{FromBytes, ToBytes},
    curves::{models::SWModelParameters, AffineCurve, PcMode},
    error::Error,
    fields::{BitIterator, Field, PrimeField, SquareRootField},
    rand::UniformRand,
};
use derivative::Derivative;
use rand::Rng;
use std::{
    fmt,
    io::{Read, Result as IoResult, Write},
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};

/// An affine point on a short Weierstrass curve.
///
/// The group law is the textbook chord-and-tangent arithmetic; the point at
/// infinity is carried as a flag and is the identity. Doubling a 2-torsion
/// point (y = 0) yields infinity.
#[derive(Derivative)]
#[derivative(
    Copy(bound = ""),
    Clone(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = ""),
    Debug(bound = ""),
    Hash(bound = "")
)]
pub struct GroupAffine<P: SWModelParameters> {
    pub x: P::BaseField,
    pub y: P::BaseField,
    pub infinity: bool,
}

impl<P: SWModelParameters> GroupAffine<P> {
    pub fn new(x: P::BaseField, y: P::BaseField) -> Self {
        GroupAffine {
            x,
            y,
            infinity: false,
        }
    }

    /// Doubles this point in place, sending 2-torsion points to infinity.
    pub fn double_in_place(&mut self) -> &mut Self {
        if self.infinity {
            return self;
        }
        if self.y.is_zero() {
            *self = Self::zero();
            return self;
        }
        // lambda = (3 x^2 + a) / (2 y)
        let x_square = self.x.square();
        let numerator = x_square.double() + x_square + P::COEFF_A;
        let lambda = numerator * self.y.double().inverse().unwrap();
        let x3 = lambda.square() - self.x.double();
        self.y = lambda * (self.x - x3) - self.y;
        self.x = x3;
        self
    }

    pub fn double(&self) -> Self {
        let mut tmp = *self;
        tmp.double_in_place();
        tmp
    }
}

impl<P: SWModelParameters> GroupAffine<P>
where
    P::BaseField: SquareRootField,
{
    /// Recovers the point with the given x coordinate and the y of the given
    /// parity, if x is on the curve.
    pub fn get_point_from_x(x: P::BaseField, parity: bool) -> Option<Self> {
        let y_square = (x.square() * x) + P::mul_by_a(&x) + P::COEFF_B;
        y_square.sqrt().map(|y| {
            let y = if y.parity() == parity { y } else { -y };
            GroupAffine::new(x, y)
        })
    }

    /// Serializes in the GM/T point format selected by `mode`; infinity is
    /// the single byte 0x00.
    pub fn to_pc_bytes(&self, mode: PcMode) -> Vec<u8> {
        if self.infinity {
            return vec![0x00];
        }
        let buf = match mode {
            PcMode::Raw => crate::to_bytes![0x04u8, self.x, self.y],
            PcMode::Compressed => {
                let prefix: u8 = if self.y.parity() { 0x03 } else { 0x02 };
                crate::to_bytes![prefix, self.x]
            }
            PcMode::Mixed => {
                let prefix: u8 = if self.y.parity() { 0x07 } else { 0x06 };
                crate::to_bytes![prefix, self.x, self.y]
            }
        };
        buf.expect("writing to a Vec cannot fail")
    }

    /// Parses any of the GM/T point formats, recomputing y by a square root
    /// for the compressed forms.
    pub fn from_pc_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let (&prefix, body) = bytes.split_first().ok_or(Error::IncorrectLength {
            expected: 1,
            got: 0,
        })?;
        match prefix {
            0x00 => {
                if body.is_empty() {
                    Ok(Self::zero())
                } else {
                    Err(Error::IncorrectLength {
                        expected: 1,
                        got: bytes.len(),
                    })
                }
            }
            0x04 | 0x06 | 0x07 => {
                if body.len() % 2 != 0 {
                    return Err(Error::IncorrectLength {
                        expected: body.len() + 1,
                        got: body.len(),
                    });
                }
                let (x_bytes, y_bytes) = body.split_at(body.len() / 2);
                let x = read_exact_field::<P::BaseField>(x_bytes)?;
                let y = read_exact_field::<P::BaseField>(y_bytes)?;
                Ok(GroupAffine::new(x, y))
            }
            0x02 | 0x03 => {
                let x = read_exact_field::<P::BaseField>(body)?;
                Self::get_point_from_x(x, prefix == 0x03).ok_or(Error::PointNotOnCurve)
            }
            other => Err(Error::InvalidPcByte(other)),
        }
    }
}

/// Reads one field element consuming the whole slice; coordinates above the
/// modulus or of the wrong width decode to nothing.
fn read_exact_field<F: Field>(bytes: &[u8]) -> Result<F, Error> {
    let mut reader = bytes;
    let elem = F::read(&mut reader).map_err(|_| Error::PointNotOnCurve)?;
    if reader.is_empty() {
        Ok(elem)
    } else {
        Err(Error::IncorrectLength {
            expected: bytes.len() - reader.len(),
            got: bytes.len(),
        })
    }
}

impl<P: SWModelParameters> AffineCurve for GroupAffine<P> {
    type ScalarField = P::ScalarField;
    type BaseField = P::BaseField;

    #[inline]
    fn zero() -> Self {
        GroupAffine {
            x: P::BaseField::zero(),
            y: P::BaseField::zero(),
            infinity: true,
        }
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.infinity
    }

    fn prime_subgroup_generator() -> Self {
        let (x, y) = P::AFFINE_GENERATOR_COEFFS;
        GroupAffine::new(x, y)
    }

    fn is_on_curve(&self) -> bool {
        if self.infinity {
            return true;
        }
        let y_square = (self.x.square() * self.x) + P::mul_by_a(&self.x) + P::COEFF_B;
        self.y.square() == y_square
    }

    fn mul<S: AsRef<[u64]>>(&self, scalar: S) -> Self {
        let mut res = Self::zero();
        for bit in BitIterator::new(scalar) {
            res.double_in_place();
            if bit {
                res += self;
            }
        }
        res
    }

    fn mul_by_cofactor(&self) -> Self {
        self.mul(P::COFACTOR)
    }
}

impl<P: SWModelParameters> Default for GroupAffine<P> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<P: SWModelParameters> fmt::Display for GroupAffine<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.infinity {
            write!(f, "GroupAffine(infinity)")
        } else {
            write!(f, "GroupAffine(x={}, y={})", self.x, self.y)
        }
    }
}

impl<P: SWModelParameters> Neg for GroupAffine<P> {
    type Output = Self;

    fn neg(self) -> Self {
        if self.infinity {
            self
        } else {
            GroupAffine::new(self.x, -self.y)
        }
    }
}

impl<'a, P: SWModelParameters> AddAssign<&'a Self> for GroupAffine<P> {
    fn add_assign(&mut self, other: &'a Self) {
        if self.infinity {
            *self = *other;
            return;
        }
        if other.infinity {
            return;
        }
        if self.x == other.x {
            if (self.y + other.y).is_zero() {
                *self = Self::zero();
            } else {
                // equal x with y1 = y2: the tangent rule
                self.double_in_place();
            }
            return;
        }
        // lambda = (y2 - y1) / (x2 - x1)
        let lambda = (other.y - self.y) * (other.x - self.x).inverse().unwrap();
        let x3 = lambda.square() - self.x - other.x;
        self.y = lambda * (self.x - x3) - self.y;
        self.x = x3;
    }
}

impl<P: SWModelParameters> AddAssign<Self> for GroupAffine<P> {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self += &other;
    }
}

impl<P: SWModelParameters> Add<Self> for GroupAffine<P> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        let mut result = self;
        result += &other;
        result
    }
}

impl<'a, P: SWModelParameters> Add<&'a Self> for GroupAffine<P> {
    type Output = Self;

    #[inline]
    fn add(self, other: &'a Self) -> Self {
        let mut result = self;
        result += other;
        result
    }
}

impl<'a, P: SWModelParameters> SubAssign<&'a Self> for GroupAffine<P> {
    #[inline]
    fn sub_assign(&mut self, other: &'a Self) {
        *self += &(-*other);
    }
}

impl<P: SWModelParameters> SubAssign<Self> for GroupAffine<P> {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self -= &other;
    }
}

impl<P: SWModelParameters> Sub<Self> for GroupAffine<P> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        let mut result = self;
        result -= &other;
        result
    }
}

impl<'a, P: SWModelParameters> Sub<&'a Self> for GroupAffine<P> {
    type Output = Self;

    #[inline]
    fn sub(self, other: &'a Self) -> Self {
        let mut result = self;
        result -= other;
        result
    }
}

impl<P: SWModelParameters> ToBytes for GroupAffine<P> {
    /// Raw x || y; infinity serializes as all-zero coordinates.
    #[inline]
    fn write<W: Write>(&self, mut writer: W) -> IoResult<()> {
        self.x.write(&mut writer)?;
        self.y.write(&mut writer)
    }
}

impl<P: SWModelParameters> FromBytes for GroupAffine<P> {
    #[inline]
    fn read<R: Read>(mut reader: R) -> IoResult<Self> {
        let x = P::BaseField::read(&mut reader)?;
        let y = P::BaseField::read(&mut reader)?;
        if x.is_zero() && y.is_zero() {
            Ok(Self::zero())
        } else {
            Ok(GroupAffine::new(x, y))
        }
    }
}

impl<P: SWModelParameters> UniformRand for GroupAffine<P> {
    /// A uniform point of the prime-order subgroup.
    #[inline]
    fn rand<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let scalar = P::ScalarField::rand(rng);
        Self::prime_subgroup_generator().mul(scalar.into_repr())
    }
}
