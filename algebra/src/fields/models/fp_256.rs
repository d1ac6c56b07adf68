use crate::{
    biginteger::{arithmetic as fa, BigInteger as _, BigInteger256 as BigInteger},
    bytes::{FromBytes, ToBytes},
    fields::{Field, FpParameters, LegendreSymbol, PrimeField, SquareRootField},
    rand::UniformRand,
};
use derivative::Derivative;
use rand::Rng;
use std::{
    fmt,
    io::{Error as IoError, ErrorKind, Read, Result as IoResult, Write},
    marker::PhantomData,
    ops::{AddAssign, MulAssign, Neg, SubAssign},
};
use unroll::unroll_for_loops;

pub trait Fp256Parameters: FpParameters<BigInt = BigInteger> {}

/// An element of a prime field of at most 256 bits, in Montgomery
/// representation. None of the GM/T moduli leaves a spare top bit, so all
/// reductions here track carry-outs explicitly.
#[derive(Derivative)]
#[derivative(
    Default(bound = ""),
    Hash(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = "")
)]
pub struct Fp256<P>(pub BigInteger, pub PhantomData<P>);

impl<P> Fp256<P> {
    /// Wraps a raw Montgomery representation.
    pub const fn new(element: BigInteger) -> Self {
        Fp256(element, PhantomData)
    }
}

impl<P: Fp256Parameters> Fp256<P> {
    #[inline]
    fn is_valid(&self) -> bool {
        self.0 < P::MODULUS
    }

    /// Conditionally subtracts the modulus; `carry` is the bit shifted out of
    /// the 256-bit window by the preceding operation.
    #[inline]
    fn reduce(&mut self, carry: bool) {
        if carry || !self.is_valid() {
            self.0.sub_noborrow(&P::MODULUS);
        }
    }

    #[inline]
    #[unroll_for_loops]
    fn mont_reduce(&mut self, r: &mut [u64; 8]) {
        // CIOS reduction. The quotient may reach 2p/2^256, so the final
        // carry word participates in the conditional subtraction.
        let mut carry2 = 0;
        for i in 0..4 {
            let k = r[i].wrapping_mul(P::INV);
            let mut carry = 0;
            fa::mac_with_carry(r[i], k, P::MODULUS.0[0], &mut carry);
            for j in 1..4 {
                r[i + j] = fa::mac_with_carry(r[i + j], k, P::MODULUS.0[j], &mut carry);
            }
            r[i + 4] = fa::adc(r[i + 4], carry2, &mut carry);
            carry2 = carry;
        }
        (self.0).0.copy_from_slice(&r[4..]);
        self.reduce(carry2 != 0);
    }

    /// Lucas sequence pair (U_k, V_k) for U_k = X U_{k-1} - Y U_{k-2},
    /// seeded (U_0, V_0) = (0, 2). Drives the p = 1 (mod 8) square root.
    fn lucas_sequence(x: &Self, y: &Self, k: &BigInteger) -> (Self, Self) {
        let half = Self::from(2).inverse().unwrap();
        let delta = x.square() - y.double().double();
        let mut u = Self::zero();
        let mut v = Self::one().double();
        for bit in crate::fields::BitIterator::new(k) {
            let u_next = u * &v;
            let v_next = (v.square() + delta * u.square()) * half;
            u = u_next;
            v = v_next;
            if bit {
                let u_next = (*x * &u + v) * half;
                let v_next = (*x * &v + delta * u) * half;
                u = u_next;
                v = v_next;
            }
        }
        (u, v)
    }

    /// Square root for p = 3, 7 (mod 8): y = x^((p+1)/4), accepted iff y^2 = x.
    fn sqrt_4u3(&self) -> Option<Self> {
        let mut e = P::MODULUS;
        e.add_nocarry(&BigInteger::from(1));
        e.div2();
        e.div2();
        let y = self.pow(e);
        if y.square() == *self {
            Some(y)
        } else {
            None
        }
    }

    /// Square root for p = 5 (mod 8), Atkin's method.
    fn sqrt_8u5(&self) -> Option<Self> {
        let mut e = P::MODULUS;
        e.sub_noborrow(&BigInteger::from(1));
        e.div2();
        e.div2();
        let z = self.pow(e);
        if z.is_one() {
            let mut e = P::MODULUS;
            e.add_nocarry(&BigInteger::from(3));
            e.div2();
            e.div2();
            e.div2();
            return Some(self.pow(e));
        }
        if z == -Self::one() {
            let mut e = P::MODULUS;
            e.sub_noborrow(&BigInteger::from(5));
            e.div2();
            e.div2();
            e.div2();
            let four_x = self.double().double();
            return Some(self.double() * four_x.pow(e));
        }
        None
    }

    /// Square root for p = 1 (mod 8) by the Lucas-sequence method.
    fn sqrt_8u1(&self) -> Option<Self> {
        let one = Self::one();
        let minus_one = -one;
        let half = Self::from(2).inverse().unwrap();
        let mut k = P::MODULUS;
        k.add_nocarry(&BigInteger::from(1));
        k.div2();
        for x_candidate in 1u64.. {
            let x = Self::from(x_candidate);
            let (u, v) = Self::lucas_sequence(&x, self, &k);
            if (v.square() - self.double().double()).is_zero() {
                return Some(v * half);
            }
            if u != one && u != minus_one {
                return None;
            }
        }
        unreachable!()
    }
}

impl<P: Fp256Parameters> Field for Fp256<P> {
    #[inline]
    fn zero() -> Self {
        Fp256::new(BigInteger::from(0))
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    #[inline]
    fn one() -> Self {
        Fp256::new(P::R)
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.0 == P::R
    }

    #[inline]
    fn parity(&self) -> bool {
        self.into_repr().is_odd()
    }

    #[inline]
    fn double(&self) -> Self {
        let mut tmp = *self;
        tmp.double_in_place();
        tmp
    }

    #[inline]
    fn double_in_place(&mut self) -> &mut Self {
        let carry = self.0.mul2();
        self.reduce(carry);
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

    /// Binary extended Euclid on the Montgomery representation
    /// (Guajardo et al., "Efficient hardware implementation of finite fields").
    fn inverse(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }
        let one = BigInteger::from(1);

        let mut u = self.0;
        let mut v = P::MODULUS;
        let mut b = Fp256::<P>::new(P::R2);
        let mut c = Self::zero();

        while u != one && v != one {
            while u.is_even() {
                u.div2();
                if b.0.is_even() {
                    b.0.div2();
                } else {
                    let carry = b.0.add_nocarry(&P::MODULUS);
                    b.0.div2();
                    if carry {
                        (b.0).0[3] |= 1 << 63;
                    }
                }
            }
            while v.is_even() {
                v.div2();
                if c.0.is_even() {
                    c.0.div2();
                } else {
                    let carry = c.0.add_nocarry(&P::MODULUS);
                    c.0.div2();
                    if carry {
                        (c.0).0[3] |= 1 << 63;
                    }
                }
            }
            if v < u {
                u.sub_noborrow(&v);
                b.sub_assign(&c);
            } else {
                v.sub_noborrow(&u);
                c.sub_assign(&b);
            }
        }

        if u == one {
            Some(b)
        } else {
            Some(c)
        }
    }

    fn inverse_in_place(&mut self) -> Option<&mut Self> {
        if let Some(inv) = self.inverse() {
            *self = inv;
            Some(self)
        } else {
            None
        }
    }

    /// Identity: Frobenius fixes the prime field.
    #[inline]
    fn frobenius_map(&mut self, _: usize) {}
}

impl<P: Fp256Parameters> SquareRootField for Fp256<P> {
    fn legendre(&self) -> LegendreSymbol {
        let s = self.pow(P::MODULUS_MINUS_ONE_DIV_TWO);
        if s.is_zero() {
            LegendreSymbol::Zero
        } else if s.is_one() {
            LegendreSymbol::QuadraticResidue
        } else {
            LegendreSymbol::QuadraticNonResidue
        }
    }

    /// Branches on p mod 8; the Lucas branch keeps the model total even
    /// though the fixed GM/T moduli never take it.
    fn sqrt(&self) -> Option<Self> {
        if self.is_zero() {
            return Some(*self);
        }
        match P::MODULUS.0[0] & 7 {
            3 | 7 => self.sqrt_4u3(),
            5 => self.sqrt_8u5(),
            1 => self.sqrt_8u1(),
            _ => unreachable!("even modulus"),
        }
    }

    fn sqrt_in_place(&mut self) -> Option<&mut Self> {
        (*self).sqrt().map(|sqrt| {
            *self = sqrt;
            self
        })
    }
}

impl<P: Fp256Parameters> PrimeField for Fp256<P> {
    type Params = P;
    type BigInt = BigInteger;

    fn from_repr(repr: BigInteger) -> Option<Self> {
        let mut r = Fp256::new(repr);
        if !r.is_valid() {
            return None;
        }
        r.mul_assign(&Fp256::new(P::R2));
        Some(r)
    }

    fn into_repr(&self) -> BigInteger {
        let mut tmp = *self;
        let mut r = [0u64; 8];
        r[..4].copy_from_slice(&(self.0).0);
        tmp.mont_reduce(&mut r);
        tmp.0
    }

    fn from_be_bytes_mod_order(bytes: &[u8]) -> Self {
        let reduced = crate::biginteger::reduce_bytes_be_mod(bytes, &P::MODULUS);
        Self::from_repr(reduced).expect("reduced below the modulus")
    }
}

impl<P: Fp256Parameters> From<u64> for Fp256<P> {
    fn from(value: u64) -> Self {
        Self::from_repr(BigInteger::from(value)).expect("one limb is below the modulus")
    }
}

impl<P: Fp256Parameters> fmt::Debug for Fp256<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fp256({})", self.into_repr())
    }
}

impl<P: Fp256Parameters> fmt::Display for Fp256<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.into_repr())
    }
}

impl<P: Fp256Parameters> Neg for Fp256<P> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        if !self.is_zero() {
            let mut tmp = P::MODULUS;
            tmp.sub_noborrow(&self.0);
            Fp256::new(tmp)
        } else {
            self
        }
    }
}

impl<'a, P: Fp256Parameters> AddAssign<&'a Self> for Fp256<P> {
    #[inline]
    fn add_assign(&mut self, other: &Self) {
        let carry = self.0.add_nocarry(&other.0);
        self.reduce(carry);
    }
}

impl<'a, P: Fp256Parameters> SubAssign<&'a Self> for Fp256<P> {
    #[inline]
    fn sub_assign(&mut self, other: &Self) {
        if other.0 > self.0 {
            // Borrow the modulus; a carry out of the window cancels against
            // the wrapping subtraction below.
            self.0.add_nocarry(&P::MODULUS);
        }
        self.0.sub_noborrow(&other.0);
    }
}

impl<'a, P: Fp256Parameters> MulAssign<&'a Self> for Fp256<P> {
    #[inline]
    #[unroll_for_loops]
    fn mul_assign(&mut self, other: &Self) {
        let mut r = [0u64; 8];
        for i in 0..4 {
            let mut carry = 0;
            for j in 0..4 {
                r[i + j] = fa::mac_with_carry(r[i + j], (self.0).0[i], (other.0).0[j], &mut carry);
            }
            r[i + 4] = carry;
        }
        self.mont_reduce(&mut r);
    }
}

impl_field_ops!(Fp256, Fp256Parameters);

impl<P: Fp256Parameters> ToBytes for Fp256<P> {
    #[inline]
    fn write<W: Write>(&self, writer: W) -> IoResult<()> {
        self.into_repr().write(writer)
    }
}

impl<P: Fp256Parameters> FromBytes for Fp256<P> {
    #[inline]
    fn read<R: Read>(reader: R) -> IoResult<Self> {
        let repr = BigInteger::read(reader)?;
        Self::from_repr(repr)
            .ok_or_else(|| IoError::new(ErrorKind::InvalidData, "value not below the modulus"))
    }
}

impl<P: Fp256Parameters> UniformRand for Fp256<P> {
    /// Rejection sampling over the shaved representation.
    #[inline]
    fn rand<R: Rng + ?Sized>(rng: &mut R) -> Self {
        loop {
            let mut tmp = BigInteger::rand(rng);
            tmp.0[3] &= u64::max_value() >> P::REPR_SHAVE_BITS;
            if tmp < P::MODULUS {
                return Fp256::new(tmp);
            }
        }
    }
}
