//! Fixed-width big integers backing the prime fields.
//!
//! All GM/T moduli fit in four 64-bit words, and none of them leaves a spare
//! top bit, so every carrying operation reports its carry-out instead of
//! assuming headroom.

use crate::bytes::{FromBytes, ToBytes};
use crate::rand::UniformRand;
use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{Read, Result as IoResult, Write};

pub mod arithmetic;
pub use self::arithmetic::*;

/// Interface for a fixed-width sequence of machine words interpreted as an
/// unsigned little-endian-by-limb integer.
pub trait BigInteger:
    ToBytes
    + FromBytes
    + Copy
    + Clone
    + fmt::Debug
    + fmt::Display
    + Default
    + Eq
    + Ord
    + Send
    + Sync
    + Sized
    + UniformRand
    + AsRef<[u64]>
    + AsMut<[u64]>
    + From<u64>
    + 'static
{
    /// Add another representation to this one, returning the carry bit.
    fn add_nocarry(&mut self, other: &Self) -> bool;

    /// Subtract another representation from this one, returning the borrow bit.
    fn sub_noborrow(&mut self, other: &Self) -> bool;

    /// Perform a leftwise bitshift of this number, effectively multiplying it
    /// by 2. Returns the bit shifted out.
    fn mul2(&mut self) -> bool;

    /// Perform a rightwise bitshift of this number, effectively dividing it by 2.
    fn div2(&mut self);

    /// Perform a rightwise bitshift of this number by some amount.
    fn divn(&mut self, amt: u32);

    fn is_odd(&self) -> bool;
    fn is_even(&self) -> bool;
    fn is_zero(&self) -> bool;

    /// Number of bits needed to represent this number.
    fn num_bits(&self) -> u32;

    /// Value of the `i`-th bit, counting from the least significant.
    fn get_bit(&self, i: usize) -> bool;
}

/// A 256-bit unsigned integer as four little-endian 64-bit limbs.
#[derive(Copy, Clone, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub struct BigInteger256(pub [u64; 4]);

impl BigInteger256 {
    pub const fn new(limbs: [u64; 4]) -> Self {
        BigInteger256(limbs)
    }
}

impl BigInteger for BigInteger256 {
    #[inline]
    fn add_nocarry(&mut self, other: &Self) -> bool {
        let mut carry = 0;
        for i in 0..4 {
            self.0[i] = adc(self.0[i], other.0[i], &mut carry);
        }
        carry != 0
    }

    #[inline]
    fn sub_noborrow(&mut self, other: &Self) -> bool {
        let mut borrow = 0;
        for i in 0..4 {
            self.0[i] = sbb(self.0[i], other.0[i], &mut borrow);
        }
        borrow != 0
    }

    #[inline]
    fn mul2(&mut self) -> bool {
        let mut last = 0;
        for i in 0..4 {
            let tmp = self.0[i] >> 63;
            self.0[i] <<= 1;
            self.0[i] |= last;
            last = tmp;
        }
        last != 0
    }

    #[inline]
    fn div2(&mut self) {
        let mut t = 0;
        for i in (0..4).rev() {
            let t2 = self.0[i] << 63;
            self.0[i] >>= 1;
            self.0[i] |= t;
            t = t2;
        }
    }

    #[inline]
    fn divn(&mut self, mut amt: u32) {
        if amt >= 256 {
            *self = Self::from(0);
            return;
        }
        while amt >= 64 {
            let mut t = 0;
            for i in (0..4).rev() {
                std::mem::swap(&mut t, &mut self.0[i]);
            }
            amt -= 64;
        }
        if amt > 0 {
            let mut t = 0;
            for i in (0..4).rev() {
                let t2 = self.0[i] << (64 - amt);
                self.0[i] >>= amt;
                self.0[i] |= t;
                t = t2;
            }
        }
    }

    #[inline]
    fn is_odd(&self) -> bool {
        self.0[0] & 1 == 1
    }

    #[inline]
    fn is_even(&self) -> bool {
        !self.is_odd()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0.iter().all(|&e| e == 0)
    }

    #[inline]
    fn num_bits(&self) -> u32 {
        let mut ret = 256;
        for i in self.0.iter().rev() {
            let leading = i.leading_zeros();
            ret -= leading;
            if leading != 64 {
                break;
            }
        }
        ret
    }

    #[inline]
    fn get_bit(&self, i: usize) -> bool {
        if i >= 256 {
            false
        } else {
            (self.0[i / 64] >> (i % 64)) & 1 == 1
        }
    }
}

impl fmt::Debug for BigInteger256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for BigInteger256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for i in self.0.iter().rev() {
            write!(f, "{:016x}", *i)?;
        }
        Ok(())
    }
}

impl Ord for BigInteger256 {
    #[inline]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        for (a, b) in self.0.iter().rev().zip(other.0.iter().rev()) {
            match a.cmp(b) {
                std::cmp::Ordering::Equal => {}
                ord => return ord,
            }
        }
        std::cmp::Ordering::Equal
    }
}

impl PartialOrd for BigInteger256 {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl From<u64> for BigInteger256 {
    #[inline]
    fn from(val: u64) -> Self {
        BigInteger256([val, 0, 0, 0])
    }
}

impl AsRef<[u64]> for BigInteger256 {
    #[inline]
    fn as_ref(&self) -> &[u64] {
        &self.0
    }
}

impl AsMut<[u64]> for BigInteger256 {
    #[inline]
    fn as_mut(&mut self) -> &mut [u64] {
        &mut self.0
    }
}

impl ToBytes for BigInteger256 {
    /// Big-endian, 32 bytes.
    #[inline]
    fn write<W: Write>(&self, mut writer: W) -> IoResult<()> {
        for limb in self.0.iter().rev() {
            writer.write_u64::<BigEndian>(*limb)?;
        }
        Ok(())
    }
}

impl FromBytes for BigInteger256 {
    #[inline]
    fn read<R: Read>(mut reader: R) -> IoResult<Self> {
        let mut limbs = [0u64; 4];
        for limb in limbs.iter_mut().rev() {
            *limb = reader.read_u64::<BigEndian>()?;
        }
        Ok(BigInteger256(limbs))
    }
}

impl UniformRand for BigInteger256 {
    #[inline]
    fn rand<R: Rng + ?Sized>(rng: &mut R) -> Self {
        BigInteger256(rng.gen())
    }
}

/// Reduce an arbitrary-length big-endian byte string modulo `modulus`.
///
/// Binary long division: one shift and at most one conditional subtraction
/// per input bit. Used for hash-to-integer constructions that must reduce
/// values wider than the modulus.
pub fn reduce_bytes_be_mod(bytes: &[u8], modulus: &BigInteger256) -> BigInteger256 {
    debug_assert!(!modulus.is_zero());
    let mut r = BigInteger256::from(0);
    for byte in bytes {
        for i in (0..8).rev() {
            let carry = r.mul2();
            if (byte >> i) & 1 == 1 {
                r.0[0] |= 1;
            }
            if carry || r >= *modulus {
                r.sub_noborrow(modulus);
            }
        }
    }
    r
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_by_magnitude() {
        let small = BigInteger256([u64::max_value(), 0, 0, 0]);
        let large = BigInteger256([0, 1, 0, 0]);
        assert!(small < large);
        assert!(large > small);
        assert_eq!(small, small);
    }

    #[test]
    fn add_sub_round_trip() {
        let mut a = BigInteger256([u64::max_value(), 2, 3, 4]);
        let b = BigInteger256([5, 6, 7, 8]);
        let orig = a;
        assert!(!a.add_nocarry(&b));
        assert!(!a.sub_noborrow(&b));
        assert_eq!(a, orig);
    }

    #[test]
    fn add_reports_carry() {
        let mut a = BigInteger256([u64::max_value(); 4]);
        assert!(a.add_nocarry(&BigInteger256::from(1)));
        assert!(a.is_zero());
    }

    #[test]
    fn mul2_div2() {
        let mut a = BigInteger256([0x5555555555555555; 4]);
        let orig = a;
        assert!(!a.mul2());
        a.div2();
        assert_eq!(a, orig);
        let mut top = BigInteger256([0, 0, 0, 1 << 63]);
        assert!(top.mul2());
    }

    #[test]
    fn num_bits_and_get_bit() {
        let a = BigInteger256([0, 1, 0, 0]);
        assert_eq!(a.num_bits(), 65);
        assert!(a.get_bit(64));
        assert!(!a.get_bit(63));
        assert_eq!(BigInteger256::from(0).num_bits(), 0);
    }

    #[test]
    fn byte_round_trip_is_big_endian() {
        let a = BigInteger256([4, 3, 2, 1]);
        let bytes = crate::to_bytes![a].unwrap();
        assert_eq!(bytes.len(), 32);
        assert_eq!(bytes[7], 1);
        assert_eq!(bytes[31], 4);
        let b = BigInteger256::read(&bytes[..]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn reduce_bytes_matches_division() {
        // 2^256 mod 97 = 61; (2^256 + 5) mod 97 = 66
        let modulus = BigInteger256::from(97);
        let mut bytes = vec![1u8];
        bytes.extend_from_slice(&[0u8; 32]);
        bytes[32] = 5;
        let r = reduce_bytes_be_mod(&bytes, &modulus);
        assert_eq!(r, BigInteger256::from(66));
    }
}
