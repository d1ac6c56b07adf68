//! Randomness abstraction of the schemes.
//!
//! Protocol operations are purely functional given their inputs and the
//! sequence of draws; replaying a source reproduces byte-identical outputs,
//! which is how the standard test vectors are exercised.

use gm_algebra::biginteger::{BigInteger, BigInteger256};
use rand::RngCore;

/// A source of uniformly distributed k-bit integers.
pub trait RandomSource {
    /// A uniform integer in [0, 2^bits), bits <= 256.
    fn randbits(&mut self, bits: u32) -> BigInteger256;
}

/// Operating-system entropy.
pub struct OsRandom(rand::rngs::OsRng);

impl OsRandom {
    pub fn new() -> Self {
        OsRandom(rand::rngs::OsRng)
    }
}

impl Default for OsRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for OsRandom {
    fn randbits(&mut self, bits: u32) -> BigInteger256 {
        debug_assert!(bits <= 256);
        let mut limbs = [0u64; 4];
        for limb in limbs.iter_mut() {
            *limb = self.0.next_u64();
        }
        mask_to_bits(&mut limbs, bits);
        BigInteger256(limbs)
    }
}

/// Always returns the same value. Drives the deterministic standard-vector
/// tests; useless for anything else.
pub struct FixedRandom(BigInteger256);

impl FixedRandom {
    pub fn new(value: BigInteger256) -> Self {
        FixedRandom(value)
    }

    /// Big-endian bytes, at most 32, left-padded.
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        assert!(bytes.len() <= 32);
        let mut padded = [0u8; 32];
        padded[32 - bytes.len()..].copy_from_slice(bytes);
        let mut limbs = [0u64; 4];
        for (i, chunk) in padded.chunks(8).enumerate() {
            let mut limb = [0u8; 8];
            limb.copy_from_slice(chunk);
            limbs[3 - i] = u64::from_be_bytes(limb);
        }
        FixedRandom(BigInteger256(limbs))
    }
}

impl RandomSource for FixedRandom {
    fn randbits(&mut self, _bits: u32) -> BigInteger256 {
        self.0
    }
}

fn mask_to_bits(limbs: &mut [u64; 4], bits: u32) {
    for (i, limb) in limbs.iter_mut().enumerate() {
        let low = i as u32 * 64;
        if bits <= low {
            *limb = 0;
        } else if bits < low + 64 {
            *limb &= u64::max_value() >> (64 - (bits - low));
        }
    }
}

/// Rejection sampling of a uniform integer in [1, bound].
pub fn rand_in_range<R: RandomSource + ?Sized>(
    rng: &mut R,
    bound: &BigInteger256,
) -> BigInteger256 {
    let bits = bound.num_bits();
    loop {
        let candidate = rng.randbits(bits);
        if !candidate.is_zero() && candidate <= *bound {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_truncates() {
        let mut limbs = [u64::max_value(); 4];
        mask_to_bits(&mut limbs, 127);
        assert_eq!(limbs, [u64::max_value(), u64::max_value() >> 1, 0, 0]);
        let mut limbs = [u64::max_value(); 4];
        mask_to_bits(&mut limbs, 256);
        assert_eq!(limbs, [u64::max_value(); 4]);
        let mut limbs = [u64::max_value(); 4];
        mask_to_bits(&mut limbs, 64);
        assert_eq!(limbs, [u64::max_value(), 0, 0, 0]);
    }

    #[test]
    fn fixed_source_parses_short_hex() {
        let src = FixedRandom::from_be_bytes(&[0x01, 0x02]);
        assert_eq!(src.0, BigInteger256::from(0x0102));
    }

    #[test]
    fn rejection_sampling_stays_in_range() {
        let mut rng = OsRandom::new();
        let bound = BigInteger256::from(1000);
        for _ in 0..64 {
            let v = rand_in_range(&mut rng, &bound);
            assert!(!v.is_zero());
            assert!(v <= bound);
        }
    }
}
