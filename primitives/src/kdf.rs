//! The counter-mode key-derivation function shared by SM2 and SM9:
//! K = H(Z || 1) || H(Z || 2) || ... truncated to the requested length,
//! with a 32-bit big-endian counter.

use crate::crh::Hash;
use crate::error::{Error, Result};

pub fn kdf<H: Hash>(z: &[u8], klen: usize) -> Result<Vec<u8>> {
    let v = H::LENGTH;
    let blocks = klen / v + usize::from(klen % v != 0);
    if blocks as u64 > 0xffff_ffff {
        return Err(Error::DataOverflow {
            name: "derived key length",
            limit: "2^32 - 1 hash blocks",
        });
    }

    let mut base = H::new();
    base.update(z)?;

    let mut out = Vec::with_capacity(blocks * v);
    for ct in 1..=blocks as u32 {
        let mut h = base.clone();
        h.update(&ct.to_be_bytes())
            .expect("counter fits the hash input bound");
        out.extend_from_slice(&h.value());
    }
    out.truncate(klen);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crh::Sm3;

    #[test]
    fn exact_lengths() {
        let v = Sm3::LENGTH;
        for &klen in &[1usize, v - 1, v, v + 1, 2 * v] {
            let k = kdf::<Sm3>(b"shared secret", klen).unwrap();
            assert_eq!(k.len(), klen);
        }
        assert!(kdf::<Sm3>(b"z", 0).unwrap().is_empty());
    }

    #[test]
    fn first_block_is_counter_one() {
        let mut expected = b"shared secret".to_vec();
        expected.extend_from_slice(&1u32.to_be_bytes());
        let k = kdf::<Sm3>(b"shared secret", Sm3::LENGTH).unwrap();
        assert_eq!(k, Sm3::hash(&expected));
    }

    #[test]
    fn prefix_consistency() {
        let long = kdf::<Sm3>(b"z", 100).unwrap();
        let short = kdf::<Sm3>(b"z", 33).unwrap();
        assert_eq!(&long[..33], &short[..]);
    }
}
