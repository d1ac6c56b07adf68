//! The SM3 hash of GB/T 32905: 512-bit blocks, 256-bit digests.

use crate::crh::{check_message_bound, Hash};
use crate::error::Result;

const IV: [u32; 8] = [
    0x7380166F, 0x4914B2B9, 0x172442D7, 0xDA8A0600, 0xA96F30BC, 0x163138AA, 0xE38DEE4D,
    0xB0FB0E4E,
];

#[inline(always)]
fn rol(x: u32, n: u32) -> u32 {
    x.rotate_left(n & 0x1f)
}

#[inline(always)]
fn p0(x: u32) -> u32 {
    x ^ rol(x, 9) ^ rol(x, 17)
}

#[inline(always)]
fn p1(x: u32) -> u32 {
    x ^ rol(x, 15) ^ rol(x, 23)
}

fn compress(v: &mut [u32; 8], block: &[u8]) {
    debug_assert_eq!(block.len(), 64);

    let mut w = [0u32; 68];
    for i in 0..16 {
        w[i] = u32::from_be_bytes([
            block[i * 4],
            block[i * 4 + 1],
            block[i * 4 + 2],
            block[i * 4 + 3],
        ]);
    }
    for i in 16..68 {
        w[i] = p1(w[i - 16] ^ w[i - 9] ^ rol(w[i - 3], 15)) ^ rol(w[i - 13], 7) ^ w[i - 6];
    }

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *v;

    for i in 0..64 {
        let t = if i < 16 { 0x79CC4519u32 } else { 0x7A879D8Au32 };
        let ss1 = rol(
            rol(a, 12).wrapping_add(e).wrapping_add(rol(t, i as u32)),
            7,
        );
        let ss2 = ss1 ^ rol(a, 12);
        let (ff, gg) = if i < 16 {
            (a ^ b ^ c, e ^ f ^ g)
        } else {
            ((a & b) | (a & c) | (b & c), (e & f) | (!e & g))
        };
        let tt1 = ff
            .wrapping_add(d)
            .wrapping_add(ss2)
            .wrapping_add(w[i] ^ w[i + 4]);
        let tt2 = gg.wrapping_add(h).wrapping_add(ss1).wrapping_add(w[i]);
        d = c;
        c = rol(b, 9);
        b = a;
        a = tt1;
        h = g;
        g = rol(f, 19);
        f = e;
        e = p0(tt2);
    }

    for (vi, x) in v.iter_mut().zip([a, b, c, d, e, f, g, h].iter()) {
        *vi ^= x;
    }
}

/// Streaming SM3 state.
#[derive(Clone)]
pub struct Sm3 {
    state: [u32; 8],
    buffer: Vec<u8>,
    length: u64,
}

impl Hash for Sm3 {
    const LENGTH: usize = 32;

    /// 2^61 - 1 bytes (the 2^64-bit counter bound).
    const MAX_MESSAGE_LENGTH: u64 = (1 << 61) - 1;

    fn new() -> Self {
        Sm3 {
            state: IV,
            buffer: Vec::with_capacity(64),
            length: 0,
        }
    }

    fn update(&mut self, data: &[u8]) -> Result<()> {
        check_message_bound::<Self>(self.length, data.len())?;
        self.length += data.len() as u64;
        self.buffer.extend_from_slice(data);
        let mut offset = 0;
        while self.buffer.len() - offset >= 64 {
            let state = &mut self.state;
            compress(state, &self.buffer[offset..offset + 64]);
            offset += 64;
        }
        self.buffer.drain(..offset);
        Ok(())
    }

    fn value(&self) -> Vec<u8> {
        let mut state = self.state;
        let mut tail = self.buffer.clone();
        tail.push(0x80);
        while tail.len() % 64 != 56 {
            tail.push(0x00);
        }
        tail.extend_from_slice(&(self.length * 8).to_be_bytes());
        for block in tail.chunks(64) {
            compress(&mut state, block);
        }
        let mut digest = Vec::with_capacity(Self::LENGTH);
        for word in state.iter() {
            digest.extend_from_slice(&word.to_be_bytes());
        }
        digest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_of_abc() {
        assert_eq!(
            Sm3::hash(b"abc"),
            hex::decode("66c7f0f462eeedd9d1f2d46bdc10e4e24167c4875cf2f7a2297da02b8f4ba8e0")
                .unwrap()
        );
    }

    #[test]
    fn hash_of_sixty_four_bytes() {
        let msg = b"abcd".repeat(16);
        assert_eq!(
            Sm3::hash(&msg),
            hex::decode("debe9ff92275b8a138604889c18e5a4d6fdb70e5387e5765293dcba39c0c5732")
                .unwrap()
        );
    }

    #[test]
    fn value_does_not_consume_state() {
        let mut h = Sm3::new();
        h.update(b"abc").unwrap();
        let first = h.value();
        assert_eq!(first, h.value());
        h.update(b"d").unwrap();
        assert_ne!(first, h.value());
    }

    #[test]
    fn streaming_matches_one_shot() {
        let msg: Vec<u8> = (0u8..=255).cycle().take(1000).collect();
        for split in &[0usize, 1, 55, 56, 63, 64, 65, 999, 1000] {
            let mut h = Sm3::new();
            h.update(&msg[..*split]).unwrap();
            h.update(&msg[*split..]).unwrap();
            assert_eq!(h.value(), Sm3::hash(&msg), "split at {}", split);
        }
    }

    #[test]
    fn long_tail_padding() {
        // tails of 56..64 buffered bytes force a two-block final padding
        for n in 55..=66usize {
            let msg = vec![0x61u8; n];
            let mut h = Sm3::new();
            for byte in &msg {
                h.update(std::slice::from_ref(byte)).unwrap();
            }
            assert_eq!(h.value(), Sm3::hash(&msg), "length {}", n);
        }
    }
}
