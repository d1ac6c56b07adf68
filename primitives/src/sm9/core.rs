//! SM9 core operations in field and curve terms.
//!
//! Master and user keys, signatures, the identity-based key exchange, the
//! KEM and the hybrid cipher, all over the fixed SM9 BN curve. Byte-level
//! wire handling lives in the façades.

use crate::{
    crh::Hash,
    error::{Error, Result},
    kdf::kdf,
    rand::{rand_in_range, RandomSource},
};
use derivative::Derivative;
use gm_algebra::{
    biginteger::{reduce_bytes_be_mod, BigInteger, BigInteger256},
    curves::{
        sm9::{G1Affine, G2Affine, Sm9},
        AffineCurve, PairingEngine,
    },
    fields::{
        sm9::{Fq12, Fr},
        Field, FpParameters, PrimeField,
    },
    to_bytes,
};
use std::marker::PhantomData;

/// Output width of the H1/H2 constructions:
/// hlen = ceil(5 * log2(n) / 32) bytes.
const H_SCALAR_BYTES: usize = 40;

#[derive(Derivative)]
#[derivative(Clone(bound = ""), Debug(bound = ""), Default(bound = ""))]
pub struct Sm9Core<H: Hash> {
    _hash: PhantomData<H>,
}

fn order_minus_one() -> BigInteger256 {
    let mut n = <Fr as PrimeField>::Params::MODULUS;
    n.sub_noborrow(&BigInteger256::from(1));
    n
}

fn xor_stream(data: &[u8], stream: &[u8]) -> Vec<u8> {
    data.iter().zip(stream.iter()).map(|(a, b)| a ^ b).collect()
}

fn g1_generator() -> G1Affine {
    G1Affine::prime_subgroup_generator()
}

fn g2_generator() -> G2Affine {
    G2Affine::prime_subgroup_generator()
}

impl<H: Hash> Sm9Core<H> {
    pub fn new() -> Self {
        Sm9Core { _hash: PhantomData }
    }

    /// H_i(Z) = (expand(i || Z) mod (n - 1)) + 1, the hash-to-scalar of the
    /// protocols; the expansion is the counter construction of the KDF.
    fn hash_to_scalar(&self, prefix: u8, z: &[u8]) -> Result<Fr> {
        let mut input = Vec::with_capacity(1 + z.len());
        input.push(prefix);
        input.extend_from_slice(z);
        let expanded = kdf::<H>(&input, H_SCALAR_BYTES)?;
        let mut repr = reduce_bytes_be_mod(&expanded, &order_minus_one());
        repr.add_nocarry(&BigInteger256::from(1));
        Ok(Fr::from_repr(repr).expect("value in [1, n-1]"))
    }

    pub fn h1(&self, z: &[u8]) -> Result<Fr> {
        self.hash_to_scalar(0x01, z)
    }

    pub fn h2(&self, z: &[u8]) -> Result<Fr> {
        self.hash_to_scalar(0x02, z)
    }

    fn mac(&self, key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
        let mut h = H::new();
        h.update(data)?;
        h.update(key)?;
        Ok(h.value())
    }

    pub fn generate_mpk_sign(&self, msk_s: &Fr) -> G2Affine {
        g2_generator().mul(msk_s.into_repr())
    }

    pub fn generate_mpk_encrypt(&self, msk_e: &Fr) -> G1Affine {
        g1_generator().mul(msk_e.into_repr())
    }

    pub fn generate_keypair_sign<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
    ) -> (Fr, G2Affine) {
        let msk = Fr::from_repr(rand_in_range(rng, &order_minus_one()))
            .expect("sampled below the order");
        (msk, self.generate_mpk_sign(&msk))
    }

    pub fn generate_keypair_encrypt<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
    ) -> (Fr, G1Affine) {
        let msk = Fr::from_repr(rand_in_range(rng, &order_minus_one()))
            .expect("sampled below the order");
        (msk, self.generate_mpk_encrypt(&msk))
    }

    /// sk = (msk / (H1(uid || hid) + msk)) * G1. A vanishing denominator is
    /// unrecoverable for this master key.
    pub fn generate_sk_sign(&self, hid_s: u8, msk_s: &Fr, uid: &[u8]) -> Result<G1Affine> {
        let t2 = self.user_key_scalar(hid_s, msk_s, uid)?;
        Ok(g1_generator().mul(t2.into_repr()))
    }

    pub fn generate_sk_encrypt(&self, hid_e: u8, msk_e: &Fr, uid: &[u8]) -> Result<G2Affine> {
        let t2 = self.user_key_scalar(hid_e, msk_e, uid)?;
        Ok(g2_generator().mul(t2.into_repr()))
    }

    fn user_key_scalar(&self, hid: u8, msk: &Fr, uid: &[u8]) -> Result<Fr> {
        let mut z = uid.to_vec();
        z.push(hid);
        let t1 = self.h1(&z)? + msk;
        if t1.is_zero() {
            return Err(Error::InvalidUserKey);
        }
        Ok(*msk * t1.inverse().expect("checked non-zero"))
    }

    pub fn sign<R: RandomSource + ?Sized>(
        &self,
        message: &[u8],
        mpk_s: &G2Affine,
        sk_s: &G1Affine,
        rng: &mut R,
    ) -> Result<(Fr, G1Affine)> {
        let g = Sm9::pairing(g1_generator(), *mpk_s);
        loop {
            let r_repr = rand_in_range(rng, &order_minus_one());
            let r = Fr::from_repr(r_repr).expect("sampled below the order");
            let w = g.pow(r_repr);

            let mut z = message.to_vec();
            z.extend_from_slice(&to_bytes![w].expect("fixed-width field write"));
            let h = self.h2(&z)?;

            let l = r - h;
            if l.is_zero() {
                continue;
            }
            return Ok((h, sk_s.mul(l.into_repr())));
        }
    }

    pub fn verify(
        &self,
        message: &[u8],
        h: &Fr,
        s: &G1Affine,
        hid_s: u8,
        mpk_s: &G2Affine,
        uid: &[u8],
    ) -> Result<bool> {
        if h.is_zero() {
            return Ok(false);
        }
        if s.is_zero() || !s.is_on_curve() {
            return Ok(false);
        }
        let g = Sm9::pairing(g1_generator(), *mpk_s);
        let t = g.pow(h.into_repr());

        let mut z = uid.to_vec();
        z.push(hid_s);
        let h1 = self.h1(&z)?;
        let p = g2_generator().mul(h1.into_repr()) + mpk_s;

        let u = Sm9::pairing(*s, p);
        let w = u * t;

        let mut z = message.to_vec();
        z.extend_from_slice(&to_bytes![w].expect("fixed-width field write"));
        Ok(self.h2(&z)? == *h)
    }

    /// Q = H1(uid_peer || hid) * G1 + mpk_e, R = r * Q.
    pub fn begin_key_exchange<R: RandomSource + ?Sized>(
        &self,
        hid_e: u8,
        mpk_e: &G1Affine,
        peer_uid: &[u8],
        rng: &mut R,
    ) -> Result<(Fr, G1Affine)> {
        let q = self.peer_point(hid_e, mpk_e, peer_uid)?;
        let r = Fr::from_repr(rand_in_range(rng, &order_minus_one()))
            .expect("sampled below the order");
        Ok((r, q.mul(r.into_repr())))
    }

    fn peer_point(&self, hid_e: u8, mpk_e: &G1Affine, peer_uid: &[u8]) -> Result<G1Affine> {
        let mut z = peer_uid.to_vec();
        z.push(hid_e);
        let h1 = self.h1(&z)?;
        Ok(g1_generator().mul(h1.into_repr()) + mpk_e)
    }

    /// The three pairing values both parties can compute.
    pub fn get_secret_data(
        &self,
        mpk_e: &G1Affine,
        r: &Fr,
        peer_r: &G1Affine,
        sk_e: &G2Affine,
    ) -> Result<(Fq12, Fq12, Fq12)> {
        if peer_r.is_zero() || !peer_r.is_on_curve() {
            return Err(gm_algebra::Error::PointNotOnCurve.into());
        }
        let g1 = Sm9::pairing(*mpk_e, g2_generator()).pow(r.into_repr());
        let g2 = Sm9::pairing(*peer_r, *sk_e);
        let g3 = g2.pow(r.into_repr());
        Ok((g1, g2, g3))
    }

    /// KDF over both identities, both ephemeral points and g1 || g2 || g3.
    pub fn generate_skey(
        &self,
        klen: usize,
        shared: &(Fq12, Fq12, Fq12),
        uid_init: &[u8],
        r_init: &G1Affine,
        uid_resp: &[u8],
        r_resp: &G1Affine,
    ) -> Result<Vec<u8>> {
        let mut z = Vec::new();
        z.extend_from_slice(uid_init);
        z.extend_from_slice(uid_resp);
        z.extend_from_slice(
            &to_bytes![r_init.x, r_init.y, r_resp.x, r_resp.y, shared.0, shared.1, shared.2]
                .expect("fixed-width field writes"),
        );
        kdf::<H>(&z, klen)
    }

    pub fn encapsulate<R: RandomSource + ?Sized>(
        &self,
        hid_e: u8,
        mpk_e: &G1Affine,
        klen: usize,
        peer_uid: &[u8],
        rng: &mut R,
    ) -> Result<(Vec<u8>, G1Affine)> {
        let q = self.peer_point(hid_e, mpk_e, peer_uid)?;
        let g = Sm9::pairing(*mpk_e, g2_generator());
        loop {
            let r_repr = rand_in_range(rng, &order_minus_one());
            let c = q.mul(r_repr);
            let w = g.pow(r_repr);

            let mut z = to_bytes![c.x, c.y, w].expect("fixed-width field writes");
            z.extend_from_slice(peer_uid);
            let key = kdf::<H>(&z, klen)?;
            if !key.is_empty() && key.iter().all(|&b| b == 0) {
                continue;
            }
            return Ok((key, c));
        }
    }

    pub fn decapsulate(
        &self,
        c: &G1Affine,
        klen: usize,
        sk_e: &G2Affine,
        uid: &[u8],
    ) -> Result<Vec<u8>> {
        if c.is_zero() || !c.is_on_curve() {
            return Err(gm_algebra::Error::PointNotOnCurve.into());
        }
        let w = Sm9::pairing(*c, *sk_e);
        let mut z = to_bytes![c.x, c.y, w].expect("fixed-width field writes");
        z.extend_from_slice(uid);
        let key = kdf::<H>(&z, klen)?;
        if !key.is_empty() && key.iter().all(|&b| b == 0) {
            return Err(Error::CheckFailed("derived key is all zero"));
        }
        Ok(key)
    }

    pub fn encrypt<R: RandomSource + ?Sized>(
        &self,
        hid_e: u8,
        mpk_e: &G1Affine,
        plain: &[u8],
        peer_uid: &[u8],
        mac_klen: usize,
        rng: &mut R,
    ) -> Result<(G1Affine, Vec<u8>, Vec<u8>)> {
        let (key, c1) =
            self.encapsulate(hid_e, mpk_e, plain.len() + mac_klen, peer_uid, rng)?;
        let (k1, k2) = key.split_at(plain.len());
        let c2 = xor_stream(plain, k1);
        let c3 = self.mac(k2, &c2)?;
        Ok((c1, c2, c3))
    }

    pub fn decrypt(
        &self,
        c1: &G1Affine,
        c2: &[u8],
        c3: &[u8],
        sk_e: &G2Affine,
        uid: &[u8],
        mac_klen: usize,
    ) -> Result<Vec<u8>> {
        let key = self.decapsulate(c1, c2.len() + mac_klen, sk_e, uid)?;
        let (k1, k2) = key.split_at(c2.len());
        let plain = xor_stream(c2, k1);
        if self.mac(k2, c2)? != c3 {
            return Err(Error::CheckFailed("invalid MAC value"));
        }
        Ok(plain)
    }
}
