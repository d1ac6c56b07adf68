//! SM2 core operations in field and curve terms.
//!
//! Everything here speaks `Fr` scalars and affine points of sm2p256v1; the
//! byte-level wire handling lives in the façade.

use crate::{
    crh::Hash,
    error::{Error, Result},
    kdf::kdf,
    rand::{rand_in_range, RandomSource},
};
use derivative::Derivative;
use gm_algebra::{
    biginteger::{BigInteger, BigInteger256},
    curves::{
        models::SWModelParameters,
        sm2p256v1::{Affine, Sm2P256V1Parameters},
        AffineCurve,
    },
    fields::{
        sm2::{Fq, Fr},
        Field, FpParameters, PrimeField,
    },
    to_bytes,
};
use std::marker::PhantomData;

/// Bit width of the reduced x coordinate of the key-exchange protocol:
/// w = ceil(ceil(log2 n) / 2) - 1.
const REDUCED_X_BITS: u32 = 127;

#[derive(Derivative)]
#[derivative(Clone(bound = ""), Debug(bound = ""), Default(bound = ""))]
pub struct Sm2Core<H: Hash> {
    _hash: PhantomData<H>,
}

fn order_minus(k: u64) -> BigInteger256 {
    let mut n = <Fr as PrimeField>::Params::MODULUS;
    n.sub_noborrow(&BigInteger256::from(k));
    n
}

/// Reduce a base-field element into the scalar field by its canonical
/// integer value.
fn base_to_scalar(x: &Fq) -> Fr {
    let bytes = to_bytes![x].expect("fixed-width field write");
    Fr::from_be_bytes_mod_order(&bytes)
}

/// x-bar = 2^w + (x mod 2^w) of the key-exchange protocol.
fn reduced_x(x: &Fq) -> Fr {
    let mut repr = x.into_repr();
    repr.0[1] &= (1 << 63) - 1;
    repr.0[2] = 0;
    repr.0[3] = 0;
    repr.0[1] |= 1 << (REDUCED_X_BITS - 64);
    Fr::from_repr(repr).expect("a 128-bit value is below the group order")
}

fn xor_stream(data: &[u8], stream: &[u8]) -> Vec<u8> {
    data.iter().zip(stream.iter()).map(|(a, b)| a ^ b).collect()
}

impl<H: Hash> Sm2Core<H> {
    pub fn new() -> Self {
        Sm2Core { _hash: PhantomData }
    }

    /// d in [1, n-2], pk = d * G.
    pub fn generate_keypair<R: RandomSource + ?Sized>(&self, rng: &mut R) -> (Fr, Affine) {
        let d = rand_in_range(rng, &order_minus(2));
        let sk = Fr::from_repr(d).expect("sampled below the order");
        (sk, self.public_key(&sk))
    }

    pub fn public_key(&self, sk: &Fr) -> Affine {
        Affine::prime_subgroup_generator().mul(sk.into_repr())
    }

    /// A valid public key is a finite curve point of order n.
    pub fn verify_pubkey(&self, pk: &Affine) -> bool {
        !pk.is_zero()
            && pk.is_on_curve()
            && pk.mul(<Fr as PrimeField>::Params::MODULUS).is_zero()
    }

    /// The entity digest Z = H(ENTL || uid || a || b || xG || yG || xP || yP).
    pub fn entity_digest(&self, uid: &[u8], pk: &Affine) -> Result<Vec<u8>> {
        let entl_bits = uid.len() * 8;
        if entl_bits >= 1 << 16 {
            return Err(Error::DataOverflow {
                name: "user id",
                limit: "8191 bytes",
            });
        }
        let generator = Affine::prime_subgroup_generator();
        let mut h = H::new();
        h.update(&(entl_bits as u16).to_be_bytes())?;
        h.update(uid)?;
        h.update(
            &to_bytes![
                Sm2P256V1Parameters::COEFF_A,
                Sm2P256V1Parameters::COEFF_B,
                generator.x,
                generator.y,
                pk.x,
                pk.y
            ]
            .expect("fixed-width field writes"),
        )?;
        Ok(h.value())
    }

    fn message_digest(&self, uid: &[u8], pk: &Affine, message: &[u8]) -> Result<Fr> {
        let mut h = H::new();
        h.update(&self.entity_digest(uid, pk)?)?;
        h.update(message)?;
        Ok(Fr::from_be_bytes_mod_order(&h.value()))
    }

    pub fn sign<R: RandomSource + ?Sized>(
        &self,
        message: &[u8],
        sk: &Fr,
        uid: &[u8],
        pk: &Affine,
        rng: &mut R,
    ) -> Result<(Fr, Fr)> {
        let e = self.message_digest(uid, pk, message)?;
        let one_plus_d_inv = (Fr::one() + sk).inverse().ok_or_else(|| {
            Error::InvalidArgument("secret key is the negative of one".into())
        })?;

        loop {
            let k_repr = rand_in_range(rng, &order_minus(1));
            let k = Fr::from_repr(k_repr).expect("sampled below the order");
            let kg = Affine::prime_subgroup_generator().mul(k_repr);

            let r = e + base_to_scalar(&kg.x);
            if r.is_zero() || (r + k).is_zero() {
                continue;
            }
            let s = one_plus_d_inv * (k - r * sk);
            if s.is_zero() {
                continue;
            }
            return Ok((r, s));
        }
    }

    /// Scalars are already range-checked by the caller; rejects the residual
    /// boundary cases and the signature equation mismatch.
    pub fn verify(
        &self,
        message: &[u8],
        r: &Fr,
        s: &Fr,
        uid: &[u8],
        pk: &Affine,
    ) -> Result<bool> {
        if r.is_zero() || s.is_zero() {
            return Ok(false);
        }
        let t = *r + s;
        if t.is_zero() {
            return Ok(false);
        }
        let e = self.message_digest(uid, pk, message)?;
        let point =
            Affine::prime_subgroup_generator().mul(s.into_repr()) + pk.mul(t.into_repr());
        if point.is_zero() {
            return Ok(false);
        }
        Ok(e + base_to_scalar(&point.x) == *r)
    }

    pub fn encrypt<R: RandomSource + ?Sized>(
        &self,
        plain: &[u8],
        pk: &Affine,
        rng: &mut R,
    ) -> Result<(Affine, Vec<u8>, Vec<u8>)> {
        if pk.mul_by_cofactor().is_zero() {
            return Err(Error::InfinitePoint);
        }
        loop {
            let k_repr = rand_in_range(rng, &order_minus(1));
            let c1 = Affine::prime_subgroup_generator().mul(k_repr);
            let kp = pk.mul(k_repr);
            let shared = to_bytes![kp.x, kp.y].expect("fixed-width field writes");

            let t = kdf::<H>(&shared, plain.len())?;
            if !t.is_empty() && t.iter().all(|&b| b == 0) {
                continue;
            }

            let c2 = xor_stream(plain, &t);
            let (x2, y2) = shared.split_at(shared.len() / 2);
            let mut mac = H::new();
            mac.update(x2)?;
            mac.update(plain)?;
            mac.update(y2)?;
            return Ok((c1, c2, mac.value()));
        }
    }

    pub fn decrypt(&self, c1: &Affine, c2: &[u8], c3: &[u8], sk: &Fr) -> Result<Vec<u8>> {
        if c1.is_zero() || !c1.is_on_curve() {
            return Err(gm_algebra::Error::PointNotOnCurve.into());
        }
        if c1.mul_by_cofactor().is_zero() {
            return Err(Error::InfinitePoint);
        }
        let kp = c1.mul(sk.into_repr());
        let shared = to_bytes![kp.x, kp.y].expect("fixed-width field writes");

        let t = kdf::<H>(&shared, c2.len())?;
        if !t.is_empty() && t.iter().all(|&b| b == 0) {
            return Err(Error::CheckFailed("key stream is all zero"));
        }
        let plain = xor_stream(c2, &t);

        let (x2, y2) = shared.split_at(shared.len() / 2);
        let mut mac = H::new();
        mac.update(x2)?;
        mac.update(&plain)?;
        mac.update(y2)?;
        if mac.value() != c3 {
            return Err(Error::CheckFailed("hash value mismatch"));
        }
        Ok(plain)
    }

    /// First pass of the exchange: an ephemeral point R = r * G and the
    /// implicit signature t = (d + x-bar(R) * r) mod n.
    pub fn begin_key_exchange<R: RandomSource + ?Sized>(
        &self,
        sk: &Fr,
        rng: &mut R,
    ) -> (Affine, Fr) {
        let r_repr = rand_in_range(rng, &order_minus(1));
        let r = Fr::from_repr(r_repr).expect("sampled below the order");
        let point = Affine::prime_subgroup_generator().mul(r_repr);
        let t = *sk + reduced_x(&point.x) * r;
        (point, t)
    }

    /// The shared point h * t * (pk_peer + x-bar(R_peer) * R_peer).
    pub fn get_secret_point(
        &self,
        t: &Fr,
        peer_r: &Affine,
        peer_pk: &Affine,
    ) -> Result<Affine> {
        if peer_r.is_zero() || !peer_r.is_on_curve() {
            return Err(gm_algebra::Error::PointNotOnCurve.into());
        }
        let base = *peer_pk + peer_r.mul(reduced_x(&peer_r.x).into_repr());
        let secret = base.mul(t.into_repr()).mul_by_cofactor();
        if secret.is_zero() {
            return Err(Error::InfinitePoint);
        }
        Ok(secret)
    }

    /// KDF(x || y || Z_initiator || Z_responder, klen).
    pub fn generate_skey(
        &self,
        klen: usize,
        secret: &Affine,
        z_initiator: &[u8],
        z_responder: &[u8],
    ) -> Result<Vec<u8>> {
        let mut z = to_bytes![secret.x, secret.y].expect("fixed-width field writes");
        z.extend_from_slice(z_initiator);
        z.extend_from_slice(z_responder);
        kdf::<H>(&z, klen)
    }
}
