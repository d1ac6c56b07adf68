//! The SM2 public-key schemes of GB/T 32918 over the fixed sm2p256v1 curve:
//! digital signatures, hybrid encryption and the two-pass key exchange.

use crate::{
    crh::{Hash, Sm3},
    error::{Error, Result},
    rand::{OsRandom, RandomSource},
    KeyExchangeMode,
};
use gm_algebra::{
    biginteger::BigInteger256,
    bytes::FromBytes,
    curves::{sm2p256v1::Affine, PcMode},
    fields::{sm2::Fr, Field, PrimeField},
    to_bytes,
};

pub mod core;
pub use self::core::Sm2Core;

/// Caller-side state of an exchange in flight, returned by
/// [`Sm2::begin_key_exchange`].
pub struct Sm2ExchangeContext {
    t: Fr,
}

/// Byte-level SM2 façade. Wire arguments are decoded once, the core runs in
/// field and curve terms, and results are re-encoded.
pub struct Sm2<H: Hash = Sm3, R: RandomSource = OsRandom> {
    core: Sm2Core<H>,
    rng: R,
    sk: Option<Fr>,
    pk: Option<Affine>,
    uid: Option<Vec<u8>>,
    pc_mode: PcMode,
}

impl Sm2 {
    pub fn new() -> Self {
        Self::with_rng(OsRandom::new())
    }
}

impl Default for Sm2 {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_scalar(bytes: &[u8]) -> Option<Fr> {
    if bytes.len() != 32 {
        return None;
    }
    let repr = BigInteger256::read(bytes).ok()?;
    Fr::from_repr(repr)
}

impl<H: Hash, R: RandomSource> Sm2<H, R> {
    pub fn with_rng(rng: R) -> Self {
        Sm2 {
            core: Sm2Core::new(),
            rng,
            sk: None,
            pk: None,
            uid: None,
            pc_mode: PcMode::Raw,
        }
    }

    pub fn set_pc_mode(&mut self, mode: PcMode) {
        self.pc_mode = mode;
    }

    pub fn set_uid(&mut self, uid: &[u8]) {
        self.uid = Some(uid.to_vec());
    }

    /// Installs the secret key (32 big-endian bytes, in [1, n-1]) and derives
    /// the public key if none is present yet.
    pub fn set_secret_key(&mut self, d: &[u8]) -> Result<()> {
        let sk = parse_scalar(d)
            .filter(|sk| !sk.is_zero())
            .ok_or_else(|| Error::InvalidArgument("secret key out of range".into()))?;
        if self.pk.is_none() {
            self.pk = Some(self.core.public_key(&sk));
        }
        self.sk = Some(sk);
        Ok(())
    }

    /// Installs the public key from any point format.
    pub fn set_public_key(&mut self, pk: &[u8]) -> Result<()> {
        self.pk = Some(Affine::from_pc_bytes(pk)?);
        Ok(())
    }

    /// The installed public key in the configured point format.
    pub fn public_key_bytes(&self) -> Option<Vec<u8>> {
        self.pk.as_ref().map(|pk| pk.to_pc_bytes(self.pc_mode))
    }

    pub fn can_sign(&self) -> bool {
        self.sk.is_some() && self.pk.is_some() && self.uid.is_some()
    }

    pub fn can_verify(&self) -> bool {
        self.pk.is_some() && self.uid.is_some()
    }

    pub fn can_encrypt(&self) -> bool {
        self.pk.is_some()
    }

    pub fn can_decrypt(&self) -> bool {
        self.sk.is_some()
    }

    pub fn can_exchange_key(&self) -> bool {
        self.sk.is_some() && self.pk.is_some() && self.uid.is_some()
    }

    /// A fresh key pair: the secret key as 32 bytes and the public key in the
    /// configured point format. The instance keys are left untouched.
    pub fn generate_keypair(&mut self) -> (Vec<u8>, Vec<u8>) {
        let (sk, pk) = self.core.generate_keypair(&mut self.rng);
        (
            to_bytes![sk].expect("fixed-width field write"),
            pk.to_pc_bytes(self.pc_mode),
        )
    }

    /// Whether the encoded point is a valid SM2 public key.
    pub fn verify_pubkey(&self, pk: &[u8]) -> bool {
        match Affine::from_pc_bytes(pk) {
            Ok(point) => self.core.verify_pubkey(&point),
            Err(_) => false,
        }
    }

    /// Signs a message, returning (r, s) as 32-byte scalars.
    pub fn sign(&mut self, message: &[u8]) -> Result<(Vec<u8>, Vec<u8>)> {
        if !self.can_sign() {
            return Err(Error::RequireArgument {
                operation: "sign",
                required: "secret key, public key and user id",
            });
        }
        let (r, s) = self.core.sign(
            message,
            self.sk.as_ref().unwrap(),
            self.uid.as_ref().unwrap(),
            self.pk.as_ref().unwrap(),
            &mut self.rng,
        )?;
        Ok((
            to_bytes![r].expect("fixed-width field write"),
            to_bytes![s].expect("fixed-width field write"),
        ))
    }

    /// Verifies (r, s) over the message; scalars outside [1, n-1] never
    /// verify.
    pub fn verify(&self, message: &[u8], r: &[u8], s: &[u8]) -> Result<bool> {
        if !self.can_verify() {
            return Err(Error::RequireArgument {
                operation: "verify",
                required: "public key and user id",
            });
        }
        let (r, s) = match (parse_scalar(r), parse_scalar(s)) {
            (Some(r), Some(s)) => (r, s),
            _ => return Ok(false),
        };
        self.core.verify(
            message,
            &r,
            &s,
            self.uid.as_ref().unwrap(),
            self.pk.as_ref().unwrap(),
        )
    }

    /// Encrypts to the installed public key; the wire format is
    /// C1 || C3 || C2.
    pub fn encrypt(&mut self, plain: &[u8]) -> Result<Vec<u8>> {
        if !self.can_encrypt() {
            return Err(Error::RequireArgument {
                operation: "encrypt",
                required: "public key",
            });
        }
        let (c1, c2, c3) =
            self.core
                .encrypt(plain, self.pk.as_ref().unwrap(), &mut self.rng)?;
        let mut cipher = c1.to_pc_bytes(self.pc_mode);
        cipher.extend_from_slice(&c3);
        cipher.extend_from_slice(&c2);
        Ok(cipher)
    }

    pub fn decrypt(&self, cipher: &[u8]) -> Result<Vec<u8>> {
        if !self.can_decrypt() {
            return Err(Error::RequireArgument {
                operation: "decrypt",
                required: "secret key",
            });
        }
        let (c1, c3, c2) = split_wire_cipher::<H>(cipher, 32)?;
        self.core
            .decrypt(&Affine::from_pc_bytes(c1)?, c2, c3, self.sk.as_ref().unwrap())
    }

    /// Starts an exchange: returns the ephemeral point for the peer and the
    /// state needed to finish.
    pub fn begin_key_exchange(&mut self) -> Result<(Vec<u8>, Sm2ExchangeContext)> {
        if !self.can_exchange_key() {
            return Err(Error::RequireArgument {
                operation: "key exchange",
                required: "secret key, public key and user id",
            });
        }
        let (point, t) = self
            .core
            .begin_key_exchange(self.sk.as_ref().unwrap(), &mut self.rng);
        Ok((point.to_pc_bytes(self.pc_mode), Sm2ExchangeContext { t }))
    }

    /// Finishes an exchange with the peer's identity and public material.
    /// Both roles derive the same key when each labels itself correctly.
    pub fn end_key_exchange(
        &self,
        klen: usize,
        ctx: &Sm2ExchangeContext,
        peer_uid: &[u8],
        peer_pk: &[u8],
        peer_r: &[u8],
        mode: KeyExchangeMode,
    ) -> Result<Vec<u8>> {
        if !self.can_exchange_key() {
            return Err(Error::RequireArgument {
                operation: "key exchange",
                required: "secret key, public key and user id",
            });
        }
        let peer_pk = Affine::from_pc_bytes(peer_pk)?;
        let peer_r = Affine::from_pc_bytes(peer_r)?;
        let secret = self.core.get_secret_point(&ctx.t, &peer_r, &peer_pk)?;

        let z_self = self
            .core
            .entity_digest(self.uid.as_ref().unwrap(), self.pk.as_ref().unwrap())?;
        let z_peer = self.core.entity_digest(peer_uid, &peer_pk)?;
        match mode {
            KeyExchangeMode::Initiator => {
                self.core.generate_skey(klen, &secret, &z_self, &z_peer)
            }
            KeyExchangeMode::Responder => {
                self.core.generate_skey(klen, &secret, &z_peer, &z_self)
            }
        }
    }
}

/// Splits C1 || C3 || C2 by the PC prefix of C1 and the digest length.
pub(crate) fn split_wire_cipher<H: Hash>(
    cipher: &[u8],
    coordinate_len: usize,
) -> Result<(&[u8], &[u8], &[u8])> {
    let prefix = *cipher.first().ok_or(Error::IncorrectLength {
        name: "cipher",
        expected: 1,
        got: 0,
    })?;
    let c1_len = match prefix {
        0x04 | 0x06 | 0x07 => 1 + 2 * coordinate_len,
        0x02 | 0x03 => 1 + coordinate_len,
        other => return Err(gm_algebra::Error::InvalidPcByte(other).into()),
    };
    if cipher.len() < c1_len + H::LENGTH {
        return Err(Error::IncorrectLength {
            name: "cipher",
            expected: c1_len + H::LENGTH,
            got: cipher.len(),
        });
    }
    let (c1, rest) = cipher.split_at(c1_len);
    let (c3, c2) = rest.split_at(H::LENGTH);
    Ok((c1, c3, c2))
}

#[cfg(test)]
mod tests;
