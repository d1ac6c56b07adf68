//! The SM9 identity-based schemes of GM/T 0044: signatures, key exchange,
//! key encapsulation and hybrid encryption, plus the KGC role issuing
//! master and user keys.

use crate::{
    crh::{Hash, Sm3},
    error::{Error, Result},
    rand::{OsRandom, RandomSource},
    sm2::split_wire_cipher,
    KeyExchangeMode,
};
use gm_algebra::{
    biginteger::BigInteger256,
    bytes::FromBytes,
    curves::{
        sm9::{G1Affine, G2Affine},
        PcMode,
    },
    fields::{sm9::Fr, Field, PrimeField},
    to_bytes,
};

pub mod core;
pub use self::core::Sm9Core;

/// Standard domain-separator bytes of the test vectors.
pub const HID_SIGN: u8 = 0x01;
pub const HID_EXCHANGE: u8 = 0x02;
pub const HID_ENCRYPT: u8 = 0x03;

/// Caller-side state of an identity-based exchange in flight.
pub struct Sm9ExchangeContext {
    r: Fr,
    point: G1Affine,
}

fn parse_scalar(bytes: &[u8]) -> Option<Fr> {
    let stripped: &[u8] = {
        let mut s = bytes;
        while let Some((&0, rest)) = s.split_first() {
            s = rest;
        }
        s
    };
    if stripped.len() > 32 {
        return None;
    }
    let mut padded = [0u8; 32];
    padded[32 - stripped.len()..].copy_from_slice(stripped);
    let repr = BigInteger256::read(&padded[..]).ok()?;
    Fr::from_repr(repr)
}

/// Scalar bytes in the minimal big-endian form of the wire format.
fn scalar_to_bytes(value: &Fr) -> Vec<u8> {
    let bytes = to_bytes![value].expect("fixed-width field write");
    let first = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len() - 1);
    bytes[first..].to_vec()
}

/// The key-generation centre: holds master secrets and issues user keys.
pub struct Sm9Kgc<H: Hash = Sm3, R: RandomSource = OsRandom> {
    core: Sm9Core<H>,
    rng: R,
    hid_s: Option<u8>,
    msk_s: Option<Fr>,
    hid_e: Option<u8>,
    msk_e: Option<Fr>,
    pc_mode: PcMode,
}

impl Sm9Kgc {
    pub fn new() -> Self {
        Self::with_rng(OsRandom::new())
    }
}

impl Default for Sm9Kgc {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Hash, R: RandomSource> Sm9Kgc<H, R> {
    pub fn with_rng(rng: R) -> Self {
        Sm9Kgc {
            core: Sm9Core::new(),
            rng,
            hid_s: None,
            msk_s: None,
            hid_e: None,
            msk_e: None,
            pc_mode: PcMode::Raw,
        }
    }

    pub fn set_pc_mode(&mut self, mode: PcMode) {
        self.pc_mode = mode;
    }

    pub fn set_sign_master_key(&mut self, hid_s: u8, msk_s: &[u8]) -> Result<()> {
        self.msk_s = Some(parse_master_key(msk_s)?);
        self.hid_s = Some(hid_s);
        Ok(())
    }

    pub fn set_encrypt_master_key(&mut self, hid_e: u8, msk_e: &[u8]) -> Result<()> {
        self.msk_e = Some(parse_master_key(msk_e)?);
        self.hid_e = Some(hid_e);
        Ok(())
    }

    pub fn can_generate_sk_sign(&self) -> bool {
        self.msk_s.is_some() && self.hid_s.is_some()
    }

    pub fn can_generate_sk_encrypt(&self) -> bool {
        self.msk_e.is_some() && self.hid_e.is_some()
    }

    /// A fresh signing master key pair: secret scalar bytes and the G2
    /// public point.
    pub fn generate_keypair_sign(&mut self) -> (Vec<u8>, Vec<u8>) {
        let (msk, mpk) = self.core.generate_keypair_sign(&mut self.rng);
        (scalar_to_bytes(&msk), mpk.to_pc_bytes(self.pc_mode))
    }

    pub fn generate_keypair_encrypt(&mut self) -> (Vec<u8>, Vec<u8>) {
        let (msk, mpk) = self.core.generate_keypair_encrypt(&mut self.rng);
        (scalar_to_bytes(&msk), mpk.to_pc_bytes(self.pc_mode))
    }

    /// The signing master public key of an externally supplied secret.
    pub fn generate_mpk_sign(&self, msk_s: &[u8]) -> Result<Vec<u8>> {
        let msk = parse_master_key(msk_s)?;
        Ok(self.core.generate_mpk_sign(&msk).to_pc_bytes(self.pc_mode))
    }

    pub fn generate_mpk_encrypt(&self, msk_e: &[u8]) -> Result<Vec<u8>> {
        let msk = parse_master_key(msk_e)?;
        Ok(self
            .core
            .generate_mpk_encrypt(&msk)
            .to_pc_bytes(self.pc_mode))
    }

    /// Issues the signing user key for an identity.
    pub fn generate_sk_sign(&self, uid: &[u8]) -> Result<Vec<u8>> {
        if !self.can_generate_sk_sign() {
            return Err(Error::RequireArgument {
                operation: "generate sk sign",
                required: "msk_s and hid_s",
            });
        }
        let sk = self.core.generate_sk_sign(
            self.hid_s.unwrap(),
            self.msk_s.as_ref().unwrap(),
            uid,
        )?;
        Ok(sk.to_pc_bytes(self.pc_mode))
    }

    /// Issues the encryption user key for an identity.
    pub fn generate_sk_encrypt(&self, uid: &[u8]) -> Result<Vec<u8>> {
        if !self.can_generate_sk_encrypt() {
            return Err(Error::RequireArgument {
                operation: "generate sk encrypt",
                required: "msk_e and hid_e",
            });
        }
        let sk = self.core.generate_sk_encrypt(
            self.hid_e.unwrap(),
            self.msk_e.as_ref().unwrap(),
            uid,
        )?;
        Ok(sk.to_pc_bytes(self.pc_mode))
    }
}

fn parse_master_key(bytes: &[u8]) -> Result<Fr> {
    parse_scalar(bytes)
        .filter(|k| !k.is_zero())
        .ok_or_else(|| Error::InvalidArgument("master secret key out of range".into()))
}

/// A user of the SM9 schemes, configured with whatever key material its
/// operations need.
pub struct Sm9<H: Hash = Sm3, R: RandomSource = OsRandom> {
    core: Sm9Core<H>,
    rng: R,
    hid_s: Option<u8>,
    mpk_s: Option<G2Affine>,
    sk_s: Option<G1Affine>,
    hid_e: Option<u8>,
    mpk_e: Option<G1Affine>,
    sk_e: Option<G2Affine>,
    uid: Option<Vec<u8>>,
    pc_mode: PcMode,
    mac_klen: usize,
}

impl Sm9 {
    pub fn new() -> Self {
        Self::with_rng(OsRandom::new())
    }
}

impl Default for Sm9 {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Hash, R: RandomSource> Sm9<H, R> {
    pub fn with_rng(rng: R) -> Self {
        Sm9 {
            core: Sm9Core::new(),
            rng,
            hid_s: None,
            mpk_s: None,
            sk_s: None,
            hid_e: None,
            mpk_e: None,
            sk_e: None,
            uid: None,
            pc_mode: PcMode::Raw,
            mac_klen: 32,
        }
    }

    pub fn set_pc_mode(&mut self, mode: PcMode) {
        self.pc_mode = mode;
    }

    pub fn set_mac_klen(&mut self, mac_klen: usize) {
        self.mac_klen = mac_klen;
    }

    pub fn set_uid(&mut self, uid: &[u8]) {
        self.uid = Some(uid.to_vec());
    }

    pub fn set_sign_keys(&mut self, hid_s: u8, mpk_s: Option<&[u8]>, sk_s: Option<&[u8]>) -> Result<()> {
        self.hid_s = Some(hid_s);
        if let Some(mpk) = mpk_s {
            self.mpk_s = Some(G2Affine::from_pc_bytes(mpk)?);
        }
        if let Some(sk) = sk_s {
            self.sk_s = Some(G1Affine::from_pc_bytes(sk)?);
        }
        Ok(())
    }

    pub fn set_encrypt_keys(&mut self, hid_e: u8, mpk_e: Option<&[u8]>, sk_e: Option<&[u8]>) -> Result<()> {
        self.hid_e = Some(hid_e);
        if let Some(mpk) = mpk_e {
            self.mpk_e = Some(G1Affine::from_pc_bytes(mpk)?);
        }
        if let Some(sk) = sk_e {
            self.sk_e = Some(G2Affine::from_pc_bytes(sk)?);
        }
        Ok(())
    }

    pub fn can_sign(&self) -> bool {
        self.mpk_s.is_some() && self.sk_s.is_some()
    }

    pub fn can_verify(&self) -> bool {
        self.hid_s.is_some() && self.mpk_s.is_some() && self.uid.is_some()
    }

    pub fn can_exchange_key(&self) -> bool {
        self.hid_e.is_some()
            && self.mpk_e.is_some()
            && self.sk_e.is_some()
            && self.uid.is_some()
    }

    pub fn can_encapsulate(&self) -> bool {
        self.hid_e.is_some() && self.mpk_e.is_some()
    }

    pub fn can_decapsulate(&self) -> bool {
        self.sk_e.is_some() && self.uid.is_some()
    }

    pub fn can_encrypt(&self) -> bool {
        self.can_encapsulate() && self.mac_klen > 0
    }

    pub fn can_decrypt(&self) -> bool {
        self.can_decapsulate() && self.mac_klen > 0
    }

    /// Signs a message; returns (h, S) with h in minimal big-endian form and
    /// S in the configured point format.
    pub fn sign(&mut self, message: &[u8]) -> Result<(Vec<u8>, Vec<u8>)> {
        if !self.can_sign() {
            return Err(Error::RequireArgument {
                operation: "sign",
                required: "mpk_s and sk_s",
            });
        }
        let (h, s) = self.core.sign(
            message,
            self.mpk_s.as_ref().unwrap(),
            self.sk_s.as_ref().unwrap(),
            &mut self.rng,
        )?;
        Ok((scalar_to_bytes(&h), s.to_pc_bytes(self.pc_mode)))
    }

    /// Verifies (h, S) over a message; h outside [1, n-1] or S off the curve
    /// never verify.
    pub fn verify(&self, message: &[u8], h: &[u8], s: &[u8]) -> Result<bool> {
        if !self.can_verify() {
            return Err(Error::RequireArgument {
                operation: "verify",
                required: "hid_s, mpk_s and uid",
            });
        }
        let h = match parse_scalar(h) {
            Some(h) => h,
            None => return Ok(false),
        };
        let s = match G1Affine::from_pc_bytes(s) {
            Ok(s) => s,
            Err(_) => return Ok(false),
        };
        self.core.verify(
            message,
            &h,
            &s,
            self.hid_s.unwrap(),
            self.mpk_s.as_ref().unwrap(),
            self.uid.as_ref().unwrap(),
        )
    }

    /// Starts an exchange towards a peer identity; returns the ephemeral
    /// point bytes for the peer and the state needed to finish.
    pub fn begin_key_exchange(&mut self, peer_uid: &[u8]) -> Result<(Vec<u8>, Sm9ExchangeContext)> {
        if !self.can_exchange_key() {
            return Err(Error::RequireArgument {
                operation: "key exchange",
                required: "hid_e, mpk_e, sk_e and uid",
            });
        }
        let (r, point) = self.core.begin_key_exchange(
            self.hid_e.unwrap(),
            self.mpk_e.as_ref().unwrap(),
            peer_uid,
            &mut self.rng,
        )?;
        Ok((
            point.to_pc_bytes(self.pc_mode),
            Sm9ExchangeContext { r, point },
        ))
    }

    /// Finishes an exchange; initiator and responder derive the same key
    /// when each labels itself correctly.
    pub fn end_key_exchange(
        &self,
        klen: usize,
        ctx: &Sm9ExchangeContext,
        peer_uid: &[u8],
        peer_r: &[u8],
        mode: KeyExchangeMode,
    ) -> Result<Vec<u8>> {
        if !self.can_exchange_key() {
            return Err(Error::RequireArgument {
                operation: "key exchange",
                required: "hid_e, mpk_e, sk_e and uid",
            });
        }
        let peer_point = G1Affine::from_pc_bytes(peer_r)?;
        let shared = self.core.get_secret_data(
            self.mpk_e.as_ref().unwrap(),
            &ctx.r,
            &peer_point,
            self.sk_e.as_ref().unwrap(),
        )?;
        let uid = self.uid.as_ref().unwrap();
        match mode {
            KeyExchangeMode::Initiator => self.core.generate_skey(
                klen,
                &shared,
                uid,
                &ctx.point,
                peer_uid,
                &peer_point,
            ),
            KeyExchangeMode::Responder => {
                let swapped = (shared.1, shared.0, shared.2);
                self.core.generate_skey(
                    klen,
                    &swapped,
                    peer_uid,
                    &peer_point,
                    uid,
                    &ctx.point,
                )
            }
        }
    }

    /// Encapsulates `klen` key bytes to a peer identity.
    pub fn encapsulate(&mut self, klen: usize, peer_uid: &[u8]) -> Result<(Vec<u8>, Vec<u8>)> {
        if !self.can_encapsulate() {
            return Err(Error::RequireArgument {
                operation: "encapsulate",
                required: "hid_e and mpk_e",
            });
        }
        let (key, c) = self.core.encapsulate(
            self.hid_e.unwrap(),
            self.mpk_e.as_ref().unwrap(),
            klen,
            peer_uid,
            &mut self.rng,
        )?;
        Ok((key, c.to_pc_bytes(self.pc_mode)))
    }

    pub fn decapsulate(&self, c: &[u8], klen: usize) -> Result<Vec<u8>> {
        if !self.can_decapsulate() {
            return Err(Error::RequireArgument {
                operation: "decapsulate",
                required: "sk_e and uid",
            });
        }
        self.core.decapsulate(
            &G1Affine::from_pc_bytes(c)?,
            klen,
            self.sk_e.as_ref().unwrap(),
            self.uid.as_ref().unwrap(),
        )
    }

    /// Encrypts to a peer identity; the wire format is C1 || C3 || C2.
    pub fn encrypt(&mut self, plain: &[u8], peer_uid: &[u8]) -> Result<Vec<u8>> {
        if !self.can_encrypt() {
            return Err(Error::RequireArgument {
                operation: "encrypt",
                required: "hid_e, mpk_e and mac_klen",
            });
        }
        let (c1, c2, c3) = self.core.encrypt(
            self.hid_e.unwrap(),
            self.mpk_e.as_ref().unwrap(),
            plain,
            peer_uid,
            self.mac_klen,
            &mut self.rng,
        )?;
        let mut cipher = c1.to_pc_bytes(self.pc_mode);
        cipher.extend_from_slice(&c3);
        cipher.extend_from_slice(&c2);
        Ok(cipher)
    }

    pub fn decrypt(&self, cipher: &[u8]) -> Result<Vec<u8>> {
        if !self.can_decrypt() {
            return Err(Error::RequireArgument {
                operation: "decrypt",
                required: "sk_e, uid and mac_klen",
            });
        }
        let (c1, c3, c2) = split_wire_cipher::<H>(cipher, 32)?;
        self.core.decrypt(
            &G1Affine::from_pc_bytes(c1)?,
            c2,
            c3,
            self.sk_e.as_ref().unwrap(),
            self.uid.as_ref().unwrap(),
            self.mac_klen,
        )
    }
}
