//! Protocol layer of the GM/T algorithm suite.
//!
//! Builds the SM2 elliptic-curve schemes and the SM9 identity-based schemes
//! on top of `gm-algebra`, together with the symmetric primitives they
//! consume: the SM3 hash, the SM4 block cipher with its working modes, and
//! the counter-mode key-derivation function.
//!
//! Byte-level façades ([`Sm2`], [`Sm9`], [`Sm9Kgc`]) decode wire-format
//! arguments, drive the cores, and re-encode the results; the cores operate
//! on field elements and curve points throughout.

use serde::{Deserialize, Serialize};

pub mod error;
pub use self::error::Error;

pub mod rand;

pub mod crh;
pub use self::crh::{Hash, Sm3};

pub mod block_cipher;
pub use self::block_cipher::{BlockCipher, Sm4};

pub mod kdf;

pub mod sm2;
pub use self::sm2::Sm2;

pub mod sm9;
pub use self::sm9::{Sm9, Sm9Kgc};

pub use gm_algebra::curves::PcMode;

/// Role labels of the two-party key-exchange protocols.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyExchangeMode {
    Initiator,
    Responder,
}
