use crate::error::{Error, Result};

pub mod modes;
pub mod sm4;

pub use self::modes::{Cbc, Cfb, Ecb, Ofb};
pub use self::sm4::Sm4;

/// A block cipher operating on exactly one block at a time.
pub trait BlockCipher: Sized {
    /// Key length in bytes.
    const KEY_LENGTH: usize;

    /// Block length in bytes.
    const BLOCK_LENGTH: usize;

    /// Expands the key; fails with `IncorrectLength` for any other key size.
    fn new(key: &[u8]) -> Result<Self>;

    fn encrypt(&self, block: &[u8]) -> Result<Vec<u8>>;

    fn decrypt(&self, block: &[u8]) -> Result<Vec<u8>>;
}

pub(crate) fn check_length(name: &'static str, expected: usize, got: usize) -> Result<()> {
    if expected != got {
        return Err(Error::IncorrectLength {
            name,
            expected,
            got,
        });
    }
    Ok(())
}
