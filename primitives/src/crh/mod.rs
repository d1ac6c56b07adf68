use crate::error::{Error, Result};

pub mod sm3;
pub use self::sm3::Sm3;

/// A streaming cryptographic hash with fixed output length.
///
/// `value` returns the digest of everything absorbed so far without
/// disturbing the internal state, so it may be called repeatedly as the
/// stream grows. Instances are not safe for concurrent mutation.
pub trait Hash: Clone {
    /// Digest length in bytes.
    const LENGTH: usize;

    /// Maximum total message length in bytes.
    const MAX_MESSAGE_LENGTH: u64;

    fn new() -> Self;

    /// Absorbs more data; fails with `DataOverflow` past the message bound.
    fn update(&mut self, data: &[u8]) -> Result<()>;

    /// The digest of all data absorbed so far.
    fn value(&self) -> Vec<u8>;

    /// One-shot digest of a short message.
    fn hash(data: &[u8]) -> Vec<u8> {
        let mut h = Self::new();
        h.update(data)
            .expect("one-shot messages are below the length bound");
        h.value()
    }
}

pub(crate) fn check_message_bound<H: Hash>(absorbed: u64, incoming: usize) -> Result<()> {
    if absorbed.checked_add(incoming as u64).map_or(true, |total| {
        total > H::MAX_MESSAGE_LENGTH
    }) {
        return Err(Error::DataOverflow {
            name: "message",
            limit: "the hash input bound",
        });
    }
    Ok(())
}
