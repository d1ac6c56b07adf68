use thiserror::Error;

/// Errors raised by the protocol layer. No operation retries on error; the
/// only internal retries are the probabilistic scalar-sampling loops, which
/// never surface.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Algebra(#[from] gm_algebra::Error),

    /// Input exceeds a hard length bound of the construction.
    #[error("{name} exceeds {limit}")]
    DataOverflow {
        name: &'static str,
        limit: &'static str,
    },

    #[error("incorrect length for {name}: {expected} bytes expected, {got} given")]
    IncorrectLength {
        name: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A scalar multiple degenerated to the point at infinity.
    #[error("point at infinity encountered")]
    InfinitePoint,

    /// MAC or hash comparison failed during decryption.
    #[error("check failed: {0}")]
    CheckFailed(&'static str),

    /// An operation was invoked without the key material it needs.
    #[error("{operation} requires {required}")]
    RequireArgument {
        operation: &'static str,
        required: &'static str,
    },

    /// H1(uid || hid) + msk vanished mod n; the KGC must regenerate its
    /// master key pair.
    #[error("user key undefined for this id; regenerate the master key pair")]
    InvalidUserKey,
}

pub type Result<T> = std::result::Result<T, Error>;
