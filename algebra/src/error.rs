use thiserror::Error;

/// Errors raised by the algebraic layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The element has no square root in its field.
    #[error("no square root exists for the given element")]
    NoSquareRoot,

    /// Point bytes start with a prefix outside {0x00, 0x02, 0x03, 0x04, 0x06, 0x07}.
    #[error("invalid PC byte 0x{0:02x}")]
    InvalidPcByte(u8),

    /// Decoded or supplied coordinates do not satisfy the curve equation.
    #[error("point not on curve")]
    PointNotOnCurve,

    /// Input bytes have the wrong length for the expected encoding.
    #[error("incorrect length: {expected} bytes expected, {got} given")]
    IncorrectLength { expected: usize, got: usize },
}
