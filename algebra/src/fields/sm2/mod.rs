//! Fields of the sm2p256v1 curve.

pub mod fq;
pub mod fr;

pub use self::{fq::Fq, fr::Fr};

#[cfg(test)]
mod tests;
