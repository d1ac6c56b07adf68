//! Fields of the SM9 Barreto-Naehrig curve, t = 0x600000000058F98A.

pub mod fq;
pub mod fr;

pub mod fq2;
pub mod fq4;
pub mod fq12;

pub use self::{fq::Fq, fq12::Fq12, fq2::Fq2, fq4::Fq4, fr::Fr};

#[cfg(test)]
mod tests;
