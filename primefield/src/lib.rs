#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

#[cfg(test)]
extern crate alloc;

mod dev;
mod element;
mod macros;

pub use crate::element::{FieldBytes, FieldParams, PrimeFieldElement};
pub use fixint::{self, Error, Result, U264};
pub use rand_core;
pub use subtle;
pub use zeroize;

/// Compute `S` such that `modulus - 1 = 2^S * T` with `T` odd.
///
/// The modulus must be odd and greater than one.
pub const fn compute_s(modulus: &U264) -> u32 {
    let m_minus_1 = modulus.borrowing_sub(&U264::ONE).0;
    let mut s = 0;
    while s < U264::BITS && !m_minus_1.bit(s) {
        s += 1;
    }
    s
}

/// Compute `T = (modulus - 1) / 2^S`.
pub const fn compute_t(modulus: &U264) -> U264 {
    modulus
        .borrowing_sub(&U264::ONE)
        .0
        .shr_vartime(compute_s(modulus))
}
