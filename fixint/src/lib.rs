#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

//! ## Usage
//!
//! ```
//! use fixint::{BarrettContext, U264};
//!
//! let m = U264::from_u64(1_000_003);
//! let ctx = BarrettContext::new(m)?;
//!
//! let a = U264::from_u64(123_456_789);
//! let b = U264::from_u64(987_654_321);
//! assert_eq!(ctx.mul_mod(&a, &b), a.mul_mod(&b, &m)?);
//!
//! // overflow is an error, never a silent wrap
//! assert!(U264::MAX.checked_add(&U264::ONE).is_err());
//! # Ok::<(), fixint::Error>(())
//! ```

#[cfg(test)]
extern crate alloc;

mod barrett;
mod error;
mod limb;
mod modular;
mod uint;

pub use crate::{
    barrett::BarrettContext,
    error::{Error, Result},
    limb::Limb,
    uint::U264,
};
pub use subtle;
pub use zeroize;
