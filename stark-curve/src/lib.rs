#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//! ## Usage
//!
//! ```
//! use stark_curve::{FieldElement, get_public_key, pedersen, poseidon};
//!
//! let a = FieldElement::from_u64(1);
//! let b = FieldElement::from_u64(2);
//! let digest = poseidon::hash(&a, &b);
//! assert_ne!(digest, pedersen::hash(&a, &b));
//!
//! let public_key = get_public_key(&FieldElement::from_u64(0x12))?;
//! assert!(public_key.is_on_curve());
//! # Ok::<(), stark_curve::Error>(())
//! ```

#[cfg(any(feature = "alloc", test))]
#[allow(unused_extern_crates)]
extern crate alloc;

pub mod arithmetic;
pub mod pedersen;
pub mod poseidon;

#[cfg(feature = "ecdsa")]
pub mod ecdsa;

#[cfg(any(feature = "test-vectors", test))]
pub mod test_vectors;

mod error;
mod selector;

pub use crate::{
    arithmetic::{
        AffinePoint, CURVE_EQUATION_A, CURVE_EQUATION_B, FieldElement, FieldParams,
        ProjectivePoint, Scalar, ScalarParams, get_public_key, lincomb,
    },
    error::{Error, Result},
    selector::{get_selector_from_name, sn_keccak},
};
pub use fixint::{self, U264};
pub use primefield::{self, FieldBytes};
pub use rand_core;
pub use stark_digests;
pub use subtle;
pub use zeroize;

#[cfg(feature = "ecdsa")]
pub use signature;
