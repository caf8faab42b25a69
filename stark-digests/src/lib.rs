#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

//! ## Usage
//!
//! ```
//! use stark_digests::{Keccak256, keccak256, sha256, digest::Digest};
//!
//! let mut hasher = Keccak256::new();
//! hasher.update(b"hello ");
//! hasher.update(b"world");
//! assert_eq!(hasher.finalize().as_slice(), keccak256(b"hello world"));
//!
//! assert_eq!(sha256(b"").len(), 32);
//! ```

#[cfg(feature = "std")]
extern crate std;

mod hmac;
mod keccak;
mod sha256;

pub use crate::{
    hmac::{HmacSha256, hmac_sha256},
    keccak::{Keccak256, keccak_f1600, keccak256},
    sha256::{Sha256, sha256},
};
pub use digest;
