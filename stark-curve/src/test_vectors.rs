//! Stark curve test vectors.

pub mod ecdsa;
pub mod group;
pub mod hash;
