//! HMAC-SHA-256 (RFC 2104).

use crate::sha256::{BLOCK_SIZE, Sha256};
use digest::{
    FixedOutput, InvalidLength, Key, KeyInit, MacMarker, Output, OutputSizeUser, Update,
    consts::{U32, U64},
    crypto_common::KeySizeUser,
};

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// Incremental HMAC-SHA-256.
///
/// Keys longer than the 64-byte block are hashed first; shorter keys are zero
/// padded.
#[derive(Clone)]
pub struct HmacSha256 {
    inner: Sha256,
    outer: Sha256,
}

impl HmacSha256 {
    /// Create a MAC instance keyed with `key` of any length.
    pub fn new(key: &[u8]) -> Self {
        let mut block = [0u8; BLOCK_SIZE];
        if key.len() > BLOCK_SIZE {
            block[..32].copy_from_slice(&crate::sha256(key));
        } else {
            block[..key.len()].copy_from_slice(key);
        }

        let mut inner = Sha256::new();
        let mut outer = Sha256::new();
        inner.update(&block.map(|b| b ^ IPAD));
        outer.update(&block.map(|b| b ^ OPAD));

        Self { inner, outer }
    }

    /// Absorb more message bytes.
    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    /// Return the 32-byte tag.
    pub fn finalize(self) -> [u8; 32] {
        let mut outer = self.outer;
        outer.update(&self.inner.finalize());
        outer.finalize()
    }
}

impl MacMarker for HmacSha256 {}

impl KeySizeUser for HmacSha256 {
    type KeySize = U64;
}

impl KeyInit for HmacSha256 {
    fn new(key: &Key<Self>) -> Self {
        HmacSha256::new(key.as_slice())
    }

    fn new_from_slice(key: &[u8]) -> Result<Self, InvalidLength> {
        Ok(HmacSha256::new(key))
    }
}

impl OutputSizeUser for HmacSha256 {
    type OutputSize = U32;
}

impl Update for HmacSha256 {
    fn update(&mut self, data: &[u8]) {
        HmacSha256::update(self, data);
    }
}

impl FixedOutput for HmacSha256 {
    fn finalize_into(self, out: &mut Output<Self>) {
        out.copy_from_slice(&HmacSha256::finalize(self));
    }
}

/// Compute `HMAC-SHA-256(key, msg)`.
pub fn hmac_sha256(key: &[u8], msg: &[u8]) -> [u8; 32] {
    let mut mac = HmacSha256::new(key);
    mac.update(msg);
    mac.finalize()
}
