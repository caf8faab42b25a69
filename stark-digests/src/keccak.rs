//! Keccak-256 as submitted to the SHA-3 competition.
//!
//! Differs from FIPS 202 SHA3-256 only in the padding domain byte (`0x01` instead of
//! `0x06`).

use digest::{
    FixedOutput, HashMarker, Output, OutputSizeUser, Reset, Update,
    consts::{U32, U136},
    core_api::BlockSizeUser,
};

/// Rate in bytes for a 256-bit output (capacity 512 bits).
const RATE: usize = 136;

/// Number of 64-bit lanes covered by the rate.
const RATE_LANES: usize = RATE / 8;

/// Round constants for ι.
const ROUND_CONSTANTS: [u64; 24] = [
    0x0000000000000001, 0x0000000000008082, 0x800000000000808a, 0x8000000080008000,
    0x000000000000808b, 0x0000000080000001, 0x8000000080008081, 0x8000000000008009,
    0x000000000000008a, 0x0000000000000088, 0x0000000080008009, 0x000000008000000a,
    0x000000008000808b, 0x800000000000008b, 0x8000000000008089, 0x8000000000008003,
    0x8000000000008002, 0x8000000000000080, 0x000000000000800a, 0x800000008000000a,
    0x8000000080008081, 0x8000000000008080, 0x0000000080000001, 0x8000000080008008,
];

/// ρ rotation offsets, indexed `[x][y]`.
const RHO_OFFSETS: [[u32; 5]; 5] = [
    [0, 36, 3, 41, 18],
    [1, 44, 10, 45, 2],
    [62, 6, 43, 15, 61],
    [28, 55, 25, 21, 56],
    [27, 20, 39, 8, 14],
];

/// Keccak-f\[1600\] permutation.
///
/// Lane `(x, y)` lives at index `x + 5 * y`.
pub fn keccak_f1600(state: &mut [u64; 25]) {
    for rc in ROUND_CONSTANTS {
        // θ
        let mut parity = [0u64; 5];
        for (x, p) in parity.iter_mut().enumerate() {
            *p = state[x] ^ state[x + 5] ^ state[x + 10] ^ state[x + 15] ^ state[x + 20];
        }
        for x in 0..5 {
            let d = parity[(x + 4) % 5] ^ parity[(x + 1) % 5].rotate_left(1);
            for y in 0..5 {
                state[x + 5 * y] ^= d;
            }
        }

        // ρ and π: (x, y) -> (y, 2x + 3y)
        let mut b = [0u64; 25];
        for x in 0..5 {
            for y in 0..5 {
                b[y + 5 * ((2 * x + 3 * y) % 5)] = state[x + 5 * y].rotate_left(RHO_OFFSETS[x][y]);
            }
        }

        // χ
        for y in 0..5 {
            for x in 0..5 {
                state[x + 5 * y] =
                    b[x + 5 * y] ^ (!b[(x + 1) % 5 + 5 * y] & b[(x + 2) % 5 + 5 * y]);
            }
        }

        // ι
        state[0] ^= rc;
    }
}

/// Incremental Keccak-256 hasher.
#[derive(Clone)]
pub struct Keccak256 {
    state: [u64; 25],
    buffer: [u8; RATE],
    buffer_len: usize,
}

impl Keccak256 {
    /// Create a new hasher.
    pub const fn new() -> Self {
        Self {
            state: [0; 25],
            buffer: [0; RATE],
            buffer_len: 0,
        }
    }

    fn absorb_block(state: &mut [u64; 25], block: &[u8; RATE]) {
        for (lane, bytes) in state[..RATE_LANES].iter_mut().zip(block.chunks_exact(8)) {
            let mut word = [0u8; 8];
            word.copy_from_slice(bytes);
            *lane ^= u64::from_le_bytes(word);
        }
        keccak_f1600(state);
    }

    /// Absorb more input.
    pub fn update(&mut self, mut data: &[u8]) {
        while !data.is_empty() {
            let take = data.len().min(RATE - self.buffer_len);
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(&data[..take]);
            self.buffer_len += take;
            data = &data[take..];

            if self.buffer_len == RATE {
                Self::absorb_block(&mut self.state, &self.buffer);
                self.buffer_len = 0;
            }
        }
    }

    /// Pad with `0x01 ‖ 0x00* ‖ 0x80` and squeeze 32 bytes.
    pub fn finalize(mut self) -> [u8; 32] {
        // at least one byte of the block is always free here
        self.buffer[self.buffer_len..].fill(0);
        self.buffer[self.buffer_len] ^= 0x01;
        self.buffer[RATE - 1] ^= 0x80;
        Self::absorb_block(&mut self.state, &self.buffer);

        let mut out = [0u8; 32];
        for (chunk, lane) in out.chunks_exact_mut(8).zip(self.state) {
            chunk.copy_from_slice(&lane.to_le_bytes());
        }
        out
    }
}

impl Default for Keccak256 {
    fn default() -> Self {
        Self::new()
    }
}

impl HashMarker for Keccak256 {}

impl BlockSizeUser for Keccak256 {
    type BlockSize = U136;
}

impl OutputSizeUser for Keccak256 {
    type OutputSize = U32;
}

impl Update for Keccak256 {
    fn update(&mut self, data: &[u8]) {
        Keccak256::update(self, data);
    }
}

impl FixedOutput for Keccak256 {
    fn finalize_into(self, out: &mut Output<Self>) {
        out.copy_from_slice(&Keccak256::finalize(self));
    }
}

impl Reset for Keccak256 {
    fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Compute the Keccak-256 digest of `data`.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize()
}
