//! Poseidon hash over the Stark field.
//!
//! This is the Hades permutation with a state of three field elements, the x³
//! S-box, 8 full rounds and 83 partial rounds, using the round keys and MDS
//! matrix the chain uses. Each round adds the round keys to every word and then
//! applies the S-box to every word in full rounds, or only to the last word in
//! partial rounds. The MDS step follows the S-box.

mod constants;

use self::constants::{FULL_ROUNDS, PARTIAL_ROUNDS, ROUND_KEYS};
use crate::FieldElement;

/// Width of the permutation state.
const STATE_WIDTH: usize = 3;

/// Apply the Hades permutation to `state` in place.
pub fn permute(state: &mut [FieldElement; STATE_WIDTH]) {
    let half_full = FULL_ROUNDS / 2;
    let mut round_keys = ROUND_KEYS.iter();

    for keys in round_keys.by_ref().take(half_full) {
        full_round(state, keys);
    }
    for keys in round_keys.by_ref().take(PARTIAL_ROUNDS) {
        partial_round(state, keys);
    }
    for keys in round_keys {
        full_round(state, keys);
    }
}

/// Poseidon hash of two field elements.
pub fn hash(x: &FieldElement, y: &FieldElement) -> FieldElement {
    let mut state = [*x, *y, FieldElement::from_u64(2)];
    permute(&mut state);
    state[0]
}

/// Poseidon hash of a single field element.
pub fn hash_single(x: &FieldElement) -> FieldElement {
    let mut state = [*x, FieldElement::ZERO, FieldElement::ONE];
    permute(&mut state);
    state[0]
}

/// Poseidon hash of a sequence of field elements.
///
/// The input is padded with a single `1` and, if that leaves an odd length, a
/// `0`. The padded input is absorbed two elements at a time into the first two
/// state words, with a permutation after each pair.
pub fn hash_many(msgs: &[FieldElement]) -> FieldElement {
    let mut hasher = PoseidonHasher::new();
    for msg in msgs {
        hasher.update(*msg);
    }
    hasher.finalize()
}

/// Incremental form of [`hash_many`].
///
/// ```
/// use stark_curve::{FieldElement, poseidon::{PoseidonHasher, hash_many}};
///
/// let msgs = [FieldElement::from_u64(1), FieldElement::from_u64(2), FieldElement::from_u64(3)];
///
/// let mut hasher = PoseidonHasher::new();
/// for msg in &msgs {
///     hasher.update(*msg);
/// }
/// assert_eq!(hasher.finalize(), hash_many(&msgs));
/// ```
#[derive(Clone, Debug, Default)]
pub struct PoseidonHasher {
    state: [FieldElement; STATE_WIDTH],
    buffer: Option<FieldElement>,
}

impl PoseidonHasher {
    /// Creates a hasher with an all-zero state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Absorbs one field element.
    pub fn update(&mut self, msg: FieldElement) {
        match self.buffer.take() {
            Some(previous) => {
                self.state[0] += previous;
                self.state[1] += msg;
                permute(&mut self.state);
            }
            None => self.buffer = Some(msg),
        }
    }

    /// Pads the absorbed input and returns the digest.
    pub fn finalize(mut self) -> FieldElement {
        match self.buffer.take() {
            Some(last) => {
                self.state[0] += last;
                self.state[1] += FieldElement::ONE;
            }
            None => self.state[0] += FieldElement::ONE,
        }
        permute(&mut self.state);
        self.state[0]
    }
}

fn full_round(state: &mut [FieldElement; STATE_WIDTH], keys: &[FieldElement; STATE_WIDTH]) {
    for (word, key) in state.iter_mut().zip(keys) {
        *word = cube(&(*word + key));
    }
    mix(state);
}

fn partial_round(state: &mut [FieldElement; STATE_WIDTH], keys: &[FieldElement; STATE_WIDTH]) {
    for (word, key) in state.iter_mut().zip(keys) {
        *word += key;
    }
    state[2] = cube(&state[2]);
    mix(state);
}

/// MDS matrix `[[3, 1, 1], [1, -1, 1], [1, 1, -2]]`.
fn mix(state: &mut [FieldElement; STATE_WIDTH]) {
    let t = state[0] + state[1] + state[2];
    state[0] = t + state[0].double();
    state[1] = t - state[1].double();
    state[2] = t - (state[2].double() + state[2]);
}

fn cube(x: &FieldElement) -> FieldElement {
    x.square() * x
}
