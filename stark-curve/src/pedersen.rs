//! Pedersen hash over the Stark curve.
//!
//! `hash(a, b)` is the x-coordinate of
//!
//! ```text
//! SHIFT + a_low·P0 + a_high·P1 + b_low·P2 + b_high·P3
//! ```
//!
//! where `_low` is the low 248 bits of an input and `_high` the remaining 4.
//!
//! With the `precomputed-tables` feature (on by default) every `2^i·Pj` the hash
//! can touch is computed once, on first use, and kept in a table of 504 affine
//! points. Without it the multiples are derived by doubling on every call.

mod points;

use self::points::{P0, P1, P2, P3, SHIFT_POINT};
use crate::{AffinePoint, FieldElement, ProjectivePoint};
use core::iter;

#[cfg(feature = "precomputed-tables")]
use {alloc::boxed::Box, once_cell::race::OnceBox};

/// Bits of an input handled by the low base point.
const LOW_BITS: usize = 248;

/// Bits of a field element.
const ELEMENT_BITS: usize = 252;

/// `2^i·P0`, `2^i·P1`, `2^i·P2` and `2^i·P3` for every input bit.
#[cfg(feature = "precomputed-tables")]
const TABLE_SIZE: usize = 2 * ELEMENT_BITS;

#[cfg(feature = "precomputed-tables")]
static TABLE: OnceBox<[AffinePoint; TABLE_SIZE]> = OnceBox::new();

/// Pedersen hash of two field elements.
pub fn hash(a: &FieldElement, b: &FieldElement) -> FieldElement {
    let mut acc = ProjectivePoint::from(SHIFT_POINT);

    #[cfg(feature = "precomputed-tables")]
    {
        let (a_bases, b_bases) = table().split_at(ELEMENT_BITS);
        add_precomputed(&mut acc, a, a_bases);
        add_precomputed(&mut acc, b, b_bases);
    }

    #[cfg(not(feature = "precomputed-tables"))]
    {
        add_doublings(&mut acc, a, &P0, &P1);
        add_doublings(&mut acc, b, &P2, &P3);
    }

    acc.to_affine().x()
}

/// Pedersen hash of a sequence of field elements.
///
/// Folds [`hash`] over the input starting from zero, then hashes in the length:
/// `hash(hash(hash(0, m₀), m₁)…, n)`.
pub fn hash_array(msgs: &[FieldElement]) -> FieldElement {
    let acc = msgs
        .iter()
        .fold(FieldElement::ZERO, |acc, msg| hash(&acc, msg));
    hash(&acc, &FieldElement::from_u64(msgs.len() as u64))
}

/// The multiples of `low` and `high` an input is weighed against, in bit order.
fn bases(low: &AffinePoint, high: &AffinePoint) -> impl Iterator<Item = ProjectivePoint> {
    doublings(low)
        .take(LOW_BITS)
        .chain(doublings(high).take(ELEMENT_BITS - LOW_BITS))
}

fn doublings(point: &AffinePoint) -> impl Iterator<Item = ProjectivePoint> {
    iter::successors(Some(point.to_projective()), |p| Some(p.double()))
}

#[cfg(feature = "precomputed-tables")]
fn table() -> &'static [AffinePoint; TABLE_SIZE] {
    TABLE.get_or_init(|| {
        let mut points = [ProjectivePoint::IDENTITY; TABLE_SIZE];
        for (slot, point) in points
            .iter_mut()
            .zip(bases(&P0, &P1).chain(bases(&P2, &P3)))
        {
            *slot = point;
        }
        Box::new(ProjectivePoint::batch_normalize(&points))
    })
}

#[cfg(feature = "precomputed-tables")]
fn add_precomputed(acc: &mut ProjectivePoint, value: &FieldElement, bases: &[AffinePoint]) {
    let bits = value.to_uint();
    for (i, base) in bases.iter().enumerate().take(bits.bits() as usize) {
        if bits.bit(i as u32) {
            *acc += base;
        }
    }
}

#[cfg(any(not(feature = "precomputed-tables"), test))]
fn add_doublings(
    acc: &mut ProjectivePoint,
    value: &FieldElement,
    low: &AffinePoint,
    high: &AffinePoint,
) {
    let bits = value.to_uint();
    for (i, base) in bases(low, high).enumerate().take(bits.bits() as usize) {
        if bits.bit(i as u32) {
            *acc += &base;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{P0, P1, P2, P3, SHIFT_POINT, add_doublings, hash, hash_array};
    use crate::{
        FieldElement, ProjectivePoint,
        test_vectors::hash::{PEDERSEN_HASH_ARRAY_VECTORS, PEDERSEN_HASH_VECTORS},
    };
    use alloc::vec::Vec;
    use proptest::prelude::*;

    fn fe(hex: &str) -> FieldElement {
        FieldElement::from_hex(hex).unwrap()
    }

    fn hash_by_doubling(a: &FieldElement, b: &FieldElement) -> FieldElement {
        let mut acc = ProjectivePoint::from(SHIFT_POINT);
        add_doublings(&mut acc, a, &P0, &P1);
        add_doublings(&mut acc, b, &P2, &P3);
        acc.to_affine().x()
    }

    #[test]
    fn hash_known_answers() {
        for (a, b, expected) in PEDERSEN_HASH_VECTORS {
            assert_eq!(hash(&fe(a), &fe(b)), fe(expected));
        }
    }

    #[test]
    fn hash_array_known_answers() {
        for (msgs, expected) in PEDERSEN_HASH_ARRAY_VECTORS {
            let msgs: Vec<FieldElement> = msgs.iter().map(|msg| fe(msg)).collect();
            assert_eq!(hash_array(&msgs), fe(expected));
        }
    }

    #[test]
    fn hash_of_zeros_is_shift_point() {
        assert_eq!(
            hash(&FieldElement::ZERO, &FieldElement::ZERO),
            SHIFT_POINT.x()
        );
        assert_eq!(hash_array(&[]), SHIFT_POINT.x());
    }

    #[test]
    fn hash_is_not_symmetric() {
        let a = FieldElement::from_u64(1);
        let b = FieldElement::from_u64(2);
        assert_ne!(hash(&a, &b), hash(&b, &a));
    }

    #[test]
    fn high_bits_use_second_base_point() {
        let two_248 = FieldElement::from_hex_vartime(
            "0100000000000000000000000000000000000000000000000000000000000000",
        );
        let expected = (ProjectivePoint::from(SHIFT_POINT) + P1).to_affine().x();
        assert_eq!(hash(&two_248, &FieldElement::ZERO), expected);

        let expected = (ProjectivePoint::from(SHIFT_POINT) + P3).to_affine().x();
        assert_eq!(hash(&FieldElement::ZERO, &two_248), expected);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn table_matches_doubling(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
            let a = FieldElement::from_be_bytes(&a);
            let b = FieldElement::from_be_bytes(&b);
            prop_assert_eq!(hash(&a, &b), hash_by_doubling(&a, &b));
        }
    }
}
