//! 264-bit unsigned integer.

mod add;
mod bits;
mod div;
mod encoding;
mod mul;

use crate::limb::{self, Limb};
use core::{cmp::Ordering, fmt};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::DefaultIsZeroes;

/// Number of limbs in a [`U264`].
pub(crate) const LIMBS: usize = 5;

/// Mask of the bits of the top limb that lie inside the 264-bit capacity.
pub(crate) const TOP_LIMB_MASK: Limb = 0xff;

/// Unsigned integer in the range `[0, 2^264)`.
///
/// Stored as five little-endian 64-bit limbs. The top limb only ever holds 8
/// significant bits, so equal values always have equal limbs.
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
pub struct U264 {
    limbs: [Limb; LIMBS],
}

impl U264 {
    /// Capacity in bits.
    pub const BITS: u32 = 264;

    /// Size of the big-endian byte encoding.
    pub const BYTES: usize = 33;

    /// Zero.
    pub const ZERO: Self = Self { limbs: [0; LIMBS] };

    /// One.
    pub const ONE: Self = Self::from_u64(1);

    /// `2^264 - 1`.
    pub const MAX: Self = Self {
        limbs: [Limb::MAX, Limb::MAX, Limb::MAX, Limb::MAX, TOP_LIMB_MASK],
    };

    /// Create a value from a `u64`.
    pub const fn from_u64(n: u64) -> Self {
        Self {
            limbs: [n, 0, 0, 0, 0],
        }
    }

    /// Create a value from a `u128`.
    pub const fn from_u128(n: u128) -> Self {
        Self {
            limbs: [n as Limb, (n >> 64) as Limb, 0, 0, 0],
        }
    }

    /// Create a value from little-endian limbs.
    ///
    /// Returns [`Error::ArithmeticOverflow`](crate::Error::ArithmeticOverflow) when the
    /// top limb holds bits at or above 2^264.
    pub const fn from_words(words: [Limb; LIMBS]) -> crate::Result<Self> {
        if words[LIMBS - 1] > TOP_LIMB_MASK {
            return Err(crate::Error::ArithmeticOverflow);
        }
        Ok(Self { limbs: words })
    }

    /// Borrow the little-endian limbs.
    pub const fn as_words(&self) -> &[Limb; LIMBS] {
        &self.limbs
    }

    /// Is this value zero?
    pub const fn is_zero(&self) -> bool {
        let mut acc = 0;
        let mut i = 0;
        while i < LIMBS {
            acc |= self.limbs[i];
            i += 1;
        }
        acc == 0
    }

    /// Is this value odd?
    pub const fn is_odd(&self) -> bool {
        self.limbs[0] & 1 == 1
    }

    /// Compare two values in variable time, usable in `const` contexts.
    pub const fn cmp_vartime(&self, rhs: &Self) -> Ordering {
        let mut i = LIMBS;
        while i > 0 {
            i -= 1;
            if self.limbs[i] < rhs.limbs[i] {
                return Ordering::Less;
            }
            if self.limbs[i] > rhs.limbs[i] {
                return Ordering::Greater;
            }
        }
        Ordering::Equal
    }

    /// Build from limbs known to satisfy the top-limb bound.
    pub(crate) const fn from_limbs_unchecked(limbs: [Limb; LIMBS]) -> Self {
        Self { limbs }
    }

    /// Build from a wider little-endian slice, failing if any bit at or above
    /// 2^264 is set.
    pub(crate) fn from_wide(wide: &[Limb]) -> crate::Result<Self> {
        let mut limbs = [0; LIMBS];
        for (i, &w) in wide.iter().enumerate() {
            if i < LIMBS {
                limbs[i] = w;
            } else if w != 0 {
                return Err(crate::Error::ArithmeticOverflow);
            }
        }
        Self::from_words(limbs)
    }
}

impl Ord for U264 {
    fn cmp(&self, other: &Self) -> Ordering {
        limb::cmp(&self.limbs, &other.limbs)
    }
}

impl PartialOrd for U264 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl ConstantTimeEq for U264 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.limbs[..].ct_eq(&other.limbs[..])
    }
}

impl ConditionallySelectable for U264 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut limbs = [0; LIMBS];
        for (i, limb) in limbs.iter_mut().enumerate() {
            *limb = Limb::conditional_select(&a.limbs[i], &b.limbs[i], choice);
        }
        Self { limbs }
    }
}

impl DefaultIsZeroes for U264 {}

impl From<u8> for U264 {
    fn from(n: u8) -> Self {
        Self::from_u64(n.into())
    }
}

impl From<u32> for U264 {
    fn from(n: u32) -> Self {
        Self::from_u64(n.into())
    }
}

impl From<u64> for U264 {
    fn from(n: u64) -> Self {
        Self::from_u64(n)
    }
}

impl From<u128> for U264 {
    fn from(n: u128) -> Self {
        Self::from_u128(n)
    }
}

impl fmt::Debug for U264 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U264({:#x})", self)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::U264;
    use alloc::format;
    use num_bigint::BigUint;
    use proptest::prelude::*;

    pub(crate) fn to_biguint(n: &U264) -> BigUint {
        BigUint::from_bytes_be(&n.to_be_bytes())
    }

    pub(crate) fn from_biguint(n: &BigUint) -> U264 {
        U264::from_be_slice(&n.to_bytes_be()).unwrap()
    }

    prop_compose! {
        pub(crate) fn u264()(bytes in any::<[u8; 33]>()) -> U264 {
            U264::from_be_slice(&bytes).unwrap()
        }
    }

    prop_compose! {
        /// Values below 2^132 so that products stay in range.
        pub(crate) fn half_u264()(bytes in any::<[u8; 16]>(), top in 0u8..16) -> U264 {
            let mut wide = [0u8; 17];
            wide[0] = top;
            wide[1..].copy_from_slice(&bytes);
            U264::from_be_slice(&wide).unwrap()
        }
    }

    #[test]
    fn from_words_rejects_out_of_range_top_limb() {
        assert!(U264::from_words([0, 0, 0, 0, 0x100]).is_err());
        assert_eq!(
            U264::from_words([0, 0, 0, 0, 0xff]).unwrap(),
            U264::from_u64(0xff).checked_shl(256).unwrap()
        );
    }

    #[test]
    fn ordering() {
        assert!(U264::ZERO < U264::ONE);
        assert!(U264::from_u128(1 << 64) > U264::from_u64(u64::MAX));
        assert!(U264::MAX > U264::from_u128(u128::MAX));
    }

    #[test]
    fn debug_is_hex() {
        assert_eq!(format!("{:?}", U264::from_u64(255)), "U264(0xff)");
    }

    proptest! {
        #[test]
        fn biguint_roundtrip(a in u264()) {
            prop_assert_eq!(from_biguint(&to_biguint(&a)), a);
        }

        #[test]
        fn ordering_matches_biguint(a in u264(), b in u264()) {
            prop_assert_eq!(a.cmp(&b), to_biguint(&a).cmp(&to_biguint(&b)));
            prop_assert_eq!(a.cmp_vartime(&b), a.cmp(&b));
        }
    }
}
