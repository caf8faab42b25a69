//! Addition and subtraction.

use super::{LIMBS, TOP_LIMB_MASK, U264};
use crate::{
    Error, Result,
    limb::{adc, sbb},
};

impl U264 {
    /// Computes `self + rhs`, returning [`Error::ArithmeticOverflow`] if the sum does
    /// not fit in 264 bits.
    pub fn checked_add(&self, rhs: &Self) -> Result<Self> {
        match self.overflowing_add(rhs) {
            (sum, false) => Ok(sum),
            (_, true) => Err(Error::ArithmeticOverflow),
        }
    }

    /// Computes `self - rhs`, returning [`Error::Underflow`] if `rhs > self`.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self> {
        match self.borrowing_sub(rhs) {
            (diff, false) => Ok(diff),
            (_, true) => Err(Error::Underflow),
        }
    }

    /// Computes `self + rhs mod 2^264`, along with whether the sum wrapped.
    pub const fn overflowing_add(&self, rhs: &Self) -> (Self, bool) {
        let mut limbs = [0; LIMBS];
        let mut carry = 0;
        let mut i = 0;
        while i < LIMBS {
            let (sum, c) = adc(self.limbs[i], rhs.limbs[i], carry);
            limbs[i] = sum;
            carry = c;
            i += 1;
        }

        // both top limbs are below 2^8, so the carry lands inside the top limb
        let overflow = limbs[LIMBS - 1] > TOP_LIMB_MASK;
        limbs[LIMBS - 1] &= TOP_LIMB_MASK;
        (Self::from_limbs_unchecked(limbs), overflow)
    }

    /// Computes `self - rhs mod 2^264`, along with whether a borrow occurred.
    pub const fn borrowing_sub(&self, rhs: &Self) -> (Self, bool) {
        let mut limbs = [0; LIMBS];
        let mut borrow = 0;
        let mut i = 0;
        while i < LIMBS {
            let (diff, b) = sbb(self.limbs[i], rhs.limbs[i], borrow);
            limbs[i] = diff;
            borrow = b;
            i += 1;
        }

        limbs[LIMBS - 1] &= TOP_LIMB_MASK;
        (Self::from_limbs_unchecked(limbs), borrow != 0)
    }

    /// `self - rhs` for callers that have already established `rhs <= self`.
    pub(crate) const fn sub_unchecked(&self, rhs: &Self) -> Self {
        self.borrowing_sub(rhs).0
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        Error, U264,
        uint::tests::{from_biguint, to_biguint, u264},
    };
    use num_bigint::BigUint;
    use num_traits::One;
    use proptest::prelude::*;

    #[test]
    fn add_overflow_is_error() {
        assert_eq!(U264::MAX.checked_add(&U264::ONE), Err(Error::ArithmeticOverflow));
        assert_eq!(U264::MAX.overflowing_add(&U264::ONE), (U264::ZERO, true));
    }

    #[test]
    fn sub_underflow_is_error() {
        assert_eq!(U264::ZERO.checked_sub(&U264::ONE), Err(Error::Underflow));
        assert_eq!(U264::ZERO.borrowing_sub(&U264::ONE), (U264::MAX, true));
    }

    #[test]
    fn carry_propagates_across_limbs() {
        let a = U264::from_u64(u64::MAX);
        assert_eq!(a.checked_add(&U264::ONE).unwrap(), U264::from_u128(1 << 64));
    }

    proptest! {
        #[test]
        fn add_matches_biguint(a in u264(), b in u264()) {
            let expected = to_biguint(&a) + to_biguint(&b);
            let modulus = BigUint::one() << 264;
            match a.checked_add(&b) {
                Ok(sum) => prop_assert_eq!(to_biguint(&sum), expected),
                Err(_) => {
                    prop_assert!(expected >= modulus);
                    prop_assert_eq!(a.overflowing_add(&b).0, from_biguint(&(expected - modulus)));
                }
            }
        }

        #[test]
        fn sub_matches_biguint(a in u264(), b in u264()) {
            let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
            let diff = hi.checked_sub(&lo).unwrap();
            prop_assert_eq!(to_biguint(&diff), to_biguint(&hi) - to_biguint(&lo));
            prop_assert_eq!(lo.checked_sub(&hi).is_err(), hi != lo);
        }
    }
}
