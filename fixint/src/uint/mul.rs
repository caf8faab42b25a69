//! Multiplication.

use super::{LIMBS, U264};
use crate::{
    Result,
    limb::{Limb, mul_into},
};

impl U264 {
    /// Computes `self * rhs`, returning
    /// [`Error::ArithmeticOverflow`](crate::Error::ArithmeticOverflow) if the product
    /// does not fit in 264 bits.
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self> {
        Self::from_wide(&self.mul_wide(rhs))
    }

    /// Full 528-bit product as ten little-endian limbs.
    pub(crate) fn mul_wide(&self, rhs: &Self) -> [Limb; 2 * LIMBS] {
        let mut out = [0; 2 * LIMBS];
        mul_into(&self.limbs, &rhs.limbs, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        Error, U264,
        uint::tests::{half_u264, to_biguint, u264},
    };
    use proptest::prelude::*;

    #[test]
    fn mul_overflow_is_error() {
        let half = U264::ONE.checked_shl(132).unwrap();
        assert_eq!(half.checked_mul(&half), Err(Error::ArithmeticOverflow));

        let below = U264::ONE.checked_shl(131).unwrap();
        assert_eq!(
            below.checked_mul(&half).unwrap(),
            U264::ONE.checked_shl(263).unwrap()
        );
    }

    proptest! {
        #[test]
        fn mul_matches_biguint(a in half_u264(), b in half_u264()) {
            let product = a.checked_mul(&b).unwrap();
            prop_assert_eq!(to_biguint(&product), to_biguint(&a) * to_biguint(&b));
        }

        #[test]
        fn mul_reports_overflow(a in u264(), b in u264()) {
            let expected = to_biguint(&a) * to_biguint(&b);
            match a.checked_mul(&b) {
                Ok(product) => prop_assert_eq!(to_biguint(&product), expected),
                Err(err) => {
                    prop_assert_eq!(err, Error::ArithmeticOverflow);
                    prop_assert!(expected.bits() > 264);
                }
            }
        }
    }
}
