//! Modular arithmetic for an arbitrary non-zero modulus.
//!
//! Operands are reduced before use, so any `U264` is accepted.

use crate::{Error, Result, U264};

impl U264 {
    /// Computes `(self + rhs) mod m`.
    pub fn add_mod(&self, rhs: &Self, m: &Self) -> Result<Self> {
        let a = self.checked_rem(m)?;
        let b = rhs.checked_rem(m)?;

        // a + b < 2m; a carry out of 2^264 still means the sum exceeds m
        let (sum, carry) = a.overflowing_add(&b);
        if carry || sum >= *m {
            Ok(sum.borrowing_sub(m).0)
        } else {
            Ok(sum)
        }
    }

    /// Computes `(self - rhs) mod m`.
    pub fn sub_mod(&self, rhs: &Self, m: &Self) -> Result<Self> {
        let a = self.checked_rem(m)?;
        let b = rhs.checked_rem(m)?;

        if a >= b {
            Ok(a.sub_unchecked(&b))
        } else {
            Ok(m.sub_unchecked(&b).overflowing_add(&a).0)
        }
    }

    /// Computes `(self * rhs) mod m` from the full-width product.
    pub fn mul_mod(&self, rhs: &Self, m: &Self) -> Result<Self> {
        if m.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Self::rem_wide(&self.mul_wide(rhs), m))
    }

    /// Computes `self^exp mod m` by left-to-right square-and-multiply.
    pub fn pow_mod(&self, exp: &Self, m: &Self) -> Result<Self> {
        let base = self.checked_rem(m)?;
        let mut acc = Self::ONE.checked_rem(m)?;

        for i in (0..exp.bits()).rev() {
            acc = acc.mul_mod(&acc, m)?;
            if exp.bit(i) {
                acc = acc.mul_mod(&base, m)?;
            }
        }
        Ok(acc)
    }

    /// Computes the inverse of `self` modulo `m` with the extended Euclidean
    /// algorithm.
    ///
    /// Bezout coefficients are tracked modulo `m`, so no signed intermediates are
    /// needed. Returns [`Error::NotInvertible`] when `gcd(self, m) != 1`.
    pub fn inv_mod(&self, m: &Self) -> Result<Self> {
        let (mut r0, mut r1) = (*m, self.checked_rem(m)?);
        let (mut t0, mut t1) = (Self::ZERO, Self::ONE);

        while !r1.is_zero() {
            let (q, r) = r0.div_rem(&r1)?;
            let t = t0.sub_mod(&q.mul_mod(&t1, m)?, m)?;
            (r0, r1) = (r1, r);
            (t0, t1) = (t1, t);
        }

        if r0 != Self::ONE {
            return Err(Error::NotInvertible);
        }
        Ok(t0)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        Error, U264,
        uint::tests::{to_biguint, u264},
    };
    use num_bigint::BigUint;
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    /// Stark field prime `2^251 + 17 * 2^192 + 1`.
    const P: U264 =
        U264::from_be_hex("0800000000000011000000000000000000000000000000000000000000000001");

    #[test]
    fn zero_modulus_is_error() {
        let a = U264::from_u64(3);
        assert_eq!(a.add_mod(&a, &U264::ZERO), Err(Error::DivisionByZero));
        assert_eq!(a.sub_mod(&a, &U264::ZERO), Err(Error::DivisionByZero));
        assert_eq!(a.mul_mod(&a, &U264::ZERO), Err(Error::DivisionByZero));
        assert_eq!(a.pow_mod(&a, &U264::ZERO), Err(Error::DivisionByZero));
        assert_eq!(a.inv_mod(&U264::ZERO), Err(Error::DivisionByZero));
    }

    #[test]
    fn add_mod_near_capacity() {
        // sum of two residues exceeds 2^264 before reduction
        let m = U264::MAX;
        let a = U264::MAX.borrowing_sub(&U264::ONE).0;
        assert_eq!(a.add_mod(&a, &m), Ok(a.borrowing_sub(&U264::ONE).0));
    }

    #[test]
    fn inverse_of_two_mod_p() {
        let half = U264::from_u64(2).inv_mod(&P).unwrap();
        assert_eq!(half.mul_mod(&U264::from_u64(2), &P), Ok(U264::ONE));
    }

    #[test]
    fn non_invertible() {
        let m = U264::from_u64(12);
        assert_eq!(U264::from_u64(8).inv_mod(&m), Err(Error::NotInvertible));
        assert_eq!(U264::ZERO.inv_mod(&P), Err(Error::NotInvertible));
        assert_eq!(P.inv_mod(&P), Err(Error::NotInvertible));
    }

    #[test]
    fn fermat_little_theorem() {
        let a = U264::from_u64(0xdead_beef);
        let p_minus_1 = P.checked_sub(&U264::ONE).unwrap();
        assert_eq!(a.pow_mod(&p_minus_1, &P), Ok(U264::ONE));
    }

    proptest! {
        #[test]
        fn modular_ops_match_biguint(a in u264(), b in u264(), m in u264()) {
            prop_assume!(!m.is_zero());
            let (a_, b_, m_) = (to_biguint(&a), to_biguint(&b), to_biguint(&m));

            prop_assert_eq!(to_biguint(&a.add_mod(&b, &m).unwrap()), (&a_ + &b_) % &m_);
            prop_assert_eq!(
                to_biguint(&a.sub_mod(&b, &m).unwrap()),
                (&a_ % &m_ + &m_ - &b_ % &m_) % &m_
            );
            prop_assert_eq!(to_biguint(&a.mul_mod(&b, &m).unwrap()), (&a_ * &b_) % &m_);
        }

        #[test]
        fn pow_mod_matches_biguint(a in u264(), e in u264(), m in u264()) {
            prop_assume!(!m.is_zero());
            let expected = to_biguint(&a).modpow(&to_biguint(&e), &to_biguint(&m));
            prop_assert_eq!(to_biguint(&a.pow_mod(&e, &m).unwrap()), expected);
        }

        #[test]
        fn inv_mod_p(a in u264()) {
            let a_ = to_biguint(&a) % to_biguint(&P);
            match a.inv_mod(&P) {
                Ok(inv) => {
                    let product = (a_ * to_biguint(&inv)) % to_biguint(&P);
                    prop_assert!(product.is_one());
                }
                Err(err) => {
                    prop_assert_eq!(err, Error::NotInvertible);
                    prop_assert!(a_.is_zero());
                }
            }
        }

        #[test]
        fn inv_mod_any(a in u264(), m in u264()) {
            prop_assume!(m > U264::ONE);
            let (a_, m_) = (to_biguint(&a), to_biguint(&m));
            match a.inv_mod(&m) {
                Ok(inv) => prop_assert!(((a_ * to_biguint(&inv)) % m_).is_one()),
                Err(_) => {
                    let gcd = gcd(a_, m_);
                    prop_assert!(!gcd.is_one());
                }
            }
        }
    }

    fn gcd(mut a: BigUint, mut b: BigUint) -> BigUint {
        while !b.is_zero() {
            let r = &a % &b;
            a = b;
            b = r;
        }
        a
    }
}
