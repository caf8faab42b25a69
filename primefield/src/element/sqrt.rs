//! Modular square root implementations, adapted from <https://eprint.iacr.org/2012/685.pdf>.

use crate::{FieldParams, PrimeFieldElement, U264};

/// Square root algorithms.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Algorithm {
    /// Shanks algorithm for `q ≡ 3 (mod 4)`.
    Shanks,

    /// Tonelli-Shanks algorithm for any odd prime.
    TonelliShanks,
}

impl Algorithm {
    /// Determine the best algorithm to use with a particular modulus.
    const fn for_modulus(p: &U264) -> Self {
        if p.as_words()[0] & 3 == 3 {
            Self::Shanks
        } else {
            Self::TonelliShanks
        }
    }
}

impl<P: FieldParams> PrimeFieldElement<P> {
    /// Returns the square root of self mod p, or `None` if no square root exists.
    ///
    /// Variable time.
    pub fn sqrt(&self) -> Option<Self> {
        match const { Algorithm::for_modulus(&P::MODULUS) } {
            Algorithm::Shanks => self.sqrt_shanks(),
            Algorithm::TonelliShanks => self.sqrt_tonelli_shanks(),
        }
    }

    /// Shanks algorithm for `q ≡ 3 (mod 4)`.
    ///
    /// For `q = 3 (mod 4)`, sqrt can be computed with only one exponentiation as
    /// `self^((q + 1) / 4) (mod q)`.
    fn sqrt_shanks(&self) -> Option<Self> {
        let mod_plus_1_over_4 = const { P::MODULUS.overflowing_add(&U264::ONE).0.shr_vartime(2) };

        let sqrt = self.pow_vartime(&mod_plus_1_over_4);
        (sqrt.square() == *self).then_some(sqrt)
    }

    /// Tonelli-Shanks algorithm works for every odd prime.
    ///
    /// From <https://eprint.iacr.org/2012/685.pdf> (page 12, algorithm 5)
    fn sqrt_tonelli_shanks(&self) -> Option<Self> {
        if bool::from(self.is_zero()) {
            return Some(Self::ZERO);
        }

        let t_plus_1_over_2 = const { P::T.overflowing_add(&U264::ONE).0.shr_vartime(1) };

        let mut m = P::S;
        let mut c = Self::MULTIPLICATIVE_GENERATOR.pow_vartime(&P::T);
        let mut t = self.pow_vartime(&P::T);
        let mut x = self.pow_vartime(&t_plus_1_over_2);

        while t != Self::ONE {
            // least i with t^(2^i) = 1; reaching m means self is a non-residue
            let mut i = 0;
            let mut t2i = t;
            while t2i != Self::ONE {
                t2i = t2i.square();
                i += 1;
                if i == m {
                    return None;
                }
            }

            let b = c.sqn_vartime(m - i - 1);
            m = i;
            c = b.square();
            t *= c;
            x *= b;
        }

        debug_assert_eq!(x.square(), *self);
        Some(x)
    }
}
