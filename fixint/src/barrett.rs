//! Barrett reduction (HAC 14.42) with radix `b = 2^64`.

use crate::{
    Error, Result, U264,
    limb::{self, Limb, div_rem_into, mul_into, sbb},
    uint::LIMBS,
};
use core::cmp::Ordering;

/// Largest supported modulus width in limbs.
///
/// Beyond four limbs `μ` no longer fits in a [`U264`].
const MAX_MODULUS_LIMBS: usize = 4;

/// Precomputed state for reducing products modulo a fixed `m`.
///
/// Holds `μ = ⌊b^(2k) / m⌋` where `k` is the number of 64-bit limbs of `m`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BarrettContext {
    modulus: U264,
    mu: U264,
    k: usize,
}

impl BarrettContext {
    /// Precompute `μ` for `modulus`.
    ///
    /// Returns [`Error::DivisionByZero`] for a zero modulus and
    /// [`Error::ArithmeticOverflow`] when `μ` does not fit in 264 bits.
    pub fn new(modulus: U264) -> Result<Self> {
        if modulus.is_zero() {
            return Err(Error::DivisionByZero);
        }

        let k = modulus.bits().div_ceil(64) as usize;
        if k > MAX_MODULUS_LIMBS {
            return Err(Error::ArithmeticOverflow);
        }

        // b^(2k)
        let mut num = [0; 2 * MAX_MODULUS_LIMBS + 1];
        num[2 * k] = 1;

        let mut quo = [0; 2 * MAX_MODULUS_LIMBS + 1];
        div_rem_into(&num[..=2 * k], modulus.as_words(), &mut quo[..=2 * k]);
        let mu = U264::from_wide(&quo)?;

        Ok(Self { modulus, mu, k })
    }

    /// Build a context from a modulus and its already-computed `μ`.
    ///
    /// `mu` must equal `⌊2^(128k) / modulus⌋`; a wrong value yields wrong
    /// reductions.
    ///
    /// # Panics
    /// - if `modulus` is zero or wider than four limbs
    pub const fn from_precomputed(modulus: U264, mu: U264) -> Self {
        let k = modulus.bits().div_ceil(64) as usize;
        assert!(k >= 1 && k <= MAX_MODULUS_LIMBS, "unsupported Barrett modulus");
        Self { modulus, mu, k }
    }

    /// The modulus `m`.
    pub const fn modulus(&self) -> &U264 {
        &self.modulus
    }

    /// The precomputed `μ`.
    pub const fn mu(&self) -> &U264 {
        &self.mu
    }

    /// Computes `a mod m`.
    pub fn reduce(&self, a: &U264) -> U264 {
        if *a < self.modulus {
            *a
        } else {
            U264::rem_wide(a.as_words(), &self.modulus)
        }
    }

    /// Computes `(a * b) mod m`.
    pub fn mul_mod(&self, a: &U264, b: &U264) -> U264 {
        let a = self.reduce(a);
        let b = self.reduce(b);
        self.reduce_product(&a.mul_wide(&b))
    }

    /// Computes `a^2 mod m`.
    pub fn square_mod(&self, a: &U264) -> U264 {
        self.mul_mod(a, a)
    }

    /// Computes `base^exp mod m` by left-to-right square-and-multiply.
    pub fn pow_mod(&self, base: &U264, exp: &U264) -> U264 {
        let base = self.reduce(base);
        let mut acc = self.reduce(&U264::ONE);

        for i in (0..exp.bits()).rev() {
            acc = self.square_mod(&acc);
            if exp.bit(i) {
                acc = self.reduce_product(&acc.mul_wide(&base));
            }
        }
        acc
    }

    /// Reduce `x < m^2`.
    fn reduce_product(&self, x: &[Limb; 2 * LIMBS]) -> U264 {
        let k = self.k;

        // q3 = ⌊⌊x / b^(k-1)⌋ * μ / b^(k+1)⌋
        let mut q2 = [0; 2 * LIMBS + 2];
        mul_into(&x[k - 1..2 * k], self.mu.as_words(), &mut q2);
        let q3 = &q2[k + 1..k + 1 + LIMBS];

        // r = (x mod b^(k+1)) - (q3 * m mod b^(k+1)), wrapping mod b^(k+1)
        let mut r2 = [0; 2 * LIMBS];
        mul_into(q3, self.modulus.as_words(), &mut r2);

        let mut r = [0; LIMBS];
        let mut borrow = 0;
        for i in 0..=k {
            (r[i], borrow) = sbb(x[i], r2[i], borrow);
        }

        // 0 <= r < 3m
        let m = self.modulus.as_words();
        for _ in 0..2 {
            if limb::cmp(&r, m) != Ordering::Less {
                limb::sub_assign(&mut r, m);
            }
        }
        debug_assert!(limb::cmp(&r, m) == Ordering::Less);

        U264::from_limbs_unchecked(r)
    }
}
