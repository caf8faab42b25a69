//! Bit queries, shifts and bitwise operators.

use super::{LIMBS, U264};
use crate::{Error, Result, limb::Limb};
use core::ops::{BitAnd, BitOr, Shr};

impl U264 {
    /// Number of significant bits; zero for zero.
    pub const fn bits(&self) -> u32 {
        let mut i = LIMBS;
        while i > 0 {
            i -= 1;
            if self.limbs[i] != 0 {
                return (i as u32) * 64 + (64 - self.limbs[i].leading_zeros());
            }
        }
        0
    }

    /// Value of bit `i`; bits at or beyond the capacity read as `false`.
    pub const fn bit(&self, i: u32) -> bool {
        if i >= Self::BITS {
            return false;
        }
        (self.limbs[(i / 64) as usize] >> (i % 64)) & 1 == 1
    }

    /// Computes `self << n`, returning [`Error::ArithmeticOverflow`] if any set bit
    /// would be shifted past 2^264.
    pub fn checked_shl(&self, n: u32) -> Result<Self> {
        if self.is_zero() {
            return Ok(Self::ZERO);
        }
        if self.bits() as u64 + n as u64 > Self::BITS as u64 {
            return Err(Error::ArithmeticOverflow);
        }

        let limb_shift = (n / 64) as usize;
        let bit_shift = n % 64;
        let mut limbs = [0; LIMBS];
        for i in limb_shift..LIMBS {
            let src = i - limb_shift;
            limbs[i] = self.limbs[src] << bit_shift;
            if bit_shift > 0 && src > 0 {
                limbs[i] |= self.limbs[src - 1] >> (64 - bit_shift);
            }
        }
        Ok(Self::from_limbs_unchecked(limbs))
    }

    /// Computes `self >> n`, shifting in zeros.
    pub const fn shr_vartime(&self, n: u32) -> Self {
        if n >= Self::BITS {
            return Self::ZERO;
        }

        let limb_shift = (n / 64) as usize;
        let bit_shift = n % 64;
        let mut limbs = [0; LIMBS];
        let mut i = 0;
        while i + limb_shift < LIMBS {
            let src = i + limb_shift;
            limbs[i] = self.limbs[src] >> bit_shift;
            if bit_shift > 0 && src + 1 < LIMBS {
                limbs[i] |= self.limbs[src + 1] << (64 - bit_shift);
            }
            i += 1;
        }
        Self::from_limbs_unchecked(limbs)
    }

    fn map_limbs(&self, rhs: &Self, f: impl Fn(Limb, Limb) -> Limb) -> Self {
        let mut limbs = [0; LIMBS];
        for (i, limb) in limbs.iter_mut().enumerate() {
            *limb = f(self.limbs[i], rhs.limbs[i]);
        }
        Self::from_limbs_unchecked(limbs)
    }
}

impl Shr<u32> for U264 {
    type Output = U264;

    fn shr(self, n: u32) -> U264 {
        self.shr_vartime(n)
    }
}

impl Shr<u32> for &U264 {
    type Output = U264;

    fn shr(self, n: u32) -> U264 {
        self.shr_vartime(n)
    }
}

impl BitAnd for U264 {
    type Output = U264;

    fn bitand(self, rhs: U264) -> U264 {
        self.map_limbs(&rhs, |a, b| a & b)
    }
}

impl BitAnd<&U264> for &U264 {
    type Output = U264;

    fn bitand(self, rhs: &U264) -> U264 {
        self.map_limbs(rhs, |a, b| a & b)
    }
}

impl BitOr for U264 {
    type Output = U264;

    fn bitor(self, rhs: U264) -> U264 {
        self.map_limbs(&rhs, |a, b| a | b)
    }
}

impl BitOr<&U264> for &U264 {
    type Output = U264;

    fn bitor(self, rhs: &U264) -> U264 {
        self.map_limbs(rhs, |a, b| a | b)
    }
}
