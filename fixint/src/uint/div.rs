//! Division and remainder.

use super::{LIMBS, U264};
use crate::{
    Error, Result,
    limb::{Limb, div_rem_into},
};

impl U264 {
    /// Computes `(self / rhs, self % rhs)`.
    ///
    /// Returns [`Error::DivisionByZero`] when `rhs` is zero.
    pub fn div_rem(&self, rhs: &Self) -> Result<(Self, Self)> {
        if rhs.is_zero() {
            return Err(Error::DivisionByZero);
        }
        if self < rhs {
            return Ok((Self::ZERO, *self));
        }

        let mut quo = [0; LIMBS];
        let rem = div_rem_into(&self.limbs, &rhs.limbs, &mut quo);
        Ok((
            Self::from_limbs_unchecked(quo),
            Self::from_limbs_unchecked(rem),
        ))
    }

    /// Computes `self / rhs`.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self> {
        self.div_rem(rhs).map(|(quo, _)| quo)
    }

    /// Computes `self % rhs`.
    pub fn checked_rem(&self, rhs: &Self) -> Result<Self> {
        self.div_rem(rhs).map(|(_, rem)| rem)
    }

    /// Reduces a little-endian value of any width modulo a non-zero `modulus`.
    pub(crate) fn rem_wide(wide: &[Limb], modulus: &Self) -> Self {
        debug_assert!(!modulus.is_zero());
        let mut quo = [0; 4 * LIMBS];
        let rem = div_rem_into(wide, &modulus.limbs, &mut quo[..wide.len()]);
        Self::from_limbs_unchecked(rem)
    }
}
